// src/lib.rs

//! Purchase order simulation for a multi-supplier apple supply chain.
//!
//! Harvest availability and customer demand go in; a time-ordered list of
//! purchase orders (plus shortfall diagnostics) comes out. Each simulated month
//! plans for the demand `planning_lead_time_months` ahead, drawing down eligible
//! harvest lots freshest first.

pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use error::{SimError, SimResult};
