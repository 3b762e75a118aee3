// src/io/mod.rs

pub mod demand;
pub mod harvest;
pub mod products;
pub mod reporting;
pub mod sample;
pub mod table;
