// src/strategy/mod.rs

pub mod implementations;
pub mod traits;
