// src/model/mod.rs

pub mod demand;
pub mod harvest;
pub mod order;
pub mod pool;
pub mod reference;
pub mod variety;
