// src/io/products.rs

use crate::error::{SimError, SimResult};
use crate::io::reporting::write_rows;
use crate::model::variety::Variety;
use rand::Rng;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Shelf life options in days.
pub const SHELF_LIVES: [u32; 3] = [5, 10, 15];
pub const GRADES: [&str; 3] = ["Small", "Medium", "Large"];
pub const UNITS_OF_MEASURE: [&str; 1] = ["metrictons"];

/// A synthetic product master row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    #[serde(rename = "SKUID")]
    pub sku_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "ShelfLife")]
    pub shelf_life: u32,
    #[serde(rename = "Grade")]
    pub grade: String,
    #[serde(rename = "UnitOfMeasure")]
    pub unit_of_measure: String,
}

fn pick<'a, T, R: Rng>(rng: &mut R, options: &'a [T]) -> &'a T {
    &options[rng.gen_range(0..options.len())]
}

/// Generates `count` products with SKUs `APP0000`, `APP0001`, ... and random
/// variety, shelf life, grade and unit.
pub fn generate_products<R: Rng>(count: usize, rng: &mut R) -> SimResult<Vec<ProductRecord>> {
    if count == 0 {
        return Err(SimError::InvalidConfig(
            "product count must be a positive integer".to_string(),
        ));
    }

    let products = (0..count)
        .map(|i| {
            let variety = pick(rng, &Variety::ALL);
            ProductRecord {
                sku_id: format!("APP{:04}", i),
                name: format!("{} Apple", variety.name()),
                shelf_life: *pick(rng, &SHELF_LIVES),
                grade: pick(rng, &GRADES).to_string(),
                unit_of_measure: pick(rng, &UNITS_OF_MEASURE).to_string(),
            }
        })
        .collect();
    Ok(products)
}

pub fn write_products(file_path: &Path, products: &[ProductRecord]) -> SimResult<()> {
    write_rows(file_path, products)?;
    info!(
        rows = products.len(),
        path = %file_path.display(),
        "exported product master data"
    );
    Ok(())
}
