// src/io/reporting.rs

use crate::error::SimResult;
use crate::model::order::{PurchaseOrder, PurchaseOrderRow, ShortfallRow, ShortfallWarning};
use crate::model::reference::ReferenceData;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// Writes the purchase orders to a CSV file, one row per order.
///
/// # Arguments
/// * `file_path` - Destination (e.g. "data/simulated_purchase_orders.csv"); parent
///   directories are created.
/// * `orders` - Orders in the sequence the engine placed them.
/// * `reference` - Used to render harvest months by name.
pub fn write_purchase_orders(
    file_path: &Path,
    orders: &[PurchaseOrder],
    reference: &ReferenceData,
) -> SimResult<()> {
    let rows: Vec<PurchaseOrderRow> = orders
        .iter()
        .map(|po| PurchaseOrderRow::from_order(po, reference))
        .collect();
    write_rows(file_path, &rows)?;

    info!(
        rows = rows.len(),
        path = %file_path.display(),
        "exported purchase orders"
    );
    Ok(())
}

/// Writes one row per shortfall: target month, variety, required, fulfilled, unmet.
pub fn write_shortfall_report(file_path: &Path, shortfalls: &[ShortfallWarning]) -> SimResult<()> {
    let rows: Vec<ShortfallRow> = shortfalls.iter().map(ShortfallRow::from).collect();
    write_rows(file_path, &rows)?;

    info!(
        rows = rows.len(),
        path = %file_path.display(),
        "exported shortfall report"
    );
    Ok(())
}

pub(crate) fn write_rows<T: Serialize>(file_path: &Path, rows: &[T]) -> SimResult<()> {
    if let Some(parent) = file_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut wtr = csv::Writer::from_path(file_path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
