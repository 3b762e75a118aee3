// src/io/harvest.rs

use crate::error::{SimError, SimResult};
use crate::io::table::Table;
use crate::model::harvest::HarvestRecord;
use crate::model::reference::ReferenceData;
use tracing::{info, warn};

pub const SUPPLIER_COLUMN: &str = "SupplierID";
pub const COUNTRY_COLUMN: &str = "Country";
pub const VARIETY_COLUMN: &str = "Apple Variety";
pub const MONTH_COLUMN: &str = "Harvest Month";
pub const QUANTITY_COLUMN: &str = "Harvest Quantity";

/// Normalizes raw harvest rows.
///
/// Month names become numbers and each row gets its shipping time from
/// `country -> port -> transit days`. A row whose shipping time cannot be
/// resolved is kept but logged; the pool will never match it.
///
/// # Errors
/// * `EmptyDataset` / `MissingColumns` - the table is unusable.
/// * `UnknownMonth` / `UnknownVariety` - a name is not in the reference data.
/// * `InvalidValue` - a quantity is not a non-negative number.
pub fn prepare_harvest_data(
    table: &Table,
    reference: &ReferenceData,
) -> SimResult<Vec<HarvestRecord>> {
    table.ensure_not_empty()?;
    let cols = table.require_columns(&[
        SUPPLIER_COLUMN,
        COUNTRY_COLUMN,
        VARIETY_COLUMN,
        MONTH_COLUMN,
        QUANTITY_COLUMN,
    ])?;
    let dataset = table.name();

    let mut records = Vec::with_capacity(table.len());
    for (idx, row) in table.rows().enumerate() {
        let row_no = idx + 1;
        let supplier_id = Table::cell(row, cols[0]);
        let country = Table::cell(row, cols[1]);
        let variety_name = Table::cell(row, cols[2]);
        let month_name = Table::cell(row, cols[3]);
        let raw_quantity = Table::cell(row, cols[4]);

        let variety = reference
            .variety(variety_name)
            .ok_or_else(|| SimError::UnknownVariety {
                dataset: dataset.to_string(),
                row: row_no,
                name: variety_name.to_string(),
            })?;

        let harvest_month = reference
            .month_number(month_name)
            .ok_or_else(|| SimError::UnknownMonth {
                dataset: dataset.to_string(),
                row: row_no,
                name: month_name.to_string(),
            })?;

        let quantity = parse_quantity(dataset, row_no, QUANTITY_COLUMN, raw_quantity)?;

        let shipping_days = reference.shipping_days(country);
        if shipping_days.is_none() {
            warn!(
                supplier = supplier_id,
                country, "no transit time for country, lot will not be matched"
            );
        }

        records.push(HarvestRecord {
            supplier_id: supplier_id.to_string(),
            country: country.to_string(),
            variety,
            harvest_month,
            quantity,
            shipping_days,
        });
    }

    info!(rows = records.len(), "prepared harvest data");
    Ok(records)
}

/// Parses a non-negative, finite quantity cell.
pub(crate) fn parse_quantity(
    dataset: &str,
    row: usize,
    column: &str,
    raw: &str,
) -> SimResult<f64> {
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(value),
        _ => Err(SimError::InvalidValue {
            dataset: dataset.to_string(),
            row,
            column: column.to_string(),
            value: raw.to_string(),
        }),
    }
}
