// src/io/demand.rs

use crate::error::{SimError, SimResult};
use crate::io::harvest::parse_quantity;
use crate::io::table::Table;
use crate::model::demand::{DemandLookup, DemandObservation};
use crate::model::reference::ReferenceData;
use tracing::info;

pub const CITY_COLUMN: &str = "city";
pub const CUSTOMER_COLUMN: &str = "customer_id";
pub const MONTH_COLUMN: &str = "month";

/// Demand data in long form plus the aggregated lookup the engine reads.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedDemand {
    pub observations: Vec<DemandObservation>,
    pub lookup: DemandLookup,
}

/// Reshapes wide demand rows (one column per variety) into one observation per
/// `(city, customer, month, variety)`, then sums them by `(month, variety)`.
///
/// City and customer do not survive aggregation: orders are planned against
/// variety totals, not individual customers.
pub fn prepare_demand_data(table: &Table, reference: &ReferenceData) -> SimResult<PreparedDemand> {
    table.ensure_not_empty()?;

    let mut required = vec![CITY_COLUMN, CUSTOMER_COLUMN, MONTH_COLUMN];
    required.extend(reference.varieties.iter().map(|v| v.column_key()));
    let cols = table.require_columns(&required)?;
    let (id_cols, variety_cols) = cols.split_at(3);
    let dataset = table.name();

    let mut observations = Vec::with_capacity(table.len() * variety_cols.len());
    for (idx, row) in table.rows().enumerate() {
        let row_no = idx + 1;
        let month_name = Table::cell(row, id_cols[2]);
        let month = reference
            .month_number(month_name)
            .ok_or_else(|| SimError::UnknownMonth {
                dataset: dataset.to_string(),
                row: row_no,
                name: month_name.to_string(),
            })?;

        for (variety, &col) in reference.varieties.iter().zip(variety_cols) {
            let quantity =
                parse_quantity(dataset, row_no, variety.column_key(), Table::cell(row, col))?;
            observations.push(DemandObservation {
                city: Table::cell(row, id_cols[0]).to_string(),
                customer_id: Table::cell(row, id_cols[1]).to_string(),
                month,
                variety: *variety,
                quantity,
            });
        }
    }

    let lookup = DemandLookup::from_observations(&observations);
    info!(
        observations = observations.len(),
        requirements = lookup.len(),
        "prepared demand data"
    );

    Ok(PreparedDemand {
        observations,
        lookup,
    })
}
