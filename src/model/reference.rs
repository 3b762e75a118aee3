// src/model/reference.rs

use crate::error::{SimError, SimResult};
use crate::io::table::Table;
use crate::model::variety::Variety;
use std::collections::HashMap;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const COUNTRY_PORTS: [(&str, &str); 4] = [
    ("India", "Jawaharlal Nehru Port Sheva Navi Mumbai"),
    ("South Africa", "Port of Cape Town"),
    ("Chile", "Port of San Antonio"),
    ("New Zealand", "Ports of Auckland"),
];

// Average transit to Rotterdam.
const PORT_TRANSIT_DAYS: [(&str, u32); 4] = [
    ("Jawaharlal Nehru Port Sheva Navi Mumbai", 30),
    ("Port of Cape Town", 25),
    ("Port of San Antonio", 26),
    ("Ports of Auckland", 58),
];

pub const SHIPPING_PORT_COLUMN: &str = "Origin Port";
pub const SHIPPING_DAYS_COLUMN: &str = "Average Shipping Time (Days)";

/// Static lookup tables shared (read-only) by the preparers.
///
/// Passed explicitly so tests can swap in their own tables.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    pub varieties: Vec<Variety>,
    /// Index `n` holds the name of month `n + 1`.
    pub month_names: Vec<String>,
    pub country_ports: HashMap<String, String>,
    pub port_transit_days: HashMap<String, u32>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            varieties: Variety::ALL.to_vec(),
            month_names: MONTH_NAMES.iter().map(|m| m.to_string()).collect(),
            country_ports: COUNTRY_PORTS
                .iter()
                .map(|(c, p)| (c.to_string(), p.to_string()))
                .collect(),
            port_transit_days: PORT_TRANSIT_DAYS
                .iter()
                .map(|(p, d)| (p.to_string(), *d))
                .collect(),
        }
    }
}

impl ReferenceData {
    /// Replaces the transit-time table with the one in a shipping CSV
    /// (`Origin Port`, `Average Shipping Time (Days)`; other columns are ignored).
    pub fn with_shipping_table(mut self, table: &Table) -> SimResult<Self> {
        table.ensure_not_empty()?;
        let cols = table.require_columns(&[SHIPPING_PORT_COLUMN, SHIPPING_DAYS_COLUMN])?;

        let mut transit = HashMap::new();
        for (row, record) in table.rows().enumerate() {
            let port = Table::cell(record, cols[0]);
            let raw_days = Table::cell(record, cols[1]);
            let days: u32 = raw_days.parse().map_err(|_| SimError::InvalidValue {
                dataset: table.name().to_string(),
                row: row + 1,
                column: SHIPPING_DAYS_COLUMN.to_string(),
                value: raw_days.to_string(),
            })?;
            transit.insert(port.to_string(), days);
        }

        self.port_transit_days = transit;
        Ok(self)
    }

    /// Month number (1-12) for a month name.
    pub fn month_number(&self, name: &str) -> Option<u32> {
        self.month_names
            .iter()
            .position(|m| m == name)
            .map(|idx| idx as u32 + 1)
    }

    pub fn month_name(&self, month: u32) -> Option<&str> {
        let idx = usize::try_from(month).ok()?.checked_sub(1)?;
        self.month_names.get(idx).map(String::as_str)
    }

    /// Accepts a variety name only if it is one of the configured varieties.
    pub fn variety(&self, name: &str) -> Option<Variety> {
        Variety::from_name(name).filter(|v| self.varieties.contains(v))
    }

    /// Transit days for a supplier country, via its port.
    ///
    /// `None` when either the country has no port or the port has no known transit time.
    pub fn shipping_days(&self, country: &str) -> Option<u32> {
        let port = self.country_ports.get(country)?;
        self.port_transit_days.get(port).copied()
    }
}
