// src/model/harvest.rs

use crate::model::variety::Variety;

/// A harvest row after preparation: month resolved to a number and the
/// shipping time resolved from the supplier's country.
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestRecord {
    pub supplier_id: String,
    pub country: String,
    pub variety: Variety,
    pub harvest_month: u32,
    pub quantity: f64,
    /// `None` when the country has no port or the port no transit time.
    pub shipping_days: Option<u32>,
}

/// One harvest record instantiated for one simulated year.
///
/// `remaining_quantity` only ever decreases, and only through
/// [`crate::model::pool::SupplyPool::try_allocate`].
#[derive(Debug, Clone, PartialEq)]
pub struct HarvestLot {
    pub lot_id: String,
    pub supplier_id: String,
    pub country: String,
    pub variety: Variety,
    pub harvest_month: u32,
    pub harvest_year: i32,
    pub original_quantity: f64,
    pub(crate) remaining_quantity: f64,
    pub shipping_days: Option<u32>,
}

impl HarvestLot {
    pub fn from_record(record: &HarvestRecord, year: i32) -> Self {
        Self {
            lot_id: lot_id(&record.supplier_id, record.variety, record.harvest_month, year),
            supplier_id: record.supplier_id.clone(),
            country: record.country.clone(),
            variety: record.variety,
            harvest_month: record.harvest_month,
            harvest_year: year,
            original_quantity: record.quantity,
            remaining_quantity: record.quantity,
            shipping_days: record.shipping_days,
        }
    }

    pub fn remaining_quantity(&self) -> f64 {
        self.remaining_quantity
    }

    pub fn allocated_quantity(&self) -> f64 {
        self.original_quantity - self.remaining_quantity
    }

    /// Harvested in or before the given simulated month.
    pub fn is_harvested_by(&self, year: i32, month: u32) -> bool {
        self.harvest_year < year || (self.harvest_year == year && self.harvest_month <= month)
    }
}

/// `S1_Royal Gala_8_2021`
pub fn lot_id(supplier_id: &str, variety: Variety, month: u32, year: i32) -> String {
    format!("{}_{}_{}_{}", supplier_id, variety.name(), month, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> HarvestRecord {
        HarvestRecord {
            supplier_id: "S1".to_string(),
            country: "India".to_string(),
            variety: Variety::RoyalGala,
            harvest_month: 8,
            quantity: 600.0,
            shipping_days: Some(30),
        }
    }

    #[test]
    fn lot_starts_full() {
        let lot = HarvestLot::from_record(&record(), 2021);
        assert_eq!(lot.lot_id, "S1_Royal Gala_8_2021");
        assert_eq!(lot.remaining_quantity(), 600.0);
        assert_eq!(lot.allocated_quantity(), 0.0);
    }

    #[test]
    fn harvested_by_compares_year_then_month() {
        let lot = HarvestLot::from_record(&record(), 2021);
        assert!(lot.is_harvested_by(2021, 8));
        assert!(lot.is_harvested_by(2021, 12));
        assert!(lot.is_harvested_by(2022, 1));
        assert!(!lot.is_harvested_by(2021, 7));
        assert!(!lot.is_harvested_by(2020, 12));
    }
}
