// src/model/pool.rs

use crate::error::{SimError, SimResult};
use crate::model::harvest::{HarvestLot, HarvestRecord};
use crate::model::variety::Variety;
use std::collections::HashMap;
use tracing::debug;

/// Quantities below this are treated as zero after subtraction.
pub const QUANTITY_EPSILON: f64 = 1e-9;

/// Every depletable harvest lot of a run, indexed by lot id.
///
/// Lots keep their build order (years outer, harvest rows inner), which is the
/// "input order" used to break freshness ties. A pool belongs to exactly one run.
#[derive(Debug, Clone, Default)]
pub struct SupplyPool {
    lots: Vec<HarvestLot>,
    index: HashMap<String, usize>,
}

impl SupplyPool {
    /// Expands each harvest record into one lot per simulated year.
    pub fn build(records: &[HarvestRecord], years: &[i32]) -> SimResult<Self> {
        let mut pool = Self::default();
        for &year in years {
            for record in records {
                pool.insert(HarvestLot::from_record(record, year))?;
            }
        }
        debug!(lots = pool.len(), years = years.len(), "built supply pool");
        Ok(pool)
    }

    fn insert(&mut self, lot: HarvestLot) -> SimResult<()> {
        if self.index.contains_key(&lot.lot_id) {
            return Err(SimError::DuplicateLot(lot.lot_id));
        }
        self.index.insert(lot.lot_id.clone(), self.lots.len());
        self.lots.push(lot);
        Ok(())
    }

    pub fn get(&self, lot_id: &str) -> Option<&HarvestLot> {
        self.index.get(lot_id).map(|&idx| &self.lots[idx])
    }

    pub fn len(&self) -> usize {
        self.lots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HarvestLot> {
        self.lots.iter()
    }

    pub fn by_variety(&self, variety: Variety) -> impl Iterator<Item = &HarvestLot> {
        self.lots.iter().filter(move |lot| lot.variety == variety)
    }

    /// Lots of `variety` that can be ordered in the simulated month `(year, month)`:
    /// stock left, harvested by then, and a known transit time. Build order is kept.
    pub fn eligible_lots(&self, variety: Variety, year: i32, month: u32) -> Vec<&HarvestLot> {
        self.by_variety(variety)
            .filter(|lot| lot.remaining_quantity > 0.0)
            .filter(|lot| lot.is_harvested_by(year, month))
            .filter(|lot| lot.shipping_days.is_some())
            .collect()
    }

    /// Takes up to `quantity` from a lot and returns what was actually taken.
    ///
    /// Never drives a lot negative; unknown lots and non-positive requests take nothing.
    pub fn try_allocate(&mut self, lot_id: &str, quantity: f64) -> f64 {
        let Some(&idx) = self.index.get(lot_id) else {
            return 0.0;
        };
        if quantity.is_nan() || quantity <= 0.0 {
            return 0.0;
        }

        let lot = &mut self.lots[idx];
        let taken = quantity.min(lot.remaining_quantity);
        lot.remaining_quantity -= taken;
        if lot.remaining_quantity < QUANTITY_EPSILON {
            lot.remaining_quantity = 0.0;
        }
        taken
    }

    pub fn total_remaining(&self) -> f64 {
        self.lots.iter().map(|lot| lot.remaining_quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(supplier: &str, variety: Variety, month: u32, qty: f64) -> HarvestRecord {
        HarvestRecord {
            supplier_id: supplier.to_string(),
            country: "Chile".to_string(),
            variety,
            harvest_month: month,
            quantity: qty,
            shipping_days: Some(26),
        }
    }

    #[test]
    fn builds_one_lot_per_record_and_year() {
        let records = vec![
            record("S1", Variety::Fuji, 3, 100.0),
            record("S1", Variety::Fuji, 4, 200.0),
            record("S2", Variety::Fuji, 3, 300.0),
        ];
        let pool = SupplyPool::build(&records, &[2021, 2022]).unwrap();

        assert_eq!(pool.len(), 6);
        let ids: std::collections::HashSet<_> = pool.iter().map(|l| l.lot_id.clone()).collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(pool.get("S2_Fuji_3_2022").unwrap().original_quantity, 300.0);
        assert_eq!(pool.total_remaining(), 1200.0);
    }

    #[test]
    fn colliding_lot_ids_are_rejected() {
        let records = vec![
            record("S1", Variety::Fuji, 3, 100.0),
            record("S1", Variety::Fuji, 3, 50.0),
        ];
        match SupplyPool::build(&records, &[2021]) {
            Err(SimError::DuplicateLot(id)) => assert_eq!(id, "S1_Fuji_3_2021"),
            other => panic!("expected DuplicateLot, got {:?}", other),
        }
    }

    #[test]
    fn try_allocate_caps_at_remaining() {
        let mut pool = SupplyPool::build(&[record("S1", Variety::Fuji, 3, 100.0)], &[2021]).unwrap();

        assert_eq!(pool.try_allocate("S1_Fuji_3_2021", 60.0), 60.0);
        assert_eq!(pool.try_allocate("S1_Fuji_3_2021", 60.0), 40.0);
        assert_eq!(pool.try_allocate("S1_Fuji_3_2021", 60.0), 0.0);
        assert_eq!(pool.get("S1_Fuji_3_2021").unwrap().remaining_quantity(), 0.0);

        assert_eq!(pool.try_allocate("missing", 10.0), 0.0);
        assert_eq!(pool.try_allocate("S1_Fuji_3_2021", -5.0), 0.0);
    }

    #[test]
    fn near_zero_remainders_clamp_to_zero() {
        let mut pool = SupplyPool::build(&[record("S1", Variety::Fuji, 3, 0.3)], &[2021]).unwrap();
        pool.try_allocate("S1_Fuji_3_2021", 0.1);
        pool.try_allocate("S1_Fuji_3_2021", 0.2);
        let lot = pool.get("S1_Fuji_3_2021").unwrap();
        assert!(lot.remaining_quantity() >= 0.0);
        assert!(lot.remaining_quantity() < QUANTITY_EPSILON);
    }

    #[test]
    fn eligibility_respects_harvest_date_stock_and_transit() {
        let mut no_port = record("S9", Variety::Fuji, 1, 100.0);
        no_port.shipping_days = None;
        let records = vec![
            record("S1", Variety::Fuji, 3, 100.0),
            record("S1", Variety::Fuji, 9, 100.0),
            record("S1", Variety::PinkLady, 3, 100.0),
            no_port,
        ];
        let mut pool = SupplyPool::build(&records, &[2021, 2022]).unwrap();

        let ids = |pool: &SupplyPool, year, month| -> Vec<String> {
            pool.eligible_lots(Variety::Fuji, year, month)
                .into_iter()
                .map(|l| l.lot_id.clone())
                .collect()
        };

        assert_eq!(ids(&pool, 2021, 2), Vec::<String>::new());
        assert_eq!(ids(&pool, 2021, 3), vec!["S1_Fuji_3_2021"]);
        assert_eq!(
            ids(&pool, 2022, 3),
            vec!["S1_Fuji_3_2021", "S1_Fuji_9_2021", "S1_Fuji_3_2022"]
        );

        pool.try_allocate("S1_Fuji_3_2021", 100.0);
        assert_eq!(ids(&pool, 2021, 12), vec!["S1_Fuji_9_2021"]);
    }
}
