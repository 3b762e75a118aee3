// src/strategy/implementations.rs

use crate::model::harvest::HarvestLot;
use crate::strategy::traits::LotPolicy;
use std::cmp::Ordering;

/// How to order lots harvested in the same month of the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// Keep pool build order.
    #[default]
    InputOrder,
    /// Lexical lot id, independent of how the input rows were ordered.
    LotId,
}

impl TieBreak {
    fn compare(&self, a: &HarvestLot, b: &HarvestLot) -> Ordering {
        match self {
            TieBreak::InputOrder => Ordering::Equal,
            TieBreak::LotId => a.lot_id.cmp(&b.lot_id),
        }
    }
}

fn harvest_date(lot: &HarvestLot) -> (i32, u32) {
    (lot.harvest_year, lot.harvest_month)
}

// =========================================================================
// 1. Freshest First
// =========================================================================

/// Consumes the most recently harvested stock first: year descending, then
/// harvest month descending. Produce quality tracks recency.
#[derive(Debug, Clone, Default)]
pub struct FreshestFirst {
    tie_break: TieBreak,
}

impl FreshestFirst {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }
}

impl LotPolicy for FreshestFirst {
    fn name(&self) -> &'static str {
        "freshest-first"
    }

    fn rank(&self, lots: &mut [&HarvestLot]) {
        lots.sort_by(|a, b| {
            harvest_date(b)
                .cmp(&harvest_date(a))
                .then_with(|| self.tie_break.compare(a, b))
        });
    }
}

// =========================================================================
// 2. Oldest First (FIFO)
// =========================================================================

/// Classic FIFO: the oldest eligible harvest is consumed first.
/// Useful as a baseline against the freshest-first policy.
#[derive(Debug, Clone, Default)]
pub struct OldestFirst {
    tie_break: TieBreak,
}

impl OldestFirst {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tie_break(tie_break: TieBreak) -> Self {
        Self { tie_break }
    }
}

impl LotPolicy for OldestFirst {
    fn name(&self) -> &'static str {
        "oldest-first"
    }

    fn rank(&self, lots: &mut [&HarvestLot]) {
        lots.sort_by(|a, b| {
            harvest_date(a)
                .cmp(&harvest_date(b))
                .then_with(|| self.tie_break.compare(a, b))
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::harvest::HarvestRecord;
    use crate::model::variety::Variety;

    fn lot(supplier: &str, month: u32, year: i32) -> HarvestLot {
        let record = HarvestRecord {
            supplier_id: supplier.to_string(),
            country: "Chile".to_string(),
            variety: Variety::Fuji,
            harvest_month: month,
            quantity: 10.0,
            shipping_days: Some(26),
        };
        HarvestLot::from_record(&record, year)
    }

    fn ranked_ids(policy: &dyn LotPolicy, lots: &[HarvestLot]) -> Vec<String> {
        let mut refs: Vec<&HarvestLot> = lots.iter().collect();
        policy.rank(&mut refs);
        refs.into_iter().map(|l| l.lot_id.clone()).collect()
    }

    #[test]
    fn freshest_first_orders_by_year_then_month_descending() {
        let lots = vec![
            lot("S1", 11, 2020),
            lot("S1", 3, 2021),
            lot("S1", 6, 2021),
            lot("S1", 1, 2021),
        ];
        assert_eq!(
            ranked_ids(&FreshestFirst::new(), &lots),
            vec!["S1_Fuji_6_2021", "S1_Fuji_3_2021", "S1_Fuji_1_2021", "S1_Fuji_11_2020"]
        );
    }

    #[test]
    fn oldest_first_is_the_reverse() {
        let lots = vec![lot("S1", 6, 2021), lot("S1", 11, 2020), lot("S1", 3, 2021)];
        assert_eq!(
            ranked_ids(&OldestFirst::new(), &lots),
            vec!["S1_Fuji_11_2020", "S1_Fuji_3_2021", "S1_Fuji_6_2021"]
        );
    }

    #[test]
    fn ties_keep_input_order_unless_lot_id_requested() {
        let lots = vec![lot("S4", 3, 2021), lot("S2", 3, 2021), lot("S3", 3, 2021)];

        assert_eq!(
            ranked_ids(&FreshestFirst::new(), &lots),
            vec!["S4_Fuji_3_2021", "S2_Fuji_3_2021", "S3_Fuji_3_2021"]
        );
        assert_eq!(
            ranked_ids(&FreshestFirst::with_tie_break(TieBreak::LotId), &lots),
            vec!["S2_Fuji_3_2021", "S3_Fuji_3_2021", "S4_Fuji_3_2021"]
        );
    }
}
