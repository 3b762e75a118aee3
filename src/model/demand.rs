// src/model/demand.rs

use crate::model::variety::Variety;
use std::collections::BTreeMap;

/// One customer's demand for one variety in one month (long form).
#[derive(Debug, Clone, PartialEq)]
pub struct DemandObservation {
    pub city: String,
    pub customer_id: String,
    pub month: u32,
    pub variety: Variety,
    pub quantity: f64,
}

/// Total demand for a variety in a calendar month, summed over all customers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemandRequirement {
    pub month: u32,
    pub variety: Variety,
    pub quantity: f64,
}

/// Read-only `(month, variety) -> quantity` lookup.
///
/// Keyed by calendar month only: the same totals apply to every simulated year.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DemandLookup {
    totals: BTreeMap<(u32, Variety), f64>,
}

impl DemandLookup {
    pub fn from_observations(observations: &[DemandObservation]) -> Self {
        let mut totals = BTreeMap::new();
        for obs in observations {
            *totals.entry((obs.month, obs.variety)).or_insert(0.0) += obs.quantity;
        }
        Self { totals }
    }

    pub fn get(&self, month: u32, variety: Variety) -> Option<f64> {
        self.totals.get(&(month, variety)).copied()
    }

    /// All requirements recorded for a calendar month, in variety order.
    pub fn for_month(&self, month: u32) -> Vec<DemandRequirement> {
        self.totals
            .range((month, Variety::RoyalGala)..=(month, Variety::PinkLady))
            .map(|(&(month, variety), &quantity)| DemandRequirement {
                month,
                variety,
                quantity,
            })
            .collect()
    }

    pub fn requirements(&self) -> impl Iterator<Item = DemandRequirement> + '_ {
        self.totals
            .iter()
            .map(|(&(month, variety), &quantity)| DemandRequirement {
                month,
                variety,
                quantity,
            })
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
