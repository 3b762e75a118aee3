// src/strategy/traits.rs

use crate::model::harvest::HarvestLot;
use std::fmt::Debug;

/// Decides the order in which eligible lots are drawn down for one variety.
///
/// The engine walks the ranked list greedily, so the policy alone determines
/// which supplier's stock is consumed first.
pub trait LotPolicy: Debug + Send + Sync {
    fn name(&self) -> &'static str;

    /// Sorts `lots` in place, first-to-consume first.
    ///
    /// `lots` arrive in pool build order; implementations must sort stably so
    /// that order survives wherever the policy sees a tie.
    fn rank(&self, lots: &mut [&HarvestLot]);
}
