// src/simulation/engine.rs

use crate::error::SimResult;
use crate::model::demand::DemandLookup;
use crate::model::order::{po_id, PurchaseOrder, ShortfallWarning};
use crate::model::pool::{SupplyPool, QUANTITY_EPSILON};
use crate::model::variety::Variety;
use crate::simulation::config::{PlanningPeriod, SimulationConfig};
use crate::strategy::traits::LotPolicy;
use chrono::{Datelike, Days, NaiveDate};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// Running totals for one `(target month, variety)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Fulfillment {
    pub required: f64,
    pub fulfilled: f64,
}

impl Fulfillment {
    pub fn unmet(&self) -> f64 {
        let unmet = self.required - self.fulfilled;
        if unmet < QUANTITY_EPSILON {
            0.0
        } else {
            unmet
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    pub purchase_orders: usize,
    pub total_required: f64,
    pub total_ordered: f64,
    pub total_shortfall: f64,
}

impl RunSummary {
    /// Share of planned demand covered by orders, 1.0 when nothing was required.
    pub fn fill_rate(&self) -> f64 {
        if self.total_required <= 0.0 {
            1.0
        } else {
            self.total_ordered / self.total_required
        }
    }
}

/// The month-by-month allocation run.
///
/// Owns its supply pool outright: depletion is destructive and order dependent,
/// so concurrent runs each need their own pool.
pub struct PlanningSimulation {
    config: SimulationConfig,
    schedule: Vec<PlanningPeriod>,
    policy: Box<dyn LotPolicy>,

    // State
    pub pool: SupplyPool,
    demand: DemandLookup,

    // Outputs
    pub purchase_orders: Vec<PurchaseOrder>,
    pub shortfalls: Vec<ShortfallWarning>,
    pub ledger: BTreeMap<(NaiveDate, Variety), Fulfillment>,
    next_po_number: u32,
}

impl PlanningSimulation {
    pub fn new(
        config: SimulationConfig,
        pool: SupplyPool,
        demand: DemandLookup,
        policy: Box<dyn LotPolicy>,
    ) -> SimResult<Self> {
        let schedule = config.schedule()?;

        Ok(Self {
            config,
            schedule,
            policy,
            pool,
            demand,
            purchase_orders: Vec::new(),
            shortfalls: Vec::new(),
            ledger: BTreeMap::new(),
            next_po_number: 1,
        })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Walks every simulated month once. Shortfalls are recorded, never raised.
    pub fn run(&mut self) {
        info!(
            years = ?self.config.simulation_years,
            lead_time_months = self.config.planning_lead_time_months,
            policy = self.policy.name(),
            "starting PO simulation"
        );

        let schedule = self.schedule.clone();
        for period in schedule {
            self.step(period);
        }

        let summary = self.summary();
        info!(
            purchase_orders = summary.purchase_orders,
            ordered = summary.total_ordered,
            shortfall = summary.total_shortfall,
            fill_rate = %format!("{:.1}%", summary.fill_rate() * 100.0),
            "simulation complete"
        );
    }

    fn step(&mut self, period: PlanningPeriod) {
        debug!(
            month = %period.order_date.format("%Y-%m"),
            target = %period.target_month.format("%Y-%m"),
            "simulating month"
        );

        let requirements = self.demand.for_month(period.target_month.month());
        if requirements.is_empty() {
            debug!(
                target = %period.target_month.format("%Y-%m"),
                "no demand for target month, skipping"
            );
            return;
        }

        for requirement in requirements {
            if requirement.quantity <= 0.0 {
                continue;
            }
            self.plan_variety(period, requirement.variety, requirement.quantity);
        }
    }

    /// Covers one variety's target-month demand from eligible lots, greedily in
    /// policy order.
    fn plan_variety(&mut self, period: PlanningPeriod, variety: Variety, needed: f64) {
        let candidates: Vec<(String, u32)> = {
            let mut lots = self.pool.eligible_lots(variety, period.year(), period.month());
            self.policy.rank(&mut lots);
            lots.into_iter()
                .filter_map(|lot| lot.shipping_days.map(|days| (lot.lot_id.clone(), days)))
                .collect()
        };

        if candidates.is_empty() {
            debug!(
                %variety,
                harvested_by = %period.order_date.format("%Y-%m"),
                "no eligible supply"
            );
        }

        let key = (period.target_month, variety);
        self.ledger.entry(key).or_default().required = needed;

        let mut remaining_needed = needed;
        for (lot_id, shipping_days) in candidates {
            if remaining_needed < QUANTITY_EPSILON {
                break;
            }

            let taken = self.pool.try_allocate(&lot_id, remaining_needed);
            if taken <= 0.0 {
                continue;
            }
            let Some(lot) = self.pool.get(&lot_id) else {
                continue;
            };

            let po = PurchaseOrder {
                po_id: po_id(self.next_po_number),
                order_date: period.order_date,
                supplier_id: lot.supplier_id.clone(),
                country: lot.country.clone(),
                variety,
                quantity_ordered: taken,
                harvest_month: lot.harvest_month,
                harvest_year: lot.harvest_year,
                expected_arrival_date: period.order_date + Days::new(u64::from(shipping_days)),
                demand_month_target: period.target_month,
                source_lot_id: lot_id,
            };
            self.next_po_number += 1;

            debug!(
                po = %po.po_id,
                quantity = taken,
                %variety,
                supplier = %po.supplier_id,
                lot = %po.source_lot_id,
                arrival = %po.expected_arrival_date,
                "placed purchase order"
            );

            remaining_needed -= taken;
            if remaining_needed < QUANTITY_EPSILON {
                remaining_needed = 0.0;
            }
            if let Some(entry) = self.ledger.get_mut(&key) {
                entry.fulfilled += taken;
            }
            self.purchase_orders.push(po);
        }

        if remaining_needed > 0.0 {
            warn!(
                %variety,
                target = %period.target_month.format("%Y-%m"),
                shortfall = %format!("{:.0}", remaining_needed),
                "could not fully meet demand"
            );
            self.shortfalls.push(ShortfallWarning {
                order_date: period.order_date,
                demand_month_target: period.target_month,
                variety,
                required: needed,
                unmet_quantity: remaining_needed,
            });
        }
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            purchase_orders: self.purchase_orders.len(),
            total_required: self.ledger.values().map(|f| f.required).sum(),
            total_ordered: self.purchase_orders.iter().map(|po| po.quantity_ordered).sum(),
            total_shortfall: self.shortfalls.iter().map(|s| s.unmet_quantity).sum(),
        }
    }

    /// Ordered quantity per source lot.
    pub fn ordered_by_lot(&self) -> BTreeMap<&str, f64> {
        let mut totals = BTreeMap::new();
        for po in &self.purchase_orders {
            *totals.entry(po.source_lot_id.as_str()).or_insert(0.0) += po.quantity_ordered;
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::demand::DemandObservation;
    use crate::model::harvest::HarvestRecord;
    use crate::strategy::implementations::{FreshestFirst, OldestFirst};

    fn record(supplier: &str, month: u32, qty: f64) -> HarvestRecord {
        HarvestRecord {
            supplier_id: supplier.to_string(),
            country: "India".to_string(),
            variety: Variety::RoyalGala,
            harvest_month: month,
            quantity: qty,
            shipping_days: Some(30),
        }
    }

    fn demand(month: u32, qty: f64) -> DemandLookup {
        DemandLookup::from_observations(&[DemandObservation {
            city: "Berlin".to_string(),
            customer_id: "EDEKA".to_string(),
            month,
            variety: Variety::RoyalGala,
            quantity: qty,
        }])
    }

    fn simulate(
        records: &[HarvestRecord],
        demand: DemandLookup,
        policy: Box<dyn LotPolicy>,
    ) -> PlanningSimulation {
        let config = SimulationConfig::default();
        let pool = SupplyPool::build(records, &config.simulation_years).unwrap();
        let mut sim = PlanningSimulation::new(config, pool, demand, policy).unwrap();
        sim.run();
        sim
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_lot_covers_demand_three_months_ahead() {
        let sim = simulate(
            &[record("S1", 8, 600.0)],
            demand(11, 500.0),
            Box::new(FreshestFirst::new()),
        );

        assert_eq!(sim.purchase_orders.len(), 1);
        let po = &sim.purchase_orders[0];
        assert_eq!(po.po_id, "PO_00001");
        assert_eq!(po.quantity_ordered, 500.0);
        assert_eq!(po.order_date, date(2021, 8, 1));
        assert_eq!(po.expected_arrival_date, date(2021, 8, 31));
        assert_eq!(po.demand_month_target, date(2021, 11, 1));
        assert_eq!(po.source_lot_id, "S1_Royal Gala_8_2021");
        assert_eq!(
            sim.pool.get("S1_Royal Gala_8_2021").unwrap().remaining_quantity(),
            100.0
        );
        assert!(sim.shortfalls.is_empty());
    }

    #[test]
    fn no_eligible_supply_records_full_shortfall() {
        let sim = simulate(
            &[record("S1", 10, 600.0)],
            demand(11, 500.0),
            Box::new(FreshestFirst::new()),
        );

        assert!(sim.purchase_orders.is_empty());
        assert_eq!(sim.shortfalls.len(), 1);
        let shortfall = &sim.shortfalls[0];
        assert_eq!(shortfall.unmet_quantity, 500.0);
        assert_eq!(shortfall.demand_month_target, date(2021, 11, 1));
        assert_eq!(sim.summary().fill_rate(), 0.0);
    }

    #[test]
    fn fresher_lot_is_consumed_first() {
        let sim = simulate(
            &[record("S1", 6, 300.0), record("S2", 8, 400.0)],
            demand(11, 500.0),
            Box::new(FreshestFirst::new()),
        );

        let orders: Vec<(&str, f64)> = sim
            .purchase_orders
            .iter()
            .map(|po| (po.source_lot_id.as_str(), po.quantity_ordered))
            .collect();
        assert_eq!(
            orders,
            vec![("S2_Royal Gala_8_2021", 400.0), ("S1_Royal Gala_6_2021", 100.0)]
        );
        assert_eq!(sim.purchase_orders[1].po_id, "PO_00002");
        assert!(sim.shortfalls.is_empty());
    }

    #[test]
    fn oldest_first_flips_the_draw_order() {
        let sim = simulate(
            &[record("S1", 6, 300.0), record("S2", 8, 400.0)],
            demand(11, 500.0),
            Box::new(OldestFirst::new()),
        );
        assert_eq!(sim.purchase_orders[0].source_lot_id, "S1_Royal Gala_6_2021");
        assert_eq!(sim.purchase_orders[0].quantity_ordered, 300.0);
        assert_eq!(sim.purchase_orders[1].quantity_ordered, 200.0);
    }

    #[test]
    fn partial_cover_records_remaining_shortfall() {
        let sim = simulate(
            &[record("S1", 8, 350.0)],
            demand(11, 500.0),
            Box::new(FreshestFirst::new()),
        );

        assert_eq!(sim.purchase_orders.len(), 1);
        assert_eq!(sim.shortfalls.len(), 1);
        assert_eq!(sim.shortfalls[0].unmet_quantity, 150.0);

        let ledger = sim.ledger[&(date(2021, 11, 1), Variety::RoyalGala)];
        assert_eq!(ledger.required, 500.0);
        assert_eq!(ledger.fulfilled, 350.0);
        assert_eq!(ledger.unmet(), 150.0);
    }

    #[test]
    fn lots_without_transit_time_are_never_matched() {
        let mut no_port = record("S9", 8, 600.0);
        no_port.shipping_days = None;
        let sim = simulate(&[no_port], demand(11, 500.0), Box::new(FreshestFirst::new()));

        assert!(sim.purchase_orders.is_empty());
        assert_eq!(sim.shortfalls.len(), 1);
    }

    #[test]
    fn depleted_stock_is_not_reused_for_later_months() {
        let demand = DemandLookup::from_observations(&[
            DemandObservation {
                city: "Berlin".to_string(),
                customer_id: "EDEKA".to_string(),
                month: 11,
                variety: Variety::RoyalGala,
                quantity: 400.0,
            },
            DemandObservation {
                city: "Berlin".to_string(),
                customer_id: "EDEKA".to_string(),
                month: 12,
                variety: Variety::RoyalGala,
                quantity: 400.0,
            },
        ]);
        let sim = simulate(&[record("S1", 8, 600.0)], demand, Box::new(FreshestFirst::new()));

        assert_eq!(sim.purchase_orders.len(), 2);
        assert_eq!(sim.purchase_orders[1].quantity_ordered, 200.0);
        assert_eq!(sim.ordered_by_lot()["S1_Royal Gala_8_2021"], 600.0);
        assert_eq!(sim.pool.total_remaining(), 0.0);
        assert_eq!(sim.shortfalls[0].unmet_quantity, 200.0);
    }
}
