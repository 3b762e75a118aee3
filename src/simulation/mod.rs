// src/simulation/mod.rs

pub mod config;
pub mod engine;

use crate::error::SimResult;
use crate::io::demand::prepare_demand_data;
use crate::io::harvest::prepare_harvest_data;
use crate::io::table::Table;
use crate::model::pool::SupplyPool;
use crate::model::reference::ReferenceData;
use crate::simulation::config::SimulationConfig;
use crate::simulation::engine::PlanningSimulation;
use crate::strategy::traits::LotPolicy;

/// Prepares both datasets, builds a fresh supply pool and runs the allocation.
///
/// Any preparation failure is returned before a single order is placed.
pub fn run_supply_chain_simulation(
    harvest: &Table,
    demand: &Table,
    reference: &ReferenceData,
    config: SimulationConfig,
    policy: Box<dyn LotPolicy>,
) -> SimResult<PlanningSimulation> {
    config.validate()?;

    let harvest_records = prepare_harvest_data(harvest, reference)?;
    let prepared_demand = prepare_demand_data(demand, reference)?;
    let pool = SupplyPool::build(&harvest_records, &config.simulation_years)?;

    let mut sim = PlanningSimulation::new(config, pool, prepared_demand.lookup, policy)?;
    sim.run();
    Ok(sim)
}
