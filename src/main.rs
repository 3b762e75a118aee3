use anyhow::Context;
use clap::{Parser, ValueEnum};
use harvest_po_sim::io::table::Table;
use harvest_po_sim::io::{products, reporting, sample};
use harvest_po_sim::logging;
use harvest_po_sim::model::reference::ReferenceData;
use harvest_po_sim::simulation::config::{SimulationConfig, DEFAULT_PLANNING_LEAD_TIME};
use harvest_po_sim::simulation::run_supply_chain_simulation;
use harvest_po_sim::strategy::implementations::{FreshestFirst, OldestFirst, TieBreak};
use harvest_po_sim::strategy::traits::LotPolicy;
use std::path::PathBuf;
use tracing::info;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyArg {
    FreshestFirst,
    OldestFirst,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum TieBreakArg {
    InputOrder,
    LotId,
}

#[derive(Parser)]
#[command(name = "harvest-po-sim")]
#[command(about = "Run the apple supply chain purchase order simulation", long_about = None)]
struct Cli {
    /// Years to simulate, ascending
    #[arg(long, num_args = 1.., default_values_t = [2021])]
    years: Vec<i32>,

    /// Planning lead time in months
    #[arg(long, default_value_t = DEFAULT_PLANNING_LEAD_TIME)]
    lead_time: u32,

    /// Harvest data CSV (sample data is used when omitted)
    #[arg(long, requires = "demand_data")]
    harvest_data: Option<PathBuf>,

    /// Demand data CSV (sample data is used when omitted)
    #[arg(long, requires = "harvest_data")]
    demand_data: Option<PathBuf>,

    /// Shipping table CSV overriding the built-in port transit times
    #[arg(long)]
    shipping_data: Option<PathBuf>,

    /// Output file for purchase orders
    #[arg(long, default_value = "data/simulated_purchase_orders.csv")]
    output: PathBuf,

    /// Optional CSV listing every unmet target month and variety
    #[arg(long)]
    shortfall_report: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = PolicyArg::FreshestFirst)]
    policy: PolicyArg,

    /// How to order lots harvested in the same month
    #[arg(long, value_enum, default_value_t = TieBreakArg::InputOrder)]
    tie_break: TieBreakArg,

    /// Generate product master data as well
    #[arg(long)]
    generate_products: bool,

    #[arg(long, default_value_t = 45)]
    products_count: usize,

    #[arg(long, default_value = "data/product_master.csv")]
    products_output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let cli = Cli::parse();

    // 1. PRODUCT MASTER (optional)
    if cli.generate_products {
        info!(count = cli.products_count, "generating product records");
        let records = products::generate_products(cli.products_count, &mut rand::thread_rng())?;
        products::write_products(&cli.products_output, &records)
            .context("failed to write product master data")?;
    }

    // 2. LOAD DATA
    let (harvest, demand) = match (&cli.harvest_data, &cli.demand_data) {
        (Some(harvest_path), Some(demand_path)) => {
            info!(
                harvest = %harvest_path.display(),
                demand = %demand_path.display(),
                "loading input data"
            );
            let harvest = Table::from_path("Harvest data", harvest_path)
                .with_context(|| format!("failed to load {}", harvest_path.display()))?;
            let demand = Table::from_path("Demand data", demand_path)
                .with_context(|| format!("failed to load {}", demand_path.display()))?;
            (harvest, demand)
        }
        _ => {
            info!("using sample data for simulation");
            (sample::harvest_table()?, sample::demand_table()?)
        }
    };

    let mut reference = ReferenceData::default();
    if let Some(shipping_path) = &cli.shipping_data {
        let shipping = Table::from_path("Shipping data", shipping_path)
            .with_context(|| format!("failed to load {}", shipping_path.display()))?;
        reference = reference.with_shipping_table(&shipping)?;
    }

    // 3. CONFIGURE
    let config = SimulationConfig {
        simulation_years: cli.years.clone(),
        planning_lead_time_months: cli.lead_time,
    };
    let tie_break = match cli.tie_break {
        TieBreakArg::InputOrder => TieBreak::InputOrder,
        TieBreakArg::LotId => TieBreak::LotId,
    };
    let policy: Box<dyn LotPolicy> = match cli.policy {
        PolicyArg::FreshestFirst => Box::new(FreshestFirst::with_tie_break(tie_break)),
        PolicyArg::OldestFirst => Box::new(OldestFirst::with_tie_break(tie_break)),
    };

    // 4. RUN SIMULATION
    let sim = run_supply_chain_simulation(&harvest, &demand, &reference, config, policy)
        .context("simulation aborted during preparation")?;

    // 5. EXPORT RESULTS
    if sim.purchase_orders.is_empty() {
        info!("no purchase orders were generated");
    } else {
        reporting::write_purchase_orders(&cli.output, &sim.purchase_orders, &reference)
            .context("failed to save purchase orders")?;
    }
    if let Some(path) = &cli.shortfall_report {
        reporting::write_shortfall_report(path, &sim.shortfalls)
            .context("failed to save shortfall report")?;
    }

    // 6. SUMMARY
    let summary = sim.summary();
    println!("\n=== Simulation Summary ===");
    println!("Purchase orders:  {}", summary.purchase_orders);
    println!("Quantity ordered: {:.0}", summary.total_ordered);
    println!("Shortfall:        {:.0}", summary.total_shortfall);
    println!("Fill rate:        {:.1}%", summary.fill_rate() * 100.0);

    Ok(())
}
