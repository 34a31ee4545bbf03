//! A small planner CLI: reads a JSON scenario, solves it, and prints the
//! placements and a per-strategy summary table.
//!
//! Scenario format:
//!
//! ```json
//! {
//!   "grid": [["protected", "powered"], ["powered", "blocked"]],
//!   "instances": [
//!     { "id": 1, "label": "vent", "shape": [[true]], "needsProtection": true }
//!   ]
//! }
//! ```
//!
//! Run with: `cargo run --example planner_cli -- scenario.json`

use std::path::PathBuf;

use clap::Parser;
use serde::Deserialize;

use gridfit::solver::{
    engine::PlacementEngine,
    grid::{CellState, Grid},
    instance::{ComponentInstance, InstanceId},
    search::SearchConfig,
    shape::ShapeMask,
    stats::render_report_table,
};

#[derive(Parser)]
#[command(about = "Solve a component placement scenario")]
struct Args {
    /// Path to the scenario JSON file.
    scenario: PathBuf,

    /// Override the search iteration budget.
    #[arg(long)]
    budget: Option<u64>,

    /// Also print the placements of every alternate solution.
    #[arg(long)]
    alternates: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Scenario {
    grid: Vec<Vec<CellState>>,
    instances: Vec<InstanceSpec>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct InstanceSpec {
    id: InstanceId,
    label: String,
    shape: Vec<Vec<bool>>,
    #[serde(default)]
    mandatory: bool,
    #[serde(default)]
    needs_protection: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let scenario: Scenario = serde_json::from_str(&std::fs::read_to_string(&args.scenario)?)?;
    let grid = Grid::from_states(scenario.grid)?;

    let mut instances = Vec::with_capacity(scenario.instances.len());
    for spec in scenario.instances {
        let mut instance =
            ComponentInstance::new(spec.id, spec.label, ShapeMask::from_rows(spec.shape)?);
        instance.mandatory = spec.mandatory;
        instance.needs_protection = spec.needs_protection;
        instances.push(instance);
    }

    let mut config = SearchConfig::default();
    if let Some(budget) = args.budget {
        config.iteration_budget = budget;
    }

    let report = PlacementEngine::with_config(config).solve(&grid, &instances)?;

    println!("primary solution ({}):", report.primary.strategy);
    for placement in &report.primary.placements {
        println!(
            "  instance {} rot {} at ({}, {}) covering {:?}",
            placement.instance_id, placement.rotation, placement.row, placement.col, placement.cells
        );
    }
    if report.budget_exhausted {
        println!("note: the iteration budget was hit; results may be suboptimal");
    }

    if args.alternates {
        for alternate in &report.alternates {
            println!("\nalternate ({}):", alternate.strategy);
            for placement in &alternate.placements {
                println!(
                    "  instance {} rot {} at ({}, {})",
                    placement.instance_id, placement.rotation, placement.row, placement.col
                );
            }
        }
    }

    println!("\n{}", render_report_table(&report));
    Ok(())
}
