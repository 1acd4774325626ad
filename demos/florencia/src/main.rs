//! `florencia` — distribution plan for two factories and two warehouses in
//! Florencia, Caquetá.
//!
//! Builds a synthetic road grid around the city, registers the initial
//! points (or loads them from a CSV given as the first argument), solves the
//! transportation problem, and writes `assignments.csv` / `utilization.csv`
//! to `output/florencia/`.  A second request then adds a warehouse to show
//! re-optimization on the cached network.
//!
//! Run with:
//!   cargo run -p florencia --release [-- points.csv]

mod network;

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use dn_core::{GeoPoint, PlannerConfig};
use dn_output::CsvWriter;
use dn_planner::{PlanOutcome, Planner};
use dn_registry::{load_points_csv, Point, PointRegistry};
use dn_solver::capacity_shortfall;

use network::build_network;

const OUTPUT_DIR: &str = "output/florencia";

fn initial_points() -> Result<PointRegistry> {
    Ok(PointRegistry::from_points([
        Point::supply("Fábrica Lacteos Amazonia", GeoPoint::new(1.6200, -75.6200), 1000.0, 1500.0),
        Point::supply("Planta Procesadora Carnes", GeoPoint::new(1.6080, -75.6150), 800.0, 1800.0),
        Point::demand("Almacén Centro", GeoPoint::new(1.6145, -75.6062), 300.0, 200.0),
        Point::demand("Bodega Norte", GeoPoint::new(1.6220, -75.6140), 400.0, 150.0),
    ])?)
}

fn print_outcome(outcome: &PlanOutcome) {
    let result = &outcome.result;
    println!("  status      : {}", result.status);
    println!("  total cost  : {:.2}", result.total_cost);
    println!(
        "  matrix      : {} pairs ({} straight-line)",
        outcome.matrix.len(),
        outcome.matrix.fallback_count()
    );

    println!("  supply utilization:");
    for (name, u) in &result.supply_utilization {
        println!("    {name:<28} {:>8.1} / {:>8.1}  ({:>5.1}%)", u.sent, u.capacity, u.percent);
    }
    println!("  demand satisfaction:");
    for (name, s) in &result.demand_satisfaction {
        println!("    {name:<28} {:>8.1} / {:>8.1}  ({:>5.1}%)", s.received, s.demand, s.percent);
    }
    println!("  assignments:");
    for r in &outcome.routes {
        println!(
            "    {:<28} -> {:<20} {:>8.1} units  {:>6.2} km{}  cost {:.2}",
            r.supply,
            r.demand,
            r.quantity,
            r.distance_km,
            if r.is_fallback { " (est.)" } else { "" },
            r.cost
        );
    }
}

fn main() -> Result<()> {
    let wall_start = Instant::now();

    let registry = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => load_points_csv(&path).with_context(|| format!("loading points from {}", path.display()))?,
        None => initial_points()?,
    };

    let config = PlannerConfig::florencia();
    let network = build_network();
    println!(
        "Road grid: {} nodes, {} directed edges around {}",
        network.node_count(),
        network.edge_count(),
        config.region_place
    );

    let planner = Planner::preloaded(config, network)?;

    if let Some(gap) = capacity_shortfall(&registry) {
        println!("Warning: demand exceeds capacity by {gap:.1} units");
    }

    println!("\nPlan ({} points):", registry.len());
    let outcome = planner.optimize(&registry)?;
    print_outcome(&outcome);

    let out_dir = Path::new(OUTPUT_DIR);
    let mut writer = CsvWriter::new(out_dir)?;
    planner.export(&outcome, &registry, &mut writer)?;
    std::fs::write(out_dir.join("outcome.json"), serde_json::to_string_pretty(&outcome)?)?;

    // Second request on the same (cached) network.
    let mut extended = registry.clone();
    extended.upsert(Point::demand("Depósito Sur", GeoPoint::new(1.6040, -75.6100), 500.0, 100.0))?;
    println!("\nPlan after adding Depósito Sur ({} points):", extended.len());
    let second = planner.optimize(&extended)?;
    print_outcome(&second);

    println!("\nOutput written to {}", out_dir.display());
    println!("Done in {:.2}s", wall_start.elapsed().as_secs_f64());
    Ok(())
}
