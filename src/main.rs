use gravsim::benchmark::benchmark::run_bench;
use gravsim::simulation::diagnostics::{relative_energy_drift, total_energy, total_momentum};
use gravsim::{logging, BenchKind, Scenario, ScenarioConfig};
use clap::Parser;
use anyhow::{Context, Result};
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Integrate an N-body scenario under softened Newtonian gravity")]
struct Args {
    /// Scenario YAML, either a path or a file name under `scenarios/`
    #[arg(short, default_value = "inner_solar_system.yaml")]
    file_name: String,

    /// Run a benchmark instead of a scenario
    #[arg(long, value_enum)]
    bench: Option<BenchKind>,
}

// resolve here to keep main clean
fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    if let Some(kind) = args.bench {
        run_bench(kind);
        return Ok(());
    }

    let path = scenario_path(&args.file_name);
    let scenario_cfg = ScenarioConfig::from_path(&path)?;
    let scenario = Scenario::build_scenario(scenario_cfg)
        .with_context(|| format!("invalid scenario {}", path.display()))?;

    let masses = scenario.masses();
    let p = &scenario.parameters;
    let initial = scenario.initial_state();
    let e0 = total_energy(&masses, &initial, p.G, p.softening);
    let p0 = total_momentum(&masses, &initial);

    let (trajectory, final_state) = scenario.run()?;

    let e1 = total_energy(&masses, &final_state, p.G, p.softening);
    let p1 = total_momentum(&masses, &final_state);
    info!(
        "{} snapshots over {:.3e} s; relative energy drift {:.3e}, momentum change {:.3e} kg m/s",
        trajectory.len(),
        p.duration(),
        relative_energy_drift(e0, e1),
        (p1 - p0).norm()
    );

    if let Some(last) = trajectory.last() {
        for (i, x) in last.column_iter().enumerate() {
            println!("body {:3}: [{:+.6e}, {:+.6e}, {:+.6e}]", i, x[0], x[1], x[2]);
        }
    }

    Ok(())
}
