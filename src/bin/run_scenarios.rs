//! Run every scenario in a CSV file and write one summary line per scenario
//!
//! Usage: cargo run --bin run_scenarios -- [scenarios.csv] [output.csv]

use anyhow::{Context, Result};
use csv::Writer;
use log::{info, warn};
use std::env;
use std::time::Instant;

use real_savings::params::loader::{load_scenarios, DEFAULT_SCENARIOS_PATH};
use real_savings::scenario::ScenarioRunner;

const DEFAULT_OUTPUT_PATH: &str = "scenario_summaries.csv";

fn main() -> Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let input_path = args.next().unwrap_or_else(|| DEFAULT_SCENARIOS_PATH.to_string());
    let output_path = args.next().unwrap_or_else(|| DEFAULT_OUTPUT_PATH.to_string());

    let start = Instant::now();
    println!("Loading scenarios from {}...", input_path);

    let runner = ScenarioRunner::new();
    let scenarios = load_scenarios(&input_path, runner.engine().config().horizon_policy)
        .with_context(|| format!("loading scenarios from {}", input_path))?;
    println!("Loaded {} scenarios in {:?}", scenarios.len(), start.elapsed());

    println!("Running projections...");
    let proj_start = Instant::now();
    let outcomes = runner.run_named(&scenarios);
    println!("Projections complete in {:?}", proj_start.elapsed());

    let mut writer = Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path))?;
    writer.write_record([
        "Name",
        "Years",
        "InvestedTotal",
        "Nominal",
        "Real",
        "InterestEarned",
        "PurchasingPowerLoss",
    ])?;

    let mut failed = 0usize;
    for outcome in &outcomes {
        match &outcome.result {
            Ok(result) => {
                let s = &result.summary;
                writer.write_record([
                    outcome.name.clone(),
                    s.year.to_string(),
                    s.invested_total.to_string(),
                    s.nominal.to_string(),
                    s.real.to_string(),
                    s.interest_earned.to_string(),
                    s.purchasing_power_loss().to_string(),
                ])?;
            }
            Err(e) => {
                failed += 1;
                warn!("scenario '{}' skipped: {}", outcome.name, e);
            }
        }
    }
    writer.flush()?;
    info!("{} summaries written to {}", outcomes.len() - failed, output_path);

    println!("Output written to {}", output_path);
    if failed > 0 {
        println!("{} scenarios failed validation", failed);
    }
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}
