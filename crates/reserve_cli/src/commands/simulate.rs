//! Simulate command implementation
//!
//! Runs one Monte Carlo batch and prints the summary statistics, key
//! percentiles, and the recommended reserve.

use tracing::info;

use reserve_core::types::{SimulationParams, SimulationResult};
use reserve_dashboard::currency::format_usd;
use reserve_dashboard::ScenarioPreset;
use reserve_engine::{simulate, ReserveRng};

use crate::{CliError, Result};

/// Resolved flags for one `reserve simulate` invocation
#[derive(Debug, Clone)]
pub struct SimulateArgs {
    pub preset: Option<String>,
    pub trials: Option<usize>,
    pub avg_events: Option<f64>,
    pub avg_loss: Option<f64>,
    pub volatility: Option<f64>,
    pub seed: Option<u64>,
    pub confidence: u8,
    pub format: String,
}

/// Percentile ranks shown in the table output
const TABLE_RANKS: [u8; 6] = [10, 25, 50, 75, 90, 95];

/// Run the simulate command
pub fn run(args: &SimulateArgs) -> Result<()> {
    if !(1..=99).contains(&args.confidence) {
        return Err(CliError::InvalidArgument(format!(
            "confidence must be in 1..=99, got {}",
            args.confidence
        )));
    }

    let params = resolve_params(args)?;

    info!("Running simulation...");
    info!("  Trials: {}", params.num_simulations());
    info!("  Avg events/month: {}", params.avg_events());
    info!("  Avg loss/event: {}", params.avg_loss());
    info!("  Volatility: {}%", params.volatility());

    let mut rng = match args.seed {
        Some(seed) => ReserveRng::from_seed(seed),
        None => ReserveRng::from_entropy(),
    };
    let result = simulate(&params, &mut rng)?;

    match args.format.as_str() {
        "table" => print_table(&result, args.confidence),
        "json" => print_json(&result, args.confidence, args.seed)?,
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {other}. Supported: table, json"
            )));
        }
    }

    info!("Simulation complete");
    Ok(())
}

/// Merge preset defaults with explicit flag overrides
fn resolve_params(args: &SimulateArgs) -> Result<SimulationParams> {
    let preset = match &args.preset {
        Some(name) => Some(ScenarioPreset::from_name(name).ok_or_else(|| {
            let known: Vec<&str> = ScenarioPreset::all().iter().map(|p| p.name()).collect();
            CliError::InvalidArgument(format!(
                "Unknown preset: {name}. Known presets: {}",
                known.join(", ")
            ))
        })?),
        None => None,
    };

    let base = preset.map(|p| p.params());
    let require = |value: Option<f64>, base_value: Option<f64>, flag: &str| {
        value.or(base_value).ok_or_else(|| {
            CliError::InvalidArgument(format!("--{flag} is required unless --preset is given"))
        })
    };

    let trials = args
        .trials
        .or(base.as_ref().map(|b| b.num_simulations()))
        .ok_or_else(|| {
            CliError::InvalidArgument("--trials is required unless --preset is given".to_string())
        })?;
    let avg_events = require(args.avg_events, base.as_ref().map(|b| b.avg_events()), "avg-events")?;
    let avg_loss = require(args.avg_loss, base.as_ref().map(|b| b.avg_loss()), "avg-loss")?;
    let volatility = require(args.volatility, base.as_ref().map(|b| b.volatility()), "volatility")?;

    Ok(SimulationParams::builder()
        .num_simulations(trials)
        .avg_events(avg_events)
        .avg_loss(avg_loss)
        .volatility(volatility)
        .build()?)
}

fn print_table(result: &SimulationResult, confidence: u8) {
    let reserve = result
        .reserve_at(confidence)
        .unwrap_or(result.median());

    println!("\n┌────────────────────────────┬────────────────┐");
    println!("│ Statistic                  │ Value          │");
    println!("├────────────────────────────┼────────────────┤");
    println!("│ Mean monthly loss          │ {:>14} │", format_usd(result.mean()));
    println!("│ Median monthly loss        │ {:>14} │", format_usd(result.median()));
    println!("│ Std deviation              │ {:>14} │", format_usd(result.std_dev()));
    println!("├────────────────────────────┼────────────────┤");
    for rank in TABLE_RANKS {
        let value = result.percentiles().get(rank).unwrap_or(0.0);
        println!("│ {:<26} │ {:>14} │", format!("P{rank}"), format_usd(value));
    }
    println!("├────────────────────────────┼────────────────┤");
    println!(
        "│ {:<26} │ {:>14} │",
        format!("Reserve @ {confidence}% confidence"),
        format_usd(reserve)
    );
    println!("└────────────────────────────┴────────────────┘");
}

fn print_json(result: &SimulationResult, confidence: u8, seed: Option<u64>) -> Result<()> {
    let payload = serde_json::json!({
        "mean": result.mean(),
        "median": result.median(),
        "stdDev": result.std_dev(),
        "percentiles": result.percentiles(),
        "recommendedReserve": result.reserve_at(confidence),
        "confidence": confidence,
        "numSimulations": result.monthly_losses().len(),
        "seed": seed,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}
