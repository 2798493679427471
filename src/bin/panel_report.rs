//! Evaluate a blood-panel reading supplied as JSON.
//!
//! Reads a `BloodPanelReading` from the file named on the command line (or
//! from stdin when no argument is given) and prints the evaluation as pretty
//! JSON.

use anyhow::Context;
use liver_panel::{BloodPanelReading, IndicatorLevel, evaluate_panel};
use log::info;
use std::io::Read;

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let input = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read reading from {path}"))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read reading from stdin")?;
            buf
        }
    };

    let reading: BloodPanelReading =
        serde_json::from_str(&input).context("failed to parse blood panel reading")?;

    let evaluation = evaluate_panel(&reading);

    info!(
        "reading taken {}: {} of {} measurements present, {} breached",
        reading.taken_at,
        reading.measurement_count(),
        liver_panel::Indicator::all().len(),
        evaluation.breach_count()
    );
    if let Some(albi) = &evaluation.albi {
        info!("ALBI {:.4} -> {} ({})", albi.score, albi.grade, albi.risk);
    }
    for indicator in evaluation.indicators_at_or_above(IndicatorLevel::Danger) {
        info!("{indicator} at {}", evaluation.level_of(indicator));
    }

    println!("{}", serde_json::to_string_pretty(&evaluation)?);

    Ok(())
}
