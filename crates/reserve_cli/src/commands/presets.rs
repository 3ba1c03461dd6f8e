//! Presets command implementation
//!
//! Lists the scenario presets the dashboard's picker offers, with their
//! parameters.

use reserve_dashboard::ScenarioPreset;

use crate::Result;

/// Run the presets command
pub fn run() -> Result<()> {
    println!("\n┌─────────────────┬──────────────────────┬─────────┬──────────┬────────────┐");
    println!("│ Name            │ Label                │ Events  │ Avg loss │ Volatility │");
    println!("├─────────────────┼──────────────────────┼─────────┼──────────┼────────────┤");
    for preset in ScenarioPreset::all() {
        let params = preset.params();
        println!(
            "│ {:<15} │ {:<20} │ {:>7} │ {:>8} │ {:>9}% │",
            preset.name(),
            preset.label(),
            params.avg_events(),
            params.avg_loss(),
            params.volatility(),
        );
    }
    println!("└─────────────────┴──────────────────────┴─────────┴──────────┴────────────┘");
    Ok(())
}
