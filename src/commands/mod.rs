// Command handlers module
pub mod config;
pub mod once;
pub mod tree;
pub mod watch;

// Re-exports for cleaner imports
pub use once::execute as once;
pub use tree::execute as tree;
pub use watch::execute as watch;

use colored::*;

use crate::core::sampling::{evaluate_alerts, AlertConfig, Snapshot};
use crate::ui::format_alert;

/// Print one snapshot as a text line (plus alerts) or as JSON
pub(crate) fn print_snapshot(
    snapshot: &Snapshot,
    gpu_placeholder: &str,
    alerts: &AlertConfig,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string(snapshot)?);
        return Ok(());
    }

    let line = snapshot.render(gpu_placeholder);
    if snapshot.is_ok() {
        println!("{}", line);
    } else {
        println!("{}", line.red());
    }

    for alert in evaluate_alerts(snapshot, alerts) {
        println!("  {}", format_alert(&alert));
    }

    Ok(())
}
