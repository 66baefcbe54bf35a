pub mod bq_cli_adapter;

use std::process::Command;

/// Checks if the bq CLI is available
pub fn check_bq_availability() -> bool {
    Command::new("bq")
        .arg("version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}
