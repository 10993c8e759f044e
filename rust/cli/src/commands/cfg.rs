//! Configuration command handler.
//!
//! This module implements the `cfg` command, which displays the current
//! blackjack configuration settings with their sources (default, environment,
//! or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_balance": {
//!     "value": 1000,
//!     "source": "default"
//!   },
//!   "default_bet": {
//!     "value": 5,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use crate::ui;
use std::io::Write;

/// Handle the cfg command.
///
/// Loads the current configuration with source tracking and displays it
/// as formatted JSON to the output stream.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write, err: &mut dyn Write) -> Result<(), CliError> {
    let resolved = match config::load_with_sources() {
        Ok(r) => r,
        Err(e) => {
            ui::write_error(err, &format!("Invalid configuration: {}", e))?;
            return Err(CliError::Config(format!("Invalid configuration: {}", e)));
        }
    };

    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "starting_balance": {
            "value": config.starting_balance,
            "source": sources.starting_balance,
        },
        "default_bet": {
            "value": config.default_bet,
            "source": sources.default_bet,
        },
        "value_limit": {
            "value": config.value_limit,
            "source": sources.value_limit,
        },
        "dealer_stop": {
            "value": config.dealer_stop,
            "source": sources.dealer_stop,
        },
        "packs": {
            "value": config.packs,
            "source": sources.packs,
        },
        "reset_when_remaining": {
            "value": config.reset_when_remaining,
            "source": sources.reset_when_remaining,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
