//! Configuration command handler.
//!
//! Prints the resolved configuration with the source of every value
//! (default, environment, or configuration file).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "rows": {
//!     "value": 4,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;
    let display = serde_json::json!({
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "rows": {
            "value": config.rows,
            "source": sources.rows,
        },
        "columns": {
            "value": config.columns,
            "source": sources.columns,
        },
        "turn_delay_ms": {
            "value": config.turn_delay_ms,
            "source": sources.turn_delay_ms,
        },
        "until": {
            "value": config.until,
            "source": sources.until,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
