//! Configuration command handler.
//!
//! Displays the resolved settings with their sources (default, file or env).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "universe": {
//!     "value": "restricted",
//!     "source": "default"
//!   },
//!   "scope": {
//!     "value": "first-only",
//!     "source": "env"
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
        "universe": {
            "value": config.universe,
            "source": sources.universe,
        },
        "scope": {
            "value": config.scope,
            "source": sources.scope,
        },
        "trigger": {
            "value": config.trigger,
            "source": sources.trigger,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
