//! Command handler modules for the handsort CLI.
//!
//! Each subcommand lives in its own file with a consistent pattern:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Dependency injection: output streams (`&mut dyn Write`) and stdin
//!   (`&mut dyn Read`) are passed as parameters
//! - Error propagation: all errors go through the `CliError` enum

mod analyze;
mod ask;
mod cfg;

pub use analyze::handle_analyze_command;
pub use ask::handle_ask_command;
pub use cfg::handle_cfg_command;
