//! Question command handler.
//!
//! The CLI has no completion backend, so only questions starting with the
//! configured trigger phrase can be answered; the rest fail with a clear error.

use crate::config;
use crate::error::CliError;
use crate::io_utils::read_input;
use handsort_service::{AskRequest, HandService};
use std::io::{Read, Write};

/// Handle the ask command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::InvalidInput` if the input cannot be read.
/// Returns `CliError::Service` for questions that need a completion backend.
pub fn handle_ask_command(
    question: String,
    input: Option<String>,
    out: &mut dyn Write,
    stdin: &mut dyn Read,
) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    let service = HandService::new(resolved.config.pipeline())
        .with_settings(resolved.config.service_settings())?;

    let data = match input.as_deref() {
        Some(path) => Some(read_input(path, stdin).map_err(CliError::InvalidInput)?),
        None => None,
    };
    let request = AskRequest {
        data,
        question: Some(question),
    };

    let route = service.ask(&request, out)?;
    writeln!(out)?;
    tracing::debug!(route = ?route, "question answered");
    Ok(())
}
