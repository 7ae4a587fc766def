//! Report command handler.
//!
//! Reads a block of hand lines, runs the deterministic pipeline and prints the
//! grouped report, or the `{success, result|error}` envelope with `--json`.

use crate::config;
use crate::error::CliError;
use crate::io_utils::{STDIN_PATH, read_input};
use crate::ui;
use handsort_engine::cards::RankUniverse;
use handsort_engine::locate::ParenScope;
use handsort_service::{ProcessRequest, ServiceError, process, run_pipeline};
use std::io::{Read, Write};

/// Handle the analyze command.
///
/// `universe` and `scope` are command line overrides; unset ones fall back to
/// the loaded configuration. `input` of `None` or `-` reads `stdin`.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::InvalidInput` if the input cannot be read.
/// Returns `CliError::Service` if the pipeline faults.
pub fn handle_analyze_command(
    input: Option<String>,
    universe: Option<RankUniverse>,
    scope: Option<ParenScope>,
    json: bool,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn Read,
) -> Result<(), CliError> {
    let resolved = config::load_with_flags(universe, scope)?;
    let pipeline = resolved.config.pipeline();

    let path = input.as_deref().unwrap_or(STDIN_PATH);
    let text = read_input(path, stdin).map_err(CliError::InvalidInput)?;
    if text.trim().is_empty() {
        ui::display_warning(err, "input is empty")?;
    }
    tracing::debug!(
        input = path,
        bytes = text.len(),
        universe = %pipeline.universe,
        scope = %pipeline.scope,
        "analyzing input"
    );

    if json {
        let response = process(&ProcessRequest { data: Some(text) }, &pipeline);
        let json_str = serde_json::to_string_pretty(&response).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
        if let Some(error) = response.error {
            return Err(ServiceError::Internal(error).into());
        }
        return Ok(());
    }

    let report = run_pipeline(&text, &pipeline)?;
    writeln!(out, "{}", report)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use handsort_engine::report::NO_VALID_HANDS;
    use crate::config::CleanEnv;
    use serial_test::serial;
    use std::io::Cursor;

    #[test]
    #[serial]
    fn test_analyze_reads_stdin_by_default() {
        let _env = CleanEnv::new();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new("#N1.2(A♠ 9♦)\n#N2.2(A♠)".as_bytes().to_vec());

        handle_analyze_command(
            None,
            Some(RankUniverse::Restricted),
            Some(ParenScope::FirstOnly),
            false,
            &mut out,
            &mut err,
            &mut stdin,
        )
        .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "A♠\n#N1.2(A♠ 9♦)\n#N2.2(A♠)\n\n9♦\n#N1.2(A♠ 9♦)\n"
        );
    }

    #[test]
    #[serial]
    fn test_analyze_empty_input_warns_and_prints_sentinel() {
        let _env = CleanEnv::new();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(Vec::new());

        handle_analyze_command(
            Some("-".into()),
            Some(RankUniverse::Restricted),
            Some(ParenScope::FirstOnly),
            false,
            &mut out,
            &mut err,
            &mut stdin,
        )
        .unwrap();

        assert_eq!(String::from_utf8(out).unwrap(), format!("{}\n", NO_VALID_HANDS));
        assert_eq!(String::from_utf8(err).unwrap(), "WARNING: input is empty\n");
    }

    #[test]
    #[serial]
    fn test_analyze_missing_file_is_invalid_input() {
        let _env = CleanEnv::new();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(Vec::new());

        let result = handle_analyze_command(
            Some("no/such/hands.txt".into()),
            Some(RankUniverse::Restricted),
            Some(ParenScope::FirstOnly),
            false,
            &mut out,
            &mut err,
            &mut stdin,
        );

        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(out.is_empty());
    }
}
