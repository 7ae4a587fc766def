//! # handsort CLI Library
//!
//! Command-line front end for the deterministic hand report.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["handsort", "analyze", "--input", "hands.txt"];
//! let code = handsort_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `analyze`: Group the hands of a text block by card
//! - `ask`: Answer a question; the trigger phrase selects the report
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::{Read, Write};
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod io_utils;
pub mod ui;

use cli::{Commands, HandsortCli};
use commands::{handle_analyze_command, handle_ask_command, handle_cfg_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["analyze", "ask", "cfg"];

/// Main entry point for the CLI application, reading input from process stdin.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_stdin(args, out, err, &mut stdin_lock)
}

/// [`run`] with an explicit stdin, for callers that pipe input themselves.
///
/// ```
/// use std::io::Cursor;
///
/// let mut stdin = Cursor::new("#N1.3(A♠ 9♦)".as_bytes().to_vec());
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = handsort_cli::run_with_stdin(
///     ["handsort", "analyze", "--universe", "restricted", "--scope", "first-only"],
///     &mut out,
///     &mut err,
///     &mut stdin,
/// );
/// assert_eq!(code, 0);
/// assert_eq!(String::from_utf8(out).unwrap(), "A♠\n#N1.3(A♠ 9♦)\n\n9♦\n#N1.3(A♠ 9♦)\n");
/// ```
pub fn run_with_stdin<I, S>(
    args: I,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn Read,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match HandsortCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Analyze {
            input,
            universe,
            scope,
            json,
        } => handle_analyze_command(
            input,
            universe.map(Into::into),
            scope.map(Into::into),
            json,
            out,
            err,
            stdin,
        ),
        Commands::Ask { question, input } => handle_ask_command(question, input, out, stdin),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn report_usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Usage: handsort <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: handsort --help");
            exit_code::ERROR
        }
    }
}
