use thiserror::Error;

/// Errors raised when text that must name a card or a pipeline option does not.
///
/// The report pipeline itself never fails: unrecognised hand lines are skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty card token")]
    Empty,
    #[error("Unknown rank: {0}")]
    UnknownRank(String),
    #[error("Unknown suit symbol: {0}")]
    UnknownSuit(char),
    #[error("Card token has no suit symbol")]
    MissingSuit,
    #[error("Unexpected text after card token: {0}")]
    TrailingInput(String),
    #[error("Unknown rank universe: {0} (expected restricted or full)")]
    UnknownUniverse(String),
    #[error("Unknown parenthesis scope: {0} (expected first-only or all)")]
    UnknownScope(String),
}
