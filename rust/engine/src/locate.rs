//! Finding the hand label and the parenthesized payloads on a cleaned line.
//!
//! A payload opens at the leftmost unconsumed `(` and closes at the next `)`.
//! A `(` inside an open payload is plain text, and a `(` with no `)` after it
//! opens nothing. Scanning resumes after each `)`.

use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::ParseError;

/// Placeholder used for a label field missing from the line.
pub const UNKNOWN_LABEL_FIELD: &str = "?";

/// How many parenthesized groups of a line are read as hands.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ParenScope {
    /// Only the first group; an empty first group drops the line.
    #[default]
    FirstOnly,
    /// Every group, left to right, each sharing the line's label.
    All,
}

impl ParenScope {
    pub fn as_str(self) -> &'static str {
        match self {
            ParenScope::FirstOnly => "first-only",
            ParenScope::All => "all",
        }
    }
}

impl fmt::Display for ParenScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ParenScope {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first-only" | "first_only" | "first" => Ok(ParenScope::FirstOnly),
            "all" => Ok(ParenScope::All),
            other => Err(ParseError::UnknownScope(other.to_string())),
        }
    }
}

/// Sequence number and total of a hand, as written in `#N<number>.<total>`.
///
/// Both fields are display text and are never parsed as numbers.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct HandLabel {
    pub number: String,
    pub total: String,
}

impl HandLabel {
    pub fn new(number: impl Into<String>, total: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            total: total.into(),
        }
    }

    /// Label for a line that carries none.
    pub fn unknown() -> Self {
        Self::new(UNKNOWN_LABEL_FIELD, UNKNOWN_LABEL_FIELD)
    }
}

impl Default for HandLabel {
    fn default() -> Self {
        Self::unknown()
    }
}

impl fmt::Display for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#N{}.{}", self.number, self.total)
    }
}

/// A line's label together with its payload candidates.
#[derive(Debug, Clone)]
pub struct Located<'a> {
    pub label: HandLabel,
    pub payloads: Payloads<'a>,
}

/// Lazy left-to-right iterator over the raw text inside each `( ... )`.
#[derive(Debug, Clone)]
pub struct Payloads<'a> {
    rest: &'a str,
    scope: ParenScope,
    done: bool,
}

impl<'a> Payloads<'a> {
    pub fn new(line: &'a str, scope: ParenScope) -> Self {
        Self {
            rest: line,
            scope,
            done: false,
        }
    }
}

impl<'a> Iterator for Payloads<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }
        let Some(open) = self.rest.find('(') else {
            self.done = true;
            return None;
        };
        let inner = &self.rest[open + 1..];
        let Some(close) = inner.find(')') else {
            self.done = true;
            return None;
        };
        let payload = &inner[..close];
        self.rest = &inner[close + 1..];
        if self.scope == ParenScope::FirstOnly {
            self.done = true;
        }
        Some(payload)
    }
}

impl FusedIterator for Payloads<'_> {}

/// Split a cleaned line into its label and payload candidates.
///
/// ```rust
/// use handsort_engine::locate::{locate, HandLabel, ParenScope};
///
/// let located = locate("#N4.9 (A♠ K♦) (Q♣)", ParenScope::All);
/// assert_eq!(located.label, HandLabel::new("4", "9"));
/// assert_eq!(located.payloads.collect::<Vec<_>>(), vec!["A♠ K♦", "Q♣"]);
/// ```
pub fn locate(line: &str, scope: ParenScope) -> Located<'_> {
    Located {
        label: find_label(line).unwrap_or_default(),
        payloads: Payloads::new(line, scope),
    }
}

/// Leftmost `#<digits>.<digits>` or `#N<digits>.<digits>` on the line.
pub fn find_label(line: &str) -> Option<HandLabel> {
    let bytes = line.as_bytes();
    for (start, _) in line.match_indices('#') {
        let mut number_start = start + 1;
        if bytes.get(number_start) == Some(&b'N') {
            number_start += 1;
        }
        let number_end = number_start + leading_digits(&bytes[number_start..]);
        if number_end == number_start || bytes.get(number_end) != Some(&b'.') {
            continue;
        }
        let total_start = number_end + 1;
        let total_end = total_start + leading_digits(&bytes[total_start..]);
        if total_end == total_start {
            continue;
        }
        return Some(HandLabel::new(
            &line[number_start..number_end],
            &line[total_start..total_end],
        ));
    }
    None
}

fn leading_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_with_and_without_n_marker() {
        assert_eq!(find_label("#N12.40(A♠)"), Some(HandLabel::new("12", "40")));
        assert_eq!(find_label("x #7.8 (A♠)"), Some(HandLabel::new("7", "8")));
    }

    #[test]
    fn malformed_labels_fall_back_to_placeholder() {
        assert_eq!(find_label("#N.3(A♠)"), None);
        assert_eq!(find_label("#N3.(A♠)"), None);
        assert_eq!(find_label("N3.4(A♠)"), None);
        assert_eq!(locate("(A♠)", ParenScope::FirstOnly).label, HandLabel::unknown());
    }

    #[test]
    fn later_hash_is_used_when_first_is_not_a_label() {
        assert_eq!(find_label("#R #N2.3"), Some(HandLabel::new("2", "3")));
    }

    #[test]
    fn first_only_yields_at_most_one_payload() {
        let payloads: Vec<_> = Payloads::new("(A♠) (K♦)", ParenScope::FirstOnly).collect();
        assert_eq!(payloads, vec!["A♠"]);
    }

    #[test]
    fn all_scope_yields_every_group() {
        let payloads: Vec<_> = Payloads::new("a (A♠) b () c (K♦", ParenScope::All).collect();
        assert_eq!(payloads, vec!["A♠", ""]);
    }

    #[test]
    fn nested_open_paren_is_payload_text() {
        let payloads: Vec<_> = Payloads::new("((A♠)) (K♦)", ParenScope::All).collect();
        assert_eq!(payloads, vec!["(A♠", "K♦"]);
    }

    #[test]
    fn no_parenthesis_means_no_payload() {
        assert_eq!(Payloads::new("#N1.2 A♠ K♦", ParenScope::All).count(), 0);
        assert_eq!(Payloads::new("#N1.2 (A♠", ParenScope::All).count(), 0);
    }

    #[test]
    fn label_display_matches_rendered_prefix() {
        assert_eq!(HandLabel::new("1", "3").to_string(), "#N1.3");
        assert_eq!(HandLabel::unknown().to_string(), "#N?.?");
    }

    #[test]
    fn scope_keywords_parse() {
        assert_eq!("first-only".parse::<ParenScope>(), Ok(ParenScope::FirstOnly));
        assert_eq!("ALL".parse::<ParenScope>(), Ok(ParenScope::All));
        assert!("some".parse::<ParenScope>().is_err());
    }
}
