//! Grouping of hand lines by card and rendering of the final text.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::cards::Card;
use crate::order::CanonicalOrderTable;

/// Text returned in place of a report when no line produced a card.
pub const NO_VALID_HANDS: &str = "(No valid hand found)";

/// Every distinct rendered hand line that mentions one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub card: Card,
    /// Lines in first-seen order, without repeats.
    pub lines: Vec<String>,
    #[serde(skip)]
    seen: HashSet<String>,
}

impl Bucket {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            lines: Vec::new(),
            seen: HashSet::new(),
        }
    }

    /// Append `line` unless the bucket already holds it. Returns whether it was added.
    pub fn insert(&mut self, line: String) -> bool {
        if self.seen.contains(&line) {
            return false;
        }
        self.seen.insert(line.clone());
        self.lines.push(line);
        true
    }
}

/// Buckets in ascending order-table position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Report {
    pub buckets: Vec<Bucket>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of distinct cards reported.
    pub fn card_count(&self) -> usize {
        self.buckets.len()
    }

    /// Total lines across buckets; a hand naming three cards counts three times.
    pub fn line_count(&self) -> usize {
        self.buckets.iter().map(|b| b.lines.len()).sum()
    }

    /// Card heading, its lines, then a blank line, for each bucket; the whole
    /// text trimmed. [`NO_VALID_HANDS`] when there is no bucket.
    pub fn render(&self) -> String {
        if self.buckets.is_empty() {
            return NO_VALID_HANDS.to_string();
        }
        let mut out = String::new();
        for bucket in &self.buckets {
            out.push_str(&bucket.card.to_string());
            out.push('\n');
            for line in &bucket.lines {
                out.push_str(line);
                out.push('\n');
            }
            out.push('\n');
        }
        out.trim().to_string()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Group `(card, line)` pairs into buckets ordered by `table`.
///
/// The sort is stable, so lines of one card keep their input order before
/// duplicates are collapsed. Cards missing from `table` are dropped.
pub fn aggregate<I>(entries: I, table: &CanonicalOrderTable) -> Report
where
    I: IntoIterator<Item = (Card, String)>,
{
    let mut keyed: Vec<(usize, Card, String)> = Vec::new();
    for (card, line) in entries {
        match table.position(&card) {
            Some(pos) => keyed.push((pos, card, line)),
            None => tracing::warn!(
                card = %card,
                universe = %table.universe(),
                "card outside the order table dropped"
            ),
        }
    }
    keyed.sort_by_key(|(pos, _, _)| *pos);

    let mut buckets: Vec<Bucket> = Vec::new();
    for (_, card, line) in keyed {
        match buckets.last_mut() {
            Some(bucket) if bucket.card == card => {
                bucket.insert(line);
            }
            _ => {
                let mut bucket = Bucket::new(card);
                bucket.insert(line);
                buckets.push(bucket);
            }
        }
    }
    Report { buckets }
}
