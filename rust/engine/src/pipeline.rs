//! The whole transform: raw text in, grouped report out.
//!
//! Per line: normalize, strip noise, locate label and payloads, normalize each
//! payload, tokenize. Every line that yields no card is skipped silently.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::cards::{Card, RankUniverse};
use crate::locate::{locate, HandLabel, ParenScope};
use crate::noise::strip;
use crate::normalize::normalize;
use crate::order::CanonicalOrderTable;
use crate::report::{aggregate, Report};
use crate::tokenize::tokenize;

/// The two knobs of the pipeline.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct PipelineConfig {
    #[serde(default)]
    pub universe: RankUniverse,
    #[serde(default)]
    pub scope: ParenScope,
}

impl PipelineConfig {
    pub fn new(universe: RankUniverse, scope: ParenScope) -> Self {
        Self { universe, scope }
    }
}

/// One parenthesized payload that contained at least one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandRecord {
    pub label: HandLabel,
    /// Normalized payload text, without the parentheses.
    pub payload: String,
    /// Cards in order of appearance, repeats included.
    pub cards: Vec<Card>,
}

impl HandRecord {
    /// `#N<number>.<total>(<payload>)`, the text grouped under each card.
    pub fn rendered_line(&self) -> String {
        format!("{}({})", self.label, self.payload)
    }
}

/// Parse every hand record out of `input`.
///
/// Lines are split on `\n` and `\r\n`.
pub fn extract_records(input: &str, config: &PipelineConfig) -> Vec<HandRecord> {
    let mut records = Vec::new();
    for (line_no, raw) in input.lines().enumerate() {
        let line = normalize(raw);
        if line.is_empty() {
            continue;
        }
        let clean = strip(&line);
        let located = locate(&clean, config.scope);
        let mut found = 0usize;
        for payload in located.payloads {
            let payload = normalize(payload);
            if payload.is_empty() {
                trace!(line = line_no + 1, "empty payload skipped");
                continue;
            }
            let cards = tokenize(&payload, config.universe);
            if cards.is_empty() {
                trace!(line = line_no + 1, payload = %payload, "payload without cards skipped");
                continue;
            }
            found += 1;
            records.push(HandRecord {
                label: located.label.clone(),
                payload,
                cards,
            });
        }
        if found == 0 {
            debug!(line = line_no + 1, "line produced no hand");
        }
    }
    records
}

/// Build the grouped report for `input`.
pub fn analyze(input: &str, config: &PipelineConfig) -> Report {
    let records = extract_records(input, config);
    let table = CanonicalOrderTable::new(config.universe);
    let entries = records.iter().flat_map(|record| {
        let line = record.rendered_line();
        record.cards.iter().map(move |&card| (card, line.clone()))
    });
    let report = aggregate(entries, &table);
    debug!(
        records = records.len(),
        cards = report.card_count(),
        universe = %config.universe,
        scope = %config.scope,
        "hands analyzed"
    );
    report
}

/// [`analyze`] rendered to text: the report, or the no-hand sentinel.
///
/// ```rust
/// use handsort_engine::pipeline::{analyze_to_string, PipelineConfig};
///
/// let text = analyze_to_string("#N1.3(A♠ 9♦ K♣)", &PipelineConfig::default());
/// assert_eq!(
///     text,
///     "A♠\n#N1.3(A♠ 9♦ K♣)\n\n9♦\n#N1.3(A♠ 9♦ K♣)\n\nK♣\n#N1.3(A♠ 9♦ K♣)"
/// );
/// ```
pub fn analyze_to_string(input: &str, config: &PipelineConfig) -> String {
    analyze(input, config).render()
}
