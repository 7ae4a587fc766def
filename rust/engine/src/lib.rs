//! # handsort-engine: Deterministic Hand Report Core
//!
//! Turns free-form, noisy lines describing card hands into a report grouped
//! by card, in a fixed canonical order, with repeated lines collapsed. No
//! model and no I/O is involved: the same input always yields the same bytes.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and rank universes
//! - [`normalize`] - Glyph, ten-spelling and whitespace canonicalization
//! - [`noise`] - Removal of status glyphs, tag markers, dashes and bullets
//! - [`locate`] - Hand label and parenthesized payload discovery
//! - [`tokenize`] - `<rank><suit>` scanning inside a payload
//! - [`order`] - Canonical order tables (36 or 52 cards)
//! - [`report`] - Bucketing, de-duplication and text rendering
//! - [`pipeline`] - Configuration and the end-to-end transform
//! - [`errors`] - Error types for parsing cards and options
//!
//! ## Quick Start
//!
//! ```rust
//! use handsort_engine::cards::RankUniverse;
//! use handsort_engine::locate::ParenScope;
//! use handsort_engine::pipeline::{analyze, PipelineConfig};
//!
//! let input = "✅ #N1.3(A♠ 9♦)\r\n#N2.3(A♠️ 5♥)";
//! let config = PipelineConfig::new(RankUniverse::Full, ParenScope::FirstOnly);
//! let report = analyze(input, &config);
//!
//! assert_eq!(report.buckets[0].card.to_string(), "A♠");
//! assert_eq!(report.buckets[0].lines, ["#N1.3(A♠ 9♦)", "#N2.3(A♠ 5♥)"]);
//! assert_eq!(report.card_count(), 3);
//! ```
//!
//! ## Empty Results
//!
//! Input without any usable hand renders as [`report::NO_VALID_HANDS`]:
//!
//! ```rust
//! use handsort_engine::pipeline::{analyze_to_string, PipelineConfig};
//! use handsort_engine::report::NO_VALID_HANDS;
//!
//! assert_eq!(analyze_to_string("", &PipelineConfig::default()), NO_VALID_HANDS);
//! ```

pub mod cards;
pub mod errors;
pub mod locate;
pub mod noise;
pub mod normalize;
pub mod order;
pub mod pipeline;
pub mod report;
pub mod tokenize;

pub use cards::{Card, Rank, RankUniverse, Suit};
pub use errors::ParseError;
pub use locate::{HandLabel, ParenScope};
pub use order::CanonicalOrderTable;
pub use pipeline::{analyze, analyze_to_string, extract_records, HandRecord, PipelineConfig};
pub use report::{Bucket, Report, NO_VALID_HANDS};
