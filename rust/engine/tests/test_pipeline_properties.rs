use handsort_engine::cards::RankUniverse;
use handsort_engine::locate::ParenScope;
use handsort_engine::normalize::normalize;
use handsort_engine::order::CanonicalOrderTable;
use handsort_engine::pipeline::{analyze, analyze_to_string, PipelineConfig};
use proptest::prelude::*;

/// Text built from the characters the pipeline treats specially.
fn hand_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop::sample::select(vec![
            "1", "0", "T", "t", "10", "6", "5", "2", "A", "K", "Q", "J", "♠", "♦", "♣", "♥",
            "\u{FE0F}", "\u{FE0E}", " ", "  ", "\t", "-", "–", "—", "•", "✅", "#", "N", "R",
            ".", "(", ")", "\r\n", "\n", "x",
        ]),
        0..40,
    )
    .prop_map(|parts| parts.concat())
}

fn any_config() -> impl Strategy<Value = PipelineConfig> {
    (
        prop::bool::ANY.prop_map(|full| {
            if full {
                RankUniverse::Full
            } else {
                RankUniverse::Restricted
            }
        }),
        prop::bool::ANY.prop_map(|all| if all { ParenScope::All } else { ParenScope::FirstOnly }),
    )
        .prop_map(|(universe, scope)| PipelineConfig::new(universe, scope))
}

proptest! {
    #[test]
    fn normalize_is_idempotent(s in hand_text()) {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn normalize_is_idempotent_on_arbitrary_strings(s in ".*") {
        let once = normalize(&s);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn analysis_is_deterministic(s in hand_text(), config in any_config()) {
        prop_assert_eq!(analyze_to_string(&s, &config), analyze_to_string(&s, &config));
    }

    #[test]
    fn buckets_follow_table_order_with_unique_lines(s in hand_text(), config in any_config()) {
        let table = CanonicalOrderTable::new(config.universe);
        let report = analyze(&s, &config);
        let positions: Vec<usize> = report
            .buckets
            .iter()
            .map(|b| table.position(&b.card).expect("card in table"))
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        for bucket in &report.buckets {
            prop_assert!(!bucket.lines.is_empty());
            let mut lines = bucket.lines.clone();
            lines.sort();
            lines.dedup();
            prop_assert_eq!(lines.len(), bucket.lines.len());
        }
    }

    #[test]
    fn output_is_trimmed(s in hand_text(), config in any_config()) {
        let out = analyze_to_string(&s, &config);
        prop_assert_eq!(out.trim(), out.as_str());
    }
}
