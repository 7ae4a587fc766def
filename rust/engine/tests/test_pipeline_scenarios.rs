use handsort_engine::cards::RankUniverse;
use handsort_engine::locate::ParenScope;
use handsort_engine::pipeline::{analyze, analyze_to_string, extract_records, PipelineConfig};
use handsort_engine::report::NO_VALID_HANDS;

fn restricted_first() -> PipelineConfig {
    PipelineConfig::new(RankUniverse::Restricted, ParenScope::FirstOnly)
}

fn full_first() -> PipelineConfig {
    PipelineConfig::new(RankUniverse::Full, ParenScope::FirstOnly)
}

fn headings(text: &str) -> Vec<String> {
    // A heading is the first line of each blank-separated block
    text.split("\n\n")
        .filter_map(|block| block.lines().next())
        .map(str::to_string)
        .collect()
}

#[test]
fn single_hand_groups_each_card_in_table_order() {
    let out = analyze_to_string("#N1.3(A♠ 9♦ K♣)", &restricted_first());
    assert_eq!(headings(&out), ["A♠", "9♦", "K♣"]);
    for block in out.split("\n\n") {
        let lines: Vec<&str> = block.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1], "#N1.3(A♠ 9♦ K♣)");
    }
    assert!(!out.ends_with('\n'));
}

#[test]
fn five_of_hearts_needs_full_universe() {
    let input = "#N1.2(6♥ 5♥ 4♥)\n#N2.2(5♥)";
    let out = analyze_to_string(input, &full_first());
    assert_eq!(headings(&out), ["6♥", "5♥", "4♥"]);
    assert!(out.contains("#N2.2(5♥)"));

    let restricted = analyze_to_string("#N2.2(5♥)", &restricted_first());
    assert_eq!(restricted, NO_VALID_HANDS);
}

#[test]
fn presentation_selector_variants_share_a_bucket() {
    let input = "#N1.2(10♠\u{FE0F})\n#N2.2(10♠)";
    let report = analyze(input, &restricted_first());
    assert_eq!(report.card_count(), 1);
    assert_eq!(report.buckets[0].card.to_string(), "10♠");
    assert_eq!(report.buckets[0].lines, ["#N1.2(10♠)", "#N2.2(10♠)"]);
}

#[test]
fn decorated_duplicate_line_collapses() {
    let input = "✅ #N4.9(J♣ Q♣)\n#N4.9(J♣ Q♣)\n#N4.9 ( J♣  Q♣ )";
    let report = analyze(input, &restricted_first());
    for bucket in &report.buckets {
        assert_eq!(bucket.lines, ["#N4.9(J♣ Q♣)"]);
    }
}

#[test]
fn all_scope_emits_one_record_per_group() {
    let config = PipelineConfig::new(RankUniverse::Restricted, ParenScope::All);
    let records = extract_records("#N3.8 (A♠ K♠) vs (Q♥)", &config);
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].label, records[1].label);

    let out = analyze_to_string("#N3.8 (A♠ K♠) vs (Q♥)", &config);
    assert_eq!(
        out,
        "A♠\n#N3.8(A♠ K♠)\n\nK♠\n#N3.8(A♠ K♠)\n\nQ♥\n#N3.8(Q♥)"
    );
}

#[test]
fn second_group_ignored_in_first_only_scope() {
    let out = analyze_to_string("#N3.8 (A♠ K♠) vs (Q♥)", &restricted_first());
    assert!(!out.contains("Q♥"));
}

#[test]
fn input_without_parenthesis_returns_sentinel() {
    assert_eq!(analyze_to_string("", &restricted_first()), NO_VALID_HANDS);
    assert_eq!(
        analyze_to_string("A♠ K♠ Q♠\n#N1.1 nothing here", &restricted_first()),
        NO_VALID_HANDS
    );
}

#[test]
fn parenthesis_without_cards_returns_sentinel() {
    assert_eq!(
        analyze_to_string("#N1.1(no cards here)", &restricted_first()),
        NO_VALID_HANDS
    );
}

#[test]
fn crlf_and_blank_lines_are_tolerated() {
    let input = "\r\n#N1.2(A♦)\r\n\r\n   \n#N2.2(K♦)\r\n";
    let out = analyze_to_string(input, &restricted_first());
    assert_eq!(out, "A♦\n#N1.2(A♦)\n\nK♦\n#N2.2(K♦)");
}

#[test]
fn noise_tokens_around_the_label_are_removed() {
    let input = "🔵#R • #N7.12 — (T♥ 9♥) #T3";
    let out = analyze_to_string(input, &restricted_first());
    assert_eq!(out, "10♥\n#N7.12(10♥ 9♥)\n\n9♥\n#N7.12(10♥ 9♥)");
}

#[test]
fn tag_glued_to_a_card_keeps_the_card() {
    let out = analyze_to_string("#N5.6 (#T10♠ K♦)", &restricted_first());
    assert_eq!(out, "10♠\n#N5.6(10♠ K♦)\n\nK♦\n#N5.6(10♠ K♦)");
}

#[test]
fn first_group_without_cards_hides_later_groups_in_first_only_scope() {
    let input = "#N1.1 (x) (K♦)";
    assert_eq!(analyze_to_string(input, &restricted_first()), NO_VALID_HANDS);

    let all = PipelineConfig::new(RankUniverse::Restricted, ParenScope::All);
    assert_eq!(analyze_to_string(input, &all), "K♦\n#N1.1(K♦)");
}

#[test]
fn repeated_card_in_one_payload_renders_once() {
    let report = analyze("#N1.1(A♠ A♠)", &restricted_first());
    assert_eq!(report.card_count(), 1);
    assert_eq!(report.buckets[0].lines.len(), 1);
}

#[test]
fn lines_keep_first_seen_order_across_input() {
    let input = "#N3.3(A♣)\n#N1.3(A♣)\n#N2.3(A♣)\n#N1.3(A♣)";
    let report = analyze(input, &restricted_first());
    assert_eq!(
        report.buckets[0].lines,
        ["#N3.3(A♣)", "#N1.3(A♣)", "#N2.3(A♣)"]
    );
}

#[test]
fn report_serializes_as_bucket_list() {
    let report = analyze("#N1.1(K♦)", &restricted_first());
    let json = serde_json::to_value(&report).expect("serialize");
    assert_eq!(
        json,
        serde_json::json!([{ "card": "K♦", "lines": ["#N1.1(K♦)"] }])
    );
}
