use handsort_engine::pipeline::PipelineConfig;
use handsort_service::{process, run_pipeline, ProcessRequest, TestLogSubscriber};
use tracing::Level;

#[test]
fn process_logs_report_summary() {
    let subscriber = TestLogSubscriber::new();
    let request = ProcessRequest {
        data: Some("#N1.2(A♠ K♠)\n#N2.2(A♠)".into()),
    };

    let response = subscriber.capture(|| process(&request, &PipelineConfig::default()));
    assert!(response.success);

    let entries = subscriber.entries();
    let summary = entries
        .iter()
        .find(|e| e.message.contains("report built"))
        .expect("summary event");
    assert_eq!(summary.level, Level::INFO);
    assert_eq!(summary.field("cards"), Some("2"));
    assert_eq!(summary.field("lines"), Some("3"));
}

#[test]
fn skipped_lines_are_reported_at_debug_level() {
    let subscriber = TestLogSubscriber::new();
    subscriber.capture(|| run_pipeline("no hand here\n#N1.1(A♠)", &PipelineConfig::default()))
        .expect("pipeline result");

    let skipped: Vec<_> = subscriber
        .entries()
        .into_iter()
        .filter(|e| e.message.contains("line produced no hand"))
        .collect();
    assert_eq!(skipped.len(), 1);
    assert_eq!(skipped[0].level, Level::DEBUG);
    assert_eq!(skipped[0].field("line"), Some("1"));
}

#[test]
fn process_is_deterministic() {
    let request = ProcessRequest {
        data: Some("✅ #N3.4(Q♦ 10♦ T♦)\n#N1.4(J♥)".into()),
    };
    let first = process(&request, &PipelineConfig::default());
    let second = process(&request, &PipelineConfig::default());
    assert_eq!(first, second);
    assert_eq!(
        first.result.as_deref(),
        Some("Q♦\n#N3.4(Q♦ 10♦ 10♦)\n\n10♦\n#N3.4(Q♦ 10♦ 10♦)\n\nJ♥\n#N1.4(J♥)")
    );
}
