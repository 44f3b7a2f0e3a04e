#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use serde_json::json;

use reqtally_core::{EndpointMetrics, MetricsAggregator, MetricsSnapshot, Outcome, StatusClassifier};

#[test]
fn wire_uses_external_field_names() {
    let v = serde_json::to_value(EndpointMetrics::new(3, 2)).unwrap();
    assert_eq!(v, json!({ "total_calls": 5, "success": 3, "errors": 2 }));
}

#[test]
fn wire_rejects_inconsistent_totals() {
    let bad = r#"{ "total_calls": 4, "success": 3, "errors": 2 }"#;
    let err = serde_json::from_str::<EndpointMetrics>(bad).expect_err("must fail");
    assert!(err.to_string().contains("total_calls"), "{err}");

    let renamed = r#"{ "total_calls": 1, "success_count": 1, "error_count": 0 }"#;
    assert!(serde_json::from_str::<EndpointMetrics>(renamed).is_err());
}

#[test]
fn snapshot_serializes_as_flat_object() {
    let agg = MetricsAggregator::new();
    agg.record("/api/v1/orders/", true);
    agg.record("/api/v1/orders/", false);
    agg.record("/metrics/", true);

    let s = serde_json::to_string(&agg.snapshot()).unwrap();
    assert_eq!(
        s,
        r#"{"/api/v1/orders/":{"total_calls":2,"success":1,"errors":1},"/metrics/":{"total_calls":1,"success":1,"errors":0}}"#
    );

    let back: MetricsSnapshot = serde_json::from_str(&s).unwrap();
    assert_eq!(back, agg.snapshot());
}

#[test]
fn prometheus_render_lists_both_outcomes() {
    let agg = MetricsAggregator::new();
    agg.record("/orders/", true);
    agg.record("/orders/", true);
    agg.record("/orders/", false);

    let text = agg.snapshot().render_prometheus("reqtally");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "# TYPE reqtally_requests_total counter",
            r#"reqtally_requests_total{endpoint="/orders/",outcome="success"} 2"#,
            r#"reqtally_requests_total{endpoint="/orders/",outcome="error"} 1"#,
        ]
    );
}

#[test]
fn prometheus_render_escapes_labels() {
    let agg = MetricsAggregator::new();
    agg.record("/we\"ird\\path\n", false);

    let text = agg.snapshot().render_prometheus("x");
    assert!(
        text.contains(r#"x_requests_total{endpoint="/we\"ird\\path\n",outcome="error"} 1"#),
        "{text}"
    );
}

#[test]
fn prometheus_render_of_empty_snapshot_is_header_only() {
    let text = MetricsSnapshot::default().render_prometheus("reqtally");
    assert_eq!(text, "# TYPE reqtally_requests_total counter\n");
}

#[test]
fn default_classifier_counts_2xx_and_3xx_as_success() {
    let c = StatusClassifier::default();
    assert_eq!(c.classify(200), Outcome::Success);
    assert_eq!(c.classify(201), Outcome::Success);
    assert_eq!(c.classify(302), Outcome::Success);
    assert_eq!(c.classify(399), Outcome::Success);
    assert_eq!(c.classify(400), Outcome::Error);
    assert_eq!(c.classify(404), Outcome::Error);
    assert_eq!(c.classify(500), Outcome::Error);
    assert_eq!(c.classify(199), Outcome::Error);
}

#[test]
fn custom_classifier_boundary() {
    let c = StatusClassifier::new(200, 300).unwrap();
    assert_eq!(c.range(), 200..300);
    assert!(c.classify(204).is_success());
    assert!(!c.classify(301).is_success());
}

#[test]
fn classifier_rejects_bad_ranges() {
    for (min, max) in [(300, 300), (400, 200), (0, 400), (200, 601)] {
        let err = StatusClassifier::new(min, max).expect_err("must fail");
        assert_eq!(err.client_code().as_str(), "BAD_REQUEST", "{min}..{max}");
    }
}
