//! Sequential record/snapshot scenarios driven by JSON vectors.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use reqtally_core::MetricsAggregator;

mod vector_loader;
use vector_loader::load;

#[test]
fn scenario_vectors() {
    let files = [
        "single_success.json",
        "success_then_error.json",
        "two_endpoints.json",
        "fresh.json",
        "opaque_keys.json",
    ];

    for f in files {
        let v = load(f);
        let agg = MetricsAggregator::new();
        v.replay(&agg);

        let snap = agg.snapshot();
        assert_eq!(snap, v.expect, "vector={}", v.description);
        assert_eq!(agg.len(), v.expect.len(), "vector={}", v.description);

        for (endpoint, m) in &snap {
            assert_eq!(
                m.total_calls(),
                m.success_count() + m.error_count(),
                "vector={} endpoint={endpoint:?}",
                v.description
            );
        }
    }
}

#[test]
fn vectors_match_wire_json() {
    // The serialized snapshot must reproduce the vector's `expect` object.
    let v = load("two_endpoints.json");
    let agg = MetricsAggregator::new();
    v.replay(&agg);

    let got = serde_json::to_value(agg.snapshot()).unwrap();
    let want = serde_json::to_value(&v.expect).unwrap();
    assert_eq!(got, want);
    assert_eq!(got["/b/"]["errors"], 1);
}
