//! JSON scenario vector loader shared by aggregator tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::fs;

use serde::Deserialize;

use reqtally_core::{MetricsAggregator, MetricsSnapshot};

#[derive(Debug, Deserialize)]
pub struct ScenarioVector {
    pub description: String,
    pub records: Vec<RecordCall>,
    pub expect: MetricsSnapshot,
}

#[derive(Debug, Deserialize)]
pub struct RecordCall {
    pub endpoint: String,
    pub succeeded: bool,
}

impl ScenarioVector {
    /// Replay every call against `agg` in order.
    pub fn replay(&self, agg: &MetricsAggregator) {
        for r in &self.records {
            agg.record(&r.endpoint, r.succeeded);
        }
    }
}

pub fn load(name: &str) -> ScenarioVector {
    let s = fs::read_to_string(format!("tests/vectors/{name}"))
        .unwrap_or_else(|e| panic!("read vector {name}: {e}"));
    serde_json::from_str(&s).unwrap_or_else(|e| panic!("parse vector {name}: {e}"))
}
