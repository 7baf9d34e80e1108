use chrono::Utc;
use log::info;
use serde_json::Value;

use crate::contact::api::{ApiError, ContactApi};

#[derive(Clone, Debug, PartialEq)]
pub struct HealthReport {
    pub connected: bool,
    pub status: Option<u16>,
    pub response_time_ms: Option<i64>,
    pub body: Value,
    pub error: Option<String>,
    pub url: String,
}

/// Pings `GET /health` once and times the round trip. Diagnostics only, the
/// submission flow never calls this.
pub async fn probe_health(api: &dyn ContactApi, base_url: &str) -> HealthReport {
    let started = Utc::now();
    let result = api.health().await;
    let elapsed = (Utc::now() - started).num_milliseconds();

    let report = match result {
        Ok(probe) => HealthReport {
            connected: (200..300).contains(&probe.status),
            status: Some(probe.status),
            response_time_ms: Some(elapsed),
            body: probe.body,
            error: None,
            url: base_url.to_string(),
        },
        Err(err) => HealthReport {
            connected: false,
            status: match &err {
                ApiError::Rejected { status, .. } => *status,
                _ => None,
            },
            response_time_ms: None,
            body: Value::Null,
            error: Some(err.to_string()),
            url: base_url.to_string(),
        },
    };

    info!(
        "Health probe of {}: connected={} status={:?} time={:?}ms",
        report.url, report.connected, report.status, report.response_time_ms
    );
    report
}
