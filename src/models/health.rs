use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const HEALTHY: &str = "healthy";

/// Liveness report returned by `GET /health`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthInfo {
    pub status: String,
    /// Seconds since process start
    pub uptime: f64,
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,
}

impl HealthInfo {
    pub fn healthy(uptime: Duration, now: DateTime<Utc>) -> Self {
        Self {
            status: HEALTHY.to_string(),
            uptime: uptime.as_secs_f64(),
            timestamp: now,
        }
    }
}
