use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const HELLO_MESSAGE: &str = "Hello from REST API!";
pub const FRAMEWORK: &str = "Axum";
pub const RUNTIME: &str = "Tokio";

/// Greeting returned by `GET /hello`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelloInfo {
    pub message: String,
    #[serde(with = "super::timestamp")]
    pub timestamp: DateTime<Utc>,
    pub framework: String,
    pub runtime: String,
}

impl HelloInfo {
    /// Greeting stamped with the given instant
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            message: HELLO_MESSAGE.to_string(),
            timestamp: now,
            framework: FRAMEWORK.to_string(),
            runtime: RUNTIME.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hello_info_serialization() {
        let now = DateTime::parse_from_rfc3339("2022-01-01T00:00:00.250Z").unwrap().with_timezone(&Utc);
        let json = serde_json::to_string(&HelloInfo::at(now)).expect("Failed to serialize hello info");
        let expected = r#"{"message":"Hello from REST API!","timestamp":"2022-01-01T00:00:00.250Z","framework":"Axum","runtime":"Tokio"}"#;
        assert_eq!(json, expected);
    }
}
