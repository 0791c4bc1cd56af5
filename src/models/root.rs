use serde::{Deserialize, Serialize};

use crate::routes::{HEALTH_PATH, HELLO_PATH};

pub const WELCOME_MESSAGE: &str = "Welcome to the REST API";
pub const API_VERSION: &str = "1.0.0";

/// Service description returned by `GET /`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootInfo {
    pub message: String,
    pub version: String,
    pub endpoints: Vec<String>,
}

impl Default for RootInfo {
    fn default() -> Self {
        Self {
            message: WELCOME_MESSAGE.to_string(),
            version: API_VERSION.to_string(),
            endpoints: vec![HELLO_PATH.to_string(), HEALTH_PATH.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_info_serialization() {
        let json = serde_json::to_string(&RootInfo::default()).expect("Failed to serialize root info");
        let expected = r#"{"message":"Welcome to the REST API","version":"1.0.0","endpoints":["/hello","/health"]}"#;
        assert_eq!(json, expected);
    }
}
