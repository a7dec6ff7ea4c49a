//! Bridge health status

use serde::{Deserialize, Serialize};

/// Response body of `GET /health`
///
/// Only the fields the client displays are typed; anything else the bridge
/// adds is ignored. `timestamp` is kept as raw JSON because bridges report
/// it either as an ISO string or as epoch milliseconds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthStatus {
    #[serde(
        default,
        deserialize_with = "crate::core::lenient::text",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<serde_json::Value>,
}

impl HealthStatus {
    /// Timestamp for display, `"N/A"` when absent or null
    pub fn timestamp_display(&self) -> String {
        match &self.timestamp {
            None | Some(serde_json::Value::Null) => "N/A".to_string(),
            Some(serde_json::Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
