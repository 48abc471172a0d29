use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Static Table Models
// ============================================================================

/// One row of the canned weather table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeatherRecord {
    pub temperature: &'static str,
    pub unit: &'static str,
    pub conditions: &'static str,
}

// ============================================================================
// Tool Result Models
// ============================================================================

/// Result of a city lookup, tagged by `status` on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ToolOutcome {
    Success { report: String },
    Error { error_message: String },
}

impl ToolOutcome {
    pub fn success(report: impl Into<String>) -> Self {
        Self::Success {
            report: report.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error_message: message.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// The report on success, or the error message otherwise
    pub fn text(&self) -> &str {
        match self {
            Self::Success { report } => report,
            Self::Error { error_message } => error_message,
        }
    }
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CityRequest {
    /// Name of the city, e.g. "London" or "new york"
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_serializes_with_status_tag() {
        let outcome = ToolOutcome::success("ok");
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"status": "success", "report": "ok"})
        );
    }

    #[test]
    fn error_serializes_with_error_message() {
        let outcome = ToolOutcome::error("nope");
        assert_eq!(
            serde_json::to_value(&outcome).unwrap(),
            json!({"status": "error", "error_message": "nope"})
        );
        assert!(!outcome.is_success());
        assert_eq!(outcome.text(), "nope");
    }
}
