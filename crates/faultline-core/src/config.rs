//! Configuration module for Faultline.
//!
//! Provides the typed configuration struct for the error-telemetry client,
//! with defaults and validation.

use serde::{Deserialize, Serialize};

/// Default collector endpoint for outbound reports.
pub const DEFAULT_ENDPOINT: &str = "https://collector.faultline.dev/api/1/item/";

/// Error-telemetry client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    /// Master switch; when false no reports are captured or sent.
    pub enabled: bool,
    /// Whether telemetry breadcrumbs are recorded and included in reports.
    /// When false, the truncation engine strips the telemetry field entirely.
    pub capture_telemetry: bool,
    /// Collector URL that receives encoded payloads.
    pub endpoint: String,
    /// Project access token sent with each payload. `None` until configured.
    pub access_token: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            capture_telemetry: true,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            access_token: None,
        }
    }
}

/// A single validation error found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path to the offending field, e.g. `"telemetry.endpoint"`.
    pub field: String,
    /// Human-readable explanation.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl TelemetryConfig {
    /// Validate the configuration and return all errors found.
    ///
    /// An empty vector means the configuration is valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.endpoint.is_empty() {
            errors.push(ValidationError {
                field: "telemetry.endpoint".into(),
                message: "must not be empty".into(),
            });
        } else if !self.endpoint.starts_with("http://") && !self.endpoint.starts_with("https://") {
            errors.push(ValidationError {
                field: "telemetry.endpoint".into(),
                message: format!("must be an http(s) URL, got: {}", self.endpoint),
            });
        }

        if self.enabled && self.access_token.as_deref().is_some_and(str::is_empty) {
            errors.push(ValidationError {
                field: "telemetry.access_token".into(),
                message: "must not be empty when set".into(),
            });
        }

        errors
    }
}
