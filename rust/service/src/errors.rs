/// Error handling for the request layer
///
/// This module provides:
/// - The structured failure body returned to callers
/// - Error codes and severities for every service error
/// - Severity-based logging through `tracing`
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::settings::SettingsError;

/// Standard failure body for every request kind
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Machine-readable error code (e.g., "no_backend")
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (structured data)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(
        error: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

/// Error classification for logging levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Caller mistakes - expected, normal operation
    Client,
    /// Collaborator or environment failures - needs investigation
    Server,
    /// A fault inside the pipeline itself
    Critical,
}

/// Trait for converting errors to failure bodies with proper logging
pub trait IntoErrorResponse {
    /// Get the error code string (machine-readable)
    fn error_code(&self) -> &'static str;

    /// Get the error message (human-readable)
    fn error_message(&self) -> String;

    fn error_details(&self) -> Option<serde_json::Value> {
        None
    }

    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Server
    }

    fn to_error_response(&self) -> ErrorResponse {
        if let Some(details) = self.error_details() {
            ErrorResponse::with_details(self.error_code(), self.error_message(), details)
        } else {
            ErrorResponse::new(self.error_code(), self.error_message())
        }
    }

    /// Build the failure body and log it at the level its severity calls for
    fn log_and_respond(&self) -> ErrorResponse {
        let response = self.to_error_response();
        match self.severity() {
            ErrorSeverity::Client => {
                tracing::info!(code = %response.error, "client error: {}", response.message)
            }
            ErrorSeverity::Server => {
                tracing::error!(code = %response.error, "server error: {}", response.message)
            }
            ErrorSeverity::Critical => tracing::error!(
                code = %response.error,
                critical = true,
                "critical error: {}",
                response.message
            ),
        }
        response
    }
}

/// Everything that can go wrong around the pipeline
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("No completion backend is configured for free-form questions")]
    NoBackend,
    #[error("Completion backend failed: {0}")]
    Backend(String),
    #[error("Internal error: {0}")]
    Internal(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid settings: {0}")]
    Settings(#[from] SettingsError),
}

impl IntoErrorResponse for ServiceError {
    fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NoBackend => "no_backend",
            ServiceError::Backend(_) => "backend_error",
            ServiceError::Internal(_) => "internal_error",
            ServiceError::Io(_) => "io_error",
            ServiceError::Settings(_) => "invalid_settings",
        }
    }

    fn error_message(&self) -> String {
        self.to_string()
    }

    fn severity(&self) -> ErrorSeverity {
        match self {
            ServiceError::Settings(_) => ErrorSeverity::Client,
            ServiceError::Internal(_) => ErrorSeverity::Critical,
            ServiceError::NoBackend | ServiceError::Backend(_) | ServiceError::Io(_) => {
                ErrorSeverity::Server
            }
        }
    }
}
