//! One-shot report requests and the fault boundary around the pipeline.

use std::panic::{self, AssertUnwindSafe};

use handsort_engine::pipeline::{analyze, PipelineConfig};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{IntoErrorResponse, ServiceError};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessRequest {
    #[serde(default)]
    pub data: Option<String>,
}

/// `{"success":true,"result":...}` or `{"success":false,"error":...}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessResponse {
    pub fn ok(result: impl Into<String>) -> Self {
        Self {
            success: true,
            result: Some(result.into()),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            result: None,
            error: Some(error.into()),
        }
    }
}

/// Run the pipeline, turning a panic into [`ServiceError::Internal`].
pub fn run_pipeline(data: &str, config: &PipelineConfig) -> Result<String, ServiceError> {
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| analyze(data, config)));
    match outcome {
        Ok(report) => {
            info!(
                cards = report.card_count(),
                lines = report.line_count(),
                "report built"
            );
            Ok(report.render())
        }
        Err(payload) => {
            let message = payload
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| payload.downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "pipeline panicked".to_string());
            Err(ServiceError::Internal(message))
        }
    }
}

/// Answer a report request. Never fails: faults become `success: false`.
pub fn process(request: &ProcessRequest, config: &PipelineConfig) -> ProcessResponse {
    let data = request.data.as_deref().unwrap_or("");
    match run_pipeline(data, config) {
        Ok(text) => ProcessResponse::ok(text),
        Err(e) => {
            let body = e.log_and_respond();
            ProcessResponse::failed(body.message)
        }
    }
}
