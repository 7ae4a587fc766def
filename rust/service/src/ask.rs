//! Question routing: trigger-prefixed questions get the deterministic report,
//! anything else is streamed from the injected completion backend.

use std::io::Write;

use handsort_engine::normalize::normalize;
use handsort_engine::pipeline::PipelineConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::completion::{user_prompt, ChatMessage, CompletionBackend, CompletionRequest};
use crate::errors::ServiceError;
use crate::process::run_pipeline;
use crate::settings::ServiceSettings;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskRequest {
    #[serde(default)]
    pub data: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
}

/// Which path answered a question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AskRoute {
    /// The report pipeline, no model involved
    Deterministic,
    /// The completion backend
    Completion,
}

/// Pipeline, router settings and optional completion backend, shared by all requests.
pub struct HandService {
    config: PipelineConfig,
    settings: ServiceSettings,
    backend: Option<Box<dyn CompletionBackend>>,
}

impl std::fmt::Debug for HandService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandService")
            .field("config", &self.config)
            .field("settings", &self.settings)
            .field("backend", &self.backend.as_ref().map(|b| b.name().to_string()))
            .finish()
    }
}

impl HandService {
    pub fn new(config: PipelineConfig) -> Self {
        Self {
            config,
            settings: ServiceSettings::default(),
            backend: None,
        }
    }

    /// Replace the router settings.
    ///
    /// # Errors
    ///
    /// [`ServiceError::Settings`] when `settings` fail validation.
    pub fn with_settings(mut self, settings: ServiceSettings) -> Result<Self, ServiceError> {
        settings.validate()?;
        self.settings = settings;
        Ok(self)
    }

    pub fn with_backend(mut self, backend: Box<dyn CompletionBackend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Decide which path answers `question`.
    ///
    /// ```rust
    /// use handsort_engine::pipeline::PipelineConfig;
    /// use handsort_service::{AskRoute, HandService};
    ///
    /// let service = HandService::new(PipelineConfig::default());
    /// assert_eq!(service.route("  Analyse ces   mains svp"), AskRoute::Deterministic);
    /// assert_eq!(service.route("Qui gagne ?"), AskRoute::Completion);
    /// ```
    pub fn route(&self, question: &str) -> AskRoute {
        let question = normalize(question).to_lowercase();
        let trigger = normalize(&self.settings.trigger).to_lowercase();
        if question.starts_with(&trigger) {
            AskRoute::Deterministic
        } else {
            AskRoute::Completion
        }
    }

    pub fn completion_request(&self, data: &str, question: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.settings.model.clone(),
            messages: vec![
                ChatMessage::system(self.settings.system_prompt.clone()),
                ChatMessage::user(user_prompt(data, question)),
            ],
        }
    }

    /// Answer `request`, writing the text to `sink` as it becomes available.
    ///
    /// # Errors
    ///
    /// - [`ServiceError::Internal`] if the pipeline faults
    /// - [`ServiceError::NoBackend`] for a free-form question without a backend
    /// - [`ServiceError::Backend`] when the backend fails to start or mid-stream
    /// - [`ServiceError::Io`] when writing to `sink` fails
    pub fn ask(&self, request: &AskRequest, sink: &mut dyn Write) -> Result<AskRoute, ServiceError> {
        let data = request.data.as_deref().unwrap_or("");
        let question = request.question.as_deref().unwrap_or("");
        let route = self.route(question);
        debug!(route = ?route, "question routed");

        match route {
            AskRoute::Deterministic => {
                let text = run_pipeline(data, &self.config)?;
                sink.write_all(text.as_bytes())?;
            }
            AskRoute::Completion => {
                let backend = self.backend.as_deref().ok_or(ServiceError::NoBackend)?;
                let stream = backend.stream(&self.completion_request(data, question))?;
                let mut chunks = 0usize;
                for delta in stream {
                    let delta = delta?;
                    if delta.is_empty() {
                        continue;
                    }
                    sink.write_all(delta.as_bytes())?;
                    chunks += 1;
                }
                info!(backend = backend.name(), chunks, "completion streamed");
            }
        }
        sink.flush()?;
        Ok(route)
    }
}
