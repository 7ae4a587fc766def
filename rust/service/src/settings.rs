use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Question prefix that selects the deterministic report.
pub const DEFAULT_TRIGGER: &str = "analyse ces mains";

/// Model requested from the completion backend for free-form questions.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

pub const DEFAULT_SYSTEM_PROMPT: &str =
    "Tu es un assistant spécialisé dans l’analyse de mains de cartes. Réponds en français.";

/// Settings of the question router
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceSettings {
    /// Normalized, case-insensitive prefix routed to the deterministic report
    pub trigger: String,
    /// Model name forwarded to the completion backend
    pub model: String,
    /// System message sent ahead of every free-form question
    pub system_prompt: String,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            trigger: DEFAULT_TRIGGER.to_string(),
            model: DEFAULT_MODEL.to_string(),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
        }
    }
}

impl ServiceSettings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.trigger.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "trigger cannot be empty".to_string(),
            ));
        }

        if self.model.trim().is_empty() {
            return Err(SettingsError::InvalidValue(
                "model cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("Invalid value: {0}")]
    InvalidValue(String),
}
