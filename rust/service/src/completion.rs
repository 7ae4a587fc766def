//! Seam for the chat-completion collaborator used by free-form questions.
//!
//! No network client lives in this crate: callers inject a [`CompletionBackend`].

use serde::{Deserialize, Serialize};

use crate::errors::ServiceError;

/// Text deltas in arrival order.
pub type CompletionStream = Box<dyn Iterator<Item = Result<String, ServiceError>> + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// A streamed chat request: model name plus the conversation so far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

/// User message carrying the pasted hands and the question.
pub fn user_prompt(data: &str, question: &str) -> String {
    format!("Mains :\n{}\n\nQuestion : {}", data, question)
}

/// Trait for completion providers.
///
/// # Example Implementation
///
/// ```rust
/// use handsort_service::completion::{CompletionBackend, CompletionRequest, CompletionStream};
/// use handsort_service::ServiceError;
///
/// struct Echo;
///
/// impl CompletionBackend for Echo {
///     fn stream(&self, request: &CompletionRequest) -> Result<CompletionStream, ServiceError> {
///         let last = request.messages.last().map(|m| m.content.clone()).unwrap_or_default();
///         Ok(Box::new(std::iter::once(Ok(last))))
///     }
///
///     fn name(&self) -> &str {
///         "echo"
///     }
/// }
/// ```
pub trait CompletionBackend: Send + Sync {
    /// Start a streamed completion.
    fn stream(&self, request: &CompletionRequest) -> Result<CompletionStream, ServiceError>;

    fn name(&self) -> &str;
}
