//! # handsort_service: Request Layer Around the Hand Report
//!
//! Transport-agnostic handling of the two request kinds a front end needs:
//!
//! - [`process`] - report a pasted block of hands, wrapped in a success/failure envelope
//! - [`ask`] - route a question to the deterministic report or to a completion backend
//!
//! Pipeline faults never escape: they are caught at this boundary and turned
//! into structured failures (see [`errors`]). Logging setup lives in [`logging`].

pub mod ask;
pub mod completion;
pub mod errors;
pub mod logging;
pub mod process;
pub mod settings;

pub use ask::{AskRequest, AskRoute, HandService};
pub use completion::{ChatMessage, ChatRole, CompletionBackend, CompletionRequest, CompletionStream};
pub use errors::{ErrorResponse, ErrorSeverity, IntoErrorResponse, ServiceError};
pub use logging::{init_logging, LogEntry, LogFormat, TestLogSubscriber};
pub use process::{process, run_pipeline, ProcessRequest, ProcessResponse};
pub use settings::{ServiceSettings, SettingsError};
