//! Remote assistant access
//!
//! # Architecture
//!
//! - `prompt`: typed site/project context and prompt text
//! - `transport`: the HTTP call ([`Transport`] trait, Gemini implementation)
//! - `gateway`: credential check, prompt construction, error logging
//! - `dispatch`: runs calls on the tokio runtime and hands replies back to their view
//!
//! # Error Handling
//!
//! Every failure is an [`AssistantError`]. Callers never show the error itself; they show
//! [`AssistantError::user_message`], so the worst a failure can do is replace one answer
//! with a static apology.

pub mod dispatch;
pub mod error;
pub mod gateway;
pub mod prompt;
pub mod transport;

pub use dispatch::{Completion, ReplyChannel};
pub use error::{AssistantError, FALLBACK_REPLY, UNAVAILABLE_REPLY, reply_text};
pub use gateway::AssistantGateway;
pub use prompt::{EXPLAINER_QUESTION, ProjectContext, PromptContext, SiteContext, build_prompt};
pub use transport::{GeminiTransport, Transport};
