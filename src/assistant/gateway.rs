use std::sync::Arc;

use super::error::AssistantError;
use super::prompt::{PromptContext, build_prompt};
use super::transport::{GeminiTransport, Transport};
use crate::utils::AssistantConfig;

/// Explicitly constructed assistant client
///
/// Credential presence is fixed at construction: a blank key is treated as absent, and every
/// `ask` on an unconfigured gateway fails with [`AssistantError::Unconfigured`] without
/// touching the transport. Cloning is cheap; clones share the transport.
#[derive(Clone)]
pub struct AssistantGateway {
    credential: Option<String>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for AssistantGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssistantGateway").field("configured", &self.is_configured()).finish()
    }
}

impl AssistantGateway {
    pub fn new(credential: Option<String>, transport: Arc<dyn Transport>) -> Self {
        let credential = credential.filter(|key| !key.trim().is_empty());
        Self { credential, transport }
    }

    /// Gateway talking to Gemini with the configured model and endpoint
    pub fn from_config(config: &AssistantConfig) -> Self {
        let transport = GeminiTransport::new(&config.endpoint, &config.model);
        tracing::debug!(
            url = transport.url(),
            configured = config.api_key.is_some(),
            "Assistant gateway ready"
        );
        Self::new(config.api_key.clone(), Arc::new(transport))
    }

    pub fn is_configured(&self) -> bool {
        self.credential.is_some()
    }

    /// Ask one question with its context; the whole reply text is returned verbatim
    pub async fn ask(
        &self,
        question: &str,
        context: &PromptContext,
    ) -> Result<String, AssistantError> {
        let Some(api_key) = self.credential.as_deref() else {
            tracing::debug!("Assistant call skipped: no credential");
            return Err(AssistantError::Unconfigured);
        };

        let prompt = build_prompt(question, context);
        match self.transport.generate(api_key, &prompt).await {
            Ok(reply) => {
                tracing::debug!(chars = reply.len(), "Assistant replied");
                Ok(reply)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Assistant call failed");
                Err(e)
            }
        }
    }
}
