/// Shown in place of a reply when the upstream call fails for any reason
pub const FALLBACK_REPLY: &str = "I'm sorry, I encountered an error. Please try again later.";

/// Shown when no API credential was configured
pub const UNAVAILABLE_REPLY: &str =
    "The AI assistant is unavailable: no API key is configured for this site.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AssistantError {
    /// No credential; detected before any network call
    #[error("assistant is not configured (no API key)")]
    Unconfigured,

    /// Network error, non-success status, or a reply without text
    #[error("assistant request failed: {0}")]
    UpstreamFailure(String),
}

impl AssistantError {
    /// The static string a user sees instead of a generated answer
    pub fn user_message(&self) -> &'static str {
        match self {
            AssistantError::Unconfigured => UNAVAILABLE_REPLY,
            AssistantError::UpstreamFailure(_) => FALLBACK_REPLY,
        }
    }
}

/// Collapse an assistant result into the text a user sees
pub fn reply_text(result: Result<String, AssistantError>) -> String {
    match result {
        Ok(reply) => reply,
        Err(e) => e.user_message().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        assert_eq!(AssistantError::Unconfigured.user_message(), UNAVAILABLE_REPLY);
        assert_eq!(
            AssistantError::UpstreamFailure("HTTP 500".to_string()).user_message(),
            FALLBACK_REPLY
        );
        assert!(UNAVAILABLE_REPLY.contains("unavailable"));
    }

    #[test]
    fn test_reply_text() {
        assert_eq!(reply_text(Ok("hi".to_string())), "hi");
        assert_eq!(
            reply_text(Err(AssistantError::UpstreamFailure("timeout".to_string()))),
            FALLBACK_REPLY
        );
    }

    #[test]
    fn test_error_display_includes_detail() {
        let err = AssistantError::UpstreamFailure("HTTP 503".to_string());
        assert_eq!(err.to_string(), "assistant request failed: HTTP 503");
    }
}
