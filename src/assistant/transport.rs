//! Wire-level access to the generative-language endpoint

use futures::future::BoxFuture;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::error::AssistantError;

/// Sends one prompt and returns the raw reply text
///
/// Implementations are shared across tasks, so they must be `Send + Sync`. Tests substitute
/// counting doubles here.
pub trait Transport: Send + Sync {
    fn generate<'a>(
        &'a self,
        api_key: &'a str,
        prompt: &'a str,
    ) -> BoxFuture<'a, Result<String, AssistantError>>;
}

/// Google Gemini `generateContent` over HTTPS
#[derive(Debug, Clone)]
pub struct GeminiTransport {
    client: Client,
    url: String,
}

impl GeminiTransport {
    pub fn new(endpoint: &str, model: &str) -> Self {
        Self::with_client(Client::new(), endpoint, model)
    }

    pub fn with_client(client: Client, endpoint: &str, model: &str) -> Self {
        let url =
            format!("{}/v1beta/models/{}:generateContent", endpoint.trim_end_matches('/'), model);
        Self { client, url }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn send(&self, api_key: &str, prompt: &str) -> Result<String, AssistantError> {
        let request = GenerateRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: prompt }] }],
        };

        let response = self
            .client
            .post(&self.url)
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| AssistantError::UpstreamFailure(format!("request error: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AssistantError::UpstreamFailure(format!(
                "HTTP {}: {}",
                status.as_u16(),
                truncate(&body, 200)
            )));
        }

        let payload: GenerateResponse = response
            .json()
            .await
            .map_err(|e| AssistantError::UpstreamFailure(format!("malformed payload: {}", e)))?;

        payload.into_text().ok_or_else(|| {
            AssistantError::UpstreamFailure("response contained no candidate text".to_string())
        })
    }
}

impl Transport for GeminiTransport {
    fn generate<'a>(
        &'a self,
        api_key: &'a str,
        prompt: &'a str,
    ) -> BoxFuture<'a, Result<String, AssistantError>> {
        Box::pin(self.send(api_key, prompt))
    }
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

impl GenerateResponse {
    /// Concatenated text parts of the first candidate, verbatim
    ///
    /// `None` when the candidate carries no text at all, which counts as a malformed payload.
    fn into_text(self) -> Option<String> {
        let content = self.candidates.into_iter().next()?.content?;
        let text: String = content.parts.into_iter().filter_map(|part| part.text).collect();
        if text.is_empty() { None } else { Some(text) }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let head: String = text.chars().take(max_chars).collect();
        format!("{}...", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_built_from_endpoint_and_model() {
        let transport = GeminiTransport::new("https://example.test/", "gemini-pro");
        assert_eq!(
            transport.url(),
            "https://example.test/v1beta/models/gemini-pro:generateContent"
        );
    }

    #[test]
    fn test_request_shape() {
        let request = GenerateRequest {
            contents: vec![RequestContent { parts: vec![RequestPart { text: "hello" }] }],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json, serde_json::json!({"contents": [{"parts": [{"text": "hello"}]}]}));
    }

    #[test]
    fn test_response_text_concatenates_parts() {
        let payload: GenerateResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"parts": [{"text": "Hello, "}, {"text": "world"}]}},
                               {"content": {"parts": [{"text": "ignored"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(payload.into_text().as_deref(), Some("Hello, world"));
    }

    #[test]
    fn test_response_without_candidates() {
        let payload: GenerateResponse = serde_json::from_str(r#"{"promptFeedback": {}}"#).unwrap();
        assert!(payload.into_text().is_none());

        let blocked: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).unwrap();
        assert!(blocked.into_text().is_none());
    }

    #[test]
    fn test_response_text_is_verbatim() {
        let payload: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": [{"text": "  "}]}}]}"#)
                .unwrap();
        assert_eq!(payload.into_text().as_deref(), Some("  "));

        let empty: GenerateResponse =
            serde_json::from_str(r#"{"candidates": [{"content": {"parts": [{"text": ""}]}}]}"#)
                .unwrap();
        assert!(empty.into_text().is_none());
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
    }
}
