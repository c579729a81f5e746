//! LLM call boundary: the [`Llm`] trait and the OpenRouter implementation.

use std::time::Duration;

use itemcheck_shared::{ItemCheckError, Result};

/// User-Agent string for OpenRouter requests.
const USER_AGENT: &str = concat!("itemcheck/", env!("CARGO_PKG_VERSION"));

/// OpenRouter chat-completions endpoint.
const OPENROUTER_URL: &str = "https://openrouter.ai/api/v1/chat/completions";

/// Request timeout. Review prompts are large and models are slow.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

/// The single external capability the review pipeline needs: one prompt in,
/// one reply out. Implemented over HTTP in production and by stubs in tests.
pub trait Llm {
    fn complete(&self, prompt: &str) -> Result<String>;
}

/// OpenRouter chat-completions client (blocking).
pub struct OpenRouterClient {
    client: reqwest::blocking::Client,
    api_key: String,
    model: String,
}

impl OpenRouterClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ItemCheckError::Llm(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }
}

impl Llm for OpenRouterClient {
    fn complete(&self, prompt: &str) -> Result<String> {
        let body = serde_json::json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
        });

        tracing::debug!(model = %self.model, prompt_chars = prompt.len(), "sending LLM request");

        let response = self
            .client
            .post(OPENROUTER_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .map_err(|e| ItemCheckError::Llm(format!("request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(ItemCheckError::Llm(format!(
                "OpenRouter returned HTTP {status}: {detail}"
            )));
        }

        let payload: serde_json::Value = response
            .json()
            .map_err(|e| ItemCheckError::Llm(format!("invalid response body: {e}")))?;

        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| {
                ItemCheckError::Llm("response has no choices[0].message.content".to_string())
            })?;

        tracing::debug!(reply_chars = content.len(), "LLM reply received");
        Ok(content.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_builds() {
        let client = OpenRouterClient::new("test-key", "test/model");
        assert!(client.is_ok());
    }
}
