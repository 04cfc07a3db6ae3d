//! Completion client implementation using reqwest.

use std::thread;
use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::{AppError, CompletionApiConfig, CompletionError};
use crate::ports::CompletionClient;

const BODY_EXCERPT_LIMIT: usize = 200;

/// HTTP client for an OpenAI-compatible completion server.
#[derive(Clone)]
pub struct HttpCompletionClient {
    api_key: String,
    endpoint: Url,
    model: String,
    temperature: f32,
    failure_pause: Duration,
    client: Client,
}

impl std::fmt::Debug for HttpCompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpCompletionClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

impl HttpCompletionClient {
    /// Create a new HTTP client with the given API key and configuration.
    pub fn new(api_key: String, config: &CompletionApiConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::Configuration(format!("Failed to create HTTP client: {}", e)))?;

        let endpoint = Url::parse(&format!(
            "{}/chat/completions",
            config.base_url.as_str().trim_end_matches('/')
        ))
        .map_err(|e| AppError::Configuration(format!("Invalid completion endpoint: {}", e)))?;

        Ok(Self {
            api_key,
            endpoint,
            model: config.model.clone(),
            temperature: config.temperature,
            failure_pause: Duration::from_millis(config.failure_pause_ms),
            client,
        })
    }

    /// Create from environment with the given configuration.
    ///
    /// Local completion servers accept any key, so `BOOKCRAFT_API_KEY` is
    /// optional and falls back to a placeholder.
    pub fn from_env_with_config(config: &CompletionApiConfig) -> Result<Self, AppError> {
        let api_key =
            std::env::var("BOOKCRAFT_API_KEY").unwrap_or_else(|_| "local-key".to_string());
        Self::new(api_key, config)
    }
}

#[derive(Debug, Serialize)]
struct ApiRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

impl CompletionClient for HttpCompletionClient {
    fn complete(&self, prompt: &str) -> Result<String, CompletionError> {
        // One attempt per call: retrying the same prompt against a stalled
        // local server only compounds the stall. The pause damps rapid
        // re-submission before the failure is surfaced.
        match self.send_request(prompt) {
            Ok(text) => Ok(text),
            Err(err) => {
                thread::sleep(self.failure_pause);
                Err(err)
            }
        }
    }
}

impl HttpCompletionClient {
    fn send_request(&self, prompt: &str) -> Result<String, CompletionError> {
        let request = ApiRequest {
            model: &self.model,
            messages: vec![Message { role: "user", content: prompt }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(self.endpoint.clone())
            .bearer_auth(&self.api_key)
            .header(CONTENT_TYPE, "application/json")
            .json(&request)
            .send()
            .map_err(|e| CompletionError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|_| "Unknown error".to_string());
            return Err(CompletionError::Status {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        let api_response: ApiResponse =
            response.json().map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

        let content = api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| {
                CompletionError::MalformedResponse("no message content in choices".to_string())
            })?;

        Ok(content.trim().to_string())
    }
}

fn excerpt(body: &str) -> String {
    if body.len() <= BODY_EXCERPT_LIMIT {
        return body.to_string();
    }
    let mut end = BODY_EXCERPT_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &body[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(server_url: &str) -> CompletionApiConfig {
        CompletionApiConfig {
            base_url: Url::parse(server_url).unwrap(),
            model: "test-model".to_string(),
            temperature: 0.65,
            timeout_secs: 5,
            failure_pause_ms: 1,
        }
    }

    #[test]
    fn complete_returns_trimmed_message_content() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"choices": [{"message": {"role": "assistant", "content": "  The text.  "}}]}"#,
            )
            .create();

        let client =
            HttpCompletionClient::new("fake-key".to_string(), &test_config(&server.url())).unwrap();

        let result = client.complete("prompt");
        assert_eq!(result.unwrap(), "The text.");
        mock.assert();
    }

    #[test]
    fn complete_makes_exactly_one_attempt_on_500() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("POST", "/chat/completions")
            .with_status(500)
            .with_body("boom")
            .expect(1)
            .create();

        let client =
            HttpCompletionClient::new("fake-key".to_string(), &test_config(&server.url())).unwrap();

        let result = client.complete("prompt");
        assert!(matches!(result, Err(CompletionError::Status { status: 500, .. })));
        mock.assert();
    }

    #[test]
    fn complete_reports_missing_content_as_malformed() {
        let mut server = mockito::Server::new();
        let _m = server
            .mock("POST", "/chat/completions")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"choices": []}"#)
            .create();

        let client =
            HttpCompletionClient::new("fake-key".to_string(), &test_config(&server.url())).unwrap();

        let result = client.complete("prompt");
        assert!(matches!(result, Err(CompletionError::MalformedResponse(_))));
    }

    #[test]
    fn debug_output_redacts_api_key() {
        let client =
            HttpCompletionClient::new("secret".to_string(), &CompletionApiConfig::default())
                .unwrap();

        let debug = format!("{:?}", client);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("secret"));
    }

    #[test]
    fn endpoint_joins_base_url_without_double_slash() {
        let config = CompletionApiConfig {
            base_url: Url::parse("http://localhost:1234/v1/").unwrap(),
            ..Default::default()
        };
        let client = HttpCompletionClient::new("k".to_string(), &config).unwrap();

        assert_eq!(client.endpoint.as_str(), "http://localhost:1234/v1/chat/completions");
    }
}
