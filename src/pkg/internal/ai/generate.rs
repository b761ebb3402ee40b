use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::prelude::{Error, Result};

/// Bound on the outbound completion call; slow endpoints fail the
/// request instead of hanging it.
const COMPLETION_TIMEOUT: Duration = Duration::from_secs(60);

const SYSTEM_PROMPT: &str = "You are a professional HR AI Analyst. Output strictly valid JSON.";

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatReply,
}

#[derive(Deserialize)]
struct ChatReply {
    content: Option<String>,
}

#[derive(Deserialize)]
struct RemoteErrorEnvelope {
    error: RemoteError,
}

#[derive(Deserialize)]
struct RemoteError {
    message: String,
}

/// Client for an OpenAI-compatible chat-completion endpoint. One attempt
/// per request, no retries.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: String,
    key: String,
    model: String,
}

impl CompletionClient {
    /// Fails when the bearer credential is missing; an unauthenticated
    /// request is never sent.
    pub fn new(endpoint: &str, key: &str, model: &str) -> Result<Self> {
        if key.is_empty() {
            return Err(Error::Config(
                "completion credential is not configured".into(),
            ));
        }
        let http = reqwest::Client::builder()
            .timeout(COMPLETION_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("could not build http client: {}", e)))?;
        Ok(CompletionClient {
            http,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            key: key.to_string(),
            model: model.to_string(),
        })
    }

    /// One chat-completion round trip; returns the first choice's content
    /// as an opaque string. Low temperature keeps scoring consistent
    /// across repeated calls on similar input.
    pub async fn complete(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: 0.2,
        };
        let response = self
            .http
            .post(format!("{}/chat/completions", self.endpoint))
            .bearer_auth(&self.key)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Completion(format!("completion request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| Error::Completion(format!("completion response unreadable: {}", e)))?;
        if !status.is_success() {
            tracing::error!("completion endpoint returned {}: {}", status, body);
            let message = serde_json::from_str::<RemoteErrorEnvelope>(&body)
                .map(|envelope| envelope.error.message)
                .unwrap_or_else(|_| format!("completion endpoint returned {}", status));
            return Err(Error::Completion(message));
        }

        let envelope: ChatResponse = serde_json::from_str(&body)
            .map_err(|e| Error::Completion(format!("malformed completion envelope: {}", e)))?;
        envelope
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| Error::Completion("completion reply carried no content".into()))
    }
}
