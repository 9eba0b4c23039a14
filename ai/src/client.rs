//! Chat-completions client for the summary request.
//!
//! Speaks the OpenAI-compatible wire format. No local timeout is set on
//! the request; the call is bounded by the remote service's own limits.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use portsage_common::config::LlmConfig;
use portsage_common::error::{PipelineError, Result};
use portsage_common::finding::PortFinding;
use portsage_common::intent::ScanMode;
use portsage_common::summarize::Summarizer;

use crate::prompt;

pub struct LlmClient {
    client: Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl LlmClient {
    pub fn new(cfg: &LlmConfig) -> Self {
        Self {
            client: Client::new(),
            api_key: cfg.api_key.clone(),
            api_url: cfg.api_url.clone(),
            model: cfg.model.clone(),
        }
    }

    /// Sends one completion request and returns the trimmed response text.
    pub async fn complete(&self, system: &str, user: &str, temperature: f32) -> Result<String> {
        let request = ChatRequest {
            model: self.model.clone(),
            temperature,
            messages: vec![
                Message {
                    role: "system".into(),
                    content: system.into(),
                },
                Message {
                    role: "user".into(),
                    content: user.into(),
                },
            ],
        };

        debug!(model = %self.model, "sending completion request");

        let response = self
            .client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| PipelineError::SummaryRequestFailure(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(PipelineError::SummaryRequestFailure(format!(
                "API error ({status}): {error_text}"
            )));
        }

        let completion: ChatResponse = response
            .json()
            .await
            .map_err(|e| PipelineError::SummaryRequestFailure(e.to_string()))?;

        completion
            .choices
            .first()
            .map(|choice| choice.message.content.trim().to_string())
            .ok_or_else(|| PipelineError::SummaryRequestFailure("empty response".into()))
    }
}

/// Production summarizer: fixed sentence for empty findings, one remote
/// completion otherwise.
pub struct AiSummarizer {
    client: LlmClient,
}

impl AiSummarizer {
    pub fn new(cfg: &LlmConfig) -> Self {
        Self {
            client: LlmClient::new(cfg),
        }
    }
}

#[async_trait]
impl Summarizer for AiSummarizer {
    async fn summarize(
        &self,
        target: &str,
        mode: ScanMode,
        findings: &[PortFinding],
    ) -> Result<String> {
        if findings.is_empty() {
            return Ok(prompt::no_open_ports(target, mode));
        }

        let user_turn = prompt::summary_request(target, mode, findings);
        self.client
            .complete(prompt::SYSTEM_PROMPT, &user_turn, prompt::TEMPERATURE)
            .await
    }
}

// OpenAI-compatible wire format
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    temperature: f32,
    messages: Vec<Message>,
}

#[derive(Serialize)]
struct Message {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}
