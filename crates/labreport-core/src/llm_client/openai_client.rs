/*
Copyright 2024, Zep Software, Inc.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0

Unless required by applicable law or agreed to in writing, software
distributed under the License is distributed on an "AS IS" BASIS,
WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
See the License for the specific language governing permissions and
limitations under the License.
*/

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::client::LlmClient;
use super::config::LlmConfig;
use super::models::Message;
use crate::errors::{LlmError, LlmResult};

#[derive(Debug, Serialize)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Serialize)]
struct OpenAiChatRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChatResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

/// Client for any OpenAI-compatible `/chat/completions` endpoint (DeepSeek by default)
pub struct OpenAiClient {
    http_client: Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig) -> LlmResult<Self> {
        let api_key = config
            .credential()
            .ok_or_else(|| LlmError::Authentication {
                message: "API key is required".to_string(),
            })?
            .to_string();

        let http_client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::InvalidConfig {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(Self {
            http_client,
            api_url: config.api_url.clone(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn chat_completion(&self, messages: &[Message]) -> LlmResult<String> {
        let request = OpenAiChatRequest {
            model: self.model.clone(),
            messages: messages
                .iter()
                .map(|m| OpenAiMessage {
                    role: m.role.clone(),
                    content: m.content.clone(),
                })
                .collect(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(model = %self.model, messages = messages.len(), "Sending chat completion request");

        let response = self
            .http_client
            .post(&self.api_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(LlmError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await.map_err(LlmError::from_transport)?;
        let chat_response: OpenAiChatResponse = serde_json::from_str(&body)?;

        let choice = chat_response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::EmptyResponse {
                message: "No choices in response".to_string(),
            })?;

        let content = choice.message.content.ok_or_else(|| LlmError::EmptyResponse {
            message: "No content in response".to_string(),
        })?;

        debug!(chars = content.chars().count(), "Received chat completion");
        Ok(content)
    }
}
