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

//! Evaluation service: prompt, remote call, normalization, fallback

use std::sync::Arc;

use tracing::{info, warn};

use crate::errors::LlmResult;
use crate::llm_client::{LlmClient, LlmConfig, OpenAiClient};
use crate::mock::mock_evaluation;
use crate::normalizer::ResponseNormalizer;
use crate::prompts;
use crate::types::{EvaluationResult, ReportRecord};

/// Evaluates lab reports with a remote model, or with canned templates when
/// no model is configured or the model cannot be used.
pub struct EvaluationService {
    client: Option<Arc<dyn LlmClient>>,
    normalizer: ResponseNormalizer,
}

impl EvaluationService {
    /// Build a service from configuration. Without a credential the service
    /// runs in mock mode and never touches the network.
    pub fn new(config: &LlmConfig) -> LlmResult<Self> {
        if !config.has_credential() {
            info!("No API credential configured, evaluations will use mock mode");
            return Ok(Self::mock_only());
        }

        info!(model = %config.model, url = %config.api_url, "Using remote model for evaluations");
        let client = OpenAiClient::new(config)?;
        Ok(Self::with_client(Arc::new(client)))
    }

    pub fn mock_only() -> Self {
        Self {
            client: None,
            normalizer: ResponseNormalizer::default(),
        }
    }

    pub fn with_client(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client: Some(client),
            normalizer: ResponseNormalizer::default(),
        }
    }

    pub fn with_normalizer(mut self, normalizer: ResponseNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn is_mock_mode(&self) -> bool {
        self.client.is_none()
    }

    /// Evaluate a report. Remote failures are logged and replaced by the
    /// mock evaluation; this never fails.
    pub async fn evaluate(&self, report: &ReportRecord) -> EvaluationResult {
        let Some(client) = &self.client else {
            return mock_evaluation(report);
        };

        let messages = prompts::evaluate_report(report);
        match client.chat_completion(&messages).await {
            Ok(text) => self.normalizer.normalize(&text, report),
            Err(e) => {
                warn!(error = %e, "AI API call failed, using mock evaluation");
                mock_evaluation(report)
            }
        }
    }
}
