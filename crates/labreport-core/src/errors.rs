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

use thiserror::Error;

/// LLM-specific error types
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("LLM returned an empty response: {message}")]
    EmptyResponse { message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Authentication error: {message}")]
    Authentication { message: String },

    #[error("Remote endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Invalid model configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Timeout error: {message}")]
    Timeout { message: String },
}

impl LlmError {
    /// Classify a transport failure, keeping timeouts distinct from other HTTP errors
    pub fn from_transport(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            LlmError::Timeout {
                message: error.to_string(),
            }
        } else {
            LlmError::Http(error)
        }
    }
}

/// Failure to pull a JSON object out of free-form model output
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("no JSON object found in model output")]
    NoJsonObject,

    #[error("embedded JSON object is invalid: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Result type alias for LLM operations
pub type LlmResult<T> = Result<T, LlmError>;
