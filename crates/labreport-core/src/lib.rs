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

//! # Lab Report Core
//!
//! Evaluation of student experiment reports by an external chat-completion
//! model, with a deterministic keyword-based fallback.
//!
//! The [`EvaluationService`] builds the grading prompt, sends it to the
//! configured endpoint, and normalizes the reply into an
//! [`EvaluationResult`]. Without a credential, or when the remote call or
//! reply parsing fails, it answers from the [`mock`] templates instead.

pub mod errors;
pub mod llm_client;
pub mod mock;
pub mod normalizer;
pub mod prompts;
pub mod service;
pub mod types;

// Re-export commonly used types
pub use errors::{ExtractionError, LlmError, LlmResult};
pub use types::{Dimension, EvaluationResult, ReportRecord};

// Re-export traits
pub use llm_client::LlmClient;
pub use normalizer::JsonExtractor;

// Re-export concrete types
pub use llm_client::{LlmConfig, Message, OpenAiClient};
pub use mock::mock_evaluation;
pub use normalizer::{BraceSpanExtractor, ResponseNormalizer};
pub use service::EvaluationService;
