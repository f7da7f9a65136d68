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

//! Turning free-form model output into an [`EvaluationResult`]

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::errors::ExtractionError;
use crate::mock::mock_evaluation;
use crate::types::{EvaluationResult, ReportRecord};

/// Strategy for locating a JSON object inside model output
pub trait JsonExtractor: Send + Sync {
    fn extract(&self, text: &str) -> Result<Map<String, Value>, ExtractionError>;
}

/// Takes everything from the first `{` to the last `}` in the text
#[derive(Debug, Default, Clone, Copy)]
pub struct BraceSpanExtractor;

impl JsonExtractor for BraceSpanExtractor {
    fn extract(&self, text: &str) -> Result<Map<String, Value>, ExtractionError> {
        let start = text.find('{').ok_or(ExtractionError::NoJsonObject)?;
        let end = text
            .rfind('}')
            .filter(|&end| end > start)
            .ok_or(ExtractionError::NoJsonObject)?;

        Ok(serde_json::from_str(&text[start..=end])?)
    }
}

/// Normalizes model replies, falling back to the mock evaluator when the
/// reply carries no usable JSON object
pub struct ResponseNormalizer {
    extractor: Box<dyn JsonExtractor>,
}

impl Default for ResponseNormalizer {
    fn default() -> Self {
        Self::new(BraceSpanExtractor)
    }
}

impl ResponseNormalizer {
    pub fn new(extractor: impl JsonExtractor + 'static) -> Self {
        Self {
            extractor: Box::new(extractor),
        }
    }

    pub fn normalize(&self, text: &str, report: &ReportRecord) -> EvaluationResult {
        match self.extractor.extract(text) {
            Ok(object) => {
                debug!(keys = object.len(), "Parsed evaluation from model output");
                EvaluationResult::from_object(object)
            }
            Err(e) => {
                warn!(error = %e, "Failed to parse model output, using mock evaluation");
                mock_evaluation(report)
            }
        }
    }
}
