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

//! Report and evaluation records exchanged with callers

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Map, Value};

/// Fields every evaluation handed to a caller must carry
pub const REQUIRED_FIELDS: [&str; 5] = [
    "comprehensive_score",
    "dimension_scores",
    "strengths",
    "weaknesses",
    "specific_suggestions",
];

/// Value used for a required field the model left out
pub fn default_field_value(field: &str) -> Value {
    match field {
        "comprehensive_score" => json!(0),
        "dimension_scores" => Value::Object(Map::new()),
        _ => Value::Array(Vec::new()),
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// A student's experiment report as submitted for evaluation.
///
/// Absent or `null` fields read as the empty string; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportRecord {
    #[serde(deserialize_with = "null_as_empty")]
    pub experiment_name: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub purpose: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub procedure: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub analysis: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub conclusion: String,
}

impl ReportRecord {
    pub fn new(experiment_name: impl Into<String>) -> Self {
        Self {
            experiment_name: experiment_name.into(),
            ..Default::default()
        }
    }

    pub fn with_purpose(mut self, purpose: impl Into<String>) -> Self {
        self.purpose = purpose.into();
        self
    }

    pub fn with_procedure(mut self, procedure: impl Into<String>) -> Self {
        self.procedure = procedure.into();
        self
    }

    pub fn with_analysis(mut self, analysis: impl Into<String>) -> Self {
        self.analysis = analysis.into();
        self
    }

    pub fn with_conclusion(mut self, conclusion: impl Into<String>) -> Self {
        self.conclusion = conclusion.into();
        self
    }
}

/// Rubric dimensions, each worth 25 of the 100 points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dimension {
    Format,
    Data,
    Logic,
    Analysis,
}

impl Dimension {
    pub const ALL: [Dimension; 4] = [
        Dimension::Format,
        Dimension::Data,
        Dimension::Logic,
        Dimension::Analysis,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Format => "format",
            Dimension::Data => "data",
            Dimension::Logic => "logic",
            Dimension::Analysis => "analysis",
        }
    }
}

/// Evaluation of a single report.
///
/// Content fields are kept as raw JSON values: whatever the model returned for
/// a field is passed through without range or type checks. Keys the model
/// adds beyond the known schema are preserved in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub comprehensive_score: Value,
    pub dimension_scores: Value,
    pub strengths: Value,
    pub weaknesses: Value,
    pub specific_suggestions: Value,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evaluation_rationale: Option<Value>,
    /// Set only on results produced by the keyword fallback
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub is_mock: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for EvaluationResult {
    fn default() -> Self {
        Self {
            comprehensive_score: default_field_value("comprehensive_score"),
            dimension_scores: default_field_value("dimension_scores"),
            strengths: default_field_value("strengths"),
            weaknesses: default_field_value("weaknesses"),
            specific_suggestions: default_field_value("specific_suggestions"),
            evaluation_rationale: None,
            is_mock: false,
            extra: Map::new(),
        }
    }
}

impl EvaluationResult {
    /// Build a result from a parsed JSON object, defaulting absent required fields.
    ///
    /// A required field set to `null` counts as absent.
    pub fn from_object(mut object: Map<String, Value>) -> Self {
        let mut take = |field: &str| {
            object
                .remove(field)
                .filter(|value| !value.is_null())
                .unwrap_or_else(|| default_field_value(field))
        };

        let comprehensive_score = take("comprehensive_score");
        let dimension_scores = take("dimension_scores");
        let strengths = take("strengths");
        let weaknesses = take("weaknesses");
        let specific_suggestions = take("specific_suggestions");
        let evaluation_rationale = object.remove("evaluation_rationale");
        // Only the fallback path may flag a result as mock
        object.remove("is_mock");

        Self {
            comprehensive_score,
            dimension_scores,
            strengths,
            weaknesses,
            specific_suggestions,
            evaluation_rationale,
            is_mock: false,
            extra: object,
        }
    }

    /// The comprehensive score when the model returned it as an integer
    pub fn score(&self) -> Option<i64> {
        self.comprehensive_score.as_i64()
    }

    /// Score for one rubric dimension, if present and integral
    pub fn dimension_score(&self, dimension: Dimension) -> Option<i64> {
        self.dimension_scores
            .get(dimension.as_str())
            .and_then(Value::as_i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_record_defaults_missing_and_null_fields() {
        let report: ReportRecord = serde_json::from_value(json!({
            "experiment_name": "单摆测重力加速度",
            "purpose": null,
            "grader": "ignored"
        }))
        .unwrap();

        assert_eq!(report.experiment_name, "单摆测重力加速度");
        assert_eq!(report.purpose, "");
        assert_eq!(report.procedure, "");
        assert_eq!(report.conclusion, "");
    }

    #[test]
    fn test_report_record_from_empty_object() {
        let report: ReportRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(report, ReportRecord::default());
    }

    #[test]
    fn test_from_object_fills_required_fields() {
        let mut object = Map::new();
        object.insert("comprehensive_score".to_string(), json!(77));

        let result = EvaluationResult::from_object(object);

        assert_eq!(result.score(), Some(77));
        assert_eq!(result.dimension_scores, json!({}));
        assert_eq!(result.strengths, json!([]));
        assert_eq!(result.weaknesses, json!([]));
        assert_eq!(result.specific_suggestions, json!([]));
        assert!(result.evaluation_rationale.is_none());
        assert!(!result.is_mock);
    }

    #[test]
    fn test_from_object_keeps_unknown_keys_and_loose_values() {
        let object = json!({
            "comprehensive_score": "ninety",
            "dimension_scores": {"format": 130},
            "confidence": 0.4
        });
        let Value::Object(object) = object else {
            unreachable!()
        };

        let result = EvaluationResult::from_object(object);

        assert_eq!(result.comprehensive_score, json!("ninety"));
        assert_eq!(result.score(), None);
        assert_eq!(result.dimension_score(Dimension::Format), Some(130));
        assert_eq!(result.extra.get("confidence"), Some(&json!(0.4)));
    }

    #[test]
    fn test_from_object_drops_model_supplied_is_mock() {
        let Value::Object(object) = json!({"comprehensive_score": 90, "is_mock": true}) else {
            unreachable!()
        };

        let result = EvaluationResult::from_object(object);

        assert!(!result.is_mock);
        assert!(!result.extra.contains_key("is_mock"));
        let value = serde_json::to_value(result).unwrap();
        assert!(value.get("is_mock").is_none());
    }

    #[test]
    fn test_serialization_omits_is_mock_on_live_results() {
        let live = serde_json::to_value(EvaluationResult::default()).unwrap();
        assert!(live.get("is_mock").is_none());
        assert!(live.get("evaluation_rationale").is_none());

        let mock = EvaluationResult {
            is_mock: true,
            ..Default::default()
        };
        let mock = serde_json::to_value(mock).unwrap();
        assert_eq!(mock["is_mock"], json!(true));
    }

    #[test]
    fn test_serialization_keeps_non_ascii_text() {
        let result = EvaluationResult {
            strengths: json!(["实验目的明确"]),
            ..Default::default()
        };
        let text = serde_json::to_string(&result).unwrap();
        assert!(text.contains("实验目的明确"));
    }

    #[test]
    fn test_dimension_names() {
        let names: Vec<&str> = Dimension::ALL.iter().map(Dimension::as_str).collect();
        assert_eq!(names, vec!["format", "data", "logic", "analysis"]);
    }
}
