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

//! Deterministic keyword-based evaluations.
//!
//! Used whenever no credential is configured or the remote model cannot be
//! reached or understood. Templates are matched in order against the
//! lower-cased experiment name; the first template with a matching keyword
//! wins, and [`DEFAULT_TEMPLATE`] covers everything else.

use serde_json::{json, Map, Value};

use crate::types::{Dimension, EvaluationResult, ReportRecord};

/// Score used when no keyword group matches
pub const DEFAULT_SCORE: i64 = 82;

/// A canned evaluation for one family of experiments
#[derive(Debug)]
pub struct MockTemplate {
    pub keywords: &'static [&'static str],
    pub score: i64,
    /// Offsets from `score` in `Dimension::ALL` order
    pub dimension_offsets: [i64; 4],
    pub strengths: &'static [&'static str],
    pub weaknesses: &'static [&'static str],
    pub suggestions: &'static [&'static str],
    pub rationale: &'static str,
}

static PENDULUM_TEMPLATE: MockTemplate = MockTemplate {
    keywords: &["单摆", "重力"],
    score: 88,
    dimension_offsets: [4, 2, -3, -3],
    strengths: &[
        "实验目的明确，步骤记录详实",
        "数据记录表格设计合理，多次测量减少偶然误差",
    ],
    weaknesses: &["误差分析部分可以更加深入", "结论可以更紧密地结合实验数据"],
    suggestions: &[
        "建议补充系统误差（如空气阻力、摆角影响）的讨论",
        "在结论中引用具体的g值计算结果",
        "可以尝试用不同摆长验证T²与L的线性关系",
    ],
    rationale: "报告整体完成度较高，基础扎实，但在深度分析和理论联系方面有提升空间。",
};

static CIRCUIT_TEMPLATE: MockTemplate = MockTemplate {
    keywords: &["电路", "谐振"],
    score: 92,
    dimension_offsets: [2, 0, -3, -5],
    strengths: &["谐振曲线测量精确，图表规范", "实验目的明确"],
    weaknesses: &["数据分析深度可加强", "结论部分略显简略"],
    suggestions: &[
        "建议讨论元件参数误差对谐振频率的影响",
        "建议补充更多参考文献",
    ],
    rationale: "谐振曲线测量精确，图表规范，分析透彻。",
};

static CHEMISTRY_TEMPLATE: MockTemplate = MockTemplate {
    keywords: &["化学", "合成"],
    score: 76,
    dimension_offsets: [9, -6, 4, -7],
    strengths: &["实验原理描述准确", "反应装置绘制规范"],
    weaknesses: &["产率计算过程缺失关键步骤", "产物表征数据不完整"],
    suggestions: &[
        "请补充产率的详细计算公式与计算过程",
        "应列出产物的熔点、IR特征峰等表征数据",
        "建议讨论可能影响产率的因素",
    ],
    rationale: "实验基本步骤正确，但在数据记录和分析深度方面需要加强。",
};

pub static DEFAULT_TEMPLATE: MockTemplate = MockTemplate {
    keywords: &[],
    score: DEFAULT_SCORE,
    dimension_offsets: [6, 3, -2, -7],
    strengths: &["报告结构完整，符合规范", "实验步骤描述清晰"],
    weaknesses: &["数据分析可以更加深入", "结论部分略显简略"],
    suggestions: &[
        "建议增加对实验误差的系统分析",
        "结论部分可以扩展实际应用意义的讨论",
    ],
    rationale: "基础扎实，符合实验报告基本要求，有提升空间。",
};

/// Keyword groups in match order
pub static TEMPLATES: [&MockTemplate; 3] =
    [&PENDULUM_TEMPLATE, &CIRCUIT_TEMPLATE, &CHEMISTRY_TEMPLATE];

/// Pick the template for an experiment name
pub fn select_template(experiment_name: &str) -> &'static MockTemplate {
    let name = experiment_name.to_lowercase();
    TEMPLATES
        .iter()
        .copied()
        .find(|template| template.keywords.iter().any(|k| name.contains(k)))
        .unwrap_or(&DEFAULT_TEMPLATE)
}

fn string_list(items: &[&str]) -> Value {
    Value::Array(items.iter().map(|s| json!(s)).collect())
}

impl MockTemplate {
    /// Render the template as a complete evaluation flagged as mock
    pub fn to_result(&self) -> EvaluationResult {
        let dimension_scores: Map<String, Value> = Dimension::ALL
            .iter()
            .zip(self.dimension_offsets)
            .map(|(dimension, offset)| (dimension.as_str().to_string(), json!(self.score + offset)))
            .collect();

        EvaluationResult {
            comprehensive_score: json!(self.score),
            dimension_scores: Value::Object(dimension_scores),
            strengths: string_list(self.strengths),
            weaknesses: string_list(self.weaknesses),
            specific_suggestions: string_list(self.suggestions),
            evaluation_rationale: Some(json!(self.rationale)),
            is_mock: true,
            extra: Map::new(),
        }
    }
}

/// Produce the fallback evaluation for a report
pub fn mock_evaluation(report: &ReportRecord) -> EvaluationResult {
    select_template(&report.experiment_name).to_result()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dimensions(result: &EvaluationResult) -> Vec<i64> {
        Dimension::ALL
            .iter()
            .map(|d| result.dimension_score(*d).unwrap())
            .collect()
    }

    #[test]
    fn test_pendulum_template() {
        let result = mock_evaluation(&ReportRecord::new("单摆测重力加速度"));
        assert_eq!(result.score(), Some(88));
        assert_eq!(dimensions(&result), vec![92, 90, 85, 85]);
        assert!(result.is_mock);
        assert_eq!(result.specific_suggestions.as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_gravity_keyword_alone() {
        let result = mock_evaluation(&ReportRecord::new("自由落体测重力"));
        assert_eq!(result.score(), Some(88));
    }

    #[test]
    fn test_circuit_template() {
        let result = mock_evaluation(&ReportRecord::new("RLC串联谐振"));
        assert_eq!(result.score(), Some(92));
        assert_eq!(dimensions(&result), vec![94, 92, 89, 87]);
        assert!(result.is_mock);
    }

    #[test]
    fn test_chemistry_template() {
        let result = mock_evaluation(&ReportRecord::new("化学实验：乙酸乙酯的合成"));
        assert_eq!(result.score(), Some(76));
        assert_eq!(dimensions(&result), vec![85, 70, 80, 69]);
    }

    #[test]
    fn test_default_template() {
        let result = mock_evaluation(&ReportRecord::new("Measuring the speed of sound"));
        assert_eq!(result.score(), Some(DEFAULT_SCORE));
        assert_eq!(dimensions(&result), vec![88, 85, 80, 75]);
        assert!(result.is_mock);
    }

    #[test]
    fn test_empty_name_uses_default() {
        let result = mock_evaluation(&ReportRecord::default());
        assert_eq!(result.score(), Some(82));
    }

    #[test]
    fn test_first_matching_group_wins() {
        // Matches both the pendulum and chemistry groups
        let result = mock_evaluation(&ReportRecord::new("单摆与化学综合实验"));
        assert_eq!(result.score(), Some(88));

        let result = mock_evaluation(&ReportRecord::new("电路板的化学蚀刻"));
        assert_eq!(result.score(), Some(92));
    }

    #[test]
    fn test_templates_are_complete() {
        for template in TEMPLATES.iter().copied().chain([&DEFAULT_TEMPLATE]) {
            let result = template.to_result();
            assert!(!result.strengths.as_array().unwrap().is_empty());
            assert!(!result.weaknesses.as_array().unwrap().is_empty());
            assert!(!result.specific_suggestions.as_array().unwrap().is_empty());
            assert!(result.evaluation_rationale.is_some());
            assert_eq!(result.dimension_scores.as_object().unwrap().len(), 4);
        }
    }
}
