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

//! Lab report evaluation prompt

use chrono::{DateTime, Local, TimeZone};

use crate::llm_client::models::Message;
use crate::types::ReportRecord;

pub const SYSTEM_PROMPT: &str = "你是一位严谨的大学实验课教师，专门评价学生的实验报告。请严格按照评分标准进行评价，并给出具体的改进建议。";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render the user prompt for a report, stamped with `submitted_at`
pub fn build_evaluation_prompt<Tz>(report: &ReportRecord, submitted_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    let experiment_name = &report.experiment_name;
    let purpose = &report.purpose;
    let procedure = &report.procedure;
    let analysis = &report.analysis;
    let conclusion = &report.conclusion;
    let submitted_at = submitted_at.format(TIMESTAMP_FORMAT);

    format!(
        r#"请评价以下实验报告，并严格按照JSON格式返回结果。

【实验报告信息】
实验名称：{experiment_name}
提交时间：{submitted_at}

【报告内容】
1. 实验目的：{purpose}
2. 实验步骤：{procedure}
3. 结果分析：{analysis}
4. 实验结论：{conclusion}

【评价要求】
请从以下维度进行评价（每项满分25分，总分100分）：
1. 格式规范：结构是否完整，格式是否符合学术规范
2. 数据准确：数据记录是否完整，计算是否正确
3. 逻辑严谨：分析过程是否逻辑清晰，推理是否合理
4. 分析深度：是否深入分析，是否提出有价值的见解

【输出格式】
你必须返回一个合法的JSON对象，格式如下：
{{
  "comprehensive_score": 85,
  "dimension_scores": {{
    "format": 90,
    "data": 80,
    "logic": 85,
    "analysis": 85
  }},
  "strengths": ["优点1", "优点2"],
  "weaknesses": ["不足1", "不足2"],
  "specific_suggestions": ["具体建议1", "具体建议2"],
  "evaluation_rationale": "一段简要的总体评价"
}}

请现在开始评价："#
    )
}

/// System and user messages asking the model to grade a report
pub fn evaluate_report(report: &ReportRecord) -> Vec<Message> {
    vec![
        Message::system(SYSTEM_PROMPT),
        Message::user(build_evaluation_prompt(report, &Local::now())),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn pendulum_report() -> ReportRecord {
        ReportRecord::new("单摆测重力加速度")
            .with_purpose("通过测量单摆周期计算重力加速度")
            .with_procedure("1. 调整摆长 2. 测量周期 3. 计算g值")
            .with_analysis("测得g=9.81m/s²，与理论值接近")
            .with_conclusion("实验成功测得重力加速度")
    }

    #[test]
    fn test_prompt_contains_report_fields() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        let prompt = build_evaluation_prompt(&pendulum_report(), &at);

        assert!(prompt.contains("实验名称：单摆测重力加速度"));
        assert!(prompt.contains("提交时间：2024-03-05 14:30:00"));
        assert!(prompt.contains("1. 实验目的：通过测量单摆周期计算重力加速度"));
        assert!(prompt.contains("2. 实验步骤：1. 调整摆长 2. 测量周期 3. 计算g值"));
        assert!(prompt.contains("3. 结果分析：测得g=9.81m/s²，与理论值接近"));
        assert!(prompt.contains("4. 实验结论：实验成功测得重力加速度"));
    }

    #[test]
    fn test_prompt_contains_rubric_and_schema() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        let prompt = build_evaluation_prompt(&ReportRecord::default(), &at);

        assert!(prompt.contains("每项满分25分，总分100分"));
        for field in crate::types::REQUIRED_FIELDS {
            assert!(prompt.contains(&format!("\"{}\"", field)), "missing {}", field);
        }
        assert!(prompt.contains("\"evaluation_rationale\""));
        assert!(!prompt.contains("is_mock"));
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        let prompt = build_evaluation_prompt(&ReportRecord::default(), &at);

        assert!(prompt.contains("实验名称：\n"));
        assert!(prompt.contains("4. 实验结论：\n"));
    }

    #[test]
    fn test_schema_example_is_valid_json() {
        let at = Utc.with_ymd_and_hms(2024, 3, 5, 14, 30, 0).unwrap();
        let prompt = build_evaluation_prompt(&ReportRecord::default(), &at);
        let start = prompt.find('{').unwrap();
        let end = prompt.rfind('}').unwrap();

        let schema: serde_json::Value = serde_json::from_str(&prompt[start..=end]).unwrap();
        assert_eq!(schema["dimension_scores"]["logic"], 85);
    }

    #[test]
    fn test_messages_roles() {
        let messages = evaluate_report(&pendulum_report());

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_PROMPT);
        assert_eq!(messages[1].role, "user");
        assert!(messages[1].content.contains("单摆测重力加速度"));
    }
}
