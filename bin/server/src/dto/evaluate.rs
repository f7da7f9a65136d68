use labreport_core::{EvaluationResult, ReportRecord};
use serde_json::Value;

use super::common::ApiResult;
use crate::error::ApiError;

pub const EVALUATION_DONE: &str = "AI评价完成";
pub const EVALUATION_DONE_MOCK: &str = "AI评价完成（模拟模式）";

/// Decode an evaluation request body.
///
/// The report is read from `report_data` when present, otherwise the
/// top-level object is taken as the report itself.
pub fn parse_report(body: &[u8]) -> Result<ReportRecord, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest("请求体为空".to_string()));
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| ApiError::BadRequest(format!("无效的JSON请求体: {}", e)))?;

    let Value::Object(mut object) = value else {
        return Err(ApiError::BadRequest("请求体必须是JSON对象".to_string()));
    };

    let report = match object.remove("report_data") {
        Some(report @ Value::Object(_)) => report,
        Some(Value::Null) | None => Value::Object(object),
        Some(_) => {
            return Err(ApiError::BadRequest(
                "report_data 必须是JSON对象".to_string(),
            ))
        }
    };

    serde_json::from_value(report)
        .map_err(|e| ApiError::BadRequest(format!("报告字段格式错误: {}", e)))
}

/// Response for a completed evaluation
pub type EvaluateReportResponse = ApiResult<EvaluationResult>;

impl EvaluateReportResponse {
    pub fn from_result(result: EvaluationResult) -> Self {
        let message = if result.is_mock {
            EVALUATION_DONE_MOCK
        } else {
            EVALUATION_DONE
        };
        ApiResult::ok(message, result)
    }
}
