use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Extension},
    response::Json,
    routing::post,
    Router,
};
use labreport_core::EvaluationService;
use tracing::info;

use crate::{
    dto::{parse_report, EvaluateReportResponse},
    error::{self, ApiError},
};

/// Create evaluation router
pub fn create_router() -> Router {
    Router::new().route(
        "/evaluate_report",
        post(evaluate_report).fallback(error::method_not_allowed),
    )
}

/// Evaluate a lab report
async fn evaluate_report(
    Extension(service): Extension<Arc<EvaluationService>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<EvaluateReportResponse>, ApiError> {
    let report = parse_report(&body?)?;
    info!(experiment = %report.experiment_name, "Evaluating report");

    let result = service.evaluate(&report).await;
    info!(
        experiment = %report.experiment_name,
        score = %result.comprehensive_score,
        is_mock = result.is_mock,
        "Evaluation complete"
    );

    Ok(Json(EvaluateReportResponse::from_result(result)))
}
