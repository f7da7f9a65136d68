use chrono::Utc;
use serde::Serialize;

/// Envelope wrapped around every JSON response
#[derive(Debug, Serialize)]
pub struct ApiResult<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    pub timestamp: String,
}

fn now_rfc3339() -> String {
    Utc::now().to_rfc3339()
}

impl<T> ApiResult<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            timestamp: now_rfc3339(),
        }
    }
}

impl ApiResult<()> {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            timestamp: now_rfc3339(),
        }
    }
}
