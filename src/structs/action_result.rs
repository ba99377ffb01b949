use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// 所有 mutation 的統一回傳格式,`data` 跟 `error` 只會有一個有值
#[derive(Serialize, Debug)]
pub struct ActionResult<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    pub status: u16,
}

impl<T> ActionResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            status: 200,
        }
    }

    pub fn err(status: u16, message: impl Into<String>) -> Self {
        Self {
            data: None,
            error: Some(message.into()),
            status,
        }
    }
}

impl<T: Serialize> IntoResponse for ActionResult<T> {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status_code, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_carries_data_only() {
        let result = ActionResult::ok(42);
        assert_eq!(result.data, Some(42));
        assert_eq!(result.error, None);
        assert_eq!(result.status, 200);
    }

    #[test]
    fn err_carries_message_only() {
        let result = ActionResult::<()>::err(403, "Forbidden");
        assert!(result.data.is_none());
        assert_eq!(result.error.as_deref(), Some("Forbidden"));
        assert_eq!(result.status, 403);
    }

    #[test]
    fn envelope_serializes_null_data_on_error() {
        let result = ActionResult::<()>::err(404, "shift not found");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["data"], serde_json::Value::Null);
        assert_eq!(json["error"], "shift not found");
        assert_eq!(json["status"], 404);
    }
}
