use crate::structs::action_result::ActionResult;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Please add the JWT token to the header")]
    MissingToken,
    #[error("Empty header is not allowed")]
    InvalidHeader,
    #[error("Unable to decode token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("You are not an authorized user")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
}

#[derive(Error, Debug)]
pub enum SystemError {
    #[error("找不到環境變數 {0}")]
    EnvVarMissing(String),
    #[error("{0}")]
    Internal(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    AuthError(#[from] AuthError),
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    DatabaseError(#[from] sqlx::Error),
    #[error(transparent)]
    SystemError(#[from] SystemError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::AuthError(AuthError::Forbidden) => StatusCode::FORBIDDEN,
            AppError::AuthError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::DatabaseError(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::SystemError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        // 不把內部錯誤細節吐給前端
        let error_message = if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("{}", self);
            "internal server error".to_string()
        } else if matches!(self, AppError::DatabaseError(_)) {
            // RowNotFound 走到這裡,細節一樣不外漏
            "not found".to_string()
        } else {
            self.to_string()
        };

        ActionResult::<()>::err(status_code.as_u16(), error_message).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_maps_to_404() {
        let err = AppError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn other_database_errors_map_to_generic_500() {
        let response = AppError::from(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], "internal server error");
    }

    #[test]
    fn forbidden_maps_to_403() {
        let err = AppError::AuthError(AuthError::Forbidden);
        assert_eq!(err.into_response().status(), StatusCode::FORBIDDEN);
    }
}
