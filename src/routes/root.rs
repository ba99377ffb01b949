use axum::{http::StatusCode, response::IntoResponse, Json};

pub async fn index() -> Json<&'static str> {
    Json("care shift api index page")
}

pub async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "empty page")
}
