use axum::{http::StatusCode, response::IntoResponse, Json};

use crate::model::api::MessageDto;

/// GET /health - Liveness probe
///
/// # Returns
/// - `200 OK`: `{"msg":"Success from health"}`
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            msg: "Success from health".to_string(),
        }),
    )
}

/// GET /books - Placeholder content endpoint
///
/// # Returns
/// - `200 OK`: `{"msg":"Success from books"}`
pub async fn books() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(MessageDto {
            msg: "Success from books".to_string(),
        }),
    )
}
