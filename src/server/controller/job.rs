use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::server::{
    error::AppError,
    job::{InvokeRequest, JobBridge},
    state::AppState,
};

#[derive(Deserialize)]
pub struct InvokeParams {
    #[serde(rename = "fnId")]
    pub fn_id: String,
}

/// GET /api/inngest - Job function registration
///
/// # Returns
/// - `200 OK`: App id and every function with its trigger event
pub async fn introspect() -> impl IntoResponse {
    (StatusCode::OK, Json(JobBridge::introspect()))
}

/// POST /api/inngest?fnId={id} - Invoke a job function
///
/// # Authentication
/// Requires `Authorization: Bearer <JOB_SIGNING_KEY>`. The key is checked before the query
/// and the body are parsed.
///
/// # Returns
/// - `200 OK`: Function output
/// - `400 Bad Request`: Missing `fnId`, malformed body, event isn't the function's trigger,
///   or bad event data
/// - `401 Unauthorized`: Missing or wrong signing key
/// - `404 Not Found`: No function with that id
pub async fn invoke(
    State(state): State<AppState>,
    headers: HeaderMap,
    params: Result<Query<InvokeParams>, QueryRejection>,
    body: Bytes,
) -> Result<impl IntoResponse, AppError> {
    let bridge = JobBridge::new(&state.db, &state.config.job_signing_key);

    let presented_key = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));
    bridge.verify(presented_key)?;

    let Query(params) =
        params.map_err(|e| AppError::BadRequest(format!("Invalid job query: {}", e)))?;

    let request: InvokeRequest = serde_json::from_slice(&body)
        .map_err(|e| AppError::BadRequest(format!("Invalid job request body: {}", e)))?;

    let output = bridge.invoke(&params.fn_id, request.event).await?;

    Ok((StatusCode::OK, Json(output)))
}
