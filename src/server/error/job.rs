use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Errors returned to the job orchestrator when invoking a job function.
#[derive(Error, Debug)]
pub enum JobError {
    /// Request did not carry the configured signing key.
    #[error("Job request is missing a valid signing key")]
    InvalidSigningKey,

    /// No job function is registered under the requested id.
    #[error("No job function registered with id '{0}'")]
    UnknownFunction(String),

    /// The event does not match the trigger of the requested function.
    #[error("Function '{function}' is not triggered by event '{event}'")]
    TriggerMismatch { function: String, event: String },

    /// The event data could not be deserialized for the requested function.
    #[error("Invalid event data for function '{function}': {reason}")]
    InvalidEventData { function: String, reason: String },
}

impl IntoResponse for JobError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::InvalidSigningKey => StatusCode::UNAUTHORIZED,
            Self::UnknownFunction(_) => StatusCode::NOT_FOUND,
            Self::TriggerMismatch { .. } | Self::InvalidEventData { .. } => {
                StatusCode::BAD_REQUEST
            }
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
