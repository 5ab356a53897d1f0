use serde::{Deserialize, Serialize};

/// Error body returned by every failing API endpoint.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ErrorDto {
    pub error: String,
}

/// Fixed success body returned by status endpoints such as `/health`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageDto {
    pub msg: String,
}
