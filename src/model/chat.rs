use serde::{Deserialize, Serialize};

/// Credentials the browser uses to connect to the chat service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChatTokenDto {
    /// Public key identifying this application to the chat service.
    pub api_key: String,
    pub token: String,
    /// Auth provider subject id, used as the chat user id.
    pub user_id: String,
    pub user_name: String,
    pub user_image: Option<String>,
}
