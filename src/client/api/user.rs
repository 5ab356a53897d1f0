use crate::{
    client::{
        api::{
            endpoint,
            helper::{get, parse_response, send_request},
        },
        model::error::ApiError,
    },
    model::user::UserDto,
};

/// Fetches the signed-in user.
///
/// A 401 means no one is signed in and resolves to `Ok(None)`.
pub async fn get_user() -> Result<Option<UserDto>, ApiError> {
    let request = get(&endpoint("/auth/user"));
    let response = send_request(request).await?;

    if response.status() == 401 {
        return Ok(None);
    }

    parse_response(response).await.map(Some)
}
