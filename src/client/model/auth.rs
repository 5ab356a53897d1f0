use dioxus::prelude::*;

use crate::{client::model::error::ApiError, model::user::UserDto};

#[cfg(feature = "web")]
use crate::client::api::user::get_user;

/// Reactive authentication state shared through the component tree.
#[derive(Clone, Copy)]
pub struct AuthContext {
    inner: Signal<AuthState>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            inner: Signal::new(AuthState::Initializing),
        }
    }

    pub fn read(&self) -> impl std::ops::Deref<Target = AuthState> + '_ {
        self.inner.read()
    }

    /// Fetches the signed-in user once and publishes the result.
    #[cfg(feature = "web")]
    pub fn fetch_user(&mut self) {
        let future = use_resource(get_user);
        if let Some(result) = &*future.read_unchecked() {
            let state = AuthState::from(result.clone());
            if *self.inner.peek() != state {
                self.inner.set(state);
            }
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum AuthState {
    /// Initial state - haven't checked authentication yet
    Initializing,
    /// User is signed in
    Authenticated(UserDto),
    /// No active session
    SignedOut,
    /// Failed to check authentication
    Error(ApiError),
}

impl From<Result<Option<UserDto>, ApiError>> for AuthState {
    fn from(result: Result<Option<UserDto>, ApiError>) -> Self {
        match result {
            Ok(Some(user)) => AuthState::Authenticated(user),
            Ok(None) => AuthState::SignedOut,
            Err(e) => AuthState::Error(e),
        }
    }
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthState::Authenticated(_))
    }

    /// Whether the user fetch has finished, successfully or not.
    pub fn is_resolved(&self) -> bool {
        !matches!(self, AuthState::Initializing)
    }

    pub fn user(&self) -> Option<&UserDto> {
        match self {
            AuthState::Authenticated(user) => Some(user),
            _ => None,
        }
    }
}

/// Who may view a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    SignedIn,
}

/// What a gated layout should do for the current auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    Render,
    /// Auth state not known yet; show a loading view.
    Pending,
    /// Replace the current location with the home route.
    RedirectHome,
}

/// Decides whether a route with `access` may render in `state`.
///
/// A failed user fetch counts as signed out.
pub fn gate(access: Access, state: &AuthState) -> GateDecision {
    match (access, state) {
        (Access::Public, _) => GateDecision::Render,
        (Access::SignedIn, AuthState::Authenticated(_)) => GateDecision::Render,
        (Access::SignedIn, AuthState::Initializing) => GateDecision::Pending,
        (Access::SignedIn, AuthState::SignedOut | AuthState::Error(_)) => {
            GateDecision::RedirectHome
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserDto {
        UserDto {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            profile_image: None,
        }
    }

    fn all_states() -> Vec<AuthState> {
        vec![
            AuthState::Initializing,
            AuthState::Authenticated(user()),
            AuthState::SignedOut,
            AuthState::Error(ApiError {
                status: 500,
                message: "Failed to send request".to_string(),
            }),
        ]
    }

    /// Expect public routes to render whatever the auth state
    #[test]
    fn public_routes_always_render() {
        for state in all_states() {
            assert_eq!(gate(Access::Public, &state), GateDecision::Render);
        }
    }

    /// Expect signed-in routes to render only for an authenticated user
    #[test]
    fn signed_in_routes_render_when_authenticated() {
        assert_eq!(
            gate(Access::SignedIn, &AuthState::Authenticated(user())),
            GateDecision::Render
        );
    }

    /// Expect signed-out users to be sent home from signed-in routes
    #[test]
    fn signed_in_routes_redirect_when_signed_out() {
        assert_eq!(
            gate(Access::SignedIn, &AuthState::SignedOut),
            GateDecision::RedirectHome
        );
    }

    /// Expect a failed user fetch to be treated as signed out
    #[test]
    fn signed_in_routes_redirect_on_fetch_error() {
        let state = AuthState::Error(ApiError {
            status: 500,
            message: "boom".to_string(),
        });

        assert_eq!(gate(Access::SignedIn, &state), GateDecision::RedirectHome);
    }

    /// Expect signed-in routes to wait while the user is being fetched
    #[test]
    fn signed_in_routes_wait_while_initializing() {
        assert_eq!(
            gate(Access::SignedIn, &AuthState::Initializing),
            GateDecision::Pending
        );
    }

    /// Expect fetch results to map onto auth states
    #[test]
    fn maps_fetch_result_to_state() {
        assert_eq!(
            AuthState::from(Ok(Some(user()))),
            AuthState::Authenticated(user())
        );
        assert_eq!(AuthState::from(Ok(None)), AuthState::SignedOut);
        assert!(!AuthState::from(Ok(None)).is_authenticated());
        assert!(AuthState::from(Ok(None)).is_resolved());
        assert!(!AuthState::Initializing.is_resolved());
    }
}
