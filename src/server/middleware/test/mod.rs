use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{AuthContext, AuthGuard},
        session::{AuthSession, CsrfSession},
    },
};
use test_utils::{builder::TestBuilder, factory};
