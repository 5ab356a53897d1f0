use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
};
use serde_json::json;
use test_utils::{builder::TestBuilder, factory};
use tower::ServiceExt;

use crate::server::util::test::{
    body_json, session_cookie, signed_in_cookie, test_app, test_config,
};

mod health;

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}
