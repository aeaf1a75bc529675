use crate::server::{
    data::auth_token::AuthTokenRepository,
    error::{auth::AuthError, AppError},
    middleware::auth::{bearer_token, AuthGuard, Permission},
};
use axum::http::{header::AUTHORIZATION, HeaderMap, HeaderValue};
use test_utils::{builder::TestBuilder, factory};

mod parse_header;
mod require;
mod require_team;

fn auth_headers(value: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
    headers
}
