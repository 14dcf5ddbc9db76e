// Caller identity extraction.
//
// A missing, malformed or unknown bearer token yields an anonymous caller instead of a
// rejection: queries answer `null` for anonymous callers and mutations reject them in the use
// case handlers.

use crate::shared::core::primitives::UserId;
use crate::shell::state::AppState;
use axum::extract::FromRequestParts;
use axum::http::{HeaderMap, header::AUTHORIZATION, request::Parts};
use std::convert::Infallible;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Caller(pub Option<UserId>);

impl Caller {
    pub fn user_id(&self) -> Option<&UserId> {
        self.0.as_ref()
    }

    pub async fn resolve(headers: &HeaderMap, state: &AppState) -> Self {
        match bearer_token(headers) {
            Some(token) => Caller(state.authenticator.resolve(token).await),
            None => Caller(None),
        }
    }
}

pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for Caller {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(Caller::resolve(&parts.headers, state).await)
    }
}
