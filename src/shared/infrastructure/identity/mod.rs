// Authentication port.
//
// Purpose
// - Resolve the caller identity once per request from the bearer token the inbound adapter saw.
//
// Boundaries
// - Session management and sign in flows live outside this service. Only token lookup is here.

pub mod in_memory;

use crate::shared::core::primitives::UserId;
use async_trait::async_trait;

#[async_trait]
pub trait Authenticator: Send + Sync {
    /// `None` when the token does not resolve to a user.
    async fn resolve(&self, token: &str) -> Option<UserId>;
}
