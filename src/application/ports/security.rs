// src/application/ports/security.rs
use crate::application::{ApplicationResult, dto::Principal};
use async_trait::async_trait;

/// Validates a bearer token minted by the external identity service and
/// yields the verified principal. There is no client-supplied fallback: a
/// request without a valid token carries no tenant or privilege at all.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> ApplicationResult<Principal>;
}
