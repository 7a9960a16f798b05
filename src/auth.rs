use async_trait::async_trait;
use thiserror::Error;

use crate::types::AccessToken;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("No valid access token available: {0}")]
    TokenUnavailable(String),
}

/// Source of bearer tokens for the appliance API.
///
/// Obtaining and refreshing credentials is the implementor's concern; the
/// directory only ever asks for a token that is valid right now, once per
/// request it makes.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn access_token(&self) -> Result<AccessToken, AuthError>;
}

/// A token source backed by a single pre-issued token.
#[derive(Debug, Clone)]
pub struct FixedToken(AccessToken);

impl FixedToken {
    pub fn new(token: impl Into<AccessToken>) -> Self {
        Self(token.into())
    }
}

#[async_trait]
impl TokenSource for FixedToken {
    async fn access_token(&self) -> Result<AccessToken, AuthError> {
        Ok(self.0.clone())
    }
}
