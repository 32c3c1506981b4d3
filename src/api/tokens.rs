//! # Tokenization API Client
//!
//! This module provides a client for exchanging captured card details for
//! an opaque token. It handles authentication and response decoding for
//! the `/tokens` endpoint.

use crate::{
    config::Environment,
    consts,
    models::card_token::{CreateTokenRequest, CreateTokenResponse},
};
use async_trait::async_trait;
use derive_more::{Display, Error};
use log::error;

/// Failure of a tokenization attempt.
///
/// Transport failures carry the error message; anything else is forwarded
/// to the caller as the raw rejection value, unclassified. Callers may
/// depend on that raw shape, so it is never wrapped.
#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum TokenError {
    #[display("{_0}")]
    Transport(#[error(not(source))] String),
    #[display("{_0}")]
    Rejected(#[error(not(source))] serde_json::Value),
}

/// Seam over the tokenization endpoint
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenApi {
    /// Create a new card token
    async fn create_card_token(
        &self,
        card_details: &CreateTokenRequest,
    ) -> Result<CreateTokenResponse, TokenError>;
}

/// Tokenization API client
pub struct TokenClient {
    /// HTTP client for making API requests
    client: reqwest::Client,
    /// Base URL selected by the environment
    base_url: String,
    /// Client id sent as the bearer credential
    client_id: String,
}

impl TokenClient {
    /// Creates a client pointed at the environment's API
    pub fn new(environment: Environment, client_id: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: environment.api_url().to_string(),
            client_id: client_id.into(),
        }
    }
}

#[async_trait]
impl TokenApi for TokenClient {
    /// Sends the card details to `/tokens` and decodes the response.
    ///
    /// Exactly one attempt is made per call: no retry, no timeout beyond
    /// the transport's own, no cancellation.
    async fn create_card_token(
        &self,
        card_details: &CreateTokenRequest,
    ) -> Result<CreateTokenResponse, TokenError> {
        let endpoint = format!("{}{}", self.base_url, consts::TOKENS_PATH);

        let response = self
            .client
            .post(&endpoint)
            .header("accept", "application/json")
            .header("content-type", "application/json")
            .bearer_auth(&self.client_id)
            .json(card_details)
            .send()
            .await
            .map_err(|err| TokenError::Transport(err.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            error!("{:#?}", response.json::<serde_json::Value>().await);
            return Err(TokenError::Transport(format!(
                "tokenization request failed with status code {status}"
            )));
        }

        response
            .json::<CreateTokenResponse>()
            .await
            .map_err(|err| TokenError::Transport(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_client_uses_environment_base_url() {
        let sandbox = TokenClient::new(Environment::Sandbox, "pk_sbox_xxx");
        assert_eq!(sandbox.base_url, "https://api.sandbox.checkout.com");

        let production = TokenClient::new(Environment::Production, "pk_xxx");
        assert_eq!(production.base_url, "https://api.checkout.com");
    }

    #[test]
    fn test_token_error_display() {
        let transport = TokenError::Transport("connection reset".into());
        assert_eq!(transport.to_string(), "connection reset");

        let rejected = TokenError::Rejected(serde_json::json!("401"));
        assert_eq!(rejected.to_string(), "\"401\"");
    }
}
