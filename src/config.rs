//! Configuration the host application injects into the form.
//!
//! Everything is passed explicitly by value; there is no ambient or
//! global lookup. The bearer credential is only ever sent to the
//! tokenization endpoint and should not be logged.

use crate::{consts, style::CustomStyle};
use derive_more::Display;
use serde_json::Value;
use std::collections::HashMap;

/// Environment the tokenization requests go through
#[derive(Debug, Display, Clone, Copy, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    #[display("sandbox")]
    Sandbox,
    #[display("production")]
    Production,
}

impl Environment {
    /// Base URL of the tokenization API for this environment
    pub fn api_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => consts::SANDBOX_API_URL,
            Environment::Production => consts::PRODUCTION_API_URL,
        }
    }
}

impl From<&str> for Environment {
    /// Unknown selectors fall back to the sandbox environment
    fn from(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "production" => Environment::Production,
            _ => Environment::Sandbox,
        }
    }
}

/// Host-supplied configuration for a [`crate::form::PaymentForm`]
#[derive(Debug, Default, Clone)]
pub struct CheckoutConfig {
    /// Environment in which you want your payment to go through
    pub environment: Environment,
    /// Client id sent as the bearer credential on tokenization requests
    pub client_id: String,
    /// Language code selecting one of the bundled message tables
    pub language: Option<String>,
    /// Partial message tables merged on top of the selected one, keyed
    /// by language code
    pub translations: Option<HashMap<String, Value>>,
    /// Style overrides forwarded untouched to the rendering layer
    pub style: Option<CustomStyle>,
}

impl CheckoutConfig {
    pub fn new(environment: Environment, client_id: impl Into<String>) -> Self {
        Self {
            environment,
            client_id: client_id.into(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_api_url_mapping() {
        assert_eq!(
            Environment::Sandbox.api_url(),
            "https://api.sandbox.checkout.com"
        );
        assert_eq!(Environment::Production.api_url(), "https://api.checkout.com");
    }

    #[test]
    fn test_environment_from_selector() {
        assert_eq!(Environment::from("production"), Environment::Production);
        assert_eq!(Environment::from("sandbox"), Environment::Sandbox);
        assert_eq!(Environment::from("staging"), Environment::Sandbox);
        assert_eq!(Environment::from(""), Environment::Sandbox);
    }

    #[test]
    fn test_checkout_config_defaults() {
        let config = CheckoutConfig::new(Environment::Sandbox, "pk_sbox_xxx");
        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.client_id, "pk_sbox_xxx");
        assert!(config.language.is_none());
        assert!(config.translations.is_none());
        assert!(config.style.is_none());
    }
}
