//! # Checkout Form SDK
//!
//! Headless payment card capture form: field masking, client-side
//! validation and exchange of the captured card details for an opaque
//! token through the tokenization API. The host application owns the
//! rendering; this crate owns field state, validation messages and the
//! tokenization call.

pub mod api;
pub mod config;
pub mod consts;
pub mod form;
pub mod i18n;
pub mod logger;
pub mod models;
pub mod style;

pub use api::tokens::{TokenApi, TokenClient, TokenError};
pub use config::{CheckoutConfig, Environment};
pub use form::{Field, FieldState, PaymentForm, SubmitState};
pub use i18n::FormLabels;
pub use models::card_token::TokenDetails;
pub use style::CustomStyle;
