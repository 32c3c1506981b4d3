//! # Payment Form
//!
//! Holds the state of the four captured fields, wires each one to its
//! mask and validator, and drives the submission flow that exchanges the
//! captured card details for a token.

pub mod mask;
pub mod validators;

use crate::{
    api::tokens::{TokenApi, TokenClient, TokenError},
    config::CheckoutConfig,
    consts,
    i18n::{Catalog, FormLabels},
    models::card_token::{CreateTokenRequest, TokenDetails},
    style::CustomStyle,
};

/// Fields captured by the payment form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CardholderName,
    CardNumber,
    ExpiryDate,
    Cvv,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::CardholderName,
        Field::CardNumber,
        Field::ExpiryDate,
        Field::Cvv,
    ];

    fn mask(&self) -> Option<&'static str> {
        match self {
            Field::CardNumber => Some(consts::CARD_NUMBER_MASK),
            Field::ExpiryDate => Some(consts::EXPIRY_DATE_MASK),
            Field::CardholderName | Field::Cvv => None,
        }
    }

    fn only_numbers(&self) -> bool {
        matches!(self, Field::ExpiryDate | Field::Cvv)
    }

    fn max_length(&self) -> Option<usize> {
        match self {
            Field::CardholderName => None,
            Field::CardNumber => Some(consts::CARD_NUMBER_FULL_LENGTH),
            Field::ExpiryDate => Some(consts::EXPIRY_DATE_FULL_LENGTH),
            Field::Cvv => Some(consts::CVV_MAX_LENGTH),
        }
    }
}

/// State of a single form field
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FieldState {
    pub value: String,
    pub touched: bool,
    pub error: Option<String>,
}

/// Lifecycle of a submit action
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// A payment form that captures the card details and generates a token
pub struct PaymentForm {
    catalog: Catalog,
    style: Option<CustomStyle>,
    token_api: Box<dyn TokenApi + Send + Sync>,
    cardholder_name: FieldState,
    card_number: FieldState,
    expiry_date: FieldState,
    cvv: FieldState,
    submit_state: SubmitState,
}

impl PaymentForm {
    pub fn new(config: CheckoutConfig) -> Self {
        let token_api = TokenClient::new(config.environment, &config.client_id);
        Self::with_token_api(config, Box::new(token_api))
    }

    /// Builds the form over a caller-supplied tokenization client
    pub fn with_token_api(
        config: CheckoutConfig,
        token_api: Box<dyn TokenApi + Send + Sync>,
    ) -> Self {
        Self {
            catalog: Catalog::resolve(config.language.as_deref(), config.translations.as_ref()),
            style: config.style,
            token_api,
            cardholder_name: FieldState::default(),
            card_number: FieldState::default(),
            expiry_date: FieldState::default(),
            cvv: FieldState::default(),
            submit_state: SubmitState::Idle,
        }
    }

    pub fn field(&self, field: Field) -> &FieldState {
        match field {
            Field::CardholderName => &self.cardholder_name,
            Field::CardNumber => &self.card_number,
            Field::ExpiryDate => &self.expiry_date,
            Field::Cvv => &self.cvv,
        }
    }

    fn field_mut(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::CardholderName => &mut self.cardholder_name,
            Field::CardNumber => &mut self.card_number,
            Field::ExpiryDate => &mut self.expiry_date,
            Field::Cvv => &mut self.cvv,
        }
    }

    pub fn submit_state(&self) -> SubmitState {
        self.submit_state
    }

    /// Labels and button captions in the resolved language
    pub fn labels(&self) -> FormLabels {
        self.catalog.form_labels()
    }

    /// Style overrides, untouched, for the host renderer
    pub fn style(&self) -> Option<&CustomStyle> {
        self.style.as_ref()
    }

    /// Applies a keystroke to a field.
    ///
    /// The raw value goes through the field's mask; a change that would
    /// leave a numeric-only field ending in a non-numeric character is
    /// ignored and the stored value stays as it was.
    pub fn change(&mut self, field: Field, value: &str) {
        let Some(mut next) = mask::masked_change(field.mask(), value, field.only_numbers()) else {
            return;
        };

        if let Some(max_length) = field.max_length() {
            next.truncate(max_length);
        }

        self.field_mut(field).value = next;
    }

    /// Marks a field as visited and validates its current value
    pub fn blur(&mut self, field: Field) {
        let message = self.validation_message(field);
        let state = self.field_mut(field);
        state.touched = true;
        state.error = message;
    }

    /// Runs the submission flow.
    ///
    /// All four validators re-run against the current values; any failure
    /// displays every error message at once and no request is made. A
    /// valid form is assembled into a tokenization request and sent in a
    /// single attempt, with the outcome handed to exactly one of the two
    /// host callbacks.
    pub async fn submit(
        &mut self,
        on_success: impl FnOnce(TokenDetails),
        on_error: impl FnOnce(TokenError),
    ) {
        self.submit_state = SubmitState::Validating;

        let mut any_invalid = false;
        for field in Field::ALL {
            let message = self.validation_message(field);
            any_invalid |= message.is_some();
            let state = self.field_mut(field);
            state.touched = true;
            state.error = message;
        }

        if any_invalid {
            self.submit_state = SubmitState::Idle;
            return;
        }

        // An expiry value that no longer splits into month and year
        // cancels the submission with no surfaced error. Kept as-is for
        // compatibility with existing integrations.
        let Some(request) = CreateTokenRequest::from_captured(
            &self.cardholder_name.value,
            &self.card_number.value,
            &self.expiry_date.value,
            &self.cvv.value,
        ) else {
            self.submit_state = SubmitState::Idle;
            return;
        };

        self.submit_state = SubmitState::Submitting;

        match self.token_api.create_card_token(&request).await {
            Ok(response) => {
                self.submit_state = SubmitState::Succeeded;
                on_success(TokenDetails::from(response));
            }
            Err(err) => {
                self.submit_state = SubmitState::Failed;
                on_error(err);
            }
        }
    }

    fn validation_message(&self, field: Field) -> Option<String> {
        let value = &self.field(field).value;
        let outcome = match field {
            Field::CardholderName => validators::validate_cardholder_name(value),
            Field::CardNumber => validators::validate_card_number(value),
            Field::ExpiryDate => validators::validate_expiry_date(value),
            Field::Cvv => validators::validate_security_code(value),
        };

        outcome.err().map(|err| self.catalog.text(err.key, &err.args))
    }
}
