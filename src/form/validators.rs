//! Field validators.
//!
//! Each validator is a pure function over the field's current value. A
//! failure carries a message-table key plus the interpolation arguments
//! it needs; the literal text is resolved against the form's catalog.

use crate::{consts, form::mask::is_numeric_string};
use chrono::{Datelike, Local, NaiveDate};

/// A failed validation: message key and interpolation arguments
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub key: &'static str,
    pub args: Vec<(&'static str, String)>,
}

impl ValidationError {
    fn new(key: &'static str) -> Self {
        Self {
            key,
            args: Vec::new(),
        }
    }

    fn with_arg(key: &'static str, name: &'static str, value: String) -> Self {
        Self {
            key,
            args: vec![(name, value)],
        }
    }
}

pub type ValidationResult = Result<(), ValidationError>;

pub fn validate_cardholder_name(value: &str) -> ValidationResult {
    if value.is_empty() {
        return Err(ValidationError::new(
            "paymentForm.formValidations.name.required",
        ));
    }

    if value.len() < consts::NAME_MIN_LENGTH {
        return Err(ValidationError::with_arg(
            "paymentForm.formValidations.name.minLength",
            "minLength",
            consts::NAME_MIN_LENGTH.to_string(),
        ));
    }

    Ok(())
}

pub fn validate_card_number(value: &str) -> ValidationResult {
    if value.is_empty() {
        return Err(ValidationError::new(
            "paymentForm.formValidations.number.required",
        ));
    }

    // length of the masked value, separators included
    if value.len() < consts::CARD_NUMBER_FULL_LENGTH {
        return Err(ValidationError::with_arg(
            "paymentForm.formValidations.number.minLength",
            "minLength",
            consts::CARD_NUMBER_FULL_LENGTH.to_string(),
        ));
    }

    Ok(())
}

pub fn validate_security_code(value: &str) -> ValidationResult {
    if value.is_empty() {
        return Err(ValidationError::new(
            "paymentForm.formValidations.securityCode.required",
        ));
    }

    if value.len() < consts::CVV_MIN_LENGTH {
        return Err(ValidationError::with_arg(
            "paymentForm.formValidations.securityCode.minLength",
            "minLength",
            consts::CVV_MIN_LENGTH.to_string(),
        ));
    }

    Ok(())
}

/// Validate the card expiry date against today's date
pub fn validate_expiry_date(value: &str) -> ValidationResult {
    validate_expiry_date_at(value, Local::now().date_naive())
}

/// Validate the card expiry date against an arbitrary reference date
pub fn validate_expiry_date_at(value: &str, today: NaiveDate) -> ValidationResult {
    if value.is_empty() {
        return Err(ValidationError::new(
            "paymentForm.formValidations.expiryDate.required",
        ));
    }

    if value.len() < consts::EXPIRY_DATE_FULL_LENGTH {
        return Err(ValidationError::with_arg(
            "paymentForm.formValidations.expiryDate.minLength",
            "minLength",
            consts::EXPIRY_DATE_FULL_LENGTH.to_string(),
        ));
    }

    let mut parts = value.split('/');
    let month = parts.next().map(str::trim).unwrap_or_default();
    let year = parts.next().map(str::trim).unwrap_or_default();

    if month.is_empty() || year.is_empty() {
        return Err(ValidationError::new(
            "paymentForm.formValidations.expiryDate.invalid",
        ));
    }

    let valid_month = parse_numeric(month).is_some_and(|m| (1..=12).contains(&m));
    if !valid_month {
        return Err(ValidationError::with_arg(
            "paymentForm.formValidations.expiryDate.invalidMonth",
            "month",
            month.to_string(),
        ));
    }

    let current_year = today.year();
    let expiry_year = parse_numeric(year).map(|y| 2000 + y);
    if !expiry_year.is_some_and(|y| y >= current_year) {
        return Err(ValidationError::with_arg(
            "paymentForm.formValidations.expiryDate.invalidYear",
            "currentYear",
            current_year.to_string(),
        ));
    }

    let current_month = today.month() as i32;
    let same_year = expiry_year == Some(current_year);
    if same_year && parse_numeric(month).is_some_and(|m| current_month > m) {
        return Err(ValidationError::new(
            "paymentForm.formValidations.expiryDate.expiredCard",
        ));
    }

    Ok(())
}

fn parse_numeric(value: &str) -> Option<i32> {
    if is_numeric_string(value) {
        value.parse().ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn june(year: i32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, 6, 1).unwrap()
    }

    #[test]
    fn test_validate_cardholder_name() {
        assert_eq!(
            validate_cardholder_name("").unwrap_err().key,
            "paymentForm.formValidations.name.required"
        );

        let too_short = validate_cardholder_name("B").unwrap_err();
        assert_eq!(too_short.key, "paymentForm.formValidations.name.minLength");
        assert_eq!(too_short.args, vec![("minLength", "2".to_string())]);

        assert!(validate_cardholder_name("Tony Stark").is_ok());
    }

    #[test]
    fn test_validate_card_number() {
        assert_eq!(
            validate_card_number("").unwrap_err().key,
            "paymentForm.formValidations.number.required"
        );
        assert_eq!(
            validate_card_number("4242").unwrap_err().key,
            "paymentForm.formValidations.number.minLength"
        );
        assert!(validate_card_number("4242 4242 4242 4242").is_ok());
    }

    #[test]
    fn test_validate_security_code() {
        assert_eq!(
            validate_security_code("").unwrap_err().key,
            "paymentForm.formValidations.securityCode.required"
        );
        assert_eq!(
            validate_security_code("10").unwrap_err().key,
            "paymentForm.formValidations.securityCode.minLength"
        );
        assert!(validate_security_code("100").is_ok());
    }

    #[test]
    fn test_validate_expiry_date_required_and_length() {
        assert_eq!(
            validate_expiry_date("").unwrap_err().key,
            "paymentForm.formValidations.expiryDate.required"
        );

        let incomplete = validate_expiry_date("06").unwrap_err();
        assert_eq!(
            incomplete.key,
            "paymentForm.formValidations.expiryDate.minLength"
        );
        assert_eq!(incomplete.args, vec![("minLength", "5".to_string())]);
    }

    #[test]
    fn test_validate_expiry_date_invalid_month() {
        let invalid = validate_expiry_date_at("13/27", june(2025)).unwrap_err();
        assert_eq!(
            invalid.key,
            "paymentForm.formValidations.expiryDate.invalidMonth"
        );
        assert_eq!(invalid.args, vec![("month", "13".to_string())]);

        assert_eq!(
            validate_expiry_date_at("00/27", june(2025)).unwrap_err().key,
            "paymentForm.formValidations.expiryDate.invalidMonth"
        );
    }

    #[test]
    fn test_validate_expiry_date_past_year() {
        let past = validate_expiry_date_at("06/12", june(2025)).unwrap_err();
        assert_eq!(
            past.key,
            "paymentForm.formValidations.expiryDate.invalidYear"
        );
        assert_eq!(past.args, vec![("currentYear", "2025".to_string())]);
    }

    #[test]
    fn test_validate_expiry_date_expired_card_same_year() {
        // card expired in May, reference date is June of the same year
        assert_eq!(
            validate_expiry_date_at("05/25", june(2025)).unwrap_err().key,
            "paymentForm.formValidations.expiryDate.expiredCard"
        );

        // the current month itself is still valid
        assert!(validate_expiry_date_at("06/25", june(2025)).is_ok());
    }

    #[test]
    fn test_validate_expiry_date_future_date_passes() {
        assert!(validate_expiry_date_at("06/27", june(2025)).is_ok());
        assert!(validate_expiry_date_at("12/25", june(2025)).is_ok());
    }
}
