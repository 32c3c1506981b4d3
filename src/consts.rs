pub const SANDBOX_API_URL: &str = "https://api.sandbox.checkout.com";
pub const PRODUCTION_API_URL: &str = "https://api.checkout.com";
pub const TOKENS_PATH: &str = "/tokens";

pub const DEFAULT_LANGUAGE: &str = "en";

pub const CARD_NUMBER_MASK: &str = "9999 9999 9999 9999";
pub const EXPIRY_DATE_MASK: &str = "99/99";

pub const NAME_MIN_LENGTH: usize = 2;
// masked length, separators included
pub const CARD_NUMBER_FULL_LENGTH: usize = 19;
pub const EXPIRY_DATE_FULL_LENGTH: usize = 5;
pub const CVV_MIN_LENGTH: usize = 3;
pub const CVV_MAX_LENGTH: usize = 3;

pub const NAME_PLACEHOLDER: &str = "Tony Stark";
pub const CARD_NUMBER_PLACEHOLDER: &str = "1234 1234 1234 1234";
pub const EXPIRY_DATE_PLACEHOLDER: &str = "MM/YY";
pub const CVV_PLACEHOLDER: &str = "CVV";
