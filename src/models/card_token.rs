//! Request and response shapes of the `/tokens` endpoint.

pub fn default_token_type() -> String {
    "card".into()
}

/// `/tokens` API request
#[derive(serde::Deserialize, serde::Serialize, Debug, Default, Clone, PartialEq)]
pub struct CreateTokenRequest {
    #[serde(rename = "type", default = "default_token_type")]
    pub request_type: String,
    pub name: String,
    /// Card number, digits only
    pub number: String,
    pub expiry_month: u32,
    pub expiry_year: u32,
    pub cvv: String,
}

impl CreateTokenRequest {
    /// Assembles the request from the captured field values.
    ///
    /// Separators are stripped from the card number and the expiry value
    /// is split into month and year. Returns `None` when the expiry does
    /// not split into two non-empty numeric parts; callers cancel the
    /// submission in that case without surfacing an error (kept for
    /// compatibility with existing integrations).
    pub fn from_captured(name: &str, number: &str, expiry_date: &str, cvv: &str) -> Option<Self> {
        let mut expiry_parts = expiry_date.split('/');
        let month = expiry_parts.next().unwrap_or_default();
        let year = expiry_parts.next().unwrap_or_default();

        if month.is_empty() || year.is_empty() {
            return None;
        }

        Some(Self {
            request_type: default_token_type(),
            name: name.to_string(),
            number: number.replace(' ', "").trim().to_string(),
            expiry_month: month.parse().ok()?,
            expiry_year: year.parse().ok()?,
            cvv: cvv.to_string(),
        })
    }
}

/// `/tokens` API response
#[derive(serde::Deserialize, serde::Serialize, Debug, Default, Clone, PartialEq)]
pub struct CreateTokenResponse {
    pub token: String,
    pub bin: String,
    pub last4: String,
    pub expires_on: String,
    pub expiry_month: u32,
    pub expiry_year: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub scheme: String,
    #[serde(default)]
    pub card_type: String,
    #[serde(default)]
    pub issuer: String,
    #[serde(default)]
    pub issuer_country: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product_type: String,
}

/// The subset of the token response handed to the host on success
#[derive(serde::Deserialize, serde::Serialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenDetails {
    pub token: String,
    pub bin: String,
    pub last4: String,
    pub expires_on: String,
}

impl From<CreateTokenResponse> for TokenDetails {
    fn from(response: CreateTokenResponse) -> Self {
        Self {
            token: response.token,
            bin: response.bin,
            last4: response.last4,
            expires_on: response.expires_on,
        }
    }
}
