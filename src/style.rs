use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Style overrides for the elements on the screen.
///
/// The values are opaque to this crate: they are carried as-is and handed
/// back to the host rendering layer without validation or transformation.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_input_style: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_style: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_messages_style: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_container_style: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub button_title_style: Option<Value>,
}
