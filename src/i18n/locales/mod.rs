pub mod en;
pub mod pt;

use serde_json::Value;

/// Bundled message table for a language code, if one ships with the crate
pub fn builtin(language: &str) -> Option<Value> {
    match language {
        "en" => Some(en::table()),
        "pt" => Some(pt::table()),
        _ => None,
    }
}
