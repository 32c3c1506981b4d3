//! Locale-keyed message tables.
//!
//! A language code selects one of the bundled tables; unknown or absent
//! codes fall back to the default language. Caller-supplied partial
//! tables are merged on top of the selected one at the deepest key
//! level, so overriding one message leaves its siblings intact.

pub mod locales;

use crate::consts;
use serde_json::Value;
use std::collections::HashMap;

/// Resolved message table for one form instance
#[derive(Debug, Clone)]
pub struct Catalog {
    table: Value,
}

impl Catalog {
    /// Selects the table for `language` and applies the override for
    /// that same code, if the host supplied one
    pub fn resolve(language: Option<&str>, overrides: Option<&HashMap<String, Value>>) -> Self {
        let language = language.unwrap_or(consts::DEFAULT_LANGUAGE);
        let mut table = locales::builtin(language)
            .or_else(|| locales::builtin(consts::DEFAULT_LANGUAGE))
            .unwrap_or_default();

        if let Some(overlay) = overrides.and_then(|tables| tables.get(language)) {
            deep_merge(&mut table, overlay);
        }

        Self { table }
    }

    /// Looks up a dotted-path key and interpolates `{{param}}` markers.
    ///
    /// A missing or non-string entry resolves to the key itself so the
    /// form always has something to render.
    pub fn text(&self, key: &str, args: &[(&'static str, String)]) -> String {
        let mut node = &self.table;
        for part in key.split('.') {
            match node.get(part) {
                Some(child) => node = child,
                None => return key.to_string(),
            }
        }

        let Some(template) = node.as_str() else {
            return key.to_string();
        };

        let mut message = template.to_string();
        for (name, value) in args {
            message = message.replace(&format!("{{{{{name}}}}}"), value);
        }
        message
    }

    /// Field labels and button captions resolved for the host renderer
    pub fn form_labels(&self) -> FormLabels {
        FormLabels {
            name: self.text("paymentForm.labels.name", &[]),
            number: self.text("paymentForm.labels.number", &[]),
            expiry_date: self.text("paymentForm.labels.expiryDate", &[]),
            security_code: self.text("paymentForm.labels.securityCode", &[]),
            pay: self.text("paymentForm.buttons.pay", &[]),
        }
    }
}

/// Display strings for the four fields and the submit button
#[derive(Debug, Clone, PartialEq)]
pub struct FormLabels {
    pub name: String,
    pub number: String,
    pub expiry_date: String,
    pub security_code: String,
    pub pay: String,
}

/// Merges `overlay` into `base`, descending into nested maps so only the
/// deepest overridden keys are replaced
pub fn deep_merge(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => {
                        base_map.insert(key.clone(), overlay_value.clone());
                    }
                }
            }
        }
        (base_value, overlay_value) => *base_value = overlay_value.clone(),
    }
}
