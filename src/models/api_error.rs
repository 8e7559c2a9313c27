use std::collections::BTreeMap;

use crate::error::JewelLinkError;

/// Error payload of a non-2xx response.
///
/// The backend reports failures as `{"detail": ...}`, `{"message": ...}`,
/// `{"error": ...}` or as a map of field name to messages (with
/// `non_field_errors` for form-level ones). Anything else is kept as raw text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApiErrorBody {
    pub message: Option<String>,
    pub fields: BTreeMap<String, Vec<String>>,
    pub raw: String,
}

const MESSAGE_KEYS: [&str; 3] = ["detail", "message", "error"];
const FORM_LEVEL_KEY: &str = "non_field_errors";

impl ApiErrorBody {
    pub fn parse(text: &str) -> Self {
        let mut body = ApiErrorBody {
            raw: text.to_string(),
            ..Default::default()
        };

        let Ok(serde_json::Value::Object(map)) = serde_json::from_str::<serde_json::Value>(text)
        else {
            return body;
        };

        for (key, value) in map {
            if MESSAGE_KEYS.contains(&key.as_str()) {
                if let Some(s) = value.as_str() {
                    body.message.get_or_insert_with(|| s.to_string());
                    continue;
                }
            }

            let messages = string_list(&value);
            if messages.is_empty() {
                continue;
            }
            if key == FORM_LEVEL_KEY {
                body.message.get_or_insert_with(|| messages.join(" "));
            }
            body.fields.insert(key, messages);
        }

        body
    }

    /// Best single-line description of the failure
    pub fn summary(&self) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        if !self.fields.is_empty() {
            return self
                .fields
                .iter()
                .map(|(field, msgs)| format!("{}: {}", field, msgs.join(" ")))
                .collect::<Vec<_>>()
                .join("; ");
        }
        if self.raw.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            self.raw.trim().to_string()
        }
    }

    /// Map the payload and status onto the crate error taxonomy.
    pub fn into_error(self, status_code: u16) -> JewelLinkError {
        let message = self.summary();
        match status_code {
            401 | 403 => JewelLinkError::AuthenticationError(message),
            400 | 422 if !self.fields.is_empty() => JewelLinkError::ValidationError {
                message,
                fields: self.fields,
            },
            _ => JewelLinkError::ServerError {
                status_code,
                message,
            },
        }
    }
}

fn string_list(value: &serde_json::Value) -> Vec<String> {
    match value {
        serde_json::Value::String(s) => vec![s.clone()],
        serde_json::Value::Array(items) => items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect(),
        _ => Vec::new(),
    }
}
