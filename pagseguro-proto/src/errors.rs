//! Gateway error entries and envelopes.
//!
//! The Orders API reports validation failures in two differently shaped
//! bodies:
//!
//! - order-level failures return a single entry:
//!   `{"code": "40001", "description": "...", "parameter_name": "..."}`
//! - charge and payment-method failures return a list:
//!   `{"error_messages": [{"code": ...}, ...]}`
//!
//! [`ErrorEnvelope::parse`] tries both shapes in that order. A body is only
//! accepted when it is a JSON object carrying the required keys of a shape,
//! so a list body can never be mistaken for an empty single entry.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One validation problem reported by the gateway.
///
/// Only decodes from a JSON object with string `code` and `description`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ApiError {
    /// Machine-readable error code (e.g. `"40001"`).
    pub code: String,

    /// Short reason (e.g. `"required_parameter"`).
    pub description: String,

    /// Offending request parameter, empty when the gateway omits it or sends `null`.
    pub parameter_name: String,
}

/// Field layout of [`ApiError`] on the wire.
#[derive(Deserialize)]
struct ApiErrorFields {
    code: String,
    description: String,
    #[serde(default)]
    parameter_name: Option<String>,
}

impl TryFrom<Map<String, Value>> for ApiError {
    type Error = serde_json::Error;

    fn try_from(object: Map<String, Value>) -> Result<Self, Self::Error> {
        let fields: ApiErrorFields = serde_json::from_value(Value::Object(object))?;
        Ok(Self {
            code: fields.code,
            description: fields.description,
            parameter_name: fields.parameter_name.unwrap_or_default(),
        })
    }
}

impl ApiError {
    /// Creates an error entry.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        parameter_name: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            parameter_name: parameter_name.into(),
        }
    }
}

/// The error body shapes returned by the Orders API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ErrorEnvelope {
    /// A single top-level entry.
    Single(ApiError),

    /// A list of entries under `error_messages`.
    Multiple {
        /// Reported problems, in gateway order.
        error_messages: Vec<ApiError>,
    },
}

impl ErrorEnvelope {
    /// Decodes a response body into one of the known shapes.
    ///
    /// Returns `None` when the body is empty, is not JSON, matches neither
    /// shape, or carries an empty `error_messages` list.
    #[must_use]
    pub fn parse(body: &[u8]) -> Option<Self> {
        let value: Value = serde_json::from_slice(body).ok()?;
        if !value.is_object() {
            return None;
        }
        match serde_json::from_value::<Self>(value).ok()? {
            Self::Multiple { error_messages } if error_messages.is_empty() => None,
            envelope => Some(envelope),
        }
    }

    /// Flattens the envelope into its entries.
    #[must_use]
    pub fn into_errors(self) -> Vec<ApiError> {
        match self {
            Self::Single(error) => vec![error],
            Self::Multiple { error_messages } => error_messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_entry() {
        let body = br#"
            {
                "code": "40001",
                "description": "required_parameter",
                "parameter_name": "payment_methods_is_required"
            }
        "#;
        let envelope = ErrorEnvelope::parse(body).unwrap();
        assert_eq!(
            envelope,
            ErrorEnvelope::Single(ApiError::new(
                "40001",
                "required_parameter",
                "payment_methods_is_required"
            ))
        );
    }

    #[test]
    fn parses_error_messages_in_order() {
        let body = br#"
            {
                "error_messages": [
                    {"code": "40001", "description": "required_parameter", "parameter_name": "payment_method.capture"},
                    {"code": "40002", "description": "invalid_parameter", "parameter_name": "payment_methods_is_invalid"}
                ]
            }
        "#;
        let errors = ErrorEnvelope::parse(body).unwrap().into_errors();
        assert_eq!(
            errors,
            vec![
                ApiError::new("40001", "required_parameter", "payment_method.capture"),
                ApiError::new("40002", "invalid_parameter", "payment_methods_is_invalid"),
            ]
        );
    }

    #[test]
    fn single_entry_without_parameter_name() {
        let body = br#"{"code": "40003", "description": "invalid_state"}"#;
        let errors = ErrorEnvelope::parse(body).unwrap().into_errors();
        assert_eq!(errors, vec![ApiError::new("40003", "invalid_state", "")]);
    }

    #[test]
    fn null_parameter_name_is_empty() {
        let body = br#"{"code": "40001", "description": "required_parameter", "parameter_name": null}"#;
        let errors = ErrorEnvelope::parse(body).unwrap().into_errors();
        assert_eq!(errors, vec![ApiError::new("40001", "required_parameter", "")]);

        let body = br#"{"error_messages": [{"code": "40002", "description": "invalid_parameter", "parameter_name": null}]}"#;
        let errors = ErrorEnvelope::parse(body).unwrap().into_errors();
        assert_eq!(errors, vec![ApiError::new("40002", "invalid_parameter", "")]);
    }

    #[test]
    fn extra_keys_are_ignored() {
        let body = br#"{"code": "40001", "description": "required_parameter", "trace_id": "abc"}"#;
        assert!(matches!(
            ErrorEnvelope::parse(body),
            Some(ErrorEnvelope::Single(_))
        ));
    }

    #[test]
    fn rejects_unknown_shapes() {
        assert_eq!(ErrorEnvelope::parse(b""), None);
        assert_eq!(ErrorEnvelope::parse(b"   "), None);
        assert_eq!(ErrorEnvelope::parse(b"<html>Bad Gateway</html>"), None);
        assert_eq!(ErrorEnvelope::parse(br#"{"teste_message": "test"}"#), None);
        assert_eq!(ErrorEnvelope::parse(br#"{"code": "40001"}"#), None);
        assert_eq!(ErrorEnvelope::parse(br#"{"error_messages": "oops"}"#), None);
        assert_eq!(ErrorEnvelope::parse(b"null"), None);
        assert_eq!(ErrorEnvelope::parse(br#"["40001","required_parameter"]"#), None);
        assert_eq!(
            ErrorEnvelope::parse(br#"[[{"code": "40001", "description": "required_parameter"}]]"#),
            None
        );
        assert_eq!(
            ErrorEnvelope::parse(br#"{"error_messages": [["40001", "required_parameter"]]}"#),
            None
        );
        assert_eq!(
            ErrorEnvelope::parse(br#"{"code": 40001, "description": "required_parameter"}"#),
            None
        );
    }

    #[test]
    fn empty_error_messages_is_not_a_known_shape() {
        assert_eq!(ErrorEnvelope::parse(br#"{"error_messages": []}"#), None);
    }
}
