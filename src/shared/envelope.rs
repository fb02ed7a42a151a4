//! API Response Envelope
//!
//! Every endpoint answers HTTP 200 with this envelope; logical failure is
//! signaled through the `success` flag and `message` text, never through the
//! status code. Store faults carry the generic internal-error message with
//! the fault detail in `error`.

use serde::{Deserialize, Serialize};

use crate::shared::messages;

/// Uniform response envelope `{success, message, data?, error?}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct ApiEnvelope<T> {
    /// Whether the operation succeeded logically
    pub success: bool,
    /// Human-readable outcome; the UI styles itself on this text
    pub message: String,
    /// Operation payload, when there is one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Fault detail, only present on internal errors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Successful outcome with a payload
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
        }
    }

    /// Successful outcome without a payload
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    /// Logical failure (validation or not-found)
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: None,
        }
    }

    /// Internal fault: generic message outward, detail in `error`
    pub fn internal_error(detail: impl Into<String>) -> Self {
        Self {
            success: false,
            message: messages::GENERIC_FAILURE.to_string(),
            data: None,
            error: Some(detail.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_omits_data_and_error_fields() {
        let env = ApiEnvelope::<()>::fail("nope");
        let json = serde_json::to_value(&env).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "nope");
        assert!(json.get("data").is_none());
        assert!(json.get("error").is_none());
    }

    #[test]
    fn internal_error_uses_generic_message() {
        let env = ApiEnvelope::<()>::internal_error("socket reset");
        assert_eq!(env.message, messages::GENERIC_FAILURE);
        assert_eq!(env.error.as_deref(), Some("socket reset"));
        assert!(!env.success);
    }

    #[test]
    fn envelope_round_trips() {
        let env = ApiEnvelope::ok("loaded", vec![1u32, 2, 3]);
        let json = serde_json::to_string(&env).unwrap();
        let back: ApiEnvelope<Vec<u32>> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, env);
    }
}
