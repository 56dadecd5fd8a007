//! JSON entry point for the formatter.
//!
//! Documents look like `{"messageType": "A", "timestamp": 1, ...}`. The
//! `messageType` discriminant is checked before any other field, so an
//! unrecognized type is always reported as such rather than as a generic
//! deserialization failure.

use pmd_core::{CodecError, Message, MessageType};
use serde_json::Value;
use tracing::debug;

use crate::profile::Profile;

const TYPE_KEY: &str = "messageType";

/// Build a [`Message`] from a JSON document.
pub fn message_from_json(doc: &Value) -> Result<Message, CodecError> {
    let discriminant = match doc.get(TYPE_KEY) {
        Some(Value::String(s)) => s.as_str(),
        Some(other) => return Err(unknown(&other.to_string())),
        None => return Err(unknown("(missing)")),
    };
    if MessageType::from_discriminant(discriminant).is_none() {
        return Err(unknown(discriminant));
    }

    serde_json::from_value::<Message>(doc.clone()).map_err(|e| CodecError::InvalidJson(e.to_string()))
}

/// Format a JSON document as a PMD message under `profile`.
pub fn format_json(profile: &Profile, doc: &Value) -> Result<Vec<u8>, CodecError> {
    let message = message_from_json(doc)?;
    crate::format(profile, &message)
}

fn unknown(discriminant: &str) -> CodecError {
    debug!(discriminant, "rejecting unknown message type");
    CodecError::unknown_discriminant(discriminant)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::profile::{NARROW, WIDE};

    #[test]
    fn unknown_type_is_reported_verbatim() {
        let err = format_json(&WIDE, &json!({ "messageType": "?" })).unwrap_err();
        assert_eq!(err, CodecError::unknown_discriminant("?"));
        assert_eq!(err.to_string(), "unknown message type: ?");
    }

    #[test]
    fn missing_type() {
        let err = message_from_json(&json!({ "version": 1 })).unwrap_err();
        assert!(matches!(err, CodecError::UnknownMessageType(_)));
    }

    #[test]
    fn non_string_type() {
        let err = message_from_json(&json!({ "messageType": 86 })).unwrap_err();
        assert_eq!(err, CodecError::unknown_discriminant("86"));
    }

    #[test]
    fn bad_fields_for_known_type() {
        let err = message_from_json(&json!({ "messageType": "V", "version": "one" })).unwrap_err();
        assert!(matches!(err, CodecError::InvalidJson(_)));
    }

    #[test]
    fn formats_version_document() {
        let bytes = format_json(&NARROW, &json!({ "messageType": "V", "version": 1 })).unwrap();
        assert_eq!(bytes, [0x56, 0, 0, 0, 1]);
    }

    #[test]
    fn narrow_only_type_under_wide_profile() {
        let doc = json!({ "messageType": "D", "timestamp": 1, "orderNumber": 2 });
        assert!(format_json(&NARROW, &doc).is_ok());
        assert_eq!(format_json(&WIDE, &doc).unwrap_err(), CodecError::unknown_discriminant("D"));
    }
}
