//! Typed error definitions for the PMD codec.
//!
//! Every failure is immediate and synchronous; the codec never retries and
//! never returns partial results. Variants implement `std::error::Error` via
//! `thiserror`, so they integrate with `anyhow::Result` in application code.

use thiserror::Error;

use crate::types::{FieldId, MessageType};

/// The offending value behind an [`CodecError::UnknownMessageType`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnknownType {
    /// Textual discriminant supplied on the encode side, shown verbatim.
    Discriminant(String),
    /// Tag byte read on the decode side, shown as its unsigned value.
    Tag(u8),
}

impl std::fmt::Display for UnknownType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Discriminant(s) => f.write_str(s),
            Self::Tag(b) => write!(f, "{b}"),
        }
    }
}

/// Errors produced while formatting or parsing PMD messages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Discriminant or tag byte that the active profile does not carry.
    #[error("unknown message type: {0}")]
    UnknownMessageType(UnknownType),

    /// Input shorter than the layout requires.
    #[error("truncated message: need {needed} bytes, got {actual}")]
    TruncatedMessage {
        message_type: Option<MessageType>,
        needed: usize,
        actual: usize,
    },

    /// Value does not fit the field's wire width.
    #[error("field {field} value {value} exceeds maximum {max}")]
    FieldOverflow { field: FieldId, value: u64, max: u64 },

    /// Side byte other than `B` or `S`.
    #[error("invalid side byte: {0:#04x}")]
    InvalidSide(u8),

    /// JSON document for a known message type could not be deserialized.
    #[error("invalid message document: {0}")]
    InvalidJson(String),

    /// Layout table references a field the message shape does not have.
    #[error("{message_type} has no field {field}")]
    MissingField { message_type: MessageType, field: FieldId },
}

impl CodecError {
    pub fn unknown_tag(tag: u8) -> Self {
        Self::UnknownMessageType(UnknownType::Tag(tag))
    }

    pub fn unknown_discriminant(s: impl Into<String>) -> Self {
        Self::UnknownMessageType(UnknownType::Discriminant(s.into()))
    }
}
