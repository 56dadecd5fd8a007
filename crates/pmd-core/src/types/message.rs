//! Message structures — one plain struct per PMD message type, wrapped in the
//! closed [`Message`] enum.
//!
//! Integer fields whose wire width differs between profiles are held as `u64`
//! so the same value type serves both the narrow and the wide layout.
//!
//! # JSON shape
//!
//! `Message` serializes as an internally tagged object keyed by
//! `messageType`, with camelCase field names:
//!
//! ```json
//! { "messageType": "A", "timestamp": 1, "orderNumber": 4294967298,
//!   "side": "B", "instrument": "FOO     ", "quantity": 3, "price": 4 }
//! ```

use serde::{Deserialize, Serialize};

use super::enums::{MessageType, Side};

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Protocol version handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    pub version: u32,
}

/// Time marker: seconds since the start of the trading day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seconds {
    pub second: u32,
}

/// A new order entered the book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderAdded {
    pub timestamp: u64,
    pub order_number: u64,
    pub side: Side,
    /// Instrument symbol. Encoded as exactly [`INSTRUMENT_LEN`](super::INSTRUMENT_LEN)
    /// bytes, space-padded; decoded values keep the padding.
    pub instrument: String,
    pub quantity: u64,
    pub price: u64,
}

/// An order was (partially) executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderExecuted {
    pub timestamp: u64,
    pub order_number: u64,
    pub quantity: u64,
    pub match_number: u32,
}

/// Part of an order's remaining quantity was canceled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCanceled {
    pub timestamp: u64,
    pub order_number: u64,
    pub canceled_quantity: u64,
}

/// An order was removed from the book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDeleted {
    pub timestamp: u64,
    pub order_number: u64,
}

/// A previously reported match was broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrokenTrade {
    pub timestamp: u64,
    pub match_number: u32,
}

// ---------------------------------------------------------------------------
// Message
// ---------------------------------------------------------------------------

/// A single PMD message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "messageType")]
pub enum Message {
    #[serde(rename = "V")]
    Version(Version),
    #[serde(rename = "S")]
    Seconds(Seconds),
    #[serde(rename = "A")]
    OrderAdded(OrderAdded),
    #[serde(rename = "E")]
    OrderExecuted(OrderExecuted),
    #[serde(rename = "X")]
    OrderCanceled(OrderCanceled),
    #[serde(rename = "D")]
    OrderDeleted(OrderDeleted),
    #[serde(rename = "B")]
    BrokenTrade(BrokenTrade),
}

impl Message {
    pub fn message_type(&self) -> MessageType {
        match self {
            Self::Version(_) => MessageType::Version,
            Self::Seconds(_) => MessageType::Seconds,
            Self::OrderAdded(_) => MessageType::OrderAdded,
            Self::OrderExecuted(_) => MessageType::OrderExecuted,
            Self::OrderCanceled(_) => MessageType::OrderCanceled,
            Self::OrderDeleted(_) => MessageType::OrderDeleted,
            Self::BrokenTrade(_) => MessageType::BrokenTrade,
        }
    }
}

// ---------------------------------------------------------------------------
// Field identifiers
// ---------------------------------------------------------------------------

/// Names every field that appears in any message payload.
///
/// Wire layout tables refer to fields through this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Version,
    Second,
    Timestamp,
    OrderNumber,
    Side,
    Instrument,
    Quantity,
    Price,
    MatchNumber,
    CanceledQuantity,
}

impl FieldId {
    /// Field name as it appears in JSON documents.
    pub fn name(self) -> &'static str {
        match self {
            Self::Version => "version",
            Self::Second => "second",
            Self::Timestamp => "timestamp",
            Self::OrderNumber => "orderNumber",
            Self::Side => "side",
            Self::Instrument => "instrument",
            Self::Quantity => "quantity",
            Self::Price => "price",
            Self::MatchNumber => "matchNumber",
            Self::CanceledQuantity => "canceledQuantity",
        }
    }
}

impl std::fmt::Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
