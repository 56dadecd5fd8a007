//! Enumerations shared by the message model and the wire codec.
//!
//! Discriminant values are the ASCII bytes used on the wire, so a
//! `MessageType as u8` is the tag byte and a `Side as u8` is the side byte.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Message types
// ---------------------------------------------------------------------------

/// Discriminant for the kind of PMD message.
///
/// Stored in byte 0 of every encoded message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MessageType {
    #[serde(rename = "V")]
    Version = b'V',
    #[serde(rename = "S")]
    Seconds = b'S',
    #[serde(rename = "A")]
    OrderAdded = b'A',
    #[serde(rename = "E")]
    OrderExecuted = b'E',
    #[serde(rename = "X")]
    OrderCanceled = b'X',
    #[serde(rename = "D")]
    OrderDeleted = b'D',
    #[serde(rename = "B")]
    BrokenTrade = b'B',
}

impl MessageType {
    /// All message types known to any profile.
    pub const ALL: [MessageType; 7] = [
        Self::Version,
        Self::Seconds,
        Self::OrderAdded,
        Self::OrderExecuted,
        Self::OrderCanceled,
        Self::OrderDeleted,
        Self::BrokenTrade,
    ];

    /// Wire tag byte.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Map a wire tag byte to its message type.
    #[inline]
    pub fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            b'V' => Some(Self::Version),
            b'S' => Some(Self::Seconds),
            b'A' => Some(Self::OrderAdded),
            b'E' => Some(Self::OrderExecuted),
            b'X' => Some(Self::OrderCanceled),
            b'D' => Some(Self::OrderDeleted),
            b'B' => Some(Self::BrokenTrade),
            _ => None,
        }
    }

    /// Map a textual discriminant (`"V"`, `"A"`, ...) to its message type.
    ///
    /// Only single-character discriminants match.
    pub fn from_discriminant(s: &str) -> Option<Self> {
        match s.as_bytes() {
            [tag] => Self::from_tag(*tag),
            _ => None,
        }
    }

    /// Single-letter discriminant as used in JSON documents.
    pub fn discriminant(self) -> char {
        self.tag() as char
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Version => "Version",
            Self::Seconds => "Seconds",
            Self::OrderAdded => "OrderAdded",
            Self::OrderExecuted => "OrderExecuted",
            Self::OrderCanceled => "OrderCanceled",
            Self::OrderDeleted => "OrderDeleted",
            Self::BrokenTrade => "BrokenTrade",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.discriminant())
    }
}

// ---------------------------------------------------------------------------
// Order side
// ---------------------------------------------------------------------------

/// Buy or sell side of an order, one ASCII byte on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Side {
    #[serde(rename = "B")]
    Buy = b'B',
    #[serde(rename = "S")]
    Sell = b'S',
}

impl Side {
    #[inline]
    pub const fn to_byte(self) -> u8 {
        self as u8
    }

    #[inline]
    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'B' => Some(Self::Buy),
            b'S' => Some(Self::Sell),
            _ => None,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_match_ascii_letters() {
        assert_eq!(MessageType::Version.tag(), 0x56);
        assert_eq!(MessageType::Seconds.tag(), 0x53);
        assert_eq!(MessageType::OrderAdded.tag(), 0x41);
        assert_eq!(MessageType::OrderExecuted.tag(), 0x45);
        assert_eq!(MessageType::OrderCanceled.tag(), 0x58);
        assert_eq!(MessageType::OrderDeleted.tag(), 0x44);
        assert_eq!(MessageType::BrokenTrade.tag(), 0x42);
    }

    #[test]
    fn from_tag_covers_all() {
        for ty in MessageType::ALL {
            assert_eq!(MessageType::from_tag(ty.tag()), Some(ty));
        }
        assert_eq!(MessageType::from_tag(b'?'), None);
        assert_eq!(MessageType::from_tag(0), None);
    }

    #[test]
    fn discriminant_must_be_single_char() {
        assert_eq!(MessageType::from_discriminant("A"), Some(MessageType::OrderAdded));
        assert_eq!(MessageType::from_discriminant("AA"), None);
        assert_eq!(MessageType::from_discriminant(""), None);
        assert_eq!(MessageType::from_discriminant("?"), None);
    }

    #[test]
    fn side_bytes() {
        assert_eq!(Side::Buy.to_byte(), b'B');
        assert_eq!(Side::from_byte(b'S'), Some(Side::Sell));
        assert_eq!(Side::from_byte(b'b'), None);
    }
}
