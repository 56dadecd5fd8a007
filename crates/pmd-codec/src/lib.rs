//! # pmd-codec
//!
//! Encoder and decoder for PMD, a fixed-layout big-endian market-data
//! protocol.
//!
//! ## Architecture
//!
//! One generic engine ([`fields`]) is driven by a static layout table per
//! [`Profile`]. Two profiles are built in:
//!
//! - [`NARROW`] — 32-bit timestamps and quantities, seven message types
//! - [`WIDE`] — 64-bit timestamps and quantities, four message types
//!
//! [`format`] and [`parse`] dispatch on the message type (or tag byte) to
//! the profile's layout. Both are pure; each call allocates its own buffer.
//!
//! ```
//! use pmd_codec::{NARROW, format, parse};
//! use pmd_core::{Message, Version};
//!
//! let msg = Message::Version(Version { version: 1 });
//! let bytes = format(&NARROW, &msg).unwrap();
//! assert_eq!(bytes, [0x56, 0, 0, 0, 1]);
//! assert_eq!(parse(&NARROW, &bytes).unwrap(), msg);
//! ```

pub mod fields;
pub mod json;
pub mod profile;
pub mod wire;

use pmd_core::config::ProfileKind;
use pmd_core::{CodecError, Message};
use tracing::{debug, trace};

pub use json::{format_json, message_from_json};
pub use profile::{Layout, NARROW, Profile, WIDE};

/// Encode `message` under `profile`.
///
/// Fails with [`CodecError::UnknownMessageType`] if the profile does not carry
/// the message's type, and with [`CodecError::FieldOverflow`] if an integer
/// does not fit its wire width.
pub fn format(profile: &Profile, message: &Message) -> Result<Vec<u8>, CodecError> {
    let message_type = message.message_type();
    let Some(layout) = profile.layout(message_type) else {
        debug!(profile = profile.name, %message_type, "message type not carried by profile");
        return Err(CodecError::unknown_discriminant(message_type.discriminant()));
    };

    trace!(profile = profile.name, %message_type, size = layout.size, "format");
    fields::encode(layout, message)
}

/// Decode one complete message from `data` under `profile`.
///
/// Trailing bytes past the layout size are ignored. Fails with
/// [`CodecError::TruncatedMessage`] when `data` is shorter than the layout
/// and with [`CodecError::UnknownMessageType`] for an unrecognized tag.
pub fn parse(profile: &Profile, data: &[u8]) -> Result<Message, CodecError> {
    let Some(&tag) = data.first() else {
        return Err(CodecError::TruncatedMessage {
            message_type: None,
            needed: profile::TAG_LEN,
            actual: 0,
        });
    };

    let Some(layout) = profile.layout_for_tag(tag) else {
        debug!(profile = profile.name, tag, "unknown tag byte");
        return Err(CodecError::unknown_tag(tag));
    };

    if data.len() < layout.size {
        debug!(
            profile = profile.name,
            message_type = %layout.message_type,
            needed = layout.size,
            actual = data.len(),
            "truncated message"
        );
        return Err(CodecError::TruncatedMessage {
            message_type: Some(layout.message_type),
            needed: layout.size,
            actual: data.len(),
        });
    }

    trace!(profile = profile.name, message_type = %layout.message_type, "parse");
    fields::decode(layout, data)
}

/// A codec bound to one profile.
#[derive(Debug, Clone, Copy)]
pub struct Codec {
    profile: &'static Profile,
}

impl Codec {
    pub fn new(kind: ProfileKind) -> Self {
        Self {
            profile: Profile::for_kind(kind),
        }
    }

    pub fn with_profile(profile: &'static Profile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &'static Profile {
        self.profile
    }

    #[inline]
    pub fn format(&self, message: &Message) -> Result<Vec<u8>, CodecError> {
        format(self.profile, message)
    }

    #[inline]
    pub fn parse(&self, data: &[u8]) -> Result<Message, CodecError> {
        parse(self.profile, data)
    }

    pub fn format_json(&self, doc: &serde_json::Value) -> Result<Vec<u8>, CodecError> {
        format_json(self.profile, doc)
    }
}

impl Default for Codec {
    fn default() -> Self {
        Self::new(ProfileKind::default())
    }
}

#[cfg(test)]
mod tests {
    use pmd_core::types::*;

    use super::*;

    fn order_added(order_number: u64, instrument: &str) -> Message {
        Message::OrderAdded(OrderAdded {
            timestamp: 1,
            order_number,
            side: Side::Buy,
            instrument: instrument.to_string(),
            quantity: 3,
            price: 4,
        })
    }

    fn narrow_vectors() -> Vec<(&'static str, Vec<u8>, Message)> {
        vec![
            (
                "Version",
                vec![0x56, 0x00, 0x00, 0x00, 0x01],
                Message::Version(Version { version: 1 }),
            ),
            (
                "Seconds",
                vec![0x53, 0x00, 0x00, 0x00, 0x01],
                Message::Seconds(Seconds { second: 1 }),
            ),
            (
                "Order Added",
                vec![
                    0x41, //
                    0x00, 0x00, 0x00, 0x01, //
                    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, //
                    0x42, //
                    0x46, 0x4f, 0x4f, 0x20, 0x20, 0x20, 0x20, 0x20, //
                    0x00, 0x00, 0x00, 0x03, //
                    0x00, 0x00, 0x00, 0x04,
                ],
                order_added(4_294_967_298, "FOO     "),
            ),
            (
                "Order Executed",
                vec![
                    0x45, //
                    0x00, 0x00, 0x00, 0x01, //
                    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, //
                    0x00, 0x00, 0x00, 0x03, //
                    0x00, 0x00, 0x00, 0x04,
                ],
                Message::OrderExecuted(OrderExecuted {
                    timestamp: 1,
                    order_number: 4_294_967_298,
                    quantity: 3,
                    match_number: 4,
                }),
            ),
            (
                "Order Canceled",
                vec![
                    0x58, //
                    0x00, 0x00, 0x00, 0x01, //
                    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, //
                    0x00, 0x00, 0x00, 0x03,
                ],
                Message::OrderCanceled(OrderCanceled {
                    timestamp: 1,
                    order_number: 4_294_967_298,
                    canceled_quantity: 3,
                }),
            ),
            (
                "Order Deleted",
                vec![
                    0x44, //
                    0x00, 0x00, 0x00, 0x01, //
                    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02,
                ],
                Message::OrderDeleted(OrderDeleted {
                    timestamp: 1,
                    order_number: 4_294_967_298,
                }),
            ),
            (
                "Broken Trade",
                vec![0x42, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02],
                Message::BrokenTrade(BrokenTrade {
                    timestamp: 1,
                    match_number: 2,
                }),
            ),
        ]
    }

    fn wide_vectors() -> Vec<(&'static str, Vec<u8>, Message)> {
        vec![
            (
                "Version",
                vec![0x56, 0x00, 0x00, 0x00, 0x01],
                Message::Version(Version { version: 1 }),
            ),
            (
                "Order Added",
                vec![
                    0x41, //
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, //
                    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, //
                    0x42, //
                    0x46, 0x4f, 0x4f, 0x20, 0x20, 0x20, 0x20, 0x20, //
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, //
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x04,
                ],
                order_added(4_294_967_298, "FOO     "),
            ),
            (
                "Order Executed",
                vec![
                    0x45, //
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, //
                    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, //
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03, //
                    0x00, 0x00, 0x00, 0x04,
                ],
                Message::OrderExecuted(OrderExecuted {
                    timestamp: 1,
                    order_number: 4_294_967_298,
                    quantity: 3,
                    match_number: 4,
                }),
            ),
            (
                "Order Canceled",
                vec![
                    0x58, //
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, //
                    0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x02, //
                    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x03,
                ],
                Message::OrderCanceled(OrderCanceled {
                    timestamp: 1,
                    order_number: 4_294_967_298,
                    canceled_quantity: 3,
                }),
            ),
        ]
    }

    #[test]
    fn narrow_format_matches_vectors() {
        for (name, bytes, msg) in narrow_vectors() {
            assert_eq!(format(&NARROW, &msg).unwrap(), bytes, "{name}");
        }
    }

    #[test]
    fn narrow_parse_matches_vectors() {
        for (name, bytes, msg) in narrow_vectors() {
            assert_eq!(parse(&NARROW, &bytes).unwrap(), msg, "{name}");
        }
    }

    #[test]
    fn wide_format_matches_vectors() {
        for (name, bytes, msg) in wide_vectors() {
            assert_eq!(format(&WIDE, &msg).unwrap(), bytes, "{name}");
        }
    }

    #[test]
    fn wide_parse_matches_vectors() {
        for (name, bytes, msg) in wide_vectors() {
            assert_eq!(parse(&WIDE, &bytes).unwrap(), msg, "{name}");
        }
    }

    #[test]
    fn short_instrument_is_padded_and_kept_padded() {
        let bytes = format(&WIDE, &order_added(2, "FOO")).unwrap();
        assert_eq!(&bytes[18..26], b"FOO     ");
        match parse(&WIDE, &bytes).unwrap() {
            Message::OrderAdded(o) => assert_eq!(o.instrument, "FOO     "),
            other => panic!("unexpected message: {other:?}"),
        }
    }

    #[test]
    fn long_instrument_is_truncated() {
        let expected = vec![
            0x41, //
            0x00, 0x00, 0x00, 0x01, //
            0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x02, //
            0x42, //
            0x46, 0x4f, 0x4f, 0x20, 0x42, 0x41, 0x52, 0x20, //
            0x00, 0x00, 0x00, 0x03, //
            0x00, 0x00, 0x00, 0x04,
        ];
        assert_eq!(format(&NARROW, &order_added(2, "FOO BAR BAZ")).unwrap(), expected);
    }

    #[test]
    fn wide_integers_round_trip_exactly() {
        for value in [0, 1, u32::MAX as u64, 4_294_967_298, u64::MAX - 1, u64::MAX] {
            let msg = Message::OrderCanceled(OrderCanceled {
                timestamp: value,
                order_number: value,
                canceled_quantity: value,
            });
            let bytes = format(&WIDE, &msg).unwrap();
            assert_eq!(parse(&WIDE, &bytes).unwrap(), msg, "{value}");
        }
    }

    #[test]
    fn narrow_rejects_values_above_32_bits() {
        let msg = Message::OrderExecuted(OrderExecuted {
            timestamp: 1,
            order_number: u64::MAX,
            quantity: 1 << 32,
            match_number: 4,
        });
        assert_eq!(
            format(&NARROW, &msg).unwrap_err(),
            CodecError::FieldOverflow {
                field: FieldId::Quantity,
                value: 1 << 32,
                max: u32::MAX as u64,
            }
        );
    }

    #[test]
    fn unknown_tag_reports_numeric_value() {
        let err = parse(&WIDE, &[0x3f]).unwrap_err();
        assert_eq!(err, CodecError::unknown_tag(63));
        assert_eq!(err.to_string(), "unknown message type: 63");
    }

    #[test]
    fn wide_rejects_narrow_only_messages() {
        let msg = Message::Seconds(Seconds { second: 1 });
        assert_eq!(format(&WIDE, &msg).unwrap_err(), CodecError::unknown_discriminant("S"));
        assert_eq!(parse(&WIDE, &[0x53, 0, 0, 0, 1]).unwrap_err(), CodecError::unknown_tag(0x53));
    }

    #[test]
    fn truncated_buffer_is_rejected() {
        let bytes = format(&NARROW, &order_added(2, "FOO")).unwrap();
        for len in 1..bytes.len() {
            assert_eq!(
                parse(&NARROW, &bytes[..len]).unwrap_err(),
                CodecError::TruncatedMessage {
                    message_type: Some(MessageType::OrderAdded),
                    needed: 30,
                    actual: len,
                }
            );
        }
    }

    #[test]
    fn empty_buffer_is_truncated() {
        assert_eq!(
            parse(&NARROW, &[]).unwrap_err(),
            CodecError::TruncatedMessage {
                message_type: None,
                needed: 1,
                actual: 0,
            }
        );
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let mut bytes = format(&WIDE, &Message::Version(Version { version: 7 })).unwrap();
        bytes.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
        assert_eq!(parse(&WIDE, &bytes).unwrap(), Message::Version(Version { version: 7 }));
    }

    #[test]
    fn codec_is_bound_to_profile() {
        let narrow = Codec::new(ProfileKind::Narrow);
        let wide = Codec::default();
        assert_eq!(wide.profile().name, "wide");

        let msg = order_added(9, "BAR");
        assert_eq!(narrow.format(&msg).unwrap().len(), 30);
        assert_eq!(wide.format(&msg).unwrap().len(), 42);
        assert_eq!(Codec::with_profile(&NARROW).parse(&narrow.format(&msg).unwrap()).unwrap(), order_added(9, "BAR     "));
    }
}
