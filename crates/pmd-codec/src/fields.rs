//! Table-driven field encoding and decoding.
//!
//! [`encode`] walks a [`Layout`] and pulls each field's value out of the
//! message; [`decode`] walks the same layout, collects raw values, and then
//! assembles the matching [`Message`] variant.

use pmd_core::types::{
    BrokenTrade, FieldId, Message, MessageType, OrderAdded, OrderCanceled, OrderDeleted, OrderExecuted, Seconds,
    Side, Version, read_padded, write_padded,
};
use pmd_core::CodecError;

use crate::profile::{FieldKind, Layout};
use crate::wire::{read_u32_be, read_u64_be, write_u32_be, write_u64_be};

/// Borrowed value of one message field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Int(u64),
    Side(Side),
    Text(&'a str),
}

/// Look up `field` on `message`. `None` if the variant has no such field.
pub fn field_value(message: &Message, field: FieldId) -> Option<FieldValue<'_>> {
    use FieldValue::{Int, Text};

    let value = match (message, field) {
        (Message::Version(m), FieldId::Version) => Int(m.version.into()),
        (Message::Seconds(m), FieldId::Second) => Int(m.second.into()),
        (Message::OrderAdded(m), _) => match field {
            FieldId::Timestamp => Int(m.timestamp),
            FieldId::OrderNumber => Int(m.order_number),
            FieldId::Side => FieldValue::Side(m.side),
            FieldId::Instrument => Text(&m.instrument),
            FieldId::Quantity => Int(m.quantity),
            FieldId::Price => Int(m.price),
            _ => return None,
        },
        (Message::OrderExecuted(m), _) => match field {
            FieldId::Timestamp => Int(m.timestamp),
            FieldId::OrderNumber => Int(m.order_number),
            FieldId::Quantity => Int(m.quantity),
            FieldId::MatchNumber => Int(m.match_number.into()),
            _ => return None,
        },
        (Message::OrderCanceled(m), _) => match field {
            FieldId::Timestamp => Int(m.timestamp),
            FieldId::OrderNumber => Int(m.order_number),
            FieldId::CanceledQuantity => Int(m.canceled_quantity),
            _ => return None,
        },
        (Message::OrderDeleted(m), _) => match field {
            FieldId::Timestamp => Int(m.timestamp),
            FieldId::OrderNumber => Int(m.order_number),
            _ => return None,
        },
        (Message::BrokenTrade(m), _) => match field {
            FieldId::Timestamp => Int(m.timestamp),
            FieldId::MatchNumber => Int(m.match_number.into()),
            _ => return None,
        },
        _ => return None,
    };
    Some(value)
}

/// Encode `message` according to `layout`.
///
/// The caller has already matched `layout.message_type` to the message.
pub fn encode(layout: &Layout, message: &Message) -> Result<Vec<u8>, CodecError> {
    let mut buf = vec![0u8; layout.size];
    buf[0] = layout.tag();

    for spec in layout.fields {
        let missing = || CodecError::MissingField {
            message_type: layout.message_type,
            field: spec.field,
        };
        let value = field_value(message, spec.field).ok_or_else(missing)?;
        let off = spec.offset;

        match (spec.kind, value) {
            (FieldKind::U32, FieldValue::Int(v)) => {
                let v = u32::try_from(v).map_err(|_| CodecError::FieldOverflow {
                    field: spec.field,
                    value: v,
                    max: u32::MAX as u64,
                })?;
                write_u32_be(&mut buf, off, v);
            }
            (FieldKind::U64, FieldValue::Int(v)) => write_u64_be(&mut buf, off, v),
            (FieldKind::Side, FieldValue::Side(s)) => buf[off] = s.to_byte(),
            (FieldKind::Ascii(width), FieldValue::Text(s)) => {
                write_padded(&mut buf[off..off + width], s);
            }
            _ => return Err(missing()),
        }
    }

    Ok(buf)
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

#[derive(Debug)]
enum Raw {
    Int(u64),
    Side(Side),
    Text(String),
}

/// Raw field values read from one message, keyed by field id.
struct Decoded {
    message_type: MessageType,
    values: Vec<(FieldId, Raw)>,
}

impl Decoded {
    fn take(&mut self, field: FieldId) -> Result<Raw, CodecError> {
        let pos = self.values.iter().position(|(id, _)| *id == field).ok_or(CodecError::MissingField {
            message_type: self.message_type,
            field,
        })?;
        Ok(self.values.swap_remove(pos).1)
    }

    fn mismatch(&self, field: FieldId) -> CodecError {
        CodecError::MissingField {
            message_type: self.message_type,
            field,
        }
    }

    fn u64(&mut self, field: FieldId) -> Result<u64, CodecError> {
        match self.take(field)? {
            Raw::Int(v) => Ok(v),
            _ => Err(self.mismatch(field)),
        }
    }

    fn u32(&mut self, field: FieldId) -> Result<u32, CodecError> {
        let v = self.u64(field)?;
        u32::try_from(v).map_err(|_| CodecError::FieldOverflow {
            field,
            value: v,
            max: u32::MAX as u64,
        })
    }

    fn side(&mut self, field: FieldId) -> Result<Side, CodecError> {
        match self.take(field)? {
            Raw::Side(s) => Ok(s),
            _ => Err(self.mismatch(field)),
        }
    }

    fn text(&mut self, field: FieldId) -> Result<String, CodecError> {
        match self.take(field)? {
            Raw::Text(s) => Ok(s),
            _ => Err(self.mismatch(field)),
        }
    }
}

/// Decode `data` according to `layout`.
///
/// The caller has already checked the tag and that `data.len() >= layout.size`.
/// Bytes past `layout.size` are ignored.
pub fn decode(layout: &Layout, data: &[u8]) -> Result<Message, CodecError> {
    let mut d = Decoded {
        message_type: layout.message_type,
        values: Vec::with_capacity(layout.fields.len()),
    };

    for spec in layout.fields {
        let off = spec.offset;
        let raw = match spec.kind {
            FieldKind::U32 => Raw::Int(read_u32_be(data, off).into()),
            FieldKind::U64 => Raw::Int(read_u64_be(data, off)),
            FieldKind::Side => {
                let b = data[off];
                Raw::Side(Side::from_byte(b).ok_or(CodecError::InvalidSide(b))?)
            }
            FieldKind::Ascii(width) => Raw::Text(read_padded(&data[off..off + width])),
        };
        d.values.push((spec.field, raw));
    }

    let message = match layout.message_type {
        MessageType::Version => Message::Version(Version {
            version: d.u32(FieldId::Version)?,
        }),
        MessageType::Seconds => Message::Seconds(Seconds {
            second: d.u32(FieldId::Second)?,
        }),
        MessageType::OrderAdded => Message::OrderAdded(OrderAdded {
            timestamp: d.u64(FieldId::Timestamp)?,
            order_number: d.u64(FieldId::OrderNumber)?,
            side: d.side(FieldId::Side)?,
            instrument: d.text(FieldId::Instrument)?,
            quantity: d.u64(FieldId::Quantity)?,
            price: d.u64(FieldId::Price)?,
        }),
        MessageType::OrderExecuted => Message::OrderExecuted(OrderExecuted {
            timestamp: d.u64(FieldId::Timestamp)?,
            order_number: d.u64(FieldId::OrderNumber)?,
            quantity: d.u64(FieldId::Quantity)?,
            match_number: d.u32(FieldId::MatchNumber)?,
        }),
        MessageType::OrderCanceled => Message::OrderCanceled(OrderCanceled {
            timestamp: d.u64(FieldId::Timestamp)?,
            order_number: d.u64(FieldId::OrderNumber)?,
            canceled_quantity: d.u64(FieldId::CanceledQuantity)?,
        }),
        MessageType::OrderDeleted => Message::OrderDeleted(OrderDeleted {
            timestamp: d.u64(FieldId::Timestamp)?,
            order_number: d.u64(FieldId::OrderNumber)?,
        }),
        MessageType::BrokenTrade => Message::BrokenTrade(BrokenTrade {
            timestamp: d.u64(FieldId::Timestamp)?,
            match_number: d.u32(FieldId::MatchNumber)?,
        }),
    };

    Ok(message)
}
