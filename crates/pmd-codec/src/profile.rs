//! Static wire layout tables.
//!
//! A [`Profile`] lists one [`Layout`] per message type it carries. Each
//! layout gives the tag-inclusive size and the offset and kind of every
//! field. The same table drives both encoding and decoding.
//!
//! # Narrow profile
//!
//! | Tag | Message       | Size | Fields (offset:width)                                        |
//! |-----|---------------|------|--------------------------------------------------------------|
//! | V   | Version       | 5    | version 1:4                                                  |
//! | S   | Seconds       | 5    | second 1:4                                                   |
//! | A   | OrderAdded    | 30   | ts 1:4, order 5:8, side 13:1, instr 14:8, qty 22:4, px 26:4  |
//! | E   | OrderExecuted | 21   | ts 1:4, order 5:8, qty 13:4, match 17:4                      |
//! | X   | OrderCanceled | 17   | ts 1:4, order 5:8, canceled 13:4                             |
//! | D   | OrderDeleted  | 13   | ts 1:4, order 5:8                                            |
//! | B   | BrokenTrade   | 9    | ts 1:4, match 5:4                                            |
//!
//! # Wide profile
//!
//! | Tag | Message       | Size | Fields (offset:width)                                        |
//! |-----|---------------|------|--------------------------------------------------------------|
//! | V   | Version       | 5    | version 1:4                                                  |
//! | A   | OrderAdded    | 42   | ts 1:8, order 9:8, side 17:1, instr 18:8, qty 26:8, px 34:8  |
//! | E   | OrderExecuted | 29   | ts 1:8, order 9:8, qty 17:8, match 25:4                      |
//! | X   | OrderCanceled | 25   | ts 1:8, order 9:8, canceled 17:8                             |

use pmd_core::config::ProfileKind;
use pmd_core::{FieldId, INSTRUMENT_LEN, MessageType};

/// Size of the tag byte that starts every message.
pub const TAG_LEN: usize = 1;

/// Wire representation of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Unsigned 32-bit big-endian.
    U32,
    /// Unsigned 64-bit, two big-endian 32-bit halves.
    U64,
    /// One ASCII byte, `B` or `S`.
    Side,
    /// Space-padded ASCII text of the given width.
    Ascii(usize),
}

impl FieldKind {
    pub const fn width(self) -> usize {
        match self {
            Self::U32 => 4,
            Self::U64 => 8,
            Self::Side => 1,
            Self::Ascii(n) => n,
        }
    }
}

/// Position and kind of one field inside a layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: FieldId,
    pub offset: usize,
    pub kind: FieldKind,
}

macro_rules! field {
    ($id:ident, $offset:expr, $kind:expr) => {
        FieldSpec {
            field: FieldId::$id,
            offset: $offset,
            kind: $kind,
        }
    };
}

/// Fixed byte layout of one message type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub message_type: MessageType,
    /// Total encoded length including the tag byte.
    pub size: usize,
    pub fields: &'static [FieldSpec],
}

impl Layout {
    const fn new(message_type: MessageType, fields: &'static [FieldSpec]) -> Self {
        let mut size = TAG_LEN;
        let mut i = 0;
        while i < fields.len() {
            let end = fields[i].offset + fields[i].kind.width();
            if end > size {
                size = end;
            }
            i += 1;
        }
        Self { message_type, size, fields }
    }

    pub fn tag(&self) -> u8 {
        self.message_type.tag()
    }
}

/// A complete set of layouts for one protocol revision.
#[derive(Debug, PartialEq, Eq)]
pub struct Profile {
    pub kind: ProfileKind,
    pub name: &'static str,
    pub layouts: &'static [Layout],
}

impl Profile {
    /// Built-in profile for `kind`.
    pub fn for_kind(kind: ProfileKind) -> &'static Profile {
        match kind {
            ProfileKind::Narrow => &NARROW,
            ProfileKind::Wide => &WIDE,
        }
    }

    /// Layout for `message_type`, or `None` if this profile does not carry it.
    #[inline]
    pub fn layout(&self, message_type: MessageType) -> Option<&'static Layout> {
        self.layouts.iter().find(|l| l.message_type == message_type)
    }

    /// Layout whose tag byte is `tag`.
    #[inline]
    pub fn layout_for_tag(&self, tag: u8) -> Option<&'static Layout> {
        self.layouts.iter().find(|l| l.tag() == tag)
    }

    /// Encoded length of `message_type` under this profile.
    pub fn message_size(&self, message_type: MessageType) -> Option<usize> {
        self.layout(message_type).map(|l| l.size)
    }

    /// Message types carried by this profile, in table order.
    pub fn message_types(&self) -> impl Iterator<Item = MessageType> + '_ {
        self.layouts.iter().map(|l| l.message_type)
    }
}

// ---------------------------------------------------------------------------
// Narrow: 32-bit timestamps and quantities
// ---------------------------------------------------------------------------

const NARROW_LAYOUTS: &[Layout] = &[
    Layout::new(MessageType::Version, &[field!(Version, 1, FieldKind::U32)]),
    Layout::new(MessageType::Seconds, &[field!(Second, 1, FieldKind::U32)]),
    Layout::new(
        MessageType::OrderAdded,
        &[
            field!(Timestamp, 1, FieldKind::U32),
            field!(OrderNumber, 5, FieldKind::U64),
            field!(Side, 13, FieldKind::Side),
            field!(Instrument, 14, FieldKind::Ascii(INSTRUMENT_LEN)),
            field!(Quantity, 22, FieldKind::U32),
            field!(Price, 26, FieldKind::U32),
        ],
    ),
    Layout::new(
        MessageType::OrderExecuted,
        &[
            field!(Timestamp, 1, FieldKind::U32),
            field!(OrderNumber, 5, FieldKind::U64),
            field!(Quantity, 13, FieldKind::U32),
            field!(MatchNumber, 17, FieldKind::U32),
        ],
    ),
    Layout::new(
        MessageType::OrderCanceled,
        &[
            field!(Timestamp, 1, FieldKind::U32),
            field!(OrderNumber, 5, FieldKind::U64),
            field!(CanceledQuantity, 13, FieldKind::U32),
        ],
    ),
    Layout::new(
        MessageType::OrderDeleted,
        &[field!(Timestamp, 1, FieldKind::U32), field!(OrderNumber, 5, FieldKind::U64)],
    ),
    Layout::new(
        MessageType::BrokenTrade,
        &[field!(Timestamp, 1, FieldKind::U32), field!(MatchNumber, 5, FieldKind::U32)],
    ),
];

pub static NARROW: Profile = Profile {
    kind: ProfileKind::Narrow,
    name: "narrow",
    layouts: NARROW_LAYOUTS,
};

// ---------------------------------------------------------------------------
// Wide: 64-bit timestamps and quantities
// ---------------------------------------------------------------------------

const WIDE_LAYOUTS: &[Layout] = &[
    Layout::new(MessageType::Version, &[field!(Version, 1, FieldKind::U32)]),
    Layout::new(
        MessageType::OrderAdded,
        &[
            field!(Timestamp, 1, FieldKind::U64),
            field!(OrderNumber, 9, FieldKind::U64),
            field!(Side, 17, FieldKind::Side),
            field!(Instrument, 18, FieldKind::Ascii(INSTRUMENT_LEN)),
            field!(Quantity, 26, FieldKind::U64),
            field!(Price, 34, FieldKind::U64),
        ],
    ),
    Layout::new(
        MessageType::OrderExecuted,
        &[
            field!(Timestamp, 1, FieldKind::U64),
            field!(OrderNumber, 9, FieldKind::U64),
            field!(Quantity, 17, FieldKind::U64),
            field!(MatchNumber, 25, FieldKind::U32),
        ],
    ),
    Layout::new(
        MessageType::OrderCanceled,
        &[
            field!(Timestamp, 1, FieldKind::U64),
            field!(OrderNumber, 9, FieldKind::U64),
            field!(CanceledQuantity, 17, FieldKind::U64),
        ],
    ),
];

pub static WIDE: Profile = Profile {
    kind: ProfileKind::Wide,
    name: "wide",
    layouts: WIDE_LAYOUTS,
};
