//! Message model, discriminant enums, and fixed-width field helpers.
//!
//! Every message is a variant of the closed [`Message`] enum. Wire layouts
//! live in `pmd-codec`; this module only describes the in-memory shapes.

pub mod ascii;
pub mod enums;
pub mod message;

pub use ascii::*;
pub use enums::*;
pub use message::*;
