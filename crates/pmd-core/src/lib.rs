//! # pmd-core
//!
//! Core crate for the PMD market-data codec, providing:
//!
//! - **Types** (`types`) — message enum and payload structs, message type and
//!   side enums, fixed-width ASCII helpers
//! - **Error types** (`error`) — `CodecError` via thiserror
//! - **Configuration** (`config`) — JSON config deserialization
//! - **Logging** (`logging`) — tracing-based structured logging

pub mod config;
pub mod error;
pub mod logging;
pub mod types;

pub use error::{CodecError, UnknownType};
// Re-export types at crate root for convenience.
pub use types::*;
