#![warn(missing_docs)]

//! quicwire-core: foundational types and utilities.
//!
//! This crate provides the minimal set of core items shared across the codec layers:
//! - Error handling
//! - Protocol constants
//! - Protocol version tags
//!
//! Frame and packet number logic lives in `quicwire-protocol`.

/// Protocol constants shared across layers.
pub mod constants {
    /// The size of the frame type tag.
    pub const FRAME_TYPE_SIZE: u8 = 1;
    /// The size of the entropy hash carried by stop waiting frames.
    pub const ENTROPY_HASH_SIZE: u8 = 1;
    /// The size of the length prefix in front of a reason phrase.
    pub const REASON_PHRASE_LEN_SIZE: u8 = 2;
    /// Longest reason phrase an encoded frame can carry.
    pub const MAX_REASON_PHRASE_LEN: u16 = u16::MAX;
}

/// Error types and results.
pub mod error;
/// Protocol version tags.
pub mod version;
