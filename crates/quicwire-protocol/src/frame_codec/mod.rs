//! Frame serialization and deserialization.
//!
//! Provides binary encoding/decoding of regular frames carried inside
//! packet payloads.
//!
//! # Module Organization
//!
//! - [`encoder`] - Frame and payload encoding to binary format
//! - [`decoder`] - Frame and payload decoding from binary format

pub mod encoder;
pub mod decoder;


pub use encoder::FrameEncoder;
pub use decoder::{DecodeContext, FrameDecoder};
