#![warn(missing_docs)]

//! Quicwire: a small public API facade for the workspace.
//!
//! This crate provides a clean, stable surface that re-exports
//! the most commonly used types to work with the wire codec:
//!
//! - Frames and their tags (`Frame`, `FrameType`, ...)
//! - Codec entry points (`FrameEncoder`, `FrameDecoder`, `DecodeContext`)
//! - Errors and versions (`ErrorKind`, `ProtocolVersion`)
//!
//! Example
//! ```
//! use quicwire::{
//!     DecodeContext, Frame, FrameDecoder, FrameEncoder, PacketNumberLen, ProtocolVersion,
//!     StopWaitingFrame,
//! };
//!
//! let frame = Frame::StopWaiting(StopWaitingFrame {
//!     least_unacked: 990,
//!     entropy: 0xAB,
//!     packet_number_len: PacketNumberLen::One,
//!     packet_number: 1000,
//! });
//!
//! let mut buffer = Vec::new();
//! FrameEncoder::encode_frame_into(&mut buffer, &frame, ProtocolVersion::V2).unwrap();
//! assert_eq!(buffer, vec![0x06, 0xAB, 0x0A]);
//!
//! let context = DecodeContext { packet_number: 1000, packet_number_len: PacketNumberLen::One };
//! let frames = FrameDecoder::decode_payload(&buffer, &context).unwrap();
//! assert_eq!(frames[0], frame);
//! ```

// Core errors and versions
pub use quicwire_core::error::{DecodingErrorKind, ErrorKind, Result};
pub use quicwire_core::version::{ProtocolVersion, SUPPORTED_VERSIONS};
// Protocol: frames, tags, and scalar types
pub use quicwire_protocol::frame::{
    BlockedFrame, ByteCount, ConnectionCloseFrame, ErrorCode, Frame, FrameType, GoAwayFrame,
    PacketNumber, PacketNumberLen, PaddingFrame, PingFrame, RstStreamFrame, StopWaitingFrame,
    StreamId, WindowUpdateFrame,
};
// Codec entry points
pub use quicwire_protocol::frame_codec::{DecodeContext, FrameDecoder, FrameEncoder};
// Packet number helpers
pub use quicwire_protocol::packet_number::{
    infer_packet_number, minimal_packet_number_len, packet_number_len_for_header, read_truncated,
    write_truncated,
};

/// Convenience prelude with the most commonly used items.
pub mod prelude {
    pub use crate::{
        DecodeContext, ErrorKind, Frame, FrameDecoder, FrameEncoder, FrameType, PacketNumber,
        PacketNumberLen, ProtocolVersion, Result, StopWaitingFrame,
    };
}
