#![warn(missing_docs)]

//! quicwire-protocol: frame types and the binary wire codec.

/// Frame types and structures.
pub mod frame;
/// Frame serialization and deserialization.
pub mod frame_codec;
/// Packet number truncation and reconstruction.
pub mod packet_number;

pub use frame::{
    BlockedFrame, ConnectionCloseFrame, Frame, FrameType, GoAwayFrame, PacketNumberLen,
    PaddingFrame, PingFrame, RstStreamFrame, StopWaitingFrame, WindowUpdateFrame,
};
pub use frame_codec::{DecodeContext, FrameDecoder, FrameEncoder};
