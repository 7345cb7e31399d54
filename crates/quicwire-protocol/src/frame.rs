//! Frame types and structures for the wire protocol.
//!
//! This module provides the value types the codec works on:
//! - `Frame`: closed enumeration of every regular frame
//! - One struct per frame kind, fields matching the wire layout
//! - `FrameType`: one-byte tag discriminating frames on the wire
//! - `PacketNumberLen`: truncation width for packet number fields

use std::convert::TryFrom;

use quicwire_core::{
    constants::{ENTROPY_HASH_SIZE, FRAME_TYPE_SIZE, REASON_PHRASE_LEN_SIZE},
    error::{DecodingErrorKind, ErrorKind},
};

/// 64-bit packet number type used by the protocol.
pub type PacketNumber = u64;

/// Byte count on the wire.
pub type ByteCount = u64;

/// 32-bit stream identifier; stream 0 addresses the connection itself.
pub type StreamId = u32;

/// 32-bit error code carried by close and reset frames.
pub type ErrorCode = u32;

/// Helper trait to convert enums to u8 values for wire format.
pub trait EnumConverter {
    /// The enum type this converter works with.
    type Enum;

    /// Converts the enum to a u8 for serialization.
    fn to_u8(&self) -> u8;
}

// ============================================================================
// Wire Discriminators
// ============================================================================

/// Number of bytes a truncated packet number occupies on the wire.
#[derive(Copy, Clone, Debug, PartialOrd, PartialEq, Eq, Default)]
pub enum PacketNumberLen {
    /// Width not yet chosen; rejected by the codec.
    #[default]
    Invalid,
    /// Low byte only.
    One,
    /// Low two bytes.
    Two,
    /// Low four bytes.
    Four,
    /// Low six bytes.
    Six,
}

impl PacketNumberLen {
    /// Returns the wire width in bytes, or `None` for the unset sentinel.
    pub fn byte_count(self) -> Option<ByteCount> {
        match self {
            PacketNumberLen::Invalid => None,
            PacketNumberLen::One => Some(1),
            PacketNumberLen::Two => Some(2),
            PacketNumberLen::Four => Some(4),
            PacketNumberLen::Six => Some(6),
        }
    }

    /// Largest value the width can carry, or `None` for the unset sentinel.
    pub fn max_value(self) -> Option<u64> {
        self.byte_count().map(|bytes| (1u64 << (bytes * 8)) - 1)
    }
}

impl EnumConverter for PacketNumberLen {
    type Enum = PacketNumberLen;

    /// Returns the byte width as an integer, with 0 for the unset sentinel.
    fn to_u8(&self) -> u8 {
        match self {
            PacketNumberLen::Invalid => 0,
            PacketNumberLen::One => 1,
            PacketNumberLen::Two => 2,
            PacketNumberLen::Four => 4,
            PacketNumberLen::Six => 6,
        }
    }
}

impl TryFrom<u8> for PacketNumberLen {
    type Error = ErrorKind;
    /// Gets the `PacketNumberLen` enum instance from a byte width.
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(PacketNumberLen::One),
            2 => Ok(PacketNumberLen::Two),
            4 => Ok(PacketNumberLen::Four),
            6 => Ok(PacketNumberLen::Six),
            _ => Err(ErrorKind::DecodingError(DecodingErrorKind::PacketNumberLen)),
        }
    }
}

/// One-byte tag identifying a regular frame on the wire.
#[derive(Copy, Clone, Debug, PartialOrd, PartialEq, Eq)]
pub enum FrameType {
    /// Filler bytes up to the end of the payload
    Padding = 0x00,
    /// Abrupt stream termination
    RstStream = 0x01,
    /// Connection teardown with a code and reason
    ConnectionClose = 0x02,
    /// Graceful shutdown announcement
    GoAway = 0x03,
    /// Flow control window advertisement
    WindowUpdate = 0x04,
    /// Flow control blocked notification
    Blocked = 0x05,
    /// Lower bound of packet numbers still awaiting acknowledgment
    StopWaiting = 0x06,
    /// Liveness probe
    Ping = 0x07,
}

impl EnumConverter for FrameType {
    type Enum = FrameType;

    fn to_u8(&self) -> u8 {
        *self as u8
    }
}

impl TryFrom<u8> for FrameType {
    type Error = ErrorKind;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x00 => Ok(FrameType::Padding),
            0x01 => Ok(FrameType::RstStream),
            0x02 => Ok(FrameType::ConnectionClose),
            0x03 => Ok(FrameType::GoAway),
            0x04 => Ok(FrameType::WindowUpdate),
            0x05 => Ok(FrameType::Blocked),
            0x06 => Ok(FrameType::StopWaiting),
            0x07 => Ok(FrameType::Ping),
            _ => Err(ErrorKind::DecodingError(DecodingErrorKind::FrameType)),
        }
    }
}

// ============================================================================
// Frame Structures
// ============================================================================

/// Announces the lowest packet number the sender still waits on.
///
/// Packets numbered below `least_unacked` are no longer tracked by the
/// sender and must not be reported missing. Only the delta to the enclosing
/// packet's number travels on the wire; the full values are restored from
/// the packet header on receive.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StopWaitingFrame {
    /// Lowest packet number still awaiting acknowledgment.
    pub least_unacked: PacketNumber,
    /// Entropy hash of all packets up to `least_unacked`; carried verbatim.
    pub entropy: u8,
    /// Truncation width of the enclosing packet's number; set by the packet
    /// layer before encoding.
    pub packet_number_len: PacketNumberLen,
    /// Number of the packet carrying this frame; set by the packet layer
    /// before encoding. Zero means not yet assigned.
    pub packet_number: PacketNumber,
}

impl StopWaitingFrame {
    /// Number of bytes the encoded frame occupies.
    ///
    /// Only the packet number length is validated here; encoding is where
    /// the remaining fields are checked.
    pub fn wire_length(&self) -> Result<ByteCount, ErrorKind> {
        let pn_len =
            self.packet_number_len.byte_count().ok_or(ErrorKind::PacketNumberLenNotSet)?;
        Ok((FRAME_TYPE_SIZE + ENTROPY_HASH_SIZE) as ByteCount + pn_len)
    }
}

/// Filler that pads a packet to a target size.
///
/// A decoder treats everything after the tag as padding, so a padding frame
/// is always the last frame of a payload. The filler content carries no
/// meaning and is not inspected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddingFrame {
    /// Number of filler bytes following the tag.
    pub num_padding_bytes: ByteCount,
}

impl PaddingFrame {
    /// Number of bytes the encoded frame occupies.
    pub fn wire_length(&self) -> Result<ByteCount, ErrorKind> {
        Ok(FRAME_TYPE_SIZE as ByteCount + self.num_padding_bytes)
    }
}

/// Abruptly terminates a single stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RstStreamFrame {
    /// Stream being terminated.
    pub stream_id: StreamId,
    /// Absolute byte offset the sender reached on the stream.
    pub byte_offset: ByteCount,
    /// Why the stream was terminated.
    pub error_code: ErrorCode,
}

impl RstStreamFrame {
    /// Number of bytes the encoded frame occupies.
    pub fn wire_length(&self) -> Result<ByteCount, ErrorKind> {
        Ok(FRAME_TYPE_SIZE as ByteCount + 4 + 8 + 4)
    }
}

/// Tears down the connection with a code and a human-readable reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionCloseFrame {
    /// Why the connection is being closed.
    pub error_code: ErrorCode,
    /// Diagnostic text; at most `u16::MAX` bytes once encoded.
    pub reason_phrase: String,
}

impl ConnectionCloseFrame {
    /// Number of bytes the encoded frame occupies.
    ///
    /// The reason phrase length is not validated here; encoding is where an
    /// oversized phrase is rejected.
    pub fn wire_length(&self) -> Result<ByteCount, ErrorKind> {
        Ok((FRAME_TYPE_SIZE + REASON_PHRASE_LEN_SIZE) as ByteCount
            + 4
            + self.reason_phrase.len() as ByteCount)
    }
}

/// Announces the sender will go away and which streams it fully processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoAwayFrame {
    /// Why the sender is going away.
    pub error_code: ErrorCode,
    /// Highest stream id the sender fully processed.
    pub last_good_stream_id: StreamId,
    /// Diagnostic text; at most `u16::MAX` bytes once encoded.
    pub reason_phrase: String,
}

impl GoAwayFrame {
    /// Number of bytes the encoded frame occupies.
    ///
    /// The reason phrase length is not validated here; encoding is where an
    /// oversized phrase is rejected.
    pub fn wire_length(&self) -> Result<ByteCount, ErrorKind> {
        Ok((FRAME_TYPE_SIZE + REASON_PHRASE_LEN_SIZE) as ByteCount
            + 4
            + 4
            + self.reason_phrase.len() as ByteCount)
    }
}

/// Raises the flow control window for a stream or the whole connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowUpdateFrame {
    /// Stream the window applies to; 0 means the connection window.
    pub stream_id: StreamId,
    /// New absolute byte offset data may be sent up to.
    pub byte_offset: ByteCount,
}

impl WindowUpdateFrame {
    /// Number of bytes the encoded frame occupies.
    pub fn wire_length(&self) -> Result<ByteCount, ErrorKind> {
        Ok(FRAME_TYPE_SIZE as ByteCount + 4 + 8)
    }
}

/// Reports that the sender has data but is blocked by flow control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockedFrame {
    /// Blocked stream; 0 means the connection window blocks the sender.
    pub stream_id: StreamId,
}

impl BlockedFrame {
    /// Number of bytes the encoded frame occupies.
    pub fn wire_length(&self) -> Result<ByteCount, ErrorKind> {
        Ok(FRAME_TYPE_SIZE as ByteCount + 4)
    }
}

/// Probes peer liveness; carries no payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PingFrame;

impl PingFrame {
    /// Number of bytes the encoded frame occupies.
    pub fn wire_length(&self) -> Result<ByteCount, ErrorKind> {
        Ok(FRAME_TYPE_SIZE as ByteCount)
    }
}

// ============================================================================
// Frame Enumeration
// ============================================================================

/// Closed set of regular frames, one variant per wire tag.
///
/// New frame kinds become new variants; the codec dispatch matches this
/// enumeration one to one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// Filler bytes (0x00)
    Padding(PaddingFrame),
    /// Stream termination (0x01)
    RstStream(RstStreamFrame),
    /// Connection teardown (0x02)
    ConnectionClose(ConnectionCloseFrame),
    /// Graceful shutdown (0x03)
    GoAway(GoAwayFrame),
    /// Window advertisement (0x04)
    WindowUpdate(WindowUpdateFrame),
    /// Blocked notification (0x05)
    Blocked(BlockedFrame),
    /// Stop waiting announcement (0x06)
    StopWaiting(StopWaitingFrame),
    /// Liveness probe (0x07)
    Ping(PingFrame),
}

impl Frame {
    /// Returns the wire tag for this frame.
    pub fn frame_type(&self) -> FrameType {
        match self {
            Frame::Padding(_) => FrameType::Padding,
            Frame::RstStream(_) => FrameType::RstStream,
            Frame::ConnectionClose(_) => FrameType::ConnectionClose,
            Frame::GoAway(_) => FrameType::GoAway,
            Frame::WindowUpdate(_) => FrameType::WindowUpdate,
            Frame::Blocked(_) => FrameType::Blocked,
            Frame::StopWaiting(_) => FrameType::StopWaiting,
            Frame::Ping(_) => FrameType::Ping,
        }
    }

    /// Returns the stream ID if this frame addresses a single stream.
    pub fn stream_id(&self) -> Option<StreamId> {
        match self {
            Frame::RstStream(frame) => Some(frame.stream_id),
            Frame::WindowUpdate(frame) => Some(frame.stream_id),
            Frame::Blocked(frame) => Some(frame.stream_id),
            _ => None,
        }
    }

    /// Number of bytes the encoded frame occupies.
    pub fn wire_length(&self) -> Result<ByteCount, ErrorKind> {
        match self {
            Frame::Padding(frame) => frame.wire_length(),
            Frame::RstStream(frame) => frame.wire_length(),
            Frame::ConnectionClose(frame) => frame.wire_length(),
            Frame::GoAway(frame) => frame.wire_length(),
            Frame::WindowUpdate(frame) => frame.wire_length(),
            Frame::Blocked(frame) => frame.wire_length(),
            Frame::StopWaiting(frame) => frame.wire_length(),
            Frame::Ping(frame) => frame.wire_length(),
        }
    }
}
