//! Frame decoding and deserialization.
//!
//! Provides binary decoding of frames received from the network. Frames
//! with packet number fields need values from the enclosing packet header;
//! the packet layer passes them in as a [`DecodeContext`].

use std::convert::TryFrom;
use std::io::{Cursor, Read};

use byteorder::{BigEndian, ReadBytesExt};
use tracing::warn;

use quicwire_core::error::{ErrorKind, Result};

use crate::frame::{
    BlockedFrame, ConnectionCloseFrame, Frame, FrameType, GoAwayFrame, PacketNumber,
    PacketNumberLen, PaddingFrame, PingFrame, RstStreamFrame, StopWaitingFrame, WindowUpdateFrame,
};
use crate::packet_number;

/// Values from the enclosing packet header a frame decoder needs.
///
/// The packet layer parses the header, then hands these to every decode
/// call; frames never reach into global state for them.
#[derive(Copy, Clone, Debug)]
pub struct DecodeContext {
    /// Full packet number of the packet being decoded.
    pub packet_number: PacketNumber,
    /// Truncation width the header used for that number.
    pub packet_number_len: PacketNumberLen,
}

/// Deserializes frames from network bytes.
pub struct FrameDecoder;

impl FrameDecoder {
    /// Decodes a single frame from a cursor.
    ///
    /// The tag byte is consumed here and dispatched on; the per-frame arms
    /// never re-read it.
    pub fn decode_frame(cursor: &mut Cursor<&[u8]>, context: &DecodeContext) -> Result<Frame> {
        let frame_type = FrameType::try_from(cursor.read_u8()?)?;

        let frame = match frame_type {
            FrameType::Padding => {
                // Everything after the tag counts as padding
                let end = cursor.get_ref().len() as u64;
                let num_padding_bytes = end - cursor.position();
                cursor.set_position(end);
                Frame::Padding(PaddingFrame { num_padding_bytes })
            }
            FrameType::RstStream => {
                let stream_id = cursor.read_u32::<BigEndian>()?;
                let byte_offset = cursor.read_u64::<BigEndian>()?;
                let error_code = cursor.read_u32::<BigEndian>()?;
                Frame::RstStream(RstStreamFrame { stream_id, byte_offset, error_code })
            }
            FrameType::ConnectionClose => {
                let error_code = cursor.read_u32::<BigEndian>()?;
                let reason_len = cursor.read_u16::<BigEndian>()? as usize;
                let mut reason = vec![0u8; reason_len];
                cursor.read_exact(&mut reason)?;
                let reason_phrase = String::from_utf8_lossy(&reason).into_owned();
                Frame::ConnectionClose(ConnectionCloseFrame { error_code, reason_phrase })
            }
            FrameType::GoAway => {
                let error_code = cursor.read_u32::<BigEndian>()?;
                let last_good_stream_id = cursor.read_u32::<BigEndian>()?;
                let reason_len = cursor.read_u16::<BigEndian>()? as usize;
                let mut reason = vec![0u8; reason_len];
                cursor.read_exact(&mut reason)?;
                let reason_phrase = String::from_utf8_lossy(&reason).into_owned();
                Frame::GoAway(GoAwayFrame { error_code, last_good_stream_id, reason_phrase })
            }
            FrameType::WindowUpdate => {
                let stream_id = cursor.read_u32::<BigEndian>()?;
                let byte_offset = cursor.read_u64::<BigEndian>()?;
                Frame::WindowUpdate(WindowUpdateFrame { stream_id, byte_offset })
            }
            FrameType::Blocked => {
                let stream_id = cursor.read_u32::<BigEndian>()?;
                Frame::Blocked(BlockedFrame { stream_id })
            }
            FrameType::StopWaiting => {
                let entropy = cursor.read_u8()?;
                let delta = packet_number::read_truncated(cursor, context.packet_number_len)?;
                // Bound check before the subtraction below
                if delta > context.packet_number {
                    return Err(ErrorKind::InvalidLeastUnackedDelta);
                }
                let least_unacked = context.packet_number - delta;
                Frame::StopWaiting(StopWaitingFrame {
                    least_unacked,
                    entropy,
                    packet_number_len: context.packet_number_len,
                    packet_number: context.packet_number,
                })
            }
            FrameType::Ping => Frame::Ping(PingFrame),
        };

        Ok(frame)
    }

    /// Decodes every frame of a packet payload.
    ///
    /// A malformed frame poisons the whole payload: the error is returned
    /// and the caller must discard everything decoded so far.
    pub fn decode_payload(payload: &[u8], context: &DecodeContext) -> Result<Vec<Frame>> {
        let mut cursor = Cursor::new(payload);
        let mut frames = Vec::new();

        while (cursor.position() as usize) < payload.len() {
            let offset = cursor.position();
            match Self::decode_frame(&mut cursor, context) {
                Ok(frame) => frames.push(frame),
                Err(error) => {
                    warn!("malformed frame at payload offset {}: {}", offset, error);
                    return Err(error);
                }
            }
        }

        Ok(frames)
    }
}
