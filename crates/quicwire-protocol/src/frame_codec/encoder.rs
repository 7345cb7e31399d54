//! Frame encoding.
//!
//! Provides binary serialization of frames for transmission inside packet
//! payloads.

use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use quicwire_core::{
    constants::MAX_REASON_PHRASE_LEN,
    error::{ErrorKind, Result},
    version::ProtocolVersion,
};

use crate::frame::{EnumConverter, Frame};
use crate::packet_number;

/// Serializes frames into bytes for transmission.
pub struct FrameEncoder;

impl FrameEncoder {
    /// Encodes a single frame into the provided buffer (appends bytes).
    ///
    /// On error the buffer keeps whatever was already written; the caller
    /// must discard it. The protocol version is part of the signature so
    /// layouts can change between versions; every current frame encodes the
    /// same across supported versions.
    pub fn encode_frame_into(
        buffer: &mut Vec<u8>,
        frame: &Frame,
        _version: ProtocolVersion,
    ) -> Result<()> {
        // Write frame type
        buffer.write_u8(frame.frame_type().to_u8())?;

        match frame {
            Frame::Padding(padding) => {
                buffer.resize(buffer.len() + padding.num_padding_bytes as usize, 0);
            }
            Frame::RstStream(rst) => {
                buffer.write_u32::<BigEndian>(rst.stream_id)?;
                buffer.write_u64::<BigEndian>(rst.byte_offset)?;
                buffer.write_u32::<BigEndian>(rst.error_code)?;
            }
            Frame::ConnectionClose(close) => {
                if close.reason_phrase.len() > MAX_REASON_PHRASE_LEN as usize {
                    return Err(ErrorKind::ReasonPhraseTooLong);
                }
                buffer.write_u32::<BigEndian>(close.error_code)?;
                buffer.write_u16::<BigEndian>(close.reason_phrase.len() as u16)?;
                buffer.write_all(close.reason_phrase.as_bytes())?;
            }
            Frame::GoAway(goaway) => {
                if goaway.reason_phrase.len() > MAX_REASON_PHRASE_LEN as usize {
                    return Err(ErrorKind::ReasonPhraseTooLong);
                }
                buffer.write_u32::<BigEndian>(goaway.error_code)?;
                buffer.write_u32::<BigEndian>(goaway.last_good_stream_id)?;
                buffer.write_u16::<BigEndian>(goaway.reason_phrase.len() as u16)?;
                buffer.write_all(goaway.reason_phrase.as_bytes())?;
            }
            Frame::WindowUpdate(update) => {
                buffer.write_u32::<BigEndian>(update.stream_id)?;
                buffer.write_u64::<BigEndian>(update.byte_offset)?;
            }
            Frame::Blocked(blocked) => {
                buffer.write_u32::<BigEndian>(blocked.stream_id)?;
            }
            Frame::StopWaiting(stop_waiting) => {
                buffer.write_u8(stop_waiting.entropy)?;
                if stop_waiting.packet_number == 0 {
                    return Err(ErrorKind::PacketNumberNotSet);
                }
                if stop_waiting.least_unacked > stop_waiting.packet_number {
                    return Err(ErrorKind::LeastUnackedExceedsPacketNumber);
                }
                let delta = stop_waiting.packet_number - stop_waiting.least_unacked;
                let max_delta = stop_waiting
                    .packet_number_len
                    .max_value()
                    .ok_or(ErrorKind::PacketNumberLenNotSet)?;
                if delta > max_delta {
                    return Err(ErrorKind::LeastUnackedDeltaTooLarge);
                }
                packet_number::write_truncated(buffer, delta, stop_waiting.packet_number_len)?;
            }
            Frame::Ping(_) => {}
        }

        Ok(())
    }

    /// Encodes a sequence of frames back to back (appends bytes).
    ///
    /// Frames are self-delimiting, so nothing separates them on the wire.
    /// A padding frame counts as filler to the end of the payload on
    /// decode, so it must come last; frames placed after one are not
    /// recoverable.
    pub fn encode_payload_into(
        buffer: &mut Vec<u8>,
        frames: &[Frame],
        version: ProtocolVersion,
    ) -> Result<()> {
        for frame in frames {
            Self::encode_frame_into(buffer, frame, version)?;
        }
        Ok(())
    }

    /// Encodes a single frame into a fresh byte vector.
    pub fn encode_frame(frame: &Frame, version: ProtocolVersion) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode_frame_into(&mut buffer, frame, version)?;
        Ok(buffer)
    }
}
