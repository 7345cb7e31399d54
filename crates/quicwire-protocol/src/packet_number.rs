//! Packet number truncation and reconstruction.
//!
//! Packet numbers are 64-bit values that travel on the wire truncated to
//! their low 1, 2, 4, or 6 bytes, relative to a reference value both ends
//! track. This module provides the pure functions that truncate, restore,
//! and size packet numbers; the frame codec decides what an out-of-range
//! value means.

use std::io::Cursor;

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use quicwire_core::error::{ErrorKind, Result};

use crate::frame::{PacketNumber, PacketNumberLen};

/// Appends the low `len` bytes of `value` to the buffer, big-endian.
///
/// The value is truncated to the width, never range-checked; callers that
/// care whether it fits must check against [`PacketNumberLen::max_value`]
/// first.
pub fn write_truncated(buffer: &mut Vec<u8>, value: u64, len: PacketNumberLen) -> Result<()> {
    match len {
        PacketNumberLen::Invalid => return Err(ErrorKind::PacketNumberLenNotSet),
        PacketNumberLen::One => buffer.write_u8(value as u8)?,
        PacketNumberLen::Two => buffer.write_u16::<BigEndian>(value as u16)?,
        PacketNumberLen::Four => buffer.write_u32::<BigEndian>(value as u32)?,
        PacketNumberLen::Six => buffer.write_uint::<BigEndian>(value & 0xFFFF_FFFF_FFFF, 6)?,
    }
    Ok(())
}

/// Reads a `len`-byte big-endian value, zero-extended to 64 bits.
pub fn read_truncated(cursor: &mut Cursor<&[u8]>, len: PacketNumberLen) -> Result<u64> {
    let value = match len {
        PacketNumberLen::Invalid => return Err(ErrorKind::PacketNumberLenNotSet),
        PacketNumberLen::One => u64::from(cursor.read_u8()?),
        PacketNumberLen::Two => u64::from(cursor.read_u16::<BigEndian>()?),
        PacketNumberLen::Four => u64::from(cursor.read_u32::<BigEndian>()?),
        PacketNumberLen::Six => cursor.read_uint::<BigEndian>(6)?,
    };
    Ok(value)
}

/// Restores a full packet number from its truncated wire form.
///
/// `reference` is the highest packet number seen so far; the result is the
/// value closest to `reference + 1` whose low bytes match `truncated`.
pub fn infer_packet_number(
    reference: PacketNumber,
    truncated: u64,
    len: PacketNumberLen,
) -> Result<PacketNumber> {
    let bytes = len.byte_count().ok_or(ErrorKind::PacketNumberLenNotSet)?;
    let window = 1u64 << (bytes * 8);
    let half_window = window / 2;
    let mask = window - 1;

    let expected = reference.wrapping_add(1);
    let candidate = (expected & !mask) | (truncated & mask);

    if expected.checked_sub(candidate).map_or(false, |gap| gap >= half_window)
        && candidate.checked_add(window).is_some()
    {
        Ok(candidate + window)
    } else if candidate.checked_sub(expected).map_or(false, |gap| gap > half_window)
        && candidate >= window
    {
        Ok(candidate - window)
    } else {
        Ok(candidate)
    }
}

/// Smallest width able to represent `packet_number` in full.
pub fn minimal_packet_number_len(packet_number: PacketNumber) -> PacketNumberLen {
    if packet_number < 1u64 << 8 {
        PacketNumberLen::One
    } else if packet_number < 1u64 << 16 {
        PacketNumberLen::Two
    } else if packet_number < 1u64 << 32 {
        PacketNumberLen::Four
    } else {
        PacketNumberLen::Six
    }
}

/// Width for the packet number field of an outgoing packet header.
///
/// Never one byte; keeps two bits of headroom over the distance to the
/// least unacked packet so the receiver's window stays centered.
pub fn packet_number_len_for_header(
    packet_number: PacketNumber,
    least_unacked: PacketNumber,
) -> PacketNumberLen {
    let delta = packet_number.saturating_sub(least_unacked);
    if delta < 1u64 << 15 {
        PacketNumberLen::Two
    } else if delta < 1u64 << 31 {
        PacketNumberLen::Four
    } else {
        PacketNumberLen::Six
    }
}
