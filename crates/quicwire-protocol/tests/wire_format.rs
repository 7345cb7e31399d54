//! Integration tests for the quicwire-protocol crate.
//!
//! These tests verify complete payloads byte for byte and how the frame
//! codec and the packet number helpers work together across a send/receive
//! cycle.

use std::io::Cursor;

use quicwire_core::error::ErrorKind;
use quicwire_core::version::ProtocolVersion;
use quicwire_protocol::frame::{
    ConnectionCloseFrame, Frame, PacketNumberLen, PaddingFrame, PingFrame, StopWaitingFrame,
    WindowUpdateFrame,
};
use quicwire_protocol::frame_codec::{DecodeContext, FrameDecoder, FrameEncoder};
use quicwire_protocol::packet_number;

#[test]
fn test_payload_golden_bytes() {
    let frames = vec![
        Frame::StopWaiting(StopWaitingFrame {
            least_unacked: 990,
            entropy: 0xAB,
            packet_number_len: PacketNumberLen::One,
            packet_number: 1000,
        }),
        Frame::WindowUpdate(WindowUpdateFrame { stream_id: 3, byte_offset: 0x2000 }),
        Frame::Ping(PingFrame),
        Frame::Padding(PaddingFrame { num_padding_bytes: 2 }),
    ];

    let mut payload = Vec::new();
    FrameEncoder::encode_payload_into(&mut payload, &frames, ProtocolVersion::V2).unwrap();

    #[rustfmt::skip]
    let expected = vec![
        // StopWaiting: tag, entropy, one-byte delta
        0x06, 0xAB, 0x0A,
        // WindowUpdate: tag, stream id, byte offset
        0x04, 0x00, 0x00, 0x00, 0x03, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00,
        // Ping: tag only
        0x07,
        // Padding: tag, filler
        0x00, 0x00, 0x00,
    ];
    assert_eq!(payload, expected);

    let context = DecodeContext { packet_number: 1000, packet_number_len: PacketNumberLen::One };
    let decoded = FrameDecoder::decode_payload(&payload, &context).unwrap();
    assert_eq!(decoded, frames);
}

#[test]
fn test_corrupted_payload_is_discarded() {
    let frames = vec![
        Frame::Ping(PingFrame),
        Frame::ConnectionClose(ConnectionCloseFrame {
            error_code: 6,
            reason_phrase: "idle timeout".into(),
        }),
    ];

    let mut payload = Vec::new();
    FrameEncoder::encode_payload_into(&mut payload, &frames, ProtocolVersion::V2).unwrap();

    // Corrupt the second frame's tag
    payload[1] = 0xC3;

    let context = DecodeContext { packet_number: 1, packet_number_len: PacketNumberLen::One };
    let result = FrameDecoder::decode_payload(&payload, &context);
    assert!(matches!(result, Err(ErrorKind::DecodingError(_))));
}

#[test]
fn test_header_number_round_trip() {
    // Sender side: pick a width for the outgoing packet number, truncate it.
    let packet_number = 0x1234_5678u64;
    let least_unacked = 0x1234_5000u64;

    let len = packet_number::packet_number_len_for_header(packet_number, least_unacked);
    assert_eq!(len, PacketNumberLen::Two);

    let mut header = Vec::new();
    packet_number::write_truncated(&mut header, packet_number, len).unwrap();
    assert_eq!(header, vec![0x56, 0x78]);

    // Receiver side: restore the full number from the truncated field.
    let mut cursor = Cursor::new(header.as_slice());
    let truncated = packet_number::read_truncated(&mut cursor, len).unwrap();
    let inferred = packet_number::infer_packet_number(packet_number - 1, truncated, len).unwrap();
    assert_eq!(inferred, packet_number);

    // The restored number then feeds stop waiting decoding.
    let frame_bytes = [0x06, 0x00, 0x02];
    let context = DecodeContext { packet_number: inferred, packet_number_len: len };
    let mut cursor = Cursor::new(&frame_bytes[..]);
    let decoded = FrameDecoder::decode_frame(&mut cursor, &context).unwrap();
    assert_eq!(
        decoded,
        Frame::StopWaiting(StopWaitingFrame {
            least_unacked: packet_number - 2,
            entropy: 0,
            packet_number_len: len,
            packet_number,
        })
    );
}

#[test]
fn test_reason_phrase_survives_transit() {
    let frame = Frame::ConnectionClose(ConnectionCloseFrame {
        error_code: 0x8000_0001,
        reason_phrase: "peer going away: maintenance".into(),
    });

    let encoded = FrameEncoder::encode_frame(&frame, ProtocolVersion::V1).unwrap();
    assert_eq!(encoded.len() as u64, frame.wire_length().unwrap());

    let context = DecodeContext { packet_number: 9, packet_number_len: PacketNumberLen::Two };
    let decoded = FrameDecoder::decode_payload(&encoded, &context).unwrap();
    assert_eq!(decoded, vec![frame]);
}
