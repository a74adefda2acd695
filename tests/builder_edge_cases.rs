#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//! Edge-case tests for frame construction
//! Covers boundary payload sizes, header formatting and malformed input

use genesis_protocol::core::builder::FrameBuilder;
use genesis_protocol::core::frame::{Frame, HEADER_LEN, MAX_FRAME_LEN, MAX_PAYLOAD_LEN};
use genesis_protocol::error::ProtocolError;

// ============================================================================
// FRAME BOUNDARIES
// ============================================================================

#[test]
fn test_empty_payload_frame() {
    let frame = Frame::new(0x0104, Vec::new()).expect("Empty payload is a valid frame");
    assert_eq!(frame.encoded_len(), HEADER_LEN);

    let bytes = frame.to_bytes();
    assert_eq!(bytes.as_ref(), &[0x04, 0x00, 0x04, 0x01]);

    let decoded = Frame::from_bytes(&bytes).expect("Should decode header-only frame");
    assert!(decoded.payload.is_empty());
    assert_eq!(decoded.opcode, 0x0104);
}

#[test]
fn test_max_payload_accepted() {
    let frame = Frame::new(0x0001, vec![0xAB; MAX_PAYLOAD_LEN]).expect("Exact max should fit");
    assert_eq!(frame.encoded_len(), MAX_FRAME_LEN);

    let bytes = frame.to_bytes();
    // Length field saturates the u16 exactly.
    assert_eq!(bytes[0], 0xFF);
    assert_eq!(bytes[1], 0xFF);
}

#[test]
fn test_oversized_payload_rejected() {
    let result = Frame::new(0x0001, vec![0u8; MAX_PAYLOAD_LEN + 1]);
    assert!(matches!(result, Err(ProtocolError::OversizedFrame(n)) if n == MAX_PAYLOAD_LEN + 1));
}

#[test]
fn test_builder_rejects_oversized_at_finish() {
    let payload = vec![0u8; MAX_PAYLOAD_LEN];
    let mut bldr = FrameBuilder::new(0x0001);
    bldr.write_bytes(&payload);
    bldr.write_u8(0);

    assert!(matches!(
        bldr.finish(),
        Err(ProtocolError::OversizedFrame(_))
    ));
}

#[test]
fn test_builder_exact_boundary_succeeds() {
    let payload = vec![0u8; MAX_PAYLOAD_LEN];
    let mut bldr = FrameBuilder::new(0x0001);
    bldr.write_bytes(&payload);

    let frame = bldr.finish().expect("Exact boundary should succeed");
    assert_eq!(frame.encoded_len(), MAX_FRAME_LEN);
}

// ============================================================================
// HEADER FORMAT
// ============================================================================

#[test]
fn test_header_is_total_length_then_opcode() {
    let frame = Frame::new(0x0403, vec![0xAA, 0xBB]).unwrap();
    let bytes = frame.to_bytes();

    // [len lo][len hi][opcode lo][opcode hi][payload...]
    assert_eq!(bytes.as_ref(), &[0x06, 0x00, 0x03, 0x04, 0xAA, 0xBB]);
}

#[test]
fn test_from_bytes_ignores_trailing_data() {
    let mut wire = Frame::new(0x0202, vec![1, 2, 3]).unwrap().to_bytes().to_vec();
    wire.extend_from_slice(&[0xDE, 0xAD]);

    let frame = Frame::from_bytes(&wire).expect("Trailing bytes belong to the next frame");
    assert_eq!(frame.payload.as_ref(), &[1, 2, 3]);
}

#[test]
fn test_from_bytes_rejects_truncated_header() {
    assert!(matches!(
        Frame::from_bytes(&[0x06, 0x00, 0x03]),
        Err(ProtocolError::InvalidHeader)
    ));
}

#[test]
fn test_from_bytes_rejects_empty_buffer() {
    assert!(matches!(
        Frame::from_bytes(&[]),
        Err(ProtocolError::InvalidHeader)
    ));
}

#[test]
fn test_from_bytes_rejects_length_below_header() {
    // Total length field claims three bytes, less than the header itself.
    assert!(matches!(
        Frame::from_bytes(&[0x03, 0x00, 0x01, 0x02]),
        Err(ProtocolError::InvalidHeader)
    ));
}

#[test]
fn test_from_bytes_rejects_truncated_payload() {
    // Header claims ten total bytes but only six arrive.
    assert!(matches!(
        Frame::from_bytes(&[0x0A, 0x00, 0x01, 0x02, 0xAA, 0xBB]),
        Err(ProtocolError::InvalidHeader)
    ));
}

// ============================================================================
// FIELD WIDTHS AND ENDIANNESS
// ============================================================================

#[test]
fn test_all_write_widths_accumulate() {
    let mut bldr = FrameBuilder::new(0x0001);
    bldr.write_u8(1);
    bldr.write_u16_le(2);
    bldr.write_i16_le(-3);
    bldr.write_u32_le(4);
    bldr.write_i32_le(-5);
    bldr.write_f32_le(6.0);
    bldr.write_bytes(&[7, 8, 9]);

    assert_eq!(bldr.len(), 1 + 2 + 2 + 4 + 4 + 4 + 3);
    let frame = bldr.finish().unwrap();
    assert_eq!(frame.payload.len(), 20);
}

#[test]
fn test_numeric_fields_are_little_endian() {
    let mut bldr = FrameBuilder::new(0x0001);
    bldr.write_u16_le(0x0102);
    bldr.write_u32_le(0x0A0B0C0D);

    let frame = bldr.finish().unwrap();
    assert_eq!(
        frame.payload.as_ref(),
        &[0x02, 0x01, 0x0D, 0x0C, 0x0B, 0x0A]
    );
}

#[test]
fn test_signed_fields_use_twos_complement() {
    let mut bldr = FrameBuilder::new(0x0001);
    bldr.write_i16_le(-1);
    bldr.write_i32_le(-2);

    let frame = bldr.finish().unwrap();
    assert_eq!(
        frame.payload.as_ref(),
        &[0xFF, 0xFF, 0xFE, 0xFF, 0xFF, 0xFF]
    );
}

#[test]
fn test_float_fields_carry_raw_bits() {
    let mut bldr = FrameBuilder::new(0x0001);
    bldr.write_f32_le(52.5);

    let frame = bldr.finish().unwrap();
    assert_eq!(frame.payload.as_ref(), &52.5f32.to_le_bytes());
}

#[test]
fn test_empty_byte_slice_writes_nothing() {
    let mut bldr = FrameBuilder::new(0x0001);
    bldr.write_bytes(&[]);
    assert!(bldr.is_empty());

    let frame = bldr.finish().unwrap();
    assert_eq!(frame.encoded_len(), HEADER_LEN);
}

#[test]
fn test_identical_writes_produce_identical_frames() {
    let build = || {
        let mut bldr = FrameBuilder::new(0x0921);
        bldr.write_u32_le(77);
        bldr.write_bytes(b"Aria");
        bldr.finish().unwrap()
    };

    assert_eq!(build(), build());
    assert_eq!(build().to_bytes(), build().to_bytes());
}
