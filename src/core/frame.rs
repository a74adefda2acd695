//! Opcode-tagged binary frames and the wire header layout.
//!
//! A [`Frame`] is the unit of transmission: a 4-byte header followed by a
//! positional payload. The header carries the total frame length (including
//! itself) and the opcode that tells the client which layout the payload
//! follows.

use crate::error::{ProtocolError, Result};
use bytes::{BufMut, Bytes, BytesMut};

/// Size of the wire header in bytes: length (2) + opcode (2).
pub const HEADER_LEN: usize = 4;

/// Maximum total frame size. Bounded by the u16 length field.
pub const MAX_FRAME_LEN: usize = u16::MAX as usize;

/// Maximum payload size: the frame bound minus the header.
pub const MAX_PAYLOAD_LEN: usize = MAX_FRAME_LEN - HEADER_LEN;

/// An immutable outgoing frame.
///
/// Produced exactly once by [`FrameBuilder::finish`] and consumed exactly
/// once by a transport sink. The payload is reference-counted, so cloning a
/// frame never copies payload bytes.
///
/// [`FrameBuilder::finish`]: crate::core::builder::FrameBuilder::finish
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Numeric message identifier understood by the client.
    pub opcode: u16,
    /// Positional field data. Meaning is fixed by the opcode.
    pub payload: Bytes,
}

impl Frame {
    /// Create a frame, rejecting payloads that cannot fit the u16 length field.
    pub fn new(opcode: u16, payload: impl Into<Bytes>) -> Result<Self> {
        let payload = payload.into();
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(ProtocolError::OversizedFrame(payload.len()));
        }
        Ok(Self { opcode, payload })
    }

    /// Total size on the wire, header included.
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.payload.len()
    }

    /// Serialize the frame into a standalone buffer.
    pub fn to_bytes(&self) -> Bytes {
        let total = self.encoded_len();
        let mut buf = BytesMut::with_capacity(total);
        buf.put_u16_le(total as u16);
        buf.put_u16_le(self.opcode);
        buf.extend_from_slice(&self.payload);
        buf.freeze()
    }

    /// Parse a frame from a buffer holding at least one whole frame.
    ///
    /// The declared length must cover the header and fit inside `buf`.
    /// Trailing bytes beyond the declared length are ignored.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        if buf.len() < HEADER_LEN {
            return Err(ProtocolError::InvalidHeader);
        }
        let total = u16::from_le_bytes([buf[0], buf[1]]) as usize;
        if total < HEADER_LEN || total > buf.len() {
            return Err(ProtocolError::InvalidHeader);
        }
        let opcode = u16::from_le_bytes([buf[2], buf[3]]);
        Ok(Self {
            opcode,
            payload: Bytes::copy_from_slice(&buf[HEADER_LEN..total]),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn header_layout_is_little_endian() {
        let frame = Frame::new(0x0403, vec![0xAA, 0xBB]).unwrap();
        let bytes = frame.to_bytes();
        // 6 total bytes: len 6, opcode 0x0403, payload.
        assert_eq!(&bytes[..], &[0x06, 0x00, 0x03, 0x04, 0xAA, 0xBB]);
    }

    #[test]
    fn roundtrip_preserves_opcode_and_payload() {
        let frame = Frame::new(0x1234, vec![1, 2, 3, 4, 5]).unwrap();
        let parsed = Frame::from_bytes(&frame.to_bytes()).unwrap();
        assert_eq!(parsed, frame);
    }

    #[test]
    fn empty_payload_is_a_bare_header() {
        let frame = Frame::new(7, Bytes::new()).unwrap();
        assert_eq!(frame.encoded_len(), HEADER_LEN);
        let parsed = Frame::from_bytes(&frame.to_bytes()).unwrap();
        assert!(parsed.payload.is_empty());
    }

    #[test]
    fn oversized_payload_rejected() {
        let err = Frame::new(1, vec![0u8; MAX_PAYLOAD_LEN + 1]).unwrap_err();
        assert!(matches!(err, ProtocolError::OversizedFrame(_)));
    }

    #[test]
    fn truncated_header_rejected() {
        assert!(matches!(
            Frame::from_bytes(&[0x06, 0x00, 0x03]),
            Err(ProtocolError::InvalidHeader)
        ));
    }

    #[test]
    fn undersized_length_claim_rejected() {
        // Claims 2 total bytes, which cannot even hold the header.
        assert!(matches!(
            Frame::from_bytes(&[0x02, 0x00, 0x03, 0x04]),
            Err(ProtocolError::InvalidHeader)
        ));
    }
}
