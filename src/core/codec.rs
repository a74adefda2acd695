//! Tokio codec for framing [`Frame`]s over a byte stream.
//!
//! Encoding writes the `[len u16 LE][opcode u16 LE]` header followed by the
//! payload. Decoding is zero-copy: a complete frame is split off the input
//! buffer without reallocation, and a partial frame leaves the buffer
//! untouched until more bytes arrive.
//!
//! The decoder exists for loopback tests and capture tooling. Parsing of
//! inbound game messages lives elsewhere in the server.

use crate::core::frame::{Frame, HEADER_LEN};
use crate::error::{ProtocolError, Result};
use bytes::{Buf, BufMut, BytesMut};
use tokio_util::codec::{Decoder, Encoder};

/// Stateless codec for the frame wire format.
pub struct FrameCodec;

impl Encoder<Frame> for FrameCodec {
    type Error = ProtocolError;

    fn encode(&mut self, frame: Frame, dst: &mut BytesMut) -> Result<()> {
        let total = frame.encoded_len();
        // Frame construction already enforces the bound; re-check so a
        // hand-built Frame cannot emit a header that lies about its length.
        if total > u16::MAX as usize {
            return Err(ProtocolError::OversizedFrame(frame.payload.len()));
        }

        dst.reserve(total);
        dst.put_u16_le(total as u16);
        dst.put_u16_le(frame.opcode);
        dst.extend_from_slice(&frame.payload);
        Ok(())
    }
}

impl Decoder for FrameCodec {
    type Item = Frame;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Frame>> {
        if src.len() < HEADER_LEN {
            return Ok(None);
        }

        let total = u16::from_le_bytes([src[0], src[1]]) as usize;
        if total < HEADER_LEN {
            return Err(ProtocolError::InvalidHeader);
        }
        if src.len() < total {
            // Reserve the remainder so the next read can complete the frame.
            src.reserve(total - src.len());
            return Ok(None);
        }

        let mut frame = src.split_to(total);
        frame.advance(2);
        let opcode = frame.get_u16_le();
        Ok(Some(Frame {
            opcode,
            payload: frame.freeze(),
        }))
    }
}
