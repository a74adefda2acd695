//! Incremental builder for positional frame payloads.
//!
//! The legacy client reads every message as a fixed sequence of little-endian
//! fields, so encoding is a straight run of typed appends. [`FrameBuilder`]
//! wraps a [`BytesMut`] with exactly those appends and nothing else: no tags,
//! no padding, no alignment. Field order is the contract.
//!
//! The builder is single-use. [`FrameBuilder::finish`] consumes it, so writing
//! after finish or finishing twice is a compile error rather than a runtime
//! hazard.

use crate::core::frame::{Frame, MAX_PAYLOAD_LEN};
use crate::error::{ProtocolError, Result};
use bytes::{BufMut, BytesMut};

/// Default payload capacity. Most catalog messages fit well within this.
const DEFAULT_CAPACITY: usize = 64;

/// Append-only writer that accumulates one frame payload.
#[derive(Debug)]
pub struct FrameBuilder {
    opcode: u16,
    buf: BytesMut,
}

impl FrameBuilder {
    /// Start a frame for the given opcode.
    pub fn new(opcode: u16) -> Self {
        Self::with_capacity(opcode, DEFAULT_CAPACITY)
    }

    /// Start a frame with a payload capacity hint.
    pub fn with_capacity(opcode: u16, capacity: usize) -> Self {
        Self {
            opcode,
            buf: BytesMut::with_capacity(capacity),
        }
    }

    /// Opcode this builder was opened with.
    pub fn opcode(&self) -> u16 {
        self.opcode
    }

    /// Append a single byte.
    pub fn write_u8(&mut self, value: u8) {
        self.buf.put_u8(value);
    }

    /// Append an unsigned 16-bit field, little-endian.
    pub fn write_u16_le(&mut self, value: u16) {
        self.buf.put_u16_le(value);
    }

    /// Append a signed 16-bit field, little-endian.
    pub fn write_i16_le(&mut self, value: i16) {
        self.buf.put_i16_le(value);
    }

    /// Append an unsigned 32-bit field, little-endian.
    pub fn write_u32_le(&mut self, value: u32) {
        self.buf.put_u32_le(value);
    }

    /// Append a signed 32-bit field, little-endian.
    pub fn write_i32_le(&mut self, value: i32) {
        self.buf.put_i32_le(value);
    }

    /// Append an IEEE-754 single as its raw little-endian bit pattern.
    ///
    /// The client interprets the four bytes in place. No canonicalization is
    /// applied, so NaN payloads survive bit-for-bit.
    pub fn write_f32_le(&mut self, value: f32) {
        self.buf.put_slice(&value.to_le_bytes());
    }

    /// Append raw bytes verbatim. Used for pre-encoded and opaque data.
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buf.put_slice(bytes);
    }

    /// Payload bytes written so far. The header is not included.
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when no field has been written yet.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Seal the payload into an immutable [`Frame`].
    ///
    /// Fails only when the accumulated payload exceeds what the u16 length
    /// field can describe.
    pub fn finish(self) -> Result<Frame> {
        if self.buf.len() > MAX_PAYLOAD_LEN {
            return Err(ProtocolError::OversizedFrame(self.buf.len()));
        }
        Ok(Frame {
            opcode: self.opcode,
            payload: self.buf.freeze(),
        })
    }
}
