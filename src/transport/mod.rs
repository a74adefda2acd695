//! Delivery surfaces for encoded frames.
//!
//! The catalog encodes; a [`FrameSink`] delivers. Session plumbing stays
//! behind this trait so encoders never touch a socket directly: game code
//! hands the catalog whatever sink its session owns, and tests capture
//! frames with [`MemorySink`].

pub mod channel;
pub mod writer;

use crate::core::frame::Frame;
use crate::error::{constants, ProtocolError, Result};
use std::sync::Mutex;

pub use channel::ChannelSink;
pub use writer::write_frames;

/// Accepts finished frames for delivery.
///
/// Implementations take `&self` because one sink is shared by every encode
/// call site of a session.
pub trait FrameSink: Send + Sync {
    /// Hand one finished frame to the transport.
    fn send(&self, frame: Frame) -> Result<()>;
}

/// A sink that keeps every frame in memory, oldest first.
///
/// Used as the capture sink in tests and anywhere frames are staged before
/// a session exists.
#[derive(Debug, Default)]
pub struct MemorySink {
    frames: Mutex<Vec<Frame>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the frames captured so far.
    pub fn frames(&self) -> Vec<Frame> {
        if let Ok(frames) = self.frames.lock() {
            frames.clone()
        } else {
            Vec::new()
        }
    }

    /// Drain the captured frames, leaving the sink empty.
    pub fn take(&self) -> Vec<Frame> {
        if let Ok(mut frames) = self.frames.lock() {
            std::mem::take(&mut *frames)
        } else {
            Vec::new()
        }
    }

    pub fn len(&self) -> usize {
        self.frames.lock().map(|f| f.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FrameSink for MemorySink {
    fn send(&self, frame: Frame) -> Result<()> {
        let mut frames = self.frames.lock().map_err(|_| {
            ProtocolError::TransportError(constants::ERR_SINK_POISONED.to_string())
        })?;
        frames.push(frame);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use bytes::Bytes;

    fn frame(opcode: u16) -> Frame {
        Frame::new(opcode, Bytes::from_static(&[0x01, 0x02])).unwrap()
    }

    #[test]
    fn memory_sink_captures_in_order() {
        let sink = MemorySink::new();
        sink.send(frame(0x0101)).unwrap();
        sink.send(frame(0x0202)).unwrap();

        let frames = sink.frames();
        assert_eq!(frames.len(), 2);
        assert_eq!(frames[0].opcode, 0x0101);
        assert_eq!(frames[1].opcode, 0x0202);
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn take_drains_the_sink() {
        let sink = MemorySink::new();
        sink.send(frame(0x0303)).unwrap();

        assert_eq!(sink.take().len(), 1);
        assert!(sink.is_empty());
        assert!(sink.take().is_empty());
    }
}
