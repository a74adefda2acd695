//! Channel-backed sink feeding a session writer task.

use crate::core::frame::Frame;
use crate::error::{ProtocolError, Result};
use crate::transport::FrameSink;
use tokio::sync::mpsc;

/// The sink half of a live session.
///
/// Encoders push frames in from any thread; the session's writer task drains
/// the paired receiver onto the socket with [`write_frames`]. The channel is
/// unbounded because the encoders run on the game loop and must never block
/// on a slow client.
///
/// [`write_frames`]: crate::transport::write_frames
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: mpsc::UnboundedSender<Frame>,
}

impl ChannelSink {
    /// Create a sink plus the receiver its writer task will drain.
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Frame>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Wrap an existing sender, for sessions that own their channel.
    pub fn from_sender(tx: mpsc::UnboundedSender<Frame>) -> Self {
        Self { tx }
    }

    /// Whether the writer side is still draining.
    pub fn is_open(&self) -> bool {
        !self.tx.is_closed()
    }
}

impl FrameSink for ChannelSink {
    fn send(&self, frame: Frame) -> Result<()> {
        self.tx
            .send(frame)
            .map_err(|_| ProtocolError::ConnectionClosed)
    }
}
