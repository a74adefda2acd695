//! Session writer task.
//!
//! Each session runs exactly one writer: it drains the frame channel onto
//! the socket through [`FrameCodec`], preserving the order the catalog
//! encoded in. Everything upstream of the channel stays synchronous.

use crate::core::codec::FrameCodec;
use crate::core::frame::Frame;
use crate::error::Result;
use crate::utils::metrics::Timer;
use futures::SinkExt;
use tokio::io::AsyncWrite;
use tokio::sync::mpsc;
use tokio_util::codec::FramedWrite;
use tracing::{debug, instrument, trace};

/// Drain `frames` onto `io` until the channel closes or the peer goes away.
///
/// Returns the number of frames written. An I/O failure ends the loop with
/// the error; the caller decides whether that tears down the session.
#[instrument(skip(frames, io))]
pub async fn write_frames<W>(mut frames: mpsc::UnboundedReceiver<Frame>, io: W) -> Result<u64>
where
    W: AsyncWrite + Unpin,
{
    let _session = Timer::start("writer_session");
    let mut framed = FramedWrite::new(io, FrameCodec);
    let mut written = 0u64;

    while let Some(frame) = frames.recv().await {
        trace!(
            opcode = frame.opcode,
            bytes = frame.encoded_len(),
            "Writing frame"
        );
        framed.send(frame).await?;
        written += 1;
    }

    debug!(frames = written, "Writer drained, channel closed");
    Ok(written)
}
