//! Observability and Metrics
//!
//! This module provides metrics collection for the outgoing encoding path,
//! from frames built to frames handed off and the failures in between.
//!
//! Uses atomic counters for thread-safe metrics collection.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;
use tracing::{debug, info};

/// Global metrics collector for encoder operations
#[derive(Debug)]
pub struct Metrics {
    /// Total frames encoded
    pub frames_encoded: AtomicU64,
    /// Total bytes encoded, headers included
    pub bytes_encoded: AtomicU64,
    /// Frames accepted by a sink
    pub frames_sent: AtomicU64,
    /// Bytes accepted by a sink, headers included
    pub bytes_sent: AtomicU64,
    /// Encoding failures (overflow, oversize, template mismatch)
    pub encode_errors: AtomicU64,
    /// Sink handoff failures
    pub send_errors: AtomicU64,
    /// Subjects rejected before any byte was built
    pub subjects_rejected: AtomicU64,
    /// Start time for uptime calculation
    start_time: Instant,
}

impl Metrics {
    /// Create a new metrics collector
    pub fn new() -> Self {
        Self {
            frames_encoded: AtomicU64::new(0),
            bytes_encoded: AtomicU64::new(0),
            frames_sent: AtomicU64::new(0),
            bytes_sent: AtomicU64::new(0),
            encode_errors: AtomicU64::new(0),
            send_errors: AtomicU64::new(0),
            subjects_rejected: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a finished frame
    pub fn frame_encoded(&self, byte_count: u64) {
        self.frames_encoded.fetch_add(1, Ordering::Relaxed);
        self.bytes_encoded.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record a frame accepted by its sink
    pub fn frame_sent(&self, byte_count: u64) {
        self.frames_sent.fetch_add(1, Ordering::Relaxed);
        self.bytes_sent.fetch_add(byte_count, Ordering::Relaxed);
    }

    /// Record an encoding failure
    pub fn encode_error(&self) {
        self.encode_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a sink handoff failure
    pub fn send_error(&self) {
        self.send_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a subject rejected before encoding
    pub fn subject_rejected(&self) {
        self.subjects_rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            frames_encoded: self.frames_encoded.load(Ordering::Relaxed),
            bytes_encoded: self.bytes_encoded.load(Ordering::Relaxed),
            frames_sent: self.frames_sent.load(Ordering::Relaxed),
            bytes_sent: self.bytes_sent.load(Ordering::Relaxed),
            encode_errors: self.encode_errors.load(Ordering::Relaxed),
            send_errors: self.send_errors.load(Ordering::Relaxed),
            subjects_rejected: self.subjects_rejected.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }

    /// Log current metrics
    pub fn log_metrics(&self) {
        let snapshot = self.snapshot();
        info!(
            frames_encoded = snapshot.frames_encoded,
            bytes_encoded = snapshot.bytes_encoded,
            frames_sent = snapshot.frames_sent,
            bytes_sent = snapshot.bytes_sent,
            encode_errors = snapshot.encode_errors,
            send_errors = snapshot.send_errors,
            subjects_rejected = snapshot.subjects_rejected,
            uptime_seconds = snapshot.uptime_seconds,
            "Encoder metrics snapshot"
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of metrics at a point in time
#[derive(Debug, Clone)]
pub struct MetricsSnapshot {
    pub frames_encoded: u64,
    pub bytes_encoded: u64,
    pub frames_sent: u64,
    pub bytes_sent: u64,
    pub encode_errors: u64,
    pub send_errors: u64,
    pub subjects_rejected: u64,
    pub uptime_seconds: u64,
}

/// Global metrics instance (lazy static for simplicity)
static METRICS: once_cell::sync::Lazy<Metrics> = once_cell::sync::Lazy::new(Metrics::new);

/// Get the global metrics instance
pub fn global_metrics() -> &'static Metrics {
    &METRICS
}

/// Initialize metrics collection (call once at startup)
pub fn init_metrics() {
    // Force initialization
    let _ = global_metrics();
    info!("Metrics collection initialized");
}

/// Timer for measuring operation duration
pub struct Timer {
    start: Instant,
    operation: &'static str,
}

impl Timer {
    /// Start timing an operation
    pub fn start(operation: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        debug!(
            operation = self.operation,
            duration_ms = duration.as_millis(),
            "Operation completed"
        );
    }
}
