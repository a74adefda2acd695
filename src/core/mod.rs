//! # Core Protocol Components
//!
//! Low-level frame handling, the positional field builder, and the wire codec.
//!
//! This module provides the foundation for the protocol: how frames are laid
//! out and how they move over a byte stream.
//!
//! ## Components
//! - **Frame**: Opcode-tagged binary frame with an immutable payload
//! - **Builder**: Append-only positional field writer producing frames
//! - **Codec**: Tokio codec that length-delimits frames on a byte stream
//!
//! ## Wire Format
//! ```text
//! [Length(2, LE)] [Opcode(2, LE)] [Payload(N)]
//! ```
//!
//! The length field counts the whole frame including the 4-byte header, so a
//! frame can never exceed 65,535 bytes. All multi-byte fields are
//! little-endian; the legacy client runs on little-endian x86.

pub mod builder;
pub mod codec;
pub mod frame;
