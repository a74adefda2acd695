//! # Error Types
//!
//! Comprehensive error handling for the packet encoding core.
//!
//! This module defines all error variants that can occur while building and
//! delivering outgoing frames, from encoding constraint violations to
//! transport failures.
//!
//! ## Error Categories
//! - **Encoding Errors**: Field overflow, oversized frames, template mismatches
//! - **Subject Errors**: Entities that are not in a sendable state
//! - **Registry Errors**: Message kinds without an opcode mapping
//! - **Transport Errors**: Closed connections and I/O failures
//!
//! All errors implement `std::error::Error` for interoperability.
//!
//! ## Example Usage
//! ```rust
//! use genesis_protocol::core::builder::FrameBuilder;
//! use genesis_protocol::error::Result;
//!
//! fn encode_greeting(opcode: u16) -> Result<usize> {
//!     let mut bldr = FrameBuilder::new(opcode);
//!     bldr.write_u16_le(0x0102);
//!     let frame = bldr.finish()?;
//!     Ok(frame.encoded_len())
//! }
//! ```

use crate::protocol::opcodes::MessageKind;
use std::io;
use thiserror::Error;

/// Error message constants to reduce allocations in error paths.
/// Static strings are borrowed, avoiding heap allocations for common error cases.
pub mod constants {
    /// Subject validity errors
    pub const ERR_CHARACTER_NOT_SPAWNED: &str = "character has no world index";
    pub const ERR_PLAYER_NOT_REGISTERED: &str = "player has no account id";

    /// Field names reported in overflow errors
    pub const FIELD_NOTICE_TEXT: &str = "notice text";
    pub const FIELD_QUEST_COUNT: &str = "quest count";
    pub const FIELD_BUFF_COUNT: &str = "buff count";
    pub const FIELD_GUILD_COUNT: &str = "guild count";
    pub const FIELD_SKILL_BAR_COUNT: &str = "skill bar count";
    pub const FIELD_GUILD_NAME: &str = "guild name";
    pub const FIELD_GUILD_MASTER: &str = "guild master";
    pub const FIELD_GUILD_MESSAGE: &str = "guild message";

    /// Transport errors
    pub const ERR_SINK_POISONED: &str = "memory sink lock poisoned";
}

// ProtocolError is the primary error type for all encoding operations
#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("field '{field}' value {value} exceeds limit of {max}")]
    FieldOverflow {
        field: &'static str,
        value: usize,
        max: usize,
    },

    #[error("frame payload too large: {0} bytes")]
    OversizedFrame(usize),

    #[error("notice template expects {expected} arguments, {provided} provided")]
    TemplateArity { expected: usize, provided: usize },

    #[error("invalid subject: {0}")]
    InvalidSubject(&'static str),

    #[error("no opcode mapping for {0}")]
    UnknownOpcode(MessageKind),

    #[error("invalid frame header")]
    InvalidHeader,

    #[error("transport error: {0}")]
    TransportError(String),

    #[error("connection closed")]
    ConnectionClosed,

    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Type alias for Results using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;
