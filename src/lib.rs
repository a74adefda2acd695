//! # Genesis Protocol
//!
//! Outgoing packet encoding core for the Genesis game server emulator.
//!
//! The legacy client is driven entirely by server-pushed state: attributes,
//! vitals, quest logs, guild rosters and skill bars all arrive as
//! little-endian binary frames carrying a two-byte length and a two-byte
//! opcode. This crate owns the outgoing half of that exchange: building
//! those frames, one frozen layout per opcode, and handing them to whatever
//! transport the session runs on.
//!
//! ## Components
//! - **Frame Builder**: append-only little-endian payload assembly
//! - **Message Catalog**: one encoding entry point per outgoing message
//! - **Opcode Registry**: opcode numbers injected per client build
//! - **Frame Codec**: length-delimited codec for async session writers
//! - **Legacy Captures**: live-traffic fixtures that pin every layout
//!
//! ## Quick Start
//! ```rust
//! use genesis_protocol::model::Player;
//! use genesis_protocol::protocol::{MessageKind, OpcodeTable, PacketCatalog};
//! use genesis_protocol::transport::MemorySink;
//!
//! # fn main() -> genesis_protocol::Result<()> {
//! let mut opcodes = OpcodeTable::new();
//! opcodes.register(MessageKind::AccountPoints, 0x2605);
//!
//! let catalog = PacketCatalog::new(opcodes);
//! let sink = MemorySink::new();
//! catalog.send_account_points(&Player::new(77, 1500), &sink)?;
//!
//! let frames = sink.frames();
//! assert_eq!(frames[0].opcode, 0x2605);
//! assert_eq!(frames[0].payload.as_ref(), &1500u32.to_le_bytes());
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod model;
pub mod protocol;
pub mod transport;
pub mod utils;

// Re-export the types most callers need
pub use crate::config::{EncoderConfig, ProtocolConfig};
pub use crate::core::builder::FrameBuilder;
pub use crate::core::codec::FrameCodec;
pub use crate::core::frame::Frame;
pub use crate::error::{ProtocolError, Result};
pub use crate::protocol::{MessageKind, OpcodeTable, PacketCatalog};
pub use crate::transport::{ChannelSink, FrameSink, MemorySink};
