//! # Outgoing Message Protocol
//!
//! The message catalog and everything it needs to name and number messages.
//!
//! ## Components
//! - **Opcodes**: Symbolic message kinds and the injected opcode registry
//! - **Catalog**: One encoding entry point per outgoing message
//! - **Legacy**: Byte captures from the live server, parsed into records
//!
//! Opcode numbers differ between client builds, so the crate compiles none
//! in; callers construct an [`opcodes::OpcodeTable`] for their deployment and
//! hand it to the catalog.

pub mod catalog;
pub mod legacy;
pub mod opcodes;

pub use catalog::PacketCatalog;
pub use opcodes::{MessageKind, OpcodeRegistry, OpcodeTable};
