//! # Game State Model
//!
//! Typed snapshots of the entity state the encoders read.
//!
//! The catalog never mutates these types; they are the read-only inputs that
//! get flattened into positional frames. Persistence and game logic own the
//! values, this module only fixes their shapes.
//!
//! ## Components
//! - **Character / Player**: The sendable subjects and their validity rules
//! - **Records**: Per-entry types behind the list messages (quests, buffs,
//!   guilds, skill bars, learned skills)

pub mod character;
pub mod records;

pub use character::{
    Attributes, Character, ExtraStats, GuildMembership, Player, Position, Progression,
};
pub use records::{ActiveBuff, GuildRecord, LearnedSkill, QuestEntry, SkillBarSlot};
