//! Sendable subjects: characters in the world and account-level players.
//!
//! A character only becomes sendable once the world has assigned it a
//! non-zero index; until then every encoder rejects it before any byte is
//! built. The same rule applies to players and their account id.

use crate::error::{constants, ProtocolError, Result};
use crate::model::records::{ActiveBuff, LearnedSkill, QuestEntry, SkillBarSlot};

/// Base attributes plus the vital pools driven by them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    pub strength: u16,
    pub dexterity: u16,
    pub resistance: u16,
    pub intelligence: u16,
    pub wisdom: u16,
    pub luck: u16,

    pub current_hp: u32,
    pub current_mp: u32,
    pub current_sp: u32,
    pub max_hp: u32,
    pub max_mp: u32,
    pub max_sp: u32,
}

/// World position. Height is the vertical axis; the client receives the
/// coordinates in x, height, y order.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub height: f32,
    /// Facing direction in client units.
    pub direction: u16,
}

/// Experience and PvP progression counters.
///
/// Experience values are stored raw; the wire carries them divided by ten
/// and the client reconstructs progress bars from the differences.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Progression {
    pub previous_exp: u32,
    pub current_exp: u32,
    pub next_exp: u32,

    pub kills: u32,
    pub deaths: u32,
    pub victories: u32,
    pub defeats: u32,
}

/// The twelve derived stats computed from equipment and active buffs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtraStats {
    pub strength: u32,
    pub dexterity: u32,
    pub resistance: u32,
    pub intelligence: u32,
    pub wisdom: u32,
    pub luck: u32,
    pub min_attack: u32,
    pub max_attack: u32,
    pub min_magic_attack: u32,
    pub max_magic_attack: u32,
    pub defense: u32,
    pub magic_resist: u32,
}

/// Guild affiliation as shown in the character details message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuildMembership {
    /// Display name, sent raw with no terminator and no length prefix.
    pub name: String,
}

impl GuildMembership {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A character as the encoders see it.
///
/// `Character::default()` produces an unspawned character (index zero) that
/// every encoder rejects; tests rely on that.
#[derive(Debug, Clone, Default)]
pub struct Character {
    /// World index assigned on spawn. Zero means not in the world.
    pub index: u32,
    pub name: String,

    pub attributes: Attributes,
    pub stat_points: u16,
    pub skill_points: u16,
    pub position: Position,
    pub progression: Progression,
    pub gold: u32,

    pub attack_speed: u8,
    pub movement_speed: u8,
    pub extra_stats: ExtraStats,

    pub guild: Option<GuildMembership>,
    pub skills: Vec<LearnedSkill>,
    pub quests: Vec<QuestEntry>,
    pub buffs: Vec<ActiveBuff>,
    pub skill_bars: Vec<SkillBarSlot>,
}

impl Character {
    /// Reject characters that have not been spawned into the world yet.
    pub fn ensure_spawned(&self) -> Result<()> {
        if self.index == 0 {
            return Err(ProtocolError::InvalidSubject(
                constants::ERR_CHARACTER_NOT_SPAWNED,
            ));
        }
        Ok(())
    }
}

/// Account-level player, the subject of the account points message.
#[derive(Debug, Clone, Default)]
pub struct Player {
    /// Account id. Zero means not registered.
    pub id: u32,
    /// Premium point balance.
    pub points: u32,
}

impl Player {
    pub fn new(id: u32, points: u32) -> Self {
        Self { id, points }
    }

    /// Reject players without a registered account id.
    pub fn ensure_registered(&self) -> Result<()> {
        if self.id == 0 {
            return Err(ProtocolError::InvalidSubject(
                constants::ERR_PLAYER_NOT_REGISTERED,
            ));
        }
        Ok(())
    }
}
