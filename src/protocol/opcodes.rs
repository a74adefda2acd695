//! Symbolic message kinds and the opcode registry seam.
//!
//! Game code always speaks in [`MessageKind`]s; the numeric opcode a kind
//! maps to is deployment data, injected through an [`OpcodeRegistry`]. This
//! keeps client-build-specific numbers out of the codebase and lets tests
//! run against throwaway tables.

use std::collections::HashMap;
use std::fmt;
use tracing::debug;

/// Every outgoing message the catalog can encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    /// Full character sheet sent on login.
    CharacterDetails,
    /// Formatted server notice.
    Notice,
    /// Current HP, MP and SP.
    CurrentVitals,
    /// Premium point balance of the account.
    AccountPoints,
    /// World bless state.
    BlessAmount,
    /// Attack and movement speed of a target.
    AttackMovementSpeed,
    /// Accepted quests.
    QuestList,
    /// Buffs currently affecting the character.
    ActiveBuffs,
    /// Guilds of the character's faction.
    GuildList,
    /// Skills the character has learned.
    LearnedSkills,
    /// The twelve derived stats from equipment and buffs.
    ExtraStats,
    /// Layout of the skill bars.
    SkillBars,
}

impl MessageKind {
    /// All kinds, in catalog order. Useful for building complete tables.
    pub const ALL: [MessageKind; 12] = [
        MessageKind::CharacterDetails,
        MessageKind::Notice,
        MessageKind::CurrentVitals,
        MessageKind::AccountPoints,
        MessageKind::BlessAmount,
        MessageKind::AttackMovementSpeed,
        MessageKind::QuestList,
        MessageKind::ActiveBuffs,
        MessageKind::GuildList,
        MessageKind::LearnedSkills,
        MessageKind::ExtraStats,
        MessageKind::SkillBars,
    ];

    /// Wire-protocol name of the message, matching the client's conventions.
    pub fn name(self) -> &'static str {
        match self {
            MessageKind::CharacterDetails => "CHARACTER_DETAILS",
            MessageKind::Notice => "NOTICE",
            MessageKind::CurrentVitals => "CURRENT_CHARACTER_HITPOINTS",
            MessageKind::AccountPoints => "ACCOUNT_AERIA_POINTS",
            MessageKind::BlessAmount => "BLESS_AMOUNT",
            MessageKind::AttackMovementSpeed => "CHARACTER_ATTACK_MOVEMENT_SPEED",
            MessageKind::QuestList => "QUEST_LIST",
            MessageKind::ActiveBuffs => "CHARACTER_ACTIVE_BUFFS",
            MessageKind::GuildList => "GUILD_LIST",
            MessageKind::LearnedSkills => "CHARACTER_SKILLS",
            MessageKind::ExtraStats => "ADDITIONAL_CHARACTER_STATS",
            MessageKind::SkillBars => "CHARACTER_SKILL_BARS",
        }
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Maps message kinds to the numeric opcodes of a concrete client build.
pub trait OpcodeRegistry {
    /// The opcode for a kind, or `None` when the deployment has no mapping.
    fn opcode(&self, kind: MessageKind) -> Option<u16>;
}

/// Map-backed registry built from caller-supplied pairs.
#[derive(Debug, Clone, Default)]
pub struct OpcodeTable {
    map: HashMap<MessageKind, u16>,
}

impl OpcodeTable {
    /// An empty table. Every lookup fails until mappings are registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from `(kind, opcode)` pairs.
    pub fn with_mappings(pairs: impl IntoIterator<Item = (MessageKind, u16)>) -> Self {
        let mut table = Self::new();
        for (kind, opcode) in pairs {
            table.register(kind, opcode);
        }
        table
    }

    /// Register one mapping, returning the previous opcode if the kind was
    /// already mapped.
    pub fn register(&mut self, kind: MessageKind, opcode: u16) -> Option<u16> {
        let previous = self.map.insert(kind, opcode);
        debug!(kind = %kind, opcode, "registered opcode mapping");
        previous
    }

    /// Number of mapped kinds.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when no kind is mapped.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// True when every [`MessageKind`] has a mapping.
    pub fn is_complete(&self) -> bool {
        MessageKind::ALL.iter().all(|kind| self.map.contains_key(kind))
    }

    /// Kinds still missing a mapping.
    pub fn missing(&self) -> Vec<MessageKind> {
        MessageKind::ALL
            .iter()
            .copied()
            .filter(|kind| !self.map.contains_key(kind))
            .collect()
    }
}

impl OpcodeRegistry for OpcodeTable {
    fn opcode(&self, kind: MessageKind) -> Option<u16> {
        self.map.get(&kind).copied()
    }
}

impl FromIterator<(MessageKind, u16)> for OpcodeTable {
    fn from_iter<I: IntoIterator<Item = (MessageKind, u16)>>(iter: I) -> Self {
        Self::with_mappings(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_resolves_nothing() {
        let table = OpcodeTable::new();
        assert!(table.is_empty());
        assert_eq!(table.opcode(MessageKind::Notice), None);
        assert_eq!(table.missing().len(), MessageKind::ALL.len());
    }

    #[test]
    fn registered_mapping_resolves() {
        let mut table = OpcodeTable::new();
        assert_eq!(table.register(MessageKind::Notice, 0xF901), None);
        assert_eq!(table.opcode(MessageKind::Notice), Some(0xF901));
        // Re-registering reports the displaced opcode.
        assert_eq!(table.register(MessageKind::Notice, 0xF902), Some(0xF901));
    }

    #[test]
    fn completeness_tracks_all_kinds() {
        let table: OpcodeTable = MessageKind::ALL
            .iter()
            .enumerate()
            .map(|(i, &kind)| (kind, 0x0100 + i as u16))
            .collect();
        assert!(table.is_complete());
        assert!(table.missing().is_empty());
        assert_eq!(table.len(), 12);
    }

    #[test]
    fn kind_names_follow_client_conventions() {
        assert_eq!(MessageKind::CurrentVitals.name(), "CURRENT_CHARACTER_HITPOINTS");
        assert_eq!(MessageKind::SkillBars.to_string(), "CHARACTER_SKILL_BARS");
    }
}
