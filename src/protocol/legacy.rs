//! Frame payloads captured from the live server.
//!
//! These blobs are the ground truth for the list-message layouts: the record
//! sets parsed out of them, re-encoded through the catalog, must reproduce
//! the captures byte-for-byte. They double as demo data until every message
//! is fed from real game state.
//!
//! The guild capture is a good illustration of why [`GuildRecord`] keeps raw
//! text fields. The live server reused record buffers, so the fixed-width
//! fields carry remnants of earlier content after the NUL terminators; those
//! remnants are on the wire and must survive a re-encode.

use crate::model::{
    ActiveBuff, Attributes, Character, ExtraStats, GuildMembership, GuildRecord, LearnedSkill,
    Position, Progression, QuestEntry, SkillBarSlot,
};
use bytes::Buf;

/// World bless state. Still sent as an opaque pass-through payload.
pub const BLESS_AMOUNT: [u8; 9] = [
    0x00, 0xC4, 0x0E, 0xFF, 0x00, 0xFF, 0x00, 0xFF, 0x00,
];

/// Two accepted quests, no timers running.
pub const QUEST_LIST: [u8; 15] = [
    0x02,
    0x49, 0x0D, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x4C, 0x0D, 0x00, 0x00, 0x00, 0x00, 0x00,
];

/// One active buff.
pub const ACTIVE_BUFFS: [u8; 12] = [
    0x01,
    0x94, 0x1B, 0x00, 0x00, 0xCA, 0x00, 0x01, 0xB2, 0x1B, 0x00, 0x00,
];

/// Six guilds of one faction, 120 bytes per record.
pub const GUILD_LIST: [u8; 721] = [
    0x06,
    0x26, 0x47, 0x00, 0x00, 0x2D, 0x52, 0x65, 0x64, 0x5F, 0x46, 0x6C, 0x61,
    0x6D, 0x65, 0x00, 0x4F, 0x66, 0x20, 0x57, 0x72, 0x61, 0x74, 0x68, 0x00,
    0x65, 0x61, 0x74, 0x68, 0x00, 0x41, 0x70, 0x70, 0x70, 0x72, 0x6F, 0x76,
    0x65, 0x2E, 0x2E, 0x00, 0x61, 0x6C, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x46, 0x45, 0x59, 0x5A, 0x00, 0x61, 0x61, 0x61, 0x61, 0x61,
    0x61, 0x61, 0x00, 0x65, 0x20, 0x50, 0x4C, 0x20, 0x69, 0x73, 0x6C, 0x61,
    0x6E, 0x64, 0x20, 0x41, 0x76, 0x61, 0x6C, 0x6F, 0x6E, 0x20, 0x3B, 0x29,
    0x29, 0x00, 0xFB, 0x20, 0x47, 0x72, 0x6F, 0x6D, 0x5F, 0x30, 0x32, 0x34,
    0x00, 0x44, 0x00, 0x79, 0x6F, 0x75, 0x20, 0x64, 0x6F, 0x2E, 0x00, 0x67,
    0x75, 0x69, 0x6C, 0x64, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00,
    0x2A, 0x47, 0x00, 0x00, 0x53, 0x65, 0x72, 0x65, 0x6E, 0x69, 0x74, 0x79,
    0x00, 0x4E, 0x48, 0x20, 0x55, 0x4E, 0x49, 0x54, 0x45, 0x44, 0x00, 0x65,
    0x6C, 0x6C, 0x00, 0x00, 0x00, 0x69, 0x46, 0x65, 0x65, 0x64, 0x00, 0x2D,
    0x2D, 0x00, 0x61, 0x00, 0x2E, 0x00, 0x00, 0x31, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x43, 0x61, 0x6C, 0x6D, 0x20, 0x42, 0x65, 0x66, 0x6F, 0x72,
    0x65, 0x20, 0x74, 0x68, 0x65, 0x20, 0x53, 0x74, 0x6F, 0x72, 0x6D, 0x00,
    0x20, 0x76, 0x69, 0x65, 0x74, 0x20, 0x6E, 0x61, 0x6D, 0x20, 0x70, 0x76,
    0x70, 0x20, 0x76, 0x61, 0x6F, 0x20, 0x64, 0x61, 0x79, 0x00, 0x70, 0x65,
    0x6F, 0x70, 0x6C, 0x65, 0x00, 0x72, 0x20, 0x6E, 0x6F, 0x20, 0x47, 0x52,
    0x42, 0x2E, 0x00, 0x6F, 0x00, 0x00, 0x00, 0x0E, 0x6C, 0xBF, 0x00, 0x00,
    0x2D, 0x47, 0x00, 0x00, 0x2D, 0x46, 0x65, 0x61, 0x72, 0x6C, 0x65, 0x73,
    0x73, 0x20, 0x6F, 0x66, 0x20, 0x48, 0x75, 0x6E, 0x67, 0x61, 0x72, 0x79,
    0x2D, 0x00, 0x73, 0x00, 0x00, 0x2D, 0x44, 0x61, 0x72, 0x69, 0x75, 0x73,
    0x2E, 0x48, 0x55, 0x4E, 0x2D, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x53, 0x7A, 0x65, 0x72, 0x65, 0x74, 0x65, 0x74, 0x65, 0x6C,
    0x20, 0x76, 0xE1, 0x72, 0x6F, 0x6D, 0x20, 0x61, 0x20, 0x4D, 0x61, 0x67,
    0x79, 0x61, 0x72, 0x6F, 0x6B, 0x61, 0x74, 0x21, 0x20, 0x28, 0x41, 0x4B,
    0x54, 0x49, 0x56, 0x20, 0x47, 0x55, 0x49, 0x4C, 0x44, 0x29, 0x00, 0x6E,
    0x20, 0x74, 0x72, 0x61, 0x64, 0x65, 0x00, 0x65, 0x6C, 0x70, 0x20, 0x3A,
    0x44, 0x00, 0x5E, 0x5E, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00,
    0x32, 0x47, 0x00, 0x00, 0x52, 0x6F, 0x6F, 0x73, 0x74, 0x65, 0x72, 0x73,
    0x20, 0x42, 0x72, 0x6F, 0x6F, 0x64, 0x00, 0x67, 0x65, 0x72, 0x73, 0x00,
    0x65, 0x61, 0x72, 0x73, 0x00, 0x52, 0x6F, 0x6F, 0x73, 0x74, 0x65, 0x72,
    0x48, 0x65, 0x61, 0x6C, 0x65, 0x72, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x57, 0x65, 0x20, 0x6C, 0x69, 0x6B, 0x65, 0x61, 0x20, 0x74,
    0x68, 0x65, 0x20, 0x72, 0x6F, 0x6F, 0x73, 0x74, 0x65, 0x72, 0x00, 0x20,
    0x67, 0x75, 0x69, 0x6C, 0x64, 0x00, 0x61, 0x64, 0x65, 0x72, 0x20, 0x74,
    0x6F, 0x20, 0x63, 0x68, 0x65, 0x63, 0x6B, 0x20, 0x6C, 0x69, 0x73, 0x74,
    0x00, 0x20, 0x35, 0x2E, 0x20, 0x68, 0x61, 0x76, 0x65, 0x20, 0x66, 0x75,
    0x6E, 0x00, 0x74, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00,
    0x34, 0x47, 0x00, 0x00, 0x46, 0x6F, 0x72, 0x54, 0x68, 0x65, 0x47, 0x72,
    0x65, 0x61, 0x74, 0x65, 0x72, 0x47, 0x6F, 0x6F, 0x64, 0x00, 0x73, 0x00,
    0x75, 0x62, 0x00, 0x6F, 0x00, 0x42, 0x6F, 0x6E, 0x64, 0x2D, 0x00, 0x65,
    0x73, 0x2D, 0x5F, 0x2D, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x45, 0x6E, 0x6A, 0x6F, 0x79, 0x00, 0x6E, 0x65, 0x20, 0x47,
    0x75, 0x69, 0x6C, 0x64, 0x20, 0x46, 0x61, 0x6C, 0x6C, 0x73, 0x2C, 0x20,
    0x41, 0x6E, 0x6F, 0x74, 0x68, 0x65, 0x72, 0x20, 0x4D, 0x75, 0x73, 0x74,
    0x20, 0x52, 0x69, 0x73, 0x65, 0x00, 0x46, 0x61, 0x6D, 0x69, 0x6C, 0x79,
    0x20, 0x2E, 0x2E, 0x2E, 0x00, 0x72, 0x73, 0x20, 0x69, 0x6E, 0x20, 0x67,
    0x75, 0x69, 0x6C, 0x64, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00,
    0x35, 0x47, 0x00, 0x00, 0x54, 0x68, 0x65, 0x2D, 0x4C, 0x65, 0x61, 0x67,
    0x65, 0x6E, 0x64, 0x61, 0x72, 0x79, 0x00, 0x69, 0x47, 0x48, 0x54, 0x53,
    0x2D, 0x2D, 0x54, 0x52, 0x00, 0x4D, 0x53, 0x2E, 0x41, 0x4E, 0x47, 0x45,
    0x4C, 0x2E, 0x2E, 0x2E, 0x2E, 0x2E, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x07, 0x68, 0x69, 0x00, 0x57, 0x65, 0x6C, 0x63, 0x6F, 0x6D, 0x65,
    0x20, 0x2A, 0x2A, 0x00, 0x6F, 0x75, 0x6C, 0x64, 0x20, 0x61, 0x70, 0x70,
    0x6C, 0x79, 0x20, 0x74, 0x6F, 0x20, 0x6F, 0x75, 0x72, 0x20, 0x6E, 0x65,
    0x77, 0x20, 0x67, 0x75, 0x69, 0x6C, 0x64, 0x20, 0x58, 0x41, 0x4E, 0x54,
    0x48, 0x20, 0x61, 0x73, 0x61, 0x70, 0x20, 0x70, 0x6C, 0x65, 0x61, 0x73,
    0x65, 0x00, 0x73, 0x00, 0x00, 0x00, 0x00, 0x1F, 0x00, 0x00, 0x00, 0x00,
];

/// Ten occupied skill bar slots: nine skills and one item.
pub const SKILL_BARS: [u8; 91] = [
    0x0A,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x64, 0xF1, 0x02,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x64, 0xF5, 0x02,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x02, 0x64, 0x68, 0x02,
    0x00, 0x00, 0x00, 0x00, 0x01, 0x09, 0x00, 0x0D, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x0A, 0x00, 0x64, 0x1B, 0x03,
    0x00, 0x00, 0x00, 0x00, 0x0A, 0x01, 0x64, 0x1B, 0x03,
    0x00, 0x00, 0x00, 0x00, 0x0A, 0x02, 0x64, 0x1B, 0x03,
    0x00, 0x00, 0x00, 0x00, 0x0B, 0x00, 0x64, 0xE8, 0x02,
    0x00, 0x00, 0x00, 0x00, 0x0B, 0x01, 0x64, 0xE8, 0x02,
    0x00, 0x00, 0x00, 0x00, 0x0B, 0x02, 0x64, 0xE8, 0x02,
];

/// Quest entries parsed from [`QUEST_LIST`].
pub fn quest_list() -> Vec<QuestEntry> {
    let mut buf = &QUEST_LIST[1..];
    let mut quests = Vec::with_capacity(QUEST_LIST[0] as usize);
    while buf.remaining() >= QuestEntry::ENCODED_LEN {
        let id = buf.get_u16_le();
        let remaining_time = buf.get_u16_le();
        let mut tail = [0u8; QuestEntry::TAIL_LEN];
        buf.copy_to_slice(&mut tail);
        quests.push(QuestEntry {
            id,
            remaining_time,
            tail,
        });
    }
    quests
}

/// Buff entries parsed from [`ACTIVE_BUFFS`].
pub fn active_buffs() -> Vec<ActiveBuff> {
    let mut buf = &ACTIVE_BUFFS[1..];
    let mut buffs = Vec::with_capacity(ACTIVE_BUFFS[0] as usize);
    while buf.remaining() >= ActiveBuff::ENCODED_LEN {
        let skill_id = buf.get_u16_le();
        let skill_level = buf.get_u16_le();
        let mut tail = [0u8; ActiveBuff::TAIL_LEN];
        buf.copy_to_slice(&mut tail);
        buffs.push(ActiveBuff {
            skill_id,
            skill_level,
            tail,
        });
    }
    buffs
}

/// Guild records parsed from [`GUILD_LIST`], raw text fields preserved.
pub fn guild_list() -> Vec<GuildRecord> {
    let mut buf = &GUILD_LIST[1..];
    let mut guilds = Vec::with_capacity(GUILD_LIST[0] as usize);
    while buf.remaining() >= GuildRecord::ENCODED_LEN {
        let id = buf.get_u32_le();
        let mut name = [0u8; GuildRecord::NAME_LEN];
        buf.copy_to_slice(&mut name);
        let mut master = [0u8; GuildRecord::MASTER_LEN];
        buf.copy_to_slice(&mut master);
        let mut message = [0u8; GuildRecord::MESSAGE_LEN];
        buf.copy_to_slice(&mut message);
        let points = buf.get_u32_le();
        let reserved = buf.get_u8();
        guilds.push(GuildRecord {
            id,
            name,
            master,
            message,
            points,
            reserved,
        });
    }
    guilds
}

/// Skill bar slots parsed from [`SKILL_BARS`].
pub fn skill_bars() -> Vec<SkillBarSlot> {
    let mut buf = &SKILL_BARS[1..];
    let mut slots = Vec::with_capacity(SKILL_BARS[0] as usize);
    while buf.remaining() >= SkillBarSlot::ENCODED_LEN {
        let cooldown = buf.get_u32_le();
        let bar = buf.get_u8();
        let slot = buf.get_u8();
        let kind = buf.get_u8();
        let entry_id = buf.get_u16_le();
        slots.push(SkillBarSlot {
            cooldown,
            bar,
            slot,
            kind,
            entry_id,
        });
    }
    slots
}

/// The starter skill set the live server granted: strength training only.
pub fn learned_skills() -> Vec<LearnedSkill> {
    vec![LearnedSkill {
        id: 610,
        level: 1,
        slot: 0,
        cooldown: 0,
    }]
}

/// A fully populated character carrying the captured state.
///
/// Values with no capture to pin them (base attributes, gold, coordinates)
/// are chosen to be plausible; everything list-shaped comes from the parsed
/// captures above.
pub fn sample_character() -> Character {
    Character {
        index: 1,
        name: String::from("Aria"),
        attributes: Attributes {
            strength: 12,
            dexterity: 11,
            resistance: 10,
            intelligence: 9,
            wisdom: 8,
            luck: 7,
            current_hp: 9,
            current_mp: 10,
            current_sp: 11,
            max_hp: 9,
            max_mp: 10,
            max_sp: 11,
        },
        stat_points: 0,
        skill_points: 1,
        position: Position {
            x: 52.0,
            y: 71.0,
            height: 3.0,
            direction: 0,
        },
        progression: Progression {
            previous_exp: 1000,
            current_exp: 1200,
            next_exp: 2500,
            kills: 0,
            deaths: 0,
            victories: 0,
            defeats: 0,
        },
        gold: 0,
        attack_speed: 9,
        movement_speed: 4,
        extra_stats: ExtraStats {
            strength: 1,
            dexterity: 2,
            resistance: 3,
            intelligence: 4,
            wisdom: 5,
            luck: 6,
            min_attack: 7,
            max_attack: 8,
            min_magic_attack: 9,
            max_magic_attack: 10,
            defense: 11,
            magic_resist: 12,
        },
        guild: Some(GuildMembership::new("Elitepvpers")),
        skills: learned_skills(),
        quests: quest_list(),
        buffs: active_buffs(),
        skill_bars: skill_bars(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn captures_parse_to_their_declared_counts() {
        assert_eq!(quest_list().len(), QUEST_LIST[0] as usize);
        assert_eq!(active_buffs().len(), ACTIVE_BUFFS[0] as usize);
        assert_eq!(guild_list().len(), GUILD_LIST[0] as usize);
        assert_eq!(skill_bars().len(), SKILL_BARS[0] as usize);
    }

    #[test]
    fn capture_sizes_are_count_plus_records() {
        assert_eq!(QUEST_LIST.len(), 1 + 2 * QuestEntry::ENCODED_LEN);
        assert_eq!(ACTIVE_BUFFS.len(), 1 + ActiveBuff::ENCODED_LEN);
        assert_eq!(GUILD_LIST.len(), 1 + 6 * GuildRecord::ENCODED_LEN);
        assert_eq!(SKILL_BARS.len(), 1 + 10 * SkillBarSlot::ENCODED_LEN);
    }

    #[test]
    fn guild_capture_decodes_to_readable_rosters() {
        let guilds = guild_list();
        assert_eq!(guilds[0].name_text(), "-Red_Flame");
        assert_eq!(guilds[1].name_text(), "Serenity");
        assert_eq!(guilds[1].master_text(), "iFeed");
        assert_eq!(guilds[1].message_text(), "Calm Before the Storm");
        assert_eq!(guilds[2].master_text(), "-Darius.HUN-");
        assert_eq!(guilds[5].message_text(), "hi");
        // Points trail every record; five of six carry the same value.
        assert_eq!(guilds[0].points, 31);
        assert_eq!(guilds[1].points, 12_545_038);
    }

    #[test]
    fn skill_bar_capture_holds_one_item_slot() {
        let slots = skill_bars();
        let items: Vec<_> = slots
            .iter()
            .filter(|s| s.kind == SkillBarSlot::KIND_ITEM)
            .collect();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].entry_id, 13);
        assert_eq!(items[0].bar, 1);
        assert_eq!(items[0].slot, 9);
    }

    #[test]
    fn sample_character_is_sendable() {
        let character = sample_character();
        assert!(character.ensure_spawned().is_ok());
        assert_eq!(character.skills.len(), 1);
        assert_eq!(character.quests.len(), 2);
        assert_eq!(character.skill_bars.len(), 10);
    }
}
