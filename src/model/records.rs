//! Record types behind the list messages.
//!
//! Each list message (quests, buffs, guilds, skill bars, learned skills) is a
//! one-byte count followed by fixed-width records. The widths are part of the
//! client contract and are exposed here as constants so encoders and tests
//! can size things without magic numbers.
//!
//! Guild records carry fixed-width text fields as raw byte arrays rather
//! than strings. The live server reuses record buffers, so bytes after the
//! NUL terminator are garbage the client never reads but the wire still
//! carries; keeping the arrays raw lets captured traffic be reproduced
//! byte-for-byte. [`GuildRecord::new`] zero-fills those fields for records
//! built from clean state.

use crate::error::{constants, ProtocolError, Result};

/// Copy text into a fixed-width NUL-terminated field, zero-filling the rest.
fn text_field<const N: usize>(field: &'static str, text: &str) -> Result<[u8; N]> {
    let bytes = text.as_bytes();
    // One byte is reserved for the terminator.
    if bytes.len() >= N {
        return Err(ProtocolError::FieldOverflow {
            field,
            value: bytes.len(),
            max: N - 1,
        });
    }
    let mut out = [0u8; N];
    out[..bytes.len()].copy_from_slice(bytes);
    Ok(out)
}

/// Read a fixed-width field back as text, stopping at the first NUL.
///
/// Captured records can hold non-UTF-8 bytes from the client's legacy code
/// page; those are replaced rather than erroring.
fn field_text(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

/// A skill the character has learned, as sent in the skill list message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LearnedSkill {
    pub id: u16,
    pub level: u8,
    /// Position in the learned-skill list.
    pub slot: u8,
    /// Remaining cooldown in client ticks.
    pub cooldown: u32,
}

impl LearnedSkill {
    /// Encoded width: id (2) + level (1) + slot (1) + cooldown (4).
    pub const ENCODED_LEN: usize = 8;
}

/// One entry of the quest list message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QuestEntry {
    pub id: u16,
    /// Remaining time for timed quests, zero when untimed.
    pub remaining_time: u16,
    /// Trailing bytes the client expects but whose meaning is unmapped.
    pub tail: [u8; Self::TAIL_LEN],
}

impl QuestEntry {
    /// Unmapped trailing bytes per record.
    pub const TAIL_LEN: usize = 3;
    /// Encoded width: id (2) + remaining time (2) + tail (3).
    pub const ENCODED_LEN: usize = 7;

    /// A quest entry with a zeroed tail.
    pub fn new(id: u16, remaining_time: u16) -> Self {
        Self {
            id,
            remaining_time,
            tail: [0; Self::TAIL_LEN],
        }
    }
}

/// One entry of the active buff list message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActiveBuff {
    /// Skill that applied the buff.
    pub skill_id: u16,
    pub skill_level: u16,
    /// Trailing bytes the client expects but whose meaning is unmapped.
    pub tail: [u8; Self::TAIL_LEN],
}

impl ActiveBuff {
    /// Unmapped trailing bytes per record.
    pub const TAIL_LEN: usize = 7;
    /// Encoded width: skill id (2) + skill level (2) + tail (7).
    pub const ENCODED_LEN: usize = 11;

    /// A buff entry with a zeroed tail.
    pub fn new(skill_id: u16, skill_level: u16) -> Self {
        Self {
            skill_id,
            skill_level,
            tail: [0; Self::TAIL_LEN],
        }
    }
}

/// One slot of the skill bar message.
///
/// A slot holds either a learned skill or an inventory item; the `kind` byte
/// tells the client which table `entry_id` indexes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SkillBarSlot {
    /// Remaining cooldown in client ticks.
    pub cooldown: u32,
    /// Which bar the slot belongs to.
    pub bar: u8,
    /// Position within the bar.
    pub slot: u8,
    /// Entry kind discriminator, see [`Self::KIND_SKILL`] and
    /// [`Self::KIND_ITEM`].
    pub kind: u8,
    pub entry_id: u16,
}

impl SkillBarSlot {
    /// Encoded width: cooldown (4) + bar (1) + slot (1) + kind (1) + entry (2).
    pub const ENCODED_LEN: usize = 9;

    /// Kind byte for slots referencing an inventory item.
    pub const KIND_ITEM: u8 = 0x00;
    /// Kind byte for slots referencing a learned skill.
    pub const KIND_SKILL: u8 = 0x64;

    /// A bar slot holding a skill, off cooldown.
    pub fn skill(bar: u8, slot: u8, skill_id: u16) -> Self {
        Self {
            cooldown: 0,
            bar,
            slot,
            kind: Self::KIND_SKILL,
            entry_id: skill_id,
        }
    }

    /// A bar slot holding an item, off cooldown.
    pub fn item(bar: u8, slot: u8, item_id: u16) -> Self {
        Self {
            cooldown: 0,
            bar,
            slot,
            kind: Self::KIND_ITEM,
            entry_id: item_id,
        }
    }
}

/// One guild of the faction guild list message.
///
/// Text fields are fixed-width raw byte arrays; see the module docs for why
/// they are not strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuildRecord {
    pub id: u32,
    pub name: [u8; Self::NAME_LEN],
    pub master: [u8; Self::MASTER_LEN],
    pub message: [u8; Self::MESSAGE_LEN],
    pub points: u32,
    /// Trailing byte of the record, always zero in observed traffic.
    pub reserved: u8,
}

impl GuildRecord {
    /// Fixed width of the guild name field, terminator included.
    pub const NAME_LEN: usize = 25;
    /// Fixed width of the guild master name field, terminator included.
    pub const MASTER_LEN: usize = 21;
    /// Fixed width of the guild message field, terminator included.
    pub const MESSAGE_LEN: usize = 65;
    /// Encoded width: id (4) + name + master + message + points (4) + reserved (1).
    pub const ENCODED_LEN: usize =
        4 + Self::NAME_LEN + Self::MASTER_LEN + Self::MESSAGE_LEN + 4 + 1;

    /// Build a record from clean state, zero-filling the text fields.
    ///
    /// Fails with a field overflow when any text does not leave room for its
    /// NUL terminator.
    pub fn new(id: u32, name: &str, master: &str, message: &str, points: u32) -> Result<Self> {
        Ok(Self {
            id,
            name: text_field(constants::FIELD_GUILD_NAME, name)?,
            master: text_field(constants::FIELD_GUILD_MASTER, master)?,
            message: text_field(constants::FIELD_GUILD_MESSAGE, message)?,
            points,
            reserved: 0,
        })
    }

    /// Guild name up to its terminator.
    pub fn name_text(&self) -> String {
        field_text(&self.name)
    }

    /// Guild master name up to its terminator.
    pub fn master_text(&self) -> String {
        field_text(&self.master)
    }

    /// Guild message up to its terminator.
    pub fn message_text(&self) -> String {
        field_text(&self.message)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn guild_record_zero_fills_text_fields() {
        let record = GuildRecord::new(7, "Serenity", "iFeed", "hello", 31).unwrap();
        assert_eq!(&record.name[..8], b"Serenity");
        assert!(record.name[8..].iter().all(|&b| b == 0));
        assert_eq!(record.name_text(), "Serenity");
        assert_eq!(record.master_text(), "iFeed");
        assert_eq!(record.message_text(), "hello");
    }

    #[test]
    fn guild_text_must_leave_room_for_terminator() {
        // 24 characters fit the 25-byte name field, 25 do not.
        assert!(GuildRecord::new(1, &"x".repeat(24), "m", "msg", 0).is_ok());
        let err = GuildRecord::new(1, &"x".repeat(25), "m", "msg", 0).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::FieldOverflow { value: 25, max: 24, .. }
        ));
    }

    #[test]
    fn record_widths_match_the_wire_contract() {
        assert_eq!(QuestEntry::ENCODED_LEN, 7);
        assert_eq!(ActiveBuff::ENCODED_LEN, 11);
        assert_eq!(SkillBarSlot::ENCODED_LEN, 9);
        assert_eq!(LearnedSkill::ENCODED_LEN, 8);
        assert_eq!(GuildRecord::ENCODED_LEN, 120);
    }

    #[test]
    fn bar_slot_constructors_set_the_kind_byte() {
        let skill = SkillBarSlot::skill(0, 2, 616);
        assert_eq!(skill.kind, SkillBarSlot::KIND_SKILL);
        let item = SkillBarSlot::item(1, 9, 13);
        assert_eq!(item.kind, SkillBarSlot::KIND_ITEM);
        assert_eq!(item.entry_id, 13);
    }

    #[test]
    fn field_text_stops_at_first_nul() {
        let mut field = [0u8; 10];
        field[..3].copy_from_slice(b"abc");
        field[4] = b'x'; // garbage after the terminator
        assert_eq!(field_text(&field), "abc");
    }
}
