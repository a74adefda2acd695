//! The outgoing message catalog.
//!
//! One encoding entry point per message the server sends to the client. Every
//! method follows the same discipline:
//!
//! 1. Reject subjects that are not in a sendable state, before any byte is
//!    built.
//! 2. Resolve the opcode through the injected registry.
//! 3. Drive a fresh [`FrameBuilder`] through the message's frozen field
//!    sequence.
//! 4. Hand the finished frame to the caller's [`FrameSink`].
//!
//! ## Layout stability
//! The field sequences here are a contract with a client that cannot be
//! changed. Order, width and endianness of every field are pinned by the
//! layout tests and by fixtures captured from live traffic; there is exactly
//! one layout per opcode.
//!
//! ## Failure policy
//! Values that cannot be represented in their wire field fail the whole
//! message rather than being truncated. Delivery failures are reported
//! distinct from encoding failures and are never retried here.

use crate::config::EncoderConfig;
use crate::core::builder::FrameBuilder;
use crate::error::{constants, ProtocolError, Result};
use crate::model::{
    ActiveBuff, Character, GuildRecord, LearnedSkill, Player, QuestEntry, SkillBarSlot,
};
use crate::protocol::opcodes::{MessageKind, OpcodeRegistry};
use crate::transport::FrameSink;
use crate::utils::metrics::global_metrics;
use tracing::{debug, warn};

/// Experience values are stored raw but transmitted at one tenth.
const EXP_WIRE_SCALE: u32 = 10;

/// Encoder catalog bound to an opcode registry.
///
/// The catalog is stateless apart from its configuration, so one instance can
/// serve every connection; concurrent encodes share nothing and never block
/// each other.
#[derive(Debug)]
pub struct PacketCatalog<R: OpcodeRegistry> {
    registry: R,
    config: EncoderConfig,
}

impl<R: OpcodeRegistry> PacketCatalog<R> {
    /// Create a catalog with default encoder settings.
    pub fn new(registry: R) -> Self {
        Self::with_config(registry, EncoderConfig::default())
    }

    /// Create a catalog with explicit encoder settings.
    pub fn with_config(registry: R, config: EncoderConfig) -> Self {
        Self { registry, config }
    }

    /// The registry this catalog resolves opcodes through.
    pub fn registry(&self) -> &R {
        &self.registry
    }

    /// Full character sheet: attributes, points, vital maxima, direction,
    /// experience, gold, coordinates, PvP counters and guild affiliation.
    pub fn send_character_details<S: FrameSink>(
        &self,
        character: &Character,
        sink: &S,
    ) -> Result<()> {
        admit(character)?;
        let opcode = self.opcode_for(MessageKind::CharacterDetails)?;

        let attributes = &character.attributes;
        let progression = &character.progression;
        let position = &character.position;

        let mut bldr = FrameBuilder::with_capacity(opcode, self.config.initial_frame_capacity);
        bldr.write_u16_le(attributes.strength);
        bldr.write_u16_le(attributes.dexterity);
        bldr.write_u16_le(attributes.resistance);
        bldr.write_u16_le(attributes.intelligence);
        bldr.write_u16_le(attributes.wisdom);
        bldr.write_u16_le(attributes.luck);
        bldr.write_u16_le(character.stat_points);
        bldr.write_u16_le(character.skill_points);
        bldr.write_u32_le(attributes.max_hp);
        bldr.write_u32_le(attributes.max_mp);
        bldr.write_u32_le(attributes.max_sp);

        bldr.write_u16_le(position.direction);

        // The client rebuilds the experience bar from the differences of
        // these three values, all transmitted at one tenth.
        bldr.write_u32_le(progression.previous_exp / EXP_WIRE_SCALE);
        bldr.write_u32_le(progression.next_exp / EXP_WIRE_SCALE);
        bldr.write_u32_le(progression.current_exp / EXP_WIRE_SCALE);

        bldr.write_u32_le(character.gold);

        // Coordinates go out in x, height, y order.
        bldr.write_f32_le(position.x);
        bldr.write_f32_le(position.height);
        bldr.write_f32_le(position.y);

        bldr.write_u32_le(progression.kills);
        bldr.write_u32_le(progression.deaths);
        bldr.write_u32_le(progression.victories);
        bldr.write_u32_le(progression.defeats);

        // Guild flag, then the name raw: no terminator, no length prefix.
        match &character.guild {
            Some(guild) => {
                bldr.write_u8(1);
                bldr.write_bytes(guild.name.as_bytes());
            }
            None => bldr.write_u8(0),
        }

        self.deliver(MessageKind::CharacterDetails, bldr, sink)
    }

    /// Server notice with `%s` placeholders substituted from `args`.
    ///
    /// The argument count must match the placeholder count, and the
    /// substituted text must fit the one-byte length prefix; both failures
    /// reject the message without truncation.
    pub fn send_notice<S: FrameSink>(
        &self,
        character: &Character,
        template: &str,
        args: &[&str],
        sink: &S,
    ) -> Result<()> {
        admit(character)?;
        let opcode = self.opcode_for(MessageKind::Notice)?;

        let text = match format_notice(template, args) {
            Ok(text) => text,
            Err(e) => {
                global_metrics().encode_error();
                return Err(e);
            }
        };
        let limit = self.config.max_notice_bytes.min(u8::MAX as usize);
        if text.len() > limit {
            global_metrics().encode_error();
            return Err(ProtocolError::FieldOverflow {
                field: constants::FIELD_NOTICE_TEXT,
                value: text.len(),
                max: limit,
            });
        }

        let mut bldr = FrameBuilder::with_capacity(opcode, 1 + text.len());
        bldr.write_u8(text.len() as u8);
        bldr.write_bytes(text.as_bytes());

        self.deliver(MessageKind::Notice, bldr, sink)
    }

    /// Current HP, MP and SP.
    pub fn send_current_vitals<S: FrameSink>(&self, character: &Character, sink: &S) -> Result<()> {
        admit(character)?;
        let opcode = self.opcode_for(MessageKind::CurrentVitals)?;

        let attributes = &character.attributes;
        let mut bldr = FrameBuilder::with_capacity(opcode, 12);
        bldr.write_u32_le(attributes.current_hp);
        bldr.write_u32_le(attributes.current_mp);
        bldr.write_u32_le(attributes.current_sp);

        self.deliver(MessageKind::CurrentVitals, bldr, sink)
    }

    /// Premium point balance of the account.
    pub fn send_account_points<S: FrameSink>(&self, player: &Player, sink: &S) -> Result<()> {
        admit_player(player)?;
        let opcode = self.opcode_for(MessageKind::AccountPoints)?;

        let mut bldr = FrameBuilder::with_capacity(opcode, 4);
        bldr.write_u32_le(player.points);

        self.deliver(MessageKind::AccountPoints, bldr, sink)
    }

    /// World bless state, forwarded as an opaque pre-encoded payload.
    ///
    /// Bless bookkeeping lives outside this crate; whoever tracks it hands
    /// the encoded bytes over (see [`legacy::BLESS_AMOUNT`] for the capture
    /// used until then).
    ///
    /// [`legacy::BLESS_AMOUNT`]: crate::protocol::legacy::BLESS_AMOUNT
    pub fn send_bless_amount<S: FrameSink>(
        &self,
        character: &Character,
        bless: &[u8],
        sink: &S,
    ) -> Result<()> {
        admit(character)?;
        let opcode = self.opcode_for(MessageKind::BlessAmount)?;

        let mut bldr = FrameBuilder::with_capacity(opcode, bless.len());
        bldr.write_bytes(bless);

        self.deliver(MessageKind::BlessAmount, bldr, sink)
    }

    /// Attack and movement speed of `target`, addressed by world index.
    ///
    /// Both the receiving character and the target must be spawned; the
    /// target's index is part of the payload.
    pub fn send_attack_movement_speed<S: FrameSink>(
        &self,
        character: &Character,
        target: &Character,
        sink: &S,
    ) -> Result<()> {
        admit(character)?;
        admit(target)?;
        let opcode = self.opcode_for(MessageKind::AttackMovementSpeed)?;

        let mut bldr = FrameBuilder::with_capacity(opcode, 6);
        bldr.write_u32_le(target.index);
        bldr.write_u8(target.attack_speed);
        bldr.write_u8(target.movement_speed);

        self.deliver(MessageKind::AttackMovementSpeed, bldr, sink)
    }

    /// Accepted quests: count-prefixed fixed-width records.
    pub fn send_quest_list<S: FrameSink>(&self, character: &Character, sink: &S) -> Result<()> {
        admit(character)?;
        let opcode = self.opcode_for(MessageKind::QuestList)?;

        let quests = &character.quests;
        let count = count_u8(constants::FIELD_QUEST_COUNT, quests.len())?;

        let mut bldr =
            FrameBuilder::with_capacity(opcode, 1 + quests.len() * QuestEntry::ENCODED_LEN);
        bldr.write_u8(count);
        for quest in quests {
            bldr.write_u16_le(quest.id);
            bldr.write_u16_le(quest.remaining_time);
            bldr.write_bytes(&quest.tail);
        }

        self.deliver(MessageKind::QuestList, bldr, sink)
    }

    /// Buffs currently affecting the character: count-prefixed records.
    pub fn send_active_buffs<S: FrameSink>(&self, character: &Character, sink: &S) -> Result<()> {
        admit(character)?;
        let opcode = self.opcode_for(MessageKind::ActiveBuffs)?;

        let buffs = &character.buffs;
        let count = count_u8(constants::FIELD_BUFF_COUNT, buffs.len())?;

        let mut bldr =
            FrameBuilder::with_capacity(opcode, 1 + buffs.len() * ActiveBuff::ENCODED_LEN);
        bldr.write_u8(count);
        for buff in buffs {
            bldr.write_u16_le(buff.skill_id);
            bldr.write_u16_le(buff.skill_level);
            bldr.write_bytes(&buff.tail);
        }

        self.deliver(MessageKind::ActiveBuffs, bldr, sink)
    }

    /// Guilds of the character's faction: count-prefixed 120-byte records.
    ///
    /// The guild roster is world state, so the caller supplies the records.
    pub fn send_faction_guild_list<S: FrameSink>(
        &self,
        character: &Character,
        guilds: &[GuildRecord],
        sink: &S,
    ) -> Result<()> {
        admit(character)?;
        let opcode = self.opcode_for(MessageKind::GuildList)?;

        let count = count_u8(constants::FIELD_GUILD_COUNT, guilds.len())?;

        let mut bldr =
            FrameBuilder::with_capacity(opcode, 1 + guilds.len() * GuildRecord::ENCODED_LEN);
        bldr.write_u8(count);
        for guild in guilds {
            bldr.write_u32_le(guild.id);
            bldr.write_bytes(&guild.name);
            bldr.write_bytes(&guild.master);
            bldr.write_bytes(&guild.message);
            bldr.write_u32_le(guild.points);
            bldr.write_u8(guild.reserved);
        }

        self.deliver(MessageKind::GuildList, bldr, sink)
    }

    /// Skills the character has learned.
    ///
    /// There is no count byte; the client divides the remaining payload by
    /// the record width announced after the skill points.
    pub fn send_learned_skills<S: FrameSink>(&self, character: &Character, sink: &S) -> Result<()> {
        admit(character)?;
        let opcode = self.opcode_for(MessageKind::LearnedSkills)?;

        let skills = &character.skills;
        let mut bldr =
            FrameBuilder::with_capacity(opcode, 3 + skills.len() * LearnedSkill::ENCODED_LEN);
        bldr.write_u16_le(character.skill_points);
        bldr.write_u8(LearnedSkill::ENCODED_LEN as u8);
        for skill in skills {
            bldr.write_u16_le(skill.id);
            bldr.write_u8(skill.level);
            bldr.write_u8(skill.slot);
            bldr.write_u32_le(skill.cooldown);
        }

        self.deliver(MessageKind::LearnedSkills, bldr, sink)
    }

    /// The twelve derived stats, as twelve consecutive 32-bit fields.
    pub fn send_extra_stats<S: FrameSink>(&self, character: &Character, sink: &S) -> Result<()> {
        admit(character)?;
        let opcode = self.opcode_for(MessageKind::ExtraStats)?;

        let stats = &character.extra_stats;
        let mut bldr = FrameBuilder::with_capacity(opcode, 48);
        bldr.write_u32_le(stats.strength);
        bldr.write_u32_le(stats.dexterity);
        bldr.write_u32_le(stats.resistance);
        bldr.write_u32_le(stats.intelligence);
        bldr.write_u32_le(stats.wisdom);
        bldr.write_u32_le(stats.luck);
        bldr.write_u32_le(stats.min_attack);
        bldr.write_u32_le(stats.max_attack);
        bldr.write_u32_le(stats.min_magic_attack);
        bldr.write_u32_le(stats.max_magic_attack);
        bldr.write_u32_le(stats.defense);
        bldr.write_u32_le(stats.magic_resist);

        self.deliver(MessageKind::ExtraStats, bldr, sink)
    }

    /// Skill bar layout: count-prefixed nine-byte slot records.
    pub fn send_skill_bars<S: FrameSink>(&self, character: &Character, sink: &S) -> Result<()> {
        admit(character)?;
        let opcode = self.opcode_for(MessageKind::SkillBars)?;

        let slots = &character.skill_bars;
        let count = count_u8(constants::FIELD_SKILL_BAR_COUNT, slots.len())?;

        let mut bldr =
            FrameBuilder::with_capacity(opcode, 1 + slots.len() * SkillBarSlot::ENCODED_LEN);
        bldr.write_u8(count);
        for slot in slots {
            bldr.write_u32_le(slot.cooldown);
            bldr.write_u8(slot.bar);
            bldr.write_u8(slot.slot);
            bldr.write_u8(slot.kind);
            bldr.write_u16_le(slot.entry_id);
        }

        self.deliver(MessageKind::SkillBars, bldr, sink)
    }

    fn opcode_for(&self, kind: MessageKind) -> Result<u16> {
        self.registry
            .opcode(kind)
            .ok_or(ProtocolError::UnknownOpcode(kind))
    }

    /// Seal the frame, account for it, and hand it to the sink.
    fn deliver<S: FrameSink>(
        &self,
        kind: MessageKind,
        builder: FrameBuilder,
        sink: &S,
    ) -> Result<()> {
        let frame = match builder.finish() {
            Ok(frame) => frame,
            Err(e) => {
                global_metrics().encode_error();
                return Err(e);
            }
        };

        let bytes = frame.encoded_len();
        global_metrics().frame_encoded(bytes as u64);
        if bytes > self.config.warn_frame_bytes {
            warn!(kind = %kind, bytes, "outgoing frame exceeds warn threshold");
        }
        debug!(kind = %kind, opcode = frame.opcode, bytes, "encoded outgoing frame");

        match sink.send(frame) {
            Ok(()) => {
                global_metrics().frame_sent(bytes as u64);
                Ok(())
            }
            Err(e) => {
                global_metrics().send_error();
                Err(e)
            }
        }
    }
}

/// Reject unspawned characters, counting the rejection.
fn admit(character: &Character) -> Result<()> {
    character.ensure_spawned().map_err(|e| {
        global_metrics().subject_rejected();
        e
    })
}

/// Reject unregistered players, counting the rejection.
fn admit_player(player: &Player) -> Result<()> {
    player.ensure_registered().map_err(|e| {
        global_metrics().subject_rejected();
        e
    })
}

/// Narrow a record count into the one-byte wire field.
fn count_u8(field: &'static str, len: usize) -> Result<u8> {
    u8::try_from(len).map_err(|_| {
        global_metrics().encode_error();
        ProtocolError::FieldOverflow {
            field,
            value: len,
            max: u8::MAX as usize,
        }
    })
}

/// Substitute each `%s` in `template` with the next argument, in order.
fn format_notice(template: &str, args: &[&str]) -> Result<String> {
    let parts: Vec<&str> = template.split("%s").collect();
    let expected = parts.len() - 1;
    if expected != args.len() {
        return Err(ProtocolError::TemplateArity {
            expected,
            provided: args.len(),
        });
    }

    let capacity = template.len() + args.iter().map(|arg| arg.len()).sum::<usize>();
    let mut text = String::with_capacity(capacity);
    for (i, part) in parts.iter().enumerate() {
        text.push_str(part);
        if i < args.len() {
            text.push_str(args[i]);
        }
    }
    Ok(text)
}
