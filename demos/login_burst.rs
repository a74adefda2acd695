//! Example: Encoding the Character Login Burst
//!
//! This example walks through the full set of messages a world server sends
//! while a character enters the game: building the opcode table, encoding
//! each message, and draining the frames through a writer task onto a wire.
//!
//! Run with: `cargo run --example login_burst`

#![allow(clippy::uninlined_format_args)]

use futures::StreamExt;
use genesis_protocol::config::ProtocolConfig;
use genesis_protocol::core::codec::FrameCodec;
use genesis_protocol::protocol::legacy;
use genesis_protocol::protocol::{MessageKind, OpcodeTable, PacketCatalog};
use genesis_protocol::transport::{write_frames, ChannelSink, MemorySink};
use genesis_protocol::utils::logging;
use genesis_protocol::utils::metrics::{global_metrics, init_metrics};
use tokio_util::codec::FramedRead;

// Opcode numbers for one particular client build; other builds renumber
// these, which is exactly why they are injected instead of compiled in.
fn build_table() -> OpcodeTable {
    OpcodeTable::with_mappings([
        (MessageKind::CharacterDetails, 0x0105),
        (MessageKind::Notice, 0x0F00),
        (MessageKind::CurrentVitals, 0x0503),
        (MessageKind::AccountPoints, 0x2605),
        (MessageKind::BlessAmount, 0x0216),
        (MessageKind::AttackMovementSpeed, 0x0520),
        (MessageKind::QuestList, 0x0910),
        (MessageKind::ActiveBuffs, 0x0260),
        (MessageKind::GuildList, 0x0721),
        (MessageKind::LearnedSkills, 0x0401),
        (MessageKind::ExtraStats, 0x0526),
        (MessageKind::SkillBars, 0x0428),
    ])
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ProtocolConfig::default();
    logging::init(&config.logging);
    init_metrics();

    println!("=== Character Login Burst Demo ===\n");

    // 1. Opcode registry
    println!("1. OPCODE TABLE");
    let table = build_table();
    println!("   - Mappings registered: {}", table.len());
    println!("   - Complete: {}", table.is_complete());
    let catalog = PacketCatalog::new(table);
    println!();

    // 2. The character about to spawn
    let character = legacy::sample_character();
    println!("2. CHARACTER");
    println!("   - Name: {}", character.name);
    println!("   - World index: {}", character.index);
    println!(
        "   - Position: ({:.1}, {:.1}) at height {:.1}",
        character.position.x, character.position.y, character.position.height
    );
    println!(
        "   - Quests: {} | Buffs: {} | Skill bar slots: {}",
        character.quests.len(),
        character.buffs.len(),
        character.skill_bars.len()
    );
    println!();

    // 3. Encode one message and inspect the payload
    println!("3. CHARACTER DETAILS PAYLOAD");
    let probe = MemorySink::new();
    catalog.send_character_details(&character, &probe)?;
    let frames = probe.take();
    let payload = frames[0].payload.as_ref();
    println!("   - Opcode: 0x{:04X}", frames[0].opcode);
    println!("   - Payload size: {} bytes", payload.len());
    println!("   - First bytes: {:02X?}", &payload[..payload.len().min(16)]);
    println!(
        "   - Guild flag at offset 74: {} ({})",
        payload[74],
        if payload[74] == 1 { "in a guild" } else { "guildless" }
    );
    println!();

    // 4. Notice formatting
    println!("4. NOTICE SUBSTITUTION");
    let notice_sink = MemorySink::new();
    catalog.send_notice(
        &character,
        "Welcome back %s, the realm restarts in %s minutes",
        &[&character.name, "30"],
        &notice_sink,
    )?;
    let frames = notice_sink.take();
    let payload = frames[0].payload.as_ref();
    println!("   - Length prefix: {}", payload[0]);
    println!("   - Text: {}", String::from_utf8_lossy(&payload[1..]));
    println!();

    // 5. The full burst through a writer task
    println!("5. FULL BURST OVER THE WIRE");
    let (sink, rx) = ChannelSink::new();
    let (client, server) = tokio::io::duplex(64 * 1024);
    let writer = tokio::spawn(write_frames(rx, server));

    catalog.send_character_details(&character, &sink)?;
    catalog.send_current_vitals(&character, &sink)?;
    catalog.send_bless_amount(&character, &legacy::BLESS_AMOUNT, &sink)?;
    catalog.send_attack_movement_speed(&character, &character, &sink)?;
    catalog.send_quest_list(&character, &sink)?;
    catalog.send_active_buffs(&character, &sink)?;
    catalog.send_faction_guild_list(&character, &legacy::guild_list(), &sink)?;
    catalog.send_learned_skills(&character, &sink)?;
    catalog.send_extra_stats(&character, &sink)?;
    catalog.send_skill_bars(&character, &sink)?;
    drop(sink);

    let written = writer.await??;
    println!("   - Frames written: {}", written);

    let mut framed = FramedRead::new(client, FrameCodec);
    let mut total_bytes = 0usize;
    while let Some(frame) = framed.next().await {
        let frame = frame?;
        total_bytes += frame.encoded_len();
        println!(
            "   - 0x{:04X}: {:3} byte payload",
            frame.opcode,
            frame.payload.len()
        );
    }
    println!("   - Total on the wire: {} bytes", total_bytes);
    println!();

    // 6. Metrics
    println!("6. METRICS");
    let snapshot = global_metrics().snapshot();
    println!("   - Frames encoded: {}", snapshot.frames_encoded);
    println!("   - Bytes encoded: {}", snapshot.bytes_encoded);
    println!("   - Frames sent: {}", snapshot.frames_sent);
    println!("   - Encode errors: {}", snapshot.encode_errors);
    global_metrics().log_metrics();

    Ok(())
}
