use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use genesis_protocol::protocol::legacy;
use genesis_protocol::protocol::{MessageKind, OpcodeTable, PacketCatalog};
use genesis_protocol::transport::MemorySink;

fn table() -> OpcodeTable {
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

#[allow(clippy::unwrap_used)]
fn bench_catalog_encode(c: &mut Criterion) {
    let catalog = PacketCatalog::new(table());
    let character = legacy::sample_character();
    let guilds = legacy::guild_list();

    let mut group = c.benchmark_group("catalog_encode");

    // Measure the payload each message produces so throughput is in
    // payload bytes per second.
    let probe = MemorySink::new();
    catalog.send_character_details(&character, &probe).unwrap();
    let details_bytes = probe.take()[0].payload.len() as u64;

    group.throughput(Throughput::Bytes(details_bytes));
    group.bench_function("character_details", |b| {
        b.iter_batched(
            MemorySink::new,
            |sink| catalog.send_character_details(&character, &sink).unwrap(),
            BatchSize::SmallInput,
        )
    });

    group.throughput(Throughput::Bytes(legacy::GUILD_LIST.len() as u64));
    group.bench_function("guild_list_6_records", |b| {
        b.iter_batched(
            MemorySink::new,
            |sink| {
                catalog
                    .send_faction_guild_list(&character, &guilds, &sink)
                    .unwrap()
            },
            BatchSize::SmallInput,
        )
    });

    group.throughput(Throughput::Bytes(legacy::SKILL_BARS.len() as u64));
    group.bench_function("skill_bars_10_slots", |b| {
        b.iter_batched(
            MemorySink::new,
            |sink| catalog.send_skill_bars(&character, &sink).unwrap(),
            BatchSize::SmallInput,
        )
    });

    let notice_text = "Realm %s restarts in %s minutes";
    group.throughput(Throughput::Bytes(notice_text.len() as u64));
    group.bench_function("notice_two_args", |b| {
        b.iter_batched(
            MemorySink::new,
            |sink| {
                catalog
                    .send_notice(&character, notice_text, &["Freya", "5"], &sink)
                    .unwrap()
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

#[allow(clippy::unwrap_used)]
fn bench_login_burst(c: &mut Criterion) {
    let catalog = PacketCatalog::new(table());
    let character = legacy::sample_character();
    let guilds = legacy::guild_list();

    let mut group = c.benchmark_group("login_burst");
    group.throughput(Throughput::Elements(10));
    group.bench_function("all_character_messages", |b| {
        b.iter_batched(
            MemorySink::new,
            |sink| {
                catalog.send_character_details(&character, &sink).unwrap();
                catalog.send_current_vitals(&character, &sink).unwrap();
                catalog
                    .send_bless_amount(&character, &legacy::BLESS_AMOUNT, &sink)
                    .unwrap();
                catalog
                    .send_attack_movement_speed(&character, &character, &sink)
                    .unwrap();
                catalog.send_quest_list(&character, &sink).unwrap();
                catalog.send_active_buffs(&character, &sink).unwrap();
                catalog
                    .send_faction_guild_list(&character, &guilds, &sink)
                    .unwrap();
                catalog.send_learned_skills(&character, &sink).unwrap();
                catalog.send_extra_stats(&character, &sink).unwrap();
                catalog.send_skill_bars(&character, &sink).unwrap();
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_catalog_encode, bench_login_burst);
criterion_main!(benches);
