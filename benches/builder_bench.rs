use bytes::BytesMut;
use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use genesis_protocol::core::builder::FrameBuilder;
use genesis_protocol::core::codec::FrameCodec;
use genesis_protocol::core::frame::Frame;
use tokio_util::codec::Encoder;

#[allow(clippy::unwrap_used)]
fn bench_frame_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_encode_decode");
    let payload_sizes = [16usize, 64, 512, 4096, 65000];

    for &size in &payload_sizes {
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_function(format!("build_{size}b"), |b| {
            b.iter_batched(
                || vec![0u8; size],
                |payload| {
                    let mut bldr = FrameBuilder::with_capacity(0x0105, payload.len());
                    bldr.write_bytes(&payload);
                    bldr.finish().unwrap()
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("encode_{size}b"), |b| {
            b.iter_batched(
                || Frame::new(0x0105, vec![0u8; size]).unwrap(),
                |frame| {
                    let mut buf = BytesMut::with_capacity(size + 16);
                    let mut codec = FrameCodec;
                    codec.encode(frame, &mut buf).unwrap();
                    buf
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_function(format!("decode_{size}b"), |b| {
            let wire = Frame::new(0x0105, vec![0u8; size]).unwrap().to_bytes();
            b.iter(|| {
                let decoded = Frame::from_bytes(&wire);
                assert!(decoded.is_ok());
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_frame_encode_decode);
criterion_main!(benches);
