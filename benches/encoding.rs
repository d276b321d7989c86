use criterion::{black_box, criterion_group, criterion_main, Criterion};
use qrmint::{encode, ECLevel, QRBuilder};

fn bench_encode_small(c: &mut Criterion) {
    c.bench_function("encode_hello_world_m", |b| {
        b.iter(|| encode(black_box("HELLO WORLD"), black_box(ECLevel::M)))
    });
}

fn bench_encode_url(c: &mut Criterion) {
    let url = "https://example.com/products/12345?ref=newsletter&utm_source=mail";
    c.bench_function("encode_url_q", |b| b.iter(|| encode(black_box(url), black_box(ECLevel::Q))));
}

fn bench_encode_largest_numeric(c: &mut Criterion) {
    let data = "1234567890".repeat(305);
    c.bench_function("encode_numeric_v40_h", |b| {
        b.iter(|| encode(black_box(&data), black_box(ECLevel::H)))
    });
}

fn bench_encode_largest_byte(c: &mut Criterion) {
    let data = "a".repeat(2953);
    c.bench_function("encode_byte_v40_l", |b| {
        b.iter(|| encode(black_box(&data), black_box(ECLevel::L)))
    });
}

fn bench_encode_reserved_region(c: &mut Criterion) {
    let data = "https://example.com/with/a/logo";
    c.bench_function("encode_reserved_centered_h", |b| {
        b.iter(|| {
            QRBuilder::new(black_box(data.as_bytes()))
                .ec_level(ECLevel::H)
                .reserve_centered(20)
                .build()
        })
    });
}

criterion_group!(
    benches,
    bench_encode_small,
    bench_encode_url,
    bench_encode_largest_numeric,
    bench_encode_largest_byte,
    bench_encode_reserved_region
);
criterion_main!(benches);
