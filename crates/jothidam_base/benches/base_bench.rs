use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jothidam_base::{Graha, Rashi, dignity_strength, nakshatra_from_longitude, rashi_from_longitude};

fn bench_lookups(c: &mut Criterion) {
    c.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(219.77)))
    });

    c.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(219.77)))
    });

    c.bench_function("dignity_strength", |b| {
        b.iter(|| dignity_strength(black_box(Graha::Buddh), black_box(Rashi::Kanya), false))
    });
}

criterion_group!(benches, bench_lookups);
criterion_main!(benches);
