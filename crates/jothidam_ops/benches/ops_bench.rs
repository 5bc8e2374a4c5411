use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jothidam_base::{Nakshatra, Rashi};
use jothidam_ops::{MatchMode, Partner, match_partners};

fn bench_ops(c: &mut Criterion) {
    let bride = Partner::new(Nakshatra::Rohini, Rashi::Vrishabha);
    let groom = Partner::new(Nakshatra::Hasta, Rashi::Kanya);

    c.bench_function("match_partners_ten", |b| {
        b.iter(|| match_partners(black_box(&bride), black_box(&groom), MatchMode::Ten))
    });

    c.bench_function("match_partners_fourteen", |b| {
        b.iter(|| match_partners(black_box(&bride), black_box(&groom), MatchMode::Fourteen))
    });
}

criterion_group!(benches, bench_ops);
criterion_main!(benches);
