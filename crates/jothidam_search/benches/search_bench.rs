use criterion::{Criterion, black_box, criterion_group, criterion_main};
use jothidam_search::{antardashas, mahadashas, tithi_from_elongation};

fn bench_search(c: &mut Criterion) {
    c.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(123.45)))
    });

    c.bench_function("mahadashas", |b| {
        b.iter(|| mahadashas(black_box(219.77), black_box(2_448_000.0)))
    });

    let periods = mahadashas(219.77, 2_448_000.0);
    c.bench_function("antardashas", |b| {
        b.iter(|| antardashas(black_box(&periods[3])))
    });
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
