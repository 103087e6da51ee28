use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use retroshelf_core::catalog::{GameRecord, sample_records};
use retroshelf_core::filter::{self, FilterCriteria, Tab};

fn large_catalog() -> Vec<GameRecord> {
    let samples = sample_records();
    (0..2_000)
        .map(|i| {
            let mut record = samples[i % samples.len()].clone();
            record.id = i.to_string();
            record
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let records = large_catalog();

    let mut criteria = FilterCriteria::for_console("Nintendo");
    c.bench_function("filter nintendo all", |b| {
        b.iter(|| filter::filter(black_box(&records), black_box(&criteria)).len())
    });

    criteria.search = "princess".to_string();
    criteria.tab = Tab::Favorites;
    c.bench_function("filter search favorites", |b| {
        b.iter(|| filter::filter(black_box(&records), black_box(&criteria)).len())
    });

    c.bench_function("genres", |b| b.iter(|| filter::genres(black_box(&records)).len()));
}

criterion_group!(benches, bench_filter);
criterion_main!(benches);
