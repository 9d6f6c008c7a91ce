use criterion::{black_box, criterion_group, criterion_main, Criterion};
use named_entities::{IdNamePair, ToIdNamePairs};
use std::{collections::LinkedList, time::Duration};

const ENTITY_COUNT: u32 = 10_000;

fn build_entities() -> Vec<IdNamePair<u32>> {
    (0..ENTITY_COUNT).map(|id| IdNamePair::new(id, format!("entity-{id}"))).collect()
}

fn run_exact_size_bench(c: &mut Criterion) {
    let entities = build_entities();
    c.bench_function("project 10k entities from slice", |b| b.iter(|| black_box(&entities).to_id_name_pairs()));

    let list: LinkedList<_> = build_entities().into_iter().collect();
    c.bench_function("project 10k entities from linked list", |b| b.iter(|| black_box(&list).to_id_name_pairs()));
}

fn run_unknown_size_bench(c: &mut Criterion) {
    let entities = build_entities();
    c.bench_function("project 10k entities from filter", |b| {
        b.iter(|| black_box(&entities).iter().filter(|entity| entity.id != ENTITY_COUNT).to_id_name_pairs())
    });
}

criterion_group!(
    name = projection_bench;
    config = Criterion::default().significance_level(0.1).sample_size(10).measurement_time(Duration::from_secs(2));
    targets = run_exact_size_bench, run_unknown_size_bench
);

criterion_main!(projection_bench);
