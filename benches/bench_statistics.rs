use criterion::{black_box, criterion_group, criterion_main, Criterion};
use steady_ea::{
    genome::BitString,
    individual::Individual,
    rng::RandomNumberGenerator,
    statistics::{diversity, unique_individuals},
};

fn population(size: usize, len: usize) -> Vec<Individual> {
    let mut rng = RandomNumberGenerator::from_seed(1);
    (0..size)
        .map(|_| Individual::new(BitString::random(len, &mut rng)))
        .collect()
}

fn bench_diversity(c: &mut Criterion) {
    let mut group = c.benchmark_group("diversity");
    for size in [10, 100, 500].iter() {
        let population = population(*size, 50);
        group.bench_function(format!("diversity_{}", size), |b| {
            b.iter(|| diversity(black_box(&population)))
        });
    }
    group.finish();
}

fn bench_unique(c: &mut Criterion) {
    let mut group = c.benchmark_group("unique_individuals");
    for size in [10, 100, 500].iter() {
        let population = population(*size, 50);
        group.bench_function(format!("unique_{}", size), |b| {
            b.iter(|| unique_individuals(black_box(&population)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_diversity, bench_unique);
criterion_main!(benches);
