use criterion::{criterion_group, criterion_main, Criterion};

use rand_starstar::*;

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut splitmix = SplitMix64::from_seed(0);
    c.bench_function("SplitMix64::next", move |b| b.iter(|| splitmix.next()));
    let mut xoshiro1 = Xoshiro256::from_seed(0);
    c.bench_function("Xoshiro256::next", move |b| b.iter(|| xoshiro1.next()));
    let mut xoshiro2 = Xoshiro256::from_seed(0);
    c.bench_function("Xoshiro256::real01", move |b| b.iter(|| xoshiro2.real01()));
    let mut xoshiro3 = Xoshiro256::from_seed(0);
    c.bench_function("Xoshiro256::bounded", move |b| b.iter(|| xoshiro3.bounded(1000)));
    let mut xoshiro4 = Xoshiro256::from_seed(0);
    c.bench_function("Xoshiro256::bounded_rejection", move |b| b.iter(|| xoshiro4.bounded_rejection(1000)));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
