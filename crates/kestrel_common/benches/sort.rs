use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, BatchSize};
use rand::{rngs::StdRng, Rng, SeedableRng};

use kestrel_common::{collections::DynArr, sort};

fn random_values(len: usize) -> Vec<u32> {
    let mut rng = StdRng::seed_from_u64(len as u64);
    (0..len).map(|_| rng.gen()).collect()
}

fn sort_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort random");
    for len in [16, 256, 4096] {
        let values = random_values(len);

        group.bench_with_input(BenchmarkId::new("DynArr", len), &values, |b, values| b.iter_batched(
            || DynArr::from_sequence(values.iter().copied()).unwrap(),
            |mut arr| { sort::sort(&mut arr); arr },
            BatchSize::SmallInput
        ));
        group.bench_with_input(BenchmarkId::new("slice::sort_unstable", len), &values, |b, values| b.iter_batched(
            || values.clone(),
            |mut vec| { vec.sort_unstable(); vec },
            BatchSize::SmallInput
        ));
    }
    group.finish();
}

fn sort_presorted(c: &mut Criterion) {
    let values: Vec<u32> = (0..4096).collect();
    c.bench_function("DynArr sort presorted(4096)", |b| b.iter_batched(
        || DynArr::from_sequence(values.iter().copied()).unwrap(),
        |mut arr| { sort::sort_by(&mut arr, |a: &u32, b: &u32| a.cmp(b)); arr },
        BatchSize::SmallInput
    ));
}

criterion_group!(sorting,
    sort_random,
    sort_presorted
);
criterion_main!(sorting);
