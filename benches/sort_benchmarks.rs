use criterion::{black_box, criterion_group, criterion_main, Criterion};
use musicalsort::sorts::Sorted;
use musicalsort::{tone, Algorithm, MusicalSortable, ScaledTones};

pub fn criterion_benchmark(c: &mut Criterion) {
    let emitter = tone::share(tone::Silent);
    let data: Vec<u32> = (0..256u32).map(|i| (i * 97) % 256).collect();

    for algorithm in Algorithm::all() {
        if algorithm == Algorithm::Quick {
            continue;
        }
        c.bench_function(&format!("{algorithm}_sort(256)"), |b| {
            b.iter(|| {
                let mut sortable =
                    MusicalSortable::new(data.clone(), emitter.clone(), ScaledTones::default());
                match algorithm.run(&mut sortable).unwrap() {
                    Sorted::InPlace => black_box(sortable),
                    Sorted::New(sorted) => black_box(sorted),
                }
            })
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
