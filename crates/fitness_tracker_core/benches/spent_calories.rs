use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use fitness_tracker_core::read_package;

fn bench_spent_calories(c: &mut Criterion) {
    let packages: &[(&str, &[f64])] = &[
        ("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        ("RUN", &[15000.0, 1.0, 75.0]),
        ("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ];

    c.bench_function("decode_and_summarize_batch", |b| {
        b.iter(|| {
            for &(workout_type, data) in packages {
                let workout =
                    read_package(black_box(workout_type), black_box(data)).expect("decode");
                black_box(workout.summary());
            }
        })
    });
}

criterion_group!(benches, bench_spent_calories);
criterion_main!(benches);
