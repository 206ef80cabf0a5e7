//! Criterion micro-benchmarks for train movement.

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use gridrail_test_utils::fixtures::{self, NX};
use gridrail_track::{SwitchChoice, TrackGraph};
use gridrail_train::{Car, PlacementTier, Train, TrainConfig, TrainStart};
use std::hint::black_box;

fn train_on(graph: &mut TrackGraph, pos: &[i32], cars: usize, tier: PlacementTier) -> Train<Car> {
    let start = TrainStart {
        tile: graph.tile_at(pos).unwrap(),
        from_dir: NX,
        offset: 0.5,
    };
    let config = TrainConfig {
        tier,
        ..TrainConfig::default()
    };
    Train::new(graph, vec![Car::new(); cars], &config, start).unwrap()
}

/// Benchmark: advance a 3-car train 100 steps of 0.37 along a long line.
fn bench_move_line(c: &mut Criterion) {
    c.bench_function("move_line_3car_100steps", |b| {
        b.iter_batched(
            || {
                let mut g = fixtures::straight_line(3, 200);
                let train = train_on(&mut g, &[10, 0, 0], 3, PlacementTier::SquarePositions);
                (g, train)
            },
            |(mut g, mut train)| {
                for _ in 0..100 {
                    black_box(train.move_forward(&mut g, 0.37, SwitchChoice::First));
                }
            },
            BatchSize::SmallInput,
        );
    });
}

/// Benchmark: run an 8-car train round a curved 4-D oval, once per
/// placement tier.
fn bench_move_oval_tiers(c: &mut Criterion) {
    for (name, tier) in [
        ("move_oval_square_positions", PlacementTier::SquarePositions),
        ("move_oval_round_positions", PlacementTier::RoundPositions),
        ("move_oval_round_oriented", PlacementTier::RoundOriented),
    ] {
        let mut g = fixtures::oval(4, 10);
        let mut train = train_on(&mut g, &[1, 0, 0, 0], 8, tier);

        c.bench_function(name, |b| {
            b.iter(|| {
                black_box(train.move_forward(&mut g, 0.25, SwitchChoice::First));
            });
        });
    }
}

criterion_group!(benches, bench_move_line, bench_move_oval_tiers);
criterion_main!(benches);
