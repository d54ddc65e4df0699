// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Benchmarks for the per-frame solve
//!
//! These benchmarks measure:
//! - Full `World::step` cost as particle count grows (O(n²) pair pass)
//! - How the substep count scales the constraint work
//! - The isolated pair resolver and integration pass

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use verlet_sim::constraints::resolve_collision;
use verlet_sim::integration::{Integrator, PositionVerlet};
use verlet_sim::{Particle, SimulationConfig, Vec2, World};

// Deterministic grid fill so runs are comparable
fn settled_world(count: usize, substeps: usize) -> World {
    let config = SimulationConfig::default().with_substeps(substeps);
    let mut world = World::with_circle(Vec2::new(300.0, 300.0), 250.0, config).unwrap();
    let per_row = 16;
    for i in 0..count {
        let x = 120.0 + (i % per_row) as f64 * 22.0;
        let y = 150.0 + (i / per_row) as f64 * 22.0;
        world.add_particle(x, y, 6.0 + (i % 5) as f64).unwrap();
    }
    // Let the pile form so contacts are realistic
    for _ in 0..120 {
        world.step();
    }
    world
}

fn bench_step_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("step_scaling");

    for count in [25, 50, 100, 200] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("step", count), &count, |b, &count| {
            let mut world = settled_world(count, 8);
            b.iter(|| black_box(world.step()));
        });
    }

    group.finish();
}

fn bench_substeps(c: &mut Criterion) {
    let mut group = c.benchmark_group("substeps");

    for substeps in [1, 4, 8, 16] {
        group.bench_with_input(
            BenchmarkId::new("step_100", substeps),
            &substeps,
            |b, &substeps| {
                let mut world = settled_world(100, substeps);
                b.iter(|| black_box(world.step()));
            },
        );
    }

    group.finish();
}

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");

    group.bench_function("resolve_overlapping_pair", |b| {
        let a0 = Particle::with_velocity(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 10.0).unwrap();
        let b0 = Particle::with_velocity(Vec2::new(15.0, 2.0), Vec2::new(-1.0, 0.0), 10.0).unwrap();
        b.iter(|| {
            let (mut a, mut b) = (a0, b0);
            black_box(resolve_collision(&mut a, &mut b, black_box(0.9)))
        });
    });

    group.bench_function("resolve_separated_pair", |b| {
        let mut a = Particle::new(Vec2::new(0.0, 0.0), 10.0).unwrap();
        let mut p = Particle::new(Vec2::new(50.0, 0.0), 10.0).unwrap();
        b.iter(|| black_box(resolve_collision(&mut a, &mut p, black_box(0.9))));
    });

    group.bench_function("integrate_1000", |b| {
        let integrator = PositionVerlet::default();
        let mut particles: Vec<Particle> = (0..1000)
            .map(|i| Particle::new(Vec2::new(i as f64, 0.0), 1.0).unwrap())
            .collect();
        b.iter(|| integrator.integrate_all(black_box(&mut particles), Vec2::new(0.0, 0.5)));
    });

    group.finish();
}

criterion_group!(benches, bench_step_scaling, bench_substeps, bench_kernels);
criterion_main!(benches);
