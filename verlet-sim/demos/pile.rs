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
//! Headless pile simulation
//!
//! Streams a diagonal line of randomly sized balls into a circular bowl,
//! then drives the frame loop the way a windowed front end would: one
//! `step` per frame, with occasional "clicks" that remove the ball under
//! the cursor or drop a new one if nothing is hit.
//!
//! # Running
//!
//! ```bash
//! cargo run --example pile --release
//!
//! # 300 balls, 16 substeps, per-frame stats
//! RUST_LOG=verlet_sim=trace cargo run --example pile --release -- --balls 300 --substeps 16
//! ```

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use verlet_sim::{SimulationConfig, Vec2, World};

/// Headless Verlet pile in a circular container
#[derive(Parser)]
#[command()]
struct Args {
    /// Balls spawned at startup
    #[arg(short, long, default_value_t = 200)]
    balls: usize,

    /// Frames to simulate
    #[arg(short, long, default_value_t = 600)]
    frames: u64,

    /// Constraint passes per frame
    #[arg(short, long, default_value_t = 8)]
    substeps: usize,

    /// Downward gravity, units per frame²
    #[arg(short, long, default_value_t = 0.5)]
    gravity: f64,

    /// Restitution in (0, 1]
    #[arg(short, long, default_value_t = 0.9)]
    elasticity: f64,

    /// RNG seed for radii and clicks
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Simulate a click every N frames (0 disables)
    #[arg(long, default_value_t = 30)]
    click_every: u64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = SimulationConfig::default()
        .with_gravity(Vec2::new(0.0, args.gravity))
        .with_elasticity(args.elasticity)
        .with_substeps(args.substeps);

    let center = Vec2::new(300.0, 300.0);
    let mut world = World::with_circle(center, 250.0, config)?;
    let mut rng = StdRng::seed_from_u64(args.seed);

    for i in 0..args.balls {
        let offset = i as f64 * 2.0;
        let radius = rng.gen_range(6.0..=20.0);
        let id = world.add_particle(300.0 + offset, 100.0 + offset, radius)?;
        world.set_tag(id, Some(i as u32));
    }
    info!("spawned {} balls", world.len());

    let start = Instant::now();
    for frame in 1..=args.frames {
        world.step();

        if args.click_every > 0 && frame % args.click_every == 0 {
            let cursor = Vec2::new(rng.gen_range(100.0..500.0), rng.gen_range(100.0..550.0));
            match world.remove_particle_at(cursor) {
                Some(id) => info!("frame {}: click at {} removed {}", frame, cursor, id),
                None => {
                    let id = world.add_particle(cursor.x, cursor.y, rng.gen_range(10.0..20.0))?;
                    info!("frame {}: click at {} added {}", frame, cursor, id);
                }
            }
        }

        if frame % 60 == 0 {
            let stats = world.last_stats();
            info!(
                "frame {}: {} balls, {} contacts, {} impulses, KE {:.2}, max overlap {:.3}",
                frame,
                stats.particles,
                stats.contacts,
                stats.impulses,
                world.kinetic_energy(),
                world.max_overlap()
            );
        }
    }

    let elapsed = start.elapsed();
    info!(
        "{} frames in {:.2?} ({:.3} ms/frame)",
        args.frames,
        elapsed,
        elapsed.as_secs_f64() * 1000.0 / args.frames.max(1) as f64
    );
    Ok(())
}
