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
//! Single ball bouncing in a bowl or a box
//!
//! Prints the ball's height above the floor each time it reaches an apex,
//! showing the rebound shrink by the elasticity squared per bounce.
//!
//! ```bash
//! cargo run --example bounce
//! cargo run --example bounce -- --walls
//! ```

use clap::Parser;
use log::info;
use verlet_sim::{SimulationConfig, Vec2, World};

/// Single bouncing ball
#[derive(Parser)]
#[command()]
struct Args {
    /// Use four straight walls instead of the circular container
    #[arg(long)]
    walls: bool,

    /// Frames to simulate
    #[arg(short, long, default_value_t = 1200)]
    frames: u64,

    /// Restitution in (0, 1]
    #[arg(short, long, default_value_t = 0.9)]
    elasticity: f64,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let config = SimulationConfig::default().with_elasticity(args.elasticity);
    let radius = 40.0;

    let (mut world, floor) = if args.walls {
        let world = World::with_box(Vec2::ZERO, Vec2::new(600.0, 600.0), config)?;
        (world, 600.0 - radius)
    } else {
        let world = World::with_circle(Vec2::new(300.0, 300.0), 250.0, config)?;
        (world, 300.0 + 250.0 - radius)
    };
    let ball = world.add_particle(300.0, 100.0, radius)?;

    let mut rising = false;
    for frame in 1..=args.frames {
        world.step();
        let Some(p) = world.particle(ball) else {
            break;
        };
        let vy = p.velocity().y;

        if rising && vy >= 0.0 {
            info!("frame {}: apex {:.2} above floor", frame, floor - p.position().y);
        }
        rising = vy < 0.0;
    }
    Ok(())
}
