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
//! # Verlet Sim
//!
//! A real-time 2D circle physics core built on position-based (Verlet)
//! integration.
//!
//! ## Features
//!
//! - **Implicit velocity**: particles store current and previous position only
//! - **Containers**: circular boundary, or four straight walls
//! - **Contacts**: pairwise overlap correction with an equal-mass elastic impulse
//! - **Substepping**: constraint passes repeated per frame for stable piles
//! - **Stable handles**: generational ids that survive other removals
//! - **Parallelization**: optional Rayon integration pass (`parallel` feature)
//!
//! The crate neither draws nor reads input. A caller owns the frame loop,
//! calls [`World::step`] once per frame and reads [`World::particles`] back
//! for rendering.
//!
//! ## Example
//!
//! ```rust
//! use verlet_sim::{World, SimulationConfig, Vec2};
//!
//! let config = SimulationConfig::default();
//! let mut world = World::with_circle(Vec2::new(300.0, 300.0), 250.0, config).unwrap();
//!
//! let ball = world.add_particle(300.0, 100.0, 40.0).unwrap();
//! for _ in 0..120 {
//!     world.step();
//! }
//!
//! let p = world.particle(ball).unwrap();
//! assert!(p.position().distance(Vec2::new(300.0, 300.0)) <= 210.0 + 1e-9);
//! ```

#![warn(missing_docs)]

/// Particle data, handles and storage
pub mod body;

/// Simulation configuration
pub mod config;

/// Boundary and contact constraints
pub mod constraints;

/// Error types
pub mod error;

/// Position-based integration
pub mod integration;

/// World and step scheduling
pub mod world;

pub use body::{Particle, ParticleId, Vec2};
pub use config::SimulationConfig;
pub use constraints::{BoxContainer, CircleContainer, Container};
pub use error::{Result, SimError};
pub use world::{ParticleView, StepStats, World};
