//! Particle bodies and their storage
//!
//! This module provides the data side of the simulation:
//! - `Vec2` math
//! - `Particle` with position-history state
//! - Generational `ParticleId` handles
//! - `ParticleArena`, the dense store the solver iterates

mod arena;
mod handle;
mod particle;
mod vec2;

pub use arena::ParticleArena;
pub(crate) use arena::pair_mut;
pub use handle::ParticleId;
pub use particle::Particle;
pub use vec2::Vec2;
