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
//! Position (Störmer) Verlet integrator
//!
//! Position Verlet keeps no velocity at all. Each step reads the velocity
//! implied by the last two positions and extrapolates:
//!
//! ```text
//! v      = x(t) - x(t - dt)
//! x(t+dt) = x(t) + v + a*dt²
//! ```
//!
//! Because velocity is derived, a constraint that moves a particle also
//! changes its velocity. Constraints use this deliberately: to impose an
//! outgoing velocity they rewrite the stored previous position.
//!
//! # Properties
//!
//! - **Second-order accurate**: local error O(dt⁴) in position
//! - **Time-reversible** in the absence of constraints
//! - **Exact for constant acceleration** up to rounding
//!
//! # References
//!
//! - Verlet, L. (1967). Computer "Experiments" on Classical Fluids. I. Thermodynamical
//!   Properties of Lennard-Jones Molecules. Physical Review, 159(1), 98-103.
//! - Jakobsen, T. (2001). Advanced Character Physics. Game Developers Conference.

use super::Integrator;
use crate::body::{Particle, Vec2};

/// Position Verlet integrator
///
/// The default timestep is one frame, matching gravity expressed in
/// units per frame².
///
/// # Example
///
/// ```
/// use verlet_sim::integration::{PositionVerlet, Integrator};
/// use verlet_sim::{Particle, Vec2};
///
/// let integrator = PositionVerlet::default();
/// let mut p = Particle::new(Vec2::new(0.0, 0.0), 1.0).unwrap();
/// integrator.integrate(&mut p, Vec2::new(0.0, 0.5));
/// assert_eq!(p.position(), Vec2::new(0.0, 0.5));
/// assert_eq!(p.previous_position(), Vec2::ZERO);
/// ```
#[derive(Debug, Clone)]
pub struct PositionVerlet {
    timestep: f64,
}

impl PositionVerlet {
    /// Create a new position Verlet integrator with the given timestep
    ///
    /// # Panics
    ///
    /// Panics if timestep is non-positive, NaN, or infinite
    pub fn new(timestep: f64) -> Self {
        assert!(
            timestep > 0.0 && timestep.is_finite(),
            "Timestep must be positive and finite"
        );
        PositionVerlet { timestep }
    }
}

impl Default for PositionVerlet {
    fn default() -> Self {
        PositionVerlet::new(1.0)
    }
}

impl Integrator for PositionVerlet {
    fn name(&self) -> &str {
        "Position Verlet"
    }

    fn timestep(&self) -> f64 {
        self.timestep
    }

    fn set_timestep(&mut self, dt: f64) {
        assert!(
            dt > 0.0 && dt.is_finite(),
            "Timestep must be positive and finite"
        );
        self.timestep = dt;
    }

    #[inline]
    fn integrate(&self, particle: &mut Particle, gravity: Vec2) {
        let dt_sq = self.timestep * self.timestep;
        let current = particle.position();
        let velocity = particle.velocity();

        particle.set_state(current + velocity + gravity * dt_sq, current);
    }
}
