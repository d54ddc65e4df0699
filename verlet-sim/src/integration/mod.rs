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
//! Numerical integration for position-history particles
//!
//! Integrators advance a particle's position from its own history and a
//! constant acceleration. They never see velocity as state: whatever the
//! constraints did to `position` and `previous_position` since the last
//! frame *is* the velocity the integrator will carry forward.
//!
//! # Timestep Guidelines
//!
//! - The solver is tuned in frame units: `dt = 1` and gravity in units/frame²
//! - Stability for fast or large particles comes from substepping the
//!   constraint passes, not from shrinking `dt`
//! - A custom timestep rescales how strongly gravity acts per frame

use crate::body::{Particle, Vec2};

mod verlet;

pub use verlet::PositionVerlet;

/// Below this many particles the parallel integration pass is not worth
/// the rayon dispatch overhead.
#[cfg(feature = "parallel")]
pub const PARALLEL_THRESHOLD: usize = 1024;

/// Total kinetic energy of a set of particles (unit mass)
pub fn total_kinetic_energy(particles: &[Particle]) -> f64 {
    particles.iter().map(Particle::kinetic_energy).sum()
}

/// Total gravitational potential energy of a set of particles (unit mass)
///
/// Measured against the origin: `Σ -g·p`, so a particle lower along the
/// gravity direction has less potential energy.
pub fn total_potential_energy(particles: &[Particle], gravity: Vec2) -> f64 {
    particles.iter().map(|p| -gravity.dot(p.position())).sum()
}

/// Trait for position-based integration schemes
///
/// Implementations update a particle in place. They must leave
/// `previous_position` equal to the position the particle had on entry,
/// which is what makes the next call infer the right velocity.
pub trait Integrator: Send + Sync {
    /// Get the name of this integrator
    fn name(&self) -> &str;

    /// Get the timestep used by this integrator
    fn timestep(&self) -> f64;

    /// Set the timestep for this integrator
    ///
    /// # Panics
    ///
    /// Panics if timestep is non-positive, NaN, or infinite
    fn set_timestep(&mut self, dt: f64);

    /// Validate the timestep for stability
    ///
    /// Returns a warning if the timestep is outside the range the solver
    /// was tuned for.
    fn validate_timestep(&self) -> Result<(), String> {
        let dt = self.timestep();

        if dt <= 0.0 || !dt.is_finite() {
            return Err(format!("Invalid timestep: {}. Must be positive and finite.", dt));
        }

        if dt < 1e-6 {
            return Err(format!(
                "Warning: Timestep {} is extremely small; gravity will barely act per frame.",
                dt
            ));
        }

        if dt > 1.0 {
            return Err(format!(
                "Warning: Timestep {} exceeds one frame and may tunnel through contacts. \
                Consider raising the substep count instead.",
                dt
            ));
        }

        Ok(())
    }

    /// Advance one particle by one step under constant acceleration
    fn integrate(&self, particle: &mut Particle, gravity: Vec2);

    /// Advance every particle by one step
    ///
    /// Particles are independent during integration, so with the `parallel`
    /// feature large sets are split across the rayon pool.
    fn integrate_all(&self, particles: &mut [Particle], gravity: Vec2) {
        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            if particles.len() >= PARALLEL_THRESHOLD {
                particles
                    .par_iter_mut()
                    .for_each(|particle| self.integrate(particle, gravity));
                return;
            }
        }

        for particle in particles.iter_mut() {
            self.integrate(particle, gravity);
        }
    }
}
