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
//! World management and step scheduling
//!
//! The World owns every particle, the container and the configuration,
//! and runs the fixed solve order once per frame:
//!
//! ```text
//! integrate every particle
//! repeat substep_count times:
//!     resolve every unordered pair (i, j), i < j
//!     apply the boundary to every particle
//! ```
//!
//! Repeating the constraint passes is Gauss-Seidel relaxation: fixing one
//! contact can break another that was already solved, and each extra pass
//! shrinks the leftover error. The boundary pass runs last so every step
//! ends with all particles inside the container.
//!
//! `step` takes `&mut self`, so particles cannot be added or removed while
//! a step is in progress.

use std::fmt;

use log::{debug, trace, warn};

use crate::body::{pair_mut, Particle, ParticleArena, ParticleId, Vec2};
use crate::config::SimulationConfig;
use crate::constraints::{
    resolve_collision, Boundary, BoxContainer, CircleContainer, Container, ContactOutcome,
};
use crate::error::Result;
use crate::integration::{self, Integrator, PositionVerlet};

/// Read-only particle record handed to renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleView {
    /// Particle handle
    pub id: ParticleId,
    /// Horizontal position
    pub x: f64,
    /// Vertical position
    pub y: f64,
    /// Radius
    pub radius: f64,
    /// Caller metadata, if any
    pub tag: Option<u32>,
}

/// Solver activity counted over one [`World::step`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepStats {
    /// Particles integrated
    pub particles: usize,
    /// Pair tests across all substeps
    pub pair_checks: usize,
    /// Pairs found overlapping and pushed apart
    pub contacts: usize,
    /// Contacts that also received an impulse
    pub impulses: usize,
    /// Boundary corrections across all substeps
    pub boundary_corrections: usize,
}

/// The simulation world
///
/// # Examples
///
/// ```
/// use verlet_sim::{World, SimulationConfig, Vec2};
///
/// let mut world = World::with_circle(Vec2::new(300.0, 300.0), 250.0, SimulationConfig::default())?;
/// let id = world.add_particle(300.0, 100.0, 40.0)?;
///
/// world.step();
/// assert_eq!(world.particle(id).unwrap().position(), Vec2::new(300.0, 100.5));
///
/// world.remove_particle(id);
/// assert!(world.is_empty());
/// # Ok::<(), verlet_sim::SimError>(())
/// ```
pub struct World {
    container: Container,
    config: SimulationConfig,
    integrator: Box<dyn Integrator>,
    particles: ParticleArena,
    frame: u64,
    last_stats: StepStats,
}

impl World {
    /// Create an empty world
    ///
    /// Errors if the configuration fails [`SimulationConfig::validate`].
    pub fn new(container: impl Into<Container>, config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        let container = container.into();
        debug!(
            "creating world: {:?}, gravity {}, elasticity {}, {} substeps",
            container, config.gravity, config.elasticity, config.substep_count
        );
        Ok(World {
            container,
            config,
            integrator: Box::new(PositionVerlet::default()),
            particles: ParticleArena::new(),
            frame: 0,
            last_stats: StepStats::default(),
        })
    }

    /// Create a world bounded by a circle
    pub fn with_circle(center: Vec2, radius: f64, config: SimulationConfig) -> Result<Self> {
        Self::new(CircleContainer::new(center, radius)?, config)
    }

    /// Create a world bounded by four straight walls
    pub fn with_box(min: Vec2, max: Vec2, config: SimulationConfig) -> Result<Self> {
        Self::new(BoxContainer::new(min, max)?, config)
    }

    /// Replace the integration scheme
    pub fn with_integrator(mut self, integrator: Box<dyn Integrator>) -> Self {
        if let Err(warning) = integrator.validate_timestep() {
            warn!("{}", warning);
        }
        self.integrator = integrator;
        self
    }

    /// Advance the simulation by one frame
    pub fn step(&mut self) -> StepStats {
        let gravity = self.config.gravity;
        let elasticity = self.config.elasticity;
        let mut stats = StepStats {
            particles: self.particles.len(),
            ..StepStats::default()
        };

        let particles = self.particles.as_mut_slice();
        self.integrator.integrate_all(particles, gravity);

        for _ in 0..self.config.substep_count {
            solve_contacts(particles, elasticity, &mut stats);
            for particle in particles.iter_mut() {
                if self.container.apply(particle, elasticity) {
                    stats.boundary_corrections += 1;
                }
            }
        }

        self.frame += 1;
        self.last_stats = stats;
        trace!("frame {}: {:?}", self.frame, stats);

        if log::log_enabled!(log::Level::Warn) {
            if let Some((id, particle)) = self.particles.iter().find(|(_, p)| !p.is_valid()) {
                warn!(
                    "frame {}: {} has non-finite state at {}",
                    self.frame,
                    id,
                    particle.position()
                );
            }
        }

        stats
    }

    /// Add a particle at rest
    pub fn add_particle(&mut self, x: f64, y: f64, radius: f64) -> Result<ParticleId> {
        self.add_particle_with_velocity(Vec2::new(x, y), Vec2::ZERO, radius)
    }

    /// Add a particle with an initial velocity in units per frame
    pub fn add_particle_with_velocity(
        &mut self,
        position: Vec2,
        velocity: Vec2,
        radius: f64,
    ) -> Result<ParticleId> {
        match Particle::with_velocity(position, velocity, radius) {
            Ok(particle) => self.insert_particle(particle),
            Err(err) => {
                debug!("rejected particle at {}: {}", position, err);
                Err(err)
            }
        }
    }

    /// Add a pre-built particle
    ///
    /// Errors if the particle cannot fit inside the container.
    pub fn insert_particle(&mut self, particle: Particle) -> Result<ParticleId> {
        if let Err(err) = self.container.check_fits(particle.radius()) {
            debug!("rejected particle at {}: {}", particle.position(), err);
            return Err(err);
        }
        let id = self.particles.insert(particle);
        debug!(
            "added {} at {} (r = {})",
            id,
            particle.position(),
            particle.radius()
        );
        Ok(id)
    }

    /// Remove a particle
    ///
    /// Unknown or stale handles are ignored and return `None`.
    pub fn remove_particle(&mut self, id: ParticleId) -> Option<Particle> {
        let removed = self.particles.remove(id);
        if removed.is_some() {
            debug!("removed {}", id);
        }
        removed
    }

    /// Find the particle whose disc contains `point`
    ///
    /// Overlapping discs resolve to whichever comes first in solver order.
    pub fn particle_at(&self, point: Vec2) -> Option<ParticleId> {
        self.particles
            .iter()
            .find(|(_, p)| p.contains_point(point))
            .map(|(id, _)| id)
    }

    /// Remove the particle under `point`, returning its handle
    pub fn remove_particle_at(&mut self, point: Vec2) -> Option<ParticleId> {
        let id = self.particle_at(point)?;
        self.remove_particle(id).map(|_| id)
    }

    /// Attach caller metadata to a particle
    ///
    /// Returns false if the handle is not live.
    pub fn set_tag(&mut self, id: ParticleId, tag: Option<u32>) -> bool {
        match self.particles.get_mut(id) {
            Some(particle) => {
                particle.set_tag(tag);
                true
            }
            None => false,
        }
    }

    /// Look up a particle
    pub fn particle(&self, id: ParticleId) -> Option<&Particle> {
        self.particles.get(id)
    }

    /// Check if a handle is live
    pub fn contains(&self, id: ParticleId) -> bool {
        self.particles.contains(id)
    }

    /// Iterate over `(handle, particle)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &Particle)> + '_ {
        self.particles.iter()
    }

    /// Snapshot of every particle for rendering
    pub fn particles(&self) -> Vec<ParticleView> {
        self.particles
            .iter()
            .map(|(id, p)| ParticleView {
                id,
                x: p.position().x,
                y: p.position().y,
                radius: p.radius(),
                tag: p.tag(),
            })
            .collect()
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Check if the world has no particles
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Remove every particle; all handles become stale
    pub fn clear(&mut self) {
        debug!("clearing {} particles", self.particles.len());
        self.particles.clear();
    }

    /// Total kinetic energy, unit mass per particle
    pub fn kinetic_energy(&self) -> f64 {
        integration::total_kinetic_energy(self.particles.as_slice())
    }

    /// Total gravitational potential energy relative to the origin
    pub fn potential_energy(&self) -> f64 {
        integration::total_potential_energy(self.particles.as_slice(), self.config.gravity)
    }

    /// Kinetic plus potential energy
    pub fn mechanical_energy(&self) -> f64 {
        self.kinetic_energy() + self.potential_energy()
    }

    /// Deepest container violation over all particles
    pub fn max_penetration(&self) -> f64 {
        self.particles
            .as_slice()
            .iter()
            .map(|p| self.container.penetration(p))
            .fold(0.0, f64::max)
    }

    /// Deepest pairwise overlap over all particles (0.0 when none touch)
    pub fn max_overlap(&self) -> f64 {
        let particles = self.particles.as_slice();
        let mut deepest = 0.0_f64;
        for (i, a) in particles.iter().enumerate() {
            for b in &particles[i + 1..] {
                let overlap = a.radius() + b.radius() - a.position().distance(b.position());
                deepest = deepest.max(overlap);
            }
        }
        deepest
    }

    /// Frames stepped so far
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Statistics from the most recent step
    pub fn last_stats(&self) -> StepStats {
        self.last_stats
    }

    /// The configuration this world runs with
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// The container
    pub fn container(&self) -> &Container {
        &self.container
    }

    /// The active integrator
    pub fn integrator(&self) -> &dyn Integrator {
        self.integrator.as_ref()
    }
}

impl fmt::Debug for World {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("World")
            .field("container", &self.container)
            .field("config", &self.config)
            .field("integrator", &self.integrator.name())
            .field("particles", &self.particles.len())
            .field("frame", &self.frame)
            .finish()
    }
}

/// One relaxation pass over every unordered pair
fn solve_contacts(particles: &mut [Particle], elasticity: f64, stats: &mut StepStats) {
    let count = particles.len();
    for i in 0..count {
        for j in (i + 1)..count {
            let (a, b) = pair_mut(particles, i, j);
            stats.pair_checks += 1;
            match resolve_collision(a, b, elasticity) {
                ContactOutcome::Impulse => {
                    stats.contacts += 1;
                    stats.impulses += 1;
                }
                ContactOutcome::Corrected => stats.contacts += 1,
                ContactOutcome::Separated | ContactOutcome::Coincident => {}
            }
        }
    }
}
