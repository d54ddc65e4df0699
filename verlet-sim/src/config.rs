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
//! Simulation configuration
//!
//! Gravity, elasticity and the substep count are plain values handed to
//! [`World::new`](crate::World::new), not compile-time constants.
//! Units are per-frame: gravity is the displacement added per frame²,
//! since the integrator runs with a timestep of one frame.

use crate::body::Vec2;
use crate::error::{Result, SimError};

/// Default gravity: half a unit per frame², pointing toward increasing y
pub const DEFAULT_GRAVITY: Vec2 = Vec2::new(0.0, 0.5);

/// Default restitution for boundary and particle contacts
pub const DEFAULT_ELASTICITY: f64 = 0.9;

/// Default number of constraint relaxation passes per step
pub const DEFAULT_SUBSTEPS: usize = 8;

/// Configuration for a [`World`](crate::World)
///
/// # Examples
///
/// ```
/// use verlet_sim::{SimulationConfig, Vec2};
///
/// let config = SimulationConfig::default()
///     .with_gravity(Vec2::new(0.0, 0.25))
///     .with_substeps(4);
/// assert!(config.validate().is_ok());
/// assert!(config.with_elasticity(1.5).validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Constant acceleration applied to every particle
    pub gravity: Vec2,
    /// Restitution in `(0, 1]`; 1.0 loses no energy
    pub elasticity: f64,
    /// Relaxation passes per step (>= 1)
    pub substep_count: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            gravity: DEFAULT_GRAVITY,
            elasticity: DEFAULT_ELASTICITY,
            substep_count: DEFAULT_SUBSTEPS,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration with explicit values
    pub fn new(gravity: Vec2, elasticity: f64, substep_count: usize) -> Self {
        SimulationConfig {
            gravity,
            elasticity,
            substep_count,
        }
    }

    /// Set gravity
    pub fn with_gravity(mut self, gravity: Vec2) -> Self {
        self.gravity = gravity;
        self
    }

    /// Set elasticity
    pub fn with_elasticity(mut self, elasticity: f64) -> Self {
        self.elasticity = elasticity;
        self
    }

    /// Set the number of substeps
    pub fn with_substeps(mut self, substep_count: usize) -> Self {
        self.substep_count = substep_count;
        self
    }

    /// Check every field against its accepted range
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(SimError::InvalidConfig(format!(
                "gravity must be finite, got {}",
                self.gravity
            )));
        }
        if !(self.elasticity > 0.0 && self.elasticity <= 1.0) {
            return Err(SimError::InvalidConfig(format!(
                "elasticity must be in (0, 1], got {}",
                self.elasticity
            )));
        }
        if self.substep_count == 0 {
            return Err(SimError::InvalidConfig(
                "substep_count must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}
