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
//! Circular particle with position-history state
//!
//! A particle stores where it is and where it was one integration step
//! ago. Velocity is never stored: it is always `position - previous_position`.
//! Any constraint that moves `position` therefore also changes the velocity
//! the next integration step will infer, and constraints that want a
//! specific outgoing velocity rewrite `previous_position` instead.

use crate::body::Vec2;
use crate::error::{Result, SimError};

/// A circular body
///
/// All particles have unit mass. The radius only affects geometry.
///
/// # Examples
///
/// ```
/// use verlet_sim::{Particle, Vec2};
///
/// let p = Particle::new(Vec2::new(10.0, 20.0), 5.0).unwrap();
/// assert_eq!(p.velocity(), Vec2::ZERO);
/// assert!(Particle::new(Vec2::ZERO, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    position: Vec2,
    previous_position: Vec2,
    radius: f64,
    tag: Option<u32>,
}

impl Particle {
    /// Create a particle at rest
    ///
    /// Errors with [`SimError::InvalidGeometry`] if `radius` is not a
    /// positive finite number or `position` is not finite.
    pub fn new(position: Vec2, radius: f64) -> Result<Self> {
        Self::with_velocity(position, Vec2::ZERO, radius)
    }

    /// Create a particle whose inferred velocity is `velocity`
    pub fn with_velocity(position: Vec2, velocity: Vec2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimError::InvalidGeometry(format!(
                "particle radius must be finite and > 0, got {}",
                radius
            )));
        }
        if !position.is_finite() {
            return Err(SimError::InvalidGeometry(format!(
                "particle position must be finite, got {}",
                position
            )));
        }
        if !velocity.is_finite() {
            return Err(SimError::InvalidGeometry(format!(
                "particle velocity must be finite, got {}",
                velocity
            )));
        }
        Ok(Particle {
            position,
            previous_position: position - velocity,
            radius,
            tag: None,
        })
    }

    /// Current position
    #[inline]
    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Position one integration step ago
    #[inline]
    pub fn previous_position(&self) -> Vec2 {
        self.previous_position
    }

    /// Radius (> 0, fixed for the particle's lifetime)
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Opaque caller metadata, never read by the solver
    #[inline]
    pub fn tag(&self) -> Option<u32> {
        self.tag
    }

    /// Attach opaque caller metadata
    pub fn set_tag(&mut self, tag: Option<u32>) {
        self.tag = tag;
    }

    /// Velocity inferred from the position history
    #[inline]
    pub fn velocity(&self) -> Vec2 {
        self.position - self.previous_position
    }

    /// Move the particle without touching its history
    ///
    /// The displacement shows up in the next inferred velocity.
    #[inline]
    pub fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Rewrite the history so that the inferred velocity becomes `velocity`
    #[inline]
    pub fn set_velocity(&mut self, velocity: Vec2) {
        self.previous_position = self.position - velocity;
    }

    /// Shift the current position by `delta`
    #[inline]
    pub fn translate(&mut self, delta: Vec2) {
        self.position += delta;
    }

    /// Overwrite both position and history in one go
    #[inline]
    pub(crate) fn set_state(&mut self, position: Vec2, previous_position: Vec2) {
        self.position = position;
        self.previous_position = previous_position;
    }

    /// Kinetic energy with unit mass: ½|v|²
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.velocity().length_squared()
    }

    /// Check that position and history are finite
    pub fn is_valid(&self) -> bool {
        self.position.is_finite() && self.previous_position.is_finite()
    }

    /// Check whether `point` lies strictly inside the particle's disc
    pub fn contains_point(&self, point: Vec2) -> bool {
        (self.position - point).length_squared() < self.radius * self.radius
    }
}
