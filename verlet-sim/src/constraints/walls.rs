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
//! Axis-aligned box of four straight walls
//!
//! Each wall has a fixed axis-aligned normal, so the reflection reduces to
//! flipping and damping one velocity component. The tangential component
//! passes through unchanged.

use super::Boundary;
use crate::body::{Particle, Vec2};
use crate::error::{Result, SimError};

/// Rectangular boundary spanning `min..max`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxContainer {
    min: Vec2,
    max: Vec2,
}

impl BoxContainer {
    /// Create a box, rejecting empty or non-finite extents
    pub fn new(min: Vec2, max: Vec2) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(SimError::InvalidGeometry(format!(
                "box corners must be finite, got {} and {}",
                min, max
            )));
        }
        if max.x <= min.x || max.y <= min.y {
            return Err(SimError::InvalidGeometry(format!(
                "box max {} must exceed min {} on both axes",
                max, min
            )));
        }
        Ok(BoxContainer { min, max })
    }

    /// Box anchored at the origin with the given size, like a window surface
    pub fn from_size(width: f64, height: f64) -> Result<Self> {
        Self::new(Vec2::ZERO, Vec2::new(width, height))
    }

    /// Lower corner
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Upper corner
    pub fn max(&self) -> Vec2 {
        self.max
    }
}

impl Boundary for BoxContainer {
    fn apply(&self, particle: &mut Particle, elasticity: f64) -> bool {
        let velocity = particle.velocity();
        let radius = particle.radius();
        let mut position = particle.position();
        let mut previous = particle.previous_position();
        let mut corrected = false;

        if position.x < self.min.x + radius {
            position.x = self.min.x + radius;
            previous.x = position.x + velocity.x * elasticity;
            corrected = true;
        }
        if position.x > self.max.x - radius {
            position.x = self.max.x - radius;
            previous.x = position.x + velocity.x * elasticity;
            corrected = true;
        }
        if position.y < self.min.y + radius {
            position.y = self.min.y + radius;
            previous.y = position.y + velocity.y * elasticity;
            corrected = true;
        }
        if position.y > self.max.y - radius {
            position.y = self.max.y - radius;
            previous.y = position.y + velocity.y * elasticity;
            corrected = true;
        }

        if corrected {
            particle.set_state(position, previous);
        }
        corrected
    }

    fn penetration(&self, particle: &Particle) -> f64 {
        let p = particle.position();
        let r = particle.radius();
        [
            self.min.x + r - p.x,
            p.x - (self.max.x - r),
            self.min.y + r - p.y,
            p.y - (self.max.y - r),
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }

    fn admits(&self, radius: f64) -> bool {
        2.0 * radius <= self.max.x - self.min.x && 2.0 * radius <= self.max.y - self.min.y
    }
}
