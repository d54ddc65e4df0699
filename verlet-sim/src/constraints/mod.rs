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
//! Position constraints
//!
//! Constraints act directly on positions and express their velocity
//! response by rewriting each particle's previous position. Two kinds
//! exist:
//!
//! - **Boundaries** keep a particle inside the world's container
//! - **Contacts** keep two particles from overlapping
//!
//! Both are no-ops in the common case (inside / not touching) and only
//! pay for a square root and a division when a correction is needed.

use crate::body::Particle;
use crate::error::{Result, SimError};

mod circle;
mod contact;
mod walls;

pub use circle::CircleContainer;
pub use contact::{resolve_collision, ContactOutcome};
pub use walls::BoxContainer;

/// A region particles must stay inside
pub trait Boundary {
    /// Pull an escaping particle back inside, reflecting its inferred
    /// velocity scaled by `elasticity`
    ///
    /// Returns true if the particle was corrected.
    fn apply(&self, particle: &mut Particle, elasticity: f64) -> bool;

    /// How far the particle currently pokes outside the legal region
    /// (0.0 when inside)
    fn penetration(&self, particle: &Particle) -> f64;

    /// Check if a particle of this radius can fit inside at all
    fn admits(&self, radius: f64) -> bool;
}

/// The world's container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Container {
    /// Circular container, the general case
    Circle(CircleContainer),
    /// Four straight walls
    Box(BoxContainer),
}

impl Container {
    /// Reject a particle radius that cannot fit inside this container
    pub fn check_fits(&self, radius: f64) -> Result<()> {
        if self.admits(radius) {
            Ok(())
        } else {
            Err(SimError::InvalidGeometry(format!(
                "particle radius {} does not fit inside {:?}",
                radius, self
            )))
        }
    }
}

impl Boundary for Container {
    #[inline]
    fn apply(&self, particle: &mut Particle, elasticity: f64) -> bool {
        match self {
            Container::Circle(c) => c.apply(particle, elasticity),
            Container::Box(b) => b.apply(particle, elasticity),
        }
    }

    fn penetration(&self, particle: &Particle) -> f64 {
        match self {
            Container::Circle(c) => c.penetration(particle),
            Container::Box(b) => b.penetration(particle),
        }
    }

    fn admits(&self, radius: f64) -> bool {
        match self {
            Container::Circle(c) => c.admits(radius),
            Container::Box(b) => b.admits(radius),
        }
    }
}

impl From<CircleContainer> for Container {
    fn from(container: CircleContainer) -> Self {
        Container::Circle(container)
    }
}

impl From<BoxContainer> for Container {
    fn from(container: BoxContainer) -> Self {
        Container::Box(container)
    }
}
