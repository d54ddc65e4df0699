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
//! Circular container
//!
//! A particle of radius `r` is legal while its center stays within
//! `R - r` of the container center. An escaping particle is snapped back
//! onto that circle and its inferred velocity is mirrored across the
//! contact normal and scaled by the elasticity:
//!
//! ```text
//! n  = (p - c) / |p - c|
//! p' = c + n * (R - r)
//! v' = (v - 2(v·n)n) * e
//! p_prev' = p' - v'
//! ```
//!
//! The reflection only applies while `v·n > 0`. A particle that is past the
//! rim but already moving inward is snapped and keeps its velocity.

use super::Boundary;
use crate::body::{Particle, Vec2};
use crate::error::{Result, SimError};

/// Fixed circular boundary
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleContainer {
    center: Vec2,
    radius: f64,
}

impl CircleContainer {
    /// Create a container, rejecting non-positive or non-finite extents
    pub fn new(center: Vec2, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(SimError::InvalidGeometry(format!(
                "container radius must be finite and > 0, got {}",
                radius
            )));
        }
        if !center.is_finite() {
            return Err(SimError::InvalidGeometry(format!(
                "container center must be finite, got {}",
                center
            )));
        }
        Ok(CircleContainer { center, radius })
    }

    /// Container center
    pub fn center(&self) -> Vec2 {
        self.center
    }

    /// Container radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Rounding room past the rim that still counts as inside
    ///
    /// A snapped center rebuilt from `center + n * max_dist` can measure a
    /// few ulps beyond `max_dist`; those particles are already on the rim.
    #[inline]
    fn rim_slack(&self) -> f64 {
        let extent = self.center.x.abs().max(self.center.y.abs()) + self.radius;
        4.0 * f64::EPSILON * extent
    }
}

impl Boundary for CircleContainer {
    fn apply(&self, particle: &mut Particle, elasticity: f64) -> bool {
        // Velocity has to be read before the snap rewrites the position
        let velocity = particle.velocity();

        let offset = particle.position() - self.center;
        let dist = offset.length();
        let max_dist = self.radius - particle.radius();

        if dist <= max_dist + self.rim_slack() || dist == 0.0 {
            return false;
        }

        let normal = offset / dist;
        let position = self.center + normal * max_dist;

        // Only an outgoing particle bounces; one already heading in is just snapped
        let outgoing = if velocity.dot(normal) > 0.0 {
            velocity.reflect(normal) * elasticity
        } else {
            velocity
        };

        particle.set_state(position, position - outgoing);
        true
    }

    fn penetration(&self, particle: &Particle) -> f64 {
        let dist = particle.position().distance(self.center);
        (dist - (self.radius - particle.radius())).max(0.0)
    }

    fn admits(&self, radius: f64) -> bool {
        radius < self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn container() -> CircleContainer {
        CircleContainer::new(Vec2::new(300.0, 300.0), 250.0).unwrap()
    }

    #[test]
    fn test_invalid_radius_rejected() {
        assert!(CircleContainer::new(Vec2::ZERO, 0.0).is_err());
        assert!(CircleContainer::new(Vec2::ZERO, -5.0).is_err());
        assert!(CircleContainer::new(Vec2::ZERO, f64::NAN).is_err());
        assert!(CircleContainer::new(Vec2::new(f64::INFINITY, 0.0), 1.0).is_err());
    }

    #[test]
    fn test_inside_is_untouched() {
        let c = container();
        let mut p = Particle::with_velocity(Vec2::new(300.0, 400.0), Vec2::new(1.0, 2.0), 40.0)
            .unwrap();
        let before = p;
        assert!(!c.apply(&mut p, 0.9));
        assert_eq!(p, before);
        assert_eq!(c.penetration(&p), 0.0);
    }

    #[test]
    fn test_escape_snaps_and_reflects() {
        let c = container();
        // 215 below center, limit is 210; falling at 10 units/frame
        let mut p = Particle::with_velocity(Vec2::new(300.0, 515.0), Vec2::new(0.0, 10.0), 40.0)
            .unwrap();
        assert!(c.penetration(&p) > 0.0);

        assert!(c.apply(&mut p, 0.9));
        assert_eq!(p.position(), Vec2::new(300.0, 510.0));
        assert!((p.velocity().y + 9.0).abs() < 1e-12);
        assert_eq!(p.velocity().x, 0.0);
        assert_eq!(c.penetration(&p), 0.0);
    }

    #[test]
    fn test_reflection_keeps_tangential_direction() {
        let c = CircleContainer::new(Vec2::ZERO, 10.0).unwrap();
        let mut p = Particle::with_velocity(Vec2::new(10.0, 0.0), Vec2::new(2.0, 3.0), 1.0).unwrap();
        assert!(c.apply(&mut p, 1.0));
        assert!((p.position().x - 9.0).abs() < 1e-12);
        let v = p.velocity();
        assert!((v.x + 2.0).abs() < 1e-12);
        assert!((v.y - 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_snapped_particle_is_not_reflected_again() {
        let c = container();
        let mut rebounds = 0;
        for k in 0..2000 {
            let angle = k as f64 * 0.0031 + 0.017;
            let normal = Vec2::new(angle.cos(), angle.sin());
            let mut p = Particle::with_velocity(
                Vec2::new(300.0, 300.0) + normal * 212.0,
                normal * 3.0,
                40.0,
            )
            .unwrap();

            assert!(c.apply(&mut p, 0.9));
            let bounced = p.velocity();
            c.apply(&mut p, 0.9);

            let v = p.velocity();
            if (v - bounced).length() > 1e-9 {
                rebounds += 1;
            }
            assert!(v.dot(normal) < 0.0, "angle {}: heading out after bounce", angle);
        }
        assert_eq!(rebounds, 0);
    }

    #[test]
    fn test_inbound_particle_outside_is_only_snapped() {
        let c = container();
        // Past the limit but already moving back toward the center
        let mut p = Particle::with_velocity(Vec2::new(300.0, 520.0), Vec2::new(1.0, -4.0), 40.0)
            .unwrap();

        assert!(c.apply(&mut p, 0.9));
        assert_eq!(p.position(), Vec2::new(300.0, 510.0));
        assert!((p.velocity() - Vec2::new(1.0, -4.0)).length() < 1e-12);
    }

    #[test]
    fn test_admits() {
        let c = container();
        assert!(c.admits(40.0));
        assert!(!c.admits(250.0));
    }
}
