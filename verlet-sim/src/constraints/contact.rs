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
//! Circle-circle contact resolution
//!
//! Overlapping pairs are first pushed apart along the contact normal, half
//! the overlap each. Velocities are then inferred from the *corrected*
//! positions, and if the pair is still closing, an equal-mass elastic
//! impulse is applied:
//!
//! ```text
//! n   = (b - a) / |b - a|
//! v_n = (v_b - v_a)·n
//! j   = -(1 + e) * v_n / 2
//! v_a -= j n,  v_b += j n
//! ```
//!
//! Reading velocity after the push means the push itself counts as
//! separating motion. That coupling is part of the solver's behavior.

use crate::body::Particle;

/// What [`resolve_collision`] did to a pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactOutcome {
    /// Not touching; both particles untouched
    Separated,
    /// Centers coincide so no normal exists; both particles untouched
    Coincident,
    /// Overlap removed, pair already separating, no impulse
    Corrected,
    /// Overlap removed and an impulse applied along the normal
    Impulse,
}

impl ContactOutcome {
    /// Check if the resolver changed either particle
    pub fn is_contact(self) -> bool {
        matches!(self, ContactOutcome::Corrected | ContactOutcome::Impulse)
    }
}

/// Resolve overlap between two particles in place
///
/// Radius shapes the geometry (overlap depth, normal) but all particles
/// weigh the same, so the correction and impulse are split evenly.
///
/// # Example
///
/// ```
/// use verlet_sim::constraints::{resolve_collision, ContactOutcome};
/// use verlet_sim::{Particle, Vec2};
///
/// let mut a = Particle::new(Vec2::new(0.0, 0.0), 10.0).unwrap();
/// let mut b = Particle::new(Vec2::new(10.0, 0.0), 10.0).unwrap();
/// let outcome = resolve_collision(&mut a, &mut b, 0.9);
///
/// assert_eq!(outcome, ContactOutcome::Corrected);
/// assert_eq!(a.position(), Vec2::new(-5.0, 0.0));
/// assert_eq!(b.position(), Vec2::new(15.0, 0.0));
/// ```
pub fn resolve_collision(a: &mut Particle, b: &mut Particle, elasticity: f64) -> ContactOutcome {
    let delta = b.position() - a.position();
    let dist = delta.length();
    let min_dist = a.radius() + b.radius();

    if dist >= min_dist {
        return ContactOutcome::Separated;
    }
    if dist == 0.0 {
        return ContactOutcome::Coincident;
    }

    let normal = delta / dist;
    let correction = normal * ((min_dist - dist) * 0.5);
    a.translate(-correction);
    b.translate(correction);

    let va = a.velocity();
    let vb = b.velocity();
    let vel_along_normal = (vb - va).dot(normal);

    if vel_along_normal >= 0.0 {
        return ContactOutcome::Corrected;
    }

    let impulse = normal * (-(1.0 + elasticity) * vel_along_normal * 0.5);
    a.set_velocity(va - impulse);
    b.set_velocity(vb + impulse);

    ContactOutcome::Impulse
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::Vec2;

    #[test]
    fn test_separated_pair_untouched() {
        let mut a = Particle::with_velocity(Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), 5.0).unwrap();
        let mut b = Particle::with_velocity(Vec2::new(10.0, 0.0), Vec2::new(-1.0, 0.0), 5.0).unwrap();
        let (a0, b0) = (a, b);

        // Exactly touching counts as separated
        assert_eq!(resolve_collision(&mut a, &mut b, 0.9), ContactOutcome::Separated);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_coincident_centers_skipped() {
        let mut a = Particle::new(Vec2::new(3.0, 3.0), 5.0).unwrap();
        let mut b = Particle::new(Vec2::new(3.0, 3.0), 2.0).unwrap();
        let (a0, b0) = (a, b);

        assert_eq!(resolve_collision(&mut a, &mut b, 0.9), ContactOutcome::Coincident);
        assert_eq!(a, a0);
        assert_eq!(b, b0);
    }

    #[test]
    fn test_resting_overlap_only_corrects_position() {
        let mut a = Particle::new(Vec2::new(0.0, 0.0), 10.0).unwrap();
        let mut b = Particle::new(Vec2::new(0.0, 12.0), 10.0).unwrap();

        let outcome = resolve_collision(&mut a, &mut b, 0.9);
        assert_eq!(outcome, ContactOutcome::Corrected);
        assert!(outcome.is_contact());
        assert_eq!(a.position().distance(b.position()), 20.0);
        assert_eq!(a.previous_position(), Vec2::new(0.0, 0.0));
        assert_eq!(b.previous_position(), Vec2::new(0.0, 12.0));
    }

    #[test]
    fn test_head_on_impulse() {
        // Closing at 1.5 each, overlap 1 after the push
        let mut a = Particle::with_velocity(Vec2::new(-9.5, 0.0), Vec2::new(1.5, 0.0), 10.0).unwrap();
        let mut b = Particle::with_velocity(Vec2::new(9.5, 0.0), Vec2::new(-1.5, 0.0), 10.0).unwrap();

        assert_eq!(resolve_collision(&mut a, &mut b, 0.9), ContactOutcome::Impulse);
        assert!((a.position().x + 10.0).abs() < 1e-12);
        assert!((b.position().x - 10.0).abs() < 1e-12);

        // After the push: va = 1.0, vb = -1.0, v_n = -2, j = 1.9
        assert!((a.velocity().x + 0.9).abs() < 1e-12);
        assert!((b.velocity().x - 0.9).abs() < 1e-12);
        assert_eq!(a.velocity().y, 0.0);
    }

    #[test]
    fn test_impulse_conserves_momentum() {
        let mut a = Particle::with_velocity(Vec2::new(0.0, 0.0), Vec2::new(3.0, 1.0), 6.0).unwrap();
        let mut b = Particle::with_velocity(Vec2::new(8.0, 4.0), Vec2::new(-2.0, 0.5), 4.0).unwrap();
        let before = a.velocity() + b.velocity();

        let outcome = resolve_collision(&mut a, &mut b, 0.7);
        assert_eq!(outcome, ContactOutcome::Impulse);

        // Equal, opposite corrections: the pair's summed velocity is preserved
        let after = a.velocity() + b.velocity();
        assert!((after - before).length() < 1e-12);
    }
}
