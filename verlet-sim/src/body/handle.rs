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
//! Particle handles
//!
//! Handles are generational: a slot freed by a removal can be reused by a
//! later insertion, but the generation counter makes the old handle stale
//! so it never aliases the new particle.

use std::fmt;

/// Stable identifier for a particle in a [`World`](crate::World)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId {
    index: u32,
    generation: u32,
}

impl ParticleId {
    /// Create a handle from a slot index and generation
    pub fn new(index: u32, generation: u32) -> Self {
        ParticleId { index, generation }
    }

    /// Slot index in the arena
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation of the slot when this handle was issued
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Particle({}, gen: {})", self.index, self.generation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_fields() {
        let id = ParticleId::new(42, 1);
        assert_eq!(id.index(), 42);
        assert_eq!(id.generation(), 1);
        assert_eq!(id.to_string(), "Particle(42, gen: 1)");
    }

    #[test]
    fn test_handle_equality() {
        let a = ParticleId::new(1, 0);
        let b = ParticleId::new(1, 0);
        let c = ParticleId::new(1, 1);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
