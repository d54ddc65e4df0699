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
//! Particle arena
//!
//! Particles live in a dense array so the solver can sweep them without
//! gaps. A sparse slot table maps each [`ParticleId`] to its dense index,
//! which keeps insertion and removal O(1):
//!
//! ```text
//! slots:     [ gen 0 -> 1 | gen 3 -> free | gen 1 -> 0 ]
//! particles: [ p(slot 2), p(slot 0) ]
//! ids:       [ id(2, 1),  id(0, 0)  ]
//! ```
//!
//! Removal swaps the last dense element into the hole and patches its slot,
//! so dense order changes but no surviving particle's id does.

use crate::body::{Particle, ParticleId};

#[derive(Debug, Clone, Copy)]
struct Slot {
    generation: u32,
    dense: Option<usize>,
}

/// Dense particle storage addressed by generational handles
#[derive(Debug, Clone, Default)]
pub struct ParticleArena {
    slots: Vec<Slot>,
    free: Vec<u32>,
    particles: Vec<Particle>,
    ids: Vec<ParticleId>,
}

impl ParticleArena {
    /// Create an empty arena
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an arena with room for `capacity` particles
    pub fn with_capacity(capacity: usize) -> Self {
        ParticleArena {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            particles: Vec::with_capacity(capacity),
            ids: Vec::with_capacity(capacity),
        }
    }

    /// Number of live particles
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Check if the arena holds no particles
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Insert a particle and return its handle
    pub fn insert(&mut self, particle: Particle) -> ParticleId {
        let dense = self.particles.len();
        let index = match self.free.pop() {
            Some(index) => {
                self.slots[index as usize].dense = Some(dense);
                index
            }
            None => {
                let index = self.slots.len() as u32;
                self.slots.push(Slot {
                    generation: 0,
                    dense: Some(dense),
                });
                index
            }
        };

        let id = ParticleId::new(index, self.slots[index as usize].generation);
        self.particles.push(particle);
        self.ids.push(id);

        debug_assert_eq!(self.particles.len(), self.ids.len());
        id
    }

    /// Remove a particle, returning it if the handle was live
    pub fn remove(&mut self, id: ParticleId) -> Option<Particle> {
        let dense = self.dense_index(id)?;

        let particle = self.particles.swap_remove(dense);
        self.ids.swap_remove(dense);
        if let Some(moved) = self.ids.get(dense) {
            self.slots[moved.index() as usize].dense = Some(dense);
        }

        let slot = &mut self.slots[id.index() as usize];
        slot.dense = None;
        slot.generation = slot.generation.wrapping_add(1);
        self.free.push(id.index());

        debug_assert_eq!(self.particles.len(), self.ids.len());
        Some(particle)
    }

    /// Check if the handle refers to a live particle
    pub fn contains(&self, id: ParticleId) -> bool {
        self.dense_index(id).is_some()
    }

    /// Get a particle by handle
    pub fn get(&self, id: ParticleId) -> Option<&Particle> {
        self.dense_index(id).map(|dense| &self.particles[dense])
    }

    /// Get a mutable particle by handle
    pub fn get_mut(&mut self, id: ParticleId) -> Option<&mut Particle> {
        let dense = self.dense_index(id)?;
        Some(&mut self.particles[dense])
    }

    /// Dense particle slice, in solver order
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// Mutable dense particle slice, in solver order
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    /// Handles in the same order as [`as_slice`](Self::as_slice)
    pub fn ids(&self) -> &[ParticleId] {
        &self.ids
    }

    /// Iterate over `(handle, particle)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (ParticleId, &Particle)> + '_ {
        self.ids.iter().copied().zip(self.particles.iter())
    }

    /// Remove every particle
    ///
    /// All outstanding handles become stale.
    pub fn clear(&mut self) {
        for id in self.ids.drain(..) {
            let slot = &mut self.slots[id.index() as usize];
            slot.dense = None;
            slot.generation = slot.generation.wrapping_add(1);
            self.free.push(id.index());
        }
        self.particles.clear();
    }

    fn dense_index(&self, id: ParticleId) -> Option<usize> {
        let slot = self.slots.get(id.index() as usize)?;
        if slot.generation != id.generation() {
            return None;
        }
        slot.dense
    }
}

/// Borrow two distinct elements of a slice mutably, `i < j`
#[inline]
pub(crate) fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    debug_assert!(i < j, "pair_mut requires i < j");
    let (head, tail) = items.split_at_mut(j);
    (&mut head[i], &mut tail[0])
}
