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
//! Particle add/remove behavior between steps

use std::collections::HashMap;

use verlet_sim::{Particle, ParticleId, SimError, SimulationConfig, Vec2, World};

fn populated_world() -> (World, Vec<ParticleId>) {
    let mut world =
        World::with_circle(Vec2::new(300.0, 300.0), 250.0, SimulationConfig::default()).unwrap();
    let ids = (0..12)
        .map(|i| {
            let x = 180.0 + (i % 6) as f64 * 45.0;
            let y = 200.0 + (i / 6) as f64 * 45.0;
            world.add_particle(x, y, 12.0).unwrap()
        })
        .collect();
    (world, ids)
}

fn state(world: &World) -> HashMap<ParticleId, Particle> {
    world.iter().map(|(id, p)| (id, *p)).collect()
}

#[test]
fn test_add_then_remove_restores_world() {
    let (mut world, _) = populated_world();
    for _ in 0..30 {
        world.step();
    }
    let before = state(&world);
    let count = world.len();

    let id = world.add_particle(300.0, 300.0, 5.0).unwrap();
    assert_eq!(world.len(), count + 1);
    let removed = world.remove_particle(id).unwrap();
    assert_eq!(removed.position(), Vec2::new(300.0, 300.0));

    assert_eq!(world.len(), count);
    assert_eq!(state(&world), before);
}

#[test]
fn test_removal_keeps_other_ids_stable() {
    let (mut world, ids) = populated_world();
    world.step();
    let before = state(&world);

    world.remove_particle(ids[0]);
    world.remove_particle(ids[5]);

    for id in &ids {
        if *id == ids[0] || *id == ids[5] {
            assert!(world.particle(*id).is_none());
        } else {
            assert_eq!(world.particle(*id), before.get(id));
        }
    }
}

#[test]
fn test_remove_unknown_or_stale_is_noop() {
    let (mut world, ids) = populated_world();
    let victim = ids[3];
    assert!(world.remove_particle(victim).is_some());
    let count = world.len();

    assert!(world.remove_particle(victim).is_none());
    assert!(world.remove_particle(ParticleId::new(10_000, 0)).is_none());
    assert_eq!(world.len(), count);

    // The freed slot is reused, but the old handle stays dead
    let fresh = world.add_particle(300.0, 300.0, 5.0).unwrap();
    assert_eq!(fresh.index(), victim.index());
    assert!(world.particle(victim).is_none());
    assert!(world.remove_particle(victim).is_none());
    assert!(world.contains(fresh));
}

#[test]
fn test_new_particles_start_at_rest() {
    let (mut world, _) = populated_world();
    let id = world.add_particle(310.0, 320.0, 6.0).unwrap();
    let p = world.particle(id).unwrap();
    assert_eq!(p.position(), p.previous_position());
    assert_eq!(p.velocity(), Vec2::ZERO);
}

#[test]
fn test_invalid_geometry_rejected() {
    let (mut world, _) = populated_world();
    let count = world.len();

    for radius in [0.0, -2.0, f64::NAN] {
        let err = world.add_particle(300.0, 300.0, radius).unwrap_err();
        assert!(matches!(err, SimError::InvalidGeometry(_)));
    }
    assert!(world.add_particle(300.0, f64::INFINITY, 4.0).is_err());
    assert_eq!(world.len(), count);
}

#[test]
fn test_churn_between_steps() {
    let (mut world, _) = populated_world();

    // Click-to-remove, drag-to-add, as an input layer would do it
    for frame in 0..200 {
        if frame % 7 == 0 {
            let target = world.particles().first().map(|v| Vec2::new(v.x, v.y));
            if let Some(point) = target {
                assert!(world.remove_particle_at(point).is_some());
            }
        }
        if frame % 5 == 0 {
            world.add_particle(300.0, 150.0, 6.0 + (frame % 10) as f64).unwrap();
        }
        world.step();

        for view in world.particles() {
            let d = Vec2::new(view.x, view.y).distance(Vec2::new(300.0, 300.0));
            assert!(d <= 250.0 - view.radius + 1e-9);
        }
    }
    assert_eq!(world.frame_count(), 200);
}
