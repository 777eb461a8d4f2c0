//! Random starting units.

use rand::Rng;
use tracing::debug;
use viewport::consts::DEFAULT_UNIT_SPEED;
use viewport::world::{Component, EntityId, Metadata, Movable, Position, Rotation, Selectable, World};

/// Horizontal spawn band in world pixels.
const SPAWN_X: std::ops::RangeInclusive<u32> = 200..=1000;
/// Vertical spawn band in world pixels.
const SPAWN_Y: std::ops::RangeInclusive<u32> = 100..=500;

/// Spawn `count` named units at random whole-pixel positions. Ids come back
/// in spawn order so scripts can refer to units by index.
pub fn seed_units(world: &mut World, count: usize, rng: &mut impl Rng) -> Vec<EntityId> {
    (0..count)
        .map(|n| {
            let position = Position {
                x: f64::from(rng.random_range(SPAWN_X)),
                y: f64::from(rng.random_range(SPAWN_Y)),
            };
            let id = world.spawn([
                Component::Movable(Movable { speed: DEFAULT_UNIT_SPEED }),
                Component::Rotation(Rotation { value: 0.0 }),
                Component::Position(position),
                Component::Selectable(Selectable { selected: false }),
                Component::Metadata(Metadata { name: format!("unit-{n}") }),
            ]);
            debug!(%id, x = position.x, y = position.y, "seeded unit");
            id
        })
        .collect()
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
