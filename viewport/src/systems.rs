//! Systems that read and write entity components.
//!
//! Each function takes the store explicitly and touches only the entities its
//! query matches, so a missing component is filtered out before the body runs.

#[cfg(test)]
#[path = "systems_test.rs"]
mod systems_test;

use tracing::{debug, trace};

use crate::camera::Point;
use crate::consts::FLIPPED_ROTATION_DEG;
use crate::world::{Component, ComponentKind, EntityId, EntityStore, MoveTarget, Position, Rotation, Selectable};

/// Entities the selection systems operate on.
pub const SELECTABLE: &[ComponentKind] = &[ComponentKind::Selectable];

/// Entities with a pending move order the movement sweep can apply.
pub const MOVING: &[ComponentKind] = &[
    ComponentKind::Position,
    ComponentKind::Movable,
    ComponentKind::MoveTarget,
    ComponentKind::Rotation,
];

/// Entities the renderer draws.
pub const RENDERED: &[ComponentKind] = &[ComponentKind::Position, ComponentKind::Selectable, ComponentKind::Rotation];

/// Clear the selection flag on every selectable entity.
///
/// Returns how many entities were selected beforehand. Running it again is a no-op.
pub fn deselect_all<S: EntityStore>(store: &mut S) -> usize {
    let mut cleared = 0;
    for id in store.query_with(SELECTABLE) {
        let was_selected = store.get(&id).is_some_and(|e| e.is_selected());
        if was_selected {
            cleared += 1;
        }
        store.set_component(&id, Component::Selectable(Selectable { selected: false }));
    }
    if cleared > 0 {
        debug!(cleared, "selection cleared");
    }
    cleared
}

/// Mark one entity as selected. Returns false if it isn't selectable.
pub fn select<S: EntityStore>(store: &mut S, id: &EntityId) -> bool {
    store.set_component(id, Component::Selectable(Selectable { selected: true }))
}

/// Attach a move order to `target` (world space) on every selected entity.
///
/// A newer order replaces one that has not been consumed yet. Returns the ids
/// that received the order; empty when nothing is selected.
pub fn issue_move_orders<S: EntityStore>(store: &mut S, target: Point) -> Vec<EntityId> {
    let selected: Vec<EntityId> = store
        .query_with(SELECTABLE)
        .into_iter()
        .filter(|id| store.get(id).is_some_and(|e| e.is_selected()))
        .collect();

    for id in &selected {
        store.add_component(id, Component::MoveTarget(MoveTarget { x: target.x, y: target.y }));
    }
    if !selected.is_empty() {
        debug!(orders = selected.len(), x = target.x, y = target.y, "move orders issued");
    }
    selected
}

/// Rotation shown after one more move: 0 (or NaN) becomes 360, anything else becomes 0.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn flipped_rotation(value: f64) -> f64 {
    if value == 0.0 || value.is_nan() { FLIPPED_ROTATION_DEG } else { 0.0 }
}

/// Apply and consume every pending move order.
///
/// Each matching entity jumps straight to its target, flips its rotation, and
/// loses the `movetarget` component. Returns the ids that moved.
pub fn run_movement<S: EntityStore>(store: &mut S) -> Vec<EntityId> {
    let ids = store.query_with(MOVING);
    let mut moved = Vec::with_capacity(ids.len());

    for id in ids {
        let Some(entity) = store.get(&id) else {
            continue;
        };
        let (Some(target), Some(rotation)) = (entity.move_target, entity.rotation) else {
            continue;
        };

        store.set_component(&id, Component::Position(Position { x: target.x, y: target.y }));
        store.set_component(&id, Component::Rotation(Rotation { value: flipped_rotation(rotation.value) }));
        store.remove_component(&id, ComponentKind::MoveTarget);

        trace!(%id, x = target.x, y = target.y, "entity moved");
        moved.push(id);
    }
    moved
}
