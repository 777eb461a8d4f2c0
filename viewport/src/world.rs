//! Entity model: components, the store seam the systems talk to, and a default store.
//!
//! Entities are an id plus an open set of optional components. Systems never
//! assume a storage layout; they go through [`EntityStore`], which exposes a
//! query by component set and per-component add/set/remove. [`World`] is the
//! `HashMap`-backed store a host uses unless it brings its own.
//!
//! Components are plain values. Nothing here notifies anyone on change; a
//! renderer snapshots the store once per frame instead.

#[cfg(test)]
#[path = "world_test.rs"]
mod world_test;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::DEFAULT_UNIT_SPEED;

/// Unique identifier for an entity.
pub type EntityId = Uuid;

/// World-space position of the entity's top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Visual rotation in degrees. Only ever 0 or 360 here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub value: f64,
}

/// Marks an entity as able to take move orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Movable {
    /// Carried for the renderer; movement is an instant teleport and ignores it.
    pub speed: f64,
}

/// Whether the entity is part of the current selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Selectable {
    pub selected: bool,
}

/// A pending move order in world space. Consumed by the next movement sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveTarget {
    pub x: f64,
    pub y: f64,
}

/// Display name, for labels and logs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
}

/// Names of the component slots, used to build queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    Position,
    Rotation,
    Movable,
    Selectable,
    MoveTarget,
    Metadata,
}

/// A component value tagged with its slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Position(Position),
    Rotation(Rotation),
    Movable(Movable),
    Selectable(Selectable),
    MoveTarget(MoveTarget),
    Metadata(Metadata),
}

impl Component {
    #[must_use]
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Position(_) => ComponentKind::Position,
            Self::Rotation(_) => ComponentKind::Rotation,
            Self::Movable(_) => ComponentKind::Movable,
            Self::Selectable(_) => ComponentKind::Selectable,
            Self::MoveTarget(_) => ComponentKind::MoveTarget,
            Self::Metadata(_) => ComponentKind::Metadata,
        }
    }
}

/// An entity and whichever components it currently carries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation: Option<Rotation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movable: Option<Movable>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selectable: Option<Selectable>,
    #[serde(default, rename = "movetarget", skip_serializing_if = "Option::is_none")]
    pub move_target: Option<MoveTarget>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
}

impl Entity {
    /// An entity with no components.
    #[must_use]
    pub fn new(id: EntityId) -> Self {
        Self {
            id,
            position: None,
            rotation: None,
            movable: None,
            selectable: None,
            move_target: None,
            metadata: None,
        }
    }

    /// Whether the given component slot is filled.
    #[must_use]
    pub fn has(&self, kind: ComponentKind) -> bool {
        match kind {
            ComponentKind::Position => self.position.is_some(),
            ComponentKind::Rotation => self.rotation.is_some(),
            ComponentKind::Movable => self.movable.is_some(),
            ComponentKind::Selectable => self.selectable.is_some(),
            ComponentKind::MoveTarget => self.move_target.is_some(),
            ComponentKind::Metadata => self.metadata.is_some(),
        }
    }

    /// Whether every slot in `kinds` is filled.
    #[must_use]
    pub fn has_all(&self, kinds: &[ComponentKind]) -> bool {
        kinds.iter().all(|k| self.has(*k))
    }

    /// Whether this entity is selectable and currently selected.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.selectable.is_some_and(|s| s.selected)
    }

    /// Fill a slot, replacing any previous value.
    pub fn insert(&mut self, component: Component) {
        match component {
            Component::Position(c) => self.position = Some(c),
            Component::Rotation(c) => self.rotation = Some(c),
            Component::Movable(c) => self.movable = Some(c),
            Component::Selectable(c) => self.selectable = Some(c),
            Component::MoveTarget(c) => self.move_target = Some(c),
            Component::Metadata(c) => self.metadata = Some(c),
        }
    }

    /// Empty a slot, returning what was in it.
    pub fn take(&mut self, kind: ComponentKind) -> Option<Component> {
        match kind {
            ComponentKind::Position => self.position.take().map(Component::Position),
            ComponentKind::Rotation => self.rotation.take().map(Component::Rotation),
            ComponentKind::Movable => self.movable.take().map(Component::Movable),
            ComponentKind::Selectable => self.selectable.take().map(Component::Selectable),
            ComponentKind::MoveTarget => self.move_target.take().map(Component::MoveTarget),
            ComponentKind::Metadata => self.metadata.take().map(Component::Metadata),
        }
    }
}

/// The operations systems need from whatever owns the entities.
pub trait EntityStore {
    /// Ids of every entity carrying all of `kinds`.
    fn query_with(&self, kinds: &[ComponentKind]) -> Vec<EntityId>;

    /// Look up an entity by id.
    fn get(&self, id: &EntityId) -> Option<&Entity>;

    /// Attach a component, replacing an existing one in the same slot.
    /// Returns false if the entity doesn't exist.
    fn add_component(&mut self, id: &EntityId, component: Component) -> bool;

    /// Overwrite a component the entity already has.
    /// Returns false if the entity doesn't exist or lacks that slot.
    fn set_component(&mut self, id: &EntityId, component: Component) -> bool;

    /// Detach a component, returning it if it was present.
    fn remove_component(&mut self, id: &EntityId, kind: ComponentKind) -> Option<Component>;
}

/// In-memory entity store.
#[derive(Debug, Clone, Default)]
pub struct World {
    entities: HashMap<EntityId, Entity>,
}

impl World {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { entities: HashMap::new() }
    }

    /// Create an entity from a set of components and return its id.
    pub fn spawn(&mut self, components: impl IntoIterator<Item = Component>) -> EntityId {
        let mut entity = Entity::new(Uuid::new_v4());
        for component in components {
            entity.insert(component);
        }
        let id = entity.id;
        self.entities.insert(id, entity);
        id
    }

    /// Spawn a movable, selectable, unrotated unit at `position`.
    pub fn spawn_unit(&mut self, position: Position) -> EntityId {
        self.spawn([
            Component::Movable(Movable { speed: DEFAULT_UNIT_SPEED }),
            Component::Rotation(Rotation { value: 0.0 }),
            Component::Position(position),
            Component::Selectable(Selectable { selected: false }),
        ])
    }

    /// Remove an entity, returning it if it was present.
    pub fn despawn(&mut self, id: &EntityId) -> Option<Entity> {
        self.entities.remove(id)
    }

    /// All entities sorted by id, for stable iteration.
    #[must_use]
    pub fn sorted_entities(&self) -> Vec<&Entity> {
        let mut all: Vec<&Entity> = self.entities.values().collect();
        all.sort_by_key(|e| e.id);
        all
    }

    /// Number of entities currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Returns `true` if the store contains no entities.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }
}

impl EntityStore for World {
    fn query_with(&self, kinds: &[ComponentKind]) -> Vec<EntityId> {
        let mut ids: Vec<EntityId> = self
            .entities
            .values()
            .filter(|e| e.has_all(kinds))
            .map(|e| e.id)
            .collect();
        ids.sort_unstable();
        ids
    }

    fn get(&self, id: &EntityId) -> Option<&Entity> {
        self.entities.get(id)
    }

    fn add_component(&mut self, id: &EntityId, component: Component) -> bool {
        let Some(entity) = self.entities.get_mut(id) else {
            return false;
        };
        entity.insert(component);
        true
    }

    fn set_component(&mut self, id: &EntityId, component: Component) -> bool {
        let Some(entity) = self.entities.get_mut(id) else {
            return false;
        };
        if !entity.has(component.kind()) {
            return false;
        }
        entity.insert(component);
        true
    }

    fn remove_component(&mut self, id: &EntityId, kind: ComponentKind) -> Option<Component> {
        self.entities.get_mut(id)?.take(kind)
    }
}
