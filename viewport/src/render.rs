//! Frame snapshot for the renderer.
//!
//! The core never pushes change notifications. Once per frame the host takes a
//! [`RenderSnapshot`] (plain values, serde-serializable) and diffs it against
//! the previous one however it likes.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::{Deserialize, Serialize};

use crate::camera::{Camera, Point};
use crate::config::Geometry;
use crate::systems::RENDERED;
use crate::world::{EntityId, EntityStore};

/// How the stage element is placed inside the viewport element.
///
/// The stage is translated by `translate` and then scaled by `scale` about its
/// own centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StageTransform {
    pub translate: Point,
    pub scale: f64,
}

impl StageTransform {
    /// CSS declarations for the stage (`translate` and `scale` properties).
    ///
    /// The scale is written unrounded so the rendered stage matches
    /// [`crate::engine::EngineCore::stage_bounds`].
    #[must_use]
    pub fn css(&self) -> String {
        format!("translate: {}px {}px; scale: {};", self.translate.x, self.translate.y, self.scale)
    }
}

/// One drawable entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub position: Point,
    pub rotation: f64,
    pub selected: bool,
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub stage: StageTransform,
    pub geometry: Geometry,
    /// Whether the zoom animation wants another frame.
    pub animating: bool,
    /// Entities with position, selectable, and rotation, ordered by id.
    pub entities: Vec<EntityView>,
}

/// Capture the camera and every renderable entity.
#[must_use]
pub fn snapshot<S: EntityStore>(camera: &Camera, geometry: &Geometry, store: &S) -> RenderSnapshot {
    let entities = store
        .query_with(RENDERED)
        .into_iter()
        .filter_map(|id| {
            let e = store.get(&id)?;
            let position = e.position?;
            Some(EntityView {
                id,
                name: e.metadata.as_ref().map(|m| m.name.clone()),
                position: Point::new(position.x, position.y),
                rotation: e.rotation.map_or(0.0, |r| r.value),
                selected: e.is_selected(),
            })
        })
        .collect::<Vec<_>>();

    RenderSnapshot {
        stage: StageTransform { translate: camera.visible_pan(geometry), scale: camera.zoom_factor() },
        geometry: *geometry,
        animating: camera.is_animating(),
        entities: sorted_by_id(entities),
    }
}

fn sorted_by_id(mut views: Vec<EntityView>) -> Vec<EntityView> {
    views.sort_by_key(|v| v.id);
    views
}
