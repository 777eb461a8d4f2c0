use tracing::{debug, info, trace};

use crate::camera::{Camera, Point, Rect, screen_to_world};
use crate::config::{ConfigError, Geometry, ViewportConfig};
use crate::input::{Button, DragState, Release, WheelDelta, classify_release};
use crate::render::{RenderSnapshot, snapshot};
use crate::systems::{deselect_all, issue_move_orders, run_movement, select};
use crate::world::{EntityId, EntityStore, World};
use crate::zoom::{self, ZoomLimits};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A plain click cleared the selection of `count` entities.
    DeselectedAll { count: usize },
    /// A secondary click ordered `entities` to `target` (world space).
    MoveOrdersIssued { target: Point, entities: Vec<EntityId> },
    /// A drag finished and the settled pan is now `pan`.
    PanCommitted { pan: Point },
    /// Something visible changed; schedule a frame.
    RenderNeeded,
}

/// Viewport engine: camera, drag controller, and the entity store it drives.
///
/// Every handler takes `&mut self`, so camera fields and components are only
/// ever mutated from one place at a time.
pub struct EngineCore<S: EntityStore = World> {
    pub store: S,
    pub camera: Camera,
    pub input: DragState,
    config: ViewportConfig,
}

impl<S: EntityStore> EngineCore<S> {
    /// Build an engine over `store`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `config` fails [`ViewportConfig::validate`].
    pub fn new(config: ViewportConfig, store: S) -> Result<Self, ConfigError> {
        config.validate()?;

        let camera = Camera::new(config.initial_pan(), config.initial_zoom);
        let mut core = Self { store, camera, input: DragState::Idle, config };
        core.camera.pan = core.camera.pan_bounds(&core.config.geometry).clamp(core.camera.pan);

        info!(
            world_width = config.geometry.world_width,
            world_height = config.geometry.world_height,
            viewport_width = config.geometry.viewport_width,
            viewport_height = config.geometry.viewport_height,
            zoom = config.initial_zoom,
            "viewport engine ready"
        );
        Ok(core)
    }

    // --- Queries ---

    #[must_use]
    pub fn config(&self) -> &ViewportConfig {
        &self.config
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.config.geometry
    }

    /// The current camera state.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    /// Pan the renderer should translate the stage by.
    #[must_use]
    pub fn visible_pan(&self) -> Point {
        self.camera.visible_pan(&self.config.geometry)
    }

    /// Scale the renderer should apply to the stage.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.camera.zoom_factor()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.input.is_dragging()
    }

    /// On-screen bounds of the scaled stage inside a viewport at `viewport_origin`.
    ///
    /// Passing this as the bounds of a secondary release makes the move-order
    /// mapping the exact inverse of the stage transform.
    #[must_use]
    pub fn stage_bounds(&self, viewport_origin: Point) -> Rect {
        let origin = self.camera.stage_origin(viewport_origin, &self.config.geometry);
        let zf = self.zoom_factor();
        Rect::new(
            origin.x,
            origin.y,
            self.config.geometry.world_width * zf,
            self.config.geometry.world_height * zf,
        )
    }

    /// Plain-value snapshot for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> RenderSnapshot {
        snapshot(&self.camera, &self.config.geometry, &self.store)
    }

    // --- Selection ---

    /// Mark one entity selected (the renderer has decided it was clicked).
    pub fn select(&mut self, id: &EntityId) -> bool {
        select(&mut self.store, id)
    }

    // --- Input events ---

    /// Primary button starts a drag; other buttons are left for pointer-up.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button, bounds: Rect) -> Vec<Action> {
        self.camera.pointer = screen_pt.relative_to(bounds.origin());
        if button != Button::Primary {
            return Vec::new();
        }
        self.input = DragState::Dragging { anchor: screen_pt };
        self.camera.drag_offset = Point::default();
        trace!(x = screen_pt.x, y = screen_pt.y, "drag started");
        Vec::new()
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point, bounds: Rect) -> Vec<Action> {
        self.camera.pointer = screen_pt.relative_to(bounds.origin());
        let DragState::Dragging { anchor } = self.input else {
            return Vec::new();
        };
        self.camera.drag_offset = Point::new(anchor.x - screen_pt.x, anchor.y - screen_pt.y);
        vec![Action::RenderNeeded]
    }

    /// Finish the gesture: move order, plain click, or pan commit.
    ///
    /// `bounds` is the bounding box of the element that received the release;
    /// it is the origin the move-order target is mapped from. It may be the
    /// stage rather than the viewport, so the zoom anchor is left untouched.
    pub fn on_pointer_up(&mut self, screen_pt: Point, button: Button, bounds: Rect) -> Vec<Action> {
        let actions = match classify_release(button, self.camera.drag_offset) {
            Release::MoveOrder => {
                self.camera.discard_drag();
                let target = screen_to_world(screen_pt, bounds.origin(), self.zoom_factor());
                let entities = issue_move_orders(&mut self.store, target);
                if entities.is_empty() {
                    Vec::new()
                } else {
                    vec![Action::MoveOrdersIssued { target, entities }, Action::RenderNeeded]
                }
            }
            Release::Click => {
                self.camera.discard_drag();
                let count = deselect_all(&mut self.store);
                if count == 0 {
                    Vec::new()
                } else {
                    vec![Action::DeselectedAll { count }, Action::RenderNeeded]
                }
            }
            Release::Pan => {
                self.camera.commit(&self.config.geometry);
                debug!(x = self.camera.pan.x, y = self.camera.pan.y, "pan committed");
                vec![Action::PanCommitted { pan: self.camera.pan }, Action::RenderNeeded]
            }
        };

        self.input = DragState::Idle;
        actions
    }

    /// Pointer left the tracked root. Ends a drag as a primary release; otherwise ignored.
    pub fn on_pointer_leave(&mut self, screen_pt: Point, bounds: Rect) -> Vec<Action> {
        if !self.input.is_dragging() {
            return Vec::new();
        }
        self.on_pointer_up(screen_pt, Button::Primary, bounds)
    }

    /// Set a new zoom target. The zoom itself moves on [`Self::tick`].
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta, bounds: Rect) -> Vec<Action> {
        self.camera.pointer = screen_pt.relative_to(bounds.origin());
        self.camera.zoom_target = zoom::wheel_target(self.camera.zoom, delta.dy, self.zoom_limits());
        if self.camera.is_animating() {
            trace!(zoom = self.camera.zoom, target = self.camera.zoom_target, "zoom target set");
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    // --- Frame ---

    /// Advance the zoom animation, then apply pending move orders.
    ///
    /// Returns whether the zoom is still animating, so the host can stop
    /// scheduling frames once it is idle.
    pub fn tick(&mut self, delta_ms: f64) -> bool {
        let limits = self.zoom_limits();
        let animating = zoom::advance(&mut self.camera, delta_ms, limits);

        let moved = run_movement(&mut self.store);
        if !moved.is_empty() {
            debug!(moved = moved.len(), "movement applied");
        }
        animating
    }

    fn zoom_limits(&self) -> ZoomLimits {
        ZoomLimits::from(&self.config)
    }
}
