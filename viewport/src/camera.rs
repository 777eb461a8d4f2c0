#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use serde::{Deserialize, Serialize};

use crate::config::Geometry;
use crate::consts::ZOOM_PERCENT_IDENTITY;
use crate::util::clamp;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point expressed relative to `origin`.
    #[must_use]
    pub fn relative_to(self, origin: Point) -> Point {
        Point { x: self.x - origin.x, y: self.y - origin.y }
    }
}

/// An on-page bounding box in screen space (CSS pixels).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Top-left corner.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Convert a screen-space point to world coordinates.
///
/// `origin` is the on-screen top-left of the element the world is drawn in and
/// `zoom_factor` is `zoom / 100`. No validation: garbage in, garbage out.
#[must_use]
pub fn screen_to_world(screen: Point, origin: Point, zoom_factor: f64) -> Point {
    Point {
        x: (screen.x - origin.x) / zoom_factor,
        y: (screen.y - origin.y) / zoom_factor,
    }
}

/// Convert a world-space point to screen coordinates. Inverse of [`screen_to_world`].
#[must_use]
pub fn world_to_screen(world: Point, origin: Point, zoom_factor: f64) -> Point {
    Point {
        x: world.x * zoom_factor + origin.x,
        y: world.y * zoom_factor + origin.y,
    }
}

/// Allowed range for the visible pan at one zoom level.
///
/// The stage is scaled about its centre, so `max` is the half-growth of the
/// scaled world and `min` shifts that by the part of the scaled world that
/// does not fit in the viewport.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanBounds {
    pub min: Point,
    pub max: Point,
}

impl PanBounds {
    #[must_use]
    pub fn new(geometry: &Geometry, zoom_factor: f64) -> Self {
        let max_x = geometry.world_width * (zoom_factor - 1.0) / 2.0;
        let max_y = geometry.world_height * (zoom_factor - 1.0) / 2.0;
        Self {
            min: Point {
                x: max_x + (geometry.viewport_width - geometry.world_width * zoom_factor),
                y: max_y + (geometry.viewport_height - geometry.world_height * zoom_factor),
            },
            max: Point { x: max_x, y: max_y },
        }
    }

    #[must_use]
    pub fn clamp(&self, p: Point) -> Point {
        Point {
            x: clamp(p.x, self.min.x, self.max.x),
            y: clamp(p.y, self.min.y, self.max.y),
        }
    }
}

/// Camera state for pan/zoom over the world canvas.
///
/// `pan` is the settled offset in CSS pixels; `drag_offset` is the live delta
/// of a drag in progress, subtracted from `pan` until the drag is committed.
/// `zoom` and `zoom_target` are percentages (100 = 1.0×).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub pan: Point,
    pub drag_offset: Point,
    pub zoom: f64,
    pub zoom_target: f64,
    /// Last pointer position relative to the viewport; the zoom-in anchor.
    pub pointer: Point,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Point::default(), ZOOM_PERCENT_IDENTITY)
    }
}

impl Camera {
    #[must_use]
    pub fn new(pan: Point, zoom: f64) -> Self {
        Self { pan, drag_offset: Point::default(), zoom, zoom_target: zoom, pointer: Point::default() }
    }

    /// Scale multiplier applied to world-space rendering.
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom / ZOOM_PERCENT_IDENTITY
    }

    /// Whether the zoom animation still has work to do.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_animating(&self) -> bool {
        self.zoom != self.zoom_target
    }

    #[must_use]
    pub fn pan_bounds(&self, geometry: &Geometry) -> PanBounds {
        PanBounds::new(geometry, self.zoom_factor())
    }

    /// Pan the renderer should translate the stage by: `pan - drag_offset`, clamped.
    #[must_use]
    pub fn visible_pan(&self, geometry: &Geometry) -> Point {
        self.pan_bounds(geometry).clamp(Point {
            x: self.pan.x - self.drag_offset.x,
            y: self.pan.y - self.drag_offset.y,
        })
    }

    /// Fold the live drag offset into the settled pan and clear it.
    pub fn commit(&mut self, geometry: &Geometry) {
        self.pan = self.visible_pan(geometry);
        self.drag_offset = Point::default();
    }

    /// Drop the live drag offset without moving the settled pan.
    pub fn discard_drag(&mut self) {
        self.drag_offset = Point::default();
    }

    /// On-screen top-left of the scaled stage inside a viewport whose top-left is `viewport_origin`.
    #[must_use]
    pub fn stage_origin(&self, viewport_origin: Point, geometry: &Geometry) -> Point {
        let pan = self.visible_pan(geometry);
        let zf = self.zoom_factor();
        Point {
            x: viewport_origin.x + pan.x + geometry.world_width * (1.0 - zf) / 2.0,
            y: viewport_origin.y + pan.y + geometry.world_height * (1.0 - zf) / 2.0,
        }
    }
}
