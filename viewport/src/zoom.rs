//! Zoom: wheel input sets a target, and each tick moves the zoom toward it.
//!
//! The step grows with the remaining distance and the elapsed time, then is
//! clamped by the target itself so it can never overshoot. Zooming in keeps
//! the point under the pointer fixed; zooming out leaves the pan alone.

#[cfg(test)]
#[path = "zoom_test.rs"]
mod zoom_test;

use crate::camera::Camera;
use crate::config::ViewportConfig;
use crate::consts::WHEEL_PX_PER_ZOOM_PERCENT;
use crate::util::clamp;

/// Inclusive zoom range, in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl From<&ViewportConfig> for ZoomLimits {
    fn from(config: &ViewportConfig) -> Self {
        Self { min: config.min_zoom, max: config.max_zoom }
    }
}

/// Zoom target for a wheel event. Scrolling up (negative `wheel_dy`) zooms in.
#[must_use]
pub fn wheel_target(zoom: f64, wheel_dy: f64, limits: ZoomLimits) -> f64 {
    clamp(zoom - wheel_dy / WHEEL_PX_PER_ZOOM_PERCENT, limits.min, limits.max)
}

/// Advance the zoom animation by `delta_ms`. Returns whether it is still running.
pub fn advance(camera: &mut Camera, delta_ms: f64, limits: ZoomLimits) -> bool {
    if !camera.is_animating() {
        return false;
    }

    let zoom = camera.zoom;
    let target = camera.zoom_target;
    let direction = if target > zoom { 1.0 } else { -1.0 };

    let new_zoom = clamp(
        zoom + direction * (zoom - target).abs() * delta_ms,
        limits.min.max(target),
        limits.max.min(target),
    );

    if direction > 0.0 {
        let ratio = 1.0 - new_zoom / zoom;
        camera.pan.x += camera.pointer.x * ratio;
        camera.pan.y += camera.pointer.y * ratio;
    }

    camera.zoom = new_zoom;
    camera.is_animating()
}
