//! Viewport configuration: world/viewport geometry, zoom limits, and validation.
//!
//! A `ViewportConfig` is fixed for the lifetime of an engine. It is checked
//! once in [`ViewportConfig::validate`] so that every clamp the camera performs
//! later has `min <= max` at every reachable zoom level.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::{
    DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, DEFAULT_VIEWPORT_SIZE, DEFAULT_WORLD_SIZE, ZOOM_PERCENT_IDENTITY,
};

/// Errors produced when a viewport configuration cannot be used.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A size is zero, negative, or not finite.
    #[error("{name} must be a positive finite number, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },

    /// A zoom limit is zero, negative, or not finite.
    #[error("{name} must be a positive finite percentage, got {value}")]
    InvalidZoom { name: &'static str, value: f64 },

    /// `min_zoom` is larger than `max_zoom`.
    #[error("min_zoom {min} exceeds max_zoom {max}")]
    InvertedZoomRange { min: f64, max: f64 },

    /// The starting zoom lies outside `[min_zoom, max_zoom]`.
    #[error("initial_zoom {zoom} outside [{min}, {max}]")]
    InitialZoomOutOfRange { zoom: f64, min: f64, max: f64 },

    /// The visible window is larger than the world along an axis.
    #[error("viewport {axis} {viewport} exceeds world {axis} {world}")]
    ViewportExceedsWorld { axis: &'static str, viewport: f64, world: f64 },

    /// At `min_zoom` the scaled world no longer covers the viewport.
    #[error("world {axis} {world} at min_zoom {min_zoom}% is {scaled}, smaller than viewport {viewport}")]
    ViewportNotCovered { axis: &'static str, world: f64, min_zoom: f64, scaled: f64, viewport: f64 },
}

/// Size of the pannable world and of the visible window, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    pub world_width: f64,
    pub world_height: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for Geometry {
    fn default() -> Self {
        Self {
            world_width: DEFAULT_WORLD_SIZE.0,
            world_height: DEFAULT_WORLD_SIZE.1,
            viewport_width: DEFAULT_VIEWPORT_SIZE.0,
            viewport_height: DEFAULT_VIEWPORT_SIZE.1,
        }
    }
}

/// Where the settled pan starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StartPan {
    /// World top-left aligned with viewport top-left.
    #[default]
    Origin,
    /// World centre aligned with viewport centre.
    Centered,
}

/// Full configuration for one viewport instance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewportConfig {
    pub geometry: Geometry,
    /// Lower zoom limit in percent.
    pub min_zoom: f64,
    /// Upper zoom limit in percent.
    pub max_zoom: f64,
    /// Zoom at construction, in percent.
    pub initial_zoom: f64,
    pub start: StartPan,
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self {
            geometry: Geometry::default(),
            min_zoom: DEFAULT_MIN_ZOOM,
            max_zoom: DEFAULT_MAX_ZOOM,
            initial_zoom: ZOOM_PERCENT_IDENTITY,
            start: StartPan::Origin,
        }
    }
}

impl ViewportConfig {
    /// Check that the configuration is usable.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found: bad sizes, bad zoom limits, an
    /// initial zoom out of range, or a world that cannot cover the viewport at
    /// `min_zoom`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let g = &self.geometry;
        for (name, value) in [
            ("world_width", g.world_width),
            ("world_height", g.world_height),
            ("viewport_width", g.viewport_width),
            ("viewport_height", g.viewport_height),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidDimension { name, value });
            }
        }

        for (name, value) in [("min_zoom", self.min_zoom), ("max_zoom", self.max_zoom)] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::InvalidZoom { name, value });
            }
        }
        if self.min_zoom > self.max_zoom {
            return Err(ConfigError::InvertedZoomRange { min: self.min_zoom, max: self.max_zoom });
        }
        if !(self.initial_zoom >= self.min_zoom && self.initial_zoom <= self.max_zoom) {
            return Err(ConfigError::InitialZoomOutOfRange {
                zoom: self.initial_zoom,
                min: self.min_zoom,
                max: self.max_zoom,
            });
        }

        let min_factor = self.min_zoom / ZOOM_PERCENT_IDENTITY;
        for (axis, world, viewport) in [
            ("width", g.world_width, g.viewport_width),
            ("height", g.world_height, g.viewport_height),
        ] {
            if viewport > world {
                return Err(ConfigError::ViewportExceedsWorld { axis, viewport, world });
            }
            let scaled = world * min_factor;
            if scaled < viewport {
                return Err(ConfigError::ViewportNotCovered {
                    axis,
                    world,
                    min_zoom: self.min_zoom,
                    scaled,
                    viewport,
                });
            }
        }
        Ok(())
    }

    /// Settled pan before any clamping for the initial zoom.
    #[must_use]
    pub fn initial_pan(&self) -> Point {
        match self.start {
            StartPan::Origin => Point::new(0.0, 0.0),
            StartPan::Centered => Point::new(
                -(self.geometry.world_width - self.geometry.viewport_width) / 2.0,
                -(self.geometry.world_height - self.geometry.viewport_height) / 2.0,
            ),
        }
    }
}
