#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_is_valid() {
    assert_eq!(ViewportConfig::default().validate(), Ok(()));
}

#[test]
fn default_geometry_matches_reference_layout() {
    let g = Geometry::default();
    assert_eq!(g.world_width, 3200.0);
    assert_eq!(g.world_height, 2400.0);
    assert_eq!(g.viewport_width, 1200.0);
    assert_eq!(g.viewport_height, 900.0);
}

#[test]
fn default_zoom_limits() {
    let c = ViewportConfig::default();
    assert_eq!(c.min_zoom, 50.0);
    assert_eq!(c.max_zoom, 200.0);
    assert_eq!(c.initial_zoom, 100.0);
    assert_eq!(c.start, StartPan::Origin);
}

// =============================================================
// initial_pan
// =============================================================

#[test]
fn initial_pan_origin_is_zero() {
    assert_eq!(ViewportConfig::default().initial_pan(), Point::new(0.0, 0.0));
}

#[test]
fn initial_pan_centered_splits_overflow() {
    let c = ViewportConfig { start: StartPan::Centered, ..Default::default() };
    assert_eq!(c.initial_pan(), Point::new(-1000.0, -750.0));
}

// =============================================================
// validate
// =============================================================

#[test]
fn rejects_zero_world_width() {
    let mut c = ViewportConfig::default();
    c.geometry.world_width = 0.0;
    assert!(matches!(c.validate(), Err(ConfigError::InvalidDimension { name: "world_width", .. })));
}

#[test]
fn rejects_non_finite_viewport_height() {
    let mut c = ViewportConfig::default();
    c.geometry.viewport_height = f64::INFINITY;
    assert!(matches!(c.validate(), Err(ConfigError::InvalidDimension { name: "viewport_height", .. })));
}

#[test]
fn rejects_nan_dimension() {
    let mut c = ViewportConfig::default();
    c.geometry.world_height = f64::NAN;
    assert!(matches!(c.validate(), Err(ConfigError::InvalidDimension { name: "world_height", .. })));
}

#[test]
fn rejects_non_positive_min_zoom() {
    let c = ViewportConfig { min_zoom: 0.0, ..Default::default() };
    assert!(matches!(c.validate(), Err(ConfigError::InvalidZoom { name: "min_zoom", .. })));
}

#[test]
fn rejects_inverted_zoom_range() {
    let c = ViewportConfig { min_zoom: 150.0, max_zoom: 120.0, initial_zoom: 130.0, ..Default::default() };
    assert_eq!(c.validate(), Err(ConfigError::InvertedZoomRange { min: 150.0, max: 120.0 }));
}

#[test]
fn rejects_initial_zoom_outside_limits() {
    let c = ViewportConfig { initial_zoom: 250.0, ..Default::default() };
    assert!(matches!(c.validate(), Err(ConfigError::InitialZoomOutOfRange { .. })));
}

#[test]
fn rejects_viewport_wider_than_world() {
    let mut c = ViewportConfig::default();
    c.geometry.viewport_width = 4000.0;
    assert!(matches!(c.validate(), Err(ConfigError::ViewportExceedsWorld { axis: "width", .. })));
}

#[test]
fn rejects_world_not_covering_viewport_at_min_zoom() {
    let c = ViewportConfig { min_zoom: 25.0, ..Default::default() };
    // 3200 * 0.25 = 800 < 1200
    assert!(matches!(c.validate(), Err(ConfigError::ViewportNotCovered { axis: "width", .. })));
}

#[test]
fn accepts_exact_cover_at_min_zoom() {
    let mut c = ViewportConfig::default();
    c.geometry.viewport_height = 1200.0;
    // 2400 * 0.5 = 1200 == viewport
    assert_eq!(c.validate(), Ok(()));
}

#[test]
fn error_messages_name_the_field() {
    let err = ConfigError::InvalidDimension { name: "world_width", value: -1.0 };
    assert_eq!(err.to_string(), "world_width must be a positive finite number, got -1");
}

// =============================================================
// serde
// =============================================================

#[test]
fn deserialize_partial_config_fills_defaults() {
    let c: ViewportConfig = serde_json::from_str(r#"{ "max_zoom": 300.0, "start": "centered" }"#).unwrap();
    assert_eq!(c.max_zoom, 300.0);
    assert_eq!(c.min_zoom, 50.0);
    assert_eq!(c.start, StartPan::Centered);
    assert_eq!(c.geometry, Geometry::default());
}

#[test]
fn deserialize_rejects_unknown_start() {
    let result = serde_json::from_str::<ViewportConfig>(r#"{ "start": "middle" }"#);
    assert!(result.is_err());
}
