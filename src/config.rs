//! Host configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Everything has a default, so `skirmish` runs with no environment at all.
//! Numeric variables that fail to parse fall back to their default; an
//! unknown `SKIRMISH_START` is an error because there is no sensible guess.
//! The resulting `ViewportConfig` is validated by the engine, not here.

use std::path::PathBuf;

use viewport::config::{Geometry, StartPan, ViewportConfig};
use viewport::consts::{DEFAULT_MAX_ZOOM, DEFAULT_MIN_ZOOM, ZOOM_PERCENT_IDENTITY};

use crate::HostError;

pub const DEFAULT_SEED_UNITS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub viewport: ViewportConfig,
    /// Units spawned at random before the script runs.
    pub seed_units: usize,
    /// JSON script to replay instead of the built-in demo.
    pub script_path: Option<PathBuf>,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `SKIRMISH_WORLD_WIDTH` / `SKIRMISH_WORLD_HEIGHT`: default 3200 × 2400
    /// - `SKIRMISH_VIEWPORT_WIDTH` / `SKIRMISH_VIEWPORT_HEIGHT`: default 1200 × 900
    /// - `SKIRMISH_MIN_ZOOM` / `SKIRMISH_MAX_ZOOM`: percent, default 50 / 200
    /// - `SKIRMISH_START`: `origin` (default) or `centered`
    /// - `SKIRMISH_UNITS`: default 3
    /// - `SKIRMISH_SCRIPT`: path to a JSON script
    pub fn from_env() -> Result<Self, HostError> {
        let defaults = Geometry::default();
        let geometry = Geometry {
            world_width: env_parse_f64("SKIRMISH_WORLD_WIDTH", defaults.world_width),
            world_height: env_parse_f64("SKIRMISH_WORLD_HEIGHT", defaults.world_height),
            viewport_width: env_parse_f64("SKIRMISH_VIEWPORT_WIDTH", defaults.viewport_width),
            viewport_height: env_parse_f64("SKIRMISH_VIEWPORT_HEIGHT", defaults.viewport_height),
        };
        let viewport = ViewportConfig {
            geometry,
            min_zoom: env_parse_f64("SKIRMISH_MIN_ZOOM", DEFAULT_MIN_ZOOM),
            max_zoom: env_parse_f64("SKIRMISH_MAX_ZOOM", DEFAULT_MAX_ZOOM),
            initial_zoom: ZOOM_PERCENT_IDENTITY,
            start: parse_start(std::env::var("SKIRMISH_START").ok().as_deref())?,
        };

        Ok(Self {
            viewport,
            seed_units: env_parse_usize("SKIRMISH_UNITS", DEFAULT_SEED_UNITS),
            script_path: std::env::var_os("SKIRMISH_SCRIPT").map(PathBuf::from),
        })
    }
}

fn env_parse_f64(key: &str, default: f64) -> f64 {
    parse_f64_or(std::env::var(key).ok().as_deref(), default)
}

fn env_parse_usize(key: &str, default: usize) -> usize {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_f64_or(raw: Option<&str>, default: f64) -> f64 {
    raw.and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(default)
}

fn parse_start(raw: Option<&str>) -> Result<StartPan, HostError> {
    match raw.map(str::trim).unwrap_or("origin") {
        "origin" => Ok(StartPan::Origin),
        "centered" | "centred" => Ok(StartPan::Centered),
        other => Err(HostError::ConfigParse(format!(
            "unknown SKIRMISH_START '{other}' (expected 'origin' or 'centered')"
        ))),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
