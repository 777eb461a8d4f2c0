//! Scripted input replay.
//!
//! DESIGN
//! ======
//! A script is a flat list of pointer, wheel, select, and tick events in
//! viewport-relative screen pixels. Pointer-ups hit the stage element, so
//! they are given the stage's bounding box; everything else is bounded by
//! the viewport rectangle. After the last event the engine is ticked until
//! the zoom animation settles or the frame cap is hit.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use viewport::camera::{Point, Rect};
use viewport::engine::EngineCore;
use viewport::input::{Button, WheelDelta};
use viewport::world::{EntityId, World};

use crate::HostError;

/// Simulated frame length for ticks the script doesn't spell out.
pub const FRAME_MS: f64 = 16.0;
/// Frames allowed for the trailing settle loop.
pub const MAX_SETTLE_FRAMES: usize = 120;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    PointerDown { x: f64, y: f64, button: Button },
    PointerMove { x: f64, y: f64 },
    PointerUp { x: f64, y: f64, button: Button },
    PointerLeave { x: f64, y: f64 },
    Wheel { x: f64, y: f64, dy: f64 },
    /// Select a seeded unit by spawn index.
    Select { unit: usize },
    Tick { ms: f64 },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    pub events: Vec<ScriptEvent>,
}

impl Script {
    /// Read a script from a JSON file.
    pub fn load(path: &Path) -> Result<Self, HostError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|source| HostError::ScriptRead { path: path.to_path_buf(), source })?;
        let script: Self = serde_json::from_str(&raw)?;
        info!(path = %path.display(), events = script.events.len(), "loaded script");
        Ok(script)
    }

    /// Pan right and down, select the first unit, order it across the
    /// map, then zoom in at the viewport centre.
    pub fn demo() -> Self {
        use ScriptEvent::{PointerDown, PointerMove, PointerUp, Select, Tick, Wheel};
        Self {
            events: vec![
                PointerDown { x: 600.0, y: 450.0, button: Button::Primary },
                PointerMove { x: 500.0, y: 400.0 },
                PointerUp { x: 500.0, y: 400.0, button: Button::Primary },
                Select { unit: 0 },
                PointerDown { x: 700.0, y: 300.0, button: Button::Secondary },
                PointerUp { x: 700.0, y: 300.0, button: Button::Secondary },
                Tick { ms: FRAME_MS },
                PointerMove { x: 600.0, y: 450.0 },
                Wheel { x: 600.0, y: 450.0, dy: -250.0 },
            ],
        }
    }
}

/// Feed `script` through `engine`. `units` maps `Select` indices to ids.
/// Returns the number of frames the trailing settle loop ran.
pub fn replay(
    engine: &mut EngineCore<World>,
    units: &[EntityId],
    script: &Script,
    viewport: Rect,
) -> Result<usize, HostError> {
    for event in &script.events {
        debug!(?event, "replay");
        match *event {
            ScriptEvent::PointerDown { x, y, button } => {
                engine.on_pointer_down(Point::new(x, y), button, viewport);
            }
            ScriptEvent::PointerMove { x, y } => {
                engine.on_pointer_move(Point::new(x, y), viewport);
            }
            ScriptEvent::PointerUp { x, y, button } => {
                let stage = engine.stage_bounds(viewport.origin());
                let actions = engine.on_pointer_up(Point::new(x, y), button, stage);
                debug!(?actions, "pointer up");
            }
            ScriptEvent::PointerLeave { x, y } => {
                engine.on_pointer_leave(Point::new(x, y), viewport);
            }
            ScriptEvent::Wheel { x, y, dy } => {
                engine.on_wheel(Point::new(x, y), WheelDelta { dx: 0.0, dy }, viewport);
            }
            ScriptEvent::Select { unit } => {
                let id = units
                    .get(unit)
                    .ok_or(HostError::UnknownUnit { index: unit, count: units.len() })?;
                engine.select(id);
            }
            ScriptEvent::Tick { ms } => {
                engine.tick(ms);
            }
        }
    }

    let mut frames = 0;
    while frames < MAX_SETTLE_FRAMES && engine.tick(FRAME_MS) {
        frames += 1;
    }
    if frames == MAX_SETTLE_FRAMES {
        warn!(frames, zoom = engine.camera().zoom, "zoom did not settle");
    }
    Ok(frames)
}

#[cfg(test)]
#[path = "script_test.rs"]
mod tests;
