//! Input model: mouse buttons, wheel deltas, and the drag state machine.
//!
//! `DragState` is the gesture being tracked between pointer-down and
//! pointer-up. On release, [`classify_release`] decides whether the gesture
//! was a move-order click, a plain click, or a pan to commit.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;
use crate::consts::CLICK_THRESHOLD_PX;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button.
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// State of the drag controller.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// Primary button held since `anchor` (screen space).
    Dragging { anchor: Point },
}

impl DragState {
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Screen-space position where the current drag started.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        match self {
            Self::Idle => None,
            Self::Dragging { anchor } => Some(*anchor),
        }
    }
}

/// What a pointer release means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Release {
    /// Secondary button: order the selection to the release point.
    MoveOrder,
    /// Moved less than the click threshold on both axes: deselect everything.
    Click,
    /// A finished pan gesture: commit the drag offset.
    Pan,
}

/// Classify a release from its button and the accumulated drag offset.
///
/// The secondary button always issues a move order, whatever the offset.
/// Otherwise the threshold applies per axis, not to the combined distance.
#[must_use]
pub fn classify_release(button: Button, offset: Point) -> Release {
    if button == Button::Secondary {
        return Release::MoveOrder;
    }
    if offset.x.abs() < CLICK_THRESHOLD_PX && offset.y.abs() < CLICK_THRESHOLD_PX {
        Release::Click
    } else {
        Release::Pan
    }
}
