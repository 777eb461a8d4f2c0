//! Pan/zoom viewport core with a minimal entity-component move-order loop.
//!
//! This crate owns everything between raw pointer input and the values a
//! renderer needs: the camera (pan, live drag offset, animated zoom), the
//! mapping from screen coordinates back into world space, the drag/click
//! state machine, and the systems that turn a right-click into move orders
//! and then consume them. The host is responsible for wiring input events to
//! [`engine::EngineCore`], calling [`engine::EngineCore::tick`] once per frame
//! while it asks for more, and drawing from [`render::RenderSnapshot`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level [`engine::EngineCore`]: input handlers, tick, queries |
//! | [`camera`] | Camera state, pan clamping, and screen/world conversions |
//! | [`zoom`] | Wheel-driven zoom target and the per-tick zoom animator |
//! | [`input`] | Buttons, wheel deltas, and the drag state machine |
//! | [`world`] | Entity components, the [`world::EntityStore`] seam, and [`world::World`] |
//! | [`systems`] | Deselect, move-order issue, and movement sweep |
//! | [`render`] | Plain-value frame snapshot for the renderer |
//! | [`config`] | Viewport geometry, zoom limits, and validation |
//! | [`consts`] | Shared numeric constants (threshold, zoom defaults, etc.) |
//! | [`util`] | Numeric helpers |

pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod input;
pub mod render;
pub mod systems;
pub mod util;
pub mod world;
pub mod zoom;
