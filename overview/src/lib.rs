//! Interactive overview-map control.
//!
//! The overview is a small secondary map that shows a wider area around the
//! primary map. A box on it traces the primary viewport; dragging the box pans
//! the primary map, and the overview re-frames itself whenever the box grows
//! too large, shrinks too small, or drifts off the panel.
//!
//! The synchronization logic is host-agnostic and runs against the
//! [`viewport::Viewport`] and [`projection::Projection`] traits. The crate is
//! also compiled to WebAssembly, where [`host::Overview`] wires it to JS map
//! handles and owns the control's DOM.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Testable [`engine::EngineCore`] and the [`engine::Action`]s it emits |
//! | [`host`] | wasm-bindgen binding and DOM construction |
//! | [`extent`] | Reset calculator and box validator |
//! | [`marker`] | Box position and footprint on the overview |
//! | [`drag`] | Drag session state machine and world guard |
//! | [`collapse`] | Collapse/expand state machine and presentation table |
//! | [`config`] | Control options and ratio bounds |
//! | [`viewport`] | Host map contract |
//! | [`projection`] | Drag-guard projections |
//! | [`camera`] | In-memory viewport used by tests and replays |
//! | [`geom`] | Points, sizes, extents and their transforms |
//! | [`consts`] | Shared defaults, CSS class names, labels |

pub mod camera;
pub mod collapse;
pub mod config;
pub mod consts;
pub mod drag;
pub mod engine;
pub mod extent;
pub mod geom;
pub mod host;
pub mod marker;
pub mod projection;
pub mod viewport;
