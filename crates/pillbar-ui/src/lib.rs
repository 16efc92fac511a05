//! Accessories Filter Bar UI Components
//!
//! Dioxus components for the pill filter bar. All selection, styling and
//! haptics logic lives in `pillbar-core`; these components hold the
//! per-pill pressed state and wire DOM events into a [`pillbar_core::PillBar`].
//!
//! ## Structure
//!
//! - `FilterPills`: the scrollable row, owns the bar and the context menu
//! - `FilterPill`: one capsule button with its ephemeral pressed state
//! - `PillLabel`: title plus optional badge
//! - `PillIcon`: inline SVG glyph keyed by symbolic icon name
//! - `PillContextMenu`: favorites/share menu

pub mod components;

pub use components::*;
