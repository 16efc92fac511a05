//! Accessories Filter Bar Core Library
//!
//! Everything the pill filter bar does that is independent of a rendering
//! host: the item catalog, the single-selection state machine, the visual
//! style resolver and the press spring.
//!
//! ## Overview
//!
//! The bar shows a fixed, ordered row of category pills. Exactly one pill is
//! selected at a time (or none, when constructed that way). Tapping a pill
//! always selects it, never toggles it off, and fires a rigid haptic impact.
//!
//! ## Quick Start
//!
//! ```
//! use pillbar_core::{style_for, AppearanceMode, Catalog, PillBar, SilentHaptics};
//!
//! let mut bar = PillBar::new(Catalog::accessories(), SilentHaptics.into());
//! assert_eq!(bar.selected(), Some("All Accessories"));
//!
//! bar.tap("MagSafe");
//! assert_eq!(bar.selected(), Some("MagSafe"));
//!
//! let item = bar.catalog().get("MagSafe").unwrap();
//! let style = style_for(item, true, false, AppearanceMode::Light);
//! assert_eq!(style.shadow_radius, 12.0);
//! ```

pub mod actions;
pub mod catalog;
pub mod error;
pub mod feedback;
pub mod selection;
pub mod spring;
pub mod style;

// Re-exports
pub use actions::{ActionsHandle, ContextAction, PillActions};
pub use catalog::{badge_for, icon_for, items, Catalog, FilterItem, DEFAULT_SELECTION, HEADING};
pub use error::{PillError, PillResult};
pub use feedback::{HapticFeedback, HapticsHandle, ImpactStyle, SilentHaptics, TracingHaptics};
pub use selection::{PillBar, SelectionState, Transition};
pub use spring::{press_transition, Spring, PRESS_SPRING};
pub use style::{style_for, AppearanceMode, ColorToken, PillState, StyleAttributes, Tone};
