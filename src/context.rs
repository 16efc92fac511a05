//! Context providers for the desktop app.
//!
//! The filter bar picks up the `HapticsHandle` installed here through
//! `try_use_context`.

use dioxus::prelude::*;
use pillbar_core::{HapticsHandle, TracingHaptics};

use crate::AppConfig;

/// Get the startup configuration.
/// Uses the global config set from command line args.
pub fn get_app_config() -> AppConfig {
    crate::get_app_config()
}

/// Install the desktop haptics engine for all child components.
///
/// Desktop has no actuator, so impacts are logged.
pub fn provide_haptics() -> HapticsHandle {
    use_context_provider(|| HapticsHandle::new(TracingHaptics))
}
