use dioxus::prelude::*;
use pillbar_core::{ColorToken, Tone, HEADING};
use pillbar_ui::FilterPills;

use crate::context::{get_app_config, provide_haptics};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles and haptics, then renders the heading above the
/// filter bar.
#[component]
pub fn App() -> Element {
    let config = use_hook(get_app_config);
    provide_haptics();

    let mode = config.appearance;
    let background = ColorToken::solid(Tone::GroupedBackground).css(mode);
    let heading_color = ColorToken::solid(Tone::PrimaryText).css(mode);

    rsx! {
        style { {GLOBAL_STYLES} }
        main {
            class: "page",
            "data-appearance": "{mode}",
            style: "background: {background}; color: {heading_color};",
            h1 { class: "page-title", "{HEADING}" }
            FilterPills {
                initial: config.initial.clone(),
                appearance: mode,
                on_selection_change: move |title: String| {
                    tracing::info!("Filter changed to {}", title);
                },
            }
        }
    }
}
