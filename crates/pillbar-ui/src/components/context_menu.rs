//! Pill Context Menu Component
//!
//! Secondary-click menu offering "Add to favorites" and "Share" for a pill.

use dioxus::prelude::*;
use pillbar_core::ContextAction;

use super::PillIcon;

/// Menu for the pill titled `title`
///
/// Clicking outside the menu calls `on_dismiss`.
#[component]
pub fn PillContextMenu(
    title: String,
    on_action: EventHandler<ContextAction>,
    on_dismiss: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            class: "pill-menu-backdrop",
            onclick: move |_| on_dismiss.call(()),
        }
        div {
            class: "pill-menu",
            role: "menu",
            "aria-label": "{title}",
            div { class: "pill-menu-title", "{title}" }
            for action in ContextAction::ALL {
                button {
                    class: "pill-menu-item",
                    r#type: "button",
                    role: "menuitem",
                    onclick: move |_| on_action.call(action),
                    PillIcon { name: action.icon_name().to_string(), size: 16 }
                    span { "{action.label()}" }
                }
            }
        }
    }
}
