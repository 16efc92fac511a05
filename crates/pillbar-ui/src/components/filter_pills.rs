//! Filter Pills Component
//!
//! Horizontally scrollable row of selectable filter pills. Tapping a pill
//! always selects it (never toggles off) and plays a rigid haptic impact.
//! Pressed pills shrink slightly and drop their shadow on a spring.

use dioxus::prelude::*;
use pillbar_core::{
    style_for, ActionsHandle, AppearanceMode, Catalog, FilterItem, HapticsHandle, PillBar,
};

use super::{PillContextMenu, PillIcon, PillLabel};

/// CSS class for a pill in the given state
pub fn pill_class(is_selected: bool, is_pressed: bool) -> &'static str {
    match (is_selected, is_pressed) {
        (true, true) => "pill selected pressed",
        (true, false) => "pill selected",
        (false, true) => "pill pressed",
        (false, false) => "pill",
    }
}

/// Properties for the FilterPills component
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillsProps {
    /// Pills to show, in display order. Read once on mount.
    #[props(default)]
    pub catalog: Catalog,
    /// Title selected on mount; the catalog default when absent or unknown.
    /// Later changes are ignored, selection is owned by the bar.
    #[props(default)]
    pub initial: Option<String>,
    /// Light or dark rendering
    #[props(default)]
    pub appearance: AppearanceMode,
    /// Called when the selection moves to a different pill
    #[props(default)]
    pub on_selection_change: Option<EventHandler<String>>,
    /// Context menu handler, taken from the latest render; without one the
    /// menu actions do nothing
    #[props(default)]
    pub actions: Option<ActionsHandle>,
}

/// Displays the filter bar
///
/// Haptics come from a `HapticsHandle` in context when one is provided,
/// otherwise impacts are dropped.
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     FilterPills {
///         appearance: AppearanceMode::Dark,
///         on_selection_change: move |title| tracing::info!("now showing {}", title)
///     }
/// }
/// ```
#[component]
pub fn FilterPills(props: FilterPillsProps) -> Element {
    let haptics = try_use_context::<HapticsHandle>().unwrap_or_default();

    let catalog = props.catalog.clone();
    let initial = props.initial.clone();
    let mut bar = use_signal(move || {
        PillBar::starting_at(catalog.clone(), initial.as_deref(), haptics.clone()).unwrap_or_else(
            |e| {
                tracing::warn!(error = %e, "using default selection");
                PillBar::new(catalog, haptics)
            },
        )
    });
    let mut menu_for = use_signal(|| None::<String>);

    let appearance = props.appearance;
    let on_selection_change = props.on_selection_change;
    let items: Vec<FilterItem> = bar.read().catalog().items().to_vec();
    let selected = bar.read().selected().map(str::to_string);

    let actions = props.actions.clone();
    let menu = menu_for().map(|title| {
        let target = title.clone();
        rsx! {
            PillContextMenu {
                title,
                on_action: move |action| {
                    bar.read().context_action_with(actions.as_ref(), &target, action);
                    menu_for.set(None);
                },
                on_dismiss: move |_| menu_for.set(None),
            }
        }
    });

    rsx! {
        div { class: "pill-bar",
            div {
                class: "pill-row",
                role: "radiogroup",
                "aria-label": "Filter categories",
                for item in items {
                    {
                        let is_selected = selected.as_deref() == Some(item.title.as_str());
                        rsx! {
                            FilterPill {
                                key: "{item.title}",
                                item: item.clone(),
                                is_selected,
                                appearance,
                                on_tap: move |title: String| {
                                    let transition = bar.write().tap(&title);
                                    let changed = transition.as_ref().and_then(|t| t.changed_to());
                                    if let (Some(to), Some(handler)) = (changed, on_selection_change) {
                                        handler.call(to.to_string());
                                    }
                                },
                                on_context_menu: move |title: String| menu_for.set(Some(title)),
                            }
                        }
                    }
                }
            }
            {menu}
        }
    }
}

/// Properties for a single pill
#[derive(Clone, PartialEq, Props)]
pub struct FilterPillProps {
    pub item: FilterItem,
    #[props(default = false)]
    pub is_selected: bool,
    #[props(default)]
    pub appearance: AppearanceMode,
    /// Called with the pill title on click
    pub on_tap: EventHandler<String>,
    /// Called with the pill title on secondary click
    #[props(default)]
    pub on_context_menu: Option<EventHandler<String>>,
}

/// One capsule button
///
/// Tracks its own pressed state: set on pointer/touch down, cleared on
/// release, leave and cancel.
#[component]
pub fn FilterPill(props: FilterPillProps) -> Element {
    let mut is_pressed = use_signal(|| false);

    let appearance = props.appearance;
    let pressed = is_pressed();
    let style = style_for(&props.item, props.is_selected, pressed, appearance).to_css(appearance);

    let on_tap = props.on_tap;
    let on_context_menu = props.on_context_menu;
    let tap_title = props.item.title.clone();
    let menu_title = props.item.title.clone();

    rsx! {
        button {
            class: pill_class(props.is_selected, pressed),
            r#type: "button",
            role: "radio",
            "aria-checked": if props.is_selected { "true" } else { "false" },
            style: "{style}",
            onmousedown: move |_| is_pressed.set(true),
            onmouseup: move |_| is_pressed.set(false),
            onmouseleave: move |_| is_pressed.set(false),
            ontouchstart: move |_| is_pressed.set(true),
            ontouchend: move |_| is_pressed.set(false),
            ontouchcancel: move |_| is_pressed.set(false),
            onclick: move |_| on_tap.call(tap_title.clone()),
            oncontextmenu: move |evt| {
                evt.prevent_default();
                is_pressed.set(false);
                if let Some(handler) = on_context_menu {
                    handler.call(menu_title.clone());
                }
            },
            PillIcon { name: props.item.icon_name.clone() }
            PillLabel { title: props.item.title.clone(), count: props.item.badge_count }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pill_classes() {
        assert_eq!(pill_class(false, false), "pill");
        assert_eq!(pill_class(true, false), "pill selected");
        assert_eq!(pill_class(false, true), "pill pressed");
        assert_eq!(pill_class(true, true), "pill selected pressed");
    }

    #[test]
    fn default_props_use_accessories_catalog() {
        assert_eq!(Catalog::default().len(), 9);
        assert_eq!(AppearanceMode::default(), AppearanceMode::Light);
    }
}
