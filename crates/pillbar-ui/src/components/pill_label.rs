//! Pill Label Component
//!
//! Title text followed by a small count badge when the pill has one.

use dioxus::prelude::*;

/// Text shown in the badge, `None` when no badge should render
pub fn badge_text(count: Option<u32>) -> Option<String> {
    count.filter(|c| *c > 0).map(|c| c.to_string())
}

/// Title with an optional badge
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     PillLabel { title: "MagSafe".to_string(), count: 12 }
/// }
/// ```
#[component]
pub fn PillLabel(title: String, count: Option<u32>) -> Element {
    rsx! {
        span { class: "pill-label",
            span { class: "pill-title", "{title}" }
            if let Some(badge) = badge_text(count) {
                span {
                    class: "pill-badge",
                    "aria-label": "{badge} items",
                    "{badge}"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_hidden_for_none_and_zero() {
        assert_eq!(badge_text(None), None);
        assert_eq!(badge_text(Some(0)), None);
    }

    #[test]
    fn badge_shows_count() {
        assert_eq!(badge_text(Some(12)).as_deref(), Some("12"));
        assert_eq!(badge_text(Some(4)).as_deref(), Some("4"));
    }
}
