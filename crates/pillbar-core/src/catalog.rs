//! Item catalog: the ordered set of filter pills and their display metadata.
//!
//! Icon and badge lookups are total. Titles the tables do not know fall back
//! to the grid glyph and no badge, so the bar keeps rendering if the catalog
//! and the tables drift apart.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{PillError, PillResult};

/// Title selected when the bar is first shown
pub const DEFAULT_SELECTION: &str = "All Accessories";

/// Heading rendered above the bar
pub const HEADING: &str = "Accessories";

/// Glyph used for any title without an explicit icon
pub const FALLBACK_ICON: &str = "square.grid.2x2";

const ACCESSORY_TITLES: [&str; 9] = [
    "All Accessories",
    "MagSafe",
    "Apple Watch Bands",
    "iPhone",
    "iPad",
    "Mac",
    "AirPods",
    "Apple TV",
    "AirTag",
];

/// Symbolic icon name for a pill title.
pub fn icon_for(title: &str) -> &'static str {
    match title {
        "All Accessories" => "square.grid.2x2",
        "MagSafe" => "bolt.circle",
        "Apple Watch Bands" => "applewatch",
        "iPhone" => "iphone",
        "iPad" => "ipad",
        "Mac" => "laptopcomputer",
        "AirPods" => "airpodspro",
        "Apple TV" => "appletv.fill",
        "AirTag" => "tag",
        _ => FALLBACK_ICON,
    }
}

/// Badge count for a pill title, if it has one.
pub fn badge_for(title: &str) -> Option<u32> {
    match title {
        "MagSafe" => Some(12),
        "AirPods" => Some(4),
        _ => None,
    }
}

/// The fixed accessories catalog in display order.
pub fn items() -> Vec<FilterItem> {
    ACCESSORY_TITLES.iter().map(|t| FilterItem::new(*t)).collect()
}

/// A single filter pill.
///
/// The title is the identity key; icon and badge are derived from it.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct FilterItem {
    pub title: String,
    pub icon_name: String,
    pub badge_count: Option<u32>,
}

impl FilterItem {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            icon_name: icon_for(&title).to_string(),
            badge_count: badge_for(&title),
            title,
        }
    }

    /// Whether a badge should be drawn (absent and zero both hide it)
    pub fn has_badge(&self) -> bool {
        matches!(self.badge_count, Some(n) if n > 0)
    }
}

/// Ordered collection of filter items with unique titles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Catalog {
    items: Vec<FilterItem>,
}

impl Catalog {
    /// The nine-item accessories catalog
    pub fn accessories() -> Self {
        Self { items: items() }
    }

    /// Build a catalog from titles, keeping their order.
    ///
    /// Rejects empty and duplicate titles.
    pub fn from_titles<I, S>(titles: I) -> PillResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut items = Vec::new();

        for title in titles {
            let title = title.into();
            if title.is_empty() {
                return Err(PillError::EmptyTitle);
            }
            if !seen.insert(title.clone()) {
                return Err(PillError::DuplicateTitle(title));
            }
            items.push(FilterItem::new(title));
        }

        Ok(Self { items })
    }

    pub fn items(&self) -> &[FilterItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FilterItem> {
        self.items.iter()
    }

    pub fn get(&self, title: &str) -> Option<&FilterItem> {
        self.items.iter().find(|item| item.title == title)
    }

    pub fn contains(&self, title: &str) -> bool {
        self.get(title).is_some()
    }

    /// Display index of a title
    pub fn position(&self, title: &str) -> Option<usize> {
        self.items.iter().position(|item| item.title == title)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::accessories()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a FilterItem;
    type IntoIter = std::slice::Iter<'a, FilterItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
