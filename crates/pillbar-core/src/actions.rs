//! Context menu extension point.
//!
//! Each pill offers "Add to favorites" and "Share". The bar accepts a handler
//! for them but works without one; with no handler both are no-ops.

use std::fmt;
use std::sync::Arc;

use crate::catalog::FilterItem;

/// Entries of the pill context menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ContextAction {
    AddToFavorites,
    Share,
}

impl ContextAction {
    /// Menu order
    pub const ALL: [ContextAction; 2] = [ContextAction::AddToFavorites, ContextAction::Share];

    pub fn label(&self) -> &'static str {
        match self {
            ContextAction::AddToFavorites => "Add to favorites",
            ContextAction::Share => "Share",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            ContextAction::AddToFavorites => "star",
            ContextAction::Share => "square.and.arrow.up",
        }
    }
}

/// Handler for context menu actions. Both hooks default to doing nothing.
pub trait PillActions: Send + Sync {
    fn on_favorite(&self, _item: &FilterItem) {}

    fn on_share(&self, _item: &FilterItem) {}
}

/// Shared, pointer-compared handle to a [`PillActions`] implementation
#[derive(Clone)]
pub struct ActionsHandle(Arc<dyn PillActions>);

impl ActionsHandle {
    pub fn new(actions: impl PillActions + 'static) -> Self {
        Self(Arc::new(actions))
    }

    pub fn dispatch(&self, action: ContextAction, item: &FilterItem) {
        match action {
            ContextAction::AddToFavorites => self.0.on_favorite(item),
            ContextAction::Share => self.0.on_share(item),
        }
    }
}

impl PartialEq for ActionsHandle {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for ActionsHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ActionsHandle(..)")
    }
}
