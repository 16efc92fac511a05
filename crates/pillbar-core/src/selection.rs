//! Single-selection state machine and the bar controller that owns it.
//!
//! States are `None` (unselected) or `Some(title)` for a title in the
//! catalog. The only transition is `select(title)`: a known title always
//! becomes the selection (re-selecting never toggles off), an unknown one is
//! ignored.

use tracing::{debug, info};

use crate::actions::{ActionsHandle, ContextAction};
use crate::catalog::{Catalog, DEFAULT_SELECTION};
use crate::error::{PillError, PillResult};
use crate::feedback::{HapticsHandle, ImpactStyle};

/// Outcome of a successful select
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transition {
    /// Selection moved to a different title (or from none)
    Changed { from: Option<String>, to: String },
    /// The already selected title was selected again
    Reselected(String),
}

impl Transition {
    /// Title selected after the transition
    pub fn title(&self) -> &str {
        match self {
            Transition::Changed { to, .. } => to,
            Transition::Reselected(title) => title,
        }
    }

    pub fn is_change(&self) -> bool {
        matches!(self, Transition::Changed { .. })
    }

    /// New title when the selection moved, `None` for a re-selection.
    ///
    /// Selection-change listeners are notified with this.
    pub fn changed_to(&self) -> Option<&str> {
        match self {
            Transition::Changed { to, .. } => Some(to),
            Transition::Reselected(_) => None,
        }
    }
}

/// Which pill, if any, is currently active.
///
/// A non-empty selection always names a title of the catalog it was
/// validated against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    /// Starts on the default title when the catalog has it, unselected otherwise.
    pub fn new(catalog: &Catalog) -> Self {
        let selected = catalog
            .contains(DEFAULT_SELECTION)
            .then(|| DEFAULT_SELECTION.to_string());
        Self { selected }
    }

    /// Starts on `initial`, or on the default when `initial` is `None`.
    pub fn starting_at(catalog: &Catalog, initial: Option<&str>) -> PillResult<Self> {
        match initial {
            None => Ok(Self::new(catalog)),
            Some(title) if catalog.contains(title) => Ok(Self {
                selected: Some(title.to_string()),
            }),
            Some(title) => Err(PillError::UnknownTitle(title.to_string())),
        }
    }

    pub fn unselected() -> Self {
        Self { selected: None }
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn is_selected(&self, title: &str) -> bool {
        self.selected.as_deref() == Some(title)
    }

    /// Select `title`, failing if the catalog does not contain it.
    pub fn try_select(&mut self, catalog: &Catalog, title: &str) -> PillResult<Transition> {
        if !catalog.contains(title) {
            return Err(PillError::UnknownTitle(title.to_string()));
        }

        if self.is_selected(title) {
            return Ok(Transition::Reselected(title.to_string()));
        }

        let from = self.selected.replace(title.to_string());
        Ok(Transition::Changed {
            from,
            to: title.to_string(),
        })
    }

    /// Select `title`; unknown titles leave the state untouched.
    pub fn select(&mut self, catalog: &Catalog, title: &str) -> Option<Transition> {
        match self.try_select(catalog, title) {
            Ok(transition) => Some(transition),
            Err(e) => {
                debug!(error = %e, "ignoring selection");
                None
            }
        }
    }
}

/// The filter bar: catalog, selection and the collaborators a tap touches.
#[derive(Clone, Debug, PartialEq)]
pub struct PillBar {
    catalog: Catalog,
    selection: SelectionState,
    haptics: HapticsHandle,
    actions: Option<ActionsHandle>,
}

impl PillBar {
    pub fn new(catalog: Catalog, haptics: HapticsHandle) -> Self {
        let selection = SelectionState::new(&catalog);
        Self {
            catalog,
            selection,
            haptics,
            actions: None,
        }
    }

    /// Bar starting on `initial` instead of the default title.
    pub fn starting_at(
        catalog: Catalog,
        initial: Option<&str>,
        haptics: HapticsHandle,
    ) -> PillResult<Self> {
        let selection = SelectionState::starting_at(&catalog, initial)?;
        Ok(Self {
            catalog,
            selection,
            haptics,
            actions: None,
        })
    }

    pub fn with_actions(mut self, actions: Option<ActionsHandle>) -> Self {
        self.actions = actions;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    pub fn is_selected(&self, title: &str) -> bool {
        self.selection.is_selected(title)
    }

    /// Handle a tap on the pill titled `title`.
    ///
    /// Plays exactly one rigid impact when the title is known, none otherwise.
    pub fn tap(&mut self, title: &str) -> Option<Transition> {
        let transition = self.selection.select(&self.catalog, title)?;
        self.haptics.impact(ImpactStyle::Rigid);
        info!(title, changed = transition.is_change(), "pill tapped");
        Some(transition)
    }

    /// Run a context menu action for the pill titled `title` with the
    /// handler installed through [`PillBar::with_actions`].
    ///
    /// Returns false when the title is unknown or no handler is installed.
    pub fn context_action(&self, title: &str, action: ContextAction) -> bool {
        self.context_action_with(self.actions.as_ref(), title, action)
    }

    /// Run a context menu action with an explicit handler, for hosts whose
    /// handler can change after the bar is built.
    pub fn context_action_with(
        &self,
        actions: Option<&ActionsHandle>,
        title: &str,
        action: ContextAction,
    ) -> bool {
        let (Some(actions), Some(item)) = (actions, self.catalog.get(title)) else {
            debug!(title, action = action.label(), "context action not handled");
            return false;
        };
        actions.dispatch(action, item);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_all_accessories() {
        let state = SelectionState::new(&Catalog::accessories());
        assert_eq!(state.selected(), Some("All Accessories"));
    }

    #[test]
    fn starts_unselected_without_default_title() {
        let catalog = Catalog::from_titles(["Mac", "iPad"]).unwrap();
        assert_eq!(SelectionState::new(&catalog).selected(), None);
    }

    #[test]
    fn starting_at_validates_title() {
        let catalog = Catalog::accessories();
        let state = SelectionState::starting_at(&catalog, Some("AirTag")).unwrap();
        assert_eq!(state.selected(), Some("AirTag"));

        let err = SelectionState::starting_at(&catalog, Some("Vision Pro")).unwrap_err();
        assert_eq!(err, PillError::UnknownTitle("Vision Pro".to_string()));

        let default = SelectionState::starting_at(&catalog, None).unwrap();
        assert_eq!(default.selected(), Some("All Accessories"));
    }

    #[test]
    fn select_changes_then_reselects() {
        let catalog = Catalog::accessories();
        let mut state = SelectionState::new(&catalog);

        let first = state.select(&catalog, "MagSafe").unwrap();
        assert_eq!(
            first,
            Transition::Changed {
                from: Some("All Accessories".to_string()),
                to: "MagSafe".to_string(),
            }
        );

        let second = state.select(&catalog, "MagSafe").unwrap();
        assert_eq!(second, Transition::Reselected("MagSafe".to_string()));
        assert_eq!(state.selected(), Some("MagSafe"));
    }

    #[test]
    fn unknown_title_is_ignored() {
        let catalog = Catalog::accessories();
        let mut state = SelectionState::new(&catalog);
        state.select(&catalog, "iPad");

        assert!(state.select(&catalog, "NonexistentCategory").is_none());
        assert_eq!(state.selected(), Some("iPad"));
    }

    #[test]
    fn select_from_unselected() {
        let catalog = Catalog::accessories();
        let mut state = SelectionState::unselected();
        let t = state.select(&catalog, "Mac").unwrap();
        assert_eq!(t, Transition::Changed { from: None, to: "Mac".to_string() });
        assert!(t.is_change());
        assert_eq!(t.title(), "Mac");
        assert_eq!(t.changed_to(), Some("Mac"));
        assert_eq!(Transition::Reselected("Mac".to_string()).changed_to(), None);
    }

    #[test]
    fn context_action_without_handler_is_noop() {
        let bar = PillBar::new(Catalog::accessories(), HapticsHandle::silent());
        assert!(!bar.context_action("Mac", ContextAction::Share));
    }
}
