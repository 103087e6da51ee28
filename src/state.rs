//! Library UI state.
//!
//! A [`LibraryState`] is an immutable snapshot. Every user interaction is an
//! [`Action`], and [`LibraryState::reduce`] produces the next snapshot.

use crate::core::consoles;
use crate::filter::{ALL_GENRES, FilterCriteria, Tab};

/// Console shown when the library opens without a selection.
pub const DEFAULT_CONSOLE: &str = "Nintendo";

/// Which screen is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Consoles,
    /// Game grid for the console with this storage key.
    Library(String),
}

/// User interactions that change library state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the library for a console storage key, e.g. `"sega"`.
    SelectConsole(String),
    BackToConsoles,
    SetSearch(String),
    SetGenre(String),
    SetTab(Tab),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryState {
    pub view: View,
    pub criteria: FilterCriteria,
}

impl LibraryState {
    pub fn new() -> Self {
        Self {
            view: View::Consoles,
            criteria: FilterCriteria::for_console(DEFAULT_CONSOLE),
        }
    }

    /// Apply `action`, returning the next snapshot.
    pub fn reduce(self, action: Action) -> Self {
        let Self { view, criteria } = self;
        match action {
            Action::SelectConsole(key) => {
                // records name consoles by display case; unknown keys are
                // passed through and simply match nothing
                let console = consoles::lookup(&key)
                    .map(|spec| spec.record_name.to_string())
                    .unwrap_or_else(|| key.clone());
                Self {
                    view: View::Library(key),
                    criteria: FilterCriteria::for_console(&console),
                }
            }
            Action::BackToConsoles => Self {
                view: View::Consoles,
                criteria,
            },
            Action::SetSearch(search) => Self {
                view,
                criteria: FilterCriteria { search, ..criteria },
            },
            Action::SetGenre(genre) => Self {
                view,
                criteria: FilterCriteria { genre, ..criteria },
            },
            Action::SetTab(tab) => Self {
                view,
                criteria: FilterCriteria { tab, ..criteria },
            },
        }
    }

    /// Fold a sequence of actions starting from this snapshot.
    pub fn apply_all(self, actions: impl IntoIterator<Item = Action>) -> Self {
        actions.into_iter().fold(self, Self::reduce)
    }

    /// Whether the genre selector is on its catch-all entry.
    pub fn all_genres(&self) -> bool {
        self.criteria.genre == ALL_GENRES
    }
}

impl Default for LibraryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_on_console_grid() {
        let state = LibraryState::new();
        assert_eq!(state.view, View::Consoles);
        assert_eq!(state.criteria, FilterCriteria::for_console("Nintendo"));
        assert!(state.all_genres());
    }

    #[test]
    fn selecting_console_resets_criteria() {
        let state = LibraryState::new().apply_all([
            Action::SetSearch("mario".into()),
            Action::SetTab(Tab::Favorites),
            Action::SelectConsole("sega".into()),
        ]);
        assert_eq!(state.view, View::Library("sega".into()));
        assert_eq!(state.criteria, FilterCriteria::for_console("Sega"));
    }

    #[test]
    fn field_updates_leave_others_alone() {
        let before = LibraryState::new().reduce(Action::SelectConsole("nintendo".into()));
        let after = before
            .clone()
            .reduce(Action::SetGenre("Platformer".into()))
            .reduce(Action::SetSearch("kong".into()));

        assert_eq!(after.view, before.view);
        assert_eq!(after.criteria.genre, "Platformer");
        assert_eq!(after.criteria.search, "kong");
        assert_eq!(after.criteria.tab, Tab::All);
        assert_eq!(after.criteria.console, "Nintendo");
        // the earlier snapshot is untouched
        assert_eq!(before.criteria.search, "");
    }

    #[test]
    fn back_keeps_criteria() {
        let state = LibraryState::new()
            .reduce(Action::SelectConsole("wii".into()))
            .reduce(Action::SetTab(Tab::Recent))
            .reduce(Action::BackToConsoles);
        assert_eq!(state.view, View::Consoles);
        assert_eq!(state.criteria.console, "Wii");
        assert_eq!(state.criteria.tab, Tab::Recent);
    }

    #[test]
    fn unknown_console_key_passes_through() {
        let state = LibraryState::new().reduce(Action::SelectConsole("atari".into()));
        assert_eq!(state.criteria.console, "atari");
    }
}
