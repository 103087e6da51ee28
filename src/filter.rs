//! Catalog filtering.
//!
//! [`filter`] is a stable, side-effect free selection over catalog records:
//! the output keeps the input order and is recomputed from scratch whenever
//! any criterion changes.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::catalog::GameRecord;

/// Genre selector value that matches every genre.
pub const ALL_GENRES: &str = "all";

/// Library tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Tab {
    #[default]
    All,
    Favorites,
    /// Recently played. No play history is kept, so this matches every
    /// record.
    Recent,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::All, Tab::Favorites, Tab::Recent];

    pub fn as_str(self) -> &'static str {
        match self {
            Tab::All => "all",
            Tab::Favorites => "favorites",
            Tab::Recent => "recent",
        }
    }

    /// Whether `record` belongs on this tab.
    pub fn matches(self, record: &GameRecord) -> bool {
        match self {
            Tab::All | Tab::Recent => true,
            Tab::Favorites => record.is_favorite,
        }
    }

    /// Text shown when the tab has nothing to list.
    pub fn empty_message(self) -> &'static str {
        match self {
            Tab::All => "No games found. Try adjusting your filters.",
            Tab::Favorites => "No favorite games found.",
            Tab::Recent => "No recently played games.",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown tab {0:?} (expected all, favorites or recent)")]
pub struct UnknownTab(pub String);

impl FromStr for Tab {
    type Err = UnknownTab;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tab::ALL
            .into_iter()
            .find(|tab| tab.as_str() == s)
            .ok_or_else(|| UnknownTab(s.to_string()))
    }
}

/// Everything that decides which records are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub search: String,
    /// A genre name, or [`ALL_GENRES`].
    pub genre: String,
    pub tab: Tab,
    /// Console as named on records, e.g. `"Nintendo"`.
    pub console: String,
}

impl FilterCriteria {
    pub fn for_console(console: &str) -> Self {
        Self {
            search: String::new(),
            genre: ALL_GENRES.to_string(),
            tab: Tab::All,
            console: console.to_string(),
        }
    }

    /// Whether a single record passes every criterion.
    pub fn matches(&self, record: &GameRecord) -> bool {
        self.matches_with(record, &self.search.to_lowercase())
    }

    fn matches_with(&self, record: &GameRecord, needle: &str) -> bool {
        matches_search(record, needle)
            && (self.genre == ALL_GENRES || record.genre == self.genre)
            && record.console == self.console
            && self.tab.matches(record)
    }
}

fn matches_search(record: &GameRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.description.to_lowercase().contains(needle)
}

/// Records passing `criteria`, in catalog order.
pub fn filter<'a>(records: &'a [GameRecord], criteria: &FilterCriteria) -> Vec<&'a GameRecord> {
    let needle = criteria.search.to_lowercase();
    records
        .iter()
        .filter(|r| criteria.matches_with(r, &needle))
        .collect()
}

/// Genre selector entries: `"all"` then each distinct genre in order of
/// first appearance.
pub fn genres(records: &[GameRecord]) -> Vec<&str> {
    let mut out = vec![ALL_GENRES];
    for record in records {
        if !out.contains(&record.genre.as_str()) {
            out.push(&record.genre);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample_records;
    use pretty_assertions::assert_eq;

    fn ids<'a>(records: &[&'a GameRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn nintendo_all_tab_keeps_order() {
        let records = sample_records();
        let visible = filter(&records, &FilterCriteria::for_console("Nintendo"));
        assert_eq!(ids(&visible), ["1", "2", "4", "6"]);
    }

    #[test]
    fn favorites_tab_only_favorites() {
        let records = sample_records();
        let mut criteria = FilterCriteria::for_console("Nintendo");
        criteria.tab = Tab::Favorites;
        let visible = filter(&records, &criteria);
        assert_eq!(ids(&visible), ["1"]);
        assert!(visible.iter().all(|r| r.is_favorite));
    }

    #[test]
    fn recent_tab_matches_everything() {
        let records = sample_records();
        let mut criteria = FilterCriteria::for_console("Nintendo");
        criteria.tab = Tab::Recent;
        assert_eq!(ids(&filter(&records, &criteria)), ["1", "2", "4", "6"]);
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let records = sample_records();
        let mut criteria = FilterCriteria::for_console("Nintendo");

        criteria.search = "ZELDA".to_string();
        assert_eq!(ids(&filter(&records, &criteria)), ["2"]);

        // "bowser" only appears in a description
        criteria.search = "bowser".to_string();
        assert_eq!(ids(&filter(&records, &criteria)), ["1"]);

        criteria.search = "no such game".to_string();
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn genre_filter_is_exact() {
        let records = sample_records();
        let mut criteria = FilterCriteria::for_console("Nintendo");
        criteria.genre = "Action-Adventure".to_string();
        assert_eq!(ids(&filter(&records, &criteria)), ["2", "6"]);

        criteria.genre = "platformer".to_string();
        assert!(filter(&records, &criteria).is_empty());
    }

    #[test]
    fn console_match_is_exact() {
        let records = sample_records();
        assert!(filter(&records, &FilterCriteria::for_console("nintendo")).is_empty());
        assert_eq!(ids(&filter(&records, &FilterCriteria::for_console("Sega"))), ["3"]);
    }

    #[test]
    fn genres_in_first_seen_order() {
        let records = sample_records();
        assert_eq!(
            genres(&records),
            ["all", "Platformer", "Action-Adventure", "3D Platformer"]
        );
        assert_eq!(genres(&[]), ["all"]);
    }

    #[test]
    fn tab_parsing() {
        assert_eq!("favorites".parse::<Tab>(), Ok(Tab::Favorites));
        assert_eq!("recent".parse::<Tab>(), Ok(Tab::Recent));
        assert_eq!("Recent".parse::<Tab>(), Err(UnknownTab("Recent".to_string())));
        assert_eq!(Tab::default(), Tab::All);
    }
}
