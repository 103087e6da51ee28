//! In-memory game catalog.
//!
//! The catalog starts from a fixed list of sample records (or a caller
//! supplied list) and is only ever changed by toggling favorite flags.
//! Nothing is persisted.

#[cfg(feature = "serde-catalog")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Metadata for one game in the library.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-catalog",
    derive(Serialize, Deserialize),
    serde(rename_all = "camelCase")
)]
pub struct GameRecord {
    pub id: String,
    pub title: String,
    pub cover_art: String,
    pub description: String,
    pub release_year: i32,
    pub genre: String,
    pub is_favorite: bool,
    /// Owning console as shown to players, e.g. `"Nintendo"`.
    pub console: String,
}

/// Errors produced while loading a catalog from text.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[cfg(feature = "serde-catalog")]
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[cfg(feature = "serde-catalog")]
    #[error("invalid catalog YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("duplicate game id {0}")]
    DuplicateId(String),
}

/// The set of games available for display.
#[derive(Debug, Clone)]
pub struct Catalog {
    records: Vec<GameRecord>,
}

impl Catalog {
    /// Catalog holding the built-in sample games.
    pub fn sample() -> Self {
        Self {
            records: sample_records(),
        }
    }

    /// Catalog over `records`, falling back to the samples when empty.
    pub fn with_records(records: Vec<GameRecord>) -> Self {
        if records.is_empty() {
            Self::sample()
        } else {
            Self { records }
        }
    }

    /// Like [`Catalog::with_records`], but rejects repeated ids.
    pub fn try_with_records(records: Vec<GameRecord>) -> Result<Self, CatalogError> {
        for (idx, record) in records.iter().enumerate() {
            if records[..idx].iter().any(|r| r.id == record.id) {
                return Err(CatalogError::DuplicateId(record.id.clone()));
            }
        }
        Ok(Self::with_records(records))
    }

    #[cfg(feature = "serde-catalog")]
    pub fn from_json(text: &str) -> Result<Self, CatalogError> {
        let records: Vec<GameRecord> = serde_json::from_str(text)?;
        Self::try_with_records(records)
    }

    #[cfg(feature = "serde-catalog")]
    pub fn from_yaml(text: &str) -> Result<Self, CatalogError> {
        let records: Vec<GameRecord> = serde_yaml::from_str(text)?;
        Self::try_with_records(records)
    }

    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn get(&self, id: &str) -> Option<&GameRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Flip the favorite flag of game `id`, returning the new value.
    pub fn toggle_favorite(&mut self, id: &str) -> Option<bool> {
        let record = self.records.iter_mut().find(|r| r.id == id)?;
        record.is_favorite = !record.is_favorite;
        log::debug!("favorite for game {} is now {}", id, record.is_favorite);
        Some(record.is_favorite)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::sample()
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    id: &str,
    title: &str,
    cover_art: &str,
    description: &str,
    release_year: i32,
    genre: &str,
    is_favorite: bool,
    console: &str,
) -> GameRecord {
    GameRecord {
        id: id.to_string(),
        title: title.to_string(),
        cover_art: cover_art.to_string(),
        description: description.to_string(),
        release_year,
        genre: genre.to_string(),
        is_favorite,
        console: console.to_string(),
    }
}

/// The six sample games shipped with the launcher.
pub fn sample_records() -> Vec<GameRecord> {
    vec![
        record(
            "1",
            "Super Mario Bros",
            "https://images.unsplash.com/photo-1566576912321-d58ddd7a6088?w=300&q=80",
            "Jump and run through the Mushroom Kingdom to save Princess Peach from Bowser.",
            1985,
            "Platformer",
            true,
            "Nintendo",
        ),
        record(
            "2",
            "The Legend of Zelda",
            "https://images.unsplash.com/photo-1642068221395-c8d57196e30a?w=300&q=80",
            "Embark on an epic adventure to save Princess Zelda and defeat Ganon.",
            1986,
            "Action-Adventure",
            false,
            "Nintendo",
        ),
        record(
            "3",
            "Sonic the Hedgehog",
            "https://images.unsplash.com/photo-1550745165-9bc0b252726f?w=300&q=80",
            "Speed through levels as Sonic to defeat Dr. Robotnik and save the animals.",
            1991,
            "Platformer",
            true,
            "Sega",
        ),
        record(
            "4",
            "Donkey Kong Country",
            "https://images.unsplash.com/photo-1551103782-8ab07afd45c1?w=300&q=80",
            "Help Donkey Kong and Diddy Kong recover their stolen banana hoard from King K. Rool.",
            1994,
            "Platformer",
            false,
            "Nintendo",
        ),
        record(
            "5",
            "Super Mario Galaxy",
            "https://images.unsplash.com/photo-1614469723922-c043ad9fd036?w=300&q=80",
            "Explore galaxies and collect Power Stars to rescue Princess Peach from Bowser.",
            2007,
            "3D Platformer",
            true,
            "Wii",
        ),
        record(
            "6",
            "Metroid Prime",
            "https://images.unsplash.com/photo-1511512578047-dfb367046420?w=300&q=80",
            "Explore the planet Tallon IV as Samus Aran and stop the Space Pirates.",
            2002,
            "Action-Adventure",
            false,
            "Nintendo",
        ),
    ]
}
