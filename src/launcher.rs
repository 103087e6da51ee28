//! Play flow: from a selected game to a session holding its ROM.

use std::fmt;

use log::info;

use crate::catalog::Catalog;
use crate::core::consoles;
use crate::filter;
use crate::locator::{HttpTransport, RomLocator, Transport};
use crate::rom::{self, RomDescriptor};
use crate::session::EmulatorSession;
use crate::state::LibraryState;

/// Result of trying to start a game.
#[derive(Debug)]
pub enum LaunchOutcome {
    Ready {
        rom: RomDescriptor,
        session: EmulatorSession,
    },
    /// The ROM is missing or the server could not be reached.
    RomNotFound { title: String, directory: String },
    /// No visible game has this id.
    UnknownGame(String),
}

impl LaunchOutcome {
    pub fn is_ready(&self) -> bool {
        matches!(self, LaunchOutcome::Ready { .. })
    }
}

impl fmt::Display for LaunchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LaunchOutcome::Ready { rom, session } => {
                write!(f, "Loaded {} from {}", session.title, rom)
            }
            LaunchOutcome::RomNotFound { title, .. } => write!(
                f,
                "ROM file not found for {}. Please add the ROM file to the games directory.",
                title
            ),
            LaunchOutcome::UnknownGame(id) => write!(f, "No game with id {} in this view", id),
        }
    }
}

/// Instructions for adding ROMs for `console`.
pub fn add_games_hint(console: &str) -> String {
    format!(
        "To add games:\n1. Place ROM files in public/games/{}/\n2. Supported formats: {}\n3. Run the launcher again",
        console.to_lowercase(),
        consoles::default_extension(console).to_uppercase()
    )
}

/// Starts games from the catalog using a [`RomLocator`].
pub struct Launcher<T: Transport = HttpTransport> {
    locator: RomLocator<T>,
}

impl<T: Transport> Launcher<T> {
    pub fn new(locator: RomLocator<T>) -> Self {
        Self { locator }
    }

    pub fn locator(&self) -> &RomLocator<T> {
        &self.locator
    }

    /// Try to start game `game_id` as currently visible under `state`.
    pub fn play(&self, catalog: &Catalog, state: &LibraryState, game_id: &str) -> LaunchOutcome {
        let visible = filter::filter(catalog.records(), &state.criteria);
        let Some(game) = visible.into_iter().find(|g| g.id == game_id) else {
            return LaunchOutcome::UnknownGame(game_id.to_string());
        };

        let console = state.criteria.console.to_lowercase();
        let filename = rom::rom_filename_for(&game.title, &state.criteria.console);
        let not_found = || {
            info!(
                "ROM file not found for {}. Please add the ROM file to public/games/{}/",
                game.title, console
            );
            LaunchOutcome::RomNotFound {
                title: game.title.clone(),
                directory: format!("games/{}/", console),
            }
        };

        if !self.locator.exists(&console, &filename) {
            return not_found();
        }

        info!("Loading game ROM: {}", self.locator.path_for(&console, &filename));
        let Some((rom, bytes)) = self.locator.locate(&console, &filename) else {
            return not_found();
        };

        let mut session = EmulatorSession::new(&game.title, &game.console);
        session.favorite = game.is_favorite;
        session.attach_rom(Some(bytes));
        LaunchOutcome::Ready { rom, session }
    }
}
