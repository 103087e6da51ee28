// Copyright (C) 2025 Dayton Fishell
// RetroShelf Game Library Launcher
// This file is part of RetroShelf.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version. See the LICENSE file in the project root for details.
// SPDX-License-Identifier: GPL-3.0-or-later

// Command line front end for the RetroShelf library.
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use retroshelf_core::core::consoles;
use retroshelf_core::filter::{self, Tab};
use retroshelf_core::launcher::add_games_hint;
use retroshelf_core::locator::DEFAULT_BASE_URL;
use retroshelf_core::{Action, Catalog, LaunchOutcome, Launcher, LibraryState, LocatorConfig, RomLocator};

/// Retro game library and ROM launcher
#[derive(Parser, Debug)]
#[command(name = "retroshelf", version, about, long_about = None)]
struct Cli {
    /// Server that hosts the games directory
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// List supported consoles
    Consoles,
    /// List genres in the catalog
    Genres,
    /// List the games of a console
    List {
        /// Console storage key, e.g. nintendo
        console: String,
        /// Match text in titles and descriptions
        #[arg(long)]
        search: Option<String>,
        /// Only show this genre
        #[arg(long)]
        genre: Option<String>,
        /// all, favorites or recent
        #[arg(long)]
        tab: Option<Tab>,
    },
    /// Probe and download a game's ROM
    Play { console: String, game_id: String },
    /// Check the extension of a ROM file and probe the server for it
    Check { console: String, filename: String },
}

/// State changes requested by the `list` filter options.
fn list_actions(search: Option<String>, genre: Option<String>, tab: Option<Tab>) -> Vec<Action> {
    let mut actions = Vec::new();
    if let Some(search) = search {
        actions.push(Action::SetSearch(search));
    }
    if let Some(genre) = genre {
        actions.push(Action::SetGenre(genre));
    }
    if let Some(tab) = tab {
        actions.push(Action::SetTab(tab));
    }
    actions
}

/// Process exit status for a play attempt.
fn play_status(outcome: &LaunchOutcome) -> u8 {
    match outcome {
        LaunchOutcome::Ready { .. } => 0,
        LaunchOutcome::RomNotFound { .. } => 1,
        LaunchOutcome::UnknownGame(_) => 2,
    }
}

fn main() -> Result<ExitCode> {
    env_logger::init();

    let cli = Cli::parse();
    let config = LocatorConfig::new(cli.base_url);
    let catalog = Catalog::sample();

    match cli.command {
        Command::Consoles => {
            for spec in &consoles::CONSOLES {
                println!(
                    "{:<10} {:<14} {}  [{}]",
                    spec.key,
                    spec.display_name,
                    spec.route,
                    spec.extensions.join(", ")
                );
            }
        }
        Command::Genres => {
            for genre in filter::genres(catalog.records()) {
                println!("{}", genre);
            }
        }
        Command::List {
            console,
            search,
            genre,
            tab,
        } => {
            let state = LibraryState::new()
                .reduce(Action::SelectConsole(console))
                .apply_all(list_actions(search, genre, tab));
            let visible = filter::filter(catalog.records(), &state.criteria);

            println!("{} Games ({})", state.criteria.console, state.criteria.tab);
            println!("========================");
            if visible.is_empty() {
                println!("{}", state.criteria.tab.empty_message());
            }
            for game in visible {
                let star = if game.is_favorite { "*" } else { " " };
                println!(
                    "{} {:>3}  {:<24} {}  {}",
                    star, game.id, game.title, game.release_year, game.genre
                );
            }
        }
        Command::Play { console, game_id } => {
            let state = LibraryState::new().reduce(Action::SelectConsole(console.clone()));
            let launcher = Launcher::new(RomLocator::new(config));

            let outcome = launcher.play(&catalog, &state, &game_id);
            println!("{}", outcome);
            match &outcome {
                LaunchOutcome::Ready { session, .. } => {
                    let stats = session.stats();
                    println!("  ROM size: {} bytes", stats.rom_bytes);
                    println!("  Volume:   {}", stats.volume);
                }
                LaunchOutcome::RomNotFound { .. } => {
                    println!();
                    println!("{}", add_games_hint(&console));
                }
                LaunchOutcome::UnknownGame(_) => {}
            }
            return Ok(ExitCode::from(play_status(&outcome)));
        }
        Command::Check { console, filename } => {
            let locator = RomLocator::new(config);
            let valid = locator.is_valid_extension(&console, &filename);
            let found = locator.exists(&console, &filename);

            println!("path:      {}", locator.path_for(&console, &filename));
            println!("extension: {}", if valid { "ok" } else { "not supported" });
            println!("on server: {}", if found { "yes" } else { "no" });
        }
    }

    Ok(ExitCode::SUCCESS)
}
