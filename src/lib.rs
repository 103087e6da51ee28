// Copyright (C) 2025 Dayton Fishell
// RetroShelf Game Library Launcher
// This file is part of RetroShelf.
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version. See the LICENSE file in the project root for details.
// SPDX-License-Identifier: GPL-3.0-or-later

//! RetroShelf retro game library
//!
//! This library provides the non-visual parts of a retro game launcher:
//! the console table, the game catalog and its filter, library UI state,
//! and a ROM locator that fetches ROM images over HTTP.

pub mod catalog;
pub mod core;
pub mod filter;
pub mod launcher;
pub mod locator;
pub mod rom;
pub mod session;
pub mod state;

// Re-export commonly used types
pub use catalog::{Catalog, GameRecord};
pub use crate::core::{CONSOLES, ConsoleSpec};
pub use filter::{FilterCriteria, Tab};
pub use launcher::{LaunchOutcome, Launcher};
pub use locator::{LocatorConfig, RomLocator};
pub use rom::RomDescriptor;
pub use session::EmulatorSession;
pub use state::{Action, LibraryState, View};
