//! Compiled-in console table.
//!
//! Every console-specific literal (storage key, display names, allowed ROM
//! suffixes, library route) lives in [`CONSOLES`]. Lookups by storage key are
//! exact and case-sensitive, so `"Nintendo"` is not a known key while
//! `"nintendo"` is.

/// Static description of one supported console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleSpec {
    /// Storage key used to namespace ROM paths (`/games/{key}/...`).
    pub key: &'static str,
    /// Name shown on the console grid.
    pub display_name: &'static str,
    /// Console name as stored on catalog records.
    pub record_name: &'static str,
    /// Accepted ROM file suffixes, lower-case and including the dot.
    pub extensions: &'static [&'static str],
    /// Library route for this console.
    pub route: &'static str,
    /// Extension used when deriving a ROM filename from a game title.
    pub default_extension: &'static str,
}

/// Extension used for consoles without a table entry.
pub const FALLBACK_EXTENSION: &str = "rom";

/// All supported consoles, in console-grid display order.
pub const CONSOLES: [ConsoleSpec; 3] = [
    ConsoleSpec {
        key: "wii",
        display_name: "Nintendo Wii",
        record_name: "Wii",
        extensions: &[".wbfs", ".iso"],
        route: "/library/wii",
        default_extension: "wbfs",
    },
    ConsoleSpec {
        key: "nintendo",
        display_name: "Nintendo NES",
        record_name: "Nintendo",
        extensions: &[".nes"],
        route: "/library/nintendo",
        default_extension: "nes",
    },
    ConsoleSpec {
        key: "sega",
        display_name: "Sega Genesis",
        record_name: "Sega",
        extensions: &[".smd", ".bin"],
        route: "/library/sega",
        default_extension: "smd",
    },
];

/// Look up a console by its exact storage key.
pub fn lookup(key: &str) -> Option<&'static ConsoleSpec> {
    CONSOLES.iter().find(|spec| spec.key == key)
}

/// Look up a console by the name used on catalog records (e.g. `"Sega"`).
pub fn by_record_name(name: &str) -> Option<&'static ConsoleSpec> {
    CONSOLES.iter().find(|spec| spec.record_name == name)
}

/// Allowed suffixes for `key`, empty for unknown keys.
pub fn extensions_for(key: &str) -> &'static [&'static str] {
    lookup(key).map(|spec| spec.extensions).unwrap_or(&[])
}

/// ROM extension (without dot) used for titles on `console`.
///
/// Unlike [`lookup`], this lower-cases its argument first, so both `"Sega"`
/// and `"sega"` resolve to `smd`.
pub fn default_extension(console: &str) -> &'static str {
    lookup(&console.to_lowercase())
        .map(|spec| spec.default_extension)
        .unwrap_or(FALLBACK_EXTENSION)
}
