//! ROM naming and path helpers.
//!
//! ROM images are opaque byte buffers served from `/games/{console}/{file}`.
//! Nothing here looks inside a ROM; the only validation is the per-console
//! extension allow-list.

use std::fmt;

use crate::core::consoles;

/// Root under which ROM files are served.
pub const GAMES_ROOT: &str = "/games";

/// A ROM requested for one play attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RomDescriptor {
    pub console: String,
    pub filename: String,
    pub path: String,
    /// Byte length, known only after a successful fetch.
    pub size: Option<usize>,
}

impl RomDescriptor {
    pub fn new(console: &str, filename: &str) -> Self {
        Self {
            console: console.to_string(),
            filename: filename.to_string(),
            path: path_for(console, filename),
            size: None,
        }
    }

    /// Same descriptor with the fetched length recorded.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }
}

impl fmt::Display for RomDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.size {
            Some(size) => write!(f, "{} ({} bytes)", self.path, size),
            None => write!(f, "{}", self.path),
        }
    }
}

/// Server path of a ROM. Plain concatenation, no validation.
pub fn path_for(console: &str, filename: &str) -> String {
    format!("{}/{}/{}", GAMES_ROOT, console, filename)
}

/// Check `filename` against the allowed suffixes for `console`.
///
/// The console key must match exactly; the filename is lower-cased before
/// its suffix (from the last `.`, or the whole name if there is none) is
/// compared.
pub fn is_valid_extension(console: &str, filename: &str) -> bool {
    let allowed = consoles::extensions_for(console);
    if allowed.is_empty() {
        return false;
    }

    let lowered = filename.to_lowercase();
    let ext = match lowered.rfind('.') {
        Some(dot) => &lowered[dot..],
        None => lowered.as_str(),
    };
    allowed.contains(&ext)
}

/// Derive a display title from a ROM filename.
///
/// `"super_mario-bros.nes"` becomes `"Super Mario Bros"`. A filename without
/// an extension has no stem and yields an empty title.
pub fn parse_game_title(filename: &str) -> String {
    let stem = filename.rfind('.').map(|dot| &filename[..dot]).unwrap_or("");

    let mut title = String::with_capacity(stem.len());
    let mut prev_is_word = false;
    for ch in stem.chars() {
        let ch = if ch == '-' || ch == '_' { ' ' } else { ch };
        let is_word = ch.is_ascii_alphanumeric();
        if is_word && !prev_is_word {
            title.push(ch.to_ascii_uppercase());
        } else {
            title.push(ch);
        }
        prev_is_word = is_word;
    }
    title
}

/// ROM filename expected for a game title on `console`.
///
/// `("The Legend of Zelda", "Nintendo")` gives `"the-legend-of-zelda.nes"`.
pub fn rom_filename_for(title: &str, console: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut in_space = false;
    for ch in title.to_lowercase().chars() {
        if ch.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(ch);
            in_space = false;
        }
    }
    format!("{}.{}", slug, consoles::default_extension(console))
}
