//! Emulator session placeholder
//!
//! Holds the ROM bytes and the player-facing controls of a game screen.
//! There is no emulation core behind it: the ROM is kept as an opaque buffer
//! and the controls only flip flags.

/// Volume a new session starts with.
pub const DEFAULT_VOLUME: u8 = 50;
/// Upper bound for [`EmulatorSession::set_volume`].
pub const MAX_VOLUME: u8 = 100;

/// State of one game screen
#[derive(Debug)]
pub struct EmulatorSession {
    pub title: String,
    pub console: String,
    rom: Option<Vec<u8>>,
    loading: bool,

    // Player controls
    pub paused: bool,
    pub muted: bool,
    pub fullscreen: bool,
    pub favorite: bool,
    volume: u8,
}

impl EmulatorSession {
    /// Create a session waiting for its ROM
    pub fn new(title: &str, console: &str) -> Self {
        Self {
            title: title.to_string(),
            console: console.to_string(),
            rom: None,
            loading: true,
            paused: false,
            muted: false,
            fullscreen: false,
            favorite: false,
            volume: DEFAULT_VOLUME,
        }
    }

    /// Finish loading, with or without a ROM
    pub fn attach_rom(&mut self, rom: Option<Vec<u8>>) {
        if rom.is_none() {
            log::warn!("session for {} started without a ROM", self.title);
        }
        self.rom = rom;
        self.loading = false;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn rom(&self) -> Option<&[u8]> {
        self.rom.as_deref()
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }

    /// Set the volume, clamped to `0..=MAX_VOLUME`
    pub fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(MAX_VOLUME);
    }

    pub fn volume(&self) -> u8 {
        self.volume
    }

    /// Get current session summary
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            rom_bytes: self.rom.as_ref().map_or(0, Vec::len),
            loading: self.loading,
            paused: self.paused,
            volume: if self.muted { 0 } else { self.volume },
        }
    }
}

/// Session summary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub rom_bytes: usize,
    pub loading: bool,
    pub paused: bool,
    /// Effective volume, zero while muted.
    pub volume: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_initialization() {
        let session = EmulatorSession::new("Super Mario Bros", "Nintendo");
        assert!(session.is_loading());
        assert!(session.rom().is_none());
        assert_eq!(session.volume(), DEFAULT_VOLUME);
        assert!(!session.paused);
    }

    #[test]
    fn session_attach_rom() {
        let mut session = EmulatorSession::new("Super Mario Bros", "Nintendo");
        session.attach_rom(Some(vec![1, 2, 3]));
        assert!(!session.is_loading());
        assert_eq!(session.rom(), Some(&[1u8, 2, 3][..]));
        assert_eq!(session.stats().rom_bytes, 3);

        let mut empty = EmulatorSession::new("Metroid Prime", "Nintendo");
        empty.attach_rom(None);
        assert!(!empty.is_loading());
        assert_eq!(empty.stats().rom_bytes, 0);
    }

    #[test]
    fn session_controls_toggle() {
        let mut session = EmulatorSession::new("Sonic the Hedgehog", "Sega");
        session.toggle_pause();
        session.toggle_fullscreen();
        session.toggle_favorite();
        assert!(session.paused && session.fullscreen && session.favorite);
        session.toggle_pause();
        assert!(!session.paused);
    }

    #[test]
    fn session_volume_clamped_and_muted() {
        let mut session = EmulatorSession::new("Super Mario Galaxy", "Wii");
        session.set_volume(250);
        assert_eq!(session.volume(), MAX_VOLUME);
        session.set_volume(20);
        assert_eq!(session.stats().volume, 20);
        session.toggle_mute();
        assert_eq!(session.stats().volume, 0);
        assert_eq!(session.volume(), 20);
    }
}
