//! Game settings and preferences
//!
//! Stored as JSON by the host; unknown or missing fields fall back to defaults.

use serde::{Deserialize, Serialize};

use crate::input::Key;

/// Key codes (DOM `KeyboardEvent.code` names) bound to each control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub left_up: String,
    pub left_down: String,
    pub right_up: String,
    pub right_down: String,
    pub toggle_pause: String,
    pub reset: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            left_up: "KeyW".to_string(),
            left_down: "KeyS".to_string(),
            right_up: "ArrowUp".to_string(),
            right_down: "ArrowDown".to_string(),
            toggle_pause: "Space".to_string(),
            reset: "KeyR".to_string(),
        }
    }
}

impl KeyBindings {
    /// Control bound to `code`, if any
    pub fn key_for(&self, code: &str) -> Option<Key> {
        [
            (&self.left_up, Key::LeftUp),
            (&self.left_down, Key::LeftDown),
            (&self.right_up, Key::RightUp),
            (&self.right_down, Key::RightDown),
            (&self.toggle_pause, Key::TogglePause),
            (&self.reset, Key::Reset),
        ]
        .into_iter()
        .find(|(bound, _)| bound.as_str() == code)
        .map(|(_, key)| key)
    }
}

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub bindings: KeyBindings,

    // === HUD ===
    /// How long a flashed status message stays up (seconds)
    pub status_flash_secs: f32,
    /// How long the clean-hit banner stays up (seconds)
    pub banner_secs: f32,
    /// Show the "Clean Hit!" banner
    pub clean_hit_banner: bool,

    // === Accessibility ===
    /// Reduced motion (no flashing banner)
    pub reduced_motion: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bindings: KeyBindings::default(),
            status_flash_secs: 1.0,
            banner_secs: 0.9,
            clean_hit_banner: true,
            reduced_motion: false,
        }
    }
}

impl Settings {
    /// Effective clean-hit banner (respects reduced_motion)
    pub fn effective_banner(&self) -> bool {
        self.clean_hit_banner && !self.reduced_motion
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse stored settings, falling back to defaults when absent or corrupt
    pub fn load(json: Option<&str>) -> Self {
        match json.map(Self::from_json) {
            Some(Ok(settings)) => {
                log::info!("Loaded settings");
                settings
            }
            Some(Err(err)) => {
                log::warn!("Ignoring unreadable settings: {}", err);
                Self::default()
            }
            None => {
                log::info!("Using default settings");
                Self::default()
            }
        }
    }
}
