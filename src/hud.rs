//! Status line and hit banner
//!
//! Presentation state driven by [`GameEvent`]s. Transient messages are
//! expiring values counted down by [`Hud::advance`] with the frame time, so
//! nothing here schedules callbacks or touches the simulation clock.

use crate::settings::Settings;
use crate::sim::GameEvent;

const START_STATUS: &str = "Press Space to start";
const RUNNING_STATUS: &str = "Game on! Press Space to pause";
const PAUSED_STATUS: &str = "Paused. Press Space to resume";
const RESET_STATUS: &str = "Game reset. Press Space to start";
const CLEAN_HIT_FLASH: &str = "Clean hit! Speed burst!";
const CLEAN_HIT_BANNER: &str = "Clean Hit!";

/// A message that disappears once its time runs out
#[derive(Debug, Clone, PartialEq)]
pub struct Expiring {
    pub text: String,
    /// Seconds left on screen
    pub remaining: f32,
}

impl Expiring {
    pub fn new(text: impl Into<String>, secs: f32) -> Self {
        Self {
            text: text.into(),
            remaining: secs,
        }
    }

    /// Count down; returns false once expired
    fn advance(&mut self, dt: f32) -> bool {
        self.remaining -= dt.max(0.0);
        self.remaining > 0.0
    }
}

/// On-screen text state
#[derive(Debug, Clone)]
pub struct Hud {
    /// Status shown whenever no flash is active
    status: String,
    flash: Option<Expiring>,
    banner: Option<Expiring>,
    flash_secs: f32,
    banner_secs: f32,
    banner_enabled: bool,
}

impl Hud {
    pub fn new(settings: &Settings) -> Self {
        Self {
            status: START_STATUS.to_string(),
            flash: None,
            banner: None,
            flash_secs: settings.status_flash_secs,
            banner_secs: settings.banner_secs,
            banner_enabled: settings.effective_banner(),
        }
    }

    /// Replace the persistent status, cancelling any flash
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = text.into();
        self.flash = None;
    }

    /// Show `text` briefly, then fall back to the persistent status
    pub fn flash_status(&mut self, text: impl Into<String>) {
        self.flash = Some(Expiring::new(text, self.flash_secs));
    }

    pub fn show_banner(&mut self, text: impl Into<String>) {
        if self.banner_enabled {
            self.banner = Some(Expiring::new(text, self.banner_secs));
        }
    }

    /// Update text for an event from the round controller
    pub fn apply(&mut self, event: &GameEvent) {
        match event {
            GameEvent::GoalScored { side } => {
                self.set_status(format!(
                    "{} scores! Press Space to serve",
                    side.player_name()
                ));
            }
            GameEvent::CleanHit { .. } => {
                self.flash_status(CLEAN_HIT_FLASH);
                self.show_banner(CLEAN_HIT_BANNER);
            }
            GameEvent::Served { .. } | GameEvent::Resumed => self.set_status(RUNNING_STATUS),
            GameEvent::Paused => self.set_status(PAUSED_STATUS),
            GameEvent::Reset => self.set_status(RESET_STATUS),
        }
    }

    /// Count transient messages down by one frame
    pub fn advance(&mut self, dt: f32) {
        if self.flash.as_mut().is_some_and(|flash| !flash.advance(dt)) {
            self.flash = None;
        }
        if self.banner.as_mut().is_some_and(|banner| !banner.advance(dt)) {
            self.banner = None;
        }
    }

    /// Text the status element should show right now
    pub fn status_text(&self) -> &str {
        self.flash
            .as_ref()
            .map(|flash| flash.text.as_str())
            .unwrap_or(self.status.as_str())
    }

    pub fn banner_text(&self) -> Option<&str> {
        self.banner.as_ref().map(|banner| banner.text.as_str())
    }
}

impl Default for Hud {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}
