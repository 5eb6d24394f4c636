//! Rink Pong - a two-paddle puck game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, round state)
//! - `input`: Held-key tracking and key-to-intent mapping
//! - `hud`: Expiring status text and hit banner
//! - `settings`: Player preferences (key bindings, HUD timings)

pub mod hud;
pub mod input;
pub mod settings;
pub mod sim;

pub use hud::Hud;
pub use input::{Command, HeldKeys, InputMapper, Key};
pub use settings::{KeyBindings, Settings};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Nominal frame timestep (60 Hz display)
    pub const FRAME_DT: f32 = 1.0 / 60.0;
    /// Largest elapsed time a single tick will integrate (stalled tab, debugger)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Rink dimensions
    pub const RINK_WIDTH: f32 = 1000.0;
    pub const RINK_HEIGHT: f32 = 600.0;
    pub const WALL_INSET: f32 = 12.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 18.0;
    pub const PADDLE_HEIGHT: f32 = 110.0;
    /// Vertical paddle speed (pixels/s)
    pub const PADDLE_SPEED: f32 = 620.0;

    /// Puck defaults
    pub const PUCK_RADIUS: f32 = 14.0;
    pub const PUCK_BASE_SPEED: f32 = 760.0;
    pub const PUCK_MAX_SPEED: f32 = 1800.0;
    /// Velocity multiplier applied once per tick (not scaled by dt)
    pub const PUCK_FRICTION: f32 = 0.9985;
    /// Puck never drops below `PUCK_BASE_SPEED * MIN_SPEED_FACTOR` while in play
    pub const MIN_SPEED_FACTOR: f32 = 0.45;

    /// Serve launch spread either side of horizontal (30 degrees)
    pub const SERVE_SPREAD: f32 = std::f32::consts::PI / 6.0;
    /// Max bounce angle off a paddle edge (60 degrees)
    pub const BOUNCE_SPREAD: f32 = std::f32::consts::PI / 3.0;

    /// Hits within this fraction of the paddle half-height count as clean
    pub const CLEAN_HIT_ZONE: f32 = 0.2;
    pub const CLEAN_HIT_MULTIPLIER: f32 = 1.45;
    pub const CLEAN_HIT_BONUS: f32 = 160.0;
    pub const HIT_MULTIPLIER: f32 = 1.05;
    pub const HIT_BONUS: f32 = 20.0;
}

/// Unit vector pointing at `angle` radians (y grows downward on screen)
#[inline]
pub fn unit_at(angle: f32) -> Vec2 {
    Vec2::new(angle.cos(), angle.sin())
}

/// Velocity of magnitude `speed` at `angle`, mirrored horizontally by `direction` (+1/-1)
#[inline]
pub fn launch_velocity(angle: f32, speed: f32, direction: f32) -> Vec2 {
    let dir = unit_at(angle);
    Vec2::new(dir.x * speed * direction, dir.y * speed)
}
