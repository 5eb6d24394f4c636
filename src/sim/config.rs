//! Rink, paddle and puck geometry
//!
//! Fixed for the lifetime of a match. Defaults come from [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Playable rink bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rink {
    pub width: f32,
    pub height: f32,
    /// Margin between canvas edge and the playable boundary
    pub wall_inset: f32,
}

impl Default for Rink {
    fn default() -> Self {
        Self {
            width: RINK_WIDTH,
            height: RINK_HEIGHT,
            wall_inset: WALL_INSET,
        }
    }
}

/// Paddle size and speed
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaddleConfig {
    pub width: f32,
    pub height: f32,
    /// Pixels per second
    pub speed: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
            speed: PADDLE_SPEED,
        }
    }
}

/// Puck size and speed limits
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PuckConfig {
    pub radius: f32,
    pub base_speed: f32,
    pub max_speed: f32,
    /// Per-tick velocity multiplier, 0 < friction < 1
    pub friction: f32,
}

impl Default for PuckConfig {
    fn default() -> Self {
        Self {
            radius: PUCK_RADIUS,
            base_speed: PUCK_BASE_SPEED,
            max_speed: PUCK_MAX_SPEED,
            friction: PUCK_FRICTION,
        }
    }
}

impl PuckConfig {
    /// Speed floor while the puck is in play
    pub fn min_speed(&self) -> f32 {
        self.base_speed * MIN_SPEED_FACTOR
    }
}

/// Complete static configuration for a match
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    pub rink: Rink,
    pub paddle: PaddleConfig,
    pub puck: PuckConfig,
}

impl Config {
    /// Highest legal paddle top edge
    pub fn paddle_min_y(&self) -> f32 {
        self.rink.wall_inset
    }

    /// Lowest legal paddle top edge
    pub fn paddle_max_y(&self) -> f32 {
        self.rink.height - self.paddle.height - self.rink.wall_inset
    }

    /// Paddle top edge that centers it vertically
    pub fn paddle_center_y(&self) -> f32 {
        self.rink.height / 2.0 - self.paddle.height / 2.0
    }

    /// Fixed x of a paddle's left edge
    pub fn paddle_x(&self, side: super::Side) -> f32 {
        match side {
            super::Side::Left => self.rink.wall_inset,
            super::Side::Right => self.rink.width - self.paddle.width - self.rink.wall_inset,
        }
    }
}
