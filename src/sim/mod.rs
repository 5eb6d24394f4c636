//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Elapsed time passed in explicitly, never read from a clock
//! - Seeded RNG only, injected by the caller
//! - Input arrives as a per-tick snapshot, never ambient key state
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod round;
pub mod state;
pub mod tick;

pub use collision::{PaddleHit, goal_scored, paddle_collision, reflect_off_walls};
pub use config::{Config, PaddleConfig, PuckConfig, Rink};
pub use round::Match;
pub use state::{GameEvent, GamePhase, GameState, MatchState, Paddle, Puck, Side, Snapshot};
pub use tick::{PaddleIntent, TickInput, step};
