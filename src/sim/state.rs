//! Game state and core simulation types
//!
//! Everything a frame needs to render, plus the match bookkeeping the round
//! controller mutates, lives here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::config::Config;

/// Which player a paddle, point or serve belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal direction a paddle on this side sends the puck (+1 right, -1 left)
    pub fn facing(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Player name shown in status text
    pub fn player_name(self) -> &'static str {
        match self {
            Side::Left => "Player 1",
            Side::Right => "Player 2",
        }
    }
}

/// Current phase of the round, derived from the match flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Puck frozen at center, waiting for the first serve or after a reset
    AwaitingServe,
    /// A point was just awarded; waiting for the next serve
    GoalPause,
    /// Active gameplay
    Running,
    /// Play suspended mid-rally, puck kept in place
    Paused,
}

/// Discrete events emitted for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Puck fully left the rink; `side` earns the point
    GoalScored { side: Side },
    /// Puck struck within the clean zone of `side`'s paddle
    CleanHit { side: Side },
    /// Puck launched from center heading toward `toward`
    Served { toward: Side },
    Paused,
    /// Play continued without a new serve
    Resumed,
    /// Scores cleared
    Reset,
}

/// One of the two paddles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top-left corner; `x` never changes
    pub pos: Vec2,
    /// Applied vertical direction this tick (-1 up, 0 idle, +1 down)
    pub vy: f32,
}

impl Paddle {
    /// Create a vertically centered paddle for `side`
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            pos: Vec2::new(config.paddle_x(side), config.paddle_center_y()),
            vy: 0.0,
        }
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self, config: &Config) -> f32 {
        self.pos.y + config.paddle.height
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self, config: &Config) -> f32 {
        self.pos.x + config.paddle.width
    }

    /// Vertical midpoint of the paddle face
    pub fn center_y(&self, config: &Config) -> f32 {
        self.pos.y + config.paddle.height / 2.0
    }

    /// Move by `direction * speed * dt`, then clamp into the legal band
    pub fn advance(&mut self, direction: f32, dt: f32, config: &Config) {
        self.vy = direction;
        self.pos.y += direction * config.paddle.speed * dt;
        self.clamp(config);
    }

    /// Keep the paddle inside `[wall_inset, height - paddle_height - wall_inset]`
    pub fn clamp(&mut self, config: &Config) {
        self.pos.y = self.pos.y.clamp(config.paddle_min_y(), config.paddle_max_y());
    }

    pub fn recenter(&mut self, config: &Config) {
        self.pos.y = config.paddle_center_y();
        self.vy = 0.0;
    }
}

/// The puck
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Puck {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Puck {
    /// Frozen puck at rink center
    pub fn centered(config: &Config) -> Self {
        Self {
            pos: Vec2::new(config.rink.width / 2.0, config.rink.height / 2.0),
            vel: Vec2::ZERO,
        }
    }

    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Stop in place
    pub fn freeze(&mut self) {
        self.vel = Vec2::ZERO;
    }

    pub fn is_frozen(&self) -> bool {
        self.vel == Vec2::ZERO
    }
}

/// Scores and serve/pause flags
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub left_score: u32,
    pub right_score: u32,
    pub running: bool,
    pub awaiting_serve: bool,
    /// Side that won the most recent point, cleared on reset
    pub last_scorer: Option<Side>,
}

impl MatchState {
    /// Fresh match: zero scores, waiting for the opening serve
    pub fn new() -> Self {
        Self {
            awaiting_serve: true,
            ..Default::default()
        }
    }

    pub fn score(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left_score,
            Side::Right => self.right_score,
        }
    }

    pub fn phase(&self) -> GamePhase {
        match (self.running, self.awaiting_serve, self.last_scorer) {
            (true, _, _) => GamePhase::Running,
            (false, true, Some(_)) => GamePhase::GoalPause,
            (false, true, None) => GamePhase::AwaitingServe,
            (false, false, _) => GamePhase::Paused,
        }
    }
}

/// Read-only view handed to the renderer each frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    pub left_paddle: Vec2,
    pub right_paddle: Vec2,
    /// Applied paddle directions this tick (-1 up, 0 idle, +1 down)
    pub left_paddle_vy: f32,
    pub right_paddle_vy: f32,
    pub puck: Vec2,
    pub left_score: u32,
    pub right_score: u32,
    pub running: bool,
    pub awaiting_serve: bool,
    pub time_ticks: u64,
}

/// Complete entity and match state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: Config,
    pub left: Paddle,
    pub right: Paddle,
    pub puck: Puck,
    pub score: MatchState,
    /// Simulation ticks advanced while running
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new match with centered paddles and a frozen puck
    pub fn new(config: Config) -> Self {
        Self {
            left: Paddle::new(Side::Left, &config),
            right: Paddle::new(Side::Right, &config),
            puck: Puck::centered(&config),
            score: MatchState::new(),
            time_ticks: 0,
            config,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn recenter_paddles(&mut self) {
        let config = self.config;
        self.left.recenter(&config);
        self.right.recenter(&config);
    }

    /// Move the puck back to center without velocity
    pub fn center_puck(&mut self) {
        self.puck = Puck::centered(&self.config);
    }

    pub fn phase(&self) -> GamePhase {
        self.score.phase()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left_paddle: self.left.pos,
            right_paddle: self.right.pos,
            left_paddle_vy: self.left.vy,
            right_paddle_vy: self.right.vy,
            puck: self.puck.pos,
            left_score: self.score.left_score,
            right_score: self.score.right_score,
            running: self.score.running,
            awaiting_serve: self.score.awaiting_serve,
            time_ticks: self.time_ticks,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
