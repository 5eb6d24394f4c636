//! Round controller
//!
//! Owns the game state and the match RNG, and drives the
//! serve -> running -> goal -> awaiting-serve cycle. Every transition is
//! total: pausing, resuming or resetting is valid from any phase.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::config::Config;
use super::state::{GameEvent, GamePhase, GameState, Side, Snapshot};
use super::tick::{TickInput, step};
use crate::consts::*;
use crate::launch_velocity;

/// A match between the two paddles
#[derive(Debug, Clone)]
pub struct Match {
    pub state: GameState,
    /// Seed the match RNG was created from
    pub seed: u64,
    rng: Pcg32,
}

impl Match {
    /// Create a match with default geometry and the given seed
    pub fn new(seed: u64) -> Self {
        Self::with_config(Config::default(), seed)
    }

    pub fn with_config(config: Config, seed: u64) -> Self {
        log::info!("New match (seed {})", seed);
        Self {
            state: GameState::new(config),
            seed,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Space bar: pause a running game, otherwise serve or resume
    pub fn on_toggle_pause(&mut self) -> GameEvent {
        if self.state.score.running {
            self.pause()
        } else {
            self.start_round()
        }
    }

    /// Clear scores and wait for a fresh opening serve
    pub fn on_reset(&mut self) -> GameEvent {
        let score = &mut self.state.score;
        score.left_score = 0;
        score.right_score = 0;
        score.last_scorer = None;
        score.awaiting_serve = true;
        score.running = false;
        self.freeze();
        log::info!("Match reset");
        GameEvent::Reset
    }

    /// Advance one frame; does nothing unless the game is running
    ///
    /// A non-positive or non-finite `dt` is a no-op. Otherwise `dt` is clamped
    /// to `MAX_FRAME_DT` so a stalled frame clock cannot teleport the puck
    /// through a paddle.
    pub fn tick(&mut self, input: &TickInput, dt: f32) -> Vec<GameEvent> {
        if !self.state.score.running || !(dt.is_finite() && dt > 0.0) {
            return Vec::new();
        }

        let dt = dt.min(MAX_FRAME_DT);
        let events = step(&mut self.state, input, dt, &mut self.rng);
        for event in &events {
            if let GameEvent::GoalScored { side } = *event {
                self.award_point(side);
            }
        }
        events
    }

    fn start_round(&mut self) -> GameEvent {
        if !self.state.score.awaiting_serve {
            self.state.score.running = true;
            log::info!("Resumed");
            return GameEvent::Resumed;
        }

        let toward = self.serve();
        self.state.score.awaiting_serve = false;
        self.state.score.running = true;
        GameEvent::Served { toward }
    }

    fn pause(&mut self) -> GameEvent {
        self.state.score.running = false;
        log::info!("Paused at tick {}", self.state.time_ticks);
        GameEvent::Paused
    }

    /// Launch the puck from center at base speed
    ///
    /// Heads right after a right-side point, left after a left-side point and
    /// either way on the opening serve. Returns the side it heads toward.
    fn serve(&mut self) -> Side {
        let toward = match self.state.score.last_scorer {
            Some(side) => side,
            None => {
                if self.rng.random_bool(0.5) {
                    Side::Right
                } else {
                    Side::Left
                }
            }
        };
        let direction = match toward {
            Side::Left => -1.0,
            Side::Right => 1.0,
        };
        let angle = self.rng.random::<f32>() * 2.0 * SERVE_SPREAD - SERVE_SPREAD;

        self.state.center_puck();
        self.state.puck.vel = launch_velocity(angle, self.state.config.puck.base_speed, direction);
        log::info!(
            "Serve toward {:?} at {:.1} degrees",
            toward,
            angle.to_degrees()
        );
        toward
    }

    fn award_point(&mut self, side: Side) {
        let score = &mut self.state.score;
        match side {
            Side::Left => score.left_score += 1,
            Side::Right => score.right_score += 1,
        }
        score.last_scorer = Some(side);
        score.awaiting_serve = true;
        score.running = false;
        log::info!(
            "{} scores ({} - {})",
            side.player_name(),
            score.left_score,
            score.right_score
        );
        self.freeze();
    }

    /// Stop the puck at center and recenter both paddles
    fn freeze(&mut self) {
        self.state.center_puck();
        self.state.recenter_paddles();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::PaddleIntent;
    use glam::Vec2;

    fn served(seed: u64) -> Match {
        let mut game = Match::new(seed);
        game.on_toggle_pause();
        game
    }

    /// Put the puck just inside the left goal line heading out
    fn shoot_left(game: &mut Match) {
        game.state.puck.pos = Vec2::new(-5.0, 300.0);
        game.state.puck.vel = Vec2::new(-900.0, 0.0);
    }

    #[test]
    fn test_new_match_waits_for_serve() {
        let mut game = Match::new(1);
        assert_eq!(game.phase(), GamePhase::AwaitingServe);

        let events = game.tick(&TickInput::default(), FRAME_DT);
        assert!(events.is_empty());
        assert_eq!(game.state.puck.vel, Vec2::ZERO);
        assert_eq!(game.state.time_ticks, 0);
    }

    #[test]
    fn test_serve_launches_at_base_speed() {
        for seed in 0..20 {
            let mut game = Match::new(seed);
            let event = game.on_toggle_pause();
            assert!(matches!(event, GameEvent::Served { .. }));
            assert_eq!(game.phase(), GamePhase::Running);

            let vel = game.state.puck.vel;
            assert!((vel.length() - 760.0).abs() < 1e-2);
            let angle = (vel.y / vel.length()).asin();
            assert!(angle.abs() <= SERVE_SPREAD + 1e-4);
        }
    }

    #[test]
    fn test_serve_is_reproducible() {
        let a = served(4242);
        let b = served(4242);
        assert_eq!(a.state.puck.vel, b.state.puck.vel);
    }

    #[test]
    fn test_pause_and_resume_keep_puck() {
        let mut game = served(9);
        for _ in 0..10 {
            game.tick(&TickInput::default(), FRAME_DT);
        }
        let pos = game.state.puck.pos;
        let vel = game.state.puck.vel;

        assert_eq!(game.on_toggle_pause(), GameEvent::Paused);
        assert_eq!(game.phase(), GamePhase::Paused);

        let input = TickInput {
            left: PaddleIntent::Down,
            ..Default::default()
        };
        assert!(game.tick(&input, FRAME_DT).is_empty());
        assert_eq!(game.state.puck.pos, pos);
        assert_eq!(game.state.left.pos.y, 245.0);

        assert_eq!(game.on_toggle_pause(), GameEvent::Resumed);
        assert_eq!(game.phase(), GamePhase::Running);
        assert_eq!(game.state.puck.pos, pos);
        assert_eq!(game.state.puck.vel, vel);
    }

    #[test]
    fn test_goal_awards_point_once() {
        let mut game = served(3);
        game.state.left.pos.y = 100.0;
        shoot_left(&mut game);

        let events = game.tick(&TickInput::default(), FRAME_DT);
        assert_eq!(events, vec![GameEvent::GoalScored { side: Side::Right }]);
        assert_eq!(game.state.score.right_score, 1);
        assert_eq!(game.state.score.left_score, 0);
        assert_eq!(game.state.score.last_scorer, Some(Side::Right));
        assert_eq!(game.phase(), GamePhase::GoalPause);
        assert_eq!(game.state.puck.vel, Vec2::ZERO);
        assert_eq!(game.state.left.pos.y, 245.0);

        // Frozen until the next serve
        for _ in 0..30 {
            assert!(game.tick(&TickInput::default(), FRAME_DT).is_empty());
        }
        assert_eq!(game.state.score.right_score, 1);
    }

    #[test]
    fn test_serve_follows_last_scorer() {
        for seed in 0..20 {
            let mut game = served(seed);
            shoot_left(&mut game);
            game.tick(&TickInput::default(), FRAME_DT);
            assert_eq!(game.state.score.last_scorer, Some(Side::Right));

            assert_eq!(game.on_toggle_pause(), GameEvent::Served { toward: Side::Right });
            assert!(game.state.puck.vel.x > 0.0);
            assert_eq!(game.state.puck.pos, Vec2::new(500.0, 300.0));

            game.state.puck.pos = Vec2::new(1005.0, 300.0);
            game.state.puck.vel = Vec2::new(900.0, 0.0);
            game.tick(&TickInput::default(), FRAME_DT);
            assert_eq!(game.state.score.last_scorer, Some(Side::Left));

            assert_eq!(game.on_toggle_pause(), GameEvent::Served { toward: Side::Left });
            assert!(game.state.puck.vel.x < 0.0);
        }
    }

    #[test]
    fn test_reset_mid_game() {
        let mut game = served(21);
        shoot_left(&mut game);
        game.tick(&TickInput::default(), FRAME_DT);
        game.on_toggle_pause();
        game.state.score.left_score = 4;
        game.state.left.pos.y = 40.0;
        game.state.right.pos.y = 400.0;
        assert_eq!(game.phase(), GamePhase::Running);

        assert_eq!(game.on_reset(), GameEvent::Reset);
        let score = &game.state.score;
        assert_eq!((score.left_score, score.right_score), (0, 0));
        assert!(score.awaiting_serve);
        assert!(!score.running);
        assert_eq!(score.last_scorer, None);
        assert_eq!(game.phase(), GamePhase::AwaitingServe);
        assert_eq!(game.state.puck.vel, Vec2::ZERO);
        assert_eq!(game.state.left.pos.y, 245.0);
        assert_eq!(game.state.right.pos.y, 245.0);
    }

    #[test]
    fn test_reset_from_every_phase() {
        let mut game = Match::new(8);
        game.on_reset();
        assert_eq!(game.phase(), GamePhase::AwaitingServe);

        game.on_toggle_pause();
        game.on_toggle_pause();
        assert_eq!(game.phase(), GamePhase::Paused);
        game.on_reset();
        assert_eq!(game.phase(), GamePhase::AwaitingServe);

        // Reset wipes the serve bias, so the next serve is a fresh opening serve
        assert!(matches!(game.on_toggle_pause(), GameEvent::Served { .. }));
    }

    #[test]
    fn test_degenerate_dt_is_noop() {
        let mut game = served(5);
        let pos = game.state.puck.pos;
        let vel = game.state.puck.vel;

        for dt in [f32::NAN, f32::INFINITY, f32::NEG_INFINITY, 0.0, -0.25] {
            assert!(game.tick(&TickInput::default(), dt).is_empty());
            assert_eq!(game.state.puck.pos, pos, "dt={} moved the puck", dt);
            assert_eq!(game.state.puck.vel, vel);
        }
        assert_eq!(game.state.time_ticks, 0);
        assert_eq!(game.phase(), GamePhase::Running);
    }

    #[test]
    fn test_large_dt_is_clamped() {
        let mut game = served(5);
        let start = game.state.puck.pos;
        let speed = game.state.puck.speed();

        game.tick(&TickInput::default(), 5.0);
        let travelled = (game.state.puck.pos - start).length();
        assert!(travelled <= speed * MAX_FRAME_DT + 1e-3);
    }
}
