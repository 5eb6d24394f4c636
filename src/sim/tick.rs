//! Per-frame physics tick
//!
//! Advances paddles and puck by the elapsed frame time and reports what
//! happened. Scoring and serve state are the round controller's job.

use rand::Rng;

use super::collision::{enforce_min_speed, goal_scored, paddle_collision, reflect_off_walls};
use super::state::{GameEvent, GameState, Side};

/// Vertical movement requested for one paddle this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaddleIntent {
    #[default]
    Idle,
    Up,
    Down,
}

impl PaddleIntent {
    /// Screen-space direction (y grows downward)
    pub fn direction(self) -> f32 {
        match self {
            PaddleIntent::Idle => 0.0,
            PaddleIntent::Up => -1.0,
            PaddleIntent::Down => 1.0,
        }
    }

    /// Combine two held keys; both or neither means stay put
    pub fn from_keys(up: bool, down: bool) -> Self {
        match (up, down) {
            (true, false) => PaddleIntent::Up,
            (false, true) => PaddleIntent::Down,
            _ => PaddleIntent::Idle,
        }
    }
}

/// Input snapshot for a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickInput {
    pub left: PaddleIntent,
    pub right: PaddleIntent,
}

impl TickInput {
    pub fn intent(&self, side: Side) -> PaddleIntent {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Advance paddles and puck by `dt` seconds
///
/// Returns at most one `GoalScored` or, failing that, at most one `CleanHit`.
/// A non-positive or non-finite `dt` leaves the state untouched.
pub fn step<R: Rng + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    dt: f32,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if !(dt.is_finite() && dt > 0.0) {
        return events;
    }

    state.time_ticks += 1;
    let config = state.config;

    // Paddles
    for side in [Side::Left, Side::Right] {
        let direction = input.intent(side).direction();
        state.paddle_mut(side).advance(direction, dt, &config);
    }

    // Puck integration, then per-tick friction
    let puck = &mut state.puck;
    puck.pos += puck.vel * dt;
    puck.vel *= config.puck.friction;

    let min_speed = config.puck.min_speed();
    if puck.speed() < min_speed {
        // Only a dead stop needs a fresh heading
        let fallback = if puck.is_frozen() {
            log::debug!("Puck stalled, picking a random direction");
            rng.random::<f32>() * std::f32::consts::TAU
        } else {
            0.0
        };
        puck.vel = enforce_min_speed(puck.vel, min_speed, fallback);
    }

    reflect_off_walls(puck, &config);

    if let Some(side) = goal_scored(puck, &config) {
        events.push(GameEvent::GoalScored { side });
        return events;
    }

    for side in [Side::Left, Side::Right] {
        let paddle = state.paddle(side).clone();
        if let Some(hit) = paddle_collision(&mut state.puck, &paddle, &config) {
            log::debug!(
                "{:?} paddle hit: offset={:.2} speed={:.0} clean={}",
                side,
                hit.offset,
                hit.speed,
                hit.clean
            );
            if hit.clean {
                events.push(GameEvent::CleanHit { side });
            }
        }
    }

    log::trace!(
        "tick {}: puck pos={:?} vel={:?}",
        state.time_ticks,
        state.puck.pos,
        state.puck.vel
    );
    events
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn intent() -> impl Strategy<Value = PaddleIntent> {
        prop_oneof![
            Just(PaddleIntent::Idle),
            Just(PaddleIntent::Up),
            Just(PaddleIntent::Down),
        ]
    }

    proptest! {
        #[test]
        fn prop_paddles_stay_in_band(
            frames in prop::collection::vec((intent(), intent(), 0.0f32..0.1), 1..200),
            seed in any::<u64>(),
        ) {
            let mut state = GameState::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            let (lo, hi) = (state.config.paddle_min_y(), state.config.paddle_max_y());

            for (left, right, dt) in frames {
                step(&mut state, &TickInput { left, right }, dt, &mut rng);
                prop_assert!(state.left.pos.y >= lo && state.left.pos.y <= hi);
                prop_assert!(state.right.pos.y >= lo && state.right.pos.y <= hi);
            }
        }

        #[test]
        fn prop_speed_stays_in_band(
            angle in 0.0f32..std::f32::consts::TAU,
            speed in 0.0f32..1800.0,
            frames in prop::collection::vec((intent(), intent(), 0.001f32..0.05), 1..300),
            seed in any::<u64>(),
        ) {
            let mut state = GameState::default();
            let mut rng = Pcg32::seed_from_u64(seed);
            state.puck.vel = crate::unit_at(angle) * speed;
            let floor = state.config.puck.min_speed();
            let cap = state.config.puck.max_speed;

            for (left, right, dt) in frames {
                let events = step(&mut state, &TickInput { left, right }, dt, &mut rng);
                let speed = state.puck.speed();
                prop_assert!(speed >= floor - 1e-2, "speed {} below floor", speed);
                prop_assert!(speed <= cap + 1e-2, "speed {} above cap", speed);
                if events.iter().any(|e| matches!(e, GameEvent::GoalScored { .. })) {
                    break;
                }
            }
        }
    }
}
