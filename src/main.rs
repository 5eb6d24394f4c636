//! Rink Pong entry point
//!
//! Native headless driver: replays a scripted key sequence against the
//! simulation at 60 fps and logs what happens. A browser host wires the same
//! pieces to real key events and a canvas renderer.
//!
//! Usage: `rink-pong [seed] [settings.json]`

use rink_pong::consts::FRAME_DT;
use rink_pong::sim::{GameEvent, GamePhase, Match};
use rink_pong::{Hud, InputMapper, Settings};

/// Simulated session length
const DEMO_FRAMES: u32 = 60 * 60;
/// Frames to wait before serving again after a goal
const SERVE_DELAY_FRAMES: u32 = 45;

/// Everything one browser tab would hold
struct Game {
    game: Match,
    hud: Hud,
    input: InputMapper,
    last_timestamp: Option<f64>,
}

impl Game {
    fn new(seed: u64, settings: &Settings) -> Self {
        Self {
            game: Match::new(seed),
            hud: Hud::new(settings),
            input: InputMapper::new(settings.bindings.clone()),
            last_timestamp: None,
        }
    }

    fn key_down(&mut self, code: &str) {
        if let Some(command) = self.input.key_down(code) {
            let event = command.apply(&mut self.game);
            self.handle(event);
        }
    }

    fn key_up(&mut self, code: &str) {
        self.input.key_up(code);
    }

    /// Animation-frame callback; `timestamp` in milliseconds
    fn frame(&mut self, timestamp: f64) {
        let dt = match self.last_timestamp {
            Some(last) => ((timestamp - last) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_timestamp = Some(timestamp);

        let input = self.input.tick_input();
        for event in self.game.tick(&input, dt) {
            self.handle(event);
        }
        self.hud.advance(dt);
    }

    fn handle(&mut self, event: GameEvent) {
        self.hud.apply(&event);
        log::info!("{:?}: {}", event, self.hud.status_text());
    }
}

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let seed = args
        .next()
        .and_then(|arg| arg.parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    let settings_json = args.next().and_then(|path| match std::fs::read_to_string(&path) {
        Ok(json) => Some(json),
        Err(err) => {
            log::warn!("Could not read {}: {}", path, err);
            None
        }
    });
    let settings = Settings::load(settings_json.as_deref());

    log::info!("Rink Pong (headless) starting with seed {}", seed);
    let mut game = Game::new(seed, &settings);
    let bindings = settings.bindings.clone();

    let mut idle_frames = 0;
    for frame in 0..DEMO_FRAMES {
        // Scripted players: sweep each paddle up and down on different beats
        match frame % 120 {
            0 => {
                game.key_up(&bindings.left_down);
                game.key_down(&bindings.left_up);
            }
            60 => {
                game.key_up(&bindings.left_up);
                game.key_down(&bindings.left_down);
            }
            _ => {}
        }
        match frame % 90 {
            0 => {
                game.key_up(&bindings.right_up);
                game.key_down(&bindings.right_down);
            }
            45 => {
                game.key_up(&bindings.right_down);
                game.key_down(&bindings.right_up);
            }
            _ => {}
        }

        if matches!(game.game.phase(), GamePhase::AwaitingServe | GamePhase::GoalPause) {
            idle_frames += 1;
            if idle_frames >= SERVE_DELAY_FRAMES {
                game.key_down(&bindings.toggle_pause);
                game.key_up(&bindings.toggle_pause);
                idle_frames = 0;
            }
        }

        game.frame(f64::from(frame) * f64::from(FRAME_DT) * 1000.0);
    }

    let snapshot = game.game.snapshot();
    println!(
        "Final score after {} frames ({} ticks simulated): Player 1 {} - {} Player 2 ({})",
        DEMO_FRAMES,
        snapshot.time_ticks,
        snapshot.left_score,
        snapshot.right_score,
        game.hud.status_text()
    );
}
