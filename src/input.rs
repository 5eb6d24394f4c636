//! Keyboard input mapping
//!
//! Key events arrive between frames and only ever touch the held-key set.
//! Once per frame the set is read into a [`TickInput`] for the simulation,
//! so the physics never sees key state change mid-tick.

use std::collections::HashSet;

use crate::settings::KeyBindings;
use crate::sim::{GameEvent, Match, PaddleIntent, TickInput};

/// A bound game control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    LeftUp,
    LeftDown,
    RightUp,
    RightDown,
    TogglePause,
    Reset,
}

/// One-shot command triggered on key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    Reset,
}

impl Command {
    /// Forward the command to the round controller
    pub fn apply(self, game: &mut Match) -> GameEvent {
        match self {
            Command::TogglePause => game.on_toggle_pause(),
            Command::Reset => game.on_reset(),
        }
    }
}

/// Movement keys currently held down
#[derive(Debug, Clone, Default)]
pub struct HeldKeys {
    held: HashSet<Key>,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Drop everything (window lost focus, key-ups will never arrive)
    pub fn clear(&mut self) {
        self.held.clear();
    }

    /// Snapshot for one tick; opposing keys cancel out
    pub fn tick_input(&self) -> TickInput {
        TickInput {
            left: PaddleIntent::from_keys(self.is_held(Key::LeftUp), self.is_held(Key::LeftDown)),
            right: PaddleIntent::from_keys(
                self.is_held(Key::RightUp),
                self.is_held(Key::RightDown),
            ),
        }
    }
}

/// Turns raw key codes into held movement keys and one-shot commands
#[derive(Debug, Clone)]
pub struct InputMapper {
    bindings: KeyBindings,
    held: HeldKeys,
}

impl InputMapper {
    pub fn new(bindings: KeyBindings) -> Self {
        Self {
            bindings,
            held: HeldKeys::new(),
        }
    }

    /// Handle a key press; returns a command for pause/reset keys
    pub fn key_down(&mut self, code: &str) -> Option<Command> {
        match self.bindings.key_for(code)? {
            Key::TogglePause => Some(Command::TogglePause),
            Key::Reset => Some(Command::Reset),
            key => {
                self.held.press(key);
                None
            }
        }
    }

    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = self.bindings.key_for(code) {
            self.held.release(key);
        }
    }

    /// Whether the host should swallow this key's default browser action
    pub fn is_bound(&self, code: &str) -> bool {
        self.bindings.key_for(code).is_some()
    }

    pub fn held(&self) -> &HeldKeys {
        &self.held
    }

    pub fn clear(&mut self) {
        self.held.clear();
    }

    pub fn tick_input(&self) -> TickInput {
        self.held.tick_input()
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new(KeyBindings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movement_keys_are_held() {
        let mut input = InputMapper::default();
        assert_eq!(input.key_down("KeyW"), None);
        assert_eq!(input.key_down("ArrowDown"), None);

        let tick = input.tick_input();
        assert_eq!(tick.left, PaddleIntent::Up);
        assert_eq!(tick.right, PaddleIntent::Down);

        input.key_up("KeyW");
        assert_eq!(input.tick_input().left, PaddleIntent::Idle);
        assert_eq!(input.tick_input().right, PaddleIntent::Down);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut input = InputMapper::default();
        input.key_down("KeyW");
        input.key_down("KeyS");
        assert_eq!(input.tick_input().left, PaddleIntent::Idle);
    }

    #[test]
    fn test_commands_are_not_held() {
        let mut input = InputMapper::default();
        assert_eq!(input.key_down("Space"), Some(Command::TogglePause));
        assert_eq!(input.key_down("KeyR"), Some(Command::Reset));
        assert!(!input.held().is_held(Key::TogglePause));
        assert_eq!(input.tick_input(), TickInput::default());
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut input = InputMapper::default();
        assert_eq!(input.key_down("KeyQ"), None);
        assert!(!input.is_bound("KeyQ"));
        assert!(input.is_bound("ArrowUp"));
        assert_eq!(input.tick_input(), TickInput::default());
    }

    #[test]
    fn test_clear_on_blur() {
        let mut input = InputMapper::default();
        input.key_down("ArrowUp");
        input.clear();
        assert_eq!(input.tick_input(), TickInput::default());
    }

    #[test]
    fn test_command_drives_match() {
        let mut game = Match::new(1);
        let mut input = InputMapper::default();

        let command = input.key_down("Space").expect("space is bound");
        assert!(matches!(command.apply(&mut game), GameEvent::Served { .. }));

        let command = input.key_down("KeyR").expect("r is bound");
        assert_eq!(command.apply(&mut game), GameEvent::Reset);
    }
}
