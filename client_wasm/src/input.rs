//! Keyboard input handling

use std::collections::HashSet;

use game_core::{Key, Keyboard};

/// Map a DOM `KeyboardEvent.key` value to a game key
pub fn key_from_name(key: &str) -> Option<Key> {
    match key {
        "ArrowUp" => Some(Key::Up),
        "ArrowDown" => Some(Key::Down),
        "w" | "W" => Some(Key::W),
        "s" | "S" => Some(Key::S),
        "Escape" => Some(Key::Escape),
        _ => None,
    }
}

/// Keys currently held, fed by DOM key events
#[derive(Debug, Default)]
pub struct KeyState {
    held: HashSet<Key>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the key belongs to the game
    pub fn handle_key_down(&mut self, key: &str) -> bool {
        match key_from_name(key) {
            Some(key) => {
                self.held.insert(key);
                true
            }
            None => false,
        }
    }

    /// Returns true if the key belongs to the game
    pub fn handle_key_up(&mut self, key: &str) -> bool {
        match key_from_name(key) {
            Some(key) => {
                self.held.remove(&key);
                true
            }
            None => false,
        }
    }

    /// Drop every held key, e.g. when the page loses focus
    pub fn release_all(&mut self) {
        self.held.clear();
    }
}

impl Keyboard for KeyState {
    fn is_key_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }
}
