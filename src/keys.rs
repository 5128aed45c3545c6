// src/keys.rs

//! Maps typed keys to game actions using the configured keybindings.

use crate::config::KeybindingsConfig;
use crate::engine::Direction;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Move(Direction),
    Quit,
}

/// Looks up `key` in `bindings`. Matching ignores ASCII case; unbound keys give `None`.
pub fn map_key(key: char, bindings: &KeybindingsConfig) -> Option<KeyAction> {
    let key = key.to_ascii_lowercase();
    let bound = |binding: char| binding.to_ascii_lowercase() == key;

    if bound(bindings.quit) {
        Some(KeyAction::Quit)
    } else if bound(bindings.left) {
        Some(KeyAction::Move(Direction::Left))
    } else if bound(bindings.right) {
        Some(KeyAction::Move(Direction::Right))
    } else if bound(bindings.up) {
        Some(KeyAction::Move(Direction::Up))
    } else if bound(bindings.down) {
        Some(KeyAction::Move(Direction::Down))
    } else {
        None
    }
}

/// Every action in a line of typed input, in order. Unbound characters are skipped.
pub fn map_line(line: &str, bindings: &KeybindingsConfig) -> Vec<KeyAction> {
    line.chars()
        .filter(|c| !c.is_whitespace())
        .filter_map(|c| map_key(c, bindings))
        .collect()
}
