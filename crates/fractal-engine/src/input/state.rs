use std::collections::HashSet;

use super::types::{InputEvent, Key, KeyState};

/// Current input state for the window.
///
/// Holds "is down" information only. Consumers poll it once per frame, so a
/// held key keeps producing its effect every frame until released.
#[derive(Debug, Default)]
pub struct InputState {
    /// Set of currently held keys.
    pub keys_down: HashSet<Key>,
}

impl InputState {
    /// Applies a platform-agnostic input event to the current state.
    pub fn apply_event(&mut self, ev: &InputEvent) {
        match ev {
            // On focus loss the release events go elsewhere; drop everything
            // so nothing stays stuck down.
            InputEvent::Focused(false) => self.keys_down.clear(),
            InputEvent::Focused(true) => {}

            InputEvent::Key { key, state, .. } => match state {
                KeyState::Pressed => {
                    self.keys_down.insert(*key);
                }
                KeyState::Released => {
                    self.keys_down.remove(key);
                }
            },
        }
    }

    pub fn key_down(&self, key: Key) -> bool {
        self.keys_down.contains(&key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(key: Key, state: KeyState, repeat: bool) -> InputEvent {
        InputEvent::Key { key, state, repeat }
    }

    #[test]
    fn press_and_release() {
        let mut s = InputState::default();
        s.apply_event(&key(Key::W, KeyState::Pressed, false));
        assert!(s.key_down(Key::W));
        s.apply_event(&key(Key::W, KeyState::Released, false));
        assert!(!s.key_down(Key::W));
    }

    #[test]
    fn repeat_keeps_key_down() {
        let mut s = InputState::default();
        s.apply_event(&key(Key::ArrowLeft, KeyState::Pressed, false));
        s.apply_event(&key(Key::ArrowLeft, KeyState::Pressed, true));
        assert!(s.key_down(Key::ArrowLeft));
        assert_eq!(s.keys_down.len(), 1);
    }

    #[test]
    fn several_keys_held_at_once() {
        let mut s = InputState::default();
        s.apply_event(&key(Key::W, KeyState::Pressed, false));
        s.apply_event(&key(Key::ArrowUp, KeyState::Pressed, false));
        assert!(s.key_down(Key::W) && s.key_down(Key::ArrowUp));
    }

    #[test]
    fn focus_loss_clears_held_keys() {
        let mut s = InputState::default();
        s.apply_event(&InputEvent::Focused(true));
        s.apply_event(&key(Key::S, KeyState::Pressed, false));
        s.apply_event(&InputEvent::Focused(false));
        assert!(s.keys_down.is_empty());
    }
}
