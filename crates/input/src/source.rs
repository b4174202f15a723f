//! Sources of raw "is this key held" state.

use crate::types::Key;

/// Something that can answer whether a key is held right now.
pub trait KeySource {
    /// Bring the held-state up to date. Called once per poll, before sampling.
    fn refresh(&mut self) {}

    fn is_down(&self, key: Key) -> bool;
}

/// Held-state set by hand. Used by tests and headless runs.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    down: [bool; Key::COUNT],
}

impl ScriptedKeys {
    pub fn hold(&mut self, keys: &[Key]) {
        for &key in keys {
            self.down[key.index()] = true;
        }
    }

    pub fn release(&mut self, keys: &[Key]) {
        for &key in keys {
            self.down[key.index()] = false;
        }
    }
}

impl KeySource for ScriptedKeys {
    fn is_down(&self, key: Key) -> bool {
        self.down[key.index()]
    }
}
