//! Level-to-edge input poller.
//!
//! Keeps two snapshots of a fixed watch-list. Call [`InputPoller::update`]
//! exactly once per tick before querying; edges are derived by comparing the
//! two snapshots, so a missed update means no edge.

use arrayvec::ArrayVec;

use crate::source::KeySource;
use crate::types::{Key, KeyQuery};

#[derive(Debug, Clone)]
pub struct InputPoller {
    watch: ArrayVec<Key, { Key::COUNT }>,
    current: [bool; Key::COUNT],
    previous: [bool; Key::COUNT],
}

impl InputPoller {
    /// Watch `keys`. Duplicates are ignored; unwatched keys always read as up.
    pub fn new(keys: &[Key]) -> Self {
        let mut watch = ArrayVec::new();
        for &key in keys {
            if !watch.contains(&key) {
                watch.push(key);
            }
        }
        Self {
            watch,
            current: [false; Key::COUNT],
            previous: [false; Key::COUNT],
        }
    }

    pub fn watch_list(&self) -> &[Key] {
        &self.watch
    }

    pub fn is_watched(&self, key: Key) -> bool {
        self.watch.contains(&key)
    }

    /// Shift the current snapshot into the previous one and sample every
    /// watched key from `source`.
    pub fn update(&mut self, source: &mut impl KeySource) {
        source.refresh();
        self.previous = self.current;
        for &key in &self.watch {
            self.current[key.index()] = source.is_down(key);
        }
    }

    /// Forget both snapshots.
    pub fn reset(&mut self) {
        self.current = [false; Key::COUNT];
        self.previous = [false; Key::COUNT];
    }

    pub fn is_key_down(&self, key: Key) -> bool {
        self.current[key.index()]
    }

    pub fn was_key_down(&self, key: Key) -> bool {
        self.previous[key.index()]
    }

    pub fn is_key_pressed(&self, key: Key) -> bool {
        self.is_key_down(key) && !self.was_key_down(key)
    }

    pub fn is_key_released(&self, key: Key) -> bool {
        !self.is_key_down(key) && self.was_key_down(key)
    }
}

impl KeyQuery for InputPoller {
    fn is_key_down(&self, key: Key) -> bool {
        InputPoller::is_key_down(self, key)
    }

    fn is_key_pressed(&self, key: Key) -> bool {
        InputPoller::is_key_pressed(self, key)
    }

    fn is_key_released(&self, key: Key) -> bool {
        InputPoller::is_key_released(self, key)
    }
}
