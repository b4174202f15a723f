//! Held-key state reconstructed from crossterm's event stream.
//!
//! Terminals only report key events, not a live keyboard state. A key counts
//! as held from its press until its release event. Many terminals never send
//! release events; until the first one is seen, a key auto-releases once no
//! press or repeat has arrived for `release_timeout`.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::map::key_from_event;
use crate::source::KeySource;
use crate::types::{Key, KEY_RELEASE_TIMEOUT_MS};

#[derive(Debug, Clone)]
pub struct TerminalKeys {
    held: [Option<Instant>; Key::COUNT],
    /// Pressed since the last refresh, even if already released.
    tapped: [bool; Key::COUNT],
    release_events: bool,
    release_timeout: Duration,
}

impl TerminalKeys {
    pub fn new() -> Self {
        Self::with_release_timeout(Duration::from_millis(KEY_RELEASE_TIMEOUT_MS))
    }

    pub fn with_release_timeout(release_timeout: Duration) -> Self {
        Self {
            held: [None; Key::COUNT],
            tapped: [false; Key::COUNT],
            release_events: false,
            release_timeout,
        }
    }

    /// True once the terminal has delivered at least one release event.
    pub fn has_release_events(&self) -> bool {
        self.release_events
    }

    /// Fold one key event into the held state.
    pub fn apply_event(&mut self, event: KeyEvent, now: Instant) {
        let Some(key) = key_from_event(event) else {
            return;
        };
        let i = key.index();
        match event.kind {
            KeyEventKind::Press => {
                self.held[i] = Some(now);
                self.tapped[i] = true;
            }
            KeyEventKind::Repeat => {
                self.held[i] = Some(now);
            }
            KeyEventKind::Release => {
                if !self.release_events {
                    log::debug!("terminal reports key release events");
                }
                self.release_events = true;
                self.held[i] = None;
            }
        }
    }

    /// Auto-release keys that went quiet, unless real release events are known.
    pub fn expire(&mut self, now: Instant) {
        if self.release_events {
            return;
        }
        for slot in &mut self.held {
            if let Some(since) = *slot {
                if now.saturating_duration_since(since) >= self.release_timeout {
                    *slot = None;
                }
            }
        }
    }

    fn begin_poll(&mut self) {
        self.tapped = [false; Key::COUNT];
    }

    fn drain_events(&mut self) {
        loop {
            match event::poll(Duration::ZERO) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) => {
                    log::warn!("input poll failed: {err}");
                    break;
                }
            }
            match event::read() {
                Ok(Event::Key(key)) => self.apply_event(key, Instant::now()),
                Ok(_) => {}
                Err(err) => {
                    log::warn!("input read failed: {err}");
                    break;
                }
            }
        }
    }
}

impl Default for TerminalKeys {
    fn default() -> Self {
        Self::new()
    }
}

impl KeySource for TerminalKeys {
    fn refresh(&mut self) {
        self.begin_poll();
        self.drain_events();
        self.expire(Instant::now());
    }

    fn is_down(&self, key: Key) -> bool {
        let i = key.index();
        self.held[i].is_some() || self.tapped[i]
    }
}
