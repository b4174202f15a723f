//! The single-threaded game loop.
//!
//! Each iteration: poll input, check for quit, tick, draw, present (clearing
//! the buffer), probe for a resize, then sleep for the tick's pacing.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::config::LoopConfig;
use crate::input::{is_quit_key, InputPoller, KeySource};
use crate::playable::Playable;
use crate::term::{Screen, Surface};

/// Why [`GameLoop::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    /// A quit key was pressed.
    Quit,
    /// The tick limit was reached.
    TickLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopStats {
    pub ticks: u64,
    pub exit: LoopExit,
}

#[derive(Debug, Clone)]
pub struct GameLoop {
    config: LoopConfig,
    max_ticks: Option<u64>,
    fixed_dt: Option<Duration>,
}

impl GameLoop {
    pub fn new(config: LoopConfig) -> Self {
        Self {
            config,
            max_ticks: None,
            fixed_dt: None,
        }
    }

    /// Stop after `ticks` ticks. Without a limit only a quit key ends the loop.
    pub fn with_max_ticks(mut self, ticks: u64) -> Self {
        self.max_ticks = Some(ticks);
        self
    }

    /// Feed every tick the same `dt` instead of measured wall time.
    pub fn with_fixed_dt(mut self, dt: Duration) -> Self {
        self.fixed_dt = Some(dt);
        self
    }

    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    pub fn run<P, S, K>(
        &self,
        game: &mut P,
        screen: &mut Screen<S>,
        keys: &mut K,
    ) -> Result<LoopStats>
    where
        P: Playable,
        S: Surface,
        K: KeySource,
    {
        let mut poller = InputPoller::new(game.watch_list());
        let mut ticks = 0u64;
        let mut last = Instant::now();
        log::info!("{} started", game.name());

        let exit = loop {
            if self.max_ticks.is_some_and(|max| ticks >= max) {
                break LoopExit::TickLimit;
            }

            poller.update(keys);
            if poller
                .watch_list()
                .iter()
                .any(|&key| is_quit_key(key) && poller.is_key_pressed(key))
            {
                break LoopExit::Quit;
            }

            let now = Instant::now();
            let dt = self.fixed_dt.unwrap_or_else(|| now.duration_since(last));
            last = now;

            let pacing = game.tick(&poller, dt);
            game.draw(screen.buffer_mut());
            screen.present(true)?;
            screen.update_size_if_changed();
            ticks += 1;

            let delay = self.config.delay(pacing);
            if !delay.is_zero() {
                thread::sleep(delay);
            }
        };

        log::info!("{} stopped after {} ticks ({:?})", game.name(), ticks, exit);
        Ok(LoopStats { ticks, exit })
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new(LoopConfig::default())
    }
}
