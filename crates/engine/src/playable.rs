//! The seam between the loop and a game.

use std::time::Duration;

use crate::core::{Breakout, BreakoutConfig, BreakoutPhase, Pacing, Shooter, ShooterConfig};
use crate::input::InputPoller;
use crate::term::{BreakoutView, FrameBuffer, ShooterView};
use crate::types::Key;

/// A game the loop can drive: advance one tick, then draw.
pub trait Playable {
    fn name(&self) -> &'static str;

    /// Keys the loop's poller must watch for this game.
    fn watch_list(&self) -> &'static [Key];

    fn tick(&mut self, input: &InputPoller, dt: Duration) -> Pacing;

    fn draw(&self, fb: &mut FrameBuffer);
}

const BREAKOUT_KEYS: &[Key] = &[
    Key::A,
    Key::D,
    Key::Left,
    Key::Right,
    Key::Space,
    Key::Escape,
    Key::Q,
];

const SHOOTER_KEYS: &[Key] = &[
    Key::W,
    Key::A,
    Key::S,
    Key::D,
    Key::Up,
    Key::Down,
    Key::Left,
    Key::Right,
    Key::Space,
    Key::Escape,
    Key::Q,
];

pub struct BreakoutGame {
    game: Breakout,
    view: BreakoutView,
}

impl BreakoutGame {
    pub fn new(config: BreakoutConfig) -> Self {
        Self {
            game: Breakout::new(config),
            view: BreakoutView::default(),
        }
    }

    pub fn state(&self) -> &Breakout {
        &self.game
    }
}

impl Playable for BreakoutGame {
    fn name(&self) -> &'static str {
        "breakout"
    }

    fn watch_list(&self) -> &'static [Key] {
        BREAKOUT_KEYS
    }

    fn tick(&mut self, input: &InputPoller, _dt: Duration) -> Pacing {
        let before = self.game.phase();
        let report = self.game.tick(input);
        if report.phase != before {
            log::debug!("breakout phase {:?} -> {:?}", before, report.phase);
        }
        if report.ball_lost {
            log::debug!("ball lost, {} lives left", self.game.lives());
        }
        if report.phase == BreakoutPhase::Won && before != BreakoutPhase::Won {
            log::info!("breakout cleared");
        }
        report.pacing
    }

    fn draw(&self, fb: &mut FrameBuffer) {
        self.view.render_into(&self.game, fb);
    }
}

pub struct ShooterGame {
    game: Shooter,
    view: ShooterView,
}

impl ShooterGame {
    pub fn new(game: Shooter) -> Self {
        Self {
            game,
            view: ShooterView::default(),
        }
    }

    pub fn with_config(config: ShooterConfig, seed: u64) -> Self {
        Self::new(Shooter::new(config, seed))
    }

    pub fn state(&self) -> &Shooter {
        &self.game
    }
}

impl Playable for ShooterGame {
    fn name(&self) -> &'static str {
        "shooter"
    }

    fn watch_list(&self) -> &'static [Key] {
        SHOOTER_KEYS
    }

    fn tick(&mut self, input: &InputPoller, dt: Duration) -> Pacing {
        let before = self.game.phase();
        let report = self.game.tick(input, dt);
        if report.phase != before {
            log::debug!(
                "shooter phase {:?} -> {:?} (score {})",
                before,
                report.phase,
                self.game.score()
            );
        }
        report.pacing
    }

    fn draw(&self, fb: &mut FrameBuffer) {
        self.view.render_into(&self.game, fb);
    }
}
