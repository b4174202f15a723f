//! Brick-breaker rules
//!
//! One call to [`Breakout::tick`] is one iteration of the game loop:
//! paddle control, wall/paddle/brick collisions, lifecycle transitions, and
//! ball movement. Drawing lives in the term crate and only reads this state.
//!
//! # States
//!
//! - **Playing**: normal ticks.
//! - **GameOver**: lives reached zero. Frozen until the restart key.
//! - **Won**: every brick destroyed. Frozen until the restart key.
//!
//! A lost ball is not a state of its own: it is reported by the tick that
//! detected it, respawned at that tick's end, and the tick asks the loop for
//! the long pause.

use log::debug;

use crate::collision::{
    bounce_off_paddle, first_hit, intersects, reflect_walls, x_out, y_out, Direction,
};
use crate::entities::{Ball, Brick, Paddle};
use crate::layout::BrickLayout;
use crate::types::{FieldConfig, Key, KeyQuery, Position};
use crate::Pacing;

/// Round parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakoutConfig {
    pub field: FieldConfig,
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_speed: i32,
    pub lives: u32,
    pub layout: BrickLayout,
}

impl Default for BreakoutConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::breakout(),
            paddle_width: 10,
            paddle_height: 1,
            paddle_speed: 3,
            lives: 3,
            layout: BrickLayout::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakoutPhase {
    Playing,
    GameOver,
    Won,
}

/// What happened during one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakoutTick {
    pub phase: BreakoutPhase,
    /// The ball left through the floor and was respawned.
    pub ball_lost: bool,
    /// Index of the brick destroyed this tick, if any.
    pub brick_hit: Option<usize>,
    pub pacing: Pacing,
}

#[derive(Debug, Clone)]
pub struct Breakout {
    config: BreakoutConfig,
    paddle: Paddle,
    ball: Ball,
    bricks: Vec<Brick>,
    lives: u32,
    phase: BreakoutPhase,
    /// Where the ball was when it was last lost (drawn as a marker).
    lost_at: Option<Position>,
}

impl Breakout {
    pub fn new(config: BreakoutConfig) -> Self {
        let mut game = Self {
            config,
            paddle: Paddle::new(config.paddle_width, config.paddle_height),
            ball: Ball::new(Position::default(), Direction::new(1, 1)),
            bricks: Vec::new(),
            lives: config.lives,
            phase: BreakoutPhase::Playing,
            lost_at: None,
        };
        game.restart();
        game
    }

    pub fn config(&self) -> &BreakoutConfig {
        &self.config
    }

    pub fn field(&self) -> FieldConfig {
        self.config.field
    }

    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn phase(&self) -> BreakoutPhase {
        self.phase
    }

    pub fn lost_at(&self) -> Option<Position> {
        self.lost_at
    }

    pub fn bricks_remaining(&self) -> usize {
        self.bricks.iter().filter(|b| !b.is_destroyed()).count()
    }

    fn ball_spawn(&self) -> Position {
        let field = self.config.field;
        Position::new(field.width / 2 - 5, field.height / 2)
    }

    /// Reinitialise positions, lives and the brick layout.
    pub fn restart(&mut self) {
        let field = self.config.field;
        self.ball = Ball::new(self.ball_spawn(), Direction::new(1, 1));
        self.paddle.set_position(field.width / 2, field.height - 1);
        self.lives = self.config.lives;
        self.bricks = self.config.layout.build(field);
        self.phase = BreakoutPhase::Playing;
        self.lost_at = None;
        debug!("breakout round started with {} bricks", self.bricks.len());
    }

    pub fn tick(&mut self, input: &impl KeyQuery) -> BreakoutTick {
        let mut report = BreakoutTick {
            phase: self.phase,
            ball_lost: false,
            brick_hit: None,
            pacing: Pacing::Normal,
        };

        if self.phase != BreakoutPhase::Playing {
            if input.is_key_pressed(Key::Space) {
                debug!("restart requested from {:?}", self.phase);
                self.restart();
                report.phase = self.phase;
            }
            return report;
        }

        if self.lives > 0 {
            self.move_paddle(input);
        }

        let field = self.config.field;
        reflect_walls(self.ball.rect(), &mut self.ball.dir, field);

        if intersects(self.ball.next_rect(), self.paddle.rect()) {
            bounce_off_paddle(self.ball.rect(), self.paddle.rect(), &mut self.ball.dir);
        } else if y_out(self.ball.rect().bottom(), field) {
            report.ball_lost = true;
            self.lives = self.lives.saturating_sub(1);
            debug!("ball lost at {:?}, {} lives left", self.ball.pos, self.lives);
        }

        report.brick_hit = self.hit_first_brick();

        if self.lives == 0 {
            self.phase = BreakoutPhase::GameOver;
            debug!("game over");
        } else if self.bricks.iter().all(Brick::is_destroyed) {
            self.phase = BreakoutPhase::Won;
            debug!("all bricks destroyed");
        } else if !report.ball_lost {
            self.ball.advance();
        }

        if report.ball_lost {
            self.lost_at = Some(self.ball.pos);
            self.ball.pos = self.ball_spawn();
            report.pacing = Pacing::LossPause;
        } else if self.phase == BreakoutPhase::Playing {
            self.lost_at = None;
        }

        report.phase = self.phase;
        report
    }

    /// Move is rejected (not clamped) when the leading edge already touches a wall.
    fn move_paddle(&mut self, input: &impl KeyQuery) {
        let field = self.config.field;
        let rect = self.paddle.rect();
        let blocked_left = x_out(rect.left(), field);
        let blocked_right = x_out(rect.right(), field);
        let speed = self.config.paddle_speed;

        let right = input.is_key_down(Key::D) || input.is_key_down(Key::Right);
        let left = input.is_key_down(Key::A) || input.is_key_down(Key::Left);

        if right && !blocked_right {
            self.paddle.translate(speed, 0);
        } else if left && !blocked_left {
            self.paddle.translate(-speed, 0);
        }
    }

    /// Destroy the first live brick overlapping the ball, in layout order.
    fn hit_first_brick(&mut self) -> Option<usize> {
        let live = self.bricks.iter().map(|b| (!b.is_destroyed()).then(|| b.rect()));
        let idx = first_hit(self.ball.rect(), live)?;
        self.bricks[idx].destroy();
        self.ball.dir.flip_y();
        Some(idx)
    }

    #[cfg(test)]
    pub(crate) fn ball_mut(&mut self) -> &mut Ball {
        &mut self.ball
    }

    #[cfg(test)]
    pub(crate) fn paddle_mut(&mut self) -> &mut Paddle {
        &mut self.paddle
    }

    #[cfg(test)]
    pub(crate) fn bricks_mut(&mut self) -> &mut Vec<Brick> {
        &mut self.bricks
    }
}

impl Default for Breakout {
    fn default() -> Self {
        Self::new(BreakoutConfig::default())
    }
}
