//! Game views: map game state into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{Ball, Breakout, BreakoutPhase, Brick, Shooter, ShooterPhase, Sprite};
use crate::fb::FrameBuffer;
use crate::types::{Attr, FieldConfig, Position};

const PADDLE_GLYPH: char = '=';
const GAME_OVER_TEXT: &str = "Game Over Press Space to play again";
const WON_TEXT: &str = "You won Press Space to play again";
const PLAY_AGAIN_TEXT: &str = "Press Space to Play Again";
/// Distance of the score readout from the right edge.
const SCORE_INSET: i32 = 15;

fn new_frame(field: FieldConfig) -> FrameBuffer {
    let w = field.width.clamp(0, i32::from(u16::MAX)) as u16;
    let h = field.height.clamp(0, i32::from(u16::MAX)) as u16;
    FrameBuffer::new(w, h)
}

/// Centre `text` horizontally on the middle row of `field`.
fn draw_overlay_text(fb: &mut FrameBuffer, field: FieldConfig, text: &str, attr: Attr) {
    let len = text.chars().count() as i32;
    fb.draw_text((field.width - len) / 2, field.height / 2, text, attr);
}

fn draw_sprite_at(fb: &mut FrameBuffer, sprite: &Sprite, pos: Position) {
    fb.draw_sprite(sprite.mask(), pos.x, pos.y, sprite.attr());
}

/// Renders a [`Breakout`] round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakoutView {
    pub text_attr: Attr,
    pub brick_attr: Attr,
    pub ball_attr: Attr,
    pub paddle_attr: Attr,
}

impl Default for BreakoutView {
    fn default() -> Self {
        Self {
            text_attr: Attr::WHITE,
            brick_attr: Attr::WHITE,
            ball_attr: Attr::WHITE,
            paddle_attr: Attr::WHITE,
        }
    }
}

impl BreakoutView {
    pub fn render_into(&self, game: &Breakout, fb: &mut FrameBuffer) {
        let field = game.field();

        fb.draw_text(0, 0, &format!("Lives: {}", game.lives()), self.text_attr);

        for brick in game.bricks().iter().filter(|b| !b.is_destroyed()) {
            self.draw_brick(fb, brick);
        }

        let ball = game.ball();
        match game.phase() {
            BreakoutPhase::Playing => match game.lost_at() {
                Some(at) => fb.draw_char(at.x, at.y, Ball::LOST_GLYPH, self.ball_attr),
                None => fb.draw_char(ball.pos.x, ball.pos.y, Ball::GLYPH, self.ball_attr),
            },
            BreakoutPhase::GameOver => {
                let at = game.lost_at().unwrap_or(ball.pos);
                fb.draw_char(at.x, at.y, Ball::LOST_GLYPH, self.ball_attr);
                draw_overlay_text(fb, field, GAME_OVER_TEXT, Attr::RED);
            }
            BreakoutPhase::Won => draw_overlay_text(fb, field, WON_TEXT, Attr::GREEN),
        }

        let paddle = game.paddle();
        let pos = paddle.position();
        fb.draw_object(
            paddle.shape(),
            paddle.width(),
            paddle.height(),
            pos.x,
            pos.y,
            PADDLE_GLYPH,
            self.paddle_attr,
        );
    }

    /// Render into a fresh buffer the size of the playfield.
    pub fn render(&self, game: &Breakout) -> FrameBuffer {
        let mut fb = new_frame(game.field());
        self.render_into(game, &mut fb);
        fb
    }

    fn draw_brick(&self, fb: &mut FrameBuffer, brick: &Brick) {
        let pos = brick.position();
        fb.draw_box(
            pos.x,
            pos.y,
            brick.width(),
            brick.height(),
            Brick::GLYPH,
            self.brick_attr,
            true,
        );
    }
}

/// Renders a [`Shooter`] round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShooterView {
    pub text_attr: Attr,
    pub star_attr: Attr,
}

impl Default for ShooterView {
    fn default() -> Self {
        Self {
            text_attr: Attr::WHITE,
            star_attr: Attr::WHITE,
        }
    }
}

impl ShooterView {
    pub fn render_into(&self, game: &Shooter, fb: &mut FrameBuffer) {
        let field = game.field();
        let player = game.player();

        if game.phase() == ShooterPhase::Playing {
            for star in game.stars().stars() {
                fb.draw_char(star.pos.x, star.pos.y, star.glyph(), self.star_attr);
            }
            for bullet in &player.bullets {
                draw_sprite_at(fb, &bullet.sprite, bullet.pos);
            }
            for enemy in game.enemies() {
                draw_sprite_at(fb, &enemy.sprite, enemy.pos);
                for bullet in &enemy.bullets {
                    draw_sprite_at(fb, &bullet.sprite, bullet.pos);
                }
            }
            draw_sprite_at(fb, &player.sprite, player.pos);
        }

        fb.draw_text(0, 0, &format!("Health: {}", player.health), self.text_attr);
        fb.draw_text(
            field.width - SCORE_INSET,
            0,
            &format!("Score: {}", game.score()),
            self.text_attr,
        );

        if game.phase() == ShooterPhase::PlayerDead {
            draw_overlay_text(fb, field, PLAY_AGAIN_TEXT, Attr::RED);
        }
    }

    /// Render into a fresh buffer the size of the playfield.
    pub fn render(&self, game: &Shooter) -> FrameBuffer {
        let mut fb = new_frame(game.field());
        self.render_into(game, &mut fb);
        fb
    }
}
