//! Side-scrolling shooter rules
//!
//! The player flies on the left, enemies drift in from beyond the right edge
//! and fire on their own timers. Every collection here is owned by
//! [`Shooter`]; removing an entity from its vector drops it, and an enemy's
//! bullets go with it.
//!
//! Per tick while playing: stars scroll, the player moves and fires, enemies
//! advance and fire, the population is topped up, then combat resolves.

use std::path::Path;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, trace};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::collision::{first_hit, intersects};
use crate::sprite::{GlyphMask, Sprite};
use crate::starfield::Starfield;
use crate::types::{Attr, FieldConfig, Key, KeyQuery, Position, Rect, ENEMY_FIRE_PERIOD_MS};
use crate::Pacing;

const PLAYER_SHAPE: &str = " |\\\n>=##>\n |/";
const ENEMY_SHAPE: &str = "  /\n<OO|\n  \\";
const PLAYER_BULLET_SHAPE: &str = "-";
const ENEMY_BULLET_SHAPE: &str = "~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShooterConfig {
    pub field: FieldConfig,
    pub player_health: i32,
    pub player_start: Position,
    /// Enemy population kept alive at all times.
    pub enemy_target: usize,
    pub fire_period: Duration,
    pub star_count: usize,
    pub player_bullet_speed: i32,
    pub enemy_bullet_speed: i32,
    pub enemy_speed: i32,
    /// Enemies appear this many columns (plus up to ten more) past the right edge.
    pub spawn_depth: i32,
}

impl Default for ShooterConfig {
    fn default() -> Self {
        Self {
            field: FieldConfig::shooter(),
            player_health: 5,
            player_start: Position::new(5, 5),
            enemy_target: 10,
            fire_period: Duration::from_millis(ENEMY_FIRE_PERIOD_MS),
            star_count: 50,
            player_bullet_speed: 5,
            enemy_bullet_speed: -2,
            enemy_speed: -1,
            spawn_depth: 10,
        }
    }
}

/// Shapes used by every entity kind. Shared, never copied per entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ShooterSprites {
    pub player: Sprite,
    pub enemy: Sprite,
    pub player_bullet: Sprite,
    pub enemy_bullet: Sprite,
}

impl Default for ShooterSprites {
    fn default() -> Self {
        let shape = |text: &str| Rc::new(GlyphMask::parse(text));
        Self {
            player: Sprite::new(shape(PLAYER_SHAPE), Attr::CYAN),
            enemy: Sprite::new(shape(ENEMY_SHAPE), Attr::YELLOW),
            player_bullet: Sprite::new(shape(PLAYER_BULLET_SHAPE), Attr::RED),
            enemy_bullet: Sprite::new(shape(ENEMY_BULLET_SHAPE), Attr::RED),
        }
    }
}

impl ShooterSprites {
    /// Override built-in shapes with `player.txt`, `enemy.txt`, `pbullet.txt`
    /// and `bullet.txt` from `dir`. Missing files keep the built-in shape.
    pub fn load_overrides(&mut self, dir: impl AsRef<Path>) {
        let dir = dir.as_ref();
        self.player.load_from_text(dir.join("player.txt"));
        self.enemy.load_from_text(dir.join("enemy.txt"));
        self.player_bullet.load_from_text(dir.join("pbullet.txt"));
        self.enemy_bullet.load_from_text(dir.join("bullet.txt"));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Bullet {
    pub pos: Position,
    pub vx: i32,
    pub sprite: Sprite,
}

impl Bullet {
    pub fn rect(&self) -> Rect {
        self.sprite.rect_at(self.pos)
    }

    fn advance(&mut self) {
        self.pos.x += self.vx;
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub pos: Position,
    pub health: i32,
    pub sprite: Sprite,
    pub bullets: Vec<Bullet>,
}

impl Player {
    pub fn rect(&self) -> Rect {
        self.sprite.rect_at(self.pos)
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }

    /// Moves are rejected at the field edges; the top row is the HUD.
    fn steer(&mut self, input: &impl KeyQuery, field: FieldConfig) {
        let (w, h) = (self.sprite.width(), self.sprite.height());
        let held = |a: Key, b: Key| input.is_key_down(a) || input.is_key_down(b);
        if held(Key::S, Key::Down) && self.pos.y + h < field.height {
            self.pos.y += 1;
        }
        if held(Key::W, Key::Up) && self.pos.y > 1 {
            self.pos.y -= 1;
        }
        if held(Key::D, Key::Right) && self.pos.x + w < field.width {
            self.pos.x += 1;
        }
        if held(Key::A, Key::Left) && self.pos.x > 0 {
            self.pos.x -= 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub pos: Position,
    pub sprite: Sprite,
    /// Time since this enemy last fired.
    pub since_shot: Duration,
    pub bullets: Vec<Bullet>,
}

impl Enemy {
    pub fn rect(&self) -> Rect {
        self.sprite.rect_at(self.pos)
    }

    /// Enemies enter from the right, so only the other three sides count.
    pub fn has_left_field(&self, field: FieldConfig) -> bool {
        self.pos.x < 0 || self.pos.y < 0 || self.pos.y >= field.height
    }
}

/// Bullet fired from the centre of a sprite.
fn fire_from(pos: Position, source: &Sprite, shot: &Sprite, vx: i32) -> Bullet {
    Bullet {
        pos: Position::new(pos.x + source.width() / 2, pos.y + source.height() / 2),
        vx,
        sprite: shot.clone(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShooterPhase {
    Playing,
    PlayerDead,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShooterTick {
    pub phase: ShooterPhase,
    pub enemies_destroyed: u32,
    pub damage_taken: i32,
    pub pacing: Pacing,
}

#[derive(Debug, Clone)]
pub struct Shooter {
    config: ShooterConfig,
    sprites: ShooterSprites,
    player: Player,
    enemies: Vec<Enemy>,
    stars: Starfield,
    score: u32,
    phase: ShooterPhase,
    rng: StdRng,
}

impl Shooter {
    pub fn new(config: ShooterConfig, seed: u64) -> Self {
        Self::with_sprites(config, ShooterSprites::default(), seed)
    }

    pub fn with_sprites(config: ShooterConfig, sprites: ShooterSprites, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let stars = Starfield::new(config.star_count, config.field, &mut rng);
        let player = Player {
            pos: config.player_start,
            health: config.player_health,
            sprite: sprites.player.clone(),
            bullets: Vec::new(),
        };
        Self {
            config,
            sprites,
            player,
            enemies: Vec::new(),
            stars,
            score: 0,
            phase: ShooterPhase::Playing,
            rng,
        }
    }

    pub fn config(&self) -> &ShooterConfig {
        &self.config
    }

    pub fn field(&self) -> FieldConfig {
        self.config.field
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn stars(&self) -> &Starfield {
        &self.stars
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> ShooterPhase {
        self.phase
    }

    /// Reset health, position and score, and drop every enemy and bullet.
    pub fn restart(&mut self) {
        self.enemies.clear();
        self.player.bullets.clear();
        self.player.health = self.config.player_health;
        self.player.pos = self.config.player_start;
        self.score = 0;
        self.phase = ShooterPhase::Playing;
        debug!("shooter round started");
    }

    /// Place an enemy with a fresh fire timer.
    pub fn spawn_enemy_at(&mut self, pos: Position) {
        trace!("enemy spawned at {:?}", pos);
        self.enemies.push(Enemy {
            pos,
            sprite: self.sprites.enemy.clone(),
            since_shot: Duration::ZERO,
            bullets: Vec::new(),
        });
    }

    pub fn tick(&mut self, input: &impl KeyQuery, dt: Duration) -> ShooterTick {
        let mut report = ShooterTick {
            phase: self.phase,
            enemies_destroyed: 0,
            damage_taken: 0,
            pacing: Pacing::Normal,
        };

        if self.phase == ShooterPhase::PlayerDead {
            if input.is_key_pressed(Key::Space) {
                self.restart();
                report.phase = self.phase;
            }
            return report;
        }

        let field = self.config.field;
        self.stars.scroll(field, &mut self.rng);
        self.update_player(input);
        self.update_enemies(dt);
        self.spawn_enemies();

        let health_before = self.player.health;
        report.enemies_destroyed = self.resolve_combat();
        report.damage_taken = health_before - self.player.health;

        if self.player.is_dead() {
            self.player.health = 0;
            self.phase = ShooterPhase::PlayerDead;
            debug!("player destroyed, final score {}", self.score);
        }

        report.phase = self.phase;
        report
    }

    fn update_player(&mut self, input: &impl KeyQuery) {
        self.player.steer(input, self.config.field);
        if input.is_key_pressed(Key::Space) {
            let bullet = fire_from(
                self.player.pos,
                &self.player.sprite,
                &self.sprites.player_bullet,
                self.config.player_bullet_speed,
            );
            self.player.bullets.push(bullet);
        }
        for bullet in &mut self.player.bullets {
            bullet.advance();
        }
    }

    fn update_enemies(&mut self, dt: Duration) {
        let period = self.config.fire_period;
        for enemy in &mut self.enemies {
            enemy.since_shot += dt;
            if enemy.since_shot >= period {
                enemy.since_shot = Duration::ZERO;
                let bullet = fire_from(
                    enemy.pos,
                    &enemy.sprite,
                    &self.sprites.enemy_bullet,
                    self.config.enemy_bullet_speed,
                );
                enemy.bullets.push(bullet);
            }
            enemy.pos.x += self.config.enemy_speed;
            for bullet in &mut enemy.bullets {
                bullet.advance();
            }
        }
    }

    /// Top the population up at random rows just past the right edge.
    fn spawn_enemies(&mut self) {
        let field = self.config.field;
        while self.enemies.len() < self.config.enemy_target {
            let x = field.width + self.config.spawn_depth + self.rng.gen_range(0..=10);
            let y = 1 + self.rng.gen_range(0..(field.height - 5).max(1));
            self.spawn_enemy_at(Position::new(x, y));
        }
    }

    /// Returns the number of enemies shot down.
    fn resolve_combat(&mut self) -> u32 {
        let field = self.config.field;

        self.enemies.retain(|e| !e.has_left_field(field));
        self.player.bullets.retain(|b| !b.pos.is_out_of_bounds(field));
        for enemy in &mut self.enemies {
            enemy.bullets.retain(|b| !b.pos.is_out_of_bounds(field));
        }

        // Player bullets vs enemies: first match in enemy order wins.
        let mut kills = 0;
        let mut i = 0;
        while i < self.player.bullets.len() {
            let shot = self.player.bullets[i].rect();
            match first_hit(shot, self.enemies.iter().map(Enemy::rect)) {
                Some(hit) => {
                    self.enemies.remove(hit);
                    self.player.bullets.remove(i);
                    self.score += 1;
                    kills += 1;
                }
                None => i += 1,
            }
        }

        let body = self.player.rect();
        let mut damage = 0;
        for enemy in &mut self.enemies {
            enemy.bullets.retain(|b| {
                let hit = intersects(b.rect(), body);
                if hit {
                    damage += 1;
                }
                !hit
            });
        }

        self.enemies.retain(|e| {
            let hit = intersects(body, e.rect());
            if hit {
                damage += 1;
            }
            !hit
        });

        self.player.health -= damage;
        kills
    }

    #[cfg(test)]
    pub(crate) fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_arcade_input::{InputPoller, ScriptedKeys};

    const DT: Duration = Duration::from_millis(50);

    fn quiet() -> ShooterConfig {
        ShooterConfig {
            enemy_target: 0,
            ..ShooterConfig::default()
        }
    }

    fn poller() -> InputPoller {
        InputPoller::new(&[Key::W, Key::A, Key::S, Key::D, Key::Space])
    }

    fn press(poller: &mut InputPoller, keys: &[Key]) {
        let mut source = ScriptedKeys::default();
        source.hold(keys);
        poller.update(&mut source);
    }

    #[test]
    fn starts_with_full_health_and_empty_field() {
        let game = Shooter::new(ShooterConfig::default(), 1);
        assert_eq!(game.player().health, 5);
        assert_eq!(game.player().pos, Position::new(5, 5));
        assert!(game.enemies().is_empty());
        assert_eq!(game.stars().stars().len(), 50);
        assert_eq!(game.phase(), ShooterPhase::Playing);
    }

    #[test]
    fn population_is_topped_up_beyond_the_right_edge() {
        let mut game = Shooter::new(ShooterConfig::default(), 42);
        game.tick(&poller(), DT);
        assert_eq!(game.enemies().len(), 10);
        for e in game.enemies() {
            assert!((130..=140).contains(&e.pos.x), "{:?}", e.pos);
            assert!((1..26).contains(&e.pos.y), "{:?}", e.pos);
        }

        game.tick(&poller(), DT);
        assert_eq!(game.enemies().len(), 10);
    }

    #[test]
    fn space_fires_once_per_press() {
        let mut game = Shooter::new(quiet(), 1);
        let mut input = poller();

        press(&mut input, &[Key::Space]);
        game.tick(&input, DT);
        assert_eq!(game.player().bullets.len(), 1);
        // Fired from the sprite centre (7, 6) and already moved 5 columns.
        assert_eq!(game.player().bullets[0].pos, Position::new(12, 6));

        press(&mut input, &[Key::Space]);
        game.tick(&input, DT);
        assert_eq!(game.player().bullets.len(), 1);
        assert_eq!(game.player().bullets[0].pos, Position::new(17, 6));
    }

    #[test]
    fn player_bullet_destroys_enemy_and_scores() {
        let mut game = Shooter::new(quiet(), 1);
        let mut input = poller();
        game.spawn_enemy_at(Position::new(12, 5));

        press(&mut input, &[Key::Space]);
        let report = game.tick(&input, DT);
        assert_eq!(report.enemies_destroyed, 1);
        assert_eq!(game.score(), 1);
        assert!(game.enemies().is_empty());
        assert!(game.player().bullets.is_empty());
    }

    #[test]
    fn ramming_an_enemy_costs_health_and_removes_it() {
        let mut game = Shooter::new(quiet(), 1);
        game.spawn_enemy_at(Position::new(9, 5));

        let report = game.tick(&poller(), DT);
        assert_eq!(report.damage_taken, 1);
        assert_eq!(game.player().health, 4);
        assert!(game.enemies().is_empty());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn enemy_fires_on_its_own_timer() {
        let mut game = Shooter::new(quiet(), 1);
        game.spawn_enemy_at(Position::new(60, 10));
        let input = poller();

        game.tick(&input, Duration::from_millis(1500));
        assert!(game.enemies()[0].bullets.is_empty());

        game.tick(&input, Duration::from_millis(500));
        assert_eq!(game.enemies()[0].bullets.len(), 1);
        assert_eq!(game.enemies()[0].since_shot, Duration::ZERO);

        // A late arrival keeps its own clock.
        game.spawn_enemy_at(Position::new(80, 10));
        game.tick(&input, Duration::from_millis(1000));
        assert_eq!(game.enemies()[1].bullets.len(), 0);
        assert_eq!(game.enemies()[1].since_shot, Duration::from_millis(1000));
    }

    #[test]
    fn enemy_bullet_damages_player_and_is_removed() {
        let mut game = Shooter::new(quiet(), 1);
        let input = poller();
        game.spawn_enemy_at(Position::new(20, 5));

        game.tick(&input, Duration::from_secs(2));
        assert_eq!(game.enemies()[0].bullets.len(), 1);

        let mut ticks = 0;
        while game.player().health == 5 && ticks < 10 {
            game.tick(&input, DT);
            ticks += 1;
        }
        assert_eq!(game.player().health, 4);
        assert_eq!(game.enemies().len(), 1);
        assert!(game.enemies()[0].bullets.is_empty());
    }

    #[test]
    fn player_bullet_is_dropped_past_the_right_edge() {
        let mut game = Shooter::new(quiet(), 1);
        let mut input = poller();

        press(&mut input, &[Key::Space]);
        game.tick(&input, DT);
        press(&mut input, &[]);
        for _ in 1..22 {
            game.tick(&input, DT);
        }
        assert_eq!(game.player().bullets.len(), 1);
        assert_eq!(game.player().bullets[0].pos.x, 117);

        game.tick(&input, DT);
        assert!(game.player().bullets.is_empty());
    }

    #[test]
    fn enemy_bullet_is_dropped_past_the_left_edge() {
        let mut game = Shooter::new(quiet(), 1);
        let input = poller();
        game.spawn_enemy_at(Position::new(60, 20));

        game.tick(&input, Duration::from_secs(2));
        assert_eq!(game.enemies()[0].bullets[0].pos.x, 60);
        for _ in 0..30 {
            game.tick(&input, DT);
        }
        assert_eq!(game.enemies()[0].bullets.len(), 1);
        assert_eq!(game.enemies()[0].bullets[0].pos.x, 0);

        game.tick(&input, DT);
        assert_eq!(game.enemies().len(), 1);
        assert!(game.enemies()[0].bullets.is_empty());
    }

    #[test]
    fn enemies_leaving_the_left_edge_are_dropped_with_their_bullets() {
        let mut game = Shooter::new(quiet(), 1);
        game.spawn_enemy_at(Position::new(0, 20));
        game.tick(&poller(), DT);
        assert!(game.enemies().is_empty());
    }

    #[test]
    fn player_stays_below_the_hud_row() {
        let mut game = Shooter::new(quiet(), 1);
        let mut input = poller();
        for _ in 0..10 {
            press(&mut input, &[Key::W, Key::A]);
            game.tick(&input, DT);
        }
        assert_eq!(game.player().pos, Position::new(0, 1));
    }

    #[test]
    fn death_freezes_until_restart() {
        let mut game = Shooter::new(
            ShooterConfig {
                player_health: 1,
                ..quiet()
            },
            1,
        );
        let mut input = poller();
        game.spawn_enemy_at(Position::new(9, 5));
        let report = game.tick(&input, DT);
        assert_eq!(report.phase, ShooterPhase::PlayerDead);
        assert_eq!(game.player().health, 0);

        game.spawn_enemy_at(Position::new(60, 10));
        game.tick(&input, DT);
        assert_eq!(game.enemies()[0].pos, Position::new(60, 10));

        press(&mut input, &[Key::Space]);
        let report = game.tick(&input, DT);
        assert_eq!(report.phase, ShooterPhase::Playing);
        assert_eq!(game.player().health, 1);
        assert!(game.enemies().is_empty());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn health_is_floored_at_zero() {
        let mut game = Shooter::new(quiet(), 1);
        game.player_mut().health = 1;
        game.spawn_enemy_at(Position::new(9, 5));
        game.spawn_enemy_at(Position::new(9, 6));
        game.tick(&poller(), DT);
        assert_eq!(game.player().health, 0);
        assert_eq!(game.phase(), ShooterPhase::PlayerDead);
    }

    #[test]
    fn missing_asset_dir_keeps_builtin_shapes() {
        let mut sprites = ShooterSprites::default();
        let before = sprites.clone();
        sprites.load_overrides("/no/such/asset/dir");
        assert_eq!(sprites, before);
        assert_eq!(sprites.player.width(), 5);
        assert_eq!(sprites.enemy.width(), 4);
    }
}
