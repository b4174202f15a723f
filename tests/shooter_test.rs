use std::time::Duration;

use tui_arcade::core::{Shooter, ShooterConfig, ShooterPhase};
use tui_arcade::input::{InputPoller, ScriptedKeys};
use tui_arcade::term::ShooterView;
use tui_arcade::types::{Key, Position};

const DT: Duration = Duration::from_millis(50);

fn poller() -> InputPoller {
    InputPoller::new(&[Key::W, Key::A, Key::S, Key::D, Key::Space])
}

fn sample(poller: &mut InputPoller, keys: &[Key]) {
    let mut source = ScriptedKeys::default();
    source.hold(keys);
    poller.update(&mut source);
}

#[test]
fn first_tick_tops_up_the_wave_off_screen() {
    let config = ShooterConfig::default();
    let mut game = Shooter::new(config, 42);
    let mut input = poller();
    sample(&mut input, &[]);

    game.tick(&input, DT);

    let field = config.field;
    assert_eq!(game.enemies().len(), config.enemy_target);
    for enemy in game.enemies() {
        assert!(enemy.pos.x >= field.width + config.spawn_depth);
        assert!(enemy.pos.x <= field.width + config.spawn_depth + 10);
        assert!(enemy.pos.y >= 1 && enemy.pos.y < field.height - 4);
    }
}

#[test]
fn same_seed_same_wave() {
    let mut a = Shooter::new(ShooterConfig::default(), 9);
    let mut b = Shooter::new(ShooterConfig::default(), 9);
    let mut input = poller();
    sample(&mut input, &[]);

    for _ in 0..20 {
        a.tick(&input, DT);
        b.tick(&input, DT);
    }
    let pos = |s: &Shooter| s.enemies().iter().map(|e| e.pos).collect::<Vec<_>>();
    assert_eq!(pos(&a), pos(&b));
}

#[test]
fn shot_fired_from_the_centre_destroys_an_enemy() {
    let mut game = Shooter::new(ShooterConfig::default(), 1);
    let mut input = poller();
    game.spawn_enemy_at(Position::new(13, 5));

    sample(&mut input, &[Key::Space]);
    let report = game.tick(&input, DT);

    assert_eq!(report.enemies_destroyed, 1);
    assert_eq!(game.score(), 1);
    assert!(game.player().bullets.is_empty());
    assert!(game.enemies().iter().all(|e| e.pos.x > 100));
}

#[test]
fn held_space_fires_once() {
    let mut game = Shooter::new(ShooterConfig::default(), 1);
    let mut input = poller();

    sample(&mut input, &[Key::Space]);
    game.tick(&input, DT);
    sample(&mut input, &[Key::Space]);
    game.tick(&input, DT);

    assert_eq!(game.player().bullets.len(), 1);
    assert_eq!(game.player().bullets[0].pos, Position::new(17, 6));
}

#[test]
fn rammed_to_death_then_space_restarts() {
    let config = ShooterConfig::default();
    let mut game = Shooter::new(config, 5);
    let mut input = poller();
    for _ in 0..config.player_health {
        game.spawn_enemy_at(config.player_start);
    }

    sample(&mut input, &[]);
    let report = game.tick(&input, DT);
    assert_eq!(report.phase, ShooterPhase::PlayerDead);
    assert_eq!(report.damage_taken, config.player_health);
    assert_eq!(game.player().health, 0);

    let fb = ShooterView::default().render(&game);
    assert!(fb.row_string(0).starts_with("Health: 0"));
    assert!(fb.row_string(15).contains("Press Space to Play Again"));
    let start = config.player_start;
    assert_eq!(fb.get(start.x + 1, start.y + 1).glyph, ' ');

    sample(&mut input, &[]);
    assert_eq!(game.tick(&input, DT).phase, ShooterPhase::PlayerDead);

    sample(&mut input, &[Key::Space]);
    let report = game.tick(&input, DT);
    assert_eq!(report.phase, ShooterPhase::Playing);
    assert_eq!(game.player().health, config.player_health);
    assert_eq!(game.player().pos, config.player_start);
    assert_eq!(game.score(), 0);
    assert!(game.enemies().is_empty());
}

#[test]
fn player_cannot_leave_the_field() {
    let mut game = Shooter::new(ShooterConfig::default(), 3);
    let mut input = poller();

    for _ in 0..20 {
        sample(&mut input, &[Key::W, Key::A]);
        game.tick(&input, DT);
    }
    assert_eq!(game.player().pos, Position::new(0, 1));
}

#[test]
fn bundled_assets_match_builtin_shapes() {
    use tui_arcade::core::ShooterSprites;

    let builtin = ShooterSprites::default();
    let mut loaded = ShooterSprites::default();
    loaded.load_overrides(concat!(env!("CARGO_MANIFEST_DIR"), "/assets"));

    assert_eq!(loaded.player.mask(), builtin.player.mask());
    assert_eq!(loaded.enemy.mask(), builtin.enemy.mask());
    assert_eq!(loaded.player_bullet.mask(), builtin.player_bullet.mask());
    assert_eq!(loaded.enemy_bullet.mask(), builtin.enemy_bullet.mask());
}

#[test]
fn missing_asset_dir_keeps_builtin_shapes() {
    use tui_arcade::core::ShooterSprites;

    let dir = tempfile::tempdir().unwrap();
    let mut sprites = ShooterSprites::default();
    sprites.load_overrides(dir.path().join("nope"));
    assert_eq!(sprites, ShooterSprites::default());
}
