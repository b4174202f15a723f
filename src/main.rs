//! Terminal arcade runner (default binary).
//!
//! Runs either the brick-breaker or the side-scrolling shooter in the current
//! terminal. Logs go to the file named by `ARCADE_LOG_PATH`, since stdout is
//! the game surface.

use std::env;
use std::fs::File;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use tui_arcade::core::{BreakoutConfig, BrickLayout, Shooter, ShooterConfig, ShooterSprites};
use tui_arcade::engine::{BreakoutGame, GameLoop, LoopConfig, Playable, ShooterGame};
use tui_arcade::input::TerminalKeys;
use tui_arcade::term::{Screen, TerminalRenderer};
use tui_arcade::types::FieldConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum GameKind {
    Breakout,
    Shooter,
}

/// Text-mode arcade games.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Which game to play.
    #[arg(value_enum)]
    game: GameKind,
    /// Playfield width in cells.
    #[arg(
        long,
        value_name = "COLUMNS",
        default_value_t = 120,
        value_parser = clap::value_parser!(i32).range(20..=1000)
    )]
    width: i32,
    /// Playfield height in cells.
    #[arg(
        long,
        value_name = "ROWS",
        default_value_t = 30,
        value_parser = clap::value_parser!(i32).range(10..=500)
    )]
    height: i32,
    /// Seed for the shooter's spawns and stars. Defaults to the clock.
    #[arg(long)]
    seed: Option<u64>,
    /// Directory holding player.txt, enemy.txt, pbullet.txt and bullet.txt.
    #[arg(long, value_name = "DIR")]
    assets: Option<PathBuf>,
    /// Lay the bricks out in a ring instead of a grid.
    #[arg(long)]
    ring: bool,
}

impl Cli {
    fn field(&self) -> FieldConfig {
        FieldConfig::new(self.width, self.height)
    }

    fn breakout(&self) -> BreakoutGame {
        let layout = if self.ring {
            BrickLayout::ring()
        } else {
            BrickLayout::default()
        };
        BreakoutGame::new(BreakoutConfig {
            field: self.field(),
            layout,
            ..BreakoutConfig::default()
        })
    }

    fn shooter(&self) -> ShooterGame {
        let mut sprites = ShooterSprites::default();
        if let Some(dir) = &self.assets {
            sprites.load_overrides(dir);
        }
        let config = ShooterConfig {
            field: self.field(),
            ..ShooterConfig::default()
        };
        let seed = self.seed.unwrap_or_else(clock_seed);
        log::info!("shooter seed {seed}");
        ShooterGame::new(Shooter::with_sprites(config, sprites, seed))
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn init_logging() -> Result<()> {
    let Some(path) = env::var("ARCADE_LOG_PATH")
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
    else {
        return Ok(());
    };

    let file = File::create(&path).with_context(|| format!("cannot open log file {path}"))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .try_init()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging()?;

    let config = LoopConfig::from_env();
    log::debug!("{:?}", config);

    match cli.game {
        GameKind::Breakout => play(&mut cli.breakout(), config, cli.field()),
        GameKind::Shooter => play(&mut cli.shooter(), config, cli.field()),
    }
}

fn play<P: Playable>(game: &mut P, config: LoopConfig, field: FieldConfig) -> Result<()> {
    let fallback = (field.width as u16, field.height as u16);
    let mut screen = Screen::new(TerminalRenderer::new(), fallback);
    screen.surface_mut().enter()?;

    let mut keys = TerminalKeys::with_release_timeout(config.key_release_timeout());
    let result = GameLoop::new(config).run(game, &mut screen, &mut keys);

    // Always try to restore terminal state.
    let restored = screen.surface_mut().exit();
    let stats = result?;
    restored?;
    log::info!("{} exited: {:?}", game.name(), stats);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_original_field() {
        let cli = Cli::try_parse_from(["tui-arcade", "breakout"]).unwrap();
        assert_eq!(cli.game, GameKind::Breakout);
        assert_eq!(cli.field(), FieldConfig::new(120, 30));
        assert!(!cli.ring);
    }

    #[test]
    fn parses_shooter_options() {
        let cli = Cli::try_parse_from([
            "tui-arcade",
            "shooter",
            "--width",
            "80",
            "--height",
            "24",
            "--seed",
            "9",
            "--assets",
            "assets",
        ])
        .unwrap();
        assert_eq!(cli.game, GameKind::Shooter);
        assert_eq!(cli.field(), FieldConfig::new(80, 24));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.assets, Some(PathBuf::from("assets")));
    }

    #[test]
    fn rejects_tiny_fields() {
        assert!(Cli::try_parse_from(["tui-arcade", "breakout", "--width", "3"]).is_err());
        assert!(Cli::try_parse_from(["tui-arcade", "pong"]).is_err());
    }

    #[test]
    fn ring_flag_selects_ring_layout() {
        let cli = Cli::try_parse_from(["tui-arcade", "breakout", "--ring"]).unwrap();
        assert_eq!(cli.breakout().state().bricks().len(), 60);
    }
}
