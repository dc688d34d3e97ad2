use std::env;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use thousands::Separable;
use tracing::{debug, event, info, trace};

use crate::constants::RAW_BOARD;
use crate::entity::sprite::Sprite;
use crate::formatter;
use crate::game::config::GameConfig;
use crate::game::store::FileStore;
use crate::game::Game;
use crate::map::direction::Direction;
use crate::map::parser::RawMaze;
use crate::map::position::Position;
use crate::render::{render_frame, status_line};

/// How often, in ticks, the status line is logged.
const STATUS_PERIOD: u64 = 20;

/// Settings for a headless run, read from the environment.
#[derive(Debug, Clone)]
pub struct Settings {
    pub config: GameConfig,
    pub score_file: PathBuf,
    /// Stop after this many ticks even if the game is not over.
    pub max_ticks: Option<u64>,
}

impl Settings {
    /// Reads `PACMAN_SEED`, `PACMAN_MAX_TICKS` and `PACMAN_SCORE_FILE`, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        let rng_seed = parse_var("PACMAN_SEED")?;
        let max_ticks = parse_var("PACMAN_MAX_TICKS")?;
        let score_file = env::var_os("PACMAN_SCORE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("pacman-highscore.txt"));

        Ok(Self {
            config: GameConfig {
                rng_seed,
                ..GameConfig::default()
            },
            score_file,
            max_ticks,
        })
    }
}

fn parse_var(name: &str) -> Result<Option<u64>> {
    env::var(name)
        .ok()
        .map(|value| value.parse::<u64>().with_context(|| format!("{name} must be a non-negative integer, got {value:?}")))
        .transpose()
}

/// Drives a game without a window: ticks on a fixed interval and steers Pac-Man with a simple
/// autopilot that turns at random whenever it gets stuck.
pub struct App {
    game: Game,
    tick_interval: Duration,
    max_ticks: Option<u64>,
    ticks: u64,
    autopilot: SmallRng,
    last_position: Option<Position>,
}

impl App {
    pub fn new(settings: Settings) -> Result<Self> {
        let raw_maze = RawMaze::from_board(&RAW_BOARD).context("Default board is malformed")?;
        let autopilot = match settings.config.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(1)),
            None => SmallRng::from_os_rng(),
        };
        let tick_interval = settings.config.tick_interval;

        let game = Game::new(raw_maze, settings.config, FileStore::new(&settings.score_file))
            .context("Could not create the game")?;

        info!(
            score_file = %settings.score_file.display(),
            max_ticks = ?settings.max_ticks,
            "Starting headless game loop ({:.3}ms)",
            tick_interval.as_secs_f32() * 1000.0
        );

        Ok(Self {
            game,
            tick_interval,
            max_ticks: settings.max_ticks,
            ticks: 0,
            autopilot,
            last_position: None,
        })
    }

    /// Runs one iteration of the loop. Returns false once the run is over.
    pub fn run(&mut self) -> Result<bool> {
        let start = Instant::now();

        self.steer();
        self.game.tick()?;
        formatter::increment_tick();
        self.ticks += 1;
        trace!("\n{}", render_frame(&self.game));

        if self.game.is_game_over() {
            info!(score = %self.game.score().separate_with_commas(), level = self.game.level(), "Game over");
            self.finish()?;
            return Ok(false);
        }

        if self.game.lvl_succeed() {
            self.game.next_level()?;
        } else if self.game.is_pacman_dead() {
            self.game.respawn();
        }

        if self.ticks % STATUS_PERIOD == 0 {
            debug!("{}", status_line(&self.game));
        }

        if self.max_ticks.is_some_and(|max| self.ticks >= max) {
            info!(ticks = self.ticks, score = %self.game.score().separate_with_commas(), "Tick limit reached");
            self.finish()?;
            return Ok(false);
        }

        if start.elapsed() < self.tick_interval {
            let time = self.tick_interval.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        } else {
            event!(
                tracing::Level::WARN,
                "Game loop behind schedule by: {:?}",
                start.elapsed() - self.tick_interval
            );
        }

        Ok(true)
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    fn steer(&mut self) {
        let position = self.game.pacman().position();
        if self.last_position == Some(position) || self.last_position.is_none() {
            let direction = Direction::random(&mut self.autopilot);
            trace!(%position, %direction, "Autopilot turns");
            self.game.request_direction(direction);
        }
        self.last_position = Some(position);
    }

    fn finish(&mut self) -> Result<()> {
        if self.game.save_score().context("Could not save the high score")? {
            info!(high_score = %self.game.high_score().separate_with_commas(), "High score saved");
        }
        self.game.stop();
        Ok(())
    }
}
