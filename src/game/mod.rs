//! This module contains the main game logic and state.
//!
//! [`Game`] owns the maze and every sprite and advances them one [`Game::tick`] at a time. It never
//! decides on its own that a level is won or a game is lost: the driver polls
//! [`Game::lvl_succeed`], [`Game::is_game_over`] and [`Game::is_pacman_dead`] after each tick and
//! answers with [`Game::next_level`], [`Game::save_score`] or [`Game::respawn`].

use rand::rngs::SmallRng;
use rand::SeedableRng;
use smallvec::SmallVec;
use tracing::{debug, info, trace};

use crate::constants::{DOT_SCORE, ENERGIZER_SCORE};
use crate::entity::ghost::{Ghost, GhostType};
use crate::entity::pacman::Pacman;
use crate::entity::sprite::Sprite;
use crate::error::GameResult;
use crate::map::direction::Direction;
use crate::map::maze::Maze;
use crate::map::parser::RawMaze;
use crate::map::tile::{Component, Dot};

use self::clock::{Clock, SystemClock};
use self::config::GameConfig;
use self::store::ScoreStore;
use self::timers::{Scheduler, TimerEvent};

pub mod clock;
pub mod config;
pub mod store;
pub mod timers;

/// The `Game` struct is the main entry point of the engine.
///
/// It holds the maze, Pac-Man, the four ghosts and the score, and is responsible for
/// advancing them, firing timers and keeping the high score.
pub struct Game {
    raw_maze: RawMaze,
    maze: Maze,
    pacman: Pacman,
    ghosts: SmallVec<[Ghost; 4]>,
    score: u32,
    high_score: u32,
    level: u32,
    last_removed_dot: Option<Dot>,
    config: GameConfig,
    scheduler: Scheduler,
    next_impairment_token: u64,
    clock: Box<dyn Clock>,
    rng: SmallRng,
    store: Box<dyn ScoreStore>,
}

impl Game {
    /// Creates a game running on wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or if the maze lacks a spawn point.
    pub fn new(raw_maze: RawMaze, config: GameConfig, store: impl ScoreStore + 'static) -> GameResult<Game> {
        Self::with_clock(raw_maze, config, store, SystemClock::new())
    }

    /// Creates a game whose timers follow the given clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or if the maze lacks a spawn point.
    pub fn with_clock(
        raw_maze: RawMaze,
        config: GameConfig,
        store: impl ScoreStore + 'static,
        clock: impl Clock + 'static,
    ) -> GameResult<Game> {
        config.validate()?;
        let maze = Maze::new(&raw_maze)?;

        let pacman = Pacman::new(maze.pacman_respawn(), config.initial_lives);
        let ghosts = GhostType::ALL
            .into_iter()
            .map(|ghost_type| Ghost::new(ghost_type, maze.ghost_respawn()))
            .collect::<SmallVec<[_; 4]>>();

        let rng = match config.rng_seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        let high_score = store.load_high_score();

        let mut scheduler = Scheduler::new();
        let first_redirect = clock.now() + config.ghost_redirect_interval;
        for ghost in &ghosts {
            scheduler.schedule(first_redirect, TimerEvent::GhostRedirect(ghost.ghost_type()));
        }

        info!(
            rows = maze.rows(),
            columns = maze.columns(),
            dots = maze.remaining_dot_count(),
            lives = config.initial_lives,
            high_score,
            "Game created"
        );

        Ok(Game {
            raw_maze,
            maze,
            pacman,
            ghosts,
            score: 0,
            high_score,
            level: 1,
            last_removed_dot: None,
            config,
            scheduler,
            next_impairment_token: 0,
            clock: Box::new(clock),
            rng,
            store: Box::new(store),
        })
    }

    /// Advances the simulation by one step.
    ///
    /// Due timers fire first. Then Pac-Man moves and eats whatever lies on its new cell, and only then
    /// does each ghost move and check for a catch, in the fixed order blinky, pinky, inky, clyde.
    ///
    /// # Errors
    ///
    /// Only fails on an internal inconsistency between the maze and its pickup checks.
    pub fn tick(&mut self) -> GameResult<()> {
        self.poll_timers();

        if self.pacman.is_alive() {
            self.move_pacman();
            self.resolve_pickup()?;
        }
        self.move_ghosts();

        Ok(())
    }

    /// Fires every timer due by now and returns how many fired.
    ///
    /// [`Game::tick`] calls this itself; drivers may also call it between ticks so that timers land
    /// as close to their due time as possible.
    pub fn poll_timers(&mut self) -> usize {
        let now = self.clock.now();
        let mut fired = 0;

        while let Some((due, event)) = self.scheduler.pop_due(now) {
            fired += 1;
            match event {
                TimerEvent::GhostRedirect(ghost_type) => {
                    if let Some(ghost) = self.ghosts.iter_mut().find(|ghost| ghost.ghost_type() == ghost_type) {
                        ghost.choose_new_direction(&mut self.rng);
                    }
                    self.scheduler.schedule(due + self.config.ghost_redirect_interval, event);
                }
                TimerEvent::ImpairmentExpired { token } => {
                    if self.pacman.recover(token) {
                        debug!(token, "Pac-Man is no longer impaired");
                    } else {
                        trace!(token, "Superseded impairment expired");
                    }
                }
            }
        }

        fired
    }

    /// Forwards a steering request to Pac-Man.
    ///
    /// While Pac-Man is impaired the requested direction is replaced with a random one.
    pub fn request_direction(&mut self, direction: Direction) {
        let direction = if self.pacman.is_impaired() {
            let scrambled = Direction::random(&mut self.rng);
            trace!(requested = %direction, %scrambled, "Impaired steering");
            scrambled
        } else {
            direction
        };
        self.pacman.ask_to_change_direction(direction);
    }

    /// Puts Pac-Man and every ghost back on their spawn points. Eaten dots stay eaten.
    pub fn respawn(&mut self) {
        self.pacman.respawn();
        for ghost in self.ghosts.iter_mut() {
            ghost.respawn();
        }
        debug!(lives = self.pacman.lives_remaining(), "Sprites respawned");
    }

    /// Rebuilds a full maze from the raw layout and respawns every sprite. The score carries over.
    ///
    /// Any impairment ends with the level, and its pending expiry is cancelled. Ghost redirects
    /// keep their cadence.
    ///
    /// # Errors
    ///
    /// Returns an error if the maze cannot be rebuilt, which cannot happen for a maze that already
    /// built once.
    pub fn next_level(&mut self) -> GameResult<()> {
        self.maze = Maze::new(&self.raw_maze)?;
        self.level += 1;
        self.last_removed_dot = None;
        self.pacman.clear_impairment();
        self.scheduler
            .retain(|event| !matches!(event, TimerEvent::ImpairmentExpired { .. }));
        self.respawn();
        info!(level = self.level, score = self.score, "Next level");
        Ok(())
    }

    /// Returns true once Pac-Man has no lives left.
    pub fn is_game_over(&self) -> bool {
        self.pacman.lives_remaining() == 0
    }

    /// Returns true once every dot of the current level has been eaten.
    pub fn lvl_succeed(&self) -> bool {
        self.maze.is_empty()
    }

    /// Returns true if Pac-Man was caught and has not respawned yet.
    pub fn is_pacman_dead(&self) -> bool {
        !self.pacman.is_alive()
    }

    /// Stores the current score as the new high score if it beats it. Returns true if it did.
    ///
    /// # Errors
    ///
    /// Returns an error if the score store fails to persist the new high score.
    pub fn save_score(&mut self) -> GameResult<bool> {
        if self.score <= self.high_score {
            debug!(score = self.score, high_score = self.high_score, "High score not beaten");
            return Ok(false);
        }

        self.store.save_high_score(self.score)?;
        self.high_score = self.score;
        info!(high_score = self.high_score, "New high score");
        Ok(true)
    }

    /// Cancels every pending timer. Call when tearing the game down.
    pub fn stop(&mut self) {
        debug!(cancelled = self.scheduler.len(), "Game stopped");
        self.scheduler.clear();
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn pacman(&self) -> &Pacman {
        &self.pacman
    }

    /// The ghosts, in the order they act.
    pub fn ghosts(&self) -> &[Ghost] {
        &self.ghosts
    }

    pub fn ghost(&self, ghost_type: GhostType) -> Option<&Ghost> {
        self.ghosts.iter().find(|ghost| ghost.ghost_type() == ghost_type)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn lives(&self) -> u8 {
        self.pacman.lives_remaining()
    }

    /// The current level, starting at 1.
    pub fn level(&self) -> u32 {
        self.level
    }

    /// The dot eaten most recently during this level, for the view to remove.
    pub fn last_removed_dot(&self) -> Option<&Dot> {
        self.last_removed_dot.as_ref()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The number of timers waiting to fire.
    pub fn pending_timers(&self) -> usize {
        self.scheduler.len()
    }

    fn move_pacman(&mut self) {
        let position = self.pacman.position();

        match self.pacman.asked_direction() {
            Some(asked) if self.maze.can_walk_on(position.next_position(asked)) => {
                self.pacman.change_direction();
                self.pacman.move_forward();
            }
            _ if self.maze.can_walk_on(position.next_position(self.pacman.direction())) => {
                self.pacman.move_forward();
            }
            _ => trace!(%position, "Pac-Man is blocked"),
        }
    }

    fn resolve_pickup(&mut self) -> GameResult<()> {
        let position = self.pacman.position();
        if !self.maze.can_pick(position) {
            return Ok(());
        }

        let dot = self.maze.pick(position)?;
        let points = if dot.is_energizer() { ENERGIZER_SCORE } else { DOT_SCORE };
        self.score += points;
        debug!(dot = dot.id(), points, score = self.score, remaining = self.maze.remaining_dot_count(), "Dot eaten");

        if dot.is_energizer() {
            self.impair_pacman();
        }
        self.last_removed_dot = Some(dot);
        Ok(())
    }

    fn impair_pacman(&mut self) {
        let token = self.next_impairment_token;
        self.next_impairment_token += 1;

        self.pacman.impair(token);
        let expiry = self.clock.now() + self.config.impairment_duration;
        self.scheduler.schedule(expiry, TimerEvent::ImpairmentExpired { token });
        debug!(token, duration = ?self.config.impairment_duration, "Pac-Man is impaired");
    }

    fn move_ghosts(&mut self) {
        for ghost in self.ghosts.iter_mut() {
            let ahead = ghost.position().next_position(ghost.direction());
            if self.maze.can_walk_on(ahead) {
                ghost.move_forward();
            } else {
                ghost.notify_is_blocked(&mut self.rng);
                ghost.change_direction();
            }

            if self.pacman.is_alive() && ghost.can_eat(&self.pacman) {
                self.pacman.has_been_eaten();
                info!(
                    ghost = %ghost.ghost_type(),
                    position = %self.pacman.position(),
                    lives = self.pacman.lives_remaining(),
                    "Pac-Man has been eaten"
                );
            }
        }
    }
}
