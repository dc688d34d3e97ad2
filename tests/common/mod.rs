#![allow(dead_code)]

use pacman_engine::game::clock::ManualClock;
use pacman_engine::game::config::GameConfig;
use pacman_engine::game::store::MemoryStore;
use pacman_engine::game::Game;
use pacman_engine::map::parser::RawMaze;
use pacman_engine::map::position::Position;

pub const SEED: u64 = 0x5EED;

/// Pac-Man at (1,1) facing a dot at (1,2) and an energizer at (1,3); ghosts penned at (3,1).
pub fn small_maze() -> RawMaze {
    RawMaze::new(vec![
        vec![1, 1, 1, 1, 1],
        vec![1, 4, 2, 3, 1],
        vec![1, 1, 0, 1, 1],
        vec![1, 5, 0, 0, 1],
        vec![1, 1, 1, 1, 1],
    ])
    .unwrap()
}

/// Pac-Man at (1,1) right next to the ghost spawn at (1,2), with no dots at all.
pub fn ambush_maze() -> RawMaze {
    RawMaze::new(vec![vec![1, 1, 1, 1], vec![1, 4, 5, 1], vec![1, 1, 1, 1]]).unwrap()
}

/// Two energizers in a row east of Pac-Man; ghosts walled off below.
pub fn double_energizer_maze() -> RawMaze {
    RawMaze::new(vec![
        vec![1, 1, 1, 1, 1],
        vec![1, 4, 3, 3, 1],
        vec![1, 1, 1, 1, 1],
        vec![1, 5, 0, 0, 1],
        vec![1, 1, 1, 1, 1],
    ])
    .unwrap()
}

/// A one-cell-wide shaft: Pac-Man at (1,1) directly above the ghost spawn at (2,1).
pub fn shaft_maze() -> RawMaze {
    RawMaze::new(vec![vec![1, 1, 1], vec![1, 4, 1], vec![1, 5, 1], vec![1, 1, 1]]).unwrap()
}

pub fn pos(row: i32, column: i32) -> Position {
    Position::new(row, column)
}

/// Creates a seeded game on a virtual clock, returning a handle to advance time.
pub fn create_test_game(raw: RawMaze, config: GameConfig) -> (Game, ManualClock) {
    create_test_game_with_store(raw, config, MemoryStore::default())
}

pub fn create_test_game_with_store(raw: RawMaze, config: GameConfig, store: MemoryStore) -> (Game, ManualClock) {
    let clock = ManualClock::new();
    let game = Game::with_clock(raw, config, store, clock.clone()).unwrap();
    (game, clock)
}

/// A unique path in the temp directory for file-store tests.
pub fn temp_score_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("pacman-engine-{}-{}.txt", std::process::id(), name))
}
