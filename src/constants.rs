//! This module contains all the constants used by the engine.

use std::time::Duration;

use glam::UVec2;

/// The interval between two simulation ticks.
pub const TICK_INTERVAL: Duration = Duration::from_millis(300);
/// The interval at which every ghost picks a new random direction.
pub const GHOST_REDIRECT_INTERVAL: Duration = Duration::from_millis(4000);
/// How long Pac-Man stays impaired after eating an energizer.
pub const IMPAIRMENT_DURATION: Duration = Duration::from_millis(5000);

/// The number of lives Pac-Man starts a game with.
pub const INITIAL_LIVES: u8 = 2;

/// Points awarded for a regular dot.
pub const DOT_SCORE: u32 = 10;
/// Points awarded for an energizer.
pub const ENERGIZER_SCORE: u32 = 100;

/// Pac-Man's identifier, shared with whatever view draws it.
pub const PACMAN_ID: &str = "pacman-id";

/// The size of the default game board, in cells.
pub const BOARD_CELL_SIZE: UVec2 = UVec2::new(28, 31);

/// The raw layout of the default game board.
///
/// `#` wall, `.` dot, `o` energizer, `P` Pac-Man spawn, `G` ghost spawn, space empty.
pub const RAW_BOARD: [&str; BOARD_CELL_SIZE.y as usize] = [
    "############################",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#o####.#####.##.#####.####o#",
    "#.####.#####.##.#####.####.#",
    "#..........................#",
    "#.####.##.########.##.####.#",
    "#.####.##.########.##.####.#",
    "#......##....##....##......#",
    "######.##### ## #####.######",
    "     #.##### ## #####.#     ",
    "     #.##    G     ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#     .   ########   .     #",
    "######.## ######## ##.######",
    "     #.## ######## ##.#     ",
    "     #.##          ##.#     ",
    "     #.## ######## ##.#     ",
    "######.## ######## ##.######",
    "#............##............#",
    "#.####.#####.##.#####.####.#",
    "#.####.#####.##.#####.####.#",
    "#o..##.......P .......##..o#",
    "###.##.##.########.##.##.###",
    "###.##.##.########.##.##.###",
    "#......##....##....##......#",
    "#.##########.##.##########.#",
    "#.##########.##.##########.#",
    "#..........................#",
    "############################",
];
