//! Centralized error types for the Pac-Man engine.
//!
//! Every error here is an invariant violation rather than a transient condition:
//! nothing in the engine retries, callers are expected to propagate with `?` and halt.

use std::io;

use crate::map::position::Position;

/// Main error type for the Pac-Man engine.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug)]
pub enum GameError {
    #[error("Maze parsing error: {0}")]
    MazeParse(#[from] ParseError),

    #[error("Maze error: {0}")]
    Maze(#[from] MazeError),

    #[error("Layer error: {0}")]
    Layer(#[from] LayerError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Error type for raw maze parsing operations.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Maze has no cells")]
    EmptyMaze,
    #[error("Maze row {row} has {found} columns, expected {expected}")]
    NotRectangular { row: usize, expected: usize, found: usize },
    #[error("Unknown value {value} at row {row}, column {column}")]
    UnknownValue { row: usize, column: usize, value: u8 },
    #[error("Unknown character in board: {0}")]
    UnknownCharacter(char),
}

/// Raised when a layer is accessed outside of its dimensions.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayerError {
    #[error("Position {position} is not on the layer ({rows}x{columns})")]
    OutOfBounds { position: Position, rows: usize, columns: usize },
}

/// The kind of spawn marker a maze must define.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum SpawnKind {
    #[strum(serialize = "Pac-Man")]
    Pacman,
    #[strum(serialize = "ghost")]
    Ghost,
}

/// Errors related to maze operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MazeError {
    #[error("There is nothing to pick at {0}")]
    NothingToPick(Position),

    #[error("The {0} spawn point was not found at initialization time")]
    MissingSpawnPoint(SpawnKind),

    #[error(transparent)]
    Layer(#[from] LayerError),
}

/// Errors raised while validating a [`GameConfig`](crate::game::config::GameConfig).
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Duration `{0}` must be greater than zero")]
    ZeroDuration(&'static str),
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;
