//! The moving parts of the game: Pac-Man and the ghosts.

pub mod ghost;
pub mod pacman;
pub mod sprite;
