//! This module defines the maze and the grid primitives it is built from.

pub mod direction;
pub mod layer;
pub mod maze;
pub mod parser;
pub mod position;
pub mod tile;
