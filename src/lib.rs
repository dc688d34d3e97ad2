//! Pac-Man maze simulation engine.

pub mod app;
pub mod constants;
pub mod entity;
pub mod error;
pub mod formatter;
pub mod game;
pub mod map;
pub mod render;
