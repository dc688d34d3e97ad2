//! Static maze content: walls and dots.

use crate::map::position::Position;

/// Anything in the game identified by a unique string id.
pub trait Component {
    fn id(&self) -> &str;
}

/// An impassable tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wall {
    id: String,
}

impl Wall {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Creates a wall whose id derives from its position, e.g. `wall_3_7`.
    pub fn at(pos: Position) -> Self {
        Self::new(format!("wall_{}_{}", pos.row(), pos.column()))
    }
}

impl Component for Wall {
    fn id(&self) -> &str {
        &self.id
    }
}

/// A collectible tile; energizers are worth more and impair Pac-Man.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dot {
    id: String,
    energizer: bool,
}

impl Dot {
    pub fn new(id: impl Into<String>, energizer: bool) -> Self {
        Self {
            id: id.into(),
            energizer,
        }
    }

    /// Creates a dot whose id derives from its position, e.g. `dot_1_2`.
    pub fn at(pos: Position, energizer: bool) -> Self {
        Self::new(format!("dot_{}_{}", pos.row(), pos.column()), energizer)
    }

    pub fn is_energizer(&self) -> bool {
        self.energizer
    }
}

impl Component for Dot {
    fn id(&self) -> &str {
        &self.id
    }
}

/// What occupies a cell, as seen by a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileKind {
    Wall,
    Dot { energizer: bool },
}
