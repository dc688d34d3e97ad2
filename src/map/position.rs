use std::fmt;

use glam::IVec2;

use crate::map::direction::Direction;

/// A cell on the maze grid, addressed by row then column.
///
/// Positions are plain values: stepping produces a new position and never mutates.
/// Coordinates may go negative when stepping off the top or left edge; such positions
/// are simply outside every layer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct Position {
    row: i32,
    column: i32,
}

impl Position {
    pub const fn new(row: i32, column: i32) -> Self {
        Self { row, column }
    }

    pub fn row(&self) -> i32 {
        self.row
    }

    pub fn column(&self) -> i32 {
        self.column
    }

    /// The neighbouring cell in the given direction.
    pub fn next_position(&self, direction: Direction) -> Position {
        (IVec2::from(*self) + direction.as_ivec2()).into()
    }
}

impl From<Position> for IVec2 {
    fn from(pos: Position) -> Self {
        IVec2::new(pos.column, pos.row)
    }
}

impl From<IVec2> for Position {
    fn from(vec: IVec2) -> Self {
        Position::new(vec.y, vec.x)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
