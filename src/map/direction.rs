use glam::IVec2;
use rand::seq::IndexedRandom;
use rand::Rng;
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// One of the four canonical movement directions on the maze grid.
///
/// Deltas are expressed as `(row, column)`: north decreases the row, west decreases the column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    North,
    South,
    West,
    East,
}

impl Direction {
    /// The four directions, in the order random picks index into.
    pub const DIRECTIONS: [Direction; 4] = [Direction::North, Direction::South, Direction::West, Direction::East];

    /// Picks one of the four directions uniformly at random.
    pub fn random<R: Rng>(rng: &mut R) -> Direction {
        Self::DIRECTIONS.choose(rng).copied().unwrap_or(Direction::North)
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
        }
    }

    /// The row delta of a single step.
    pub fn delta_row(&self) -> i32 {
        self.as_ivec2().y
    }

    /// The column delta of a single step.
    pub fn delta_column(&self) -> i32 {
        self.as_ivec2().x
    }

    /// The step as a vector, `x` being the column axis and `y` the row axis.
    pub fn as_ivec2(&self) -> IVec2 {
        (*self).into()
    }
}

impl From<Direction> for IVec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => -IVec2::Y,
            Direction::South => IVec2::Y,
            Direction::West => -IVec2::X,
            Direction::East => IVec2::X,
        }
    }
}
