//! Raw maze parsing: turns numeric grids or text boards into a validated [`RawMaze`].

use crate::error::ParseError;

/// A single cell of the raw maze format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MazeCell {
    Empty = 0,
    Wall = 1,
    Dot = 2,
    Energizer = 3,
    PacmanSpawn = 4,
    GhostSpawn = 5,
}

impl TryFrom<u8> for MazeCell {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(MazeCell::Empty),
            1 => Ok(MazeCell::Wall),
            2 => Ok(MazeCell::Dot),
            3 => Ok(MazeCell::Energizer),
            4 => Ok(MazeCell::PacmanSpawn),
            5 => Ok(MazeCell::GhostSpawn),
            other => Err(other),
        }
    }
}

impl MazeCell {
    /// Parses a single character of a text board.
    pub fn parse_character(c: char) -> Result<MazeCell, ParseError> {
        match c {
            ' ' => Ok(MazeCell::Empty),
            '#' => Ok(MazeCell::Wall),
            '.' => Ok(MazeCell::Dot),
            'o' => Ok(MazeCell::Energizer),
            'P' => Ok(MazeCell::PacmanSpawn),
            'G' => Ok(MazeCell::GhostSpawn),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }

    /// Returns true for cells that hold something Pac-Man can pick up.
    pub fn is_collectible(self) -> bool {
        matches!(self, MazeCell::Dot | MazeCell::Energizer)
    }
}

/// An immutable, rectangular grid of maze cells, one inner vector per row.
///
/// This is kept by the game for the whole session so every level can rebuild a fresh maze from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawMaze {
    table: Vec<Vec<MazeCell>>,
}

impl RawMaze {
    /// Builds a raw maze from its numeric form.
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is empty, if its rows differ in length or if a value is not
    /// one of the six known cell values.
    pub fn new(table: Vec<Vec<u8>>) -> Result<Self, ParseError> {
        Self::check_shape(table.iter().map(Vec::len))?;

        let table = table
            .into_iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .into_iter()
                    .enumerate()
                    .map(|(column, value)| {
                        MazeCell::try_from(value).map_err(|value| ParseError::UnknownValue { row, column, value })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { table })
    }

    /// Builds a raw maze from a text board, one string per row.
    ///
    /// # Errors
    ///
    /// Returns an error if the board is empty, ragged or contains an unknown character.
    pub fn from_board(board: &[&str]) -> Result<Self, ParseError> {
        Self::check_shape(board.iter().map(|line| line.chars().count()))?;

        let table = board
            .iter()
            .map(|line| line.chars().map(MazeCell::parse_character).collect::<Result<Vec<_>, _>>())
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { table })
    }

    pub fn rows(&self) -> usize {
        self.table.len()
    }

    pub fn columns(&self) -> usize {
        self.table[0].len()
    }

    /// Iterates over every cell in row-major order, with its coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, MazeCell)> + '_ {
        self.table
            .iter()
            .enumerate()
            .flat_map(|(row, cells)| cells.iter().enumerate().map(move |(column, cell)| (row, column, *cell)))
    }

    /// The number of dots and energizers on the board.
    pub fn collectible_count(&self) -> usize {
        self.cells().filter(|(_, _, cell)| cell.is_collectible()).count()
    }

    fn check_shape(mut lengths: impl Iterator<Item = usize>) -> Result<usize, ParseError> {
        let expected = match lengths.next() {
            Some(0) | None => return Err(ParseError::EmptyMaze),
            Some(length) => length,
        };

        for (index, found) in lengths.enumerate() {
            if found != expected {
                return Err(ParseError::NotRectangular {
                    row: index + 1,
                    expected,
                    found,
                });
            }
        }

        Ok(expected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_character() {
        let test_cases = [
            ('#', MazeCell::Wall),
            ('.', MazeCell::Dot),
            ('o', MazeCell::Energizer),
            (' ', MazeCell::Empty),
            ('P', MazeCell::PacmanSpawn),
            ('G', MazeCell::GhostSpawn),
        ];

        for (c, expected) in test_cases {
            assert_eq!(MazeCell::parse_character(c).unwrap(), expected);
        }

        assert_eq!(MazeCell::parse_character('Z'), Err(ParseError::UnknownCharacter('Z')));
    }

    #[test]
    fn test_cell_from_value() {
        assert_eq!(MazeCell::try_from(3), Ok(MazeCell::Energizer));
        assert_eq!(MazeCell::try_from(6), Err(6));
    }
}
