//! A rectangular, sparse grid of tiles.

use crate::error::LayerError;
use crate::map::position::Position;

/// A `rows × columns` grid where every cell may hold one tile.
///
/// Every access is bounds-checked: asking for a cell outside the grid is an error, never clamped.
#[derive(Debug, Clone)]
pub struct Layer<T> {
    rows: usize,
    columns: usize,
    cells: Vec<Option<T>>,
}

impl<T> Layer<T> {
    /// Creates an empty layer.
    pub fn new(rows: usize, columns: usize) -> Self {
        let mut cells = Vec::with_capacity(rows * columns);
        cells.resize_with(rows * columns, || None);
        Self { rows, columns, cells }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Returns true if the position lies within the layer.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row() >= 0 && pos.column() >= 0 && (pos.row() as usize) < self.rows && (pos.column() as usize) < self.columns
    }

    /// Places a tile, replacing whatever was there.
    pub fn set_tile(&mut self, pos: Position, tile: T) -> Result<(), LayerError> {
        let index = self.index(pos)?;
        self.cells[index] = Some(tile);
        Ok(())
    }

    /// Returns the tile at the given position, if any.
    pub fn get_tile(&self, pos: Position) -> Result<Option<&T>, LayerError> {
        let index = self.index(pos)?;
        Ok(self.cells[index].as_ref())
    }

    pub fn has_tile(&self, pos: Position) -> Result<bool, LayerError> {
        Ok(self.get_tile(pos)?.is_some())
    }

    /// Removes and returns the tile at the given position, leaving the cell empty.
    pub fn take_tile(&mut self, pos: Position) -> Result<Option<T>, LayerError> {
        let index = self.index(pos)?;
        Ok(self.cells[index].take())
    }

    /// Iterates over every occupied cell in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, &T)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(index, cell)| {
            cell.as_ref()
                .map(|tile| (Position::new((index / self.columns) as i32, (index % self.columns) as i32), tile))
        })
    }

    fn index(&self, pos: Position) -> Result<usize, LayerError> {
        if !self.contains(pos) {
            return Err(LayerError::OutOfBounds {
                position: pos,
                rows: self.rows,
                columns: self.columns,
            });
        }
        Ok(pos.row() as usize * self.columns + pos.column() as usize)
    }
}
