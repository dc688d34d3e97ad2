//! The two-layered maze Pac-Man and the ghosts walk through.

use tracing::{debug, trace};

use crate::error::{MazeError, SpawnKind};
use crate::map::layer::Layer;
use crate::map::parser::{MazeCell, RawMaze};
use crate::map::position::Position;
use crate::map::tile::{Dot, TileKind, Wall};

/// A maze built from a [`RawMaze`]: one layer of walls, one layer of dots, and the two spawn points.
#[derive(Debug, Clone)]
pub struct Maze {
    wall_layer: Layer<Wall>,
    dot_layer: Layer<Dot>,
    pacman_respawn: Position,
    ghost_respawn: Position,
    remaining_dot_count: usize,
}

impl Maze {
    /// Builds the wall and dot layers and locates both spawn points.
    ///
    /// When a spawn marker appears more than once, the first one in row-major order wins.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::MissingSpawnPoint`] if the raw maze has no Pac-Man or no ghost spawn.
    pub fn new(raw: &RawMaze) -> Result<Maze, MazeError> {
        let mut wall_layer = Layer::new(raw.rows(), raw.columns());
        let mut dot_layer = Layer::new(raw.rows(), raw.columns());
        let mut pacman_respawn = None;
        let mut ghost_respawn = None;
        let mut remaining_dot_count = 0;

        for (row, column, cell) in raw.cells() {
            let pos = Position::new(row as i32, column as i32);
            match cell {
                MazeCell::Wall => wall_layer.set_tile(pos, Wall::at(pos))?,
                MazeCell::Dot | MazeCell::Energizer => {
                    dot_layer.set_tile(pos, Dot::at(pos, cell == MazeCell::Energizer))?;
                    remaining_dot_count += 1;
                }
                MazeCell::PacmanSpawn => {
                    pacman_respawn.get_or_insert(pos);
                }
                MazeCell::GhostSpawn => {
                    ghost_respawn.get_or_insert(pos);
                }
                MazeCell::Empty => {}
            }
        }

        let pacman_respawn = pacman_respawn.ok_or(MazeError::MissingSpawnPoint(SpawnKind::Pacman))?;
        let ghost_respawn = ghost_respawn.ok_or(MazeError::MissingSpawnPoint(SpawnKind::Ghost))?;

        debug!(
            rows = raw.rows(),
            columns = raw.columns(),
            dots = remaining_dot_count,
            %pacman_respawn,
            %ghost_respawn,
            "Maze built"
        );

        Ok(Maze {
            wall_layer,
            dot_layer,
            pacman_respawn,
            ghost_respawn,
            remaining_dot_count,
        })
    }

    pub fn rows(&self) -> usize {
        self.wall_layer.rows()
    }

    pub fn columns(&self) -> usize {
        self.wall_layer.columns()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.wall_layer.contains(pos)
    }

    pub fn pacman_respawn(&self) -> Position {
        self.pacman_respawn
    }

    pub fn ghost_respawn(&self) -> Position {
        self.ghost_respawn
    }

    pub fn remaining_dot_count(&self) -> usize {
        self.remaining_dot_count
    }

    /// Returns true once every dot has been picked.
    pub fn is_empty(&self) -> bool {
        self.remaining_dot_count == 0
    }

    /// Returns true if a sprite may stand on the given position.
    ///
    /// Positions outside the maze are never walkable, which makes this the bounds check for movement.
    pub fn can_walk_on(&self, pos: Position) -> bool {
        matches!(self.wall_layer.has_tile(pos), Ok(false))
    }

    /// Returns true if there is a dot to pick at the given position.
    pub fn can_pick(&self, pos: Position) -> bool {
        matches!(self.dot_layer.has_tile(pos), Ok(true))
    }

    /// Removes and returns the dot at the given position.
    ///
    /// # Errors
    ///
    /// Returns [`MazeError::NothingToPick`] if the cell holds no dot; callers are expected to check
    /// [`Maze::can_pick`] first, so this signals a logic error.
    pub fn pick(&mut self, pos: Position) -> Result<Dot, MazeError> {
        let dot = self.dot_layer.take_tile(pos)?.ok_or(MazeError::NothingToPick(pos))?;
        self.remaining_dot_count -= 1;
        trace!(%pos, energizer = dot.is_energizer(), remaining = self.remaining_dot_count, "Dot picked");
        Ok(dot)
    }

    /// The wall at the given position, if any.
    pub fn wall_tile(&self, pos: Position) -> Result<Option<&Wall>, MazeError> {
        Ok(self.wall_layer.get_tile(pos)?)
    }

    /// The dot at the given position, if any.
    pub fn dot_tile(&self, pos: Position) -> Result<Option<&Dot>, MazeError> {
        Ok(self.dot_layer.get_tile(pos)?)
    }

    /// What a renderer should draw at the given position; `None` for empty or out-of-bounds cells.
    pub fn tile_kind(&self, pos: Position) -> Option<TileKind> {
        if let Ok(Some(_)) = self.wall_layer.get_tile(pos) {
            return Some(TileKind::Wall);
        }
        match self.dot_layer.get_tile(pos) {
            Ok(Some(dot)) => Some(TileKind::Dot {
                energizer: dot.is_energizer(),
            }),
            _ => None,
        }
    }

    /// Iterates over every remaining dot.
    pub fn dots(&self) -> impl Iterator<Item = (Position, &Dot)> + '_ {
        self.dot_layer.tiles()
    }

    /// Iterates over every wall.
    pub fn walls(&self) -> impl Iterator<Item = (Position, &Wall)> + '_ {
        self.wall_layer.tiles()
    }
}
