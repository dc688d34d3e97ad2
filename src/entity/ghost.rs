//! Ghost entity implementation.
//!
//! Ghosts wander the maze at random: they pick a new direction on a fixed schedule and
//! whenever they run into a wall.

use rand::Rng;
use strum_macros::{Display, EnumIter, IntoStaticStr};
use tracing::trace;

use crate::entity::pacman::Pacman;
use crate::entity::sprite::{Motion, Sprite};
use crate::map::direction::Direction;
use crate::map::position::Position;
use crate::map::tile::Component;

/// The four classic ghost types, in the order they act every tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum GhostType {
    Blinky,
    Pinky,
    Inky,
    Clyde,
}

impl GhostType {
    pub const ALL: [GhostType; 4] = [GhostType::Blinky, GhostType::Pinky, GhostType::Inky, GhostType::Clyde];

    /// Returns the ghost's name, which doubles as its identifier.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// A ghost roaming the maze.
#[derive(Debug, Clone)]
pub struct Ghost {
    motion: Motion,
    ghost_type: GhostType,
}

impl Ghost {
    /// The direction ghosts face whenever they (re)spawn.
    pub const SPAWN_DIRECTION: Direction = Direction::North;

    pub fn new(ghost_type: GhostType, spawn: Position) -> Self {
        Self {
            motion: Motion::new(spawn, Self::SPAWN_DIRECTION),
            ghost_type,
        }
    }

    pub fn ghost_type(&self) -> GhostType {
        self.ghost_type
    }

    /// Requests a uniformly random direction. The ghost only turns once the request is committed.
    pub fn choose_new_direction<R: Rng>(&mut self, rng: &mut R) -> Direction {
        let direction = Direction::random(rng);
        trace!(ghost = %self.ghost_type, %direction, "Ghost asks for a new direction");
        self.ask_to_change_direction(direction);
        direction
    }

    /// Returns true if the ghost catches Pac-Man.
    ///
    /// Sharing a cell counts, and so does sharing a previous cell. Two sprites that swapped cells
    /// crossed each other on the way, which counts too. Each sprite's own previous position is
    /// compared, even if one of them last moved in an earlier tick.
    pub fn can_eat(&self, pacman: &Pacman) -> bool {
        let crossed = self.position() == pacman.previous_position() && self.previous_position() == pacman.position();
        self.position() == pacman.position() || self.previous_position() == pacman.previous_position() || crossed
    }
}

impl Component for Ghost {
    fn id(&self) -> &str {
        self.ghost_type.as_str()
    }
}

impl Sprite for Ghost {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    fn notify_is_blocked<R: Rng>(&mut self, rng: &mut R) {
        self.choose_new_direction(rng);
    }
}
