//! Sprite trait for the shared motion behavior of Pac-Man and the ghosts.
//!
//! A sprite never checks whether a move is legal: the game consults the maze first and only
//! then asks the sprite to turn or step.

use rand::Rng;

use crate::map::direction::Direction;
use crate::map::position::Position;
use crate::map::tile::Component;

/// The motion state every sprite carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Motion {
    position: Position,
    direction: Direction,
    previous_position: Position,
    asked_direction: Option<Direction>,
    spawn_position: Position,
    spawn_direction: Direction,
    alive: bool,
}

impl Motion {
    /// Creates a living sprite state at its spawn point.
    pub fn new(spawn_position: Position, spawn_direction: Direction) -> Self {
        Self {
            position: spawn_position,
            direction: spawn_direction,
            previous_position: spawn_position,
            asked_direction: None,
            spawn_position,
            spawn_direction,
            alive: true,
        }
    }

    pub fn spawn_position(&self) -> Position {
        self.spawn_position
    }

    pub fn spawn_direction(&self) -> Direction {
        self.spawn_direction
    }

    pub(crate) fn mark_dead(&mut self) {
        self.alive = false;
    }
}

/// Trait defining the motion contract shared by every sprite.
///
/// Implementors only expose their [`Motion`]; the state machine lives in the provided methods.
/// Pac-Man and the ghosts override the hooks they need ([`Sprite::has_been_eaten`],
/// [`Sprite::notify_is_blocked`]).
pub trait Sprite: Component {
    /// Returns a reference to the sprite's motion state.
    fn motion(&self) -> &Motion;

    /// Returns a mutable reference to the sprite's motion state.
    fn motion_mut(&mut self) -> &mut Motion;

    fn position(&self) -> Position {
        self.motion().position
    }

    fn direction(&self) -> Direction {
        self.motion().direction
    }

    fn previous_position(&self) -> Position {
        self.motion().previous_position
    }

    fn is_alive(&self) -> bool {
        self.motion().alive
    }

    /// Returns true once a direction change has been requested. The flag stays set after the change is committed.
    fn asked_to_change_direction(&self) -> bool {
        self.motion().asked_direction.is_some()
    }

    fn asked_direction(&self) -> Option<Direction> {
        self.motion().asked_direction
    }

    /// Records a pending direction request, replacing any earlier one. The sprite does not turn yet.
    fn ask_to_change_direction(&mut self, direction: Direction) {
        self.motion_mut().asked_direction = Some(direction);
    }

    /// Commits the pending direction request.
    fn change_direction(&mut self) {
        let motion = self.motion_mut();
        if let Some(direction) = motion.asked_direction {
            motion.direction = direction;
        }
    }

    /// Steps one cell in the current direction, remembering the cell being left.
    fn move_forward(&mut self) {
        let motion = self.motion_mut();
        motion.previous_position = motion.position;
        motion.position = motion.position.next_position(motion.direction);
    }

    /// Marks the sprite as dead.
    fn has_been_eaten(&mut self) {
        self.motion_mut().mark_dead();
    }

    /// Puts the sprite back on its spawn point, facing its spawn direction, alive and with no pending request.
    fn respawn(&mut self) {
        let motion = self.motion_mut();
        motion.position = motion.spawn_position;
        motion.previous_position = motion.spawn_position;
        motion.direction = motion.spawn_direction;
        motion.asked_direction = None;
        motion.alive = true;
    }

    /// Called by the game when the sprite cannot move forward. Does nothing by default.
    fn notify_is_blocked<R: Rng>(&mut self, _rng: &mut R) {}
}
