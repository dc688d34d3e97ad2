//! Pac-Man entity implementation.
//!
//! On top of the shared sprite motion, Pac-Man carries a lives counter and an impairment
//! status granted by energizers, during which the player's steering is scrambled.

use crate::constants::PACMAN_ID;
use crate::entity::sprite::{Motion, Sprite};
use crate::map::direction::Direction;
use crate::map::position::Position;
use crate::map::tile::Component;

/// The player character.
#[derive(Debug, Clone)]
pub struct Pacman {
    motion: Motion,
    lives_remaining: u8,
    /// Token of the impairment currently in effect; only the matching expiry may clear it.
    impairment: Option<u64>,
}

impl Pacman {
    /// The direction Pac-Man faces whenever it (re)spawns.
    pub const SPAWN_DIRECTION: Direction = Direction::West;

    /// Creates Pac-Man on its spawn point with the given number of lives.
    pub fn new(spawn: Position, lives: u8) -> Self {
        Self {
            motion: Motion::new(spawn, Self::SPAWN_DIRECTION),
            lives_remaining: lives,
            impairment: None,
        }
    }

    pub fn lives_remaining(&self) -> u8 {
        self.lives_remaining
    }

    /// Returns true while an energizer's effect is active.
    pub fn is_impaired(&self) -> bool {
        self.impairment.is_some()
    }

    /// Starts (or restarts) an impairment identified by `token`, superseding any earlier one.
    pub(crate) fn impair(&mut self, token: u64) {
        self.impairment = Some(token);
    }

    /// Ends the impairment identified by `token`. Returns false if a newer impairment is in effect.
    pub(crate) fn recover(&mut self, token: u64) -> bool {
        if self.impairment == Some(token) {
            self.impairment = None;
            true
        } else {
            false
        }
    }

    /// Ends any impairment regardless of its token.
    pub(crate) fn clear_impairment(&mut self) {
        self.impairment = None;
    }
}

impl Component for Pacman {
    fn id(&self) -> &str {
        PACMAN_ID
    }
}

impl Sprite for Pacman {
    fn motion(&self) -> &Motion {
        &self.motion
    }

    fn motion_mut(&mut self) -> &mut Motion {
        &mut self.motion
    }

    fn has_been_eaten(&mut self) {
        self.motion.mark_dead();
        self.lives_remaining = self.lives_remaining.saturating_sub(1);
    }
}
