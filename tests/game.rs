use std::time::Duration;

use pacman_engine::entity::ghost::GhostType;
use pacman_engine::entity::sprite::Sprite;
use pacman_engine::error::{ConfigError, GameError};
use pacman_engine::game::clock::ManualClock;
use pacman_engine::game::config::GameConfig;
use pacman_engine::game::store::MemoryStore;
use pacman_engine::game::Game;
use pacman_engine::map::direction::Direction;
use pacman_engine::map::parser::RawMaze;
use pacman_engine::map::tile::Component;
use pretty_assertions::assert_eq;
use speculoos::prelude::*;

mod common;

use common::{create_test_game, create_test_game_with_store, pos, SEED};

#[test]
fn test_new_game() {
    let (game, _clock) = create_test_game(common::small_maze(), GameConfig::seeded(SEED));

    assert_that(&game.score()).is_equal_to(0);
    assert_that(&game.lives()).is_equal_to(2);
    assert_that(&game.level()).is_equal_to(1);
    assert_that(&game.pacman().position()).is_equal_to(pos(1, 1));
    assert_that(&game.last_removed_dot().is_none()).is_true();

    let names: Vec<_> = game.ghosts().iter().map(|ghost| ghost.id()).collect();
    assert_eq!(names, vec!["blinky", "pinky", "inky", "clyde"]);
    assert!(game.ghosts().iter().all(|ghost| ghost.position() == pos(3, 1)));
}

#[test]
fn test_eat_dot_then_energizer() {
    let (mut game, _clock) = create_test_game(common::small_maze(), GameConfig::seeded(SEED));

    game.request_direction(Direction::East);
    game.tick().unwrap();
    assert_that(&game.pacman().position()).is_equal_to(pos(1, 2));
    assert_that(&game.score()).is_equal_to(10);
    assert_that(&game.last_removed_dot().map(|dot| dot.id().to_string())).is_equal_to(Some("dot_1_2".to_string()));

    game.tick().unwrap();
    assert_that(&game.pacman().position()).is_equal_to(pos(1, 3));
    assert_that(&game.score()).is_equal_to(110);
    assert_that(&game.maze().is_empty()).is_true();
    assert_that(&game.lvl_succeed()).is_true();
    assert_that(&game.is_pacman_dead()).is_false();
}

#[test]
fn test_blocked_pacman_stays_put() {
    let (mut game, _clock) = create_test_game(common::small_maze(), GameConfig::seeded(SEED));

    // Facing west into a wall with nothing requested
    game.tick().unwrap();
    assert_that(&game.pacman().position()).is_equal_to(pos(1, 1));

    // A request into a wall is kept but does not turn Pac-Man
    game.request_direction(Direction::North);
    game.tick().unwrap();
    assert_that(&game.pacman().position()).is_equal_to(pos(1, 1));
    assert_that(&game.pacman().direction()).is_equal_to(Direction::West);
}

#[test]
fn test_blocked_ghosts_turn_without_moving() {
    let (mut game, _clock) = create_test_game(common::small_maze(), GameConfig::seeded(SEED));

    game.tick().unwrap();

    for ghost in game.ghosts() {
        assert_that(&ghost.position()).is_equal_to(pos(3, 1));
        assert_that(&ghost.asked_to_change_direction()).is_true();
        assert_that(&Some(ghost.direction())).is_equal_to(ghost.asked_direction());
    }
}

#[test]
fn test_two_ghosts_cost_one_life() {
    let (mut game, _clock) = create_test_game(common::ambush_maze(), GameConfig::seeded(SEED));

    game.request_direction(Direction::East);
    game.tick().unwrap();

    // Every ghost sits on Pac-Man's new cell
    assert!(game.ghosts().iter().all(|ghost| ghost.position() == pos(1, 2)));
    assert_that(&game.lives()).is_equal_to(1);
    assert_that(&game.is_pacman_dead()).is_true();
    assert_that(&game.is_game_over()).is_false();
}

#[test]
fn test_head_on_swap_is_caught() {
    let (mut game, _clock) = create_test_game(common::shaft_maze(), GameConfig::seeded(SEED));

    // Pac-Man steps down the shaft while blinky, facing north, steps up it
    game.request_direction(Direction::South);
    game.tick().unwrap();

    let blinky = game.ghost(GhostType::Blinky).unwrap();
    assert_that(&game.pacman().position()).is_equal_to(pos(2, 1));
    assert_that(&blinky.position()).is_equal_to(pos(1, 1));
    assert_that(&blinky.previous_position()).is_equal_to(pos(2, 1));
    assert_that(&game.is_pacman_dead()).is_true();
    assert_that(&game.lives()).is_equal_to(1);
}

#[test]
fn test_last_life_ends_game() {
    let config = GameConfig {
        initial_lives: 1,
        ..GameConfig::seeded(SEED)
    };
    let (mut game, _clock) = create_test_game(common::ambush_maze(), config);

    game.request_direction(Direction::East);
    game.tick().unwrap();

    assert_that(&game.lives()).is_equal_to(0);
    assert_that(&game.is_game_over()).is_true();
}

#[test]
fn test_dead_pacman_does_not_move() {
    let (mut game, _clock) = create_test_game(common::ambush_maze(), GameConfig::seeded(SEED));

    game.request_direction(Direction::East);
    game.tick().unwrap();
    game.request_direction(Direction::West);
    game.tick().unwrap();

    assert_that(&game.pacman().position()).is_equal_to(pos(1, 2));
    assert_that(&game.lives()).is_equal_to(1);
}

#[test]
fn test_respawn_after_death() {
    let (mut game, _clock) = create_test_game(common::ambush_maze(), GameConfig::seeded(SEED));
    game.request_direction(Direction::East);
    game.tick().unwrap();

    game.respawn();

    assert_that(&game.is_pacman_dead()).is_false();
    assert_that(&game.pacman().position()).is_equal_to(pos(1, 1));
    assert_that(&game.pacman().direction()).is_equal_to(Direction::West);
    assert_that(&game.lives()).is_equal_to(1);
    for ghost in game.ghosts() {
        assert_that(&ghost.position()).is_equal_to(pos(1, 2));
        assert_that(&ghost.direction()).is_equal_to(Direction::North);
    }
}

#[test]
fn test_next_level_restores_dots_and_keeps_score() {
    let (mut game, _clock) = create_test_game(common::small_maze(), GameConfig::seeded(SEED));
    game.request_direction(Direction::East);
    game.tick().unwrap();
    game.tick().unwrap();
    assert_that(&game.lvl_succeed()).is_true();

    game.next_level().unwrap();

    assert_that(&game.level()).is_equal_to(2);
    assert_that(&game.score()).is_equal_to(110);
    assert_that(&game.maze().remaining_dot_count()).is_equal_to(2);
    assert_that(&game.lvl_succeed()).is_false();
    assert_that(&game.last_removed_dot().is_none()).is_true();
    assert_that(&game.pacman().position()).is_equal_to(pos(1, 1));
    assert!(game.ghosts().iter().all(|ghost| ghost.position() == pos(3, 1)));
}

#[test]
fn test_save_score() {
    let (mut game, _clock) = create_test_game_with_store(common::small_maze(), GameConfig::seeded(SEED), MemoryStore::new(50));
    assert_that(&game.high_score()).is_equal_to(50);

    // Nothing to save yet
    assert_that(&game.save_score().unwrap()).is_false();

    game.request_direction(Direction::East);
    game.tick().unwrap();
    game.tick().unwrap();

    assert_that(&game.save_score().unwrap()).is_true();
    assert_that(&game.high_score()).is_equal_to(110);
    assert_that(&game.save_score().unwrap()).is_false();
}

#[test]
fn test_invalid_config_is_rejected() {
    let config = GameConfig {
        ghost_redirect_interval: Duration::ZERO,
        ..GameConfig::seeded(SEED)
    };

    let result = Game::with_clock(common::small_maze(), config, MemoryStore::default(), ManualClock::new());
    assert!(matches!(
        result,
        Err(GameError::Config(ConfigError::ZeroDuration("ghost_redirect_interval")))
    ));
}

#[test]
fn test_maze_without_ghost_spawn_is_rejected() {
    let raw = RawMaze::new(vec![vec![1, 4, 2, 1]]).unwrap();
    let result = Game::with_clock(raw, GameConfig::seeded(SEED), MemoryStore::default(), ManualClock::new());
    assert!(matches!(result, Err(GameError::Maze(_))));
}

#[test]
fn test_same_seed_same_game() {
    let run = || {
        let (mut game, _clock) = create_test_game(common::small_maze(), GameConfig::seeded(SEED));
        for _ in 0..10 {
            game.tick().unwrap();
        }
        game.ghosts()
            .iter()
            .map(|ghost| (ghost.ghost_type(), ghost.position(), ghost.direction()))
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_ghost_lookup() {
    let (game, _clock) = create_test_game(common::small_maze(), GameConfig::seeded(SEED));
    assert_that(&game.ghost(GhostType::Clyde).map(|ghost| ghost.ghost_type())).is_equal_to(Some(GhostType::Clyde));
}
