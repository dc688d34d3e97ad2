use pacman_engine::game::config::GameConfig;
use pacman_engine::game::store::MemoryStore;
use pacman_engine::map::direction::Direction;
use pacman_engine::render::{render_frame, status_line};
use pretty_assertions::assert_eq;

mod common;

use common::{create_test_game, create_test_game_with_store, SEED};

#[test]
fn test_render_initial_frame() {
    let (game, _clock) = create_test_game(common::small_maze(), GameConfig::seeded(SEED));

    let expected = "\
SCORE 0  HIGH 0  LIVES 2  LEVEL 1
#####
#<.o#
## ##
#C  #
#####
";
    assert_eq!(render_frame(&game), expected);
}

#[test]
fn test_render_after_eating() {
    let (mut game, _clock) = create_test_game(common::small_maze(), GameConfig::seeded(SEED));
    game.request_direction(Direction::East);
    game.tick().unwrap();

    let frame = render_frame(&game);
    let maze_row = frame.lines().nth(2).unwrap();
    assert_eq!(maze_row, "# >o#");
}

#[test]
fn test_render_dead_pacman() {
    let (mut game, _clock) = create_test_game(common::ambush_maze(), GameConfig::seeded(SEED));
    game.request_direction(Direction::East);
    game.tick().unwrap();

    let frame = render_frame(&game);
    assert_eq!(frame.lines().nth(2).unwrap(), "# x#");
}

#[test]
fn test_status_line_separates_thousands() {
    let (game, _clock) = create_test_game_with_store(common::small_maze(), GameConfig::seeded(SEED), MemoryStore::new(1_234_567));
    assert_eq!(status_line(&game), "SCORE 0  HIGH 1,234,567  LIVES 2  LEVEL 1");
}
