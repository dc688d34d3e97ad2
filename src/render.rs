//! A plain-text view of the game, used by the headless driver's logs and by tests.

use thousands::Separable;

use crate::entity::sprite::Sprite;
use crate::game::Game;
use crate::map::direction::Direction;
use crate::map::position::Position;
use crate::map::tile::TileKind;

/// Renders the status line followed by the maze, one text line per row.
///
/// Walls are `#`, dots `.`, energizers `o`. Ghosts show as the upper-cased first letter of their
/// name, and Pac-Man as an arrow pointing where it faces, or `x` while dead. Pac-Man is drawn over
/// any ghost sharing its cell.
pub fn render_frame(game: &Game) -> String {
    let maze = game.maze();
    let mut frame = status_line(game);
    frame.push('\n');

    let mut grid: Vec<Vec<char>> = (0..maze.rows())
        .map(|row| {
            (0..maze.columns())
                .map(|column| match maze.tile_kind(Position::new(row as i32, column as i32)) {
                    Some(TileKind::Wall) => '#',
                    Some(TileKind::Dot { energizer: true }) => 'o',
                    Some(TileKind::Dot { energizer: false }) => '.',
                    None => ' ',
                })
                .collect()
        })
        .collect();

    for ghost in game.ghosts() {
        let glyph = ghost.ghost_type().as_str().chars().next().map_or('G', |c| c.to_ascii_uppercase());
        put(&mut grid, ghost.position(), glyph);
    }

    let pacman = game.pacman();
    let glyph = if pacman.is_alive() { pacman_glyph(pacman.direction()) } else { 'x' };
    put(&mut grid, pacman.position(), glyph);

    for row in grid {
        frame.extend(row);
        frame.push('\n');
    }
    frame
}

/// The score, high score, lives and level on a single line.
pub fn status_line(game: &Game) -> String {
    format!(
        "SCORE {}  HIGH {}  LIVES {}  LEVEL {}",
        game.score().separate_with_commas(),
        game.high_score().separate_with_commas(),
        game.lives(),
        game.level()
    )
}

fn pacman_glyph(direction: Direction) -> char {
    match direction {
        Direction::North => '^',
        Direction::South => 'v',
        Direction::West => '<',
        Direction::East => '>',
    }
}

fn put(grid: &mut [Vec<char>], pos: Position, glyph: char) {
    let (Ok(row), Ok(column)) = (usize::try_from(pos.row()), usize::try_from(pos.column())) else {
        return;
    };
    if let Some(cell) = grid.get_mut(row).and_then(|cells| cells.get_mut(column)) {
        *cell = glyph;
    }
}
