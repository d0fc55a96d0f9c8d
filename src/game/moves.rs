//! Slide and merge logic
//!
//! A move is applied line by line. Each line holds the four cells of one row
//! or column, ordered from the edge the tiles travel towards. Tiles are packed
//! against that edge and equal neighbours merge once, nearest the edge first,
//! so `[1, 1, 1, 0]` moved left becomes `[2, 1, 0, 0]`.

use super::action::Direction;
use super::grid::{EMPTY, GRID_SIZE, Grid, Position, Tile};
use tracing::trace;

/// Outcome of applying a direction to a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    /// The grid after the move
    pub grid: Grid,
    /// At least one pair of tiles combined
    pub merged: bool,
    /// Some cell differs from the input grid
    pub changed: bool,
}

/// Slide every tile of `grid` towards `direction`
pub fn apply_move(grid: &Grid, direction: Direction) -> MoveResult {
    let mut next = *grid;
    let mut merged = false;

    for index in 0..GRID_SIZE {
        let positions = line_positions(direction, index);
        let line = positions.map(|pos| grid.at(pos));
        let (packed, line_merged) = slide_line(line);

        merged |= line_merged;
        for (pos, tile) in positions.into_iter().zip(packed) {
            next.set(pos, tile);
        }
    }

    let changed = next != *grid;
    trace!(?direction, merged, changed, "move applied");

    MoveResult {
        grid: next,
        merged,
        changed,
    }
}

/// True if some direction would change the grid
pub fn has_legal_move(grid: &Grid) -> bool {
    Direction::ALL
        .iter()
        .any(|&direction| apply_move(grid, direction).changed)
}

/// Pack one line towards index 0, merging equal neighbours once
///
/// Returns the packed line and whether any pair merged.
pub fn slide_line(line: [Tile; GRID_SIZE]) -> ([Tile; GRID_SIZE], bool) {
    let mut packed = [EMPTY; GRID_SIZE];
    let mut merged = false;
    let mut len = 0;
    // The last packed tile may still absorb an equal neighbour.
    let mut open = false;

    for tile in line.into_iter().filter(|&tile| tile != EMPTY) {
        if open && packed[len - 1] == tile {
            packed[len - 1] = tile.saturating_add(1);
            merged = true;
            open = false;
        } else {
            packed[len] = tile;
            len += 1;
            open = true;
        }
    }

    (packed, merged)
}

/// Cells of line `index`, starting at the edge tiles move towards
fn line_positions(direction: Direction, index: usize) -> [Position; GRID_SIZE] {
    let last = GRID_SIZE - 1;
    let edge = match direction {
        Direction::Left => Position::new(0, index),
        Direction::Right => Position::new(last, index),
        Direction::Up => Position::new(index, 0),
        Direction::Down => Position::new(index, last),
    };
    let back = direction.opposite();

    let mut positions = [edge; GRID_SIZE];
    for i in 1..GRID_SIZE {
        // Lines span the grid, so the walk never leaves it.
        positions[i] = positions[i - 1].offset(back).unwrap_or(positions[i - 1]);
    }
    positions
}
