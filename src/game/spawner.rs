use rand::Rng;
use rand::seq::SliceRandom;

use super::error::GameError;
use super::grid::{Grid, Position, Tile};

/// Code of every spawned tile (a "2")
pub const SPAWN_TILE: Tile = 1;

/// Place a new tile in a uniformly random empty cell
///
/// Returns the position written. Fails with [`GameError::GridFull`] when no
/// cell is empty; the grid is left untouched in that case.
pub fn spawn_random_tile<R: Rng + ?Sized>(
    grid: &mut Grid,
    rng: &mut R,
) -> Result<Position, GameError> {
    let pos = *grid.empty_cells().choose(rng).ok_or(GameError::GridFull)?;
    grid.set(pos, SPAWN_TILE);
    Ok(pos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_spawn_on_empty_grid() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new();

        let pos = spawn_random_tile(&mut grid, &mut rng).unwrap();

        assert_eq!(grid.at(pos), SPAWN_TILE);
        assert_eq!(grid.tile_count(), 1);
    }

    #[test]
    fn test_spawn_fills_the_only_gap() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::from_rows([[3; 4]; 4]);
        grid.set_cell(1, 2, 0);

        let pos = spawn_random_tile(&mut grid, &mut rng).unwrap();

        assert_eq!(pos, Position::new(1, 2));
        assert!(grid.is_full());
    }

    #[test]
    fn test_spawn_on_full_grid_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::from_rows([[2; 4]; 4]);
        let before = grid;

        assert_eq!(
            spawn_random_tile(&mut grid, &mut rng),
            Err(GameError::GridFull)
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_spawn_reaches_every_empty_cell() {
        let mut rng = StdRng::seed_from_u64(42);
        let base = Grid::from_rows([[1, 0, 1, 0], [0, 1, 0, 1], [1, 1, 1, 1], [0, 0, 1, 1]]);
        let mut seen = Vec::new();

        for _ in 0..500 {
            let mut grid = base;
            let pos = spawn_random_tile(&mut grid, &mut rng).unwrap();
            if !seen.contains(&pos) {
                seen.push(pos);
            }
        }

        assert_eq!(seen.len(), base.empty_cell_count());
    }
}
