//! Properties of the move engine over many seeded random grids

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use x2048::game::{
    Direction, GRID_SIZE, GameConfig, GameEngine, GameState, Grid, Position, SPAWN_TILE,
    apply_move, spawn_random_tile,
};

const SAMPLES: usize = 500;

/// A grid with roughly half its cells filled with codes 1..=6
fn random_grid(rng: &mut StdRng) -> Grid {
    let mut grid = Grid::new();
    for x in 0..GRID_SIZE {
        for y in 0..GRID_SIZE {
            if rng.gen_bool(0.5) {
                grid.set_cell(x, y, rng.gen_range(1..=6));
            }
        }
    }
    grid
}

#[test]
fn fixed_point_within_three_moves() {
    let mut rng = StdRng::seed_from_u64(0x2048);
    for _ in 0..SAMPLES {
        let grid = random_grid(&mut rng);
        for direction in Direction::ALL {
            let mut current = grid;
            for _ in 0..3 {
                current = apply_move(&current, direction).grid;
            }
            let settled = apply_move(&current, direction);
            assert!(!settled.changed, "{direction:?} kept changing {grid:?}");
            assert!(!settled.merged);
            assert_eq!(settled.grid, current);
        }
    }
}

#[test]
fn moves_preserve_total_value() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let grid = random_grid(&mut rng);
        for direction in Direction::ALL {
            let result = apply_move(&grid, direction);
            assert_eq!(result.grid.total_value(), grid.total_value());

            // Merges are the only way to lose tiles
            if result.merged {
                assert!(result.grid.tile_count() < grid.tile_count());
            } else {
                assert_eq!(result.grid.tile_count(), grid.tile_count());
            }
        }
    }
}

#[test]
fn merge_implies_change() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let grid = random_grid(&mut rng);
        for direction in Direction::ALL {
            let result = apply_move(&grid, direction);
            if result.merged {
                assert!(result.changed);
            }
            assert_eq!(result.changed, result.grid != grid);
        }
    }
}

#[test]
fn single_tile_slides_fully_each_way() {
    let mut grid = Grid::new();
    grid.set_cell(2, 0, 1);

    let left = apply_move(&grid, Direction::Left).grid;
    assert_eq!(left.cell_at(0, 0), 1);
    assert_eq!(left.tile_count(), 1);

    let right = apply_move(&left, Direction::Right).grid;
    assert_eq!(right.cell_at(3, 0), 1);
    assert_eq!(right.tile_count(), 1);

    let down = apply_move(&right, Direction::Down).grid;
    assert_eq!(down.cell_at(3, 3), 1);

    let up = apply_move(&down, Direction::Up).grid;
    assert_eq!(up.cell_at(3, 0), 1);
}

#[test]
fn chain_of_three_in_every_direction() {
    let left = Grid::from_rows([[1, 1, 1, 0], [0; 4], [0; 4], [0; 4]]);
    let result = apply_move(&left, Direction::Left);
    assert_eq!(result.grid.rows()[0], [2, 1, 0, 0]);
    assert!(result.merged);

    let result = apply_move(&left, Direction::Right);
    assert_eq!(result.grid.rows()[0], [0, 0, 1, 2]);

    let column = Grid::from_rows([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0; 4]]);
    let up = apply_move(&column, Direction::Up).grid;
    assert_eq!(
        [up.cell_at(1, 0), up.cell_at(1, 1), up.cell_at(1, 2)],
        [2, 1, 0]
    );
    let down = apply_move(&column, Direction::Down).grid;
    assert_eq!(
        [down.cell_at(1, 1), down.cell_at(1, 2), down.cell_at(1, 3)],
        [0, 1, 2]
    );
}

#[test]
fn spawning_fills_exactly_one_empty_cell() {
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..SAMPLES {
        let before = random_grid(&mut rng);
        if before.is_full() {
            continue;
        }

        let mut after = before;
        let pos = spawn_random_tile(&mut after, &mut rng).unwrap();

        assert_eq!(before.at(pos), 0);
        assert_eq!(after.at(pos), SPAWN_TILE);
        assert_eq!(after.tile_count(), before.tile_count() + 1);
        for other in Grid::positions().filter(|&p| p != pos) {
            assert_eq!(after.at(other), before.at(other));
        }
    }
}

#[test]
fn blocked_grid_never_spawns() {
    let rows = [[1, 2, 1, 2], [2, 1, 2, 1], [1, 2, 1, 2], [2, 1, 2, 1]];
    let grid = Grid::from_rows(rows);
    let mut engine = GameEngine::new(GameConfig::seeded(1));

    for direction in Direction::ALL {
        let result = apply_move(&grid, direction);
        assert_eq!(result.grid, grid);
        assert!(!result.merged);
        assert!(!result.changed);

        let mut state = GameState::new(grid);
        let step = engine.step(&mut state, direction);
        assert_eq!(step.spawned, None);
        assert_eq!(state.grid, grid);
        assert!(step.terminated);
    }
}

#[test]
fn sessions_only_grow_on_changing_moves() {
    let mut engine = GameEngine::new(GameConfig::seeded(99));
    let mut state = engine.reset();
    let mut rng = StdRng::seed_from_u64(5);

    for _ in 0..2_000 {
        if !state.is_running() {
            break;
        }
        let direction = Direction::ALL[rng.gen_range(0..4)];
        let before = state.grid;
        let result = engine.step(&mut state, direction);

        if result.changed {
            let pos: Position = result.spawned.unwrap();
            assert_eq!(state.grid.at(pos), SPAWN_TILE);
            assert_eq!(state.grid.total_value(), before.total_value() + 2);
        } else {
            assert_eq!(result.spawned, None);
            assert_eq!(state.grid, before);
        }
    }
}
