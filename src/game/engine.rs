use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use super::{
    action::Direction,
    config::GameConfig,
    grid::{Grid, Position},
    moves::{apply_move, has_legal_move},
    spawner::spawn_random_tile,
    state::{GameState, SessionStatus},
};

/// Result of a game step
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// The move changed at least one cell
    pub changed: bool,
    /// At least one pair of tiles merged
    pub merged: bool,
    /// Where the new tile landed, if one spawned
    pub spawned: Option<Position>,
    /// Whether the session has ended
    pub terminated: bool,
}

/// The game engine that drives a session
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start a new session on a fresh grid
    pub fn reset(&mut self) -> GameState {
        let mut grid = Grid::new();
        for _ in 0..self.config.initial_tiles {
            if let Err(err) = spawn_random_tile(&mut grid, &mut self.rng) {
                warn!(%err, "initial tiles do not fit");
                break;
            }
        }

        let mut state = GameState::new(grid);
        self.check_game_over(&mut state);
        debug!(tiles = state.grid.tile_count(), "session started");
        state
    }

    /// Apply one direction to the session
    ///
    /// A new tile spawns only when the move changed the grid.
    pub fn step(&mut self, state: &mut GameState, direction: Direction) -> StepResult {
        if !state.is_running() {
            return StepResult {
                changed: false,
                merged: false,
                spawned: None,
                terminated: true,
            };
        }

        let result = apply_move(&state.grid, direction);
        state.grid = result.grid;

        let mut spawned = None;
        if result.changed {
            state.moves += 1;
            match spawn_random_tile(&mut state.grid, &mut self.rng) {
                Ok(pos) => spawned = Some(pos),
                Err(err) => warn!(%err, "no tile spawned"),
            }
        }

        debug!(
            ?direction,
            changed = result.changed,
            merged = result.merged,
            ?spawned,
            "step"
        );

        self.check_game_over(state);

        StepResult {
            changed: result.changed,
            merged: result.merged,
            spawned,
            terminated: !state.is_running(),
        }
    }

    fn check_game_over(&self, state: &mut GameState) {
        if state.grid.is_full() && !has_legal_move(&state.grid) {
            state.status = SessionStatus::GameOver;
            info!(
                moves = state.moves,
                max_tile = state.grid.max_tile(),
                "game over"
            );
        }
    }
}
