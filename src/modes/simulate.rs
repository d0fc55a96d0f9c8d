//! Headless simulation mode
//!
//! Plays a session with uniformly random legal moves and reports how it
//! ended. Useful for exercising the engine without a terminal.
//!
//! # Example
//!
//! ```rust
//! use x2048::game::GameConfig;
//! use x2048::modes::{SimulateConfig, SimulateMode};
//!
//! let mut mode = SimulateMode::new(GameConfig::seeded(7), SimulateConfig { max_moves: 50 });
//! let summary = mode.run();
//! assert!(summary.moves <= 50);
//! ```

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::game::{Direction, GameConfig, GameEngine, GameState, Grid, apply_move, tile_value};

/// Configuration for simulation mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulateConfig {
    /// Stop after this many accepted moves
    pub max_moves: u32,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self { max_moves: 10_000 }
    }
}

/// How a simulated session ended
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSummary {
    pub moves: u32,
    pub merges: u32,
    pub game_over: bool,
    pub grid: Grid,
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outcome = if self.game_over { "game over" } else { "stopped" };
        writeln!(
            f,
            "{} after {} moves ({} merging), best tile {}",
            outcome,
            self.moves,
            self.merges,
            tile_value(self.grid.max_tile())
        )?;
        for row in self.grid.rows() {
            let cells: Vec<String> = row
                .iter()
                .map(|&tile| match tile {
                    0 => format!("{:>6}", "."),
                    _ => format!("{:>6}", tile_value(tile)),
                })
                .collect();
            writeln!(f, "{}", cells.join(""))?;
        }
        Ok(())
    }
}

pub struct SimulateMode {
    engine: GameEngine,
    config: SimulateConfig,
    rng: StdRng,
}

impl SimulateMode {
    pub fn new(game_config: GameConfig, config: SimulateConfig) -> Self {
        // Move choices use a separate stream from tile spawns
        let rng = match game_config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(1)),
            None => StdRng::from_entropy(),
        };

        Self {
            engine: GameEngine::new(game_config),
            config,
            rng,
        }
    }

    /// Play one session to the end or to the move limit
    pub fn run(&mut self) -> SimulationSummary {
        let mut state = self.engine.reset();
        let mut merges = 0;

        info!(max_moves = self.config.max_moves, "simulation started");

        while state.is_running() && state.moves < self.config.max_moves {
            let Some(direction) = self.pick_direction(&state) else {
                // Only reachable on a board without tiles
                debug!("no direction changes the board");
                break;
            };

            let result = self.engine.step(&mut state, direction);
            if result.merged {
                merges += 1;
            }
        }

        let summary = SimulationSummary {
            moves: state.moves,
            merges,
            game_over: !state.is_running(),
            grid: state.grid,
        };

        info!(
            moves = summary.moves,
            merges = summary.merges,
            game_over = summary.game_over,
            max_tile = summary.grid.max_tile(),
            "simulation finished"
        );

        summary
    }

    /// Uniform choice among the directions that change the board
    fn pick_direction(&mut self, state: &GameState) -> Option<Direction> {
        let legal: Vec<Direction> = Direction::ALL
            .into_iter()
            .filter(|&direction| apply_move(&state.grid, direction).changed)
            .collect();
        legal.choose(&mut self.rng).copied()
    }
}
