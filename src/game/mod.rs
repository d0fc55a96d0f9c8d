//! Core game logic module for 2048
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The grid, the slide/merge rules and the spawner are plain values and functions;
//! [`GameEngine`] ties them into a session with a seeded RNG.

pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod moves;
pub mod spawner;
pub mod state;

// Re-export commonly used types
pub use action::Direction;
pub use config::GameConfig;
pub use engine::{GameEngine, StepResult};
pub use error::GameError;
pub use grid::{EMPTY, GRID_SIZE, Grid, Position, Tile, tile_value};
pub use moves::{MoveResult, apply_move, has_legal_move, slide_line};
pub use spawner::{SPAWN_TILE, spawn_random_tile};
pub use state::{GameState, SessionStatus};
