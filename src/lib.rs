//! x2048 - A 2048-style tile merging game
//!
//! This library provides:
//! - Core game logic: grid, slide/merge rules, spawner and session (game module)
//! - Keyboard mapping (input module)
//! - TUI rendering and the tile asset table (render module)
//! - Session metrics (metrics module)
//! - Interactive and headless execution modes (modes module)
//! - The JSON configuration file (config module)

pub mod config;
pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
