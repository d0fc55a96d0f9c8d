use super::grid::GRID_SIZE;

/// Precondition violations raised by the game core
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid move code {0}, expected 0..=3")]
    InvalidMove(u8),
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid", size = GRID_SIZE)]
    IndexOutOfRange { x: usize, y: usize },
    #[error("grid is full, no cell left to spawn into")]
    GridFull,
}
