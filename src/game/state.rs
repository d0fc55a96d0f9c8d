use super::grid::Grid;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// Accepting moves
    Running,
    /// The grid is full and no direction changes it
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub grid: Grid,
    pub status: SessionStatus,
    /// Accepted moves, i.e. moves that changed the grid
    pub moves: u32,
}

impl GameState {
    /// Create a running state around a grid
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            status: SessionStatus::Running,
            moves: 0,
        }
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Grid::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_running() {
        let state = GameState::default();
        assert!(state.is_running());
        assert_eq!(state.moves, 0);
        assert_eq!(state.grid, Grid::new());
    }

    #[test]
    fn test_game_over_is_not_running() {
        let mut state = GameState::default();
        state.status = SessionStatus::GameOver;
        assert!(!state.is_running());
    }
}
