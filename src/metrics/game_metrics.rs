//! Figures shown above the board in play mode
//!
//! The clock runs while a board is in play and stops at GameOver, so the
//! final board keeps showing how long it lasted. The best tile covers every
//! board of the session, finished or abandoned by a restart.

use std::time::{Duration, Instant};

use crate::game::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BoardClock {
    Running(Instant),
    Stopped(Duration),
}

#[derive(Debug, Clone)]
pub struct GameMetrics {
    clock: BoardClock,
    /// Highest tile code seen on any board this session
    pub best_tile: Tile,
    /// Boards that reached GameOver
    pub games_played: u32,
}

impl GameMetrics {
    pub fn new() -> Self {
        Self {
            clock: BoardClock::Running(Instant::now()),
            best_tile: 0,
            games_played: 0,
        }
    }

    /// Time spent on the current board
    pub fn elapsed(&self) -> Duration {
        match self.clock {
            BoardClock::Running(started) => started.elapsed(),
            BoardClock::Stopped(total) => total,
        }
    }

    pub fn is_clock_running(&self) -> bool {
        matches!(self.clock, BoardClock::Running(_))
    }

    pub fn record_tile(&mut self, tile: Tile) {
        self.best_tile = self.best_tile.max(tile);
    }

    /// A fresh board is on screen
    pub fn on_board_start(&mut self) {
        self.clock = BoardClock::Running(Instant::now());
    }

    /// The board reached GameOver with `max_tile` as its highest code
    pub fn on_game_over(&mut self, max_tile: Tile) {
        if let BoardClock::Running(started) = self.clock {
            self.clock = BoardClock::Stopped(started.elapsed());
            self.games_played += 1;
        }
        self.record_tile(max_tile);
    }

    /// Board time as `mm:ss`
    pub fn format_time(&self) -> String {
        let secs = self.elapsed().as_secs();
        format!("{:02}:{:02}", secs / 60, secs % 60)
    }
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started_ago(secs: u64) -> GameMetrics {
        let started = Instant::now()
            .checked_sub(Duration::from_secs(secs))
            .unwrap();
        GameMetrics {
            clock: BoardClock::Running(started),
            ..GameMetrics::new()
        }
    }

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();

        metrics.clock = BoardClock::Stopped(Duration::from_secs(125));
        assert_eq!(metrics.format_time(), "02:05");

        metrics.clock = BoardClock::Stopped(Duration::ZERO);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.clock = BoardClock::Stopped(Duration::from_millis(3_661_900));
        assert_eq!(metrics.format_time(), "61:01");
    }

    #[test]
    fn test_clock_stops_at_game_over() {
        let mut metrics = started_ago(90);
        assert!(metrics.is_clock_running());
        assert!(metrics.elapsed() >= Duration::from_secs(90));

        metrics.on_game_over(5);
        assert!(!metrics.is_clock_running());

        let frozen = metrics.elapsed();
        assert!(frozen >= Duration::from_secs(90));
        assert_eq!(metrics.elapsed(), frozen);
        assert_eq!(metrics.format_time(), "01:30");
    }

    #[test]
    fn test_new_board_restarts_clock() {
        let mut metrics = started_ago(600);
        metrics.on_game_over(3);

        metrics.on_board_start();
        assert!(metrics.is_clock_running());
        assert!(metrics.elapsed() < Duration::from_secs(600));
        assert_eq!(metrics.format_time(), "00:00");
    }

    #[test]
    fn test_game_over_counts_each_board_once() {
        let mut metrics = GameMetrics::new();

        metrics.on_game_over(4);
        metrics.on_game_over(4);
        assert_eq!(metrics.games_played, 1);

        metrics.on_board_start();
        metrics.on_game_over(6);
        assert_eq!(metrics.games_played, 2);
    }

    #[test]
    fn test_best_tile_spans_boards() {
        let mut metrics = GameMetrics::new();

        metrics.record_tile(9);
        metrics.on_board_start();
        assert_eq!(metrics.best_tile, 9);

        metrics.on_game_over(7);
        assert_eq!(metrics.best_tile, 9);

        metrics.on_board_start();
        metrics.on_game_over(11);
        assert_eq!(metrics.best_tile, 11);
    }
}
