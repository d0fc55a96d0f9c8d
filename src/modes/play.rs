//! Interactive play mode
//!
//! Terminal events are queued as they arrive. Each frame tick drains the
//! queue in order, applying every action to the session, then draws the
//! board once.

use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Configuration for play mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayConfig {
    /// Frames per second; one batch of input is processed per frame
    pub frame_rate_hz: u32,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self { frame_rate_hz: 60 }
    }
}

impl PlayConfig {
    pub fn validate(&self) -> Result<(), String> {
        if !(1..=240).contains(&self.frame_rate_hz) {
            return Err(format!(
                "frame_rate_hz must be between 1 and 240, got {}",
                self.frame_rate_hz
            ));
        }
        Ok(())
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_micros(1_000_000 / u64::from(self.frame_rate_hz.max(1)))
    }
}

pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    config: PlayConfig,
    pending: VecDeque<KeyAction>,
    should_quit: bool,
}

impl PlayMode {
    pub fn new(game_config: GameConfig, config: PlayConfig) -> Self {
        let mut engine = GameEngine::new(game_config);
        let state = engine.reset();

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            config,
            pending: VecDeque::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(fps = self.config.frame_rate_hz, "play session started");

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            games = self.metrics.games_played,
            best_tile = self.metrics.best_tile,
            "play session ended"
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut frame_timer = interval(self.config.frame_interval());
        frame_timer.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                // Queue terminal events until the next frame
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_event(event),
                        Some(Err(err)) => {
                            return Err(anyhow::Error::from(err).context("Failed to read terminal event"));
                        }
                        None => self.should_quit = true,
                    }
                }

                // One logical step per frame, then draw
                _ = frame_timer.tick() => {
                    self.advance_frame();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key) {
                KeyAction::None => {}
                action => self.pending.push_back(action),
            }
        }
    }

    /// Apply every queued action in arrival order
    fn advance_frame(&mut self) {
        while let Some(action) = self.pending.pop_front() {
            self.apply_action(action);
            if self.should_quit {
                break;
            }
        }
    }

    fn apply_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Move(direction) => {
                if !self.state.is_running() {
                    return;
                }

                let result = self.engine.step(&mut self.state, direction);

                // Track game over
                if result.terminated {
                    self.metrics.on_game_over(self.state.grid.max_tile());
                }
            }
            KeyAction::Restart => {
                self.reset_game();
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    fn reset_game(&mut self) {
        debug!(moves = self.state.moves, "restarting");
        self.metrics.record_tile(self.state.grid.max_tile());
        self.state = self.engine.reset();
        self.metrics.on_board_start();
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
