use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::assets::tile_asset;
use crate::game::{GRID_SIZE, GameState, Grid, tile_value};
use crate::metrics::GameMetrics;

/// Terminal cells per tile, horizontally
const TILE_WIDTH: u16 = 8;
/// Terminal rows per tile
const TILE_HEIGHT: u16 = 3;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Board area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        // Render header with basic stats
        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        // The final board stays visible after game over
        let board_area = Self::board_rect(chunks[1]);
        let board = self.render_board_frame(state.is_running());
        let inner = board.inner(board_area);
        frame.render_widget(board, board_area);
        self.render_tiles(frame, inner, &state.grid);

        let footer = if state.is_running() {
            self.render_controls()
        } else {
            self.render_game_over()
        };
        frame.render_widget(footer, chunks[2]);
    }

    /// Centre the bordered board inside the available area
    fn board_rect(area: Rect) -> Rect {
        let width = (TILE_WIDTH * GRID_SIZE as u16 + 2).min(area.width);
        let height = (TILE_HEIGHT * GRID_SIZE as u16 + 2).min(area.height);
        Rect {
            x: area.x + (area.width - width) / 2,
            y: area.y + (area.height - height) / 2,
            width,
            height,
        }
    }

    fn render_board_frame(&self, running: bool) -> Block<'_> {
        let (title, color) = if running {
            (" 2048 ", Color::White)
        } else {
            (" Game Over ", Color::Red)
        };

        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .border_style(Style::default().fg(color))
            .title(title)
            .title_alignment(Alignment::Center)
    }

    fn render_tiles(&self, frame: &mut Frame, area: Rect, grid: &Grid) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(TILE_HEIGHT); GRID_SIZE])
            .split(area);

        for (y, row_area) in rows.iter().enumerate() {
            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(TILE_WIDTH); GRID_SIZE])
                .split(*row_area);

            for (x, cell_area) in cells.iter().enumerate() {
                let asset = tile_asset(grid.cell_at(x, y));
                let text = vec![Line::from(""), Line::from(asset.label)];
                let tile = Paragraph::new(text)
                    .style(asset.style)
                    .alignment(Alignment::Center);
                frame.render_widget(tile, *cell_area);
            }
        }
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let best = tile_value(metrics.best_tile.max(state.grid.max_tile()));
        let text = vec![Line::from(vec![
            Span::styled("Moves: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.moves.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Best: ", Style::default().fg(Color::Yellow)),
            Span::styled(best.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_game_over(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" | Press ", Style::default().fg(Color::Gray)),
            Span::styled(
                "R",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to restart or ", Style::default().fg(Color::Gray)),
            Span::styled(
                "Q",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            Span::styled(" to quit", Style::default().fg(Color::Gray)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("R", Style::default().fg(Color::Green)),
            Span::raw(" to restart | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
