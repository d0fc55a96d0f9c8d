//! Tile asset table
//!
//! Every tile code maps to one asset: a label and the colours it is drawn
//! with. Code 0 is the empty cell. The table covers codes 0..=11 (up to
//! 2048); higher codes keep the style of the last entry and show their own
//! value.

use ratatui::style::{Color, Modifier, Style};

use crate::game::{EMPTY, Tile, tile_value};

/// Number of distinct assets, indexed by tile code
pub const ASSET_COUNT: usize = 12;

/// (background, foreground) per tile code
const PALETTE: [(Color, Color); ASSET_COUNT] = [
    (Color::Black, Color::DarkGray),
    (Color::Rgb(238, 228, 218), Color::Rgb(119, 110, 101)),
    (Color::Rgb(237, 224, 200), Color::Rgb(119, 110, 101)),
    (Color::Rgb(242, 177, 121), Color::White),
    (Color::Rgb(245, 149, 99), Color::White),
    (Color::Rgb(246, 124, 95), Color::White),
    (Color::Rgb(246, 94, 59), Color::White),
    (Color::Rgb(237, 207, 114), Color::White),
    (Color::Rgb(237, 204, 97), Color::White),
    (Color::Rgb(237, 200, 80), Color::White),
    (Color::Rgb(237, 197, 63), Color::White),
    (Color::Rgb(237, 194, 46), Color::White),
];

/// How a single tile is drawn
#[derive(Debug, Clone, PartialEq)]
pub struct TileAsset {
    pub label: String,
    pub style: Style,
}

/// Asset for a tile code
pub fn tile_asset(code: Tile) -> TileAsset {
    let index = (code as usize).min(ASSET_COUNT - 1);
    let (bg, fg) = PALETTE[index];

    let mut style = Style::default().bg(bg).fg(fg);
    if code != EMPTY {
        style = style.add_modifier(Modifier::BOLD);
    }

    let label = if code == EMPTY {
        String::new()
    } else {
        tile_value(code).to_string()
    };

    TileAsset { label, style }
}
