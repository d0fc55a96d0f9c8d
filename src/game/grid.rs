use super::action::Direction;
use super::error::GameError;

/// Width and height of the board
pub const GRID_SIZE: usize = 4;

/// Tile code: 0 is empty, `n >= 1` shows the value `2^n`
///
/// Every `u8` is accepted. Values saturate at `u64::MAX` from code 64 and
/// merges stop growing at code 255.
pub type Tile = u8;

/// Code of an empty cell
pub const EMPTY: Tile = 0;

/// A cell coordinate on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Neighbouring position in a direction, `None` past the edge
    pub fn offset(&self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.delta();
        let x = self.x.checked_add_signed(dx as isize)?;
        let y = self.y.checked_add_signed(dy as isize)?;
        (x < GRID_SIZE && y < GRID_SIZE).then_some(Self { x, y })
    }
}

/// Visual value of a tile code (`2^code`), 0 for an empty cell
pub fn tile_value(code: Tile) -> u64 {
    if code == EMPTY {
        0
    } else {
        1u64.checked_shl(u32::from(code)).unwrap_or(u64::MAX)
    }
}

/// The 4x4 board of tile codes, indexed by (column x, row y)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[Tile; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    /// An empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from rows, `rows[y][x]`
    pub fn from_rows(rows: [[Tile; GRID_SIZE]; GRID_SIZE]) -> Self {
        let mut grid = Self::new();
        for (y, row) in rows.iter().enumerate() {
            for (x, &tile) in row.iter().enumerate() {
                grid.cells[x][y] = tile;
            }
        }
        grid
    }

    /// Snapshot of the grid as rows, `rows[y][x]`
    pub fn rows(&self) -> [[Tile; GRID_SIZE]; GRID_SIZE] {
        let mut rows = [[EMPTY; GRID_SIZE]; GRID_SIZE];
        for (x, column) in self.cells.iter().enumerate() {
            for (y, &tile) in column.iter().enumerate() {
                rows[y][x] = tile;
            }
        }
        rows
    }

    /// Tile code at (x, y), `None` when out of range
    pub fn get(&self, x: usize, y: usize) -> Option<Tile> {
        self.cells.get(x).and_then(|column| column.get(y)).copied()
    }

    /// Tile code at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the grid.
    pub fn cell_at(&self, x: usize, y: usize) -> Tile {
        match self.get(x, y) {
            Some(tile) => tile,
            None => panic!("{}", GameError::IndexOutOfRange { x, y }),
        }
    }

    /// Write a tile code at (x, y)
    ///
    /// # Panics
    ///
    /// Panics if (x, y) lies outside the grid.
    pub fn set_cell(&mut self, x: usize, y: usize, value: Tile) {
        if let Err(err) = self.try_set_cell(x, y, value) {
            panic!("{err}");
        }
    }

    /// Write a tile code at (x, y), rejecting out-of-range coordinates
    pub fn try_set_cell(&mut self, x: usize, y: usize, value: Tile) -> Result<(), GameError> {
        let cell = self
            .cells
            .get_mut(x)
            .and_then(|column| column.get_mut(y))
            .ok_or(GameError::IndexOutOfRange { x, y })?;
        *cell = value;
        Ok(())
    }

    pub fn at(&self, pos: Position) -> Tile {
        self.cell_at(pos.x, pos.y)
    }

    pub fn set(&mut self, pos: Position, value: Tile) {
        self.set_cell(pos.x, pos.y, value);
    }

    /// True iff no cell is empty
    pub fn is_full(&self) -> bool {
        self.empty_cell_count() == 0
    }

    pub fn empty_cell_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&tile| tile == EMPTY).count()
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        GRID_SIZE * GRID_SIZE - self.empty_cell_count()
    }

    /// Empty cells in scan order (x, then y)
    pub fn empty_cells(&self) -> Vec<Position> {
        Self::positions().filter(|&pos| self.at(pos) == EMPTY).collect()
    }

    /// All positions in scan order (x, then y)
    pub fn positions() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).flat_map(|x| (0..GRID_SIZE).map(move |y| Position::new(x, y)))
    }

    /// Highest tile code on the board, 0 if empty
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().flatten().copied().max().unwrap_or(EMPTY)
    }

    /// Sum of the visual values of all tiles
    pub fn total_value(&self) -> u64 {
        self.cells
            .iter()
            .flatten()
            .fold(0u64, |total, &tile| total.saturating_add(tile_value(tile)))
    }
}
