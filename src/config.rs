use ratatui::style::Color;
use thiserror::Error;

/// Logical grid dimensions passed through the game as a named type.
///
/// Makes cols vs. rows unambiguous at every call site; `x` runs over
/// `[0, cols)`, `y` over `[0, rows)`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub cols: u16,
    pub rows: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.cols) * usize::from(self.rows)
    }
}

/// Wall behavior selected by the player.
///
/// Stored on game state and shown in the status line. Movement itself
/// always wraps; the transition engine does not branch on this value.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum WallMode {
    #[default]
    Wrap,
    Deadly,
}

impl WallMode {
    /// Returns the label shown in the status line.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Wrap => "wrap",
            Self::Deadly => "deadly",
        }
    }
}

/// Default board width in cells.
pub const DEFAULT_GRID_COLS: u16 = 20;

/// Default board height in cells.
pub const DEFAULT_GRID_ROWS: u16 = 20;

/// Default interval between movement ticks in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 140;

/// Minimum accepted tick interval in milliseconds.
pub const MIN_TICK_INTERVAL_MS: u64 = 30;

/// Maximum accepted tick interval in milliseconds.
pub const MAX_TICK_INTERVAL_MS: u64 = 2000;

/// Minimum board edge: the centered three-segment snake plus one fruit of
/// each kind must fit with room to move.
pub const MIN_GRID_EDGE: u16 = 4;

/// Maximum board edge accepted from the command line.
pub const MAX_GRID_EDGE: u16 = 128;

/// Startup configuration rejected before entering raw terminal mode.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "board must be between {MIN_GRID_EDGE}x{MIN_GRID_EDGE} and \
         {MAX_GRID_EDGE}x{MAX_GRID_EDGE} cells, got {cols}x{rows}"
    )]
    BoardOutOfRange { cols: u16, rows: u16 },
    #[error(
        "tick interval must be between {MIN_TICK_INTERVAL_MS} and \
         {MAX_TICK_INTERVAL_MS} ms, got {0}"
    )]
    TickIntervalOutOfRange(u64),
}

/// Validated configuration for one game session.
#[derive(Debug, Clone, Copy)]
pub struct GameConfig {
    pub size: GridSize,
    pub tick_interval_ms: u64,
    pub wall_mode: WallMode,
}

impl GameConfig {
    /// Validates board dimensions and tick interval.
    pub fn new(
        size: GridSize,
        tick_interval_ms: u64,
        wall_mode: WallMode,
    ) -> Result<Self, ConfigError> {
        let edge_range = MIN_GRID_EDGE..=MAX_GRID_EDGE;
        if !edge_range.contains(&size.cols) || !edge_range.contains(&size.rows) {
            return Err(ConfigError::BoardOutOfRange {
                cols: size.cols,
                rows: size.rows,
            });
        }

        if !(MIN_TICK_INTERVAL_MS..=MAX_TICK_INTERVAL_MS).contains(&tick_interval_ms) {
            return Err(ConfigError::TickIntervalOutOfRange(tick_interval_ms));
        }

        Ok(Self {
            size,
            tick_interval_ms,
            wall_mode,
        })
    }
}

/// Snake head glyph when moving up.
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";

/// Snake head glyph when moving down.
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";

/// Snake head glyph when moving left.
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";

/// Snake head glyph when moving right.
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";

/// Glyph for snake body segments.
pub const GLYPH_SNAKE_BODY: &str = "█";

/// Glyph for every fruit kind; kinds differ by color.
pub const GLYPH_FRUIT: &str = "●";

/// Glyph for skull cells.
pub const GLYPH_SKULL: &str = "✖";

/// Solid color for the snake head.
pub const COLOR_SNAKE_HEAD: Color = Color::White;

/// Solid color for snake body segments.
pub const COLOR_SNAKE_BODY: Color = Color::Green;

/// Color for skull cells.
pub const COLOR_SKULL: Color = Color::White;

/// Color for banana fruits.
pub const COLOR_BANANA: Color = Color::Yellow;

/// Color for apple fruits.
pub const COLOR_APPLE: Color = Color::Red;

/// Color for strawberry fruits.
pub const COLOR_STRAWBERRY: Color = Color::Magenta;
