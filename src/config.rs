use log::LevelFilter;
use ratatui::style::Color;

/// Logical grid dimensions passed through the game as a named type.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub width: u16,
    pub height: u16,
}

impl GridSize {
    /// Returns the total number of cells in the grid.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.width) * usize::from(self.height)
    }
}

/// Number of columns on the board.
pub const DEFAULT_COLUMNS: u16 = 20;

/// Number of rows on the board.
pub const DEFAULT_ROWS: u16 = 14;

/// Target snake size at the start of a session.
pub const INITIAL_SNAKE_SIZE: usize = 3;

/// Fixed simulation step in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 100;

/// Food only starts fleeing once the head is strictly closer than this.
pub const DEFAULT_PURSUIT_RADIUS: u32 = 5;

/// When the best escape lands exactly this far from the head, the food
/// sidesteps across the snake's axis of travel instead.
pub const DEFAULT_DODGE_DISTANCE: u32 = 3;

/// Food may move only on moves whose number is a multiple of this.
pub const PURSUIT_MOVE_PARITY: u64 = 2;

/// Uniform draws per grid cell before spawning gives up on rejection sampling.
pub const SPAWN_ATTEMPTS_PER_CELL: usize = 4;

/// Verbosity of the `--log-file` logger. Rejected turns log at trace level.
pub const LOG_LEVEL: LevelFilter = LevelFilter::Trace;

/// Frame pacing for the terminal front-end.
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Glyph used for one snake cell. Two columns wide so cells look square.
pub const GLYPH_SNAKE: &str = "██";

/// Glyph used for the food cell.
pub const GLYPH_FOOD: &str = "▓▓";

pub const COLOR_BOARD: Color = Color::Rgb(0x7d, 0xce, 0xa5);
pub const COLOR_INK: Color = Color::Rgb(0x2c, 0x41, 0x39);
pub const COLOR_ACCENT: Color = Color::Rgb(0xa8, 0xec, 0xc9);
