//! Core types module - shared data structures and constants
//!
//! Pure data with no dependencies, used by the grid engine, the terminal
//! view and the input mapping alike.
//!
//! # Board Dimensions
//!
//! - **Width**: 7 columns (indexed 0-6)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn cell**: (3, 0)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep of the terminal loop (~60 FPS) |
//! | `ELIMINATE_STEP_MS` | 20 | Delay between two cells turning dead |
//! | `COLLAPSE_STEP_MS` | 20 | Delay between two single-row collapse steps |
//! | `DEAD_CELL_FLASH_MS` | 150 | How long a dead cell stays visible |
//! | `BASE_FALL_MS` | 800 | Fall interval at speed 1 |
//! | `FALL_STEP_DECREMENT_MS` | 60 | Fall interval reduction per speed level |
//! | `FALL_INTERVAL_FLOOR_MS` | 100 | Fastest fall interval |
//!
//! # Examples
//!
//! ```
//! use columns_types::{Cell, Color, GameAction, Palette, BOARD_WIDTH};
//!
//! let cell = Cell::Alive(Color::Red);
//! assert!(cell.is_alive());
//! assert_eq!(cell.color(), Some(Color::Red));
//!
//! assert_eq!(Palette::Classic.colors().len(), 3);
//! assert_eq!(GameAction::RotateUp.as_str(), "rotateUp");
//! assert_eq!(BOARD_WIDTH, 7);
//! ```

/// Board width in cells (7 columns)
pub const BOARD_WIDTH: u8 = 7;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Column of the single spawn cell (row 0)
pub const SPAWN_COLUMN: u8 = BOARD_WIDTH / 2;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Pacing of the elimination pass, one cell per step.
pub const ELIMINATE_STEP_MS: u32 = 20;

/// Pacing of gravity after an elimination, one row per step.
pub const COLLAPSE_STEP_MS: u32 = 20;

/// Time between a cell turning dead and its removal-finished signal.
pub const DEAD_CELL_FLASH_MS: u32 = 150;

/// Fall interval at speed 1.
pub const BASE_FALL_MS: u32 = 800;

/// Fall interval reduction per speed level.
pub const FALL_STEP_DECREMENT_MS: u32 = 60;

/// Fall interval never drops below this.
pub const FALL_INTERVAL_FLOOR_MS: u32 = 100;

/// Points for one eliminated block with multiplier 1.
pub const POINTS_PER_BLOCK: u32 = 10;

/// Eliminated blocks needed to gain one speed level.
pub const BLOCKS_PER_SPEED: u32 = 30;

/// Highest speed level.
pub const MAX_SPEED: u32 = 12;

/// Block colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Orange,
    Cyan,
}

const CLASSIC_COLORS: [Color; 3] = [Color::Red, Color::Green, Color::Blue];

const RICH_COLORS: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Blue,
    Color::Yellow,
    Color::Purple,
    Color::Orange,
    Color::Cyan,
];

/// The set of colors new pieces are drawn from.
///
/// The palette only changes the branching factor of matches, never the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Palette {
    /// Red, green and blue.
    #[default]
    Classic,
    /// All seven colors.
    Rich,
}

impl Palette {
    pub fn colors(&self) -> &'static [Color] {
        match self {
            Palette::Classic => &CLASSIC_COLORS,
            Palette::Rich => &RICH_COLORS,
        }
    }

    /// Color for a seed value: `colors[seed mod len]`.
    pub fn color(&self, seed: u64) -> Color {
        let colors = self.colors();
        colors[(seed % colors.len() as u64) as usize]
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "3" => Some(Palette::Classic),
            "rich" | "7" => Some(Palette::Rich),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Palette::Classic => "classic",
            Palette::Rich => "rich",
        }
    }
}

/// One board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// A settled, matchable block.
    Alive(Color),
    /// A block marked for elimination. The multiplier counts the match
    /// triples the block belonged to.
    Dead(Color, u32),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn is_alive(&self) -> bool {
        matches!(self, Cell::Alive(_))
    }

    pub fn is_dead(&self) -> bool {
        matches!(self, Cell::Dead(_, _))
    }

    pub fn color(&self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Alive(color) | Cell::Dead(color, _) => Some(*color),
        }
    }
}

/// Board coordinate. Signed so that neighbours past the edge can be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub col: i8,
    pub row: i8,
}

impl Coord {
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    pub const fn offset(self, dcol: i8, drow: i8) -> Self {
        Self {
            col: self.col + dcol,
            row: self.row + drow,
        }
    }

    pub fn in_bounds(&self) -> bool {
        self.col >= 0
            && self.col < BOARD_WIDTH as i8
            && self.row >= 0
            && self.row < BOARD_HEIGHT as i8
    }
}

/// Player intents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    RotateUp,
    RotateDown,
    Drop,
    Start,
}

impl GameAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateUp => "rotateUp",
            GameAction::RotateDown => "rotateDown",
            GameAction::Drop => "drop",
            GameAction::Start => "start",
        }
    }
}

/// What the session is doing while a game is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayPhase {
    /// A piece is falling and accepts player intents.
    Controlling,
    /// No piece: look for matches, then spawn or end the game.
    Resolving,
    /// Matched cells turn dead one at a time.
    Eliminating,
    /// Waiting for dead cells to be removed.
    Removing,
    /// Gravity, one row per step.
    Collapsing,
}

/// Coarse screen phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    TitleScreen,
    Playing(PlayPhase),
    GameOver,
}

impl Phase {
    pub fn is_playing(&self) -> bool {
        matches!(self, Phase::Playing(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::TitleScreen => "title",
            Phase::Playing(PlayPhase::Controlling) => "controlling",
            Phase::Playing(PlayPhase::Resolving) => "resolving",
            Phase::Playing(PlayPhase::Eliminating) => "eliminating",
            Phase::Playing(PlayPhase::Removing) => "removing",
            Phase::Playing(PlayPhase::Collapsing) => "collapsing",
            Phase::GameOver => "gameOver",
        }
    }
}
