use ratatui::style::Color;
use ratatui::symbols::border;

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

/// Default playfield size in cells.
pub const DEFAULT_GRID: GridSize = GridSize {
    width: 30,
    height: 20,
};

/// Base tick interval in milliseconds.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 150;

/// Minimum tick interval reachable through level-ups.
pub const MIN_TICK_INTERVAL_MS: u64 = 50;

/// Tick interval reduction per level-up, in milliseconds.
pub const LEVEL_TICK_STEP_MS: u64 = 10;

/// Floor for the interval while a speed boost is active. Half the level
/// floor, so a boost stays noticeable even at maximum level.
pub const BOOST_MIN_TICK_INTERVAL_MS: u64 = 25;

/// Points granted by normal food.
pub const FOOD_POINTS: u32 = 10;

/// Points granted by the points special food.
pub const EXTRA_POINTS: u32 = 50;

/// Score threshold multiplier: level up when score exceeds `level * 100`.
pub const POINTS_PER_LEVEL: u32 = 100;

/// Probability of spawning a special food after normal food is eaten.
pub const SPECIAL_FOOD_CHANCE: f64 = 0.2;

/// Real-time duration of a speed boost, in milliseconds.
pub const SPEED_BOOST_DURATION_MS: u64 = 5000;

/// How long the level-up notice stays on screen, in milliseconds.
pub const LEVEL_NOTICE_DURATION_MS: u64 = 2000;

/// Smallest snake length the shrink effect may leave behind.
pub const MIN_SNAKE_LEN: usize = 3;

/// Segments removed by one shrink effect.
pub const SHRINK_SEGMENTS: usize = 2;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    /// Speed special food (gold).
    pub special_speed: Color,
    /// Points special food (deep pink).
    pub special_points: Color,
    /// Shrink special food (royal blue).
    pub special_shrink: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_fg: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Classic green-snake theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    special_speed: Color::Rgb(0xFF, 0xD7, 0x00),
    special_points: Color::Rgb(0xFF, 0x14, 0x93),
    special_shrink: Color::Rgb(0x41, 0x69, 0xE1),
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_fg: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Half-block border set: solid side faces the play area.
pub const BORDER_HALF_BLOCK: border::Set = border::Set {
    top_left: "▄",
    top_right: "▄",
    bottom_left: "▀",
    bottom_right: "▀",
    vertical_left: "█",
    vertical_right: "█",
    horizontal_top: "▄",
    horizontal_bottom: "▀",
};

pub const GLYPH_FOOD: &str = "●";
pub const GLYPH_SNAKE_BODY: &str = "█";
pub const GLYPH_SNAKE_TAIL: &str = "▓";
pub const GLYPH_SNAKE_HEAD_UP: &str = "▲";
pub const GLYPH_SNAKE_HEAD_DOWN: &str = "▼";
pub const GLYPH_SNAKE_HEAD_LEFT: &str = "◀";
pub const GLYPH_SNAKE_HEAD_RIGHT: &str = "▶";
