use std::time::Duration;

use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical grid dimensions passed through the game as a named type.
///
/// Replaces the anonymous `(u16, u16)` tuple that was used for bounds,
/// making width vs. height unambiguous at every call site.
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

    /// Returns the center cell, where the snake spawns.
    #[must_use]
    pub fn center(self) -> crate::snake::Position {
        crate::snake::Position {
            x: i32::from(self.width / 2),
            y: i32::from(self.height / 2),
        }
    }
}

/// Default logical grid width in cells.
pub const DEFAULT_GRID_WIDTH: u16 = 40;

/// Default logical grid height in cells.
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Frame interval for the 60 Hz loop; one session tick per frame.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Rendered sub-steps per logical movement step.
pub const ANIMATION_STEPS: u16 = 10;

/// Segment count a fresh snake starts with.
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Length interval that triggers a level-up.
pub const LENGTH_PER_LEVEL: usize = 10;

/// Wall structures generated at level 1.
pub const BASE_OBSTACLE_COUNT: u32 = 4;

/// Extra wall structures per level beyond the first.
pub const OBSTACLES_PER_LEVEL: u32 = 2;

/// Minimum cells in one wall run.
pub const MIN_WALL_LENGTH: u16 = 5;

/// Maximum cells in one wall run.
pub const MAX_WALL_LENGTH: u16 = 8;

/// Chebyshev radius around the grid center kept free of obstacles.
pub const SPAWN_CLEARANCE: i32 = 3;

/// Probability that a bonus food spawns after the mandatory food is eaten.
pub const BONUS_FOOD_CHANCE: f64 = 0.2;

/// Points granted for eating the bonus food.
pub const BONUS_FOOD_POINTS: u32 = 5;

/// Bonus food lifetime after spawning.
pub const BONUS_FOOD_LIFETIME: Duration = Duration::from_millis(5000);

/// Placement attempts per grid cell before rejection sampling gives up.
pub const PLACEMENT_ATTEMPTS_PER_CELL: usize = 4;

/// A color theme applied to all visual elements.
#[derive(Debug)]
pub struct Theme {
    pub name: &'static str,
    pub snake_head: Color,
    pub snake_body: Color,
    pub snake_tail: Color,
    pub food: Color,
    pub bonus_food: Color,
    pub obstacle: Color,
    pub obstacle_dim: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_fg: Color,
    pub menu_title: Color,
    pub menu_selected: Color,
    pub menu_footer: Color,
}

/// Classic green snake on dark theme.
pub const THEME_CLASSIC: Theme = Theme {
    name: "Classic",
    snake_head: Color::White,
    snake_body: Color::Green,
    snake_tail: Color::DarkGray,
    food: Color::Red,
    bonus_food: Color::Yellow,
    obstacle: Color::Gray,
    obstacle_dim: Color::DarkGray,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_fg: Color::White,
    menu_title: Color::Green,
    menu_selected: Color::LightGreen,
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

/// Glyphs for board entities.
pub const GLYPH_SNAKE_HEAD: &str = "●";
pub const GLYPH_SNAKE_BODY: &str = "○";
pub const GLYPH_SNAKE_TAIL: &str = "·";
pub const GLYPH_FOOD: &str = "◆";
pub const GLYPH_BONUS_FOOD: &str = "★";
pub const GLYPH_OBSTACLE: &str = "▓";
pub const GLYPH_OBSTACLE_DIM: &str = "▒";
