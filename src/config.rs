use ratatui::style::Color;
use ratatui::symbols::border;

/// Logical field dimensions passed through the game as a named type.
///
/// Replaces an anonymous `(u16, u16)` tuple for bounds, making rows
/// vs. columns unambiguous at every call site.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct GridSize {
    pub rows: u16,
    pub cols: u16,
}

impl GridSize {
    /// Returns the total number of cells in the field.
    #[must_use]
    pub fn total_cells(self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }
}

/// Default field height in cells.
pub const DEFAULT_GRID_ROWS: u16 = 30;

/// Default field width in cells.
pub const DEFAULT_GRID_COLS: u16 = 30;

/// Default starting snake length.
pub const DEFAULT_SNAKE_LENGTH: u16 = 8;

/// Character drawn for an empty cell.
pub const SYMBOL_EMPTY: char = '*';

/// Character drawn for a body segment.
pub const SYMBOL_BODY: char = 'x';

/// Character drawn for the head segment.
pub const SYMBOL_HEAD: char = 'h';

/// Character drawn for the bean.
pub const SYMBOL_BEAN: char = 'b';

/// A color theme applied to all visual elements.
///
/// The `field`, `snake`, and `bean` colors back the three style classes the
/// field renderer emits; the remaining fields style the chrome around it.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub name: &'static str,
    /// Foreground for empty field cells.
    pub field: Color,
    /// Foreground for snake body and head cells.
    pub snake: Color,
    /// Foreground for the bean cell.
    pub bean: Color,
    pub border_fg: Color,
    pub border_bg: Color,
    pub hud_score: Color,
    pub menu_title: Color,
    pub menu_footer: Color,
}

/// Red snake, blue bean: the original curses palette.
pub const THEME_CLASSIC: Theme = Theme {
    name: "classic",
    field: Color::DarkGray,
    snake: Color::Red,
    bean: Color::Blue,
    border_fg: Color::White,
    border_bg: Color::DarkGray,
    hud_score: Color::White,
    menu_title: Color::Green,
    menu_footer: Color::DarkGray,
};

/// Ocean cyan theme.
pub const THEME_OCEAN: Theme = Theme {
    name: "ocean",
    field: Color::DarkGray,
    snake: Color::Cyan,
    bean: Color::Yellow,
    border_fg: Color::Cyan,
    border_bg: Color::DarkGray,
    hud_score: Color::Cyan,
    menu_title: Color::Cyan,
    menu_footer: Color::DarkGray,
};

/// Neon magenta/yellow theme.
pub const THEME_NEON: Theme = Theme {
    name: "neon",
    field: Color::DarkGray,
    snake: Color::Magenta,
    bean: Color::Yellow,
    border_fg: Color::Magenta,
    border_bg: Color::Black,
    hud_score: Color::Magenta,
    menu_title: Color::Magenta,
    menu_footer: Color::DarkGray,
};

/// All available themes in cycle order.
pub const THEMES: &[Theme] = &[THEME_CLASSIC, THEME_OCEAN, THEME_NEON];

/// Looks up a built-in theme by name, case-insensitively.
#[must_use]
pub fn theme_by_name(name: &str) -> Option<&'static Theme> {
    THEMES
        .iter()
        .find(|theme| theme.name.eq_ignore_ascii_case(name))
}

/// Half-block border set: solid side faces the play area.
///
/// - Top row + top corners: `▄` (solid bottom -> play area below)
/// - Bottom row + bottom corners: `▀` (solid top -> play area above)
/// - Left and right columns: `█` (fully solid)
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
