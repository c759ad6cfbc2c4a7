use crate::visual::VisualState;
use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color,
    pub bar_idle: Color,
    pub bar_sorted: Color,
    pub bar_compared: Color,
    pub bar_pivot: Color,
    pub bar_mid: Color,
    pub bar_range: Color,
    pub bar_excluded: Color,
    pub bar_found: Color,
    pub node_path: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border for focus
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    bar_idle: Color::Rgb(137, 180, 250),
    bar_sorted: Color::Rgb(166, 227, 161),
    bar_compared: Color::Rgb(243, 139, 168),
    bar_pivot: Color::Rgb(203, 166, 247),    // Mauve
    bar_mid: Color::Rgb(249, 226, 175),
    bar_range: Color::Rgb(148, 226, 213),    // Teal
    bar_excluded: Color::Rgb(69, 71, 90),    // Dimmed
    bar_found: Color::Rgb(166, 227, 161),
    node_path: Color::Rgb(180, 165, 120), // Muted yellow for earlier path nodes
};

impl Theme {
    /// Color for a bar or node in the given state
    pub fn visual(&self, state: VisualState) -> Color {
        match state {
            VisualState::Idle => self.bar_idle,
            VisualState::Found | VisualState::Inserted => self.bar_found,
            VisualState::Checking | VisualState::Compared => self.bar_compared,
            VisualState::Mid | VisualState::Visiting => self.bar_mid,
            VisualState::InRange => self.bar_range,
            VisualState::Excluded => self.bar_excluded,
            VisualState::Sorted => self.bar_sorted,
            VisualState::Pivot => self.bar_pivot,
            VisualState::Missing => self.error,
            VisualState::OnPath => self.node_path,
        }
    }
}
