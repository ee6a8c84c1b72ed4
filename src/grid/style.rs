//! Styles for grid rendering.

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Marker appended to the header of a filtered column.
pub const FILTER_MARKER: &str = "*";

/// Unicode ellipsis used when a cell is truncated.
pub const ELLIPSIS: &str = "…";

/// Column separator.
pub const SEPARATOR: &str = " │ ";

/// Styling for every part of the grid view.
#[derive(Debug, Clone)]
pub struct GridStyles {
    /// Header cells.
    pub header: Style,
    /// Header cell of the selected column.
    pub selected_header: Style,
    /// Body cells.
    pub cell: Style,
    /// Column separators and the header rule.
    pub border: Style,
    /// Footer line (pagination and row count).
    pub footer: Style,
    /// Placeholder shown when no row passes the filters.
    pub empty: Style,
}

impl Default for GridStyles {
    fn default() -> Self {
        use lipgloss::AdaptiveColor;

        let accent = AdaptiveColor {
            Light: "#5A56E0",
            Dark: "#7571F9",
        };
        let subtle = AdaptiveColor {
            Light: "#A49FA5",
            Dark: "#777777",
        };

        Self {
            header: Style::new().bold(true).foreground(accent.clone()),
            selected_header: Style::new().bold(true).underline(true).foreground(accent),
            cell: Style::new(),
            border: Style::new().foreground(subtle.clone()),
            footer: Style::new().foreground(subtle.clone()),
            empty: Style::new().foreground(subtle),
        }
    }
}
