//! Styling for the quick-access list.
//!
//! Rows are rendered in two layers: a container style that carries layout
//! (padding, the selected row's accent border) and a text style that
//! carries color. Highlight matches are an overlay composed onto the text
//! style with `inherit`, so they pick up the row's color and add bold on
//! top. Keeping layout out of the text styles matters: highlighted keys
//! are rendered as several styled runs, and a padded run style would
//! re-indent every run.
//!
//! All default colors are adaptive and adjust to light or dark terminals.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_quickaccess::list::QuickAccessStyles;
//! use lipgloss_extras::prelude::*;
//!
//! let mut styles = QuickAccessStyles::default();
//! styles.selected_text = Style::new().foreground(Color::from("#04B575"));
//! styles.match_highlight = Style::new().bold(true).underline(true);
//! ```

use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;

/// Unicode ellipsis (…) appended when a key is truncated to the widget width.
pub const ELLIPSIS: &str = "…";

/// Styles for every visual element of the quick-access list.
#[derive(Debug, Clone)]
pub struct QuickAccessStyles {
    /// Container for unselected rows.
    pub normal_row: Style,
    /// Container for the selected row.
    pub selected_row: Style,
    /// Text style for unselected rows.
    pub normal_text: Style,
    /// Text style for the selected row.
    pub selected_text: Style,
    /// Overlay composed onto the text style for highlight-matched characters.
    pub match_highlight: Style,
}

impl Default for QuickAccessStyles {
    fn default() -> Self {
        Self {
            normal_row: Style::new().padding(0, 0, 0, 2),
            selected_row: Style::new()
                .border_style(lipgloss::normal_border())
                .border_left(true)
                .border_left_foreground(Color::from("#AD58B4"))
                .padding(0, 0, 0, 1),
            normal_text: Style::new().foreground(AdaptiveColor {
                Light: "#1a1a1a",
                Dark: "#dddddd",
            }),
            selected_text: Style::new().foreground(Color::from("#EE6FF8")),
            match_highlight: Style::new().bold(true),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles_render_text_unchanged() {
        // Text styles carry color only; stripping ANSI must give the input back.
        let styles = QuickAccessStyles::default();
        let rendered = styles.normal_text.clone().render("plain");
        let stripped = String::from_utf8(strip_ansi_escapes::strip(&rendered)).unwrap();
        assert_eq!(stripped, "plain");
    }
}
