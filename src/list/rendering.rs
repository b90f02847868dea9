//! Row rendering and viewport management.

use super::highlight::render_highlighted;
use super::style::ELLIPSIS;
use super::Model;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

impl<T: Clone + Send + Sync + 'static> Model<T> {
    /// Renders the visible window of rows.
    ///
    /// Returns an empty string when there is nothing to show: no items, or
    /// a zero-sized widget.
    pub(super) fn view_rows(&self) -> String {
        if self.items.is_empty() || self.width == 0 || self.height == 0 {
            return String::new();
        }

        let end = (self.first_visible + self.height).min(self.items.len());
        let mut rows = Vec::with_capacity(end.saturating_sub(self.first_visible));
        for (index, item) in self
            .items
            .iter()
            .enumerate()
            .take(end)
            .skip(self.first_visible)
        {
            let selected = index == self.selection;
            let text_style = if selected {
                &self.styles.selected_text
            } else {
                &self.styles.normal_text
            };
            let row_style = if selected {
                &self.styles.selected_row
            } else {
                &self.styles.normal_row
            };
            let text = truncate_to_width(&item.key, self.width);
            let line = render_highlighted(
                &text,
                &self.highlight_set,
                text_style,
                &self.styles.match_highlight,
            );
            rows.push(row_style.clone().render(&line));
        }
        rows.join("\n")
    }

    /// Scrolls the viewport so the selection is visible with one row of
    /// lookahead.
    ///
    /// When the selection reaches the top edge, the window shifts to keep
    /// one row of context above it; when it passes the bottom edge, the
    /// window shifts to keep one row of lookahead below it. The selected
    /// row never ends up outside the window, and the window never starts
    /// past `len - height`.
    pub(super) fn scroll_into_view(&mut self) {
        let len = self.items.len();
        if len == 0 {
            self.first_visible = 0;
            return;
        }
        let rows = self.height.max(1);

        if self.selection <= self.first_visible {
            self.first_visible = self.selection.saturating_sub(1);
        }
        if self.selection >= self.first_visible + rows {
            self.first_visible = (self.selection + 2).saturating_sub(rows);
        }

        // Degenerate one-row viewports: lookahead would push the selection out.
        if self.selection < self.first_visible {
            self.first_visible = self.selection;
        }
        if self.selection >= self.first_visible + rows {
            self.first_visible = self.selection + 1 - rows;
        }

        let max_start = len.saturating_sub(rows);
        if self.first_visible > max_start {
            self.first_visible = max_start;
        }
    }
}

/// Truncates `text` to `max_width` terminal cells, ending in an ellipsis.
pub(super) fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let budget = max_width.saturating_sub(ELLIPSIS.width());
    let mut used = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push_str(ELLIPSIS);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::KeyValuePair;

    fn list_of(n: usize, height: usize) -> Model<usize> {
        let items = (0..n)
            .map(|i| KeyValuePair::new(format!("item-{i}"), i))
            .collect();
        Model::new(items, 40, height)
    }

    fn stripped(s: &str) -> String {
        String::from_utf8(strip_ansi_escapes::strip(s)).unwrap()
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let list: Model<usize> = Model::new(Vec::new(), 40, 8);
        assert_eq!(list.view_rows(), "");
    }

    #[test]
    fn test_zero_width_renders_nothing() {
        let list = Model::new(vec![KeyValuePair::new("a", 0u8)], 0, 8);
        assert_eq!(list.view_rows(), "");
    }

    #[test]
    fn test_view_shows_only_viewport_window() {
        let mut list = list_of(10, 3);
        list.first_visible = 4;
        let view = stripped(&list.view_rows());
        let lines: Vec<&str> = view.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("item-4"));
        assert!(lines[2].contains("item-6"));
    }

    #[test]
    fn test_short_list_renders_all_rows() {
        let list = list_of(2, 8);
        let view = stripped(&list.view_rows());
        assert_eq!(view.lines().count(), 2);
    }

    #[test]
    fn test_scroll_up_keeps_one_row_of_context() {
        let mut list = list_of(20, 5);
        list.first_visible = 6;
        list.selection = 6;
        list.scroll_into_view();
        assert_eq!(list.first_visible, 5);
    }

    #[test]
    fn test_scroll_down_keeps_one_row_of_lookahead() {
        let mut list = list_of(20, 5);
        list.first_visible = 0;
        list.selection = 5;
        list.scroll_into_view();
        // Window becomes rows 2..=6: the selection plus one row below it.
        assert_eq!(list.first_visible, 2);
    }

    #[test]
    fn test_no_scroll_while_selection_strictly_inside() {
        let mut list = list_of(20, 5);
        list.first_visible = 3;
        list.selection = 5;
        list.scroll_into_view();
        assert_eq!(list.first_visible, 3);
    }

    #[test]
    fn test_window_never_starts_past_tail() {
        let mut list = list_of(10, 5);
        list.first_visible = 0;
        list.selection = 9;
        list.scroll_into_view();
        assert_eq!(list.first_visible, 5);
    }

    #[test]
    fn test_selection_always_visible_in_one_row_viewport() {
        let mut list = list_of(10, 1);
        list.selection = 4;
        list.scroll_into_view();
        assert_eq!(list.first_visible, 4);
    }

    #[test]
    fn test_scroll_on_empty_list_resets_offset() {
        let mut list: Model<usize> = Model::new(Vec::new(), 40, 5);
        list.first_visible = 7;
        list.scroll_into_view();
        assert_eq!(list.first_visible, 0);
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("short", 10), "short");
        let cut = truncate_to_width("a-rather-long-key", 8);
        assert!(cut.ends_with(ELLIPSIS));
        assert!(cut.width() <= 8);
    }

    #[test]
    fn test_selected_row_is_styled_differently() {
        let list = list_of(3, 8);
        let rows: Vec<String> = list.view_rows().lines().map(String::from).collect();
        // Row 0 is selected; its raw rendering differs from an unselected row's.
        assert_ne!(rows[0].replace("item-0", "item-1"), rows[1]);
    }
}
