//! Key bindings for quick-access list navigation.
//!
//! The defaults are deliberately minimal: Up, Down, and Enter. A palette
//! usually sits next to a text input that owns every printable character,
//! so no letter keys are bound by default. Hosts that want vim-style
//! navigation can swap in their own bindings:
//!
//! ```rust
//! use bubbletea_quickaccess::key;
//! use bubbletea_quickaccess::list::QuickAccessKeyMap;
//!
//! let keymap = QuickAccessKeyMap {
//!     cursor_up: key::new_binding(vec![
//!         key::with_keys_str(&["up", "ctrl+p"]),
//!         key::with_help("↑/ctrl+p", "up"),
//!     ]),
//!     ..QuickAccessKeyMap::default()
//! };
//! ```

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for moving the selection and choosing an entry.
#[derive(Debug, Clone)]
pub struct QuickAccessKeyMap {
    /// Move the selection up one row, wrapping to the last row at the top.
    pub cursor_up: key::Binding,
    /// Move the selection down one row, wrapping to the first row at the end.
    pub cursor_down: key::Binding,
    /// Choose the currently selected entry.
    pub select: key::Binding,
}

impl Default for QuickAccessKeyMap {
    fn default() -> Self {
        Self {
            cursor_up: key::Binding::new(vec![KeyCode::Up]).with_help("↑", "up"),
            cursor_down: key::Binding::new(vec![KeyCode::Down]).with_help("↓", "down"),
            select: key::Binding::new(vec![KeyCode::Enter]).with_help("enter", "select"),
        }
    }
}

impl key::KeyMap for QuickAccessKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.cursor_up, &self.cursor_down, &self.select]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![&self.cursor_up, &self.cursor_down, &self.select]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::KeyMap;
    use bubbletea_rs::KeyMsg;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_default_bindings() {
        let keymap = QuickAccessKeyMap::default();
        let enter = KeyMsg {
            key: KeyCode::Enter,
            modifiers: KeyModifiers::empty(),
        };
        assert!(keymap.select.matches(&enter));
        assert!(!keymap.cursor_up.matches(&enter));
        assert!(!keymap.cursor_down.matches(&enter));
    }

    #[test]
    fn test_help_lists_all_bindings() {
        let keymap = QuickAccessKeyMap::default();
        assert_eq!(keymap.short_help().len(), 3);
        assert_eq!(keymap.full_help()[0].len(), 3);
    }
}
