//! Quick-access list: a filtered-palette list with wraparound navigation,
//! character highlighting, and selection events.
//!
//! The widget renders a host-supplied sequence of [`KeyValuePair`]s,
//! emphasizes the characters of each key that appear in the current
//! highlight string, and tracks a single selected row. Up and Down move
//! the selection with wraparound at both ends; Enter (or a pointer press
//! routed through [`Model::click`]) chooses the selected entry and emits a
//! [`SelectedMsg`] through the runtime.
//!
//! ## State ownership
//!
//! The host owns the item sequence and the highlight string and replaces
//! them wholesale on every data change. The widget owns the selection and
//! the viewport: the selection resets to 0 whenever a replacement leaves
//! it pointing past the end, and the viewport follows the selection with
//! one row of lookahead in the scroll direction.
//!
//! ## Key routing
//!
//! `update` inspects every [`KeyMsg`] it is handed, with no focus gate;
//! the palette is expected to receive the application's key stream while
//! it is open. Run one live instance at a time; two instances fed the same
//! stream will both move their cursors.
//!
//! ## Submodules
//!
//! - [`keys`]: the [`QuickAccessKeyMap`] bindings (Up / Down / Enter).
//! - [`style`]: [`QuickAccessStyles`] lipgloss styling.

/// Key bindings for list navigation and selection.
pub mod keys;

/// Visual styling for rows and highlight matches.
pub mod style;

mod highlight;
mod model;
mod rendering;
mod types;

pub use keys::QuickAccessKeyMap;
pub use model::Model;
pub use style::QuickAccessStyles;
pub use types::{KeyValuePair, SelectedMsg};

use crate::key;
use bubbletea_rs::{Cmd, KeyMsg, Model as BubbleTeaModel, Msg};

impl<T: Clone + Send + Sync + 'static> key::KeyMap for Model<T> {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![
            &self.keymap.cursor_up,
            &self.keymap.cursor_down,
            &self.keymap.select,
        ]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.keymap.cursor_up,
            &self.keymap.cursor_down,
            &self.keymap.select,
        ]]
    }
}

impl<T: Clone + Send + Sync + 'static> BubbleTeaModel for Model<T> {
    /// Creates an empty list at a default size.
    ///
    /// Embedding hosts normally construct the widget with
    /// [`Model::new`] instead and size it explicitly.
    fn init() -> (Self, Option<Cmd>) {
        (Self::new(Vec::new(), 80, 10), None)
    }

    /// Handles navigation and selection keys.
    ///
    /// - **Up**: moves the selection up one row, wrapping to the last row.
    /// - **Down**: moves the selection down one row, wrapping to the first.
    /// - **Enter**: emits a [`SelectedMsg`] for the selected entry when one
    ///   is populated; the selection does not move.
    ///
    /// On an empty list the navigation keys are silent no-ops. After every
    /// key the viewport is re-synced to the selection, which is a no-op
    /// when nothing moved. Returns `Some` only when a selection was
    /// emitted, so hosts can treat that as the key being consumed.
    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let mut cmd = None;
        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            let len = self.items.len();
            if self.keymap.cursor_up.matches(key_msg) {
                if len > 0 {
                    self.selection = if self.selection == 0 {
                        len - 1
                    } else {
                        self.selection - 1
                    };
                }
            } else if self.keymap.cursor_down.matches(key_msg) {
                if len > 0 {
                    self.selection = (self.selection + 1) % len;
                }
            } else if self.keymap.select.matches(key_msg) {
                cmd = self.select();
            }
            self.scroll_into_view();
        }
        cmd
    }

    /// Renders the visible window of rows, one line per entry.
    ///
    /// An empty list renders as an empty string.
    fn view(&self) -> String {
        self.view_rows()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn pairs(keys: &[&str]) -> Vec<KeyValuePair<u32>> {
        keys.iter()
            .enumerate()
            .map(|(i, k)| KeyValuePair::new(*k, i as u32))
            .collect()
    }

    fn press(model: &mut Model<u32>, code: KeyCode) -> Option<Cmd> {
        let msg: Msg = Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::empty(),
        });
        model.update(msg)
    }

    #[test]
    fn test_down_advances_modulo_length() {
        let mut list = Model::new(pairs(&["a", "b", "c", "d"]), 40, 8);
        for expected in [1, 2, 3, 0, 1] {
            press(&mut list, KeyCode::Down);
            assert_eq!(list.selection(), expected);
        }
    }

    #[test]
    fn test_up_wraps_to_last() {
        let mut list = Model::new(pairs(&["a", "b", "c", "d"]), 40, 8);
        press(&mut list, KeyCode::Up);
        assert_eq!(list.selection(), 3);
        press(&mut list, KeyCode::Up);
        assert_eq!(list.selection(), 2);
    }

    #[test]
    fn test_alpha_beta_gamma_scenario() {
        let mut list = Model::new(pairs(&["Alpha", "Beta", "Gamma"]), 40, 8);
        press(&mut list, KeyCode::Down);
        press(&mut list, KeyCode::Down);
        assert_eq!(list.selection(), 2);
        press(&mut list, KeyCode::Down);
        assert_eq!(list.selection(), 0);
    }

    #[test]
    fn test_navigation_on_empty_list_is_silent() {
        let mut list: Model<u32> = Model::new(Vec::new(), 40, 8);
        assert!(press(&mut list, KeyCode::Up).is_none());
        assert!(press(&mut list, KeyCode::Down).is_none());
        assert_eq!(list.selection(), 0);
        assert!(list.selected_item().is_none());
    }

    #[test]
    fn test_enter_emits_exactly_one_selection() {
        let mut list = Model::new(pairs(&["a", "b"]), 40, 8);
        press(&mut list, KeyCode::Down);
        let cmd = press(&mut list, KeyCode::Enter);
        assert!(cmd.is_some());
        assert_eq!(list.selection(), 1);
    }

    #[test]
    fn test_enter_on_empty_list_emits_nothing() {
        let mut list: Model<u32> = Model::new(Vec::new(), 40, 8);
        assert!(press(&mut list, KeyCode::Enter).is_none());
    }

    #[test]
    fn test_unbound_keys_are_ignored() {
        let mut list = Model::new(pairs(&["a", "b"]), 40, 8);
        assert!(press(&mut list, KeyCode::Char('x')).is_none());
        assert_eq!(list.selection(), 0);
    }

    #[test]
    fn test_non_key_messages_are_ignored() {
        let mut list = Model::new(pairs(&["a", "b"]), 40, 8);
        let msg: Msg = Box::new("not a key message");
        assert!(list.update(msg).is_none());
        assert_eq!(list.selection(), 0);
    }

    #[test]
    fn test_navigation_scrolls_viewport() {
        let mut list = Model::new(
            (0..10)
                .map(|i| KeyValuePair::new(format!("row-{i}"), i as u32))
                .collect(),
            40,
            3,
        );
        for _ in 0..3 {
            press(&mut list, KeyCode::Down);
        }
        // Selection 3 with a 3-row window: scrolled down with lookahead.
        assert_eq!(list.selection(), 3);
        assert_eq!(list.first_visible(), 2);
    }

    #[test]
    fn test_up_from_zero_scrolls_to_tail() {
        let mut list = Model::new(
            (0..10)
                .map(|i| KeyValuePair::new(format!("row-{i}"), i as u32))
                .collect(),
            40,
            3,
        );
        press(&mut list, KeyCode::Up);
        assert_eq!(list.selection(), 9);
        assert_eq!(list.first_visible(), 7);
    }

    #[test]
    fn test_custom_keymap_is_honored() {
        let keymap = QuickAccessKeyMap {
            cursor_down: crate::key::Binding::new(vec![KeyCode::Char('j')]).with_help("j", "down"),
            ..QuickAccessKeyMap::default()
        };
        let mut list = Model::new(pairs(&["a", "b"]), 40, 8).with_keymap(keymap);
        press(&mut list, KeyCode::Char('j'));
        assert_eq!(list.selection(), 1);
    }
}
