#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-quickaccess/")]

//! # bubbletea-quickaccess
//!
//! A quick-access palette list widget for [bubbletea-rs](https://github.com/whit3rabbit/bubbletea-rs)
//! terminal applications: the navigable result list at the heart of a
//! command palette.
//!
//! ## Overview
//!
//! The widget displays a sequence of key/value pairs supplied by the host,
//! bolds the characters of each key that appear in the current highlight
//! string, and keeps exactly one row selected. Up and Down move the
//! selection with wraparound at both ends, Enter chooses the selected
//! entry, and pointer presses are routed in through
//! [`Model::click`](list::Model::click). Choosing an entry emits a
//! [`SelectedMsg`](list::SelectedMsg) carrying the entry back to the host
//! through the message loop. The selected row is auto-scrolled into view
//! with one row of lookahead in the scroll direction.
//!
//! The component follows the Elm Architecture: the host forwards messages
//! to `update()` and composes `view()` output into its own frame. Data
//! flows one way: the host replaces the item sequence and the highlight
//! string whenever its query changes, and the widget owns the selection
//! and viewport state.
//!
//! ## Quick start
//!
//! ```rust
//! use bubbletea_quickaccess::prelude::*;
//! use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
//!
//! struct Palette {
//!     results: QuickAccess<String>,
//! }
//!
//! impl BubbleTeaModel for Palette {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let items = vec![
//!             KeyValuePair::new("AppComponent", "src/app.ts".to_string()),
//!             KeyValuePair::new("NavComponent", "src/nav.ts".to_string()),
//!         ];
//!         let mut results = QuickAccess::new(items, 60, 10);
//!         results.set_highlight("comp");
//!         (Self { results }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         if let Some(selected) = msg.downcast_ref::<SelectedMsg<String>>() {
//!             // The user chose `selected.item`; act on it here.
//!             let _ = &selected.item.value;
//!             return None;
//!         }
//!         self.results.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.results.view()
//!     }
//! }
//! ```
//!
//! ## Highlighting
//!
//! Matching is per-character set membership, case-insensitive: highlight
//! `"ab"` bolds every `a` and every `b` anywhere in a key, independent of
//! order or adjacency. Highlighting is terminal styling over plain text;
//! key strings are never interpreted as markup.
//!
//! ## One instance at a time
//!
//! The widget reacts to every key message it is handed, without a focus
//! gate, so a palette can respond while some other component holds focus.
//! Feed the key stream to a single live instance; two instances on the
//! same stream will both handle each key.

pub mod key;
pub mod list;

pub use list::{
    KeyValuePair, Model as QuickAccess, QuickAccessKeyMap, QuickAccessStyles, SelectedMsg,
};

/// Convenient single-import surface for the crate.
///
/// ```rust
/// use bubbletea_quickaccess::prelude::*;
///
/// let list: QuickAccess<u32> = QuickAccess::new(Vec::new(), 40, 8);
/// assert!(list.is_empty());
/// ```
pub mod prelude {
    pub use crate::key::{
        matches, matches_binding, new_binding, with_disabled, with_help, with_keys,
        with_keys_str, Binding, Help as KeyHelp, KeyMap, KeyPress,
    };
    pub use crate::list::{
        KeyValuePair, Model as QuickAccess, QuickAccessKeyMap, QuickAccessStyles, SelectedMsg,
    };
}
