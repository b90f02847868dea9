//! The quick-access list model: bound items, highlight string, selection
//! cursor, and viewport state.

use super::highlight;
use super::keys::QuickAccessKeyMap;
use super::style::QuickAccessStyles;
use super::types::{KeyValuePair, SelectedMsg};
use bubbletea_rs::{tick, Cmd, Msg};
use std::collections::HashSet;
use std::time::Duration;

/// A keyboard- and pointer-navigable palette list.
///
/// The model owns the selection cursor and the viewport; the host owns the
/// item sequence and the highlight string and pushes both through
/// [`set_items`](Model::set_items) and
/// [`set_highlight`](Model::set_highlight) whenever they change. Choosing
/// an entry (by Enter, [`select`](Model::select), or
/// [`click`](Model::click)) produces a command that delivers a
/// [`SelectedMsg`] through the runtime.
///
/// # Examples
///
/// ```rust
/// use bubbletea_quickaccess::list::{KeyValuePair, Model};
///
/// let items = vec![
///     KeyValuePair::new("AppComponent", "app.ts"),
///     KeyValuePair::new("NavComponent", "nav.ts"),
/// ];
/// let mut list = Model::new(items, 40, 8);
/// list.set_highlight("comp");
///
/// assert_eq!(list.selection(), 0);
/// assert_eq!(list.selected_item().unwrap().key, "AppComponent");
/// ```
pub struct Model<T> {
    pub(super) items: Vec<KeyValuePair<T>>,
    pub(super) highlight: String,
    pub(super) highlight_set: HashSet<char>,
    pub(super) selection: usize,
    /// Index of the first row currently shown in the viewport.
    pub(super) first_visible: usize,
    pub(super) width: usize,
    pub(super) height: usize,
    pub(super) styles: QuickAccessStyles,
    pub(super) keymap: QuickAccessKeyMap,
}

impl<T: Clone + Send + Sync + 'static> Model<T> {
    /// Creates a list with the given items and size.
    ///
    /// `width` is the row width in terminal cells; `height` is the number
    /// of rows the viewport can show at once. The selection starts at 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_quickaccess::list::{KeyValuePair, Model};
    ///
    /// let list = Model::new(vec![KeyValuePair::new("Open", 1u8)], 40, 8);
    /// assert_eq!(list.len(), 1);
    /// ```
    pub fn new(items: Vec<KeyValuePair<T>>, width: usize, height: usize) -> Self {
        Self {
            items,
            highlight: String::new(),
            highlight_set: HashSet::new(),
            selection: 0,
            first_visible: 0,
            width,
            height,
            styles: QuickAccessStyles::default(),
            keymap: QuickAccessKeyMap::default(),
        }
    }

    /// Sets the highlight string at construction time.
    pub fn with_highlight(mut self, highlight: &str) -> Self {
        self.set_highlight(highlight);
        self
    }

    /// Replaces the styles.
    pub fn with_styles(mut self, styles: QuickAccessStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replaces the key bindings.
    pub fn with_keymap(mut self, keymap: QuickAccessKeyMap) -> Self {
        self.keymap = keymap;
        self
    }

    /// Replaces the bound item sequence.
    ///
    /// The selection is kept when it still points at a populated slot and
    /// reset to 0 otherwise; the viewport is re-synced either way.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_quickaccess::list::{KeyValuePair, Model};
    ///
    /// let mut list = Model::new(
    ///     vec![
    ///         KeyValuePair::new("alpha", ()),
    ///         KeyValuePair::new("beta", ()),
    ///     ],
    ///     40,
    ///     8,
    /// );
    /// list.set_items(vec![KeyValuePair::new("gamma", ())]);
    /// assert_eq!(list.selection(), 0);
    /// ```
    pub fn set_items(&mut self, items: Vec<KeyValuePair<T>>) {
        self.items = items;
        if self.selection >= self.items.len() {
            self.selection = 0;
        }
        self.scroll_into_view();
    }

    /// Replaces the highlight string.
    ///
    /// Affects only how keys are rendered; the selection never moves.
    pub fn set_highlight(&mut self, highlight: &str) {
        self.highlight = highlight.to_string();
        self.highlight_set = highlight::char_set(highlight);
    }

    /// Resizes the widget and re-syncs the viewport.
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.scroll_into_view();
    }

    /// Sets the row width in terminal cells.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Sets the number of visible rows and re-syncs the viewport.
    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.scroll_into_view();
    }

    /// The current highlight string.
    pub fn highlight(&self) -> &str {
        &self.highlight
    }

    /// The bound items, in display order.
    pub fn items(&self) -> &[KeyValuePair<T>] {
        &self.items
    }

    /// The current selection index.
    ///
    /// Only meaningful while the list is non-empty; use
    /// [`selected_item`](Model::selected_item) to observe the populated
    /// state directly.
    pub fn selection(&self) -> usize {
        self.selection
    }

    /// The entry at the selection, or `None` when the list is empty.
    pub fn selected_item(&self) -> Option<&KeyValuePair<T>> {
        self.items.get(self.selection)
    }

    /// The number of bound items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the first row currently visible in the viewport.
    pub fn first_visible(&self) -> usize {
        self.first_visible
    }

    /// Emits a selection for the current entry, if one is populated.
    ///
    /// This is the programmatic Enter. Returns `None` when the list is
    /// empty.
    pub fn select(&self) -> Option<Cmd> {
        let item = self.items.get(self.selection)?.clone();
        Some(emit_selected(self.selection, item))
    }

    /// Handles a pointer press on a visible row.
    ///
    /// `row` is the row offset inside the widget's rendered area; the host
    /// maps pointer coordinates to it. A hit moves the selection to the
    /// clicked entry and returns its emission command; a miss (row below
    /// the last entry, or outside the viewport) returns `None`. A `Some`
    /// return means the press was consumed; the host should not run any
    /// outer click handling for it, such as close-on-outside-click.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_quickaccess::list::{KeyValuePair, Model};
    ///
    /// let mut list = Model::new(
    ///     vec![
    ///         KeyValuePair::new("alpha", ()),
    ///         KeyValuePair::new("beta", ()),
    ///     ],
    ///     40,
    ///     8,
    /// );
    /// assert!(list.click(1).is_some());
    /// assert_eq!(list.selection(), 1);
    /// assert!(list.click(5).is_none());
    /// ```
    pub fn click(&mut self, row: usize) -> Option<Cmd> {
        if row >= self.height.max(1) {
            return None;
        }
        let index = self.first_visible.checked_add(row)?;
        if index >= self.items.len() {
            return None;
        }
        self.selection = index;
        self.scroll_into_view();
        self.select()
    }
}

fn emit_selected<T: Clone + Send + Sync + 'static>(index: usize, item: KeyValuePair<T>) -> Cmd {
    tick(Duration::from_nanos(1), move |_| {
        Box::new(SelectedMsg {
            index,
            item: item.clone(),
        }) as Msg
    })
}
