//! Core types for the quick-access list: the item pair and the outbound
//! selection message.

use std::fmt::Display;

/// One entry in the list: a displayed key label plus an opaque value.
///
/// The key is what the widget renders and highlights; the value is carried
/// through untouched and handed back to the host inside [`SelectedMsg`]
/// when the entry is chosen. Entries are identified by position, so
/// duplicate keys are fine.
///
/// # Examples
///
/// ```rust
/// use bubbletea_quickaccess::list::KeyValuePair;
///
/// let pair = KeyValuePair::new("Open file…", 42u32);
/// assert_eq!(pair.key, "Open file…");
/// assert_eq!(pair.value, 42);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValuePair<T> {
    /// The label rendered in the list.
    pub key: String,
    /// The opaque payload returned on selection.
    pub value: T,
}

impl<T> KeyValuePair<T> {
    /// Creates a new key/value pair.
    pub fn new(key: impl Into<String>, value: T) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

impl<T> Display for KeyValuePair<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}

/// Message delivered through the runtime when an entry is selected.
///
/// Emitted by [`Model::select`](super::Model::select),
/// [`Model::click`](super::Model::click), and the select key binding. The
/// item is cloned at emission time, so the message reflects the list state
/// as of the event that produced it even if the host replaces the items
/// afterwards.
///
/// # Examples
///
/// ```rust
/// use bubbletea_quickaccess::list::SelectedMsg;
///
/// fn handle(msg: &bubbletea_rs::Msg) -> Option<&str> {
///     msg.downcast_ref::<SelectedMsg<String>>()
///         .map(|sel| sel.item.key.as_str())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SelectedMsg<T> {
    /// Position of the chosen entry at the time of selection.
    pub index: usize,
    /// The chosen entry.
    pub item: KeyValuePair<T>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_display_is_key() {
        let pair = KeyValuePair::new("Banana", ());
        assert_eq!(pair.to_string(), "Banana");
    }

    #[test]
    fn test_duplicate_keys_allowed() {
        let a = KeyValuePair::new("dup", 1);
        let b = KeyValuePair::new("dup", 2);
        assert_eq!(a.key, b.key);
        assert_ne!(a, b);
    }
}
