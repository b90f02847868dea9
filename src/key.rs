//! Type-safe key bindings for quick-access components.
//!
//! A [`Binding`] groups one or more key presses under a single logical
//! action, together with the help text shown for it. Bindings can be built
//! directly with [`Binding::new`] or through the option-style constructors
//! ([`new_binding`], [`with_keys_str`], [`with_help`]) when a more
//! declarative setup reads better.
//!
//! # Examples
//!
//! ```rust
//! use bubbletea_quickaccess::key::{self, Binding};
//! use crossterm::event::KeyCode;
//!
//! // Direct construction
//! let confirm = Binding::new(vec![KeyCode::Enter]).with_help("enter", "confirm");
//!
//! // Option-style construction
//! let up = key::new_binding(vec![
//!     key::with_keys_str(&["up"]),
//!     key::with_help("↑", "move up"),
//! ]);
//! assert!(up.enabled());
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key press: a key code plus its modifier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    /// The key code of the press.
    pub code: KeyCode,
    /// Modifiers held during the press.
    pub mods: KeyModifiers,
}

impl From<KeyCode> for KeyPress {
    fn from(code: KeyCode) -> Self {
        Self {
            code,
            mods: KeyModifiers::NONE,
        }
    }
}

impl From<(KeyCode, KeyModifiers)> for KeyPress {
    fn from((code, mods): (KeyCode, KeyModifiers)) -> Self {
        Self { code, mods }
    }
}

/// Help text for a binding: the key label and what it does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"↑/k"`.
    pub key: String,
    /// Action description, e.g. `"move up"`.
    pub desc: String,
}

/// A set of key presses mapped to one logical action.
///
/// A binding with no keys, or one that has been disabled, never matches.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    /// Help text displayed for this binding.
    pub help: Help,
    disabled: bool,
}

impl Binding {
    /// Creates a binding from key codes or `(code, modifiers)` pairs.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_quickaccess::key::Binding;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let select = Binding::new(vec![KeyCode::Enter]);
    /// let save = Binding::new(vec![(KeyCode::Char('s'), KeyModifiers::CONTROL)]);
    /// assert!(select.enabled() && save.enabled());
    /// ```
    pub fn new<K: Into<KeyPress>>(keys: Vec<K>) -> Self {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            help: Help::default(),
            disabled: false,
        }
    }

    /// Sets the help text, returning the binding for chaining.
    pub fn with_help(mut self, key: &str, desc: &str) -> Self {
        self.help = Help {
            key: key.to_string(),
            desc: desc.to_string(),
        };
        self
    }

    /// The key presses this binding responds to.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Whether this binding can currently match.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding without losing its keys.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }

    /// Removes all keys and help, leaving the binding inert.
    pub fn unbind(&mut self) {
        self.keys.clear();
        self.help = Help::default();
    }

    /// Reports whether the given key message triggers this binding.
    ///
    /// Modifiers must match exactly, except that SHIFT is ignored for
    /// character keys (terminals report shifted characters both ways).
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.iter().any(|kp| press_matches(kp, msg))
    }
}

fn press_matches(kp: &KeyPress, msg: &KeyMsg) -> bool {
    if kp.code != msg.key {
        return false;
    }
    let mut got = msg.modifiers;
    let mut want = kp.mods;
    if matches!(kp.code, KeyCode::Char(_)) {
        got.remove(KeyModifiers::SHIFT);
        want.remove(KeyModifiers::SHIFT);
    }
    got == want
}

/// An option applied to a [`Binding`] under construction by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
///
/// # Examples
///
/// ```rust
/// use bubbletea_quickaccess::key;
///
/// let quit = key::new_binding(vec![
///     key::with_keys_str(&["q", "ctrl+c"]),
///     key::with_help("q", "quit"),
/// ]);
/// assert_eq!(quit.keys().len(), 2);
/// ```
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding::default();
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Option: set the binding's keys from string names.
///
/// Recognizes named keys (`"up"`, `"enter"`, `"esc"`, `"tab"`, `"space"`,
/// `"pgup"`, ...), single characters, and `ctrl+`/`alt+`/`shift+` prefixes.
/// Unrecognized names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|s| parse_key(s)).collect();
    Box::new(move |b| b.keys = parsed)
}

/// Option: set the binding's keys from already-built presses.
pub fn with_keys(keys: Vec<KeyPress>) -> BindingOpt {
    Box::new(move |b| b.keys = keys)
}

/// Option: set the binding's help text.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b| b.help = help)
}

/// Option: start the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b| b.disabled = true)
}

fn parse_key(s: &str) -> Option<KeyPress> {
    let mut mods = KeyModifiers::NONE;
    let mut rest = s;
    loop {
        if let Some(r) = rest.strip_prefix("ctrl+") {
            mods |= KeyModifiers::CONTROL;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt+") {
            mods |= KeyModifiers::ALT;
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift+") {
            mods |= KeyModifiers::SHIFT;
            rest = r;
        } else {
            break;
        }
    }
    let code = match rest {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "insert" => KeyCode::Insert,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pgup" => KeyCode::PageUp,
        "pgdown" => KeyCode::PageDown,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(KeyPress { code, mods })
}

/// Reports whether the key message triggers any of the given bindings.
pub fn matches(msg: &KeyMsg, bindings: &[&Binding]) -> bool {
    bindings.iter().any(|b| b.matches(msg))
}

/// Reports whether the key message triggers the given binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.matches(msg)
}

/// Key bindings a component exposes for help displays.
///
/// `short_help` returns the bindings for a compact one-line help view;
/// `full_help` returns columns of related bindings for an expanded view.
pub trait KeyMap {
    /// Bindings for the compact help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Binding columns for the expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
