//! Key bindings and the `KeyMap` trait shared by the grid and its paginator.
//!
//! A [`Binding`] groups the key codes that trigger one user intent together
//! with the short help text shown for it. Components expose their bindings
//! through [`KeyMap`] so a help view can list them.
//!
//! ```rust
//! use bubbletea_datagrid::key::Binding;
//! use crossterm::event::KeyCode;
//!
//! let next = Binding::new(vec![KeyCode::Right, KeyCode::Char('l')])
//!     .with_help("→/l", "next page");
//! assert_eq!(next.help().key, "→/l");
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::KeyCode;

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Human readable key label, e.g. `"←/h"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of keys that trigger the same action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyCode>,
    help: Help,
    enabled: bool,
}

impl Binding {
    /// Creates an enabled binding for the given key codes with empty help.
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self {
            keys,
            help: Help::default(),
            enabled: true,
        }
    }

    /// Attaches help text (builder pattern).
    pub fn with_help(mut self, key: impl Into<String>, desc: impl Into<String>) -> Self {
        self.help = Help {
            key: key.into(),
            desc: desc.into(),
        };
        self
    }

    /// Key codes this binding responds to.
    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// Help text for this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding currently responds to input.
    pub fn enabled(&self) -> bool {
        self.enabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Returns true if the key message triggers this binding.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled() && self.keys.contains(&msg.key)
    }
}

/// Implemented by components that expose key bindings for help rendering.
pub trait KeyMap {
    /// The few bindings shown in a one-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// All bindings, grouped into columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_matches_any_listed_key() {
        let b = Binding::new(vec![KeyCode::Left, KeyCode::Char('h')]);
        assert!(b.matches(&key(KeyCode::Left)));
        assert!(b.matches(&key(KeyCode::Char('h'))));
        assert!(!b.matches(&key(KeyCode::Right)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut b = Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear");
        b.set_enabled(false);
        assert!(!b.matches(&key(KeyCode::Esc)));
        assert!(!Binding::new(vec![]).enabled());
    }
}
