//! Type-safe key bindings.
//!
//! Bindings are assembled from options, mirroring the functional options
//! style used by the paginator's default key map:
//!
//! ```rust
//! use list_pager::key::{new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let next = new_binding(vec![
//!     with_keys_str(&["right", "l"]),
//!     with_help("→/l", "next page"),
//! ]);
//!
//! let msg = KeyMsg { key: KeyCode::Char('l'), modifiers: KeyModifiers::NONE };
//! assert!(next.matches(&msg));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key.
    pub code: KeyCode,
    /// Required modifiers.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Parses a key name such as `"left"`, `"pgdown"`, `"h"` or `"ctrl+n"`.
    ///
    /// Returns `None` for names that do not describe a key.
    pub fn parse(name: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut rest = name;
        loop {
            if let Some(r) = rest.strip_prefix("ctrl+") {
                modifiers |= KeyModifiers::CONTROL;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("alt+") {
                modifiers |= KeyModifiers::ALT;
                rest = r;
            } else if let Some(r) = rest.strip_prefix("shift+") {
                modifiers |= KeyModifiers::SHIFT;
                rest = r;
            } else {
                break;
            }
        }

        let code = match rest {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pgup" => KeyCode::PageUp,
            "pgdown" => KeyCode::PageDown,
            "enter" => KeyCode::Enter,
            "tab" => KeyCode::Tab,
            "esc" => KeyCode::Esc,
            "space" => KeyCode::Char(' '),
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => KeyCode::Char(c),
                    _ => return None,
                }
            }
        };
        Some(Self { code, modifiers })
    }

    fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        // Terminals report SHIFT inconsistently for printable characters.
        let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
        match self.code {
            KeyCode::Char(_) => (msg.modifiers & relevant) == (self.modifiers & relevant),
            _ => msg.modifiers == self.modifiers,
        }
    }
}

/// Help text attached to a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key label, e.g. `"←/h"`.
    pub key: String,
    /// Description, e.g. `"prev page"`.
    pub desc: String,
}

/// A set of keys that trigger one action.
#[derive(Debug, Clone)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    enabled: bool,
}

/// A functional option for [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut binding = Binding {
        keys: Vec::new(),
        help: Help::default(),
        enabled: true,
    };
    for opt in opts {
        opt(&mut binding);
    }
    binding
}

/// Sets the keys of a binding from key names. Unknown names are ignored.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let keys: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    Box::new(move |b: &mut Binding| b.keys = keys)
}

/// Sets the help text of a binding.
pub fn with_help(key: &str, desc: &str) -> BindingOpt {
    let help = Help {
        key: key.to_string(),
        desc: desc.to_string(),
    };
    Box::new(move |b: &mut Binding| b.help = help)
}

/// Starts the binding disabled.
pub fn with_disabled() -> BindingOpt {
    Box::new(|b: &mut Binding| b.enabled = false)
}

impl Binding {
    /// Returns true if the binding is enabled and one of its keys matches.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        self.enabled && self.keys.iter().any(|k| k.matches(msg))
    }

    /// The keys of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// The help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding currently reacts to keys.
    pub fn enabled(&self) -> bool {
        self.enabled
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }
}

/// Key maps expose their bindings for help views.
pub trait KeyMap {
    /// Bindings for a one-line help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings grouped in columns for an expanded help view.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyMsg {
        KeyMsg { key: code, modifiers }
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(KeyPress::parse("pgup").unwrap().code, KeyCode::PageUp);
        assert_eq!(KeyPress::parse("end").unwrap().code, KeyCode::End);
        assert_eq!(KeyPress::parse("x").unwrap().code, KeyCode::Char('x'));
        assert!(KeyPress::parse("nonsense").is_none());

        let ctrl = KeyPress::parse("ctrl+n").unwrap();
        assert_eq!(ctrl.code, KeyCode::Char('n'));
        assert_eq!(ctrl.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_binding_matches_modifiers() {
        let binding = new_binding(vec![with_keys_str(&["left", "ctrl+b"])]);

        assert!(binding.matches(&key(KeyCode::Left, KeyModifiers::NONE)));
        assert!(binding.matches(&key(KeyCode::Char('b'), KeyModifiers::CONTROL)));
        assert!(!binding.matches(&key(KeyCode::Char('b'), KeyModifiers::NONE)));
        assert!(!binding.matches(&key(KeyCode::Left, KeyModifiers::ALT)));
    }

    #[test]
    fn test_disabled_binding_never_matches() {
        let mut binding = new_binding(vec![with_keys_str(&["l"]), with_disabled()]);
        assert!(!binding.matches(&key(KeyCode::Char('l'), KeyModifiers::NONE)));

        binding.set_enabled(true);
        assert!(binding.matches(&key(KeyCode::Char('l'), KeyModifiers::NONE)));
    }

    #[test]
    fn test_help_text() {
        let binding = new_binding(vec![with_help("→/l", "next page")]);
        assert_eq!(binding.help().key, "→/l");
        assert_eq!(binding.help().desc, "next page");
        assert!(binding.keys().is_empty());
    }
}
