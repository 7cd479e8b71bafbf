//! Type-safe key bindings.
//!
//! Bindings are built from human readable key strings such as `"ctrl+a"` or
//! `"alt+backspace"` and matched against the `KeyMsg` values delivered by the
//! bubbletea-rs runtime.
//!
//! ```rust
//! use bubbletea_textfield::key::{matches_binding, new_binding, with_help, with_keys_str};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let clear = new_binding(vec![with_keys_str(&["ctrl+l"]), with_help("ctrl+l", "clear")]);
//! let msg = KeyMsg { key: KeyCode::Char('l'), modifiers: KeyModifiers::CONTROL };
//! assert!(matches_binding(&msg, &clear));
//! ```

use bubbletea_rs::KeyMsg;
use crossterm::event::{KeyCode, KeyModifiers};

/// A single key combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    /// The key itself.
    pub code: KeyCode,
    /// Modifiers that must be held.
    pub modifiers: KeyModifiers,
}

impl KeyPress {
    /// Parses a key string like `"ctrl+w"`, `"alt+delete"` or `"home"`.
    ///
    /// Returns `None` for unknown key names.
    pub fn parse(s: &str) -> Option<Self> {
        let mut modifiers = KeyModifiers::NONE;
        let mut parts: Vec<&str> = s.split('+').collect();
        let name = parts.pop()?;

        for m in parts {
            match m {
                "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }

        let code = match name {
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "backspace" => KeyCode::Backspace,
            "delete" => KeyCode::Delete,
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

    /// Whether the key message is this key combination.
    ///
    /// Shift is ignored for character keys since it is already encoded in the
    /// character's case.
    pub fn matches(&self, msg: &KeyMsg) -> bool {
        if self.code != msg.key {
            return false;
        }
        match self.code {
            KeyCode::Char(_) => {
                let strip = |m: KeyModifiers| m - KeyModifiers::SHIFT;
                strip(self.modifiers) == strip(msg.modifiers)
            }
            _ => self.modifiers == msg.modifiers,
        }
    }
}

/// Help text for a binding.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Help {
    /// Short key description, e.g. `"ctrl+l"`.
    pub key: String,
    /// What the binding does.
    pub desc: String,
}

/// A set of key combinations bound to one action.
#[derive(Debug, Clone, Default)]
pub struct Binding {
    keys: Vec<KeyPress>,
    help: Help,
    disabled: bool,
}

/// Option applied by [`new_binding`].
pub type BindingOpt = Box<dyn FnOnce(&mut Binding)>;

/// Builds a binding from a list of options.
pub fn new_binding(opts: Vec<BindingOpt>) -> Binding {
    let mut b = Binding::default();
    for opt in opts {
        opt(&mut b);
    }
    b
}

/// Sets the keys of a binding from key strings. Unknown names are skipped.
pub fn with_keys_str(keys: &[&str]) -> BindingOpt {
    let parsed: Vec<KeyPress> = keys.iter().filter_map(|k| KeyPress::parse(k)).collect();
    Box::new(move |b: &mut Binding| b.keys = parsed)
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
    Box::new(|b: &mut Binding| b.disabled = true)
}

impl Binding {
    /// Key combinations of this binding.
    pub fn keys(&self) -> &[KeyPress] {
        &self.keys
    }

    /// Help text of this binding.
    pub fn help(&self) -> &Help {
        &self.help
    }

    /// Whether the binding responds to key presses.
    pub fn enabled(&self) -> bool {
        !self.disabled && !self.keys.is_empty()
    }

    /// Enables or disables the binding.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.disabled = !enabled;
    }
}

/// Reports whether a key message triggers an enabled binding.
pub fn matches_binding(msg: &KeyMsg, binding: &Binding) -> bool {
    binding.enabled() && binding.keys.iter().any(|k| k.matches(msg))
}

/// Key maps expose their bindings for help rendering.
pub trait KeyMap {
    /// Bindings shown in the compact help view.
    fn short_help(&self) -> Vec<&Binding>;
    /// Bindings shown in the expanded help view, grouped in columns.
    fn full_help(&self) -> Vec<Vec<&Binding>>;
}
