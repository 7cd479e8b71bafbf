#![warn(missing_docs)]

//! # bubbletea-textfield
//!
//! A themeable text field for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications, styled with Lip Gloss.
//!
//! ## Overview
//!
//! The text field follows the Elm Architecture pattern with `update()` and
//! `view()` methods. On top of the usual single-line editing it offers:
//!
//! - **Controlled and uncontrolled value modes**, chosen explicitly at
//!   construction with [`ValueMode`]
//! - **An optional clear icon** whose behavior follows the value mode
//! - **Validation-state styling** for invalid and disabled fields
//! - **Theme-driven sizing**: class name, text size, border radius and padding
//!   are derived from the control height through a pluggable [`Theme`]
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_textfield::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     search: TextInput,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut search = TextInputProps::new()
//!             .placeholder("Search...")
//!             .clearable(true)
//!             .build()
//!             .expect("valid text input configuration");
//!         let cmd = search.focus();
//!         (Self { search }, cmd)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.search.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         self.search.view()
//!     }
//! }
//! ```
//!
//! ## Controlled inputs
//!
//! A controlled input never changes its own value. Edits arrive at the change
//! handler as [`ChangeEvent`]s and the application decides what to show:
//!
//! ```rust
//! use bubbletea_textfield::prelude::*;
//! use std::sync::{Arc, Mutex};
//!
//! let latest = Arc::new(Mutex::new(String::new()));
//! let sink = Arc::clone(&latest);
//!
//! let mut input = TextInputProps::new()
//!     .value("", move |e: &ChangeEvent| *sink.lock().unwrap() = e.value.to_uppercase())
//!     .build()
//!     .unwrap();
//!
//! input.focus();
//! input.update(Box::new(bubbletea_rs::KeyMsg {
//!     key: crossterm::event::KeyCode::Char('a'),
//!     modifiers: crossterm::event::KeyModifiers::NONE,
//! }));
//! let accepted = latest.lock().unwrap().clone();
//! input.set_value(accepted);
//! assert_eq!(input.value(), "A");
//! ```

pub mod error;
pub mod icon;
pub mod key;
pub mod text;
pub mod textinput;
pub mod theme;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - `focus()` sets the focused state and may return a command for the
///   runtime
/// - `blur()` clears the focused state
/// - `focused()` reports the current state
///
/// ```rust
/// use bubbletea_textfield::prelude::*;
///
/// let mut input = TextInput::default();
/// assert!(!input.focused());
///
/// input.focus();
/// assert!(input.focused());
///
/// input.blur();
/// assert!(!input.focused());
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use error::{ConfigError, ValidationError};
pub use icon::{IconName, IconProps};
pub use key::{matches_binding, new_binding, with_help, with_keys_str, Binding, KeyMap, KeyPress};
pub use text::{StyleProps, TextProps, Width};
pub use textinput::{
    default_key_map as textinput_default_key_map, new as textinput_new, paste, ChangeEvent,
    ClearAction, EditKind, FieldState, KeyMap as TextInputKeyMap, Model as TextInput, PasteErrMsg,
    PasteMsg, Props as TextInputProps, Rendered, ValueMode,
};
pub use theme::{ColorToken, DefaultTheme, TextSize, Theme};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_textfield::prelude::*;
///
/// let input: TextInput = TextInputProps::new().build().unwrap();
/// assert_eq!(input.value(), "");
/// ```
pub mod prelude {
    pub use crate::error::{ConfigError, ValidationError};
    pub use crate::key::{matches_binding, new_binding, with_help, with_keys_str, Binding, KeyMap};
    pub use crate::text::{StyleProps, Width};
    pub use crate::textinput::{
        new as textinput_new, ChangeEvent, ClearAction, EditKind, FieldState,
        KeyMap as TextInputKeyMap, Model as TextInput, Props as TextInputProps, ValueMode,
    };
    pub use crate::theme::{ColorToken, DefaultTheme, Theme};
    pub use crate::Component;
}
