//! Themeable text input component for Bubble Tea applications.
//!
//! The input supports two value modes, chosen once at construction:
//!
//! - **Uncontrolled** ([`Props::default_value`]): the input stores its own
//!   value and applies edits itself.
//! - **Controlled** ([`Props::value`]): the caller stores the value. Each edit
//!   is reported as a [`ChangeEvent`] and the caller pushes the accepted value
//!   back with [`Model::set_value`].
//!
//! Sizing, border radius and class name come from a [`Theme`](crate::theme::Theme);
//! horizontal padding is derived from the height as `round(height / 3.2)`.
//!
//! # Basic Usage
//!
//! ```rust
//! use bubbletea_textfield::textinput::{Props, Width};
//!
//! let input = Props::new()
//!     .placeholder("Enter your name...")
//!     .width(Width::Px(200))
//!     .build()
//!     .unwrap();
//! assert!(input.view().contains("Enter your name"));
//! ```
//!
//! # Clear icon
//!
//! With [`Props::clearable`] the input shows a clear icon while it has text.
//! An uncontrolled input clears itself; a controlled input calls the handler
//! given to [`Props::on_clear`], which is mandatory in that combination:
//!
//! ```rust
//! use bubbletea_textfield::textinput::Props;
//! use bubbletea_textfield::ConfigError;
//!
//! let err = Props::new().value("x", |_| {}).clearable(true).build().err();
//! assert_eq!(err, Some(ConfigError::MissingClearHandler));
//! ```

pub mod clear;
pub mod editing;
pub mod keymap;
pub mod model;
pub mod presentation;
pub mod props;
pub mod types;
pub mod value;
pub mod view;

#[cfg(test)]
mod tests;

pub use crate::text::{StyleProps, Width};
pub use clear::ClearIcon;
pub use keymap::{default_key_map, KeyMap};
pub use model::{new, paste, Model};
pub use presentation::{derive, horizontal_padding, Presentation};
pub use props::{Props, DEFAULT_APPEARANCE, DEFAULT_HEIGHT};
pub use types::{
    ChangeEvent, ChangeHandler, ClearAction, ClearHandler, EditKind, FieldState, PasteErrMsg,
    PasteMsg, ValueMode,
};
pub use view::Rendered;
