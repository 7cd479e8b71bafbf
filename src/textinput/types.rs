//! Core types for the textinput component.

use bubbletea_rs::Msg;
use std::fmt;

/// Clipboard paste message carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

/// The user action that produced a [`ChangeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKind {
    /// Typed characters.
    Insert,
    /// Text pasted from the clipboard.
    Paste,
    /// Deleted the character before the cursor.
    DeleteBackward,
    /// Deleted the character under the cursor.
    DeleteForward,
    /// Deleted the word before the cursor.
    DeleteWordBackward,
    /// Deleted everything before the cursor.
    DeleteBeforeCursor,
    /// Deleted everything after the cursor.
    DeleteAfterCursor,
}

/// A proposed edit of the field's text.
///
/// Controlled inputs pass this to their change handler and leave the value
/// untouched; uncontrolled inputs adopt `value` directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    /// Text after the edit.
    pub value: String,
    /// Text before the edit.
    pub previous: String,
    /// What the user did.
    pub kind: EditKind,
}

/// Called with every edit of a controlled input.
pub type ChangeHandler = Box<dyn FnMut(&ChangeEvent) + Send>;

/// Called when the clear icon of a controlled input is activated.
pub type ClearHandler = Box<dyn FnMut() + Send>;

/// Who owns the displayed value.
pub enum ValueMode {
    /// The caller supplies the value and applies edits itself.
    Controlled {
        /// Value to display.
        value: String,
        /// Receives every edit.
        on_change: ChangeHandler,
    },
    /// The input keeps its own value, seeded once from `initial`.
    Uncontrolled {
        /// Initial value.
        initial: String,
    },
}

impl ValueMode {
    /// Controlled mode with a value and change handler.
    pub fn controlled<F>(value: impl Into<String>, on_change: F) -> Self
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        ValueMode::Controlled {
            value: value.into(),
            on_change: Box::new(on_change),
        }
    }

    /// Uncontrolled mode seeded with `initial`.
    pub fn uncontrolled(initial: impl Into<String>) -> Self {
        ValueMode::Uncontrolled {
            initial: initial.into(),
        }
    }
}

impl Default for ValueMode {
    fn default() -> Self {
        ValueMode::uncontrolled("")
    }
}

impl fmt::Debug for ValueMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueMode::Controlled { value, .. } => f
                .debug_struct("Controlled")
                .field("value", value)
                .finish_non_exhaustive(),
            ValueMode::Uncontrolled { initial } => f
                .debug_struct("Uncontrolled")
                .field("initial", initial)
                .finish(),
        }
    }
}

/// Content state of an uncontrolled input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// No text.
    Empty,
    /// Some text.
    HasText,
}

/// What activating the clear icon does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearAction {
    /// Empty the input's own value.
    ResetValue,
    /// Call the caller's clear handler.
    InvokeOnClear,
}
