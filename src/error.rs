//! Error types for text field construction and form validation.

use thiserror::Error;

/// Rejected text field configuration.
///
/// Returned by [`crate::textinput::new`] and by runtime setters that re-check
/// the configuration, such as
/// [`Model::set_clearable`](crate::textinput::Model::set_clearable).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A clearable controlled input has no clear handler. The caller owns the
    /// value, so without a handler the clear icon could never do anything.
    #[error("controlled clearable input requires an on_clear handler")]
    MissingClearHandler,

    /// The width could not be parsed.
    #[error("invalid width {0:?}: expected pixels, a percentage, or \"auto\"")]
    InvalidWidth(String),

    /// The control height must be at least one pixel.
    #[error("control height must be greater than zero")]
    InvalidHeight,
}

/// Form validation failure reported by
/// [`Model::validate`](crate::textinput::Model::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The field is marked required but the displayed value is empty.
    #[error("this field is required")]
    Required,
}
