//! Construction-time configuration for the textinput component.

use super::model::{new, Model};
use super::types::{ChangeEvent, ClearHandler, ValueMode};
use crate::error::ConfigError;
use crate::text::{StyleProps, Width};
use crate::theme::{ColorToken, DefaultTheme, Theme};
use std::sync::Arc;

/// Default control height in pixels.
pub const DEFAULT_HEIGHT: u16 = 32;

/// Default appearance name.
pub const DEFAULT_APPEARANCE: &str = "default";

/// Configuration of a text input.
///
/// Every field is optional and has the default listed on its setter. Build a
/// model with [`Props::build`] or [`new`](super::new).
///
/// ```rust
/// use bubbletea_textfield::textinput::Props;
///
/// let input = Props::new()
///     .placeholder("Search...")
///     .clearable(true)
///     .height(40)
///     .default_value("rust")
///     .build()
///     .unwrap();
///
/// assert_eq!(input.value(), "rust");
/// ```
pub struct Props {
    pub(super) required: bool,
    pub(super) disabled: bool,
    pub(super) is_invalid: bool,
    pub(super) is_clearable: bool,
    pub(super) on_clear: Option<ClearHandler>,
    pub(super) spell_check: bool,
    pub(super) placeholder: Option<String>,
    pub(super) appearance: String,
    pub(super) width: Width,
    pub(super) height: u16,
    pub(super) mode: ValueMode,
    pub(super) class_name: Option<String>,
    pub(super) style: StyleProps,
    pub(super) theme: Arc<dyn Theme>,
}

impl Default for Props {
    fn default() -> Self {
        Self {
            required: false,
            disabled: false,
            is_invalid: false,
            is_clearable: false,
            on_clear: None,
            spell_check: true,
            placeholder: None,
            appearance: DEFAULT_APPEARANCE.to_string(),
            width: Width::default(),
            height: DEFAULT_HEIGHT,
            mode: ValueMode::default(),
            class_name: None,
            style: StyleProps::default(),
            theme: Arc::new(DefaultTheme::new()),
        }
    }
}

impl Props {
    /// Default configuration: uncontrolled, empty, 280 x 32 px.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field mandatory. Default `false`.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Disables interaction and mutes the text color. Default `false`.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Flags the value as invalid. Default `false`.
    pub fn invalid(mut self, invalid: bool) -> Self {
        self.is_invalid = invalid;
        self
    }

    /// Enables the clear icon. Default `false`.
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.is_clearable = clearable;
        self
    }

    /// Handler for the clear icon of a controlled input.
    pub fn on_clear<F>(mut self, on_clear: F) -> Self
    where
        F: FnMut() + Send + 'static,
    {
        self.on_clear = Some(Box::new(on_clear));
        self
    }

    /// Spell checking hint. Default `true`.
    pub fn spell_check(mut self, spell_check: bool) -> Self {
        self.spell_check = spell_check;
        self
    }

    /// Text shown while the value is empty.
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Theme appearance name. Default `"default"`.
    pub fn appearance(mut self, appearance: impl Into<String>) -> Self {
        self.appearance = appearance.into();
        self
    }

    /// Control width. Default 280 px.
    pub fn width(mut self, width: impl Into<Width>) -> Self {
        self.width = width.into();
        self
    }

    /// Control width from a string such as `"280px"`, `"50%"` or `"auto"`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidWidth`] when the string is not a width.
    pub fn try_width(self, width: &str) -> Result<Self, ConfigError> {
        Ok(self.width(Width::try_from(width)?))
    }

    /// Control height in pixels. Default 32.
    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }

    /// Makes the input controlled: it displays `value` and reports edits to
    /// `on_change` instead of applying them. Replaces any earlier
    /// [`default_value`](Props::default_value).
    pub fn value<F>(mut self, value: impl Into<String>, on_change: F) -> Self
    where
        F: FnMut(&ChangeEvent) + Send + 'static,
    {
        self.mode = ValueMode::controlled(value, on_change);
        self
    }

    /// Makes the input uncontrolled with the given initial value. Replaces
    /// any earlier [`value`](Props::value).
    pub fn default_value(mut self, initial: impl Into<String>) -> Self {
        self.mode = ValueMode::uncontrolled(initial);
        self
    }

    /// Sets the value mode directly.
    pub fn mode(mut self, mode: ValueMode) -> Self {
        self.mode = mode;
        self
    }

    /// Extra class name appended to the theme's.
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Passthrough styling.
    pub fn style(mut self, style: StyleProps) -> Self {
        self.style = style;
        self
    }

    /// Text color. Overridden by the muted color while disabled.
    pub fn color(mut self, color: impl Into<ColorToken>) -> Self {
        self.style.color = Some(color.into());
        self
    }

    /// Theme used for style lookups. Default [`DefaultTheme`].
    pub fn theme(mut self, theme: Arc<dyn Theme>) -> Self {
        self.theme = theme;
        self
    }

    /// Checks the configuration for contradictions.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidHeight`] for a zero height.
    /// - [`ConfigError::MissingClearHandler`] for a clearable controlled input
    ///   without an `on_clear` handler.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.height == 0 {
            return Err(ConfigError::InvalidHeight);
        }
        let controlled = matches!(self.mode, ValueMode::Controlled { .. });
        if self.is_clearable && controlled && self.on_clear.is_none() {
            return Err(ConfigError::MissingClearHandler);
        }
        Ok(())
    }

    /// Validates the configuration and builds the input.
    pub fn build(self) -> Result<Model, ConfigError> {
        new(self)
    }
}
