//! Rendering for the textinput component.

use super::clear::ClearIcon;
use super::model::Model;
use crate::error::ConfigError;
use crate::icon::render_icon;
use crate::text::{render_text, TextProps, Width};

/// Declarative output of a text input: props for the typography primitive and
/// the optional clear icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// The field.
    pub text: TextProps,
    /// The clear icon, when shown.
    pub clear_icon: Option<ClearIcon>,
}

impl Model {
    /// Builds the declarative output for the current props and state.
    pub fn render(&self) -> Rendered {
        let p = self.presentation();
        let text = TextProps {
            theme_class: p.class_name,
            class_name: self.class_name.clone(),
            size: p.text_size,
            width: self.width,
            height: self.height,
            border_radius: p.border_radius,
            padding_left: p.padding_x,
            padding_right: p.padding_x,
            color: p.color,
            value: self.value().to_string(),
            placeholder: self.placeholder.clone(),
            spell_check: self.spell_check,
            required: self.required,
            disabled: self.disabled,
            invalid: self.invalid,
            caret: self.focus.then_some(self.pos),
            style: self.style.clone(),
        };

        Rendered {
            text,
            clear_icon: self.clear_icon(),
        }
    }

    /// Renders the input for the terminal.
    pub fn view(&self) -> String {
        let rendered = self.render();
        let icon = rendered
            .clear_icon
            .as_ref()
            .map(|c| render_icon(&c.props, self.theme.as_ref()));
        render_text(
            &rendered.text,
            self.theme.as_ref(),
            icon.as_deref(),
            self.available_width,
        )
    }

    /// Sets the container width in columns used for percentage and automatic
    /// widths.
    pub fn set_available_width(&mut self, cols: u16) {
        self.available_width = cols;
    }

    /// Sets the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = Some(placeholder.to_string());
    }

    /// Sets the theme appearance name.
    pub fn set_appearance(&mut self, appearance: &str) {
        self.appearance = appearance.to_string();
    }

    /// Sets the control width.
    pub fn set_width(&mut self, width: impl Into<Width>) {
        self.width = width.into();
    }

    /// Control height in pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Sets the control height in pixels.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidHeight`] for zero.
    pub fn set_height(&mut self, height: u16) -> Result<(), ConfigError> {
        if height == 0 {
            return Err(ConfigError::InvalidHeight);
        }
        self.height = height;
        Ok(())
    }

    /// Whether the input is disabled.
    pub fn disabled(&self) -> bool {
        self.disabled
    }

    /// Disables or enables the input.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Whether the input is flagged invalid.
    pub fn invalid(&self) -> bool {
        self.invalid
    }

    /// Flags the input as invalid.
    pub fn set_invalid(&mut self, invalid: bool) {
        self.invalid = invalid;
    }
}
