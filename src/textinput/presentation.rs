//! Theme-driven visual parameters.

use super::model::Model;
use crate::theme::{ColorToken, TextSize, Theme};
use tracing::trace;

/// Visual parameters derived from appearance, height and state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Theme class name for the appearance.
    pub class_name: String,
    /// Text size for the height.
    pub text_size: TextSize,
    /// Border radius for the height, in pixels.
    pub border_radius: u16,
    /// Left and right padding, in pixels.
    pub padding_x: u16,
    /// Text color.
    pub color: ColorToken,
}

/// Horizontal padding for a control height: `round(height / 3.2)`.
///
/// ```rust
/// use bubbletea_textfield::textinput::horizontal_padding;
///
/// assert_eq!(horizontal_padding(32), 10);
/// assert_eq!(horizontal_padding(48), 15);
/// ```
pub fn horizontal_padding(height: u16) -> u16 {
    (f64::from(height) / 3.2).round() as u16
}

/// Derives the visual parameters of a control.
///
/// A disabled control always uses the muted color, whatever `color` says.
pub fn derive(
    theme: &dyn Theme,
    appearance: &str,
    height: u16,
    disabled: bool,
    color: Option<&ColorToken>,
) -> Presentation {
    let color = if disabled {
        ColorToken::Muted
    } else {
        color.cloned().unwrap_or_default()
    };

    Presentation {
        class_name: theme.class_name_for_appearance(appearance),
        text_size: theme.text_size_for_height(height),
        border_radius: theme.border_radius_for_height(height),
        padding_x: horizontal_padding(height),
        color,
    }
}

impl Model {
    /// Visual parameters for the current appearance, height and state.
    pub fn presentation(&self) -> Presentation {
        let p = derive(
            self.theme.as_ref(),
            &self.appearance,
            self.height,
            self.disabled,
            self.style.color.as_ref(),
        );
        trace!(
            class = %p.class_name,
            size = p.text_size.0,
            radius = p.border_radius,
            "derived presentation"
        );
        p
    }
}
