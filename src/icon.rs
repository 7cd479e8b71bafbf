//! Icon primitive.

use crate::theme::{ColorToken, Theme};
use lipgloss_extras::prelude::*;

/// Icons available to controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconName {
    /// Cross, used for clearing.
    Cross,
}

impl IconName {
    /// Terminal glyph for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            IconName::Cross => "✕",
        }
    }
}

/// Attributes of a rendered icon.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconProps {
    /// Which icon to draw.
    pub icon: IconName,
    /// Icon color.
    pub color: ColorToken,
    /// Icon appearance. `"default"` draws plain, anything else is emphasized.
    pub appearance: String,
    /// Horizontal offset from the preceding element, in pixels. Negative
    /// values pull the icon into the element before it.
    pub margin_left: i16,
}

/// Draws an icon.
pub fn render_icon(props: &IconProps, theme: &dyn Theme) -> String {
    Style::new()
        .foreground(theme.resolve_color(&props.color))
        .bold(props.appearance != "default")
        .inline(true)
        .render(props.icon.glyph())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::DefaultTheme;

    #[test]
    fn test_render_icon_glyph() {
        let props = IconProps {
            icon: IconName::Cross,
            color: ColorToken::Muted,
            appearance: "default".to_string(),
            margin_left: -20,
        };
        let out = render_icon(&props, &DefaultTheme::new());
        assert!(out.contains("✕"));
    }
}
