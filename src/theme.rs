//! Theme service for control styling.
//!
//! A [`Theme`] maps an appearance name and a control height to the concrete
//! tokens a control is drawn with: a class name, a text size and a border
//! radius. Heights and radii are in pixels; the terminal renderer converts
//! them to cells (see [`px_to_cells`]).
//!
//! The text field holds its theme as an `Arc<dyn Theme>`, so an application can
//! share one theme between many controls or swap in its own implementation.
//!
//! ```rust
//! use bubbletea_textfield::theme::{DefaultTheme, TextSize, Theme};
//!
//! let theme = DefaultTheme::new();
//! assert_eq!(theme.class_name_for_appearance("default"), "text-input--default");
//! assert_eq!(theme.text_size_for_height(32), TextSize(300));
//! assert_eq!(theme.border_radius_for_height(32), 3);
//! ```

use lipgloss_extras::lipgloss::AdaptiveColor;
use lipgloss_extras::prelude::*;

/// Number of pixels covered by one terminal column.
pub const PX_PER_CELL: f32 = 8.0;

/// Converts a pixel length to terminal columns, rounding to the nearest cell.
pub fn px_to_cells(px: u16) -> u16 {
    (f32::from(px) / PX_PER_CELL).round() as u16
}

/// Typographic size step, e.g. `TextSize(300)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TextSize(pub u16);

/// Named color used by controls. Resolved to a concrete color by
/// [`Theme::resolve_color`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum ColorToken {
    /// Regular text color.
    #[default]
    Default,
    /// Subdued text, used for disabled controls.
    Muted,
    /// Error color, used for invalid controls.
    Danger,
    /// Any lipgloss color string, e.g. `"#7D56F4"` or `"212"`.
    Custom(String),
}

impl From<&str> for ColorToken {
    fn from(s: &str) -> Self {
        match s {
            "default" => ColorToken::Default,
            "muted" => ColorToken::Muted,
            "danger" => ColorToken::Danger,
            other => ColorToken::Custom(other.to_string()),
        }
    }
}

/// Style lookups used by themed controls.
///
/// The three required methods must be pure: the same input always yields the
/// same output.
pub trait Theme: Send + Sync {
    /// Class name for an appearance such as `"default"` or `"primary"`.
    fn class_name_for_appearance(&self, appearance: &str) -> String;

    /// Text size for a control of the given height.
    fn text_size_for_height(&self, height: u16) -> TextSize;

    /// Border radius for a control of the given height.
    fn border_radius_for_height(&self, height: u16) -> u16;

    /// Base style for a class name returned by
    /// [`class_name_for_appearance`](Theme::class_name_for_appearance).
    fn appearance_style(&self, _class_name: &str) -> Style {
        Style::new()
    }

    /// Concrete terminal color for a token.
    fn resolve_color(&self, token: &ColorToken) -> Color {
        match token {
            ColorToken::Default => Color::from("#dddddd"),
            ColorToken::Muted => Color::from("#6B7280"),
            ColorToken::Danger => Color::from("#F87171"),
            ColorToken::Custom(c) => Color::from(c.as_str()),
        }
    }
}

/// The built-in theme.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl DefaultTheme {
    /// Creates the built-in theme.
    pub fn new() -> Self {
        Self
    }
}

impl Theme for DefaultTheme {
    fn class_name_for_appearance(&self, appearance: &str) -> String {
        format!("text-input--{}", appearance)
    }

    fn text_size_for_height(&self, height: u16) -> TextSize {
        if height <= 32 {
            TextSize(300)
        } else if height <= 40 {
            TextSize(400)
        } else {
            TextSize(500)
        }
    }

    fn border_radius_for_height(&self, height: u16) -> u16 {
        if height <= 40 {
            3
        } else {
            4
        }
    }

    fn appearance_style(&self, class_name: &str) -> Style {
        match class_name {
            "text-input--primary" => Style::new().border_foreground(AdaptiveColor {
                Light: "#7D56F4",
                Dark: "#AD8CFF",
            }),
            "text-input--none" => Style::new(),
            _ => Style::new().border_foreground(AdaptiveColor {
                Light: "#D1D5DB",
                Dark: "#4B5563",
            }),
        }
    }
}
