//! Typography primitive for single-line controls.
//!
//! [`TextProps`] is the attribute set a control hands to the primitive, and
//! [`render_text`] draws it as a bordered lipgloss box. All lengths in the
//! props are pixels; they are mapped to terminal cells at render time.

use crate::error::ConfigError;
use crate::theme::{px_to_cells, ColorToken, TextSize, Theme};
use lipgloss_extras::lipgloss;
use lipgloss_extras::prelude::*;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use unicode_width::UnicodeWidthChar;

/// Columns used when a relative width has no known container width.
pub const DEFAULT_AVAILABLE_COLS: u16 = 80;

/// Width of a control.
///
/// Parses from plain numbers and CSS-like strings:
///
/// ```rust
/// use bubbletea_textfield::text::Width;
///
/// assert_eq!("280".parse::<Width>().unwrap(), Width::Px(280));
/// assert_eq!("120px".parse::<Width>().unwrap(), Width::Px(120));
/// assert_eq!("50%".parse::<Width>().unwrap(), Width::Percent(50));
/// assert_eq!("auto".parse::<Width>().unwrap(), Width::Auto);
/// assert!("wide".parse::<Width>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    /// Fixed width in pixels.
    Px(u16),
    /// Percentage of the container width, 0 to 100.
    Percent(u8),
    /// Fill the container width.
    Auto,
}

impl Default for Width {
    fn default() -> Self {
        Width::Px(280)
    }
}

impl From<u16> for Width {
    fn from(px: u16) -> Self {
        Width::Px(px)
    }
}

impl TryFrom<&str> for Width {
    type Error = ConfigError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl FromStr for Width {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let invalid = || ConfigError::InvalidWidth(s.to_string());

        if s == "auto" {
            return Ok(Width::Auto);
        }
        if let Some(pct) = s.strip_suffix('%') {
            let pct: u8 = pct.trim().parse().map_err(|_| invalid())?;
            if pct > 100 {
                return Err(invalid());
            }
            return Ok(Width::Percent(pct));
        }
        let px = s.strip_suffix("px").unwrap_or(s).trim();
        px.parse::<u16>().map(Width::Px).map_err(|_| invalid())
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Width::Px(px) => write!(f, "{}px", px),
            Width::Percent(p) => write!(f, "{}%", p),
            Width::Auto => write!(f, "auto"),
        }
    }
}

impl Width {
    /// Resolves the width to terminal columns inside a container of
    /// `available` columns.
    pub fn to_cells(self, available: u16) -> u16 {
        match self {
            Width::Px(px) => px_to_cells(px),
            Width::Percent(p) => ((u32::from(available) * u32::from(p)) / 100) as u16,
            Width::Auto => available,
        }
    }
}

/// Passthrough styling attributes.
///
/// Only the named fields affect rendering. `attributes` is forwarded as-is so
/// hosts can attach their own metadata to the rendered props.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleProps {
    /// Text color. Ignored while the control is disabled.
    pub color: Option<ColorToken>,
    /// Background color, any lipgloss color string.
    pub background: Option<String>,
    /// Outer margin in pixels: top, right, bottom, left.
    pub margin: (u16, u16, u16, u16),
    /// Free-form attributes.
    pub attributes: BTreeMap<String, String>,
}

/// Everything the typography primitive needs to draw a single-line control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextProps {
    /// Class name from the theme.
    pub theme_class: String,
    /// Extra class name supplied by the caller.
    pub class_name: Option<String>,
    /// Text size token.
    pub size: TextSize,
    /// Control width.
    pub width: Width,
    /// Control height in pixels.
    pub height: u16,
    /// Border radius in pixels. Zero draws square corners.
    pub border_radius: u16,
    /// Left padding in pixels.
    pub padding_left: u16,
    /// Right padding in pixels.
    pub padding_right: u16,
    /// Text color token.
    pub color: ColorToken,
    /// Displayed value.
    pub value: String,
    /// Shown when `value` is empty.
    pub placeholder: Option<String>,
    /// Native spell checking hint.
    pub spell_check: bool,
    /// Marks the field mandatory.
    pub required: bool,
    /// Disables interaction.
    pub disabled: bool,
    /// Invalid state for assistive technology and error styling.
    pub invalid: bool,
    /// Caret position in characters, when the control has focus.
    pub caret: Option<usize>,
    /// Passthrough styling.
    pub style: StyleProps,
}

impl TextProps {
    /// Space separated list of all class names.
    pub fn class_list(&self) -> String {
        match &self.class_name {
            Some(extra) if !extra.is_empty() => format!("{} {}", self.theme_class, extra),
            _ => self.theme_class.clone(),
        }
    }
}

/// Draws `props` as a bordered box.
///
/// `suffix` is pre-rendered content pinned to the right edge inside the box,
/// such as an icon. `available` is the container width in columns used for
/// relative widths.
pub fn render_text(
    props: &TextProps,
    theme: &dyn Theme,
    suffix: Option<&str>,
    available: u16,
) -> String {
    let outer = props.width.to_cells(available).max(4);
    let pad_left = px_to_cells(props.padding_left);
    let pad_right = px_to_cells(props.padding_right);
    // Two columns go to the border.
    let inner = outer.saturating_sub(2);
    let suffix_width = suffix.map(|s| lipgloss::width_visible(s) as u16 + 1).unwrap_or(0);
    let content_width = inner
        .saturating_sub(pad_left + pad_right)
        .saturating_sub(suffix_width) as usize;

    let text_style = Style::new()
        .foreground(theme.resolve_color(&props.color))
        .bold(props.size >= TextSize(500))
        .inline(true);

    let content = if props.value.is_empty() {
        placeholder_line(props, theme, content_width)
    } else {
        value_line(props, &text_style, content_width)
    };

    let mut line = content;
    if let Some(s) = suffix {
        line.push(' ');
        line.push_str(s);
    }

    let border = if props.border_radius > 0 {
        lipgloss::rounded_border()
    } else {
        lipgloss::normal_border()
    };

    let mut style = theme
        .appearance_style(&props.theme_class)
        .border_style(border)
        .width(inner as i32)
        .padding(0, pad_right as i32, 0, pad_left as i32);

    if props.invalid {
        style = style.border_foreground(theme.resolve_color(&ColorToken::Danger));
    }
    if props.disabled {
        style = style.faint(true);
    }
    if let Some(bg) = &props.style.background {
        style = style.background(Color::from(bg.as_str()));
    }
    let (mt, mr, mb, ml) = props.style.margin;
    if (mt, mr, mb, ml) != (0, 0, 0, 0) {
        style = style.margin(
            px_to_cells(mt) as i32,
            px_to_cells(mr) as i32,
            px_to_cells(mb) as i32,
            px_to_cells(ml) as i32,
        );
    }

    style.render(&line)
}

fn placeholder_line(props: &TextProps, theme: &dyn Theme, width: usize) -> String {
    let placeholder = props.placeholder.as_deref().unwrap_or("");
    let shown = fit(placeholder.chars(), width);
    let muted = Style::new()
        .foreground(theme.resolve_color(&ColorToken::Muted))
        .inline(true);

    match props.caret {
        Some(_) => {
            let mut chars = shown.chars();
            let first = chars.next().unwrap_or(' ');
            let rest: String = chars.collect();
            format!("{}{}", caret_style().render(&first.to_string()), muted.render(&rest))
        }
        None => muted.render(&shown),
    }
}

fn value_line(props: &TextProps, text_style: &Style, width: usize) -> String {
    let chars: Vec<char> = props.value.chars().collect();
    let Some(pos) = props.caret.map(|p| p.min(chars.len())) else {
        return text_style.render(&fit(chars.iter().copied(), width));
    };

    // Scroll so the caret cell stays visible.
    let mut start = 0;
    while start < pos && span_width(&chars[start..pos]) + 1 > width {
        start += 1;
    }

    let before: String = chars[start..pos].iter().collect();
    let under = chars.get(pos).copied().unwrap_or(' ');
    let room = width.saturating_sub(span_width(&chars[start..pos]) + char_width(under));
    let after = if pos < chars.len() {
        fit(chars[pos + 1..].iter().copied(), room)
    } else {
        String::new()
    };

    format!(
        "{}{}{}",
        text_style.render(&before),
        caret_style().render(&under.to_string()),
        text_style.render(&after)
    )
}

fn caret_style() -> Style {
    Style::new().reverse(true).inline(true)
}

fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

fn span_width(chars: &[char]) -> usize {
    chars.iter().map(|&c| char_width(c)).sum()
}

/// Takes characters while they fit in `width` columns.
fn fit(chars: impl Iterator<Item = char>, width: usize) -> String {
    let mut used = 0;
    let mut out = String::new();
    for c in chars {
        let w = char_width(c);
        if used + w > width {
            break;
        }
        used += w;
        out.push(c);
    }
    out
}
