//! Clear icon behavior.
//!
//! The icon is shown only when clearing makes sense, and it is wired to the
//! action matching the value mode:
//!
//! | mode         | shown when                 | activation            |
//! |--------------|----------------------------|-----------------------|
//! | uncontrolled | own value is non-empty     | empties own value     |
//! | controlled   | caller's value is non-empty| calls `on_clear`      |
//!
//! Both require the input to be clearable and enabled.

use super::model::{Model, Source};
use super::types::{ClearAction, ClearHandler};
use crate::error::ConfigError;
use crate::icon::{IconName, IconProps};
use crate::theme::ColorToken;
use tracing::debug;

/// Offset of the clear icon, pulling it back over the right edge of the field.
pub(super) const CLEAR_ICON_OFFSET: i16 = -20;

/// The clear icon of a rendered input together with its wired action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClearIcon {
    /// Attributes for the icon primitive.
    pub props: IconProps,
    /// What activating the icon does.
    pub action: ClearAction,
}

impl Model {
    /// Whether the clear icon is enabled.
    pub fn clearable(&self) -> bool {
        self.clearable
    }

    /// Enables or disables the clear icon.
    ///
    /// # Errors
    ///
    /// [`ConfigError::MissingClearHandler`] when enabling it on a controlled
    /// input without a clear handler. The input is left unchanged.
    pub fn set_clearable(&mut self, clearable: bool) -> Result<(), ConfigError> {
        if clearable && self.is_controlled() && self.on_clear.is_none() {
            return Err(ConfigError::MissingClearHandler);
        }
        self.clearable = clearable;
        Ok(())
    }

    /// Installs the handler called by the clear icon of a controlled input.
    pub fn set_on_clear<F>(&mut self, on_clear: F)
    where
        F: FnMut() + Send + 'static,
    {
        let handler: ClearHandler = Box::new(on_clear);
        self.on_clear = Some(handler);
    }

    /// The action the clear icon would perform right now, or `None` when no
    /// icon is shown.
    pub fn clear_action(&self) -> Option<ClearAction> {
        if !self.clearable || self.disabled {
            return None;
        }
        match &self.source {
            Source::Uncontrolled if !self.state.is_empty() => Some(ClearAction::ResetValue),
            Source::Controlled { value, .. } if !value.is_empty() => {
                Some(ClearAction::InvokeOnClear)
            }
            _ => None,
        }
    }

    /// Activates the clear icon.
    ///
    /// Returns `true` when an action ran. Nothing happens when no icon is
    /// shown.
    pub fn click_clear(&mut self) -> bool {
        match self.clear_action() {
            Some(ClearAction::ResetValue) => {
                debug!("clearing uncontrolled text input");
                self.state.clear();
                self.pos = 0;
                true
            }
            Some(ClearAction::InvokeOnClear) => match self.on_clear.as_mut() {
                Some(on_clear) => {
                    debug!("invoking clear handler");
                    on_clear();
                    true
                }
                None => false,
            },
            None => false,
        }
    }

    pub(super) fn clear_icon(&self) -> Option<ClearIcon> {
        let action = self.clear_action()?;
        Some(ClearIcon {
            props: IconProps {
                icon: IconName::Cross,
                color: ColorToken::Muted,
                appearance: "default".to_string(),
                margin_left: CLEAR_ICON_OFFSET,
            },
            action,
        })
    }
}
