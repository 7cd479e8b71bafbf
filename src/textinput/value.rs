//! Value resolution and edit routing.

use super::model::{Model, Source};
use super::types::{ChangeEvent, FieldState};
use crate::error::ValidationError;
use tracing::{debug, warn};

impl Model {
    /// The displayed value: the caller's value when controlled, the input's
    /// own value otherwise.
    pub fn value(&self) -> &str {
        match &self.source {
            Source::Controlled { value, .. } => value,
            Source::Uncontrolled => &self.state,
        }
    }

    /// Whether the caller owns the value.
    pub fn is_controlled(&self) -> bool {
        matches!(self.source, Source::Controlled { .. })
    }

    /// Replaces the caller-supplied value of a controlled input.
    ///
    /// Returns `false` and leaves the input untouched when it is uncontrolled.
    pub fn set_value(&mut self, new_value: impl Into<String>) -> bool {
        match &mut self.source {
            Source::Controlled { value, .. } => {
                *value = new_value.into();
                let len = value.chars().count();
                self.pos = self.pos.min(len);
                true
            }
            Source::Uncontrolled => {
                warn!("set_value ignored: text input is uncontrolled");
                false
            }
        }
    }

    /// Empty/has-text state of an uncontrolled input; `None` when controlled.
    pub fn field_state(&self) -> Option<FieldState> {
        match self.source {
            Source::Controlled { .. } => None,
            Source::Uncontrolled if self.state.is_empty() => Some(FieldState::Empty),
            Source::Uncontrolled => Some(FieldState::HasText),
        }
    }

    /// Form validation of the displayed value.
    ///
    /// # Errors
    ///
    /// [`ValidationError::Required`] when the field is required and empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.required && self.value().is_empty() {
            return Err(ValidationError::Required);
        }
        Ok(())
    }

    /// Routes an edit: controlled inputs hand it to the change handler,
    /// uncontrolled inputs apply it.
    pub(super) fn apply_change(&mut self, event: ChangeEvent) {
        match &mut self.source {
            Source::Controlled { on_change, .. } => {
                debug!(kind = ?event.kind, "forwarding edit to change handler");
                on_change(&event);
            }
            Source::Uncontrolled => {
                self.state = event.value;
            }
        }
    }
}
