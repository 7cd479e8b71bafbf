//! Key handling, cursor movement and text editing.

use super::model::{paste, Model};
use super::types::{ChangeEvent, EditKind, PasteErrMsg, PasteMsg};
use crate::key::matches_binding;
use crate::Component;
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers};
use tracing::warn;

impl Model {
    /// Handles a runtime message.
    ///
    /// Unfocused and disabled inputs ignore everything. Edits are routed
    /// through the value mode: an uncontrolled input changes its own value, a
    /// controlled input only reports a [`ChangeEvent`].
    ///
    /// ```rust
    /// use bubbletea_textfield::textinput::Props;
    /// use bubbletea_textfield::Component;
    /// use bubbletea_rs::KeyMsg;
    /// use crossterm::event::{KeyCode, KeyModifiers};
    ///
    /// let mut input = Props::new().build().unwrap();
    /// input.focus();
    /// input.update(Box::new(KeyMsg {
    ///     key: KeyCode::Char('h'),
    ///     modifiers: KeyModifiers::NONE,
    /// }));
    /// assert_eq!(input.value(), "h");
    /// ```
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if !self.focus || self.disabled {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            if matches_binding(key_msg, &self.key_map.paste) {
                return Some(paste());
            }
            if matches_binding(key_msg, &self.key_map.clear) {
                self.click_clear();
                return None;
            }

            self.handle_deletion_keys(key_msg);
            self.handle_movement_keys(key_msg);
            self.handle_character_input(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            let chars: Vec<char> = paste_msg.0.chars().collect();
            self.insert_runes(chars, EditKind::Paste);
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            warn!(error = %paste_err.0, "paste failed");
        }

        None
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Moves the cursor, clamped to the end of the displayed value.
    pub fn set_cursor(&mut self, pos: usize) {
        self.pos = pos.min(self.value().chars().count());
    }

    /// Moves the cursor to the start.
    pub fn cursor_start(&mut self) {
        self.set_cursor(0);
    }

    /// Moves the cursor to the end.
    pub fn cursor_end(&mut self) {
        self.set_cursor(usize::MAX);
    }

    /// Whether the input receives key messages.
    pub fn focused(&self) -> bool {
        self.focus
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.delete_word_backward) {
            self.edit(EditKind::DeleteWordBackward, delete_word_backward);
        } else if matches_binding(key_msg, &self.key_map.delete_character_backward) {
            self.edit(EditKind::DeleteBackward, |value, pos| {
                if *pos > 0 {
                    value.remove(*pos - 1);
                    *pos -= 1;
                }
            });
        } else if matches_binding(key_msg, &self.key_map.delete_character_forward) {
            self.edit(EditKind::DeleteForward, |value, pos| {
                if *pos < value.len() {
                    value.remove(*pos);
                }
            });
        } else if matches_binding(key_msg, &self.key_map.delete_after_cursor) {
            self.edit(EditKind::DeleteAfterCursor, |value, pos| value.truncate(*pos));
        } else if matches_binding(key_msg, &self.key_map.delete_before_cursor) {
            self.edit(EditKind::DeleteBeforeCursor, |value, pos| {
                value.drain(..*pos);
                *pos = 0;
            });
        }
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) {
        if matches_binding(key_msg, &self.key_map.word_backward) {
            self.word_backward();
        } else if matches_binding(key_msg, &self.key_map.character_backward) {
            self.set_cursor(self.pos.saturating_sub(1));
        } else if matches_binding(key_msg, &self.key_map.word_forward) {
            self.word_forward();
        } else if matches_binding(key_msg, &self.key_map.character_forward) {
            self.set_cursor(self.pos + 1);
        } else if matches_binding(key_msg, &self.key_map.line_start) {
            self.cursor_start();
        } else if matches_binding(key_msg, &self.key_map.line_end) {
            self.cursor_end();
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) {
        if let KeyCode::Char(ch) = key_msg.key {
            // Shift is already encoded in the character's case.
            if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                && !key_msg.modifiers.contains(KeyModifiers::ALT)
            {
                self.insert_runes(vec![ch], EditKind::Insert);
            }
        }
    }

    pub(super) fn insert_runes(&mut self, runes: Vec<char>, kind: EditKind) {
        self.edit(kind, |value, pos| {
            let tail = value.split_off(*pos);
            *pos += runes.len();
            value.extend(runes);
            value.extend(tail);
        });
    }

    /// Applies `f` to the characters of the displayed value and routes the
    /// result as a change. No event is produced when the text is unchanged.
    fn edit<F>(&mut self, kind: EditKind, f: F)
    where
        F: FnOnce(&mut Vec<char>, &mut usize),
    {
        let previous = self.value().to_string();
        let mut chars: Vec<char> = previous.chars().collect();
        let mut pos = self.pos.min(chars.len());
        f(&mut chars, &mut pos);

        self.pos = pos;
        let value: String = chars.into_iter().collect();
        if value != previous {
            self.apply_change(ChangeEvent {
                value,
                previous,
                kind,
            });
        }
    }

    fn word_backward(&mut self) {
        let chars: Vec<char> = self.value().chars().collect();
        let mut i = self.pos.min(chars.len());
        while i > 0 && chars[i - 1].is_whitespace() {
            i -= 1;
        }
        while i > 0 && !chars[i - 1].is_whitespace() {
            i -= 1;
        }
        self.pos = i;
    }

    fn word_forward(&mut self) {
        let chars: Vec<char> = self.value().chars().collect();
        let mut i = self.pos.min(chars.len());
        while i < chars.len() && chars[i].is_whitespace() {
            i += 1;
        }
        while i < chars.len() && !chars[i].is_whitespace() {
            i += 1;
        }
        self.pos = i;
    }
}

/// Deletes the word before the cursor along with the whitespace between it
/// and the cursor.
fn delete_word_backward(value: &mut Vec<char>, pos: &mut usize) {
    let old_pos = *pos;
    let mut i = old_pos;
    while i > 0 && value[i - 1].is_whitespace() {
        i -= 1;
    }
    while i > 0 && !value[i - 1].is_whitespace() {
        i -= 1;
    }
    value.drain(i..old_pos);
    *pos = i;
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus = true;
        self.pos = self.pos.min(self.value().chars().count());
        None
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
