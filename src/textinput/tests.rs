//! Tests for the textinput component.

use super::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::IconName;
    use crate::theme::{ColorToken, TextSize};
    use crate::{Component, ConfigError, ValidationError};
    use bubbletea_rs::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    fn key(code: KeyCode) -> bubbletea_rs::Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn ctrl(c: char) -> bubbletea_rs::Msg {
        Box::new(KeyMsg {
            key: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
        })
    }

    fn type_str(input: &mut Model, s: &str) {
        for c in s.chars() {
            input.update(key(KeyCode::Char(c)));
        }
    }

    fn plain(s: &str) -> String {
        String::from_utf8_lossy(&strip_ansi_escapes::strip(s)).into_owned()
    }

    /// Controlled input that records every change event it receives.
    fn recording(value: &str) -> (Model, Arc<Mutex<Vec<ChangeEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let input = Props::new()
            .value(value, move |e: &ChangeEvent| sink.lock().unwrap().push(e.clone()))
            .build()
            .unwrap();
        (input, events)
    }

    #[test]
    fn test_new_default_values() {
        let input = new(Props::new()).unwrap();

        assert_eq!(input.value(), "");
        assert_eq!(input.appearance, "default");
        assert_eq!(input.width, Width::Px(280));
        assert_eq!(input.height(), 32);
        assert!(input.spell_check);
        assert!(!input.required);
        assert!(!input.disabled());
        assert!(!input.invalid());
        assert!(!input.clearable());
        assert!(!input.focused());
        assert!(!input.is_controlled());
        assert_eq!(input.field_state(), Some(FieldState::Empty));
    }

    #[test]
    fn test_default_trait_implementation() {
        let input = Model::default();
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_default_value_seeds_display() {
        let input = Props::new().default_value("abc").build().unwrap();
        assert_eq!(input.value(), "abc");
        assert_eq!(input.position(), 3);
        assert_eq!(input.field_state(), Some(FieldState::HasText));
    }

    #[test]
    fn test_uncontrolled_value_tracks_internal_state() {
        let mut input = Props::new().build().unwrap();
        input.focus();

        type_str(&mut input, "hey");
        assert_eq!(input.value(), "hey");
        assert_eq!(input.value(), input.state);

        input.update(key(KeyCode::Backspace));
        assert_eq!(input.value(), "he");
        assert_eq!(input.value(), input.state);
    }

    #[test]
    fn test_controlled_value_ignores_internal_state() {
        let (mut input, _) = recording("");
        input.state = "stale".to_string();
        assert_eq!(input.value(), "");

        input.set_value("external");
        assert_eq!(input.value(), "external");
        assert_eq!(input.field_state(), None);
    }

    #[test]
    fn test_controlled_edit_goes_to_handler_only() {
        let (mut input, events) = recording("ab");
        input.focus();

        input.update(key(KeyCode::Char('c')));

        assert_eq!(input.value(), "ab");
        assert_eq!(input.state, "");
        let events = events.lock().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].value, "abc");
        assert_eq!(events[0].previous, "ab");
        assert_eq!(events[0].kind, EditKind::Insert);
    }

    #[test]
    fn test_controlled_round_trip_through_caller() {
        let (mut input, events) = recording("");
        input.focus();

        for c in "ok".chars() {
            input.update(key(KeyCode::Char(c)));
            let accepted = events.lock().unwrap().last().unwrap().value.clone();
            input.set_value(accepted);
        }
        assert_eq!(input.value(), "ok");
        assert_eq!(input.position(), 2);
    }

    #[test]
    fn test_set_value_on_uncontrolled_is_ignored() {
        let mut input = Props::new().default_value("mine").build().unwrap();
        assert!(!input.set_value("theirs"));
        assert_eq!(input.value(), "mine");
    }

    #[test]
    fn test_unfocused_input_ignores_keys() {
        let mut input = Props::new().build().unwrap();
        input.update(key(KeyCode::Char('x')));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_disabled_input_ignores_keys() {
        let mut input = Props::new().disabled(true).build().unwrap();
        input.focus();
        input.update(key(KeyCode::Char('x')));
        assert_eq!(input.value(), "");
    }

    #[test]
    fn test_cursor_movement_and_insert() {
        let mut input = Props::new().default_value("hllo").build().unwrap();
        input.focus();

        input.update(key(KeyCode::Home));
        assert_eq!(input.position(), 0);
        input.update(key(KeyCode::Right));
        input.update(key(KeyCode::Char('e')));
        assert_eq!(input.value(), "hello");
        assert_eq!(input.position(), 2);

        input.update(key(KeyCode::End));
        assert_eq!(input.position(), 5);
        input.update(key(KeyCode::Right));
        assert_eq!(input.position(), 5);
    }

    #[test]
    fn test_deletion_keys() {
        let mut input = Props::new().default_value("hello big world").build().unwrap();
        input.focus();

        input.update(ctrl('w'));
        assert_eq!(input.value(), "hello big ");

        input.update(key(KeyCode::Home));
        input.update(key(KeyCode::Delete));
        assert_eq!(input.value(), "ello big ");

        input.set_cursor(4);
        input.update(ctrl('k'));
        assert_eq!(input.value(), "ello");

        input.set_cursor(2);
        input.update(ctrl('u'));
        assert_eq!(input.value(), "lo");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_word_movement() {
        let mut input = Props::new().default_value("one two three").build().unwrap();
        input.focus();

        input.update(Box::new(KeyMsg {
            key: KeyCode::Char('b'),
            modifiers: KeyModifiers::ALT,
        }));
        assert_eq!(input.position(), 8);

        input.update(Box::new(KeyMsg {
            key: KeyCode::Char('b'),
            modifiers: KeyModifiers::ALT,
        }));
        assert_eq!(input.position(), 4);

        input.update(Box::new(KeyMsg {
            key: KeyCode::Char('f'),
            modifiers: KeyModifiers::ALT,
        }));
        assert_eq!(input.position(), 7);
    }

    #[test]
    fn test_no_event_when_text_unchanged() {
        let (mut input, events) = recording("");
        input.focus();
        input.update(key(KeyCode::Backspace));
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_paste_message_inserts_at_cursor() {
        let mut input = Props::new().default_value("ad").build().unwrap();
        input.focus();
        input.set_cursor(1);

        input.update(Box::new(PasteMsg("bc".to_string())));
        assert_eq!(input.value(), "abcd");
        assert_eq!(input.position(), 3);
    }

    #[test]
    fn test_paste_error_leaves_value() {
        let mut input = Props::new().default_value("keep").build().unwrap();
        input.focus();
        input.update(Box::new(PasteErrMsg("no clipboard".to_string())));
        assert_eq!(input.value(), "keep");
    }

    #[test]
    fn test_horizontal_padding() {
        assert_eq!(horizontal_padding(32), 10);
        assert_eq!(horizontal_padding(48), 15);

        let input = Props::new().build().unwrap();
        let p = input.presentation();
        assert_eq!(p.padding_x, 10);
        assert_eq!(p.text_size, TextSize(300));
        assert_eq!(p.border_radius, 3);
        assert_eq!(p.class_name, "text-input--default");
    }

    #[test]
    fn test_presentation_follows_height_and_appearance() {
        let mut input = Props::new().appearance("primary").height(48).build().unwrap();
        let p = input.presentation();
        assert_eq!(p.class_name, "text-input--primary");
        assert_eq!(p.text_size, TextSize(500));
        assert_eq!(p.border_radius, 4);

        input.set_height(36).unwrap();
        assert_eq!(input.presentation().text_size, TextSize(400));
    }

    #[test]
    fn test_disabled_forces_muted_color() {
        let input = Props::new()
            .color("#ff0000")
            .disabled(true)
            .build()
            .unwrap();
        assert_eq!(input.render().text.color, ColorToken::Muted);

        let input = Props::new().color("#ff0000").build().unwrap();
        assert_eq!(
            input.render().text.color,
            ColorToken::Custom("#ff0000".to_string())
        );
    }

    #[test]
    fn test_render_forwards_props() {
        let input = Props::new()
            .required(true)
            .invalid(true)
            .spell_check(false)
            .placeholder("Email")
            .class_name("signup")
            .build()
            .unwrap();
        let text = input.render().text;

        assert!(text.required);
        assert!(text.invalid);
        assert!(!text.spell_check);
        assert_eq!(text.placeholder.as_deref(), Some("Email"));
        assert_eq!(text.class_list(), "text-input--default signup");
        assert_eq!(text.padding_left, 10);
        assert_eq!(text.padding_right, 10);
        assert_eq!(text.caret, None);
    }

    #[test]
    fn test_uncontrolled_clear() {
        let mut input = Props::new()
            .clearable(true)
            .default_value("hello")
            .build()
            .unwrap();

        let icon = input.render().clear_icon.expect("clear icon");
        assert_eq!(icon.action, ClearAction::ResetValue);
        assert_eq!(icon.props.icon, IconName::Cross);
        assert_eq!(icon.props.color, ColorToken::Muted);
        assert_eq!(icon.props.appearance, "default");
        assert_eq!(icon.props.margin_left, -20);

        assert!(input.click_clear());
        assert_eq!(input.value(), "");
        assert_eq!(input.field_state(), Some(FieldState::Empty));
        assert!(input.render().clear_icon.is_none());
    }

    #[test]
    fn test_uncontrolled_empty_has_no_icon() {
        let mut input = Props::new().clearable(true).build().unwrap();
        assert!(input.render().clear_icon.is_none());
        assert!(!input.click_clear());

        input.focus();
        type_str(&mut input, "a");
        assert!(input.render().clear_icon.is_some());
    }

    #[test]
    fn test_controlled_clear_invokes_handler_once() {
        let clears = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&clears);
        let mut input = Props::new()
            .clearable(true)
            .value("x", |_| {})
            .on_clear(move || {
                counter.fetch_add(1, Ordering::SeqCst);
            })
            .build()
            .unwrap();
        input.state = "internal".to_string();

        let icon = input.render().clear_icon.expect("clear icon");
        assert_eq!(icon.action, ClearAction::InvokeOnClear);
        assert_eq!(icon.props.icon, IconName::Cross);
        assert_eq!(icon.props.color, ColorToken::Muted);
        assert_eq!(icon.props.appearance, "default");
        assert_eq!(icon.props.margin_left, -20);

        assert!(input.click_clear());
        assert_eq!(clears.load(Ordering::SeqCst), 1);
        assert_eq!(input.state, "internal");
        assert_eq!(input.value(), "x");
    }

    #[test]
    fn test_controlled_empty_value_has_no_icon() {
        let mut input = Props::new()
            .clearable(true)
            .value("", |_| {})
            .on_clear(|| {})
            .build()
            .unwrap();
        assert!(input.render().clear_icon.is_none());
        assert!(!input.click_clear());
    }

    #[test]
    fn test_not_clearable_has_no_icon() {
        let input = Props::new().default_value("text").build().unwrap();
        assert_eq!(input.clear_action(), None);
    }

    #[test]
    fn test_clear_key_binding() {
        let mut input = Props::new()
            .clearable(true)
            .default_value("wipe me")
            .build()
            .unwrap();
        input.focus();
        input.update(ctrl('l'));
        assert_eq!(input.value(), "");
        assert_eq!(input.position(), 0);
    }

    #[test]
    fn test_clear_icon_does_not_depend_on_height() {
        let mut input = Props::new()
            .clearable(true)
            .default_value("tall")
            .height(48)
            .build()
            .unwrap();
        let tall = input.render().clear_icon.expect("clear icon");
        input.set_height(24).unwrap();
        let short = input.render().clear_icon.expect("clear icon");
        assert_eq!(tall, short);
    }

    #[test]
    fn test_disabled_input_hides_clear_icon() {
        let mut input = Props::new()
            .clearable(true)
            .default_value("stay")
            .disabled(true)
            .build()
            .unwrap();
        assert_eq!(input.clear_action(), None);
        assert!(input.render().clear_icon.is_none());
        assert!(!input.click_clear());
        assert_eq!(input.value(), "stay");

        input.set_disabled(false);
        let icon = input.render().clear_icon.expect("clear icon");
        assert_eq!(icon.action, ClearAction::ResetValue);
    }

    #[test]
    fn test_width_from_string() {
        let input = Props::new().try_width("50%").unwrap().build().unwrap();
        assert_eq!(input.width, Width::Percent(50));

        let err = Props::new().try_width("wide").err();
        assert_eq!(err, Some(ConfigError::InvalidWidth("wide".to_string())));
    }

    #[test]
    fn test_missing_clear_handler_is_rejected() {
        let err = Props::new()
            .clearable(true)
            .value("x", |_| {})
            .build()
            .err();
        assert_eq!(err, Some(ConfigError::MissingClearHandler));

        let mut input = Props::new().value("x", |_| {}).build().unwrap();
        assert_eq!(
            input.set_clearable(true),
            Err(ConfigError::MissingClearHandler)
        );
        assert!(!input.clearable());

        input.set_on_clear(|| {});
        assert!(input.set_clearable(true).is_ok());
    }

    #[test]
    fn test_zero_height_is_rejected() {
        let err = Props::new().height(0).build().err();
        assert_eq!(err, Some(ConfigError::InvalidHeight));

        let mut input = Model::default();
        assert_eq!(input.set_height(0), Err(ConfigError::InvalidHeight));
        assert_eq!(input.height(), 32);
    }

    #[test]
    fn test_required_validation() {
        let mut input = Props::new().required(true).build().unwrap();
        assert_eq!(input.validate(), Err(ValidationError::Required));

        input.focus();
        type_str(&mut input, "a");
        assert_eq!(input.validate(), Ok(()));
    }

    #[test]
    fn test_view_shows_value_and_icon() {
        let input = Props::new()
            .clearable(true)
            .default_value("hello")
            .build()
            .unwrap();
        let out = plain(&input.view());
        assert!(out.contains("hello"));
        assert!(out.contains('✕'));
    }

    #[test]
    fn test_view_placeholder() {
        let mut input = Props::new().placeholder("Search").build().unwrap();
        assert!(plain(&input.view()).contains("Search"));

        input.focus();
        type_str(&mut input, "rust");
        let out = plain(&input.view());
        assert!(out.contains("rust"));
        assert!(!out.contains("Search"));
    }

    #[test]
    fn test_focus_sets_caret() {
        let mut input = Props::new().default_value("ab").build().unwrap();
        assert_eq!(input.render().text.caret, None);
        input.focus();
        assert_eq!(input.render().text.caret, Some(2));
        input.blur();
        assert!(!input.focused());
    }
}
