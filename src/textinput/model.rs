//! Core model implementation for the textinput component.

use super::keymap::{default_key_map, KeyMap};
use super::props::Props;
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{ChangeHandler, ClearHandler, PasteErrMsg, ValueMode};
use crate::error::ConfigError;
use crate::text::{StyleProps, Width, DEFAULT_AVAILABLE_COLS};
use crate::theme::Theme;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Where the displayed value comes from.
pub(super) enum Source {
    Controlled {
        value: String,
        on_change: ChangeHandler,
    },
    Uncontrolled,
}

/// A themeable single-line text input.
///
/// The input runs in one of two modes fixed at construction:
///
/// - **Uncontrolled**: the input owns its value. Edits are applied directly
///   and the clear icon empties it.
/// - **Controlled**: the caller owns the value. Edits are reported through the
///   change handler and the caller pushes the new value back with
///   [`set_value`](Model::set_value). The clear icon calls the caller's clear
///   handler.
///
/// Sizing, radius and class name come from an injected [`Theme`].
///
/// # Examples
///
/// ```rust
/// use bubbletea_textfield::textinput::{new, Props};
/// use std::sync::{Arc, Mutex};
///
/// // Uncontrolled
/// let mut input = new(Props::new().default_value("hello").clearable(true)).unwrap();
/// assert!(input.render().clear_icon.is_some());
/// input.click_clear();
/// assert_eq!(input.value(), "");
///
/// // Controlled
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink = Arc::clone(&seen);
/// let input = new(Props::new().value("abc", move |e| sink.lock().unwrap().push(e.value.clone())))
///     .unwrap();
/// assert_eq!(input.value(), "abc");
/// ```
pub struct Model {
    /// Marks the field mandatory.
    pub required: bool,
    /// Native spell checking hint, forwarded to the rendered props.
    pub spell_check: bool,
    /// Text shown while the value is empty.
    pub placeholder: Option<String>,
    /// Theme appearance name.
    pub appearance: String,
    /// Control width.
    pub width: Width,
    /// Extra class name.
    pub class_name: Option<String>,
    /// Passthrough styling.
    pub style: StyleProps,
    /// Key bindings.
    pub key_map: KeyMap,

    pub(super) source: Source,
    /// Value owned by the input. Only displayed when uncontrolled.
    pub(super) state: String,
    pub(super) on_clear: Option<ClearHandler>,
    pub(super) clearable: bool,
    pub(super) disabled: bool,
    pub(super) invalid: bool,
    pub(super) height: u16,
    pub(super) theme: Arc<dyn Theme>,

    /// Cursor position in characters.
    pub(super) pos: usize,
    pub(super) focus: bool,
    /// Container width in columns for relative widths.
    pub(super) available_width: u16,
}

/// Creates a text input from `props`.
///
/// The input is not focused. Call [`Component::focus`](crate::Component::focus)
/// to let it receive key input.
///
/// # Errors
///
/// Returns the first problem found by [`Props::validate`].
pub fn new(props: Props) -> Result<Model, ConfigError> {
    if let Err(err) = props.validate() {
        debug!(%err, "rejected text input configuration");
        return Err(err);
    }
    Ok(Model::from_props(props))
}

impl Model {
    pub(super) fn from_props(props: Props) -> Self {
        let (source, state) = match props.mode {
            ValueMode::Controlled { value, on_change } => {
                (Source::Controlled { value, on_change }, String::new())
            }
            ValueMode::Uncontrolled { initial } => (Source::Uncontrolled, initial),
        };

        let mut m = Model {
            required: props.required,
            spell_check: props.spell_check,
            placeholder: props.placeholder,
            appearance: props.appearance,
            width: props.width,
            class_name: props.class_name,
            style: props.style,
            key_map: default_key_map(),
            source,
            state,
            on_clear: props.on_clear,
            clearable: props.is_clearable,
            disabled: props.disabled,
            invalid: props.is_invalid,
            height: props.height,
            theme: props.theme,
            pos: 0,
            focus: false,
            available_width: DEFAULT_AVAILABLE_COLS,
        };
        m.pos = m.value().chars().count();
        m
    }
}

impl Default for Model {
    fn default() -> Self {
        Model::from_props(Props::default())
    }
}

/// Creates a command that retrieves text from the system clipboard.
///
/// The command resolves to a [`PasteMsg`](super::PasteMsg) with the clipboard
/// contents, or a [`PasteErrMsg`] when the clipboard cannot be read or the
/// `clipboard-support` feature is disabled.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (Model::default(), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
