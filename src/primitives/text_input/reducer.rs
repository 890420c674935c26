//! Key reducer - one key event in, next state and value out.
//!
//! Pure: callbacks are the caller's business, driven by [`Reduction`].

use crate::state::keyboard::KeyboardEvent;
use super::state::{byte_index, char_len, InputConfig, InputState};

/// What a key event means to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction<'a> {
    /// Left for the host (focus switching, Ctrl+C).
    Ignore,
    /// Enter.
    Submit,
    MoveLeft,
    MoveRight,
    /// Backspace and Delete both remove the character before the cursor.
    DeleteBackward,
    /// Insert text at the cursor (a paste when longer than one character).
    Insert(&'a str),
}

/// Map a keyboard event to an action.
///
/// Up/Down, Tab, Shift+Tab and Ctrl+C pass through untouched. Anything that
/// is not a recognised editing key inserts its text payload, which is empty
/// for named keys such as Escape or Home.
pub fn classify(event: &KeyboardEvent) -> KeyAction<'_> {
    if event.is_paste() {
        return KeyAction::Insert(&event.text);
    }

    match event.key.as_str() {
        "ArrowUp" | "ArrowDown" | "Tab" => KeyAction::Ignore,
        "c" if event.modifiers.ctrl => KeyAction::Ignore,
        "Enter" => KeyAction::Submit,
        "ArrowLeft" => KeyAction::MoveLeft,
        "ArrowRight" => KeyAction::MoveRight,
        "Backspace" | "Delete" => KeyAction::DeleteBackward,
        _ => KeyAction::Insert(&event.text),
    }
}

/// How the caller should treat a reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Not handled; let the event propagate.
    Ignored,
    /// Invoke the submit callback with the pre-edit value.
    Submit,
    /// Store the new state; invoke the change callback if the value differs.
    Update,
}

/// Result of reducing one key event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reduction {
    pub state: InputState,
    pub value: String,
    pub outcome: Outcome,
}

impl Reduction {
    fn unchanged(state: &InputState, value: &str, outcome: Outcome) -> Self {
        Self {
            state: *state,
            value: value.to_string(),
            outcome,
        }
    }

    /// True when the caller should invoke the change callback.
    pub fn value_changed(&self, previous: &str) -> bool {
        self.outcome == Outcome::Update && self.value != previous
    }
}

/// Reduce a keyboard event against the current state and value.
pub fn reduce(
    state: &InputState,
    value: &str,
    event: &KeyboardEvent,
    config: &InputConfig,
) -> Reduction {
    reduce_action(state, value, classify(event), config)
}

/// Reduce an already classified action.
pub fn reduce_action(
    state: &InputState,
    value: &str,
    action: KeyAction<'_>,
    config: &InputConfig,
) -> Reduction {
    let len = char_len(value);
    // The value may have shrunk under us since the last reconciliation
    let cursor = state.cursor_offset.min(len);

    let mut next = InputState {
        cursor_offset: cursor,
        cursor_width: 0,
        is_highlighted: state.is_highlighted,
    };
    let mut next_value = value.to_string();

    match action {
        KeyAction::Ignore => return Reduction::unchanged(state, value, Outcome::Ignored),
        KeyAction::Submit => return Reduction::unchanged(state, value, Outcome::Submit),
        KeyAction::MoveLeft => {
            if config.show_cursor {
                next.cursor_offset = cursor.saturating_sub(1);
                next.is_highlighted = false;
            }
        }
        KeyAction::MoveRight => {
            if config.show_cursor {
                next.cursor_offset = cursor + 1;
                next.is_highlighted = false;
            }
        }
        KeyAction::DeleteBackward => {
            if cursor == 0 {
                return Reduction::unchanged(state, value, Outcome::Update);
            }
            let start = byte_index(value, cursor - 1);
            let end = byte_index(value, cursor);
            next_value.replace_range(start..end, "");
            next.cursor_offset = cursor - 1;
            next.is_highlighted = false;
        }
        KeyAction::Insert(input) => {
            let input_len = char_len(input);
            // An empty payload (Escape, Home, ...) never replaces the selection
            if state.is_highlighted && input_len > 0 {
                next_value = input.to_string();
                next.cursor_offset = input_len;
            } else {
                next_value.insert_str(byte_index(value, cursor), input);
                next.cursor_offset = cursor + input_len;
            }
            if input_len > 1 {
                next.cursor_width = input_len;
            }
            next.is_highlighted = false;
        }
    }

    next.cursor_offset = next.cursor_offset.min(char_len(&next_value));

    Reduction {
        state: next,
        value: next_value,
        outcome: Outcome::Update,
    }
}
