//! # spark-tui-text-input
//!
//! Single-line text input for spark-tui terminal apps.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for fine-grained reactivity.
//!
//! ## Architecture
//!
//! The input is a pure reducer and a pure renderer wired together by two
//! effects. The cursor is faked by inverse-styling a character in place; the
//! real terminal cursor never moves.
//!
//! ```text
//! crossterm event → keyboard::dispatch → reduce → on_change / state → render → TextPainter
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Colors and text attributes
//! - [`state`] - Keyboard events, handler registry, crossterm bridge
//! - [`style`] - Styling helper behind the fake cursor and placeholder
//! - [`primitives`] - Text painter and the text input components

pub mod primitives;
pub mod state;
pub mod style;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use primitives::{
    text_input, uncontrolled_text_input, Cleanup, FramePainter, InputChangeCallback,
    InputSubmitCallback, PropValue, TerminalPainter, TextInputProps, TextPainter, TextStyle,
    UncontrolledTextInputProps,
};

pub use state::{
    KeyboardEvent, KeyState, Modifiers, KeyHandler,
    dispatch as dispatch_keyboard,
    on as on_keyboard, on_key,
    last_event, last_key, reset_keyboard_state,
    InputEvent, poll_event, read_event, route_event, enable_paste, disable_paste,
};

pub use style::{AnsiStylist, MarkupStylist, StyleIntent, Stylist};
