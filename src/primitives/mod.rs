//! TUI Primitives - Component building blocks.
//!
//! - [`text_input`] - Controlled single-line text input
//! - [`uncontrolled_text_input`] - Text input that owns its value
//! - [`text`] - Text-painting primitive the inputs draw through
//!
//! # Reactivity
//!
//! Props can be:
//! - Static values: `focus: true.into()`
//! - Signals: `focus: focused_signal.into()` (stays connected!)
//! - Getters: `focus: PropValue::Getter(Rc::new(|| is_active()))`
//!
//! Pass signals directly - don't extract values before handing them over:
//!
//! ```ignore
//! // CORRECT - signal stays connected
//! TextInputProps { focus: PropValue::Signal(focused), ..TextInputProps::new(value) };
//!
//! // WRONG - extracts value, breaks reactivity
//! TextInputProps { focus: PropValue::Static(focused.get()), ..TextInputProps::new(value) };
//! ```

mod types;
pub mod text;
pub mod text_input;
mod uncontrolled;

pub use types::*;
pub use text::{FramePainter, TerminalPainter, TextPainter, TextStyle};
pub use text_input::{text_input, InputConfig, InputState, StyledText};
pub use uncontrolled::uncontrolled_text_input;
