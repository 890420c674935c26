//! Single-line text input.
//!
//! Two pure layers plus the wiring:
//! - [`reduce`] maps `(state, value, key, config)` to the next state and value
//! - [`render`] maps `(value, placeholder, state, config)` to styled spans
//! - [`reconcile`] re-applies the focus / highlight rules when props change
//! - [`text_input`] subscribes to the keyboard and repaints through a
//!   [`TextPainter`](crate::primitives::TextPainter)

mod component;
mod reconcile;
mod reducer;
mod render;
mod state;

pub use component::text_input;
pub use reconcile::{reconcile, PropsSnapshot};
pub use reducer::{classify, reduce, reduce_action, KeyAction, Outcome, Reduction};
pub use render::{render, Span, StyledText};
pub use state::{InputConfig, InputState};
