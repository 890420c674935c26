//! State Module - Runtime input systems
//!
//! - **Keyboard** - Event types, dispatch, handler registry
//! - **Input** - crossterm event conversion and routing

pub mod input;
pub mod keyboard;

pub use input::{
    convert_event, convert_key_event, disable_paste, enable_paste, poll_event, read_event,
    route_event, InputEvent,
};
pub use keyboard::*;
