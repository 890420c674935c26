//! Uncontrolled text input - the component keeps its own value.

use std::rc::Rc;

use spark_signals::signal;

use super::text::TextPainter;
use super::text_input::text_input;
use super::types::{Cleanup, PropValue, UncontrolledTextInputProps};

/// Create a text input that owns its value.
///
/// The value lives in a local signal seeded from `initial_value`; only
/// `on_submit` reports it back to the caller.
///
/// # Example
///
/// ```ignore
/// let props = UncontrolledTextInputProps {
///     placeholder: Some("Your name".into()),
///     on_submit: Some(Rc::new(|name: &str| println!("hello {name}"))),
///     ..Default::default()
/// };
/// let cleanup = uncontrolled_text_input(props, painter);
/// ```
pub fn uncontrolled_text_input(
    props: UncontrolledTextInputProps,
    painter: Rc<dyn TextPainter>,
) -> Cleanup {
    let value = signal(props.initial_value.clone());
    let setter = value.clone();

    let props = props.into_controlled(
        PropValue::Signal(value),
        Rc::new(move |next: &str| {
            setter.set(next.to_string());
        }),
    );

    text_input(props, painter)
}
