//! Primitive types - Props and cleanup.
//!
//! These types define the interface for component props.
//! Props support static values, signals, and getters for reactivity.

use std::rc::Rc;
use spark_signals::Signal;

use crate::style::Stylist;
use crate::types::{Attr, Rgba};
use super::text::TextStyle;
use super::text_input::InputConfig;

// =============================================================================
// Cleanup Function
// =============================================================================

/// Cleanup function returned by components.
///
/// Call this to unmount the component and release resources.
pub type Cleanup = Box<dyn FnOnce()>;

// =============================================================================
// Callback Types
// =============================================================================

/// Input value change callback.
pub type InputChangeCallback = Rc<dyn Fn(&str)>;

/// Input submit callback (Enter key).
pub type InputSubmitCallback = Rc<dyn Fn(&str)>;

// =============================================================================
// Prop Value - Reactive property wrapper
// =============================================================================

/// A property value that can be static, a signal, or a getter.
///
/// Reading a `Signal` or a signal-backed getter inside an effect keeps the
/// reactive connection.
#[derive(Clone)]
pub enum PropValue<T: Clone + PartialEq + 'static> {
    /// Static value (not reactive).
    Static(T),
    /// Reactive signal (changes propagate automatically).
    Signal(Signal<T>),
    /// Getter function (called each time value is needed).
    Getter(Rc<dyn Fn() -> T>),
}

impl<T: Clone + PartialEq + 'static> PropValue<T> {
    /// Get the current value (for immediate reads).
    pub fn get(&self) -> T {
        match self {
            PropValue::Static(v) => v.clone(),
            PropValue::Signal(s) => s.get(),
            PropValue::Getter(f) => f(),
        }
    }
}

impl<T: Clone + PartialEq + Default + 'static> Default for PropValue<T> {
    fn default() -> Self {
        PropValue::Static(T::default())
    }
}

impl<T: Clone + PartialEq + 'static> From<T> for PropValue<T> {
    fn from(value: T) -> Self {
        PropValue::Static(value)
    }
}

impl<T: Clone + PartialEq + 'static> From<Signal<T>> for PropValue<T> {
    fn from(signal: Signal<T>) -> Self {
        PropValue::Signal(signal)
    }
}

impl From<&str> for PropValue<String> {
    fn from(value: &str) -> Self {
        PropValue::Static(value.to_string())
    }
}

fn flag(prop: &Option<PropValue<bool>>) -> bool {
    prop.as_ref().is_some_and(|p| p.get())
}

// =============================================================================
// Text Input Props
// =============================================================================

/// Properties for the controlled text input.
///
/// The caller owns `value`: the input reports edits through `on_change` and
/// shows whatever `value` holds on the next read.
///
/// # Example
///
/// ```ignore
/// use spark_tui_text_input::primitives::{text_input, TextInputProps};
/// use spark_signals::signal;
///
/// let query = signal(String::new());
/// let setter = query.clone();
///
/// let mut props = TextInputProps::new(query.clone());
/// props.placeholder = Some("Search...".into());
/// props.on_change = Some(Rc::new(move |v: &str| {
///     setter.set(v.to_string());
/// }));
/// ```
#[derive(Clone)]
pub struct TextInputProps {
    // =========================================================================
    // Value
    // =========================================================================

    /// The current text value.
    pub value: PropValue<String>,

    /// Text shown (dimmed) while the value is empty.
    pub placeholder: Option<PropValue<String>>,

    /// Replace every character of the displayed value with this one.
    pub mask: Option<char>,

    // =========================================================================
    // Behavior
    // =========================================================================

    /// Listen to keyboard input and show the cursor (default: true).
    pub focus: PropValue<bool>,

    /// Allow cursor movement and render the fake cursor (default: true).
    pub show_cursor: PropValue<bool>,

    /// Flash multi-character insertions in inverse video (default: false).
    pub highlight_pasted_text: PropValue<bool>,

    /// Select the whole value on focus so the next keystroke replaces it
    /// (default: false).
    pub highlight_on_focus: PropValue<bool>,

    // =========================================================================
    // Visual - passed through to the text painter
    // =========================================================================

    /// Foreground color.
    pub color: Option<PropValue<Rgba>>,

    /// Background color.
    pub background_color: Option<PropValue<Rgba>>,

    /// Dim the text.
    pub dim_color: Option<PropValue<bool>>,

    /// Bold text.
    pub bold: Option<PropValue<bool>>,

    /// Italic text.
    pub italic: Option<PropValue<bool>>,

    /// Underlined text.
    pub underline: Option<PropValue<bool>>,

    /// Struck-through text.
    pub strikethrough: Option<PropValue<bool>>,

    /// Styling helper used for the cursor, highlight and placeholder
    /// (default: [`crate::style::AnsiStylist`]).
    pub stylist: Option<Rc<dyn Stylist>>,

    // =========================================================================
    // Callbacks
    // =========================================================================

    /// Called with the new value whenever an edit changes it.
    pub on_change: Option<InputChangeCallback>,

    /// Called with the current value when Enter is pressed.
    pub on_submit: Option<InputSubmitCallback>,
}

impl TextInputProps {
    /// Create new TextInputProps with the given value.
    ///
    /// This is the recommended way to create TextInputProps since value is required.
    pub fn new(value: impl Into<PropValue<String>>) -> Self {
        Self {
            value: value.into(),
            placeholder: None,
            mask: None,
            focus: PropValue::Static(true),
            show_cursor: PropValue::Static(true),
            highlight_pasted_text: PropValue::Static(false),
            highlight_on_focus: PropValue::Static(false),
            color: None,
            background_color: None,
            dim_color: None,
            bold: None,
            italic: None,
            underline: None,
            strikethrough: None,
            stylist: None,
            on_change: None,
            on_submit: None,
        }
    }

    /// Snapshot of the behavior props.
    pub fn config(&self) -> InputConfig {
        InputConfig {
            focus: self.focus.get(),
            show_cursor: self.show_cursor.get(),
            highlight_pasted_text: self.highlight_pasted_text.get(),
            highlight_on_focus: self.highlight_on_focus.get(),
            mask: self.mask,
        }
    }

    /// Current placeholder, `None` when unset or empty.
    pub fn placeholder_text(&self) -> Option<String> {
        self.placeholder
            .as_ref()
            .map(|p| p.get())
            .filter(|p| !p.is_empty())
    }

    /// Pass-through style for the text painter.
    pub fn text_style(&self) -> TextStyle {
        let mut attrs = Attr::NONE;
        for (prop, attr) in [
            (&self.dim_color, Attr::DIM),
            (&self.bold, Attr::BOLD),
            (&self.italic, Attr::ITALIC),
            (&self.underline, Attr::UNDERLINE),
            (&self.strikethrough, Attr::STRIKETHROUGH),
        ] {
            if flag(prop) {
                attrs |= attr;
            }
        }

        TextStyle {
            color: self.color.as_ref().map(|c| c.get()),
            background_color: self.background_color.as_ref().map(|c| c.get()),
            attrs,
        }
    }
}

// =============================================================================
// Uncontrolled Text Input Props
// =============================================================================

/// Properties for the uncontrolled text input.
///
/// Same as [`TextInputProps`] without `value` / `on_change`: the component
/// keeps the value itself, starting from `initial_value`.
#[derive(Clone)]
pub struct UncontrolledTextInputProps {
    /// Starting value (default: empty).
    pub initial_value: String,
    pub placeholder: Option<PropValue<String>>,
    pub mask: Option<char>,
    pub focus: PropValue<bool>,
    pub show_cursor: PropValue<bool>,
    pub highlight_pasted_text: PropValue<bool>,
    pub highlight_on_focus: PropValue<bool>,
    pub color: Option<PropValue<Rgba>>,
    pub background_color: Option<PropValue<Rgba>>,
    pub dim_color: Option<PropValue<bool>>,
    pub bold: Option<PropValue<bool>>,
    pub italic: Option<PropValue<bool>>,
    pub underline: Option<PropValue<bool>>,
    pub strikethrough: Option<PropValue<bool>>,
    pub stylist: Option<Rc<dyn Stylist>>,
    pub on_submit: Option<InputSubmitCallback>,
}

impl Default for UncontrolledTextInputProps {
    fn default() -> Self {
        let base = TextInputProps::new(String::new());
        Self {
            initial_value: String::new(),
            placeholder: base.placeholder,
            mask: base.mask,
            focus: base.focus,
            show_cursor: base.show_cursor,
            highlight_pasted_text: base.highlight_pasted_text,
            highlight_on_focus: base.highlight_on_focus,
            color: base.color,
            background_color: base.background_color,
            dim_color: base.dim_color,
            bold: base.bold,
            italic: base.italic,
            underline: base.underline,
            strikethrough: base.strikethrough,
            stylist: base.stylist,
            on_submit: base.on_submit,
        }
    }
}

impl UncontrolledTextInputProps {
    /// Build controlled props around a caller-supplied value and setter.
    pub fn into_controlled(
        self,
        value: PropValue<String>,
        on_change: InputChangeCallback,
    ) -> TextInputProps {
        TextInputProps {
            value,
            placeholder: self.placeholder,
            mask: self.mask,
            focus: self.focus,
            show_cursor: self.show_cursor,
            highlight_pasted_text: self.highlight_pasted_text,
            highlight_on_focus: self.highlight_on_focus,
            color: self.color,
            background_color: self.background_color,
            dim_color: self.dim_color,
            bold: self.bold,
            italic: self.italic,
            underline: self.underline,
            strikethrough: self.strikethrough,
            stylist: self.stylist,
            on_change: Some(on_change),
            on_submit: self.on_submit,
        }
    }
}
