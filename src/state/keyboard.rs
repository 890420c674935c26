//! Keyboard Module - Keyboard event state and handler registry
//!
//! State and handler registry for keyboard events.
//! Does NOT own stdin (that is the input module).
//!
//! # API
//!
//! - `last_event` - Get last keyboard event
//! - `last_key` - Get last key pressed
//! - `on(handler)` - Subscribe to all keyboard events
//! - `on_key(key, fn)` - Subscribe to a specific key
//!
//! # Example
//!
//! ```ignore
//! use spark_tui_text_input::state::keyboard;
//!
//! // Subscribe to all keyboard events
//! let cleanup = keyboard::on(|event| {
//!     println!("Key: {} text: {:?}", event.key, event.text);
//!     false // Don't consume
//! });
//!
//! // Subscribe to specific key
//! let cleanup = keyboard::on_key("Escape", || {
//!     println!("Escape pressed!");
//!     true // Consume event
//! });
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use spark_signals::{signal, Signal};

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Key name used for paste deliveries.
pub const PASTE_KEY: &str = "Paste";

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowUp", "Paste")
    pub key: String,
    /// Decoded input payload: the character for printable keys, the whole
    /// string for a paste, empty for named keys.
    pub text: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event.
    ///
    /// Single-character keys carry themselves as `text`; named keys
    /// ("Enter", "ArrowLeft", ...) carry no text.
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_modifiers(key, Modifiers::default())
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        let key = key.into();
        let text = if key.chars().count() == 1 { key.clone() } else { String::new() };
        Self {
            key,
            text,
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Create a paste delivery: the whole string arrives as one event.
    pub fn paste(text: impl Into<String>) -> Self {
        Self {
            key: PASTE_KEY.to_string(),
            text: text.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// Check if this event is a paste delivery
    pub fn is_paste(&self) -> bool {
        self.key == PASTE_KEY
    }
}

/// Handler for keyboard events. Return true to consume the event.
pub type KeyHandler = Box<dyn Fn(&KeyboardEvent) -> bool>;

/// Handler for specific key. Return true to consume the event.
pub type KeySpecificHandler = Box<dyn Fn() -> bool>;

// =============================================================================
// STATE
// =============================================================================

thread_local! {
    static LAST_EVENT: Signal<Option<KeyboardEvent>> = signal(None);
}

/// Get the last keyboard event
pub fn last_event() -> Option<KeyboardEvent> {
    LAST_EVENT.with(|s| s.get())
}

/// Get the last key pressed
pub fn last_key() -> String {
    last_event().map(|e| e.key).unwrap_or_default()
}

// =============================================================================
// HANDLER REGISTRY
// =============================================================================

struct HandlerRegistry {
    global_handlers: Vec<(usize, KeyHandler)>,
    key_handlers: HashMap<String, Vec<(usize, KeySpecificHandler)>>,
    // Ids removed while their handler was checked out by dispatch
    removed: Vec<usize>,
    dispatch_depth: usize,
    next_id: usize,
}

impl HandlerRegistry {
    fn new() -> Self {
        Self {
            global_handlers: Vec::new(),
            key_handlers: HashMap::new(),
            removed: Vec::new(),
            dispatch_depth: 0,
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<HandlerRegistry> = RefCell::new(HandlerRegistry::new());
}

// =============================================================================
// EVENT DISPATCH
// =============================================================================

/// Dispatch a keyboard event to all registered handlers.
/// Returns true if any handler consumed the event.
///
/// Key-specific handlers run before global ones. Handlers may register or
/// remove other handlers while running; those changes apply from the next
/// event on.
pub fn dispatch(event: KeyboardEvent) -> bool {
    // Always update reactive state
    LAST_EVENT.with(|s| s.set(Some(event.clone())));

    // Only dispatch press events to handlers
    if event.state != KeyState::Press {
        return false;
    }

    dispatch_to_handlers(&event)
}

fn dispatch_to_handlers(event: &KeyboardEvent) -> bool {
    // Take the handlers out so they can re-enter the registry (a handler
    // that unmounts a component removes its own subscription).
    let (mut global, mut keyed) = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.dispatch_depth += 1;
        let keyed = reg.key_handlers.remove(&event.key).unwrap_or_default();
        (std::mem::take(&mut reg.global_handlers), keyed)
    });

    let consumed = keyed.iter().any(|(_, handler)| handler())
        || global.iter().any(|(_, handler)| handler(event));

    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.dispatch_depth -= 1;
        let removed = if reg.dispatch_depth == 0 {
            std::mem::take(&mut reg.removed)
        } else {
            reg.removed.clone()
        };
        global.retain(|(id, _)| !removed.contains(id));
        keyed.retain(|(id, _)| !removed.contains(id));

        // Handlers added during dispatch go after the existing ones
        global.append(&mut reg.global_handlers);
        reg.global_handlers = global;
        if !keyed.is_empty() {
            let entry = reg.key_handlers.entry(event.key.clone()).or_default();
            keyed.append(entry);
            *entry = keyed;
        }
    });

    consumed
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Subscribe to all keyboard events.
/// Return true from handler to consume the event.
/// Returns cleanup function.
pub fn on<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&KeyboardEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.global_handlers.push((id, Box::new(handler)));
        id
    });

    move || remove_handler(id)
}

/// Subscribe to a specific key.
/// Handler receives no arguments - check last_event if needed.
/// Return true to consume the event.
/// Returns cleanup function.
pub fn on_key<F>(key: &str, handler: F) -> impl FnOnce()
where
    F: Fn() -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.key_handlers
            .entry(key.to_string())
            .or_default()
            .push((id, Box::new(handler)));
        id
    });

    move || remove_handler(id)
}

fn remove_handler(id: usize) {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.global_handlers.retain(|(handler_id, _)| *handler_id != id);
        for handlers in reg.key_handlers.values_mut() {
            handlers.retain(|(handler_id, _)| *handler_id != id);
        }
        reg.key_handlers.retain(|_, handlers| !handlers.is_empty());
        // The handler may be checked out by an in-flight dispatch
        if reg.dispatch_depth > 0 {
            reg.removed.push(id);
        }
    });
}

/// Count of registered handlers (global and key-specific).
pub fn handler_count() -> usize {
    REGISTRY.with(|reg| {
        let reg = reg.borrow();
        reg.global_handlers.len() + reg.key_handlers.values().map(Vec::len).sum::<usize>()
    })
}

/// Clear all state and handlers.
pub fn cleanup() {
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.global_handlers.clear();
        reg.key_handlers.clear();
        reg.removed.clear();
        reg.dispatch_depth = 0;
    });
    LAST_EVENT.with(|s| s.set(None));
}

/// Reset keyboard state (for testing)
pub fn reset_keyboard_state() {
    cleanup();
    REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        reg.next_id = 0;
    });
}

// =============================================================================
// TESTS
// =============================================================================
