//! Text input component - reactive wiring around the reducer and renderer.
//!
//! - Keyboard: one global handler, gated on `focus`, feeds [`reduce`]
//! - Reconcile effect: tracks focus, highlight_on_focus and value
//! - Render effect: tracks the props and the state revision, paints a frame
//!
//! Paints are held back while a key event is being handled so a keystroke
//! that both moves the cursor and changes the value produces one frame.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{effect, effect_scope, on_scope_dispose, signal, Signal};

use crate::primitives::text::{TextPainter, TextStyle};
use crate::primitives::types::{Cleanup, TextInputProps};
use crate::state::keyboard::{self, KeyboardEvent};
use crate::style::{AnsiStylist, Stylist};
use super::reconcile::{reconcile, PropsSnapshot};
use super::reducer::{reduce, Outcome};
use super::render::render;
use super::state::{char_len, InputState};

// =============================================================================
// State Cell
// =============================================================================

/// Component-owned state plus a revision signal for the render effect.
///
/// Reads through [`StateCell::get`] are untracked, so the reconcile effect
/// can write the state without depending on it.
struct StateCell {
    state: RefCell<InputState>,
    revision: Signal<u64>,
    counter: Cell<u64>,
}

impl StateCell {
    fn new(initial: InputState) -> Self {
        Self {
            state: RefCell::new(initial),
            revision: signal(0),
            counter: Cell::new(0),
        }
    }

    fn get(&self) -> InputState {
        *self.state.borrow()
    }

    /// Tracked read of the revision counter.
    fn track(&self) {
        let _ = self.revision.get();
    }

    /// Pull the cursor back inside a value of `len` characters.
    fn clamp_to(&self, len: usize) {
        let mut state = self.get();
        if state.cursor_offset > len {
            state.cursor_offset = len;
            self.set(state);
        }
    }

    fn set(&self, next: InputState) {
        if *self.state.borrow() == next {
            return;
        }
        *self.state.borrow_mut() = next;
        self.counter.set(self.counter.get() + 1);
        self.revision.set(self.counter.get());
    }
}

// =============================================================================
// Frame
// =============================================================================

/// Everything needed to paint, shared by the render effect and the key handler.
struct Frame {
    props: TextInputProps,
    cell: Rc<StateCell>,
    painter: Rc<dyn TextPainter>,
    stylist: Rc<dyn Stylist>,
    held: Cell<bool>,
    pending: Cell<bool>,
    last: RefCell<Option<(String, TextStyle)>>,
}

impl Frame {
    /// Compose the current frame and paint it if it differs from the last one.
    ///
    /// Reads every prop on every call so the render effect keeps its
    /// dependencies even while paints are held.
    fn paint(&self) {
        self.cell.track();
        let value = self.props.value.get();
        let placeholder = self.props.placeholder_text();
        let config = self.props.config();
        let style = self.props.text_style();
        let state = self.cell.get();

        if self.held.get() {
            self.pending.set(true);
            return;
        }

        let content = render(&value, placeholder.as_deref(), &state, &config)
            .to_styled_string(self.stylist.as_ref());

        let unchanged = self
            .last
            .borrow()
            .as_ref()
            .is_some_and(|(c, s)| *c == content && *s == style);
        if unchanged {
            return;
        }

        if let Err(err) = self.painter.paint(&content, &style) {
            tracing::warn!(error = %err, "text input paint failed");
            return;
        }
        *self.last.borrow_mut() = Some((content, style));
    }

    /// Run `f` with paints held, then paint once if anything asked to.
    fn hold<R>(&self, f: impl FnOnce() -> R) -> R {
        self.held.set(true);
        let result = f();
        self.held.set(false);
        if self.pending.replace(false) {
            self.paint();
        }
        result
    }
}

// =============================================================================
// Component
// =============================================================================

/// Create a controlled text input.
///
/// The input reads `props.value` and reports edits through `on_change`; the
/// caller decides whether to store them. Each frame goes to `painter`.
///
/// Returns a cleanup function that unsubscribes from the keyboard and stops
/// the component's effects.
pub fn text_input(props: TextInputProps, painter: Rc<dyn TextPainter>) -> Cleanup {
    let initial_value = props.value.get();
    let cell = Rc::new(StateCell::new(InputState::new(&initial_value)));
    let stylist: Rc<dyn Stylist> = props
        .stylist
        .clone()
        .unwrap_or_else(|| Rc::new(AnsiStylist));

    let frame = Rc::new(Frame {
        props: props.clone(),
        cell: cell.clone(),
        painter,
        stylist,
        held: Cell::new(false),
        pending: Cell::new(false),
        last: RefCell::new(None),
    });

    tracing::debug!(len = char_len(&initial_value), "text input mounted");

    // ==========================================================================
    // EFFECTS
    // ==========================================================================

    let scope = effect_scope(false);

    let props_for_reconcile = props.clone();
    let cell_for_reconcile = cell.clone();
    let frame_for_render = frame.clone();

    scope.run(move || {
        let mut previous: Option<PropsSnapshot> = None;
        let _reconcile = effect(move || {
            let current = PropsSnapshot {
                focus: props_for_reconcile.focus.get(),
                highlight_on_focus: props_for_reconcile.highlight_on_focus.get(),
                value_len: char_len(&props_for_reconcile.value.get()),
            };

            if previous.is_some_and(|p| p.focus != current.focus) {
                tracing::debug!(focus = current.focus, "text input focus changed");
            }

            let next = reconcile(previous.as_ref(), &current, &cell_for_reconcile.get());
            previous = Some(current);
            cell_for_reconcile.set(next);
        });

        let _render = effect(move || {
            frame_for_render.paint();
        });

        on_scope_dispose(|| {
            tracing::debug!("text input unmounted");
        });
    });

    // ==========================================================================
    // KEYBOARD HANDLER
    // ==========================================================================

    let frame_for_key = frame.clone();
    let key_cleanup = keyboard::on(move |event: &KeyboardEvent| {
        let props = &frame_for_key.props;
        if !props.focus.get() {
            return false;
        }

        let value = props.value.get();
        let config = props.config();
        let reduction = reduce(&frame_for_key.cell.get(), &value, event, &config);

        tracing::trace!(
            key = %event.key,
            outcome = ?reduction.outcome,
            cursor = reduction.state.cursor_offset,
            "text input key"
        );

        match reduction.outcome {
            Outcome::Ignored => false,
            Outcome::Submit => {
                tracing::debug!(len = char_len(&value), "text input submitted");
                if let Some(ref on_submit) = props.on_submit {
                    on_submit(&value);
                }
                true
            }
            Outcome::Update => {
                let changed = reduction.value_changed(&value);
                frame_for_key.hold(|| {
                    frame_for_key.cell.set(reduction.state);
                    if changed {
                        if let Some(ref on_change) = props.on_change {
                            on_change(&reduction.value);
                        }
                    }
                    // A controlled caller may have kept the old value
                    frame_for_key.cell.clamp_to(char_len(&props.value.get()));
                });
                true
            }
        }
    });

    // ==========================================================================
    // CLEANUP
    // ==========================================================================

    Box::new(move || {
        key_cleanup();
        scope.stop();
    })
}
