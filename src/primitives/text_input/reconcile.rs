//! Focus / highlight reconciliation.
//!
//! Runs when props change rather than on key events. The caller keeps the
//! previous [`PropsSnapshot`] and hands both snapshots in.

use super::state::InputState;

/// The props reconciliation reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropsSnapshot {
    pub focus: bool,
    pub highlight_on_focus: bool,
    /// Character length of the current value.
    pub value_len: usize,
}

/// Bring `state` in line with the current props.
///
/// `previous` is `None` on mount, which counts as a focus transition.
pub fn reconcile(
    previous: Option<&PropsSnapshot>,
    current: &PropsSnapshot,
    state: &InputState,
) -> InputState {
    let mut next = *state;

    let focus_rule_triggered = match previous {
        None => true,
        Some(prev) => {
            prev.focus != current.focus || prev.highlight_on_focus != current.highlight_on_focus
        }
    };

    if focus_rule_triggered {
        if current.focus && current.highlight_on_focus {
            next.is_highlighted = true;
            next.cursor_offset = current.value_len;
        } else if !current.focus {
            next.is_highlighted = false;
        }
    }

    if next.cursor_offset > current.value_len {
        next.cursor_offset = current.value_len;
    }

    next
}
