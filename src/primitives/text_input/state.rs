//! Input state and the per-render behavior snapshot.

/// Cursor and highlight state owned by one text input instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// Character index of the logical cursor, `0..=len(value)`.
    pub cursor_offset: usize,
    /// Length of the most recent multi-character insertion, 0 otherwise.
    pub cursor_width: usize,
    /// Whole value shown inverse; the next keystroke replaces it.
    pub is_highlighted: bool,
}

impl InputState {
    /// Mount-time state: cursor at the end of `value`.
    pub fn new(value: &str) -> Self {
        Self {
            cursor_offset: value.chars().count(),
            cursor_width: 0,
            is_highlighted: false,
        }
    }
}

/// Behavior props read at the moment of a key event or a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputConfig {
    pub focus: bool,
    pub show_cursor: bool,
    pub highlight_pasted_text: bool,
    pub highlight_on_focus: bool,
    pub mask: Option<char>,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            focus: true,
            show_cursor: true,
            highlight_pasted_text: false,
            highlight_on_focus: false,
            mask: None,
        }
    }
}

/// Number of characters in `s`.
#[inline]
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Byte index of the character at `char_index`, or `s.len()` past the end.
pub(crate) fn byte_index(s: &str, char_index: usize) -> usize {
    s.char_indices()
        .nth(char_index)
        .map_or(s.len(), |(i, _)| i)
}
