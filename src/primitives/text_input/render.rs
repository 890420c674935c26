//! Renderer - value, placeholder and state in, styled spans out.
//!
//! Output is a list of [`Span`]s carrying style intents. Turning them into a
//! string is the [`Stylist`]'s job, so tests can assert on intents instead of
//! escape sequences.

use crate::style::{StyleIntent, Stylist};
use crate::types::Attr;
use super::state::{char_len, InputConfig, InputState};

/// A run of text with one set of style flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub attrs: Attr,
    /// Padding cell drawn to show the cursor past the end of the text.
    pub cursor_cell: bool,
}

/// Rendered output of a text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledText {
    spans: Vec<Span>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text, merging with the previous span when the style matches.
    pub fn push(&mut self, text: &str, attrs: Attr) {
        self.push_span(text, attrs, false);
    }

    fn push_cursor_cell(&mut self) {
        self.push_span(" ", Attr::INVERSE, true);
    }

    fn push_span(&mut self, text: &str, attrs: Attr, cursor_cell: bool) {
        if text.is_empty() {
            return;
        }
        if let Some(last) = self.spans.last_mut() {
            if last.attrs == attrs && last.cursor_cell == cursor_cell {
                last.text.push_str(text);
                return;
            }
        }
        self.spans.push(Span {
            text: text.to_string(),
            attrs,
            cursor_cell,
        });
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Everything on screen, cursor cells included, without styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// The displayed value or placeholder, without cursor padding.
    pub fn content_text(&self) -> String {
        self.spans
            .iter()
            .filter(|s| !s.cursor_cell)
            .map(|s| s.text.as_str())
            .collect()
    }

    /// Compose the final string through a styling helper.
    pub fn to_styled_string(&self, stylist: &dyn Stylist) -> String {
        let mut out = String::new();
        for span in &self.spans {
            let mut text = span.text.clone();
            if span.attrs.contains(Attr::DIM) {
                text = stylist.apply(&text, StyleIntent::Dim);
            }
            if span.attrs.contains(Attr::INVERSE) {
                text = stylist.apply(&text, StyleIntent::Inverse);
            }
            out.push_str(&text);
        }
        out
    }
}

/// Render the input.
///
/// Modes, first match wins:
/// - highlighted: everything inverse
/// - cursor (`show_cursor && focus`): fake cursor at `cursor_offset`, plus
///   the pasted run before it when `highlight_pasted_text` is on
/// - plain: no inverse, placeholder dimmed
pub fn render(
    value: &str,
    placeholder: Option<&str>,
    state: &InputState,
    config: &InputConfig,
) -> StyledText {
    let len = char_len(value);
    let displayed: String = match config.mask {
        Some(mask) => std::iter::repeat_n(mask, len).collect(),
        None => value.to_string(),
    };
    let placeholder = placeholder.filter(|p| !p.is_empty() && value.is_empty());
    let cursor_visible = config.show_cursor && config.focus;

    let mut out = StyledText::new();

    if state.is_highlighted {
        match placeholder {
            Some(p) => out.push(p, Attr::INVERSE),
            None if displayed.is_empty() && cursor_visible => out.push_cursor_cell(),
            None => out.push(&displayed, Attr::INVERSE),
        }
        return out;
    }

    if !cursor_visible {
        match placeholder {
            Some(p) => out.push(p, Attr::DIM),
            None => out.push(&displayed, Attr::NONE),
        }
        return out;
    }

    if let Some(p) = placeholder {
        let mut chars = p.chars();
        if let Some(first) = chars.next() {
            let mut buf = [0u8; 4];
            out.push(first.encode_utf8(&mut buf), Attr::INVERSE);
        }
        out.push(chars.as_str(), Attr::DIM);
        return out;
    }

    if displayed.is_empty() {
        out.push_cursor_cell();
        return out;
    }

    let cursor = state.cursor_offset.min(len);
    let width = if config.highlight_pasted_text {
        state.cursor_width
    } else {
        0
    };
    let highlight_start = cursor.saturating_sub(width);

    let mut buf = [0u8; 4];
    for (i, ch) in displayed.chars().enumerate() {
        let attrs = if (highlight_start..=cursor).contains(&i) {
            Attr::INVERSE
        } else {
            Attr::NONE
        };
        out.push(ch.encode_utf8(&mut buf), attrs);
    }

    if cursor == len {
        out.push_cursor_cell();
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::MarkupStylist;

    fn state(cursor_offset: usize, cursor_width: usize, is_highlighted: bool) -> InputState {
        InputState { cursor_offset, cursor_width, is_highlighted }
    }

    fn markup(out: &StyledText) -> String {
        out.to_styled_string(&MarkupStylist)
    }

    #[test]
    fn test_empty_value_renders_inverse_space() {
        let out = render("", None, &InputState::new(""), &InputConfig::default());
        assert_eq!(markup(&out), "[inverse] [/inverse]");
        assert_eq!(out.content_text(), "");
    }

    #[test]
    fn test_cursor_at_end_appends_inverse_space() {
        let out = render("abc", None, &state(3, 0, false), &InputConfig::default());
        assert_eq!(markup(&out), "abc[inverse] [/inverse]");
        assert_eq!(out.plain_text(), "abc ");
        assert_eq!(out.content_text(), "abc");
    }

    #[test]
    fn test_cursor_in_middle_inverts_one_char() {
        let out = render("abc", None, &state(1, 0, false), &InputConfig::default());
        assert_eq!(markup(&out), "a[inverse]b[/inverse]c");
    }

    #[test]
    fn test_pasted_run_highlight() {
        let config = InputConfig { highlight_pasted_text: true, ..Default::default() };
        let out = render("abcdef", None, &state(4, 3, false), &config);
        assert_eq!(markup(&out), "a[inverse]bcde[/inverse]f");

        // Width is ignored unless highlight_pasted_text is on
        let out = render("abcdef", None, &state(4, 3, false), &InputConfig::default());
        assert_eq!(markup(&out), "abcd[inverse]e[/inverse]f");
    }

    #[test]
    fn test_pasted_run_at_end() {
        let config = InputConfig { highlight_pasted_text: true, ..Default::default() };
        let out = render("abcd", None, &state(4, 2, false), &config);
        assert_eq!(markup(&out), "ab[inverse]cd[/inverse][inverse] [/inverse]");
    }

    #[test]
    fn test_mask_is_length_preserving() {
        let config = InputConfig { mask: Some('*'), focus: false, ..Default::default() };
        let out = render("Hello", None, &state(5, 0, false), &config);
        assert_eq!(out.plain_text(), "*****");

        let config = InputConfig { mask: Some('*'), ..Default::default() };
        let out = render("héllo", None, &state(5, 0, false), &config);
        assert_eq!(out.content_text(), "*****");
    }

    #[test]
    fn test_highlighted_mode() {
        let out = render("select me", None, &state(9, 0, true), &InputConfig::default());
        assert_eq!(markup(&out), "[inverse]select me[/inverse]");

        let out = render("", Some("Name"), &state(0, 0, true), &InputConfig::default());
        assert_eq!(markup(&out), "[inverse]Name[/inverse]");
    }

    #[test]
    fn test_placeholder_with_cursor() {
        let out = render("", Some("Search"), &state(0, 0, false), &InputConfig::default());
        assert_eq!(markup(&out), "[inverse]S[/inverse][dim]earch[/dim]");
        assert_eq!(out.content_text(), "Search");
    }

    #[test]
    fn test_placeholder_without_focus() {
        let config = InputConfig { focus: false, ..Default::default() };
        let out = render("", Some("Search"), &state(0, 0, false), &config);
        assert_eq!(markup(&out), "[dim]Search[/dim]");
    }

    #[test]
    fn test_placeholder_hidden_once_value_present() {
        let out = render("x", Some("Search"), &state(1, 0, false), &InputConfig::default());
        assert_eq!(out.content_text(), "x");
    }

    #[test]
    fn test_plain_mode_has_no_inverse() {
        let config = InputConfig { show_cursor: false, ..Default::default() };
        let out = render("abc", None, &state(1, 0, false), &config);
        assert_eq!(markup(&out), "abc");
        assert!(out.spans().iter().all(|s| s.attrs.is_empty()));
    }

    #[test]
    fn test_strip_round_trip() {
        let cases = [
            ("hello", None, state(2, 0, false), InputConfig::default()),
            ("hello", None, state(5, 0, true), InputConfig::default()),
            ("secret", None, state(3, 0, false), InputConfig { mask: Some('•'), ..Default::default() }),
            ("", Some("Type here"), state(0, 0, false), InputConfig::default()),
        ];

        for (value, placeholder, st, config) in cases {
            let out = render(value, placeholder, &st, &config);
            let expected = match (placeholder, config.mask) {
                (Some(p), _) if value.is_empty() => p.to_string(),
                (_, Some(m)) => std::iter::repeat_n(m, value.chars().count()).collect(),
                _ => value.to_string(),
            };
            assert_eq!(MarkupStylist::strip(&markup(&out)), expected);
            assert_eq!(out.content_text(), expected);
        }
    }
}
