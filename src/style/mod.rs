//! Styling helper - turns a string plus a style intent into a styled string.
//!
//! The text input never writes escape sequences itself. It describes what it
//! wants (inverse video for the fake cursor and highlight, dim for the
//! placeholder) and an injected [`Stylist`] produces the string.
//!
//! - [`AnsiStylist`] - crossterm-backed, for real terminals
//! - [`MarkupStylist`] - readable tags, for tests and logs

mod ansi;

pub use ansi::strip_ansi;

use crossterm::style::Stylize;

/// A styling request understood by every [`Stylist`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StyleIntent {
    /// Swap foreground and background (fake cursor, highlight).
    Inverse,
    /// Grey / dimmed text (placeholder remainder).
    Dim,
}

/// Injected styling capability.
pub trait Stylist {
    /// Return `text` styled with `intent`.
    fn apply(&self, text: &str, intent: StyleIntent) -> String;
}

/// Terminal styling through crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiStylist;

impl Stylist for AnsiStylist {
    fn apply(&self, text: &str, intent: StyleIntent) -> String {
        match intent {
            StyleIntent::Inverse => text.reverse().to_string(),
            StyleIntent::Dim => text.dark_grey().to_string(),
        }
    }
}

/// Wraps text in `[inverse]...[/inverse]` / `[dim]...[/dim]` tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupStylist;

impl MarkupStylist {
    /// Remove the tags this stylist produces.
    pub fn strip(s: &str) -> String {
        ["[inverse]", "[/inverse]", "[dim]", "[/dim]"]
            .iter()
            .fold(s.to_string(), |acc, tag| acc.replace(tag, ""))
    }
}

impl Stylist for MarkupStylist {
    fn apply(&self, text: &str, intent: StyleIntent) -> String {
        let tag = match intent {
            StyleIntent::Inverse => "inverse",
            StyleIntent::Dim => "dim",
        };
        format!("[{tag}]{text}[/{tag}]")
    }
}
