//! Text painting - the seam between the input and whatever puts text on screen.
//!
//! The input hands over one pre-styled line plus the pass-through style
//! props. Layout and terminal output belong to the painter.
//!
//! - [`TerminalPainter`] - repaints the current terminal line with crossterm
//! - [`FramePainter`] - keeps the last frame in memory

use std::cell::{Cell, RefCell};
use std::io::{self, Write};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::{
    Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
};
use crossterm::terminal::{Clear, ClearType};

use crate::types::{Attr, Rgba};

/// Pass-through style applied to the whole painted text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextStyle {
    pub color: Option<Rgba>,
    pub background_color: Option<Rgba>,
    /// Dim, bold, italic, underline, strikethrough.
    pub attrs: Attr,
}

/// Text-painting primitive.
pub trait TextPainter {
    /// Paint `content` (already carrying its inline styling) with `style`.
    fn paint(&self, content: &str, style: &TextStyle) -> io::Result<()>;
}

/// Convert an Rgba into a crossterm color.
///
/// Terminals have no blending, so a fully transparent color falls back to
/// the terminal default.
pub fn to_crossterm_color(color: Rgba) -> Color {
    if color.is_terminal_default() || color.a == 0 {
        Color::Reset
    } else if color.is_ansi() {
        Color::AnsiValue(color.ansi_index())
    } else {
        Color::Rgb {
            r: color.r.clamp(0, 255) as u8,
            g: color.g.clamp(0, 255) as u8,
            b: color.b.clamp(0, 255) as u8,
        }
    }
}

const ATTRIBUTES: [(Attr, Attribute); 5] = [
    (Attr::BOLD, Attribute::Bold),
    (Attr::DIM, Attribute::Dim),
    (Attr::ITALIC, Attribute::Italic),
    (Attr::UNDERLINE, Attribute::Underlined),
    (Attr::STRIKETHROUGH, Attribute::CrossedOut),
];

// =============================================================================
// Terminal Painter
// =============================================================================

/// Repaints the current line of a terminal-like writer on every frame.
pub struct TerminalPainter<W: Write> {
    out: RefCell<W>,
}

impl<W: Write> TerminalPainter<W> {
    pub fn new(out: W) -> Self {
        Self { out: RefCell::new(out) }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write> TextPainter for TerminalPainter<W> {
    fn paint(&self, content: &str, style: &TextStyle) -> io::Result<()> {
        let mut out = self.out.borrow_mut();

        queue!(out, MoveToColumn(0), Clear(ClearType::CurrentLine))?;
        if let Some(color) = style.color {
            queue!(out, SetForegroundColor(to_crossterm_color(color)))?;
        }
        if let Some(bg) = style.background_color {
            queue!(out, SetBackgroundColor(to_crossterm_color(bg)))?;
        }
        for (attr, attribute) in ATTRIBUTES {
            if style.attrs.contains(attr) {
                queue!(out, SetAttribute(attribute))?;
            }
        }
        queue!(out, Print(content), SetAttribute(Attribute::Reset), ResetColor)?;

        out.flush()
    }
}

// =============================================================================
// Frame Painter
// =============================================================================

/// Keeps the most recent frame so callers can inspect what was painted.
#[derive(Debug, Default)]
pub struct FramePainter {
    last: RefCell<Option<(String, TextStyle)>>,
    count: Cell<usize>,
}

impl FramePainter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of the last paint.
    pub fn last_content(&self) -> Option<String> {
        self.last.borrow().as_ref().map(|(content, _)| content.clone())
    }

    /// Style of the last paint.
    pub fn last_style(&self) -> Option<TextStyle> {
        self.last.borrow().as_ref().map(|(_, style)| *style)
    }

    /// Number of paints so far.
    pub fn paint_count(&self) -> usize {
        self.count.get()
    }
}

impl TextPainter for FramePainter {
    fn paint(&self, content: &str, style: &TextStyle) -> io::Result<()> {
        *self.last.borrow_mut() = Some((content.to_string(), *style));
        self.count.set(self.count.get() + 1);
        Ok(())
    }
}
