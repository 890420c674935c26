//! Text Input Example - Prompt for a name on the current line
//!
//! Demonstrates:
//! - Uncontrolled input with a placeholder
//! - Bracketed paste (pasted runs flash in inverse video)
//! - crossterm event loop feeding the keyboard registry
//!
//! Set SPARK_INPUT_LOG=/tmp/input.log to trace key handling to a file.
//!
//! Run with: cargo run --example text_input

use std::cell::{Cell, RefCell};
use std::fs::OpenOptions;
use std::io::stdout;
use std::rc::Rc;
use std::time::Duration;

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use spark_tui_text_input::{
    disable_paste, enable_paste, on_keyboard, KeyboardEvent, poll_event, route_event, uncontrolled_text_input,
    Rgba, TerminalPainter, UncontrolledTextInputProps,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    // The terminal belongs to the input, so logs only go to a file
    let Ok(path) = std::env::var("SPARK_INPUT_LOG") else {
        return;
    };
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_writer(file)
        .with_ansi(false)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .init();
}

/// Raw mode plus bracketed paste, undone on drop whichever way `main` exits.
struct TerminalGuard {
    paste: bool,
}

impl TerminalGuard {
    fn enter() -> std::io::Result<Self> {
        enable_raw_mode()?;
        let mut guard = Self { paste: false };
        enable_paste()?;
        guard.paste = true;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.paste {
            if let Err(err) = disable_paste() {
                tracing::warn!(error = %err, "failed to disable bracketed paste");
            }
        }
        if let Err(err) = disable_raw_mode() {
            tracing::warn!(error = %err, "failed to leave raw mode");
        }
    }
}

fn event_loop(running: &Cell<bool>) -> std::io::Result<()> {
    while running.get() {
        if let Some(event) = poll_event(Duration::from_millis(50))? {
            route_event(event);
        }
    }
    Ok(())
}

fn main() -> std::io::Result<()> {
    init_tracing();

    let running = Rc::new(Cell::new(true));
    let submitted: Rc<RefCell<Option<String>>> = Rc::new(RefCell::new(None));

    // Registered first so it sees Ctrl+C / Escape before the input does
    let _quit = on_keyboard({
        let running = running.clone();
        move |event: &KeyboardEvent| {
            let quit = event.key == "Escape" || (event.modifiers.ctrl && event.key == "c");
            if quit {
                running.set(false);
            }
            quit
        }
    });

    let props = UncontrolledTextInputProps {
        placeholder: Some("What's your name?".into()),
        highlight_pasted_text: true.into(),
        color: Rgba::parse("cyan").map(Into::into),
        on_submit: Some(Rc::new({
            let running = running.clone();
            let submitted = submitted.clone();
            move |value: &str| {
                *submitted.borrow_mut() = Some(value.to_string());
                running.set(false);
            }
        })),
        ..Default::default()
    };

    let result = {
        let _terminal = TerminalGuard::enter()?;
        let cleanup = uncontrolled_text_input(props, Rc::new(TerminalPainter::new(stdout())));
        let result = event_loop(&running);
        cleanup();
        result
    };
    println!();

    if let Some(name) = submitted.borrow().as_deref() {
        println!("Hello, {}!", if name.is_empty() { "stranger" } else { name });
    }

    result
}
