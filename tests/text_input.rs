//! End-to-end tests: keyboard dispatch through the component to the painter.

use std::cell::RefCell;
use std::rc::Rc;

use spark_signals::{signal, Signal};
use spark_tui_text_input::primitives::text_input::StyledText;
use spark_tui_text_input::state::keyboard::{self, KeyboardEvent, Modifiers};
use spark_tui_text_input::{
    text_input, uncontrolled_text_input, Attr, Cleanup, FramePainter, MarkupStylist, PropValue,
    Rgba, TextInputProps, UncontrolledTextInputProps,
};

// =============================================================================
// Helpers
// =============================================================================

struct Harness {
    value: Signal<String>,
    painter: Rc<FramePainter>,
    changes: Rc<RefCell<Vec<String>>>,
    submits: Rc<RefCell<Vec<String>>>,
    cleanup: Option<Cleanup>,
}

impl Harness {
    fn mount(initial: &str, configure: impl FnOnce(&mut TextInputProps)) -> Self {
        keyboard::reset_keyboard_state();

        let value = signal(initial.to_string());
        let painter = Rc::new(FramePainter::new());
        let changes = Rc::new(RefCell::new(Vec::new()));
        let submits = Rc::new(RefCell::new(Vec::new()));

        let mut props = TextInputProps::new(value.clone());
        props.stylist = Some(Rc::new(MarkupStylist));
        props.on_change = Some(Rc::new({
            let value = value.clone();
            let changes = changes.clone();
            move |v: &str| {
                changes.borrow_mut().push(v.to_string());
                value.set(v.to_string());
            }
        }));
        props.on_submit = Some(Rc::new({
            let submits = submits.clone();
            move |v: &str| submits.borrow_mut().push(v.to_string())
        }));
        configure(&mut props);

        let cleanup = text_input(props, painter.clone());
        Self { value, painter, changes, submits, cleanup: Some(cleanup) }
    }

    fn press(&self, key: &str) -> bool {
        keyboard::dispatch(KeyboardEvent::new(key))
    }

    fn type_text(&self, text: &str) {
        for ch in text.chars() {
            self.press(&ch.to_string());
        }
    }

    fn paste(&self, text: &str) -> bool {
        keyboard::dispatch(KeyboardEvent::paste(text))
    }

    fn frame(&self) -> String {
        self.painter.last_content().unwrap_or_default()
    }

    fn unmount(&mut self) {
        if let Some(cleanup) = self.cleanup.take() {
            cleanup();
        }
    }
}

impl Drop for Harness {
    fn drop(&mut self) {
        self.unmount();
    }
}

const CURSOR: &str = "[inverse] [/inverse]";

// =============================================================================
// Editing
// =============================================================================

#[test]
fn test_typing_appends_and_reports_each_change() {
    let h = Harness::mount("", |_| {});
    assert_eq!(h.frame(), CURSOR);

    h.type_text("hey");

    assert_eq!(h.value.get(), "hey");
    assert_eq!(*h.changes.borrow(), vec!["h", "he", "hey"]);
    assert_eq!(h.frame(), format!("hey{CURSOR}"));
}

#[test]
fn test_editing_in_the_middle() {
    let h = Harness::mount("helo", |_| {});

    h.press("ArrowLeft");
    h.type_text("l");
    assert_eq!(h.value.get(), "hello");
    assert_eq!(h.frame(), "hell[inverse]o[/inverse]");

    h.press("ArrowLeft");
    h.press("Backspace");
    assert_eq!(h.value.get(), "helo");
    assert_eq!(h.frame(), "he[inverse]l[/inverse]o");
}

#[test]
fn test_cursor_movement_never_fires_on_change() {
    let h = Harness::mount("abc", |_| {});

    for key in ["ArrowLeft", "ArrowLeft", "ArrowRight", "ArrowLeft", "ArrowLeft", "ArrowLeft"] {
        assert!(h.press(key));
    }

    assert!(h.changes.borrow().is_empty());
    assert_eq!(h.frame(), "[inverse]a[/inverse]bc");
}

#[test]
fn test_backspace_at_start_is_silent() {
    let h = Harness::mount("ab", |_| {});
    h.press("ArrowLeft");
    h.press("ArrowLeft");
    let paints = h.painter.paint_count();

    h.press("Backspace");
    h.press("Delete");

    assert_eq!(h.value.get(), "ab");
    assert!(h.changes.borrow().is_empty());
    assert_eq!(h.painter.paint_count(), paints);
}

#[test]
fn test_paste_arrives_as_one_change() {
    let h = Harness::mount("a", |p| p.highlight_pasted_text = true.into());

    assert!(h.paste("bcd"));

    assert_eq!(h.value.get(), "abcd");
    assert_eq!(*h.changes.borrow(), vec!["abcd"]);
    assert_eq!(h.frame(), format!("a[inverse]bcd[/inverse]{CURSOR}"));

    // Next keystroke drops the paste flash
    h.type_text("e");
    assert_eq!(h.frame(), format!("abcde{CURSOR}"));
}

#[test]
fn test_unicode_is_edited_by_character() {
    let h = Harness::mount("日本", |_| {});
    h.press("ArrowLeft");
    h.type_text("é");
    assert_eq!(h.value.get(), "日é本");

    h.press("Backspace");
    h.press("Backspace");
    assert_eq!(h.value.get(), "本");
}

// =============================================================================
// Pass-through keys and submit
// =============================================================================

#[test]
fn test_navigation_keys_pass_through() {
    let h = Harness::mount("abc", |_| {});

    assert!(!h.press("ArrowUp"));
    assert!(!h.press("ArrowDown"));
    assert!(!h.press("Tab"));
    assert!(!keyboard::dispatch(KeyboardEvent::with_modifiers("Tab", Modifiers::shift())));
    assert!(!keyboard::dispatch(KeyboardEvent::with_modifiers("c", Modifiers::ctrl())));

    assert_eq!(h.value.get(), "abc");
    assert!(h.changes.borrow().is_empty());
}

#[test]
fn test_enter_submits_current_value_once() {
    let h = Harness::mount("query", |_| {});
    let before = h.frame();

    assert!(h.press("Enter"));

    assert_eq!(*h.submits.borrow(), vec!["query"]);
    assert!(h.changes.borrow().is_empty());
    assert_eq!(h.frame(), before);
}

#[test]
fn test_release_events_are_not_handled() {
    let h = Harness::mount("", |_| {});
    let mut release = KeyboardEvent::new("x");
    release.state = spark_tui_text_input::KeyState::Release;

    keyboard::dispatch(release);

    assert_eq!(h.value.get(), "");
}

// =============================================================================
// Focus and highlight
// =============================================================================

#[test]
fn test_unfocused_input_ignores_keys() {
    let h = Harness::mount("abc", |p| p.focus = false.into());

    assert!(!h.press("x"));
    assert_eq!(h.value.get(), "abc");
    assert_eq!(h.frame(), "abc");
}

#[test]
fn test_highlight_on_focus_replaces_value() {
    let h = Harness::mount("old", |p| p.highlight_on_focus = true.into());
    assert_eq!(h.frame(), "[inverse]old[/inverse]");

    h.type_text("n");

    assert_eq!(h.value.get(), "n");
    assert_eq!(*h.changes.borrow(), vec!["n"]);
    assert_eq!(h.frame(), format!("n{CURSOR}"));
}

#[test]
fn test_focus_changes_follow_signal() {
    let focus = signal(false);
    let h = Harness::mount("text", |p| {
        p.focus = PropValue::Signal(focus.clone());
        p.highlight_on_focus = true.into();
    });
    assert_eq!(h.frame(), "text");

    focus.set(true);
    assert_eq!(h.frame(), "[inverse]text[/inverse]");

    focus.set(false);
    assert_eq!(h.frame(), "text");

    // Regaining focus selects again
    focus.set(true);
    h.press("ArrowLeft");
    assert_eq!(h.frame(), "tex[inverse]t[/inverse]");
}

// =============================================================================
// Controlled value
// =============================================================================

#[test]
fn test_external_truncation_reclamps_cursor() {
    let h = Harness::mount("long value", |_| {});

    h.value.set("lo".to_string());
    assert_eq!(h.frame(), format!("lo{CURSOR}"));

    h.type_text("w");
    assert_eq!(h.value.get(), "low");
}

#[test]
fn test_caller_may_reject_changes() {
    keyboard::reset_keyboard_state();
    let painter = Rc::new(FramePainter::new());
    let mut props = TextInputProps::new("fixed");
    props.stylist = Some(Rc::new(MarkupStylist));
    props.on_change = Some(Rc::new(|_: &str| {}));
    let cleanup = text_input(props, painter.clone());

    keyboard::dispatch(KeyboardEvent::new("x"));

    assert_eq!(painter.last_content().as_deref(), Some(format!("fixed{CURSOR}").as_str()));
    cleanup();
}

#[test]
fn test_rejected_edit_keeps_cursor_on_caller_value() {
    keyboard::reset_keyboard_state();
    let value = signal("fixed".to_string());
    let painter = Rc::new(FramePainter::new());
    let mut props = TextInputProps::new(value.clone());
    props.stylist = Some(Rc::new(MarkupStylist));
    props.on_change = Some(Rc::new(|_: &str| {}));
    let cleanup = text_input(props, painter.clone());

    keyboard::dispatch(KeyboardEvent::new("x"));
    value.set("fixedAB".to_string());

    // Cursor stays after "fixed", not after the rejected "x"
    assert_eq!(painter.last_content().as_deref(), Some("fixed[inverse]A[/inverse]B"));

    keyboard::dispatch(KeyboardEvent::new("ArrowLeft"));
    assert_eq!(painter.last_content().as_deref(), Some("fixe[inverse]d[/inverse]AB"));
    cleanup();
}

// =============================================================================
// Rendering options
// =============================================================================

#[test]
fn test_mask_hides_content() {
    let h = Harness::mount("", |p| p.mask = Some('*'));
    h.type_text("Hello");

    assert_eq!(h.value.get(), "Hello");
    assert_eq!(h.frame(), format!("*****{CURSOR}"));
}

#[test]
fn test_placeholder_shows_while_empty() {
    let h = Harness::mount("", |p| p.placeholder = Some("Name".into()));
    assert_eq!(h.frame(), "[inverse]N[/inverse][dim]ame[/dim]");

    h.type_text("J");
    assert_eq!(h.frame(), format!("J{CURSOR}"));

    h.press("Backspace");
    assert_eq!(h.frame(), "[inverse]N[/inverse][dim]ame[/dim]");
}

#[test]
fn test_style_props_reach_the_painter() {
    let h = Harness::mount("x", |p| {
        p.color = Some(Rgba::ansi(6).into());
        p.bold = Some(true.into());
        p.strikethrough = Some(true.into());
    });

    let style = h.painter.last_style().unwrap_or_default();
    assert_eq!(style.color, Some(Rgba::ansi(6)));
    assert_eq!(style.background_color, None);
    assert_eq!(style.attrs, Attr::BOLD | Attr::STRIKETHROUGH);
}

#[test]
fn test_styled_text_strips_back_to_value() {
    let out: StyledText = spark_tui_text_input::primitives::text_input::render(
        "secret",
        None,
        &spark_tui_text_input::primitives::InputState::new("secret"),
        &spark_tui_text_input::primitives::InputConfig { mask: Some('•'), ..Default::default() },
    );
    assert_eq!(MarkupStylist::strip(&out.to_styled_string(&MarkupStylist)), "•••••• ");
    assert_eq!(out.content_text(), "••••••");
}

// =============================================================================
// Lifecycle
// =============================================================================

#[test]
fn test_cleanup_unsubscribes() {
    let mut h = Harness::mount("abc", |_| {});
    let paints = h.painter.paint_count();
    h.unmount();

    assert_eq!(keyboard::handler_count(), 0);
    assert!(!h.press("x"));
    h.value.set("zzz".to_string());
    assert_eq!(h.painter.paint_count(), paints);
}

#[test]
fn test_uncontrolled_input_owns_value() {
    keyboard::reset_keyboard_state();
    let painter = Rc::new(FramePainter::new());
    let submitted = Rc::new(RefCell::new(None::<String>));

    let props = UncontrolledTextInputProps {
        initial_value: "draft".to_string(),
        highlight_on_focus: true.into(),
        stylist: Some(Rc::new(MarkupStylist)),
        on_submit: Some(Rc::new({
            let submitted = submitted.clone();
            move |v: &str| *submitted.borrow_mut() = Some(v.to_string())
        })),
        ..Default::default()
    };
    let cleanup = uncontrolled_text_input(props, painter.clone());
    assert_eq!(painter.last_content().as_deref(), Some("[inverse]draft[/inverse]"));

    keyboard::dispatch(KeyboardEvent::new("f"));
    keyboard::dispatch(KeyboardEvent::paste("inal"));
    keyboard::dispatch(KeyboardEvent::new("Enter"));

    assert_eq!(submitted.borrow().as_deref(), Some("final"));
    cleanup();
}
