//! End-to-end interaction scenarios on the shell state.
//!
//! Sends run on a paused tokio clock so the simulated delay elapses
//! instantly and deterministically.

mod common;

use std::time::{Duration, Instant};

use common::{render_frame, settled_after, test_app};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use nooph::app::{App, AppMessage};
use nooph::error::SubmitRejected;
use nooph::input::{Command, InputContext};
use nooph::state::{MenuEntry, SendGlyph};

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn wheel_down() -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 10,
        row: 10,
        modifiers: KeyModifiers::NONE,
    }
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        app.handle_key(key(KeyCode::Char(c)));
    }
}

// ============================================================================
// Sidebar
// ============================================================================

#[test]
fn test_menu_tap_shows_sidebar_and_overlay_tap_hides_it() {
    let mut app = test_app();
    let start = Instant::now();
    render_frame(&mut app, start);

    // menu button sits at the leading edge of the header
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 1,
        row: 1,
        modifiers: KeyModifiers::NONE,
    });
    assert!(app.sidebar.is_visible());
    assert!(app.sidebar.overlay_tappable());

    let settled = settled_after(&app, start);
    render_frame(&mut app, settled);
    assert_eq!(app.sidebar.offset_at(settled, &app.config), 0.0);
    assert!((app.sidebar.overlay_opacity_at(settled, &app.config) - 0.4).abs() < 1e-6);

    // right of the panel is overlay
    app.handle_tap(common::WIDTH - 2, 12);
    assert!(!app.sidebar.is_visible());
    assert!(!app.sidebar.overlay_tappable());
}

#[test]
fn test_tap_inside_panel_does_not_dismiss() {
    let mut app = test_app();
    let start = Instant::now();
    app.toggle_sidebar_at(start);
    let settled = settled_after(&app, start);
    render_frame(&mut app, settled);

    app.handle_tap(3, 1);
    assert!(app.sidebar.is_visible());
}

#[test]
fn test_keyboard_sidebar_navigation() {
    let mut app = test_app();
    app.handle_key(ctrl('b'));
    assert!(app.sidebar.is_visible());
    assert_eq!(app.input_context(), InputContext::Sidebar);
    assert_eq!(app.sidebar.highlighted(), MenuEntry::Home);

    app.handle_key(key(KeyCode::Down));
    app.handle_key(key(KeyCode::Down));
    assert_eq!(app.sidebar.highlighted(), MenuEntry::Settings);

    // selecting only logs; the sidebar stays up
    app.handle_key(key(KeyCode::Enter));
    assert!(app.sidebar.is_visible());

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.sidebar.is_visible());
    assert_eq!(app.input_context(), InputContext::Browsing);
}

#[test]
fn test_dismiss_when_hidden_is_noop() {
    let mut app = test_app();
    let now = Instant::now();
    app.execute(Command::DismissSidebar);
    assert!(!app.sidebar.is_visible());
    assert!(!app.sidebar.is_animating(now));
}

#[test]
fn test_rapid_toggle_settles_on_last_state() {
    let mut app = test_app();
    let start = Instant::now();
    let second = start + Duration::from_millis(100);
    app.toggle_sidebar_at(start);
    app.toggle_sidebar_at(second);
    assert!(!app.sidebar.is_visible());

    let later = settled_after(&app, second);
    assert_eq!(app.sidebar.reveal_at(later), 0.0);
    assert!(!app.sidebar.is_animating(later));
}

#[test]
fn test_wheel_does_not_scroll_under_overlay() {
    let mut app = test_app();
    render_frame(&mut app, Instant::now());
    app.toggle_sidebar();

    app.handle_mouse(wheel_down());
    assert_eq!(app.content.scroll().offset(), 0);
}

// ============================================================================
// Focus and scrolling
// ============================================================================

#[test]
fn test_focus_then_tap_outside_blurs() {
    let mut app = test_app();
    render_frame(&mut app, Instant::now());

    // the composer field
    app.handle_tap(20, common::HEIGHT - 2);
    assert!(app.composer.is_focused());
    assert_eq!(app.input_context(), InputContext::Editing);

    // the content area
    app.handle_tap(20, 10);
    assert!(!app.composer.is_focused());
}

#[test]
fn test_scrolling_dismisses_keyboard() {
    let mut app = test_app();
    render_frame(&mut app, Instant::now());
    app.focus_input();

    app.handle_mouse(wheel_down());
    assert!(!app.composer.is_focused());
    assert_eq!(app.content.scroll().offset(), 3);
}

#[test]
fn test_keyboard_scroll_to_bottom_and_back() {
    let mut app = test_app();
    render_frame(&mut app, Instant::now());

    app.handle_key(key(KeyCode::End));
    let max = app.content.scroll().max_scroll();
    assert!(max > 0);
    assert_eq!(app.content.scroll().offset(), max);

    app.handle_key(key(KeyCode::Char('g')));
    assert_eq!(app.content.scroll().offset(), 0);
}

// ============================================================================
// Composer and send
// ============================================================================

#[test]
fn test_empty_submit_is_rejected() {
    let mut app = test_app();
    assert_eq!(app.submit(), Err(SubmitRejected::EmptyText));
    assert!(!app.composer.is_sending());
}

#[tokio::test(start_paused = true)]
async fn test_type_and_send_clears_after_delay() {
    let mut app = test_app();
    let mut rx = app.message_rx.take().unwrap();

    app.handle_key(key(KeyCode::Char('i')));
    assert!(app.composer.is_focused());
    type_text(&mut app, "hi");
    assert_eq!(app.composer.text(), "hi");
    assert!(app.composer.send_affordance().enabled);

    app.handle_key(key(KeyCode::Enter));
    assert!(app.composer.is_sending());
    let affordance = app.composer.send_affordance();
    assert!(!affordance.enabled);
    assert_eq!(affordance.glyph, SendGlyph::Sending);
    // text stays until completion
    assert_eq!(app.composer.text(), "hi");

    let start = tokio::time::Instant::now();
    let message = rx.recv().await.unwrap();
    assert!(start.elapsed() >= app.config.send_delay);
    app.handle_message(message);

    assert!(!app.composer.is_sending());
    assert_eq!(app.composer.text(), "");
    assert!(!app.composer.is_focused());
    assert_eq!(app.composer.send_affordance().glyph, SendGlyph::Idle);
    assert!(!app.composer.send_affordance().enabled);
}

#[tokio::test(start_paused = true)]
async fn test_second_submit_while_sending_is_rejected() {
    let mut app = test_app();
    let mut rx = app.message_rx.take().unwrap();
    app.update_text("first");

    let id = app.submit().unwrap();
    assert_eq!(app.submit(), Err(SubmitRejected::AlreadySending));

    let message = rx.recv().await.unwrap();
    assert_eq!(message, AppMessage::SendCompleted { send_id: id });
    app.handle_message(message);

    // exactly one completion
    tokio::time::sleep(app.config.send_delay * 2).await;
    assert!(rx.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_edits_during_send_are_cleared_on_completion() {
    let mut app = test_app();
    let mut rx = app.message_rx.take().unwrap();
    app.focus_input();
    type_text(&mut app, "hi");
    app.submit().unwrap();

    type_text(&mut app, "!!");
    assert_eq!(app.composer.text(), "hi!!");

    let message = rx.recv().await.unwrap();
    app.handle_message(message);
    assert_eq!(app.composer.text(), "");
}

#[tokio::test(start_paused = true)]
async fn test_stale_completion_is_ignored() {
    let mut app = test_app();
    let _rx = app.message_rx.take().unwrap();
    app.update_text("hello");
    let id = app.submit().unwrap();

    app.handle_message(AppMessage::SendCompleted { send_id: id + 100 });
    assert!(app.composer.is_sending());
    assert_eq!(app.composer.text(), "hello");
}

#[tokio::test(start_paused = true)]
async fn test_dropping_app_cancels_send() {
    let mut app = test_app();
    let mut rx = app.message_rx.take().unwrap();
    app.update_text("bye");
    app.submit().unwrap();
    drop(app);

    tokio::time::sleep(Duration::from_secs(5)).await;
    // every sender is gone and nothing was posted
    assert!(rx.recv().await.is_none());
}

#[test]
fn test_quit_keys() {
    let mut app = test_app();
    app.handle_key(key(KeyCode::Char('q')));
    assert!(app.should_quit);

    let mut app = test_app();
    app.focus_input();
    app.handle_key(key(KeyCode::Char('q')));
    assert!(!app.should_quit);
    assert_eq!(app.composer.text(), "q");
    app.handle_key(ctrl('c'));
    assert!(app.should_quit);
}

#[test]
fn test_attach_leaves_state_alone() {
    let mut app = test_app();
    app.update_text("keep");
    app.execute(Command::Attach);
    assert_eq!(app.composer.text(), "keep");
    assert!(!app.composer.is_sending());
}

#[test]
fn test_paste_only_reaches_focused_field() {
    let mut app = test_app();
    app.handle_paste("ignored");
    assert_eq!(app.composer.text(), "");

    app.focus_input();
    app.handle_paste("pasted");
    assert_eq!(app.composer.text(), "pasted");
}
