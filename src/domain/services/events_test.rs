use crossterm::event::Event as CrosstermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyEventState;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use super::handle_crossterm;
use crate::domain::models::Event;
use crate::domain::models::Screen;

fn key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
    return CrosstermEvent::Key(KeyEvent::new(code, modifiers));
}

#[test]
fn it_maps_navigation_keys() {
    assert!(matches!(
        handle_crossterm(key(KeyCode::Tab, KeyModifiers::NONE)),
        Some(Event::KeyboardTab())
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
        Some(Event::KeyboardBackTab())
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::F(1), KeyModifiers::NONE)),
        Some(Event::UISelectScreen(Screen::Chat))
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::F(3), KeyModifiers::NONE)),
        Some(Event::UISelectScreen(Screen::Report))
    ));
    assert!(handle_crossterm(key(KeyCode::F(9), KeyModifiers::NONE)).is_none());
}

#[test]
fn it_maps_control_keys() {
    assert!(matches!(
        handle_crossterm(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
        Some(Event::KeyboardCTRLC())
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::Char('r'), KeyModifiers::CONTROL)),
        Some(Event::KeyboardCTRLR())
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::Char('u'), KeyModifiers::CONTROL)),
        Some(Event::UIScrollPageUp())
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::Char('d'), KeyModifiers::CONTROL)),
        Some(Event::UIScrollPageDown())
    ));
    assert!(matches!(
        handle_crossterm(key(KeyCode::Enter, KeyModifiers::NONE)),
        Some(Event::KeyboardEnter())
    ));
}

#[test]
fn it_passes_typing_through() {
    match handle_crossterm(key(KeyCode::Char('c'), KeyModifiers::NONE)) {
        Some(Event::KeyboardCharInput(input)) => {
            assert_eq!(input.key, tui_textarea::Key::Char('c'));
            assert!(!input.ctrl);
        }
        _ => panic!("expected char input"),
    }
}

#[test]
fn it_ignores_key_releases() {
    let release = KeyEvent {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(handle_crossterm(CrosstermEvent::Key(release)).is_none());
}

#[test]
fn it_maps_scrolling() {
    let wheel = CrosstermEvent::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    });
    assert!(matches!(handle_crossterm(wheel), Some(Event::UIScrollDown())));
    assert!(matches!(
        handle_crossterm(key(KeyCode::PageUp, KeyModifiers::NONE)),
        Some(Event::UIScrollPageUp())
    ));
    assert!(matches!(
        handle_crossterm(CrosstermEvent::Paste("hi".to_string())),
        Some(Event::KeyboardPaste(text)) if text == "hi"
    ));
}
