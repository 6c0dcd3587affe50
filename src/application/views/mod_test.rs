use anyhow::Result;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use test_utils::minimal_report_fixture;
use tokio::sync::mpsc;

use super::render;
use crate::domain::models::Action;
use crate::domain::models::ApiError;
use crate::domain::models::Event;
use crate::domain::models::Report;
use crate::domain::models::Screen;
use crate::domain::services::AppState;

fn draw(app_state: &mut AppState) -> Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(80, 24))?;
    terminal.draw(|frame| {
        render(frame, app_state);
    })?;

    let screen = terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| return cell.symbol.to_string())
        .collect::<String>();

    return Ok(screen);
}

#[test]
fn it_renders_the_login_form() -> Result<()> {
    let mut app_state = AppState::new("en", "", "");
    let screen = draw(&mut app_state)?;

    assert!(screen.contains("User ID"));
    assert!(screen.contains("User Name"));
    assert!(screen.contains("Enter to log in"));

    return Ok(());
}

#[test]
fn it_renders_login_errors() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = AppState::new("en", "", "");
    app_state.handle_event(Event::KeyboardEnter(), &tx)?;

    let screen = draw(&mut app_state)?;
    assert!(screen.contains("Please enter both fields"));

    return Ok(());
}

#[test]
fn it_renders_the_chat() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = AppState::new("en", "u-17", "Ada");
    app_state.handle_event(Event::KeyboardEnter(), &tx)?;

    let screen = draw(&mut app_state)?;
    assert!(screen.contains("F1 Chat"));
    assert!(screen.contains("F3 Report"));
    assert!(screen.contains("Welcome! Starting session..."));
    assert_eq!(app_state.last_known_width, 80);

    return Ok(());
}

#[test]
fn it_renders_loading_then_results() -> Result<()> {
    let (tx, _rx) = mpsc::unbounded_channel::<Action>();
    let mut app_state = AppState::new("en", "u-17", "Ada");
    app_state.handle_event(Event::KeyboardEnter(), &tx)?;

    app_state.handle_event(Event::UISelectScreen(Screen::Analytics), &tx)?;
    assert!(draw(&mut app_state)?.contains("Loading analytics..."));

    app_state.handle_event(
        Event::ApiAnalytics {
            generation: 1,
            res: Ok(r#"{"sessions":3}"#.to_string()),
        },
        &tx,
    )?;
    assert!(draw(&mut app_state)?.contains(r#""sessions": 3"#));

    app_state.handle_event(Event::UISelectScreen(Screen::Report), &tx)?;
    assert!(draw(&mut app_state)?.contains("Loading report..."));

    let report = Report::parse(minimal_report_fixture())?;
    app_state.handle_event(
        Event::ApiReport {
            generation: 1,
            res: Ok(report),
        },
        &tx,
    )?;
    let screen = draw(&mut app_state)?;
    assert!(screen.contains("Patient ID: p1"));
    assert!(screen.contains("Severity: moderate"));

    app_state.handle_event(Event::KeyboardCTRLR(), &tx)?;
    app_state.handle_event(
        Event::ApiReport {
            generation: 2,
            res: Err(ApiError::Payload("bad".to_string())),
        },
        &tx,
    )?;
    let screen = draw(&mut app_state)?;
    assert!(screen.contains("Invalid report format"));
    assert!(screen.contains("Patient ID: p1"));

    return Ok(());
}
