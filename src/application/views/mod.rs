#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;

pub mod analytics;
pub mod chat;
pub mod login;
pub mod nav;
pub mod report;

use ratatui::prelude::*;

use crate::domain::models::ApiError;
use crate::domain::models::Screen;
use crate::domain::services::AppState;

/// Shown in place of a screen's content when the service couldn't be used.
pub fn unreachable_notice(err: &ApiError) -> String {
    match err {
        ApiError::Network(reason) => {
            return format!("⚠️ Unable to reach the screening service: {reason}");
        }
        ApiError::Payload(reason) => {
            return format!("⚠️ Unexpected response from the screening service: {reason}");
        }
    }
}

pub fn render(frame: &mut Frame, app_state: &mut AppState) {
    let size = frame.size();
    if !app_state.is_logged_in() {
        login::render(frame, size, &app_state.login);
        return;
    }
    let workspace = match app_state.workspace.as_mut() {
        Some(workspace) => workspace,
        None => return,
    };

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(3), Constraint::Min(1)])
        .split(size);

    let screen = workspace.screen;
    nav::render(frame, layout[0], screen);

    match screen {
        Screen::Chat => {
            chat::render(frame, layout[1], app_state);
        }
        Screen::Analytics => {
            analytics::render(frame, layout[1], workspace);
        }
        Screen::Report => {
            report::render(frame, layout[1], workspace);
        }
    }
}
