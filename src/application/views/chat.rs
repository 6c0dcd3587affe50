use ratatui::prelude::*;

use crate::domain::services::AppState;

pub fn render(frame: &mut Frame, rect: Rect, app_state: &mut AppState) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Min(1), Constraint::Max(4)])
        .split(rect);

    if layout[0].width != app_state.last_known_width
        || layout[0].height != app_state.last_known_height
    {
        app_state.set_rect(layout[0]);
    }

    if let Some(workspace) = app_state.workspace.as_ref() {
        workspace
            .bubble_list
            .render(frame, layout[0], workspace.scroll.position);
        frame.render_widget(workspace.textarea.widget(), layout[1]);
    }
}
