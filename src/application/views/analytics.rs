#[cfg(test)]
#[path = "analytics_test.rs"]
mod tests;

use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use serde_json::Value;

use super::unreachable_notice;
use crate::domain::models::Loading;
use crate::domain::services::Workspace;

/// Pretty prints JSON bodies. Anything else is shown as it was received.
pub fn format_analytics(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Ok(pretty) = serde_json::to_string_pretty(&value) {
            return pretty;
        }
    }

    return body.to_string();
}

pub fn render(frame: &mut Frame, rect: Rect, workspace: &mut Workspace) {
    let analytics = &workspace.analytics;
    if analytics.is_pending() {
        Loading::new("Loading analytics...").render(frame, rect);
        return;
    }

    let mut lines: Vec<Line> = vec![];
    if let Some(err) = &analytics.error {
        lines.push(Line::from(Span::styled(
            unreachable_notice(err),
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(body) = &analytics.value {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        for line in format_analytics(body).split('\n') {
            lines.push(Line::from(line.to_string()));
        }
    }

    let mut title = "📊 Session Analytics".to_string();
    if analytics.loading {
        title = format!("{title} (refreshing...)");
    }

    workspace.page_scroll.set_state(
        u16::try_from(lines.len()).unwrap_or(u16::MAX),
        rect.height.saturating_sub(2),
    );

    frame.render_widget(
        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .padding(Padding::new(1, 1, 0, 0)),
            )
            .wrap(Wrap { trim: false })
            .scroll((workspace.page_scroll.position, 0)),
        rect,
    );
}
