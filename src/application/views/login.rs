use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;

use crate::domain::services::LoginForm;

const FORM_WIDTH: u16 = 50;
const FORM_HEIGHT: u16 = 12;

fn centered(rect: Rect) -> Rect {
    let width = FORM_WIDTH.min(rect.width);
    let height = FORM_HEIGHT.min(rect.height);
    return Rect {
        x: rect.x + (rect.width - width) / 2,
        y: rect.y + (rect.height - height) / 2,
        width,
        height,
    };
}

pub fn render(frame: &mut Frame, rect: Rect, form: &LoginForm) {
    let area = centered(rect);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .title("👋 Screenchat login");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(form.user_id.widget(), layout[0]);
    frame.render_widget(form.user_name.widget(), layout[1]);

    let mut status = Line::from(Span::styled(
        "Tab to switch fields, Enter to log in",
        Style::default().fg(Color::DarkGray),
    ));
    if let Some(error) = &form.error {
        status = Line::from(Span::styled(error.to_string(), Style::default().fg(Color::Red)));
    }
    frame.render_widget(
        Paragraph::new(status)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        layout[2],
    );
}
