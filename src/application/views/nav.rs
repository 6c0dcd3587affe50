use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Tabs;

use crate::domain::models::Screen;

pub fn tab_titles() -> Vec<String> {
    return Screen::all()
        .iter()
        .enumerate()
        .map(|(idx, screen)| return format!("F{} {screen}", idx + 1))
        .collect();
}

pub fn render(frame: &mut Frame, rect: Rect, screen: Screen) {
    let tabs = Tabs::new(tab_titles())
        .select(screen.index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .highlight_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );

    frame.render_widget(tabs, rect);
}
