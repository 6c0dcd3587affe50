use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;

pub struct TextArea {}

impl<'a> TextArea {
    /// Chat message input.
    pub fn prompt(title: &str) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::default();
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .title(title.to_string())
                .padding(Padding::new(1, 1, 0, 0)),
        );
        textarea.set_placeholder_text("Type your message...");

        return textarea;
    }

    /// Single line login form field, optionally pre-filled.
    pub fn field(label: &str, value: &str) -> tui_textarea::TextArea<'a> {
        let mut textarea = tui_textarea::TextArea::new(vec![value.to_string()]);
        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(label.to_string())
                .padding(Padding::new(1, 1, 0, 0)),
        );
        textarea.set_cursor_line_style(Style::default());
        textarea.move_cursor(tui_textarea::CursorMove::End);

        return textarea;
    }

    pub fn set_focus(textarea: &mut tui_textarea::TextArea<'a>, focused: bool) {
        if focused {
            textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
        } else {
            textarea.set_cursor_style(Style::default());
        }
    }
}
