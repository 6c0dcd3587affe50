#[cfg(test)]
#[path = "bubble_test.rs"]
mod tests;

use ratatui::style::Color;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use unicode_width::UnicodeWidthStr;

use crate::domain::models::Author;
use crate::domain::models::Message;
use crate::domain::models::MessageType;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BubbleAlignment {
    Left,
    Right,
}

pub struct Bubble<'a> {
    message: &'a Message,
    title: String,
    alignment: BubbleAlignment,
}

impl<'a> Bubble<'a> {
    pub fn new(message: &'a Message, title: &str, alignment: BubbleAlignment) -> Bubble<'a> {
        return Bubble {
            message,
            title: title.to_string(),
            alignment,
        };
    }

    pub fn as_lines(&self, window_max_width: usize) -> Vec<Line<'static>> {
        // Bubbles take at most three quarters of the window. Borders and inner
        // padding take 4 columns.
        let max_text_width = (window_max_width * 3 / 4).saturating_sub(4).max(1);
        let message_lines = self.message.as_string_lines(max_text_width);

        let title_width = self.title.width();
        let inner_width = message_lines
            .iter()
            .map(|line| return line.width())
            .max()
            .unwrap_or(0)
            .max(title_width);
        let bubble_padding = " ".repeat(window_max_width.saturating_sub(inner_width + 4));

        let top_fill = "─".repeat(inner_width + 2 - title_width);
        let mut rows = vec![vec![self.highlight_span(format!(
            "╭{}{top_fill}╮",
            self.title
        ))]];

        for line in message_lines {
            let fill = " ".repeat(inner_width - line.width());
            rows.push(vec![
                self.highlight_span("│ ".to_string()),
                self.text_span(line),
                self.highlight_span(format!("{fill} │")),
            ]);
        }

        rows.push(vec![self.highlight_span(format!(
            "╰{}╯",
            "─".repeat(inner_width + 2)
        ))]);

        return rows
            .into_iter()
            .map(|mut spans| {
                if self.alignment == BubbleAlignment::Right {
                    spans.insert(0, Span::from(bubble_padding.to_string()));
                }
                return Line::from(spans);
            })
            .collect();
    }

    fn style(&self) -> Style {
        if self.message.message_type() == MessageType::Error {
            return Style::default().fg(Color::Red);
        }
        match self.message.author {
            Author::App => return Style::default().fg(Color::Rgb(138, 85, 63)), // Brown
            Author::Person => return Style::default().fg(Color::Cyan),
            Author::Assistant => return Style::default(),
        }
    }

    fn highlight_span(&self, text: String) -> Span<'static> {
        return Span::styled(text, self.style());
    }

    fn text_span(&self, text: String) -> Span<'static> {
        if self.message.message_type() == MessageType::Error {
            return self.highlight_span(text);
        }
        return Span::from(text);
    }
}
