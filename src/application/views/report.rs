#[cfg(test)]
#[path = "report_test.rs"]
mod tests;

use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;

use super::unreachable_notice;
use crate::domain::models::ApiError;
use crate::domain::models::Loading;
use crate::domain::models::Report;
use crate::domain::services::Workspace;

pub const INVALID_REPORT_NOTICE: &str = "Invalid report format";

fn heading(text: &str) -> Line<'static> {
    return Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ));
}

fn field(label: &str, value: &str) -> Line<'static> {
    return Line::from(vec![
        Span::styled(
            format!("{label}: "),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(value.to_string()),
    ]);
}

fn risk_style(risk: &str) -> Style {
    match risk.to_lowercase().as_str() {
        "high" | "severe" | "critical" => return Style::default().fg(Color::Red),
        "moderate" | "medium" => return Style::default().fg(Color::Yellow),
        _ => return Style::default().fg(Color::Green),
    }
}

pub fn report_lines(report: &Report) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            report.report_type.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("Generated: {}", report.generated_date),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        field("Patient ID", &report.patient_id),
        field(
            "Clinical Impression",
            &report.clinical_impression.to_uppercase(),
        ),
        Line::from(vec![
            Span::styled("Crisis Risk: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(report.crisis_risk.to_string(), risk_style(&report.crisis_risk)),
        ]),
        Line::from(""),
        heading("Screening Tools"),
    ];

    for (name, tool) in report.screening_tools.iter() {
        lines.push(Line::from(Span::styled(
            name.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(format!("  Score: {}", tool.score)));
        lines.push(Line::from(format!("  Severity: {}", tool.severity)));
        if let Some(suicidal_ideation) = &tool.suicidal_ideation {
            lines.push(Line::from(format!(
                "  Suicidal Ideation: {suicidal_ideation}"
            )));
        }
    }

    let recommendations = &report.recommendations;
    let mut referral = "No";
    if recommendations.referral_needed {
        referral = "Yes";
    }

    lines.push(Line::from(""));
    lines.push(heading("Recommendations"));
    lines.push(field("Immediate Actions", &recommendations.immediate_actions));
    lines.push(field(
        "Follow-up Timeline",
        &recommendations.followup_timeline,
    ));
    lines.push(field("Referral Needed", referral));

    return lines;
}

/// Unstyled rendition of the report for printing to stdout.
pub fn report_text(report: &Report) -> String {
    return report_lines(report)
        .iter()
        .map(|line| {
            return line
                .spans
                .iter()
                .map(|span| return span.content.to_string())
                .collect::<String>();
        })
        .collect::<Vec<String>>()
        .join("\n");
}

pub fn failure_notice(err: &ApiError) -> String {
    match err {
        ApiError::Payload(_) => return INVALID_REPORT_NOTICE.to_string(),
        ApiError::Network(_) => return unreachable_notice(err),
    }
}

pub fn render(frame: &mut Frame, rect: Rect, workspace: &mut Workspace) {
    let fetched = &workspace.report;
    if fetched.is_pending() {
        Loading::new("Loading report...").render(frame, rect);
        return;
    }

    let mut lines: Vec<Line> = vec![];
    if let Some(err) = &fetched.error {
        lines.push(Line::from(Span::styled(
            failure_notice(err),
            Style::default().fg(Color::Red),
        )));
    }
    if let Some(report) = &fetched.value {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.extend(report_lines(report));
    }

    let mut title = "📋 Screening Report".to_string();
    if fetched.loading {
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
