use anyhow::Result;
use ratatui::style::Color;
use test_utils::minimal_report_fixture;
use test_utils::report_fixture;

use super::failure_notice;
use super::report_lines;
use super::report_text;
use crate::domain::models::ApiError;
use crate::domain::models::Report;

#[test]
fn it_formats_reports() -> Result<()> {
    let report = Report::parse(report_fixture())?;

    insta::assert_snapshot!(report_text(&report), @r###"
    Mental Health Screening Report
    Generated: 2024-05-02 14:31

    Patient ID: p-1042
    Clinical Impression: MODERATE DEPRESSIVE SYMPTOMS
    Crisis Risk: low

    Screening Tools
    PHQ-9
      Score: 14
      Severity: moderate
      Suicidal Ideation: none reported
    GAD-7
      Score: 9
      Severity: mild

    Recommendations
    Immediate Actions: Schedule a follow-up with a counsellor.
    Follow-up Timeline: 2 weeks
    Referral Needed: Yes
    "###);

    return Ok(());
}

#[test]
fn it_omits_missing_suicidal_ideation() -> Result<()> {
    let report = Report::parse(minimal_report_fixture())?;
    let text = report_text(&report);

    assert!(!text.contains("Suicidal Ideation"));
    assert!(text.contains("Referral Needed: No"));
    assert!(text.contains("Clinical Impression: STABLE"));

    return Ok(());
}

#[test]
fn it_colours_crisis_risk() -> Result<()> {
    let body = minimal_report_fixture().replace(r#""crisis_risk":"low""#, r#""crisis_risk":"High""#);
    let report = Report::parse(&body)?;

    let risk_line = report_lines(&report)
        .into_iter()
        .find(|line| return line.spans[0].content == "Crisis Risk: ")
        .unwrap();
    assert_eq!(risk_line.spans[1].style.fg, Some(Color::Red));

    return Ok(());
}

#[test]
fn it_describes_failures() {
    assert_eq!(
        failure_notice(&ApiError::Payload("missing field".to_string())),
        "Invalid report format"
    );
    assert_eq!(
        failure_notice(&ApiError::Network("connection refused".to_string())),
        "⚠️ Unable to reach the screening service: connection refused"
    );
}
