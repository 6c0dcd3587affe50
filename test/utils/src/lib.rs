/// A complete report payload as returned by `GET /report/{id}`, with two
/// screening tools in a non-alphabetical order.
pub fn report_fixture() -> &'static str {
    return r#"
{
  "report_type": "Mental Health Screening Report",
  "generated_date": "2024-05-02 14:31",
  "patient_id": "p-1042",
  "screening_tools": {
    "PHQ-9": {
      "score": "14",
      "severity": "moderate",
      "suicidal_ideation": "none reported"
    },
    "GAD-7": {
      "score": "9",
      "severity": "mild"
    }
  },
  "clinical_impression": "moderate depressive symptoms",
  "recommendations": {
    "immediate_actions": "Schedule a follow-up with a counsellor.",
    "referral_needed": true,
    "followup_timeline": "2 weeks"
  },
  "crisis_risk": "low"
}
"#
    .trim();
}

/// The minimal report payload used throughout the docs.
pub fn minimal_report_fixture() -> &'static str {
    return r#"{"report_type":"Screening","generated_date":"2024-01-01","patient_id":"p1","screening_tools":{"PHQ-9":{"score":"12","severity":"moderate"}},"clinical_impression":"stable","recommendations":{"immediate_actions":"monitor","referral_needed":false,"followup_timeline":"2 weeks"},"crisis_risk":"low"}"#;
}
