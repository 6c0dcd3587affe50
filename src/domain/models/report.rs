#[cfg(test)]
#[path = "report_test.rs"]
mod tests;

use std::fmt;

use serde::de;
use serde::Deserializer;
use serde_derive::Deserialize;

use super::ApiError;

/// Result of a single standardized questionnaire, e.g. PHQ-9.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ScreeningTool {
    #[serde(deserialize_with = "string_or_number")]
    pub score: String,
    pub severity: String,
    #[serde(default)]
    pub suicidal_ideation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Recommendations {
    pub immediate_actions: String,
    pub referral_needed: bool,
    pub followup_timeline: String,
}

/// Screening tools keyed by tool name, kept in the order the server sent
/// them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScreeningTools(Vec<(String, ScreeningTool)>);

impl ScreeningTools {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScreeningTool)> {
        return self.0.iter().map(|(name, tool)| return (name.as_str(), tool));
    }
}

#[cfg(test)]
impl ScreeningTools {
    pub fn get(&self, name: &str) -> Option<&ScreeningTool> {
        return self
            .0
            .iter()
            .find(|(tool_name, _)| return tool_name == name)
            .map(|(_, tool)| return tool);
    }

    pub fn names(&self) -> Vec<&str> {
        return self.0.iter().map(|(name, _)| return name.as_str()).collect();
    }

    pub fn len(&self) -> usize {
        return self.0.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.0.is_empty();
    }
}

struct ScreeningToolsVisitor;

impl<'de> de::Visitor<'de> for ScreeningToolsVisitor {
    type Value = ScreeningTools;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        return formatter.write_str("a map of screening tool names to results");
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<ScreeningTools, A::Error> {
        let mut tools: Vec<(String, ScreeningTool)> = vec![];
        while let Some((name, tool)) = map.next_entry::<String, ScreeningTool>()? {
            match tools.iter().position(|(existing, _)| return *existing == name) {
                Some(idx) => {
                    tools[idx].1 = tool;
                }
                None => {
                    tools.push((name, tool));
                }
            }
        }

        return Ok(ScreeningTools(tools));
    }
}

impl<'de> serde::Deserialize<'de> for ScreeningTools {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<ScreeningTools, D::Error> {
        return deserializer.deserialize_map(ScreeningToolsVisitor);
    }
}

fn string_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value: serde_json::Value = serde::Deserialize::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(text) => return Ok(text),
        serde_json::Value::Number(number) => return Ok(number.to_string()),
        other => {
            return Err(de::Error::custom(format!(
                "expected a string or number score, found {other}"
            )))
        }
    }
}

/// Structured clinical summary returned by `GET /report/{id}`. Every field but
/// a tool's suicidal ideation is required; a report is either fully parsed or
/// not produced at all.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Report {
    pub report_type: String,
    pub generated_date: String,
    pub patient_id: String,
    pub screening_tools: ScreeningTools,
    pub clinical_impression: String,
    pub recommendations: Recommendations,
    pub crisis_risk: String,
}

impl Report {
    pub fn parse(body: &str) -> Result<Report, ApiError> {
        return serde_json::from_str::<Report>(body)
            .map_err(|err| return ApiError::Payload(err.to_string()));
    }
}
