//! Parsing and validation of the model's JSON reply.

use devscope_core::SummaryResult;

use crate::error::SummaryError;
use crate::types::RawSummary;

/// Strip a markdown code-fence wrapper, if present, from the completion
/// text. Handles both ```` ```json ```` and bare ```` ``` ```` fences.
pub(crate) fn strip_code_fences(text: &str) -> &str {
    let trimmed = text.trim();
    let trimmed = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix("```").unwrap_or(trimmed);
    trimmed.trim()
}

/// Parse the completion text into a [`SummaryResult`], enforcing the shape
/// contract: non-empty headline, non-empty summary, skills list present.
///
/// # Errors
///
/// - [`SummaryError::Deserialize`] when the text is not the expected JSON.
/// - [`SummaryError::Validation`] when a required field is absent or empty.
pub(crate) fn parse_summary(text: &str) -> Result<SummaryResult, SummaryError> {
    let cleaned = strip_code_fences(text);
    let raw: RawSummary =
        serde_json::from_str(cleaned).map_err(|e| SummaryError::Deserialize {
            context: "completion text".to_string(),
            source: e,
        })?;

    let headline = raw
        .headline
        .filter(|h| !h.trim().is_empty())
        .ok_or_else(|| SummaryError::Validation("missing or empty headline".to_string()))?;
    let summary = raw
        .summary
        .filter(|s| !s.trim().is_empty())
        .ok_or_else(|| SummaryError::Validation("missing or empty summary".to_string()))?;
    let key_skills = raw
        .key_skills
        .ok_or_else(|| SummaryError::Validation("missing keySkills list".to_string()))?;
    let professional_level = raw
        .professional_level
        .ok_or_else(|| SummaryError::Validation("missing professionalLevel".to_string()))?;

    Ok(SummaryResult {
        headline,
        summary,
        key_skills,
        highlights: raw.highlights,
        professional_level,
        strength_areas: raw.strength_areas,
        career_trajectory: raw.career_trajectory,
        categorized_skills: raw.categorized_skills,
        project_insights: raw.project_insights.top_projects,
        coding_insights: raw.competitive_programming_insights.into(),
    })
}

#[cfg(test)]
mod tests {
    use devscope_core::SeniorityLevel;

    use super::*;

    fn valid_json() -> String {
        serde_json::json!({
            "headline": "Senior Rust Engineer",
            "summary": "Builds reliable systems.",
            "keySkills": ["Rust", "Go"],
            "highlights": ["1k stars"],
            "professionalLevel": "Senior",
            "strengthAreas": ["Systems"],
            "careerTrajectory": "Steady growth",
            "categorizedSkills": { "backend": ["Rust"] },
            "projectInsights": { "topProjects": [
                { "name": "proj", "insight": "popular", "technologies": ["Rust"] }
            ]},
            "competitiveProgrammingInsights": {
                "strongAreas": ["DP"], "improvementAreas": [], "overallAssessment": "Strong"
            }
        })
        .to_string()
    }

    #[test]
    fn parses_bare_json() {
        let result = parse_summary(&valid_json()).expect("should parse");
        assert_eq!(result.headline, "Senior Rust Engineer");
        assert_eq!(result.professional_level, SeniorityLevel::Senior);
        assert_eq!(result.categorized_skills.backend, vec!["Rust"]);
        assert_eq!(result.project_insights.len(), 1);
        assert_eq!(result.coding_insights.strong_areas, vec!["DP"]);
    }

    #[test]
    fn parses_fenced_json() {
        let fenced = format!("```json\n{}\n```", valid_json());
        let result = parse_summary(&fenced).expect("should parse");
        assert_eq!(result.headline, "Senior Rust Engineer");
    }

    #[test]
    fn parses_fence_without_language_tag() {
        let fenced = format!("```\n{}\n```", valid_json());
        assert!(parse_summary(&fenced).is_ok());
    }

    #[test]
    fn missing_headline_fails_validation() {
        let json = serde_json::json!({
            "summary": "text", "keySkills": [], "professionalLevel": "Junior"
        })
        .to_string();
        let err = parse_summary(&json).expect_err("should fail");
        assert!(matches!(err, SummaryError::Validation(_)));
    }

    #[test]
    fn empty_summary_fails_validation() {
        let json = serde_json::json!({
            "headline": "x", "summary": "  ", "keySkills": [], "professionalLevel": "Junior"
        })
        .to_string();
        assert!(matches!(
            parse_summary(&json),
            Err(SummaryError::Validation(_))
        ));
    }

    #[test]
    fn missing_key_skills_fails_validation() {
        let json = serde_json::json!({
            "headline": "x", "summary": "y", "professionalLevel": "Junior"
        })
        .to_string();
        assert!(matches!(
            parse_summary(&json),
            Err(SummaryError::Validation(_))
        ));
    }

    #[test]
    fn unknown_level_is_a_deserialize_error() {
        let json = serde_json::json!({
            "headline": "x", "summary": "y", "keySkills": [], "professionalLevel": "Wizard"
        })
        .to_string();
        assert!(matches!(
            parse_summary(&json),
            Err(SummaryError::Deserialize { .. })
        ));
    }

    #[test]
    fn prose_instead_of_json_is_a_deserialize_error() {
        assert!(matches!(
            parse_summary("Here is the summary you asked for!"),
            Err(SummaryError::Deserialize { .. })
        ));
    }
}
