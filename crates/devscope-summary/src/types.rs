//! Wire types for the chat-completion endpoint and the model's JSON reply.

use devscope_core::{
    CategorizedSkills, CodingInsights, ProjectInsight, SeniorityLevel,
};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Chat-completion request/response
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct ChatRequest<'a> {
    pub model: &'a str,
    pub messages: Vec<ChatMessage<'a>>,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChoiceMessage {
    #[serde(default)]
    pub content: String,
}

// ---------------------------------------------------------------------------
// The structured JSON the model is asked to produce
// ---------------------------------------------------------------------------

/// The model's reply, as loosely as it actually arrives. Required fields
/// are `Option` so validation can distinguish "absent" from "empty";
/// everything else defaults and is filled in during conversion.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawSummary {
    #[serde(default)]
    pub headline: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub key_skills: Option<Vec<String>>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub professional_level: Option<SeniorityLevel>,
    #[serde(default)]
    pub strength_areas: Vec<String>,
    #[serde(default)]
    pub career_trajectory: String,
    #[serde(default)]
    pub categorized_skills: CategorizedSkills,
    #[serde(default)]
    pub project_insights: RawProjectInsights,
    #[serde(default)]
    pub competitive_programming_insights: RawCodingInsights,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawProjectInsights {
    #[serde(default)]
    pub top_projects: Vec<ProjectInsight>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RawCodingInsights {
    #[serde(default)]
    pub strong_areas: Vec<String>,
    #[serde(default)]
    pub improvement_areas: Vec<String>,
    #[serde(default)]
    pub overall_assessment: String,
}

impl From<RawCodingInsights> for CodingInsights {
    fn from(raw: RawCodingInsights) -> Self {
        CodingInsights {
            strong_areas: raw.strong_areas,
            improvement_areas: raw.improvement_areas,
            overall_assessment: raw.overall_assessment,
        }
    }
}
