//! Summary result types shared by the AI and deterministic producers.

use serde::{Deserialize, Serialize};

/// Categorical seniority assessment, ordered from least to most senior.
///
/// The ordering is load-bearing: the deterministic scorer is required to be
/// monotone, so increasing any input metric can only move the level up.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum SeniorityLevel {
    Junior,
    #[serde(rename = "Mid-Level")]
    MidLevel,
    Senior,
    Lead,
    Principal,
}

impl std::fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            SeniorityLevel::Junior => "Junior",
            SeniorityLevel::MidLevel => "Mid-Level",
            SeniorityLevel::Senior => "Senior",
            SeniorityLevel::Lead => "Lead",
            SeniorityLevel::Principal => "Principal",
        };
        write!(f, "{s}")
    }
}

/// The narrative professional summary rendered on the dashboard.
///
/// Produced either by the hosted completion endpoint or by the local
/// deterministic fallback; both paths satisfy the same shape contract
/// (non-empty headline, non-empty summary, skills list present).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    pub headline: String,
    pub summary: String,
    pub key_skills: Vec<String>,
    pub highlights: Vec<String>,
    pub professional_level: SeniorityLevel,
    pub strength_areas: Vec<String>,
    pub career_trajectory: String,
    pub categorized_skills: CategorizedSkills,
    pub project_insights: Vec<ProjectInsight>,
    pub coding_insights: CodingInsights,
}

/// Languages and tools bucketed by the area they are typically used in.
/// A language can land in more than one bucket.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategorizedSkills {
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub database: Vec<String>,
    pub devops: Vec<String>,
    pub mobile: Vec<String>,
    pub algorithms: Vec<String>,
}

/// A short observation about one notable repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInsight {
    pub name: String,
    pub insight: String,
    pub technologies: Vec<String>,
}

/// Assessment of the competitive-programming record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodingInsights {
    pub strong_areas: Vec<String>,
    pub improvement_areas: Vec<String>,
    pub overall_assessment: String,
}
