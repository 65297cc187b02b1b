//! Aggregation types: the search query, the typed degradation channel,
//! and the composed result.

use devscope_core::{GitHubProfile, LeetCodeProfile, LinkedInProfile, SummaryResult};
use serde::{Deserialize, Serialize};

/// One user-initiated search: the required code-hosting handle and up to
/// two optional platform handles. Handles are expected to be bare (already
/// run through [`devscope_core::extract_handle`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileQuery {
    pub github: String,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub leetcode: Option<String>,
}

impl ProfileQuery {
    /// A query for the required source only.
    #[must_use]
    pub fn github_only(github: impl Into<String>) -> Self {
        Self {
            github: github.into(),
            linkedin: None,
            leetcode: None,
        }
    }
}

/// Outcome of one optional source, keeping "it failed and defaults were
/// substituted" distinct from both success and "never asked" instead of
/// swallowing the difference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "profile", rename_all = "snake_case")]
pub enum OptionalSource<T> {
    /// Handle supplied and the fetch succeeded.
    Available(T),
    /// Handle supplied but the fetch failed; the zero-valued fallback
    /// profile was substituted.
    Degraded(T),
    /// No handle supplied; the source was never contacted.
    Skipped,
}

impl<T> OptionalSource<T> {
    /// The profile, when a handle was supplied. Degraded sources count as
    /// present — they carry the documented zero values.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            OptionalSource::Available(profile) | OptionalSource::Degraded(profile) => {
                Some(profile)
            }
            OptionalSource::Skipped => None,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, OptionalSource::Degraded(_))
    }

    pub fn is_skipped(&self) -> bool {
        matches!(self, OptionalSource::Skipped)
    }
}

/// Everything one search produced: the required profile, both optional
/// outcomes, and the summary computed over them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregatedProfile {
    pub github: GitHubProfile,
    pub linkedin: OptionalSource<LinkedInProfile>,
    pub leetcode: OptionalSource<LeetCodeProfile>,
    pub summary: SummaryResult,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_source_still_exposes_its_profile() {
        let source = OptionalSource::Degraded(LinkedInProfile::fallback("jane"));
        assert!(source.is_degraded());
        assert_eq!(source.as_option().map(|p| p.name.as_str()), Some("jane"));
    }

    #[test]
    fn skipped_source_exposes_nothing() {
        let source: OptionalSource<LinkedInProfile> = OptionalSource::Skipped;
        assert!(source.is_skipped());
        assert!(source.as_option().is_none());
    }

    #[test]
    fn optional_source_serializes_with_status_tag() {
        let source = OptionalSource::Degraded(LinkedInProfile::fallback("jane"));
        let value = serde_json::to_value(&source).expect("serializes");
        assert_eq!(value["status"], "degraded");
        assert_eq!(value["profile"]["name"], "jane");

        let skipped: OptionalSource<LinkedInProfile> = OptionalSource::Skipped;
        let value = serde_json::to_value(&skipped).expect("serializes");
        assert_eq!(value["status"], "skipped");
    }

    #[test]
    fn query_body_defaults_optional_handles() {
        let query: ProfileQuery =
            serde_json::from_str(r#"{"github":"octocat"}"#).expect("parses");
        assert_eq!(query.github, "octocat");
        assert!(query.linkedin.is_none());
        assert!(query.leetcode.is_none());
    }
}
