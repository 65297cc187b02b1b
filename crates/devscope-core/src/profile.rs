//! Normalized per-platform profile shapes.
//!
//! Every field here has an explicit empty/zero representation — clients
//! populate absent upstream data with `String::new()`, `0`, or an empty
//! `Vec` during normalization, so downstream aggregation never branches on
//! absence. Each optional-source profile also defines the zero-valued
//! fallback substituted when its fetch fails.

use serde::{Deserialize, Serialize};

/// Normalized GitHub data: identity, activity counters, the ranked
/// repository list, and the derived aggregates computed from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GitHubProfile {
    pub login: String,
    pub name: String,
    pub avatar_url: String,
    pub bio: String,
    pub location: String,
    pub company: String,
    pub blog: String,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
    /// Account creation timestamp as returned by the API (RFC 3339),
    /// empty if absent.
    pub created_at: String,
    /// Fork-filtered, sorted descending by stars, truncated to the top 20.
    pub repos: Vec<RepoSummary>,
    /// Sum of star counts across `repos`.
    pub total_stars: u64,
    /// Sum of fork counts across `repos`.
    pub total_forks: u64,
    /// Whole years since account creation, clamped at zero.
    pub contribution_years: u32,
    /// Repository count per primary language, most common first; ties keep
    /// first-seen order. Repositories without a language are excluded.
    pub languages: Vec<LanguageCount>,
}

impl GitHubProfile {
    /// The name to show people: the display name when set, else the login.
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.login
        } else {
            &self.name
        }
    }

    /// The `n` most common primary languages, most common first.
    #[must_use]
    pub fn top_languages(&self, n: usize) -> Vec<&str> {
        self.languages
            .iter()
            .take(n)
            .map(|l| l.name.as_str())
            .collect()
    }
}

/// One repository in the ranked list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub description: String,
    pub stars: u32,
    pub forks: u32,
    /// Primary language; empty when GitHub reports none.
    pub language: String,
    pub url: String,
}

/// One entry in the language histogram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageCount {
    pub name: String,
    pub count: u32,
}

/// Normalized professional-network data. Everything is optional upstream;
/// absent fields normalize to empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkedInProfile {
    pub name: String,
    pub headline: String,
    pub location: String,
    pub photo_url: String,
    pub summary: String,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub skills: Vec<String>,
    pub certifications: Vec<Certification>,
}

impl LinkedInProfile {
    /// The zero-valued profile substituted when the source is unreachable.
    #[must_use]
    pub fn fallback(handle: &str) -> Self {
        Self {
            name: handle.to_string(),
            headline: "Professional Developer".to_string(),
            location: String::new(),
            photo_url: String::new(),
            summary: String::new(),
            experience: Vec::new(),
            education: Vec::new(),
            skills: Vec::new(),
            certifications: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub duration: String,
    pub description: String,
    pub location: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub school: String,
    pub degree: String,
    pub field: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
}

/// Normalized competitive-programming data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeetCodeProfile {
    pub username: String,
    pub ranking: u32,
    pub reputation: u32,
    pub solved: SolvedStats,
    /// Contest rating; zero when the source does not report one.
    pub contest_rating: u32,
    pub contest_ranking: u32,
    /// Derived locally from solved-count thresholds, not fetched.
    pub badges: Vec<Badge>,
}

impl LeetCodeProfile {
    /// The zero-valued profile substituted when both endpoints fail.
    #[must_use]
    pub fn fallback(username: &str) -> Self {
        Self {
            username: username.to_string(),
            ranking: 0,
            reputation: 0,
            solved: SolvedStats::default(),
            contest_rating: 0,
            contest_ranking: 0,
            badges: Vec::new(),
        }
    }
}

/// Solved-problem counts broken down by difficulty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedStats {
    pub total_solved: u32,
    pub total_questions: u32,
    pub easy_solved: u32,
    pub total_easy: u32,
    pub medium_solved: u32,
    pub total_medium: u32,
    pub hard_solved: u32,
    pub total_hard: u32,
}

/// An achievement badge derived from solved-count thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub name: String,
    pub display_name: String,
    pub tier: BadgeTier,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeTier {
    Bronze,
    Silver,
    Gold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_prefers_name_over_login() {
        let mut profile = GitHubProfile {
            login: "octocat".to_string(),
            name: "The Octocat".to_string(),
            avatar_url: String::new(),
            bio: String::new(),
            location: String::new(),
            company: String::new(),
            blog: String::new(),
            public_repos: 0,
            followers: 0,
            following: 0,
            created_at: String::new(),
            repos: Vec::new(),
            total_stars: 0,
            total_forks: 0,
            contribution_years: 0,
            languages: Vec::new(),
        };
        assert_eq!(profile.display_name(), "The Octocat");
        profile.name.clear();
        assert_eq!(profile.display_name(), "octocat");
    }

    #[test]
    fn linkedin_fallback_has_empty_collections() {
        let fallback = LinkedInProfile::fallback("jane-doe");
        assert_eq!(fallback.name, "jane-doe");
        assert!(fallback.experience.is_empty());
        assert!(fallback.education.is_empty());
        assert!(fallback.skills.is_empty());
        assert!(fallback.certifications.is_empty());
    }

    #[test]
    fn leetcode_fallback_is_all_zero() {
        let fallback = LeetCodeProfile::fallback("solver42");
        assert_eq!(fallback.username, "solver42");
        assert_eq!(fallback.solved, SolvedStats::default());
        assert_eq!(fallback.contest_rating, 0);
        assert!(fallback.badges.is_empty());
    }
}
