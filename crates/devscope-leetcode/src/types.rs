//! Wire types for both LeetCode transports.

use serde::Deserialize;

// ---------------------------------------------------------------------------
// GraphQL endpoint
// ---------------------------------------------------------------------------

/// Top-level GraphQL response envelope: `{ "data": { ... } }`.
#[derive(Debug, Deserialize)]
pub struct GraphqlEnvelope {
    pub data: GraphqlData,
}

/// The fields selected by the user-profile query.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphqlData {
    /// Null when the username does not exist.
    #[serde(default)]
    pub matched_user: Option<MatchedUser>,
    #[serde(default)]
    pub all_questions_count: Vec<DifficultyCount>,
    /// Null when the user has never entered a contest.
    #[serde(default)]
    pub user_contest_ranking: Option<ContestRanking>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedUser {
    pub username: String,
    #[serde(default)]
    pub profile: Option<UserProfileNode>,
    #[serde(default)]
    pub submit_stats: Option<SubmitStats>,
}

#[derive(Debug, Deserialize)]
pub struct UserProfileNode {
    #[serde(default)]
    pub ranking: u32,
    #[serde(default)]
    pub reputation: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitStats {
    #[serde(default)]
    pub ac_submission_num: Vec<DifficultyCount>,
}

/// One `{ "difficulty": "Easy", "count": 123 }` entry. The difficulty key
/// is `"All"`, `"Easy"`, `"Medium"`, or `"Hard"`.
#[derive(Debug, Deserialize)]
pub struct DifficultyCount {
    pub difficulty: String,
    #[serde(default)]
    pub count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContestRanking {
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub global_ranking: u32,
}

// ---------------------------------------------------------------------------
// REST stats proxy (alternate endpoint)
// ---------------------------------------------------------------------------

/// `GET /{username}` response from the community stats proxy.
///
/// `status` is `"success"` or `"error"`; everything else defaults to zero
/// so partially populated responses still normalize.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawStatsApi {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub total_solved: u32,
    #[serde(default)]
    pub total_questions: u32,
    #[serde(default)]
    pub easy_solved: u32,
    #[serde(default)]
    pub total_easy: u32,
    #[serde(default)]
    pub medium_solved: u32,
    #[serde(default)]
    pub total_medium: u32,
    #[serde(default)]
    pub hard_solved: u32,
    #[serde(default)]
    pub total_hard: u32,
    #[serde(default)]
    pub ranking: u32,
    #[serde(default)]
    pub reputation: u32,
}
