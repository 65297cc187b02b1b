//! Normalization of LeetCode wire responses into the shared profile shape.

use devscope_core::{Badge, BadgeTier, LeetCodeProfile, SolvedStats};

use crate::types::{DifficultyCount, GraphqlData, MatchedUser, RawStatsApi};

/// Build a profile from the GraphQL response. Caller has already verified
/// `matched_user` is present.
#[must_use]
pub fn from_graphql(data: GraphqlData, user: MatchedUser) -> LeetCodeProfile {
    let solved_counts = user
        .submit_stats
        .map(|s| s.ac_submission_num)
        .unwrap_or_default();
    let totals = data.all_questions_count;

    let solved = SolvedStats {
        total_solved: count_for(&solved_counts, "All"),
        total_questions: count_for(&totals, "All"),
        easy_solved: count_for(&solved_counts, "Easy"),
        total_easy: count_for(&totals, "Easy"),
        medium_solved: count_for(&solved_counts, "Medium"),
        total_medium: count_for(&totals, "Medium"),
        hard_solved: count_for(&solved_counts, "Hard"),
        total_hard: count_for(&totals, "Hard"),
    };

    let (contest_rating, contest_ranking) = data
        .user_contest_ranking
        .map_or((0, 0), |c| (rating_to_u32(c.rating), c.global_ranking));

    let (ranking, reputation) = user
        .profile
        .map_or((0, 0), |p| (p.ranking, p.reputation));

    let badges = derive_badges(solved.total_solved);
    LeetCodeProfile {
        username: user.username,
        ranking,
        reputation,
        solved,
        contest_rating,
        contest_ranking,
        badges,
    }
}

/// Build a profile from the REST stats proxy response. The proxy does not
/// report contest data, so rating and ranking stay at their zero values.
#[must_use]
pub fn from_stats_api(username: &str, raw: RawStatsApi) -> LeetCodeProfile {
    let solved = SolvedStats {
        total_solved: raw.total_solved,
        total_questions: raw.total_questions,
        easy_solved: raw.easy_solved,
        total_easy: raw.total_easy,
        medium_solved: raw.medium_solved,
        total_medium: raw.total_medium,
        hard_solved: raw.hard_solved,
        total_hard: raw.total_hard,
    };
    let badges = derive_badges(solved.total_solved);
    LeetCodeProfile {
        username: username.to_string(),
        ranking: raw.ranking,
        reputation: raw.reputation,
        solved,
        contest_rating: 0,
        contest_ranking: raw.ranking,
        badges,
    }
}

fn count_for(counts: &[DifficultyCount], difficulty: &str) -> u32 {
    counts
        .iter()
        .find(|c| c.difficulty == difficulty)
        .map_or(0, |c| c.count)
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rating_to_u32(rating: f64) -> u32 {
    if rating.is_finite() && rating > 0.0 {
        rating.round() as u32
    } else {
        0
    }
}

/// Achievement badges from solved-count thresholds: 10+ bronze, 50+ silver,
/// 100+ gold. Cumulative, so a 100-problem account carries all three.
pub(crate) fn derive_badges(total_solved: u32) -> Vec<Badge> {
    let mut badges = Vec::new();
    if total_solved >= 10 {
        badges.push(Badge {
            name: "problem-solver".to_string(),
            display_name: "Problem Solver".to_string(),
            tier: BadgeTier::Bronze,
            description: "Solved 10+ problems".to_string(),
        });
    }
    if total_solved >= 50 {
        badges.push(Badge {
            name: "dedicated-solver".to_string(),
            display_name: "Dedicated Solver".to_string(),
            tier: BadgeTier::Silver,
            description: "Solved 50+ problems".to_string(),
        });
    }
    if total_solved >= 100 {
        badges.push(Badge {
            name: "coding-master".to_string(),
            display_name: "Coding Master".to_string(),
            tier: BadgeTier::Gold,
            description: "Solved 100+ problems".to_string(),
        });
    }
    badges
}
