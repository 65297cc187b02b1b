//! Normalization of GitHub wire types into the shared profile shape.

use chrono::{DateTime, Datelike};
use devscope_core::{GitHubProfile, LanguageCount, RepoSummary};

use crate::types::{RawRepo, RawUser};

/// How many repositories survive ranking.
const TOP_REPO_COUNT: usize = 20;

/// Build a normalized [`GitHubProfile`] from the two raw API responses.
///
/// `now_year` is the current calendar year, passed in so the derivation is a
/// pure function.
#[must_use]
pub fn build_profile(user: RawUser, repos: Vec<RawRepo>, now_year: i32) -> GitHubProfile {
    let repos = rank_repos(repos);
    let languages = language_histogram(&repos);
    let total_stars = repos.iter().map(|r| u64::from(r.stars)).sum();
    let total_forks = repos.iter().map(|r| u64::from(r.forks)).sum();
    let created_at = user.created_at.unwrap_or_default();
    let contribution_years = contribution_years(&created_at, now_year);

    GitHubProfile {
        login: user.login,
        name: user.name.unwrap_or_default(),
        avatar_url: user.avatar_url.unwrap_or_default(),
        bio: user.bio.unwrap_or_default(),
        location: user.location.unwrap_or_default(),
        company: user.company.unwrap_or_default(),
        blog: user.blog.unwrap_or_default(),
        public_repos: user.public_repos,
        followers: user.followers,
        following: user.following,
        created_at,
        repos,
        total_stars,
        total_forks,
        contribution_years,
        languages,
    }
}

/// Filter out forked repositories (name-substring heuristic), sort by stars
/// descending, and keep the top entries.
///
/// The sort is stable, so repositories with equal star counts keep the
/// upstream `sort=updated` order.
fn rank_repos(repos: Vec<RawRepo>) -> Vec<RepoSummary> {
    let mut ranked: Vec<RepoSummary> = repos
        .into_iter()
        .filter(|r| !r.name.contains("fork"))
        .map(|r| RepoSummary {
            name: r.name,
            description: r.description.unwrap_or_default(),
            stars: r.stargazers_count,
            forks: r.forks_count,
            language: r.language.unwrap_or_default(),
            url: r.html_url.unwrap_or_default(),
        })
        .collect();
    ranked.sort_by(|a, b| b.stars.cmp(&a.stars));
    ranked.truncate(TOP_REPO_COUNT);
    ranked
}

/// Count repositories per primary language, case-sensitive.
///
/// Repositories without a language are excluded entirely rather than being
/// counted under an empty-string category. Entries are accumulated in
/// first-seen order and then stably sorted by count descending, so equal
/// counts keep first-seen order when callers later truncate to a top-N.
fn language_histogram(repos: &[RepoSummary]) -> Vec<LanguageCount> {
    let mut histogram: Vec<LanguageCount> = Vec::new();
    for repo in repos {
        if repo.language.is_empty() {
            continue;
        }
        match histogram.iter_mut().find(|l| l.name == repo.language) {
            Some(entry) => entry.count += 1,
            None => histogram.push(LanguageCount {
                name: repo.language.clone(),
                count: 1,
            }),
        }
    }
    histogram.sort_by(|a, b| b.count.cmp(&a.count));
    histogram
}

/// Whole years between account creation and `now_year`, clamped at zero so
/// clock skew (creation date in the future) cannot go negative.
///
/// An unparseable or empty `created_at` counts as zero years.
fn contribution_years(created_at: &str, now_year: i32) -> u32 {
    let Ok(created) = DateTime::parse_from_rfc3339(created_at) else {
        return 0;
    };
    u32::try_from(now_year - created.year()).unwrap_or(0)
}
