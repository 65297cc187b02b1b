//! Prompt construction for the summarization endpoint.
//!
//! Only normalized profile fields go into the prompt — never raw API
//! payloads. Sections for the optional sources are replaced with an
//! explicit "not available" marker when no handle was supplied, so the
//! model does not invent data for them.

use std::fmt::Write as _;

use devscope_core::{GitHubProfile, LeetCodeProfile, LinkedInProfile};

pub(crate) fn build_prompt(
    github: &GitHubProfile,
    linkedin: Option<&LinkedInProfile>,
    leetcode: Option<&LeetCodeProfile>,
) -> String {
    let mut p = String::with_capacity(2048);

    p.push_str(
        "You are a professional recruiter and technical writer. Based on the following \
         developer data, create a comprehensive professional summary that highlights the \
         candidate's strengths and credibility.\n\n",
    );

    let top_languages = github.top_languages(5).join(", ");
    let top_repos = github
        .repos
        .iter()
        .take(3)
        .map(|r| {
            let language = if r.language.is_empty() {
                "Mixed"
            } else {
                &r.language
            };
            format!("{} ({} stars, {})", r.name, r.stars, language)
        })
        .collect::<Vec<_>>()
        .join(", ");

    let _ = write!(
        p,
        "GitHub Data:\n\
         - Name: {name}\n\
         - Bio: {bio}\n\
         - Company: {company}\n\
         - Location: {location}\n\
         - Public Repos: {repos}\n\
         - Followers: {followers}\n\
         - Total Stars: {stars}\n\
         - Total Forks: {forks}\n\
         - Years Contributing: {years}\n\
         - Top Languages: {top_languages}\n\
         - Top Repositories: {top_repos}\n\n",
        name = github.display_name(),
        bio = or_unspecified(&github.bio),
        company = or_unspecified(&github.company),
        location = or_unspecified(&github.location),
        repos = github.public_repos,
        followers = github.followers,
        stars = github.total_stars,
        forks = github.total_forks,
        years = github.contribution_years,
    );

    match linkedin {
        Some(li) => {
            let _ = write!(
                p,
                "LinkedIn Data:\n\
                 - Name: {name}\n\
                 - Headline: {headline}\n\
                 - Location: {location}\n\
                 - Experience: {exp} positions\n\
                 - Skills: {skills}\n\
                 - Certifications: {certs} certifications\n\n",
                name = li.name,
                headline = or_unspecified(&li.headline),
                location = or_unspecified(&li.location),
                exp = li.experience.len(),
                skills = li.skills.iter().take(10).cloned().collect::<Vec<_>>().join(", "),
                certs = li.certifications.len(),
            );
        }
        None => p.push_str("LinkedIn data not available\n\n"),
    }

    match leetcode {
        Some(lc) => {
            let _ = write!(
                p,
                "LeetCode Data:\n\
                 - Problems Solved: {total}/{total_q}\n\
                 - Easy: {easy}/{total_easy}\n\
                 - Medium: {medium}/{total_medium}\n\
                 - Hard: {hard}/{total_hard}\n\
                 - Contest Rating: {rating}\n\
                 - Global Ranking: {ranking}\n\n",
                total = lc.solved.total_solved,
                total_q = lc.solved.total_questions,
                easy = lc.solved.easy_solved,
                total_easy = lc.solved.total_easy,
                medium = lc.solved.medium_solved,
                total_medium = lc.solved.total_medium,
                hard = lc.solved.hard_solved,
                total_hard = lc.solved.total_hard,
                rating = lc.contest_rating,
                ranking = lc.contest_ranking,
            );
        }
        None => p.push_str("LeetCode data not available\n\n"),
    }

    p.push_str(
        r#"Please provide a JSON response with the following structure:
{
  "headline": "A compelling 1-2 line professional headline that captures their expertise",
  "summary": "A 4-5 sentence professional summary highlighting key achievements, expertise, and career trajectory",
  "keySkills": ["skill1", "skill2", "skill3", "skill4", "skill5", "skill6"],
  "highlights": ["achievement1", "achievement2", "achievement3", "achievement4"],
  "professionalLevel": "Junior|Mid-Level|Senior|Lead|Principal",
  "strengthAreas": ["area1", "area2", "area3"],
  "careerTrajectory": "Brief assessment of career growth and potential",
  "categorizedSkills": {
    "frontend": [], "backend": [], "database": [], "devops": [], "mobile": [], "algorithms": []
  },
  "projectInsights": {
    "topProjects": [
      { "name": "Project Name", "insight": "Brief insight about the project's significance", "technologies": ["tech1", "tech2"] }
    ]
  },
  "competitiveProgrammingInsights": {
    "strongAreas": [], "improvementAreas": [], "overallAssessment": ""
  }
}

Base the professional level on:
- Junior: 0-2 years, few repos, basic projects, <50 LeetCode problems
- Mid-Level: 2-5 years, moderate activity, some notable projects, 50-200 problems
- Senior: 5+ years, high activity, significant contributions, >200 problems, mentoring evidence
- Lead: Senior + leadership indicators, architectural decisions, team influence
- Principal: Lead + industry recognition, open source leadership, technical vision

Ensure the response is valid JSON and professionally written for recruiters.
"#,
    );

    p
}

fn or_unspecified(value: &str) -> &str {
    if value.is_empty() {
        "Not specified"
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use devscope_core::SolvedStats;

    use super::*;

    fn github_profile() -> GitHubProfile {
        GitHubProfile {
            login: "octocat".to_string(),
            name: "The Octocat".to_string(),
            avatar_url: String::new(),
            bio: String::new(),
            location: "San Francisco".to_string(),
            company: String::new(),
            blog: String::new(),
            public_repos: 8,
            followers: 4000,
            following: 9,
            created_at: "2011-01-25T18:44:36Z".to_string(),
            repos: Vec::new(),
            total_stars: 15,
            total_forks: 3,
            contribution_years: 15,
            languages: Vec::new(),
        }
    }

    #[test]
    fn prompt_embeds_normalized_github_fields() {
        let prompt = build_prompt(&github_profile(), None, None);
        assert!(prompt.contains("Name: The Octocat"));
        assert!(prompt.contains("Bio: Not specified"));
        assert!(prompt.contains("Total Stars: 15"));
        assert!(prompt.contains("Years Contributing: 15"));
    }

    #[test]
    fn absent_optional_sources_are_marked_unavailable() {
        let prompt = build_prompt(&github_profile(), None, None);
        assert!(prompt.contains("LinkedIn data not available"));
        assert!(prompt.contains("LeetCode data not available"));
    }

    #[test]
    fn present_leetcode_data_is_embedded() {
        let mut lc = devscope_core::LeetCodeProfile::fallback("solver42");
        lc.solved = SolvedStats {
            total_solved: 260,
            total_questions: 3200,
            easy_solved: 120,
            total_easy: 800,
            medium_solved: 110,
            total_medium: 1700,
            hard_solved: 30,
            total_hard: 700,
        };
        let prompt = build_prompt(&github_profile(), None, Some(&lc));
        assert!(prompt.contains("Problems Solved: 260/3200"));
        assert!(prompt.contains("Hard: 30/700"));
        assert!(!prompt.contains("LeetCode data not available"));
    }
}
