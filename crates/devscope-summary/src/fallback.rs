//! Deterministic summary producer.
//!
//! A pure function of the normalized inputs: identical profiles always
//! yield identical summaries. The seniority scorer accumulates capped
//! contributions per metric, so increasing any single input while holding
//! the others fixed can only raise the level, never lower it.

use devscope_core::{
    CategorizedSkills, CodingInsights, GitHubProfile, LeetCodeProfile, ProjectInsight,
    SeniorityLevel, SummaryResult,
};

/// How many skills the key-skills list aims for, padding with fixed
/// fillers after the top languages.
const TARGET_SKILL_COUNT: usize = 6;

const FILLER_SKILLS: [&str; 2] = ["Problem Solving", "Software Development"];

/// Compute a complete [`SummaryResult`] from normalized profiles alone.
///
/// Keys off the GitHub and LeetCode data only; professional-network data
/// informs the AI path but carries no deterministic signal here.
#[must_use]
pub fn compute_fallback(
    github: &GitHubProfile,
    leetcode: Option<&LeetCodeProfile>,
) -> SummaryResult {
    let level = professional_level(github, leetcode);

    let top_language = github
        .top_languages(1)
        .first()
        .map_or_else(|| "multiple programming languages".to_string(), |l| (*l).to_string());

    let mut summary = format!(
        "Experienced developer with {} years of contribution history and {} public repositories. \
         Specializes in {} with {} total stars across projects.",
        github.contribution_years, github.public_repos, top_language, github.total_stars,
    );
    if let Some(lc) = leetcode {
        summary.push_str(&format!(
            " Demonstrates strong algorithmic skills with {} problems solved on LeetCode.",
            lc.solved.total_solved
        ));
    }

    let mut key_skills: Vec<String> = github
        .top_languages(4)
        .into_iter()
        .map(str::to_string)
        .collect();
    for filler in FILLER_SKILLS {
        if key_skills.len() >= TARGET_SKILL_COUNT {
            break;
        }
        key_skills.push(filler.to_string());
    }

    let mut highlights = vec![
        format!("{} total GitHub stars", github.total_stars),
        format!("{} public repositories", github.public_repos),
        format!("{} GitHub followers", github.followers),
    ];
    if let Some(lc) = leetcode {
        highlights.push(format!(
            "{} LeetCode problems solved",
            lc.solved.total_solved
        ));
    }

    SummaryResult {
        headline: format!("{} - {} Developer", github.display_name(), level),
        summary,
        key_skills,
        highlights,
        professional_level: level,
        strength_areas: vec![
            "Software Development".to_string(),
            "Code Quality".to_string(),
            "Technical Problem Solving".to_string(),
        ],
        career_trajectory: "Growing developer with consistent technical contributions".to_string(),
        categorized_skills: categorize_skills(&github.top_languages(usize::MAX)),
        project_insights: project_insights(github),
        coding_insights: coding_insights(leetcode),
    }
}

/// Weighted seniority score with per-metric caps.
///
/// | Metric | Contribution | Cap |
/// |---|---|---|
/// | contribution years | 2 per year | 10 |
/// | total stars | 1 per 10 | 10 |
/// | public repos | 1 per 5 | 8 |
/// | followers | 1 per 10 | 6 |
/// | problems solved (when present) | 1 per 20 | 8 |
///
/// Thresholds: ≥35 Principal, ≥25 Lead, ≥18 Senior, ≥10 Mid-Level.
/// The exact coefficients are tuning, not contract; what the tests pin
/// down is that each contribution is non-decreasing in its metric.
#[must_use]
pub fn professional_level(
    github: &GitHubProfile,
    leetcode: Option<&LeetCodeProfile>,
) -> SeniorityLevel {
    #[allow(clippy::cast_precision_loss)]
    let mut score = (f64::from(github.contribution_years) * 2.0).min(10.0)
        + (github.total_stars as f64 / 10.0).min(10.0)
        + (f64::from(github.public_repos) / 5.0).min(8.0)
        + (f64::from(github.followers) / 10.0).min(6.0);

    let solved = leetcode.map_or(0, |lc| lc.solved.total_solved);
    if solved > 0 {
        score += (f64::from(solved) / 20.0).min(8.0);
    }

    if score >= 35.0 {
        SeniorityLevel::Principal
    } else if score >= 25.0 {
        SeniorityLevel::Lead
    } else if score >= 18.0 {
        SeniorityLevel::Senior
    } else if score >= 10.0 {
        SeniorityLevel::MidLevel
    } else {
        SeniorityLevel::Junior
    }
}

/// Bucket languages into the areas they are typically used in. A language
/// can land in several buckets; unknown languages land in none.
fn categorize_skills(languages: &[&str]) -> CategorizedSkills {
    const FRONTEND: [&str; 9] = [
        "JavaScript",
        "TypeScript",
        "React",
        "Vue",
        "Angular",
        "HTML",
        "CSS",
        "SCSS",
        "Sass",
    ];
    const BACKEND: [&str; 10] = [
        "Python", "Java", "C#", "C++", "C", "Go", "Rust", "Ruby", "PHP", "Node.js",
    ];
    const DATABASE: [&str; 6] = ["SQL", "MongoDB", "PostgreSQL", "MySQL", "Redis", "SQLite"];
    const DEVOPS: [&str; 7] = [
        "Docker",
        "Kubernetes",
        "AWS",
        "Azure",
        "GCP",
        "Jenkins",
        "GitLab",
    ];
    const MOBILE: [&str; 5] = ["Swift", "Kotlin", "React Native", "Flutter", "Dart"];
    const ALGORITHMS: [&str; 5] = ["Python", "C++", "Java", "C", "JavaScript"];

    let pick = |bucket: &[&str]| -> Vec<String> {
        languages
            .iter()
            .filter(|l| bucket.contains(*l))
            .map(|l| (*l).to_string())
            .collect()
    };

    CategorizedSkills {
        frontend: pick(&FRONTEND),
        backend: pick(&BACKEND),
        database: pick(&DATABASE),
        devops: pick(&DEVOPS),
        mobile: pick(&MOBILE),
        algorithms: pick(&ALGORITHMS),
    }
}

/// One observation per top-3 repository.
fn project_insights(github: &GitHubProfile) -> Vec<ProjectInsight> {
    github
        .repos
        .iter()
        .take(3)
        .map(|repo| {
            let description = if repo.description.is_empty() {
                "Innovative project showcasing technical skills"
            } else {
                &repo.description
            };
            let technologies = if repo.language.is_empty() {
                vec!["Mixed".to_string()]
            } else {
                vec![repo.language.clone()]
            };
            ProjectInsight {
                name: repo.name.clone(),
                insight: format!("{} stars - {description}", repo.stars),
                technologies,
            }
        })
        .collect()
}

/// Assess the competitive-programming record from the difficulty split.
fn coding_insights(leetcode: Option<&LeetCodeProfile>) -> CodingInsights {
    let Some(lc) = leetcode.filter(|lc| lc.solved.total_solved > 0) else {
        return CodingInsights {
            strong_areas: vec!["Starting competitive programming journey".to_string()],
            improvement_areas: vec![
                "Problem solving practice".to_string(),
                "Algorithm implementation".to_string(),
            ],
            overall_assessment: "Beginning algorithmic problem solving journey".to_string(),
        };
    };

    let solved = &lc.solved;
    let mut strong_areas = Vec::new();
    let mut improvement_areas = Vec::new();

    if solved.easy_solved > solved.medium_solved {
        strong_areas.push("Basic algorithms and data structures".to_string());
    }
    if solved.medium_solved > 0 {
        strong_areas.push("Intermediate problem solving".to_string());
    }
    if solved.hard_solved > 0 {
        strong_areas.push("Advanced algorithmic thinking".to_string());
    }

    if solved.medium_solved < solved.easy_solved / 2 {
        improvement_areas.push("Medium complexity problems".to_string());
    }
    if solved.hard_solved == 0 {
        improvement_areas.push("Advanced algorithm design".to_string());
    }

    if strong_areas.is_empty() {
        strong_areas.push("Developing algorithmic skills".to_string());
    }
    if improvement_areas.is_empty() {
        improvement_areas.push("Continue problem solving practice".to_string());
    }

    let overall_assessment = if solved.total_solved > 300 {
        "Advanced competitive programmer"
    } else if solved.total_solved > 100 {
        "Strong algorithmic foundation"
    } else {
        "Growing problem solver"
    };

    CodingInsights {
        strong_areas,
        improvement_areas,
        overall_assessment: overall_assessment.to_string(),
    }
}
