//! Handle extraction from free-text or profile-URL input.
//!
//! Users paste anything from a bare username to a full profile URL; each
//! platform has one recognized URL path shape. Input that matches no
//! pattern is treated as an already-bare handle.

use regex::Regex;

/// The three platforms devscope aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    GitHub,
    LinkedIn,
    LeetCode,
}

impl Platform {
    fn url_pattern(self) -> &'static str {
        match self {
            Platform::GitHub => r"(?:https?://)?(?:www\.)?github\.com/([^/\s?#]+)",
            Platform::LinkedIn => r"(?:https?://)?(?:www\.)?linkedin\.com/in/([^/\s?#]+)",
            Platform::LeetCode => r"(?:https?://)?(?:www\.)?leetcode\.com/u/([^/\s?#]+)",
        }
    }
}

/// Extract a platform handle from user input.
///
/// Recognizes the platform's profile-URL shape and returns the first path
/// segment after it (query strings and fragments excluded); anything else
/// comes back trimmed and otherwise untouched. Empty input stays empty;
/// callers decide whether that is an error (required source) or a skip
/// (optional source).
#[must_use]
pub fn extract_handle(input: &str, platform: Platform) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let re = Regex::new(platform.url_pattern()).expect("valid handle regex");
    match re.captures(trimmed) {
        Some(caps) => caps[1].to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_handle_passes_through() {
        assert_eq!(extract_handle("octocat", Platform::GitHub), "octocat");
    }

    #[test]
    fn whitespace_is_trimmed() {
        assert_eq!(extract_handle("  octocat  ", Platform::GitHub), "octocat");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(extract_handle("   ", Platform::GitHub), "");
    }

    #[test]
    fn github_url_is_stripped() {
        assert_eq!(
            extract_handle("https://github.com/octocat", Platform::GitHub),
            "octocat"
        );
        assert_eq!(
            extract_handle("github.com/octocat", Platform::GitHub),
            "octocat"
        );
        assert_eq!(
            extract_handle("https://www.github.com/octocat?tab=repos", Platform::GitHub),
            "octocat"
        );
    }

    #[test]
    fn github_url_ignores_trailing_path() {
        assert_eq!(
            extract_handle("https://github.com/octocat/hello-world", Platform::GitHub),
            "octocat"
        );
    }

    #[test]
    fn linkedin_url_requires_in_segment() {
        assert_eq!(
            extract_handle("https://linkedin.com/in/jane-doe", Platform::LinkedIn),
            "jane-doe"
        );
        // No /in/ segment: not a recognized profile URL, input passes through.
        assert_eq!(
            extract_handle("linkedin.com/company/acme", Platform::LinkedIn),
            "linkedin.com/company/acme"
        );
    }

    #[test]
    fn leetcode_url_uses_u_segment() {
        assert_eq!(
            extract_handle("https://leetcode.com/u/solver42/", Platform::LeetCode),
            "solver42"
        );
    }

    #[test]
    fn wrong_platform_url_passes_through() {
        assert_eq!(
            extract_handle("https://github.com/octocat", Platform::LeetCode),
            "https://github.com/octocat"
        );
    }
}
