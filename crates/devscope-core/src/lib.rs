//! Shared types and configuration for the devscope workspace.
//!
//! Holds the normalized profile shapes produced by the platform clients,
//! the summary result types, handle extraction, and env-based configuration.
//! No I/O happens here; everything is pure data and parsing.

mod app_config;
mod config;
pub mod handle;
pub mod profile;
pub mod summary;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use handle::{extract_handle, Platform};
pub use profile::{
    Badge, BadgeTier, Certification, Education, Experience, GitHubProfile, LanguageCount,
    LeetCodeProfile, LinkedInProfile, RepoSummary, SolvedStats,
};
pub use summary::{
    CategorizedSkills, CodingInsights, ProjectInsight, SeniorityLevel, SummaryResult,
};
