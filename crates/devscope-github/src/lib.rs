//! GitHub client for the required profile source.
//!
//! Fetches the user record and repository list from the GitHub REST API,
//! normalizes them into [`devscope_core::GitHubProfile`], and derives the
//! aggregate stats (star/fork totals, contribution years, language
//! histogram). Unlike the optional sources, every failure here is surfaced
//! as a typed [`GitHubError`] — the caller treats it as fatal.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::GitHubClient;
pub use error::GitHubError;
pub use types::{RawRepo, RawUser};
