//! Aggregation pipeline: one required source, two optional sources, one
//! summarization pass.
//!
//! The policy lives here: a GitHub failure aborts the whole build, an
//! optional-source failure degrades it to documented zero values, and the
//! summarizer is invoked exactly once with whatever was gathered. This is
//! the only crate whose error type crosses the core boundary.

mod error;
mod pipeline;
mod types;

pub use error::{AggregatorBuildError, ProfileError};
pub use pipeline::ProfileAggregator;
pub use types::{AggregatedProfile, OptionalSource, ProfileQuery};
