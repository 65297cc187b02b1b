//! LeetCode client for the optional competitive-programming source.
//!
//! Two transports cover one capability: the platform's GraphQL endpoint is
//! the primary, and a community REST stats proxy is tried once when the
//! primary fails. Achievement badges are derived locally from solved-count
//! thresholds. Errors are typed; the aggregation layer decides whether to
//! degrade to [`devscope_core::LeetCodeProfile::fallback`].

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::LeetCodeClient;
pub use error::LeetCodeError;
pub use types::{GraphqlData, RawStatsApi};
