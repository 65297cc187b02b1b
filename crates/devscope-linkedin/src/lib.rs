//! LinkedIn client for the optional professional-network source.
//!
//! LinkedIn has no public profile API, so this goes through a scraping
//! proxy on a best-effort basis. Errors are typed and honest at this
//! boundary; the aggregation layer is what decides to degrade to
//! [`devscope_core::LinkedInProfile::fallback`] instead of failing.

pub mod client;
pub mod error;
pub mod normalize;
pub mod types;

pub use client::LinkedInClient;
pub use error::LinkedInError;
pub use types::RawLinkedInProfile;
