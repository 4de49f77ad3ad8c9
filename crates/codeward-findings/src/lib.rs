//! Finding identity and aggregation.
//!
//! A scanner adapter drafts [`Finding`]s, gives each one identity keys, and
//! commits them into its [`FindingStore`]. The store merges drafts that share
//! a key; [`fingerprint`] derives a stable key for code-anchored findings.

#![forbid(unsafe_code)]

mod finding;
mod fingerprint;
mod store;

pub use finding::{Finding, FindingError};
pub use fingerprint::fingerprint;
pub use store::FindingStore;
