//! Repository identity and the minimal git plumbing codeward needs.
//!
//! This crate is allowed to spawn `git`. It resolves a remote URL into a
//! canonical {host, owner, name} identity, introspects local checkouts, and
//! materializes a shallow clone with branch/commit pinning.

#![forbid(unsafe_code)]

mod cloner;
mod error;
mod identity;
mod plumbing;

pub use cloner::{clone_into, CloneCredential};
pub use error::{CloneError, GitError};
pub use identity::RepoIdentity;
