//! Config parsing and override resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration
//! provided as strings. Reading files and environment variables is the CLI's
//! job.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{CodewardConfigV1, CredentialsConfig, GitConfig};
pub use resolve::{EffectiveConfig, GitSettings, Overrides};

/// Parse `codeward.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<CodewardConfigV1> {
    let cfg: CodewardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the pipeline (config + CLI overrides).
pub fn resolve_config(
    cfg: CodewardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<EffectiveConfig> {
    resolve::resolve_config(cfg, overrides)
}
