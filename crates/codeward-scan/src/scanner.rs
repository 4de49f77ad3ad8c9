use camino::Utf8PathBuf;
use codeward_findings::FindingStore;
use codeward_types::{Context, Lang};

/// Everything an adapter may read about the run it participates in.
#[derive(Clone, Debug)]
pub struct ScanContext {
    pub project: String,
    pub scan_dir: Utf8PathBuf,
}

/// Contract for one tool adapter.
///
/// An adapter invokes its underlying scanner binary against the prepared
/// scan directory and translates the tool's report into findings on the
/// store it is handed. Adapters should reduce in two phases: first group raw
/// tool records by their own business key (e.g. `dependency-cve`) into
/// candidate drafts, then commit each draft and let the store's key-overlap
/// merge act as the coarser second net.
///
/// A returned error makes the adapter contribute zero findings; it does not
/// abort the other adapters.
pub trait Scanner: Send + Sync {
    /// The language this adapter applies to.
    fn lang(&self) -> Lang;

    /// Tool name, matched case-insensitively against the tool filter.
    fn tool(&self) -> &str;

    /// Whether this adapter does static analysis or composition analysis.
    fn context(&self) -> Context;

    fn scan(&self, ctx: &ScanContext, store: &mut FindingStore) -> anyhow::Result<()>;
}
