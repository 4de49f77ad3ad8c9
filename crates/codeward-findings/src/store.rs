use crate::Finding;
use codeward_types::{Context, Lang, Priority, ScanReport};

/// Committed findings for one scanner run.
///
/// `commit` is the aggregation step: a draft that shares an identity key with
/// an already committed finding is merged into the first such match instead
/// of being appended. Adapters are expected to group raw tool records by
/// their own business key first (e.g. `dependency-cve`); this key-overlap
/// merge is the coarser second net.
#[derive(Clone, Debug)]
pub struct FindingStore {
    project: String,
    lang: Lang,
    context: Context,
    scanner: String,
    scan_dir_path: String,
    committed: Vec<Finding>,
}

impl FindingStore {
    pub fn new<P, S, D>(project: P, lang: Lang, context: Context, scanner: S, scan_dir_path: D) -> Self
    where
        P: Into<String>,
        S: Into<String>,
        D: Into<String>,
    {
        Self {
            project: project.into(),
            lang,
            context,
            scanner: scanner.into(),
            scan_dir_path: scan_dir_path.into(),
            committed: Vec::new(),
        }
    }

    /// Start a draft finding. The draft is not visible in the store until it
    /// is committed.
    pub fn new_finding<S: Into<String>>(&self, title: S, priority: Priority) -> Finding {
        Finding::new(title, priority)
    }

    /// Merge-or-insert a draft into the committed sequence.
    pub fn commit(&mut self, finding: Finding) {
        match self
            .committed
            .iter_mut()
            .find(|existing| existing.shares_key_with(&finding))
        {
            Some(existing) => existing.absorb(finding),
            None => self.committed.push(finding),
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn context(&self) -> Context {
        self.context
    }

    pub fn scanner(&self) -> &str {
        &self.scanner
    }

    pub fn scan_dir_path(&self) -> &str {
        &self.scan_dir_path
    }

    pub fn findings(&self) -> &[Finding] {
        &self.committed
    }

    pub fn len(&self) -> usize {
        self.committed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.committed.is_empty()
    }

    pub fn to_report(&self) -> ScanReport {
        ScanReport {
            project: self.project.clone(),
            lang: self.lang,
            context: self.context,
            scanner: self.scanner.clone(),
            scan_dir_path: self.scan_dir_path.clone(),
            findings: self.committed.iter().map(Finding::to_record).collect(),
        }
    }
}
