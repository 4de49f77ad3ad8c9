use crate::{Context, Lang, Priority};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use time::OffsetDateTime;

/// Stable schema identifier for the aggregate report.
pub const SCHEMA_REPORT_V1: &str = "codeward.report.v1";

/// One committed finding, as serialized into the aggregate report.
///
/// `tags` is always a superset of the finding's identity keys; `fields` is a
/// label -> free-text mapping with unique labels.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FindingRecord {
    pub title: String,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub fields: BTreeMap<String, String>,
}

impl fmt::Display for FindingRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Title:\t{}\nPriority:\t{}", self.title, self.priority)?;
        if !self.tags.is_empty() {
            write!(f, "\nTags:")?;
            for tag in &self.tags {
                write!(f, " {tag}")?;
            }
        }
        for (label, content) in &self.fields {
            write!(f, "\n{label}:\t{content}")?;
        }
        writeln!(f)
    }
}

/// The result of one scanner run: identification plus its ordered findings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanReport {
    pub project: String,
    pub lang: Lang,
    pub context: Context,
    pub scanner: String,
    pub scan_dir_path: String,
    pub findings: Vec<FindingRecord>,
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Project:\t{}", self.project)?;
        writeln!(f, "Context:\t{}", self.context)?;
        writeln!(f, "Language:\t{}", self.lang)?;
        writeln!(f, "Scanner:\t{}", self.scanner)?;
        writeln!(f, "Count:\t{}", self.findings.len())?;
        writeln!(f, "Findings:")?;
        for finding in &self.findings {
            write!(f, "\n{finding}")?;
        }
        Ok(())
    }
}

/// Per-priority tallies over the emitted findings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PriorityCounts {
    pub p0: u32,
    pub p1: u32,
    pub p2: u32,
    pub p3: u32,
    pub p4: u32,
}

impl PriorityCounts {
    pub fn from_reports<'a, I: IntoIterator<Item = &'a ScanReport>>(reports: I) -> Self {
        let mut counts = PriorityCounts::default();
        for report in reports {
            for finding in &report.findings {
                match finding.priority {
                    Priority::P0 => counts.p0 += 1,
                    Priority::P1 => counts.p1 += 1,
                    Priority::P2 => counts.p2 += 1,
                    Priority::P3 => counts.p3 += 1,
                    Priority::P4 => counts.p4 += 1,
                }
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.p0 + self.p1 + self.p2 + self.p3 + self.p4
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Run-level summary payload for the report.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ScanData {
    pub lang: Option<Lang>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context_filter: Option<Context>,

    pub scanners_selected: u32,
    pub scanners_run: u32,
    /// Tool names whose scan failed; their findings are absent from `results`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scanners_failed: Vec<String>,

    pub findings_total: u32,

    /// Set when the run did nothing, e.g. no scanner qualified for the lang.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// The aggregate report: per-scanner breakdown plus run metadata.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    pub counts: PriorityCounts,
    pub results: Vec<ScanReport>,
    pub data: ScanData,
}
