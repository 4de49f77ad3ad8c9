//! Stable DTOs and IDs used across the codeward workspace.
//!
//! This crate is intentionally boring:
//! - the closed priority / language / context enumerations
//! - data types for the emitted report envelope
//! - canonical scan-root-relative path handling

#![forbid(unsafe_code)]

pub mod lang;
pub mod path;
pub mod priority;
pub mod report;

pub use lang::{Context, Lang};
pub use path::RelPath;
pub use priority::Priority;
pub use report::{
    FindingRecord, PriorityCounts, ReportEnvelope, ScanData, ScanReport, ToolMeta,
    SCHEMA_REPORT_V1,
};
