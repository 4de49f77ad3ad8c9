use codeward_types::ReportEnvelope;
use std::fmt::Write as _;

/// Human-readable console summary: per-scanner breakdown with every
/// finding's title, priority, tags, and fields.
pub fn render_console(report: &ReportEnvelope) -> String {
    let mut out = String::new();
    if let Some(note) = &report.data.note {
        let _ = writeln!(out, "Note:\t{note}");
    }
    for result in &report.results {
        let _ = writeln!(out, "{result}");
    }
    let _ = writeln!(out, "Total findings:\t{}", report.data.findings_total);
    if !report.data.scanners_failed.is_empty() {
        let _ = writeln!(
            out,
            "Failed scanners:\t{}",
            report.data.scanners_failed.join(", ")
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeward_types::{
        Context, FindingRecord, Lang, Priority, PriorityCounts, ScanData, ScanReport, ToolMeta,
        SCHEMA_REPORT_V1,
    };
    use std::collections::BTreeMap;
    use time::OffsetDateTime;

    fn envelope(results: Vec<ScanReport>, note: Option<&str>) -> ReportEnvelope {
        let counts = PriorityCounts::from_reports(&results);
        ReportEnvelope {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "codeward".to_string(),
                version: "0.0.0".to_string(),
            },
            started_at: OffsetDateTime::UNIX_EPOCH,
            finished_at: OffsetDateTime::UNIX_EPOCH,
            data: ScanData {
                lang: Some(Lang::Ruby),
                findings_total: counts.total(),
                note: note.map(str::to_string),
                ..ScanData::default()
            },
            counts,
            results,
        }
    }

    #[test]
    fn renders_each_scanner_block_and_totals() {
        let report = envelope(
            vec![ScanReport {
                project: "widgets".to_string(),
                lang: Lang::Ruby,
                context: Context::Sast,
                scanner: "Brakeman".to_string(),
                scan_dir_path: ".".to_string(),
                findings: vec![FindingRecord {
                    title: "SQL injection".to_string(),
                    priority: Priority::P1,
                    tags: vec!["user.rb".to_string()],
                    fields: BTreeMap::new(),
                }],
            }],
            None,
        );
        let text = render_console(&report);
        assert!(text.contains("Scanner:\tBrakeman"));
        assert!(text.contains("Title:\tSQL injection"));
        assert!(text.contains("Total findings:\t1"));
    }

    #[test]
    fn empty_run_renders_the_note() {
        let report = envelope(Vec::new(), Some("no scanners available"));
        let text = render_console(&report);
        assert!(text.contains("Note:\tno scanners available"));
        assert!(text.contains("Total findings:\t0"));
    }
}
