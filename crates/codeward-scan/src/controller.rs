use crate::exec::run_command;
use crate::{ScanContext, ScannerRegistry};
use codeward_findings::FindingStore;
use codeward_settings::EffectiveConfig;
use codeward_types::{
    PriorityCounts, ReportEnvelope, ScanData, ScanReport, ToolMeta, SCHEMA_REPORT_V1,
};
use time::OffsetDateTime;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("build failed with exit code {code:?}")]
    BuildFailed { code: Option<i32> },

    #[error("build tool is not installed")]
    BuildToolMissing,
}

/// What one pipeline run produced.
#[derive(Clone, Debug)]
pub struct ScanOutput {
    pub report: ReportEnvelope,
    /// Tool names whose scan failed and therefore contributed no findings.
    pub failed_scanners: Vec<String>,
}

/// Run the pipeline: select adapters, build, scan each adapter in isolation,
/// aggregate every store into the combined report.
///
/// Zero qualifying adapters is not an error: the build is skipped and an
/// empty report carries an explanatory note.
pub fn run_scan(registry: &ScannerRegistry, cfg: &EffectiveConfig) -> anyhow::Result<ScanOutput> {
    let started_at = OffsetDateTime::now_utc();

    tracing::info!(lang = %cfg.lang, "selecting scanners");
    let selected = registry.select(cfg.lang, cfg.tool.as_deref(), cfg.context);

    if selected.is_empty() {
        tracing::warn!(lang = %cfg.lang, "no scanners available to scan this code");
        return Ok(ScanOutput {
            report: assemble(
                cfg,
                started_at,
                Vec::new(),
                0,
                Vec::new(),
                Some("no scanners available for the requested language".to_string()),
            ),
            failed_scanners: Vec::new(),
        });
    }

    build_project(cfg)?;

    let ctx = ScanContext {
        project: cfg.project.clone(),
        scan_dir: cfg.scan_dir.clone(),
    };

    let mut results: Vec<ScanReport> = Vec::new();
    let mut failed: Vec<String> = Vec::new();
    for scanner in &selected {
        tracing::info!(tool = scanner.tool(), "now running scanner");
        let mut store = FindingStore::new(
            cfg.project.clone(),
            scanner.lang(),
            scanner.context(),
            scanner.tool(),
            cfg.scan_dir.as_str(),
        );
        match scanner.scan(&ctx, &mut store) {
            Ok(()) => results.push(store.to_report()),
            Err(err) => {
                // Failure is isolated: log it and move on with zero findings
                // from this adapter.
                tracing::error!(tool = scanner.tool(), error = %format!("{err:#}"), "scanner failed");
                failed.push(scanner.tool().to_string());
            }
        }
    }

    Ok(ScanOutput {
        report: assemble(cfg, started_at, results, selected.len(), failed.clone(), None),
        failed_scanners: failed,
    })
}

fn build_project(cfg: &EffectiveConfig) -> anyhow::Result<()> {
    let Some(script) = cfg.build_script.as_deref() else {
        return Ok(());
    };
    tracing::info!(script, "running build");
    let output = run_command(script, &cfg.scan_dir, "build")?;
    if crate::is_tool_missing(&output.text) {
        return Err(PipelineError::BuildToolMissing.into());
    }
    if !output.success() {
        tracing::error!(code = ?output.code, "build failed");
        return Err(PipelineError::BuildFailed { code: output.code }.into());
    }
    Ok(())
}

fn assemble(
    cfg: &EffectiveConfig,
    started_at: OffsetDateTime,
    results: Vec<ScanReport>,
    selected: usize,
    failed: Vec<String>,
    note: Option<String>,
) -> ReportEnvelope {
    let counts = PriorityCounts::from_reports(&results);
    let data = ScanData {
        lang: Some(cfg.lang),
        tool_filter: cfg.tool.clone(),
        context_filter: cfg.context,
        scanners_selected: selected as u32,
        scanners_run: results.len() as u32,
        scanners_failed: failed,
        findings_total: counts.total(),
        note,
    };
    ReportEnvelope {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "codeward".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        counts,
        results,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeScanner;
    use camino::Utf8PathBuf;
    use codeward_types::{Context, Lang, Priority};

    fn scan_fixture() -> (tempfile::TempDir, Utf8PathBuf) {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 path");
        (dir, path)
    }

    fn config(scan_dir: &Utf8PathBuf, build_script: Option<&str>) -> EffectiveConfig {
        EffectiveConfig {
            project: "widgets".to_string(),
            lang: Lang::Ruby,
            tool: None,
            context: None,
            scan_dir: scan_dir.clone(),
            build_script: build_script.map(str::to_string),
            git: None,
        }
    }

    #[test]
    fn zero_adapters_skips_the_build_and_notes_it() {
        let (_guard, dir) = scan_fixture();
        let registry = ScannerRegistry::new();
        // The build script would drop a marker file; it must never run.
        let cfg = config(&dir, Some("touch built-marker"));

        let output = run_scan(&registry, &cfg).unwrap();
        assert!(!dir.join("built-marker").exists());
        assert!(output.report.results.is_empty());
        assert!(output.report.data.note.is_some());
        assert_eq!(output.report.data.scanners_selected, 0);
    }

    #[test]
    fn build_failure_aborts_before_any_scanner_runs() {
        let (_guard, dir) = scan_fixture();
        let registry = ScannerRegistry::new();
        registry.register(FakeScanner::emitting(
            "Brakeman",
            Lang::Ruby,
            Context::Sast,
            vec![("f".to_string(), Priority::P1, "k".to_string())],
        ));
        let cfg = config(&dir, Some("exit 7"));

        let err = run_scan(&registry, &cfg).unwrap_err();
        let pipeline = err.downcast_ref::<PipelineError>().expect("pipeline error");
        assert!(matches!(
            pipeline,
            PipelineError::BuildFailed { code: Some(7) }
        ));
    }

    #[test]
    fn successful_build_then_scan_aggregates_findings() {
        let (_guard, dir) = scan_fixture();
        let registry = ScannerRegistry::new();
        registry.register(FakeScanner::emitting(
            "Brakeman",
            Lang::Ruby,
            Context::Sast,
            vec![
                ("sql injection".to_string(), Priority::P1, "a".to_string()),
                ("xss".to_string(), Priority::P2, "b".to_string()),
            ],
        ));
        let cfg = config(&dir, Some("true"));

        let output = run_scan(&registry, &cfg).unwrap();
        assert_eq!(output.report.results.len(), 1);
        assert_eq!(output.report.data.findings_total, 2);
        assert_eq!(output.report.counts.p1, 1);
        assert_eq!(output.report.results[0].project, "widgets");
    }

    #[test]
    fn one_failing_scanner_does_not_abort_the_others() {
        let (_guard, dir) = scan_fixture();
        let registry = ScannerRegistry::new();
        registry.register(FakeScanner::failing(
            "BundlerAudit",
            Lang::Ruby,
            Context::Sca,
            "tool exploded",
        ));
        registry.register(FakeScanner::emitting(
            "Brakeman",
            Lang::Ruby,
            Context::Sast,
            vec![("finding".to_string(), Priority::P0, "k".to_string())],
        ));
        let cfg = config(&dir, None);

        let output = run_scan(&registry, &cfg).unwrap();
        assert_eq!(output.failed_scanners, vec!["BundlerAudit".to_string()]);
        assert_eq!(output.report.data.scanners_selected, 2);
        assert_eq!(output.report.data.scanners_run, 1);
        assert_eq!(output.report.results.len(), 1);
        assert_eq!(output.report.results[0].scanner, "Brakeman");
        assert_eq!(output.report.data.findings_total, 1);
    }

    #[test]
    fn no_build_script_means_no_build_step() {
        let (_guard, dir) = scan_fixture();
        let registry = ScannerRegistry::new();
        registry.register(FakeScanner::quiet("Brakeman", Lang::Ruby, Context::Sast));
        let cfg = config(&dir, None);

        let output = run_scan(&registry, &cfg).unwrap();
        assert_eq!(output.report.data.scanners_run, 1);
        assert!(output.report.data.note.is_none());
    }
}
