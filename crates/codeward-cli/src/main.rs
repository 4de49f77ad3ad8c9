//! CLI entry point for codeward.
//!
//! This module is intentionally thin: it handles argument parsing, file and
//! environment IO, and exit codes. The pipeline lives in `codeward-scan`,
//! repository plumbing in `codeward-git`.

use anyhow::Context as _;
use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand};
use codeward_git::{clone_into, CloneCredential, RepoIdentity};
use codeward_scan::{render_console, run_scan, ScannerRegistry};
use codeward_settings::{EffectiveConfig, GitSettings, Overrides};
use codeward_types::ReportEnvelope;

#[derive(Parser, Debug)]
#[command(
    name = "codeward",
    version,
    about = "Scanner orchestration and finding aggregation for source checkouts"
)]
struct Cli {
    /// Path to codeward config TOML.
    #[arg(long, default_value = "codeward.toml")]
    config: Utf8PathBuf,

    /// Override the project name.
    #[arg(long)]
    project: Option<String>,

    /// Override the language (java|javascript|python|ruby|go).
    #[arg(long)]
    lang: Option<String>,

    /// Restrict the run to one tool.
    #[arg(long)]
    tool: Option<String>,

    /// Restrict the run to one context (SAST|SCA).
    #[arg(long)]
    context: Option<String>,

    /// Override the directory to scan.
    #[arg(long)]
    scan_dir: Option<Utf8PathBuf>,

    /// Override the build command run before scanning.
    #[arg(long)]
    build_script: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Build the project, run the qualifying scanners, write the aggregate
    /// report.
    Scan {
        /// Where to write the JSON report.
        #[arg(long, default_value = "artifacts/codeward/report.json")]
        report_out: Utf8PathBuf,
    },

    /// Clone the configured repository into a directory, honoring branch and
    /// commit pins.
    Clone {
        /// Target directory (must be empty or absent).
        #[arg(long, default_value = ".")]
        target: Utf8PathBuf,
    },

    /// Resolve and print the identity of a local checkout.
    Identify {
        /// Checkout directory.
        #[arg(long, default_value = ".")]
        dir: Utf8PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match &cli.cmd {
        Commands::Scan { report_out } => cmd_scan(&cli, report_out.clone()),
        Commands::Clone { target } => cmd_clone(&cli, target.clone()),
        Commands::Identify { dir } => cmd_identify(dir.clone()),
    };

    if let Err(err) = result {
        eprintln!("codeward error: {err:#}");
        std::process::exit(1);
    }
}

fn load_effective_config(cli: &Cli) -> anyhow::Result<EffectiveConfig> {
    // Missing config file is allowed; defaults and CLI overrides apply.
    let cfg_text = std::fs::read_to_string(&cli.config).unwrap_or_default();
    let cfg = if cfg_text.trim().is_empty() {
        codeward_settings::CodewardConfigV1::default()
    } else {
        codeward_settings::parse_config_toml(&cfg_text).context("parse config")?
    };

    let overrides = Overrides {
        project: cli.project.clone(),
        lang: cli.lang.clone(),
        tool: cli.tool.clone(),
        context: cli.context.clone(),
        scan_dir: cli.scan_dir.clone(),
        build_script: cli.build_script.clone(),
    };
    codeward_settings::resolve_config(cfg, overrides).context("resolve config")
}

fn default_registry() -> ScannerRegistry {
    // TODO: register the dependency-check and brakeman adapter crates here
    // once their report parsers land.
    ScannerRegistry::new()
}

fn cmd_scan(cli: &Cli, report_out: Utf8PathBuf) -> anyhow::Result<()> {
    let cfg = load_effective_config(cli)?;
    if !cfg.scan_dir.exists() {
        anyhow::bail!("scan directory does not exist: {}", cfg.scan_dir);
    }

    let registry = default_registry();
    let output = run_scan(&registry, &cfg)?;

    write_report_file(&report_out, &output.report).context("write report json")?;
    print!("{}", render_console(&output.report));
    Ok(())
}

fn cmd_clone(cli: &Cli, target: Utf8PathBuf) -> anyhow::Result<()> {
    let cfg = load_effective_config(cli)?;
    let git = cfg
        .git
        .context("clone requires a [git] section with a url in the config")?;

    let repo = RepoIdentity::from_url(&git.url, git.branch.clone(), git.commit.clone())
        .context("resolve repository identity")?;
    let credential = resolve_credential(&git)?;

    let local = clone_into(&repo, credential.as_ref(), &target).context("clone repository")?;
    println!("cloned {} into {}", local.slug(), target);
    Ok(())
}

fn cmd_identify(dir: Utf8PathBuf) -> anyhow::Result<()> {
    let repo = RepoIdentity::from_local(&dir).context("resolve local repository")?;
    println!("slug:\t{}", repo.slug());
    println!("web:\t{}", repo.web_url());
    println!("http:\t{}", repo.http_clone_uri());
    println!("ssh:\t{}", repo.ssh_clone_uri());
    if let Some(branch) = repo.branch() {
        println!("branch:\t{branch}");
    }
    if let Some(commit) = repo.commit() {
        println!("commit:\t{commit}");
    }
    Ok(())
}

/// Dereference credential indirection: key material from the configured
/// path, token from the named environment variable. The ssh key wins when
/// both modes are configured.
fn resolve_credential(git: &GitSettings) -> anyhow::Result<Option<CloneCredential>> {
    let Some(creds) = &git.credentials else {
        return Ok(None);
    };

    if let Some(key_path) = &creds.ssh_key_path {
        let private_key = std::fs::read_to_string(key_path)
            .with_context(|| format!("read ssh key: {key_path}"))?;
        return Ok(Some(CloneCredential::SshKey { private_key }));
    }

    if let (Some(username), Some(token_env)) = (&creds.username, &creds.token_env) {
        let token = std::env::var(token_env)
            .with_context(|| format!("read token from environment: {token_env}"))?;
        return Ok(Some(CloneCredential::Token {
            username: username.clone(),
            token,
        }));
    }

    Ok(None)
}

fn write_report_file(path: &Utf8Path, report: &ReportEnvelope) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    let data = serde_json::to_string_pretty(report).context("serialize report")?;
    std::fs::write(path, data).with_context(|| format!("write report: {path}"))?;
    Ok(())
}
