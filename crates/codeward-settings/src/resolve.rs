use crate::model::{CodewardConfigV1, CredentialsConfig};
use anyhow::Context as _;
use camino::Utf8PathBuf;
use codeward_types::{Context, Lang};

/// CLI-side overrides; any set field wins over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub project: Option<String>,
    pub lang: Option<String>,
    pub tool: Option<String>,
    pub context: Option<String>,
    pub scan_dir: Option<Utf8PathBuf>,
    pub build_script: Option<String>,
}

/// Repository settings after resolution. Credential material is still
/// indirect (env var name, key path); the CLI dereferences it.
#[derive(Clone, Debug, PartialEq)]
pub struct GitSettings {
    pub url: String,
    pub branch: Option<String>,
    pub commit: Option<String>,
    pub credentials: Option<CredentialsConfig>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EffectiveConfig {
    pub project: String,
    pub lang: Lang,
    pub tool: Option<String>,
    pub context: Option<Context>,
    pub scan_dir: Utf8PathBuf,
    pub build_script: Option<String>,
    pub git: Option<GitSettings>,
}

pub fn resolve_config(
    cfg: CodewardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<EffectiveConfig> {
    let lang_s = overrides
        .lang
        .or(cfg.lang)
        .context("a language is required (config `lang` or --lang)")?;
    let lang: Lang = lang_s.parse()?;

    let context = match overrides.context.or(cfg.context) {
        Some(s) => Some(s.parse::<Context>()?),
        None => None,
    };

    let scan_dir = overrides
        .scan_dir
        .or_else(|| cfg.scan_dir.map(Utf8PathBuf::from))
        .unwrap_or_else(|| Utf8PathBuf::from("."));

    let project = overrides
        .project
        .or(cfg.project)
        .or_else(|| scan_dir.file_name().map(str::to_string))
        .unwrap_or_else(|| "unnamed-project".to_string());

    let tool = overrides
        .tool
        .or(cfg.tool)
        .filter(|tool| !tool.is_empty());

    let build_script = overrides
        .build_script
        .or(cfg.build_script)
        .filter(|script| !script.trim().is_empty());

    let git = match cfg.git {
        Some(section) => match section.url {
            Some(url) => Some(GitSettings {
                url,
                branch: section.branch.filter(|b| !b.is_empty()),
                commit: section.commit.filter(|c| !c.is_empty()),
                credentials: section.credentials,
            }),
            None => None,
        },
        None => None,
    };

    Ok(EffectiveConfig {
        project,
        lang,
        tool,
        context,
        scan_dir,
        build_script,
        git,
    })
}
