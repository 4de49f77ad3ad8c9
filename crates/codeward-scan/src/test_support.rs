use crate::{ScanContext, Scanner};
use codeward_findings::FindingStore;
use codeward_types::{Context, Lang, Priority};

enum Behavior {
    Quiet,
    Emit(Vec<(String, Priority, String)>),
    Fail(String),
}

pub(crate) struct FakeScanner {
    tool: String,
    lang: Lang,
    context: Context,
    behavior: Behavior,
}

impl FakeScanner {
    pub fn quiet(tool: &str, lang: Lang, context: Context) -> Self {
        Self {
            tool: tool.to_string(),
            lang,
            context,
            behavior: Behavior::Quiet,
        }
    }

    /// Commits one finding per (title, priority, key) triple.
    pub fn emitting(
        tool: &str,
        lang: Lang,
        context: Context,
        findings: Vec<(String, Priority, String)>,
    ) -> Self {
        Self {
            tool: tool.to_string(),
            lang,
            context,
            behavior: Behavior::Emit(findings),
        }
    }

    pub fn failing(tool: &str, lang: Lang, context: Context, message: &str) -> Self {
        Self {
            tool: tool.to_string(),
            lang,
            context,
            behavior: Behavior::Fail(message.to_string()),
        }
    }
}

impl Scanner for FakeScanner {
    fn lang(&self) -> Lang {
        self.lang
    }

    fn tool(&self) -> &str {
        &self.tool
    }

    fn context(&self) -> Context {
        self.context
    }

    fn scan(&self, _ctx: &ScanContext, store: &mut FindingStore) -> anyhow::Result<()> {
        match &self.behavior {
            Behavior::Quiet => Ok(()),
            Behavior::Emit(findings) => {
                for (title, priority, key) in findings {
                    let mut finding = store.new_finding(title.clone(), *priority);
                    finding.add_key(key.clone())?;
                    store.commit(finding);
                }
                Ok(())
            }
            Behavior::Fail(message) => anyhow::bail!("{message}"),
        }
    }
}
