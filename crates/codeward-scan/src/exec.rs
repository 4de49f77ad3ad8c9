use anyhow::Context as _;
use camino::Utf8Path;
use std::process::Command;

/// Combined output of one command invocation.
#[derive(Clone, Debug)]
pub struct CommandOutput {
    /// stdout and stderr, concatenated in that order.
    pub text: String,
    /// Exit code; `None` when the process was killed by a signal.
    pub code: Option<i32>,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Run a shell command line in `dir` and capture its combined output.
///
/// A non-zero exit is not an error here; callers inspect `code` and `text`.
/// `label` only names the invocation in logs and error messages.
pub fn run_command(command: &str, dir: &Utf8Path, label: &str) -> anyhow::Result<CommandOutput> {
    tracing::debug!(label, command, %dir, "running command");
    let output = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(dir)
        .output()
        .with_context(|| format!("spawn {label}: {command}"))?;

    let mut text = String::from_utf8_lossy(&output.stdout).into_owned();
    text.push_str(&String::from_utf8_lossy(&output.stderr));

    Ok(CommandOutput {
        text,
        code: output.status.code(),
    })
}

/// The distinguished "tool missing" condition: the shell reports an absent
/// binary in its output rather than failing to spawn.
pub fn is_tool_missing(output: &str) -> bool {
    output.contains("command not found") || output.contains("is currently not installed")
}
