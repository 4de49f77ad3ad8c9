use camino::Utf8Path;
use codeward_types::RelPath;
use serde::Serialize;
use sha1::{Digest, Sha1};

/// Canonical record hashed into a finding key. Field order is the wire
/// order; changing it changes every digest.
#[derive(Serialize)]
struct HashableContent<'a> {
    file_path: &'a str,
    snippet: &'a str,
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    args: Option<&'a [String]>,
}

/// Compute a stable SHA-1 fingerprint for a code-anchored finding.
///
/// Identity inputs:
/// - the file path relative to the scan root
/// - the exact text of lines `start_line..=end_line` (1-based, inclusive)
/// - a finding-type discriminator
/// - optional extra discriminators
///
/// Returns `None` when no identity can be established: the range is invalid
/// (`start < 1`, `start > end`, or `end` past the last line) or the file is
/// unreadable. Note that the snippet is positional, so a finding's identity
/// shifts when unrelated lines move above it; that fragility is deliberate.
pub fn fingerprint(
    scan_root: &Utf8Path,
    file: &Utf8Path,
    start_line: usize,
    end_line: usize,
    kind: &str,
    args: Option<&[String]>,
) -> Option<String> {
    let text = std::fs::read_to_string(file).ok()?;
    let lines: Vec<&str> = text.lines().collect();
    if start_line < 1 || start_line > end_line || end_line > lines.len() {
        return None;
    }
    let snippet = lines[start_line - 1..end_line].join("\n");

    let rel = RelPath::relative_to(scan_root, file);
    let content = HashableContent {
        file_path: rel.as_str(),
        snippet: &snippet,
        kind,
        args,
    };
    let canonical = serde_json::to_string(&content).ok()?;

    let mut hasher = Sha1::new();
    hasher.update(canonical.as_bytes());
    Some(hex::encode(hasher.finalize()))
}
