use codeward_types::{FindingRecord, Priority};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

const CVE_BASE_URL: &str = "https://nvd.nist.gov/vuln/detail/";

#[derive(Debug, thiserror::Error)]
pub enum FindingError {
    #[error("null or empty key cannot be processed")]
    EmptyKey,
}

/// One reported issue: a severity, descriptive fields, and an identity.
///
/// A `Finding` is a mutable draft until it is committed into a
/// [`crate::FindingStore`]; after that, the stored copy only changes by
/// absorbing later drafts that share one of its keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    title: String,
    priority: Priority,
    fields: BTreeMap<String, String>,
    keys: BTreeSet<String>,
    tags: BTreeSet<String>,
}

impl Finding {
    pub fn new<S: Into<String>>(title: S, priority: Priority) -> Self {
        Self {
            title: title.into(),
            priority,
            fields: BTreeMap::new(),
            keys: BTreeSet::new(),
            tags: BTreeSet::new(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    pub fn keys(&self) -> &BTreeSet<String> {
        &self.keys
    }

    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    /// Set a descriptive field. A later call with the same label overwrites.
    pub fn set_field<L: Into<String>, C: Into<String>>(&mut self, label: L, content: C) {
        self.fields.insert(label.into(), content.into());
    }

    pub fn add_tag<S: Into<String>>(&mut self, tag: S) {
        self.tags.insert(tag.into());
    }

    /// Add an identity key. Every key is also a tag.
    pub fn add_key<S: Into<String>>(&mut self, key: S) -> Result<(), FindingError> {
        let key = key.into();
        if key.is_empty() {
            return Err(FindingError::EmptyKey);
        }
        self.tags.insert(key.clone());
        self.keys.insert(key);
        Ok(())
    }

    /// Render a single CVE id as a linked `CVE` field. Tokens that do not
    /// start with `CVE` are ignored.
    pub fn set_cve(&mut self, cve: &str) {
        if is_cve(cve) {
            self.set_field("CVE", format!("[{cve}]({CVE_BASE_URL}{cve})"));
        }
    }

    /// Render a list of CVE ids as one linked `CVEs` field, deduplicated.
    pub fn set_cves(&mut self, cves: &[String]) {
        let unique: BTreeSet<&str> = cves
            .iter()
            .map(String::as_str)
            .filter(|cve| is_cve(cve))
            .collect();
        if unique.is_empty() {
            return;
        }
        let content = unique
            .iter()
            .map(|cve| format!("[{cve}]({CVE_BASE_URL}{cve})"))
            .collect::<Vec<_>>()
            .join(" ");
        self.set_field("CVEs", content);
    }

    pub fn shares_key_with(&self, other: &Finding) -> bool {
        self.keys.iter().any(|key| other.keys.contains(key))
    }

    /// Merge `incoming` into `self`: incoming fields overwrite on label
    /// collision, keys and tags are unioned, priority keeps the more severe.
    /// The existing title survives.
    pub(crate) fn absorb(&mut self, incoming: Finding) {
        self.priority = self.priority.escalate(incoming.priority);
        self.fields.extend(incoming.fields);
        self.keys.extend(incoming.keys);
        self.tags.extend(incoming.tags);
    }

    pub fn to_record(&self) -> FindingRecord {
        FindingRecord {
            title: self.title.clone(),
            priority: self.priority,
            tags: self.tags.iter().cloned().collect(),
            fields: self.fields.clone(),
        }
    }
}

fn is_cve(token: &str) -> bool {
    token.to_ascii_uppercase().starts_with("CVE")
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_record(), f)
    }
}
