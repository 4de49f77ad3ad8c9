use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages a scanner adapter can declare. Selection matches on equality.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    Java,
    JavaScript,
    Python,
    Ruby,
    Go,
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Lang::Java => "java",
            Lang::JavaScript => "javascript",
            Lang::Python => "python",
            Lang::Ruby => "ruby",
            Lang::Go => "go",
        };
        f.write_str(s)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown language: {0} (expected java|javascript|python|ruby|go)")]
pub struct ParseLangError(String);

impl FromStr for Lang {
    type Err = ParseLangError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "java" => Ok(Lang::Java),
            "javascript" | "js" => Ok(Lang::JavaScript),
            "python" => Ok(Lang::Python),
            "ruby" => Ok(Lang::Ruby),
            "go" | "golang" => Ok(Lang::Go),
            other => Err(ParseLangError(other.to_string())),
        }
    }
}

/// The kind of analysis a scanner performs: static analysis of the code
/// itself, or composition analysis of its dependencies.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Context {
    Sast,
    Sca,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Context::Sast => f.write_str("SAST"),
            Context::Sca => f.write_str("SCA"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown context: {0} (expected SAST|SCA)")]
pub struct ParseContextError(String);

impl FromStr for Context {
    type Err = ParseContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SAST" => Ok(Context::Sast),
            "SCA" => Ok(Context::Sca),
            other => Err(ParseContextError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_parse_accepts_aliases() {
        assert_eq!("JS".parse::<Lang>().unwrap(), Lang::JavaScript);
        assert_eq!("golang".parse::<Lang>().unwrap(), Lang::Go);
        assert!("cobol".parse::<Lang>().is_err());
    }

    #[test]
    fn context_parse_is_case_insensitive() {
        assert_eq!("sast".parse::<Context>().unwrap(), Context::Sast);
        assert_eq!("Sca".parse::<Context>().unwrap(), Context::Sca);
        assert!("dast".parse::<Context>().is_err());
    }

    #[test]
    fn serde_shapes_are_stable() {
        assert_eq!(serde_json::to_string(&Lang::Ruby).unwrap(), "\"ruby\"");
        assert_eq!(serde_json::to_string(&Context::Sca).unwrap(), "\"SCA\"");
    }
}
