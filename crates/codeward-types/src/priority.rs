use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordinal severity for findings. `P0` is the most severe, `P4` the least.
///
/// The derived `Ord` follows declaration order, so "more severe" compares
/// as "less than". Merging two findings keeps the minimum.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
pub enum Priority {
    P0,
    P1,
    P2,
    P3,
    P4,
}

impl Priority {
    /// Numeric rank for comparison and reporting. Lower rank is more severe.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// The more severe of two priorities.
    pub fn escalate(self, other: Priority) -> Priority {
        self.min(other)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.rank())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown priority: {0} (expected P0..P4)")]
pub struct ParsePriorityError(String);

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "P0" => Ok(Priority::P0),
            "P1" => Ok(Priority::P1),
            "P2" => Ok(Priority::P2),
            "P3" => Ok(Priority::P3),
            "P4" => Ok(Priority::P4),
            other => Err(ParsePriorityError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_follows_declaration_order() {
        assert_eq!(Priority::P0.rank(), 0);
        assert_eq!(Priority::P4.rank(), 4);
        assert!(Priority::P0 < Priority::P1);
    }

    #[test]
    fn escalate_keeps_the_more_severe() {
        assert_eq!(Priority::P2.escalate(Priority::P0), Priority::P0);
        assert_eq!(Priority::P0.escalate(Priority::P2), Priority::P0);
        assert_eq!(Priority::P3.escalate(Priority::P3), Priority::P3);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("p1".parse::<Priority>().unwrap(), Priority::P1);
        assert!("P5".parse::<Priority>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for p in [
            Priority::P0,
            Priority::P1,
            Priority::P2,
            Priority::P3,
            Priority::P4,
        ] {
            assert_eq!(p.to_string().parse::<Priority>().unwrap(), p);
        }
    }
}
