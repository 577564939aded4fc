//! Offense severity categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity classification of an offense type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OffenseCategory {
    /// Low-severity violation (e.g. minor speeding, parking).
    Minor,
    /// Serious violation (e.g. running a red light).
    Major,
    /// Most severe violation (e.g. driving without insurance).
    Critical,
}

impl OffenseCategory {
    /// Return the category as its display string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minor => "Minor",
            Self::Major => "Major",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for OffenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for OffenseCategory {
    type Err = finexpress_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "minor" => Ok(Self::Minor),
            "major" => Ok(Self::Major),
            "critical" => Ok(Self::Critical),
            _ => Err(finexpress_core::AppError::invalid_input(format!(
                "Invalid offense category: '{s}'. Expected one of: Minor, Major, Critical"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_by_severity() {
        assert!(OffenseCategory::Minor < OffenseCategory::Major);
        assert!(OffenseCategory::Major < OffenseCategory::Critical);
    }

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!(
            "CRITICAL".parse::<OffenseCategory>().unwrap(),
            OffenseCategory::Critical
        );
        assert!("severe".parse::<OffenseCategory>().is_err());
    }
}
