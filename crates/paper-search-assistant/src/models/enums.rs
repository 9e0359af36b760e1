//! Enumerations shared by inputs and the CLI.

use serde::{Deserialize, Serialize};

/// How a publication year is compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum YearOperator {
    /// Published in exactly this year.
    #[serde(alias = "exact")]
    #[value(alias = "exact")]
    In,
    /// Published strictly before this year.
    Before,
    /// Published strictly after this year.
    After,
}

impl YearOperator {
    /// Parse an operator leniently (case and surrounding whitespace ignored).
    ///
    /// Returns `None` for anything unrecognized.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "in" | "exact" => Some(Self::In),
            "before" => Some(Self::Before),
            "after" => Some(Self::After),
            _ => None,
        }
    }

    /// Wire name used in the capability schema.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Before => "before",
            Self::After => "after",
        }
    }
}

impl std::fmt::Display for YearOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format for the `search` command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ResponseFormat {
    /// Human-readable Markdown.
    #[default]
    Markdown,
    /// Pretty-printed JSON records.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_operator_parse() {
        assert_eq!(YearOperator::parse("in"), Some(YearOperator::In));
        assert_eq!(YearOperator::parse("EXACT"), Some(YearOperator::In));
        assert_eq!(YearOperator::parse(" Before "), Some(YearOperator::Before));
        assert_eq!(YearOperator::parse("after"), Some(YearOperator::After));
        assert_eq!(YearOperator::parse("during"), None);
        assert_eq!(YearOperator::parse(""), None);
    }

    #[test]
    fn test_year_operator_serde_names() {
        assert_eq!(serde_json::to_string(&YearOperator::Before).unwrap(), "\"before\"");
        let op: YearOperator = serde_json::from_str("\"exact\"").unwrap();
        assert_eq!(op, YearOperator::In);
    }
}
