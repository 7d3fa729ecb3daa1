//! Match modes

use super::TemplateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Comparison operator applied by a template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Exact equality
    #[default]
    Equals,
    /// Inequality
    NotEquals,
    /// Value starts with the candidate
    Starts,
    /// Value ends with the candidate
    Ends,
    /// Value contains the candidate
    Contains,
    /// Value is greater than the candidate
    Greater,
    /// Value is lower than the candidate
    Lower,
    /// Value is greater than or equal to the candidate
    GreaterEqual,
    /// Value is lower than or equal to the candidate
    LowerEqual,
    /// Candidate is a regular expression found in the value
    Regex,
    /// Matches everything
    Any,
}

impl MatchMode {
    /// Symbol used when rendering templates
    pub fn symbol(&self) -> &'static str {
        match self {
            MatchMode::Equals => "==",
            MatchMode::NotEquals => "!=",
            MatchMode::Starts => "startswith",
            MatchMode::Ends => "endswith",
            MatchMode::Contains => "contains",
            MatchMode::Greater => ">",
            MatchMode::Lower => "<",
            MatchMode::GreaterEqual => ">=",
            MatchMode::LowerEqual => "<=",
            MatchMode::Regex => "regex",
            MatchMode::Any => "any",
        }
    }

    /// Whether the mode applies to numeric templates
    pub fn is_numeric(&self) -> bool {
        !matches!(
            self,
            MatchMode::Starts | MatchMode::Ends | MatchMode::Contains | MatchMode::Regex
        )
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for MatchMode {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mode = match s {
            "==" | "equals" => MatchMode::Equals,
            "!=" | "not_equals" => MatchMode::NotEquals,
            "startswith" | "starts" => MatchMode::Starts,
            "endswith" | "ends" => MatchMode::Ends,
            "contains" => MatchMode::Contains,
            ">" | "greater" => MatchMode::Greater,
            "<" | "lower" => MatchMode::Lower,
            ">=" | "greater_equal" => MatchMode::GreaterEqual,
            "<=" | "lower_equal" => MatchMode::LowerEqual,
            "regex" => MatchMode::Regex,
            "any" => MatchMode::Any,
            other => return Err(TemplateError::InvalidMatchMode(other.to_string())),
        };
        Ok(mode)
    }
}
