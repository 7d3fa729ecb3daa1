//! Numeric templates

use super::{MatchMode, TemplateError, TemplateResult, TermMatch};
use crate::rdf::{vocab, Literal, Term};
use std::fmt;
use tracing::debug;

/// Numeric comparison template over literals
///
/// The literal's lexical value must parse as a number. With `strict` set its
/// datatype must also be one of [`vocab::NUMERIC_DATATYPES`]. Equality is exact,
/// no epsilon is applied.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericMatcher {
    value: Option<f64>,
    mode: MatchMode,
    strict: bool,
}

impl NumericMatcher {
    /// Create a numeric template.
    ///
    /// Fails with [`TemplateError::InvalidMatchMode`] for the string-only modes
    /// (starts, ends, contains, regex).
    pub fn new(value: Option<f64>, mode: MatchMode, strict: bool) -> TemplateResult<Self> {
        if !mode.is_numeric() {
            debug!(%mode, "mode not applicable to numeric templates");
            return Err(TemplateError::InvalidMatchMode(mode.symbol().to_string()));
        }
        let value = match mode {
            MatchMode::Any => None,
            _ => value,
        };
        let mode = match value {
            None => MatchMode::Any,
            Some(_) => mode,
        };
        Ok(Self { value, mode, strict })
    }

    /// Any literal with a numeric value
    pub fn any(strict: bool) -> Self {
        Self {
            value: None,
            mode: MatchMode::Any,
            strict,
        }
    }

    /// Literal numerically equal to `value`
    pub fn equals(value: f64) -> Self {
        Self {
            value: Some(value),
            mode: MatchMode::Equals,
            strict: false,
        }
    }

    pub fn value(&self) -> Option<f64> {
        self.value
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    fn compare(&self, number: f64) -> bool {
        let Some(value) = self.value else {
            return true;
        };
        match self.mode {
            MatchMode::Equals => number == value,
            MatchMode::NotEquals => number != value,
            MatchMode::Greater => number > value,
            MatchMode::Lower => number < value,
            MatchMode::GreaterEqual => number >= value,
            MatchMode::LowerEqual => number <= value,
            MatchMode::Any => true,
            // rejected by the constructor
            MatchMode::Starts | MatchMode::Ends | MatchMode::Contains | MatchMode::Regex => false,
        }
    }

    fn matches_literal(&self, literal: &Literal) -> bool {
        if self.strict && !vocab::is_numeric_datatype(literal.datatype()) {
            return false;
        }
        match parse_number(literal.value()) {
            Some(number) => self.compare(number),
            None => false,
        }
    }
}

impl TermMatch for NumericMatcher {
    fn matches_term(&self, term: &Term) -> bool {
        match term {
            Term::Literal(literal) => self.matches_literal(literal),
            Term::NamedNode(_) | Term::BlankNode(_) | Term::DefaultGraph => false,
        }
    }
}

impl fmt::Display for NumericMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let strict = if self.strict { "strict " } else { "" };
        match self.value {
            Some(value) => write!(f, "[n {}{} {}]", strict, self.mode, value),
            None => write!(f, "[n {}{} ]", strict, self.mode),
        }
    }
}

/// Parse a decimal lexical form: optional sign, digits with an optional
/// fraction, optional exponent, surrounding whitespace allowed.
fn parse_number(lexical: &str) -> Option<f64> {
    let trimmed = lexical.trim_matches(|c: char| c.is_ascii_whitespace());
    let well_formed = trimmed.bytes().any(|b| b.is_ascii_digit())
        && trimmed
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
    if !well_formed {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
