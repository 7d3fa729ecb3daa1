//! Literal templates

use super::{MatchMode, TemplateResult, TermMatch, ValueMatcher};
use crate::rdf::{Literal, Term};
use std::fmt;

/// Value template restricted to literals, with optional language and datatype constraints
///
/// - `lang`: `None` places no constraint, `Some("")` requires any non-empty
///   language tag, any other value must equal the literal's tag.
/// - `datatype`: `None` places no constraint, otherwise must equal the
///   literal's datatype IRI.
#[derive(Debug, Clone)]
pub struct LiteralMatcher {
    value: ValueMatcher,
    lang: Option<String>,
    datatype: Option<String>,
}

impl LiteralMatcher {
    pub fn new<I, S>(values: I, mode: MatchMode) -> TemplateResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            value: ValueMatcher::new(values, mode)?,
            lang: None,
            datatype: None,
        })
    }

    /// Literal with exactly this lexical value
    pub fn equals(value: impl Into<String>) -> Self {
        Self {
            value: ValueMatcher::equals(value),
            lang: None,
            datatype: None,
        }
    }

    /// Any literal
    pub fn any() -> Self {
        Self {
            value: ValueMatcher::any(),
            lang: None,
            datatype: None,
        }
    }

    /// Require a language tag (`""` accepts any non-empty tag)
    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    /// Require a datatype IRI
    pub fn with_datatype(mut self, datatype: impl Into<String>) -> Self {
        self.datatype = Some(datatype.into());
        self
    }

    pub fn lang(&self) -> Option<&str> {
        self.lang.as_deref()
    }

    pub fn datatype(&self) -> Option<&str> {
        self.datatype.as_deref()
    }

    pub fn mode(&self) -> MatchMode {
        self.value.mode()
    }

    fn matches_literal(&self, literal: &Literal) -> bool {
        let lang_ok = match self.lang.as_deref() {
            None => true,
            Some("") => literal.language().is_some_and(|l| !l.is_empty()),
            Some(lang) => literal.language() == Some(lang),
        };
        let datatype_ok = match self.datatype.as_deref() {
            None => true,
            Some(datatype) => literal.datatype() == datatype,
        };
        lang_ok && datatype_ok && self.value.matches_value(literal.value())
    }
}

impl TermMatch for LiteralMatcher {
    fn matches_term(&self, term: &Term) -> bool {
        match term {
            Term::Literal(literal) => self.matches_literal(literal),
            Term::NamedNode(_) | Term::BlankNode(_) | Term::DefaultGraph => false,
        }
    }
}

impl fmt::Display for LiteralMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[l {} \"{}\"@{}^^{}]",
            self.value.mode(),
            self.value.render_values(),
            self.lang.as_deref().unwrap_or(""),
            self.datatype.as_deref().unwrap_or("")
        )
    }
}
