//! Value templates
//!
//! [`ValueMatcher`] compares the textual value of any term against one or more
//! candidate values. [`NamedNodeMatcher`] applies the same comparison to named
//! nodes only.

use super::{MatchMode, TemplateError, TemplateResult, TermMatch};
use crate::rdf::Term;
use regex::Regex;
use std::fmt;
use tracing::{debug, trace};

/// Delimiters recognized around `/pattern/flags` style regular expressions
const PATTERN_DELIMITERS: &[char] = &['/', '#', '~', '%', '@', '!', '|', '+', ';'];

/// Flags allowed after the closing delimiter
const PATTERN_FLAGS: &str = "imsxUu";

/// String comparison template
///
/// Matches when any candidate value satisfies the match mode against the
/// term's value. Without candidates the template matches everything.
#[derive(Debug, Clone)]
pub struct ValueMatcher {
    values: Vec<String>,
    mode: MatchMode,
    /// Compiled candidates, populated in regex mode only
    patterns: Vec<Regex>,
}

impl ValueMatcher {
    /// Create a template from zero or more candidate values.
    ///
    /// [`MatchMode::Any`] discards the candidates and an empty candidate list
    /// turns the mode into [`MatchMode::Any`]. In regex mode every candidate is
    /// compiled up front.
    pub fn new<I, S>(values: I, mode: MatchMode) -> TemplateResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = match mode {
            MatchMode::Any => Vec::new(),
            _ => values.into_iter().map(Into::into).collect(),
        };
        let mode = if values.is_empty() {
            if mode != MatchMode::Any {
                debug!(%mode, "no candidate values, falling back to any");
            }
            MatchMode::Any
        } else {
            mode
        };
        let patterns = match mode {
            MatchMode::Regex => values
                .iter()
                .map(|v| compile_pattern(v))
                .collect::<TemplateResult<Vec<_>>>()?,
            _ => Vec::new(),
        };

        Ok(Self {
            values,
            mode,
            patterns,
        })
    }

    /// Create a template from a textual mode tag such as `"contains"` or `">="`
    pub fn with_mode_tag<I, S>(values: I, mode: &str) -> TemplateResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(values, mode.parse()?)
    }

    /// Exact equality with a single value
    pub fn equals(value: impl Into<String>) -> Self {
        Self {
            values: vec![value.into()],
            mode: MatchMode::Equals,
            patterns: Vec::new(),
        }
    }

    /// Template matching every term
    pub fn any() -> Self {
        Self {
            values: Vec::new(),
            mode: MatchMode::Any,
            patterns: Vec::new(),
        }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Check a raw string value against the template
    pub fn matches_value(&self, value: &str) -> bool {
        match self.mode {
            MatchMode::Any => true,
            MatchMode::Regex => self.patterns.iter().any(|re| re.is_match(value)),
            MatchMode::Equals => self.any_candidate(|c| value == c),
            MatchMode::NotEquals => self.any_candidate(|c| value != c),
            MatchMode::Starts => self.any_candidate(|c| value.starts_with(c)),
            MatchMode::Ends => self.any_candidate(|c| value.ends_with(c)),
            MatchMode::Contains => self.any_candidate(|c| value.contains(c)),
            MatchMode::Greater => self.any_candidate(|c| value > c),
            MatchMode::Lower => self.any_candidate(|c| value < c),
            MatchMode::GreaterEqual => self.any_candidate(|c| value >= c),
            MatchMode::LowerEqual => self.any_candidate(|c| value <= c),
        }
    }

    fn any_candidate(&self, check: impl Fn(&str) -> bool) -> bool {
        self.values.iter().any(|candidate| check(candidate))
    }

    /// Candidate values as shown in rendered templates
    pub(crate) fn render_values(&self) -> String {
        match self.values.as_slice() {
            [] => String::new(),
            [single] => single.clone(),
            many => format!("[{}]", many.join(", ")),
        }
    }
}

impl TermMatch for ValueMatcher {
    fn matches_term(&self, term: &Term) -> bool {
        self.matches_value(term.value())
    }
}

impl fmt::Display for ValueMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[v {} {}]", self.mode, self.render_values())
    }
}

/// Value template restricted to named nodes
#[derive(Debug, Clone)]
pub struct NamedNodeMatcher {
    inner: ValueMatcher,
}

impl NamedNodeMatcher {
    pub fn new<I, S>(values: I, mode: MatchMode) -> TemplateResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            inner: ValueMatcher::new(values, mode)?,
        })
    }

    /// Named node with exactly this IRI
    pub fn equals(iri: impl Into<String>) -> Self {
        Self {
            inner: ValueMatcher::equals(iri),
        }
    }

    /// Any named node
    pub fn any() -> Self {
        Self {
            inner: ValueMatcher::any(),
        }
    }

    pub fn values(&self) -> &[String] {
        self.inner.values()
    }

    pub fn mode(&self) -> MatchMode {
        self.inner.mode()
    }
}

impl TermMatch for NamedNodeMatcher {
    fn matches_term(&self, term: &Term) -> bool {
        match term {
            Term::NamedNode(node) => self.inner.matches_value(node.as_str()),
            Term::BlankNode(_) | Term::Literal(_) | Term::DefaultGraph => false,
        }
    }
}

impl fmt::Display for NamedNodeMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[nn {} {}]", self.inner.mode, self.inner.render_values())
    }
}

/// Compile a candidate regular expression.
///
/// Delimited patterns (`/Lorem|foo/i`) have their delimiters stripped and
/// their flags turned into an inline flag group.
fn compile_pattern(pattern: &str) -> TemplateResult<Regex> {
    let source = strip_delimiters(pattern).unwrap_or_else(|| pattern.to_string());
    trace!(pattern, %source, "compiling value pattern");
    Regex::new(&source).map_err(|e| {
        debug!(pattern, error = %e, "rejected value pattern");
        TemplateError::InvalidPattern {
            pattern: pattern.to_string(),
            reason: e.to_string(),
        }
    })
}

fn strip_delimiters(pattern: &str) -> Option<String> {
    let delimiter = pattern
        .chars()
        .next()
        .filter(|c| PATTERN_DELIMITERS.contains(c))?;
    let body = &pattern[delimiter.len_utf8()..];
    let end = body.rfind(delimiter)?;
    let flags = &body[end + delimiter.len_utf8()..];
    if !flags.chars().all(|c| PATTERN_FLAGS.contains(c)) {
        return None;
    }

    let mut inline = String::new();
    for flag in flags.chars().filter(|c| *c != 'u') {
        if !inline.contains(flag) {
            inline.push(flag);
        }
    }
    let body = &body[..end];
    if inline.is_empty() {
        Some(body.to_string())
    } else {
        Some(format!("(?{}){}", inline, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{Literal, NamedNode};

    fn terms() -> Vec<Term> {
        vec![
            Literal::new_language_tagged_literal("Lorem ipsum", "lat").unwrap().into(),
            NamedNode::new("http://ipsum.dolor/sit#amet").unwrap().into(),
            Literal::new_simple_literal("foo bar").into(),
        ]
    }

    fn results(template: &impl TermMatch) -> Vec<bool> {
        terms().iter().map(|t| template.matches_term(t)).collect()
    }

    #[test]
    fn test_equality_modes() {
        let tmpl = ValueMatcher::new(["foo bar"], MatchMode::NotEquals).unwrap();
        assert_eq!(results(&tmpl), vec![true, true, false]);

        let tmpl = ValueMatcher::equals("foo bar");
        assert_eq!(results(&tmpl), vec![false, false, true]);
    }

    #[test]
    fn test_substring_modes() {
        let tmpl = ValueMatcher::new(["ipsum"], MatchMode::Contains).unwrap();
        assert_eq!(results(&tmpl), vec![true, true, false]);
        assert_eq!(tmpl.to_string(), "[v contains ipsum]");

        let tmpl = ValueMatcher::new(["Lorem"], MatchMode::Starts).unwrap();
        assert_eq!(results(&tmpl), vec![true, false, false]);

        let tmpl = ValueMatcher::new(["amet"], MatchMode::Ends).unwrap();
        assert_eq!(results(&tmpl), vec![false, true, false]);
    }

    #[test]
    fn test_ordering_modes() {
        let tmpl = ValueMatcher::new(["foo bar"], MatchMode::Greater).unwrap();
        assert_eq!(results(&tmpl), vec![false, true, false]);

        let tmpl = ValueMatcher::new(["http"], MatchMode::GreaterEqual).unwrap();
        assert_eq!(results(&tmpl), vec![false, true, false]);

        let tmpl = ValueMatcher::new(["foo bar"], MatchMode::LowerEqual).unwrap();
        assert_eq!(results(&tmpl), vec![true, false, true]);

        let tmpl = ValueMatcher::new(["http"], MatchMode::Lower).unwrap();
        assert_eq!(results(&tmpl), vec![true, false, true]);
    }

    #[test]
    fn test_lexicographic_not_numeric() {
        let ten: Term = Literal::new_simple_literal("10").into();
        let tmpl = ValueMatcher::new(["9"], MatchMode::Greater).unwrap();
        assert!(!tmpl.matches_term(&ten));
    }

    #[test]
    fn test_regex_mode() {
        let tmpl = ValueMatcher::new(["/Lorem|foo/"], MatchMode::Regex).unwrap();
        assert_eq!(results(&tmpl), vec![true, false, true]);

        let tmpl = ValueMatcher::new(["/LOREM/i"], MatchMode::Regex).unwrap();
        assert_eq!(results(&tmpl), vec![true, false, false]);

        let tmpl = ValueMatcher::new(["^http"], MatchMode::Regex).unwrap();
        assert_eq!(results(&tmpl), vec![false, true, false]);
    }

    #[test]
    fn test_invalid_pattern() {
        let err = ValueMatcher::new(["(unclosed"], MatchMode::Regex).unwrap_err();
        assert!(matches!(err, TemplateError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_strip_delimiters() {
        assert_eq!(strip_delimiters("/a|b/").as_deref(), Some("a|b"));
        assert_eq!(strip_delimiters("#a#iu").as_deref(), Some("(?i)a"));
        assert_eq!(strip_delimiters("/a/ii").as_deref(), Some("(?i)a"));
        assert_eq!(strip_delimiters("/a/q"), None);
        assert_eq!(strip_delimiters("^a$"), None);
        assert_eq!(strip_delimiters("/open"), None);
    }

    #[test]
    fn test_multiple_values() {
        let tmpl = ValueMatcher::new(["Lorem", "bar"], MatchMode::Contains).unwrap();
        assert_eq!(results(&tmpl), vec![true, false, true]);
        assert_eq!(tmpl.to_string(), "[v contains [Lorem, bar]]");
    }

    #[test]
    fn test_any_mode_coupling() {
        let tmpl = ValueMatcher::new(["ignored"], MatchMode::Any).unwrap();
        assert!(tmpl.values().is_empty());
        assert_eq!(results(&tmpl), vec![true, true, true]);
        assert!(tmpl.matches_term(&Term::DefaultGraph));
        assert_eq!(tmpl.to_string(), "[v any ]");

        let tmpl = ValueMatcher::new(Vec::<String>::new(), MatchMode::Equals).unwrap();
        assert_eq!(tmpl.mode(), MatchMode::Any);
        assert_eq!(results(&tmpl), vec![true, true, true]);
    }

    #[test]
    fn test_mode_tag() {
        let tmpl = ValueMatcher::with_mode_tag(["ipsum"], "contains").unwrap();
        assert_eq!(tmpl.mode(), MatchMode::Contains);

        let err = ValueMatcher::with_mode_tag(["foo"], "bar").unwrap_err();
        assert_eq!(err.to_string(), "Unknown match mode: bar");
    }

    #[test]
    fn test_named_node_matcher() {
        let tmpl = NamedNodeMatcher::new(["ipsum"], MatchMode::Contains).unwrap();
        assert_eq!(results(&tmpl), vec![false, true, false]);
        assert_eq!(tmpl.to_string(), "[nn contains ipsum]");

        let tmpl = NamedNodeMatcher::any();
        assert_eq!(results(&tmpl), vec![false, true, false]);
        assert!(!tmpl.matches_term(&Term::DefaultGraph));
        assert_eq!(tmpl.to_string(), "[nn any ]");
    }

    #[test]
    fn test_rendering_is_stable() {
        let a = ValueMatcher::new(["x", "y"], MatchMode::Ends).unwrap();
        let b = ValueMatcher::new(["x", "y"], MatchMode::Ends).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }
}
