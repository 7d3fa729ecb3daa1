//! Quad templates
//!
//! A [`QuadMatcher`] holds an optional term template per quad position. Empty
//! slots are wildcards. Slots are given as [`SlotSpec`]s, which accept raw
//! strings (exact value match), terms (term equality) or any term template.

use super::{AnyOf, LiteralMatcher, NamedNodeMatcher, Not, NumericMatcher, QuadMatch, TermMatch, ValueMatcher};
use crate::rdf::{BlankNode, GraphName, Literal, NamedNode, Quad, Term};
use std::fmt;
use std::sync::Arc;

/// Resolved per-position template
#[derive(Debug, Clone)]
pub enum Slot {
    /// Matches by term equality
    Term(Term),
    /// Matches through a term template
    Matcher(Arc<dyn TermMatch>),
}

impl Slot {
    /// The constant term of this slot, if it is one
    pub fn as_term(&self) -> Option<&Term> {
        match self {
            Slot::Term(term) => Some(term),
            Slot::Matcher(_) => None,
        }
    }

    /// Whether the slot holds the default graph term itself
    pub fn is_default_graph(&self) -> bool {
        matches!(self, Slot::Term(Term::DefaultGraph))
    }
}

impl TermMatch for Slot {
    fn matches_term(&self, term: &Term) -> bool {
        match self {
            Slot::Term(expected) => expected == term,
            Slot::Matcher(matcher) => matcher.matches_term(term),
        }
    }
}

/// Term slots compare by value, template slots by identity.
impl PartialEq for Slot {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Slot::Term(a), Slot::Term(b)) => a == b,
            (Slot::Matcher(a), Slot::Matcher(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Term(term) => write!(f, "{}", term),
            Slot::Matcher(matcher) => write!(f, "{}", matcher),
        }
    }
}

/// Slot argument accepted by [`QuadMatcher`] constructors
///
/// A template that stands for a plain term (see [`TermMatch::as_term`]) resolves
/// to a term slot, so `Arc<dyn TermMatch>` wrapping [`Term::DefaultGraph`] still
/// takes the default-graph shortcut in the graph position.
#[derive(Debug, Clone, Default)]
pub enum SlotSpec {
    /// Matches anything
    #[default]
    Wildcard,
    /// Exact match on the term's value
    Value(String),
    /// Term equality
    Term(Term),
    /// Any term template
    Matcher(Arc<dyn TermMatch>),
}

impl SlotSpec {
    fn resolve(self) -> Option<Slot> {
        match self {
            SlotSpec::Wildcard => None,
            SlotSpec::Value(value) => Some(Slot::Matcher(Arc::new(ValueMatcher::equals(value)))),
            SlotSpec::Term(term) => Some(Slot::Term(term)),
            SlotSpec::Matcher(matcher) => Some(match matcher.as_term() {
                Some(term) => Slot::Term(term.clone()),
                None => Slot::Matcher(matcher),
            }),
        }
    }
}

impl From<&str> for SlotSpec {
    fn from(value: &str) -> Self {
        SlotSpec::Value(value.to_string())
    }
}

impl From<String> for SlotSpec {
    fn from(value: String) -> Self {
        SlotSpec::Value(value)
    }
}

impl From<Slot> for SlotSpec {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Term(term) => SlotSpec::Term(term),
            Slot::Matcher(matcher) => SlotSpec::Matcher(matcher),
        }
    }
}

impl From<Arc<dyn TermMatch>> for SlotSpec {
    fn from(matcher: Arc<dyn TermMatch>) -> Self {
        SlotSpec::Matcher(matcher)
    }
}

impl<T: Into<SlotSpec>> From<Option<T>> for SlotSpec {
    fn from(spec: Option<T>) -> Self {
        spec.map(Into::into).unwrap_or_default()
    }
}

macro_rules! term_slot {
    ($($ty:ty),*) => {
        $(impl From<$ty> for SlotSpec {
            fn from(term: $ty) -> Self {
                SlotSpec::Term(Term::from(term))
            }
        })*
    };
}

term_slot!(Term, NamedNode, BlankNode, Literal, GraphName);

macro_rules! matcher_slot {
    ($($ty:ty),*) => {
        $(impl From<$ty> for SlotSpec {
            fn from(matcher: $ty) -> Self {
                SlotSpec::Matcher(Arc::new(matcher))
            }
        })*
    };
}

matcher_slot!(ValueMatcher, NamedNodeMatcher, LiteralMatcher, NumericMatcher);

impl<M: TermMatch + 'static> From<Not<M>> for SlotSpec {
    fn from(matcher: Not<M>) -> Self {
        SlotSpec::Matcher(Arc::new(matcher))
    }
}

impl<M: TermMatch + 'static> From<AnyOf<M>> for SlotSpec {
    fn from(matcher: AnyOf<M>) -> Self {
        SlotSpec::Matcher(Arc::new(matcher))
    }
}

/// Quad template
///
/// Matches when every non-empty slot accepts the corresponding quad position,
/// inverted when negated. A graph slot holding the default graph term accepts
/// any graph.
#[derive(Debug, Clone, Default)]
pub struct QuadMatcher {
    subject: Option<Slot>,
    predicate: Option<Slot>,
    object: Option<Slot>,
    graph: Option<Slot>,
    negate: bool,
}

impl QuadMatcher {
    pub fn new(
        subject: impl Into<SlotSpec>,
        predicate: impl Into<SlotSpec>,
        object: impl Into<SlotSpec>,
        graph: impl Into<SlotSpec>,
    ) -> Self {
        Self {
            subject: subject.into().resolve(),
            predicate: predicate.into().resolve(),
            object: object.into().resolve(),
            graph: graph.into().resolve(),
            negate: false,
        }
    }

    /// Same slots as [`QuadMatcher::new`], with the result inverted
    pub fn negated(
        subject: impl Into<SlotSpec>,
        predicate: impl Into<SlotSpec>,
        object: impl Into<SlotSpec>,
        graph: impl Into<SlotSpec>,
    ) -> Self {
        Self {
            negate: true,
            ..Self::new(subject, predicate, object, graph)
        }
    }

    /// Template matching every quad
    pub fn any() -> Self {
        Self::default()
    }

    pub fn with_subject(&self, subject: impl Into<SlotSpec>) -> Self {
        Self {
            subject: subject.into().resolve(),
            ..self.clone()
        }
    }

    pub fn with_predicate(&self, predicate: impl Into<SlotSpec>) -> Self {
        Self {
            predicate: predicate.into().resolve(),
            ..self.clone()
        }
    }

    pub fn with_object(&self, object: impl Into<SlotSpec>) -> Self {
        Self {
            object: object.into().resolve(),
            ..self.clone()
        }
    }

    pub fn with_graph(&self, graph: impl Into<SlotSpec>) -> Self {
        Self {
            graph: graph.into().resolve(),
            ..self.clone()
        }
    }

    pub fn with_negate(&self, negate: bool) -> Self {
        Self {
            negate,
            ..self.clone()
        }
    }

    pub fn is_negated(&self) -> bool {
        self.negate
    }

    fn graph_matches(&self, graph: &Term) -> bool {
        match &self.graph {
            None => true,
            Some(slot) if slot.is_default_graph() => true,
            Some(slot) => slot.matches_term(graph),
        }
    }
}

fn slot_matches(slot: &Option<Slot>, term: &Term) -> bool {
    slot.as_ref().map_or(true, |s| s.matches_term(term))
}

impl QuadMatch for QuadMatcher {
    fn matches_quad(&self, quad: &Quad) -> bool {
        let hit = slot_matches(&self.subject, quad.subject())
            && slot_matches(&self.predicate, quad.predicate())
            && slot_matches(&self.object, quad.object())
            && self.graph_matches(quad.graph());
        hit != self.negate
    }

    fn subject(&self) -> Option<&Slot> {
        self.subject.as_ref()
    }

    fn predicate(&self) -> Option<&Slot> {
        self.predicate.as_ref()
    }

    fn object(&self) -> Option<&Slot> {
        self.object.as_ref()
    }

    fn graph(&self) -> Option<&Slot> {
        self.graph.as_ref()
    }
}

impl fmt::Display for QuadMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slots: Vec<String> = [&self.subject, &self.predicate, &self.object, &self.graph]
            .iter()
            .map(|slot| slot.as_ref().map(ToString::to_string).unwrap_or_default())
            .collect();
        let body = slots.join(" ");
        let body = body.trim_end();
        if self.negate {
            write!(f, "[not [{}]]", body)
        } else {
            write!(f, "[{}]", body)
        }
    }
}

/// Quad template with the subject slot fixed to a wildcard
#[derive(Debug, Clone, Default)]
pub struct PredicateMatcher {
    inner: QuadMatcher,
}

impl PredicateMatcher {
    pub fn new(
        predicate: impl Into<SlotSpec>,
        object: impl Into<SlotSpec>,
        graph: impl Into<SlotSpec>,
    ) -> Self {
        Self {
            inner: QuadMatcher::new(SlotSpec::Wildcard, predicate, object, graph),
        }
    }

    /// Same slots as [`PredicateMatcher::new`], with the result inverted
    pub fn negated(
        predicate: impl Into<SlotSpec>,
        object: impl Into<SlotSpec>,
        graph: impl Into<SlotSpec>,
    ) -> Self {
        Self {
            inner: QuadMatcher::negated(SlotSpec::Wildcard, predicate, object, graph),
        }
    }

    pub fn is_negated(&self) -> bool {
        self.inner.is_negated()
    }

    pub fn with_subject(&self, subject: impl Into<SlotSpec>) -> QuadMatcher {
        self.inner.with_subject(subject)
    }

    pub fn with_predicate(&self, predicate: impl Into<SlotSpec>) -> QuadMatcher {
        self.inner.with_predicate(predicate)
    }

    pub fn with_object(&self, object: impl Into<SlotSpec>) -> QuadMatcher {
        self.inner.with_object(object)
    }

    pub fn with_graph(&self, graph: impl Into<SlotSpec>) -> QuadMatcher {
        self.inner.with_graph(graph)
    }

    pub fn with_negate(&self, negate: bool) -> QuadMatcher {
        self.inner.with_negate(negate)
    }
}

impl QuadMatch for PredicateMatcher {
    fn matches_quad(&self, quad: &Quad) -> bool {
        self.inner.matches_quad(quad)
    }

    fn subject(&self) -> Option<&Slot> {
        None
    }

    fn predicate(&self) -> Option<&Slot> {
        self.inner.predicate()
    }

    fn object(&self) -> Option<&Slot> {
        self.inner.object()
    }

    fn graph(&self) -> Option<&Slot> {
        self.inner.graph()
    }
}

impl fmt::Display for PredicateMatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl From<PredicateMatcher> for QuadMatcher {
    fn from(matcher: PredicateMatcher) -> Self {
        matcher.inner
    }
}
