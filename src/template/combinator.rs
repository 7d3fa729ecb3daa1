//! Boolean combinators over templates
//!
//! Both combinators are generic over the wrapped template and implement
//! [`TermMatch`] or [`QuadMatch`] whenever the wrapped template does.

use super::{QuadMatch, Slot, TermMatch};
use crate::rdf::{Quad, Term};
use std::fmt;
use std::sync::Arc;

/// Negation of the inner template
#[derive(Debug, Clone)]
pub struct Not<M>(pub M);

impl<M> Not<M> {
    pub fn new(inner: M) -> Self {
        Self(inner)
    }

    pub fn inner(&self) -> &M {
        &self.0
    }
}

impl<M: TermMatch> TermMatch for Not<M> {
    fn matches_term(&self, term: &Term) -> bool {
        !self.0.matches_term(term)
    }
}

/// Slot getters are those of the inner template.
impl<M: QuadMatch> QuadMatch for Not<M> {
    fn matches_quad(&self, quad: &Quad) -> bool {
        !self.0.matches_quad(quad)
    }

    fn subject(&self) -> Option<&Slot> {
        self.0.subject()
    }

    fn predicate(&self) -> Option<&Slot> {
        self.0.predicate()
    }

    fn object(&self) -> Option<&Slot> {
        self.0.object()
    }

    fn graph(&self) -> Option<&Slot> {
        self.0.graph()
    }
}

impl<M: fmt::Display> fmt::Display for Not<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[not {}]", self.0)
    }
}

/// Disjunction: matches when any member matches, an empty list matches nothing
#[derive(Debug, Clone)]
pub struct AnyOf<M = Arc<dyn TermMatch>> {
    members: Vec<M>,
}

impl<M> AnyOf<M> {
    pub fn new(members: impl IntoIterator<Item = M>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    pub fn members(&self) -> &[M] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl AnyOf<Arc<dyn TermMatch>> {
    /// Empty disjunction over heterogeneous term templates
    pub fn terms() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Append a term template
    pub fn or(mut self, member: impl TermMatch + 'static) -> Self {
        self.members.push(Arc::new(member));
        self
    }
}

impl AnyOf<Arc<dyn QuadMatch>> {
    /// Empty disjunction over heterogeneous quad templates
    pub fn quads() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    /// Append a quad template
    pub fn or(mut self, member: impl QuadMatch + 'static) -> Self {
        self.members.push(Arc::new(member));
        self
    }
}

impl<M: TermMatch> TermMatch for AnyOf<M> {
    fn matches_term(&self, term: &Term) -> bool {
        self.members.iter().any(|m| m.matches_term(term))
    }
}

/// A disjunction has no single template per slot, so the getters return `None`.
impl<M: QuadMatch> QuadMatch for AnyOf<M> {
    fn matches_quad(&self, quad: &Quad) -> bool {
        self.members.iter().any(|m| m.matches_quad(quad))
    }
}

impl<M: fmt::Display> fmt::Display for AnyOf<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[any {")?;
        for (n, member) in self.members.iter().enumerate() {
            if n > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", member)?;
        }
        f.write_str("}]")
    }
}
