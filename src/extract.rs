//! Dataset extraction helpers
//!
//! [`DatasetView`] borrows quads owned by the caller and pulls terms, values
//! and literals out of the quads accepted by a quad template. It performs a
//! linear scan and keeps no state of its own.

use crate::rdf::{Literal, Quad, Term};
use crate::template::QuadMatch;
use indexmap::{IndexMap, IndexSet};
use tracing::trace;

/// Quad position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Position {
    Subject,
    Predicate,
    Object,
    Graph,
}

impl Position {
    /// Term at this position of the quad
    pub fn of(self, quad: &Quad) -> &Term {
        match self {
            Position::Subject => quad.subject(),
            Position::Predicate => quad.predicate(),
            Position::Object => quad.object(),
            Position::Graph => quad.graph(),
        }
    }
}

/// Read-only view over a set of quads
#[derive(Debug, Clone, Copy)]
pub struct DatasetView<'a> {
    quads: &'a [Quad],
}

impl<'a> DatasetView<'a> {
    pub fn new(quads: &'a [Quad]) -> Self {
        Self { quads }
    }

    pub fn len(&self) -> usize {
        self.quads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    /// Quads accepted by the filter, in dataset order
    pub fn matching<'f>(&self, filter: &'f dyn QuadMatch) -> impl Iterator<Item = &'a Quad> + 'f
    where
        'a: 'f,
    {
        let quads = self.quads;
        trace!(%filter, quads = quads.len(), "scanning dataset");
        quads.iter().filter(move |quad| filter.matches_quad(quad))
    }

    /// First quad accepted by the filter
    pub fn first(&self, filter: &dyn QuadMatch) -> Option<&'a Quad> {
        self.matching(filter).next()
    }

    /// Term at `position` of the first matching quad
    pub fn term(&self, position: Position, filter: &dyn QuadMatch) -> Option<&'a Term> {
        self.first(filter).map(|quad| position.of(quad))
    }

    /// Distinct terms at `position` of all matching quads, in first-seen order
    pub fn terms(&self, position: Position, filter: &dyn QuadMatch) -> Vec<&'a Term> {
        self.matching(filter)
            .map(|quad| position.of(quad))
            .collect::<IndexSet<_>>()
            .into_iter()
            .collect()
    }

    /// Values at `position`, one per matching quad
    pub fn values(&self, position: Position, filter: &dyn QuadMatch) -> Vec<&'a str> {
        self.matching(filter)
            .map(|quad| position.of(quad).value())
            .collect()
    }

    pub fn subject(&self, filter: &dyn QuadMatch) -> Option<&'a Term> {
        self.term(Position::Subject, filter)
    }

    pub fn subject_value(&self, filter: &dyn QuadMatch) -> Option<&'a str> {
        self.subject(filter).map(Term::value)
    }

    pub fn subjects(&self, filter: &dyn QuadMatch) -> Vec<&'a Term> {
        self.terms(Position::Subject, filter)
    }

    pub fn subject_values(&self, filter: &dyn QuadMatch) -> Vec<&'a str> {
        self.values(Position::Subject, filter)
    }

    pub fn predicate(&self, filter: &dyn QuadMatch) -> Option<&'a Term> {
        self.term(Position::Predicate, filter)
    }

    pub fn predicate_iri(&self, filter: &dyn QuadMatch) -> Option<&'a str> {
        self.predicate(filter).map(Term::value)
    }

    pub fn predicates(&self, filter: &dyn QuadMatch) -> Vec<&'a Term> {
        self.terms(Position::Predicate, filter)
    }

    pub fn predicate_iris(&self, filter: &dyn QuadMatch) -> Vec<&'a str> {
        self.values(Position::Predicate, filter)
    }

    pub fn object(&self, filter: &dyn QuadMatch) -> Option<&'a Term> {
        self.term(Position::Object, filter)
    }

    pub fn object_value(&self, filter: &dyn QuadMatch) -> Option<&'a str> {
        self.object(filter).map(Term::value)
    }

    /// Language tag of the first matching object, if it is a tagged literal
    pub fn object_lang(&self, filter: &dyn QuadMatch) -> Option<&'a str> {
        self.object(filter)
            .and_then(Term::as_literal)
            .and_then(Literal::language)
    }

    /// Datatype of the first matching object, if it is a literal
    pub fn object_datatype(&self, filter: &dyn QuadMatch) -> Option<&'a str> {
        self.object(filter)
            .and_then(Term::as_literal)
            .map(Literal::datatype)
    }

    pub fn objects(&self, filter: &dyn QuadMatch) -> Vec<&'a Term> {
        self.terms(Position::Object, filter)
    }

    pub fn object_values(&self, filter: &dyn QuadMatch) -> Vec<&'a str> {
        self.values(Position::Object, filter)
    }

    pub fn graph(&self, filter: &dyn QuadMatch) -> Option<&'a Term> {
        self.term(Position::Graph, filter)
    }

    pub fn graph_iri(&self, filter: &dyn QuadMatch) -> Option<&'a str> {
        self.graph(filter).map(Term::value)
    }

    pub fn graphs(&self, filter: &dyn QuadMatch) -> Vec<&'a Term> {
        self.terms(Position::Graph, filter)
    }

    pub fn graph_iris(&self, filter: &dyn QuadMatch) -> Vec<&'a str> {
        self.values(Position::Graph, filter)
    }

    /// Object literals of the matching quads; other objects are skipped
    pub fn literals(&self, filter: &dyn QuadMatch) -> Vec<&'a Literal> {
        self.matching(filter)
            .filter_map(|quad| quad.object().as_literal())
            .collect()
    }

    /// First object literal among the matching quads
    pub fn literal(&self, filter: &dyn QuadMatch) -> Option<&'a Literal> {
        self.matching(filter)
            .find_map(|quad| quad.object().as_literal())
    }

    pub fn literal_value(&self, filter: &dyn QuadMatch) -> Option<&'a str> {
        self.literal(filter).map(Literal::value)
    }

    pub fn literal_values(&self, filter: &dyn QuadMatch) -> Vec<&'a str> {
        self.literals(filter).into_iter().map(Literal::value).collect()
    }

    /// Object literal values keyed by language tag.
    ///
    /// Untagged literals are stored under `""`. When several literals share a
    /// tag the last one wins.
    pub fn literal_values_by_lang(&self, filter: &dyn QuadMatch) -> IndexMap<&'a str, &'a str> {
        self.literals(filter)
            .into_iter()
            .map(|literal| (literal.language().unwrap_or(""), literal.value()))
            .collect()
    }
}

impl<'a> From<&'a [Quad]> for DatasetView<'a> {
    fn from(quads: &'a [Quad]) -> Self {
        Self::new(quads)
    }
}
