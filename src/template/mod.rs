//! Term and quad matching templates
//!
//! A template is an immutable predicate object. Term-level templates implement
//! [`TermMatch`], quad-level templates implement [`QuadMatch`]:
//! - [`ValueMatcher`] compares a term's textual value using a [`MatchMode`]
//! - [`NamedNodeMatcher`], [`LiteralMatcher`], [`NumericMatcher`] add term kind,
//!   language, datatype and numeric constraints
//! - [`Not`] and [`AnyOf`] compose other templates
//! - [`QuadMatcher`] and [`PredicateMatcher`] test whole quads slot by slot
//!
//! # Example
//!
//! ```rust
//! use term_templates::rdf::{Literal, NamedNode, Quad};
//! use term_templates::template::{MatchMode, NumericMatcher, QuadMatch, QuadMatcher};
//!
//! let age = NamedNode::new("http://xmlns.com/foaf/0.1/age").unwrap();
//! let alice = NamedNode::new("http://example.org/alice").unwrap();
//! let quad = Quad::in_default_graph(alice, age.clone(), Literal::new_simple_literal("42"));
//!
//! let adults = QuadMatcher::any()
//!     .with_predicate(age)
//!     .with_object(NumericMatcher::new(Some(18.0), MatchMode::GreaterEqual, false).unwrap());
//! assert!(adults.matches_quad(&quad));
//! ```

mod mode;
mod value;
mod literal;
mod numeric;
mod combinator;
mod quad;
mod config;

use crate::rdf::{Quad, Term};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub use mode::MatchMode;
pub use value::{NamedNodeMatcher, ValueMatcher};
pub use literal::LiteralMatcher;
pub use numeric::NumericMatcher;
pub use combinator::{AnyOf, Not};
pub use quad::{PredicateMatcher, QuadMatcher, Slot, SlotSpec};
pub use config::{QuadTemplateConfig, SlotConfig, TermTemplateConfig};

/// Template construction errors
#[derive(Error, Debug)]
pub enum TemplateError {
    /// Match mode tag outside the recognized set, or not supported by the template
    #[error("Unknown match mode: {0}")]
    InvalidMatchMode(String),

    /// Regular expression that failed to compile
    #[error("Invalid pattern {pattern}: {reason}")]
    InvalidPattern {
        pattern: String,
        reason: String,
    },

    /// Malformed template configuration
    #[error("Invalid template configuration: {0}")]
    Config(#[from] serde_json::Error),
}

pub type TemplateResult<T> = Result<T, TemplateError>;

/// Predicate over a single term
pub trait TermMatch: fmt::Display + fmt::Debug + Send + Sync {
    /// Check whether the term satisfies the template
    fn matches_term(&self, term: &Term) -> bool;

    /// The constant term this template stands for, if it is a plain term
    fn as_term(&self) -> Option<&Term> {
        None
    }
}

/// Predicate over a whole quad
///
/// The slot getters expose per-position term templates so that callers can
/// push them down into index lookups. Templates without a slot structure
/// return `None`.
pub trait QuadMatch: fmt::Display + fmt::Debug + Send + Sync {
    /// Check whether the quad satisfies the template
    fn matches_quad(&self, quad: &Quad) -> bool;

    fn subject(&self) -> Option<&Slot> {
        None
    }

    fn predicate(&self) -> Option<&Slot> {
        None
    }

    fn object(&self) -> Option<&Slot> {
        None
    }

    fn graph(&self) -> Option<&Slot> {
        None
    }
}

/// A term used as a template matches by term equality
impl TermMatch for Term {
    fn matches_term(&self, term: &Term) -> bool {
        self == term
    }

    fn as_term(&self) -> Option<&Term> {
        Some(self)
    }
}

impl<T: TermMatch + ?Sized> TermMatch for Arc<T> {
    fn matches_term(&self, term: &Term) -> bool {
        (**self).matches_term(term)
    }

    fn as_term(&self) -> Option<&Term> {
        (**self).as_term()
    }
}

impl<T: QuadMatch + ?Sized> QuadMatch for Arc<T> {
    fn matches_quad(&self, quad: &Quad) -> bool {
        (**self).matches_quad(quad)
    }

    fn subject(&self) -> Option<&Slot> {
        (**self).subject()
    }

    fn predicate(&self) -> Option<&Slot> {
        (**self).predicate()
    }

    fn object(&self) -> Option<&Slot> {
        (**self).object()
    }

    fn graph(&self) -> Option<&Slot> {
        (**self).graph()
    }
}
