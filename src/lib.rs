//! Term Templates
//!
//! Composable matching templates for RDF terms and quads.
//!
//! A template is an immutable predicate object: it tests whether a single term
//! or a whole quad satisfies a condition. Templates are built once and
//! evaluated any number of times, from any number of threads.
//!
//! # Modules
//!
//! - [`rdf`]: the term/quad data model the templates evaluate
//! - [`template`]: value, literal and numeric templates, boolean combinators,
//!   quad templates and their declarative configuration
//! - [`extract`]: helpers pulling terms and values out of a set of quads
//!
//! ## Example Usage
//!
//! ```rust
//! use term_templates::rdf::{Literal, NamedNode, Quad};
//! use term_templates::template::{
//!     LiteralMatcher, MatchMode, Not, QuadMatch, QuadMatcher, TermMatch, ValueMatcher,
//! };
//!
//! let name = NamedNode::new("http://xmlns.com/foaf/0.1/name").unwrap();
//! let alice = NamedNode::new("http://example.org/alice").unwrap();
//! let label = Literal::new_language_tagged_literal("Alice", "en").unwrap();
//! let quad = Quad::in_default_graph(alice, name, label);
//!
//! // Literal in any language, whose value starts with "Al"
//! let object = LiteralMatcher::new(["Al"], MatchMode::Starts).unwrap().with_lang("");
//! let template = QuadMatcher::any()
//!     .with_predicate("http://xmlns.com/foaf/0.1/name")
//!     .with_object(object);
//! assert!(template.matches_quad(&quad));
//! assert!(!template.with_negate(true).matches_quad(&quad));
//!
//! let not_bob = Not(ValueMatcher::equals("Bob"));
//! assert!(not_bob.matches_term(quad.object()));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod rdf;
pub mod template;
pub mod extract;

// Re-export main types for convenience
pub use rdf::{
    BlankNode, GraphName, Literal, NamedNode, Object, Quad, RdfError, RdfResult, Subject, Term,
};

pub use template::{
    AnyOf, LiteralMatcher, MatchMode, NamedNodeMatcher, Not, NumericMatcher, PredicateMatcher,
    QuadMatch, QuadMatcher, QuadTemplateConfig, Slot, SlotSpec, TemplateError, TemplateResult,
    TermMatch, TermTemplateConfig, ValueMatcher,
};

pub use extract::{DatasetView, Position};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
