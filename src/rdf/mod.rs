//! RDF data model for the matching templates
//!
//! This module provides:
//! - RDF terms (named nodes, blank nodes, literals, the default graph)
//! - Position-constrained subjects, objects and graph names
//! - Quads (triple + graph)
//! - The XSD vocabulary used by numeric templates
//!
//! # Example
//!
//! ```rust
//! use term_templates::rdf::{Literal, NamedNode, Quad};
//!
//! let subject = NamedNode::new("http://example.org/alice").unwrap();
//! let predicate = NamedNode::new("http://xmlns.com/foaf/0.1/name").unwrap();
//! let object = Literal::new_language_tagged_literal("Alice", "en").unwrap();
//!
//! let quad = Quad::in_default_graph(subject, predicate, object);
//! assert_eq!(quad.object().value(), "Alice");
//! assert!(quad.graph().is_default_graph());
//! ```

mod types;
pub mod vocab;

pub use types::{
    RdfError, RdfResult,
    Term, NamedNode, BlankNode, Literal,
    Subject, Object, GraphName, Quad,
};
