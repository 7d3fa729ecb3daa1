//! Vocabulary used by the matching templates
//!
//! Re-exports the oxrdf XSD constants and groups the datatypes RDF treats as numeric.

use oxrdf::NamedNodeRef;

pub use oxrdf::vocab::{rdf, xsd};

/// XSD namespace IRI
pub const XSD_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";

/// Datatypes accepted by strict numeric templates
pub const NUMERIC_DATATYPES: [NamedNodeRef<'static>; 19] = [
    xsd::INTEGER,
    xsd::DECIMAL,
    xsd::BYTE,
    xsd::SHORT,
    xsd::INT,
    xsd::LONG,
    xsd::FLOAT,
    xsd::DOUBLE,
    xsd::G_DAY,
    xsd::G_MONTH,
    xsd::G_YEAR,
    xsd::NEGATIVE_INTEGER,
    xsd::NON_NEGATIVE_INTEGER,
    xsd::NON_POSITIVE_INTEGER,
    xsd::POSITIVE_INTEGER,
    xsd::UNSIGNED_BYTE,
    xsd::UNSIGNED_SHORT,
    xsd::UNSIGNED_INT,
    xsd::UNSIGNED_LONG,
];

/// Check whether a datatype IRI is one of [`NUMERIC_DATATYPES`]
pub fn is_numeric_datatype(iri: &str) -> bool {
    NUMERIC_DATATYPES.iter().any(|dt| dt.as_str() == iri)
}
