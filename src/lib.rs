//! RDF Data Factory
//!
//! Construction, comparison and deep copying of RDF terms and quads.
//!
//! # Features
//!
//! - ✅ Named nodes, blank nodes, literals, variables and the default graph
//! - ✅ Quads usable as terms (nested quads / RDF-star)
//! - ✅ Literal datatype defaulting (`xsd:string`, `rdf:langString`)
//! - ✅ Sequential, resettable blank node labels per factory
//! - ✅ Structural equality across term implementations
//! - ✅ Deep copy of foreign term trees (`from_term`, `from_quad`)
//! - ✅ oxrdf interoperability
//!
//! ## Example Usage
//!
//! ```rust
//! use rdf_data_factory::{DataFactory, RdfTerm};
//!
//! let factory = DataFactory::new();
//!
//! assert_eq!(factory.blank_node(None).value(), "df-0");
//! assert_eq!(factory.blank_node(None).value(), "df-1");
//! factory.reset_blank_node_counter();
//! assert_eq!(factory.blank_node(None).value(), "df-0");
//!
//! let plain = factory.literal("a", None);
//! let explicit = factory.literal(
//!     "a",
//!     Some(factory.named_node("http://www.w3.org/2001/XMLSchema#string").into()),
//! );
//! assert!(plain.equals(Some(&explicit)));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod rdf;

// Re-export main types for convenience
pub use rdf::{
    DataFactory, FactoryConfig, LanguageOrDatatype, TermFactory,
    Term, NamedNode, BlankNode, Literal, Variable, DefaultGraph, Quad,
    RdfTerm, RdfQuad, TermKind, TermType,
    RdfError, RdfResult,
    terms_equal, quads_equal,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
