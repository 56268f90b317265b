//! RDF term model and data factory
//!
//! This module implements:
//! - Immutable RDF terms (named nodes, blank nodes, literals, variables,
//!   the default graph)
//! - Quads that are terms themselves (RDF-star nesting)
//! - Structural equality, also against foreign term implementations
//! - A data factory with blank node label generation and deep copying
//! - Conversions to and from the oxrdf term model
//!
//! # Example
//!
//! ```rust
//! use rdf_data_factory::rdf::{DataFactory, RdfTerm};
//!
//! let factory = DataFactory::new();
//!
//! let quad = factory.quad(
//!     factory.named_node("http://example.org/alice"),
//!     factory.named_node("http://xmlns.com/foaf/0.1/name"),
//!     factory.literal("Alice", Some("en".into())),
//!     None,
//! );
//!
//! let copy = factory.from_quad(&quad);
//! assert!(quad.equals(Some(&copy)));
//! assert!(copy.graph().equals(Some(&factory.default_graph())));
//! ```

mod factory;
mod interop;
pub mod namespace;
mod types;

pub use types::{
    quads_equal, terms_equal,
    RdfError, RdfResult,
    RdfTerm, RdfQuad, TermKind, TermType,
    Term, NamedNode, BlankNode, Literal, Variable, DefaultGraph, Quad,
};

pub use factory::{
    DataFactory, FactoryConfig, LanguageOrDatatype, TermFactory,
};
