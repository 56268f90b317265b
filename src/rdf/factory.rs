//! Term factory
//!
//! [`DataFactory`] is the single point of construction for terms. It owns the
//! blank-node label counter and the default graph, so independent factories
//! never interfere with each other.

use super::namespace::{rdf, xsd};
use super::types::{
    BlankNode, DefaultGraph, Literal, NamedNode, Quad, RdfQuad, RdfTerm, Term, TermKind,
    Variable,
};
use serde::Deserialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};
use tracing::{debug, trace};

static XSD_STRING: LazyLock<NamedNode> = LazyLock::new(|| NamedNode::new(xsd::STRING));
static RDF_LANG_STRING: LazyLock<NamedNode> = LazyLock::new(|| NamedNode::new(rdf::LANG_STRING));

/// Factory configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FactoryConfig {
    /// Prefix of generated blank node labels
    pub blank_node_prefix: String,
    /// First value of the blank node counter
    pub initial_blank_node_counter: u64,
}

impl Default for FactoryConfig {
    fn default() -> Self {
        Self {
            blank_node_prefix: "df-".to_string(),
            initial_blank_node_counter: 0,
        }
    }
}

/// Second argument of [`DataFactory::literal`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageOrDatatype<'a, N = NamedNode> {
    /// Language tag; the datatype becomes `rdf:langString`
    Language(&'a str),
    /// Explicit datatype; no language
    Datatype(N),
}

impl<'a, N> From<&'a str> for LanguageOrDatatype<'a, N> {
    fn from(language: &'a str) -> Self {
        LanguageOrDatatype::Language(language)
    }
}

impl From<NamedNode> for LanguageOrDatatype<'_> {
    fn from(datatype: NamedNode) -> Self {
        LanguageOrDatatype::Datatype(datatype)
    }
}

/// Generic term factory capability set
///
/// Code written against this trait works with any conforming factory.
#[allow(clippy::wrong_self_convention)]
pub trait TermFactory {
    type NamedNode: RdfTerm;
    type BlankNode: RdfTerm;
    type Literal: RdfTerm;
    type Variable: RdfTerm;
    type DefaultGraph: RdfTerm;
    type Term: RdfTerm;
    type Quad: RdfTerm;

    fn named_node(&self, iri: &str) -> Self::NamedNode;

    fn blank_node(&self, label: Option<&str>) -> Self::BlankNode;

    fn literal(
        &self,
        value: &str,
        language_or_datatype: Option<LanguageOrDatatype<'_, Self::NamedNode>>,
    ) -> Self::Literal;

    fn variable(&self, name: &str) -> Self::Variable;

    fn default_graph(&self) -> Self::DefaultGraph;

    fn quad(
        &self,
        subject: Self::Term,
        predicate: Self::Term,
        object: Self::Term,
        graph: Option<Self::Term>,
    ) -> Self::Quad;

    fn from_term(&self, term: &dyn RdfTerm) -> Self::Term;

    fn from_quad(&self, quad: &dyn RdfQuad) -> Self::Quad;
}

/// RDF term factory
///
/// Safe to share between threads: the blank node counter is atomic.
#[derive(Debug)]
pub struct DataFactory {
    config: FactoryConfig,
    blank_node_counter: AtomicU64,
    default_graph: DefaultGraph,
}

#[allow(clippy::wrong_self_convention)]
impl DataFactory {
    /// Create a factory with the default configuration
    pub fn new() -> Self {
        Self::with_config(FactoryConfig::default())
    }

    /// Create a factory with an explicit configuration
    pub fn with_config(config: FactoryConfig) -> Self {
        debug!(
            "Creating data factory, blank node prefix {:?}, counter {}",
            config.blank_node_prefix, config.initial_blank_node_counter
        );
        Self {
            blank_node_counter: AtomicU64::new(config.initial_blank_node_counter),
            default_graph: DefaultGraph::new(),
            config,
        }
    }

    pub fn config(&self) -> &FactoryConfig {
        &self.config
    }

    /// Create a named node; the IRI is not validated
    pub fn named_node(&self, iri: impl AsRef<str>) -> NamedNode {
        NamedNode::new(iri.as_ref())
    }

    /// Create a blank node
    ///
    /// Without a label, the next generated label (`df-0`, `df-1`, ...) is
    /// used and the counter advances. A given label is used verbatim and the
    /// counter is left alone; collisions with generated labels are not
    /// checked.
    pub fn blank_node(&self, label: Option<&str>) -> BlankNode {
        match label {
            Some(label) => BlankNode::new(label),
            None => {
                let n = self.blank_node_counter.fetch_add(1, Ordering::Relaxed);
                let label = format!("{}{}", self.config.blank_node_prefix, n);
                trace!("Generated blank node label {}", label);
                BlankNode::new(label)
            }
        }
    }

    /// Create a literal
    ///
    /// - `Language(tag)`: language-tagged, datatype `rdf:langString`
    /// - `Datatype(dt)`: typed, no language
    /// - `None`: datatype `xsd:string`
    ///
    /// An empty language tag means no language.
    pub fn literal(
        &self,
        value: impl AsRef<str>,
        language_or_datatype: Option<LanguageOrDatatype<'_>>,
    ) -> Literal {
        let value = value.as_ref();
        match language_or_datatype {
            Some(LanguageOrDatatype::Language(language)) if !language.is_empty() => {
                Literal::new(value, Some(Arc::from(language)), RDF_LANG_STRING.clone())
            }
            Some(LanguageOrDatatype::Datatype(datatype)) => Literal::new(value, None, datatype),
            _ => Literal::new(value, None, XSD_STRING.clone()),
        }
    }

    /// Create a variable
    pub fn variable(&self, name: impl AsRef<str>) -> Variable {
        Variable::new(name.as_ref())
    }

    /// Get this factory's default graph
    pub fn default_graph(&self) -> DefaultGraph {
        self.default_graph
    }

    /// Create a quad; a missing graph becomes the default graph
    pub fn quad(
        &self,
        subject: impl Into<Term>,
        predicate: impl Into<Term>,
        object: impl Into<Term>,
        graph: Option<Term>,
    ) -> Quad {
        let graph = graph.unwrap_or_else(|| self.default_graph().into());
        Quad::new(subject.into(), predicate.into(), object.into(), graph)
    }

    /// Get the value the next generated blank node label will use
    pub fn blank_node_counter(&self) -> u64 {
        self.blank_node_counter.load(Ordering::Relaxed)
    }

    /// Restart generated blank node labels at 0
    ///
    /// Existing blank nodes keep their labels, so later generated labels may
    /// collide with earlier ones.
    pub fn reset_blank_node_counter(&self) {
        let previous = self.blank_node_counter.swap(0, Ordering::Relaxed);
        debug!("Reset blank node counter from {}", previous);
    }

    /// Deep-copy any term into this factory's types
    ///
    /// Every node of the result is freshly allocated except the default graph
    /// and the `xsd:string` / `rdf:langString` datatypes, which are shared.
    /// Blank node labels are preserved and do not consume the counter.
    pub fn from_term(&self, term: &dyn RdfTerm) -> Term {
        match term.kind() {
            TermKind::NamedNode => self.named_node(term.value()).into(),
            TermKind::BlankNode => self.blank_node(Some(term.value())).into(),
            TermKind::Literal { language, datatype } => {
                self.copy_literal(term.value(), language, datatype).into()
            }
            TermKind::Variable => self.variable(term.value()).into(),
            TermKind::DefaultGraph => self.default_graph().into(),
            TermKind::Quad(quad) => self.from_quad(quad).into(),
        }
    }

    /// Deep-copy a quad, components included
    pub fn from_quad(&self, quad: &dyn RdfQuad) -> Quad {
        trace!("Copying quad");
        self.quad(
            self.from_term(quad.subject()),
            self.from_term(quad.predicate()),
            self.from_term(quad.object()),
            Some(self.from_term(quad.graph())),
        )
    }

    fn copy_literal(&self, value: &str, language: &str, datatype: &dyn RdfTerm) -> Literal {
        if !language.is_empty() {
            self.literal(value, Some(LanguageOrDatatype::Language(language)))
        } else if datatype.value() == xsd::STRING {
            self.literal(value, None)
        } else {
            let datatype = self.named_node(datatype.value());
            self.literal(value, Some(LanguageOrDatatype::Datatype(datatype)))
        }
    }
}

impl Default for DataFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl TermFactory for DataFactory {
    type NamedNode = NamedNode;
    type BlankNode = BlankNode;
    type Literal = Literal;
    type Variable = Variable;
    type DefaultGraph = DefaultGraph;
    type Term = Term;
    type Quad = Quad;

    fn named_node(&self, iri: &str) -> NamedNode {
        DataFactory::named_node(self, iri)
    }

    fn blank_node(&self, label: Option<&str>) -> BlankNode {
        DataFactory::blank_node(self, label)
    }

    fn literal(
        &self,
        value: &str,
        language_or_datatype: Option<LanguageOrDatatype<'_>>,
    ) -> Literal {
        DataFactory::literal(self, value, language_or_datatype)
    }

    fn variable(&self, name: &str) -> Variable {
        DataFactory::variable(self, name)
    }

    fn default_graph(&self) -> DefaultGraph {
        DataFactory::default_graph(self)
    }

    fn quad(&self, subject: Term, predicate: Term, object: Term, graph: Option<Term>) -> Quad {
        DataFactory::quad(self, subject, predicate, object, graph)
    }

    fn from_term(&self, term: &dyn RdfTerm) -> Term {
        DataFactory::from_term(self, term)
    }

    fn from_quad(&self, quad: &dyn RdfQuad) -> Quad {
        DataFactory::from_quad(self, quad)
    }
}
