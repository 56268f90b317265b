//! RDF term type definitions
//!
//! This module provides the immutable term values built by the
//! [`DataFactory`](super::DataFactory): named nodes, blank nodes, literals,
//! variables, the default graph and quads. Quads are terms themselves, so a
//! quad may appear in any position of another quad (RDF-star).
//!
//! Every term, local or foreign, is described by the [`RdfTerm`] capability
//! trait. Equality is structural and goes through [`terms_equal`], which only
//! looks at the capability set and therefore also compares terms coming from
//! other implementations.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;

/// RDF errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RdfError {
    /// Tag outside the fixed set of term types
    #[error("Unknown term type: {0}")]
    UnknownTermType(String),

    /// Conversion to a specific term kind received another kind
    #[error("Expected a {expected} term, found {found}")]
    UnexpectedTermType { expected: TermType, found: TermType },

    /// Term shape the target model cannot hold
    #[error("{term_type} term cannot be used as {target}")]
    NotRepresentable {
        term_type: TermType,
        target: &'static str,
    },
}

pub type RdfResult<T> = Result<T, RdfError>;

/// Term type tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TermType {
    NamedNode,
    BlankNode,
    Literal,
    Variable,
    DefaultGraph,
    Quad,
}

impl TermType {
    /// Get the tag name
    pub const fn as_str(&self) -> &'static str {
        match self {
            TermType::NamedNode => "NamedNode",
            TermType::BlankNode => "BlankNode",
            TermType::Literal => "Literal",
            TermType::Variable => "Variable",
            TermType::DefaultGraph => "DefaultGraph",
            TermType::Quad => "Quad",
        }
    }
}

impl fmt::Display for TermType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TermType {
    type Err = RdfError;

    fn from_str(s: &str) -> RdfResult<Self> {
        match s {
            "NamedNode" => Ok(TermType::NamedNode),
            "BlankNode" => Ok(TermType::BlankNode),
            "Literal" => Ok(TermType::Literal),
            "Variable" => Ok(TermType::Variable),
            "DefaultGraph" => Ok(TermType::DefaultGraph),
            "Quad" => Ok(TermType::Quad),
            other => Err(RdfError::UnknownTermType(other.to_string())),
        }
    }
}

/// Kind-specific view of a term
///
/// The tag and the fields that only exist for that tag travel together, so a
/// literal always carries its language and datatype and a quad always carries
/// its four components.
#[derive(Clone, Copy)]
pub enum TermKind<'a> {
    NamedNode,
    BlankNode,
    Literal {
        /// Language tag, `""` when absent
        language: &'a str,
        /// Datatype, a named node
        datatype: &'a dyn RdfTerm,
    },
    Variable,
    DefaultGraph,
    Quad(&'a dyn RdfQuad),
}

impl TermKind<'_> {
    /// Get the tag of this kind
    pub fn term_type(&self) -> TermType {
        match self {
            TermKind::NamedNode => TermType::NamedNode,
            TermKind::BlankNode => TermType::BlankNode,
            TermKind::Literal { .. } => TermType::Literal,
            TermKind::Variable => TermType::Variable,
            TermKind::DefaultGraph => TermType::DefaultGraph,
            TermKind::Quad(_) => TermType::Quad,
        }
    }
}

/// Capability set shared by every RDF term
///
/// Implement this for a foreign term type to compare it with local terms or
/// to copy it with [`DataFactory::from_term`](super::DataFactory::from_term).
pub trait RdfTerm {
    /// Tag plus kind-specific fields
    fn kind(&self) -> TermKind<'_>;

    /// IRI, label, lexical form or name; `""` for the default graph and quads
    fn value(&self) -> &str;

    /// Structural equality; `None` is never equal
    fn equals(&self, other: Option<&dyn RdfTerm>) -> bool;

    fn term_type(&self) -> TermType {
        self.kind().term_type()
    }
}

/// Component access for quads
pub trait RdfQuad {
    fn subject(&self) -> &dyn RdfTerm;
    fn predicate(&self) -> &dyn RdfTerm;
    fn object(&self) -> &dyn RdfTerm;
    fn graph(&self) -> &dyn RdfTerm;
}

/// Compare two terms structurally
///
/// Terms of different kinds are never equal. Quads compare all four
/// components with this same function, at every nesting depth.
pub fn terms_equal(left: &dyn RdfTerm, right: &dyn RdfTerm) -> bool {
    match (left.kind(), right.kind()) {
        (TermKind::NamedNode, TermKind::NamedNode)
        | (TermKind::BlankNode, TermKind::BlankNode)
        | (TermKind::Variable, TermKind::Variable) => left.value() == right.value(),
        (
            TermKind::Literal {
                language: left_language,
                datatype: left_datatype,
            },
            TermKind::Literal {
                language: right_language,
                datatype: right_datatype,
            },
        ) => {
            left.value() == right.value()
                && left_language == right_language
                && terms_equal(left_datatype, right_datatype)
        }
        (TermKind::DefaultGraph, TermKind::DefaultGraph) => true,
        (TermKind::Quad(left), TermKind::Quad(right)) => quads_equal(left, right),
        _ => false,
    }
}

/// Compare two quads component by component
pub fn quads_equal(left: &dyn RdfQuad, right: &dyn RdfQuad) -> bool {
    terms_equal(left.subject(), right.subject())
        && terms_equal(left.predicate(), right.predicate())
        && terms_equal(left.object(), right.object())
        && terms_equal(left.graph(), right.graph())
}

fn serialize_leaf<S: Serializer>(
    serializer: S,
    name: &'static str,
    term_type: TermType,
    value: &str,
) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct(name, 2)?;
    state.serialize_field("termType", &term_type)?;
    state.serialize_field("value", value)?;
    state.end()
}

/// Named node (IRI)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamedNode {
    value: Arc<str>,
}

impl NamedNode {
    pub(crate) fn new(iri: impl Into<Arc<str>>) -> Self {
        Self { value: iri.into() }
    }

    /// Get the IRI string
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Check whether both nodes share the same IRI allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl RdfTerm for NamedNode {
    fn kind(&self) -> TermKind<'_> {
        TermKind::NamedNode
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn equals(&self, other: Option<&dyn RdfTerm>) -> bool {
        other.is_some_and(|other| terms_equal(self, other))
    }
}

impl fmt::Display for NamedNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.value)
    }
}

impl Serialize for NamedNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_leaf(serializer, "NamedNode", TermType::NamedNode, &self.value)
    }
}

/// Blank node (locally scoped label)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BlankNode {
    value: Arc<str>,
}

impl BlankNode {
    pub(crate) fn new(label: impl Into<Arc<str>>) -> Self {
        Self {
            value: label.into(),
        }
    }

    /// Get the label (without `_:` prefix)
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Check whether both nodes share the same label allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl RdfTerm for BlankNode {
    fn kind(&self) -> TermKind<'_> {
        TermKind::BlankNode
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn equals(&self, other: Option<&dyn RdfTerm>) -> bool {
        other.is_some_and(|other| terms_equal(self, other))
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.value)
    }
}

impl Serialize for BlankNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_leaf(serializer, "BlankNode", TermType::BlankNode, &self.value)
    }
}

/// RDF literal
///
/// # Invariants
///
/// - A non-empty language implies the `rdf:langString` datatype.
/// - A literal built without language or datatype has the `xsd:string`
///   datatype.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Literal {
    value: Arc<str>,
    language: Option<Arc<str>>,
    datatype: NamedNode,
}

impl Literal {
    pub(crate) fn new(
        value: impl Into<Arc<str>>,
        language: Option<Arc<str>>,
        datatype: NamedNode,
    ) -> Self {
        Self {
            value: value.into(),
            language,
            datatype,
        }
    }

    /// Get the lexical value
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Get the language tag, `""` if none
    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or("")
    }

    /// Get the datatype
    pub fn datatype(&self) -> &NamedNode {
        &self.datatype
    }

    pub fn is_language_tagged(&self) -> bool {
        self.language.is_some()
    }
}

impl RdfTerm for Literal {
    fn kind(&self) -> TermKind<'_> {
        TermKind::Literal {
            language: self.language(),
            datatype: &self.datatype,
        }
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn equals(&self, other: Option<&dyn RdfTerm>) -> bool {
        other.is_some_and(|other| terms_equal(self, other))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.language {
            Some(language) => write!(f, "\"{}\"@{}", self.value, language),
            None => write!(f, "\"{}\"^^{}", self.value, self.datatype),
        }
    }
}

impl Serialize for Literal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Literal", 4)?;
        state.serialize_field("termType", &TermType::Literal)?;
        state.serialize_field("value", &*self.value)?;
        state.serialize_field("language", self.language())?;
        state.serialize_field("datatype", &self.datatype)?;
        state.end()
    }
}

/// Query variable
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Variable {
    value: Arc<str>,
}

impl Variable {
    pub(crate) fn new(name: impl Into<Arc<str>>) -> Self {
        Self { value: name.into() }
    }

    /// Get the variable name (without `?`)
    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.value, &other.value)
    }
}

impl RdfTerm for Variable {
    fn kind(&self) -> TermKind<'_> {
        TermKind::Variable
    }

    fn value(&self) -> &str {
        &self.value
    }

    fn equals(&self, other: Option<&dyn RdfTerm>) -> bool {
        other.is_some_and(|other| terms_equal(self, other))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "?{}", self.value)
    }
}

impl Serialize for Variable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_leaf(serializer, "Variable", TermType::Variable, &self.value)
    }
}

/// The default graph
///
/// Zero-sized: every instance is the same logical value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DefaultGraph(());

impl DefaultGraph {
    pub(crate) const fn new() -> Self {
        DefaultGraph(())
    }
}

impl RdfTerm for DefaultGraph {
    fn kind(&self) -> TermKind<'_> {
        TermKind::DefaultGraph
    }

    fn value(&self) -> &str {
        ""
    }

    fn equals(&self, other: Option<&dyn RdfTerm>) -> bool {
        other.is_some_and(|other| terms_equal(self, other))
    }
}

impl fmt::Display for DefaultGraph {
    fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ok(())
    }
}

impl Serialize for DefaultGraph {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_leaf(serializer, "DefaultGraph", TermType::DefaultGraph, "")
    }
}

/// Quad (subject, predicate, object, graph)
///
/// Components may be any term, including other quads. No positional
/// validity is enforced here.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Quad {
    subject: Term,
    predicate: Term,
    object: Term,
    graph: Term,
}

impl Quad {
    pub(crate) fn new(subject: Term, predicate: Term, object: Term, graph: Term) -> Self {
        Self {
            subject,
            predicate,
            object,
            graph,
        }
    }

    pub fn subject(&self) -> &Term {
        &self.subject
    }

    pub fn predicate(&self) -> &Term {
        &self.predicate
    }

    pub fn object(&self) -> &Term {
        &self.object
    }

    pub fn graph(&self) -> &Term {
        &self.graph
    }

    /// Check if the quad lives in the default graph
    pub fn is_in_default_graph(&self) -> bool {
        self.graph.is_default_graph()
    }

    /// Split into (subject, predicate, object, graph)
    pub fn into_parts(self) -> (Term, Term, Term, Term) {
        (self.subject, self.predicate, self.object, self.graph)
    }
}

impl RdfQuad for Quad {
    fn subject(&self) -> &dyn RdfTerm {
        &self.subject
    }

    fn predicate(&self) -> &dyn RdfTerm {
        &self.predicate
    }

    fn object(&self) -> &dyn RdfTerm {
        &self.object
    }

    fn graph(&self) -> &dyn RdfTerm {
        &self.graph
    }
}

impl RdfTerm for Quad {
    fn kind(&self) -> TermKind<'_> {
        TermKind::Quad(self)
    }

    fn value(&self) -> &str {
        ""
    }

    fn equals(&self, other: Option<&dyn RdfTerm>) -> bool {
        other.is_some_and(|other| terms_equal(self, other))
    }
}

impl fmt::Display for Quad {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_in_default_graph() {
            write!(f, "<< {} {} {} >>", self.subject, self.predicate, self.object)
        } else {
            write!(
                f,
                "<< {} {} {} {} >>",
                self.subject, self.predicate, self.object, self.graph
            )
        }
    }
}

impl Serialize for Quad {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Quad", 6)?;
        state.serialize_field("termType", &TermType::Quad)?;
        state.serialize_field("value", "")?;
        state.serialize_field("subject", &self.subject)?;
        state.serialize_field("predicate", &self.predicate)?;
        state.serialize_field("object", &self.object)?;
        state.serialize_field("graph", &self.graph)?;
        state.end()
    }
}

/// RDF term (any RDF value, quads included)
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Named node (IRI)
    NamedNode(NamedNode),
    /// Blank node
    BlankNode(BlankNode),
    /// Literal value
    Literal(Literal),
    /// Query variable
    Variable(Variable),
    /// Default graph
    DefaultGraph(DefaultGraph),
    /// Nested quad
    Quad(Box<Quad>),
}

impl Term {
    pub fn is_named_node(&self) -> bool {
        matches!(self, Term::NamedNode(_))
    }

    pub fn is_blank_node(&self) -> bool {
        matches!(self, Term::BlankNode(_))
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Term::Literal(_))
    }

    pub fn is_variable(&self) -> bool {
        matches!(self, Term::Variable(_))
    }

    pub fn is_default_graph(&self) -> bool {
        matches!(self, Term::DefaultGraph(_))
    }

    pub fn is_quad(&self) -> bool {
        matches!(self, Term::Quad(_))
    }

    pub fn as_named_node(&self) -> Option<&NamedNode> {
        match self {
            Term::NamedNode(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_blank_node(&self) -> Option<&BlankNode> {
        match self {
            Term::BlankNode(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Literal(literal) => Some(literal),
            _ => None,
        }
    }

    pub fn as_variable(&self) -> Option<&Variable> {
        match self {
            Term::Variable(variable) => Some(variable),
            _ => None,
        }
    }

    pub fn as_quad(&self) -> Option<&Quad> {
        match self {
            Term::Quad(quad) => Some(quad),
            _ => None,
        }
    }
}

impl RdfTerm for Term {
    fn kind(&self) -> TermKind<'_> {
        match self {
            Term::NamedNode(node) => node.kind(),
            Term::BlankNode(node) => node.kind(),
            Term::Literal(literal) => literal.kind(),
            Term::Variable(variable) => variable.kind(),
            Term::DefaultGraph(graph) => graph.kind(),
            Term::Quad(quad) => quad.kind(),
        }
    }

    fn value(&self) -> &str {
        match self {
            Term::NamedNode(node) => node.value(),
            Term::BlankNode(node) => node.value(),
            Term::Literal(literal) => literal.value(),
            Term::Variable(variable) => variable.value(),
            Term::DefaultGraph(graph) => graph.value(),
            Term::Quad(quad) => quad.value(),
        }
    }

    fn equals(&self, other: Option<&dyn RdfTerm>) -> bool {
        other.is_some_and(|other| terms_equal(self, other))
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::NamedNode(node) => write!(f, "{}", node),
            Term::BlankNode(node) => write!(f, "{}", node),
            Term::Literal(literal) => write!(f, "{}", literal),
            Term::Variable(variable) => write!(f, "{}", variable),
            Term::DefaultGraph(graph) => write!(f, "{}", graph),
            Term::Quad(quad) => write!(f, "{}", quad),
        }
    }
}

impl Serialize for Term {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Term::NamedNode(node) => node.serialize(serializer),
            Term::BlankNode(node) => node.serialize(serializer),
            Term::Literal(literal) => literal.serialize(serializer),
            Term::Variable(variable) => variable.serialize(serializer),
            Term::DefaultGraph(graph) => graph.serialize(serializer),
            Term::Quad(quad) => quad.serialize(serializer),
        }
    }
}

impl From<NamedNode> for Term {
    fn from(node: NamedNode) -> Self {
        Term::NamedNode(node)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Term::BlankNode(node)
    }
}

impl From<Literal> for Term {
    fn from(literal: Literal) -> Self {
        Term::Literal(literal)
    }
}

impl From<Variable> for Term {
    fn from(variable: Variable) -> Self {
        Term::Variable(variable)
    }
}

impl From<DefaultGraph> for Term {
    fn from(graph: DefaultGraph) -> Self {
        Term::DefaultGraph(graph)
    }
}

impl From<Quad> for Term {
    fn from(quad: Quad) -> Self {
        Term::Quad(Box::new(quad))
    }
}

fn unexpected(expected: TermType, found: &Term) -> RdfError {
    RdfError::UnexpectedTermType {
        expected,
        found: found.term_type(),
    }
}

impl TryFrom<Term> for NamedNode {
    type Error = RdfError;

    fn try_from(term: Term) -> RdfResult<Self> {
        match term {
            Term::NamedNode(node) => Ok(node),
            other => Err(unexpected(TermType::NamedNode, &other)),
        }
    }
}

impl TryFrom<Term> for BlankNode {
    type Error = RdfError;

    fn try_from(term: Term) -> RdfResult<Self> {
        match term {
            Term::BlankNode(node) => Ok(node),
            other => Err(unexpected(TermType::BlankNode, &other)),
        }
    }
}

impl TryFrom<Term> for Literal {
    type Error = RdfError;

    fn try_from(term: Term) -> RdfResult<Self> {
        match term {
            Term::Literal(literal) => Ok(literal),
            other => Err(unexpected(TermType::Literal, &other)),
        }
    }
}

impl TryFrom<Term> for Variable {
    type Error = RdfError;

    fn try_from(term: Term) -> RdfResult<Self> {
        match term {
            Term::Variable(variable) => Ok(variable),
            other => Err(unexpected(TermType::Variable, &other)),
        }
    }
}

impl TryFrom<Term> for DefaultGraph {
    type Error = RdfError;

    fn try_from(term: Term) -> RdfResult<Self> {
        match term {
            Term::DefaultGraph(graph) => Ok(graph),
            other => Err(unexpected(TermType::DefaultGraph, &other)),
        }
    }
}

impl TryFrom<Term> for Quad {
    type Error = RdfError;

    fn try_from(term: Term) -> RdfResult<Self> {
        match term {
            Term::Quad(quad) => Ok(*quad),
            other => Err(unexpected(TermType::Quad, &other)),
        }
    }
}
