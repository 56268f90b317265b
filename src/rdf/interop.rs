//! Interoperability with the oxrdf term model
//!
//! oxrdf is a foreign implementation of the same RDF concepts. Terms coming
//! from it are deep-copied through a [`DataFactory`]; local terms convert
//! back with `TryFrom`, failing for shapes oxrdf cannot hold.
//!
//! RDF-star triples map to nested quads in the default graph and back.

use super::factory::{DataFactory, LanguageOrDatatype};
use super::namespace::xsd;
use super::types::{
    BlankNode, Literal, NamedNode, Quad, RdfError, RdfResult, RdfTerm, Term, Variable,
};
use oxrdf::{
    BlankNode as OxBlankNode,
    GraphName as OxGraphName,
    Literal as OxLiteral,
    NamedNode as OxNamedNode,
    Quad as OxQuad,
    Subject as OxSubject,
    Term as OxTerm,
    Triple as OxTriple,
    Variable as OxVariable,
};
use tracing::trace;

#[allow(clippy::wrong_self_convention)]
impl DataFactory {
    /// Copy an oxrdf named node
    pub fn from_oxrdf_named_node(&self, node: &OxNamedNode) -> NamedNode {
        self.named_node(node.as_str())
    }

    /// Copy an oxrdf blank node, keeping its label
    pub fn from_oxrdf_blank_node(&self, node: &OxBlankNode) -> BlankNode {
        self.blank_node(Some(node.as_str()))
    }

    /// Copy an oxrdf literal
    pub fn from_oxrdf_literal(&self, literal: &OxLiteral) -> Literal {
        if let Some(language) = literal.language() {
            return self.literal(literal.value(), Some(LanguageOrDatatype::Language(language)));
        }
        let datatype = literal.datatype();
        if datatype.as_str() == xsd::STRING {
            self.literal(literal.value(), None)
        } else {
            let datatype = self.named_node(datatype.as_str());
            self.literal(literal.value(), Some(LanguageOrDatatype::Datatype(datatype)))
        }
    }

    /// Copy an oxrdf variable
    pub fn from_oxrdf_variable(&self, variable: &OxVariable) -> Variable {
        self.variable(variable.as_str())
    }

    /// Copy an oxrdf subject
    pub fn from_oxrdf_subject(&self, subject: &OxSubject) -> Term {
        match subject {
            OxSubject::NamedNode(node) => self.from_oxrdf_named_node(node).into(),
            OxSubject::BlankNode(node) => self.from_oxrdf_blank_node(node).into(),
            OxSubject::Triple(triple) => self.from_oxrdf_triple(triple).into(),
        }
    }

    /// Copy an oxrdf term
    pub fn from_oxrdf_term(&self, term: &OxTerm) -> Term {
        match term {
            OxTerm::NamedNode(node) => self.from_oxrdf_named_node(node).into(),
            OxTerm::BlankNode(node) => self.from_oxrdf_blank_node(node).into(),
            OxTerm::Literal(literal) => self.from_oxrdf_literal(literal).into(),
            OxTerm::Triple(triple) => self.from_oxrdf_triple(triple).into(),
        }
    }

    /// Copy an oxrdf graph name; the default graph becomes this factory's own
    pub fn from_oxrdf_graph_name(&self, graph: &OxGraphName) -> Term {
        match graph {
            OxGraphName::NamedNode(node) => self.from_oxrdf_named_node(node).into(),
            OxGraphName::BlankNode(node) => self.from_oxrdf_blank_node(node).into(),
            OxGraphName::DefaultGraph => self.default_graph().into(),
        }
    }

    /// Copy an oxrdf triple as a quad in the default graph
    pub fn from_oxrdf_triple(&self, triple: &OxTriple) -> Quad {
        self.quad(
            self.from_oxrdf_subject(&triple.subject),
            self.from_oxrdf_named_node(&triple.predicate),
            self.from_oxrdf_term(&triple.object),
            None,
        )
    }

    /// Copy an oxrdf quad
    pub fn from_oxrdf_quad(&self, quad: &OxQuad) -> Quad {
        trace!("Copying oxrdf quad {}", quad);
        self.quad(
            self.from_oxrdf_subject(&quad.subject),
            self.from_oxrdf_named_node(&quad.predicate),
            self.from_oxrdf_term(&quad.object),
            Some(self.from_oxrdf_graph_name(&quad.graph_name)),
        )
    }
}

fn not_representable(term: &Term, target: &'static str) -> RdfError {
    RdfError::NotRepresentable {
        term_type: term.term_type(),
        target,
    }
}

impl From<&NamedNode> for OxNamedNode {
    fn from(node: &NamedNode) -> Self {
        OxNamedNode::new_unchecked(node.as_str())
    }
}

impl From<&BlankNode> for OxBlankNode {
    fn from(node: &BlankNode) -> Self {
        OxBlankNode::new_unchecked(node.as_str())
    }
}

impl From<&Literal> for OxLiteral {
    fn from(literal: &Literal) -> Self {
        if literal.is_language_tagged() {
            OxLiteral::new_language_tagged_literal_unchecked(literal.as_str(), literal.language())
        } else {
            OxLiteral::new_typed_literal(literal.as_str(), OxNamedNode::from(literal.datatype()))
        }
    }
}

impl From<&Variable> for OxVariable {
    fn from(variable: &Variable) -> Self {
        OxVariable::new_unchecked(variable.as_str())
    }
}

impl TryFrom<&Term> for OxNamedNode {
    type Error = RdfError;

    fn try_from(term: &Term) -> RdfResult<Self> {
        match term {
            Term::NamedNode(node) => Ok(node.into()),
            other => Err(not_representable(other, "an oxrdf predicate")),
        }
    }
}

impl TryFrom<&Term> for OxSubject {
    type Error = RdfError;

    fn try_from(term: &Term) -> RdfResult<Self> {
        match term {
            Term::NamedNode(node) => Ok(OxSubject::NamedNode(node.into())),
            Term::BlankNode(node) => Ok(OxSubject::BlankNode(node.into())),
            Term::Quad(quad) => Ok(OxSubject::Triple(Box::new(nested_triple(quad)?))),
            other => Err(not_representable(other, "an oxrdf subject")),
        }
    }
}

impl TryFrom<&Term> for OxTerm {
    type Error = RdfError;

    fn try_from(term: &Term) -> RdfResult<Self> {
        match term {
            Term::NamedNode(node) => Ok(OxTerm::NamedNode(node.into())),
            Term::BlankNode(node) => Ok(OxTerm::BlankNode(node.into())),
            Term::Literal(literal) => Ok(OxTerm::Literal(literal.into())),
            Term::Quad(quad) => Ok(OxTerm::Triple(Box::new(nested_triple(quad)?))),
            other => Err(not_representable(other, "an oxrdf term")),
        }
    }
}

impl TryFrom<&Term> for OxGraphName {
    type Error = RdfError;

    fn try_from(term: &Term) -> RdfResult<Self> {
        match term {
            Term::NamedNode(node) => Ok(OxGraphName::NamedNode(node.into())),
            Term::BlankNode(node) => Ok(OxGraphName::BlankNode(node.into())),
            Term::DefaultGraph(_) => Ok(OxGraphName::DefaultGraph),
            other => Err(not_representable(other, "an oxrdf graph name")),
        }
    }
}

/// oxrdf triples carry no graph, so only default-graph quads can nest
fn nested_triple(quad: &Quad) -> RdfResult<OxTriple> {
    if !quad.is_in_default_graph() {
        return Err(not_representable(
            quad.graph(),
            "the graph of an oxrdf nested triple",
        ));
    }
    OxTriple::try_from(quad)
}

/// Converts subject, predicate and object; the graph is dropped
impl TryFrom<&Quad> for OxTriple {
    type Error = RdfError;

    fn try_from(quad: &Quad) -> RdfResult<Self> {
        Ok(OxTriple::new(
            OxSubject::try_from(quad.subject())?,
            OxNamedNode::try_from(quad.predicate())?,
            OxTerm::try_from(quad.object())?,
        ))
    }
}

impl TryFrom<&Quad> for OxQuad {
    type Error = RdfError;

    fn try_from(quad: &Quad) -> RdfResult<Self> {
        Ok(OxQuad::new(
            OxSubject::try_from(quad.subject())?,
            OxNamedNode::try_from(quad.predicate())?,
            OxTerm::try_from(quad.object())?,
            OxGraphName::try_from(quad.graph())?,
        ))
    }
}
