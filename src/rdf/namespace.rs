//! Well-known RDF namespaces and IRIs
//!
//! Only the vocabulary the factory hard-codes lives here.

/// RDF namespace
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

/// XML Schema datatypes namespace
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// RDF vocabulary IRIs
pub mod rdf {
    /// rdf:langString, the datatype of every language-tagged literal
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// XSD vocabulary IRIs
pub mod xsd {
    /// xsd:string, the datatype of plain literals
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
}
