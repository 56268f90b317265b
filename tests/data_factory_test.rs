use rdf_data_factory::{DataFactory, Literal, Quad, RdfTerm, Term, TermType};

const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

fn spog(factory: &DataFactory, s: &str, p: &str, o: &str, g: &str) -> Quad {
    factory.quad(
        factory.named_node(s),
        factory.named_node(p),
        factory.named_node(o),
        Some(factory.named_node(g).into()),
    )
}

fn nested(factory: &DataFactory) -> Quad {
    factory.quad(
        factory.named_node("ex:s"),
        factory.named_node("ex:p"),
        spog(factory, "ex:s_", "ex:p_", "ex:o_", "ex:g_"),
        Some(factory.named_node("ex:g").into()),
    )
}

/// Check that both terms hold equal but separately allocated payloads
fn assert_copied(input: &Term, output: &Term) {
    assert!(input.equals(Some(output)), "{} != {}", input, output);
    match (input, output) {
        (Term::NamedNode(a), Term::NamedNode(b)) => assert!(!a.ptr_eq(b)),
        (Term::BlankNode(a), Term::BlankNode(b)) => assert!(!a.ptr_eq(b)),
        (Term::Variable(a), Term::Variable(b)) => assert!(!a.ptr_eq(b)),
        (Term::Quad(a), Term::Quad(b)) => assert_quad_copied(a, b),
        (Term::Literal(_), Term::Literal(_)) | (Term::DefaultGraph(_), Term::DefaultGraph(_)) => {}
        (a, b) => panic!("kind changed from {} to {}", a.term_type(), b.term_type()),
    }
}

fn assert_quad_copied(input: &Quad, output: &Quad) {
    assert!(input.equals(Some(output)));
    assert_copied(input.subject(), output.subject());
    assert_copied(input.predicate(), output.predicate());
    assert_copied(input.object(), output.object());
    assert_copied(input.graph(), output.graph());
}

#[test]
fn test_named_node() {
    let factory = DataFactory::new();
    let node = factory.named_node("ex:a");
    assert_eq!(node.term_type(), TermType::NamedNode);
    assert_eq!(node.value(), "ex:a");

    assert!(!node.equals(None));
    assert!(!node.equals(Some(&factory.blank_node(None))));
    assert!(node.equals(Some(&factory.named_node("ex:a"))));
}

#[test]
fn test_blank_node() {
    let factory = DataFactory::new();
    let node = factory.blank_node(Some("a"));
    assert_eq!(node.term_type(), TermType::BlankNode);
    assert_eq!(node.value(), "a");

    assert!(!node.equals(None));
    assert!(!node.equals(Some(&factory.named_node("a"))));
    assert!(node.equals(Some(&factory.blank_node(Some("a")))));
}

#[test]
fn test_blank_node_label_generation() {
    let factory = DataFactory::new();
    assert_eq!(factory.blank_node(None).value(), "df-0");
    assert_eq!(factory.blank_node(None).value(), "df-1");
    assert_eq!(factory.blank_node(None).value(), "df-2");
}

#[test]
fn test_blank_node_label_generation_after_reset() {
    let factory = DataFactory::new();
    assert_eq!(factory.blank_node(None).value(), "df-0");
    assert_eq!(factory.blank_node(None).value(), "df-1");
    factory.reset_blank_node_counter();
    assert_eq!(factory.blank_node(None).value(), "df-0");
    assert_eq!(factory.blank_node(None).value(), "df-1");
}

#[test]
fn test_string_literal() {
    let factory = DataFactory::new();
    let literal = factory.literal("abc", None);
    assert_eq!(literal.term_type(), TermType::Literal);
    assert_eq!(literal.value(), "abc");
    assert_eq!(literal.language(), "");
    assert!(literal
        .datatype()
        .equals(Some(&factory.named_node(XSD_STRING))));
}

#[test]
fn test_language_tagged_literal() {
    let factory = DataFactory::new();
    let literal = factory.literal("abc", Some("en-us".into()));
    assert_eq!(literal.value(), "abc");
    assert_eq!(literal.language(), "en-us");
    assert!(literal
        .datatype()
        .equals(Some(&factory.named_node(RDF_LANG_STRING))));
}

#[test]
fn test_datatyped_literal() {
    let factory = DataFactory::new();
    let literal = factory.literal("abc", Some(factory.named_node("ex:dt").into()));
    assert_eq!(literal.value(), "abc");
    assert_eq!(literal.language(), "");
    assert_eq!(literal.datatype(), &factory.named_node("ex:dt"));
}

#[test]
fn test_literal_equality() {
    let factory = DataFactory::new();
    let plain = |v: &str| factory.literal(v, None);
    let tagged = |v: &str, l: &str| factory.literal(v, Some(l.into()));
    let typed = |v: &str, dt: &str| factory.literal(v, Some(factory.named_node(dt).into()));

    let term = plain("a");
    assert!(!term.equals(None));
    assert!(!term.equals(Some(&factory.blank_node(None))));
    assert!(term.equals(Some(&plain("a"))));

    assert!(tagged("a", "en-us").equals(Some(&tagged("a", "en-us"))));
    assert!(typed("a", "ex:dt").equals(Some(&typed("a", "ex:dt"))));

    assert!(!plain("a").equals(Some(&tagged("a", "en-us"))));
    assert!(!plain("a").equals(Some(&typed("a", "ex:dt"))));
    assert!(plain("a").equals(Some(&typed("a", XSD_STRING))));

    assert!(!tagged("a", "en-us").equals(Some(&plain("a"))));
    assert!(!tagged("a", "en-us").equals(Some(&typed("a", "ex:dt"))));
    assert!(!tagged("a", "en-us").equals(Some(&typed("a", RDF_LANG_STRING))));

    assert!(!typed("a", "ex:dt").equals(Some(&plain("a"))));
    assert!(!typed("a", "ex:dt1").equals(Some(&typed("a", "ex:dt2"))));
    assert!(!typed("a", "ex:dt").equals(Some(&typed("a", XSD_STRING))));
}

#[test]
fn test_variable() {
    let factory = DataFactory::new();
    let variable = factory.variable("a");
    assert_eq!(variable.term_type(), TermType::Variable);
    assert_eq!(variable.value(), "a");

    assert!(!variable.equals(None));
    assert!(!variable.equals(Some(&factory.blank_node(None))));
    assert!(variable.equals(Some(&factory.variable("a"))));
}

#[test]
fn test_default_graph() {
    let factory = DataFactory::new();
    let graph = factory.default_graph();
    assert_eq!(graph.term_type(), TermType::DefaultGraph);
    assert_eq!(graph.value(), "");
    assert_eq!(factory.default_graph(), factory.default_graph());

    assert!(!graph.equals(None));
    assert!(!graph.equals(Some(&factory.blank_node(None))));
    assert!(graph.equals(Some(&factory.default_graph())));
    assert!(graph.equals(Some(&DataFactory::new().default_graph())));
}

#[test]
fn test_quad() {
    let factory = DataFactory::new();
    let quad = spog(&factory, "ex:s", "ex:p", "ex:o", "ex:g");
    assert_eq!(quad.term_type(), TermType::Quad);
    assert_eq!(quad.value(), "");
    assert!(quad.subject().equals(Some(&factory.named_node("ex:s"))));
    assert!(quad.predicate().equals(Some(&factory.named_node("ex:p"))));
    assert!(quad.object().equals(Some(&factory.named_node("ex:o"))));
    assert!(quad.graph().equals(Some(&factory.named_node("ex:g"))));
}

#[test]
fn test_quad_without_graph() {
    let factory = DataFactory::new();
    let quad = factory.quad(
        factory.named_node("ex:s"),
        factory.named_node("ex:p"),
        factory.named_node("ex:o"),
        None,
    );
    assert!(quad.graph().equals(Some(&factory.default_graph())));
}

#[test]
fn test_nested_quad() {
    let factory = DataFactory::new();
    let quad = nested(&factory);
    assert_eq!(quad.term_type(), TermType::Quad);
    assert!(quad
        .object()
        .equals(Some(&spog(&factory, "ex:s_", "ex:p_", "ex:o_", "ex:g_"))));
}

#[test]
fn test_quad_equality() {
    let factory = DataFactory::new();
    let term = spog(&factory, "ex:s", "ex:p", "ex:o", "ex:g");
    assert!(!term.equals(None));
    assert!(!term.equals(Some(&factory.blank_node(None))));
    assert!(term.equals(Some(&spog(&factory, "ex:s", "ex:p", "ex:o", "ex:g"))));

    assert!(!term.equals(Some(&spog(&factory, "ex:s-", "ex:p", "ex:o", "ex:g"))));
    assert!(!term.equals(Some(&spog(&factory, "ex:s", "ex:p-", "ex:o", "ex:g"))));
    assert!(!term.equals(Some(&spog(&factory, "ex:s", "ex:p", "ex:o-", "ex:g"))));
    assert!(!term.equals(Some(&spog(&factory, "ex:s", "ex:p", "ex:o", "ex:g-"))));
}

#[test]
fn test_nested_quad_equality() {
    let factory = DataFactory::new();
    let term = nested(&factory);
    assert!(!term.equals(None));
    assert!(!term.equals(Some(&factory.blank_node(None))));
    assert!(term.equals(Some(&nested(&factory))));

    let changed_deep = factory.quad(
        factory.named_node("ex:s"),
        factory.named_node("ex:p"),
        spog(&factory, "ex:s_", "ex:p_", "ex:o_", "ex:g-"),
        Some(factory.named_node("ex:g").into()),
    );
    assert!(!term.equals(Some(&changed_deep)));
}

#[test]
fn test_from_term_named_node() {
    let factory = DataFactory::new();
    let input: Term = factory.named_node("ex:a").into();
    assert_copied(&input, &factory.from_term(&input));
}

#[test]
fn test_from_term_blank_node() {
    let factory = DataFactory::new();
    let input: Term = factory.blank_node(Some("a")).into();
    assert_copied(&input, &factory.from_term(&input));
}

#[test]
fn test_from_term_string_literal() {
    let factory = DataFactory::new();
    let input = factory.literal("a", None);
    let output = Literal::try_from(factory.from_term(&input)).unwrap();
    assert!(input.equals(Some(&output)));
    assert!(input.datatype().ptr_eq(output.datatype()));
}

#[test]
fn test_from_term_language_tagged_literal() {
    let factory = DataFactory::new();
    let input = factory.literal("a", Some("en-us".into()));
    let output = Literal::try_from(factory.from_term(&input)).unwrap();
    assert!(input.equals(Some(&output)));
    assert!(input.datatype().ptr_eq(output.datatype()));
}

#[test]
fn test_from_term_datatyped_literal() {
    let factory = DataFactory::new();
    let input = factory.literal("a", Some(factory.named_node("ex:dt").into()));
    let output = Literal::try_from(factory.from_term(&input)).unwrap();
    assert!(input.equals(Some(&output)));
    assert!(input.datatype().equals(Some(output.datatype())));
    assert!(!input.datatype().ptr_eq(output.datatype()));
}

#[test]
fn test_from_term_variable() {
    let factory = DataFactory::new();
    let input: Term = factory.variable("a").into();
    assert_copied(&input, &factory.from_term(&input));
}

#[test]
fn test_from_term_default_graph() {
    let factory = DataFactory::new();
    let input = factory.default_graph();
    let output = factory.from_term(&input);
    assert!(input.equals(Some(&output)));
    assert_eq!(output, Term::DefaultGraph(factory.default_graph()));
}

#[test]
fn test_from_term_quad() {
    let factory = DataFactory::new();
    let input: Term = spog(&factory, "ex:s", "ex:p", "ex:o", "ex:g").into();
    assert_copied(&input, &factory.from_term(&input));
}

#[test]
fn test_from_term_nested_quad() {
    let factory = DataFactory::new();
    let input: Term = nested(&factory).into();
    let output = factory.from_term(&input);
    assert_copied(&input, &output);

    let input_deep = input.as_quad().unwrap().object().as_quad().unwrap();
    let output_deep = output.as_quad().unwrap().object().as_quad().unwrap();
    assert_quad_copied(input_deep, output_deep);
}

#[test]
fn test_from_quad() {
    let factory = DataFactory::new();
    let input = spog(&factory, "ex:s", "ex:p", "ex:o", "ex:g");
    assert_quad_copied(&input, &factory.from_quad(&input));
}

#[test]
fn test_from_quad_nested() {
    let factory = DataFactory::new();
    let input = nested(&factory);
    let output = factory.from_quad(&input);
    assert_quad_copied(&input, &output);
}

#[test]
fn test_from_quad_matches_from_term() {
    let factory = DataFactory::new();
    let input = nested(&factory);
    let via_quad: Term = factory.from_quad(&input).into();
    assert_eq!(via_quad, factory.from_term(&input));
}
