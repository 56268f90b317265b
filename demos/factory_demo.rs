use rdf_data_factory::{DataFactory, FactoryConfig, RdfTerm};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    println!("RDF Data Factory v{}", rdf_data_factory::version());
    println!("==========================================");
    println!();

    demo_terms();
    demo_nested_quads();
    demo_blank_node_labels();
}

fn demo_terms() {
    println!("=== Demo 1: Terms ===");
    let factory = DataFactory::new();

    let alice = factory.named_node("http://example.org/alice");
    let name = factory.literal("Alice", Some("en".into()));
    let age = factory.literal(
        "30",
        Some(factory.named_node("http://www.w3.org/2001/XMLSchema#integer").into()),
    );
    let plain = factory.literal("Alice", None);

    println!("✓ {} ({})", alice, alice.term_type());
    println!("✓ {} ({})", name, name.term_type());
    println!("✓ {} ({})", age, age.term_type());
    println!("✓ {} ({})", plain, plain.term_type());
    println!("  tagged == plain: {}", name.equals(Some(&plain)));
}

fn demo_nested_quads() {
    println!("\n=== Demo 2: Nested Quads ===");
    let factory = DataFactory::new();

    let statement = factory.quad(
        factory.named_node("http://example.org/alice"),
        factory.named_node("http://xmlns.com/foaf/0.1/knows"),
        factory.named_node("http://example.org/bob"),
        None,
    );
    let annotated = factory.quad(
        statement,
        factory.named_node("http://example.org/certainty"),
        factory.literal("0.9", None),
        Some(factory.named_node("http://example.org/graphs/social").into()),
    );
    println!("✓ {}", annotated);

    let copy = factory.from_quad(&annotated);
    println!("  copy equals original: {}", copy.equals(Some(&annotated)));
}

fn demo_blank_node_labels() {
    println!("\n=== Demo 3: Blank Node Labels ===");
    let factory = DataFactory::with_config(FactoryConfig {
        blank_node_prefix: "b".to_string(),
        ..FactoryConfig::default()
    });

    for _ in 0..3 {
        println!("✓ {}", factory.blank_node(None));
    }
    factory.reset_blank_node_counter();
    println!("  after reset: {}", factory.blank_node(None));
}
