//! Full-pipeline benchmark: scan, resolve and emit a synthetic compilation
//! with many marked classes and properties.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use uxmlgen::prelude::*;

const CLASSES: usize = 50;
const PROPERTIES_PER_CLASS: usize = 8;

fn build_fixture() -> (SyntaxTree, MockResolver) {
    let mut tree = SyntaxTree::new();
    let mut resolver = MockResolver::new();
    let root = resolver.add_type(
        Some("UnityEngine.UIElements"),
        "VisualElement",
        TypeKind::Class,
    );
    resolver.add_type(Some("Game"), "Mode", TypeKind::Enum);

    for c in 0..CLASSES {
        let name = format!("Widget{c}");
        let base = tree.named_type(None, "VisualElement");
        let class = tree.add_class(&name, Some("Game.UI"), vec![base]);
        tree.add_attribute("UxmlElement", vec![], AttributeTarget::Class(class));

        let declared = resolver.add_type(Some("Game.UI"), &name, TypeKind::Class);
        resolver.set_base(declared, root);
        resolver.bind_class(class, declared);

        for p in 0..PROPERTIES_PER_CLASS {
            let prop_name = format!("Property{p}Value");
            let (ty, default) = match p % 4 {
                0 => (tree.predefined_type("bool"), Some(tree.bool_literal(true))),
                1 => {
                    let literal = tree.numeric_literal("7");
                    let negated = tree.unary_minus(literal);
                    (tree.predefined_type("int"), Some(negated))
                }
                2 => (
                    tree.predefined_type("string"),
                    Some(tree.string_literal("default text")),
                ),
                _ => (
                    tree.named_type(None, "Mode"),
                    Some(tree.member_access("Mode", "Fast")),
                ),
            };
            let prop = tree.add_property(class, &prop_name, ty);
            let args = default.into_iter().collect();
            tree.add_attribute("UxmlAttribute", args, AttributeTarget::Property(prop));
        }
    }

    (tree, resolver)
}

fn bench_generate(c: &mut Criterion) {
    let (tree, resolver) = build_fixture();
    let generator = UxmlGenerator::default();
    let cancel = CancellationToken::new();

    c.bench_function("generate_400_properties", |b| {
        b.iter(|| {
            let output = generator
                .generate(black_box(&tree), &resolver, &cancel)
                .unwrap();
            black_box(output.files.len())
        })
    });
}

fn bench_scan_only(c: &mut Criterion) {
    let (tree, _resolver) = build_fixture();
    let generator = UxmlGenerator::default();

    c.bench_function("scan_only", |b| {
        b.iter(|| {
            let mut receiver = generator.create_receiver();
            for node in tree.nodes() {
                receiver.visit(&tree, node);
            }
            black_box(receiver.traits.captures.len())
        })
    });
}

criterion_group!(benches, bench_generate, bench_scan_only);
criterion_main!(benches);
