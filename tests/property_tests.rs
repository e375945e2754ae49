//! Property-based tests for the identifier transforms and the
//! default-value resolver, using proptest.
//!
//! These verify invariants that must hold for all inputs, not just
//! hand-picked examples.

use proptest::prelude::*;

use uxmlgen::diagnostics::Diagnostic;
use uxmlgen::prelude::*;
use uxmlgen::resolve::resolve_attribute_info;
use uxmlgen::{to_dash_case, to_private_field_name};

// ============================================================================
// Generators
// ============================================================================

/// Property names as they appear in real declarations: leading letter,
/// ASCII alphanumeric tail.
fn arb_property_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,24}"
}

fn arb_primitive_keyword() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just("bool"),
        Just("string"),
        Just("int"),
        Just("long"),
        Just("float"),
        Just("double"),
    ]
}

// ============================================================================
// Identifier Transforms
// ============================================================================

proptest! {
    #[test]
    fn private_field_name_adds_exactly_the_marker(name in arb_property_name()) {
        let field = to_private_field_name(&name);
        prop_assert_eq!(field.len(), name.len() + 1);
        prop_assert!(field.starts_with('_'));
        // The tail past the first character is preserved verbatim.
        prop_assert_eq!(&field[2..], &name[1..]);
    }

    #[test]
    fn dash_case_inserts_one_dash_per_capital_tail_letter(name in arb_property_name()) {
        let dashed = to_dash_case(&name);
        let capitals_after_first = name.chars().skip(1).filter(|c| c.is_uppercase()).count();
        let dashes = dashed.chars().filter(|&c| c == '-').count();
        prop_assert_eq!(dashes, capitals_after_first);
        prop_assert!(dashed.chars().all(|c| !c.is_uppercase()));
    }

    #[test]
    fn dash_case_is_idempotent_on_its_own_output(name in arb_property_name()) {
        let once = to_dash_case(&name);
        prop_assert_eq!(to_dash_case(&once), once.clone());
    }

    #[test]
    fn dash_case_preserves_already_lower_names(name in "[a-z][a-z0-9]{0,24}") {
        prop_assert_eq!(to_dash_case(&name), name.clone());
    }
}

// ============================================================================
// Default-Value Resolution
// ============================================================================

proptest! {
    #[test]
    fn primitives_without_default_never_mismatch(
        name in "[A-Z][A-Za-z0-9]{0,24}",
        keyword in arb_primitive_keyword(),
    ) {
        let mut tree = SyntaxTree::new();
        let resolver = MockResolver::new();
        let base = tree.named_type(None, "VisualElement");
        let class = tree.add_class("Widget", None, vec![base]);
        let ty = tree.predefined_type(keyword);
        let prop = tree.add_property(class, &name, ty);
        let attr = tree.add_attribute("UxmlAttribute", vec![], AttributeTarget::Property(prop));

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let info = resolve_attribute_info(&tree, &resolver, prop, attr, &mut diagnostics);

        prop_assert!(diagnostics.is_empty());
        let info = info.unwrap();
        prop_assert_eq!(info.default_value, DefaultValue::TypeDefault);
        prop_assert_eq!(info.private_field_name, to_private_field_name(&name));
        prop_assert_eq!(info.uxml_name, to_dash_case(&name));
    }

    #[test]
    fn numeric_defaults_round_trip_their_token(token in "[1-9][0-9]{0,8}") {
        let mut tree = SyntaxTree::new();
        let resolver = MockResolver::new();
        let base = tree.named_type(None, "VisualElement");
        let class = tree.add_class("Widget", None, vec![base]);
        let ty = tree.predefined_type("int");
        let prop = tree.add_property(class, "Value", ty);
        let literal = tree.numeric_literal(&token);
        let attr = tree.add_attribute(
            "UxmlAttribute",
            vec![literal],
            AttributeTarget::Property(prop),
        );

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let info = resolve_attribute_info(&tree, &resolver, prop, attr, &mut diagnostics)
            .unwrap();
        prop_assert_eq!(info.default_value.render(), token);
    }

    #[test]
    fn negated_numeric_defaults_prefix_exactly_one_minus(token in "[1-9][0-9]{0,8}") {
        let mut tree = SyntaxTree::new();
        let resolver = MockResolver::new();
        let base = tree.named_type(None, "VisualElement");
        let class = tree.add_class("Widget", None, vec![base]);
        let ty = tree.predefined_type("int");
        let prop = tree.add_property(class, "Value", ty);
        let literal = tree.numeric_literal(&token);
        let negated = tree.unary_minus(literal);
        let attr = tree.add_attribute(
            "UxmlAttribute",
            vec![negated],
            AttributeTarget::Property(prop),
        );

        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let info = resolve_attribute_info(&tree, &resolver, prop, attr, &mut diagnostics)
            .unwrap();
        prop_assert_eq!(info.default_value.render(), format!("-{}", token));
    }
}
