//! Traits companion emission: the nested `UxmlTraits` type declaring which
//! properties are settable from markup, plus the partial initialization
//! hook on the class itself.

use tracing::debug;

use super::writer::SourceWriter;
use super::{
    qualified_type_name, write_file_header, write_generated_code_attribute,
    write_member_decorations, GeneratedFile, UI_ELEMENTS,
};
use crate::cancel::CancellationToken;
use crate::diagnostics::Diagnostic;
use crate::error::GeneratorError;
use crate::generator::GeneratorOptions;
use crate::resolve::{resolve_attribute_info, UxmlAttributeInfo};
use crate::scan::TraitsCapture;
use crate::semantic::TypeResolver;
use crate::syntax::SyntaxTree;

pub(crate) fn emit_traits(
    tree: &SyntaxTree,
    resolver: &dyn TypeResolver,
    options: &GeneratorOptions,
    capture: &TraitsCapture,
    diagnostics: &mut Vec<Diagnostic>,
    cancel: &CancellationToken,
) -> Result<GeneratedFile, GeneratorError> {
    // Resolve every property first; failures only drop the one property.
    let mut infos: Vec<UxmlAttributeInfo> = Vec::with_capacity(capture.properties.len());
    for &(property, attribute) in &capture.properties {
        cancel.check()?;
        if let Some(info) = resolve_attribute_info(tree, resolver, property, attribute, diagnostics)
        {
            infos.push(info);
        }
    }
    debug!(
        class = %capture.class_name,
        properties = infos.len(),
        "emitting traits"
    );

    let base_name = qualified_type_name(tree, resolver, capture.base_type);

    let mut w = SourceWriter::new();
    write_file_header(&mut w);

    let namespaced = capture.class_namespace.is_some();
    if let Some(ns) = &capture.class_namespace {
        w.open(&format!("namespace {}", ns));
    }

    w.open(&format!("partial class {}", capture.class_name));

    write_member_decorations(&mut w, options, true);
    w.open(&format!(
        "public new class UxmlTraits : {}.UxmlTraits",
        base_name
    ));

    for info in &infos {
        write_generated_code_attribute(&mut w, options);
        w.open(&format!(
            "private readonly {}.{} {} = new()",
            UI_ELEMENTS, info.type_identifier, info.private_field_name
        ));
        w.line(&format!("name = \"{}\",", info.uxml_name));
        w.line(&format!("defaultValue = {}", info.default_value.render()));
        w.close_with(";");
        w.blank();
    }

    write_member_decorations(&mut w, options, true);
    w.open(&format!(
        "public override void Init({0}.VisualElement visualElement, {0}.IUxmlAttributes bag, {0}.CreationContext context)",
        UI_ELEMENTS
    ));
    w.line("base.Init(visualElement, bag, context);");
    w.line(&format!(
        "var control = ({})visualElement;",
        capture.class_name
    ));
    for info in &infos {
        w.line(&format!(
            "control.{} = {}.GetValueFromBag(bag, context);",
            info.property_name, info.private_field_name
        ));
    }
    w.line("control.OnUxmlTraitsInitialized(bag);");
    w.close();

    w.close();
    w.blank();

    write_member_decorations(&mut w, options, true);
    w.line(&format!(
        "partial void OnUxmlTraitsInitialized({}.IUxmlAttributes uxmlAttributes);",
        UI_ELEMENTS
    ));

    w.close();
    if namespaced {
        w.close();
    }

    Ok(GeneratedFile {
        name: format!("{}.{}.g.cs", capture.class_name, capture.tag),
        contents: w.finish(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::ClassTag;
    use crate::semantic::{MockResolver, TypeKind};
    use crate::syntax::AttributeTarget;
    use pretty_assertions::assert_eq;

    fn options() -> GeneratorOptions {
        GeneratorOptions {
            tool_name: "UxmlGenerator".to_string(),
            tool_version: "1.0.0".to_string(),
        }
    }

    #[test]
    fn traits_emit_fields_and_init_in_declaration_order() {
        let mut tree = SyntaxTree::new();
        let mut resolver = MockResolver::new();
        resolver.add_type(
            Some("UnityEngine.UIElements"),
            "VisualElement",
            TypeKind::Class,
        );

        let base = tree.named_type(None, "VisualElement");
        let class = tree.add_class("MyButton", Some("Game.UI"), vec![base]);
        let bool_ty = tree.predefined_type("bool");
        let enabled = tree.add_property(class, "IsEnabled", bool_ty);
        let dv = tree.bool_literal(true);
        let enabled_attr =
            tree.add_attribute("UxmlAttribute", vec![dv], AttributeTarget::Property(enabled));
        let int_ty = tree.predefined_type("int");
        let tab = tree.add_property(class, "TabIndex", int_ty);
        let tab_attr = tree.add_attribute("UxmlAttribute", vec![], AttributeTarget::Property(tab));

        let capture = TraitsCapture {
            class,
            class_name: "MyButton".to_string(),
            class_namespace: Some("Game.UI".to_string()),
            base_type: base,
            properties: vec![(enabled, enabled_attr), (tab, tab_attr)],
            tag: ClassTag::UxmlTraits,
        };

        let mut diagnostics = Vec::new();
        let file = emit_traits(
            &tree,
            &resolver,
            &options(),
            &capture,
            &mut diagnostics,
            &CancellationToken::new(),
        )
        .unwrap();

        assert!(diagnostics.is_empty());
        assert_eq!(file.name, "MyButton.UxmlTraits.g.cs");
        assert_eq!(
            file.contents,
            "\
// <auto-generated/>
#pragma warning disable
#nullable enable
namespace Game.UI
{
    partial class MyButton
    {
        [global::System.CodeDom.Compiler.GeneratedCode(\"UxmlGenerator\", \"1.0.0\")]
        [global::System.Diagnostics.CodeAnalysis.ExcludeFromCodeCoverage]
        public new class UxmlTraits : global::UnityEngine.UIElements.VisualElement.UxmlTraits
        {
            [global::System.CodeDom.Compiler.GeneratedCode(\"UxmlGenerator\", \"1.0.0\")]
            private readonly global::UnityEngine.UIElements.UxmlBoolAttributeDescription _isEnabled = new()
            {
                name = \"is-enabled\",
                defaultValue = true
            };

            [global::System.CodeDom.Compiler.GeneratedCode(\"UxmlGenerator\", \"1.0.0\")]
            private readonly global::UnityEngine.UIElements.UxmlIntAttributeDescription _tabIndex = new()
            {
                name = \"tab-index\",
                defaultValue = default
            };

            [global::System.CodeDom.Compiler.GeneratedCode(\"UxmlGenerator\", \"1.0.0\")]
            [global::System.Diagnostics.CodeAnalysis.ExcludeFromCodeCoverage]
            public override void Init(global::UnityEngine.UIElements.VisualElement visualElement, global::UnityEngine.UIElements.IUxmlAttributes bag, global::UnityEngine.UIElements.CreationContext context)
            {
                base.Init(visualElement, bag, context);
                var control = (MyButton)visualElement;
                control.IsEnabled = _isEnabled.GetValueFromBag(bag, context);
                control.TabIndex = _tabIndex.GetValueFromBag(bag, context);
                control.OnUxmlTraitsInitialized(bag);
            }
        }

        [global::System.CodeDom.Compiler.GeneratedCode(\"UxmlGenerator\", \"1.0.0\")]
        [global::System.Diagnostics.CodeAnalysis.ExcludeFromCodeCoverage]
        partial void OnUxmlTraitsInitialized(global::UnityEngine.UIElements.IUxmlAttributes uxmlAttributes);
    }
}
"
        );
    }

    #[test]
    fn failing_property_is_skipped_but_the_rest_still_emits() {
        let mut tree = SyntaxTree::new();
        let mut resolver = MockResolver::new();
        resolver.add_type(
            Some("UnityEngine.UIElements"),
            "VisualElement",
            TypeKind::Class,
        );

        let base = tree.named_type(None, "VisualElement");
        let class = tree.add_class("MyButton", None, vec![base]);
        let bool_ty = tree.predefined_type("bool");
        let flag = tree.add_property(class, "Flag", bool_ty);
        let bad = tree.string_literal("x");
        let flag_attr =
            tree.add_attribute("UxmlAttribute", vec![bad], AttributeTarget::Property(flag));
        let int_ty = tree.predefined_type("int");
        let tab = tree.add_property(class, "TabIndex", int_ty);
        let tab_attr = tree.add_attribute("UxmlAttribute", vec![], AttributeTarget::Property(tab));

        let capture = TraitsCapture {
            class,
            class_name: "MyButton".to_string(),
            class_namespace: None,
            base_type: base,
            properties: vec![(flag, flag_attr), (tab, tab_attr)],
            tag: ClassTag::UxmlTraits,
        };

        let mut diagnostics = Vec::new();
        let file = emit_traits(
            &tree,
            &resolver,
            &options(),
            &capture,
            &mut diagnostics,
            &CancellationToken::new(),
        )
        .unwrap();

        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].id(), "UXMLG003");
        assert!(!file.contents.contains("_flag"));
        assert!(file.contents.contains("_tabIndex"));
        assert!(file.contents.contains("control.TabIndex"));
    }

    #[test]
    fn cancellation_mid_class_unwinds_without_output() {
        let mut tree = SyntaxTree::new();
        let resolver = MockResolver::new();

        let base = tree.named_type(None, "VisualElement");
        let class = tree.add_class("MyButton", None, vec![base]);
        let int_ty = tree.predefined_type("int");
        let tab = tree.add_property(class, "TabIndex", int_ty);
        let tab_attr = tree.add_attribute("UxmlAttribute", vec![], AttributeTarget::Property(tab));

        let capture = TraitsCapture {
            class,
            class_name: "MyButton".to_string(),
            class_namespace: None,
            base_type: base,
            properties: vec![(tab, tab_attr)],
            tag: ClassTag::UxmlTraits,
        };

        let cancel = CancellationToken::new();
        cancel.cancel();
        let mut diagnostics = Vec::new();
        let result = emit_traits(
            &tree,
            &resolver,
            &options(),
            &capture,
            &mut diagnostics,
            &cancel,
        );
        assert!(matches!(result, Err(GeneratorError::Cancelled)));
    }
}
