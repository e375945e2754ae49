//! Structured emission of generated companion sources.
//!
//! Pure functions from validated captures to generated text. Every file
//! carries the standard auto-generated header; every member carries the
//! generated-code marker, and everything except field declarations also
//! carries the coverage-exclusion marker (the framework disallows it on
//! fields).

mod factory;
mod markers;
mod traits;
mod writer;

pub(crate) use factory::emit_factory;
pub(crate) use markers::{emit_attribute_marker, emit_element_marker};
pub(crate) use traits::emit_traits;
pub(crate) use writer::SourceWriter;

use crate::generator::GeneratorOptions;
use crate::semantic::TypeResolver;
use crate::syntax::{SyntaxTree, TypeRefId, TypeRefKind};

/// Namespace qualification of the markup framework types.
pub(crate) const UI_ELEMENTS: &str = "global::UnityEngine.UIElements";

/// One generated source file, named per the host's compatibility convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub name: String,
    pub contents: String,
}

pub(crate) fn write_file_header(w: &mut SourceWriter) {
    w.line("// <auto-generated/>");
    w.line("#pragma warning disable");
    w.line("#nullable enable");
}

pub(crate) fn write_generated_code_attribute(w: &mut SourceWriter, options: &GeneratorOptions) {
    w.line(&format!(
        "[global::System.CodeDom.Compiler.GeneratedCode(\"{}\", \"{}\")]",
        options.tool_name, options.tool_version
    ));
}

pub(crate) fn write_member_decorations(
    w: &mut SourceWriter,
    options: &GeneratorOptions,
    with_coverage_exclusion: bool,
) {
    write_generated_code_attribute(w, options);
    if with_coverage_exclusion {
        w.line("[global::System.Diagnostics.CodeAnalysis.ExcludeFromCodeCoverage]");
    }
}

/// Globally-qualified rendering of a type reference, expanding generic
/// arguments recursively. Used for the captured class's base type; the
/// namespace comes from the oracle, and an unresolvable namespace leaves
/// the name unqualified.
pub(crate) fn qualified_type_name(
    tree: &SyntaxTree,
    resolver: &dyn TypeResolver,
    ty: TypeRefId,
) -> String {
    match &tree.type_ref(ty).kind {
        TypeRefKind::Predefined { keyword } => keyword.clone(),
        TypeRefKind::Named { ident, .. } => qualify(tree, resolver, ty, ident),
        TypeRefKind::Generic { ident, args } => {
            let mut out = qualify(tree, resolver, ty, ident);
            out.push('<');
            for (i, arg) in args.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                out.push_str(&qualified_type_name(tree, resolver, *arg));
            }
            out.push('>');
            out
        }
    }
}

fn qualify(tree: &SyntaxTree, resolver: &dyn TypeResolver, ty: TypeRefId, ident: &str) -> String {
    let namespace = resolver
        .resolve_type_ref(tree, ty)
        .and_then(|handle| resolver.type_info(handle).namespace.clone());
    match namespace {
        Some(ns) => format!("global::{}.{}", ns, ident),
        None => ident.to_string(),
    }
}
