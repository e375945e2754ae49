//! Uxmlgen: a source-generator core for UXML companion code.
//!
//! Uxmlgen inspects an in-memory declaration tree for classes carrying the
//! `UxmlElement` marker and properties carrying the `UxmlAttribute` marker,
//! then synthesizes the partial-class companions that bind those classes
//! into the UXML markup framework: a nested `UxmlFactory` type per marked
//! class, and a nested `UxmlTraits` type declaring which properties are
//! settable from markup, with type-directed default-value handling.
//!
//! # Core Concepts
//!
//! - **Scan → classify → validate → emit**: a single tree walk collects
//!   captures, property types are classified against the closed set of
//!   supported attribute kinds, default-value expressions are validated and
//!   re-synthesized, and validated captures are lowered to generated text.
//! - **Diagnostics, not failures**: one bad class or property never aborts
//!   the pass; each problem is reported as a [`Diagnostic`] and processing
//!   carries on. Host cancellation is the only condition that unwinds.
//! - **Injected semantic oracle**: symbol queries (declared types, base
//!   chains, expression types, namespaces) go through the [`TypeResolver`]
//!   trait, so the core runs against a production symbol table or against
//!   [`MockResolver`] fixtures alike.
//! - **Deterministic output**: identical captures produce byte-identical
//!   generated text, in declaration order, with stable file names.
//!
//! # Quick Start
//!
//! ```
//! use uxmlgen::prelude::*;
//!
//! // The host hands over a declaration tree...
//! let mut tree = SyntaxTree::new();
//! let base = tree.named_type(None, "VisualElement");
//! let class = tree.add_class("MyButton", Some("Game.UI"), vec![base]);
//! tree.add_attribute("UxmlElement", vec![], AttributeTarget::Class(class));
//!
//! // ...and a symbol oracle (a fixture resolver here).
//! let mut resolver = MockResolver::new();
//! let root = resolver.add_type(
//!     Some("UnityEngine.UIElements"),
//!     "VisualElement",
//!     TypeKind::Class,
//! );
//! let declared = resolver.add_type(Some("Game.UI"), "MyButton", TypeKind::Class);
//! resolver.set_base(declared, root);
//! resolver.bind_class(class, declared);
//!
//! let output = UxmlGenerator::default()
//!     .generate(&tree, &resolver, &CancellationToken::new())?;
//! assert!(output.file("MyButton.UxmlFactory.g.cs").is_some());
//! # Ok::<(), uxmlgen::GeneratorError>(())
//! ```
//!
//! # Module Structure
//!
//! - [`syntax`]: arena-indexed declaration tree handed over by the host
//! - [`semantic`]: the `TypeResolver` oracle and its fixture-backed mock
//! - [`scan`]: single-walk scanner producing element/traits captures
//! - [`classify`]: property-type classification
//! - [`resolve`]: default-value validation and canonicalization
//! - [`emit`]: generated-file construction
//! - [`diagnostics`]: descriptors and reported diagnostics
//! - [`generator`]: the per-pass orchestrator
//! - [`prelude`]: convenient re-exports for common usage

pub mod cancel;
pub mod classify;
pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod generator;
pub mod idents;
pub mod prelude;
pub mod resolve;
pub mod scan;
pub mod semantic;
pub mod syntax;

// Re-exports for convenience
pub use cancel::CancellationToken;
pub use classify::{classify_property_type, NumericKind, TypeCategory, COLOR_TYPE_FULL_NAME};
pub use diagnostics::{
    Diagnostic, DiagnosticDescriptor, Severity, CLASS_DOES_NOT_INHERIT_FROM_VISUAL_ELEMENT_ERROR,
    CLASS_HAS_NO_BASE_CLASS_ERROR, INCORRECT_ENUM_DEFAULT_VALUE_TYPE_ERROR,
    PROPERTY_AND_DEFAULT_VALUE_TYPES_MISMATCH_ERROR, PROPERTY_TYPE_IS_NOT_SUPPORTED_ERROR,
    TOOL_NAME,
};
pub use emit::GeneratedFile;
pub use error::GeneratorError;
pub use generator::{GeneratorOptions, GeneratorOutput, UxmlGenerator, VISUAL_ELEMENT_FULL_NAME};
pub use idents::{to_dash_case, to_private_field_name};
pub use resolve::{resolve_attribute_info, DefaultValue, UxmlAttributeInfo};
pub use scan::{
    ClassTag, ElementCapture, ElementReceiver, TraitsCapture, TraitsReceiver,
    VisualElementReceiver, ATTRIBUTE_MARKER, ELEMENT_MARKER,
};
pub use semantic::{MockResolver, TypeHandle, TypeInfo, TypeKind, TypeResolver};
pub use syntax::{
    AttributeId, AttributeTarget, ClassId, ExprId, ExprKind, LiteralKind, PropertyId, Span,
    SyntaxNode, SyntaxTree, TypeRefId, TypeRefKind,
};
