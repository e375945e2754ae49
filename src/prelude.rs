//! Convenient re-exports for common uxmlgen usage.
//!
//! # Quick Start
//!
//! For most users, import the prelude:
//!
//! ```
//! use uxmlgen::prelude::*;
//!
//! let mut tree = SyntaxTree::new();
//! let base = tree.named_type(None, "VisualElement");
//! let class = tree.add_class("MyButton", None, vec![base]);
//! tree.add_attribute("UxmlElement", vec![], AttributeTarget::Class(class));
//!
//! let resolver = MockResolver::new();
//! let output = UxmlGenerator::default()
//!     .generate(&tree, &resolver, &CancellationToken::new())
//!     .unwrap();
//!
//! // The class declares a symbol the fixture never registered, so the
//! // root-type re-validation reports it and only the markers are emitted.
//! assert_eq!(output.files.len(), 2);
//! assert_eq!(output.diagnostics[0].id(), "UXMLG002");
//! ```
//!
//! Hosts with their own symbol tables implement [`TypeResolver`] instead of
//! using [`MockResolver`].

pub use crate::cancel::CancellationToken;
pub use crate::classify::{NumericKind, TypeCategory};
pub use crate::diagnostics::{Diagnostic, DiagnosticDescriptor, Severity};
pub use crate::emit::GeneratedFile;
pub use crate::error::GeneratorError;
pub use crate::generator::{GeneratorOptions, GeneratorOutput, UxmlGenerator};
pub use crate::resolve::{DefaultValue, UxmlAttributeInfo};
pub use crate::scan::{ClassTag, ElementCapture, TraitsCapture, VisualElementReceiver};
pub use crate::semantic::{MockResolver, TypeHandle, TypeInfo, TypeKind, TypeResolver};
pub use crate::syntax::{
    AttributeId, AttributeTarget, ClassId, ExprId, PropertyId, Span, SyntaxNode, SyntaxTree,
    TypeRefId,
};
