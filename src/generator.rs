//! Orchestrates one analysis pass per compilation.
//!
//! A pass always emits the two marker support files, then validates every
//! capture against the semantic oracle: the structural has-a-base-type check
//! from scanning is necessary but not sufficient, so each class is
//! re-checked for transitive inheritance from the framework root before its
//! companions are emitted.

use tracing::info;

use crate::cancel::CancellationToken;
use crate::diagnostics::{
    Diagnostic, CLASS_DOES_NOT_INHERIT_FROM_VISUAL_ELEMENT_ERROR, TOOL_NAME,
};
use crate::emit::{
    emit_attribute_marker, emit_element_marker, emit_factory, emit_traits, GeneratedFile,
};
use crate::error::GeneratorError;
use crate::scan::VisualElementReceiver;
use crate::semantic::TypeResolver;
use crate::syntax::{ClassId, SyntaxTree};

/// Fully-qualified name of the framework root type every markup-participating
/// class must transitively derive from.
pub const VISUAL_ELEMENT_FULL_NAME: &str = "UnityEngine.UIElements.VisualElement";

/// Identity recorded in generated-code markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub tool_name: String,
    pub tool_version: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            tool_name: TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Result of one pass: generated sources plus accumulated diagnostics.
#[derive(Debug, Default)]
pub struct GeneratorOutput {
    pub files: Vec<GeneratedFile>,
    pub diagnostics: Vec<Diagnostic>,
}

impl GeneratorOutput {
    pub fn file(&self, name: &str) -> Option<&GeneratedFile> {
        self.files.iter().find(|file| file.name == name)
    }
}

/// The generator itself; stateless between passes.
#[derive(Debug, Default)]
pub struct UxmlGenerator {
    options: GeneratorOptions,
}

impl UxmlGenerator {
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Fresh receiver for one pass; the host drives it once per node.
    pub fn create_receiver(&self) -> VisualElementReceiver {
        VisualElementReceiver::new()
    }

    /// Convenience drive: walk the whole tree, then execute.
    pub fn generate(
        &self,
        tree: &SyntaxTree,
        resolver: &dyn TypeResolver,
        cancel: &CancellationToken,
    ) -> Result<GeneratorOutput, GeneratorError> {
        let mut receiver = self.create_receiver();
        for node in tree.nodes() {
            cancel.check()?;
            receiver.visit(tree, node);
        }
        self.execute(tree, receiver, resolver, cancel)
    }

    /// Emit companions for every validated capture the receiver collected.
    pub fn execute(
        &self,
        tree: &SyntaxTree,
        receiver: VisualElementReceiver,
        resolver: &dyn TypeResolver,
        cancel: &CancellationToken,
    ) -> Result<GeneratorOutput, GeneratorError> {
        let VisualElementReceiver { factory, traits } = receiver;

        // The marker types have no input dependency and are always emitted.
        let mut files = vec![
            emit_element_marker(&self.options),
            emit_attribute_marker(&self.options),
        ];
        let mut analysis: Vec<Diagnostic> = Vec::new();

        for capture in &factory.captures {
            cancel.check()?;
            if self.inherits_root(resolver, capture.class) {
                files.push(emit_factory(&self.options, capture));
            } else {
                analysis.push(wrong_root_diagnostic(tree, capture.class));
            }
        }

        for capture in traits.captures.values() {
            cancel.check()?;
            if self.inherits_root(resolver, capture.class) {
                files.push(emit_traits(
                    tree,
                    resolver,
                    &self.options,
                    capture,
                    &mut analysis,
                    cancel,
                )?);
            } else {
                analysis.push(wrong_root_diagnostic(tree, capture.class));
            }
        }

        // Scanner diagnostics surface first, then post-scan analysis, each
        // in accumulation order.
        let mut diagnostics = traits.diagnostics;
        diagnostics.extend(factory.diagnostics);
        diagnostics.extend(analysis);

        info!(
            files = files.len(),
            diagnostics = diagnostics.len(),
            "generation pass complete"
        );
        Ok(GeneratorOutput { files, diagnostics })
    }

    fn inherits_root(&self, resolver: &dyn TypeResolver, class: ClassId) -> bool {
        resolver
            .resolve_declared_type(class)
            .map_or(false, |handle| {
                resolver.inherits_from(handle, VISUAL_ELEMENT_FULL_NAME)
            })
    }
}

fn wrong_root_diagnostic(tree: &SyntaxTree, class: ClassId) -> Diagnostic {
    let node = tree.class(class);
    Diagnostic::new(
        &CLASS_DOES_NOT_INHERIT_FROM_VISUAL_ELEMENT_ERROR,
        node.span,
        vec![node.name.clone()],
    )
}
