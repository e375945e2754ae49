//! Single-walk declaration scanner.
//!
//! Two receivers share one traversal: the element receiver captures classes
//! carrying the element marker, the traits receiver groups attribute-marked
//! properties by their enclosing class. Captures and diagnostics are
//! independent accumulators; a malformed input produces a diagnostic
//! without a capture, never both for the same member.
//!
//! Scanning is purely structural. Whether a captured class actually derives
//! from the framework root is only knowable once the semantic oracle is
//! available, so that check happens later in the orchestrator.

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

use crate::diagnostics::{Diagnostic, CLASS_HAS_NO_BASE_CLASS_ERROR};
use crate::syntax::{
    AttributeId, AttributeNode, AttributeTarget, ClassId, PropertyId, SyntaxNode, SyntaxTree,
    TypeRefId,
};

/// Class-level marker identifying a markup-instantiable type.
pub const ELEMENT_MARKER: &str = "UxmlElement";

/// Property-level marker identifying a markup-settable property.
pub const ATTRIBUTE_MARKER: &str = "UxmlAttribute";

/// Discriminates the two generated companion kinds; also the file-name tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassTag {
    UxmlFactory,
    UxmlTraits,
}

impl fmt::Display for ClassTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassTag::UxmlFactory => write!(f, "UxmlFactory"),
            ClassTag::UxmlTraits => write!(f, "UxmlTraits"),
        }
    }
}

/// One class carrying the element marker.
#[derive(Debug, Clone)]
pub struct ElementCapture {
    pub class: ClassId,
    pub class_name: String,
    pub class_namespace: Option<String>,
    pub tag: ClassTag,
}

/// One class with at least one attribute-marked property.
#[derive(Debug, Clone)]
pub struct TraitsCapture {
    pub class: ClassId,
    pub class_name: String,
    pub class_namespace: Option<String>,
    /// The class's first listed base type; the rest of the base list is
    /// never consulted.
    pub base_type: TypeRefId,
    /// Marked properties in declaration order; emission preserves it.
    pub properties: Vec<(PropertyId, AttributeId)>,
    pub tag: ClassTag,
}

impl TraitsCapture {
    fn new(tree: &SyntaxTree, class: ClassId) -> Self {
        let node = tree.class(class);
        Self {
            class,
            class_name: node.name.clone(),
            class_namespace: node.namespace.clone(),
            base_type: node.base_types[0],
            properties: Vec::new(),
            tag: ClassTag::UxmlTraits,
        }
    }
}

/// Marker names match on the final identifier segment, tolerant of
/// qualification and of the spelled-out `...Attribute` form.
fn marker_matches(written: &str, marker: &str) -> bool {
    let last = written.rsplit('.').next().unwrap_or(written);
    last == marker || last.strip_suffix("Attribute") == Some(marker)
}

/// Enclosing class of an attribute, walking through its target.
fn enclosing_class(tree: &SyntaxTree, attribute: &AttributeNode) -> Option<ClassId> {
    match attribute.target {
        AttributeTarget::Class(class) => Some(class),
        AttributeTarget::Property(property) => tree.property(property).class,
        AttributeTarget::Other => None,
    }
}

/// Captures classes annotated with the element marker.
#[derive(Debug, Default)]
pub struct ElementReceiver {
    pub captures: Vec<ElementCapture>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ElementReceiver {
    pub fn visit(&mut self, tree: &SyntaxTree, node: SyntaxNode) {
        let SyntaxNode::Attribute(id) = node else {
            return;
        };
        let attribute = tree.attribute(id);
        if !marker_matches(&attribute.name, ELEMENT_MARKER) {
            return;
        }

        let Some(class_id) = enclosing_class(tree, attribute) else {
            return;
        };
        let class = tree.class(class_id);

        if class.base_types.is_empty() {
            self.diagnostics.push(Diagnostic::new(
                &CLASS_HAS_NO_BASE_CLASS_ERROR,
                class.span,
                vec![class.name.clone()],
            ));
            return;
        }

        debug!(class = %class.name, "captured element marker");
        self.captures.push(ElementCapture {
            class: class_id,
            class_name: class.name.clone(),
            class_namespace: class.namespace.clone(),
            tag: ClassTag::UxmlFactory,
        });
    }
}

/// Groups attribute-marked properties by their enclosing class.
#[derive(Debug, Default)]
pub struct TraitsReceiver {
    /// Keyed by class name; property markers for one class may appear in
    /// any scan order, insertion order fixes the emission order.
    pub captures: IndexMap<String, TraitsCapture>,
    pub diagnostics: Vec<Diagnostic>,
}

impl TraitsReceiver {
    pub fn visit(&mut self, tree: &SyntaxTree, node: SyntaxNode) {
        let SyntaxNode::Attribute(id) = node else {
            return;
        };
        let attribute = tree.attribute(id);
        if !marker_matches(&attribute.name, ATTRIBUTE_MARKER) {
            return;
        }

        // Markers on anything but a property are not ours to report.
        let AttributeTarget::Property(property_id) = attribute.target else {
            return;
        };
        let property = tree.property(property_id);

        let Some(class_id) = property.class else {
            self.diagnostics.push(Diagnostic::new(
                &CLASS_HAS_NO_BASE_CLASS_ERROR,
                property.span,
                vec![],
            ));
            return;
        };
        let class = tree.class(class_id);

        if class.base_types.is_empty() {
            self.diagnostics.push(Diagnostic::new(
                &CLASS_HAS_NO_BASE_CLASS_ERROR,
                class.span,
                vec![class.name.clone()],
            ));
            return;
        }

        let capture = self
            .captures
            .entry(class.name.clone())
            .or_insert_with(|| {
                debug!(class = %class.name, "captured traits class");
                TraitsCapture::new(tree, class_id)
            });
        capture.properties.push((property_id, id));
    }
}

/// Composite receiver driven once per syntax node.
#[derive(Debug, Default)]
pub struct VisualElementReceiver {
    pub factory: ElementReceiver,
    pub traits: TraitsReceiver,
}

impl VisualElementReceiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visit(&mut self, tree: &SyntaxTree, node: SyntaxNode) {
        self.factory.visit(tree, node);
        self.traits.visit(tree, node);
    }
}
