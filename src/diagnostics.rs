//! Diagnostic descriptors and the per-pass diagnostic values.
//!
//! Diagnostics are data, not Rust errors: one bad class or property never
//! aborts the pass. Each scan/analysis stage appends to its own sequence,
//! nothing is deduplicated, and the orchestrator forwards everything to the
//! host verbatim.

use std::fmt;

use crate::syntax::Span;

/// Tool name recorded as the diagnostic category and in generated-code
/// markers.
pub const TOOL_NAME: &str = "UxmlGenerator";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Immutable description of one diagnostic kind.
#[derive(Debug, PartialEq, Eq)]
pub struct DiagnosticDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    /// Message template with `{0}`-style placeholders.
    pub message_format: &'static str,
    pub category: &'static str,
    pub severity: Severity,
}

pub static CLASS_HAS_NO_BASE_CLASS_ERROR: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "UXMLG001",
    title: "Class has no base class",
    message_format: "Class '{0}' must be declared as a partial and be inherited from 'VisualElement' or one of its derived classes.",
    category: TOOL_NAME,
    severity: Severity::Error,
};

pub static CLASS_DOES_NOT_INHERIT_FROM_VISUAL_ELEMENT_ERROR: DiagnosticDescriptor =
    DiagnosticDescriptor {
        id: "UXMLG002",
        title: "Class does not inherit from VisualElement",
        message_format: "Class '{0}' must be declared as a partial and be inherited from 'VisualElement' or one of its derived classes.",
        category: TOOL_NAME,
        severity: Severity::Error,
    };

pub static PROPERTY_AND_DEFAULT_VALUE_TYPES_MISMATCH_ERROR: DiagnosticDescriptor =
    DiagnosticDescriptor {
        id: "UXMLG003",
        title: "Types mismatch",
        message_format: "UxmlAttribute for '{0}' property was not created. The default property and attribute value must be of the same type.",
        category: TOOL_NAME,
        severity: Severity::Error,
    };

pub static PROPERTY_TYPE_IS_NOT_SUPPORTED_ERROR: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "UXMLG004",
    title: "Property type is not supported",
    message_format: "UxmlAttribute was not created. Property type '{0}' is not supported.",
    category: TOOL_NAME,
    severity: Severity::Error,
};

pub static INCORRECT_ENUM_DEFAULT_VALUE_TYPE_ERROR: DiagnosticDescriptor = DiagnosticDescriptor {
    id: "UXMLG005",
    title: "Incorrect enum default value type",
    message_format: "UxmlAttribute was not created. Default value of type '{0}' is not a member of the property's enum type.",
    category: TOOL_NAME,
    severity: Severity::Error,
};

/// One reported diagnostic: descriptor, offending location, message args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub descriptor: &'static DiagnosticDescriptor,
    pub location: Span,
    pub args: Vec<String>,
}

impl Diagnostic {
    pub fn new(
        descriptor: &'static DiagnosticDescriptor,
        location: Span,
        args: Vec<String>,
    ) -> Self {
        Self {
            descriptor,
            location,
            args,
        }
    }

    pub fn id(&self) -> &'static str {
        self.descriptor.id
    }

    /// Message with `{N}` placeholders substituted; placeholders without a
    /// matching argument render as empty, the way a null format argument
    /// would.
    pub fn message(&self) -> String {
        let mut out = String::with_capacity(self.descriptor.message_format.len());
        let mut rest = self.descriptor.message_format;
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            rest = &rest[open + 1..];
            match rest.find('}') {
                Some(close) => {
                    let placeholder = &rest[..close];
                    match placeholder.parse::<usize>() {
                        Ok(index) => {
                            if let Some(arg) = self.args.get(index) {
                                out.push_str(arg);
                            }
                        }
                        Err(_) => {
                            out.push('{');
                            out.push_str(placeholder);
                            out.push('}');
                        }
                    }
                    rest = &rest[close + 1..];
                }
                None => {
                    out.push('{');
                    break;
                }
            }
        }
        out.push_str(rest);
        out
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[{}]: {} (at {})",
            self.descriptor.severity,
            self.descriptor.id,
            self.message(),
            self.location
        )
    }
}
