//! Default-value classification and re-synthesis for marked properties.
//!
//! Given a property and its marker attribute, this stage validates that the
//! attribute's default-value expression is shaped consistently with the
//! property's declared type, extracts a canonical value token, and
//! re-synthesizes a target-type-correct expression for emission. Enum-shaped
//! defaults pass a second, oracle-backed check: a member-access shape is
//! cheap to accept but may still resolve to a non-enum type, so the shape
//! pre-check is never collapsed into the semantic confirmation.
//!
//! Failures are per-property: a diagnostic is recorded and the property is
//! excluded, while the rest of its class still emits.

use tracing::debug;

use crate::classify::{classify_property_type, NumericKind, TypeCategory};
use crate::diagnostics::{
    Diagnostic, INCORRECT_ENUM_DEFAULT_VALUE_TYPE_ERROR,
    PROPERTY_AND_DEFAULT_VALUE_TYPES_MISMATCH_ERROR, PROPERTY_TYPE_IS_NOT_SUPPORTED_ERROR,
};
use crate::idents::{to_dash_case, to_private_field_name};
use crate::semantic::{TypeKind, TypeResolver};
use crate::syntax::{AttributeId, ExprId, ExprKind, LiteralKind, PropertyId, SyntaxTree};

/// Canonical default-value expression embedded in generated code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefaultValue {
    /// The framework's `default` sentinel; used when no explicit default
    /// was supplied.
    TypeDefault,
    /// Emitted verbatim (bool literals, re-qualified member accesses).
    Verbatim(String),
    /// Emitted as a quoted, escaped string literal.
    StringLiteral(String),
    /// Emitted as a numeric literal token.
    NumericLiteral(String),
}

impl DefaultValue {
    /// Rendered form for the generated field initializer.
    pub fn render(&self) -> String {
        match self {
            DefaultValue::TypeDefault => "default".to_string(),
            DefaultValue::Verbatim(text) => text.clone(),
            DefaultValue::StringLiteral(text) => format!("\"{}\"", escape_string(text)),
            DefaultValue::NumericLiteral(text) => text.clone(),
        }
    }
}

/// Everything emission needs to know about one settable property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UxmlAttributeInfo {
    pub property_name: String,
    pub private_field_name: String,
    pub uxml_name: String,
    /// Attribute description type, without its namespace qualification.
    pub type_identifier: String,
    pub default_value: DefaultValue,
}

pub(crate) fn escape_string(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Resolve one `(property, marker)` pair into emission-ready info.
///
/// Returns `None` after recording a diagnostic when the property cannot be
/// processed; the caller skips it and carries on.
pub fn resolve_attribute_info(
    tree: &SyntaxTree,
    resolver: &dyn TypeResolver,
    property_id: PropertyId,
    attribute_id: AttributeId,
    diagnostics: &mut Vec<Diagnostic>,
) -> Option<UxmlAttributeInfo> {
    let property = tree.property(property_id);
    let attribute = tree.attribute(attribute_id);

    // A literal `default` argument is the same as supplying no default.
    let default_expr = attribute.args.first().copied().filter(|&expr| {
        !matches!(
            tree.expr(expr).kind,
            ExprKind::Literal {
                kind: LiteralKind::Default,
                ..
            }
        )
    });

    let category = classify_property_type(tree, resolver, property.ty);

    if let TypeCategory::Unsupported { type_name } = &category {
        diagnostics.push(Diagnostic::new(
            &PROPERTY_TYPE_IS_NOT_SUPPORTED_ERROR,
            property.span,
            vec![type_name.clone().unwrap_or_default()],
        ));
        return None;
    }

    if !default_shape_matches(tree, &category, default_expr) {
        diagnostics.push(Diagnostic::new(
            &PROPERTY_AND_DEFAULT_VALUE_TYPES_MISMATCH_ERROR,
            attribute.span,
            vec![property.name.clone()],
        ));
        return None;
    }

    let token = default_expr.and_then(|expr| extract_value_token(tree, expr));

    let (type_identifier, default_value) = match category {
        TypeCategory::Bool => (
            "UxmlBoolAttributeDescription".to_string(),
            match token {
                Some(token) => DefaultValue::Verbatim(token),
                None => DefaultValue::TypeDefault,
            },
        ),
        TypeCategory::String => (
            "UxmlStringAttributeDescription".to_string(),
            match token {
                Some(token) => DefaultValue::StringLiteral(token),
                None => DefaultValue::TypeDefault,
            },
        ),
        TypeCategory::Numeric(kind) => (
            numeric_description(kind),
            match token {
                Some(token) => DefaultValue::NumericLiteral(token),
                None => DefaultValue::TypeDefault,
            },
        ),
        TypeCategory::Color => (
            "UxmlColorAttributeDescription".to_string(),
            match token {
                // Color tokens re-qualify against the engine namespace, not
                // the property's own.
                Some(token) => DefaultValue::Verbatim(format!("global::UnityEngine.{}", token)),
                None => DefaultValue::TypeDefault,
            },
        ),
        TypeCategory::Enum(handle) => {
            let enum_full = format!("global::{}", resolver.type_info(handle).full_name());
            let type_identifier = format!("UxmlEnumAttributeDescription<{}>", enum_full);
            let default_value = match token {
                Some(token) => {
                    // The shape matched, but the resolved type must actually
                    // be an enum.
                    let argument_type = default_expr
                        .and_then(|expr| resolver.resolve_expr_type(tree, expr))
                        .map(|handle| resolver.type_info(handle));
                    match argument_type {
                        Some(info) if info.kind == TypeKind::Enum => {
                            DefaultValue::Verbatim(format!("{}.{}", enum_full, token))
                        }
                        other => {
                            diagnostics.push(Diagnostic::new(
                                &INCORRECT_ENUM_DEFAULT_VALUE_TYPE_ERROR,
                                attribute.span,
                                vec![other.map(|info| info.name.clone()).unwrap_or_default()],
                            ));
                            return None;
                        }
                    }
                }
                None => DefaultValue::TypeDefault,
            };
            (type_identifier, default_value)
        }
        TypeCategory::Unsupported { .. } => unreachable!("handled above"),
    };

    debug!(property = %property.name, description = %type_identifier, "resolved uxml attribute");
    Some(UxmlAttributeInfo {
        property_name: property.name.clone(),
        private_field_name: to_private_field_name(&property.name),
        uxml_name: to_dash_case(&property.name),
        type_identifier,
        default_value,
    })
}

fn numeric_description(kind: NumericKind) -> String {
    format!("Uxml{}AttributeDescription", kind.description_infix())
}

/// Shape-level compatibility of a default expression with a type category.
/// No expression is always compatible.
fn default_shape_matches(
    tree: &SyntaxTree,
    category: &TypeCategory,
    default_expr: Option<ExprId>,
) -> bool {
    let Some(expr) = default_expr else {
        return true;
    };
    let kind = &tree.expr(expr).kind;
    match category {
        TypeCategory::Bool => matches!(
            kind,
            ExprKind::Literal {
                kind: LiteralKind::Bool,
                ..
            }
        ),
        TypeCategory::String => matches!(
            kind,
            ExprKind::Literal {
                kind: LiteralKind::Str,
                ..
            }
        ),
        TypeCategory::Numeric(_) => match kind {
            ExprKind::Literal {
                kind: LiteralKind::Numeric,
                ..
            } => true,
            // A single unary-minus prefix is allowed around a numeric
            // literal.
            ExprKind::UnaryMinus { operand } => matches!(
                tree.expr(*operand).kind,
                ExprKind::Literal {
                    kind: LiteralKind::Numeric,
                    ..
                }
            ),
            _ => false,
        },
        // Enum and color defaults are written as accessor or factory-call
        // expressions.
        TypeCategory::Color | TypeCategory::Enum(_) => matches!(
            kind,
            ExprKind::MemberAccess { .. } | ExprKind::Invocation { .. }
        ),
        TypeCategory::Unsupported { .. } => true,
    }
}

/// Canonical value token of a validated default expression.
fn extract_value_token(tree: &SyntaxTree, expr: ExprId) -> Option<String> {
    match &tree.expr(expr).kind {
        ExprKind::Literal {
            kind: LiteralKind::Default,
            ..
        } => None,
        ExprKind::Literal { text, .. } => Some(text.clone()),
        ExprKind::UnaryMinus { operand } => {
            Some(format!("-{}", tree.expr_source_text(*operand)))
        }
        ExprKind::Identifier { text } => Some(text.clone()),
        // Qualification is stripped here and re-applied against the
        // property's own resolved type.
        ExprKind::MemberAccess { member, .. } => Some(member.clone()),
        // Factory-call pattern: the first argument's raw text is the value;
        // the callee is ignored.
        ExprKind::Invocation { args, .. } => {
            args.first().map(|arg| tree.expr_source_text(*arg))
        }
    }
}
