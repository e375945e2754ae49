//! Type-reference classification against the supported attribute kinds.
//!
//! Predefined keyword spellings are checked first; only named references go
//! through the semantic oracle, which is the more expensive path and the
//! only one that can distinguish the color type and enums.

use crate::semantic::{TypeHandle, TypeKind, TypeResolver};
use crate::syntax::{SyntaxTree, TypeRefId, TypeRefKind};

/// Fully-qualified name of the framework color type.
pub const COLOR_TYPE_FULL_NAME: &str = "UnityEngine.Color";

/// Numeric subkinds with a markup attribute description of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumericKind {
    Int,
    Long,
    Float,
    Double,
}

impl NumericKind {
    /// Infix used in the description type name (`UxmlIntAttributeDescription`).
    pub fn description_infix(self) -> &'static str {
        match self {
            NumericKind::Int => "Int",
            NumericKind::Long => "Long",
            NumericKind::Float => "Float",
            NumericKind::Double => "Double",
        }
    }
}

/// Category of a property type with respect to markup attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeCategory {
    Bool,
    String,
    Numeric(NumericKind),
    Color,
    Enum(TypeHandle),
    /// No markup attribute mapping exists. `type_name` is the resolved or
    /// written name when one is available.
    Unsupported { type_name: Option<String> },
}

/// Classify a property's declared type.
pub fn classify_property_type(
    tree: &SyntaxTree,
    resolver: &dyn TypeResolver,
    ty: TypeRefId,
) -> TypeCategory {
    match &tree.type_ref(ty).kind {
        TypeRefKind::Predefined { keyword } => classify_predefined(keyword),
        TypeRefKind::Named { .. } => match resolver.resolve_type_ref(tree, ty) {
            Some(handle) => {
                let info = resolver.type_info(handle);
                if info.full_name() == COLOR_TYPE_FULL_NAME {
                    TypeCategory::Color
                } else if info.kind == TypeKind::Enum {
                    TypeCategory::Enum(handle)
                } else {
                    TypeCategory::Unsupported {
                        type_name: Some(info.name.clone()),
                    }
                }
            }
            None => TypeCategory::Unsupported { type_name: None },
        },
        // Generic property types have no attribute mapping; generics are
        // only decomposed for the class's base type during emission.
        TypeRefKind::Generic { ident, .. } => TypeCategory::Unsupported {
            type_name: Some(ident.clone()),
        },
    }
}

fn classify_predefined(keyword: &str) -> TypeCategory {
    match keyword {
        "bool" => TypeCategory::Bool,
        "string" => TypeCategory::String,
        "int" => TypeCategory::Numeric(NumericKind::Int),
        "long" => TypeCategory::Numeric(NumericKind::Long),
        "float" => TypeCategory::Numeric(NumericKind::Float),
        "double" => TypeCategory::Numeric(NumericKind::Double),
        other => TypeCategory::Unsupported {
            type_name: Some(other.to_string()),
        },
    }
}
