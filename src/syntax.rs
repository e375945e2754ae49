//! Arena-backed declaration tree consumed by the generator.
//!
//! The host compiler owns parsing; this module is the in-memory shape it
//! hands over: classes, properties, marker attributes, expressions and type
//! references, stored in typed arenas and addressed by copyable ids. Nodes
//! are immutable once inserted, and the tree records the document-order walk
//! sequence the scanner consumes. The whole tree is built once per pass and
//! discarded wholesale afterwards.

use std::fmt;

/// Byte range of a node in the host's source text.
///
/// When the host does not supply positions, the builder assigns synthetic
/// monotonically-increasing spans so every node still has a distinct,
/// reportable location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Handle to a class declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(u32);

/// Handle to a property declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyId(u32);

/// Handle to a marker attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeId(u32);

/// Handle to an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ExprId(u32);

/// Handle to a type reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeRefId(u32);

/// A class declaration.
#[derive(Debug, Clone)]
pub struct ClassNode {
    pub name: String,
    /// Enclosing namespace; `None` means the global namespace.
    pub namespace: Option<String>,
    /// Declared base list, in source order. Empty when the class declares
    /// no base types at all.
    pub base_types: Vec<TypeRefId>,
    pub span: Span,
}

/// A property declaration.
#[derive(Debug, Clone)]
pub struct PropertyNode {
    pub name: String,
    pub ty: TypeRefId,
    /// Enclosing class; `None` when the declaration is orphaned and no
    /// enclosing class can be resolved.
    pub class: Option<ClassId>,
    pub span: Span,
}

/// What a marker attribute is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeTarget {
    Class(ClassId),
    Property(PropertyId),
    /// A member kind the generator does not process (methods, fields, ...).
    Other,
}

/// A marker attribute as written, possibly qualified (`[Editor.UxmlElement]`).
#[derive(Debug, Clone)]
pub struct AttributeNode {
    pub name: String,
    pub args: Vec<ExprId>,
    pub target: AttributeTarget,
    pub span: Span,
}

/// A type reference as it appears in a declaration.
#[derive(Debug, Clone)]
pub enum TypeRefKind {
    /// A predefined keyword type (`bool`, `int`, `string`, ...).
    Predefined { keyword: String },
    /// A named type, optionally qualified (`Ns.MyEnum`).
    Named {
        qualifier: Option<String>,
        ident: String,
    },
    /// A generic named type with its argument list.
    Generic { ident: String, args: Vec<TypeRefId> },
}

#[derive(Debug, Clone)]
pub struct TypeRefNode {
    pub kind: TypeRefKind,
    pub span: Span,
}

/// Literal token categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    Bool,
    Str,
    Numeric,
    /// The `default` keyword literal.
    Default,
}

/// An expression attached to a marker attribute argument.
#[derive(Debug, Clone)]
pub enum ExprKind {
    /// A literal token. For string literals `text` holds the unescaped
    /// value; for the rest it holds the token text verbatim.
    Literal { kind: LiteralKind, text: String },
    /// A unary-minus prefix wrapping another expression.
    UnaryMinus { operand: ExprId },
    /// A bare identifier.
    Identifier { text: String },
    /// A member access such as `MyEnum.Fast`; `target` keeps any
    /// qualification as written.
    MemberAccess { target: String, member: String },
    /// An invocation such as `nameof(Color.red)`.
    Invocation { callee: String, args: Vec<ExprId> },
}

#[derive(Debug, Clone)]
pub struct ExprNode {
    pub kind: ExprKind,
    pub span: Span,
}

/// One entry of the document-order walk sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyntaxNode {
    Class(ClassId),
    Property(PropertyId),
    Attribute(AttributeId),
}

/// The per-pass declaration tree.
#[derive(Debug, Default)]
pub struct SyntaxTree {
    classes: Vec<ClassNode>,
    properties: Vec<PropertyNode>,
    attributes: Vec<AttributeNode>,
    exprs: Vec<ExprNode>,
    type_refs: Vec<TypeRefNode>,
    order: Vec<SyntaxNode>,
    cursor: u32,
}

impl SyntaxTree {
    pub fn new() -> Self {
        Self::default()
    }

    fn alloc_span(&mut self, width: usize) -> Span {
        let start = self.cursor;
        self.cursor += width.max(1) as u32;
        Span::new(start, self.cursor)
    }

    // ------------------------------------------------------------------
    // Declarations
    // ------------------------------------------------------------------

    pub fn add_class_at(
        &mut self,
        name: &str,
        namespace: Option<&str>,
        base_types: Vec<TypeRefId>,
        span: Span,
    ) -> ClassId {
        let id = ClassId(self.classes.len() as u32);
        self.classes.push(ClassNode {
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
            base_types,
            span,
        });
        self.order.push(SyntaxNode::Class(id));
        id
    }

    pub fn add_class(
        &mut self,
        name: &str,
        namespace: Option<&str>,
        base_types: Vec<TypeRefId>,
    ) -> ClassId {
        let span = self.alloc_span(name.len());
        self.add_class_at(name, namespace, base_types, span)
    }

    pub fn add_property_at(
        &mut self,
        class: ClassId,
        name: &str,
        ty: TypeRefId,
        span: Span,
    ) -> PropertyId {
        self.push_property(Some(class), name, ty, span)
    }

    pub fn add_property(&mut self, class: ClassId, name: &str, ty: TypeRefId) -> PropertyId {
        let span = self.alloc_span(name.len());
        self.push_property(Some(class), name, ty, span)
    }

    /// A property whose enclosing class could not be resolved.
    pub fn add_orphan_property(&mut self, name: &str, ty: TypeRefId) -> PropertyId {
        let span = self.alloc_span(name.len());
        self.push_property(None, name, ty, span)
    }

    fn push_property(
        &mut self,
        class: Option<ClassId>,
        name: &str,
        ty: TypeRefId,
        span: Span,
    ) -> PropertyId {
        let id = PropertyId(self.properties.len() as u32);
        self.properties.push(PropertyNode {
            name: name.to_string(),
            ty,
            class,
            span,
        });
        self.order.push(SyntaxNode::Property(id));
        id
    }

    pub fn add_attribute_at(
        &mut self,
        name: &str,
        args: Vec<ExprId>,
        target: AttributeTarget,
        span: Span,
    ) -> AttributeId {
        let id = AttributeId(self.attributes.len() as u32);
        self.attributes.push(AttributeNode {
            name: name.to_string(),
            args,
            target,
            span,
        });
        self.order.push(SyntaxNode::Attribute(id));
        id
    }

    pub fn add_attribute(
        &mut self,
        name: &str,
        args: Vec<ExprId>,
        target: AttributeTarget,
    ) -> AttributeId {
        let span = self.alloc_span(name.len());
        self.add_attribute_at(name, args, target, span)
    }

    // ------------------------------------------------------------------
    // Type references
    // ------------------------------------------------------------------

    pub fn predefined_type(&mut self, keyword: &str) -> TypeRefId {
        let span = self.alloc_span(keyword.len());
        self.push_type_ref(TypeRefNode {
            kind: TypeRefKind::Predefined {
                keyword: keyword.to_string(),
            },
            span,
        })
    }

    pub fn named_type(&mut self, qualifier: Option<&str>, ident: &str) -> TypeRefId {
        let span = self.alloc_span(ident.len());
        self.push_type_ref(TypeRefNode {
            kind: TypeRefKind::Named {
                qualifier: qualifier.map(str::to_string),
                ident: ident.to_string(),
            },
            span,
        })
    }

    pub fn generic_type(&mut self, ident: &str, args: Vec<TypeRefId>) -> TypeRefId {
        let span = self.alloc_span(ident.len());
        self.push_type_ref(TypeRefNode {
            kind: TypeRefKind::Generic {
                ident: ident.to_string(),
                args,
            },
            span,
        })
    }

    fn push_type_ref(&mut self, node: TypeRefNode) -> TypeRefId {
        let id = TypeRefId(self.type_refs.len() as u32);
        self.type_refs.push(node);
        id
    }

    // ------------------------------------------------------------------
    // Expressions
    // ------------------------------------------------------------------

    pub fn bool_literal(&mut self, value: bool) -> ExprId {
        let text = if value { "true" } else { "false" };
        self.push_literal(LiteralKind::Bool, text)
    }

    /// `text` is the unescaped string value.
    pub fn string_literal(&mut self, text: &str) -> ExprId {
        self.push_literal(LiteralKind::Str, text)
    }

    /// `text` is the numeric token verbatim (`42`, `0.5f`, ...).
    pub fn numeric_literal(&mut self, text: &str) -> ExprId {
        self.push_literal(LiteralKind::Numeric, text)
    }

    /// The `default` keyword literal.
    pub fn default_literal(&mut self) -> ExprId {
        self.push_literal(LiteralKind::Default, "default")
    }

    fn push_literal(&mut self, kind: LiteralKind, text: &str) -> ExprId {
        let span = self.alloc_span(text.len());
        self.push_expr(ExprNode {
            kind: ExprKind::Literal {
                kind,
                text: text.to_string(),
            },
            span,
        })
    }

    pub fn unary_minus(&mut self, operand: ExprId) -> ExprId {
        let span = self.alloc_span(1);
        self.push_expr(ExprNode {
            kind: ExprKind::UnaryMinus { operand },
            span,
        })
    }

    pub fn identifier_expr(&mut self, text: &str) -> ExprId {
        let span = self.alloc_span(text.len());
        self.push_expr(ExprNode {
            kind: ExprKind::Identifier {
                text: text.to_string(),
            },
            span,
        })
    }

    pub fn member_access(&mut self, target: &str, member: &str) -> ExprId {
        let span = self.alloc_span(target.len() + member.len() + 1);
        self.push_expr(ExprNode {
            kind: ExprKind::MemberAccess {
                target: target.to_string(),
                member: member.to_string(),
            },
            span,
        })
    }

    pub fn invocation(&mut self, callee: &str, args: Vec<ExprId>) -> ExprId {
        let span = self.alloc_span(callee.len());
        self.push_expr(ExprNode {
            kind: ExprKind::Invocation {
                callee: callee.to_string(),
                args,
            },
            span,
        })
    }

    fn push_expr(&mut self, node: ExprNode) -> ExprId {
        let id = ExprId(self.exprs.len() as u32);
        self.exprs.push(node);
        id
    }

    // ------------------------------------------------------------------
    // Access
    // ------------------------------------------------------------------

    pub fn class(&self, id: ClassId) -> &ClassNode {
        &self.classes[id.0 as usize]
    }

    pub fn property(&self, id: PropertyId) -> &PropertyNode {
        &self.properties[id.0 as usize]
    }

    pub fn attribute(&self, id: AttributeId) -> &AttributeNode {
        &self.attributes[id.0 as usize]
    }

    pub fn expr(&self, id: ExprId) -> &ExprNode {
        &self.exprs[id.0 as usize]
    }

    pub fn type_ref(&self, id: TypeRefId) -> &TypeRefNode {
        &self.type_refs[id.0 as usize]
    }

    /// Document-order walk sequence; one entry per declaration/attribute.
    pub fn nodes(&self) -> impl Iterator<Item = SyntaxNode> + '_ {
        self.order.iter().copied()
    }

    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Reconstructs the raw source text of an expression.
    pub fn expr_source_text(&self, id: ExprId) -> String {
        match &self.expr(id).kind {
            ExprKind::Literal {
                kind: LiteralKind::Str,
                text,
            } => format!("\"{}\"", text),
            ExprKind::Literal { text, .. } => text.clone(),
            ExprKind::UnaryMinus { operand } => format!("-{}", self.expr_source_text(*operand)),
            ExprKind::Identifier { text } => text.clone(),
            ExprKind::MemberAccess { target, member } => format!("{}.{}", target, member),
            ExprKind::Invocation { callee, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.expr_source_text(*arg))
                    .collect::<Vec<_>>()
                    .join(", ");
                format!("{}({})", callee, args)
            }
        }
    }
}
