//! Semantic oracle: symbol queries answered by the host compiler.
//!
//! The generator never resolves symbols itself; everything it needs to know
//! about declared types, base-type chains and expression types is asked
//! through the [`TypeResolver`] trait. Production hosts implement it against
//! their symbol tables; tests use [`MockResolver`], a fake populated from
//! fixture data.

use std::collections::HashMap;

use crate::syntax::{ClassId, ExprId, ExprKind, SyntaxTree, TypeRefId, TypeRefKind};

/// Opaque handle to a resolved type, valid for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeHandle(u32);

/// Symbol kind of a resolved type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Class,
    Struct,
    Enum,
    Other,
}

/// Metadata for a resolved type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeInfo {
    pub name: String,
    /// Containing namespace; `None` means the global namespace.
    pub namespace: Option<String>,
    pub kind: TypeKind,
}

impl TypeInfo {
    /// Namespace-qualified name, or the bare name in the global namespace.
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{}.{}", ns, self.name),
            None => self.name.clone(),
        }
    }
}

/// Black-box symbol queries answered by the host.
pub trait TypeResolver {
    /// Symbol declared by a class declaration.
    fn resolve_declared_type(&self, class: ClassId) -> Option<TypeHandle>;

    /// Symbol a type reference resolves to.
    fn resolve_type_ref(&self, tree: &SyntaxTree, ty: TypeRefId) -> Option<TypeHandle>;

    /// Type of an expression.
    fn resolve_expr_type(&self, tree: &SyntaxTree, expr: ExprId) -> Option<TypeHandle>;

    /// Immediate base type, or `None` at the root of the chain.
    fn base_type(&self, ty: TypeHandle) -> Option<TypeHandle>;

    /// Metadata for a handle previously returned by this resolver.
    fn type_info(&self, ty: TypeHandle) -> &TypeInfo;

    /// Whether `ty` is `full_name` or transitively derives from it.
    fn inherits_from(&self, ty: TypeHandle, full_name: &str) -> bool {
        let mut current = Some(ty);
        while let Some(handle) = current {
            if self.type_info(handle).full_name() == full_name {
                return true;
            }
            current = self.base_type(handle);
        }
        false
    }
}

struct MockType {
    info: TypeInfo,
    base: Option<TypeHandle>,
}

/// Fixture-backed [`TypeResolver`] for tests and host prototyping.
///
/// Types are registered with [`add_type`](MockResolver::add_type) and wired
/// into chains with [`set_base`](MockResolver::set_base). Declarations and
/// expressions can be bound to handles explicitly; unbound type references
/// and member-access expressions fall back to name lookup, so most fixtures
/// only need the type registry.
#[derive(Default)]
pub struct MockResolver {
    types: Vec<MockType>,
    by_name: HashMap<String, TypeHandle>,
    classes: HashMap<ClassId, TypeHandle>,
    type_refs: HashMap<TypeRefId, TypeHandle>,
    exprs: HashMap<ExprId, TypeHandle>,
}

impl MockResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type; it becomes resolvable by both its full and simple
    /// name (later registrations win on simple-name collisions).
    pub fn add_type(&mut self, namespace: Option<&str>, name: &str, kind: TypeKind) -> TypeHandle {
        let info = TypeInfo {
            name: name.to_string(),
            namespace: namespace.map(str::to_string),
            kind,
        };
        let handle = TypeHandle(self.types.len() as u32);
        self.by_name.insert(info.full_name(), handle);
        self.by_name.insert(info.name.clone(), handle);
        self.types.push(MockType { info, base: None });
        handle
    }

    pub fn set_base(&mut self, ty: TypeHandle, base: TypeHandle) {
        self.types[ty.0 as usize].base = Some(base);
    }

    /// Bind a class declaration to the type it declares.
    pub fn bind_class(&mut self, class: ClassId, ty: TypeHandle) {
        self.classes.insert(class, ty);
    }

    pub fn bind_type_ref(&mut self, type_ref: TypeRefId, ty: TypeHandle) {
        self.type_refs.insert(type_ref, ty);
    }

    pub fn bind_expr(&mut self, expr: ExprId, ty: TypeHandle) {
        self.exprs.insert(expr, ty);
    }

    fn lookup(&self, name: &str) -> Option<TypeHandle> {
        if let Some(handle) = self.by_name.get(name) {
            return Some(*handle);
        }
        // Qualified spellings fall back to their final segment.
        let simple = name.rsplit('.').next()?;
        self.by_name.get(simple).copied()
    }
}

impl TypeResolver for MockResolver {
    fn resolve_declared_type(&self, class: ClassId) -> Option<TypeHandle> {
        self.classes.get(&class).copied()
    }

    fn resolve_type_ref(&self, tree: &SyntaxTree, ty: TypeRefId) -> Option<TypeHandle> {
        if let Some(handle) = self.type_refs.get(&ty) {
            return Some(*handle);
        }
        match &tree.type_ref(ty).kind {
            TypeRefKind::Predefined { .. } => None,
            TypeRefKind::Named { qualifier, ident } => match qualifier {
                Some(q) => self
                    .lookup(&format!("{}.{}", q, ident))
                    .or_else(|| self.lookup(ident)),
                None => self.lookup(ident),
            },
            TypeRefKind::Generic { ident, .. } => self.lookup(ident),
        }
    }

    fn resolve_expr_type(&self, tree: &SyntaxTree, expr: ExprId) -> Option<TypeHandle> {
        if let Some(handle) = self.exprs.get(&expr) {
            return Some(*handle);
        }
        match &tree.expr(expr).kind {
            // `MyEnum.Fast` has the type of its accessed container.
            ExprKind::MemberAccess { target, .. } => self.lookup(target),
            _ => None,
        }
    }

    fn base_type(&self, ty: TypeHandle) -> Option<TypeHandle> {
        self.types[ty.0 as usize].base
    }

    fn type_info(&self, ty: TypeHandle) -> &TypeInfo {
        &self.types[ty.0 as usize].info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_qualifies_with_namespace() {
        let info = TypeInfo {
            name: "Color".to_string(),
            namespace: Some("UnityEngine".to_string()),
            kind: TypeKind::Struct,
        };
        assert_eq!(info.full_name(), "UnityEngine.Color");

        let global = TypeInfo {
            name: "Widget".to_string(),
            namespace: None,
            kind: TypeKind::Class,
        };
        assert_eq!(global.full_name(), "Widget");
    }

    #[test]
    fn inherits_from_walks_the_base_chain() {
        let mut resolver = MockResolver::new();
        let root = resolver.add_type(Some("UnityEngine.UIElements"), "VisualElement", TypeKind::Class);
        let mid = resolver.add_type(Some("Game.UI"), "BaseButton", TypeKind::Class);
        let leaf = resolver.add_type(Some("Game.UI"), "MyButton", TypeKind::Class);
        resolver.set_base(mid, root);
        resolver.set_base(leaf, mid);

        assert!(resolver.inherits_from(leaf, "UnityEngine.UIElements.VisualElement"));
        assert!(resolver.inherits_from(root, "UnityEngine.UIElements.VisualElement"));
        assert!(!resolver.inherits_from(leaf, "Game.UI.Unrelated"));
    }

    #[test]
    fn type_refs_resolve_by_name_without_explicit_binds() {
        let mut tree = SyntaxTree::new();
        let mut resolver = MockResolver::new();
        let handle = resolver.add_type(Some("Game"), "MyEnum", TypeKind::Enum);

        let simple = tree.named_type(None, "MyEnum");
        let qualified = tree.named_type(Some("Game"), "MyEnum");
        assert_eq!(resolver.resolve_type_ref(&tree, simple), Some(handle));
        assert_eq!(resolver.resolve_type_ref(&tree, qualified), Some(handle));
    }

    #[test]
    fn member_access_resolves_to_its_container_type() {
        let mut tree = SyntaxTree::new();
        let mut resolver = MockResolver::new();
        let handle = resolver.add_type(Some("Game"), "MyEnum", TypeKind::Enum);

        let access = tree.member_access("MyEnum", "Fast");
        assert_eq!(resolver.resolve_expr_type(&tree, access), Some(handle));

        let literal = tree.bool_literal(true);
        assert_eq!(resolver.resolve_expr_type(&tree, literal), None);
    }
}
