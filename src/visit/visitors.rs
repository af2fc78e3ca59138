use super::{Folder, Node, VisitInfo};
use crate::ast::{ASTContext, ASTKind};
use crate::error::Result;
use hashbrown::HashMap;

type Hook<'a, 'h> =
    Box<dyn FnMut(&'a ASTContext, Node<'a>, &VisitInfo<'a>) -> Result<Option<Node<'a>>> + 'h>;

#[derive(Default)]
struct Hooks<'a, 'h> {
    enter: Option<Hook<'a, 'h>>,
    leave: Option<Hook<'a, 'h>>,
}

/// A [Folder] that's configured with closures per kind of node.
///
/// Kinds without hooks are walked through transparently: their children are still visited and
/// they're only rebuilt when one of their children has been replaced.
///
/// ```
/// use graphql_syntax::{ast::*, visit::*};
///
/// let ctx = ASTContext::new();
/// let document = Document::parse(&ctx, "{ a { b } }").unwrap();
///
/// let mut names = Vec::new();
/// let mut visitors = Visitors::new().on_leave(ASTKind::Name, |_ctx, node, _info| {
///     if let Node::Name(name) = node {
///         names.push(name.value);
///     }
///     Ok(None)
/// });
/// document.fold(&ctx, &mut visitors).unwrap();
/// drop(visitors);
/// assert_eq!(names, ["a", "b"]);
/// ```
#[derive(Default)]
pub struct Visitors<'a, 'h> {
    hooks: HashMap<ASTKind, Hooks<'a, 'h>>,
}

impl<'a, 'h> Visitors<'a, 'h> {
    pub fn new() -> Self {
        Visitors {
            hooks: HashMap::new(),
        }
    }

    /// Registers a hook that's called before the children of nodes of the given kind are visited.
    pub fn on_enter<F>(mut self, kind: ASTKind, hook: F) -> Self
    where
        F: FnMut(&'a ASTContext, Node<'a>, &VisitInfo<'a>) -> Result<Option<Node<'a>>> + 'h,
    {
        self.hooks.entry(kind).or_default().enter = Some(Box::new(hook));
        self
    }

    /// Registers a hook that's called after the children of nodes of the given kind are visited.
    pub fn on_leave<F>(mut self, kind: ASTKind, hook: F) -> Self
    where
        F: FnMut(&'a ASTContext, Node<'a>, &VisitInfo<'a>) -> Result<Option<Node<'a>>> + 'h,
    {
        self.hooks.entry(kind).or_default().leave = Some(Box::new(hook));
        self
    }

    pub fn has_hooks(&self, kind: ASTKind) -> bool {
        self.hooks.contains_key(&kind)
    }
}

impl<'a, 'h> Folder<'a> for Visitors<'a, 'h> {
    #[inline]
    fn enter(
        &mut self,
        ctx: &'a ASTContext,
        node: Node<'a>,
        info: &VisitInfo<'a>,
    ) -> Result<Option<Node<'a>>> {
        match self.hooks.get_mut(&node.kind()) {
            Some(Hooks {
                enter: Some(hook), ..
            }) => hook(ctx, node, info),
            _ => Ok(None),
        }
    }

    #[inline]
    fn leave(
        &mut self,
        ctx: &'a ASTContext,
        node: Node<'a>,
        info: &VisitInfo<'a>,
    ) -> Result<Option<Node<'a>>> {
        match self.hooks.get_mut(&node.kind()) {
            Some(Hooks {
                leave: Some(hook), ..
            }) => hook(ctx, node, info),
            _ => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;
    use crate::visit::FoldNode;
    use std::cell::RefCell;

    #[test]
    fn hooks_by_kind() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "query Q { a ...F } fragment F on T { b }").unwrap();
        let events = RefCell::new(Vec::new());
        let mut visitors = Visitors::new()
            .on_enter(ASTKind::Field, |_, node, info| {
                events.borrow_mut().push(format!("enter {} at {}", node.kind(), info.path));
                Ok(None)
            })
            .on_leave(ASTKind::FragmentSpread, |_, node, _| {
                events.borrow_mut().push(format!("leave {}", node.kind()));
                Ok(None)
            });
        assert!(visitors.has_hooks(ASTKind::Field));
        assert!(!visitors.has_hooks(ASTKind::NamedTypeSet));
        let folded = document.fold(&ctx, &mut visitors).unwrap();
        assert!(std::ptr::eq(folded, document));
        drop(visitors);
        assert_eq!(
            events.into_inner(),
            [
                "enter Field at definitions.0.selectionSet.selections.0",
                "leave Fragment Spread",
                "enter Field at definitions.1.selectionSet.selections.0",
            ]
        );
    }

    #[test]
    fn replaces_nodes_under_transparent_kinds() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "type A implements B & C { a: Int }").unwrap();
        let mut visitors = Visitors::new().on_leave(ASTKind::Name, |ctx, node, info| {
            match (node, info.parent) {
                (Node::Name(name), Some(Node::NamedType(_))) => {
                    let value = ctx.alloc_string(name.value.to_lowercase());
                    Ok(Some(Node::Name(ctx.alloc(Name { value }))))
                }
                _ => Ok(None),
            }
        });
        let folded = document.fold(&ctx, &mut visitors).unwrap();
        assert_eq!(
            folded,
            Document::parse(&ctx, "type A implements b & c { a: int }").unwrap()
        );
    }
}
