use super::{traverse, AsNode, Children, FromNode, Node, Traversal, VisitInfo};
use crate::ast::ASTContext;
use crate::error::{Error, ErrorType, Result};
use log::debug;

/// Trait for a folder that transforms an AST by replacing its nodes.
///
/// A Folder is used to traverse a GraphQL AST top-to-bottom, depth-first. Its `enter` callback is
/// called before a node's children are folded and its `leave` callback afterwards. Both may
/// return a replacement node. A node returned by `enter` has its children folded in place of the
/// original node's children.
///
/// The input AST is never mutated. Nodes whose descendants haven't changed are shared between the
/// input and output AST, and nodes that have changed are copied into the [`ASTContext`]'s arena.
///
/// Both callbacks have a default no-op implementation. A replacement has to fit the field it's
/// placed in, e.g. a [`crate::ast::Field`] may be replaced with any selection but not with a value,
/// otherwise folding stops with an [`ErrorType::Traversal`] error.
pub trait Folder<'a> {
    #[inline]
    fn enter(
        &mut self,
        _ctx: &'a ASTContext,
        _node: Node<'a>,
        _info: &VisitInfo<'a>,
    ) -> Result<Option<Node<'a>>> {
        Ok(None)
    }

    #[inline]
    fn leave(
        &mut self,
        _ctx: &'a ASTContext,
        _node: Node<'a>,
        _info: &VisitInfo<'a>,
    ) -> Result<Option<Node<'a>>> {
        Ok(None)
    }
}

struct FolderTraversal<'a, 'b, F> {
    ctx: &'a ASTContext,
    folder: &'b mut F,
}

impl<'a, 'b, F: Folder<'a>> Traversal<'a> for FolderTraversal<'a, 'b, F> {
    type Output = Node<'a>;

    #[inline]
    fn enter(&mut self, node: Node<'a>, info: &VisitInfo<'a>) -> Result<Option<Node<'a>>> {
        self.folder.enter(self.ctx, node, info)
    }

    fn leave(
        &mut self,
        node: Node<'a>,
        mut children: Children<Node<'a>>,
        info: &VisitInfo<'a>,
    ) -> Result<Node<'a>> {
        let unchanged = node
            .children()
            .iter()
            .zip(children.iter())
            .all(|((_, _, original), folded)| original.same(*folded));
        let node = if unchanged {
            node
        } else {
            node.rebuild(self.ctx, &mut children)?
        };
        Ok(self.folder.leave(self.ctx, node, info)?.unwrap_or(node))
    }
}

/// Trait for folding an AST node or union with a [Folder].
///
/// This is implemented for all nodes and unions.
pub trait FoldNode<'a>: AsNode<'a> + FromNode<'a> {
    /// Folds this node and returns the transformed node, which is this node itself when nothing
    /// has been replaced.
    fn fold<F: Folder<'a>>(&'a self, ctx: &'a ASTContext, folder: &mut F) -> Result<&'a Self> {
        let node = self.as_node();
        let folded = traverse(node, &mut FolderTraversal { ctx, folder })?;
        if folded.same(node) {
            return Ok(self);
        }
        match Self::from_node(folded) {
            Some(folded) => Ok(ctx.alloc(folded)),
            None => {
                let message = format!("{} can't be replaced with {}", node.kind(), folded.kind());
                debug!("{}", message);
                Err(Error::new(message, ErrorType::Traversal))
            }
        }
    }
}

impl<'a, T: AsNode<'a> + FromNode<'a>> FoldNode<'a> for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::*;

    struct RenameFields;

    impl<'a> Folder<'a> for RenameFields {
        fn leave(
            &mut self,
            ctx: &'a ASTContext,
            node: Node<'a>,
            info: &VisitInfo<'a>,
        ) -> Result<Option<Node<'a>>> {
            match (node, info.parent) {
                (Node::Name(name), Some(Node::Field(_))) if name.value == "a" => {
                    Ok(Some(Node::Name(ctx.alloc(Name { value: "renamed" }))))
                }
                _ => Ok(None),
            }
        }
    }

    #[test]
    fn rebuilds_changed_nodes() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "query { a b { a } } fragment F on T { c }").unwrap();
        let folded = document.fold(&ctx, &mut RenameFields).unwrap();
        let expected = Document::parse(&ctx, "query { renamed b { renamed } } fragment F on T { c }")
            .unwrap();
        assert_eq!(folded.definitions, expected.definitions);
        assert_eq!(document.operations().next().unwrap().selection_set.selections.len(), 2);
    }

    #[test]
    fn returns_input_when_unchanged() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "{ b }").unwrap();
        let folded = document.fold(&ctx, &mut RenameFields).unwrap();
        assert!(std::ptr::eq(document, folded));
    }

    struct SpreadToField;

    impl<'a> Folder<'a> for SpreadToField {
        fn enter(
            &mut self,
            ctx: &'a ASTContext,
            node: Node<'a>,
            _info: &VisitInfo<'a>,
        ) -> Result<Option<Node<'a>>> {
            match node {
                Node::FragmentSpread(spread) => {
                    let field = Field::parse(ctx, spread.name.value)?;
                    Ok(Some(Node::Field(field)))
                }
                _ => Ok(None),
            }
        }
    }

    #[test]
    fn replaces_on_enter() {
        let ctx = ASTContext::new();
        let selection_set = SelectionSet::parse(&ctx, "{ ...spread, other }").unwrap();
        let folded = selection_set.fold(&ctx, &mut SpreadToField).unwrap();
        assert_eq!(folded, SelectionSet::parse(&ctx, "{ spread, other }").unwrap());
    }

    struct NameToValue;

    impl<'a> Folder<'a> for NameToValue {
        fn leave(
            &mut self,
            ctx: &'a ASTContext,
            node: Node<'a>,
            _info: &VisitInfo<'a>,
        ) -> Result<Option<Node<'a>>> {
            match node {
                Node::Name(_) => Ok(Some(Node::NullValue(ctx.alloc(NullValue {
                    comments: ctx.vec(),
                })))),
                _ => Ok(None),
            }
        }
    }

    #[test]
    fn rejects_misplaced_replacements() {
        let ctx = ASTContext::new();
        let field = Field::parse(&ctx, "field").unwrap();
        let error = field.fold(&ctx, &mut NameToValue).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Traversal);
        assert_eq!(
            error.message(),
            "Null can't be placed in the name field of Field"
        );
    }
}
