use super::{Node, Path, PathSegment};
use crate::error::Result;
use log::trace;

/// Information on the node that's currently being visited, which is passed to all traversal hooks.
#[derive(Debug, Clone, Default)]
pub struct VisitInfo<'a> {
    /// The path from the node the traversal started at to the current node.
    pub path: Path,
    /// The node that contains the current node, if any.
    pub parent: Option<Node<'a>>,
}

impl<'a> VisitInfo<'a> {
    /// Returns the key of the current node in its parent, which is a field name, or an index when
    /// the current node is part of a list.
    pub fn key(&self) -> Option<&PathSegment> {
        self.path.last()
    }
}

/// The outputs of a node's children, which a [Traversal] has already left.
///
/// Outputs are kept in the order the children were visited in and are looked up by the field
/// they were stored in.
#[derive(Debug)]
pub struct Children<O> {
    pub(crate) entries: Vec<(PathSegment, Option<usize>, O)>,
}

impl<O> Default for Children<O> {
    fn default() -> Self {
        Children {
            entries: Vec::new(),
        }
    }
}

impl<O> Children<O> {
    pub(crate) fn push(&mut self, field: PathSegment, index: Option<usize>, output: O) {
        self.entries.push((field, index, output));
    }

    /// Removes and returns the output of a single child stored in `field`.
    pub fn take(&mut self, field: PathSegment) -> Option<O> {
        let position = self.entries.iter().position(|entry| entry.0 == field)?;
        Some(self.entries.remove(position).2)
    }

    /// Removes and returns the outputs of all children stored in the list `field`, in order.
    pub fn take_all(&mut self, field: PathSegment) -> Vec<O> {
        let mut taken = Vec::new();
        let mut position = 0;
        while position < self.entries.len() {
            if self.entries[position].0 == field {
                taken.push(self.entries.remove(position).2);
            } else {
                position += 1;
            }
        }
        taken
    }

    pub fn iter(&self) -> impl Iterator<Item = &O> {
        self.entries.iter().map(|entry| &entry.2)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Trait for a traversal that walks an AST depth-first and folds it into outputs bottom-up.
///
/// `enter` is called before a node's children are visited and may return a replacement node,
/// whose children are then visited instead. `leave` is called after all children have been visited
/// and receives their outputs.
///
/// Nodes are visited in the order their fields are declared in, with comments first, which
/// matches the order they appear in the source text.
pub trait Traversal<'a> {
    type Output;

    #[inline]
    fn enter(&mut self, _node: Node<'a>, _info: &VisitInfo<'a>) -> Result<Option<Node<'a>>> {
        Ok(None)
    }

    fn leave(
        &mut self,
        node: Node<'a>,
        children: Children<Self::Output>,
        info: &VisitInfo<'a>,
    ) -> Result<Self::Output>;
}

fn walk<'a, T: Traversal<'a>>(
    node: Node<'a>,
    traversal: &mut T,
    info: &mut VisitInfo<'a>,
) -> Result<T::Output> {
    let node = traversal.enter(node, info)?.unwrap_or(node);
    let parent = info.parent.replace(node);
    let mut children = Children::default();
    for (field, index, child) in node.children() {
        info.path.push(field);
        if let Some(index) = index {
            info.path.push(PathSegment::Index(index));
        }
        let output = walk(child, traversal, info);
        if index.is_some() {
            info.path.pop();
        }
        info.path.pop();
        children.push(field, index, output?);
    }
    info.parent = parent;
    traversal.leave(node, children, info)
}

/// Traverses a node and all its descendants.
pub fn traverse<'a, T: Traversal<'a>>(node: Node<'a>, traversal: &mut T) -> Result<T::Output> {
    trace!("Traversing {}", node.kind());
    walk(node, traversal, &mut VisitInfo::default())
}

/// Traverses each node of a list independently, with paths starting at the node's index.
pub fn traverse_list<'a, T, I>(nodes: I, traversal: &mut T) -> Result<Vec<T::Output>>
where
    T: Traversal<'a>,
    I: IntoIterator<Item = Node<'a>>,
{
    nodes
        .into_iter()
        .enumerate()
        .map(|(index, node)| {
            let mut info = VisitInfo::default();
            info.path.push(PathSegment::Index(index));
            walk(node, traversal, &mut info)
        })
        .collect()
}
