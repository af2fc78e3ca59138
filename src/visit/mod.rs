//! # Traversing and Transforming GraphQL ASTs
//!
//! The `graphql_syntax::visit` module contains a generic, depth-first traversal engine for ASTs.
//! All nodes are handed to traversals as [Node] handles, a `Copy` enum with one variant per kind
//! of node, which any node or union can be turned into using the [AsNode] trait.
//!
//! There are three ways to use the engine:
//!
//! - The [Traversal] trait folds an AST bottom-up into an output value. Its `leave` callback
//!   receives the outputs of a node's children, which is how the printer is implemented.
//! - The [Folder] trait transforms an AST into a new AST by returning replacement nodes, using
//!   [`FoldNode::fold`].
//! - [Visitors] is a [Folder] that's configured with closures per [`crate::ast::ASTKind`].
//!
//! In this example we'll define a traversal that counts all fields in a document:
//!
//! ```
//! use graphql_syntax::{ast::*, error::Result, visit::*};
//!
//! struct CountFields;
//!
//! impl<'a> Traversal<'a> for CountFields {
//!     type Output = usize;
//!
//!     fn leave(
//!         &mut self,
//!         node: Node<'a>,
//!         children: Children<usize>,
//!         _info: &VisitInfo<'a>,
//!     ) -> Result<usize> {
//!         let fields = children.iter().sum();
//!         Ok(match node {
//!             Node::Field(_) => fields + 1,
//!             _ => fields,
//!         })
//!     }
//! }
//!
//! let ctx = ASTContext::new();
//! let document = Document::parse(&ctx, "{ a { b c } }").unwrap();
//! assert_eq!(traverse(document.as_node(), &mut CountFields).unwrap(), 3);
//! ```
//!
//! Every callback receives a [VisitInfo] carrying the [Path] to the current node, its parent
//! node, and its key in that parent.

mod folder;
mod node;
mod path;
mod traverse;
mod visitors;

pub use folder::*;
pub use node::{AsNode, FromNode, Node};
pub use path::*;
pub use traverse::*;
pub use visitors::Visitors;
