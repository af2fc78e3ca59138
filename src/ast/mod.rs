//! # GraphQL Language AST
//!
//! The `graphql_syntax::ast` module contains the GraphQL language AST, covering both executable
//! documents and the type system definition language, and traits to parse and print the AST.
//! Comments in the source text are kept and attached to the nodes they belong to.
//! [Reference](https://spec.graphql.org/October2021/#sec-Language)
//!
//! It's easiest to use this module by importing all of it, however, its three main parts are:
//! - [`ASTContext`], a context containing an arena that defines the lifetime for an AST
//! - [`ParseNode`], a trait using which AST Nodes are parsed from source text
//! - [`PrintNode`], a trait using which AST Nodes are printed into source text
//!
//! The following workflow describes the minimum that's done using this module and while an AST
//! Context is active in the given scope.
//!
//! ```
//! use graphql_syntax::ast::*;
//!
//! // Create an AST Context for a document
//! let ctx = ASTContext::new();
//!
//! // Parse a source text into a Document AST root node
//! let ast = Document::parse(&ctx, "# comment\n{ field }").unwrap();
//!
//! // Print the Document node to an output String
//! assert_eq!(ast.print(), "{field}\n");
//! assert_eq!(
//!     ast.print_with(PrintOptions::new().preserve_comments(true)),
//!     "# comment\n{field}\n"
//! );
//! ```
//!
//! The lower layers are public as well: [`tokenize`] lexes source text lazily, including
//! comments, and [`TokenStream`] groups comments with the tokens they're attached to.

#[allow(clippy::module_inception)]
mod ast;

mod ast_conversion;
mod ast_kind;
mod lexer;
mod parser;
mod printer;
mod token_stream;

pub use ast::*;
pub use ast_kind::ASTKind;
pub use lexer::{tokenize, Token, TokenKind, Tokens};
pub use parser::{parse, ParseNode};
pub use printer::{print_list, PrintNode, PrintOptions};
pub use token_stream::{Peeked, TokenStream};
