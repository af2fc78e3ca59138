//! `graphql_syntax`
//! =========
//!
//! _Comment-preserving GraphQL language handling._
//!
//! The **`graphql_syntax`** library lexes, parses, traverses and prints the GraphQL language,
//! covering both executable documents (operations and fragments) and the type system definition
//! language (schemas, types, directives and their extensions).
//!
//! Unlike most GraphQL parsers it doesn't discard comments. Every comment in a source text is
//! attached to the AST Node it belongs to, either as a block comment on its own line before the
//! node or as an inline comment trailing it, and may be printed again. This makes the crate suited
//! to tools that rewrite GraphQL documents that humans maintain, such as formatters and codemods.
//!
//! The crate is organised in layers:
//!
//! - [`ast`] contains the arena-allocated AST, the lexer, a token stream attaching comments to
//!   tokens, the recursive-descent parser and the printer.
//! - [`visit`] contains a generic traversal engine that walks any node depth-first, reports paths
//!   and parents, and may replace nodes to transform ASTs.
//! - [`error`] contains the error type all layers report failures with.
//!
//! [A good place to start learning more about this crate is the `ast` module...](ast)

pub mod ast;
pub mod error;
pub mod visit;

pub use bumpalo;

#[cfg(feature = "json")]
pub mod json;
