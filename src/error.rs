//! # Error and Result for this crate
//!
//! This crate defines a common [Error] structure that's used across this crate. Lexing, parsing
//! and traversing all report their failures using it, distinguished by [ErrorType].

use logos::Span;
use std::{error, fmt, result};

/// This crate's result type using the [Error] structure.
pub type Result<T> = result::Result<T, Error>;

/// This crate's error structure which internal errors are converted into.
///
/// The error is split into a general message and a context string. For parsing, the context
/// string is populated with a snippet of the source text pointing at the offending token.
///
/// The Error implements both the [`fmt::Display`] and [`fmt::Debug`] traits. It also implements
/// [`error::Error`] so that it can be used with existing patterns for error handling.
#[derive(PartialEq, Eq, Clone)]
pub struct Error {
    pub(crate) message: String,
    pub(crate) location: Option<Location>,
    pub(crate) context: Option<String>,
    pub(crate) error_type: ErrorType,
}

/// The kind of failure an [Error] represents.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorType {
    /// The source text contains characters or escape sequences that don't form a token.
    Lexical,
    /// The tokens don't match the grammar, including a premature end of input.
    Syntax,
    /// A traversal hook returned a node that can't take the place of the node it replaces.
    Traversal,
}

impl Error {
    /// Create a new Error with only a main message from an input string.
    pub fn new<S: Into<String>>(message: S, error_type: ErrorType) -> Self {
        Self {
            message: message.into(),
            location: None,
            context: None,
            error_type,
        }
    }

    /// Create a new Error with a main message and a context string from two input strings.
    pub fn new_with_context<S: Into<String>>(
        message: S,
        location: Option<Location>,
        context: S,
        error_type: ErrorType,
    ) -> Self {
        Self {
            message: message.into(),
            location,
            context: Some(context.into()),
            error_type,
        }
    }

    /// Returns the message of the current error. The context is discarded.
    pub fn message(&self) -> &str {
        self.message.as_ref()
    }

    /// Returns the location of the current error.
    pub fn location(&self) -> &Option<Location> {
        &self.location
    }

    /// Returns the kind of the current error.
    pub fn error_type(&self) -> ErrorType {
        self.error_type
    }

    /// Formats this error, with the option to include the context information as well,
    /// which will cause the string to be multi-line.
    pub fn print(&self, include_ctx: bool) -> String {
        let formatted = match self.error_type {
            ErrorType::Lexical => format!("Lexical Error: {}", self.message),
            ErrorType::Syntax => format!("Syntax Error: {}", self.message),
            ErrorType::Traversal => format!("Traversal Error: {}", self.message),
        };

        match self.context {
            Some(ref context) if include_ctx => format!("{}\n{}", formatted, context),
            _ => formatted,
        }
    }
}

pub(crate) fn print_span(source: &str, span: Span) -> String {
    let mut out = String::new();
    let start = source[..span.start]
        .rfind('\n')
        .and_then(|start| source[..start].rfind('\n'))
        .map_or(0, |idx| idx + 1);
    let start_line = source[..start].matches('\n').count() + 1;

    let end = source[span.end..]
        .find('\n')
        .map_or(source.len(), |idx| idx + span.end);

    let snippet = &source[start..end];
    let line_count = snippet.lines().count().max(1);
    let line_num_pad = (start_line + line_count - 1).to_string().len();
    for (index, line) in snippet.lines().enumerate() {
        if index > 0 {
            out.push('\n');
        }
        let line_num = (start_line + index).to_string();
        out.push_str(&" ".repeat(line_num_pad - line_num.len() + 1));
        out.push_str(&line_num);
        out.push_str(" | ");
        out.push_str(line);
    }
    if !source[span.start..span.end].contains('\n') {
        let start = source[..span.start].rfind('\n').map_or(0, |idx| idx + 1);
        out.push('\n');
        out.push_str(&" ".repeat(line_num_pad + 1));
        out.push_str(" | ");
        out.push_str(&" ".repeat(source[start..span.start].chars().count()));
        out.push_str(&"^".repeat(source[span.start..span.end].chars().count().max(1)));
    };

    out
}

/// A line and column position in a source text, both starting at `1`.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

pub(crate) fn get_location(source: &str, span: Span) -> Location {
    let before = &source[..span.start];
    let line = before.matches('\n').count() + 1;
    let column = before
        .rfind('\n')
        .map_or(before, |idx| &before[idx + 1..])
        .chars()
        .count()
        + 1;
    Location { line, column }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print(true))
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\n{}\n", self)
    }
}

impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations() {
        let source = "query {\n  field\n}";
        assert_eq!(get_location(source, 0..5), Location { line: 1, column: 1 });
        assert_eq!(get_location(source, 10..15), Location { line: 2, column: 3 });
    }

    #[test]
    fn spans() {
        let source = "{\n  field(\n}";
        let out = print_span(source, 11..12);
        assert_eq!(out, " 2 |   field(\n 3 | }\n   | ^");
    }

    #[test]
    fn printing() {
        let error = Error::new_with_context("Oops", None, "context", ErrorType::Syntax);
        assert_eq!(error.print(false), "Syntax Error: Oops");
        assert_eq!(error.to_string(), "Syntax Error: Oops\ncontext");
        let error = Error::new("Oops", ErrorType::Lexical);
        assert_eq!(error.to_string(), "Lexical Error: Oops");
    }
}
