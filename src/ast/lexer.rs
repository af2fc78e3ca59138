use crate::error::{get_location, print_span, Error, ErrorType, Result};
use log::debug;
use logos::{Lexer, Logos, Span};
use std::fmt;

#[cfg(feature = "json")]
use serde::Serialize;

#[derive(Clone, Copy)]
pub struct Extras<'a> {
    pub arena: &'a bumpalo::Bump,
}

#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(extras = Extras<'s>)]
pub enum Token<'a> {
    #[token("!")]
    Exclam,

    #[token("$")]
    Dollar,

    #[token("&")]
    Ampersand,

    #[token("(")]
    ParenOpen,

    #[token(")")]
    ParenClose,

    #[token("...")]
    Ellipsis,

    #[token(":")]
    Colon,

    #[token("=")]
    Equal,

    #[token("@")]
    At,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    #[token("{")]
    BraceOpen,

    #[token("|")]
    Pipe,

    #[token("}")]
    BraceClose,

    #[regex(r"[_a-zA-Z][_0-9a-zA-Z]*", |lex| lex.slice())]
    Name(&'a str),

    #[regex(r"-?(0|[1-9][0-9]*)", |lex| lex.slice())]
    Int(&'a str),

    #[regex(r"-?(0|[1-9][0-9]*)[.][0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice())]
    #[regex(r"-?(0|[1-9][0-9]*)[eE][+-]?[0-9]+", |lex| lex.slice())]
    Float(&'a str),

    #[token("\"\"\"", lex_block_string)]
    BlockString(&'a str),

    #[token("\"", lex_string)]
    String(&'a str),

    #[regex(r"#[^\n\r]*", |lex| &lex.slice()[1..])]
    Comment(&'a str),

    #[error]
    #[regex(r"[ \t\r\n,\u{FEFF}]+", logos::skip)]
    // Numbers with leading zeros or directly followed by a name or a dot
    #[regex(r"-?0[0-9]+")]
    #[regex(r"-?(0|[1-9][0-9]*)([.][0-9]+)?([eE][+-]?[0-9]+)?[._a-zA-Z]")]
    Error,

    /// Token indicates the end of the input
    End,
}

/// The kind of a lexed token.
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TokenKind {
    Punctuator,
    Name,
    IntValue,
    FloatValue,
    StringValue,
    BlockStringValue,
    /// A comment. The lexer reports every comment with this kind, and block comments keep it
    /// once they're attached to the token that follows them.
    Comment,
    /// A comment attached after a token on the same line. Only [`Comment::kind`] reports this
    /// kind, since the lexer can't tell inline comments apart without looking back.
    ///
    /// [`Comment::kind`]: crate::ast::Comment::kind
    InlineComment,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::Punctuator => "token",
            TokenKind::Name => "Name",
            TokenKind::IntValue => "Int",
            TokenKind::FloatValue => "Float",
            TokenKind::StringValue => "String",
            TokenKind::BlockStringValue => "Block String",
            TokenKind::Comment => "Comment",
            TokenKind::InlineComment => "Inline Comment",
        })
    }
}

impl<'a> Token<'a> {
    /// Returns the kind of this token. Punctuators, `Error` and `End` are reported as punctuators.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Name(_) => TokenKind::Name,
            Token::Int(_) => TokenKind::IntValue,
            Token::Float(_) => TokenKind::FloatValue,
            Token::String(_) => TokenKind::StringValue,
            Token::BlockString(_) => TokenKind::BlockStringValue,
            Token::Comment(_) => TokenKind::Comment,
            _ => TokenKind::Punctuator,
        }
    }

    /// Returns the text of this token, which is unescaped for strings and excludes the `#` for
    /// comments.
    pub fn value(&self) -> &'a str {
        match self {
            Token::Exclam => "!",
            Token::Dollar => "$",
            Token::Ampersand => "&",
            Token::ParenOpen => "(",
            Token::ParenClose => ")",
            Token::Ellipsis => "...",
            Token::Colon => ":",
            Token::Equal => "=",
            Token::At => "@",
            Token::BracketOpen => "[",
            Token::BracketClose => "]",
            Token::BraceOpen => "{",
            Token::Pipe => "|",
            Token::BraceClose => "}",
            Token::Name(value)
            | Token::Int(value)
            | Token::Float(value)
            | Token::BlockString(value)
            | Token::String(value)
            | Token::Comment(value) => value,
            Token::Error => "",
            Token::End => "",
        }
    }
}

#[derive(Logos, Debug, PartialEq)]
enum BlockPart {
    #[regex(r#"[^"\\]+"#)]
    Text,

    #[token("\"")]
    Quote,

    #[token("\\")]
    Backslash,

    #[token(r#"\""""#)]
    EscapedEndBlock,

    #[token(r#"""""#)]
    EndBlock,

    #[error]
    Error,
}

#[derive(Logos, Debug, PartialEq)]
enum StringPart {
    #[regex(r#"[^\n\r\\"]+"#)]
    Text,

    #[regex(r"\\u[0-9a-fA-F][0-9a-fA-F][0-9a-fA-F][0-9a-fA-F]")]
    EscapedCodepoint,

    #[regex(r"\\u\{[0-9a-fA-F]+\}")]
    EscapedVariableCodepoint,

    #[token(r#"\""#)]
    EscapedQuote,
    #[token(r#"\\"#)]
    EscapedBackslash,
    #[token(r#"\/"#)]
    EscapedSlash,
    #[token(r#"\b"#)]
    EscapedBackspace,
    #[token(r#"\f"#)]
    EscapedLinefeed,
    #[token(r#"\n"#)]
    EscapedNewline,
    #[token(r#"\r"#)]
    EscapedReturn,
    #[token(r#"\t"#)]
    EscapedTab,

    #[token("\"")]
    EndString,

    #[error]
    Error,
}

#[inline]
fn parse_hex(digits: &str) -> Option<u32> {
    use lexical_core::*;
    const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
    const OPTIONS: ParseIntegerOptions = ParseIntegerOptions::new();
    parse_with_options::<u32, FORMAT>(digits.as_bytes(), &OPTIONS).ok()
}

fn lex_escaped_string<'a>(lex: &mut Lexer<'a, Token<'a>>, mut output: String) -> Option<&'a str> {
    let mut sublex = StringPart::lexer(lex.remainder());
    while let Some(token) = sublex.next() {
        match token {
            StringPart::Error => break,
            StringPart::Text => output.push_str(sublex.slice()),
            StringPart::EscapedQuote => output.push('"'),
            StringPart::EscapedBackslash => output.push('\\'),
            StringPart::EscapedSlash => output.push('/'),
            StringPart::EscapedBackspace => output.push(8 as char),
            StringPart::EscapedLinefeed => output.push(12 as char),
            StringPart::EscapedNewline => output.push('\n'),
            StringPart::EscapedReturn => output.push('\r'),
            StringPart::EscapedTab => output.push('\t'),
            StringPart::EscapedCodepoint => {
                let code = parse_hex(&sublex.slice()[2..])?;
                if (0xD800..=0xDBFF).contains(&code) {
                    // A high surrogate is combined with a directly following low surrogate
                    let low = sublex
                        .remainder()
                        .strip_prefix("\\u")
                        .and_then(|rest| rest.get(..4))
                        .and_then(parse_hex)
                        .filter(|low| (0xDC00..=0xDFFF).contains(low));
                    if let Some(low) = low {
                        sublex.bump(6);
                        let code = 0x10000 + ((code - 0xD800) << 10) + (low - 0xDC00);
                        output.push(std::char::from_u32(code)?);
                        continue;
                    }
                }
                output.push(std::char::from_u32(code)?);
            }
            StringPart::EscapedVariableCodepoint => {
                let slice = sublex.slice();
                let code = parse_hex(&slice[3..slice.len() - 1])?;
                output.push(std::char::from_u32(code)?);
            }
            StringPart::EndString => {
                lex.bump(sublex.span().end);
                return Some(lex.extras.arena.alloc_str(&output));
            }
        }
    }
    None
}

fn lex_string<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Option<&'a str> {
    // Strings without escape sequences are sliced from the source directly and only strings
    // that need unescaping are passed on to the StringPart lexer
    let remainder = lex.remainder();
    for (i, c) in remainder.char_indices() {
        match c {
            '\n' | '\r' => return None,
            '\\' => {
                lex.bump(i);
                return lex_escaped_string(lex, remainder[0..i].to_string());
            }
            '"' => {
                lex.bump(i + 1);
                return Some(&remainder[0..i]);
            }
            _ => {}
        }
    }
    None
}

fn lex_block_string<'a>(lex: &mut Lexer<'a, Token<'a>>) -> Option<&'a str> {
    let mut raw = String::new();
    let mut sublex = BlockPart::lexer(lex.remainder());
    while let Some(token) = sublex.next() {
        match token {
            BlockPart::Text | BlockPart::Quote | BlockPart::Backslash => {
                raw.push_str(sublex.slice())
            }
            BlockPart::EscapedEndBlock => raw.push_str("\"\"\""),
            BlockPart::EndBlock => {
                lex.bump(sublex.span().end);
                let output = dedent_block_string(&raw);
                return Some(lex.extras.arena.alloc_str(&output));
            }
            BlockPart::Error => break,
        }
    }
    None
}

fn split_lines(raw: &str) -> std::vec::Vec<&str> {
    let bytes = raw.as_bytes();
    let mut lines = std::vec::Vec::new();
    let mut start = 0;
    let mut index = 0;
    while index < bytes.len() {
        match bytes[index] {
            b'\n' => {
                lines.push(&raw[start..index]);
                index += 1;
                start = index;
            }
            b'\r' => {
                lines.push(&raw[start..index]);
                index += if bytes.get(index + 1) == Some(&b'\n') { 2 } else { 1 };
                start = index;
            }
            _ => index += 1,
        }
    }
    lines.push(&raw[start..]);
    lines
}

/// Removes the common indentation of all lines but the first and trims blank lines at the
/// start and end of a block string's raw content.
pub(crate) fn dedent_block_string(raw: &str) -> String {
    let lines = split_lines(raw);
    let mut common_indent = usize::MAX;
    let mut first_line: Option<usize> = None;
    let mut last_line = 0;
    for (index, line) in lines.iter().enumerate() {
        let indent = line.len() - line.trim_start_matches(|c| c == ' ' || c == '\t').len();
        if indent == line.len() {
            continue;
        }
        first_line.get_or_insert(index);
        last_line = index;
        if index != 0 && indent < common_indent {
            common_indent = indent;
        }
    }

    let first_line = match first_line {
        Some(first_line) => first_line,
        None => return String::new(),
    };

    let mut output = String::with_capacity(raw.len());
    for (index, line) in lines
        .iter()
        .enumerate()
        .take(last_line + 1)
        .skip(first_line)
    {
        if index > first_line {
            output.push('\n');
        }
        if index == 0 {
            output.push_str(line);
        } else if line.len() > common_indent {
            output.push_str(&line[common_indent..]);
        }
    }
    output
}

/// Creates a lexical error for the token at the given span.
///
/// The message quotes the source text from the error onwards, up to the end of its line and
/// at most 20 characters long.
pub(crate) fn lexical_error(source: &str, span: Span) -> Error {
    let line = source[span.start..]
        .split(|c| c == '\n' || c == '\r')
        .next()
        .unwrap_or_default();
    let text: String = line.chars().take(20).collect();
    let message = format!("Unexpected character sequence \"{}\"", text);
    debug!("{} at {}..{}", message, span.start, span.end);
    Error::new_with_context(
        message,
        Some(get_location(source, span.clone())),
        print_span(source, span),
        ErrorType::Lexical,
    )
}

/// A lazy iterator over the tokens of a source text, including comments.
///
/// The first lexical error is yielded as an [Error] after which the iterator ends.
pub struct Tokens<'a> {
    lexer: Lexer<'a, Token<'a>>,
    source: &'a str,
    done: bool,
}

impl<'a> Iterator for Tokens<'a> {
    type Item = Result<Token<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.lexer.next() {
            Some(Token::Error) => {
                self.done = true;
                Some(Err(lexical_error(self.source, self.lexer.span())))
            }
            Some(token) => Some(Ok(token)),
            None => {
                self.done = true;
                None
            }
        }
    }
}

/// Tokenizes a source text lazily. String values that need unescaping are allocated in the
/// AST Context's arena.
///
/// ```
/// use graphql_syntax::ast::{tokenize, ASTContext, Token};
///
/// let ctx = ASTContext::new();
/// let tokens = tokenize(&ctx, "{ field } # done")
///     .collect::<Result<Vec<_>, _>>()
///     .unwrap();
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[3], Token::Comment(" done"));
/// ```
pub fn tokenize<'a>(ctx: &'a crate::ast::ASTContext, source: &'a str) -> Tokens<'a> {
    Tokens {
        lexer: Token::lexer_with_extras(source, Extras { arena: &ctx.arena }),
        source,
        done: false,
    }
}

#[cfg(test)]
mod tests {
    use super::{dedent_block_string, tokenize, Extras, Token, TokenKind};
    use crate::ast::ASTContext;
    use crate::error::ErrorType;
    use bumpalo::Bump;
    use logos::Logos;

    #[test]
    fn empty() {
        let arena = Bump::new();
        let mut lex = Token::lexer_with_extras("", Extras { arena: &arena });
        assert_eq!(lex.next(), None);
        let mut lex = Token::lexer_with_extras(",,  \u{FEFF}\r\n\t", Extras { arena: &arena });
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn symbols() {
        let arena = Bump::new();
        let extras = Extras { arena: &arena };
        let mut lex = Token::lexer_with_extras("!$&()...:=@[]{|}", extras);
        assert_eq!(lex.next(), Some(Token::Exclam));
        assert_eq!(lex.next(), Some(Token::Dollar));
        assert_eq!(lex.next(), Some(Token::Ampersand));
        assert_eq!(lex.next(), Some(Token::ParenOpen));
        assert_eq!(lex.next(), Some(Token::ParenClose));
        assert_eq!(lex.next(), Some(Token::Ellipsis));
        assert_eq!(lex.next(), Some(Token::Colon));
        assert_eq!(lex.next(), Some(Token::Equal));
        assert_eq!(lex.next(), Some(Token::At));
        assert_eq!(lex.next(), Some(Token::BracketOpen));
        assert_eq!(lex.next(), Some(Token::BracketClose));
        assert_eq!(lex.next(), Some(Token::BraceOpen));
        assert_eq!(lex.next(), Some(Token::Pipe));
        assert_eq!(lex.next(), Some(Token::BraceClose));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn names() {
        let arena = Bump::new();
        let mut lex = Token::lexer_with_extras("hello _world1", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::Name("hello")));
        assert_eq!(lex.next(), Some(Token::Name("_world1")));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn comments() {
        let arena = Bump::new();
        let mut lex =
            Token::lexer_with_extras("# comment\n hello #trailing", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::Comment(" comment")));
        assert_eq!(lex.next(), Some(Token::Name("hello")));
        assert_eq!(lex.next(), Some(Token::Comment("trailing")));
        assert_eq!(lex.next(), None);
        assert_eq!(Token::Comment("x").kind(), TokenKind::Comment);
    }

    #[test]
    fn integers() {
        let arena = Bump::new();
        let mut lex = Token::lexer_with_extras("1 -1 123 -123 0 -0", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::Int("1")));
        assert_eq!(lex.next(), Some(Token::Int("-1")));
        assert_eq!(lex.next(), Some(Token::Int("123")));
        assert_eq!(lex.next(), Some(Token::Int("-123")));
        assert_eq!(lex.next(), Some(Token::Int("0")));
        assert_eq!(lex.next(), Some(Token::Int("-0")));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn floats() {
        let arena = Bump::new();
        let mut lex = Token::lexer_with_extras(
            "1.0 -10.10 -10.10E10 1.1e-1 1e1 0.0 123e4 123.0e4",
            Extras { arena: &arena },
        );
        assert_eq!(lex.next(), Some(Token::Float("1.0")));
        assert_eq!(lex.next(), Some(Token::Float("-10.10")));
        assert_eq!(lex.next(), Some(Token::Float("-10.10E10")));
        assert_eq!(lex.next(), Some(Token::Float("1.1e-1")));
        assert_eq!(lex.next(), Some(Token::Float("1e1")));
        assert_eq!(lex.next(), Some(Token::Float("0.0")));
        assert_eq!(lex.next(), Some(Token::Float("123e4")));
        assert_eq!(lex.next(), Some(Token::Float("123.0e4")));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn bad_numbers() {
        let arena = Bump::new();
        for source in ["0123", "-01", "123abc", "1.", "1.5e", "12_"] {
            let mut lex = Token::lexer_with_extras(source, Extras { arena: &arena });
            assert_eq!(lex.next(), Some(Token::Error), "{}", source);
        }
    }

    #[test]
    fn strings() {
        let arena = Bump::new();
        let mut lex = Token::lexer_with_extras("\"hello world\"", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::String("hello world")));
        assert_eq!(lex.next(), None);
        let mut lex = Token::lexer_with_extras("\"\"", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::String("")));
        assert_eq!(lex.next(), None);
        let mut lex =
            Token::lexer_with_extras("\"hello \\\" \\n \\/ world\"", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::String("hello \" \n / world")));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn unicode_escapes() {
        let arena = Bump::new();
        let mut lex = Token::lexer_with_extras(
            r#""\u00e9 \u{1F600} \uD83D\uDE00""#,
            Extras { arena: &arena },
        );
        assert_eq!(lex.next(), Some(Token::String("é 😀 😀")));
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn bad_strings() {
        let arena = Bump::new();
        for source in [
            "\"\\ \"",
            "\"\n\"",
            "\"\r\"",
            "\"unterminated",
            r#""\uD800""#,
            r#""\uDE00\uD83D""#,
            r#""\u{110000}""#,
            r#""\u{D800}""#,
        ] {
            let mut lex = Token::lexer_with_extras(source, Extras { arena: &arena });
            assert_eq!(lex.next(), Some(Token::Error), "{}", source);
        }
    }

    #[test]
    fn block_strings() {
        let arena = Bump::new();
        let mut lex = Token::lexer_with_extras("\"\"\"hello block\"\"\"", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::BlockString("hello block")));
        assert_eq!(lex.next(), None);
        let mut lex = Token::lexer_with_extras("\"\"\"\"\"\"", Extras { arena: &arena });
        assert_eq!(lex.next(), Some(Token::BlockString("")));
        assert_eq!(lex.next(), None);
        let mut lex = Token::lexer_with_extras(
            "\"\"\"\n    hello\n      \\\"\"\" \\n\n    block\n  \"\"\"",
            Extras { arena: &arena },
        );
        assert_eq!(
            lex.next(),
            Some(Token::BlockString("hello\n  \"\"\" \\n\nblock"))
        );
        assert_eq!(lex.next(), None);
    }

    #[test]
    fn block_string_dedent() {
        assert_eq!(dedent_block_string("\n\n    a\n      b\n    c\n\n"), "a\n  b\nc");
        assert_eq!(dedent_block_string("first\n    a\n  b"), "first\n  a\nb");
        assert_eq!(dedent_block_string("  \n\t\n"), "");
        assert_eq!(dedent_block_string("a\r\n  b\r  c"), "a\nb\nc");
        assert_eq!(dedent_block_string("  a\n\n   b"), "  a\n\nb");
    }

    #[test]
    fn token_iterator() {
        let ctx = ASTContext::new();
        let tokens = tokenize(&ctx, "query { a }").collect::<Vec<_>>();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0], Ok(Token::Name("query")));
        assert_eq!(tokens[0].as_ref().map(Token::kind), Ok(TokenKind::Name));
    }

    #[test]
    fn lexical_errors() {
        let ctx = ASTContext::new();
        let mut tokens = tokenize(&ctx, "{ a(b: 0123456789012345678901234) }");
        assert_eq!(tokens.next(), Some(Ok(Token::BraceOpen)));
        assert_eq!(tokens.next(), Some(Ok(Token::Name("a"))));
        assert_eq!(tokens.next(), Some(Ok(Token::ParenOpen)));
        assert_eq!(tokens.next(), Some(Ok(Token::Name("b"))));
        assert_eq!(tokens.next(), Some(Ok(Token::Colon)));
        let error = tokens.next().unwrap().unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Lexical);
        assert_eq!(
            error.message(),
            "Unexpected character sequence \"01234567890123456789\""
        );
        assert_eq!(error.location().as_ref().map(|loc| loc.column), Some(8));
        assert_eq!(tokens.next(), None);
    }
}
