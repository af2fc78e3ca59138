use super::ast::{ASTContext, BlockComment, Comment, Comments, InlineComment};
use super::lexer::{Extras, Token};
use bumpalo::collections::Vec;
use logos::{Lexer, Logos, Span};

/// A token together with the comments attached to it.
#[derive(Debug, PartialEq)]
pub struct Peeked<'a> {
    pub token: Token<'a>,
    /// The byte range of the token in the source text.
    pub span: Span,
    /// Block comments preceding the token, followed by an inline comment trailing it.
    pub comments: Comments<'a>,
}

/// A stream of tokens that groups comments with the tokens they're attached to.
///
/// Comments on their own lines are attached as block comments to the next token. A comment on the
/// same line as the token before it is attached to that token as an inline comment, which is
/// why the stream has to look one raw token past the token it's returning.
pub struct TokenStream<'a> {
    lexer: Lexer<'a, Token<'a>>,
    source: &'a str,
    buffered: Option<(Token<'a>, Span)>,
    peeked: Option<Peeked<'a>>,
}

#[inline]
fn has_line_break(gap: &str) -> bool {
    gap.contains(|c| c == '\n' || c == '\r')
}

impl<'a> TokenStream<'a> {
    pub fn new(ctx: &'a ASTContext, source: &'a str) -> Self {
        TokenStream {
            lexer: Token::lexer_with_extras(source, Extras { arena: &ctx.arena }),
            source,
            buffered: None,
            peeked: None,
        }
    }

    /// Returns the source text this stream is reading.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    #[inline]
    pub(crate) fn arena(&self) -> &'a bumpalo::Bump {
        self.lexer.extras.arena
    }

    fn next_raw(&mut self) -> (Token<'a>, Span) {
        if let Some(raw) = self.buffered.take() {
            return raw;
        }
        match self.lexer.next() {
            Some(token) => (token, self.lexer.span()),
            None => (Token::End, self.source.len()..self.source.len()),
        }
    }

    fn read(&mut self) -> Peeked<'a> {
        let mut comments = Vec::new_in(self.arena());
        let (mut token, mut span) = self.next_raw();
        while let Token::Comment(value) = token {
            comments.push(Comment::Block(BlockComment { value }));
            (token, span) = self.next_raw();
        }
        if !matches!(token, Token::Error | Token::End) {
            let (next, next_span) = self.next_raw();
            match next {
                Token::Comment(value) if !has_line_break(&self.source[span.end..next_span.start]) => {
                    comments.push(Comment::Inline(InlineComment { value }));
                }
                _ => self.buffered = Some((next, next_span)),
            }
        }
        Peeked {
            token,
            span,
            comments,
        }
    }

    /// Returns the next token and its comments without consuming it.
    ///
    /// Repeated calls return the same token until [`TokenStream::take`] is called.
    pub fn peek(&mut self) -> &Peeked<'a> {
        let peeked = match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.read(),
        };
        self.peeked.insert(peeked)
    }

    /// Consumes the next token and returns it with its comments.
    ///
    /// Once the source text is exhausted this keeps returning [`Token::End`].
    pub fn take(&mut self) -> Peeked<'a> {
        match self.peeked.take() {
            Some(peeked) => peeked,
            None => self.read(),
        }
    }
}
