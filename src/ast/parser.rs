use super::ast::*;
use super::ast_kind::ASTKind;
use super::lexer::{lexical_error, Token};
use super::token_stream::TokenStream;
use crate::error::{get_location, print_span, Error, ErrorType, Result};
use bumpalo::collections::Vec;
use log::{debug, trace};

use private::ParseNode as _;

/// A grammar violation, which names the production that failed and optionally what was expected
/// instead of the next token.
#[derive(Debug, PartialEq)]
pub struct ParseError {
    kind: ASTKind,
    expected: Option<String>,
}

impl ParseError {
    #[inline]
    fn new(kind: ASTKind) -> Self {
        ParseError {
            kind,
            expected: None,
        }
    }

    #[inline]
    fn expected<S: Into<String>>(kind: ASTKind, expected: S) -> Self {
        ParseError {
            kind,
            expected: Some(expected.into()),
        }
    }

    #[inline]
    fn expected_token(kind: ASTKind, token: Token) -> Self {
        Self::expected(kind, format!("\"{}\"", token.value()))
    }
}

type ParseResult<T> = std::result::Result<T, ParseError>;

/// A bracketed list with the comments attached to its brackets.
struct Wrapped<'a, T> {
    opening: Comments<'a>,
    items: Vec<'a, T>,
    closing: Comments<'a>,
}

pub(crate) mod private {
    use super::*;

    /// Private Parser context state that's kept to keep track of the current parser's progress and
    /// state. This contains the AST context's arena and a [TokenStream].
    pub struct ParserContext<'a> {
        pub(crate) arena: &'a bumpalo::Bump,
        pub(crate) stream: TokenStream<'a>,
    }

    impl<'a> ParserContext<'a> {
        /// Create a new Parser context for a given AST context and initialize it with an input source
        /// string to parse from.
        pub(crate) fn new(ctx: &'a ASTContext, source: &'a str) -> Self {
            ParserContext {
                arena: &ctx.arena,
                stream: TokenStream::new(ctx, source),
            }
        }

        #[inline]
        pub(crate) fn vec<T>(&self) -> Vec<'a, T> {
            Vec::new_in(self.arena)
        }

        #[inline]
        pub(crate) fn source(&self) -> &'a str {
            self.stream.source()
        }

        #[inline]
        pub(crate) fn peek(&mut self) -> Token<'a> {
            self.stream.peek().token
        }

        /// Consumes the next token and moves its comments into the given list.
        #[inline]
        pub(crate) fn take(&mut self, comments: &mut Comments<'a>) -> Token<'a> {
            let peeked = self.stream.take();
            comments.extend(peeked.comments);
            peeked.token
        }

        #[inline]
        pub(crate) fn take_if(&mut self, token: Token<'a>, comments: &mut Comments<'a>) -> bool {
            if self.peek() == token {
                self.take(comments);
                true
            } else {
                false
            }
        }

        #[inline]
        pub(crate) fn expect(
            &mut self,
            token: Token<'a>,
            kind: ASTKind,
            comments: &mut Comments<'a>,
        ) -> ParseResult<()> {
            if self.take_if(token, comments) {
                Ok(())
            } else {
                Err(ParseError::expected_token(kind, token))
            }
        }

        #[inline]
        pub(crate) fn take_keyword(&mut self, keyword: &str, comments: &mut Comments<'a>) -> bool {
            match self.peek() {
                Token::Name(name) if name == keyword => {
                    self.take(comments);
                    true
                }
                _ => false,
            }
        }

        #[inline]
        pub(crate) fn expect_keyword(
            &mut self,
            keyword: &str,
            kind: ASTKind,
            comments: &mut Comments<'a>,
        ) -> ParseResult<()> {
            if self.take_keyword(keyword, comments) {
                Ok(())
            } else {
                Err(ParseError::expected(kind, format!("\"{}\"", keyword)))
            }
        }

        #[inline]
        pub(crate) fn take_name(
            &mut self,
            kind: ASTKind,
            comments: &mut Comments<'a>,
        ) -> ParseResult<Name<'a>> {
            match self.peek() {
                Token::Name(value) => {
                    self.take(comments);
                    Ok(Name { value })
                }
                _ => Err(ParseError::expected(kind, "Name")),
            }
        }

        /// Takes items until the next token halts the list.
        pub(crate) fn take_list<T>(
            &mut self,
            halt: impl Fn(Token<'a>) -> bool,
            mut item: impl FnMut(&mut Self) -> ParseResult<T>,
        ) -> ParseResult<Vec<'a, T>> {
            let mut items = self.vec();
            while !halt(self.peek()) {
                items.push(item(self)?);
            }
            Ok(items)
        }

        /// Takes a list wrapped in `open` and `close` tokens, if the next token opens it.
        ///
        /// Lists that aren't allowed to be empty fail on the closing token.
        pub(super) fn take_wrapped_list<T>(
            &mut self,
            open: Token<'a>,
            close: Token<'a>,
            kind: ASTKind,
            allow_empty: bool,
            mut item: impl FnMut(&mut Self) -> ParseResult<T>,
        ) -> ParseResult<Option<Wrapped<'a, T>>> {
            let mut opening = self.vec();
            if !self.take_if(open, &mut opening) {
                return Ok(None);
            }
            let mut items = self.vec();
            let mut closing = self.vec();
            loop {
                if self.peek() == close {
                    if items.is_empty() && !allow_empty {
                        return Err(ParseError::new(kind));
                    }
                    self.take(&mut closing);
                    break;
                }
                items.push(item(self)?);
            }
            Ok(Some(Wrapped {
                opening,
                items,
                closing,
            }))
        }

        pub(super) fn expect_wrapped_list<T>(
            &mut self,
            open: Token<'a>,
            close: Token<'a>,
            kind: ASTKind,
            item: impl FnMut(&mut Self) -> ParseResult<T>,
        ) -> ParseResult<Wrapped<'a, T>> {
            self.take_wrapped_list(open, close, kind, false, item)?
                .ok_or_else(|| ParseError::expected_token(kind, open))
        }

        /// Takes a list of items separated by `delimiter` and introduced by `intro`, which may be
        /// preceded by a leading delimiter, e.g. `= | A | B`.
        pub(crate) fn take_delimited_list<T>(
            &mut self,
            intro: Token<'a>,
            delimiter: Token<'a>,
            comments: &mut Comments<'a>,
            mut item: impl FnMut(&mut Self) -> ParseResult<T>,
        ) -> ParseResult<Option<Vec<'a, T>>> {
            if !self.take_if(intro, comments) {
                return Ok(None);
            }
            self.take_if(delimiter, comments);
            let mut items = self.vec();
            loop {
                items.push(item(self)?);
                if !self.take_if(delimiter, comments) {
                    break;
                }
            }
            Ok(Some(items))
        }

        /// Fails when every list an extension could add to is empty, expecting the token that
        /// opens its primary list instead.
        pub(crate) fn assert_combined_list_length(
            &self,
            lengths: &[usize],
            kind: ASTKind,
            expected: Token<'a>,
        ) -> ParseResult<()> {
            if lengths.iter().all(|length| *length == 0) {
                Err(ParseError::expected_token(kind, expected))
            } else {
                Ok(())
            }
        }
    }

    /// (Private) Trait for parsing AST Nodes from a Parser Context.
    /// The [`super::ParseNode`] trait implements the public `parse` method instead.
    pub trait ParseNode<'a>: Sized {
        fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Self>;
    }
}

use private::ParserContext;

fn syntax_error(ctx: &mut ParserContext, error: ParseError) -> Error {
    let source = ctx.source();
    let peeked = ctx.stream.peek();
    let span = peeked.span.clone();
    if peeked.token == Token::Error {
        return lexical_error(source, span);
    }
    let found = match peeked.token {
        Token::End => "EOF".to_string(),
        token => format!("{} \"{}\"", token.kind(), token.value()),
    };
    let message = match error.expected {
        Some(expected) => format!(
            "Unexpected {} while parsing {}, expected {}",
            found, error.kind, expected
        ),
        None => format!("Unexpected {} while parsing {}", found, error.kind),
    };
    debug!("{} at {}..{}", message, span.start, span.end);
    Error::new_with_context(
        message,
        Some(get_location(source, span.clone())),
        print_span(source, span),
        ErrorType::Syntax,
    )
}

/// Trait for parsing AST Nodes from source texts using recursive descent and a lexer.
///
/// This trait is implemented by all AST Nodes and can hence be used to granularly parse GraphQL language.
/// However, mostly this will be used via `Document::parse`. Granular parsing stops after the node
/// and ignores any input that follows it.
pub trait ParseNode<'a>: private::ParseNode<'a> {
    /// Parse an input source text into the implementor's AST Node structure and allocate the
    /// resulting AST into the current AST Context's arena.
    fn parse<T: ToString>(ctx: &'a ASTContext, source: T) -> Result<&'a Self> {
        let source = ctx.alloc_string(source.to_string());
        trace!(
            "Parsing {} from {} bytes",
            std::any::type_name::<Self>(),
            source.len()
        );
        let mut parser_ctx = ParserContext::new(ctx, source);
        match Self::new_with_ctx(&mut parser_ctx) {
            Ok(value) => Ok(ctx.alloc(value)),
            Err(error) => Err(syntax_error(&mut parser_ctx, error)),
        }
    }
}

impl<'a, T: private::ParseNode<'a>> ParseNode<'a> for T {}

/// Parse a source text into a [Document], which must contain at least one definition.
///
/// ```
/// use graphql_syntax::ast::{parse, ASTContext};
///
/// let ctx = ASTContext::new();
/// let document = parse(&ctx, "query { field }").unwrap();
/// assert_eq!(document.definitions.len(), 1);
/// ```
pub fn parse<'a, T: ToString>(ctx: &'a ASTContext, source: T) -> Result<&'a Document<'a>> {
    Document::parse(ctx, source)
}

#[inline]
fn value_kind<'a, V: ValueKind<'a>>(regular: ASTKind, constant: ASTKind) -> ASTKind {
    if V::IS_CONST {
        constant
    } else {
        regular
    }
}

impl<'a> private::ParseNode<'a> for Variable<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Variable<'a>> {
        let mut comments = ctx.vec();
        ctx.expect(Token::Dollar, ASTKind::Variable, &mut comments)?;
        let name = ctx.take_name(ASTKind::Variable, &mut comments)?;
        Ok(Variable { comments, name })
    }
}

impl<'a> private::ParseNode<'a> for IntValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<IntValue<'a>> {
        let mut comments = ctx.vec();
        match ctx.peek() {
            Token::Int(value) => {
                ctx.take(&mut comments);
                Ok(IntValue { comments, value })
            }
            _ => Err(ParseError::new(ASTKind::IntValue)),
        }
    }
}

impl<'a> private::ParseNode<'a> for FloatValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<FloatValue<'a>> {
        let mut comments = ctx.vec();
        match ctx.peek() {
            Token::Float(value) => {
                ctx.take(&mut comments);
                Ok(FloatValue { comments, value })
            }
            _ => Err(ParseError::new(ASTKind::FloatValue)),
        }
    }
}

impl<'a> private::ParseNode<'a> for StringValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<StringValue<'a>> {
        let mut comments = ctx.vec();
        let (value, block) = match ctx.peek() {
            Token::String(value) => (value, false),
            Token::BlockString(value) => (value, true),
            _ => return Err(ParseError::new(ASTKind::StringValue)),
        };
        ctx.take(&mut comments);
        Ok(StringValue {
            comments,
            value,
            block,
        })
    }
}

impl<'a> private::ParseNode<'a> for BooleanValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<BooleanValue<'a>> {
        let mut comments = ctx.vec();
        let value = match ctx.peek() {
            Token::Name("true") => true,
            Token::Name("false") => false,
            _ => return Err(ParseError::new(ASTKind::BooleanValue)),
        };
        ctx.take(&mut comments);
        Ok(BooleanValue { comments, value })
    }
}

impl<'a> private::ParseNode<'a> for NullValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<NullValue<'a>> {
        let mut comments = ctx.vec();
        ctx.expect(Token::Name("null"), ASTKind::NullValue, &mut comments)?;
        Ok(NullValue { comments })
    }
}

impl<'a> private::ParseNode<'a> for EnumValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<EnumValue<'a>> {
        let mut comments = ctx.vec();
        match ctx.peek() {
            Token::Name("true" | "false" | "null") => Err(ParseError::new(ASTKind::EnumValue)),
            Token::Name(value) => {
                ctx.take(&mut comments);
                Ok(EnumValue { comments, value })
            }
            _ => Err(ParseError::new(ASTKind::EnumValue)),
        }
    }
}

/// Parses a value of either family. Constant values reject variables.
fn take_value<'a, V: ValueKind<'a>>(ctx: &mut ParserContext<'a>) -> ParseResult<V> {
    match ctx.peek() {
        Token::Dollar if V::IS_CONST => {
            Err(ParseError::expected(ASTKind::Value, "constant value"))
        }
        Token::Dollar => {
            let variable = Variable::new_with_ctx(ctx)?;
            V::from_variable(variable).ok_or_else(|| ParseError::new(ASTKind::Value))
        }
        Token::Int(_) => IntValue::new_with_ctx(ctx).map(V::from_int),
        Token::Float(_) => FloatValue::new_with_ctx(ctx).map(V::from_float),
        Token::String(_) | Token::BlockString(_) => {
            StringValue::new_with_ctx(ctx).map(V::from_string)
        }
        Token::Name("true" | "false") => BooleanValue::new_with_ctx(ctx).map(V::from_boolean),
        Token::Name("null") => NullValue::new_with_ctx(ctx).map(V::from_null),
        Token::Name(_) => EnumValue::new_with_ctx(ctx).map(V::from_enum),
        Token::BracketOpen => ListValue::<V>::new_with_ctx(ctx).map(V::from_list),
        Token::BraceOpen => ObjectValue::<V>::new_with_ctx(ctx).map(V::from_object),
        _ => Err(ParseError::new(ASTKind::Value)),
    }
}

impl<'a> private::ParseNode<'a> for Value<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Value<'a>> {
        take_value(ctx)
    }
}

impl<'a> private::ParseNode<'a> for ConstValue<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<ConstValue<'a>> {
        take_value(ctx)
    }
}

impl<'a, V: ValueKind<'a>> private::ParseNode<'a> for ListValue<'a, V> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<ListValue<'a, V>> {
        let kind = value_kind::<V>(ASTKind::ListValue, ASTKind::ListValueConst);
        let list = ctx.expect_wrapped_list_or_empty(
            Token::BracketOpen,
            Token::BracketClose,
            kind,
            take_value::<V>,
        )?;
        Ok(ListValue {
            comments_opening_bracket: list.opening,
            values: list.items,
            comments_closing_bracket: list.closing,
        })
    }
}

impl<'a, V: ValueKind<'a>> private::ParseNode<'a> for ObjectField<'a, V> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<ObjectField<'a, V>> {
        let kind = value_kind::<V>(ASTKind::ObjectField, ASTKind::ObjectFieldConst);
        let mut comments = ctx.vec();
        let name = ctx.take_name(kind, &mut comments)?;
        ctx.expect(Token::Colon, kind, &mut comments)?;
        let value = take_value::<V>(ctx)?;
        Ok(ObjectField {
            comments,
            name,
            value,
        })
    }
}

impl<'a, V: ValueKind<'a>> private::ParseNode<'a> for ObjectValue<'a, V> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<ObjectValue<'a, V>> {
        let kind = value_kind::<V>(ASTKind::ObjectValue, ASTKind::ObjectValueConst);
        let object = ctx.expect_wrapped_list_or_empty(
            Token::BraceOpen,
            Token::BraceClose,
            kind,
            ObjectField::<V>::new_with_ctx,
        )?;
        Ok(ObjectValue {
            comments_opening_bracket: object.opening,
            fields: object.items,
            comments_closing_bracket: object.closing,
        })
    }
}

impl<'a> ParserContext<'a> {
    fn expect_wrapped_list_or_empty<T>(
        &mut self,
        open: Token<'a>,
        close: Token<'a>,
        kind: ASTKind,
        item: impl FnMut(&mut Self) -> ParseResult<T>,
    ) -> ParseResult<Wrapped<'a, T>> {
        self.take_wrapped_list(open, close, kind, true, item)?
            .ok_or_else(|| ParseError::expected_token(kind, open))
    }

    fn take_directives<V: ValueKind<'a>>(&mut self) -> ParseResult<Vec<'a, Directive<'a, V>>> {
        self.take_list(|token| token != Token::At, Directive::<V>::new_with_ctx)
    }

    fn take_description(&mut self) -> ParseResult<Option<StringValue<'a>>> {
        match self.peek() {
            Token::String(_) | Token::BlockString(_) => StringValue::new_with_ctx(self).map(Some),
            _ => Ok(None),
        }
    }

    fn take_named_types(
        &mut self,
        intro: Token<'a>,
        delimiter: Token<'a>,
    ) -> ParseResult<Option<NamedTypeSet<'a>>> {
        let mut comments = self.vec();
        let types =
            self.take_delimited_list(intro, delimiter, &mut comments, NamedType::new_with_ctx)?;
        Ok(types.map(|types| NamedTypeSet { comments, types }))
    }

    #[inline]
    fn take_interfaces(&mut self) -> ParseResult<Option<NamedTypeSet<'a>>> {
        self.take_named_types(Token::Name("implements"), Token::Ampersand)
    }

    #[inline]
    fn take_union_members(&mut self) -> ParseResult<Option<NamedTypeSet<'a>>> {
        self.take_named_types(Token::Equal, Token::Pipe)
    }

    fn take_field_definitions(&mut self) -> ParseResult<Option<FieldDefinitionSet<'a>>> {
        let fields = self.take_wrapped_list(
            Token::BraceOpen,
            Token::BraceClose,
            ASTKind::FieldDefinitionSet,
            false,
            FieldDefinition::new_with_ctx,
        )?;
        Ok(fields.map(|fields| FieldDefinitionSet {
            comments_opening_bracket: fields.opening,
            definitions: fields.items,
            comments_closing_bracket: fields.closing,
        }))
    }

    fn take_input_value_definitions(
        &mut self,
        open: Token<'a>,
        close: Token<'a>,
    ) -> ParseResult<Option<InputValueDefinitionSet<'a>>> {
        let fields = self.take_wrapped_list(
            open,
            close,
            ASTKind::InputValueDefinitionSet,
            false,
            InputValueDefinition::new_with_ctx,
        )?;
        Ok(fields.map(|fields| InputValueDefinitionSet {
            comments_opening_bracket: fields.opening,
            definitions: fields.items,
            comments_closing_bracket: fields.closing,
        }))
    }

    fn take_enum_value_definitions(&mut self) -> ParseResult<Option<EnumValueDefinitionSet<'a>>> {
        let values = self.take_wrapped_list(
            Token::BraceOpen,
            Token::BraceClose,
            ASTKind::EnumValueDefinitionSet,
            false,
            EnumValueDefinition::new_with_ctx,
        )?;
        Ok(values.map(|values| EnumValueDefinitionSet {
            comments_opening_bracket: values.opening,
            definitions: values.items,
            comments_closing_bracket: values.closing,
        }))
    }

    fn take_operation_types(&mut self) -> ParseResult<Option<OperationTypeDefinitionSet<'a>>> {
        let types = self.take_wrapped_list(
            Token::BraceOpen,
            Token::BraceClose,
            ASTKind::OperationTypeDefinitionSet,
            false,
            OperationTypeDefinition::new_with_ctx,
        )?;
        Ok(types.map(|types| OperationTypeDefinitionSet {
            comments_opening_bracket: types.opening,
            definitions: types.items,
            comments_closing_bracket: types.closing,
        }))
    }
}

impl<'a, V: ValueKind<'a>> private::ParseNode<'a> for Argument<'a, V> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Argument<'a, V>> {
        let kind = value_kind::<V>(ASTKind::Argument, ASTKind::ArgumentConst);
        let mut comments = ctx.vec();
        let name = ctx.take_name(kind, &mut comments)?;
        ctx.expect(Token::Colon, kind, &mut comments)?;
        let value = take_value::<V>(ctx)?;
        Ok(Argument {
            comments,
            name,
            value,
        })
    }
}

impl<'a, V: ValueKind<'a>> private::ParseNode<'a> for ArgumentSet<'a, V> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<ArgumentSet<'a, V>> {
        let kind = value_kind::<V>(ASTKind::ArgumentSet, ASTKind::ArgumentSetConst);
        let arguments = ctx.expect_wrapped_list(
            Token::ParenOpen,
            Token::ParenClose,
            kind,
            Argument::<V>::new_with_ctx,
        )?;
        Ok(ArgumentSet {
            comments_opening_bracket: arguments.opening,
            arguments: arguments.items,
            comments_closing_bracket: arguments.closing,
        })
    }
}

impl<'a, V: ValueKind<'a>> private::ParseNode<'a> for Directive<'a, V> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Directive<'a, V>> {
        let kind = value_kind::<V>(ASTKind::Directive, ASTKind::DirectiveConst);
        let mut comments = ctx.vec();
        ctx.expect(Token::At, kind, &mut comments)?;
        let name = ctx.take_name(kind, &mut comments)?;
        let arguments = match ctx.peek() {
            Token::ParenOpen => Some(ArgumentSet::<V>::new_with_ctx(ctx)?),
            _ => None,
        };
        Ok(Directive {
            comments,
            name,
            arguments,
        })
    }
}

impl<'a> private::ParseNode<'a> for NamedType<'a> {
    #[inline]
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<NamedType<'a>> {
        let mut comments = ctx.vec();
        let name = ctx.take_name(ASTKind::NamedType, &mut comments)?;
        Ok(NamedType { comments, name })
    }
}

impl<'a> private::ParseNode<'a> for ListType<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<ListType<'a>> {
        let mut comments = ctx.vec();
        ctx.expect(Token::BracketOpen, ASTKind::ListType, &mut comments)?;
        let of_type = Type::new_with_ctx(ctx)?;
        ctx.expect(Token::BracketClose, ASTKind::ListType, &mut comments)?;
        Ok(ListType {
            comments,
            of_type: ctx.arena.alloc(of_type),
        })
    }
}

impl<'a> private::ParseNode<'a> for Type<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Type<'a>> {
        let of_type = match ctx.peek() {
            Token::BracketOpen => NullableType::List(ListType::new_with_ctx(ctx)?),
            Token::Name(_) => NullableType::Named(NamedType::new_with_ctx(ctx)?),
            _ => return Err(ParseError::new(ASTKind::Type)),
        };
        let mut comments = ctx.vec();
        if ctx.take_if(Token::Exclam, &mut comments) {
            Ok(Type::NonNull(NonNullType {
                comments,
                of_type: ctx.arena.alloc(of_type),
            }))
        } else {
            Ok(match of_type {
                NullableType::Named(named) => Type::Named(named),
                NullableType::List(list) => Type::List(list),
            })
        }
    }
}

impl<'a> private::ParseNode<'a> for Field<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Field<'a>> {
        let mut comments = ctx.vec();
        let first = ctx.take_name(ASTKind::Field, &mut comments)?;
        let (alias, name) = if ctx.take_if(Token::Colon, &mut comments) {
            (Some(first), ctx.take_name(ASTKind::Field, &mut comments)?)
        } else {
            (None, first)
        };
        let arguments = match ctx.peek() {
            Token::ParenOpen => Some(ArgumentSet::new_with_ctx(ctx)?),
            _ => None,
        };
        let directives = ctx.take_directives()?;
        let selection_set = match ctx.peek() {
            Token::BraceOpen => Some(SelectionSet::new_with_ctx(ctx)?),
            _ => None,
        };
        Ok(Field {
            comments,
            alias,
            name,
            arguments,
            directives,
            selection_set,
        })
    }
}

fn take_fragment_spread<'a>(
    ctx: &mut ParserContext<'a>,
    mut comments: Comments<'a>,
) -> ParseResult<FragmentSpread<'a>> {
    let name = ctx.take_name(ASTKind::FragmentSpread, &mut comments)?;
    let directives = ctx.take_directives()?;
    Ok(FragmentSpread {
        comments,
        name,
        directives,
    })
}

fn take_inline_fragment<'a>(
    ctx: &mut ParserContext<'a>,
    mut comments: Comments<'a>,
) -> ParseResult<InlineFragment<'a>> {
    let type_condition = if ctx.take_keyword("on", &mut comments) {
        Some(NamedType::new_with_ctx(ctx)?)
    } else {
        None
    };
    let directives = ctx.take_directives()?;
    let selection_set = SelectionSet::new_with_ctx(ctx)?;
    Ok(InlineFragment {
        comments,
        type_condition,
        directives,
        selection_set,
    })
}

impl<'a> private::ParseNode<'a> for FragmentSpread<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<FragmentSpread<'a>> {
        let mut comments = ctx.vec();
        ctx.expect(Token::Ellipsis, ASTKind::FragmentSpread, &mut comments)?;
        if let Token::Name("on") = ctx.peek() {
            return Err(ParseError::expected(ASTKind::FragmentSpread, "fragment name"));
        }
        take_fragment_spread(ctx, comments)
    }
}

impl<'a> private::ParseNode<'a> for InlineFragment<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<InlineFragment<'a>> {
        let mut comments = ctx.vec();
        ctx.expect(Token::Ellipsis, ASTKind::InlineFragment, &mut comments)?;
        take_inline_fragment(ctx, comments)
    }
}

impl<'a> private::ParseNode<'a> for Selection<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Selection<'a>> {
        match ctx.peek() {
            Token::Ellipsis => {
                let mut comments = ctx.vec();
                ctx.take(&mut comments);
                match ctx.peek() {
                    Token::Name("on") | Token::BraceOpen | Token::At => {
                        take_inline_fragment(ctx, comments).map(Selection::InlineFragment)
                    }
                    Token::Name(_) => {
                        take_fragment_spread(ctx, comments).map(Selection::FragmentSpread)
                    }
                    _ => Err(ParseError::new(ASTKind::Selection)),
                }
            }
            Token::Name(_) => Field::new_with_ctx(ctx).map(Selection::Field),
            _ => Err(ParseError::new(ASTKind::Selection)),
        }
    }
}

impl<'a> private::ParseNode<'a> for SelectionSet<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<SelectionSet<'a>> {
        let selections = ctx.expect_wrapped_list(
            Token::BraceOpen,
            Token::BraceClose,
            ASTKind::SelectionSet,
            Selection::new_with_ctx,
        )?;
        Ok(SelectionSet {
            comments_opening_bracket: selections.opening,
            selections: selections.items,
            comments_closing_bracket: selections.closing,
        })
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<VariableDefinition<'a>> {
        let variable = Variable::new_with_ctx(ctx)?;
        let mut comments = ctx.vec();
        ctx.expect(Token::Colon, ASTKind::VariableDefinition, &mut comments)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let default_value = if ctx.take_if(Token::Equal, &mut comments) {
            Some(take_value::<ConstValue>(ctx)?)
        } else {
            None
        };
        let directives = ctx.take_directives()?;
        Ok(VariableDefinition {
            comments,
            variable,
            of_type,
            default_value,
            directives,
        })
    }
}

impl<'a> private::ParseNode<'a> for VariableDefinitionSet<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<VariableDefinitionSet<'a>> {
        let definitions = ctx.expect_wrapped_list(
            Token::ParenOpen,
            Token::ParenClose,
            ASTKind::VariableDefinitionSet,
            VariableDefinition::new_with_ctx,
        )?;
        Ok(VariableDefinitionSet {
            comments_opening_bracket: definitions.opening,
            definitions: definitions.items,
            comments_closing_bracket: definitions.closing,
        })
    }
}

impl<'a> private::ParseNode<'a> for FragmentDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<FragmentDefinition<'a>> {
        let mut comments = ctx.vec();
        ctx.expect_keyword("fragment", ASTKind::FragmentDefinition, &mut comments)?;
        if let Token::Name("on") = ctx.peek() {
            return Err(ParseError::expected(
                ASTKind::FragmentDefinition,
                "fragment name",
            ));
        }
        let name = ctx.take_name(ASTKind::FragmentDefinition, &mut comments)?;
        ctx.expect_keyword("on", ASTKind::FragmentDefinition, &mut comments)?;
        let type_condition = NamedType::new_with_ctx(ctx)?;
        let directives = ctx.take_directives()?;
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(FragmentDefinition {
            comments,
            name,
            type_condition,
            directives,
            selection_set,
        })
    }
}

fn take_operation_kind<'a>(
    ctx: &mut ParserContext<'a>,
    kind: ASTKind,
    comments: &mut Comments<'a>,
) -> ParseResult<OperationKind> {
    let operation = match ctx.peek() {
        Token::Name("query") => OperationKind::Query,
        Token::Name("mutation") => OperationKind::Mutation,
        Token::Name("subscription") => OperationKind::Subscription,
        _ => return Err(ParseError::expected(kind, "operation type")),
    };
    ctx.take(comments);
    Ok(operation)
}

impl<'a> private::ParseNode<'a> for OperationDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<OperationDefinition<'a>> {
        let mut comments = ctx.vec();
        if let Token::BraceOpen = ctx.peek() {
            let selection_set = SelectionSet::new_with_ctx(ctx)?;
            return Ok(OperationDefinition {
                comments,
                operation: OperationKind::Query,
                name: None,
                variable_definitions: None,
                directives: ctx.vec(),
                selection_set,
            });
        }
        let operation = take_operation_kind(ctx, ASTKind::OperationDefinition, &mut comments)?;
        let name = match ctx.peek() {
            Token::Name(_) => Some(ctx.take_name(ASTKind::OperationDefinition, &mut comments)?),
            _ => None,
        };
        let variable_definitions = match ctx.peek() {
            Token::ParenOpen => Some(VariableDefinitionSet::new_with_ctx(ctx)?),
            _ => None,
        };
        let directives = ctx.take_directives()?;
        let selection_set = SelectionSet::new_with_ctx(ctx)?;
        Ok(OperationDefinition {
            comments,
            operation,
            name,
            variable_definitions,
            directives,
            selection_set,
        })
    }
}

impl<'a> private::ParseNode<'a> for OperationTypeDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<OperationTypeDefinition<'a>> {
        let kind = ASTKind::OperationTypeDefinition;
        let mut comments = ctx.vec();
        let operation = take_operation_kind(ctx, kind, &mut comments)?;
        ctx.expect(Token::Colon, kind, &mut comments)?;
        let named_type = NamedType::new_with_ctx(ctx)?;
        Ok(OperationTypeDefinition {
            comments,
            operation,
            named_type,
        })
    }
}

impl<'a> private::ParseNode<'a> for OperationTypeDefinitionSet<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<OperationTypeDefinitionSet<'a>> {
        ctx.take_operation_types()?.ok_or_else(|| {
            ParseError::expected_token(ASTKind::OperationTypeDefinitionSet, Token::BraceOpen)
        })
    }
}

impl<'a> private::ParseNode<'a> for InputValueDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<InputValueDefinition<'a>> {
        let kind = ASTKind::InputValueDefinition;
        let description = ctx.take_description()?;
        let mut comments = ctx.vec();
        let name = ctx.take_name(kind, &mut comments)?;
        ctx.expect(Token::Colon, kind, &mut comments)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let default_value = if ctx.take_if(Token::Equal, &mut comments) {
            Some(take_value::<ConstValue>(ctx)?)
        } else {
            None
        };
        let directives = ctx.take_directives()?;
        Ok(InputValueDefinition {
            comments,
            description,
            name,
            of_type,
            default_value,
            directives,
        })
    }
}

impl<'a> private::ParseNode<'a> for FieldDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<FieldDefinition<'a>> {
        let kind = ASTKind::FieldDefinition;
        let description = ctx.take_description()?;
        let mut comments = ctx.vec();
        let name = ctx.take_name(kind, &mut comments)?;
        let arguments = ctx.take_input_value_definitions(Token::ParenOpen, Token::ParenClose)?;
        ctx.expect(Token::Colon, kind, &mut comments)?;
        let of_type = Type::new_with_ctx(ctx)?;
        let directives = ctx.take_directives()?;
        Ok(FieldDefinition {
            comments,
            description,
            name,
            arguments,
            of_type,
            directives,
        })
    }
}

impl<'a> private::ParseNode<'a> for EnumValueDefinition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<EnumValueDefinition<'a>> {
        let kind = ASTKind::EnumValueDefinition;
        let description = ctx.take_description()?;
        if let Token::Name("true" | "false" | "null") = ctx.peek() {
            return Err(ParseError::expected(kind, "enum value name"));
        }
        let mut comments = ctx.vec();
        let name = ctx.take_name(kind, &mut comments)?;
        let directives = ctx.take_directives()?;
        Ok(EnumValueDefinition {
            comments,
            description,
            name,
            directives,
        })
    }
}

macro_rules! parse_set {
    ($set:ident, $take:ident ( $($arg:expr),* ), $kind:ident, $open:expr) => {
        impl<'a> private::ParseNode<'a> for $set<'a> {
            fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<$set<'a>> {
                ctx.$take($($arg),*)?
                    .ok_or_else(|| ParseError::expected_token(ASTKind::$kind, $open))
            }
        }
    };
}

parse_set!(
    FieldDefinitionSet,
    take_field_definitions(),
    FieldDefinitionSet,
    Token::BraceOpen
);
parse_set!(
    EnumValueDefinitionSet,
    take_enum_value_definitions(),
    EnumValueDefinitionSet,
    Token::BraceOpen
);

/// Input value definitions parsed on their own are argument definitions when they start with a
/// parenthesis and input object fields otherwise.
impl<'a> private::ParseNode<'a> for InputValueDefinitionSet<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<InputValueDefinitionSet<'a>> {
        let (open, close) = match ctx.peek() {
            Token::ParenOpen => (Token::ParenOpen, Token::ParenClose),
            _ => (Token::BraceOpen, Token::BraceClose),
        };
        ctx.take_input_value_definitions(open, close)?
            .ok_or_else(|| ParseError::expected_token(ASTKind::InputValueDefinitionSet, open))
    }
}

fn take_directive_location<'a>(ctx: &mut ParserContext<'a>) -> ParseResult<DirectiveLocation<'a>> {
    let kind = ASTKind::DirectiveLocationSet;
    let name = match ctx.peek() {
        Token::Name(name) => name,
        _ => return Err(ParseError::expected(kind, "directive location")),
    };
    let mut comments = ctx.vec();
    if let Some(value) = ExecutableLocation::from_name(name) {
        ctx.take(&mut comments);
        Ok(DirectiveLocation::Executable(ExecutableDirectiveLocation {
            comments,
            value,
        }))
    } else if let Some(value) = TypeSystemLocation::from_name(name) {
        ctx.take(&mut comments);
        Ok(DirectiveLocation::TypeSystem(TypeSystemDirectiveLocation {
            comments,
            value,
        }))
    } else {
        Err(ParseError::expected(kind, "directive location"))
    }
}

impl<'a> private::ParseNode<'a> for DirectiveLocationSet<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<DirectiveLocationSet<'a>> {
        let mut comments = ctx.vec();
        let locations = ctx.take_delimited_list(
            Token::Name("on"),
            Token::Pipe,
            &mut comments,
            take_directive_location,
        )?;
        match locations {
            Some(locations) => Ok(DirectiveLocationSet {
                comments,
                locations,
            }),
            None => Err(ParseError::expected(ASTKind::DirectiveLocationSet, "\"on\"")),
        }
    }
}

fn take_schema_definition<'a>(
    ctx: &mut ParserContext<'a>,
    description: Option<StringValue<'a>>,
) -> ParseResult<SchemaDefinition<'a>> {
    let kind = ASTKind::SchemaDefinition;
    let mut comments = ctx.vec();
    ctx.expect_keyword("schema", kind, &mut comments)?;
    let directives = ctx.take_directives()?;
    let operation_types = ctx
        .take_operation_types()?
        .ok_or_else(|| ParseError::expected_token(kind, Token::BraceOpen))?;
    Ok(SchemaDefinition {
        comments,
        description,
        directives,
        operation_types,
    })
}

fn take_scalar_type_definition<'a>(
    ctx: &mut ParserContext<'a>,
    description: Option<StringValue<'a>>,
) -> ParseResult<ScalarTypeDefinition<'a>> {
    let kind = ASTKind::ScalarTypeDefinition;
    let mut comments = ctx.vec();
    ctx.expect_keyword("scalar", kind, &mut comments)?;
    let name = ctx.take_name(kind, &mut comments)?;
    let directives = ctx.take_directives()?;
    Ok(ScalarTypeDefinition {
        comments,
        description,
        name,
        directives,
    })
}

fn take_object_type_definition<'a>(
    ctx: &mut ParserContext<'a>,
    description: Option<StringValue<'a>>,
) -> ParseResult<ObjectTypeDefinition<'a>> {
    let kind = ASTKind::ObjectTypeDefinition;
    let mut comments = ctx.vec();
    ctx.expect_keyword("type", kind, &mut comments)?;
    let name = ctx.take_name(kind, &mut comments)?;
    let interfaces = ctx.take_interfaces()?;
    let directives = ctx.take_directives()?;
    let fields = ctx.take_field_definitions()?;
    Ok(ObjectTypeDefinition {
        comments,
        description,
        name,
        interfaces,
        directives,
        fields,
    })
}

fn take_interface_type_definition<'a>(
    ctx: &mut ParserContext<'a>,
    description: Option<StringValue<'a>>,
) -> ParseResult<InterfaceTypeDefinition<'a>> {
    let kind = ASTKind::InterfaceTypeDefinition;
    let mut comments = ctx.vec();
    ctx.expect_keyword("interface", kind, &mut comments)?;
    let name = ctx.take_name(kind, &mut comments)?;
    let interfaces = ctx.take_interfaces()?;
    let directives = ctx.take_directives()?;
    let fields = ctx.take_field_definitions()?;
    Ok(InterfaceTypeDefinition {
        comments,
        description,
        name,
        interfaces,
        directives,
        fields,
    })
}

fn take_union_type_definition<'a>(
    ctx: &mut ParserContext<'a>,
    description: Option<StringValue<'a>>,
) -> ParseResult<UnionTypeDefinition<'a>> {
    let kind = ASTKind::UnionTypeDefinition;
    let mut comments = ctx.vec();
    ctx.expect_keyword("union", kind, &mut comments)?;
    let name = ctx.take_name(kind, &mut comments)?;
    let directives = ctx.take_directives()?;
    let types = ctx.take_union_members()?;
    Ok(UnionTypeDefinition {
        comments,
        description,
        name,
        directives,
        types,
    })
}

fn take_enum_type_definition<'a>(
    ctx: &mut ParserContext<'a>,
    description: Option<StringValue<'a>>,
) -> ParseResult<EnumTypeDefinition<'a>> {
    let kind = ASTKind::EnumTypeDefinition;
    let mut comments = ctx.vec();
    ctx.expect_keyword("enum", kind, &mut comments)?;
    let name = ctx.take_name(kind, &mut comments)?;
    let directives = ctx.take_directives()?;
    let values = ctx.take_enum_value_definitions()?;
    Ok(EnumTypeDefinition {
        comments,
        description,
        name,
        directives,
        values,
    })
}

fn take_input_object_type_definition<'a>(
    ctx: &mut ParserContext<'a>,
    description: Option<StringValue<'a>>,
) -> ParseResult<InputObjectTypeDefinition<'a>> {
    let kind = ASTKind::InputObjectTypeDefinition;
    let mut comments = ctx.vec();
    ctx.expect_keyword("input", kind, &mut comments)?;
    let name = ctx.take_name(kind, &mut comments)?;
    let directives = ctx.take_directives()?;
    let fields = ctx.take_input_value_definitions(Token::BraceOpen, Token::BraceClose)?;
    Ok(InputObjectTypeDefinition {
        comments,
        description,
        name,
        directives,
        fields,
    })
}

fn take_directive_definition<'a>(
    ctx: &mut ParserContext<'a>,
    description: Option<StringValue<'a>>,
) -> ParseResult<DirectiveDefinition<'a>> {
    let kind = ASTKind::DirectiveDefinition;
    let mut comments = ctx.vec();
    ctx.expect_keyword("directive", kind, &mut comments)?;
    ctx.expect(Token::At, kind, &mut comments)?;
    let name = ctx.take_name(kind, &mut comments)?;
    let arguments = ctx.take_input_value_definitions(Token::ParenOpen, Token::ParenClose)?;
    let repeatable = ctx.take_keyword("repeatable", &mut comments);
    let locations = DirectiveLocationSet::new_with_ctx(ctx)?;
    Ok(DirectiveDefinition {
        comments,
        description,
        name,
        arguments,
        repeatable,
        locations,
    })
}

macro_rules! parse_type_system_definition {
    ($($for_type:ident => $take:ident),+ $(,)?) => {
        $(
            impl<'a> private::ParseNode<'a> for $for_type<'a> {
                fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<$for_type<'a>> {
                    let description = ctx.take_description()?;
                    $take(ctx, description)
                }
            }
        )+
    };
}

parse_type_system_definition!(
    SchemaDefinition => take_schema_definition,
    ScalarTypeDefinition => take_scalar_type_definition,
    ObjectTypeDefinition => take_object_type_definition,
    InterfaceTypeDefinition => take_interface_type_definition,
    UnionTypeDefinition => take_union_type_definition,
    EnumTypeDefinition => take_enum_type_definition,
    InputObjectTypeDefinition => take_input_object_type_definition,
    DirectiveDefinition => take_directive_definition,
);

fn take_schema_extension<'a>(
    ctx: &mut ParserContext<'a>,
    mut comments: Comments<'a>,
) -> ParseResult<SchemaExtension<'a>> {
    let kind = ASTKind::SchemaExtension;
    ctx.expect_keyword("schema", kind, &mut comments)?;
    let directives = ctx.take_directives()?;
    let operation_types = ctx.take_operation_types()?;
    ctx.assert_combined_list_length(
        &[directives.len(), operation_types.is_some() as usize],
        kind,
        Token::BraceOpen,
    )?;
    Ok(SchemaExtension {
        comments,
        directives,
        operation_types,
    })
}

fn take_scalar_type_extension<'a>(
    ctx: &mut ParserContext<'a>,
    mut comments: Comments<'a>,
) -> ParseResult<ScalarTypeExtension<'a>> {
    let kind = ASTKind::ScalarTypeExtension;
    ctx.expect_keyword("scalar", kind, &mut comments)?;
    let name = ctx.take_name(kind, &mut comments)?;
    let directives = ctx.take_directives()?;
    ctx.assert_combined_list_length(&[directives.len()], kind, Token::At)?;
    Ok(ScalarTypeExtension {
        comments,
        name,
        directives,
    })
}

fn take_object_type_extension<'a>(
    ctx: &mut ParserContext<'a>,
    mut comments: Comments<'a>,
) -> ParseResult<ObjectTypeExtension<'a>> {
    let kind = ASTKind::ObjectTypeExtension;
    ctx.expect_keyword("type", kind, &mut comments)?;
    let name = ctx.take_name(kind, &mut comments)?;
    let interfaces = ctx.take_interfaces()?;
    let directives = ctx.take_directives()?;
    let fields = ctx.take_field_definitions()?;
    ctx.assert_combined_list_length(
        &[
            interfaces.is_some() as usize,
            directives.len(),
            fields.is_some() as usize,
        ],
        kind,
        Token::BraceOpen,
    )?;
    Ok(ObjectTypeExtension {
        comments,
        name,
        interfaces,
        directives,
        fields,
    })
}

fn take_interface_type_extension<'a>(
    ctx: &mut ParserContext<'a>,
    mut comments: Comments<'a>,
) -> ParseResult<InterfaceTypeExtension<'a>> {
    let kind = ASTKind::InterfaceTypeExtension;
    ctx.expect_keyword("interface", kind, &mut comments)?;
    let name = ctx.take_name(kind, &mut comments)?;
    let interfaces = ctx.take_interfaces()?;
    let directives = ctx.take_directives()?;
    let fields = ctx.take_field_definitions()?;
    ctx.assert_combined_list_length(
        &[
            interfaces.is_some() as usize,
            directives.len(),
            fields.is_some() as usize,
        ],
        kind,
        Token::BraceOpen,
    )?;
    Ok(InterfaceTypeExtension {
        comments,
        name,
        interfaces,
        directives,
        fields,
    })
}

fn take_union_type_extension<'a>(
    ctx: &mut ParserContext<'a>,
    mut comments: Comments<'a>,
) -> ParseResult<UnionTypeExtension<'a>> {
    let kind = ASTKind::UnionTypeExtension;
    ctx.expect_keyword("union", kind, &mut comments)?;
    let name = ctx.take_name(kind, &mut comments)?;
    let directives = ctx.take_directives()?;
    let types = ctx.take_union_members()?;
    ctx.assert_combined_list_length(
        &[directives.len(), types.is_some() as usize],
        kind,
        Token::Equal,
    )?;
    Ok(UnionTypeExtension {
        comments,
        name,
        directives,
        types,
    })
}

fn take_enum_type_extension<'a>(
    ctx: &mut ParserContext<'a>,
    mut comments: Comments<'a>,
) -> ParseResult<EnumTypeExtension<'a>> {
    let kind = ASTKind::EnumTypeExtension;
    ctx.expect_keyword("enum", kind, &mut comments)?;
    let name = ctx.take_name(kind, &mut comments)?;
    let directives = ctx.take_directives()?;
    let values = ctx.take_enum_value_definitions()?;
    ctx.assert_combined_list_length(
        &[directives.len(), values.is_some() as usize],
        kind,
        Token::BraceOpen,
    )?;
    Ok(EnumTypeExtension {
        comments,
        name,
        directives,
        values,
    })
}

fn take_input_object_type_extension<'a>(
    ctx: &mut ParserContext<'a>,
    mut comments: Comments<'a>,
) -> ParseResult<InputObjectTypeExtension<'a>> {
    let kind = ASTKind::InputObjectTypeExtension;
    ctx.expect_keyword("input", kind, &mut comments)?;
    let name = ctx.take_name(kind, &mut comments)?;
    let directives = ctx.take_directives()?;
    let fields = ctx.take_input_value_definitions(Token::BraceOpen, Token::BraceClose)?;
    ctx.assert_combined_list_length(
        &[directives.len(), fields.is_some() as usize],
        kind,
        Token::BraceOpen,
    )?;
    Ok(InputObjectTypeExtension {
        comments,
        name,
        directives,
        fields,
    })
}

macro_rules! parse_type_system_extension {
    ($($for_type:ident => $take:ident),+ $(,)?) => {
        $(
            impl<'a> private::ParseNode<'a> for $for_type<'a> {
                fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<$for_type<'a>> {
                    let mut comments = ctx.vec();
                    ctx.expect_keyword("extend", ASTKind::$for_type, &mut comments)?;
                    $take(ctx, comments)
                }
            }
        )+
    };
}

parse_type_system_extension!(
    SchemaExtension => take_schema_extension,
    ScalarTypeExtension => take_scalar_type_extension,
    ObjectTypeExtension => take_object_type_extension,
    InterfaceTypeExtension => take_interface_type_extension,
    UnionTypeExtension => take_union_type_extension,
    EnumTypeExtension => take_enum_type_extension,
    InputObjectTypeExtension => take_input_object_type_extension,
);

fn take_type_system_definition<'a>(
    ctx: &mut ParserContext<'a>,
    description: Option<StringValue<'a>>,
) -> ParseResult<Definition<'a>> {
    match ctx.peek() {
        Token::Name("schema") => take_schema_definition(ctx, description).map(Definition::Schema),
        Token::Name("scalar") => {
            take_scalar_type_definition(ctx, description).map(Definition::ScalarType)
        }
        Token::Name("type") => {
            take_object_type_definition(ctx, description).map(Definition::ObjectType)
        }
        Token::Name("interface") => {
            take_interface_type_definition(ctx, description).map(Definition::InterfaceType)
        }
        Token::Name("union") => {
            take_union_type_definition(ctx, description).map(Definition::UnionType)
        }
        Token::Name("enum") => take_enum_type_definition(ctx, description).map(Definition::EnumType),
        Token::Name("input") => {
            take_input_object_type_definition(ctx, description).map(Definition::InputObjectType)
        }
        Token::Name("directive") => {
            take_directive_definition(ctx, description).map(Definition::Directive)
        }
        _ => Err(ParseError::expected(
            ASTKind::Definition,
            "type system definition",
        )),
    }
}

fn take_type_system_extension<'a>(ctx: &mut ParserContext<'a>) -> ParseResult<Definition<'a>> {
    let mut comments = ctx.vec();
    ctx.expect_keyword("extend", ASTKind::Definition, &mut comments)?;
    match ctx.peek() {
        Token::Name("schema") => {
            take_schema_extension(ctx, comments).map(Definition::SchemaExtension)
        }
        Token::Name("scalar") => {
            take_scalar_type_extension(ctx, comments).map(Definition::ScalarTypeExtension)
        }
        Token::Name("type") => {
            take_object_type_extension(ctx, comments).map(Definition::ObjectTypeExtension)
        }
        Token::Name("interface") => {
            take_interface_type_extension(ctx, comments).map(Definition::InterfaceTypeExtension)
        }
        Token::Name("union") => {
            take_union_type_extension(ctx, comments).map(Definition::UnionTypeExtension)
        }
        Token::Name("enum") => {
            take_enum_type_extension(ctx, comments).map(Definition::EnumTypeExtension)
        }
        Token::Name("input") => take_input_object_type_extension(ctx, comments)
            .map(Definition::InputObjectTypeExtension),
        _ => Err(ParseError::expected(
            ASTKind::Definition,
            "type system extension",
        )),
    }
}

impl<'a> private::ParseNode<'a> for Definition<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Definition<'a>> {
        match ctx.peek() {
            Token::BraceOpen | Token::Name("query" | "mutation" | "subscription") => {
                OperationDefinition::new_with_ctx(ctx).map(Definition::Operation)
            }
            Token::Name("fragment") => {
                FragmentDefinition::new_with_ctx(ctx).map(Definition::Fragment)
            }
            Token::Name("extend") => take_type_system_extension(ctx),
            Token::String(_) | Token::BlockString(_) => {
                let description = ctx.take_description()?;
                take_type_system_definition(ctx, description)
            }
            Token::Name(
                "schema" | "scalar" | "type" | "interface" | "union" | "enum" | "input"
                | "directive",
            ) => take_type_system_definition(ctx, None),
            _ => Err(ParseError::new(ASTKind::Definition)),
        }
    }
}

impl<'a> private::ParseNode<'a> for Document<'a> {
    fn new_with_ctx(ctx: &mut ParserContext<'a>) -> ParseResult<Document<'a>> {
        let definitions =
            ctx.take_list(|token| token == Token::End, Definition::new_with_ctx)?;
        if definitions.is_empty() {
            return Err(ParseError::expected(ASTKind::Document, "definition"));
        }
        let mut comments = ctx.vec();
        ctx.take(&mut comments);
        Ok(Document {
            definitions,
            comments,
            size_hint: ctx.source().len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::ast::*;
    use super::ParseNode;
    use crate::error::{ErrorType, Location};
    use bumpalo::collections::Vec;
    use indoc::indoc;

    fn assert_parse<'a, T: 'a>(ctx: &'a ASTContext, source: &'a str, expected: T)
    where
        T: ParseNode<'a> + std::fmt::Debug + PartialEq,
    {
        assert_eq!(*T::parse(ctx, source).unwrap(), expected);
    }

    fn assert_syntax_error<'a, T: 'a>(ctx: &'a ASTContext, source: &'a str, message: &str)
    where
        T: ParseNode<'a> + std::fmt::Debug,
    {
        let error = T::parse(ctx, source).unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Syntax);
        assert_eq!(error.message(), message);
    }

    fn values<'a>(comments: &Comments<'a>) -> std::vec::Vec<(bool, &'a str)> {
        comments
            .iter()
            .map(|comment| (comment.is_inline(), comment.value()))
            .collect()
    }

    #[test]
    fn error_locations() {
        let ctx = ASTContext::new();
        let result = Document::parse(&ctx, "query { document { $ }}");
        assert_eq!(
            result.unwrap_err().location,
            Some(Location {
                column: 20,
                line: 1
            })
        );

        let result = Document::parse(
            &ctx,
            "query {
            document {
                $
            }
        }",
        );
        assert_eq!(
            result.unwrap_err().location,
            Some(Location {
                column: 17,
                line: 3
            })
        );
    }

    #[test]
    fn error_messages() {
        let ctx = ASTContext::new();
        assert_syntax_error::<Document>(
            &ctx,
            "{ a(b: ) }",
            "Unexpected token \")\" while parsing Value",
        );
        assert_syntax_error::<Document>(
            &ctx,
            "query {",
            "Unexpected EOF while parsing Selection",
        );
        assert_syntax_error::<Document>(
            &ctx,
            "{ }",
            "Unexpected token \"}\" while parsing Selection Set",
        );
        assert_syntax_error::<Document>(
            &ctx,
            "query Q ($a) { a }",
            "Unexpected token \")\" while parsing Variable Definition, expected \":\"",
        );
        assert_syntax_error::<Document>(
            &ctx,
            "unknown { a }",
            "Unexpected Name \"unknown\" while parsing Definition",
        );
        assert_syntax_error::<Document>(
            &ctx,
            "",
            "Unexpected EOF while parsing Document, expected definition",
        );
        assert_syntax_error::<Document>(
            &ctx,
            "fragment on on Type { a }",
            "Unexpected Name \"on\" while parsing Fragment Definition, expected fragment name",
        );
        assert_syntax_error::<Document>(
            &ctx,
            "enum E { true }",
            "Unexpected Name \"true\" while parsing Enum Value Definition, expected enum value name",
        );
        assert_syntax_error::<Document>(
            &ctx,
            "directive @a on FIELD | UNKNOWN",
            "Unexpected Name \"UNKNOWN\" while parsing Directive Locations, expected directive location",
        );
    }

    #[test]
    fn lexical_errors() {
        let ctx = ASTContext::new();
        let error = Document::parse(&ctx, "{ a(b: 0123) }").unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Lexical);
        assert_eq!(
            error.message(),
            "Unexpected character sequence \"0123) }\""
        );
        let error = Document::parse(&ctx, "{ a(b: \"\\uD800\") }").unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Lexical);
    }

    #[test]
    fn named_type() {
        let ctx = ASTContext::new();
        assert_parse(
            &ctx,
            "TypeName",
            NamedType {
                comments: Vec::new_in(&ctx.arena),
                name: Name { value: "TypeName" },
            },
        );
    }

    #[test]
    fn variable() {
        let ctx = ASTContext::new();
        assert_parse(
            &ctx,
            "$test",
            Variable {
                comments: Vec::new_in(&ctx.arena),
                name: Name { value: "test" },
            },
        );
    }

    #[test]
    fn lists() {
        let ctx = ASTContext::new();
        let list = ListValue::<Value>::parse(&ctx, "[]").unwrap();
        assert!(list.values.is_empty());

        let list = ListValue::<Value>::parse(&ctx, "[null, null]").unwrap();
        assert_eq!(list.values.len(), 2);
        assert!(matches!(list.values[0], Value::Null(_)));
    }

    #[test]
    fn objects() {
        let ctx = ASTContext::new();
        let object = ObjectValue::<Value>::parse(&ctx, "{}").unwrap();
        assert!(object.fields.is_empty());

        let object = ObjectValue::<Value>::parse(&ctx, "{ test: true }").unwrap();
        assert_eq!(object.fields.len(), 1);
        assert_eq!(object.fields[0].name.value, "test");
        assert!(matches!(
            object.fields[0].value,
            Value::Boolean(BooleanValue { value: true, .. })
        ));
    }

    #[test]
    fn value_literals() {
        let ctx = ASTContext::new();
        assert!(matches!(
            Value::parse(&ctx, "false").unwrap(),
            Value::Boolean(BooleanValue { value: false, .. })
        ));
        assert!(matches!(Value::parse(&ctx, "$var").unwrap(), Value::Variable(_)));
        assert!(matches!(
            Value::parse(&ctx, "Opt").unwrap(),
            Value::Enum(EnumValue { value: "Opt", .. })
        ));
        assert!(matches!(Value::parse(&ctx, "null").unwrap(), Value::Null(_)));
        assert!(matches!(
            Value::parse(&ctx, "\"hello world\"").unwrap(),
            Value::String(StringValue {
                value: "hello world",
                block: false,
                ..
            })
        ));
        assert!(matches!(
            Value::parse(&ctx, "\"\"\"block\"\"\"").unwrap(),
            Value::String(StringValue {
                value: "block",
                block: true,
                ..
            })
        ));
    }

    #[test]
    fn numeric_literals() {
        let ctx = ASTContext::new();
        assert!(matches!(
            Value::parse(&ctx, "123").unwrap(),
            Value::Int(IntValue { value: "123", .. })
        ));
        for float in ["123.0", "123e4", "123.0e4"] {
            assert!(matches!(
                Value::parse(&ctx, float).unwrap(),
                Value::Float(FloatValue { value, .. }) if *value == float
            ));
        }
        assert!(matches!(
            Value::parse(&ctx, "-0").unwrap(),
            Value::Int(IntValue { value: "-0", .. })
        ));
        let error = Value::parse(&ctx, "0123").unwrap_err();
        assert_eq!(error.error_type(), ErrorType::Lexical);
    }

    #[test]
    fn const_values() {
        let ctx = ASTContext::new();
        assert!(ConstValue::parse(&ctx, "[1, { a: ENUM }]").is_ok());
        assert_syntax_error::<ConstValue>(
            &ctx,
            "[1, { a: $var }]",
            "Unexpected token \"$\" while parsing Value, expected constant value",
        );
        assert!(Document::parse(&ctx, "query ($a: Int = 1) { a }").is_ok());
        assert!(Document::parse(&ctx, "query ($a: Int = $b) { a }").is_err());
        assert!(Document::parse(&ctx, "query ($a: Int @d(x: $b)) { a }").is_err());
        assert!(Document::parse(&ctx, "type A @d(a: 1) { a: Int }").is_ok());
        assert!(Document::parse(&ctx, "type A @d(a: $b) { a: Int }").is_err());
        assert!(Document::parse(&ctx, "type A { a(b: Int = [$c]): Int }").is_err());
        assert!(Document::parse(&ctx, "query { a(b: [$c]) @d(e: $f) }").is_ok());
    }

    #[test]
    fn types() {
        let ctx = ASTContext::new();
        let of_type = Type::parse(&ctx, "[String!]!").unwrap();
        let list = match of_type {
            Type::NonNull(NonNullType {
                of_type: NullableType::List(list),
                ..
            }) => list,
            _ => panic!("expected a non-null list type"),
        };
        assert!(matches!(
            list.of_type,
            Type::NonNull(NonNullType {
                of_type: NullableType::Named(_),
                ..
            })
        ));
        assert!(Document::parse(&ctx, "query ($a: String!!) { a }").is_err());
    }

    #[test]
    fn fields() {
        let ctx = ASTContext::new();
        let field = Field::parse(&ctx, "alias: field(a: 1) @skip(if: true) { child }").unwrap();
        assert_eq!(field.alias.map(|alias| alias.value), Some("alias"));
        assert_eq!(field.name.value, "field");
        assert_eq!(field.arguments.as_ref().unwrap().arguments.len(), 1);
        assert_eq!(field.directives.len(), 1);
        assert_eq!(field.selection_set.as_ref().unwrap().selections.len(), 1);
        assert!(Field::parse(&ctx, "field()").is_err());
    }

    #[test]
    fn selections() {
        let ctx = ASTContext::new();
        let selection_set = SelectionSet::parse(
            &ctx,
            "{ ...Spread @dir, ... on Type { a }, ... @dir { b }, ... { c } }",
        )
        .unwrap();
        let selections = &selection_set.selections;
        assert!(matches!(selections[0], Selection::FragmentSpread(_)));
        assert!(matches!(
            selections[1],
            Selection::InlineFragment(InlineFragment {
                type_condition: Some(_),
                ..
            })
        ));
        assert!(matches!(
            selections[2],
            Selection::InlineFragment(InlineFragment {
                type_condition: None,
                ..
            })
        ));
        assert!(matches!(selections[3], Selection::InlineFragment(_)));
    }

    #[test]
    fn operations() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            indoc! {"
                { shorthand }
                query Named($a: Int = 1, $b: [String!]! @dir) @dir { a }
                mutation { b }
                subscription Sub { c }
                fragment Frag on Type @dir { d }
            "},
        )
        .unwrap();
        assert_eq!(document.definitions.len(), 5);
        let operations: std::vec::Vec<_> = document.operations().collect();
        assert!(operations[0].is_shorthand());
        assert_eq!(operations[1].name.map(|name| name.value), Some("Named"));
        assert_eq!(
            operations[1]
                .variable_definitions
                .as_ref()
                .map(|vars| vars.definitions.len()),
            Some(2)
        );
        assert_eq!(operations[2].operation, OperationKind::Mutation);
        assert_eq!(operations[3].operation, OperationKind::Subscription);
        assert_eq!(document.fragments().count(), 1);
    }

    #[test]
    fn type_system() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, include_str!("../../fixture/kitchen_sink.graphql"));
        assert!(document.is_ok(), "{:?}", document.err());
    }

    #[test]
    fn descriptions() {
        let ctx = ASTContext::new();
        let definition = ObjectTypeDefinition::parse(
            &ctx,
            indoc! {r#"
                """
                An object
                """
                type Object {
                  "A field"
                  field("An argument" arg: Int): String
                }
            "#},
        )
        .unwrap();
        assert_eq!(
            definition.description.as_ref().map(|desc| desc.value),
            Some("An object")
        );
        let field = &definition.fields.as_ref().unwrap().definitions[0];
        assert_eq!(field.description.as_ref().map(|desc| desc.value), Some("A field"));
        let argument = &field.arguments.as_ref().unwrap().definitions[0];
        assert_eq!(
            argument.description.as_ref().map(|desc| desc.value),
            Some("An argument")
        );
    }

    #[test]
    fn directive_definitions() {
        let ctx = ASTContext::new();
        let definition = DirectiveDefinition::parse(
            &ctx,
            "directive @cached(ttl: Int = 60) repeatable on | FIELD | OBJECT",
        )
        .unwrap();
        assert!(definition.repeatable);
        assert_eq!(definition.arguments.as_ref().unwrap().definitions.len(), 1);
        let locations = &definition.locations.locations;
        assert!(matches!(
            locations[0],
            DirectiveLocation::Executable(ExecutableDirectiveLocation {
                value: ExecutableLocation::Field,
                ..
            })
        ));
        assert!(matches!(
            locations[1],
            DirectiveLocation::TypeSystem(TypeSystemDirectiveLocation {
                value: TypeSystemLocation::Object,
                ..
            })
        ));
    }

    #[test]
    fn extensions() {
        let ctx = ASTContext::new();
        assert_syntax_error::<Document>(
            &ctx,
            "extend scalar Foo",
            "Unexpected EOF while parsing Scalar Type Extension, expected \"@\"",
        );
        assert!(Document::parse(&ctx, "extend scalar Foo @x").is_ok());

        assert_syntax_error::<Document>(
            &ctx,
            "extend type Foo",
            "Unexpected EOF while parsing Object Type Extension, expected \"{\"",
        );
        assert!(Document::parse(&ctx, "extend type Foo implements Bar").is_ok());
        assert!(Document::parse(&ctx, "extend interface Foo @x").is_ok());
        assert_syntax_error::<Document>(
            &ctx,
            "extend union Foo",
            "Unexpected EOF while parsing Union Type Extension, expected \"=\"",
        );
        assert!(Document::parse(&ctx, "extend union Foo = A | B").is_ok());
        assert!(Document::parse(&ctx, "extend enum Foo { A }").is_ok());
        assert!(Document::parse(&ctx, "extend enum Foo").is_err());
        assert!(Document::parse(&ctx, "extend input Foo { a: Int }").is_ok());
        assert!(Document::parse(&ctx, "extend input Foo").is_err());
        assert!(Document::parse(&ctx, "extend schema @x").is_ok());
        assert!(Document::parse(&ctx, "extend schema { query: Query }").is_ok());
        assert_syntax_error::<Document>(
            &ctx,
            "extend schema",
            "Unexpected EOF while parsing Schema Extension, expected \"{\"",
        );
        assert!(Document::parse(&ctx, "\"description\" extend type A @x").is_err());
    }

    #[test]
    fn comments() {
        let ctx = ASTContext::new();
        let document = Document::parse(
            &ctx,
            indoc! {"
                # operation
                query Q { # opening
                  # field
                  field # after field
                  # closing
                } # after closing
                # trailing
            "},
        )
        .unwrap();
        let operation = document.operations().next().unwrap();
        assert_eq!(values(&operation.comments), [(false, " operation")]);
        let selection_set = &operation.selection_set;
        assert_eq!(
            values(&selection_set.comments_opening_bracket),
            [(true, " opening")]
        );
        assert_eq!(
            values(&selection_set.comments_closing_bracket),
            [(false, " closing"), (true, " after closing")]
        );
        match &selection_set.selections[0] {
            Selection::Field(field) => assert_eq!(
                values(&field.comments),
                [(false, " field"), (true, " after field")]
            ),
            _ => panic!("expected a field"),
        }
        assert_eq!(values(&document.comments), [(false, " trailing")]);
    }
}
