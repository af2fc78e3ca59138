pub use super::ast_conversion::*;
use super::lexer::TokenKind;
use bumpalo::collections::Vec;

#[cfg(feature = "json")]
use serde::Serialize;

/// A context for a GraphQL document which holds an arena allocator.
///
/// For the duration of parsing, storing, traversing, and printing an AST its
/// performant and convenient to allocate memory in one chunk for the AST's operations. This
/// context represents the lifetime of an AST and its derivatives.
///
/// An AST Context in other words represents the memory a document and the operations you perform
/// on it take up. This is efficient since once you're done with the document this entire
/// allocated memory can be dropped all at once.
pub struct ASTContext {
    /// An arena allocator that holds the memory allocated for the AST Context's lifetime
    pub arena: bumpalo::Bump,
}

impl ASTContext {
    /// Create a new AST context with a preallocated arena.
    pub fn new() -> Self {
        let arena = bumpalo::Bump::new();
        ASTContext { arena }
    }

    /// Put the value of `item` onto the arena and return a reference to it.
    #[inline]
    pub fn alloc<T>(&self, item: T) -> &T {
        self.arena.alloc(item)
    }

    /// Allocate an `&str` slice onto the arena and return a reference to it.
    ///
    /// This is useful when the original slice has an undefined lifetime.
    /// This is typically unnecessary for static slices (`&'static str`) whose lifetimes are as
    /// long as the running program and don't need to be allocated dynamically.
    #[inline]
    pub fn alloc_str(&self, str: &str) -> &str {
        self.arena.alloc_str(str)
    }

    /// Puts a `String` onto the arena and returns a reference to it to tie the `String`'s lifetime
    /// to this AST context without reallocating or copying it.
    #[inline]
    pub fn alloc_string(&self, str: String) -> &str {
        self.arena.alloc(str)
    }

    /// Create an empty list that is allocated in this context's arena.
    #[inline]
    pub fn vec<T>(&self) -> Vec<'_, T> {
        Vec::new_in(&self.arena)
    }
}

impl Default for ASTContext {
    fn default() -> Self {
        Self::new()
    }
}

/// The comments attached to a node, in source order.
pub type Comments<'a> = Vec<'a, Comment<'a>>;

/// AST Node of a bare identifier.
///
/// Names never carry comments themselves. Comments found around a name are attached to the node
/// owning the name instead.
///
/// [Reference](https://spec.graphql.org/October2021/#Name)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Name<'a> {
    pub value: &'a str,
}

/// AST Node of a comment on its own line, which is printed before the node it's attached to.
///
/// The value is the comment's raw text following the `#` character.
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct BlockComment<'a> {
    pub value: &'a str,
}

/// AST Node of a comment trailing a token on the same line, which is printed after the node
/// it's attached to.
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct InlineComment<'a> {
    pub value: &'a str,
}

/// A comment attached to an AST Node.
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Comment<'a> {
    Block(BlockComment<'a>),
    Inline(InlineComment<'a>),
}

impl<'a> Comment<'a> {
    /// Returns the raw text of the comment.
    #[inline]
    pub fn value(&self) -> &'a str {
        match self {
            Comment::Block(comment) => comment.value,
            Comment::Inline(comment) => comment.value,
        }
    }

    #[inline]
    pub fn is_inline(&self) -> bool {
        matches!(self, Comment::Inline(_))
    }

    /// Returns the kind of token this comment was attached as.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        match self {
            Comment::Block(_) => TokenKind::Comment,
            Comment::Inline(_) => TokenKind::InlineComment,
        }
    }
}

/// AST Node of a variable identifier value.
///
/// These are identifiers prefixed with a `$` sign, typically in variable definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct Variable<'a> {
    pub comments: Comments<'a>,
    pub name: Name<'a>,
}

/// AST Node of an integer value.
///
/// The value is kept as it was written in the source text, e.g. `-0` stays `"-0"`.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Int-Value)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct IntValue<'a> {
    pub comments: Comments<'a>,
    pub value: &'a str,
}

/// AST Node of a floating point value.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Float-Value)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct FloatValue<'a> {
    pub comments: Comments<'a>,
    pub value: &'a str,
}

/// AST Node of a string value.
///
/// GraphQL has a number of escaped characters that are normalised away when parsing and
/// hence this `value` is expected to not contain escaped characters. Block strings have their
/// common indentation already removed.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-String-Value)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct StringValue<'a> {
    pub comments: Comments<'a>,
    pub value: &'a str,
    /// Whether the string was written as a `"""` block string and is printed as one.
    pub block: bool,
}

impl<'a> StringValue<'a> {
    /// Create a regular, single-quoted string value without comments.
    pub fn new<S: AsRef<str>>(ctx: &'a ASTContext, str: S) -> Self {
        StringValue {
            comments: ctx.vec(),
            value: ctx.alloc_str(str.as_ref()),
            block: false,
        }
    }
}

/// AST Node of a boolean value
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Boolean-Value)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct BooleanValue<'a> {
    pub comments: Comments<'a>,
    pub value: bool,
}

/// AST Node of a `null` literal.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Null-Value)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct NullValue<'a> {
    pub comments: Comments<'a>,
}

/// AST Node of an enum value.
///
/// These are typically written in all caps and snake case, e.g. "`MOBILE_WEB`".
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enum-Value)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct EnumValue<'a> {
    pub comments: Comments<'a>,
    pub value: &'a str,
}

/// AST Node for a List of values.
///
/// Lists in GraphQL are ordered sequences and serialize to JSON arrays.
/// `V` is either [Value] or [ConstValue], the latter never containing variables.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-List-Value)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct ListValue<'a, V = Value<'a>> {
    pub comments_opening_bracket: Comments<'a>,
    pub values: Vec<'a, V>,
    pub comments_closing_bracket: Comments<'a>,
}

/// AST Node for a field of an Object value.
///
/// [Reference](https://spec.graphql.org/October2021/#ObjectField)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectField<'a, V = Value<'a>> {
    pub comments: Comments<'a>,
    pub name: Name<'a>,
    pub value: V,
}

/// AST Node for an Object value, which is a list of Object fields.
///
/// Objects in GraphQL are unordered lists of keyed input values and serialize to JSON objects.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Object-Values)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectValue<'a, V = Value<'a>> {
    pub comments_opening_bracket: Comments<'a>,
    pub fields: Vec<'a, ObjectField<'a, V>>,
    pub comments_closing_bracket: Comments<'a>,
}

/// AST Node of possible input values in GraphQL.
///
/// Fields and Directives accept input values as arguments.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub enum Value<'a> {
    Variable(Variable<'a>),
    Int(IntValue<'a>),
    Float(FloatValue<'a>),
    String(StringValue<'a>),
    Boolean(BooleanValue<'a>),
    Null(NullValue<'a>),
    Enum(EnumValue<'a>),
    List(ListValue<'a, Value<'a>>),
    Object(ObjectValue<'a, Value<'a>>),
}

/// AST Node of constant input values, which are input values that can't contain variables.
///
/// These are used for default values and for arguments of directives in type system definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Values)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub enum ConstValue<'a> {
    Int(IntValue<'a>),
    Float(FloatValue<'a>),
    String(StringValue<'a>),
    Boolean(BooleanValue<'a>),
    Null(NullValue<'a>),
    Enum(EnumValue<'a>),
    List(ListValue<'a, ConstValue<'a>>),
    Object(ObjectValue<'a, ConstValue<'a>>),
}

/// A List value that can't contain variables.
pub type ConstListValue<'a> = ListValue<'a, ConstValue<'a>>;
/// An Object field whose value can't contain variables.
pub type ConstObjectField<'a> = ObjectField<'a, ConstValue<'a>>;
/// An Object value that can't contain variables.
pub type ConstObjectValue<'a> = ObjectValue<'a, ConstValue<'a>>;
/// An Argument whose value can't contain variables.
pub type ConstArgument<'a> = Argument<'a, ConstValue<'a>>;
/// A list of Arguments whose values can't contain variables.
pub type ConstArgumentSet<'a> = ArgumentSet<'a, ConstValue<'a>>;
/// A Directive whose arguments can't contain variables.
pub type ConstDirective<'a> = Directive<'a, ConstValue<'a>>;

/// A family of input values, either [Value] or [ConstValue].
///
/// This trait ties the generic value nodes, like [ListValue] or [Argument], to the value enum
/// they contain and lets the parser build both families with one recursive function.
pub trait ValueKind<'a>: Sized + Clone + 'a {
    /// Whether this family rejects variables.
    const IS_CONST: bool;

    /// Wraps a variable, which returns `None` for constant values.
    fn from_variable(value: Variable<'a>) -> Option<Self>;
    fn from_int(value: IntValue<'a>) -> Self;
    fn from_float(value: FloatValue<'a>) -> Self;
    fn from_string(value: StringValue<'a>) -> Self;
    fn from_boolean(value: BooleanValue<'a>) -> Self;
    fn from_null(value: NullValue<'a>) -> Self;
    fn from_enum(value: EnumValue<'a>) -> Self;
    fn from_list(value: ListValue<'a, Self>) -> Self;
    fn from_object(value: ObjectValue<'a, Self>) -> Self;
}

macro_rules! value_kind {
    ($for_type:ident, $is_const:expr, $from_variable:expr) => {
        impl<'a> ValueKind<'a> for $for_type<'a> {
            const IS_CONST: bool = $is_const;

            #[inline]
            fn from_variable(value: Variable<'a>) -> Option<Self> {
                $from_variable(value)
            }
            #[inline]
            fn from_int(value: IntValue<'a>) -> Self {
                $for_type::Int(value)
            }
            #[inline]
            fn from_float(value: FloatValue<'a>) -> Self {
                $for_type::Float(value)
            }
            #[inline]
            fn from_string(value: StringValue<'a>) -> Self {
                $for_type::String(value)
            }
            #[inline]
            fn from_boolean(value: BooleanValue<'a>) -> Self {
                $for_type::Boolean(value)
            }
            #[inline]
            fn from_null(value: NullValue<'a>) -> Self {
                $for_type::Null(value)
            }
            #[inline]
            fn from_enum(value: EnumValue<'a>) -> Self {
                $for_type::Enum(value)
            }
            #[inline]
            fn from_list(value: ListValue<'a, Self>) -> Self {
                $for_type::List(value)
            }
            #[inline]
            fn from_object(value: ObjectValue<'a, Self>) -> Self {
                $for_type::Object(value)
            }
        }
    };
}

value_kind!(Value, false, |value| Some(Value::Variable(value)));
value_kind!(ConstValue, true, |_| None);

/// AST Node for an Argument, which carries a name and a value.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Arguments)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct Argument<'a, V = Value<'a>> {
    pub comments: Comments<'a>,
    pub name: Name<'a>,
    pub value: V,
}

/// AST Node for a parenthesized list of Arguments on a Field or Directive.
///
/// [Reference](https://spec.graphql.org/October2021/#Arguments)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct ArgumentSet<'a, V = Value<'a>> {
    pub comments_opening_bracket: Comments<'a>,
    pub arguments: Vec<'a, Argument<'a, V>>,
    pub comments_closing_bracket: Comments<'a>,
}

impl<'a, V> ArgumentSet<'a, V> {
    /// Returns the argument with the given name, if it's present.
    pub fn get(&self, name: &str) -> Option<&Argument<'a, V>> {
        self.arguments
            .iter()
            .find(|argument| argument.name.value == name)
    }
}

/// AST Node for GraphQL Directives, which provide a way to describe alternate behavior in GraphQL.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Directives)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct Directive<'a, V = Value<'a>> {
    pub comments: Comments<'a>,
    pub name: Name<'a>,
    pub arguments: Option<ArgumentSet<'a, V>>,
}

/// AST Node for a Selection Set, which provides a list of selections on a Field or fragment.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Selection-Sets)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct SelectionSet<'a> {
    pub comments_opening_bracket: Comments<'a>,
    pub selections: Vec<'a, Selection<'a>>,
    pub comments_closing_bracket: Comments<'a>,
}

/// AST Node for a Field, which is the smallest unit of data that can be selected.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fields)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct Field<'a> {
    pub comments: Comments<'a>,
    /// An optional alias name which the Field's result is keyed under instead of its name.
    pub alias: Option<Name<'a>>,
    pub name: Name<'a>,
    pub arguments: Option<ArgumentSet<'a>>,
    pub directives: Vec<'a, Directive<'a>>,
    /// The Field's sub-selections, present for Fields returning composite types.
    pub selection_set: Option<SelectionSet<'a>>,
}

impl<'a> Field<'a> {
    /// Get the alias of the field, if present, otherwise get the name.
    #[inline]
    pub fn alias_or_name(&self) -> &'a str {
        self.alias.unwrap_or(self.name).value
    }
}

/// AST Node for a Fragment Spread, which refers to a [`FragmentDefinition`] by name.
///
/// [Reference](https://spec.graphql.org/October2021/#FragmentSpread)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentSpread<'a> {
    pub comments: Comments<'a>,
    pub name: Name<'a>,
    pub directives: Vec<'a, Directive<'a>>,
}

/// AST Node for an inline Fragment, which is a Selection Set with an optional type condition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Inline-Fragments)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct InlineFragment<'a> {
    pub comments: Comments<'a>,
    pub type_condition: Option<NamedType<'a>>,
    pub directives: Vec<'a, Directive<'a>>,
    pub selection_set: SelectionSet<'a>,
}

/// AST Node for a Selection, which is any of the nodes a [SelectionSet] contains.
///
/// [Reference](https://spec.graphql.org/October2021/#Selection)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub enum Selection<'a> {
    Field(Field<'a>),
    FragmentSpread(FragmentSpread<'a>),
    InlineFragment(InlineFragment<'a>),
}

/// AST Node for a type name.
///
/// [Reference](https://spec.graphql.org/October2021/#NamedType)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct NamedType<'a> {
    pub comments: Comments<'a>,
    pub name: Name<'a>,
}

/// AST Node for a list type wrapping another type, e.g. `[String]`.
///
/// [Reference](https://spec.graphql.org/October2021/#ListType)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct ListType<'a> {
    pub comments: Comments<'a>,
    pub of_type: &'a Type<'a>,
}

/// AST Node for a non-null type wrapping a named or list type, e.g. `String!`.
///
/// A non-null type can't wrap another non-null type, which [NullableType] enforces.
///
/// [Reference](https://spec.graphql.org/October2021/#NonNullType)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct NonNullType<'a> {
    pub comments: Comments<'a>,
    pub of_type: &'a NullableType<'a>,
}

/// AST Node of a type reference, as used by variable, field and input value definitions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-References)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub enum Type<'a> {
    Named(NamedType<'a>),
    List(ListType<'a>),
    NonNull(NonNullType<'a>),
}

/// The types a [NonNullType] may wrap.
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub enum NullableType<'a> {
    Named(NamedType<'a>),
    List(ListType<'a>),
}

impl<'a> Type<'a> {
    /// Returns the name of the innermost named type.
    pub fn of_name(&self) -> &'a str {
        match self {
            Type::Named(named) => named.name.value,
            Type::List(list) => list.of_type.of_name(),
            Type::NonNull(non_null) => match non_null.of_type {
                NullableType::Named(named) => named.name.value,
                NullableType::List(list) => list.of_type.of_name(),
            },
        }
    }
}

/// AST Node for a list of named types, e.g. `implements A & B` or `= A | B`.
///
/// The set's comments are those attached to its introducing keyword and delimiters.
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct NamedTypeSet<'a> {
    pub comments: Comments<'a>,
    pub types: Vec<'a, NamedType<'a>>,
}

/// AST Node for a variable definition.
///
/// A variable definition defines the type of a variable, its default value, and any directives
/// that are annotating it.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Variables)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinition<'a> {
    pub comments: Comments<'a>,
    pub variable: Variable<'a>,
    pub of_type: Type<'a>,
    pub default_value: Option<ConstValue<'a>>,
    pub directives: Vec<'a, ConstDirective<'a>>,
}

/// AST Node for the parenthesized list of variable definitions of an operation.
///
/// [Reference](https://spec.graphql.org/October2021/#VariableDefinitions)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct VariableDefinitionSet<'a> {
    pub comments_opening_bracket: Comments<'a>,
    pub definitions: Vec<'a, VariableDefinition<'a>>,
    pub comments_closing_bracket: Comments<'a>,
}

/// AST Node for a Fragment definition with an additional Selection Set.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Fragments)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct FragmentDefinition<'a> {
    pub comments: Comments<'a>,
    pub name: Name<'a>,
    pub type_condition: NamedType<'a>,
    pub directives: Vec<'a, Directive<'a>>,
    pub selection_set: SelectionSet<'a>,
}

/// A Root Operation Kind.
///
/// In GraphQL there are three different operations, with each having a unique identifier on
/// Operation Definitions.
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum OperationKind {
    Query,
    Mutation,
    Subscription,
}

impl OperationKind {
    /// Returns the keyword that introduces operations of this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Query => "query",
            OperationKind::Mutation => "mutation",
            OperationKind::Subscription => "subscription",
        }
    }
}

/// AST Node for an Operation Definition, which defines the entrypoint for GraphQL's execution.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Language.Operations)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct OperationDefinition<'a> {
    pub comments: Comments<'a>,
    /// The kind of operation that this definition specifies
    pub operation: OperationKind,
    // An optional name, as given to the operation definition.
    //
    // A [Document] may contain multiple Operation Definitions from which a single one can be
    // selected during execution. When a Document contains only a single operation, it doesn't
    // have to have a name.
    pub name: Option<Name<'a>>,
    pub variable_definitions: Option<VariableDefinitionSet<'a>>,
    pub directives: Vec<'a, Directive<'a>>,
    pub selection_set: SelectionSet<'a>,
}

impl<'a> OperationDefinition<'a> {
    /// Whether this operation may be written as a bare selection set.
    #[inline]
    pub fn is_shorthand(&self) -> bool {
        self.operation == OperationKind::Query
            && self.name.is_none()
            && self.variable_definitions.is_none()
            && self.directives.is_empty()
    }
}

/// AST Node for the schema definition, which names the root operation types.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaDefinition<'a> {
    pub comments: Comments<'a>,
    pub description: Option<StringValue<'a>>,
    pub directives: Vec<'a, ConstDirective<'a>>,
    pub operation_types: OperationTypeDefinitionSet<'a>,
}

/// AST Node for a schema extension.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Schema-Extension)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct SchemaExtension<'a> {
    pub comments: Comments<'a>,
    pub directives: Vec<'a, ConstDirective<'a>>,
    pub operation_types: Option<OperationTypeDefinitionSet<'a>>,
}

/// AST Node for a root operation type, e.g. `query: Query`.
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct OperationTypeDefinition<'a> {
    pub comments: Comments<'a>,
    pub operation: OperationKind,
    pub named_type: NamedType<'a>,
}

#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct OperationTypeDefinitionSet<'a> {
    pub comments_opening_bracket: Comments<'a>,
    pub definitions: Vec<'a, OperationTypeDefinition<'a>>,
    pub comments_closing_bracket: Comments<'a>,
}

/// AST Node for a custom scalar type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Scalars)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct ScalarTypeDefinition<'a> {
    pub comments: Comments<'a>,
    pub description: Option<StringValue<'a>>,
    pub name: Name<'a>,
    pub directives: Vec<'a, ConstDirective<'a>>,
}

#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct ScalarTypeExtension<'a> {
    pub comments: Comments<'a>,
    pub name: Name<'a>,
    pub directives: Vec<'a, ConstDirective<'a>>,
}

/// AST Node for an object type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Objects)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectTypeDefinition<'a> {
    pub comments: Comments<'a>,
    pub description: Option<StringValue<'a>>,
    pub name: Name<'a>,
    pub interfaces: Option<NamedTypeSet<'a>>,
    pub directives: Vec<'a, ConstDirective<'a>>,
    pub fields: Option<FieldDefinitionSet<'a>>,
}

#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct ObjectTypeExtension<'a> {
    pub comments: Comments<'a>,
    pub name: Name<'a>,
    pub interfaces: Option<NamedTypeSet<'a>>,
    pub directives: Vec<'a, ConstDirective<'a>>,
    pub fields: Option<FieldDefinitionSet<'a>>,
}

/// AST Node for an interface type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Interfaces)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct InterfaceTypeDefinition<'a> {
    pub comments: Comments<'a>,
    pub description: Option<StringValue<'a>>,
    pub name: Name<'a>,
    pub interfaces: Option<NamedTypeSet<'a>>,
    pub directives: Vec<'a, ConstDirective<'a>>,
    pub fields: Option<FieldDefinitionSet<'a>>,
}

#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct InterfaceTypeExtension<'a> {
    pub comments: Comments<'a>,
    pub name: Name<'a>,
    pub interfaces: Option<NamedTypeSet<'a>>,
    pub directives: Vec<'a, ConstDirective<'a>>,
    pub fields: Option<FieldDefinitionSet<'a>>,
}

/// AST Node for a union type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Unions)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct UnionTypeDefinition<'a> {
    pub comments: Comments<'a>,
    pub description: Option<StringValue<'a>>,
    pub name: Name<'a>,
    pub directives: Vec<'a, ConstDirective<'a>>,
    pub types: Option<NamedTypeSet<'a>>,
}

#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct UnionTypeExtension<'a> {
    pub comments: Comments<'a>,
    pub name: Name<'a>,
    pub directives: Vec<'a, ConstDirective<'a>>,
    pub types: Option<NamedTypeSet<'a>>,
}

/// AST Node for an enum type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Enums)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct EnumTypeDefinition<'a> {
    pub comments: Comments<'a>,
    pub description: Option<StringValue<'a>>,
    pub name: Name<'a>,
    pub directives: Vec<'a, ConstDirective<'a>>,
    pub values: Option<EnumValueDefinitionSet<'a>>,
}

#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct EnumTypeExtension<'a> {
    pub comments: Comments<'a>,
    pub name: Name<'a>,
    pub directives: Vec<'a, ConstDirective<'a>>,
    pub values: Option<EnumValueDefinitionSet<'a>>,
}

/// AST Node for an input object type.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Input-Objects)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct InputObjectTypeDefinition<'a> {
    pub comments: Comments<'a>,
    pub description: Option<StringValue<'a>>,
    pub name: Name<'a>,
    pub directives: Vec<'a, ConstDirective<'a>>,
    pub fields: Option<InputValueDefinitionSet<'a>>,
}

#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct InputObjectTypeExtension<'a> {
    pub comments: Comments<'a>,
    pub name: Name<'a>,
    pub directives: Vec<'a, ConstDirective<'a>>,
    pub fields: Option<InputValueDefinitionSet<'a>>,
}

/// AST Node for a field of an object or interface type.
///
/// [Reference](https://spec.graphql.org/October2021/#FieldDefinition)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct FieldDefinition<'a> {
    pub comments: Comments<'a>,
    pub description: Option<StringValue<'a>>,
    pub name: Name<'a>,
    pub arguments: Option<InputValueDefinitionSet<'a>>,
    pub of_type: Type<'a>,
    pub directives: Vec<'a, ConstDirective<'a>>,
}

#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct FieldDefinitionSet<'a> {
    pub comments_opening_bracket: Comments<'a>,
    pub definitions: Vec<'a, FieldDefinition<'a>>,
    pub comments_closing_bracket: Comments<'a>,
}

/// AST Node for an argument definition or an input object field.
///
/// [Reference](https://spec.graphql.org/October2021/#InputValueDefinition)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct InputValueDefinition<'a> {
    pub comments: Comments<'a>,
    pub description: Option<StringValue<'a>>,
    pub name: Name<'a>,
    pub of_type: Type<'a>,
    pub default_value: Option<ConstValue<'a>>,
    pub directives: Vec<'a, ConstDirective<'a>>,
}

/// A list of input value definitions.
///
/// Written in parentheses for argument definitions and in braces for input object fields.
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct InputValueDefinitionSet<'a> {
    pub comments_opening_bracket: Comments<'a>,
    pub definitions: Vec<'a, InputValueDefinition<'a>>,
    pub comments_closing_bracket: Comments<'a>,
}

/// AST Node for a value of an enum type.
///
/// [Reference](https://spec.graphql.org/October2021/#EnumValueDefinition)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct EnumValueDefinition<'a> {
    pub comments: Comments<'a>,
    pub description: Option<StringValue<'a>>,
    pub name: Name<'a>,
    pub directives: Vec<'a, ConstDirective<'a>>,
}

#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct EnumValueDefinitionSet<'a> {
    pub comments_opening_bracket: Comments<'a>,
    pub definitions: Vec<'a, EnumValueDefinition<'a>>,
    pub comments_closing_bracket: Comments<'a>,
}

/// AST Node for a directive definition.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Type-System.Directives)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct DirectiveDefinition<'a> {
    pub comments: Comments<'a>,
    pub description: Option<StringValue<'a>>,
    pub name: Name<'a>,
    pub arguments: Option<InputValueDefinitionSet<'a>>,
    pub repeatable: bool,
    pub locations: DirectiveLocationSet<'a>,
}

/// The `|`-separated locations a directive definition declares.
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct DirectiveLocationSet<'a> {
    pub comments: Comments<'a>,
    pub locations: Vec<'a, DirectiveLocation<'a>>,
}

/// A location in executable documents where a directive may appear.
///
/// [Reference](https://spec.graphql.org/October2021/#ExecutableDirectiveLocation)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ExecutableLocation {
    Query,
    Mutation,
    Subscription,
    Field,
    FragmentDefinition,
    FragmentSpread,
    InlineFragment,
    VariableDefinition,
}

impl ExecutableLocation {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "QUERY" => ExecutableLocation::Query,
            "MUTATION" => ExecutableLocation::Mutation,
            "SUBSCRIPTION" => ExecutableLocation::Subscription,
            "FIELD" => ExecutableLocation::Field,
            "FRAGMENT_DEFINITION" => ExecutableLocation::FragmentDefinition,
            "FRAGMENT_SPREAD" => ExecutableLocation::FragmentSpread,
            "INLINE_FRAGMENT" => ExecutableLocation::InlineFragment,
            "VARIABLE_DEFINITION" => ExecutableLocation::VariableDefinition,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutableLocation::Query => "QUERY",
            ExecutableLocation::Mutation => "MUTATION",
            ExecutableLocation::Subscription => "SUBSCRIPTION",
            ExecutableLocation::Field => "FIELD",
            ExecutableLocation::FragmentDefinition => "FRAGMENT_DEFINITION",
            ExecutableLocation::FragmentSpread => "FRAGMENT_SPREAD",
            ExecutableLocation::InlineFragment => "INLINE_FRAGMENT",
            ExecutableLocation::VariableDefinition => "VARIABLE_DEFINITION",
        }
    }
}

/// A location in type system documents where a directive may appear.
///
/// [Reference](https://spec.graphql.org/October2021/#TypeSystemDirectiveLocation)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum TypeSystemLocation {
    Schema,
    Scalar,
    Object,
    FieldDefinition,
    ArgumentDefinition,
    Interface,
    Union,
    Enum,
    EnumValue,
    InputObject,
    InputFieldDefinition,
}

impl TypeSystemLocation {
    pub fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "SCHEMA" => TypeSystemLocation::Schema,
            "SCALAR" => TypeSystemLocation::Scalar,
            "OBJECT" => TypeSystemLocation::Object,
            "FIELD_DEFINITION" => TypeSystemLocation::FieldDefinition,
            "ARGUMENT_DEFINITION" => TypeSystemLocation::ArgumentDefinition,
            "INTERFACE" => TypeSystemLocation::Interface,
            "UNION" => TypeSystemLocation::Union,
            "ENUM" => TypeSystemLocation::Enum,
            "ENUM_VALUE" => TypeSystemLocation::EnumValue,
            "INPUT_OBJECT" => TypeSystemLocation::InputObject,
            "INPUT_FIELD_DEFINITION" => TypeSystemLocation::InputFieldDefinition,
            _ => return None,
        })
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TypeSystemLocation::Schema => "SCHEMA",
            TypeSystemLocation::Scalar => "SCALAR",
            TypeSystemLocation::Object => "OBJECT",
            TypeSystemLocation::FieldDefinition => "FIELD_DEFINITION",
            TypeSystemLocation::ArgumentDefinition => "ARGUMENT_DEFINITION",
            TypeSystemLocation::Interface => "INTERFACE",
            TypeSystemLocation::Union => "UNION",
            TypeSystemLocation::Enum => "ENUM",
            TypeSystemLocation::EnumValue => "ENUM_VALUE",
            TypeSystemLocation::InputObject => "INPUT_OBJECT",
            TypeSystemLocation::InputFieldDefinition => "INPUT_FIELD_DEFINITION",
        }
    }
}

#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct ExecutableDirectiveLocation<'a> {
    pub comments: Comments<'a>,
    pub value: ExecutableLocation,
}

#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct TypeSystemDirectiveLocation<'a> {
    pub comments: Comments<'a>,
    pub value: TypeSystemLocation,
}

/// A location named by a directive definition, tagged by which closed set it belongs to.
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub enum DirectiveLocation<'a> {
    Executable(ExecutableDirectiveLocation<'a>),
    TypeSystem(TypeSystemDirectiveLocation<'a>),
}

impl<'a> DirectiveLocation<'a> {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectiveLocation::Executable(location) => location.value.as_str(),
            DirectiveLocation::TypeSystem(location) => location.value.as_str(),
        }
    }
}

/// AST Root Node for a GraphQL document. This contains one or more definitions of
/// operations, fragments, or type system definitions and extensions.
///
/// [Reference](https://spec.graphql.org/October2021/#sec-Document)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub struct Document<'a> {
    pub definitions: Vec<'a, Definition<'a>>,
    /// Comments trailing the last definition.
    pub comments: Comments<'a>,
    /// A hint on how large the source text was from which this Document was parsed.
    ///
    /// This gives an initial indication of the starting capacity of a `String` that will hold the stringified
    /// document.
    #[cfg_attr(feature = "json", serde(skip))]
    pub size_hint: usize,
}

impl<'a> Document<'a> {
    /// Checks whether this document contains any definitions.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Returns an iterator over all operation definitions in this document.
    pub fn operations(&self) -> impl Iterator<Item = &OperationDefinition<'a>> {
        self.definitions.iter().filter_map(Definition::operation)
    }

    /// Returns an iterator over all fragment definitions in this document.
    pub fn fragments(&self) -> impl Iterator<Item = &FragmentDefinition<'a>> {
        self.definitions.iter().filter_map(Definition::fragment)
    }
}

/// AST Node for a Definition inside a GraphQL document.
///
/// [Reference](https://spec.graphql.org/October2021/#Definition)
#[cfg_attr(feature = "json", derive(Serialize))]
#[derive(Debug, PartialEq, Clone)]
pub enum Definition<'a> {
    Operation(OperationDefinition<'a>),
    Fragment(FragmentDefinition<'a>),
    Schema(SchemaDefinition<'a>),
    SchemaExtension(SchemaExtension<'a>),
    ScalarType(ScalarTypeDefinition<'a>),
    ScalarTypeExtension(ScalarTypeExtension<'a>),
    ObjectType(ObjectTypeDefinition<'a>),
    ObjectTypeExtension(ObjectTypeExtension<'a>),
    InterfaceType(InterfaceTypeDefinition<'a>),
    InterfaceTypeExtension(InterfaceTypeExtension<'a>),
    UnionType(UnionTypeDefinition<'a>),
    UnionTypeExtension(UnionTypeExtension<'a>),
    EnumType(EnumTypeDefinition<'a>),
    EnumTypeExtension(EnumTypeExtension<'a>),
    InputObjectType(InputObjectTypeDefinition<'a>),
    InputObjectTypeExtension(InputObjectTypeExtension<'a>),
    Directive(DirectiveDefinition<'a>),
}

impl<'a> Definition<'a> {
    /// Helper method to return the [`OperationDefinition`] if the Definition is an `OperationDefinition`.
    #[inline]
    pub fn operation(&self) -> Option<&OperationDefinition<'a>> {
        match self {
            Definition::Operation(operation) => Some(operation),
            _ => None,
        }
    }

    /// Helper method to return the [`FragmentDefinition`] if the Definition is a `FragmentDefinition`.
    #[inline]
    pub fn fragment(&self) -> Option<&FragmentDefinition<'a>> {
        match self {
            Definition::Fragment(fragment) => Some(fragment),
            _ => None,
        }
    }

    /// Whether this definition is part of an executable document, i.e. an operation or fragment.
    #[inline]
    pub fn is_executable(&self) -> bool {
        matches!(self, Definition::Operation(_) | Definition::Fragment(_))
    }
}

/// Trait implemented by all ast nodes that can have directives attached.
pub trait WithDirectives<'a, V: ValueKind<'a>> {
    fn directives(&self) -> &Vec<'a, Directive<'a, V>>;
}

macro_rules! with_directives {
    ($value:ident => $($for_type:ident),+) => {
        $(
            impl<'a> WithDirectives<'a, $value<'a>> for $for_type<'a> {
                #[inline]
                fn directives(&self) -> &Vec<'a, Directive<'a, $value<'a>>> {
                    &self.directives
                }
            }
        )+
    };
}

with_directives!(
    Value => OperationDefinition,
    FragmentDefinition,
    Field,
    FragmentSpread,
    InlineFragment
);

with_directives!(
    ConstValue => VariableDefinition,
    SchemaDefinition,
    SchemaExtension,
    ScalarTypeDefinition,
    ScalarTypeExtension,
    ObjectTypeDefinition,
    ObjectTypeExtension,
    InterfaceTypeDefinition,
    InterfaceTypeExtension,
    UnionTypeDefinition,
    UnionTypeExtension,
    EnumTypeDefinition,
    EnumTypeExtension,
    InputObjectTypeDefinition,
    InputObjectTypeExtension,
    FieldDefinition,
    InputValueDefinition,
    EnumValueDefinition
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ParseNode;

    #[test]
    fn type_names() {
        let ctx = ASTContext::new();
        let of_type = Type::parse(&ctx, "[[User!]]!").unwrap();
        assert_eq!(of_type.of_name(), "User");
    }

    #[test]
    fn field_alias_or_name() {
        let ctx = ASTContext::new();
        let field = Field::parse(&ctx, "alias: field").unwrap();
        assert_eq!(field.alias_or_name(), "alias");
        let field = Field::parse(&ctx, "field").unwrap();
        assert_eq!(field.alias_or_name(), "field");
    }

    #[test]
    fn shorthand_operations() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "{ a } query Q { b } mutation { c }").unwrap();
        let shorthand = document
            .operations()
            .map(OperationDefinition::is_shorthand)
            .collect::<std::vec::Vec<_>>();
        assert_eq!(shorthand, [true, false, false]);
    }

    #[test]
    fn directive_lookup() {
        let ctx = ASTContext::new();
        let field = Field::parse(&ctx, "field @skip(if: true) @include(if: $var)").unwrap();
        let directives = field.directives();
        assert_eq!(directives.len(), 2);
        let include = directives[1].arguments.as_ref().unwrap();
        assert!(matches!(include.get("if").unwrap().value, Value::Variable(_)));
        assert!(include.get("else").is_none());
    }

    #[test]
    fn location_names() {
        assert_eq!(
            ExecutableLocation::from_name("FRAGMENT_SPREAD"),
            Some(ExecutableLocation::FragmentSpread)
        );
        assert_eq!(ExecutableLocation::from_name("SCHEMA"), None);
        assert_eq!(
            TypeSystemLocation::from_name("INPUT_FIELD_DEFINITION").map(|loc| loc.as_str()),
            Some("INPUT_FIELD_DEFINITION")
        );
    }
}
