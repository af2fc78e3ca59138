use super::{Children, PathSegment};
use crate::ast::*;
use crate::error::{Error, ErrorType, Result};
use bumpalo::collections::Vec;

/// Trait for AST nodes and their unions that can be turned into a [Node] handle.
pub trait AsNode<'a> {
    fn as_node(&'a self) -> Node<'a>;
}

/// Trait for AST nodes and their unions that can be created from a [Node] handle by cloning the
/// node it points to. Returns `None` when the handle's kind doesn't fit.
pub trait FromNode<'a>: Sized {
    fn from_node(node: Node<'a>) -> Option<Self>;
}

/// A child node with the field it's stored in and its index if that field is a list.
pub(crate) type Child<'a> = (PathSegment, Option<usize>, Node<'a>);

fn place<'a, T: FromNode<'a>>(
    node: Option<Node<'a>>,
    parent: ASTKind,
    segment: PathSegment,
) -> Result<T> {
    match node {
        Some(node) => T::from_node(node).ok_or_else(|| {
            Error::new(
                format!(
                    "{} can't be placed in the {} field of {}",
                    node.kind(),
                    segment,
                    parent
                ),
                ErrorType::Traversal,
            )
        }),
        None => Err(Error::new(
            format!("Missing {} field of {}", segment, parent),
            ErrorType::Traversal,
        )),
    }
}

macro_rules! walk {
    (@children one, $children:ident, $node:ident . $field:ident, $segment:ident) => {
        $children.push((PathSegment::$segment, None, $node.$field.as_node()));
    };
    (@children boxed, $children:ident, $node:ident . $field:ident, $segment:ident) => {
        $children.push((PathSegment::$segment, None, $node.$field.as_node()));
    };
    (@children opt, $children:ident, $node:ident . $field:ident, $segment:ident) => {
        if let Some(child) = &$node.$field {
            $children.push((PathSegment::$segment, None, child.as_node()));
        }
    };
    (@children list, $children:ident, $node:ident . $field:ident, $segment:ident) => {
        for (index, child) in $node.$field.iter().enumerate() {
            $children.push((PathSegment::$segment, Some(index), child.as_node()));
        }
    };

    (@rebuild one, $ctx:ident, $children:ident, $kind:ident, $node:ident . $field:ident, $segment:ident) => {
        $node.$field = place(
            $children.take(PathSegment::$segment),
            $kind,
            PathSegment::$segment,
        )?;
    };
    (@rebuild boxed, $ctx:ident, $children:ident, $kind:ident, $node:ident . $field:ident, $segment:ident) => {
        $node.$field = $ctx.alloc(place(
            $children.take(PathSegment::$segment),
            $kind,
            PathSegment::$segment,
        )?);
    };
    (@rebuild opt, $ctx:ident, $children:ident, $kind:ident, $node:ident . $field:ident, $segment:ident) => {
        $node.$field = match $children.take(PathSegment::$segment) {
            Some(child) => Some(place(Some(child), $kind, PathSegment::$segment)?),
            None => None,
        };
    };
    (@rebuild list, $ctx:ident, $children:ident, $kind:ident, $node:ident . $field:ident, $segment:ident) => {
        let mut list = Vec::new_in(&$ctx.arena);
        for child in $children.take_all(PathSegment::$segment) {
            list.push(place(Some(child), $kind, PathSegment::$segment)?);
        }
        $node.$field = list;
    };

    ($(
        $variant:ident ( $name:ident $(< $generic:ident >)? ) {
            $( $field:ident : $mode:ident $segment:ident ),* $(,)?
        }
    )+) => {
        /// A handle to any AST node, pointing at the node in its arena.
        ///
        /// Handles are `Copy` and are what the traversal engine passes to its hooks. Every kind of
        /// node has its own variant, and unions like [Value] or [Selection] are represented by the
        /// variant of the node they contain.
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub enum Node<'a> {
            $( $variant(&'a $name<'a $(, $generic<'a>)?>), )+
        }

        impl<'a> Node<'a> {
            /// Returns the kind of node this handle points at.
            pub fn kind(self) -> ASTKind {
                match self {
                    $( Node::$variant(_) => ASTKind::$variant, )+
                }
            }

            fn address(self) -> *const () {
                match self {
                    $( Node::$variant(node) => node as *const _ as *const (), )+
                }
            }

            /// Returns the children of this node in the order they're declared in.
            pub(crate) fn children(self) -> std::vec::Vec<Child<'a>> {
                let mut children = std::vec::Vec::new();
                match self {
                    $(
                        Node::$variant(_node) => {
                            $( walk!(@children $mode, children, _node.$field, $segment); )*
                        }
                    )+
                }
                children
            }

            /// Creates a copy of this node in the arena with its children replaced by the given
            /// ones, which must be in the same order as [`Node::children`] returns them.
            pub(crate) fn rebuild(
                self,
                ctx: &'a ASTContext,
                children: &mut Children<Node<'a>>,
            ) -> Result<Node<'a>> {
                let _kind = self.kind();
                Ok(match self {
                    $(
                        Node::$variant(node) => {
                            #[allow(unused_mut)]
                            let mut rebuilt = node.clone();
                            $( walk!(@rebuild $mode, ctx, children, _kind, rebuilt.$field, $segment); )*
                            Node::$variant(ctx.alloc(rebuilt))
                        }
                    )+
                })
            }
        }

        $(
            impl<'a> AsNode<'a> for $name<'a $(, $generic<'a>)?> {
                #[inline]
                fn as_node(&'a self) -> Node<'a> {
                    Node::$variant(self)
                }
            }

            impl<'a> FromNode<'a> for $name<'a $(, $generic<'a>)?> {
                #[inline]
                fn from_node(node: Node<'a>) -> Option<Self> {
                    match node {
                        Node::$variant(node) => Some(node.clone()),
                        _ => None,
                    }
                }
            }
        )+
    };
}

walk! {
    Name(Name) {}
    BlockComment(BlockComment) {}
    InlineComment(InlineComment) {}
    Document(Document) {
        definitions: list Definitions,
        comments: list Comments,
    }
    OperationDefinition(OperationDefinition) {
        comments: list Comments,
        name: opt Name,
        variable_definitions: opt VariableDefinitions,
        directives: list Directives,
        selection_set: one SelectionSet,
    }
    FragmentDefinition(FragmentDefinition) {
        comments: list Comments,
        name: one Name,
        type_condition: one TypeCondition,
        directives: list Directives,
        selection_set: one SelectionSet,
    }
    VariableDefinitionSet(VariableDefinitionSet) {
        comments_opening_bracket: list CommentsOpeningBracket,
        definitions: list Definitions,
        comments_closing_bracket: list CommentsClosingBracket,
    }
    VariableDefinition(VariableDefinition) {
        comments: list Comments,
        variable: one Variable,
        of_type: one Type,
        default_value: opt DefaultValue,
        directives: list Directives,
    }
    SelectionSet(SelectionSet) {
        comments_opening_bracket: list CommentsOpeningBracket,
        selections: list Selections,
        comments_closing_bracket: list CommentsClosingBracket,
    }
    Field(Field) {
        comments: list Comments,
        alias: opt Alias,
        name: one Name,
        arguments: opt Arguments,
        directives: list Directives,
        selection_set: opt SelectionSet,
    }
    FragmentSpread(FragmentSpread) {
        comments: list Comments,
        name: one Name,
        directives: list Directives,
    }
    InlineFragment(InlineFragment) {
        comments: list Comments,
        type_condition: opt TypeCondition,
        directives: list Directives,
        selection_set: one SelectionSet,
    }
    Variable(Variable) {
        comments: list Comments,
        name: one Name,
    }
    IntValue(IntValue) { comments: list Comments }
    FloatValue(FloatValue) { comments: list Comments }
    StringValue(StringValue) { comments: list Comments }
    BooleanValue(BooleanValue) { comments: list Comments }
    NullValue(NullValue) { comments: list Comments }
    EnumValue(EnumValue) { comments: list Comments }
    ListValue(ListValue<Value>) {
        comments_opening_bracket: list CommentsOpeningBracket,
        values: list Values,
        comments_closing_bracket: list CommentsClosingBracket,
    }
    ListValueConst(ListValue<ConstValue>) {
        comments_opening_bracket: list CommentsOpeningBracket,
        values: list Values,
        comments_closing_bracket: list CommentsClosingBracket,
    }
    ObjectValue(ObjectValue<Value>) {
        comments_opening_bracket: list CommentsOpeningBracket,
        fields: list Fields,
        comments_closing_bracket: list CommentsClosingBracket,
    }
    ObjectValueConst(ObjectValue<ConstValue>) {
        comments_opening_bracket: list CommentsOpeningBracket,
        fields: list Fields,
        comments_closing_bracket: list CommentsClosingBracket,
    }
    ObjectField(ObjectField<Value>) {
        comments: list Comments,
        name: one Name,
        value: one Value,
    }
    ObjectFieldConst(ObjectField<ConstValue>) {
        comments: list Comments,
        name: one Name,
        value: one Value,
    }
    Argument(Argument<Value>) {
        comments: list Comments,
        name: one Name,
        value: one Value,
    }
    ArgumentConst(Argument<ConstValue>) {
        comments: list Comments,
        name: one Name,
        value: one Value,
    }
    ArgumentSet(ArgumentSet<Value>) {
        comments_opening_bracket: list CommentsOpeningBracket,
        arguments: list Arguments,
        comments_closing_bracket: list CommentsClosingBracket,
    }
    ArgumentSetConst(ArgumentSet<ConstValue>) {
        comments_opening_bracket: list CommentsOpeningBracket,
        arguments: list Arguments,
        comments_closing_bracket: list CommentsClosingBracket,
    }
    Directive(Directive<Value>) {
        comments: list Comments,
        name: one Name,
        arguments: opt Arguments,
    }
    DirectiveConst(Directive<ConstValue>) {
        comments: list Comments,
        name: one Name,
        arguments: opt Arguments,
    }
    NamedType(NamedType) {
        comments: list Comments,
        name: one Name,
    }
    ListType(ListType) {
        comments: list Comments,
        of_type: boxed Type,
    }
    NonNullType(NonNullType) {
        comments: list Comments,
        of_type: boxed Type,
    }
    NamedTypeSet(NamedTypeSet) {
        comments: list Comments,
        types: list Types,
    }
    SchemaDefinition(SchemaDefinition) {
        comments: list Comments,
        description: opt Description,
        directives: list Directives,
        operation_types: one OperationTypes,
    }
    SchemaExtension(SchemaExtension) {
        comments: list Comments,
        directives: list Directives,
        operation_types: opt OperationTypes,
    }
    OperationTypeDefinition(OperationTypeDefinition) {
        comments: list Comments,
        named_type: one Type,
    }
    OperationTypeDefinitionSet(OperationTypeDefinitionSet) {
        comments_opening_bracket: list CommentsOpeningBracket,
        definitions: list Definitions,
        comments_closing_bracket: list CommentsClosingBracket,
    }
    ScalarTypeDefinition(ScalarTypeDefinition) {
        comments: list Comments,
        description: opt Description,
        name: one Name,
        directives: list Directives,
    }
    ScalarTypeExtension(ScalarTypeExtension) {
        comments: list Comments,
        name: one Name,
        directives: list Directives,
    }
    ObjectTypeDefinition(ObjectTypeDefinition) {
        comments: list Comments,
        description: opt Description,
        name: one Name,
        interfaces: opt Interfaces,
        directives: list Directives,
        fields: opt Fields,
    }
    ObjectTypeExtension(ObjectTypeExtension) {
        comments: list Comments,
        name: one Name,
        interfaces: opt Interfaces,
        directives: list Directives,
        fields: opt Fields,
    }
    InterfaceTypeDefinition(InterfaceTypeDefinition) {
        comments: list Comments,
        description: opt Description,
        name: one Name,
        interfaces: opt Interfaces,
        directives: list Directives,
        fields: opt Fields,
    }
    InterfaceTypeExtension(InterfaceTypeExtension) {
        comments: list Comments,
        name: one Name,
        interfaces: opt Interfaces,
        directives: list Directives,
        fields: opt Fields,
    }
    UnionTypeDefinition(UnionTypeDefinition) {
        comments: list Comments,
        description: opt Description,
        name: one Name,
        directives: list Directives,
        types: opt Types,
    }
    UnionTypeExtension(UnionTypeExtension) {
        comments: list Comments,
        name: one Name,
        directives: list Directives,
        types: opt Types,
    }
    EnumTypeDefinition(EnumTypeDefinition) {
        comments: list Comments,
        description: opt Description,
        name: one Name,
        directives: list Directives,
        values: opt Values,
    }
    EnumTypeExtension(EnumTypeExtension) {
        comments: list Comments,
        name: one Name,
        directives: list Directives,
        values: opt Values,
    }
    InputObjectTypeDefinition(InputObjectTypeDefinition) {
        comments: list Comments,
        description: opt Description,
        name: one Name,
        directives: list Directives,
        fields: opt Fields,
    }
    InputObjectTypeExtension(InputObjectTypeExtension) {
        comments: list Comments,
        name: one Name,
        directives: list Directives,
        fields: opt Fields,
    }
    FieldDefinition(FieldDefinition) {
        comments: list Comments,
        description: opt Description,
        name: one Name,
        arguments: opt Arguments,
        of_type: one Type,
        directives: list Directives,
    }
    FieldDefinitionSet(FieldDefinitionSet) {
        comments_opening_bracket: list CommentsOpeningBracket,
        definitions: list Definitions,
        comments_closing_bracket: list CommentsClosingBracket,
    }
    InputValueDefinition(InputValueDefinition) {
        comments: list Comments,
        description: opt Description,
        name: one Name,
        of_type: one Type,
        default_value: opt DefaultValue,
        directives: list Directives,
    }
    InputValueDefinitionSet(InputValueDefinitionSet) {
        comments_opening_bracket: list CommentsOpeningBracket,
        definitions: list Definitions,
        comments_closing_bracket: list CommentsClosingBracket,
    }
    EnumValueDefinition(EnumValueDefinition) {
        comments: list Comments,
        description: opt Description,
        name: one Name,
        directives: list Directives,
    }
    EnumValueDefinitionSet(EnumValueDefinitionSet) {
        comments_opening_bracket: list CommentsOpeningBracket,
        definitions: list Definitions,
        comments_closing_bracket: list CommentsClosingBracket,
    }
    DirectiveDefinition(DirectiveDefinition) {
        comments: list Comments,
        description: opt Description,
        name: one Name,
        arguments: opt Arguments,
        locations: one Locations,
    }
    DirectiveLocationSet(DirectiveLocationSet) {
        comments: list Comments,
        locations: list Locations,
    }
    ExecutableDirectiveLocation(ExecutableDirectiveLocation) { comments: list Comments }
    TypeSystemDirectiveLocation(TypeSystemDirectiveLocation) { comments: list Comments }
}

impl<'a> Node<'a> {
    /// Whether both handles point at the same node in memory.
    #[inline]
    pub fn same(self, other: Node<'a>) -> bool {
        self.kind() == other.kind() && self.address() == other.address()
    }
}

impl<'a> AsNode<'a> for Node<'a> {
    #[inline]
    fn as_node(&'a self) -> Node<'a> {
        *self
    }
}

impl<'a> FromNode<'a> for Node<'a> {
    #[inline]
    fn from_node(node: Node<'a>) -> Option<Self> {
        Some(node)
    }
}

macro_rules! union_node {
    ($union:ident { $($node:ident => $variant:ident),+ $(,)? }) => {
        impl<'a> AsNode<'a> for $union<'a> {
            #[inline]
            fn as_node(&'a self) -> Node<'a> {
                match self {
                    $( $union::$variant(node) => node.as_node(), )+
                }
            }
        }

        impl<'a> FromNode<'a> for $union<'a> {
            #[inline]
            fn from_node(node: Node<'a>) -> Option<Self> {
                match node {
                    $( Node::$node(node) => Some($union::$variant(node.clone())), )+
                    _ => None,
                }
            }
        }
    };
}

union_node!(Comment {
    BlockComment => Block,
    InlineComment => Inline,
});

union_node!(Value {
    Variable => Variable,
    IntValue => Int,
    FloatValue => Float,
    StringValue => String,
    BooleanValue => Boolean,
    NullValue => Null,
    EnumValue => Enum,
    ListValue => List,
    ObjectValue => Object,
});

union_node!(ConstValue {
    IntValue => Int,
    FloatValue => Float,
    StringValue => String,
    BooleanValue => Boolean,
    NullValue => Null,
    EnumValue => Enum,
    ListValueConst => List,
    ObjectValueConst => Object,
});

union_node!(Selection {
    Field => Field,
    FragmentSpread => FragmentSpread,
    InlineFragment => InlineFragment,
});

union_node!(Type {
    NamedType => Named,
    ListType => List,
    NonNullType => NonNull,
});

union_node!(NullableType {
    NamedType => Named,
    ListType => List,
});

union_node!(DirectiveLocation {
    ExecutableDirectiveLocation => Executable,
    TypeSystemDirectiveLocation => TypeSystem,
});

union_node!(Definition {
    OperationDefinition => Operation,
    FragmentDefinition => Fragment,
    SchemaDefinition => Schema,
    SchemaExtension => SchemaExtension,
    ScalarTypeDefinition => ScalarType,
    ScalarTypeExtension => ScalarTypeExtension,
    ObjectTypeDefinition => ObjectType,
    ObjectTypeExtension => ObjectTypeExtension,
    InterfaceTypeDefinition => InterfaceType,
    InterfaceTypeExtension => InterfaceTypeExtension,
    UnionTypeDefinition => UnionType,
    UnionTypeExtension => UnionTypeExtension,
    EnumTypeDefinition => EnumType,
    EnumTypeExtension => EnumTypeExtension,
    InputObjectTypeDefinition => InputObjectType,
    InputObjectTypeExtension => InputObjectTypeExtension,
    DirectiveDefinition => Directive,
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unions_resolve_to_their_variant() {
        let ctx = ASTContext::new();
        let value = Value::parse(&ctx, "[1]").unwrap();
        assert_eq!(value.as_node().kind(), ASTKind::ListValue);
        let value = ConstValue::parse(&ctx, "[1]").unwrap();
        assert_eq!(value.as_node().kind(), ASTKind::ListValueConst);
        let selection = Selection::parse(&ctx, "...Frag").unwrap();
        assert_eq!(selection.as_node().kind(), ASTKind::FragmentSpread);
    }

    #[test]
    fn children_in_declaration_order() {
        let ctx = ASTContext::new();
        let field = Field::parse(&ctx, "# note\nalias: name(a: 1) @skip(if: true) { child }").unwrap();
        let fields: std::vec::Vec<_> = field
            .as_node()
            .children()
            .into_iter()
            .map(|(segment, index, node)| (segment, index, node.kind()))
            .collect();
        assert_eq!(
            fields,
            [
                (PathSegment::Comments, Some(0), ASTKind::BlockComment),
                (PathSegment::Alias, None, ASTKind::Name),
                (PathSegment::Name, None, ASTKind::Name),
                (PathSegment::Arguments, None, ASTKind::ArgumentSet),
                (PathSegment::Directives, Some(0), ASTKind::Directive),
                (PathSegment::SelectionSet, None, ASTKind::SelectionSet),
            ]
        );
    }

    #[test]
    fn from_node_checks_kind() {
        let ctx = ASTContext::new();
        let field = Field::parse(&ctx, "field").unwrap();
        assert!(Selection::from_node(field.as_node()).is_some());
        assert!(Value::from_node(field.as_node()).is_none());
        assert!(field.as_node().same(field.as_node()));
        assert!(!field.as_node().same(field.name.as_node()));
    }
}
