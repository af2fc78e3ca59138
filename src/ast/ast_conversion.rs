use super::ast::*;
use bumpalo::collections::{vec::IntoIter, Vec};

macro_rules! into_iter {
    ($for_type:ident < $($generic:ident),* > . $field:ident => $item:ty) => {
        impl<'a, $($generic),*> IntoIterator for $for_type<'a, $($generic),*> {
            type Item = $item;
            type IntoIter = IntoIter<'a, $item>;
            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.$field.into_iter()
            }
        }
    };
    ($for_type:ident . $field:ident => $item:ty) => {
        impl<'a> IntoIterator for $for_type<'a> {
            type Item = $item;
            type IntoIter = IntoIter<'a, $item>;
            #[inline]
            fn into_iter(self) -> Self::IntoIter {
                self.$field.into_iter()
            }
        }
    };
}

into_iter!(ListValue<V>.values => V);
into_iter!(ObjectValue<V>.fields => ObjectField<'a, V>);
into_iter!(ArgumentSet<V>.arguments => Argument<'a, V>);
into_iter!(SelectionSet.selections => Selection<'a>);
into_iter!(VariableDefinitionSet.definitions => VariableDefinition<'a>);
into_iter!(OperationTypeDefinitionSet.definitions => OperationTypeDefinition<'a>);
into_iter!(FieldDefinitionSet.definitions => FieldDefinition<'a>);
into_iter!(InputValueDefinitionSet.definitions => InputValueDefinition<'a>);
into_iter!(EnumValueDefinitionSet.definitions => EnumValueDefinition<'a>);
into_iter!(NamedTypeSet.types => NamedType<'a>);
into_iter!(DirectiveLocationSet.locations => DirectiveLocation<'a>);

/// Create an empty node whose lists are allocated in the given arena.
pub trait DefaultIn<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self;
}

macro_rules! default_in_wrapped {
    ($for_type:ident < $($generic:ident),* > . $field:ident) => {
        impl<'a, $($generic),*> DefaultIn<'a> for $for_type<'a, $($generic),*> {
            fn default_in(arena: &'a bumpalo::Bump) -> Self {
                $for_type {
                    comments_opening_bracket: Vec::new_in(arena),
                    $field: Vec::new_in(arena),
                    comments_closing_bracket: Vec::new_in(arena),
                }
            }
        }
    };
    ($for_type:ident . $field:ident) => {
        impl<'a> DefaultIn<'a> for $for_type<'a> {
            fn default_in(arena: &'a bumpalo::Bump) -> Self {
                $for_type {
                    comments_opening_bracket: Vec::new_in(arena),
                    $field: Vec::new_in(arena),
                    comments_closing_bracket: Vec::new_in(arena),
                }
            }
        }
    };
}

default_in_wrapped!(ListValue<V>.values);
default_in_wrapped!(ObjectValue<V>.fields);
default_in_wrapped!(ArgumentSet<V>.arguments);
default_in_wrapped!(SelectionSet.selections);
default_in_wrapped!(VariableDefinitionSet.definitions);
default_in_wrapped!(OperationTypeDefinitionSet.definitions);
default_in_wrapped!(FieldDefinitionSet.definitions);
default_in_wrapped!(InputValueDefinitionSet.definitions);
default_in_wrapped!(EnumValueDefinitionSet.definitions);

impl<'a> DefaultIn<'a> for Document<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        Document {
            definitions: Vec::new_in(arena),
            comments: Vec::new_in(arena),
            size_hint: 0,
        }
    }
}

impl<'a> DefaultIn<'a> for NamedTypeSet<'a> {
    fn default_in(arena: &'a bumpalo::Bump) -> Self {
        NamedTypeSet {
            comments: Vec::new_in(arena),
            types: Vec::new_in(arena),
        }
    }
}

impl<'a> From<&'a str> for Name<'a> {
    #[inline]
    fn from(value: &'a str) -> Self {
        Name { value }
    }
}

macro_rules! from_variant {
    ($into:ident :: $variant:ident ($from:ident $(< $generic:ty >)?)) => {
        impl<'a> From<$from<'a $(, $generic)?>> for $into<'a> {
            #[inline]
            fn from(node: $from<'a $(, $generic)?>) -> Self {
                $into::$variant(node)
            }
        }
    };
}

from_variant!(Value::Variable(Variable));
from_variant!(Value::Int(IntValue));
from_variant!(Value::Float(FloatValue));
from_variant!(Value::String(StringValue));
from_variant!(Value::Boolean(BooleanValue));
from_variant!(Value::Null(NullValue));
from_variant!(Value::Enum(EnumValue));
from_variant!(Value::List(ListValue<Value<'a>>));
from_variant!(Value::Object(ObjectValue<Value<'a>>));

from_variant!(ConstValue::Int(IntValue));
from_variant!(ConstValue::Float(FloatValue));
from_variant!(ConstValue::String(StringValue));
from_variant!(ConstValue::Boolean(BooleanValue));
from_variant!(ConstValue::Null(NullValue));
from_variant!(ConstValue::Enum(EnumValue));
from_variant!(ConstValue::List(ListValue<ConstValue<'a>>));
from_variant!(ConstValue::Object(ObjectValue<ConstValue<'a>>));

from_variant!(Selection::Field(Field));
from_variant!(Selection::FragmentSpread(FragmentSpread));
from_variant!(Selection::InlineFragment(InlineFragment));

from_variant!(Type::Named(NamedType));
from_variant!(Type::List(ListType));
from_variant!(Type::NonNull(NonNullType));

from_variant!(NullableType::Named(NamedType));
from_variant!(NullableType::List(ListType));

from_variant!(DirectiveLocation::Executable(ExecutableDirectiveLocation));
from_variant!(DirectiveLocation::TypeSystem(TypeSystemDirectiveLocation));

from_variant!(Definition::Operation(OperationDefinition));
from_variant!(Definition::Fragment(FragmentDefinition));
from_variant!(Definition::Schema(SchemaDefinition));
from_variant!(Definition::SchemaExtension(SchemaExtension));
from_variant!(Definition::ScalarType(ScalarTypeDefinition));
from_variant!(Definition::ScalarTypeExtension(ScalarTypeExtension));
from_variant!(Definition::ObjectType(ObjectTypeDefinition));
from_variant!(Definition::ObjectTypeExtension(ObjectTypeExtension));
from_variant!(Definition::InterfaceType(InterfaceTypeDefinition));
from_variant!(Definition::InterfaceTypeExtension(InterfaceTypeExtension));
from_variant!(Definition::UnionType(UnionTypeDefinition));
from_variant!(Definition::UnionTypeExtension(UnionTypeExtension));
from_variant!(Definition::EnumType(EnumTypeDefinition));
from_variant!(Definition::EnumTypeExtension(EnumTypeExtension));
from_variant!(Definition::InputObjectType(InputObjectTypeDefinition));
from_variant!(Definition::InputObjectTypeExtension(InputObjectTypeExtension));
from_variant!(Definition::Directive(DirectiveDefinition));

impl<'a> From<ConstValue<'a>> for Value<'a> {
    /// Widen a constant value into a value, which only involves reallocating nested lists and
    /// objects.
    fn from(value: ConstValue<'a>) -> Self {
        match value {
            ConstValue::Int(value) => Value::Int(value),
            ConstValue::Float(value) => Value::Float(value),
            ConstValue::String(value) => Value::String(value),
            ConstValue::Boolean(value) => Value::Boolean(value),
            ConstValue::Null(value) => Value::Null(value),
            ConstValue::Enum(value) => Value::Enum(value),
            ConstValue::List(list) => {
                let arena = list.values.bump();
                let mut values = Vec::with_capacity_in(list.values.len(), arena);
                values.extend(list.values.into_iter().map(Value::from));
                Value::List(ListValue {
                    comments_opening_bracket: list.comments_opening_bracket,
                    values,
                    comments_closing_bracket: list.comments_closing_bracket,
                })
            }
            ConstValue::Object(object) => {
                let arena = object.fields.bump();
                let mut fields = Vec::with_capacity_in(object.fields.len(), arena);
                fields.extend(object.fields.into_iter().map(|field| ObjectField {
                    comments: field.comments,
                    name: field.name,
                    value: Value::from(field.value),
                }));
                Value::Object(ObjectValue {
                    comments_opening_bracket: object.comments_opening_bracket,
                    fields,
                    comments_closing_bracket: object.comments_closing_bracket,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ParseNode;

    #[test]
    fn widen_const_values() {
        let ctx = ASTContext::new();
        let constant = ConstValue::parse(&ctx, "{ a: [1, ENUM], b: null }").unwrap();
        let widened = Value::from(constant.clone());
        let reparsed = Value::parse(&ctx, "{ a: [1, ENUM], b: null }").unwrap();
        assert_eq!(&widened, reparsed);
    }

    #[test]
    fn empty_sets() {
        let ctx = ASTContext::new();
        let selection_set = SelectionSet::default_in(&ctx.arena);
        assert_eq!(selection_set.into_iter().count(), 0);
        let document = Document::default_in(&ctx.arena);
        assert!(document.is_empty());
    }
}
