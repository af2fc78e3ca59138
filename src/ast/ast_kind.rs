use std::fmt;

/// An enum of identifiers representing AST nodes.
///
/// Every concrete AST node has exactly one kind, which [`crate::visit::Node::kind`] returns.
/// The union kinds (`Definition`, `Selection`, `Value` and `Type`) never belong to a node and
/// only appear in parsing errors, which use this enum's [`fmt::Display`] output to name the
/// production that failed.
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ASTKind {
    /// See: [crate::ast::Name]
    Name,
    /// See: [crate::ast::BlockComment]
    BlockComment,
    /// See: [crate::ast::InlineComment]
    InlineComment,
    /// See: [crate::ast::Document]
    Document,
    /// See: [crate::ast::Definition]
    Definition,
    /// See: [crate::ast::OperationDefinition]
    OperationDefinition,
    /// See: [crate::ast::FragmentDefinition]
    FragmentDefinition,
    /// See: [crate::ast::VariableDefinitionSet]
    VariableDefinitionSet,
    /// See: [crate::ast::VariableDefinition]
    VariableDefinition,
    /// See: [crate::ast::SelectionSet]
    SelectionSet,
    /// See: [crate::ast::Selection]
    Selection,
    /// See: [crate::ast::Field]
    Field,
    /// See: [crate::ast::FragmentSpread]
    FragmentSpread,
    /// See: [crate::ast::InlineFragment]
    InlineFragment,
    /// See: [crate::ast::Value]
    Value,
    /// See: [crate::ast::Variable]
    Variable,
    /// See: [crate::ast::IntValue]
    IntValue,
    /// See: [crate::ast::FloatValue]
    FloatValue,
    /// See: [crate::ast::StringValue]
    StringValue,
    /// See: [crate::ast::BooleanValue]
    BooleanValue,
    /// See: [crate::ast::NullValue]
    NullValue,
    /// See: [crate::ast::EnumValue]
    EnumValue,
    /// See: [crate::ast::ListValue]
    ListValue,
    /// See: [crate::ast::ConstListValue]
    ListValueConst,
    /// See: [crate::ast::ObjectValue]
    ObjectValue,
    /// See: [crate::ast::ConstObjectValue]
    ObjectValueConst,
    /// See: [crate::ast::ObjectField]
    ObjectField,
    /// See: [crate::ast::ConstObjectField]
    ObjectFieldConst,
    /// See: [crate::ast::Argument]
    Argument,
    /// See: [crate::ast::ConstArgument]
    ArgumentConst,
    /// See: [crate::ast::ArgumentSet]
    ArgumentSet,
    /// See: [crate::ast::ConstArgumentSet]
    ArgumentSetConst,
    /// See: [crate::ast::Directive]
    Directive,
    /// See: [crate::ast::ConstDirective]
    DirectiveConst,
    /// See: [crate::ast::Type]
    Type,
    /// See: [crate::ast::NamedType]
    NamedType,
    /// See: [crate::ast::ListType]
    ListType,
    /// See: [crate::ast::NonNullType]
    NonNullType,
    /// See: [crate::ast::NamedTypeSet]
    NamedTypeSet,
    /// See: [crate::ast::SchemaDefinition]
    SchemaDefinition,
    /// See: [crate::ast::SchemaExtension]
    SchemaExtension,
    /// See: [crate::ast::OperationTypeDefinition]
    OperationTypeDefinition,
    /// See: [crate::ast::OperationTypeDefinitionSet]
    OperationTypeDefinitionSet,
    /// See: [crate::ast::ScalarTypeDefinition]
    ScalarTypeDefinition,
    /// See: [crate::ast::ScalarTypeExtension]
    ScalarTypeExtension,
    /// See: [crate::ast::ObjectTypeDefinition]
    ObjectTypeDefinition,
    /// See: [crate::ast::ObjectTypeExtension]
    ObjectTypeExtension,
    /// See: [crate::ast::InterfaceTypeDefinition]
    InterfaceTypeDefinition,
    /// See: [crate::ast::InterfaceTypeExtension]
    InterfaceTypeExtension,
    /// See: [crate::ast::UnionTypeDefinition]
    UnionTypeDefinition,
    /// See: [crate::ast::UnionTypeExtension]
    UnionTypeExtension,
    /// See: [crate::ast::EnumTypeDefinition]
    EnumTypeDefinition,
    /// See: [crate::ast::EnumTypeExtension]
    EnumTypeExtension,
    /// See: [crate::ast::InputObjectTypeDefinition]
    InputObjectTypeDefinition,
    /// See: [crate::ast::InputObjectTypeExtension]
    InputObjectTypeExtension,
    /// See: [crate::ast::FieldDefinition]
    FieldDefinition,
    /// See: [crate::ast::FieldDefinitionSet]
    FieldDefinitionSet,
    /// See: [crate::ast::InputValueDefinition]
    InputValueDefinition,
    /// See: [crate::ast::InputValueDefinitionSet]
    InputValueDefinitionSet,
    /// See: [crate::ast::EnumValueDefinition]
    EnumValueDefinition,
    /// See: [crate::ast::EnumValueDefinitionSet]
    EnumValueDefinitionSet,
    /// See: [crate::ast::DirectiveDefinition]
    DirectiveDefinition,
    /// See: [crate::ast::DirectiveLocationSet]
    DirectiveLocationSet,
    /// See: [crate::ast::ExecutableDirectiveLocation]
    ExecutableDirectiveLocation,
    /// See: [crate::ast::TypeSystemDirectiveLocation]
    TypeSystemDirectiveLocation,
}

impl fmt::Display for ASTKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ASTKind::Name => "Name",
            ASTKind::BlockComment => "Block Comment",
            ASTKind::InlineComment => "Inline Comment",
            ASTKind::Document => "Document",
            ASTKind::Definition => "Definition",
            ASTKind::OperationDefinition => "Operation Definition",
            ASTKind::FragmentDefinition => "Fragment Definition",
            ASTKind::VariableDefinitionSet => "Variable Definitions",
            ASTKind::VariableDefinition => "Variable Definition",
            ASTKind::SelectionSet => "Selection Set",
            ASTKind::Selection => "Selection",
            ASTKind::Field => "Field",
            ASTKind::FragmentSpread => "Fragment Spread",
            ASTKind::InlineFragment => "Inline Fragment",
            ASTKind::Value => "Value",
            ASTKind::Variable => "Variable",
            ASTKind::IntValue => "Int",
            ASTKind::FloatValue => "Float",
            ASTKind::StringValue => "String",
            ASTKind::BooleanValue => "Boolean",
            ASTKind::NullValue => "Null",
            ASTKind::EnumValue => "Enum Value",
            ASTKind::ListValue => "List",
            ASTKind::ListValueConst => "Constant List",
            ASTKind::ObjectValue => "Object",
            ASTKind::ObjectValueConst => "Constant Object",
            ASTKind::ObjectField => "Object Field",
            ASTKind::ObjectFieldConst => "Constant Object Field",
            ASTKind::Argument => "Argument",
            ASTKind::ArgumentConst => "Constant Argument",
            ASTKind::ArgumentSet => "Arguments",
            ASTKind::ArgumentSetConst => "Constant Arguments",
            ASTKind::Directive => "Directive",
            ASTKind::DirectiveConst => "Constant Directive",
            ASTKind::Type => "Type",
            ASTKind::NamedType => "Named Type",
            ASTKind::ListType => "List Type",
            ASTKind::NonNullType => "Non-Null Type",
            ASTKind::NamedTypeSet => "Named Types",
            ASTKind::SchemaDefinition => "Schema Definition",
            ASTKind::SchemaExtension => "Schema Extension",
            ASTKind::OperationTypeDefinition => "Operation Type Definition",
            ASTKind::OperationTypeDefinitionSet => "Operation Type Definitions",
            ASTKind::ScalarTypeDefinition => "Scalar Type Definition",
            ASTKind::ScalarTypeExtension => "Scalar Type Extension",
            ASTKind::ObjectTypeDefinition => "Object Type Definition",
            ASTKind::ObjectTypeExtension => "Object Type Extension",
            ASTKind::InterfaceTypeDefinition => "Interface Type Definition",
            ASTKind::InterfaceTypeExtension => "Interface Type Extension",
            ASTKind::UnionTypeDefinition => "Union Type Definition",
            ASTKind::UnionTypeExtension => "Union Type Extension",
            ASTKind::EnumTypeDefinition => "Enum Type Definition",
            ASTKind::EnumTypeExtension => "Enum Type Extension",
            ASTKind::InputObjectTypeDefinition => "Input Object Type Definition",
            ASTKind::InputObjectTypeExtension => "Input Object Type Extension",
            ASTKind::FieldDefinition => "Field Definition",
            ASTKind::FieldDefinitionSet => "Field Definitions",
            ASTKind::InputValueDefinition => "Input Value Definition",
            ASTKind::InputValueDefinitionSet => "Input Value Definitions",
            ASTKind::EnumValueDefinition => "Enum Value Definition",
            ASTKind::EnumValueDefinitionSet => "Enum Value Definitions",
            ASTKind::DirectiveDefinition => "Directive Definition",
            ASTKind::DirectiveLocationSet => "Directive Locations",
            ASTKind::ExecutableDirectiveLocation => "Executable Directive Location",
            ASTKind::TypeSystemDirectiveLocation => "Type System Directive Location",
        };
        f.write_str(name)
    }
}
