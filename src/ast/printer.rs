use super::ast::*;
use super::ast_kind::ASTKind;
use crate::error::Result;
use crate::visit::{traverse, traverse_list, AsNode, Children, Node, PathSegment, Traversal, VisitInfo};
use std::fmt;

/// Options that control how AST Nodes are printed.
///
/// By default output is compact and comments are dropped. Printing never changes which tokens are
/// emitted, only the whitespace between them and whether comments are kept.
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct PrintOptions {
    /// Print all comments attached to nodes.
    pub preserve_comments: bool,
    /// Insert spaces around punctuators and blank lines between definitions.
    pub pretty: bool,
}

impl PrintOptions {
    pub fn new() -> Self {
        PrintOptions::default()
    }

    pub fn preserve_comments(mut self, preserve_comments: bool) -> Self {
        self.preserve_comments = preserve_comments;
        self
    }

    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

/// Trait for printing AST Nodes to a new String allocated on the heap.
/// This is implemented by all AST Nodes and unions and can hence be used to granularly print
/// GraphQL language.
///
/// Output is stable: parsing printed output and printing it again with the same options yields
/// the same text.
///
/// ```
/// use graphql_syntax::ast::*;
///
/// let ctx = ASTContext::new();
/// let document = Document::parse(&ctx, "{ a, b(c: 42) }").unwrap();
/// assert_eq!(document.print(), "{a,b(c:42)}\n");
/// assert_eq!(
///     document.print_with(PrintOptions::new().pretty(true)),
///     "{ a, b(c: 42) }\n"
/// );
/// ```
pub trait PrintNode<'a>: AsNode<'a> {
    /// Prints an AST Node to a compact String without comments.
    fn print(&'a self) -> String {
        self.print_with(PrintOptions::default())
    }

    /// Prints an AST Node to a String using the given options.
    fn print_with(&'a self, options: PrintOptions) -> String {
        print_node(self.as_node(), options)
    }
}

impl<'a, T: AsNode<'a> + ?Sized> PrintNode<'a> for T {}

/// Prints a list of nodes, each of them independently of the others.
pub fn print_list<'a, I>(nodes: I, options: PrintOptions) -> Result<Vec<String>>
where
    I: IntoIterator<Item = Node<'a>>,
{
    traverse_list(nodes, &mut Printer { options })
}

#[inline]
fn print_node(node: Node<'_>, options: PrintOptions) -> String {
    match traverse(node, &mut Printer { options }) {
        Ok(output) => output,
        // The printer has no `enter` hook and its `leave` hook always returns `Ok`.
        Err(error) => unreachable!("printing can't fail: {}", error),
    }
}

impl<'a> fmt::Display for Node<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&print_node(*self, PrintOptions::default()))
    }
}

/// Appends printed text to `out`.
///
/// Printed text starts with a line break when it has to begin on a new line, which is only added
/// when `out` doesn't already end in one. Spaces around line breaks are dropped.
fn glue(out: &mut String, text: &str) {
    if out.ends_with('\n') {
        let text = text.trim_start_matches(' ');
        out.push_str(text.strip_prefix('\n').unwrap_or(text));
    } else {
        if text.starts_with('\n') {
            out.truncate(out.trim_end_matches(' ').len());
        }
        out.push_str(text);
    }
}

fn concat<const N: usize>(parts: [&str; N]) -> String {
    let mut out = String::new();
    for part in parts {
        glue(&mut out, part);
    }
    out
}

struct Printer {
    options: PrintOptions,
}

impl Printer {
    #[inline]
    fn space(&self) -> &'static str {
        if self.options.pretty {
            " "
        } else {
            ""
        }
    }

    #[inline]
    fn separator(&self) -> &'static str {
        if self.options.pretty {
            ", "
        } else {
            ","
        }
    }

    fn comment(&self, value: &str) -> String {
        if !self.options.preserve_comments {
            String::new()
        } else if self.options.pretty {
            format!("# {}\n", value.trim_start())
        } else {
            format!("#{}\n", value)
        }
    }

    /// Places printed comments around a node's body.
    ///
    /// Only the node's last comment may follow the body, when it's an inline comment and the body
    /// ends in one of the node's own tokens. Every other comment goes on its own line before the
    /// body, so that reparsing the output attaches each comment to the same node again.
    fn attach(
        &self,
        comments: &Comments<'_>,
        outputs: Vec<String>,
        body: String,
        ends_with_own_token: bool,
    ) -> String {
        let trailing = match comments.last() {
            Some(comment) if ends_with_own_token && comment.is_inline() => comments.len() - 1,
            _ => comments.len(),
        };
        let mut leading = String::new();
        let mut inline = String::new();
        for (index, output) in outputs.into_iter().enumerate() {
            if index == trailing {
                inline = output;
            } else {
                leading.push_str(&output);
            }
        }
        if leading.is_empty() && inline.is_empty() {
            return body;
        }
        let mut out = String::with_capacity(leading.len() + body.len() + inline.len() + 2);
        if !leading.is_empty() {
            out.push('\n');
            out.push_str(&leading);
        }
        glue(&mut out, &body);
        if !inline.is_empty() {
            out.push_str(self.space());
            out.push_str(&inline);
        }
        out
    }

    #[inline]
    fn with_comments(
        &self,
        comments: &Comments<'_>,
        children: &mut Children<String>,
        body: String,
        ends_with_own_token: bool,
    ) -> String {
        let outputs = children.take_all(PathSegment::Comments);
        self.attach(comments, outputs, body, ends_with_own_token)
    }

    /// Prints a bracketed list. Braces are padded with spaces in pretty mode.
    fn wrapped(
        &self,
        children: &mut Children<String>,
        items: PathSegment,
        (open, close): (&str, &str),
        opening: &Comments<'_>,
        closing: &Comments<'_>,
    ) -> String {
        let opening = self.attach(
            opening,
            children.take_all(PathSegment::CommentsOpeningBracket),
            open.to_string(),
            true,
        );
        let items = children.take_all(items);
        let closing = self.attach(
            closing,
            children.take_all(PathSegment::CommentsClosingBracket),
            close.to_string(),
            true,
        );
        let padded = self.options.pretty && open == "{" && !items.is_empty();
        let mut out = opening;
        if padded {
            glue(&mut out, " ");
        }
        for (index, item) in items.iter().enumerate() {
            if index > 0 && !out.ends_with('\n') {
                glue(&mut out, self.separator());
            }
            glue(&mut out, item);
        }
        if padded {
            glue(&mut out, " ");
        }
        glue(&mut out, &closing);
        out
    }

    /// Joins the items of a list that's delimited by tokens, like `A & B` or `FIELD | QUERY`.
    fn delimited(&self, mut out: String, items: Vec<String>, delimiter: &str) -> String {
        for (index, item) in items.iter().enumerate() {
            if index > 0 {
                glue(&mut out, delimiter);
            }
            glue(&mut out, item);
        }
        out
    }

    fn directives(&self, children: &mut Children<String>) -> String {
        let mut out = String::new();
        for directive in children.take_all(PathSegment::Directives) {
            glue(&mut out, self.space());
            glue(&mut out, &directive);
        }
        out
    }

    /// Prints the body of a definition after its description, if it has one.
    fn described(&self, children: &mut Children<String>, body: String) -> String {
        match children.take(PathSegment::Description) {
            Some(description) if self.options.pretty => concat([&description, "\n", &body]),
            Some(description) => concat([&description, &body]),
            None => body,
        }
    }

    /// Prints the part of an object, interface, union, enum, or input type that follows its
    /// keyword, and whether it ends with the type's name.
    fn type_body(&self, children: &mut Children<String>) -> (String, bool) {
        let mut out = take(children, PathSegment::Name);
        let mut ends_with_name = true;
        if let Some(interfaces) = children.take(PathSegment::Interfaces) {
            glue(&mut out, " ");
            glue(&mut out, &interfaces);
            ends_with_name = false;
        }
        let directives = self.directives(children);
        if !directives.is_empty() {
            glue(&mut out, &directives);
            ends_with_name = false;
        }
        for segment in [PathSegment::Fields, PathSegment::Types, PathSegment::Values] {
            if let Some(set) = children.take(segment) {
                glue(&mut out, self.space());
                glue(&mut out, &set);
                ends_with_name = false;
            }
        }
        (out, ends_with_name)
    }

    fn schema_body(&self, children: &mut Children<String>) -> String {
        let mut out = self.directives(children);
        if let Some(operation_types) = children.take(PathSegment::OperationTypes) {
            glue(&mut out, self.space());
            glue(&mut out, &operation_types);
        }
        out
    }

    fn default_value(&self, children: &mut Children<String>) -> String {
        match children.take(PathSegment::DefaultValue) {
            Some(value) => concat([self.space(), "=", self.space(), &value]),
            None => String::new(),
        }
    }
}

#[inline]
fn take(children: &mut Children<String>, segment: PathSegment) -> String {
    children.take(segment).unwrap_or_default()
}

impl<'a> Traversal<'a> for Printer {
    type Output = String;

    fn leave(
        &mut self,
        node: Node<'a>,
        mut children: Children<String>,
        info: &VisitInfo<'a>,
    ) -> Result<String> {
        let s = self.space();
        let out = match node {
            Node::Name(name) => name.value.to_string(),
            Node::BlockComment(comment) => self.comment(comment.value),
            Node::InlineComment(comment) => self.comment(comment.value),

            Node::Document(document) => {
                let separator = if self.options.pretty { "\n\n" } else { "\n" };
                let mut out = String::with_capacity(document.size_hint);
                let definitions = children.take_all(PathSegment::Definitions);
                for (index, definition) in definitions.iter().enumerate() {
                    if index > 0 {
                        glue(&mut out, separator);
                    }
                    glue(&mut out, definition);
                }
                glue(&mut out, "\n");
                for comment in children.take_all(PathSegment::Comments) {
                    out.push_str(&comment);
                }
                out.trim_start_matches('\n').to_string()
            }

            Node::OperationDefinition(operation) if operation.is_shorthand() => {
                let body = take(&mut children, PathSegment::SelectionSet);
                self.with_comments(&operation.comments, &mut children, body, false)
            }
            Node::OperationDefinition(operation) => {
                let name = match children.take(PathSegment::Name) {
                    Some(name) => format!(" {}", name),
                    None => String::new(),
                };
                let variables = take(&mut children, PathSegment::VariableDefinitions);
                let directives = self.directives(&mut children);
                let selection_set = take(&mut children, PathSegment::SelectionSet);
                let body = concat([
                    operation.operation.as_str(),
                    &name,
                    &variables,
                    &directives,
                    s,
                    &selection_set,
                ]);
                self.with_comments(&operation.comments, &mut children, body, false)
            }
            Node::FragmentDefinition(fragment) => {
                let name = take(&mut children, PathSegment::Name);
                let type_condition = take(&mut children, PathSegment::TypeCondition);
                let directives = self.directives(&mut children);
                let selection_set = take(&mut children, PathSegment::SelectionSet);
                let body = concat([
                    "fragment ",
                    &name,
                    " on ",
                    &type_condition,
                    &directives,
                    s,
                    &selection_set,
                ]);
                self.with_comments(&fragment.comments, &mut children, body, false)
            }
            Node::VariableDefinitionSet(set) => self.wrapped(
                &mut children,
                PathSegment::Definitions,
                ("(", ")"),
                &set.comments_opening_bracket,
                &set.comments_closing_bracket,
            ),
            Node::VariableDefinition(definition) => {
                let variable = take(&mut children, PathSegment::Variable);
                let of_type = take(&mut children, PathSegment::Type);
                let default_value = self.default_value(&mut children);
                let directives = self.directives(&mut children);
                let body = concat([&variable, ":", s, &of_type, &default_value, &directives]);
                self.with_comments(&definition.comments, &mut children, body, false)
            }

            Node::SelectionSet(set) => self.wrapped(
                &mut children,
                PathSegment::Selections,
                ("{", "}"),
                &set.comments_opening_bracket,
                &set.comments_closing_bracket,
            ),
            Node::Field(field) => {
                let alias = match children.take(PathSegment::Alias) {
                    Some(alias) => format!("{}:{}", alias, s),
                    None => String::new(),
                };
                let name = take(&mut children, PathSegment::Name);
                let arguments = children.take(PathSegment::Arguments);
                let directives = self.directives(&mut children);
                let selection_set = children.take(PathSegment::SelectionSet);
                let ends_with_name =
                    arguments.is_none() && directives.is_empty() && selection_set.is_none();
                let body = concat([
                    &alias,
                    &name,
                    arguments.as_deref().unwrap_or_default(),
                    &directives,
                    if selection_set.is_some() { s } else { "" },
                    selection_set.as_deref().unwrap_or_default(),
                ]);
                self.with_comments(&field.comments, &mut children, body, ends_with_name)
            }
            Node::FragmentSpread(spread) => {
                let name = take(&mut children, PathSegment::Name);
                let directives = self.directives(&mut children);
                let ends_with_name = directives.is_empty();
                let body = concat(["...", &name, &directives]);
                self.with_comments(&spread.comments, &mut children, body, ends_with_name)
            }
            Node::InlineFragment(fragment) => {
                let type_condition = match children.take(PathSegment::TypeCondition) {
                    Some(type_condition) => concat([s, "on ", &type_condition]),
                    None => String::new(),
                };
                let directives = self.directives(&mut children);
                let selection_set = take(&mut children, PathSegment::SelectionSet);
                let body = concat(["...", &type_condition, &directives, s, &selection_set]);
                self.with_comments(&fragment.comments, &mut children, body, false)
            }

            Node::Variable(variable) => {
                let body = format!("${}", take(&mut children, PathSegment::Name));
                self.with_comments(&variable.comments, &mut children, body, true)
            }
            Node::IntValue(value) => {
                self.with_comments(&value.comments, &mut children, value.value.to_string(), true)
            }
            Node::FloatValue(value) => {
                self.with_comments(&value.comments, &mut children, value.value.to_string(), true)
            }
            Node::EnumValue(value) => {
                self.with_comments(&value.comments, &mut children, value.value.to_string(), true)
            }
            Node::BooleanValue(value) => {
                let body = if value.value { "true" } else { "false" };
                self.with_comments(&value.comments, &mut children, body.to_string(), true)
            }
            Node::NullValue(value) => {
                self.with_comments(&value.comments, &mut children, "null".to_string(), true)
            }
            Node::StringValue(value) => {
                let body = if value.block {
                    print_block_string(value.value)
                } else {
                    print_string(value.value)
                };
                self.with_comments(&value.comments, &mut children, body, true)
            }
            Node::ListValue(ListValue {
                comments_opening_bracket: opening,
                comments_closing_bracket: closing,
                ..
            })
            | Node::ListValueConst(ListValue {
                comments_opening_bracket: opening,
                comments_closing_bracket: closing,
                ..
            }) => self.wrapped(&mut children, PathSegment::Values, ("[", "]"), opening, closing),
            Node::ObjectValue(ObjectValue {
                comments_opening_bracket: opening,
                comments_closing_bracket: closing,
                ..
            })
            | Node::ObjectValueConst(ObjectValue {
                comments_opening_bracket: opening,
                comments_closing_bracket: closing,
                ..
            }) => self.wrapped(&mut children, PathSegment::Fields, ("{", "}"), opening, closing),
            Node::ObjectField(ObjectField { comments, .. })
            | Node::ObjectFieldConst(ObjectField { comments, .. })
            | Node::Argument(Argument { comments, .. })
            | Node::ArgumentConst(Argument { comments, .. }) => {
                let name = take(&mut children, PathSegment::Name);
                let value = take(&mut children, PathSegment::Value);
                let body = concat([&name, ":", s, &value]);
                self.with_comments(comments, &mut children, body, false)
            }
            Node::ArgumentSet(ArgumentSet {
                comments_opening_bracket: opening,
                comments_closing_bracket: closing,
                ..
            })
            | Node::ArgumentSetConst(ArgumentSet {
                comments_opening_bracket: opening,
                comments_closing_bracket: closing,
                ..
            }) => self.wrapped(
                &mut children,
                PathSegment::Arguments,
                ("(", ")"),
                opening,
                closing,
            ),
            Node::Directive(Directive { comments, .. })
            | Node::DirectiveConst(Directive { comments, .. }) => {
                let name = take(&mut children, PathSegment::Name);
                let arguments = children.take(PathSegment::Arguments);
                let ends_with_name = arguments.is_none();
                let body = concat(["@", &name, arguments.as_deref().unwrap_or_default()]);
                self.with_comments(comments, &mut children, body, ends_with_name)
            }

            Node::NamedType(named_type) => {
                let body = take(&mut children, PathSegment::Name);
                self.with_comments(&named_type.comments, &mut children, body, true)
            }
            Node::ListType(list_type) => {
                let body = concat(["[", &take(&mut children, PathSegment::Type), "]"]);
                self.with_comments(&list_type.comments, &mut children, body, true)
            }
            Node::NonNullType(non_null) => {
                // All of its comments belong to the `!`, which follows the wrapped type.
                let bang = self.with_comments(&non_null.comments, &mut children, "!".into(), true);
                concat([&take(&mut children, PathSegment::Type), &bang])
            }
            Node::NamedTypeSet(set) => {
                let types = children.take_all(PathSegment::Types);
                let body = match info.parent.map(|parent| parent.kind()) {
                    Some(
                        ASTKind::ObjectTypeDefinition
                        | ASTKind::ObjectTypeExtension
                        | ASTKind::InterfaceTypeDefinition
                        | ASTKind::InterfaceTypeExtension,
                    ) => self.delimited("implements ".to_string(), types, &format!("{s}&{s}")),
                    Some(ASTKind::UnionTypeDefinition | ASTKind::UnionTypeExtension) => {
                        self.delimited(format!("={s}"), types, &format!("{s}|{s}"))
                    }
                    _ => self.delimited(String::new(), types, self.separator()),
                };
                self.with_comments(&set.comments, &mut children, body, false)
            }

            Node::SchemaDefinition(schema) => {
                let body = concat(["schema", &self.schema_body(&mut children)]);
                let body = self.with_comments(&schema.comments, &mut children, body, false);
                self.described(&mut children, body)
            }
            Node::SchemaExtension(schema) => {
                let body = concat(["extend schema", &self.schema_body(&mut children)]);
                self.with_comments(&schema.comments, &mut children, body, false)
            }
            Node::OperationTypeDefinition(definition) => {
                let named_type = take(&mut children, PathSegment::Type);
                let body = concat([definition.operation.as_str(), ":", s, &named_type]);
                self.with_comments(&definition.comments, &mut children, body, false)
            }
            Node::OperationTypeDefinitionSet(set) => self.wrapped(
                &mut children,
                PathSegment::Definitions,
                ("{", "}"),
                &set.comments_opening_bracket,
                &set.comments_closing_bracket,
            ),
            Node::ScalarTypeDefinition(scalar) => {
                let name = take(&mut children, PathSegment::Name);
                let directives = self.directives(&mut children);
                let ends_with_name = directives.is_empty();
                let body = concat(["scalar ", &name, &directives]);
                let body =
                    self.with_comments(&scalar.comments, &mut children, body, ends_with_name);
                self.described(&mut children, body)
            }
            Node::ScalarTypeExtension(scalar) => {
                let name = take(&mut children, PathSegment::Name);
                let directives = self.directives(&mut children);
                let ends_with_name = directives.is_empty();
                let body = concat(["extend scalar ", &name, &directives]);
                self.with_comments(&scalar.comments, &mut children, body, ends_with_name)
            }
            Node::ObjectTypeDefinition(ObjectTypeDefinition { comments, .. })
            | Node::InterfaceTypeDefinition(InterfaceTypeDefinition { comments, .. })
            | Node::UnionTypeDefinition(UnionTypeDefinition { comments, .. })
            | Node::EnumTypeDefinition(EnumTypeDefinition { comments, .. })
            | Node::InputObjectTypeDefinition(InputObjectTypeDefinition { comments, .. }) => {
                let (rest, ends_with_name) = self.type_body(&mut children);
                let body = concat([keyword(node.kind()), " ", &rest]);
                let body = self.with_comments(comments, &mut children, body, ends_with_name);
                self.described(&mut children, body)
            }
            Node::ObjectTypeExtension(ObjectTypeExtension { comments, .. })
            | Node::InterfaceTypeExtension(InterfaceTypeExtension { comments, .. })
            | Node::UnionTypeExtension(UnionTypeExtension { comments, .. })
            | Node::EnumTypeExtension(EnumTypeExtension { comments, .. })
            | Node::InputObjectTypeExtension(InputObjectTypeExtension { comments, .. }) => {
                let (rest, ends_with_name) = self.type_body(&mut children);
                let body = concat(["extend ", keyword(node.kind()), " ", &rest]);
                self.with_comments(comments, &mut children, body, ends_with_name)
            }

            Node::FieldDefinition(definition) => {
                let name = take(&mut children, PathSegment::Name);
                let arguments = take(&mut children, PathSegment::Arguments);
                let of_type = take(&mut children, PathSegment::Type);
                let directives = self.directives(&mut children);
                let body = concat([&name, &arguments, ":", s, &of_type, &directives]);
                let body = self.with_comments(&definition.comments, &mut children, body, false);
                self.described(&mut children, body)
            }
            Node::FieldDefinitionSet(set) => self.wrapped(
                &mut children,
                PathSegment::Definitions,
                ("{", "}"),
                &set.comments_opening_bracket,
                &set.comments_closing_bracket,
            ),
            Node::InputValueDefinition(definition) => {
                let name = take(&mut children, PathSegment::Name);
                let of_type = take(&mut children, PathSegment::Type);
                let default_value = self.default_value(&mut children);
                let directives = self.directives(&mut children);
                let body = concat([&name, ":", s, &of_type, &default_value, &directives]);
                let body = self.with_comments(&definition.comments, &mut children, body, false);
                self.described(&mut children, body)
            }
            Node::InputValueDefinitionSet(set) => {
                let brackets = match info.parent.map(|parent| parent.kind()) {
                    Some(ASTKind::FieldDefinition | ASTKind::DirectiveDefinition) => ("(", ")"),
                    _ => ("{", "}"),
                };
                self.wrapped(
                    &mut children,
                    PathSegment::Definitions,
                    brackets,
                    &set.comments_opening_bracket,
                    &set.comments_closing_bracket,
                )
            }
            Node::EnumValueDefinition(definition) => {
                let name = take(&mut children, PathSegment::Name);
                let directives = self.directives(&mut children);
                let ends_with_name = directives.is_empty();
                let body = concat([&name, &directives]);
                let body =
                    self.with_comments(&definition.comments, &mut children, body, ends_with_name);
                self.described(&mut children, body)
            }
            Node::EnumValueDefinitionSet(set) => self.wrapped(
                &mut children,
                PathSegment::Definitions,
                ("{", "}"),
                &set.comments_opening_bracket,
                &set.comments_closing_bracket,
            ),

            Node::DirectiveDefinition(definition) => {
                let name = take(&mut children, PathSegment::Name);
                let arguments = take(&mut children, PathSegment::Arguments);
                let locations = take(&mut children, PathSegment::Locations);
                let repeatable = if definition.repeatable { " repeatable" } else { "" };
                let body = concat(["directive @", &name, &arguments, repeatable, " ", &locations]);
                let body = self.with_comments(&definition.comments, &mut children, body, false);
                self.described(&mut children, body)
            }
            Node::DirectiveLocationSet(set) => {
                let locations = children.take_all(PathSegment::Locations);
                let body = self.delimited("on ".to_string(), locations, &format!("{s}|{s}"));
                self.with_comments(&set.comments, &mut children, body, false)
            }
            Node::ExecutableDirectiveLocation(location) => self.with_comments(
                &location.comments,
                &mut children,
                location.value.as_str().to_string(),
                true,
            ),
            Node::TypeSystemDirectiveLocation(location) => self.with_comments(
                &location.comments,
                &mut children,
                location.value.as_str().to_string(),
                true,
            ),
        };
        Ok(out)
    }
}

#[inline]
fn keyword(kind: ASTKind) -> &'static str {
    match kind {
        ASTKind::ObjectTypeDefinition | ASTKind::ObjectTypeExtension => "type",
        ASTKind::InterfaceTypeDefinition | ASTKind::InterfaceTypeExtension => "interface",
        ASTKind::UnionTypeDefinition | ASTKind::UnionTypeExtension => "union",
        ASTKind::EnumTypeDefinition | ASTKind::EnumTypeExtension => "enum",
        _ => "input",
    }
}

// See: https://github.com/graphql-rust/graphql-parser/blob/ff34bae/src/format.rs#L127-L167
fn print_string(value: &str) -> String {
    use lexical_core::*;
    const FORMAT: u128 = NumberFormatBuilder::hexadecimal();
    const OPTIONS: WriteIntegerOptions = WriteIntegerOptions::new();

    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str(r"\\"),
            '\u{8}' => out.push_str(r"\b"),
            '\u{c}' => out.push_str(r"\f"),
            '\n' => out.push_str(r"\n"),
            '\r' => out.push_str(r"\r"),
            '\t' => out.push_str(r"\t"),
            '\u{0}'..='\u{1f}' => {
                let mut buf = [b'0'; u32::FORMATTED_SIZE];
                let digits = write_with_options::<_, FORMAT>(c as u32, &mut buf, &OPTIONS);
                out.push_str(r"\u");
                for _ in digits.len()..4 {
                    out.push('0');
                }
                out.extend(digits.iter().map(|digit| *digit as char));
            }
            _ => out.push(c),
        }
    }
    out.push('"');
    out
}

fn print_block_string(value: &str) -> String {
    let escaped = value.replace(r#"""""#, r#"\""""#);
    let mut lines = value.lines();
    lines.next();
    let mut rest = lines.peekable();
    // When every line after the first is indented, the indentation would be stripped on reparse
    // unless the first line moves onto a line of its own.
    let leading_newline = rest.peek().is_some()
        && rest.all(|line| line.is_empty() || line.starts_with(&[' ', '\t'][..]));
    let trailing_newline =
        leading_newline || escaped.ends_with('"') || escaped.ends_with('\\');

    let mut out = String::with_capacity(escaped.len() + 8);
    out.push_str(r#"""""#);
    if leading_newline {
        out.push('\n');
    }
    out.push_str(&escaped);
    if trailing_newline {
        out.push('\n');
    }
    out.push_str(r#"""""#);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::ParseNode;
    use indoc::indoc;

    fn compact() -> PrintOptions {
        PrintOptions::new()
    }

    fn pretty() -> PrintOptions {
        PrintOptions::new().pretty(true)
    }

    fn assert_stable(source: &str, options: PrintOptions) -> String {
        let ctx = ASTContext::new();
        let first = Document::parse(&ctx, source).unwrap().print_with(options);
        let second = Document::parse(&ctx, first.as_str())
            .unwrap()
            .print_with(options);
        assert_eq!(first, second);
        first
    }

    #[test]
    fn shorthand_query() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "{a,b(c:42)}").unwrap();
        assert_eq!(document.print(), "{a,b(c:42)}\n");
    }

    #[test]
    fn operations() {
        let ctx = ASTContext::new();
        let source = indoc! {"
            query Q($a: Int = 1, $b: [String!]! @dir) @dir {
              alias: b(c: $a)
              ... on T { d }
              ... @skip(if: true) { e }
              ...F
            }
            mutation { m }
            fragment F on T { f }
        "};
        let document = Document::parse(&ctx, source).unwrap();
        assert_eq!(
            document.print(),
            indoc! {"
                query Q($a:Int=1,$b:[String!]!@dir)@dir{alias:b(c:$a),...on T{d},...@skip(if:true){e},...F}
                mutation{m}
                fragment F on T{f}
            "}
        );
        assert_eq!(
            document.print_with(pretty()),
            indoc! {"
                query Q($a: Int = 1, $b: [String!]! @dir) @dir { alias: b(c: $a), ... on T { d }, ... @skip(if: true) { e }, ...F }

                mutation { m }

                fragment F on T { f }
            "}
        );
    }

    #[test]
    fn values() {
        let ctx = ASTContext::new();
        let value = Value::parse(
            &ctx,
            r#"{ a: [1, -2.5e3, "s", """b""", true, null, ENUM, $v], b: {}, c: [] }"#,
        )
        .unwrap();
        assert_eq!(
            value.print(),
            r#"{a:[1,-2.5e3,"s","""b""",true,null,ENUM,$v],b:{},c:[]}"#
        );
        assert_eq!(
            value.print_with(pretty()),
            r#"{ a: [1, -2.5e3, "s", """b""", true, null, ENUM, $v], b: {}, c: [] }"#
        );
    }

    #[test]
    fn strings() {
        let ctx = ASTContext::new();
        let string = StringValue::parse(&ctx, r#""a\"b\\c\nd\u0001\t""#).unwrap();
        assert_eq!(string.value, "a\"b\\c\nd\u{1}\t");
        assert_eq!(string.print(), r#""a\"b\\c\nd\u0001\t""#);

        let string = StringValue::new(&ctx, "\u{8}\u{c}\r\u{10}é");
        assert_eq!(string.print(), r#""\b\f\r\u0010é""#);
    }

    #[test]
    fn block_strings() {
        let ctx = ASTContext::new();
        let string = StringValue::parse(&ctx, r#""""a \""" b""""#).unwrap();
        assert_eq!(string.value, r#"a """ b"#);
        assert_eq!(string.print(), r#""""a \""" b""""#);

        let string = StringValue::parse(&ctx, "\"\"\"\n  a\n    b\n  \"\"\"").unwrap();
        assert_eq!(string.value, "a\n  b");
        let printed = string.print();
        assert_eq!(printed, "\"\"\"\na\n  b\n\"\"\"");
        assert_eq!(StringValue::parse(&ctx, printed.as_str()).unwrap(), string);

        let string = StringValue {
            comments: ctx.vec(),
            value: "ends in \"",
            block: true,
        };
        let printed = string.print();
        assert_eq!(printed, "\"\"\"ends in \"\n\"\"\"");
        assert_eq!(StringValue::parse(&ctx, printed.as_str()).unwrap().value, "ends in \"");
    }

    #[test]
    fn type_system() {
        let ctx = ASTContext::new();
        let source = indoc! {r#"
            schema @d { query: Q mutation: M }
            "scalar" scalar S @d
            type A implements B & C @d { "desc" a(b: Int = 1): [String!]! }
            union U @d = A | B
            enum E { "value" A @d B }
            input I { a: Int = 1, b: [I] }
            directive @a(b: Int) repeatable on FIELD | QUERY
        "#};
        let document = Document::parse(&ctx, source).unwrap();
        assert_eq!(
            document.print(),
            indoc! {r#"
                schema@d{query:Q,mutation:M}
                "scalar"scalar S@d
                type A implements B&C@d{"desc"a(b:Int=1):[String!]!}
                union U@d=A|B
                enum E{"value"A@d,B}
                input I{a:Int=1,b:[I]}
                directive @a(b:Int) repeatable on FIELD|QUERY
            "#}
        );
        assert_eq!(
            document.print_with(pretty()),
            indoc! {r#"
                schema @d { query: Q, mutation: M }

                "scalar"
                scalar S @d

                type A implements B & C @d { "desc"
                a(b: Int = 1): [String!]! }

                union U @d = A | B

                enum E { "value"
                A @d, B }

                input I { a: Int = 1, b: [I] }

                directive @a(b: Int) repeatable on FIELD | QUERY
            "#}
        );
    }

    #[test]
    fn extensions() {
        let ctx = ASTContext::new();
        let source = indoc! {"
            extend schema @d
            extend scalar S @d
            extend type A implements B { b: Int }
            extend interface I implements J
            extend union U = C
            extend enum E { C }
            extend input I { b: Int }
        "};
        let document = Document::parse(&ctx, source).unwrap();
        assert_eq!(
            document.print(),
            indoc! {"
                extend schema@d
                extend scalar S@d
                extend type A implements B{b:Int}
                extend interface I implements J
                extend union U=C
                extend enum E{C}
                extend input I{b:Int}
            "}
        );
    }

    #[test]
    fn contextual_sets() {
        let ctx = ASTContext::new();
        let object = ObjectTypeDefinition::parse(&ctx, "type A implements B & C").unwrap();
        let interfaces = object.interfaces.as_ref().unwrap();
        assert_eq!(interfaces.print(), "B,C");
        let arguments = InputValueDefinitionSet::parse(&ctx, "(a: Int)").unwrap();
        assert_eq!(arguments.print(), "{a:Int}");
        let locations = DirectiveLocationSet::parse(&ctx, "on FIELD | SCHEMA").unwrap();
        assert_eq!(locations.print(), "on FIELD|SCHEMA");
    }

    #[test]
    fn comments() {
        let source = indoc! {"
            # operation
            query Q { # opening
              # field
              field # after field
              # closing
            } # after closing
            # trailing
        "};
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, source).unwrap();
        assert_eq!(document.print(), "query Q{field}\n");
        assert_eq!(
            document.print_with(compact().preserve_comments(true)),
            "# operation\nquery Q{# opening\n# field\nfield# after field\n# closing\n}# after closing\n# trailing\n"
        );
        assert_eq!(
            document.print_with(pretty().preserve_comments(true)),
            "# operation\nquery Q { # opening\n# field\nfield # after field\n# closing\n} # after closing\n# trailing\n"
        );
    }

    #[test]
    fn comments_inside_productions() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "{ a(x: # one\n 1 # two\n ) }").unwrap();
        assert_eq!(
            document.print_with(compact().preserve_comments(true)),
            "{a(\n# one\nx:1# two\n)}\n"
        );
        assert_eq!(
            document.print_with(pretty().preserve_comments(true)),
            "{ a(\n# one\nx: 1 # two\n) }\n"
        );

        let source = "type A # t1\n implements # t2\n B # t3\n { a: Int }";
        let document = Document::parse(&ctx, source).unwrap();
        assert_eq!(
            document.print_with(compact().preserve_comments(true)),
            "# t1\ntype A\n# t2\nimplements B# t3\n{a:Int}\n"
        );
        assert_eq!(
            document.print_with(pretty().preserve_comments(true)),
            "# t1\ntype A\n# t2\nimplements B # t3\n{ a: Int }\n"
        );

        let document = Document::parse(&ctx, "{ ... # spread\n Frag }").unwrap();
        assert_eq!(
            document.print_with(compact().preserve_comments(true)),
            "{...Frag# spread\n}\n"
        );
    }

    #[test]
    fn comments_around_wrapping_types() {
        let ctx = ASTContext::new();
        let source = "query($a: # colon\n # type\n Int # after type\n # bang\n !) { a }";
        let document = Document::parse(&ctx, source).unwrap();
        let output = assert_stable(source, compact().preserve_comments(true));
        assert_eq!(
            output,
            "query(\n# colon\n$a:\n# type\nInt# after type\n# bang\n!){a}\n"
        );
        assert_eq!(document.print_with(compact().preserve_comments(true)), output);
    }

    #[test]
    fn print_lists() {
        let ctx = ASTContext::new();
        let document = Document::parse(&ctx, "{ a } query Q { b }").unwrap();
        let printed = print_list(
            document.definitions.iter().map(|definition| definition.as_node()),
            compact(),
        )
        .unwrap();
        assert_eq!(printed, ["{a}", "query Q{b}"]);
        assert_eq!(document.definitions[1].as_node().to_string(), "query Q{b}");
    }

    #[test]
    fn stable_output() {
        let sources = [
            include_str!("../../fixture/kitchen_sink.graphql"),
            include_str!("../../fixture/comments.graphql"),
            include_str!("../../fixture/inner_comments.graphql"),
            "{ a(x: # one\n 1 # two\n ) }",
            "type A # t1\n implements # t2\n B # t3\n { a: Int }",
            "\"desc\" # d\n # s\n scalar S # n\n",
        ];
        for source in sources {
            for options in [
                compact(),
                pretty(),
                compact().preserve_comments(true),
                pretty().preserve_comments(true),
            ] {
                assert_stable(source, options);
            }
        }
    }

    #[test]
    fn pretty_output_has_same_tokens() {
        let ctx = ASTContext::new();
        let source = include_str!("../../fixture/kitchen_sink.graphql");
        let document = Document::parse(&ctx, source).unwrap();
        let pretty = document.print_with(pretty());
        let reparsed = Document::parse(&ctx, pretty.as_str()).unwrap();
        assert_eq!(reparsed.print(), document.print());
    }

    #[test]
    fn all_comments_are_printed() {
        let ctx = ASTContext::new();
        let source = include_str!("../../fixture/comments.graphql");
        let document = Document::parse(&ctx, source).unwrap();
        let output = document.print_with(compact().preserve_comments(true));
        for n in 1..=46 {
            let comment = format!("#comment {}\n", n);
            assert!(output.contains(&comment), "missing {:?} in {}", comment, output);
        }
        assert!(!document.print().contains('#'));
    }

    #[test]
    fn all_inner_comments_are_printed() {
        let ctx = ASTContext::new();
        let source = include_str!("../../fixture/inner_comments.graphql");
        let document = Document::parse(&ctx, source).unwrap();
        for options in [compact(), pretty()] {
            let output = document.print_with(options.preserve_comments(true));
            let prefix = if options.pretty { "# " } else { "#" };
            for n in 1..=35 {
                let comment = format!("{}inner {}\n", prefix, n);
                assert!(output.contains(&comment), "missing {:?} in {}", comment, output);
            }
            assert_eq!(output.matches('#').count(), 35);
        }
        assert!(!document.print().contains('#'));
    }

    #[test]
    fn comments_of_a_node_keep_their_order() {
        let ctx = ASTContext::new();
        let source = include_str!("../../fixture/inner_comments.graphql");
        let document = Document::parse(&ctx, source).unwrap();
        let output = document.print_with(compact().preserve_comments(true));
        let position = |n: usize| output.find(&format!("#inner {}\n", n)).unwrap();
        for (before, after) in [(8, 9), (14, 15), (17, 18), (19, 20), (20, 21), (21, 22), (31, 32)] {
            assert!(position(before) < position(after), "{} printed after {}", before, after);
        }
    }
}
