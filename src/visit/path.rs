use crate::error::{Error, ErrorType};
use std::fmt;

/// The location of a node relative to the node a traversal started at.
///
/// A path is made up of field names and list indices, e.g. `definitions.0.selectionSet.selections.1`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Path {
    pub segments: Vec<PathSegment>,
}

impl Path {
    pub fn push(&mut self, segment: PathSegment) {
        self.segments.push(segment)
    }

    pub fn pop(&mut self) -> Option<PathSegment> {
        self.segments.pop()
    }

    /// Returns the last segment, which is the key of the current node in its parent.
    pub fn last(&self) -> Option<&PathSegment> {
        self.segments.last()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl TryFrom<&str> for Path {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Ok(Self::default());
        }
        let segments = value
            .split('.')
            .map(PathSegment::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.segments
                .iter()
                .map(|segment| segment.to_string())
                .collect::<Vec<_>>()
                .join(".")
        )
    }
}

/// A single step of a [Path], either a node's field or an index into a list field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PathSegment {
    Index(usize),

    Alias,
    Arguments,
    Comments,
    CommentsClosingBracket,
    CommentsOpeningBracket,
    DefaultValue,
    Definitions,
    Description,
    Directives,
    Fields,
    Interfaces,
    Locations,
    Name,
    OperationTypes,
    SelectionSet,
    Selections,
    Type,
    TypeCondition,
    Types,
    Value,
    Values,
    Variable,
    VariableDefinitions,
}

impl PathSegment {
    fn as_str(&self) -> Option<&'static str> {
        Some(match self {
            PathSegment::Index(_) => return None,
            PathSegment::Alias => "alias",
            PathSegment::Arguments => "arguments",
            PathSegment::Comments => "comments",
            PathSegment::CommentsClosingBracket => "commentsClosingBracket",
            PathSegment::CommentsOpeningBracket => "commentsOpeningBracket",
            PathSegment::DefaultValue => "defaultValue",
            PathSegment::Definitions => "definitions",
            PathSegment::Description => "description",
            PathSegment::Directives => "directives",
            PathSegment::Fields => "fields",
            PathSegment::Interfaces => "interfaces",
            PathSegment::Locations => "locations",
            PathSegment::Name => "name",
            PathSegment::OperationTypes => "operationTypes",
            PathSegment::SelectionSet => "selectionSet",
            PathSegment::Selections => "selections",
            PathSegment::Type => "type",
            PathSegment::TypeCondition => "typeCondition",
            PathSegment::Types => "types",
            PathSegment::Value => "value",
            PathSegment::Values => "values",
            PathSegment::Variable => "variable",
            PathSegment::VariableDefinitions => "variableDefinitions",
        })
    }
}

impl TryFrom<&str> for PathSegment {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.parse::<usize>() {
            Ok(index) => Ok(Self::Index(index)),
            Err(_) => match value {
                "alias" => Ok(PathSegment::Alias),
                "arguments" => Ok(PathSegment::Arguments),
                "comments" => Ok(PathSegment::Comments),
                "commentsClosingBracket" => Ok(PathSegment::CommentsClosingBracket),
                "commentsOpeningBracket" => Ok(PathSegment::CommentsOpeningBracket),
                "defaultValue" => Ok(PathSegment::DefaultValue),
                "definitions" => Ok(PathSegment::Definitions),
                "description" => Ok(PathSegment::Description),
                "directives" => Ok(PathSegment::Directives),
                "fields" => Ok(PathSegment::Fields),
                "interfaces" => Ok(PathSegment::Interfaces),
                "locations" => Ok(PathSegment::Locations),
                "name" => Ok(PathSegment::Name),
                "operationTypes" => Ok(PathSegment::OperationTypes),
                "selectionSet" => Ok(PathSegment::SelectionSet),
                "selections" => Ok(PathSegment::Selections),
                "type" => Ok(PathSegment::Type),
                "typeCondition" => Ok(PathSegment::TypeCondition),
                "types" => Ok(PathSegment::Types),
                "value" => Ok(PathSegment::Value),
                "values" => Ok(PathSegment::Values),
                "variable" => Ok(PathSegment::Variable),
                "variableDefinitions" => Ok(PathSegment::VariableDefinitions),
                _ => Err(Error::new(
                    format!("Invalid path segment {value}"),
                    ErrorType::Traversal,
                )),
            },
        }
    }
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self, self.as_str()) {
            (PathSegment::Index(index), _) => write!(f, "{}", index),
            (_, Some(name)) => f.write_str(name),
            (_, None) => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_and_parse() {
        let path = Path::try_from("definitions.0.selectionSet.selections.1").unwrap();
        assert_eq!(
            path.segments,
            [
                PathSegment::Definitions,
                PathSegment::Index(0),
                PathSegment::SelectionSet,
                PathSegment::Selections,
                PathSegment::Index(1),
            ]
        );
        assert_eq!(path.to_string(), "definitions.0.selectionSet.selections.1");
        assert_eq!(path.last(), Some(&PathSegment::Index(1)));
        assert!(Path::try_from("").unwrap().is_empty());
        assert!(Path::try_from("definitions.unknown").is_err());
    }
}
