//! # JSON Export
//!
//! The `graphql_syntax::json` module is enabled by the `json` feature, which also derives
//! [serde::Serialize] for all AST Nodes. ASTs may be exported as a whole, including comments, using
//! [to_json], while constant GraphQL values are converted to the plain JSON values they represent
//! using [ValueToJson].
//!
//! ```
//! use graphql_syntax::{ast::*, json::*};
//!
//! let ctx = ASTContext::new();
//! let value = ConstValue::parse(&ctx, "{ a: [1, 2.5, \"s\", ENUM, null] }").unwrap();
//! assert_eq!(
//!     value.to_json_value(),
//!     serde_json::json!({ "a": [1, 2.5, "s", "ENUM", null] })
//! );
//! ```

use crate::ast::*;
use crate::visit::AsNode;
use serde::Serialize;
use serde_json::{Map as JSMap, Value as JSValue};

/// Exports an AST Node or union with all its fields as a [serde_json::Value].
pub fn to_json<'a, T>(node: &'a T) -> serde_json::Result<JSValue>
where
    T: AsNode<'a> + Serialize + ?Sized,
{
    serde_json::to_value(node)
}

/// Trait for converting constant AST values to the [serde_json::Value]s they represent.
pub trait ValueToJson {
    fn to_json_value(&self) -> JSValue;
}

impl<'a> ValueToJson for ConstValue<'a> {
    fn to_json_value(&self) -> JSValue {
        match self {
            ConstValue::Int(node) => node.to_json_value(),
            ConstValue::Float(node) => node.to_json_value(),
            ConstValue::String(node) => node.value.into(),
            ConstValue::Boolean(node) => node.value.into(),
            ConstValue::Enum(node) => node.value.into(),
            ConstValue::Null(_) => JSValue::Null,
            ConstValue::List(list) => {
                JSValue::Array(list.values.iter().map(|value| value.to_json_value()).collect())
            }
            ConstValue::Object(object) => {
                let mut map = JSMap::with_capacity(object.fields.len());
                for field in object.fields.iter() {
                    map.insert(field.name.value.to_string(), field.value.to_json_value());
                }
                JSValue::Object(map)
            }
        }
    }
}

impl<'a> ValueToJson for IntValue<'a> {
    /// Integers that don't fit into an `i64` are kept as strings.
    #[inline]
    fn to_json_value(&self) -> JSValue {
        match self.value.parse::<i64>() {
            Ok(value) => value.into(),
            Err(_) => self.value.into(),
        }
    }
}

impl<'a> ValueToJson for FloatValue<'a> {
    #[inline]
    fn to_json_value(&self) -> JSValue {
        match self.value.parse::<f64>() {
            Ok(value) => value.into(),
            Err(_) => self.value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exports_nodes() {
        let ctx = ASTContext::new();
        let field = Field::parse(&ctx, "alias: field # note").unwrap();
        let exported = to_json(field).unwrap();
        assert_eq!(exported["alias"], json!({ "value": "alias" }));
        assert_eq!(exported["name"], json!({ "value": "field" }));
        assert_eq!(exported["selection_set"], JSValue::Null);
        assert_eq!(exported["comments"].as_array().map(|list| list.len()), Some(1));
    }

    #[test]
    fn converts_values() {
        let ctx = ASTContext::new();
        let value = ConstValue::parse(&ctx, "[123, 99999999999999999999, 1e3, true, {}]").unwrap();
        assert_eq!(
            value.to_json_value(),
            json!([123, "99999999999999999999", 1000.0, true, {}])
        );
    }
}
