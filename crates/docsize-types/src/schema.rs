//! Document schema trees.
//!
//! A schema is a finite tree of scalar, object and array nodes. Children are
//! owned, so a tree cannot refer back to one of its ancestors and every walk
//! terminates at the scalars.
//!
//! Schemas are usually written in the JSON-Schema-like notation below, with
//! one extension: every array names the statistic holding its average
//! length.
//!
//! ```json
//! {
//!   "type": "object",
//!   "properties": {
//!     "IDP": { "type": "integer" },
//!     "categories": {
//!       "type": "array",
//!       "length": "avg_categories_per_product",
//!       "items": { "type": "object", "properties": { "title": { "type": "string" } } }
//!     }
//!   }
//! }
//! ```

use serde_json::{Map, Value};

use crate::{EntityLabel, SchemaError};

/// One node of a schema tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaNode {
    /// A scalar value of the named type.
    Scalar(String),
    /// An embedded object with ordered, named children.
    Object(Vec<Field>),
    /// An array of `items` whose average length is the statistic `length`.
    Array {
        /// Schema of one element.
        items: Box<Self>,
        /// Statistic holding the average number of elements.
        length: String,
    },
}

impl SchemaNode {
    /// Creates a scalar node.
    #[must_use]
    pub fn scalar(type_name: impl Into<String>) -> Self {
        Self::Scalar(type_name.into())
    }

    /// Creates an object node.
    #[must_use]
    pub const fn object(fields: Vec<Field>) -> Self {
        Self::Object(fields)
    }

    /// Creates an array node.
    #[must_use]
    pub fn array(items: Self, length: impl Into<String>) -> Self {
        Self::Array {
            items: Box::new(items),
            length: length.into(),
        }
    }

    /// Returns the label detected from this node's own field names.
    ///
    /// Scalars and arrays of scalars have no fields and are `Unknown`.
    #[must_use]
    pub fn label(&self) -> EntityLabel {
        match self {
            Self::Object(fields) => EntityLabel::detect(fields.iter().map(Field::name)),
            Self::Array { items, .. } => items.label(),
            Self::Scalar(_) => EntityLabel::Unknown,
        }
    }

    /// Returns the nesting depth (a scalar has depth 1).
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            Self::Scalar(_) => 1,
            Self::Object(fields) => 1 + fields.iter().map(|f| f.node.depth()).max().unwrap_or(0),
            Self::Array { items, .. } => 1 + items.depth(),
        }
    }
}

/// A named field of an object or document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    node: SchemaNode,
}

impl Field {
    /// Creates a field.
    #[must_use]
    pub fn new(name: impl Into<String>, node: SchemaNode) -> Self {
        Self {
            name: name.into(),
            node,
        }
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the field's schema node.
    #[must_use]
    pub const fn node(&self) -> &SchemaNode {
        &self.node
    }
}

/// Schema of one document: its ordered top-level fields.
///
/// The root is not itself a field, so it carries no key.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    name: Option<String>,
    fields: Vec<Field>,
}

impl Schema {
    /// Creates a schema from its top-level fields.
    #[must_use]
    pub const fn new(fields: Vec<Field>) -> Self {
        Self { name: None, fields }
    }

    /// Sets the schema name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the schema name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the top-level fields.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the top-level field names.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(Field::name)
    }

    /// Returns the label detected from the top-level field names.
    #[must_use]
    pub fn label(&self) -> EntityLabel {
        EntityLabel::detect(self.field_names())
    }

    /// Parses a schema from JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not JSON or does not describe a
    /// schema tree.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value)?)
    }

    /// Builds a schema from an already parsed JSON value.
    ///
    /// A root-level `"title"` becomes the schema name.
    ///
    /// # Errors
    ///
    /// Returns an error if the root is not an object node or any node is
    /// malformed.
    pub fn from_value(value: &Value) -> Result<Self, SchemaError> {
        let root = value
            .as_object()
            .ok_or_else(|| SchemaError::NotAnObject("$".to_string()))?;
        let name = root.get("title").and_then(Value::as_str).map(str::to_string);

        match parse_node(value, "$")? {
            SchemaNode::Object(fields) => Ok(Self { name, fields }),
            SchemaNode::Scalar(ty) => Err(SchemaError::RootNotObject(ty)),
            SchemaNode::Array { .. } => Err(SchemaError::RootNotObject("array".to_string())),
        }
    }
}

fn parse_node(value: &Value, path: &str) -> Result<SchemaNode, SchemaError> {
    let node = value
        .as_object()
        .ok_or_else(|| SchemaError::NotAnObject(path.to_string()))?;
    let ty = node
        .get("type")
        .and_then(Value::as_str)
        .ok_or_else(|| SchemaError::MissingType(path.to_string()))?;

    match ty {
        "object" => {
            let properties = node
                .get("properties")
                .and_then(Value::as_object)
                .ok_or_else(|| SchemaError::MissingProperties(path.to_string()))?;
            parse_properties(properties, path).map(SchemaNode::Object)
        }
        "array" => {
            let items = node
                .get("items")
                .ok_or_else(|| SchemaError::MissingItems(path.to_string()))?;
            let length = node
                .get("length")
                .and_then(Value::as_str)
                .ok_or_else(|| SchemaError::MissingLength(path.to_string()))?;
            let items = parse_node(items, &format!("{path}[]"))?;
            Ok(SchemaNode::array(items, length))
        }
        scalar => Ok(SchemaNode::scalar(scalar)),
    }
}

fn parse_properties(
    properties: &Map<String, Value>,
    path: &str,
) -> Result<Vec<Field>, SchemaError> {
    properties
        .iter()
        .map(|(name, value)| {
            let node = parse_node(value, &format!("{path}.{name}"))?;
            Ok(Field::new(name.as_str(), node))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT: &str = r#"{
        "title": "Product",
        "type": "object",
        "properties": {
            "IDP": { "type": "integer" },
            "name": { "type": "string" },
            "price": { "type": "number" },
            "categories": {
                "type": "array",
                "length": "avg_categories_per_product",
                "items": { "type": "object", "properties": { "title": { "type": "string" } } }
            },
            "supplier": {
                "type": "object",
                "properties": { "IDS": { "type": "integer" }, "SIRET": { "type": "integer" } }
            }
        }
    }"#;

    #[test]
    fn test_parse_preserves_property_order() {
        let schema = Schema::from_json(PRODUCT).unwrap();

        assert_eq!(schema.name(), Some("Product"));
        let names: Vec<_> = schema.field_names().collect();
        assert_eq!(names, ["IDP", "name", "price", "categories", "supplier"]);
        assert_eq!(schema.label(), EntityLabel::Product);
    }

    #[test]
    fn test_parse_nested_nodes() {
        let schema = Schema::from_json(PRODUCT).unwrap();

        let categories = schema.fields()[3].node();
        let expected = SchemaNode::array(
            SchemaNode::object(vec![Field::new("title", SchemaNode::scalar("string"))]),
            "avg_categories_per_product",
        );
        assert_eq!(categories, &expected);
        assert_eq!(categories.label(), EntityLabel::Category);
        assert_eq!(schema.fields()[4].node().label(), EntityLabel::Supplier);
        assert_eq!(categories.depth(), 3);
    }

    #[test]
    fn test_array_without_length() {
        let err = Schema::from_json(
            r#"{"type": "object", "properties": {"tags": {"type": "array", "items": {"type": "string"}}}}"#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            crate::DocsizeError::Schema(SchemaError::MissingLength(ref path)) if path == "$.tags"
        ));
    }

    #[test]
    fn test_malformed_nodes() {
        let missing_type = serde_json::json!({"type": "object", "properties": {"a": {}}});
        assert_eq!(
            Schema::from_value(&missing_type),
            Err(SchemaError::MissingType("$.a".to_string()))
        );

        let not_object = serde_json::json!({"type": "object", "properties": {"a": 3}});
        assert_eq!(
            Schema::from_value(&not_object),
            Err(SchemaError::NotAnObject("$.a".to_string()))
        );

        let scalar_root = serde_json::json!({"type": "integer"});
        assert_eq!(
            Schema::from_value(&scalar_root),
            Err(SchemaError::RootNotObject("integer".to_string()))
        );
    }
}
