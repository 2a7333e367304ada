//! Primary key schema and concrete key values.
//!
//! The 2011-12-05 API addresses keys positionally: a table has a hash
//! element and an optional range element, and items are addressed by a
//! `{"HashKeyElement": ..., "RangeKeyElement": ...}` pair rather than by
//! attribute name.

use serde::{Serialize, Serializer};

use crate::attribute_value::AttributeValue;
use crate::error::{ClientError, ParseError};

/// Scalar attribute types allowed for key attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeType {
    /// String type.
    S,
    /// Number type.
    N,
    /// Binary type.
    B,
}

impl AttributeType {
    /// Returns the wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::S => "S",
            Self::N => "N",
            Self::B => "B",
        }
    }

    /// Parse a wire-format type string.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "S" => Ok(Self::S),
            "N" => Ok(Self::N),
            "B" => Ok(Self::B),
            other => Err(ParseError::InvalidBody(format!(
                "unrecognized key attribute type {other:?}"
            ))),
        }
    }
}

impl Serialize for AttributeType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl std::fmt::Display for AttributeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An element of a table's key schema: attribute name plus scalar type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeySchemaElement {
    /// The name of the key attribute.
    pub attribute_name: String,
    /// The scalar type of the key attribute.
    pub attribute_type: AttributeType,
}

impl KeySchemaElement {
    /// Create a new key schema element.
    pub fn new(attribute_name: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            attribute_name: attribute_name.into(),
            attribute_type,
        }
    }
}

/// A table's primary key schema: a hash element and an optional range
/// element.
///
/// Serializes to the 2011-12-05 `KeySchema` object shape:
///
/// ```json
/// {"HashKeyElement": {"AttributeName": "id", "AttributeType": "S"},
///  "RangeKeyElement": {"AttributeName": "ts", "AttributeType": "N"}}
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrimaryKey {
    #[serde(rename = "HashKeyElement")]
    hash: KeySchemaElement,
    #[serde(rename = "RangeKeyElement", skip_serializing_if = "Option::is_none")]
    range: Option<KeySchemaElement>,
}

impl PrimaryKey {
    /// Create a hash-only primary key.
    #[must_use]
    pub fn hash_key(hash: KeySchemaElement) -> Self {
        Self { hash, range: None }
    }

    /// Create a primary key from a hash element and an optional range
    /// element.
    ///
    /// Fails with [`ClientError::InvalidSchema`] when the range element
    /// shares its name with the hash element.
    pub fn new(
        hash: KeySchemaElement,
        range: Option<KeySchemaElement>,
    ) -> Result<Self, ClientError> {
        if let Some(ref range) = range {
            if range.attribute_name == hash.attribute_name {
                return Err(ClientError::InvalidSchema(format!(
                    "hash and range elements share the name {:?}",
                    hash.attribute_name,
                )));
            }
        }
        Ok(Self { hash, range })
    }

    /// Create a primary key from a list of one or two elements.
    ///
    /// Fails with [`ClientError::InvalidSchema`] on zero elements, more
    /// than two elements, or duplicate names.
    pub fn from_elements(elements: Vec<KeySchemaElement>) -> Result<Self, ClientError> {
        let mut elements = elements.into_iter();
        let (hash, range) = match (elements.next(), elements.next(), elements.next()) {
            (Some(hash), range, None) => (hash, range),
            (None, ..) => {
                return Err(ClientError::InvalidSchema(
                    "a primary key requires at least a hash element".to_owned(),
                ));
            }
            (_, _, Some(_)) => {
                return Err(ClientError::InvalidSchema(
                    "a primary key has at most two elements".to_owned(),
                ));
            }
        };
        Self::new(hash, range)
    }

    /// The hash (partition) element.
    #[must_use]
    pub fn hash(&self) -> &KeySchemaElement {
        &self.hash
    }

    /// The range (sort) element, if the schema has one.
    #[must_use]
    pub fn range(&self) -> Option<&KeySchemaElement> {
        self.range.as_ref()
    }
}

/// A concrete key instance addressing a single item.
///
/// Value types are not cross-checked against the table's declared schema
/// client-side; a mismatch surfaces as a service error. Serializes to the
/// `{"HashKeyElement": ..., "RangeKeyElement": ...}` wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeyValue {
    #[serde(rename = "HashKeyElement")]
    hash: AttributeValue,
    #[serde(rename = "RangeKeyElement", skip_serializing_if = "Option::is_none")]
    range: Option<AttributeValue>,
}

impl KeyValue {
    /// Address an item by its hash key alone.
    #[must_use]
    pub fn hash_key(hash: AttributeValue) -> Self {
        Self { hash, range: None }
    }

    /// Address an item by hash and range key.
    #[must_use]
    pub fn new(hash: AttributeValue, range: Option<AttributeValue>) -> Self {
        Self { hash, range }
    }

    /// The hash key value.
    #[must_use]
    pub fn hash(&self) -> &AttributeValue {
        &self.hash
    }

    /// The range key value, if present.
    #[must_use]
    pub fn range(&self) -> Option<&AttributeValue> {
        self.range.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_hash_only_schema() {
        let key = PrimaryKey::hash_key(KeySchemaElement::new("login", AttributeType::S));
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "HashKeyElement": {"AttributeName": "login", "AttributeType": "S"},
            }),
        );
    }

    #[test]
    fn test_should_serialize_composite_schema() {
        let key = PrimaryKey::new(
            KeySchemaElement::new("id", AttributeType::S),
            Some(KeySchemaElement::new("awesomeLevel", AttributeType::N)),
        )
        .unwrap();
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "HashKeyElement": {"AttributeName": "id", "AttributeType": "S"},
                "RangeKeyElement": {"AttributeName": "awesomeLevel", "AttributeType": "N"},
            }),
        );
    }

    #[test]
    fn test_should_reject_duplicate_element_names() {
        let err = PrimaryKey::new(
            KeySchemaElement::new("id", AttributeType::S),
            Some(KeySchemaElement::new("id", AttributeType::N)),
        )
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidSchema(_)));
    }

    #[test]
    fn test_should_reject_empty_element_list() {
        let err = PrimaryKey::from_elements(Vec::new()).unwrap_err();
        assert!(matches!(err, ClientError::InvalidSchema(_)));
    }

    #[test]
    fn test_should_reject_three_elements() {
        let err = PrimaryKey::from_elements(vec![
            KeySchemaElement::new("a", AttributeType::S),
            KeySchemaElement::new("b", AttributeType::S),
            KeySchemaElement::new("c", AttributeType::S),
        ])
        .unwrap_err();
        assert!(matches!(err, ClientError::InvalidSchema(_)));
    }

    #[test]
    fn test_should_accept_two_distinct_elements() {
        let key = PrimaryKey::from_elements(vec![
            KeySchemaElement::new("id", AttributeType::S),
            KeySchemaElement::new("awesomeLevel", AttributeType::N),
        ])
        .unwrap();
        assert_eq!(key.hash().attribute_name, "id");
        assert_eq!(key.range().unwrap().attribute_name, "awesomeLevel");
    }

    #[test]
    fn test_should_serialize_key_value() {
        let key = KeyValue::hash_key(AttributeValue::s("ntesla"));
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"HashKeyElement": {"S": "ntesla"}}),
        );
    }

    #[test]
    fn test_should_serialize_composite_key_value() {
        let key = KeyValue::new(
            AttributeValue::s("ntesla"),
            Some(AttributeValue::n("1000")),
        );
        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "HashKeyElement": {"S": "ntesla"},
                "RangeKeyElement": {"N": "1000"},
            }),
        );
    }

    #[test]
    fn test_should_parse_attribute_types() {
        assert_eq!(AttributeType::parse("S").unwrap(), AttributeType::S);
        assert_eq!(AttributeType::parse("N").unwrap(), AttributeType::N);
        assert_eq!(AttributeType::parse("B").unwrap(), AttributeType::B);
        assert!(AttributeType::parse("BOOL").is_err());
    }
}
