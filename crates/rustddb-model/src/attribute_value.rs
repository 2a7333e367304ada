//! `AttributeValue` type with custom serialization.
//!
//! `AttributeValue` is a tagged union where exactly one variant is present.
//! The JSON wire format uses single-key objects like `{"S": "hello"}`;
//! the 2011-12-05 API revision knows only the six scalar/set kinds.

use std::fmt;

use base64::Engine;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::error::{ClientError, ParseError};

/// An attribute value.
///
/// Represented as a tagged union where exactly one variant is present.
/// Numbers are always string-encoded to preserve arbitrary decimal
/// precision; they are never converted through binary floats.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    /// String value.
    S(String),
    /// Number value (string-encoded decimal).
    N(String),
    /// Binary value (base64-encoded in JSON).
    B(bytes::Bytes),
    /// String set.
    Ss(Vec<String>),
    /// Number set (string-encoded decimals).
    Ns(Vec<String>),
    /// Binary set (base64-encoded in JSON).
    Bs(Vec<bytes::Bytes>),
}

impl AttributeValue {
    /// Create a string value.
    pub fn s(value: impl Into<String>) -> Self {
        Self::S(value.into())
    }

    /// Create a number value from its decimal text form.
    pub fn n(value: impl Into<String>) -> Self {
        Self::N(value.into())
    }

    /// Create a binary value.
    pub fn b(value: impl Into<bytes::Bytes>) -> Self {
        Self::B(value.into())
    }

    /// Create a string set.
    pub fn ss<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Ss(values.into_iter().map(Into::into).collect())
    }

    /// Create a number set from decimal text forms.
    pub fn ns<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Ns(values.into_iter().map(Into::into).collect())
    }

    /// Create a binary set.
    pub fn bs<I, B>(values: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<bytes::Bytes>,
    {
        Self::Bs(values.into_iter().map(Into::into).collect())
    }

    /// Returns the wire type descriptor string (`S`, `N`, `B`, `SS`, `NS`, `BS`).
    #[must_use]
    pub fn type_descriptor(&self) -> &'static str {
        match self {
            Self::S(_) => "S",
            Self::N(_) => "N",
            Self::B(_) => "B",
            Self::Ss(_) => "SS",
            Self::Ns(_) => "NS",
            Self::Bs(_) => "BS",
        }
    }

    /// Returns `true` if this is a string value.
    #[must_use]
    pub fn is_s(&self) -> bool {
        matches!(self, Self::S(_))
    }

    /// Returns `true` if this is a number value.
    #[must_use]
    pub fn is_n(&self) -> bool {
        matches!(self, Self::N(_))
    }

    /// Returns `true` if this is a binary value.
    #[must_use]
    pub fn is_b(&self) -> bool {
        matches!(self, Self::B(_))
    }

    /// Returns the string value if this is an `S` variant.
    #[must_use]
    pub fn as_s(&self) -> Option<&str> {
        match self {
            Self::S(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the number string if this is an `N` variant.
    #[must_use]
    pub fn as_n(&self) -> Option<&str> {
        match self {
            Self::N(n) => Some(n),
            _ => None,
        }
    }

    /// Returns the binary payload if this is a `B` variant.
    #[must_use]
    pub fn as_b(&self) -> Option<&bytes::Bytes> {
        match self {
            Self::B(b) => Some(b),
            _ => None,
        }
    }

    /// Returns the string value, or `TypeMismatch` for any other variant.
    pub fn get_s(&self) -> Result<&str, ClientError> {
        match self {
            Self::S(s) => Ok(s),
            other => Err(other.mismatch("S")),
        }
    }

    /// Returns the number string, or `TypeMismatch` for any other variant.
    pub fn get_n(&self) -> Result<&str, ClientError> {
        match self {
            Self::N(n) => Ok(n),
            other => Err(other.mismatch("N")),
        }
    }

    /// Returns the binary payload, or `TypeMismatch` for any other variant.
    pub fn get_b(&self) -> Result<&bytes::Bytes, ClientError> {
        match self {
            Self::B(b) => Ok(b),
            other => Err(other.mismatch("B")),
        }
    }

    /// Returns the string set, or `TypeMismatch` for any other variant.
    pub fn get_ss(&self) -> Result<&[String], ClientError> {
        match self {
            Self::Ss(v) => Ok(v),
            other => Err(other.mismatch("SS")),
        }
    }

    /// Returns the number set, or `TypeMismatch` for any other variant.
    pub fn get_ns(&self) -> Result<&[String], ClientError> {
        match self {
            Self::Ns(v) => Ok(v),
            other => Err(other.mismatch("NS")),
        }
    }

    /// Returns the binary set, or `TypeMismatch` for any other variant.
    pub fn get_bs(&self) -> Result<&[bytes::Bytes], ClientError> {
        match self {
            Self::Bs(v) => Ok(v),
            other => Err(other.mismatch("BS")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> ClientError {
        ClientError::TypeMismatch {
            expected,
            actual: self.type_descriptor(),
        }
    }

    /// Encode this value into its wire JSON form.
    #[must_use]
    pub fn to_wire(&self) -> serde_json::Value {
        serde_json::to_value(self).expect("attribute value serialization cannot fail")
    }

    /// Decode an attribute value from its wire JSON form.
    ///
    /// Fails with [`ParseError::MalformedAttribute`] unless the payload is
    /// an object with exactly one recognized type tag whose value has the
    /// right JSON shape. Decoding never defaults to a placeholder value.
    pub fn from_wire(value: &serde_json::Value) -> Result<Self, ParseError> {
        let object = value
            .as_object()
            .ok_or_else(|| malformed("attribute value must be a JSON object"))?;

        let mut entries = object.iter();
        let Some((tag, payload)) = entries.next() else {
            return Err(malformed("attribute value has no type tag"));
        };
        if entries.next().is_some() {
            return Err(malformed("attribute value has more than one type tag"));
        }

        match tag.as_str() {
            "S" => Ok(Self::S(decode_string(payload)?)),
            "N" => Ok(Self::N(decode_string(payload)?)),
            "B" => Ok(Self::B(decode_binary(payload)?)),
            "SS" => Ok(Self::Ss(decode_string_array(payload)?)),
            "NS" => Ok(Self::Ns(decode_string_array(payload)?)),
            "BS" => {
                let array = payload
                    .as_array()
                    .ok_or_else(|| malformed("BS payload must be an array"))?;
                array.iter().map(decode_binary).collect::<Result<_, _>>().map(Self::Bs)
            }
            other => Err(malformed(format!("unrecognized type tag {other:?}"))),
        }
    }
}

fn malformed(message: impl Into<String>) -> ParseError {
    ParseError::MalformedAttribute(message.into())
}

fn decode_string(payload: &serde_json::Value) -> Result<String, ParseError> {
    payload
        .as_str()
        .map(ToOwned::to_owned)
        .ok_or_else(|| malformed("payload must be a JSON string"))
}

fn decode_string_array(payload: &serde_json::Value) -> Result<Vec<String>, ParseError> {
    let array = payload
        .as_array()
        .ok_or_else(|| malformed("payload must be an array of strings"))?;
    array.iter().map(decode_string).collect()
}

fn decode_binary(payload: &serde_json::Value) -> Result<bytes::Bytes, ParseError> {
    let encoded = payload
        .as_str()
        .ok_or_else(|| malformed("binary payload must be a base64 string"))?;
    base64::engine::general_purpose::STANDARD
        .decode(encoded)
        .map(bytes::Bytes::from)
        .map_err(|e| malformed(format!("invalid base64: {e}")))
}

impl fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::S(s) => write!(f, "{{S: {s}}}"),
            Self::N(n) => write!(f, "{{N: {n}}}"),
            Self::B(b) => write!(f, "{{B: {} bytes}}", b.len()),
            Self::Ss(v) => write!(f, "{{SS: {v:?}}}"),
            Self::Ns(v) => write!(f, "{{NS: {v:?}}}"),
            Self::Bs(v) => write!(f, "{{BS: {} items}}", v.len()),
        }
    }
}

impl Serialize for AttributeValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match self {
            Self::S(s) => map.serialize_entry("S", s)?,
            Self::N(n) => map.serialize_entry("N", n)?,
            Self::B(b) => {
                let encoded = base64::engine::general_purpose::STANDARD.encode(b);
                map.serialize_entry("B", &encoded)?;
            }
            Self::Ss(v) => map.serialize_entry("SS", v)?,
            Self::Ns(v) => map.serialize_entry("NS", v)?,
            Self::Bs(v) => {
                let encoded: Vec<String> = v
                    .iter()
                    .map(|b| base64::engine::general_purpose::STANDARD.encode(b))
                    .collect();
                map.serialize_entry("BS", &encoded)?;
            }
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_serialize_string_value() {
        let val = AttributeValue::s("hello");
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, r#"{"S":"hello"}"#);
    }

    #[test]
    fn test_should_serialize_number_value() {
        let val = AttributeValue::n("1000");
        let json = serde_json::to_string(&val).unwrap();
        assert_eq!(json, r#"{"N":"1000"}"#);
    }

    #[test]
    fn test_should_keep_number_precision() {
        // 30 significant digits, unrepresentable in an f64.
        let text = "123456789012345678901234567890.5";
        let val = AttributeValue::n(text);
        let decoded = AttributeValue::from_wire(&val.to_wire()).unwrap();
        assert_eq!(decoded.get_n().unwrap(), text);
    }

    #[test]
    fn test_should_roundtrip_every_variant() {
        let values = [
            AttributeValue::s("ntesla"),
            AttributeValue::n("1000"),
            AttributeValue::b(bytes::Bytes::from_static(b"raw bytes")),
            AttributeValue::ss(["a", "b"]),
            AttributeValue::ns(["1", "2", "3"]),
            AttributeValue::bs([bytes::Bytes::from_static(b"x"), bytes::Bytes::from_static(b"y")]),
        ];
        for val in values {
            let decoded = AttributeValue::from_wire(&val.to_wire()).unwrap();
            assert_eq!(decoded, val);
        }
    }

    #[test]
    fn test_should_reject_empty_attribute() {
        let err = AttributeValue::from_wire(&serde_json::json!({})).unwrap_err();
        assert!(matches!(err, ParseError::MalformedAttribute(_)));
    }

    #[test]
    fn test_should_reject_two_type_tags() {
        let err =
            AttributeValue::from_wire(&serde_json::json!({"S": "a", "N": "1"})).unwrap_err();
        assert!(matches!(err, ParseError::MalformedAttribute(_)));
    }

    #[test]
    fn test_should_reject_unrecognized_tag() {
        let err = AttributeValue::from_wire(&serde_json::json!({"BOOL": true})).unwrap_err();
        assert!(matches!(err, ParseError::MalformedAttribute(_)));
    }

    #[test]
    fn test_should_reject_wrong_payload_shape() {
        let err = AttributeValue::from_wire(&serde_json::json!({"SS": "not-an-array"})).unwrap_err();
        assert!(matches!(err, ParseError::MalformedAttribute(_)));
    }

    #[test]
    fn test_should_fail_wrong_accessor_with_type_mismatch() {
        let val = AttributeValue::s("Nikola");
        let err = val.get_n().unwrap_err();
        assert_eq!(
            err,
            ClientError::TypeMismatch {
                expected: "N",
                actual: "S",
            },
        );
        assert_eq!(val.get_s().unwrap(), "Nikola");
    }

    #[test]
    fn test_should_expose_optional_accessors() {
        let val = AttributeValue::n("42");
        assert_eq!(val.as_n(), Some("42"));
        assert_eq!(val.as_s(), None);
        assert!(val.is_n());
        assert!(!val.is_s());
    }

    #[test]
    fn test_should_base64_encode_binary() {
        let val = AttributeValue::b(bytes::Bytes::from_static(b"test data"));
        let json = serde_json::to_value(&val).unwrap();
        assert_eq!(json, serde_json::json!({"B": "dGVzdCBkYXRh"}));
    }
}
