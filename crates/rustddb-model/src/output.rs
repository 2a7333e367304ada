//! Typed response bodies for the item and query operations.
//!
//! Outputs are constructed by the response parsers, not deserialized via
//! serde, so malformed payloads classify precisely (see
//! [`crate::error::ParseError`]). Table-management operations return
//! [`crate::TableDescription`] directly.

use crate::attribute_value::AttributeValue;
use crate::key::KeyValue;
use crate::types::Item;

/// Result body for `PutItem` and `GetItem`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemOutput {
    /// The item's attributes. Empty for a plain put, and for a get whose
    /// key matched nothing.
    pub attributes: Item,
    /// Capacity units consumed by the operation.
    pub consumed_capacity_units: Option<f64>,
}

impl ItemOutput {
    /// Look up an attribute by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    /// Returns `true` when no attributes were returned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

/// Result body for `Query`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryOutput {
    /// The matching items, in range-key order.
    pub items: Vec<Item>,
    /// The number of items in this page.
    pub count: u64,
    /// The continuation token. Present only when the result set is
    /// truncated; feed it back as the query's exclusive start key.
    pub last_evaluated_key: Option<KeyValue>,
    /// Capacity units consumed by the operation.
    pub consumed_capacity_units: Option<f64>,
}

impl QueryOutput {
    /// Look up the item at `index` within this page.
    #[must_use]
    pub fn item_at(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    /// Returns `true` when more pages are available.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.last_evaluated_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_look_up_item_attributes() {
        let mut attributes = Item::new();
        attributes.insert("firstName".to_owned(), AttributeValue::s("Nikola"));
        let output = ItemOutput {
            attributes,
            consumed_capacity_units: Some(0.5),
        };
        assert_eq!(output.get("firstName"), Some(&AttributeValue::s("Nikola")));
        assert_eq!(output.get("lastName"), None);
        assert!(!output.is_empty());
    }

    #[test]
    fn test_should_report_truncation_from_continuation_token() {
        let complete = QueryOutput::default();
        assert!(!complete.is_truncated());

        let truncated = QueryOutput {
            last_evaluated_key: Some(KeyValue::hash_key(AttributeValue::s("ntesla"))),
            ..Default::default()
        };
        assert!(truncated.is_truncated());
    }
}
