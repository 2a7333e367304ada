//! The immutable query configuration.

use rustddb_model::{AttributeValue, KeyCondition, KeyValue};

/// A query against a single table's hash key, with an optional range-key
/// condition.
///
/// `Query` is an immutable configuration value: every `with_*` method
/// consumes the query and returns a new configured value, so a base query
/// can be cloned and specialized freely across concurrent calls.
///
/// ```
/// use rustddb_client::Query;
/// use rustddb_model::{AttributeValue, KeyCondition};
///
/// let query = Query::new("people", AttributeValue::s("ntesla"))
///     .with_consistent_read(true)
///     .with_range_key_condition(KeyCondition::ge(AttributeValue::n("500")))
///     .with_limit(25);
/// assert_eq!(query.table_name(), "people");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    table_name: String,
    hash_key_value: AttributeValue,
    range_key_condition: Option<KeyCondition>,
    consistent_read: Option<bool>,
    scan_index_forward: Option<bool>,
    limit: Option<u32>,
    exclusive_start_key: Option<KeyValue>,
}

impl Query {
    /// Create a query matching items with the given hash key value.
    pub fn new(table_name: impl Into<String>, hash_key_value: AttributeValue) -> Self {
        Self {
            table_name: table_name.into(),
            hash_key_value,
            range_key_condition: None,
            consistent_read: None,
            scan_index_forward: None,
            limit: None,
            exclusive_start_key: None,
        }
    }

    /// Constrain the range key.
    #[must_use]
    pub fn with_range_key_condition(mut self, condition: KeyCondition) -> Self {
        self.range_key_condition = Some(condition);
        self
    }

    /// Request strongly consistent (or explicitly eventual) reads.
    #[must_use]
    pub fn with_consistent_read(mut self, consistent_read: bool) -> Self {
        self.consistent_read = Some(consistent_read);
        self
    }

    /// Set the traversal order: `true` ascending, `false` descending.
    #[must_use]
    pub fn with_scan_index_forward(mut self, forward: bool) -> Self {
        self.scan_index_forward = Some(forward);
        self
    }

    /// Bound the number of items evaluated per page.
    #[must_use]
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Resume after a previous page's continuation token.
    #[must_use]
    pub fn with_exclusive_start_key(mut self, key: KeyValue) -> Self {
        self.exclusive_start_key = Some(key);
        self
    }

    /// The table being queried.
    #[must_use]
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// The hash key value items must match.
    #[must_use]
    pub fn hash_key_value(&self) -> &AttributeValue {
        &self.hash_key_value
    }

    /// The range-key condition, if set.
    #[must_use]
    pub fn range_key_condition(&self) -> Option<&KeyCondition> {
        self.range_key_condition.as_ref()
    }

    /// The consistency flag, if set.
    #[must_use]
    pub fn consistent_read(&self) -> Option<bool> {
        self.consistent_read
    }

    /// The traversal order flag, if set.
    #[must_use]
    pub fn scan_index_forward(&self) -> Option<bool> {
        self.scan_index_forward
    }

    /// The page size limit, if set.
    #[must_use]
    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// The continuation token, if set.
    #[must_use]
    pub fn exclusive_start_key(&self) -> Option<&KeyValue> {
        self.exclusive_start_key.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_leave_base_query_untouched_by_with_chain() {
        let base = Query::new("people", AttributeValue::s("ntesla"));
        let configured = base.clone().with_consistent_read(true).with_limit(10);

        assert_eq!(base.consistent_read(), None);
        assert_eq!(base.limit(), None);
        assert_eq!(configured.consistent_read(), Some(true));
        assert_eq!(configured.limit(), Some(10));
        assert_eq!(configured.table_name(), "people");
    }

    #[test]
    fn test_should_carry_range_key_condition() {
        let query = Query::new("people", AttributeValue::s("ntesla"))
            .with_range_key_condition(KeyCondition::between(
                AttributeValue::n("1"),
                AttributeValue::n("1000"),
            ));
        assert!(query.range_key_condition().is_some());
    }
}
