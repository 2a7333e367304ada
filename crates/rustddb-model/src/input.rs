//! Request input types for the supported operations.
//!
//! All input structs use `PascalCase` JSON field naming to match the
//! service's wire protocol. Optional fields are omitted when `None` so
//! payloads stay minimal. Inputs are serialize-only: responses never echo
//! these shapes back.

use serde::Serialize;

use crate::key::{KeyValue, PrimaryKey};
use crate::types::{Item, KeyCondition, ProvisionedThroughput};

/// Input for the `CreateTable` operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateTableInput {
    /// The name of the table to create.
    pub table_name: String,
    /// The primary key schema.
    pub key_schema: PrimaryKey,
    /// The provisioned throughput to allocate.
    pub provisioned_throughput: ProvisionedThroughput,
}

/// Input for the `DeleteTable` operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DeleteTableInput {
    /// The name of the table to delete.
    pub table_name: String,
}

/// Input for the `DescribeTable` operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct DescribeTableInput {
    /// The name of the table to describe.
    pub table_name: String,
}

/// Input for the `PutItem` operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PutItemInput {
    /// The name of the table to write into.
    pub table_name: String,
    /// The item to write, keyed by attribute name.
    pub item: Item,
}

/// Input for the `GetItem` operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetItemInput {
    /// The name of the table to read from.
    pub table_name: String,
    /// The primary key of the item to retrieve.
    pub key: KeyValue,
    /// Whether to use a strongly consistent read.
    pub consistent_read: bool,
}

/// Input for the `Query` operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct QueryInput {
    /// The name of the table to query.
    pub table_name: String,
    /// The hash key value items must match.
    pub hash_key_value: crate::AttributeValue,
    /// An optional condition on the range key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range_key_condition: Option<KeyCondition>,
    /// Whether to use a strongly consistent read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub consistent_read: Option<bool>,
    /// Traversal order: `true` (default) ascending, `false` descending.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scan_index_forward: Option<bool>,
    /// Maximum number of items to evaluate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// The key to resume from, taken from a previous page's
    /// `LastEvaluatedKey`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclusive_start_key: Option<KeyValue>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::AttributeValue;
    use crate::key::{AttributeType, KeySchemaElement};

    #[test]
    fn test_should_serialize_create_table_input() {
        let input = CreateTableInput {
            table_name: "people".to_owned(),
            key_schema: PrimaryKey::hash_key(KeySchemaElement::new("id", AttributeType::S)),
            provisioned_throughput: ProvisionedThroughput::new(10, 10),
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "TableName": "people",
                "KeySchema": {
                    "HashKeyElement": {"AttributeName": "id", "AttributeType": "S"},
                },
                "ProvisionedThroughput": {
                    "ReadCapacityUnits": 10,
                    "WriteCapacityUnits": 10,
                },
            }),
        );
    }

    #[test]
    fn test_should_serialize_get_item_input() {
        let input = GetItemInput {
            table_name: "people".to_owned(),
            key: KeyValue::hash_key(AttributeValue::s("ntesla")),
            consistent_read: true,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "TableName": "people",
                "Key": {"HashKeyElement": {"S": "ntesla"}},
                "ConsistentRead": true,
            }),
        );
    }

    #[test]
    fn test_should_omit_absent_query_fields() {
        let input = QueryInput {
            table_name: "people".to_owned(),
            hash_key_value: AttributeValue::s("ntesla"),
            range_key_condition: None,
            consistent_read: None,
            scan_index_forward: None,
            limit: None,
            exclusive_start_key: None,
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "TableName": "people",
                "HashKeyValue": {"S": "ntesla"},
            }),
        );
    }
}
