//! Request builders.
//!
//! One pure function per operation: typed parameters in, a complete
//! [`WireRequest`] out. Builders perform no I/O and are deterministic
//! given their inputs, so every payload can be unit-tested byte-for-byte
//! without a live service.

use bytes::Bytes;
use rustddb_model::input::{
    CreateTableInput, DeleteTableInput, DescribeTableInput, GetItemInput, PutItemInput, QueryInput,
};
use rustddb_model::{Item, KeyValue, Operation, PrimaryKey, ProvisionedThroughput};

use crate::query::Query;
use crate::region::Region;
use crate::transport::WireRequest;

/// Build a `CreateTable` request.
#[must_use]
pub fn create_table(
    region: Region,
    table_name: &str,
    key: &PrimaryKey,
    throughput: ProvisionedThroughput,
) -> WireRequest {
    encode(
        region,
        Operation::CreateTable,
        &CreateTableInput {
            table_name: table_name.to_owned(),
            key_schema: key.clone(),
            provisioned_throughput: throughput,
        },
    )
}

/// Build a `DeleteTable` request.
#[must_use]
pub fn delete_table(region: Region, table_name: &str) -> WireRequest {
    encode(
        region,
        Operation::DeleteTable,
        &DeleteTableInput {
            table_name: table_name.to_owned(),
        },
    )
}

/// Build a `DescribeTable` request.
#[must_use]
pub fn describe_table(region: Region, table_name: &str) -> WireRequest {
    encode(
        region,
        Operation::DescribeTable,
        &DescribeTableInput {
            table_name: table_name.to_owned(),
        },
    )
}

/// Build a `PutItem` request.
#[must_use]
pub fn put_item(region: Region, table_name: &str, item: &Item) -> WireRequest {
    encode(
        region,
        Operation::PutItem,
        &PutItemInput {
            table_name: table_name.to_owned(),
            item: item.clone(),
        },
    )
}

/// Build a `GetItem` request.
#[must_use]
pub fn get_item(
    region: Region,
    table_name: &str,
    key: &KeyValue,
    consistent_read: bool,
) -> WireRequest {
    encode(
        region,
        Operation::GetItem,
        &GetItemInput {
            table_name: table_name.to_owned(),
            key: key.clone(),
            consistent_read,
        },
    )
}

/// Build a `Query` request.
#[must_use]
pub fn query(region: Region, query: &Query) -> WireRequest {
    encode(
        region,
        Operation::Query,
        &QueryInput {
            table_name: query.table_name().to_owned(),
            hash_key_value: query.hash_key_value().clone(),
            range_key_condition: query.range_key_condition().cloned(),
            consistent_read: query.consistent_read(),
            scan_index_forward: query.scan_index_forward(),
            limit: query.limit(),
            exclusive_start_key: query.exclusive_start_key().cloned(),
        },
    )
}

fn encode<T: serde::Serialize>(region: Region, operation: Operation, input: &T) -> WireRequest {
    let body = serde_json::to_vec(input).expect("request serialization cannot fail");
    WireRequest {
        region,
        operation,
        body: Bytes::from(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustddb_model::{AttributeType, AttributeValue, KeyCondition, KeySchemaElement};

    fn body_json(request: &WireRequest) -> serde_json::Value {
        serde_json::from_slice(&request.body).unwrap()
    }

    #[test]
    fn test_should_build_create_table_payload() {
        let key = PrimaryKey::hash_key(KeySchemaElement::new("login", AttributeType::S));
        let request = create_table(
            Region::EuWest1,
            "people",
            &key,
            ProvisionedThroughput::new(10, 10),
        );
        assert_eq!(request.operation, Operation::CreateTable);
        assert_eq!(
            body_json(&request),
            serde_json::json!({
                "TableName": "people",
                "KeySchema": {
                    "HashKeyElement": {"AttributeName": "login", "AttributeType": "S"},
                },
                "ProvisionedThroughput": {
                    "ReadCapacityUnits": 10,
                    "WriteCapacityUnits": 10,
                },
            }),
        );
    }

    #[test]
    fn test_should_build_name_only_payloads() {
        let request = delete_table(Region::UsEast1, "people");
        assert_eq!(body_json(&request), serde_json::json!({"TableName": "people"}));

        let request = describe_table(Region::UsEast1, "people");
        assert_eq!(body_json(&request), serde_json::json!({"TableName": "people"}));
        assert_eq!(request.operation, Operation::DescribeTable);
    }

    #[test]
    fn test_should_build_put_item_payload() {
        let mut item = Item::new();
        item.insert("id".to_owned(), AttributeValue::s("ntesla"));
        item.insert("awesomeLevel".to_owned(), AttributeValue::n("1000"));
        let request = put_item(Region::EuWest1, "people", &item);
        assert_eq!(
            body_json(&request),
            serde_json::json!({
                "TableName": "people",
                "Item": {
                    "id": {"S": "ntesla"},
                    "awesomeLevel": {"N": "1000"},
                },
            }),
        );
    }

    #[test]
    fn test_should_build_get_item_payload() {
        let key = KeyValue::hash_key(AttributeValue::s("ntesla"));
        let request = get_item(Region::EuWest1, "people", &key, true);
        assert_eq!(
            body_json(&request),
            serde_json::json!({
                "TableName": "people",
                "Key": {"HashKeyElement": {"S": "ntesla"}},
                "ConsistentRead": true,
            }),
        );
    }

    #[test]
    fn test_should_build_query_payload_with_range_condition() {
        let q = Query::new("people", AttributeValue::s("ntesla"))
            .with_consistent_read(true)
            .with_range_key_condition(KeyCondition::ge(AttributeValue::n("500")))
            .with_limit(25);
        let request = query(Region::EuWest1, &q);
        assert_eq!(
            body_json(&request),
            serde_json::json!({
                "TableName": "people",
                "HashKeyValue": {"S": "ntesla"},
                "RangeKeyCondition": {
                    "ComparisonOperator": "GE",
                    "AttributeValueList": [{"N": "500"}],
                },
                "ConsistentRead": true,
                "Limit": 25,
            }),
        );
    }

    #[test]
    fn test_should_be_deterministic() {
        let key = KeyValue::hash_key(AttributeValue::s("ntesla"));
        let a = get_item(Region::UsWest2, "people", &key, false);
        let b = get_item(Region::UsWest2, "people", &key, false);
        assert_eq!(a.body, b.body);
        assert_eq!(a.target(), b.target());
    }
}
