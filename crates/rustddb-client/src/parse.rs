//! Response parsers.
//!
//! One pure function per operation, decoding raw payload bytes into a
//! typed body or a [`ParseError`]. Parsing is fail-fast: a single
//! malformed attribute or unrecognized table status fails the whole
//! parse; nothing is coerced to a default value.

use rustddb_model::{
    AttributeType, AttributeValue, Item, ItemOutput, KeySchemaElement, KeyValue, ParseError,
    PrimaryKey, ProvisionedThroughput, QueryOutput, ServiceError, ServiceErrorCode,
    TableDescription, TableStatus,
};

/// Parse a `CreateTable` or `DeleteTable` response.
///
/// Both wrap the description under `TableDescription`.
pub fn parse_table_description(body: &[u8]) -> Result<TableDescription, ParseError> {
    let root = parse_root(body)?;
    let table = root
        .get("TableDescription")
        .ok_or(ParseError::MissingField("TableDescription"))?;
    decode_table(table)
}

/// Parse a `DescribeTable` response, which wraps the description under
/// `Table`.
pub fn parse_describe_table(body: &[u8]) -> Result<TableDescription, ParseError> {
    let root = parse_root(body)?;
    let table = root.get("Table").ok_or(ParseError::MissingField("Table"))?;
    decode_table(table)
}

/// Parse a `PutItem` or `GetItem` response.
///
/// A put echoes attributes under `Attributes` (when requested); a get
/// returns them under `Item`. Either may be absent — an empty attribute
/// map means the operation returned no item body.
pub fn parse_item_output(body: &[u8]) -> Result<ItemOutput, ParseError> {
    let root = parse_root(body)?;
    let attributes = match root.get("Item").or_else(|| root.get("Attributes")) {
        Some(value) => decode_item(value)?,
        None => Item::new(),
    };
    Ok(ItemOutput {
        attributes,
        consumed_capacity_units: optional_f64(&root, "ConsumedCapacityUnits")?,
    })
}

/// Parse a `Query` response.
pub fn parse_query_output(body: &[u8]) -> Result<QueryOutput, ParseError> {
    let root = parse_root(body)?;

    let items = match root.get("Items") {
        Some(value) => {
            let array = value
                .as_array()
                .ok_or_else(|| invalid("Items must be an array"))?;
            array.iter().map(decode_item).collect::<Result<Vec<_>, _>>()?
        }
        None => Vec::new(),
    };

    let count = root
        .get("Count")
        .ok_or(ParseError::MissingField("Count"))?
        .as_u64()
        .ok_or_else(|| invalid("Count must be a non-negative integer"))?;

    let last_evaluated_key = root
        .get("LastEvaluatedKey")
        .map(decode_key_value)
        .transpose()?;

    Ok(QueryOutput {
        items,
        count,
        last_evaluated_key,
        consumed_capacity_units: optional_f64(&root, "ConsumedCapacityUnits")?,
    })
}

/// Parse a non-2xx response payload into a [`ServiceError`].
///
/// The symbolic code is the fragment of the `__type` field after `#`.
/// Unrecognized codes are preserved verbatim; a payload that is not even
/// valid JSON still yields an error carrying the HTTP status and the raw
/// body text, so no failure is ever silently dropped.
#[must_use]
pub fn parse_service_error(status: http::StatusCode, body: &[u8]) -> ServiceError {
    let Ok(root) = serde_json::from_slice::<serde_json::Value>(body) else {
        return ServiceError::new(
            ServiceErrorCode::Unknown(format!("HTTP {}", status.as_u16())),
            String::from_utf8_lossy(body).into_owned(),
        );
    };

    let code = root
        .get("__type")
        .and_then(serde_json::Value::as_str)
        .map_or_else(
            || ServiceErrorCode::Unknown(format!("HTTP {}", status.as_u16())),
            |raw| ServiceErrorCode::from_code(raw.rsplit('#').next().unwrap_or(raw)),
        );

    // Both spellings occur in the wild.
    let message = root
        .get("message")
        .or_else(|| root.get("Message"))
        .and_then(serde_json::Value::as_str)
        .map_or_else(|| code.as_str().to_owned(), ToOwned::to_owned);

    ServiceError::new(code, message)
}

// ---------------------------------------------------------------------------
// Decoding helpers
// ---------------------------------------------------------------------------

fn parse_root(body: &[u8]) -> Result<serde_json::Value, ParseError> {
    let value: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| invalid(format!("not valid JSON: {e}")))?;
    if value.is_object() {
        Ok(value)
    } else {
        Err(invalid("response body must be a JSON object"))
    }
}

fn invalid(message: impl Into<String>) -> ParseError {
    ParseError::InvalidBody(message.into())
}

fn decode_table(value: &serde_json::Value) -> Result<TableDescription, ParseError> {
    let name = value
        .get("TableName")
        .ok_or(ParseError::MissingField("TableName"))?
        .as_str()
        .ok_or_else(|| invalid("TableName must be a string"))?;

    let status_raw = value
        .get("TableStatus")
        .ok_or(ParseError::MissingField("TableStatus"))?
        .as_str()
        .ok_or_else(|| invalid("TableStatus must be a string"))?;
    let table_status = TableStatus::parse(status_raw)?;

    let key_schema = value.get("KeySchema").map(decode_key_schema).transpose()?;

    let provisioned_throughput = value
        .get("ProvisionedThroughput")
        .map(decode_throughput)
        .transpose()?;

    Ok(TableDescription {
        table_name: name.to_owned(),
        table_status,
        key_schema,
        provisioned_throughput,
        item_count: optional_u64(value, "ItemCount")?,
        table_size_bytes: optional_u64(value, "TableSizeBytes")?,
        creation_date_time: optional_f64(value, "CreationDateTime")?,
    })
}

fn decode_key_schema(value: &serde_json::Value) -> Result<PrimaryKey, ParseError> {
    let hash = value
        .get("HashKeyElement")
        .ok_or(ParseError::MissingField("HashKeyElement"))?;
    let range = value
        .get("RangeKeyElement")
        .map(decode_schema_element)
        .transpose()?;
    PrimaryKey::new(decode_schema_element(hash)?, range)
        .map_err(|e| invalid(format!("service returned an invalid key schema: {e}")))
}

fn decode_schema_element(value: &serde_json::Value) -> Result<KeySchemaElement, ParseError> {
    let name = value
        .get("AttributeName")
        .ok_or(ParseError::MissingField("AttributeName"))?
        .as_str()
        .ok_or_else(|| invalid("AttributeName must be a string"))?;
    let attribute_type = value
        .get("AttributeType")
        .ok_or(ParseError::MissingField("AttributeType"))?
        .as_str()
        .ok_or_else(|| invalid("AttributeType must be a string"))?;
    Ok(KeySchemaElement::new(name, AttributeType::parse(attribute_type)?))
}

fn decode_throughput(value: &serde_json::Value) -> Result<ProvisionedThroughput, ParseError> {
    let read = value
        .get("ReadCapacityUnits")
        .ok_or(ParseError::MissingField("ReadCapacityUnits"))?
        .as_u64()
        .ok_or_else(|| invalid("ReadCapacityUnits must be a non-negative integer"))?;
    let write = value
        .get("WriteCapacityUnits")
        .ok_or(ParseError::MissingField("WriteCapacityUnits"))?
        .as_u64()
        .ok_or_else(|| invalid("WriteCapacityUnits must be a non-negative integer"))?;
    Ok(ProvisionedThroughput::new(read, write))
}

fn decode_item(value: &serde_json::Value) -> Result<Item, ParseError> {
    let object = value
        .as_object()
        .ok_or_else(|| invalid("item must be a JSON object"))?;
    object
        .iter()
        .map(|(name, attr)| Ok((name.clone(), AttributeValue::from_wire(attr)?)))
        .collect()
}

fn decode_key_value(value: &serde_json::Value) -> Result<KeyValue, ParseError> {
    let hash = value
        .get("HashKeyElement")
        .ok_or(ParseError::MissingField("HashKeyElement"))?;
    let range = value
        .get("RangeKeyElement")
        .map(AttributeValue::from_wire)
        .transpose()?;
    Ok(KeyValue::new(AttributeValue::from_wire(hash)?, range))
}

fn optional_u64(value: &serde_json::Value, field: &'static str) -> Result<Option<u64>, ParseError> {
    value
        .get(field)
        .map(|v| {
            v.as_u64()
                .ok_or_else(|| invalid(format!("{field} must be a non-negative integer")))
        })
        .transpose()
}

fn optional_f64(value: &serde_json::Value, field: &'static str) -> Result<Option<f64>, ParseError> {
    value
        .get(field)
        .map(|v| v.as_f64().ok_or_else(|| invalid(format!("{field} must be a number"))))
        .transpose()
}
