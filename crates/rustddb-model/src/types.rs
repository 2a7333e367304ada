//! Shared table and query types.
//!
//! Wire-facing structs use `PascalCase` field names via serde renames to
//! match the service's JSON protocol.

use std::collections::HashMap;

use serde::Serialize;

use crate::attribute_value::AttributeValue;
use crate::error::ParseError;
use crate::key::PrimaryKey;

/// An item: a mapping from attribute name to value.
pub type Item = HashMap<String, AttributeValue>;

/// Current lifecycle status of a table.
///
/// Transitions are driven entirely by the remote service; the client only
/// observes them by polling `DescribeTable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableStatus {
    /// The table is being created.
    Creating,
    /// The table is ready for use.
    Active,
    /// The table's provisioned throughput is being updated.
    Updating,
    /// The table is being deleted.
    Deleting,
}

impl TableStatus {
    /// Returns the wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Creating => "CREATING",
            Self::Active => "ACTIVE",
            Self::Updating => "UPDATING",
            Self::Deleting => "DELETING",
        }
    }

    /// Parse a wire-format status string, case-sensitively.
    ///
    /// Anything outside the closed status set fails with
    /// [`ParseError::UnknownStatus`]; the client never defaults a
    /// lifecycle state.
    pub fn parse(raw: &str) -> Result<Self, ParseError> {
        match raw {
            "CREATING" => Ok(Self::Creating),
            "ACTIVE" => Ok(Self::Active),
            "UPDATING" => Ok(Self::Updating),
            "DELETING" => Ok(Self::Deleting),
            other => Err(ParseError::UnknownStatus(other.to_owned())),
        }
    }
}

impl std::fmt::Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Provisioned read/write capacity for a table, required at creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProvisionedThroughput {
    /// Strongly consistent reads per second.
    pub read_capacity_units: u64,
    /// Writes per second.
    pub write_capacity_units: u64,
}

impl ProvisionedThroughput {
    /// Create a throughput specification.
    ///
    /// Positivity is not validated client-side; the service rejects zero
    /// capacity with a `ValidationException`.
    #[must_use]
    pub fn new(read_capacity_units: u64, write_capacity_units: u64) -> Self {
        Self {
            read_capacity_units,
            write_capacity_units,
        }
    }
}

/// Description of a table as returned by the table-management operations.
///
/// Item count and size are advisory and eventually consistent.
#[derive(Debug, Clone, PartialEq)]
pub struct TableDescription {
    /// The table name.
    pub table_name: String,
    /// The current lifecycle status.
    pub table_status: TableStatus,
    /// The primary key schema. Absent in some abbreviated responses.
    pub key_schema: Option<PrimaryKey>,
    /// The provisioned throughput settings.
    pub provisioned_throughput: Option<ProvisionedThroughput>,
    /// Approximate number of items in the table.
    pub item_count: Option<u64>,
    /// Approximate total size of the table in bytes.
    pub table_size_bytes: Option<u64>,
    /// When the table was created, in epoch seconds.
    pub creation_date_time: Option<f64>,
}

/// Comparison operators accepted in a range-key condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComparisonOperator {
    /// Equal to.
    #[serde(rename = "EQ")]
    Eq,
    /// Less than or equal to.
    #[serde(rename = "LE")]
    Le,
    /// Less than.
    #[serde(rename = "LT")]
    Lt,
    /// Greater than or equal to.
    #[serde(rename = "GE")]
    Ge,
    /// Greater than.
    #[serde(rename = "GT")]
    Gt,
    /// Begins with the given prefix.
    #[serde(rename = "BEGINS_WITH")]
    BeginsWith,
    /// Between two values, inclusive.
    #[serde(rename = "BETWEEN")]
    Between,
}

impl ComparisonOperator {
    /// Returns the wire-format string representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "EQ",
            Self::Le => "LE",
            Self::Lt => "LT",
            Self::Ge => "GE",
            Self::Gt => "GT",
            Self::BeginsWith => "BEGINS_WITH",
            Self::Between => "BETWEEN",
        }
    }
}

impl std::fmt::Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A condition on the range key of a query.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyCondition {
    /// The comparison operator.
    pub comparison_operator: ComparisonOperator,
    /// The operand values (one value, or two for `BETWEEN`).
    pub attribute_value_list: Vec<AttributeValue>,
}

impl KeyCondition {
    /// Range key equal to `value`.
    #[must_use]
    pub fn eq(value: AttributeValue) -> Self {
        Self::unary(ComparisonOperator::Eq, value)
    }

    /// Range key less than or equal to `value`.
    #[must_use]
    pub fn le(value: AttributeValue) -> Self {
        Self::unary(ComparisonOperator::Le, value)
    }

    /// Range key strictly less than `value`.
    #[must_use]
    pub fn lt(value: AttributeValue) -> Self {
        Self::unary(ComparisonOperator::Lt, value)
    }

    /// Range key greater than or equal to `value`.
    #[must_use]
    pub fn ge(value: AttributeValue) -> Self {
        Self::unary(ComparisonOperator::Ge, value)
    }

    /// Range key strictly greater than `value`.
    #[must_use]
    pub fn gt(value: AttributeValue) -> Self {
        Self::unary(ComparisonOperator::Gt, value)
    }

    /// Range key beginning with the prefix `value`.
    #[must_use]
    pub fn begins_with(value: AttributeValue) -> Self {
        Self::unary(ComparisonOperator::BeginsWith, value)
    }

    /// Range key between `lower` and `upper`, inclusive.
    #[must_use]
    pub fn between(lower: AttributeValue, upper: AttributeValue) -> Self {
        Self {
            comparison_operator: ComparisonOperator::Between,
            attribute_value_list: vec![lower, upper],
        }
    }

    fn unary(comparison_operator: ComparisonOperator, value: AttributeValue) -> Self {
        Self {
            comparison_operator,
            attribute_value_list: vec![value],
        }
    }
}
