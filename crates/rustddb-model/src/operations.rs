//! Operation enum and wire action targets.

use std::fmt;

/// All operations this client supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Create a new table.
    CreateTable,
    /// Delete a table.
    DeleteTable,
    /// Describe a table.
    DescribeTable,
    /// Put (insert or replace) an item.
    PutItem,
    /// Get an item by primary key.
    GetItem,
    /// Query items by hash key and optional range condition.
    Query,
}

impl Operation {
    /// Returns the operation name string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreateTable => "CreateTable",
            Self::DeleteTable => "DeleteTable",
            Self::DescribeTable => "DescribeTable",
            Self::PutItem => "PutItem",
            Self::GetItem => "GetItem",
            Self::Query => "Query",
        }
    }

    /// Returns the `X-Amz-Target` header value for this operation.
    #[must_use]
    pub fn target(&self) -> &'static str {
        match self {
            Self::CreateTable => "DynamoDB_20111205.CreateTable",
            Self::DeleteTable => "DynamoDB_20111205.DeleteTable",
            Self::DescribeTable => "DynamoDB_20111205.DescribeTable",
            Self::PutItem => "DynamoDB_20111205.PutItem",
            Self::GetItem => "DynamoDB_20111205.GetItem",
            Self::Query => "DynamoDB_20111205.Query",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
