//! Wire data model for the rustddb client.
//!
//! This crate holds everything that appears on the wire or in a typed
//! result: the [`AttributeValue`] tagged union, key schema and key value
//! types, table types, operation inputs and outputs, and the error model.
//! The service speaks the DynamoDB 2011-12-05 JSON protocol; these types
//! are hand-written since that protocol makes serde impls trivial.
// "DynamoDB" appears in doc comments throughout this crate.
#![allow(clippy::doc_markdown)]
#![allow(clippy::module_name_repetitions)]

pub mod attribute_value;
pub mod error;
pub mod input;
pub mod key;
pub mod operations;
pub mod output;
pub mod types;

pub use attribute_value::AttributeValue;
pub use error::{ClientError, ParseError, ServiceError, ServiceErrorCode};
pub use key::{AttributeType, KeySchemaElement, KeyValue, PrimaryKey};
pub use operations::Operation;
pub use output::{ItemOutput, QueryOutput};
pub use types::{
    ComparisonOperator, Item, KeyCondition, ProvisionedThroughput, TableDescription, TableStatus,
};
