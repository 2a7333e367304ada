//! The asynchronous client.

use rustddb_model::{
    Item, ItemOutput, KeyValue, PrimaryKey, ProvisionedThroughput, QueryOutput, ServiceErrorCode,
    TableDescription, TableStatus,
};

use crate::error::{DdbResult, Error};
use crate::parse;
use crate::query::Query;
use crate::region::Region;
use crate::request;
use crate::transport::{Transport, WireRequest, WireResponse};

/// The lifecycle state of a table, as observed by polling.
///
/// This extends [`TableStatus`] with [`Absent`]: a table the service does
/// not know about at all. Callers polling for readiness after
/// `create_table`, or for disappearance after `delete_table`, switch on
/// this rather than special-casing a not-found error.
///
/// [`Absent`]: TableState::Absent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableState {
    /// The table is being provisioned and cannot serve requests yet.
    Creating,
    /// The table is having its provisioned throughput changed.
    Updating,
    /// The table is ready for item operations.
    Active,
    /// The table is being torn down.
    Deleting,
    /// The service reports no table under this name.
    Absent,
}

impl TableState {
    /// Whether item operations against the table will be accepted.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl From<TableStatus> for TableState {
    fn from(status: TableStatus) -> Self {
        match status {
            TableStatus::Creating => Self::Creating,
            TableStatus::Updating => Self::Updating,
            TableStatus::Active => Self::Active,
            TableStatus::Deleting => Self::Deleting,
        }
    }
}

/// An asynchronous client scoped to one region.
///
/// The client is a thin orchestration layer: it builds a request, hands it
/// to the transport, and parses whatever comes back. It holds no mutable
/// state, performs no retries, and imposes no timeouts, so a single value
/// can be shared freely across tasks.
#[derive(Debug)]
pub struct Client<T> {
    transport: T,
    region: Region,
}

impl<T: Transport> Client<T> {
    /// Create a client that issues requests through `transport`, scoped to
    /// `region`.
    pub fn new(transport: T, region: Region) -> Self {
        Self { transport, region }
    }

    /// The region this client is scoped to.
    #[must_use]
    pub fn region(&self) -> Region {
        self.region
    }

    /// Create a table with the given key schema and provisioned throughput.
    ///
    /// The returned description reports status `CREATING`; poll
    /// [`table_state`](Self::table_state) until the table becomes active.
    pub async fn create_table(
        &self,
        table_name: &str,
        key: &PrimaryKey,
        throughput: ProvisionedThroughput,
    ) -> DdbResult<TableDescription> {
        let response = self
            .call(request::create_table(self.region, table_name, key, throughput))
            .await?;
        Ok(parse::parse_table_description(&response.body)?)
    }

    /// Delete a table.
    ///
    /// Fails with `ResourceInUseException` while the table is still
    /// `CREATING` or `UPDATING`.
    pub async fn delete_table(&self, table_name: &str) -> DdbResult<TableDescription> {
        let response = self
            .call(request::delete_table(self.region, table_name))
            .await?;
        Ok(parse::parse_table_description(&response.body)?)
    }

    /// Describe a table.
    pub async fn describe_table(&self, table_name: &str) -> DdbResult<TableDescription> {
        let response = self
            .call(request::describe_table(self.region, table_name))
            .await?;
        Ok(parse::parse_describe_table(&response.body)?)
    }

    /// Observe a table's lifecycle state.
    ///
    /// A `ResourceNotFoundException` is not an error here: it maps to
    /// [`TableState::Absent`]. Polling cadence and give-up deadlines are
    /// the caller's to choose.
    pub async fn table_state(&self, table_name: &str) -> DdbResult<TableState> {
        match self.describe_table(table_name).await {
            Ok(desc) => Ok(desc.table_status.into()),
            Err(e) if e.service_code() == Some(&ServiceErrorCode::ResourceNotFoundException) => {
                Ok(TableState::Absent)
            }
            Err(e) => Err(e),
        }
    }

    /// Store an item, replacing any existing item with the same key.
    pub async fn put_item(&self, table_name: &str, item: &Item) -> DdbResult<ItemOutput> {
        let response = self
            .call(request::put_item(self.region, table_name, item))
            .await?;
        Ok(parse::parse_item_output(&response.body)?)
    }

    /// Retrieve a single item by its full primary key.
    ///
    /// An absent item is not an error: the returned output's attribute map
    /// is empty.
    pub async fn get_item(
        &self,
        table_name: &str,
        key: &KeyValue,
        consistent_read: bool,
    ) -> DdbResult<ItemOutput> {
        let response = self
            .call(request::get_item(self.region, table_name, key, consistent_read))
            .await?;
        Ok(parse::parse_item_output(&response.body)?)
    }

    /// Run a key-condition query and return one page of results.
    ///
    /// A query matching nothing succeeds with `count == 0`; pagination is
    /// driven by feeding the output's `last_evaluated_key` back in via
    /// [`Query::with_exclusive_start_key`].
    pub async fn query(&self, query: &Query) -> DdbResult<QueryOutput> {
        let response = self.call(request::query(self.region, query)).await?;
        Ok(parse::parse_query_output(&response.body)?)
    }

    async fn call(&self, request: WireRequest) -> DdbResult<WireResponse> {
        let operation = request.operation;
        tracing::debug!(
            operation = %operation,
            region = %request.region,
            body_len = request.body.len(),
            "executing request"
        );
        let response = self.transport.execute(request).await?;
        if response.status.is_success() {
            tracing::debug!(operation = %operation, status = %response.status, "request succeeded");
            Ok(response)
        } else {
            let error = parse::parse_service_error(response.status, &response.body);
            tracing::warn!(
                operation = %operation,
                status = %response.status,
                code = %error.code,
                "service rejected request"
            );
            Err(Error::Service(error))
        }
    }
}
