//! Record source contract
//!
//! The HTTP service layer lives outside this workspace. [`RecordSource`] is the
//! seam it plugs into: list pages build a [`ListQuery`], ask the source for a
//! page and load the checked response into their table.

use crate::error::SourceError;
use crate::query::ListQuery;
use crate::response::ListResponse;
use async_trait::async_trait;

/// A service that lists records of a resource type
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use fieldops_query::{ListQuery, ListResponse, RecordSource, SourceError};
/// use serde_json::{json, Value};
///
/// struct Splitters;
///
/// #[async_trait]
/// impl RecordSource for Splitters {
///     type Record = Value;
///
///     async fn list(
///         &self,
///         _resource: &str,
///         _query: &ListQuery,
///     ) -> Result<ListResponse<Value>, SourceError> {
///         Ok(ListResponse::new(vec![json!({"id": 1, "ports": 8})], 1))
///     }
/// }
/// ```
#[async_trait]
pub trait RecordSource: Send + Sync {
	/// Record type returned by the source
	type Record: Send;

	/// Lists the page of `resource` described by `query`
	async fn list(
		&self,
		resource: &str,
		query: &ListQuery,
	) -> Result<ListResponse<Self::Record>, SourceError>;
}

/// Lists a page and checks the response before handing it out.
///
/// Responses whose total is below the number of records returned, or that
/// return more records than the page size, are rejected.
pub async fn fetch_page<S>(
	source: &S,
	resource: &str,
	query: &ListQuery,
) -> Result<ListResponse<S::Record>, SourceError>
where
	S: RecordSource + ?Sized,
{
	tracing::debug!(resource, page = query.page, page_size = query.page_size, "listing records");
	let response = source.list(resource, query).await?;
	if let Err(err) = response.validate_for_page_size(query.page_size) {
		tracing::warn!(resource, error = %err, "rejecting inconsistent list response");
		return Err(err.into());
	}
	Ok(response)
}
