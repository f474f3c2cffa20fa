//! List responses

use crate::error::{QueryError, Result};
use fieldops_tables::{Record, TableView};
use serde::{Deserialize, Serialize};

/// One page of records plus the total the pager counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListResponse<R> {
	/// Records of the requested page, in display order
	#[serde(alias = "results")]
	pub records: Vec<R>,
	/// Total number of records matching the query
	#[serde(alias = "count")]
	pub total_count: usize,
}

impl<R> ListResponse<R> {
	/// Creates a response
	pub fn new(records: Vec<R>, total_count: usize) -> Self {
		Self {
			records,
			total_count,
		}
	}

	/// Checks the response is consistent.
	///
	/// The total may not be smaller than the number of records returned.
	pub fn validate(&self) -> Result<()> {
		if self.total_count < self.records.len() {
			return Err(QueryError::TotalBelowReturned {
				total_count: self.total_count,
				returned: self.records.len(),
			});
		}
		Ok(())
	}

	/// Checks the response against the page size it was requested with
	pub fn validate_for_page_size(&self, page_size: usize) -> Result<()> {
		self.validate()?;
		if self.records.len() > page_size {
			return Err(QueryError::PageOverflow {
				returned: self.records.len(),
				page_size,
			});
		}
		Ok(())
	}
}

impl<R: Record> ListResponse<R> {
	/// Loads the page into a server-side table view.
	///
	/// The view takes the records and the total and leaves the loading state.
	pub fn load_into(self, view: &mut TableView<R>) {
		if !view.mode().is_server_side() {
			tracing::warn!("loading a server response into a client-side table");
		}
		view.set_total_count(self.total_count);
		view.set_records(self.records);
		view.set_loading(false);
	}
}
