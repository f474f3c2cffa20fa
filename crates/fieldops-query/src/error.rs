//! Error types for list queries and record sources

use thiserror::Error;

/// Invalid data at the service boundary
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum QueryError {
	/// The query could not be encoded
	#[error("Query encoding error: {0}")]
	Encode(#[from] serde_urlencoded::ser::Error),

	/// A response reported fewer records in total than it returned
	#[error("Total count {total_count} is smaller than the {returned} records returned")]
	TotalBelowReturned {
		/// Reported total
		total_count: usize,
		/// Records in the response
		returned: usize,
	},

	/// A response returned more records than the requested page size
	#[error("Response returned {returned} records for a page size of {page_size}")]
	PageOverflow {
		/// Records in the response
		returned: usize,
		/// Requested page size
		page_size: usize,
	},
}

/// Failure of a record source
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SourceError {
	/// The request did not reach the service or got no answer
	#[error("Transport error: {0}")]
	Transport(String),

	/// The service answered with an error status
	#[error("Service error {status}: {message}")]
	Status {
		/// HTTP status code
		status: u16,
		/// Message from the service
		message: String,
	},

	/// The response body could not be decoded
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// The query or the response is invalid
	#[error(transparent)]
	Query(#[from] QueryError),
}

/// Result alias for query operations
pub type Result<T> = std::result::Result<T, QueryError>;
