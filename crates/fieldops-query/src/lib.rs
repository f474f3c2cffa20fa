//! Service-layer contract for Fieldops list pages
//!
//! List pages hold their records; the service layer fetches them. This crate
//! defines what crosses that boundary:
//!
//! - [`ListQuery`]: page, page size, search text, sort and applied filters,
//!   flattened into query parameters.
//! - [`ListResponse`]: one page of records and the total count, validated on
//!   arrival since it is the one place untyped data enters.
//! - [`RecordSource`]: the async trait the HTTP client implements.

#![warn(missing_docs)]

pub mod error;
pub mod query;
pub mod response;
pub mod source;

pub use error::{QueryError, Result, SourceError};
pub use query::ListQuery;
pub use response::ListResponse;
pub use source::{RecordSource, fetch_page};
