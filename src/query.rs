//! List queries and the record source seam.

#[cfg(feature = "query")]
pub use fieldops_query::*;
