//! # Fieldops
//!
//! Headless list primitives for the Fieldops operations dashboard.
//!
//! Every list page of the dashboard (jobs, installers, materials, invoices)
//! is the same three pieces wired together: a table that sorts and pages its
//! records, a filter bar that keeps a draft apart from what was applied, and
//! a query sent to the service layer. Fieldops provides those pieces as plain
//! state machines that render to HTML strings and report user intent through
//! callbacks.
//!
//! ## Feature Flags
//!
//! ### Presets
//!
//! - `minimal` - Table and filter state machines only
//! - `full` (default) - Everything below
//!
//! ### Fine-grained Control
//!
//! - `tables` - [`TableView`], sorting, pagination and rendering
//! - `filters` - [`FilterComposer`] and filter controls
//! - `conf` - [`DashboardSettings`] loaded from TOML
//! - `query` - [`ListQuery`], [`ListResponse`] and the [`RecordSource`] trait
//!
//! Value ordering, formatting, status colours and the search debouncer live in
//! [`utils`] and are always available.
//!
//! ## Quick Example
//!
//! ```rust
//! use fieldops::prelude::*;
//! use serde_json::{Value, json};
//!
//! let columns: Vec<Column<Value>> = vec![
//!     Column::field("Name", "name").sortable().into(),
//!     Column::field("Status", "status").into(),
//! ];
//! let records = vec![
//!     json!({"name": "Priya", "status": "ACTIVE"}),
//!     json!({"name": "Ade", "status": "ON_LEAVE"}),
//! ];
//!
//! let mut table = TableView::new(columns, records, Mode::ClientSide);
//! table.sort_by("name");
//! assert_eq!(table.visible_rows()[0]["name"], "Ade");
//!
//! let mut filters = FilterComposer::new(vec![FilterDescriptor::select(
//!     "status",
//!     "Status",
//!     [("ACTIVE", "Active"), ("ON_LEAVE", "On leave")],
//! )]);
//! filters.set_draft_value("status", DraftInput::text("ACTIVE"));
//! assert_eq!(filters.count_active(), 0);
//! filters.apply();
//! assert_eq!(filters.count_active(), 1);
//! ```

#[cfg(feature = "conf")]
pub mod conf;
#[cfg(feature = "filters")]
pub mod filters;
#[cfg(feature = "query")]
pub mod query;
#[cfg(feature = "tables")]
pub mod tables;
pub mod utils;

// Re-export settings
#[cfg(feature = "conf")]
pub use fieldops_conf::{ConfError, DashboardSettings, SearchSettings, TableSettings};

// Re-export table types
#[cfg(feature = "tables")]
pub use fieldops_tables::{
	CellContent, Column, Mode, PageSummary, Pagination, PaginationView, Record, SortDirection,
	SortState, TableCallbacks, TableRender, TableView,
};

// Re-export filter types
#[cfg(feature = "filters")]
pub use fieldops_filters::{
	DateRange, DraftInput, FilterCallbacks, FilterComposer, FilterDescriptor, FilterKind,
	FilterOption, FilterValue, FilterValues,
};

// Re-export the service-layer contract
#[cfg(feature = "query")]
pub use fieldops_query::{
	ListQuery, ListResponse, QueryError, RecordSource, SourceError, fetch_page,
};

// Re-export helpers
pub use fieldops_utils::{Callback, Debouncer, StatusPalette};

/// Prelude module for convenient imports
///
/// Import commonly used types with:
/// ```rust
/// use fieldops::prelude::*;
/// ```
pub mod prelude {
	// Helpers - always available
	pub use crate::{Callback, Debouncer, StatusPalette};

	#[cfg(feature = "conf")]
	pub use crate::{DashboardSettings, TableSettings};

	#[cfg(feature = "tables")]
	pub use crate::{
		CellContent, Column, Mode, Pagination, SortDirection, SortState, TableCallbacks,
		TableRender, TableView,
	};

	#[cfg(feature = "filters")]
	pub use crate::{
		DateRange, DraftInput, FilterCallbacks, FilterComposer, FilterDescriptor, FilterValue,
		FilterValues,
	};

	#[cfg(feature = "query")]
	pub use crate::{ListQuery, ListResponse, RecordSource, SourceError, fetch_page};
}
