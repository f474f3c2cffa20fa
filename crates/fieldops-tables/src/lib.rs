//! Tabular data views for Fieldops list pages
//!
//! A [`TableView`] owns the sort and pagination state of one list page and turns
//! a record collection into a render model. It runs in one of two modes chosen
//! by the caller:
//!
//! - **Client-side** ([`Mode::ClientSide`]): the view sorts the whole collection
//!   and slices out the current page itself.
//! - **Server-side** ([`Mode::ServerSide`]): the collection already is the
//!   current page in the right order; header clicks and page controls only
//!   notify the caller, which re-fetches.
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[TableView] --> B[Columns]
//!     A --> C[Records]
//!     A --> D[SortState]
//!     A --> E[Pagination]
//!     A --> F[TableCallbacks]
//!     A --> G[TableRender]
//!     G --> H[HeaderCell]
//!     G --> I[TableBody]
//!     G --> J[PaginationView]
//! ```
//!
//! # Example
//!
//! ```rust
//! use fieldops_tables::{Column, Mode, TableView};
//! use serde_json::{json, Value};
//!
//! let records: Vec<Value> = vec![
//!     json!({"name": "Bravo", "stock": 4}),
//!     json!({"name": "Alpha", "stock": 9}),
//! ];
//! let columns = vec![
//!     Column::field("Name", "name").sortable().into(),
//!     Column::field("Stock", "stock").into(),
//! ];
//!
//! let mut view = TableView::new(columns, records, Mode::ClientSide);
//! assert!(view.sort_by("name"));
//!
//! let names: Vec<_> = view.visible_rows().iter().map(|r| r["name"].clone()).collect();
//! assert_eq!(names, vec![json!("Alpha"), json!("Bravo")]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod pagination;
pub mod record;
pub mod render;
pub mod sorting;
pub mod view;

// Re-exports for convenience
pub use column::{CellContent, Column, ComputedColumn, FieldColumn};
pub use pagination::{PageSummary, Pagination, PaginationView};
pub use record::Record;
pub use render::{HeaderCell, TableBody, TableRender};
pub use sorting::{SortDirection, SortState};
pub use view::{Mode, TableCallbacks, TableView};
