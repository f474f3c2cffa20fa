//! Table views.
//!
//! Sort, paginate and render a record collection, client-side or server-side.
//!
//! # Examples
//!
//! ```rust
//! use fieldops::tables::{Column, Mode, TableView};
//! use serde_json::Value;
//!
//! let columns: Vec<Column<Value>> = vec![Column::field("Name", "name").sortable().into()];
//! let view = TableView::new(columns, Vec::new(), Mode::ClientSide);
//! assert!(view.render().is_empty());
//! ```

#[cfg(feature = "tables")]
pub use fieldops_tables::*;
