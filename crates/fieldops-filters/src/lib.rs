//! Filter bar state for Fieldops list pages
//!
//! A [`FilterComposer`] collects filter input across heterogeneous controls and
//! hands a complete value set to the owning page only when the user applies it.
//!
//! ## Filter kinds
//!
//! | Kind | Control | Value | Empty value |
//! |------|---------|-------|-------------|
//! | `text` | text input | string | `""` |
//! | `select` | dropdown with a leading "All" option | string | `""` |
//! | `checkbox` | checkbox | bool | `false` |
//! | `radio` | radio group | string | `""` |
//! | `date` | date input | string | `""` |
//! | `daterange` | from/to date inputs | `{from, to}` | `{from: "", to: ""}` |
//!
//! ## Example
//!
//! ```rust
//! use fieldops_filters::{
//!     DateRange, DraftInput, FilterCallbacks, FilterComposer, FilterDescriptor, FilterValues,
//! };
//! use std::sync::{Arc, Mutex};
//!
//! let applied = Arc::new(Mutex::new(Vec::new()));
//! let callbacks = FilterCallbacks::new().on_apply({
//!     let applied = Arc::clone(&applied);
//!     move |values: FilterValues| applied.lock().unwrap().push(values)
//! });
//!
//! let mut composer = FilterComposer::new(vec![
//!     FilterDescriptor::text("a", "A"),
//!     FilterDescriptor::date_range("b", "B"),
//! ])
//! .callbacks(callbacks);
//!
//! composer.set_draft_value("a", DraftInput::text("north"));
//! assert!(applied.lock().unwrap().is_empty());
//!
//! composer.apply();
//! assert_eq!(applied.lock().unwrap().len(), 1);
//!
//! composer.reset();
//! assert_eq!(
//!     composer.draft(),
//!     &FilterValues::new().with("a", "").with("b", DateRange::default())
//! );
//! ```

#![warn(missing_docs)]

pub mod composer;
pub mod controls;
pub mod descriptor;
pub mod value;

pub use composer::{DraftInput, FilterCallbacks, FilterComposer};
pub use controls::{FilterControl, Widget};
pub use descriptor::{FilterDescriptor, FilterKind, FilterOption};
pub use value::{DateRange, FilterValue, FilterValues};
