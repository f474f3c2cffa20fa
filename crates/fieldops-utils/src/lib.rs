//! Shared helpers for the Fieldops list primitives
//!
//! This crate holds the leaf utilities that the table and filter crates build on:
//!
//! - **Callbacks**: cloneable closures for component outputs
//! - **Comparison**: ordering of JSON cell values with a fixed "undefined last" policy
//! - **Formatting**: cell text, dates and currency amounts
//! - **Status palette**: immutable status-to-colour defaults with caller overrides
//! - **Debouncing**: a cancellable timer with at most one pending invocation
//!
//! # Example
//!
//! ```rust
//! use fieldops_utils::compare::compare_nullable;
//! use serde_json::json;
//! use std::cmp::Ordering;
//!
//! let a = json!("Alice");
//! assert_eq!(compare_nullable(Some(&a), None, false), Ordering::Less);
//! assert_eq!(compare_nullable(Some(&a), None, true), Ordering::Less);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod callback;
pub mod compare;
pub mod debounce;
pub mod error;
pub mod format;
pub mod status;

// Re-exports for convenience
pub use callback::Callback;
pub use compare::{compare_nullable, compare_values};
pub use debounce::Debouncer;
pub use error::{DebounceError, Result};
pub use format::{format_currency, format_date, format_value};
pub use status::StatusPalette;
