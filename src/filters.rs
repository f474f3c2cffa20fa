//! Filter bar.
//!
//! Draft/applied filter values with apply, reset and the active-filter badge.
//!
//! # Examples
//!
//! ```rust
//! use fieldops::filters::{FilterComposer, FilterDescriptor};
//!
//! let composer = FilterComposer::new(vec![FilterDescriptor::checkbox("overdue", "Overdue")]);
//! assert_eq!(composer.count_active(), 0);
//! ```

#[cfg(feature = "filters")]
pub use fieldops_filters::*;
