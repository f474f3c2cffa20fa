//! Shared helpers: value ordering, formatting, status colours, debouncing.

pub use fieldops_utils::*;
