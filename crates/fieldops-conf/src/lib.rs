//! Dashboard settings for the Fieldops list primitives
//!
//! Settings are read from a TOML document. Every key is optional; missing keys
//! fall back to the defaults below.
//!
//! ```toml
//! [table]
//! page_size = 25
//! page_size_options = [10, 25, 50, 100]
//! skeleton_rows = 3
//! max_page_buttons = 5
//! empty_message = "No data available"
//!
//! [search]
//! debounce_ms = 300
//!
//! [status_colors]
//! PENDING = "info"
//! ```
//!
//! # Example
//!
//! ```rust
//! use fieldops_conf::DashboardSettings;
//!
//! let settings = DashboardSettings::from_toml_str("[table]\npage_size = 25\n").unwrap();
//! assert_eq!(settings.table.page_size, 25);
//! assert_eq!(settings.table.skeleton_rows, 3);
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod settings;

pub use error::{ConfError, Result};
pub use settings::{DashboardSettings, SearchSettings, TableSettings};
