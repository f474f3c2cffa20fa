//! Settings structures and TOML loading

use crate::error::{ConfError, Result};
use fieldops_utils::status::StatusPalette;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;
/// Default number of placeholder rows shown while loading
pub const DEFAULT_SKELETON_ROWS: usize = 3;
/// Default number of page-number buttons
pub const DEFAULT_MAX_PAGE_BUTTONS: usize = 5;
/// Default search quiescence window in milliseconds
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u64 = 300;
/// Default empty-state message
pub const DEFAULT_EMPTY_MESSAGE: &str = "No data available";

/// Table presentation defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableSettings {
	/// Initial page size
	pub page_size: usize,
	/// Page sizes offered by the page-size selector
	pub page_size_options: Vec<usize>,
	/// Placeholder rows rendered while loading
	pub skeleton_rows: usize,
	/// Maximum number of page-number buttons
	pub max_page_buttons: usize,
	/// Message rendered in place of the table when there are no records
	pub empty_message: String,
}

impl Default for TableSettings {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			page_size_options: vec![10, 25, 50, 100],
			skeleton_rows: DEFAULT_SKELETON_ROWS,
			max_page_buttons: DEFAULT_MAX_PAGE_BUTTONS,
			empty_message: DEFAULT_EMPTY_MESSAGE.to_string(),
		}
	}
}

/// Search box defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSettings {
	/// Quiescence window before the search callback runs
	pub debounce_ms: u64,
}

impl Default for SearchSettings {
	fn default() -> Self {
		Self {
			debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
		}
	}
}

/// Top-level dashboard settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
	/// Table presentation
	pub table: TableSettings,
	/// Search box
	pub search: SearchSettings,
	/// Status colour overrides merged over the built-in palette
	pub status_colors: BTreeMap<String, String>,
}

impl DashboardSettings {
	/// Parses and validates settings from a TOML document
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let settings: Self = toml::from_str(source)?;
		settings.validate()?;
		Ok(settings)
	}

	/// Reads, parses and validates a TOML settings file
	pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = fs::read_to_string(path)?;
		let settings = Self::from_toml_str(&source)?;
		tracing::debug!(path = %path.display(), "loaded dashboard settings");
		Ok(settings)
	}

	/// Checks that every setting holds a usable value
	pub fn validate(&self) -> Result<()> {
		let table = &self.table;
		if table.page_size == 0 {
			return Err(invalid("table.page_size", "must be greater than zero"));
		}
		if table.page_size_options.is_empty() {
			return Err(invalid("table.page_size_options", "must not be empty"));
		}
		if table.page_size_options.contains(&0) {
			return Err(invalid(
				"table.page_size_options",
				"every option must be greater than zero",
			));
		}
		if !table.page_size_options.contains(&table.page_size) {
			return Err(ConfError::Invalid {
				key: "table.page_size",
				reason: format!(
					"{} is not one of the page size options {:?}",
					table.page_size, table.page_size_options
				),
			});
		}
		if table.max_page_buttons == 0 || table.max_page_buttons % 2 == 0 {
			return Err(invalid(
				"table.max_page_buttons",
				"must be an odd number of at least 1",
			));
		}
		Ok(())
	}

	/// Returns the search quiescence window
	pub fn search_debounce(&self) -> Duration {
		Duration::from_millis(self.search.debounce_ms)
	}

	/// Builds the status palette with the configured overrides
	pub fn status_palette(&self) -> StatusPalette {
		StatusPalette::new(&self.status_colors)
	}
}

fn invalid(key: &'static str, reason: &str) -> ConfError {
	ConfError::Invalid {
		key,
		reason: reason.to_string(),
	}
}
