//! Status badge colours
//!
//! Entity tables render job, invoice and stock statuses as coloured badges. The
//! defaults live in an immutable table; a page can layer its own overrides on
//! top, and lookups consult the overrides first. Nothing here is mutated after
//! construction.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Colour used when a status has neither an override nor a default
pub const FALLBACK_STATUS_COLOR: &str = "secondary";

/// Built-in status colours, keyed by normalized status name
pub const DEFAULT_STATUS_COLORS: &[(&str, &str)] = &[
	("ACTIVE", "success"),
	("ASSIGNED", "info"),
	("CANCELLED", "danger"),
	("COMPLETED", "success"),
	("DRAFT", "secondary"),
	("IN_PROGRESS", "info"),
	("INACTIVE", "secondary"),
	("LOW_STOCK", "warning"),
	("OUT_OF_STOCK", "danger"),
	("OVERDUE", "danger"),
	("PAID", "success"),
	("PENDING", "warning"),
	("SCHEDULED", "primary"),
];

/// Status-to-colour lookup with caller overrides
///
/// # Example
///
/// ```rust
/// use fieldops_utils::status::StatusPalette;
///
/// let palette = StatusPalette::default().with_override("pending", "info");
/// assert_eq!(palette.color_for("Pending"), "info");
/// assert_eq!(palette.color_for("paid"), "success");
/// assert_eq!(palette.color_for("whatever"), "secondary");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusPalette {
	overrides: BTreeMap<String, String>,
}

impl StatusPalette {
	/// Creates a palette whose overrides come from `overrides`
	pub fn new<I, K, V>(overrides: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: AsRef<str>,
		V: Into<String>,
	{
		Self {
			overrides: overrides
				.into_iter()
				.map(|(status, color)| (normalize_status(status.as_ref()), color.into()))
				.collect(),
		}
	}

	/// Returns a copy of this palette with one more override
	pub fn with_override(mut self, status: &str, color: impl Into<String>) -> Self {
		self.overrides.insert(normalize_status(status), color.into());
		self
	}

	/// Returns the colour for a status: override, then default, then fallback
	pub fn color_for(&self, status: &str) -> &str {
		let key = normalize_status(status);
		if let Some(color) = self.overrides.get(&key) {
			return color;
		}
		DEFAULT_STATUS_COLORS
			.iter()
			.find(|(name, _)| *name == key)
			.map(|(_, color)| *color)
			.unwrap_or(FALLBACK_STATUS_COLOR)
	}

	/// Returns the overrides layered on top of the defaults
	pub fn overrides(&self) -> &BTreeMap<String, String> {
		&self.overrides
	}
}

/// Normalizes a status name to the `UPPER_SNAKE` form used as palette key
pub fn normalize_status(status: &str) -> String {
	status
		.trim()
		.chars()
		.map(|c| match c {
			' ' | '-' => '_',
			other => other.to_ascii_uppercase(),
		})
		.collect()
}

/// Turns a status key into a display label (`IN_PROGRESS` -> `In Progress`)
pub fn status_label(status: &str) -> String {
	normalize_status(status)
		.split('_')
		.filter(|word| !word.is_empty())
		.map(|word| {
			let lower = word.to_ascii_lowercase();
			let mut chars = lower.chars();
			match chars.next() {
				Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
				None => String::new(),
			}
		})
		.collect::<Vec<_>>()
		.join(" ")
}
