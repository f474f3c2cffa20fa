//! Sorting functionality for tables

use crate::record::Record;
use fieldops_utils::compare::compare_nullable;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
	/// Ascending order
	#[default]
	Asc,
	/// Descending order
	Desc,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Asc => Self::Desc,
			Self::Desc => Self::Asc,
		}
	}

	/// Returns `"asc"` or `"desc"`
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "asc",
			Self::Desc => "desc",
		}
	}

	/// Returns `true` for [`SortDirection::Desc`]
	pub fn is_descending(&self) -> bool {
		matches!(self, Self::Desc)
	}

	/// Parses a sort direction from an ordering query parameter
	///
	/// Returns `Asc` for plain field names and `Desc` for `-` prefixed ones
	/// (e.g., "name" -> Asc, "-name" -> Desc)
	pub fn parse_from_query(s: &str) -> (Self, &str) {
		if let Some(field) = s.strip_prefix('-') {
			(Self::Desc, field)
		} else {
			(Self::Asc, s)
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SortDirection {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"asc" | "ascending" => Ok(Self::Asc),
			"desc" | "descending" => Ok(Self::Desc),
			other => Err(format!("unknown sort direction: {other}")),
		}
	}
}

/// Current sort of a table
///
/// `field == None` means no sort is applied and rows keep their input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
	/// Field being sorted on
	pub field: Option<String>,
	/// Direction of the sort
	pub direction: SortDirection,
}

impl SortState {
	/// No sort; rows keep their input order
	pub fn unsorted() -> Self {
		Self::default()
	}

	/// Sort by `field` in `direction`
	pub fn by(field: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			field: Some(field.into()),
			direction,
		}
	}

	/// Returns `true` when a sort field is set
	pub fn is_active(&self) -> bool {
		self.field.is_some()
	}

	/// Returns the direction if the table is sorted by `field`
	pub fn direction_for(&self, field: &str) -> Option<SortDirection> {
		match &self.field {
			Some(current) if current == field => Some(self.direction),
			_ => None,
		}
	}

	/// Header-click transition.
	///
	/// Clicking a different field sorts by it ascending; clicking the current
	/// field flips the direction.
	///
	/// # Example
	///
	/// ```rust
	/// use fieldops_tables::sorting::{SortDirection, SortState};
	///
	/// let state = SortState::by("name", SortDirection::Asc);
	/// assert_eq!(state.toggled("name"), SortState::by("name", SortDirection::Desc));
	/// assert_eq!(state.toggled("date"), SortState::by("date", SortDirection::Asc));
	/// ```
	pub fn toggled(&self, field: &str) -> Self {
		match self.direction_for(field) {
			Some(direction) => Self::by(field, direction.toggle()),
			None => Self::by(field, SortDirection::Asc),
		}
	}

	/// Encodes the sort as an ordering parameter (`name` or `-name`)
	pub fn to_query_value(&self) -> Option<String> {
		self.field.as_ref().map(|field| match self.direction {
			SortDirection::Asc => field.clone(),
			SortDirection::Desc => format!("-{}", field),
		})
	}

	/// Decodes an ordering parameter; an empty value means unsorted
	pub fn from_query_value(value: &str) -> Self {
		let (direction, field) = SortDirection::parse_from_query(value.trim());
		if field.is_empty() {
			Self::unsorted()
		} else {
			Self::by(field, direction)
		}
	}
}

/// Returns the row indices of `records` in display order for `state`.
///
/// The sort is stable: rows that compare equal keep their input order. Rows
/// whose sort value is undefined come after every defined value in both
/// directions.
pub fn sort_indices<R: Record>(records: &[R], state: &SortState) -> Vec<usize> {
	let mut indices: Vec<usize> = (0..records.len()).collect();
	if let Some(field) = state.field.as_deref() {
		let descending = state.direction.is_descending();
		indices.sort_by(|&a, &b| {
			compare_nullable(records[a].field(field), records[b].field(field), descending)
		});
	}
	indices
}

/// Returns references to `records` in display order for `state`
pub fn sorted<'a, R: Record>(records: &'a [R], state: &SortState) -> Vec<&'a R> {
	sort_indices(records, state)
		.into_iter()
		.map(|i| &records[i])
		.collect()
}
