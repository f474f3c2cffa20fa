//! Filter descriptors
//!
//! A descriptor declares one filter control: its id (the key in the value set),
//! its label and its kind. Choice kinds carry their options in display order.

use crate::value::{DateRange, FilterValue};
use serde::{Deserialize, Serialize};

/// One choice of a select or radio filter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
	/// Value stored in the value set when chosen
	pub value: String,
	/// Text shown for the choice
	pub label: String,
}

impl FilterOption {
	/// Creates an option
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
		}
	}
}

/// Filter kind, deciding the control and the value shape
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "options", rename_all = "lowercase")]
pub enum FilterKind {
	/// Free text input
	Text,
	/// Single-select dropdown
	Select(Vec<FilterOption>),
	/// Checkbox
	Checkbox,
	/// Radio group
	Radio(Vec<FilterOption>),
	/// Single date input
	Date,
	/// Paired from/to date inputs
	DateRange,
}

impl FilterKind {
	/// Returns the kind's empty value: `""`, `false` or an empty range
	pub fn empty_value(&self) -> FilterValue {
		match self {
			Self::Text | Self::Select(_) | Self::Radio(_) | Self::Date => {
				FilterValue::Text(String::new())
			}
			Self::Checkbox => FilterValue::Flag(false),
			Self::DateRange => FilterValue::Range(DateRange::default()),
		}
	}

	/// Returns `true` if `value` has the shape this kind stores
	pub fn accepts(&self, value: &FilterValue) -> bool {
		matches!(
			(self, value),
			(
				Self::Text | Self::Select(_) | Self::Radio(_) | Self::Date,
				FilterValue::Text(_)
			) | (Self::Checkbox, FilterValue::Flag(_))
				| (Self::DateRange, FilterValue::Range(_))
		)
	}

	/// Returns the options of a choice kind
	pub fn options(&self) -> &[FilterOption] {
		match self {
			Self::Select(options) | Self::Radio(options) => options,
			_ => &[],
		}
	}

	/// Returns the kind's name as used in descriptor documents
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Text => "text",
			Self::Select(_) => "select",
			Self::Checkbox => "checkbox",
			Self::Radio(_) => "radio",
			Self::Date => "date",
			Self::DateRange => "daterange",
		}
	}
}

/// Declaration of one filter
///
/// # Examples
///
/// ```
/// use fieldops_filters::FilterDescriptor;
///
/// let status = FilterDescriptor::select(
///     "status",
///     "Status",
///     [("ACTIVE", "Active"), ("INACTIVE", "Inactive")],
/// );
/// assert_eq!(status.kind.options().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterDescriptor {
	/// Key in the value set
	pub id: String,
	/// Label shown next to the control
	pub label: String,
	/// Kind of control
	#[serde(flatten)]
	pub kind: FilterKind,
}

impl FilterDescriptor {
	/// Creates a descriptor
	pub fn new(id: impl Into<String>, label: impl Into<String>, kind: FilterKind) -> Self {
		Self {
			id: id.into(),
			label: label.into(),
			kind,
		}
	}

	/// Free text filter
	pub fn text(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(id, label, FilterKind::Text)
	}

	/// Dropdown filter over `(value, label)` pairs
	pub fn select<I, V, L>(id: impl Into<String>, label: impl Into<String>, options: I) -> Self
	where
		I: IntoIterator<Item = (V, L)>,
		V: Into<String>,
		L: Into<String>,
	{
		Self::new(id, label, FilterKind::Select(collect_options(options)))
	}

	/// Checkbox filter
	pub fn checkbox(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(id, label, FilterKind::Checkbox)
	}

	/// Radio group filter over `(value, label)` pairs
	pub fn radio<I, V, L>(id: impl Into<String>, label: impl Into<String>, options: I) -> Self
	where
		I: IntoIterator<Item = (V, L)>,
		V: Into<String>,
		L: Into<String>,
	{
		Self::new(id, label, FilterKind::Radio(collect_options(options)))
	}

	/// Single date filter
	pub fn date(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(id, label, FilterKind::Date)
	}

	/// From/to date filter
	pub fn date_range(id: impl Into<String>, label: impl Into<String>) -> Self {
		Self::new(id, label, FilterKind::DateRange)
	}

	/// Returns `true` if `value` is an option of this choice filter.
	///
	/// The empty string always is, meaning "all". Non-choice kinds accept any
	/// text.
	pub fn has_option(&self, value: &str) -> bool {
		match &self.kind {
			FilterKind::Select(options) | FilterKind::Radio(options) => {
				value.is_empty() || options.iter().any(|option| option.value == value)
			}
			_ => true,
		}
	}
}

fn collect_options<I, V, L>(options: I) -> Vec<FilterOption>
where
	I: IntoIterator<Item = (V, L)>,
	V: Into<String>,
	L: Into<String>,
{
	options
		.into_iter()
		.map(|(value, label)| FilterOption::new(value, label))
		.collect()
}
