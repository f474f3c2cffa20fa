//! Filter values and value sets

use crate::descriptor::FilterDescriptor;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

/// From/to pair of a date-range filter
///
/// Members are ISO dates as typed into the inputs; an empty string means the
/// side is open.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
	/// Start date
	#[serde(default)]
	pub from: String,
	/// End date
	#[serde(default)]
	pub to: String,
}

impl DateRange {
	/// Creates a range
	pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
		Self {
			from: from.into(),
			to: to.into(),
		}
	}

	/// Returns `true` when both sides are empty
	pub fn is_empty(&self) -> bool {
		self.from.is_empty() && self.to.is_empty()
	}
}

/// Value of one filter
///
/// Serialized untagged: a string, a boolean, or a `{from, to}` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
	/// Checkbox state
	Flag(bool),
	/// Text, select, radio and date values
	Text(String),
	/// Date-range value
	Range(DateRange),
}

impl FilterValue {
	/// Returns `true` if the value counts as an active filter.
	///
	/// Empty strings and ranges with both sides empty do not. A checkbox
	/// value counts whether it is checked or not.
	pub fn is_set(&self) -> bool {
		match self {
			Self::Text(text) => !text.is_empty(),
			Self::Flag(_) => true,
			Self::Range(range) => !range.is_empty(),
		}
	}

	/// Returns the text, if this is a text value
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the flag, if this is a checkbox value
	pub fn as_flag(&self) -> Option<bool> {
		match self {
			Self::Flag(flag) => Some(*flag),
			_ => None,
		}
	}

	/// Returns the range, if this is a date-range value
	pub fn as_range(&self) -> Option<&DateRange> {
		match self {
			Self::Range(range) => Some(range),
			_ => None,
		}
	}
}

impl From<&str> for FilterValue {
	fn from(text: &str) -> Self {
		Self::Text(text.to_string())
	}
}

impl From<String> for FilterValue {
	fn from(text: String) -> Self {
		Self::Text(text)
	}
}

impl From<bool> for FilterValue {
	fn from(flag: bool) -> Self {
		Self::Flag(flag)
	}
}

impl From<DateRange> for FilterValue {
	fn from(range: DateRange) -> Self {
		Self::Range(range)
	}
}

/// Filter id to value, in insertion order
///
/// An absent id and a `null` in a deserialized document mean the same thing:
/// nulls are dropped on the way in.
///
/// # Examples
///
/// ```
/// use fieldops_filters::{DateRange, FilterValues};
///
/// let values = FilterValues::new()
///     .with("status", "")
///     .with("buildingId", "3")
///     .with("dateRange", DateRange::default());
/// assert_eq!(values.count_active(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FilterValues(IndexMap<String, FilterValue>);

impl FilterValues {
	/// Creates an empty value set
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds the all-empty value set for `descriptors`.
	///
	/// Every id maps to its kind's empty value: `""` for text, select, radio
	/// and date, `false` for checkbox and `{from: "", to: ""}` for date-range.
	pub fn empty_for(descriptors: &[FilterDescriptor]) -> Self {
		descriptors
			.iter()
			.map(|descriptor| (descriptor.id.clone(), descriptor.kind.empty_value()))
			.collect()
	}

	/// Adds a value, builder style
	pub fn with(mut self, id: impl Into<String>, value: impl Into<FilterValue>) -> Self {
		self.insert(id, value);
		self
	}

	/// Sets the value for `id`, returning the previous one
	pub fn insert(&mut self, id: impl Into<String>, value: impl Into<FilterValue>) -> Option<FilterValue> {
		self.0.insert(id.into(), value.into())
	}

	/// Removes the value for `id`, keeping the order of the others
	pub fn remove(&mut self, id: &str) -> Option<FilterValue> {
		self.0.shift_remove(id)
	}

	/// Returns the value for `id`
	pub fn get(&self, id: &str) -> Option<&FilterValue> {
		self.0.get(id)
	}

	/// Returns `true` if `id` has a value
	pub fn contains(&self, id: &str) -> bool {
		self.0.contains_key(id)
	}

	/// Number of ids with a value, set or not
	pub fn len(&self) -> usize {
		self.0.len()
	}

	/// Returns `true` when no id has a value
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	/// Iterates over all values in insertion order
	pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
		self.0.iter().map(|(id, value)| (id.as_str(), value))
	}

	/// Iterates over the values that count as active filters
	pub fn active(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
		self.iter().filter(|(_, value)| value.is_set())
	}

	/// Number of active filters, for the filter badge
	pub fn count_active(&self) -> usize {
		self.active().count()
	}
}

impl<K: Into<String>> FromIterator<(K, FilterValue)> for FilterValues {
	fn from_iter<I: IntoIterator<Item = (K, FilterValue)>>(iter: I) -> Self {
		Self(iter.into_iter().map(|(id, value)| (id.into(), value)).collect())
	}
}

impl<'a> IntoIterator for &'a FilterValues {
	type Item = (&'a String, &'a FilterValue);
	type IntoIter = indexmap::map::Iter<'a, String, FilterValue>;

	fn into_iter(self) -> Self::IntoIter {
		self.0.iter()
	}
}

impl<'de> Deserialize<'de> for FilterValues {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = IndexMap::<String, Option<FilterValue>>::deserialize(deserializer)?;
		Ok(raw
			.into_iter()
			.filter_map(|(id, value)| value.map(|value| (id, value)))
			.collect())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(FilterValue::from(""), false)]
	#[case(FilterValue::from("3"), true)]
	#[case(FilterValue::from(" "), true)]
	#[case(FilterValue::Flag(false), true)]
	#[case(FilterValue::Flag(true), true)]
	#[case(FilterValue::Range(DateRange::default()), false)]
	#[case(FilterValue::Range(DateRange::new("2024-01-01", "")), true)]
	#[case(FilterValue::Range(DateRange::new("", "2024-01-31")), true)]
	fn test_is_set(#[case] value: FilterValue, #[case] expected: bool) {
		assert_eq!(value.is_set(), expected);
	}

	#[rstest]
	fn test_count_active_example() {
		let values = FilterValues::new()
			.with("status", "")
			.with("buildingId", "3")
			.with("dateRange", DateRange::new("", ""));
		assert_eq!(values.count_active(), 1);
		assert_eq!(values.len(), 3);
	}

	#[rstest]
	fn test_untagged_shapes() {
		let values: FilterValues = serde_json::from_value(json!({
			"status": "ACTIVE",
			"overdue": true,
			"created": {"from": "2024-01-01"},
			"building": null
		}))
		.unwrap();

		assert_eq!(values.get("status"), Some(&FilterValue::from("ACTIVE")));
		assert_eq!(values.get("overdue"), Some(&FilterValue::Flag(true)));
		assert_eq!(
			values.get("created"),
			Some(&FilterValue::Range(DateRange::new("2024-01-01", "")))
		);
		assert!(!values.contains("building"));
		assert_eq!(values.len(), 3);
	}

	#[rstest]
	fn test_serialize_keeps_insertion_order() {
		let values = FilterValues::new()
			.with("z", "1")
			.with("a", true)
			.with("m", DateRange::new("", "2024-02-01"));
		assert_eq!(
			serde_json::to_string(&values).unwrap(),
			r#"{"z":"1","a":true,"m":{"from":"","to":"2024-02-01"}}"#
		);
	}

	#[rstest]
	fn test_remove_keeps_order() {
		let mut values = FilterValues::new().with("a", "1").with("b", "2").with("c", "3");
		assert_eq!(values.remove("b"), Some(FilterValue::from("2")));
		let ids: Vec<&str> = values.iter().map(|(id, _)| id).collect();
		assert_eq!(ids, vec!["a", "c"]);
	}
}
