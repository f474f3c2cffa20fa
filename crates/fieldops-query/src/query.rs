//! List query parameters
//!
//! A [`ListQuery`] is the union of what a list page sends to the service: the
//! page, the page size, the search text, the sort and the applied filters.

use crate::error::Result;
use fieldops_filters::{FilterComposer, FilterValue, FilterValues};
use fieldops_tables::{Record, SortState, TableView};
use serde::{Deserialize, Serialize};

/// Query parameters of one list request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListQuery {
	/// Page number (1-indexed)
	pub page: usize,
	/// Items per page
	pub page_size: usize,
	/// Search text; blank means no search
	#[serde(default)]
	pub search: String,
	/// Sort field and direction
	#[serde(default)]
	pub sort: SortState,
	/// Applied filter values
	#[serde(default)]
	pub filters: FilterValues,
}

impl ListQuery {
	/// Creates an unsorted, unfiltered query for one page
	pub fn new(page: usize, page_size: usize) -> Self {
		Self {
			page: page.max(1),
			page_size: page_size.max(1),
			search: String::new(),
			sort: SortState::unsorted(),
			filters: FilterValues::new(),
		}
	}

	/// Builds the query for the current state of a list page.
	///
	/// Page, page size and sort come from `view`; filters are the composer's
	/// applied set, never its draft.
	pub fn for_page<R: Record>(
		view: &TableView<R>,
		filters: &FilterComposer,
		search: impl Into<String>,
	) -> Self {
		Self {
			page: view.page(),
			page_size: view.page_size(),
			search: search.into(),
			sort: view.sort_state().clone(),
			filters: filters.applied().clone(),
		}
	}

	/// Sets the search text
	pub fn with_search(mut self, search: impl Into<String>) -> Self {
		self.search = search.into();
		self
	}

	/// Sets the sort
	pub fn with_sort(mut self, sort: SortState) -> Self {
		self.sort = sort;
		self
	}

	/// Sets the filters
	pub fn with_filters(mut self, filters: FilterValues) -> Self {
		self.filters = filters;
		self
	}

	/// Flattens the query into parameter pairs.
	///
	/// Order: `page`, `page_size`, `search` (left out when blank), `ordering`
	/// (`field` or `-field`, left out when unsorted), then each active filter
	/// in insertion order. A date range becomes `<id>_from` and `<id>_to` for
	/// its non-empty sides; a checked checkbox becomes `<id>=true` and an
	/// unchecked one is left out, since it does not narrow the list.
	///
	/// # Examples
	///
	/// ```
	/// use fieldops_filters::{DateRange, FilterValues};
	/// use fieldops_query::ListQuery;
	/// use fieldops_tables::{SortDirection, SortState};
	///
	/// let query = ListQuery::new(2, 25)
	///     .with_sort(SortState::by("created_at", SortDirection::Desc))
	///     .with_filters(
	///         FilterValues::new()
	///             .with("status", "ACTIVE")
	///             .with("building", "")
	///             .with("scheduled", DateRange::new("2024-01-01", "")),
	///     );
	///
	/// assert_eq!(
	///     query.to_query_string().unwrap(),
	///     "page=2&page_size=25&ordering=-created_at&status=ACTIVE&scheduled_from=2024-01-01"
	/// );
	/// ```
	pub fn to_query_pairs(&self) -> Vec<(String, String)> {
		let mut pairs = vec![
			("page".to_string(), self.page.to_string()),
			("page_size".to_string(), self.page_size.to_string()),
		];

		let search = self.search.trim();
		if !search.is_empty() {
			pairs.push(("search".to_string(), search.to_string()));
		}

		if let Some(ordering) = self.sort.to_query_value() {
			pairs.push(("ordering".to_string(), ordering));
		}

		for (id, value) in self.filters.active() {
			match value {
				FilterValue::Text(text) => pairs.push((id.to_string(), text.clone())),
				FilterValue::Flag(true) => pairs.push((id.to_string(), "true".to_string())),
				FilterValue::Flag(false) => {}
				FilterValue::Range(range) => {
					if !range.from.is_empty() {
						pairs.push((format!("{}_from", id), range.from.clone()));
					}
					if !range.to.is_empty() {
						pairs.push((format!("{}_to", id), range.to.clone()));
					}
				}
			}
		}

		pairs
	}

	/// Encodes [`Self::to_query_pairs`] as a URL query string
	pub fn to_query_string(&self) -> Result<String> {
		Ok(serde_urlencoded::to_string(self.to_query_pairs())?)
	}
}

impl Default for ListQuery {
	fn default() -> Self {
		Self::new(1, fieldops_tables::Pagination::default().page_size())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use fieldops_filters::DateRange;
	use fieldops_tables::SortDirection;
	use rstest::rstest;

	#[rstest]
	fn test_minimal_query() {
		assert_eq!(
			ListQuery::new(1, 10).to_query_string().unwrap(),
			"page=1&page_size=10"
		);
	}

	#[rstest]
	fn test_new_raises_zero_values() {
		let query = ListQuery::new(0, 0);
		assert_eq!((query.page, query.page_size), (1, 1));
	}

	#[rstest]
	#[case("", None)]
	#[case("   ", None)]
	#[case(" fibre splice ", Some("fibre splice"))]
	fn test_search_is_trimmed_and_optional(#[case] search: &str, #[case] expected: Option<&str>) {
		let pairs = ListQuery::new(1, 10).with_search(search).to_query_pairs();
		let found = pairs
			.iter()
			.find(|(key, _)| key == "search")
			.map(|(_, value)| value.as_str());
		assert_eq!(found, expected);
	}

	#[rstest]
	fn test_ordering_pair() {
		let asc = ListQuery::new(1, 10).with_sort(SortState::by("name", SortDirection::Asc));
		assert!(asc.to_query_pairs().contains(&("ordering".to_string(), "name".to_string())));
		let desc = ListQuery::new(1, 10).with_sort(SortState::by("name", SortDirection::Desc));
		assert!(desc.to_query_pairs().contains(&("ordering".to_string(), "-name".to_string())));
	}

	#[rstest]
	fn test_filters_flatten() {
		let query = ListQuery::new(1, 10).with_filters(
			FilterValues::new()
				.with("lowStock", true)
				.with("archived", false)
				.with("window", DateRange::new("2024-01-01", "2024-01-31"))
				.with("empty", DateRange::default()),
		);
		assert_eq!(
			&query.to_query_pairs()[2..],
			&[
				("lowStock".to_string(), "true".to_string()),
				("window_from".to_string(), "2024-01-01".to_string()),
				("window_to".to_string(), "2024-01-31".to_string()),
			]
		);
	}

	#[rstest]
	fn test_unchecked_checkbox_is_active_but_not_sent() {
		let mut filters = FilterComposer::new(vec![
			fieldops_filters::FilterDescriptor::checkbox("overdue", "Overdue"),
		]);
		filters.reset();
		assert_eq!(filters.count_active(), 1);

		let query = ListQuery::new(1, 10).with_filters(filters.applied().clone());
		assert_eq!(query.to_query_string().unwrap(), "page=1&page_size=10");
	}

	#[rstest]
	fn test_query_string_escapes() {
		let query = ListQuery::new(1, 10).with_search("a&b = c");
		assert_eq!(
			query.to_query_string().unwrap(),
			"page=1&page_size=10&search=a%26b+%3D+c"
		);
	}
}
