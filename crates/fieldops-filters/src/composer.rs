//! Draft/applied filter state machine
//!
//! The composer keeps two value sets. The draft follows the inputs as the user
//! types; the applied set is what the list is currently filtered by. Only
//! [`FilterComposer::apply`] copies the draft over, and only `apply` reports
//! values to the owning page.

use crate::controls::{self, FilterControl};
use crate::descriptor::{FilterDescriptor, FilterKind};
use crate::value::{DateRange, FilterValue, FilterValues};
use fieldops_utils::callback::{Callback, emit};
use std::collections::HashSet;

/// One edit of a draft value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftInput {
	/// New text for a text, select, radio or date filter
	Text(String),
	/// New checkbox state
	Flag(bool),
	/// New start of a date range; the end is kept
	RangeFrom(String),
	/// New end of a date range; the start is kept
	RangeTo(String),
	/// Both sides of a date range
	Range(DateRange),
	/// Removes the draft value
	Clear,
}

impl DraftInput {
	/// Text input
	pub fn text(text: impl Into<String>) -> Self {
		Self::Text(text.into())
	}

	/// Date-range start input
	pub fn range_from(from: impl Into<String>) -> Self {
		Self::RangeFrom(from.into())
	}

	/// Date-range end input
	pub fn range_to(to: impl Into<String>) -> Self {
		Self::RangeTo(to.into())
	}

	fn kind_name(&self) -> &'static str {
		match self {
			Self::Text(_) => "text",
			Self::Flag(_) => "flag",
			Self::RangeFrom(_) => "range_from",
			Self::RangeTo(_) => "range_to",
			Self::Range(_) => "range",
			Self::Clear => "clear",
		}
	}
}

/// Callbacks the composer reports through
#[derive(Debug, Clone, Default)]
pub struct FilterCallbacks {
	on_apply: Option<Callback<FilterValues>>,
	on_reset: Option<Callback<()>>,
}

impl FilterCallbacks {
	/// Creates an empty callback set
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the callback receiving the whole draft on apply
	pub fn on_apply<F>(mut self, f: F) -> Self
	where
		F: Fn(FilterValues) + Send + Sync + 'static,
	{
		self.on_apply = Some(Callback::new(f));
		self
	}

	/// Sets the reset callback
	pub fn on_reset<F>(mut self, f: F) -> Self
	where
		F: Fn() + Send + Sync + 'static,
	{
		self.on_reset = Some(Callback::new(move |()| f()));
		self
	}
}

/// Filter bar state
///
/// # Examples
///
/// ```
/// use fieldops_filters::{DraftInput, FilterComposer, FilterDescriptor, FilterValue};
///
/// let mut composer = FilterComposer::new(vec![
///     FilterDescriptor::text("q", "Search"),
///     FilterDescriptor::date_range("created", "Created"),
/// ]);
///
/// composer.set_draft_value("q", DraftInput::text("splitter"));
/// composer.set_draft_value("created", DraftInput::range_from("2024-01-01"));
/// assert_eq!(composer.count_active(), 2);
/// assert!(composer.applied().is_empty());
///
/// composer.apply();
/// assert_eq!(composer.applied().get("q"), Some(&FilterValue::from("splitter")));
/// ```
#[derive(Debug, Clone)]
pub struct FilterComposer {
	descriptors: Vec<FilterDescriptor>,
	draft: FilterValues,
	applied: FilterValues,
	callbacks: FilterCallbacks,
}

impl FilterComposer {
	/// Creates a composer with nothing drafted or applied.
	///
	/// A descriptor repeating an earlier id is dropped.
	pub fn new(descriptors: Vec<FilterDescriptor>) -> Self {
		let mut seen = HashSet::new();
		let descriptors = descriptors
			.into_iter()
			.filter(|descriptor| {
				let fresh = seen.insert(descriptor.id.clone());
				if !fresh {
					tracing::warn!(id = %descriptor.id, "dropping duplicate filter descriptor");
				}
				fresh
			})
			.collect();
		Self {
			descriptors,
			draft: FilterValues::new(),
			applied: FilterValues::new(),
			callbacks: FilterCallbacks::new(),
		}
	}

	/// Starts with `active` as both the draft and the applied set
	pub fn with_active(mut self, active: FilterValues) -> Self {
		self.sync_active(active);
		self
	}

	/// Sets the callbacks
	pub fn callbacks(mut self, callbacks: FilterCallbacks) -> Self {
		self.callbacks = callbacks;
		self
	}

	/// Returns the descriptors in display order
	pub fn descriptors(&self) -> &[FilterDescriptor] {
		&self.descriptors
	}

	/// Returns the descriptor for `id`
	pub fn descriptor(&self, id: &str) -> Option<&FilterDescriptor> {
		self.descriptors.iter().find(|descriptor| descriptor.id == id)
	}

	/// Returns the draft set
	pub fn draft(&self) -> &FilterValues {
		&self.draft
	}

	/// Returns the applied set
	pub fn applied(&self) -> &FilterValues {
		&self.applied
	}

	/// Returns the draft value for `id`, or the kind's empty value when absent
	pub fn draft_value(&self, id: &str) -> Option<FilterValue> {
		let descriptor = self.descriptor(id)?;
		Some(
			self.draft
				.get(id)
				.filter(|value| descriptor.kind.accepts(value))
				.cloned()
				.unwrap_or_else(|| descriptor.kind.empty_value()),
		)
	}

	/// Returns `true` when the draft differs from the applied set
	pub fn is_dirty(&self) -> bool {
		self.draft != self.applied
	}

	/// Edits the draft value for `id`.
	///
	/// Range edits merge into the existing range. Unknown ids, inputs that do
	/// not fit the filter's kind and values that are not an option of a choice
	/// filter are ignored and return `false`. The applied set never changes.
	pub fn set_draft_value(&mut self, id: &str, input: DraftInput) -> bool {
		let Some(descriptor) = self.descriptor(id) else {
			tracing::warn!(id, "ignoring draft value for unknown filter");
			return false;
		};

		if input == DraftInput::Clear {
			self.draft.remove(id);
			tracing::debug!(id, "filter draft cleared");
			return true;
		}

		let value = match (&descriptor.kind, input) {
			(
				FilterKind::Text | FilterKind::Select(_) | FilterKind::Radio(_) | FilterKind::Date,
				DraftInput::Text(text),
			) => {
				if !descriptor.has_option(&text) {
					tracing::warn!(id, value = %text, "ignoring value that is not a filter option");
					return false;
				}
				FilterValue::Text(text)
			}
			(FilterKind::Checkbox, DraftInput::Flag(flag)) => FilterValue::Flag(flag),
			(FilterKind::DateRange, DraftInput::Range(range)) => FilterValue::Range(range),
			(FilterKind::DateRange, DraftInput::RangeFrom(from)) => {
				let mut range = self.current_range(id);
				range.from = from;
				FilterValue::Range(range)
			}
			(FilterKind::DateRange, DraftInput::RangeTo(to)) => {
				let mut range = self.current_range(id);
				range.to = to;
				FilterValue::Range(range)
			}
			(kind, input) => {
				tracing::warn!(
					id,
					kind = kind.as_str(),
					input = input.kind_name(),
					"ignoring draft value of the wrong kind"
				);
				return false;
			}
		};

		tracing::debug!(id, "filter draft changed");
		self.draft.insert(id, value);
		true
	}

	fn current_range(&self, id: &str) -> DateRange {
		self.draft
			.get(id)
			.and_then(FilterValue::as_range)
			.cloned()
			.unwrap_or_default()
	}

	/// Commits the draft.
	///
	/// The applied set becomes a copy of the draft and `on_apply` receives the
	/// whole draft. The draft is left as it is.
	pub fn apply(&mut self) {
		self.applied = self.draft.clone();
		tracing::debug!(active = self.applied.count_active(), "filters applied");
		emit(self.callbacks.on_apply.as_ref(), self.draft.clone());
	}

	/// Clears every filter.
	///
	/// Draft and applied both become the all-empty set for the descriptors and
	/// `on_reset` fires. Nothing is fetched here; the owner decides.
	pub fn reset(&mut self) {
		let empty = FilterValues::empty_for(&self.descriptors);
		self.draft = empty.clone();
		self.applied = empty;
		tracing::debug!("filters reset");
		emit(self.callbacks.on_reset.as_ref(), ());
	}

	/// Number of draft values that count as active filters
	pub fn count_active(&self) -> usize {
		self.draft.count_active()
	}

	/// Adopts an active set chosen by the owner as both draft and applied.
	///
	/// No callback fires.
	pub fn sync_active(&mut self, active: FilterValues) {
		for (id, _) in active.iter() {
			if self.descriptor(id).is_none() {
				tracing::warn!(id, "active filters name an unknown filter");
			}
		}
		self.draft = active.clone();
		self.applied = active;
	}

	/// Builds one control per descriptor from the draft
	pub fn controls(&self) -> Vec<FilterControl> {
		self.descriptors
			.iter()
			.map(|descriptor| FilterControl::new(descriptor, self.draft.get(&descriptor.id)))
			.collect()
	}

	/// Writes the filter bar as an HTML form fragment
	pub fn render_html(&self) -> String {
		controls::render_form(&self.controls(), self.count_active())
	}
}
