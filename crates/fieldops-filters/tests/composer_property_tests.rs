//! Filter composer property-based tests

use fieldops_filters::{DraftInput, FilterComposer, FilterDescriptor, FilterValue, FilterValues};
use proptest::prelude::*;

fn descriptors() -> Vec<FilterDescriptor> {
	vec![
		FilterDescriptor::text("q", "Search"),
		FilterDescriptor::select("status", "Status", [("OPEN", "Open"), ("DONE", "Done")]),
		FilterDescriptor::checkbox("mine", "Mine"),
		FilterDescriptor::date_range("created", "Created"),
	]
}

fn edit_strategy() -> impl Strategy<Value = (String, DraftInput)> {
	let id = prop_oneof![
		Just("q".to_string()),
		Just("status".to_string()),
		Just("mine".to_string()),
		Just("created".to_string()),
		Just("unknown".to_string()),
	];
	let input = prop_oneof![
		prop_oneof![Just(""), Just("OPEN"), Just("DONE"), Just("x")]
			.prop_map(|s| DraftInput::text(s)),
		any::<bool>().prop_map(DraftInput::Flag),
		prop_oneof![Just(""), Just("2024-01-01")].prop_map(|s| DraftInput::range_from(s)),
		prop_oneof![Just(""), Just("2024-12-31")].prop_map(|s| DraftInput::range_to(s)),
		Just(DraftInput::Clear),
	];
	(id, input)
}

proptest! {
	/// Test: draft edits leave the applied set alone
	///
	/// Category: Property
	/// Verifies that only apply copies the draft over.
	#[test]
	fn prop_draft_edits_are_isolated(edits in prop::collection::vec(edit_strategy(), 0..30)) {
		let active = FilterValues::new().with("status", "DONE").with("mine", true);
		let mut composer = FilterComposer::new(descriptors()).with_active(active.clone());

		for (id, input) in edits {
			composer.set_draft_value(&id, input);
			prop_assert_eq!(composer.applied(), &active);
		}

		composer.apply();
		prop_assert_eq!(composer.applied(), composer.draft());
	}

	/// Test: the badge counts exactly the set values
	///
	/// Category: Property
	/// Verifies that empty strings and empty ranges are never counted while
	/// checkbox values always are.
	#[test]
	fn prop_count_active_matches_set_values(edits in prop::collection::vec(edit_strategy(), 0..30)) {
		let mut composer = FilterComposer::new(descriptors());
		for (id, input) in edits {
			composer.set_draft_value(&id, input);
		}

		let expected = composer
			.draft()
			.iter()
			.filter(|(_, value)| match value {
				FilterValue::Text(text) => !text.is_empty(),
				FilterValue::Flag(_) => true,
				FilterValue::Range(range) => !range.from.is_empty() || !range.to.is_empty(),
			})
			.count();
		prop_assert_eq!(composer.count_active(), expected);
		prop_assert!(composer.count_active() <= descriptors().len());
	}

	/// Test: reset leaves only the checkbox values active
	///
	/// Category: Property
	/// Verifies reset over any prior draft: every text and range value is
	/// empty, and each checkbox holds `false`, which still counts.
	#[test]
	fn prop_reset_clears_everything(edits in prop::collection::vec(edit_strategy(), 0..30)) {
		let mut composer = FilterComposer::new(descriptors());
		for (id, input) in edits {
			composer.set_draft_value(&id, input);
		}
		composer.reset();

		let checkboxes = composer
			.draft()
			.iter()
			.filter(|(_, value)| matches!(value, FilterValue::Flag(false)))
			.count();
		prop_assert_eq!(checkboxes, 1);
		prop_assert_eq!(composer.count_active(), checkboxes);
		prop_assert_eq!(composer.draft().len(), descriptors().len());
		prop_assert_eq!(composer.draft(), composer.applied());
	}
}
