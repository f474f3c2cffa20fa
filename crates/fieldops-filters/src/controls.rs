//! Filter controls
//!
//! One [`FilterControl`] per descriptor, with the widget chosen by the filter
//! kind and its value read from the draft.

use crate::descriptor::{FilterDescriptor, FilterKind, FilterOption};
use crate::value::FilterValue;
use std::fmt;

/// Input widget for one filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
	/// Free text input
	TextInput {
		/// Current text
		value: String,
	},
	/// Dropdown; the first option is the "All" choice with an empty value
	Select {
		/// Options in display order
		options: Vec<FilterOption>,
		/// Selected option value
		selected: String,
	},
	/// Checkbox
	Checkbox {
		/// Current state
		checked: bool,
	},
	/// Radio group
	RadioGroup {
		/// Options in display order
		options: Vec<FilterOption>,
		/// Selected option value
		selected: String,
	},
	/// Single date input
	DateInput {
		/// Current date
		value: String,
	},
	/// From/to date inputs
	DateRangeInput {
		/// Start date
		from: String,
		/// End date
		to: String,
	},
}

/// One rendered filter control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterControl {
	/// Filter id
	pub id: String,
	/// Label
	pub label: String,
	/// Widget with its current value
	pub widget: Widget,
}

impl FilterControl {
	/// Builds the control for `descriptor` from its draft value.
	///
	/// A missing value, or one whose shape does not fit the kind, shows as the
	/// kind's empty value.
	pub fn new(descriptor: &FilterDescriptor, draft: Option<&FilterValue>) -> Self {
		let value = draft
			.filter(|value| descriptor.kind.accepts(value))
			.cloned()
			.unwrap_or_else(|| descriptor.kind.empty_value());
		let text = || value.as_text().unwrap_or_default().to_string();

		let widget = match &descriptor.kind {
			FilterKind::Text => Widget::TextInput { value: text() },
			FilterKind::Select(options) => {
				let mut all = Vec::with_capacity(options.len() + 1);
				all.push(FilterOption::new("", format!("All {}", descriptor.label)));
				all.extend(options.iter().cloned());
				Widget::Select {
					options: all,
					selected: text(),
				}
			}
			FilterKind::Checkbox => Widget::Checkbox {
				checked: value.as_flag().unwrap_or(false),
			},
			FilterKind::Radio(options) => Widget::RadioGroup {
				options: options.clone(),
				selected: text(),
			},
			FilterKind::Date => Widget::DateInput { value: text() },
			FilterKind::DateRange => {
				let range = value.as_range().cloned().unwrap_or_default();
				Widget::DateRangeInput {
					from: range.from,
					to: range.to,
				}
			}
		};

		Self {
			id: descriptor.id.clone(),
			label: descriptor.label.clone(),
			widget,
		}
	}

	/// Writes the control as an HTML fragment with escaped values
	pub fn to_html(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for FilterControl {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let id = html_escape::encode_double_quoted_attribute(&self.id);
		let label = html_escape::encode_text(&self.label);
		write!(f, r#"<div class="filter" data-filter-id="{}">"#, id)?;

		match &self.widget {
			Widget::TextInput { value } => write!(
				f,
				r#"<label for="filter-{0}">{1}</label><input type="text" id="filter-{0}" name="{0}" value="{2}">"#,
				id,
				label,
				html_escape::encode_double_quoted_attribute(value)
			)?,
			Widget::DateInput { value } => write!(
				f,
				r#"<label for="filter-{0}">{1}</label><input type="date" id="filter-{0}" name="{0}" value="{2}">"#,
				id,
				label,
				html_escape::encode_double_quoted_attribute(value)
			)?,
			Widget::Select { options, selected } => {
				write!(
					f,
					r#"<label for="filter-{0}">{1}</label><select id="filter-{0}" name="{0}">"#,
					id, label
				)?;
				for option in options {
					let marker = if &option.value == selected { " selected" } else { "" };
					write!(
						f,
						r#"<option value="{}"{}>{}</option>"#,
						html_escape::encode_double_quoted_attribute(&option.value),
						marker,
						html_escape::encode_text(&option.label)
					)?;
				}
				f.write_str("</select>")?;
			}
			Widget::Checkbox { checked } => {
				let marker = if *checked { " checked" } else { "" };
				write!(
					f,
					r#"<label><input type="checkbox" name="{}"{}> {}</label>"#,
					id, marker, label
				)?;
			}
			Widget::RadioGroup { options, selected } => {
				write!(f, "<fieldset><legend>{}</legend>", label)?;
				for option in options {
					let marker = if &option.value == selected { " checked" } else { "" };
					write!(
						f,
						r#"<label><input type="radio" name="{}" value="{}"{}> {}</label>"#,
						id,
						html_escape::encode_double_quoted_attribute(&option.value),
						marker,
						html_escape::encode_text(&option.label)
					)?;
				}
				f.write_str("</fieldset>")?;
			}
			Widget::DateRangeInput { from, to } => write!(
				f,
				r#"<fieldset><legend>{0}</legend><input type="date" name="{1}_from" value="{2}" aria-label="From"><input type="date" name="{1}_to" value="{3}" aria-label="To"></fieldset>"#,
				label,
				id,
				html_escape::encode_double_quoted_attribute(from),
				html_escape::encode_double_quoted_attribute(to)
			)?,
		}

		f.write_str("</div>")
	}
}

/// Writes the filter bar form: the controls, then the apply and reset buttons
/// with a badge showing `active_count` when it is not zero
pub fn render_form(controls: &[FilterControl], active_count: usize) -> String {
	let mut html = String::from(r#"<form class="filter-bar">"#);
	for control in controls {
		html.push_str(&control.to_html());
	}
	html.push_str(r#"<button type="submit" class="filter-apply">Apply"#);
	if active_count > 0 {
		html.push_str(&format!(r#" <span class="badge">{}</span>"#, active_count));
	}
	html.push_str(r#"</button><button type="reset" class="filter-reset">Reset</button></form>"#);
	html
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::DateRange;
	use rstest::rstest;

	#[rstest]
	fn test_select_gets_all_option_first() {
		let descriptor =
			FilterDescriptor::select("status", "Status", [("PAID", "Paid"), ("OVERDUE", "Overdue")]);
		let control = FilterControl::new(&descriptor, Some(&FilterValue::from("PAID")));
		let Widget::Select { options, selected } = control.widget else {
			panic!("expected a select");
		};
		assert_eq!(options[0], FilterOption::new("", "All Status"));
		assert_eq!(options.len(), 3);
		assert_eq!(selected, "PAID");
	}

	#[rstest]
	fn test_missing_value_uses_empty_value() {
		let control = FilterControl::new(&FilterDescriptor::date_range("created", "Created"), None);
		assert_eq!(
			control.widget,
			Widget::DateRangeInput {
				from: String::new(),
				to: String::new()
			}
		);

		let control = FilterControl::new(&FilterDescriptor::checkbox("overdue", "Overdue"), None);
		assert_eq!(control.widget, Widget::Checkbox { checked: false });
	}

	#[rstest]
	fn test_mismatched_value_shows_empty() {
		let control = FilterControl::new(
			&FilterDescriptor::text("q", "Search"),
			Some(&FilterValue::Range(DateRange::new("2024-01-01", ""))),
		);
		assert_eq!(
			control.widget,
			Widget::TextInput {
				value: String::new()
			}
		);
	}

	#[rstest]
	fn test_html_escapes_values() {
		let control = FilterControl::new(
			&FilterDescriptor::text("q", "Search <all>"),
			Some(&FilterValue::from(r#""><script>"#)),
		);
		let html = control.to_html();
		assert!(html.contains("Search &lt;all&gt;"));
		assert!(html.contains(r#"value="&quot;"#));
		assert!(!html.contains("<script>"));
	}

	#[rstest]
	fn test_form_badge() {
		assert!(!render_form(&[], 0).contains("badge"));
		assert!(render_form(&[], 2).contains(r#"<span class="badge">2</span>"#));
	}

	#[rstest]
	fn test_checkbox_and_radio_markup() {
		let checkbox = FilterControl::new(
			&FilterDescriptor::checkbox("overdue", "Overdue"),
			Some(&FilterValue::Flag(true)),
		);
		assert_eq!(
			checkbox.to_string(),
			r#"<div class="filter" data-filter-id="overdue"><label><input type="checkbox" name="overdue" checked> Overdue</label></div>"#
		);

		let radio = FilterControl::new(
			&FilterDescriptor::radio("priority", "Priority", [("HIGH", "High"), ("LOW", "Low")]),
			Some(&FilterValue::from("LOW")),
		);
		let html = radio.to_html();
		assert!(html.contains(r#"<input type="radio" name="priority" value="HIGH"> High"#));
		assert!(html.contains(r#"<input type="radio" name="priority" value="LOW" checked> Low"#));
		assert!(html.ends_with("</fieldset></div>"));
	}
}
