//! Cell and value formatting
//!
//! Default cell text for table columns and the date and currency helpers that
//! entity pages pass into custom cell renderers.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Text shown for a cell whose value is undefined
pub const EMPTY_PLACEHOLDER: &str = "";

const DATE_DISPLAY: &str = "%b %-d, %Y";
const DATETIME_DISPLAY: &str = "%b %-d, %Y %H:%M";

/// Formats a raw cell value as display text.
///
/// Strings are shown without quotes, `null` becomes [`EMPTY_PLACEHOLDER`],
/// arrays are joined with `", "` and objects fall back to their JSON text.
///
/// # Example
///
/// ```rust
/// use fieldops_utils::format::format_value;
/// use serde_json::json;
///
/// assert_eq!(format_value(&json!("Depot 4")), "Depot 4");
/// assert_eq!(format_value(&json!(12)), "12");
/// assert_eq!(format_value(&json!(null)), "");
/// assert_eq!(format_value(&json!(["a", "b"])), "a, b");
/// ```
pub fn format_value(value: &Value) -> String {
	match value {
		Value::Null => EMPTY_PLACEHOLDER.to_string(),
		Value::Bool(b) => b.to_string(),
		Value::Number(n) => n.to_string(),
		Value::String(s) => s.clone(),
		Value::Array(items) => items
			.iter()
			.map(format_value)
			.collect::<Vec<_>>()
			.join(", "),
		Value::Object(_) => value.to_string(),
	}
}

/// Formats an optional cell value, using the placeholder when it is absent
pub fn format_optional(value: Option<&Value>) -> String {
	value.map(format_value).unwrap_or_else(|| EMPTY_PLACEHOLDER.to_string())
}

/// Formats an ISO date (`2024-01-15`) or timestamp as `Jan 15, 2024`.
///
/// Input that does not parse is returned unchanged so that free-form values
/// still show up in the table.
///
/// # Example
///
/// ```rust
/// use fieldops_utils::format::format_date;
///
/// assert_eq!(format_date("2024-01-15"), "Jan 15, 2024");
/// assert_eq!(format_date("2024-03-09T08:30:00Z"), "Mar 9, 2024");
/// assert_eq!(format_date("soon"), "soon");
/// ```
pub fn format_date(input: &str) -> String {
	let input = input.trim();
	if input.is_empty() {
		return EMPTY_PLACEHOLDER.to_string();
	}
	if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
		return date.format(DATE_DISPLAY).to_string();
	}
	match parse_timestamp(input) {
		Some(ts) => ts.format(DATE_DISPLAY).to_string(),
		None => input.to_string(),
	}
}

/// Formats a timestamp as `Jan 15, 2024 14:05`.
///
/// Plain dates are shown without a time; unparseable input is returned unchanged.
pub fn format_datetime(input: &str) -> String {
	let input = input.trim();
	if input.is_empty() {
		return EMPTY_PLACEHOLDER.to_string();
	}
	match parse_timestamp(input) {
		Some(ts) => ts.format(DATETIME_DISPLAY).to_string(),
		None => format_date(input),
	}
}

fn parse_timestamp(input: &str) -> Option<NaiveDateTime> {
	if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
		return Some(ts.naive_local());
	}
	NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S")
		.or_else(|_| NaiveDateTime::parse_from_str(input, "%Y-%m-%d %H:%M:%S"))
		.ok()
}

/// Formats an amount with two decimals and thousands separators.
///
/// # Example
///
/// ```rust
/// use fieldops_utils::format::format_currency;
///
/// assert_eq!(format_currency(1234.5, "$"), "$1,234.50");
/// assert_eq!(format_currency(-0.456, "€"), "-€0.46");
/// ```
pub fn format_currency(amount: f64, symbol: &str) -> String {
	if !amount.is_finite() {
		return EMPTY_PLACEHOLDER.to_string();
	}
	let cents = (amount.abs() * 100.0).round() as u128;
	let whole = group_thousands(&(cents / 100).to_string());
	let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
	format!("{}{}{}.{:02}", sign, symbol, whole, cents % 100)
}

fn group_thousands(digits: &str) -> String {
	let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
	for (i, ch) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(ch);
	}
	grouped
}

/// Returns `true` when the text is empty or only whitespace
pub fn is_blank(text: &str) -> bool {
	text.trim().is_empty()
}
