//! Ordering of cell values
//!
//! Records expose their fields as [`serde_json::Value`]. Sorting a column compares
//! those values with [`compare_nullable`], which keeps `null` and missing values
//! after every defined value no matter which direction is requested.

use serde_json::{Number, Value};
use std::cmp::Ordering;

/// Compares two defined values.
///
/// Numbers compare numerically, strings lexicographically and booleans with
/// `false < true`. An integer compared with a float is compared exactly, so
/// large integers keep their order against floats near them. Values of different kinds are ordered by kind:
/// boolean < number < string < array < object. Arrays compare element-wise;
/// objects are always equal to each other.
///
/// `null` is treated as the lowest kind here; callers that need the
/// "undefined last" policy should go through [`compare_nullable`].
///
/// # Example
///
/// ```rust
/// use fieldops_utils::compare::compare_values;
/// use serde_json::json;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_values(&json!(2), &json!(10)), Ordering::Less);
/// assert_eq!(compare_values(&json!("b"), &json!("a")), Ordering::Greater);
/// assert_eq!(compare_values(&json!(true), &json!(1)), Ordering::Less);
/// ```
pub fn compare_values(a: &Value, b: &Value) -> Ordering {
	match (a, b) {
		(Value::Bool(a), Value::Bool(b)) => a.cmp(b),
		(Value::Number(a), Value::Number(b)) => match (integer(a), integer(b)) {
			(Some(a), Some(b)) => a.cmp(&b),
			(Some(a), None) => compare_integer_float(a, float(b)),
			(None, Some(b)) => compare_integer_float(b, float(a)).reverse(),
			(None, None) => float(a).partial_cmp(&float(b)).unwrap_or(Ordering::Equal),
		},
		(Value::String(a), Value::String(b)) => a.cmp(b),
		(Value::Array(a), Value::Array(b)) => {
			for (left, right) in a.iter().zip(b.iter()) {
				match compare_values(left, right) {
					Ordering::Equal => continue,
					other => return other,
				}
			}
			a.len().cmp(&b.len())
		}
		(Value::Object(_), Value::Object(_)) => Ordering::Equal,
		_ => kind_rank(a).cmp(&kind_rank(b)),
	}
}

/// Compares two possibly undefined values for a column sort.
///
/// `None` and `Some(Value::Null)` are both undefined. Undefined values always
/// sort after defined ones, in both directions; two undefined values tie.
/// `descending` only inverts the comparison between two defined values.
pub fn compare_nullable(a: Option<&Value>, b: Option<&Value>, descending: bool) -> Ordering {
	match (defined(a), defined(b)) {
		(None, None) => Ordering::Equal,
		(None, Some(_)) => Ordering::Greater,
		(Some(_), None) => Ordering::Less,
		(Some(a), Some(b)) => {
			let ordering = compare_values(a, b);
			if descending {
				ordering.reverse()
			} else {
				ordering
			}
		}
	}
}

/// Returns `true` if the value is absent or `null`
pub fn is_undefined(value: Option<&Value>) -> bool {
	defined(value).is_none()
}

fn defined(value: Option<&Value>) -> Option<&Value> {
	value.filter(|v| !v.is_null())
}

fn integer(number: &Number) -> Option<i128> {
	number
		.as_i64()
		.map(i128::from)
		.or_else(|| number.as_u64().map(i128::from))
}

fn float(number: &Number) -> f64 {
	number.as_f64().unwrap_or(f64::NAN)
}

/// 2^127, the first float past the `i128` range
const I128_BOUND: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

fn compare_integer_float(integer: i128, float: f64) -> Ordering {
	if float.is_nan() {
		return Ordering::Equal;
	}
	if float >= I128_BOUND {
		return Ordering::Less;
	}
	if float < -I128_BOUND {
		return Ordering::Greater;
	}
	let whole = float.trunc();
	match integer.cmp(&(whole as i128)) {
		Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)).unwrap_or(Ordering::Equal),
		other => other,
	}
}

fn kind_rank(value: &Value) -> u8 {
	match value {
		Value::Null => 0,
		Value::Bool(_) => 1,
		Value::Number(_) => 2,
		Value::String(_) => 3,
		Value::Array(_) => 4,
		Value::Object(_) => 5,
	}
}
