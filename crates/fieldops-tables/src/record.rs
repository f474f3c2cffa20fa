//! Record access
//!
//! The table never assumes a schema: it only reads the fields its columns name.

use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::Arc;

/// A row that exposes its fields by key
///
/// An absent key and a `null` value are both treated as undefined.
pub trait Record {
	/// Returns the value stored under `key`, if any
	fn field(&self, key: &str) -> Option<&Value>;
}

impl Record for Value {
	fn field(&self, key: &str) -> Option<&Value> {
		self.get(key)
	}
}

impl Record for Map<String, Value> {
	fn field(&self, key: &str) -> Option<&Value> {
		self.get(key)
	}
}

impl<S: BuildHasher> Record for HashMap<String, Value, S> {
	fn field(&self, key: &str) -> Option<&Value> {
		self.get(key)
	}
}

impl Record for BTreeMap<String, Value> {
	fn field(&self, key: &str) -> Option<&Value> {
		self.get(key)
	}
}

impl<R: Record + ?Sized> Record for &R {
	fn field(&self, key: &str) -> Option<&Value> {
		(**self).field(key)
	}
}

impl<R: Record + ?Sized> Record for Arc<R> {
	fn field(&self, key: &str) -> Option<&Value> {
		(**self).field(key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_value_record() {
		let record = json!({"name": "Tower A", "floors": 12, "notes": null});
		assert_eq!(record.field("name"), Some(&json!("Tower A")));
		assert_eq!(record.field("notes"), Some(&Value::Null));
		assert_eq!(record.field("missing"), None);
	}

	#[test]
	fn test_non_object_value_has_no_fields() {
		assert_eq!(json!([1, 2]).field("0"), None);
		assert_eq!(json!("text").field("len"), None);
	}

	#[test]
	fn test_map_records() {
		let mut hash = HashMap::new();
		hash.insert("id".to_string(), json!(7));
		assert_eq!(hash.field("id"), Some(&json!(7)));

		let mut tree = BTreeMap::new();
		tree.insert("id".to_string(), json!(8));
		assert_eq!(tree.field("id"), Some(&json!(8)));

		let shared = Arc::new(json!({"id": 9}));
		assert_eq!(shared.field("id"), Some(&json!(9)));
	}
}
