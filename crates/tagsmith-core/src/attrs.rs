//! Ordered attribute sets.
//!
//! [`Attributes`] is the attribute contribution of an argument list and, at
//! render time, the merged attribute set of an element. Keys serialize in the
//! order they were first seen; values follow last-write-wins.

use indexmap::IndexMap;
use indexmap::map::IntoIter;

/// An ordered map from attribute name to attribute value.
///
/// Inserting a key that is already present replaces its value but keeps the
/// key at its original position.
///
/// ## Example
///
/// ```
/// use tagsmith_core::Attributes;
///
/// let mut attributes = Attributes::new().with("class", "abc");
/// attributes.merge(Attributes::new().with("id", "i2").with("class", "xyz"));
///
/// let pairs: Vec<_> = attributes.iter().collect();
/// assert_eq!(pairs, [("class", "xyz"), ("id", "i2")]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: IndexMap<String, String>,
}

impl Attributes {
	/// Creates an empty attribute set.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty attribute set with room for `capacity` attributes.
	pub fn with_capacity(capacity: usize) -> Self {
		Self {
			entries: IndexMap::with_capacity(capacity),
		}
	}

	/// Adds an attribute and returns the set (builder style).
	pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
		self.insert(name, value);
		self
	}

	/// Sets an attribute value.
	///
	/// Returns the previous value if the key was already present. The key
	/// keeps its original position in that case.
	pub fn insert(&mut self, name: impl Into<String>, value: impl ToString) -> Option<String> {
		self.entries.insert(name.into(), value.to_string())
	}

	/// Returns the value of an attribute.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries.get(name).map(String::as_str)
	}

	/// Returns whether an attribute is present.
	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Returns the number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether the set has no attributes.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(name, value)` pairs in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
		self.entries
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
	}

	/// Iterates over attribute names in first-seen order.
	pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
		self.entries.keys().map(String::as_str)
	}

	/// Merges a later contribution into this set.
	///
	/// Every key of `other` overwrites the value held here. Keys new to this
	/// set are appended after the existing ones; existing keys do not move.
	/// Keys absent from `other` keep their current values.
	pub fn merge(&mut self, other: Attributes) {
		self.entries.reserve(other.len());
		for (name, value) in other.entries {
			self.entries.insert(name, value);
		}
	}
}

impl<K, V> FromIterator<(K, V)> for Attributes
where
	K: Into<String>,
	V: ToString,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		let mut attributes = Self::new();
		attributes.extend(iter);
		attributes
	}
}

impl<K, V> Extend<(K, V)> for Attributes
where
	K: Into<String>,
	V: ToString,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		for (name, value) in iter {
			self.insert(name, value);
		}
	}
}

impl IntoIterator for Attributes {
	type Item = (String, String);
	type IntoIter = IntoIter<String, String>;

	fn into_iter(self) -> Self::IntoIter {
		self.entries.into_iter()
	}
}

/// Builds an [`Attributes`] set from `name => value` pairs.
///
/// Values may be anything implementing `ToString`. A repeated name keeps its
/// first position and its last value.
///
/// ## Example
///
/// ```
/// use tagsmith_core::attrs;
///
/// let attributes = attrs! { "type" => "number", "min" => 0, "max" => 10 };
/// assert_eq!(attributes.get("min"), Some("0"));
/// assert_eq!(attributes.len(), 3);
/// ```
#[macro_export]
macro_rules! attrs {
	() => {
		$crate::Attributes::new()
	};
	($($name:expr => $value:expr),+ $(,)?) => {{
		let mut attributes = $crate::Attributes::new();
		$(
			attributes.insert($name, $value);
		)+
		attributes
	}};
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_insert_overwrites_value_in_place() {
		// Arrange
		let mut attributes = Attributes::new().with("class", "abc").with("id", "main");

		// Act
		let previous = attributes.insert("class", "xyz");

		// Assert
		assert_eq!(previous.as_deref(), Some("abc"));
		let names: Vec<_> = attributes.names().collect();
		assert_eq!(names, ["class", "id"]);
		assert_eq!(attributes.get("class"), Some("xyz"));
	}

	#[rstest]
	fn test_merge_keeps_first_position_and_last_value() {
		// Arrange
		let mut attributes = attrs! { "class" => "abc" };

		// Act
		attributes.merge(attrs! { "id" => "i2", "class" => "xyz" });

		// Assert
		let pairs: Vec<_> = attributes.iter().collect();
		assert_eq!(pairs, [("class", "xyz"), ("id", "i2")]);
	}

	#[rstest]
	fn test_merge_retains_keys_missing_from_later_contribution() {
		let mut attributes = attrs! { "id" => "i1", "title" => "t" };

		attributes.merge(attrs! { "title" => "u" });

		assert_eq!(attributes.get("id"), Some("i1"));
		assert_eq!(attributes.get("title"), Some("u"));
		assert_eq!(attributes.len(), 2);
	}

	#[rstest]
	fn test_merge_with_empty_is_noop() {
		let mut attributes = attrs! { "id" => "i1" };
		let before = attributes.clone();

		attributes.merge(Attributes::new());

		assert_eq!(attributes, before);
	}

	#[rstest]
	#[case::text("abc", "abc")]
	#[case::empty("", "")]
	fn test_string_values_are_stored_verbatim(#[case] value: &str, #[case] expected: &str) {
		let attributes = Attributes::new().with("data-x", value);

		assert_eq!(attributes.get("data-x"), Some(expected));
	}

	#[rstest]
	fn test_non_string_values_use_display() {
		let attributes = attrs! { "tabindex" => -1, "ratio" => 1.5, "hidden" => true };

		assert_eq!(attributes.get("tabindex"), Some("-1"));
		assert_eq!(attributes.get("ratio"), Some("1.5"));
		assert_eq!(attributes.get("hidden"), Some("true"));
	}

	#[rstest]
	fn test_from_iterator_preserves_order() {
		let attributes: Attributes = [("b", "2"), ("a", "1"), ("b", "3")].into_iter().collect();

		let pairs: Vec<_> = attributes.iter().collect();
		assert_eq!(pairs, [("b", "3"), ("a", "1")]);
	}

	#[rstest]
	fn test_empty_macro_builds_empty_set() {
		let attributes = attrs! {};

		assert!(attributes.is_empty());
		assert!(!attributes.contains("id"));
	}
}
