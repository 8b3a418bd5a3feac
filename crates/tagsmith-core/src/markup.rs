//! Rendered markup.

use std::fmt;
use std::ops::Deref;

/// A fragment of rendered HTML.
///
/// Every render call returns a `Markup`. Passing it back as an argument to
/// another render call nests it as raw markup: it is never escaped again,
/// whatever [`EscapeMode`](crate::EscapeMode) is active.
///
/// `Markup` dereferences to `str` and compares equal to string slices, so it
/// can be used wherever text is expected.
///
/// ## Example
///
/// ```
/// use tagsmith_core::{Markup, render};
///
/// let html = render("em", "hi", false);
/// assert_eq!(html, "<em>hi</em>");
/// assert_eq!(html.len(), 11);
///
/// let owned: String = html.into_string();
/// assert_eq!(owned, "<em>hi</em>");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Markup(String);

impl Markup {
	/// Marks caller-trusted text as markup.
	///
	/// The text is taken as-is and will not be escaped when nested.
	pub fn raw(markup: impl Into<String>) -> Self {
		Self(markup.into())
	}

	/// Returns the markup as a string slice.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Consumes the markup and returns the underlying string.
	pub fn into_string(self) -> String {
		self.0
	}
}

impl fmt::Display for Markup {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl Deref for Markup {
	type Target = str;

	fn deref(&self) -> &str {
		&self.0
	}
}

impl AsRef<str> for Markup {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<Markup> for String {
	fn from(markup: Markup) -> Self {
		markup.0
	}
}

impl PartialEq<str> for Markup {
	fn eq(&self, other: &str) -> bool {
		self.0 == other
	}
}

impl PartialEq<&str> for Markup {
	fn eq(&self, other: &&str) -> bool {
		self.0 == *other
	}
}

impl PartialEq<String> for Markup {
	fn eq(&self, other: &String) -> bool {
		&self.0 == other
	}
}

impl PartialEq<Markup> for str {
	fn eq(&self, other: &Markup) -> bool {
		self == other.0
	}
}

impl PartialEq<Markup> for &str {
	fn eq(&self, other: &Markup) -> bool {
		*self == other.0
	}
}

impl PartialEq<Markup> for String {
	fn eq(&self, other: &Markup) -> bool {
		*self == other.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_raw_keeps_text_verbatim() {
		// Arrange
		let text = "<b>&nbsp;</b>";

		// Act
		let markup = Markup::raw(text);

		// Assert
		assert_eq!(markup.as_str(), text);
		assert_eq!(markup.to_string(), text);
	}

	#[rstest]
	fn test_comparisons_in_both_directions() {
		let markup = Markup::raw("<br>");
		let owned = String::from("<br>");

		assert_eq!(markup, "<br>");
		assert_eq!("<br>", markup);
		assert_eq!(markup, owned);
		assert_eq!(owned, markup);
		assert_ne!(markup, "<hr>");
	}

	#[rstest]
	fn test_deref_exposes_str_methods() {
		let markup = Markup::raw("<p>text</p>");

		assert!(markup.starts_with("<p>"));
		assert!(markup.ends_with("</p>"));
		assert!(!markup.is_empty());
	}
}
