//! HTML escaping for the opt-in [`EscapeMode::Html`](crate::EscapeMode::Html).

use std::borrow::Cow;

/// Escapes the five HTML-significant characters.
///
/// | Character | Replacement |
/// |-----------|-------------|
/// | `&` | `&amp;` |
/// | `<` | `&lt;` |
/// | `>` | `&gt;` |
/// | `"` | `&quot;` |
/// | `'` | `&#x27;` |
///
/// Text without any of them is returned borrowed.
///
/// ## Example
///
/// ```
/// use std::borrow::Cow;
/// use tagsmith_core::escape_html;
///
/// assert_eq!(escape_html("plain"), Cow::Borrowed("plain"));
/// assert_eq!(escape_html("a < b"), "a &lt; b");
/// ```
pub fn escape_html(text: &str) -> Cow<'_, str> {
	let Some(first) = text.find(needs_escape) else {
		return Cow::Borrowed(text);
	};

	let mut escaped = String::with_capacity(text.len() + 16);
	escaped.push_str(&text[..first]);
	for c in text[first..].chars() {
		match entity(c) {
			Some(replacement) => escaped.push_str(replacement),
			None => escaped.push(c),
		}
	}
	Cow::Owned(escaped)
}

fn needs_escape(c: char) -> bool {
	entity(c).is_some()
}

fn entity(c: char) -> Option<&'static str> {
	match c {
		'&' => Some("&amp;"),
		'<' => Some("&lt;"),
		'>' => Some("&gt;"),
		'"' => Some("&quot;"),
		'\'' => Some("&#x27;"),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_no_special_chars_borrows() {
		assert!(matches!(escape_html("Hello World"), Cow::Borrowed("Hello World")));
		assert!(matches!(escape_html(""), Cow::Borrowed("")));
	}

	#[rstest]
	#[case::ampersand("a & b", "a &amp; b")]
	#[case::angle_brackets("<div>", "&lt;div&gt;")]
	#[case::quotes("\"test\" 'value'", "&quot;test&quot; &#x27;value&#x27;")]
	#[case::script(
		"<script>alert('xss')</script>",
		"&lt;script&gt;alert(&#x27;xss&#x27;)&lt;/script&gt;"
	)]
	#[case::prefix_kept("plain prefix & tail", "plain prefix &amp; tail")]
	#[case::multibyte("ü<ß>", "ü&lt;ß&gt;")]
	fn test_special_chars_are_replaced(#[case] input: &str, #[case] expected: &str) {
		assert_eq!(escape_html(input), expected);
	}

	#[rstest]
	fn test_existing_entities_are_escaped_again() {
		assert_eq!(escape_html("&amp;"), "&amp;amp;");
	}
}
