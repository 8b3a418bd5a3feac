//! Render-time arguments.
//!
//! An argument list is an ordered sequence of [`Arg`] values. Each argument is
//! an attribute contribution, a content contribution, a nested list of further
//! arguments, or empty. Call sites do not build `Arg` values by hand: anything
//! implementing `Into<Arg>` can be placed in a tuple, array or `Vec` and passed
//! through [`IntoArgs`].
//!
//! ## Conversions
//!
//! | Source | Argument |
//! |--------|----------|
//! | `&str`, `String`, `Cow<str>`, `char` | text content |
//! | integers, floats, `bool` | text content (`Display` form, `Infinity` / `NaN` for non-finite floats) |
//! | [`Markup`] | markup content (never escaped) |
//! | [`Attributes`], `IndexMap`, `BTreeMap` | attribute contribution |
//! | `Vec<T>`, `[T; N]`, tuples | nested arguments |
//! | `Option<T>` | `T` or empty |
//! | `()` | empty |
//! | `serde_json::Value` | by JSON kind, see below |
//!
//! JSON values follow the shape of the value: objects are attribute
//! contributions, arrays are nested arguments, `null` is empty, and strings,
//! numbers and booleans are text content. JSON numbers produce the same text
//! as the equivalent Rust number, so `2.0` renders as `2`.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use crate::attrs::Attributes;
use crate::markup::Markup;

/// A content contribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
	/// Plain text. Escaped when [`EscapeMode::Html`](crate::EscapeMode::Html) is active.
	Text(String),
	/// Already-rendered markup. Never escaped.
	Markup(String),
}

impl Content {
	/// Returns the contributed text.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Text(text) | Self::Markup(text) => text,
		}
	}

	/// Returns whether this is already-rendered markup.
	pub fn is_markup(&self) -> bool {
		matches!(self, Self::Markup(_))
	}
}

/// A single render-time argument.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Arg {
	/// Key/value pairs merged into the element's attribute set.
	Attrs(Attributes),
	/// Text or markup appended to the element's content.
	Content(Content),
	/// Further arguments, expanded in place before classification.
	Nested(Vec<Arg>),
	/// No contribution (`None`, `()`, JSON `null`).
	#[default]
	Empty,
}

impl Arg {
	/// Creates a text content argument.
	pub fn text(text: impl Into<String>) -> Self {
		Self::Content(Content::Text(text.into()))
	}

	/// Creates a markup content argument.
	pub fn markup(markup: impl Into<String>) -> Self {
		Self::Content(Content::Markup(markup.into()))
	}

	/// Creates a nested argument list.
	pub fn nested<T: Into<Arg>>(items: impl IntoIterator<Item = T>) -> Self {
		Self::Nested(items.into_iter().map(Into::into).collect())
	}

	/// Returns whether this argument contributes nothing.
	pub fn is_empty(&self) -> bool {
		matches!(self, Self::Empty)
	}
}

impl From<&str> for Arg {
	fn from(text: &str) -> Self {
		Self::text(text)
	}
}

impl From<String> for Arg {
	fn from(text: String) -> Self {
		Self::text(text)
	}
}

impl From<&String> for Arg {
	fn from(text: &String) -> Self {
		Self::text(text.as_str())
	}
}

impl From<Cow<'_, str>> for Arg {
	fn from(text: Cow<'_, str>) -> Self {
		Self::text(text.into_owned())
	}
}

impl From<char> for Arg {
	fn from(c: char) -> Self {
		Self::text(c.to_string())
	}
}

macro_rules! impl_display_content {
	($($ty:ty),+ $(,)?) => {
		$(
			impl From<$ty> for Arg {
				fn from(value: $ty) -> Self {
					Self::text(value.to_string())
				}
			}
		)+
	};
}

impl_display_content!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, bool,
);

macro_rules! impl_float_content {
	($($ty:ty),+ $(,)?) => {
		$(
			impl From<$ty> for Arg {
				fn from(value: $ty) -> Self {
					Self::text(float_text(value))
				}
			}
		)+
	};
}

impl_float_content!(f32, f64);

/// `Display` for finite values, `NaN` / `Infinity` / `-Infinity` otherwise.
fn float_text<F>(value: F) -> String
where
	F: Into<f64> + ToString + Copy,
{
	let wide: f64 = value.into();
	if wide.is_nan() {
		"NaN".to_string()
	} else if wide.is_infinite() {
		let text = if wide.is_sign_positive() { "Infinity" } else { "-Infinity" };
		text.to_string()
	} else {
		value.to_string()
	}
}

impl From<Markup> for Arg {
	fn from(markup: Markup) -> Self {
		Self::markup(markup.into_string())
	}
}

impl From<&Markup> for Arg {
	fn from(markup: &Markup) -> Self {
		Self::markup(markup.as_str())
	}
}

impl From<Content> for Arg {
	fn from(content: Content) -> Self {
		Self::Content(content)
	}
}

impl From<Attributes> for Arg {
	fn from(attributes: Attributes) -> Self {
		Self::Attrs(attributes)
	}
}

impl<K, V, S> From<IndexMap<K, V, S>> for Arg
where
	K: Into<String>,
	V: ToString,
	S: BuildHasher,
{
	fn from(map: IndexMap<K, V, S>) -> Self {
		Self::Attrs(map.into_iter().collect())
	}
}

impl<K, V> From<BTreeMap<K, V>> for Arg
where
	K: Into<String>,
	V: ToString,
{
	fn from(map: BTreeMap<K, V>) -> Self {
		Self::Attrs(map.into_iter().collect())
	}
}

impl<T: Into<Arg>> From<Vec<T>> for Arg {
	fn from(items: Vec<T>) -> Self {
		Self::nested(items)
	}
}

impl<T: Into<Arg>, const N: usize> From<[T; N]> for Arg {
	fn from(items: [T; N]) -> Self {
		Self::nested(items)
	}
}

impl<T: Into<Arg>> From<Option<T>> for Arg {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Empty, Into::into)
	}
}

impl From<()> for Arg {
	fn from(_: ()) -> Self {
		Self::Empty
	}
}

impl From<Value> for Arg {
	fn from(value: Value) -> Self {
		match value {
			Value::Null => Self::Empty,
			Value::String(text) => Self::text(text),
			Value::Bool(flag) => Self::text(flag.to_string()),
			Value::Number(number) => Self::text(json_number_text(&number)),
			Value::Array(items) => Self::nested(items),
			Value::Object(map) => map.into(),
		}
	}
}

impl From<Map<String, Value>> for Arg {
	fn from(map: Map<String, Value>) -> Self {
		let mut attributes = Attributes::with_capacity(map.len());
		for (name, value) in map {
			attributes.insert(name, json_attribute_value(value));
		}
		Self::Attrs(attributes)
	}
}

/// Strings are taken verbatim and numbers use the same text as native
/// numbers. Every other JSON value uses its JSON text.
fn json_attribute_value(value: Value) -> String {
	match value {
		Value::String(text) => text,
		Value::Number(number) => json_number_text(&number),
		other => other.to_string(),
	}
}

fn json_number_text(number: &Number) -> String {
	if let Some(int) = number.as_i64() {
		int.to_string()
	} else if let Some(uint) = number.as_u64() {
		uint.to_string()
	} else if let Some(float) = number.as_f64() {
		float_text(float)
	} else {
		number.to_string()
	}
}

/// Conversion of a call site's arguments into an argument list.
///
/// Implemented for `()` (no arguments), tuples of up to sixteen `Into<Arg>`
/// values, `Vec<T>` and arrays of `Into<Arg>` values, and single text, number,
/// markup, attribute or [`Arg`] values. Use [`args!`](crate::args!) for longer lists.
///
/// ## Example
///
/// ```
/// use tagsmith_core::{IntoArgs, attrs};
///
/// let args = (attrs! { "id" => "x" }, "text", 42).into_args();
/// assert_eq!(args.len(), 3);
/// assert!(().into_args().is_empty());
/// ```
pub trait IntoArgs {
	/// Converts `self` into an ordered argument list.
	fn into_args(self) -> Vec<Arg>;
}

impl IntoArgs for () {
	fn into_args(self) -> Vec<Arg> {
		Vec::new()
	}
}

impl<T: Into<Arg>> IntoArgs for Vec<T> {
	fn into_args(self) -> Vec<Arg> {
		self.into_iter().map(Into::into).collect()
	}
}

impl<T: Into<Arg>, const N: usize> IntoArgs for [T; N] {
	fn into_args(self) -> Vec<Arg> {
		self.into_iter().map(Into::into).collect()
	}
}

macro_rules! impl_into_args_for_single {
	($($ty:ty),+ $(,)?) => {
		$(
			impl IntoArgs for $ty {
				fn into_args(self) -> Vec<Arg> {
					vec![self.into()]
				}
			}
		)+
	};
}

impl_into_args_for_single!(Arg, &str, String, &String, char, Markup, &Markup, Content, Attributes, Value);
impl_into_args_for_single!(
	i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool,
);

macro_rules! impl_tuple_args {
	($($name:ident),+) => {
		impl<$($name: Into<Arg>),+> IntoArgs for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_args(self) -> Vec<Arg> {
				let ($($name,)+) = self;
				vec![$($name.into()),+]
			}
		}

		impl<$($name: Into<Arg>),+> From<($($name,)+)> for Arg {
			fn from(tuple: ($($name,)+)) -> Self {
				Self::Nested(tuple.into_args())
			}
		}
	};
}

impl_tuple_args!(A);
impl_tuple_args!(A, B);
impl_tuple_args!(A, B, C);
impl_tuple_args!(A, B, C, D);
impl_tuple_args!(A, B, C, D, E);
impl_tuple_args!(A, B, C, D, E, F);
impl_tuple_args!(A, B, C, D, E, F, G);
impl_tuple_args!(A, B, C, D, E, F, G, H);
impl_tuple_args!(A, B, C, D, E, F, G, H, I);
impl_tuple_args!(A, B, C, D, E, F, G, H, I, J);
impl_tuple_args!(A, B, C, D, E, F, G, H, I, J, K);
impl_tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L);
impl_tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L, M);
impl_tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L, M, N);
impl_tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O);
impl_tuple_args!(A, B, C, D, E, F, G, H, I, J, K, L, M, N, O, P);

/// Builds a `Vec<Arg>` from any number of `Into<Arg>` values.
///
/// ## Example
///
/// ```
/// use tagsmith_core::{args, attrs, render};
///
/// let html = render("p", args![attrs! { "class" => "lead" }, "a", 1, None::<&str>], false);
/// assert_eq!(html, r#"<p class="lead">a1</p>"#);
/// ```
#[macro_export]
macro_rules! args {
	($($arg:expr),* $(,)?) => {
		::std::vec![$($crate::Arg::from($arg)),*]
	};
}
