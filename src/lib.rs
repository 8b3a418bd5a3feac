//! # tagsmith
//!
//! Programmatic HTML fragment rendering. An element is rendered from a tag
//! name and a heterogeneous argument list: attribute sets, text, numbers,
//! already-rendered markup, optional values and nested lists of any of these.
//!
//! ## Crates
//!
//! - [`tagsmith-core`](tagsmith_core): the renderer, argument model, attribute
//!   sets and render options
//! - [`tagsmith-elements`](elements): one function per HTML element, `doctype`
//!   and the static tag registry (feature `elements`, enabled by default)
//!
//! ## Feature Flags
//!
//! - `elements` (default) - Per-tag functions and the tag registry
//!
//! ## Quick Example
//!
//! ```
//! use tagsmith::prelude::*;
//!
//! let page = html((
//! 	attrs! { "lang" => "en" },
//! 	body((
//! 		div((attrs! { "id" => "theId" }, "blah")),
//! 		input(attrs! { "type" => "password" }),
//! 	)),
//! ));
//!
//! assert_eq!(
//! 	page,
//! 	r#"<html lang="en"><body><div id="theId">blah</div><input type="password"></body></html>"#
//! );
//! ```
//!
//! ## Attribute Merging
//!
//! Attribute sets are merged in argument order. A later value for a key
//! replaces the earlier one, but the key stays where it was first seen:
//!
//! ```
//! use tagsmith::{attrs, render};
//!
//! let html = render(
//! 	"div",
//! 	(attrs! { "class" => "abc" }, attrs! { "id" => "i1" }, attrs! { "id" => "i2", "class" => "xyz" }),
//! 	false,
//! );
//! assert_eq!(html, r#"<div class="xyz" id="i2"></div>"#);
//! ```
//!
//! ## Escaping
//!
//! Values are written verbatim by default. A [`Renderer`] configured with
//! [`EscapeMode::Html`] escapes text and attribute values while leaving nested
//! [`Markup`] untouched.

pub use tagsmith_core::{
	Arg, Attributes, Content, EscapeMode, IntoArgs, Markup, OptionsError, RenderOptions, Renderer,
	Result, VoidStyle, args, attrs, escape_html, flatten, render,
};

#[cfg(feature = "elements")]
pub use tagsmith_elements as elements;

#[cfg(feature = "elements")]
pub use tagsmith_elements::{doctype, registry};

/// Common imports for building markup.
///
/// With the `elements` feature this includes every element function, so
/// local names such as `a`, `b` or `p` take precedence over the glob.
pub mod prelude {
	pub use crate::{Arg, Attributes, IntoArgs, Markup, RenderOptions, Renderer, args, attrs, render};

	#[cfg(feature = "elements")]
	pub use tagsmith_elements::html::*;

	#[cfg(feature = "elements")]
	pub use tagsmith_elements::registry;
}
