//! Element rendering.
//!
//! [`Renderer`] turns a tag name and an argument list into a [`Markup`]
//! fragment. The free [`render`] function uses the default options.

use std::borrow::Cow;

use crate::args::{Arg, Content, IntoArgs};
use crate::attrs::Attributes;
use crate::escape::escape_html;
use crate::markup::Markup;
use crate::options::{EscapeMode, RenderOptions, VoidStyle};

/// Renders elements with a fixed set of [`RenderOptions`].
///
/// ## Example
///
/// ```
/// use tagsmith_core::{EscapeMode, RenderOptions, Renderer, attrs};
///
/// let renderer = Renderer::new(RenderOptions::new().escape(EscapeMode::Html).self_closing());
///
/// let html = renderer.render("p", "1 < 2", false);
/// assert_eq!(html, "<p>1 &lt; 2</p>");
///
/// let html = renderer.render("img", attrs! { "alt" => "\"quoted\"" }, true);
/// assert_eq!(html, r#"<img alt="&quot;quoted&quot;" />"#);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Renderer {
	options: RenderOptions,
}

impl Renderer {
	/// Creates a renderer with the given options.
	pub fn new(options: RenderOptions) -> Self {
		Self { options }
	}

	/// Returns the options this renderer was created with.
	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Renders a single element.
	///
	/// Attribute contributions are merged in argument order, content
	/// contributions are concatenated in argument order. When `is_void` is
	/// set, only the start tag is returned and any content is dropped.
	pub fn render(&self, tag_name: &str, args: impl IntoArgs, is_void: bool) -> Markup {
		let mut attributes = Attributes::new();
		let mut content = String::new();

		for arg in flatten(args.into_args()) {
			match arg {
				Arg::Attrs(contribution) => attributes.merge(contribution),
				Arg::Content(contribution) => self.push_content(&mut content, &contribution),
				// flatten leaves no nested lists behind
				Arg::Nested(_) | Arg::Empty => {}
			}
		}

		tracing::trace!(
			tag = tag_name,
			attributes = attributes.len(),
			content_len = content.len(),
			is_void,
			"rendering element"
		);

		let mut html = String::with_capacity(tag_name.len() * 2 + content.len() + 5);
		html.push('<');
		html.push_str(tag_name);
		self.write_attributes(&mut html, &attributes);

		if is_void {
			if !content.is_empty() {
				tracing::debug!(
					tag = tag_name,
					discarded_len = content.len(),
					"discarding content of void element"
				);
			}
			html.push_str(match self.options.void_style {
				VoidStyle::Html => ">",
				VoidStyle::SelfClosing => " />",
			});
			return Markup::raw(html);
		}

		html.push('>');
		html.push_str(&content);
		html.push_str("</");
		html.push_str(tag_name);
		html.push('>');
		Markup::raw(html)
	}

	fn push_content(&self, buffer: &mut String, content: &Content) {
		match (content, self.options.escape) {
			(Content::Text(text), EscapeMode::Html) => buffer.push_str(&escape_html(text)),
			_ => buffer.push_str(content.as_str()),
		}
	}

	fn write_attributes(&self, html: &mut String, attributes: &Attributes) {
		for (name, value) in attributes.iter() {
			let value = match self.options.escape {
				EscapeMode::None => Cow::Borrowed(value),
				EscapeMode::Html => escape_html(value),
			};
			html.push(' ');
			html.push_str(name);
			html.push_str("=\"");
			html.push_str(&value);
			html.push('"');
		}
	}
}

/// Renders a single element with the default options.
///
/// Values are emitted verbatim and void elements end with `>`.
///
/// ## Example
///
/// ```
/// use tagsmith_core::{attrs, render};
///
/// assert_eq!(render("div", (), false), "<div></div>");
/// assert_eq!(
/// 	render("div", (attrs! { "id" => "theId" }, "blah"), false),
/// 	r#"<div id="theId">blah</div>"#
/// );
/// assert_eq!(
/// 	render("input", (attrs! { "type" => "password" }, "ignored"), true),
/// 	r#"<input type="password">"#
/// );
/// ```
pub fn render(tag_name: &str, args: impl IntoArgs, is_void: bool) -> Markup {
	Renderer::default().render(tag_name, args, is_void)
}

/// Expands every nested argument list in place.
///
/// Expansion is depth-first and left-to-right at any depth. The result holds
/// no [`Arg::Nested`] values; all other arguments keep their relative order.
pub fn flatten(args: Vec<Arg>) -> Vec<Arg> {
	let mut flat = Vec::with_capacity(args.len());
	flatten_into(args, &mut flat);
	flat
}

fn flatten_into(args: Vec<Arg>, flat: &mut Vec<Arg>) {
	for arg in args {
		match arg {
			Arg::Nested(inner) => flatten_into(inner, flat),
			other => flat.push(other),
		}
	}
}
