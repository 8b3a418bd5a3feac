//! Element Function Integration Tests
//!
//! Test Categories:
//! 1. Catalog Coverage - Every catalog name renders through the registry
//! 2. Element Functions - Direct calls to generated functions
//! 3. Composition - Documents built from nested element calls

use rstest::rstest;
use tagsmith_core::{Markup, attrs, render};
use tagsmith_elements::{
	ELEMENTS, VOID_ELEMENTS, body, br, div, doctype, h1, head, html, img, input, li, meta, p,
	registry, span, title, ul,
};

// ============================================================================
// Catalog Coverage
// ============================================================================

#[rstest]
fn test_every_element_renders_with_closing_tag() {
	for &name in ELEMENTS {
		let html = registry().render(name, "x").unwrap();

		assert_eq!(html, format!("<{name}>x</{name}>"));
	}
}

#[rstest]
fn test_every_void_element_renders_start_tag_only() {
	for &name in VOID_ELEMENTS {
		let html = registry()
			.render(name, (attrs! { "data-k" => "v" }, "dropped"))
			.unwrap();

		assert_eq!(html, format!(r#"<{name} data-k="v">"#));
	}
}

#[rstest]
fn test_registry_entries_agree_with_core_render() {
	for entry in registry().iter() {
		let expected = render(entry.tag_name(), ("a", 1), entry.is_void());

		assert_eq!(entry.call(("a", 1)), expected);
	}
}

// ============================================================================
// Element Functions
// ============================================================================

#[rstest]
#[case::empty(div(()), "<div></div>")]
#[case::attributes_and_text(div((attrs! { "id" => "theId" }, "blah")), r#"<div id="theId">blah</div>"#)]
#[case::merge_order(
	div((attrs! { "class" => "abc" }, attrs! { "class" => "xyz" })),
	r#"<div class="xyz"></div>"#
)]
#[case::position_kept(
	div((
		attrs! { "class" => "abc" },
		attrs! { "id" => "i1" },
		attrs! { "id" => "i2", "class" => "xyz" },
	)),
	r#"<div class="xyz" id="i2"></div>"#
)]
#[case::void(input(attrs! { "type" => "password" }), r#"<input type="password">"#)]
#[case::void_content_ignored(br("text"), "<br>")]
#[case::nested_vec(span(vec!["a", "b"]), "<span>ab</span>")]
fn test_generated_functions(#[case] html: Markup, #[case] expected: &str) {
	assert_eq!(html, expected);
}

#[rstest]
fn test_doctype() {
	assert_eq!(doctype(), "<!DOCTYPE html>");
}

// ============================================================================
// Composition
// ============================================================================

#[rstest]
fn test_list_composition() {
	assert_eq!(ul((li("a"), li("b"))), "<ul><li>a</li><li>b</li></ul>");
}

#[rstest]
fn test_list_from_iterator() {
	let items: Vec<Markup> = ["one", "two"].into_iter().map(li).collect();

	assert_eq!(ul(items), "<ul><li>one</li><li>two</li></ul>");
}

#[rstest]
fn test_full_document() {
	// Arrange
	let page = html((
		attrs! { "lang" => "en" },
		head((meta(attrs! { "charset" => "utf-8" }), title("Home"))),
		body((
			h1("Welcome"),
			p(("See ", img(attrs! { "src" => "/a.png", "alt" => "" }))),
		)),
	));

	// Act
	let document = format!("{}{}", doctype(), page);

	// Assert
	assert_eq!(
		document,
		concat!(
			"<!DOCTYPE html>",
			r#"<html lang="en">"#,
			r#"<head><meta charset="utf-8"><title>Home</title></head>"#,
			r#"<body><h1>Welcome</h1><p>See <img src="/a.png" alt=""></p></body>"#,
			"</html>"
		)
	);
}
