//! The HTML element catalog.
//!
//! Every function here is a thin wrapper over [`tagsmith_core::render`] with
//! the tag name and void flag fixed.

use tagsmith_core::Markup;

use crate::macros::define_elements;

define_elements! {
	elements: [
		a, abbr, address, article, aside, audio, b, bdi, bdo, blockquote, body, button, canvas,
		caption, cite, code, colgroup, data, datalist, dd, del, details, dfn, div, dl, dt, em,
		fieldset, figcaption, figure, footer, form, h1, h2, h3, h4, h5, h6, head, header, html, i,
		iframe, ins, kbd, label, legend, li, main, map, mark, menu, menuitem, meter, nav,
		noscript, object, ol, optgroup, option, output, p, pre, progress, q, rp, rt, ruby, s,
		samp, script, section, select, small, span, strong, style, sub, summary, sup, table,
		tbody, td, textarea, tfoot, th, thead, time, title, tr, u, ul, var, video,
	],
	void_elements: [
		area, base, br, col, embed, hr, img, input, keygen, link, meta, param, source, track, wbr,
	],
}

/// The HTML5 document type declaration.
pub const DOCTYPE: &str = "<!DOCTYPE html>";

/// Returns the HTML5 document type declaration.
///
/// ```
/// assert_eq!(tagsmith_elements::doctype(), "<!DOCTYPE html>");
/// ```
pub fn doctype() -> Markup {
	Markup::raw(DOCTYPE)
}
