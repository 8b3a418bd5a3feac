//! # tagsmith-elements
//!
//! One render function per standard HTML element, plus a static registry for
//! looking elements up by name.
//!
//! Non-void elements render a start tag, their content and an end tag. Void
//! elements such as `br` or `input` render a start tag only.
//!
//! ## Example
//!
//! ```
//! use tagsmith_core::attrs;
//! use tagsmith_elements::{a, li, ul};
//!
//! let nav = ul((
//! 	attrs! { "class" => "nav" },
//! 	li(a((attrs! { "href" => "/" }, "Home"))),
//! 	li(a((attrs! { "href" => "/about" }, "About"))),
//! ));
//!
//! assert_eq!(
//! 	nav,
//! 	r#"<ul class="nav"><li><a href="/">Home</a></li><li><a href="/about">About</a></li></ul>"#
//! );
//! ```

mod macros;

pub mod html;
pub mod registry;

pub use html::*;
pub use registry::{ElementDescriptor, ElementEntry, ElementFn, TagRegistry, registry};
