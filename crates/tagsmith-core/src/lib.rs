//! # tagsmith-core
//!
//! The rendering core of tagsmith: it turns a tag name and a heterogeneous
//! argument list into a serialized HTML fragment.
//!
//! ## Overview
//!
//! A render call goes through four steps:
//!
//! 1. **Flatten**: nested argument lists are expanded depth-first into one
//!    ordered sequence ([`flatten`]).
//! 2. **Classify**: every argument is either an attribute contribution, a
//!    content contribution, or empty ([`Arg`]).
//! 3. **Merge**: attribute contributions are merged in order into an
//!    [`Attributes`] set. A later value overwrites an earlier one, while the
//!    key keeps the position where it was first seen.
//! 4. **Serialize**: the start tag, content and end tag are written out. Void
//!    elements get a start tag only.
//!
//! Values are emitted verbatim unless [`EscapeMode::Html`] is selected through
//! [`RenderOptions`].
//!
//! ## Example
//!
//! ```
//! use tagsmith_core::{attrs, render};
//!
//! let item = render("li", "first", false);
//! let list = render("ul", (attrs! { "class" => "menu" }, item), false);
//!
//! assert_eq!(list, r#"<ul class="menu"><li>first</li></ul>"#);
//! ```

pub mod args;
pub mod attrs;
pub mod error;
pub mod escape;
pub mod markup;
pub mod options;
pub mod render;

pub use args::{Arg, Content, IntoArgs};
pub use attrs::Attributes;
pub use error::{OptionsError, Result};
pub use escape::escape_html;
pub use markup::Markup;
pub use options::{EscapeMode, RenderOptions, VoidStyle};
pub use render::{Renderer, flatten, render};
