//! Static tag registry.
//!
//! The registry maps every catalog tag name to its descriptor and render
//! function. It is built on first access by registering the non-void catalog
//! and then the void catalog, and is never mutated afterwards.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use tagsmith_core::{Arg, IntoArgs, Markup};

use crate::html::{ELEMENT_FNS, VOID_ELEMENT_FNS};

/// Signature shared by every generated element function.
pub type ElementFn = fn(Vec<Arg>) -> Markup;

/// Tag name and void flag of a catalog element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementDescriptor {
	/// The tag name, used verbatim in the start and end tags.
	pub tag_name: &'static str,
	/// Whether the element is rendered without content and closing tag.
	pub is_void: bool,
}

/// A registered element: its descriptor and generated render function.
#[derive(Debug, Clone, Copy)]
pub struct ElementEntry {
	descriptor: ElementDescriptor,
	render: ElementFn,
}

impl ElementEntry {
	/// Returns the element descriptor.
	pub fn descriptor(&self) -> ElementDescriptor {
		self.descriptor
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &'static str {
		self.descriptor.tag_name
	}

	/// Returns whether the element is void.
	pub fn is_void(&self) -> bool {
		self.descriptor.is_void
	}

	/// Renders this element.
	pub fn call(&self, args: impl IntoArgs) -> Markup {
		(self.render)(args.into_args())
	}
}

/// Lookup table from tag name to [`ElementEntry`], in catalog order.
///
/// ## Example
///
/// ```
/// use tagsmith_core::attrs;
/// use tagsmith_elements::registry;
///
/// let registry = registry();
/// assert_eq!(registry.is_void("br"), Some(true));
/// assert_eq!(registry.is_void("blink"), None);
///
/// let html = registry.render("a", (attrs! { "href" => "/" }, "home"));
/// assert_eq!(html.as_deref(), Some(r#"<a href="/">home</a>"#));
/// ```
#[derive(Debug)]
pub struct TagRegistry {
	entries: IndexMap<&'static str, ElementEntry>,
}

impl TagRegistry {
	fn build() -> Self {
		let mut registry = Self {
			entries: IndexMap::with_capacity(ELEMENT_FNS.len() + VOID_ELEMENT_FNS.len()),
		};
		registry.populate(ELEMENT_FNS, false);
		registry.populate(VOID_ELEMENT_FNS, true);

		tracing::debug!(entries = registry.len(), "built element registry");
		registry
	}

	fn populate(&mut self, table: &[(&'static str, ElementFn)], is_void: bool) {
		for &(tag_name, render) in table {
			let entry = ElementEntry {
				descriptor: ElementDescriptor { tag_name, is_void },
				render,
			};
			self.entries.insert(tag_name, entry);
		}
	}

	/// Returns the entry registered under `name`.
	pub fn get(&self, name: &str) -> Option<&ElementEntry> {
		self.entries.get(name)
	}

	/// Returns whether `name` is a catalog element.
	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(name)
	}

	/// Returns the void flag of `name`, or `None` if it is not registered.
	pub fn is_void(&self, name: &str) -> Option<bool> {
		self.get(name).map(ElementEntry::is_void)
	}

	/// Returns the number of registered elements.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether the registry is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over all entries, non-void elements first, in catalog order.
	pub fn iter(&self) -> impl Iterator<Item = &ElementEntry> + '_ {
		self.entries.values()
	}

	/// Renders the element registered under `name`.
	///
	/// Returns `None` when `name` is not a catalog element.
	pub fn render(&self, name: &str, args: impl IntoArgs) -> Option<Markup> {
		self.get(name).map(|entry| entry.call(args))
	}
}

static REGISTRY: Lazy<TagRegistry> = Lazy::new(TagRegistry::build);

/// Returns the process-wide tag registry, building it on first use.
pub fn registry() -> &'static TagRegistry {
	&REGISTRY
}
