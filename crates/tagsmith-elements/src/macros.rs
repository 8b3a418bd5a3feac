//! Code generation for the element catalog.

/// Generates the catalog constants, one render function per tag, and the
/// function tables the registry is populated from.
///
/// Each generated function takes a named generic parameter so that a
/// `Vec<Arg>` instantiation can be stored as an [`ElementFn`](crate::ElementFn).
macro_rules! define_elements {
	(
		elements: [$($element:ident),+ $(,)?],
		void_elements: [$($void:ident),+ $(,)?] $(,)?
	) => {
		/// Names of the elements rendered with a closing tag, in catalog order.
		pub const ELEMENTS: &[&str] = &[$(stringify!($element)),+];

		/// Names of the void elements, rendered as a start tag only.
		pub const VOID_ELEMENTS: &[&str] = &[$(stringify!($void)),+];

		$(
			#[doc = concat!("Renders a `<", stringify!($element), ">` element.")]
			pub fn $element<A: ::tagsmith_core::IntoArgs>(args: A) -> ::tagsmith_core::Markup {
				::tagsmith_core::render(stringify!($element), args, false)
			}
		)+

		$(
			#[doc = concat!(
				"Renders a `<", stringify!($void), ">` void element. Content arguments are ignored."
			)]
			pub fn $void<A: ::tagsmith_core::IntoArgs>(args: A) -> ::tagsmith_core::Markup {
				::tagsmith_core::render(stringify!($void), args, true)
			}
		)+

		pub(crate) const ELEMENT_FNS: &[(&str, $crate::ElementFn)] = &[
			$((stringify!($element), $element::<::std::vec::Vec<::tagsmith_core::Arg>>)),+
		];

		pub(crate) const VOID_ELEMENT_FNS: &[(&str, $crate::ElementFn)] = &[
			$((stringify!($void), $void::<::std::vec::Vec<::tagsmith_core::Arg>>)),+
		];
	};
}

pub(crate) use define_elements;
