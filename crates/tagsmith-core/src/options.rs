//! Render options.
//!
//! Options are plain values with builder-style setters and can be loaded from
//! TOML:
//!
//! ```toml
//! escape = "html"
//! void_style = "self-closing"
//! ```
//!
//! Missing keys take their defaults, which reproduce the caller-trusted output:
//! no escaping and `<br>`-style void elements.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OptionsError, Result};

/// How text content and attribute values are written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscapeMode {
	/// Emit values verbatim.
	#[default]
	None,
	/// Escape `&`, `<`, `>`, `"` and `'` in text content and attribute
	/// values. [`Markup`](crate::Markup) content is left untouched.
	Html,
}

/// How void elements are closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VoidStyle {
	/// `<br>`
	#[default]
	Html,
	/// `<br />`
	SelfClosing,
}

/// Options for a [`Renderer`](crate::Renderer).
///
/// ## Example
///
/// ```
/// use tagsmith_core::{EscapeMode, RenderOptions, VoidStyle};
///
/// let options = RenderOptions::new().escape(EscapeMode::Html).self_closing();
/// assert_eq!(options.void_style, VoidStyle::SelfClosing);
///
/// let loaded = RenderOptions::from_toml_str(r#"escape = "html""#).unwrap();
/// assert_eq!(loaded.escape, EscapeMode::Html);
/// assert_eq!(loaded.void_style, VoidStyle::Html);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
	/// Escaping applied to text content and attribute values.
	pub escape: EscapeMode,
	/// Closing style for void elements.
	pub void_style: VoidStyle,
}

impl RenderOptions {
	/// Creates the default options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the escape mode.
	pub fn escape(mut self, mode: EscapeMode) -> Self {
		self.escape = mode;
		self
	}

	/// Sets the void element style.
	pub fn void_style(mut self, style: VoidStyle) -> Self {
		self.void_style = style;
		self
	}

	/// Closes void elements with ` />`.
	pub fn self_closing(self) -> Self {
		self.void_style(VoidStyle::SelfClosing)
	}

	/// Parses options from a TOML document.
	///
	/// # Errors
	///
	/// Returns [`OptionsError::Toml`] on malformed TOML, unknown keys or
	/// unknown enum values.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		let options: Self = toml::from_str(source)?;
		tracing::debug!(
			escape = ?options.escape,
			void_style = ?options.void_style,
			"loaded render options"
		);
		Ok(options)
	}

	/// Reads and parses options from a TOML file.
	///
	/// # Errors
	///
	/// Returns [`OptionsError::Io`] if the file cannot be read and
	/// [`OptionsError::Toml`] if its contents are invalid.
	pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let source = std::fs::read_to_string(path).map_err(|source| OptionsError::Io {
			path: path.to_path_buf(),
			source,
		})?;
		Self::from_toml_str(&source)
	}
}
