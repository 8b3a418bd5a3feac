//! Error types for tagsmith-core.
//!
//! Rendering itself never fails. Errors only arise when render options are
//! loaded from configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for loading [`RenderOptions`](crate::RenderOptions).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OptionsError {
	/// The options file could not be read.
	#[error("failed to read render options from {}: {source}", path.display())]
	Io {
		/// Path of the options file.
		path: PathBuf,
		/// Underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// The options document is not valid TOML or has unknown keys.
	#[error("invalid render options: {0}")]
	Toml(#[from] toml::de::Error),
}

/// Result type for option loading.
pub type Result<T> = std::result::Result<T, OptionsError>;
