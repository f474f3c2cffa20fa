//! Error types for fieldops-conf

use thiserror::Error;

/// Error type for loading and validating settings
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfError {
	/// The settings file could not be read
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),

	/// The settings document is not valid TOML or has wrongly typed keys
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// A setting parsed but holds an unusable value
	#[error("Invalid setting `{key}`: {reason}")]
	Invalid {
		/// Dotted key of the offending setting
		key: &'static str,
		/// What is wrong with it
		reason: String,
	},
}

/// Result type for settings operations
pub type Result<T> = std::result::Result<T, ConfError>;
