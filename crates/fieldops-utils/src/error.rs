//! Error types for fieldops-utils

use thiserror::Error;

/// Error type for debounced invocations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DebounceError {
	/// `call` was made outside of a tokio runtime, so no timer could be started
	#[error("No tokio runtime available to schedule the debounced call")]
	NoRuntime,
}

/// Result type for debounce operations
pub type Result<T> = std::result::Result<T, DebounceError>;
