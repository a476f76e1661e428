//! Error types for grid rendering.

use reinhardt_pager::PagerError;
use thiserror::Error;

/// Errors that abort a render pass.
#[derive(Debug, Error)]
pub enum GridError {
	/// The renderer is missing something it needs (template container, compiled template).
	#[error("Configuration error: {0}")]
	Configuration(String),

	/// A named collaborator could not be loaded.
	#[error("Dependency resolution error: {0}")]
	DependencyResolution(#[from] PagerError),

	/// A results format string does not match the number of supplied values.
	#[error(
		"Incorrect string format: {placeholders} placeholders for {arguments} arguments, try and match % to the number of inputs required"
	)]
	FormatMismatch {
		/// Placeholders found in the format string.
		placeholders: usize,
		/// Values available to fill them.
		arguments: usize,
	},

	/// The template engine failed to load or render.
	#[error("Template error: {0}")]
	Template(#[from] tera::Error),

	/// An options file is not valid TOML.
	#[error("TOML error: {0}")]
	Toml(#[from] toml::de::Error),

	/// An options document is not valid JSON.
	#[error("JSON error: {0}")]
	Json(#[from] serde_json::Error),

	/// An options file could not be read.
	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

/// Result type alias for grid rendering.
pub type GridResult<T> = Result<T, GridError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_configuration_error_message() {
		let error = GridError::Configuration("no template container loaded".to_string());
		assert_eq!(
			error.to_string(),
			"Configuration error: no template container loaded"
		);
	}

	#[rstest]
	fn test_pager_error_from() {
		let error: GridError = PagerError::UnknownDriver {
			name: "Elastic".to_string(),
			available: "sliding".to_string(),
		}
		.into();
		assert!(matches!(error, GridError::DependencyResolution(_)));
	}

	#[rstest]
	fn test_format_mismatch_message() {
		let error = GridError::FormatMismatch {
			placeholders: 3,
			arguments: 2,
		};
		assert!(error.to_string().starts_with(
			"Incorrect string format: 3 placeholders for 2 arguments"
		));
	}
}
