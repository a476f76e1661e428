//! Error types for pager drivers.

use thiserror::Error;

/// Errors raised while resolving a pager driver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PagerError {
	/// No driver is registered under the requested name.
	#[error("Unknown pager driver: {name} (available: {available})")]
	UnknownDriver {
		/// Requested driver name.
		name: String,
		/// Comma separated list of registered names.
		available: String,
	},
}

/// Result type alias for pager operations.
pub type Result<T> = std::result::Result<T, PagerError>;

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_unknown_driver_message() {
		let error = PagerError::UnknownDriver {
			name: "Elastic".to_string(),
			available: "sliding, jumping".to_string(),
		};
		assert_eq!(
			error.to_string(),
			"Unknown pager driver: Elastic (available: sliding, jumping)"
		);
	}
}
