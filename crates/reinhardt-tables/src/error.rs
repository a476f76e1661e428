//! Error types for the grid model.

use thiserror::Error;

/// Errors raised by the in-memory table engine.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
	/// The named column does not exist.
	#[error("Unknown column: {0}")]
	UnknownColumn(String),

	/// The named column exists but cannot be sorted.
	#[error("Column is not sortable: {0}")]
	NotSortable(String),

	/// Page numbers start at 1.
	#[error("Invalid page: {0}")]
	InvalidPage(usize),

	/// A page must hold at least one record.
	#[error("Invalid page size: {0}")]
	InvalidPageSize(usize),

	/// A sort direction string could not be parsed.
	#[error("Invalid sort direction: {0}")]
	InvalidDirection(String),
}

/// Result type alias for table operations.
pub type Result<T> = std::result::Result<T, TableError>;
