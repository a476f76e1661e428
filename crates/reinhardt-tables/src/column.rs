//! Column definitions

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Render-time description of one grid column
///
/// This is what a renderer receives for each column: the field name used
/// in sorting queries and record keys, and the raw header label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
	/// Field name identifying the column
	pub field: String,
	/// Header label before any formatting
	pub label: String,
}

impl ColumnSpec {
	/// Creates a new column spec
	pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			field: field.into(),
			label: label.into(),
		}
	}
}

/// A grid column: its field name, header label and cell extraction
///
/// The rendered cell doubles as the sort key in [`SimpleTable`](crate::SimpleTable).
pub trait Column: Debug {
	/// The type of rows this column operates on
	type Row;

	/// Returns the name of this column
	///
	/// This is used as the identifier for sorting and as the record key
	fn name(&self) -> &str;

	/// Returns the header text for this column
	fn header(&self) -> &str;

	/// Renders the column value for the given row
	fn render(&self, row: &Self::Row) -> String;

	/// Returns whether this column can be sorted
	///
	/// Default: true
	fn sortable(&self) -> bool {
		true
	}

	/// Returns the render-time spec of this column
	fn spec(&self) -> ColumnSpec {
		ColumnSpec::new(self.name(), self.header())
	}
}

/// A basic column implementation using a function to extract values
///
/// # Example
///
/// ```rust
/// use reinhardt_tables::column::BaseColumn;
///
/// struct User {
///     id: i32,
///     name: String,
/// }
///
/// let name_column = BaseColumn::new(
///     "name",
///     "User Name",
///     |user: &User| user.name.clone(),
/// );
/// ```
pub struct BaseColumn<R, F>
where
	F: Fn(&R) -> String,
{
	name: String,
	header: String,
	extractor: F,
	sortable: bool,
	_phantom: std::marker::PhantomData<R>,
}

impl<R, F> BaseColumn<R, F>
where
	F: Fn(&R) -> String,
{
	/// Creates a new base column
	pub fn new(name: impl Into<String>, header: impl Into<String>, extractor: F) -> Self {
		Self {
			name: name.into(),
			header: header.into(),
			extractor,
			sortable: true,
			_phantom: std::marker::PhantomData,
		}
	}

	/// Sets whether this column is sortable
	pub fn sortable(mut self, sortable: bool) -> Self {
		self.sortable = sortable;
		self
	}
}

impl<R, F> Debug for BaseColumn<R, F>
where
	F: Fn(&R) -> String,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("BaseColumn")
			.field("name", &self.name)
			.field("header", &self.header)
			.field("sortable", &self.sortable)
			.finish_non_exhaustive()
	}
}

impl<R, F> Column for BaseColumn<R, F>
where
	R: Debug,
	F: Fn(&R) -> String,
{
	type Row = R;

	fn name(&self) -> &str {
		&self.name
	}

	fn header(&self) -> &str {
		&self.header
	}

	fn render(&self, row: &Self::Row) -> String {
		(self.extractor)(row)
	}

	fn sortable(&self) -> bool {
		self.sortable
	}
}
