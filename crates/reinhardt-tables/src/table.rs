//! In-memory table engine
//!
//! [`SimpleTable`] binds a list of rows, sorts them by a column's rendered
//! value, cuts the current page and hands the result to a renderer as a
//! [`GridState`].

use crate::column::Column;
use crate::error::{Result, TableError};
use crate::paging::PagingSnapshot;
use crate::sorting::{SortConfig, SortDirection};
use crate::state::GridState;
use std::cmp::Ordering;

/// Requested page and page size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationConfig {
	/// Requested page (1-indexed)
	pub page: usize,
	/// Rows per page
	pub per_page: usize,
}

/// A table over an in-memory row list
pub struct SimpleTable<R> {
	rows: Vec<R>,
	columns: Vec<Box<dyn Column<Row = R>>>,
	order: Vec<usize>,
	sort: Option<SortConfig>,
	pagination: Option<PaginationConfig>,
}

impl<R> SimpleTable<R> {
	/// Creates an empty table
	pub fn new() -> Self {
		Self::with_rows(Vec::new())
	}

	/// Creates a table bound to `rows`
	pub fn with_rows(rows: Vec<R>) -> Self {
		let order = (0..rows.len()).collect();
		Self {
			rows,
			columns: Vec::new(),
			order,
			sort: None,
			pagination: None,
		}
	}

	/// Replaces the bound rows, keeping columns, sort and pagination
	pub fn bind(&mut self, rows: Vec<R>) {
		self.rows = rows;
		self.order = (0..self.rows.len()).collect();
		self.apply_sort();
	}

	/// Appends a column
	pub fn add_column(&mut self, column: Box<dyn Column<Row = R>>) {
		self.columns.push(column);
	}

	/// Returns the columns in display order
	pub fn columns(&self) -> &[Box<dyn Column<Row = R>>] {
		&self.columns
	}

	/// Returns the number of bound rows
	pub fn total_rows(&self) -> usize {
		self.rows.len()
	}

	/// Sorts the table by a sortable column
	pub fn sort_by(&mut self, field: &str, direction: SortDirection) -> Result<()> {
		let column = self
			.columns
			.iter()
			.find(|c| c.name() == field)
			.ok_or_else(|| TableError::UnknownColumn(field.to_string()))?;
		if !column.sortable() {
			return Err(TableError::NotSortable(field.to_string()));
		}

		self.sort = Some(SortConfig::new(field, direction));
		self.apply_sort();
		tracing::debug!(field, direction = %direction, "sorted table");
		Ok(())
	}

	/// Returns the current sort, if any
	pub fn sort_config(&self) -> Option<&SortConfig> {
		self.sort.as_ref()
	}

	/// Sets the page and page size
	///
	/// Pages past the end are clamped to the last page when rows are cut.
	pub fn paginate(&mut self, page: usize, per_page: usize) -> Result<()> {
		if page == 0 {
			return Err(TableError::InvalidPage(page));
		}
		if per_page == 0 {
			return Err(TableError::InvalidPageSize(per_page));
		}
		self.pagination = Some(PaginationConfig { page, per_page });
		Ok(())
	}

	/// Returns the requested pagination, if any
	pub fn pagination_config(&self) -> Option<&PaginationConfig> {
		self.pagination.as_ref()
	}

	/// Returns the number of pages (1 when unpaginated and non-empty)
	pub fn total_pages(&self) -> usize {
		match self.pagination {
			Some(p) => self.rows.len().div_ceil(p.per_page),
			None => usize::from(!self.rows.is_empty()),
		}
	}

	/// Returns the rows of the current page in sorted order
	pub fn visible_rows(&self) -> Vec<&R> {
		let (start, end) = self.window();
		self.order[start..end].iter().map(|&i| &self.rows[i]).collect()
	}

	/// Produces the render-time state of the current page
	pub fn state(&self) -> GridState {
		let visible = self.visible_rows();
		let records: Vec<Vec<String>> = visible
			.iter()
			.map(|row| self.columns.iter().map(|c| c.render(row)).collect())
			.collect();

		let (page, per_page) = match self.pagination {
			Some(p) => (self.current_page(), p.per_page),
			None => (1, 0),
		};
		let paging = PagingSnapshot::compute(
			page,
			per_page,
			self.rows.len(),
			records.len(),
			self.columns.len(),
		);

		GridState {
			records,
			columns: self.columns.iter().map(|c| c.spec()).collect(),
			sortable_fields: self
				.columns
				.iter()
				.filter(|c| c.sortable())
				.map(|c| c.name().to_string())
				.collect(),
			current_sort: self.sort.clone(),
			paging,
		}
	}

	fn current_page(&self) -> usize {
		match self.pagination {
			Some(p) => p.page.min(self.total_pages().max(1)),
			None => 1,
		}
	}

	fn window(&self) -> (usize, usize) {
		match self.pagination {
			Some(p) => {
				let start = ((self.current_page() - 1) * p.per_page).min(self.order.len());
				(start, (start + p.per_page).min(self.order.len()))
			}
			None => (0, self.order.len()),
		}
	}

	fn apply_sort(&mut self) {
		let Some(sort) = &self.sort else {
			return;
		};
		let Some(column) = self.columns.iter().find(|c| c.name() == sort.field) else {
			return;
		};

		let keys: Vec<String> = self.rows.iter().map(|row| column.render(row)).collect();
		let direction = sort.direction;
		self.order.sort_by(|&a, &b| {
			let ordering = compare_cells(&keys[a], &keys[b]);
			match direction {
				SortDirection::Asc => ordering,
				SortDirection::Desc => ordering.reverse(),
			}
		});
	}
}

impl<R> Default for SimpleTable<R> {
	fn default() -> Self {
		Self::new()
	}
}

// Numeric cells sort before text cells and compare by value; text compares
// lexically. Equal numbers fall back to their text so the order stays total.
fn compare_cells(a: &str, b: &str) -> Ordering {
	match (a.parse::<f64>(), b.parse::<f64>()) {
		(Ok(x), Ok(y)) => x.total_cmp(&y).then_with(|| a.cmp(b)),
		(Ok(_), Err(_)) => Ordering::Less,
		(Err(_), Ok(_)) => Ordering::Greater,
		(Err(_), Err(_)) => a.cmp(b),
	}
}
