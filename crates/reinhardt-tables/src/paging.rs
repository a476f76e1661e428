//! Paging counters for a render pass

use serde::{Deserialize, Serialize};

/// Paging counters copied into a renderer at the start of each render
///
/// Serializes with the camelCase names templates use (`currentPage`,
/// `totalRecordsNum`, ...). Record numbers start at 1; both are 0 when the
/// current page is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagingSnapshot {
	/// Current page (1-indexed)
	pub current_page: usize,
	/// Number of rows per page
	pub record_limit: usize,
	/// Total number of pages
	pub pages_num: usize,
	/// Number of columns
	pub columns_num: usize,
	/// Number of records on the current page
	pub records_num: usize,
	/// Total number of records across all pages
	pub total_records_num: usize,
	/// Number of the first record on the page
	pub first_record: usize,
	/// Number of the last record on the page
	pub last_record: usize,
}

impl PagingSnapshot {
	/// Derives the counters for one page
	///
	/// A `per_page` of 0 means "no limit": every record is on page 1.
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_tables::PagingSnapshot;
	///
	/// let snapshot = PagingSnapshot::compute(2, 10, 42, 10, 3);
	/// assert_eq!(snapshot.pages_num, 5);
	/// assert_eq!(snapshot.first_record, 11);
	/// assert_eq!(snapshot.last_record, 20);
	/// ```
	pub fn compute(
		page: usize,
		per_page: usize,
		total: usize,
		records_on_page: usize,
		columns: usize,
	) -> Self {
		let (record_limit, pages_num) = if per_page == 0 {
			(total, usize::from(total > 0))
		} else {
			(per_page, total.div_ceil(per_page))
		};

		let (first_record, last_record) = if records_on_page == 0 {
			(0, 0)
		} else {
			let first = page.saturating_sub(1) * record_limit + 1;
			(first, first + records_on_page - 1)
		};

		Self {
			current_page: page,
			record_limit,
			pages_num,
			columns_num: columns,
			records_num: records_on_page,
			total_records_num: total,
			first_record,
			last_record,
		}
	}
}
