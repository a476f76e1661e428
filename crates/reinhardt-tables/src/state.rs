//! Render-time grid state

use crate::column::ColumnSpec;
use crate::paging::PagingSnapshot;
use crate::sorting::SortConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Everything a renderer needs from a grid engine for one render pass
///
/// `records` are already paged and sorted; each row holds one cell per
/// entry of `columns`, in the same order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridState {
	/// Row-major cells of the current page
	pub records: Vec<Vec<String>>,
	/// Ordered column specs
	pub columns: Vec<ColumnSpec>,
	/// Fields the engine allows sorting on
	pub sortable_fields: BTreeSet<String>,
	/// Current sort, if any
	pub current_sort: Option<SortConfig>,
	/// Paging counters
	pub paging: PagingSnapshot,
}

impl GridState {
	/// Returns whether `field` may be sorted on
	pub fn is_sortable(&self, field: &str) -> bool {
		self.sortable_fields.contains(field)
	}
}
