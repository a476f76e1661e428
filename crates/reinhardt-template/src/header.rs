//! Column header view model

use crate::options::RenderOptions;
use indexmap::IndexMap;
use reinhardt_tables::{ColumnSpec, SortConfig};
use serde::Serialize;
use std::collections::BTreeSet;

/// One rendered column header
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderEntry {
	/// Display label
	pub label: String,
	/// Sorting link; empty for columns that cannot be sorted
	pub link: String,
}

/// Column headers in both access shapes
///
/// `column_set` keeps column order; `column_header` holds the same entries
/// keyed by field name, or by position when `assocColumns` is off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnHeader {
	pub column_set: Vec<HeaderEntry>,
	pub column_header: IndexMap<String, HeaderEntry>,
}

/// Sorting inputs taken from the grid state
#[derive(Debug, Clone, Copy)]
pub(crate) struct SortContext<'a> {
	pub sortable_fields: &'a BTreeSet<String>,
	pub current_sort: Option<&'a SortConfig>,
	pub current_page: usize,
}

pub(crate) fn build_header(
	columns: &[ColumnSpec],
	options: &RenderOptions,
	sort: SortContext<'_>,
) -> ColumnHeader {
	let mut header = ColumnHeader::default();

	for (index, spec) in columns.iter().enumerate() {
		let link = if sort.sortable_fields.contains(&spec.field) {
			sort_link(spec, options, &sort)
		} else {
			String::new()
		};
		let entry = HeaderEntry {
			label: header_label(spec, options),
			link,
		};

		let key = if options.header_attributes.assoc_columns {
			spec.field.clone()
		} else {
			index.to_string()
		};
		header.column_set.push(entry.clone());
		header.column_header.insert(key, entry);
	}

	header
}

fn sort_link(spec: &ColumnSpec, options: &RenderOptions, sort: &SortContext<'_>) -> String {
	let direction = SortConfig::next_direction(sort.current_sort, &spec.field);
	let page = if options.sorting_resets_paging {
		1
	} else {
		sort.current_page
	}
	.to_string();

	let order_by = options.request_var("orderBy");
	let direction_var = options.request_var("direction");
	let page_var = options.request_var("page");
	let pairs = [
		(order_by.as_str(), spec.field.as_str()),
		(direction_var.as_str(), direction.as_str()),
		(page_var.as_str(), page.as_str()),
	];
	// Encoding string pairs cannot fail.
	let query = serde_urlencoded::to_string(&pairs[..]).unwrap_or_default();
	format!("{}?{}", options.self_path, query)
}

fn header_label(spec: &ColumnSpec, options: &RenderOptions) -> String {
	let header = &options.header_attributes;
	match header.column_names.get(&spec.field) {
		Some(label) if !label.is_empty() => label.clone(),
		_ => header.formatter.format(&spec.label),
	}
}
