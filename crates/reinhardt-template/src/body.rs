//! Record view model

use indexmap::IndexMap;
use reinhardt_tables::ColumnSpec;
use serde::Serialize;

/// Rows of the current page in both access shapes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordSet {
	/// Rows as cell sequences in column order
	pub numbered_set: Vec<Vec<String>>,
	/// Rows keyed by field name
	pub record_set: Vec<IndexMap<String, String>>,
}

/// Reshapes row-major records into numbered and field-keyed rows
///
/// Row order is kept. Each row is cut or padded with empty cells to the
/// column count so both shapes always hold the same values.
pub fn build_body(records: &[Vec<String>], columns: &[ColumnSpec]) -> RecordSet {
	let mut body = RecordSet {
		numbered_set: Vec::with_capacity(records.len()),
		record_set: Vec::with_capacity(records.len()),
	};

	for record in records {
		let cells: Vec<String> = (0..columns.len())
			.map(|i| record.get(i).cloned().unwrap_or_default())
			.collect();
		let keyed = columns
			.iter()
			.zip(&cells)
			.map(|(column, cell)| (column.field.clone(), cell.clone()))
			.collect();
		body.numbered_set.push(cells);
		body.record_set.push(keyed);
	}

	body
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	fn row(cells: &[&str]) -> Vec<String> {
		cells.iter().map(|c| c.to_string()).collect()
	}

	#[rstest]
	fn test_reshape() {
		let records = vec![row(&["A", "1"]), row(&["B", "2"])];
		let columns = vec![ColumnSpec::new("name", "name"), ColumnSpec::new("val", "val")];

		let body = build_body(&records, &columns);

		assert_eq!(body.numbered_set, records);
		assert_eq!(body.record_set.len(), 2);
		assert_eq!(body.record_set[0]["name"], "A");
		assert_eq!(body.record_set[0]["val"], "1");
		assert_eq!(body.record_set[1]["name"], "B");
		assert_eq!(body.record_set[1]["val"], "2");
	}

	#[rstest]
	fn test_ragged_rows() {
		let records = vec![row(&["A"]), row(&["B", "2", "extra"])];
		let columns = vec![ColumnSpec::new("name", "name"), ColumnSpec::new("val", "val")];

		let body = build_body(&records, &columns);

		assert_eq!(body.numbered_set, vec![row(&["A", ""]), row(&["B", "2"])]);
		assert_eq!(body.record_set[0]["val"], "");
	}

	#[rstest]
	fn test_empty() {
		let body = build_body(&[], &[ColumnSpec::new("name", "name")]);
		assert!(body.numbered_set.is_empty());
		assert!(body.record_set.is_empty());
	}

	proptest! {
		#[test]
		fn test_shapes_hold_same_values(
			records in prop::collection::vec(prop::collection::vec("[a-z]{0,4}", 3), 0..8)
		) {
			let columns = vec![
				ColumnSpec::new("a", "a"),
				ColumnSpec::new("b", "b"),
				ColumnSpec::new("c", "c"),
			];
			let body = build_body(&records, &columns);

			prop_assert_eq!(body.numbered_set.len(), body.record_set.len());
			for (numbered, keyed) in body.numbered_set.iter().zip(&body.record_set) {
				let values: Vec<&String> = keyed.values().collect();
				prop_assert_eq!(values, numbered.iter().collect::<Vec<_>>());
			}
		}
	}
}
