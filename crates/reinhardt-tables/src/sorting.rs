//! Sorting functionality for tables

use crate::error::TableError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SortDirection {
	/// Ascending order
	#[default]
	Asc,
	/// Descending order
	Desc,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Asc => Self::Desc,
			Self::Desc => Self::Asc,
		}
	}

	/// Returns the query-string form (`ASC` / `DESC`)
	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Asc => "ASC",
			Self::Desc => "DESC",
		}
	}
}

/// The field a grid is currently sorted by, and in which direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortConfig {
	/// Sorted field name
	pub field: String,
	/// Current direction
	pub direction: SortDirection,
}

impl SortConfig {
	/// Creates a new sort config
	pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
		Self {
			field: field.into(),
			direction,
		}
	}

	/// Returns the direction a click on `field` should request next
	///
	/// Flips the current direction when `field` is the sorted field,
	/// otherwise starts at ascending.
	pub fn next_direction(current: Option<&Self>, field: &str) -> SortDirection {
		match current {
			Some(sort) if sort.field == field => sort.direction.toggle(),
			_ => SortDirection::Asc,
		}
	}
}

impl fmt::Display for SortDirection {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for SortDirection {
	type Err = TableError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case("asc") {
			Ok(Self::Asc)
		} else if s.eq_ignore_ascii_case("desc") {
			Ok(Self::Desc)
		} else {
			Err(TableError::InvalidDirection(s.to_string()))
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use rstest::rstest;

	#[rstest]
	#[case(SortDirection::Asc, SortDirection::Desc)]
	#[case(SortDirection::Desc, SortDirection::Asc)]
	fn test_toggle(#[case] input: SortDirection, #[case] expected: SortDirection) {
		assert_eq!(input.toggle(), expected);
	}

	#[rstest]
	#[case("ASC", SortDirection::Asc)]
	#[case("desc", SortDirection::Desc)]
	#[case("Desc", SortDirection::Desc)]
	fn test_from_str(#[case] input: &str, #[case] expected: SortDirection) {
		assert_eq!(input.parse::<SortDirection>().unwrap(), expected);
	}

	#[rstest]
	fn test_from_str_rejects_garbage() {
		assert_eq!(
			"sideways".parse::<SortDirection>(),
			Err(TableError::InvalidDirection("sideways".to_string()))
		);
	}

	#[rstest]
	fn test_next_direction() {
		let sort = SortConfig::new("name", SortDirection::Asc);
		assert_eq!(
			SortConfig::next_direction(Some(&sort), "name"),
			SortDirection::Desc
		);
		assert_eq!(
			SortConfig::next_direction(Some(&sort), "surname"),
			SortDirection::Asc
		);
		assert_eq!(SortConfig::next_direction(None, "name"), SortDirection::Asc);
	}

	proptest! {
		#[test]
		fn toggle_twice_is_identity(desc in any::<bool>()) {
			let dir = if desc { SortDirection::Desc } else { SortDirection::Asc };
			prop_assert_eq!(dir.toggle().toggle(), dir);
		}
	}
}
