//! Sample data set

use reinhardt_tables::{BaseColumn, SimpleTable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
	pub name: String,
	pub surname: String,
}

impl Person {
	fn new(name: &str, surname: &str) -> Self {
		Self {
			name: name.to_string(),
			surname: surname.to_string(),
		}
	}
}

/// Eighteen rows alternating between two people, with one odd one out
pub fn people() -> Vec<Person> {
	(0..18)
		.map(|i| match i {
			2 => Person::new("Test Name", "My Surname"),
			i if i % 2 == 0 => Person::new("My Name", "My Surname"),
			_ => Person::new("My Name2", "My Surname2"),
		})
		.collect()
}

/// Table over [`people`] with sortable `name` and `surname` columns
pub fn people_table() -> SimpleTable<Person> {
	let mut table = SimpleTable::with_rows(people());
	table.add_column(Box::new(BaseColumn::new("name", "name", |p: &Person| {
		p.name.clone()
	})));
	table.add_column(Box::new(BaseColumn::new(
		"surname",
		"surname",
		|p: &Person| p.surname.clone(),
	)));
	table
}
