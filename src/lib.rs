//! # Reinhardt Grid
//!
//! Server-side data grid rendering through Tera templates.
//!
//! A grid engine produces one page of rows together with its sort and paging
//! state. The renderer turns that state into template bindings (sortable
//! column headers, numbered and keyed rows, paging counters) and template
//! functions for paging links, a per-page selector, a results summary and
//! alternating row classes.
//!
//! ## Feature Flags
//!
//! - `tables` - Grid state model and the in-memory [`SimpleTable`](tables::SimpleTable)
//! - `pager` - Sliding and Jumping paging link drivers
//! - `template` - The Tera rendering adapter (enables `tables` and `pager`)
//! - `full` (default) - Everything above
//!
//! ## Quick Example
//!
//! ```rust
//! use reinhardt_grid::prelude::*;
//!
//! #[derive(Debug)]
//! struct Person {
//!     name: String,
//! }
//!
//! let rows = (1..=25).map(|i| Person { name: format!("Person {i}") }).collect();
//! let mut table = SimpleTable::with_rows(rows);
//! table.add_column(Box::new(BaseColumn::new("name", "name", |p: &Person| p.name.clone())));
//! table.paginate(2, 10).unwrap();
//!
//! let mut container = TemplateContainer::from_raw_templates([(
//!     "grid.html",
//!     "{{ getResults() }}|{% for row in recordSet %}{{ row.name | safe }};{% endfor %}",
//! )])
//! .unwrap();
//! container.compile("grid.html").unwrap();
//!
//! let mut renderer = GridRenderer::new();
//! renderer.set_container(container);
//! renderer.render(&table.state()).unwrap();
//!
//! let html = renderer.flush_output().unwrap();
//! assert!(html.starts_with("You have 25 results in 3 pages|Person 11;"));
//! ```

pub mod pager;
pub mod tables;
pub mod template;

pub mod prelude {
	#[cfg(feature = "pager")]
	pub use crate::pager::{PagerConfig, PagerOptions, PagerRegistry};
	#[cfg(feature = "tables")]
	pub use crate::tables::{BaseColumn, Column, GridState, SimpleTable, SortDirection};
	#[cfg(feature = "template")]
	pub use crate::template::{
		GridError, GridRenderer, GridResult, RenderOptions, RenderOptionsPatch, TemplateContainer,
	};
}
