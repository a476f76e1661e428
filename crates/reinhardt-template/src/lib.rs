//! # Reinhardt Template
//!
//! Tera rendering adapter for Reinhardt data grids.
//!
//! [`GridRenderer`] takes one page of [`GridState`](reinhardt_tables::GridState)
//! from a grid engine and exposes it to a Tera template:
//!
//! - **Bindings**: `columnSet`, `columnHeader`, `numberedSet`, `recordSet`
//!   and the paging counters (`currentPage`, `pagesNum`, `totalRecordsNum`, ...)
//! - **Functions**: `getPaging()`, `getPerPageSelectBox()`,
//!   `getResults(format=?, args=?)`, `getRowCSS(index=n)`
//!
//! Paging links are produced by a [`reinhardt_pager`] driver chosen by the
//! `pagerOptions.mode` option.
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_tables::{BaseColumn, SimpleTable, SortDirection};
//! use reinhardt_template::{GridRenderer, TemplateContainer};
//!
//! #[derive(Debug)]
//! struct Person {
//!     name: &'static str,
//! }
//!
//! let mut table = SimpleTable::with_rows(vec![Person { name: "Kim" }, Person { name: "Ada" }]);
//! table.add_column(Box::new(BaseColumn::new("name", "name", |p: &Person| p.name.to_string())));
//! table.sort_by("name", SortDirection::Asc).unwrap();
//!
//! let template = r#"{% for h in columnSet %}<th><a href="{{ h.link }}">{{ h.label }}</a></th>{% endfor %}
//! {% for row in recordSet %}<td class="{{ getRowCSS(index=loop.index0) }}">{{ row.name | safe }}</td>{% endfor %}"#;
//! let mut container = TemplateContainer::from_raw_templates([("grid.html", template)]).unwrap();
//! container.compile("grid.html").unwrap();
//!
//! let mut renderer = GridRenderer::new();
//! renderer.set_container(container);
//! renderer.render(&table.state()).unwrap();
//!
//! let html = renderer.flush_output().unwrap();
//! assert!(html.contains(r#"<a href="?orderBy=name&amp;direction=DESC&amp;page=1">name</a>"#));
//! assert!(html.contains(r#"<td class="even">Ada</td><td class="odd">Kim</td>"#));
//! ```

pub mod body;
pub mod container;
pub mod error;
pub mod escaping;
pub mod header;
mod helpers;
pub mod options;
pub mod renderer;
pub mod summary;

pub use body::{RecordSet, build_body};
pub use container::TemplateContainer;
pub use error::{GridError, GridResult};
pub use escaping::{escape_cell, escape_html};
pub use header::{ColumnHeader, HeaderEntry};
pub use options::{
	HeaderAttributes, HeaderAttributesPatch, HeaderFormatter, RenderOptions, RenderOptionsPatch,
};
pub use renderer::GridRenderer;
pub use summary::{count_placeholders, sprintf};
