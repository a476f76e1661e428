//! Grid renderer
//!
//! [`GridRenderer`] turns one page of grid state into Tera bindings and
//! renders them through an attached [`TemplateContainer`].
//!
//! A render pass runs in this order:
//!
//! ```mermaid
//! graph LR
//!     A[set_options] --> B[render]
//!     B --> C[init]
//!     C --> D[build_header]
//!     D --> E[build_body]
//!     E --> F[flush_output]
//! ```

use crate::body::{self, RecordSet};
use crate::container::TemplateContainer;
use crate::error::{GridError, GridResult};
use crate::escaping::escape_html;
use crate::header::{self, ColumnHeader, SortContext};
use crate::helpers::TemplateHelpers;
use crate::options::{RenderOptions, RenderOptionsPatch};
use reinhardt_pager::PagerRegistry;
use reinhardt_tables::{ColumnSpec, GridState, PagingSnapshot, SortConfig};
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;
use tera::Context;

const NO_CONTAINER: &str = "no template container loaded";

/// Renders grid state through a Tera template
///
/// # Examples
///
/// ```rust
/// use reinhardt_tables::{ColumnSpec, GridState, PagingSnapshot};
/// use reinhardt_template::{GridRenderer, TemplateContainer};
///
/// let template = "{% for row in recordSet %}{{ row.name | safe }};{% endfor %}";
/// let mut container = TemplateContainer::from_raw_templates([("list.txt", template)]).unwrap();
/// container.compile("list.txt").unwrap();
///
/// let state = GridState {
///     records: vec![vec!["Tom & Jerry".to_string()]],
///     columns: vec![ColumnSpec::new("name", "name")],
///     paging: PagingSnapshot::compute(1, 10, 1, 1, 1),
///     ..Default::default()
/// };
///
/// let mut renderer = GridRenderer::new();
/// renderer.set_container(container);
/// renderer.render(&state).unwrap();
/// assert_eq!(renderer.flush_output().unwrap(), "Tom &amp; Jerry;");
/// ```
#[derive(Debug)]
pub struct GridRenderer {
	options: RenderOptions,
	pagers: Arc<PagerRegistry>,
	container: Option<TemplateContainer>,
	paging: PagingSnapshot,
	sortable_fields: BTreeSet<String>,
	current_sort: Option<SortConfig>,
	records: Vec<Vec<String>>,
	header: ColumnHeader,
	body: RecordSet,
}

impl Default for GridRenderer {
	fn default() -> Self {
		Self::new()
	}
}

impl GridRenderer {
	/// Creates a renderer with default options and the built-in pager drivers
	pub fn new() -> Self {
		Self {
			options: RenderOptions::default(),
			pagers: Arc::new(PagerRegistry::with_defaults()),
			container: None,
			paging: PagingSnapshot::default(),
			sortable_fields: BTreeSet::new(),
			current_sort: None,
			records: Vec::new(),
			header: ColumnHeader::default(),
			body: RecordSet::default(),
		}
	}

	/// Replaces the pager driver registry
	pub fn with_pager_registry(mut self, pagers: PagerRegistry) -> Self {
		self.pagers = Arc::new(pagers);
		self
	}

	/// Attaches the template container output is rendered with
	pub fn set_container(&mut self, container: TemplateContainer) {
		self.container = Some(container);
	}

	/// Returns the attached container
	pub fn container(&self) -> GridResult<&TemplateContainer> {
		self.container
			.as_ref()
			.ok_or_else(|| GridError::Configuration(NO_CONTAINER.to_string()))
	}

	/// Returns the attached container for selecting a template
	pub fn container_mut(&mut self) -> GridResult<&mut TemplateContainer> {
		self.container
			.as_mut()
			.ok_or_else(|| GridError::Configuration(NO_CONTAINER.to_string()))
	}

	/// Merges a partial option set over the current options
	pub fn set_options(&mut self, patch: RenderOptionsPatch) {
		self.options.merge(patch);
	}

	pub fn options(&self) -> &RenderOptions {
		&self.options
	}

	/// Copies paging counters and sort state, and formats every cell
	pub fn init(&mut self, state: &GridState) {
		self.paging = state.paging;
		self.sortable_fields = state.sortable_fields.clone();
		self.current_sort = state.current_sort.clone();
		self.records = state
			.records
			.iter()
			.map(|row| row.iter().map(|cell| self.default_cell_formatter(cell)).collect())
			.collect();
		tracing::debug!(
			page = self.paging.current_page,
			records = self.records.len(),
			total = self.paging.total_records_num,
			"initialized grid render"
		);
	}

	/// Builds the column headers and sorting links
	pub fn build_header(&mut self, columns: &[ColumnSpec]) -> &ColumnHeader {
		self.header = header::build_header(
			columns,
			&self.options,
			SortContext {
				sortable_fields: &self.sortable_fields,
				current_sort: self.current_sort.as_ref(),
				current_page: self.paging.current_page,
			},
		);
		tracing::debug!(columns = columns.len(), "built grid header");
		&self.header
	}

	/// Reshapes `records` into numbered and field-keyed rows
	pub fn build_body(&mut self, records: &[Vec<String>], columns: &[ColumnSpec]) -> &RecordSet {
		self.body = body::build_body(records, columns);
		&self.body
	}

	/// Prepares every binding for one page of grid state
	///
	/// Fails when no container is attached.
	pub fn render(&mut self, state: &GridState) -> GridResult<()> {
		self.container()?;
		self.init(state);
		self.build_header(&state.columns);
		self.body = body::build_body(&self.records, &state.columns);
		tracing::debug!(rows = self.body.numbered_set.len(), "built grid body");
		Ok(())
	}

	pub fn header(&self) -> &ColumnHeader {
		&self.header
	}

	pub fn body(&self) -> &RecordSet {
		&self.body
	}

	pub fn paging(&self) -> &PagingSnapshot {
		&self.paging
	}

	fn helpers(&self) -> TemplateHelpers {
		TemplateHelpers {
			options: self.options.clone(),
			paging: self.paging,
			current_sort: self.current_sort.clone(),
			pagers: Arc::clone(&self.pagers),
		}
	}

	/// Returns the CSS class of row `index` (0-based)
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_template::GridRenderer;
	///
	/// let renderer = GridRenderer::new();
	/// assert_eq!(renderer.row_css_class(0), "even");
	/// assert_eq!(renderer.row_css_class(1), "odd");
	/// ```
	pub fn row_css_class(&self, index: usize) -> &str {
		self.options.row_class(index)
	}

	/// Renders the navigation links through the configured pager driver
	pub fn paging_links(&self) -> GridResult<String> {
		self.helpers().paging_links()
	}

	/// Renders the page-size selector through the configured pager driver
	pub fn per_page_selector(&self) -> GridResult<String> {
		self.helpers().per_page_selector()
	}

	/// Formats the results summary
	///
	/// Without `args`, `format` (or `resultsFormat` when `None`) receives the
	/// total record count and the page count.
	pub fn results_summary(&self, format: Option<&str>, args: &[Value]) -> GridResult<String> {
		self.helpers().results_summary(format, args)
	}

	/// HTML-escapes `value` when `convertEntities` is on
	pub fn default_cell_formatter(&self, value: &str) -> String {
		if self.options.convert_entities {
			escape_html(value)
		} else {
			value.to_string()
		}
	}

	/// Template bindings for the current render pass
	///
	/// Holds the paging counters (`currentPage`, `totalRecordsNum`, ...),
	/// `columnSet`, `columnHeader`, `numberedSet` and `recordSet`.
	pub fn bindings(&self) -> GridResult<Context> {
		let mut context = Context::from_serialize(self.paging)?;
		context.insert("columnSet", &self.header.column_set);
		context.insert("columnHeader", &self.header.column_header);
		context.insert("numberedSet", &self.body.numbered_set);
		context.insert("recordSet", &self.body.record_set);
		Ok(context)
	}

	/// Renders the compiled template with the bindings and helper functions
	pub fn flush_output(&mut self) -> GridResult<String> {
		let context = self.bindings()?;
		let helpers = self.helpers();
		let container = self.container_mut()?;
		helpers.register(container.tera_mut());
		let output = container.output(&context)?;
		tracing::debug!(bytes = output.len(), "rendered grid output");
		Ok(output)
	}
}
