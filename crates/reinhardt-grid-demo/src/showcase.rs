//! Demo examples
//!
//! Each example renders the sample table through one grid template, then
//! wraps the result in `main.html`.

use crate::sample;
use anyhow::Context as _;
use clap::ValueEnum;
use convert_case::{Case, Casing};
use reinhardt_pager::PagerOptionsPatch;
use reinhardt_tables::SortDirection;
use reinhardt_template::{
	GridRenderer, HeaderAttributesPatch, HeaderFormatter, RenderOptionsPatch, TemplateContainer,
};
use std::path::Path;

/// Templates compiled into the binary
pub const BUNDLED_TEMPLATES: [(&str, &str); 8] = [
	("main.html", include_str!("../templates/main.html")),
	("grid_table.html", include_str!("../templates/grid_table.html")),
	("static_list.html", include_str!("../templates/static_list.html")),
	("dynamic_list.html", include_str!("../templates/dynamic_list.html")),
	(
		"custom_results_list.html",
		include_str!("../templates/custom_results_list.html"),
	),
	(
		"custom_results_default_list.html",
		include_str!("../templates/custom_results_default_list.html"),
	),
	(
		"custom_results_noargs_list.html",
		include_str!("../templates/custom_results_noargs_list.html"),
	),
	(
		"custom_results_args_list.html",
		include_str!("../templates/custom_results_args_list.html"),
	),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Example {
	/// List the available examples
	List,
	/// Hand-written table layout
	Static,
	/// Table layout generated from the column set
	Dynamic,
	/// Header labels passed through a title-case formatter
	HeaderFormatter,
	/// Header labels overridden per column
	CustomColumnLabels,
	/// Results summary with a custom format
	CustomResults,
	/// Results summary with the configured format
	FormattedResultsDefault,
	/// Custom format filled with the default values
	FormattedResultsNoArguments,
	/// Custom format filled with explicit values
	FormattedResultsArguments,
}

impl Example {
	/// Every example that renders a grid
	pub const GRIDS: [Example; 8] = [
		Example::Static,
		Example::Dynamic,
		Example::HeaderFormatter,
		Example::CustomColumnLabels,
		Example::CustomResults,
		Example::FormattedResultsDefault,
		Example::FormattedResultsNoArguments,
		Example::FormattedResultsArguments,
	];

	/// Command-line name, such as `header-formatter`
	pub fn name(self) -> String {
		self.to_possible_value()
			.map(|v| v.get_name().to_string())
			.unwrap_or_default()
	}

	/// Human-readable title, such as `Header Formatter`
	pub fn title(self) -> String {
		title_case(&self.name())
	}

	/// Grid template the example renders; `None` for [`Example::List`]
	pub fn template(self) -> Option<&'static str> {
		match self {
			Example::List => None,
			Example::Static | Example::HeaderFormatter | Example::CustomColumnLabels => {
				Some("static_list.html")
			}
			Example::Dynamic => Some("dynamic_list.html"),
			Example::CustomResults => Some("custom_results_list.html"),
			Example::FormattedResultsDefault => Some("custom_results_default_list.html"),
			Example::FormattedResultsNoArguments => Some("custom_results_noargs_list.html"),
			Example::FormattedResultsArguments => Some("custom_results_args_list.html"),
		}
	}

	/// Options this example sets on top of [`base_options`]
	pub fn options(self) -> RenderOptionsPatch {
		let header_attributes = match self {
			Example::HeaderFormatter => HeaderAttributesPatch {
				formatter: Some(HeaderFormatter::new(title_case)),
				..Default::default()
			},
			Example::CustomColumnLabels => HeaderAttributesPatch {
				column_names: Some(
					[
						("name".to_string(), "Name Custom".to_string()),
						("surname".to_string(), "Surname Custom".to_string()),
					]
					.into_iter()
					.collect(),
				),
				..Default::default()
			},
			_ => return RenderOptionsPatch::default(),
		};
		RenderOptionsPatch {
			header_attributes: Some(header_attributes),
			..Default::default()
		}
	}
}

/// Splits a field name into words and capitalizes each one
pub fn title_case(label: &str) -> String {
	label.to_case(Case::Title)
}

fn nav_image(name: &str, file: &str, alt: &str) -> String {
	format!(
		r#"<img name="{}" src="images/{}" border="0" alt="{}">"#,
		name, file, alt
	)
}

/// Options shared by every example: image icons for the pager navigation
pub fn base_options() -> RenderOptionsPatch {
	RenderOptionsPatch {
		pager_options: Some(PagerOptionsPatch {
			prev_img: Some(nav_image("Back", "nav_back_off.gif", "Previous Page")),
			next_img: Some(nav_image("Forward", "nav_forward_off.gif", "Next Page")),
			first_page_text: Some(nav_image("First", "nav_first_off.gif", "First Page")),
			last_page_text: Some(nav_image("Last", "nav_last_off.gif", "Last Page")),
			first_page_pre: Some(String::new()),
			first_page_post: Some(String::new()),
			last_page_pre: Some(String::new()),
			last_page_post: Some(String::new()),
			..Default::default()
		}),
		header_attributes: Some(HeaderAttributesPatch {
			assoc_columns: Some(true),
			..Default::default()
		}),
		..Default::default()
	}
}

/// Paging and sorting request for the sample table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridQuery {
	pub page: usize,
	pub per_page: usize,
	pub order_by: Option<String>,
	pub direction: SortDirection,
}

impl Default for GridQuery {
	fn default() -> Self {
		Self {
			page: 1,
			per_page: 10,
			order_by: None,
			direction: SortDirection::Asc,
		}
	}
}

/// Loads the templates from `dir`, or the bundled ones
pub fn load_templates(dir: Option<&Path>) -> anyhow::Result<TemplateContainer> {
	match dir {
		Some(dir) => {
			let glob = format!("{}/**/*.html", dir.display());
			TemplateContainer::from_glob(&glob)
				.with_context(|| format!("failed to load templates from {}", dir.display()))
		}
		None => Ok(TemplateContainer::from_raw_templates(BUNDLED_TEMPLATES)?),
	}
}

/// Returns the source of a template from `dir`, or the bundled copy
pub fn template_source(dir: Option<&Path>, name: &str) -> anyhow::Result<String> {
	match dir {
		Some(dir) => {
			let path = dir.join(name);
			std::fs::read_to_string(&path)
				.with_context(|| format!("failed to read {}", path.display()))
		}
		None => BUNDLED_TEMPLATES
			.iter()
			.find(|(n, _)| *n == name)
			.map(|(_, source)| source.to_string())
			.with_context(|| format!("no bundled template named {}", name)),
	}
}

/// Text index of the grid examples
pub fn list() -> String {
	Example::GRIDS
		.iter()
		.map(|example| {
			format!(
				"{:<32}{:<32}{}\n",
				example.name(),
				example.title(),
				example.template().unwrap_or_default()
			)
		})
		.collect()
}

/// Renders one grid example wrapped in `main.html`
///
/// `overrides` are applied after the example's own options.
pub fn render(
	example: Example,
	mut container: TemplateContainer,
	query: &GridQuery,
	overrides: Option<RenderOptionsPatch>,
) -> anyhow::Result<String> {
	let template = example
		.template()
		.with_context(|| format!("example {} renders no grid", example.name()))?;

	let mut table = sample::people_table();
	if let Some(field) = &query.order_by {
		table.sort_by(field, query.direction)?;
	}
	table.paginate(query.page, query.per_page)?;

	let mut renderer = GridRenderer::new();
	renderer.set_options(base_options());
	renderer.set_options(example.options());
	if let Some(overrides) = overrides {
		renderer.set_options(overrides);
	}

	container.compile(template)?;
	renderer.set_container(container);
	renderer.render(&table.state())?;
	let datagrid = renderer.flush_output()?;
	tracing::info!(example = %example.name(), template, "rendered grid");

	let container = renderer.container_mut()?;
	container.compile("main.html")?;
	let mut context = tera::Context::new();
	context.insert("title", &example.title());
	context.insert("datagrid", &datagrid);
	Ok(container.output(&context)?)
}
