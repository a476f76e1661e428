//! Template-callable helpers
//!
//! Registered on the container's Tera instance before each render:
//!
//! | Function | Output |
//! |----------|--------|
//! | `getPaging()` | navigation links from the pager driver |
//! | `getPerPageSelectBox()` | page-size `<select>` box |
//! | `getResults(format=?, args=?)` | results summary line |
//! | `getRowCSS(index=n)` | odd/even class of row `n` |
//!
//! ```tera
//! {% for row in recordSet %}
//! <tr class="{{ getRowCSS(index=loop.index0) }}">...</tr>
//! {% endfor %}
//! {{ getPaging() | safe }}
//! ```

use crate::error::GridResult;
use crate::options::RenderOptions;
use crate::summary;
use reinhardt_pager::{PagerConfig, PagerRegistry};
use reinhardt_tables::{PagingSnapshot, SortConfig};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tera::Tera;

/// Renderer state the helpers read from
#[derive(Debug, Clone)]
pub(crate) struct TemplateHelpers {
	pub options: RenderOptions,
	pub paging: PagingSnapshot,
	pub current_sort: Option<SortConfig>,
	pub pagers: Arc<PagerRegistry>,
}

impl TemplateHelpers {
	/// Pager configuration for the current page
	///
	/// The page variable defaults to the prefixed `page`. Links keep the
	/// current sort and page size unless those variables are configured
	/// explicitly.
	pub fn pager_config(&self) -> PagerConfig {
		let mut pager_options = self.options.pager_options.clone();
		if pager_options.url_var.is_none() {
			pager_options.url_var = Some(self.options.request_var("page"));
		}

		if let Some(sort) = &self.current_sort {
			pager_options
				.extra_vars
				.entry(self.options.request_var("orderBy"))
				.or_insert_with(|| sort.field.clone());
			pager_options
				.extra_vars
				.entry(self.options.request_var("direction"))
				.or_insert_with(|| sort.direction.as_str().to_string());
		}
		if self.paging.record_limit > 0 {
			let per_page_var = pager_options.per_page_var.clone();
			pager_options
				.extra_vars
				.entry(per_page_var)
				.or_insert_with(|| self.paging.record_limit.to_string());
		}

		PagerConfig::new(
			pager_options,
			self.paging.current_page,
			self.paging.record_limit,
			self.paging.total_records_num,
			self.options.self_path.clone(),
		)
	}

	pub fn paging_links(&self) -> GridResult<String> {
		let pager = self.pagers.resolve(&self.options.pager_options.mode)?;
		Ok(pager.render_paging_links(&self.pager_config()))
	}

	pub fn per_page_selector(&self) -> GridResult<String> {
		let pager = self.pagers.resolve(&self.options.pager_options.mode)?;
		Ok(pager.render_per_page_selector(&self.pager_config()))
	}

	pub fn results_summary(&self, format: Option<&str>, args: &[Value]) -> GridResult<String> {
		let format = format
			.filter(|f| !f.is_empty())
			.unwrap_or(&self.options.results_format);
		summary::results_summary(
			format,
			args,
			self.paging.total_records_num,
			self.paging.pages_num,
		)
	}

	pub fn row_css_class(&self, index: usize) -> &str {
		self.options.row_class(index)
	}

	/// Registers the helper functions on `tera`
	pub fn register(self, tera: &mut Tera) {
		let helpers = Arc::new(self);

		let h = Arc::clone(&helpers);
		tera.register_function(
			"getPaging",
			move |_: &HashMap<String, Value>| -> tera::Result<Value> {
				h.paging_links().map(Value::String).map_err(to_tera)
			},
		);

		let h = Arc::clone(&helpers);
		tera.register_function(
			"getPerPageSelectBox",
			move |_: &HashMap<String, Value>| -> tera::Result<Value> {
				h.per_page_selector().map(Value::String).map_err(to_tera)
			},
		);

		let h = Arc::clone(&helpers);
		tera.register_function(
			"getResults",
			move |args: &HashMap<String, Value>| -> tera::Result<Value> {
				let format = match args.get("format") {
					None | Some(Value::Null) => None,
					Some(Value::String(format)) => Some(format.as_str()),
					Some(other) => {
						return Err(tera::Error::msg(format!(
							"getResults: `format` must be a string, got {}",
							other
						)));
					}
				};
				let values = match args.get("args") {
					None | Some(Value::Null) => Vec::new(),
					Some(Value::Array(values)) => values.clone(),
					Some(single) => vec![single.clone()],
				};
				h.results_summary(format, &values)
					.map(Value::String)
					.map_err(to_tera)
			},
		);

		tera.register_function(
			"getRowCSS",
			move |args: &HashMap<String, Value>| -> tera::Result<Value> {
				let index = args.get("index").and_then(Value::as_u64).ok_or_else(|| {
					tera::Error::msg("getRowCSS: `index` must be a non-negative integer")
				})?;
				Ok(Value::String(
					helpers.row_css_class(index as usize).to_string(),
				))
			},
		);
	}
}

fn to_tera(error: crate::error::GridError) -> tera::Error {
	tera::Error::msg(error.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use reinhardt_pager::PagerOptionsPatch;
	use reinhardt_tables::SortDirection;
	use rstest::{fixture, rstest};
	use tera::Context;

	fn sample() -> TemplateHelpers {
		TemplateHelpers {
			options: RenderOptions {
				self_path: "/people".to_string(),
				..Default::default()
			},
			paging: PagingSnapshot::compute(2, 5, 18, 5, 2),
			current_sort: Some(SortConfig::new("surname", SortDirection::Desc)),
			pagers: Arc::new(PagerRegistry::with_defaults()),
		}
	}

	#[fixture]
	fn helpers() -> TemplateHelpers {
		sample()
	}

	#[rstest]
	fn test_pager_config(helpers: TemplateHelpers) {
		let config = helpers.pager_config();
		assert_eq!(config.current_page, 2);
		assert_eq!(config.per_page, 5);
		assert_eq!(config.total_items, 18);
		assert_eq!(config.path, "/people");
		assert_eq!(config.url_var(), "page");

		let extra: Vec<(&str, &str)> = config
			.options
			.extra_vars
			.iter()
			.map(|(k, v)| (k.as_str(), v.as_str()))
			.collect();
		assert_eq!(
			extra,
			[("orderBy", "surname"), ("direction", "DESC"), ("setPerPage", "5")]
		);
	}

	#[rstest]
	fn test_pager_config_explicit_vars_win(mut helpers: TemplateHelpers) {
		helpers.options.request_prefix = "dg_".to_string();
		helpers.options.pager_options.merge(PagerOptionsPatch {
			extra_vars: Some([("dg_orderBy".to_string(), "name".to_string())].into_iter().collect()),
			..Default::default()
		});

		let config = helpers.pager_config();
		assert_eq!(config.url_var(), "dg_page");
		assert_eq!(config.options.extra_vars["dg_orderBy"], "name");
		assert_eq!(config.options.extra_vars["dg_direction"], "DESC");
	}

	#[rstest]
	fn test_paging_links(helpers: TemplateHelpers) {
		let html = helpers.paging_links().unwrap();
		assert!(html.contains("<b>2</b>"));
		assert!(html.contains(
			r#"href="/people?orderBy=surname&amp;direction=DESC&amp;setPerPage=5&amp;page=3""#
		));
	}

	#[rstest]
	fn test_unknown_driver(mut helpers: TemplateHelpers) {
		helpers.options.pager_options.mode = "Elastic".to_string();
		let error = helpers.paging_links().unwrap_err();
		assert!(matches!(error, crate::GridError::DependencyResolution(_)));
		assert!(helpers.per_page_selector().is_err());
	}

	#[rstest]
	fn test_results_summary_default_format(helpers: TemplateHelpers) {
		assert_eq!(
			helpers.results_summary(None, &[]).unwrap(),
			"You have 18 results in 4 pages"
		);
		assert_eq!(
			helpers.results_summary(Some(""), &[]).unwrap(),
			"You have 18 results in 4 pages"
		);
	}

	#[rstest]
	fn test_registered_functions(helpers: TemplateHelpers) {
		let mut tera = Tera::default();
		tera.add_raw_template(
			"t.txt",
			concat!(
				"{{ getResults() }}|",
				"{{ getResults(format=\"%s-%s\", args=[1, 2]) }}|",
				"{{ getRowCSS(index=0) }} {{ getRowCSS(index=1) }}",
			),
		)
		.unwrap();
		helpers.register(&mut tera);

		let out = tera.render("t.txt", &Context::new()).unwrap();
		assert_eq!(out, "You have 18 results in 4 pages|1-2|even odd");
	}

	#[rstest]
	fn test_registered_function_errors_fail_render(helpers: TemplateHelpers) {
		let mut tera = Tera::default();
		tera.add_raw_template("t.txt", "{{ getResults(format=\"%s %s %s\", args=[1, 2]) }}")
			.unwrap();
		helpers.register(&mut tera);

		assert!(tera.render("t.txt", &Context::new()).is_err());
	}

	proptest! {
		#[test]
		fn test_row_css_alternates(index in 0usize..10_000) {
			let helpers = sample();
			let expected = if index % 2 == 0 { "even" } else { "odd" };
			prop_assert_eq!(helpers.row_css_class(index), expected);
		}
	}
}
