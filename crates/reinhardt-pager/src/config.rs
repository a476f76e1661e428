//! Pager configuration
//!
//! [`PagerOptions`] is the static part a renderer is configured with;
//! [`PagerConfig`] adds the counters of the page being rendered.
//! [`PagerOptionsPatch`] carries a partial option set that merges over
//! existing options field by field.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Range of page sizes offered by the per-page selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerPageSelect {
	/// Smallest page size
	pub start: usize,
	/// Largest page size
	pub end: usize,
	/// Increment between sizes
	pub step: usize,
}

impl Default for PerPageSelect {
	fn default() -> Self {
		Self {
			start: 5,
			end: 30,
			step: 5,
		}
	}
}

impl PerPageSelect {
	/// Most page sizes a selector offers
	pub const MAX_SIZES: usize = 100;

	/// Returns the offered page sizes, at most [`Self::MAX_SIZES`] of them
	pub fn sizes(&self) -> Vec<usize> {
		if self.step == 0 || self.start == 0 {
			return Vec::new();
		}
		(self.start..=self.end)
			.step_by(self.step)
			.take(Self::MAX_SIZES)
			.collect()
	}
}

/// Static pager options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PagerOptions {
	/// Driver name looked up in the registry
	pub mode: String,
	/// Pages shown either side of (sliding) or per block around (jumping) the current page
	pub delta: usize,
	/// Separator between page numbers
	pub separator: String,
	/// Content of the "previous page" link (may be HTML)
	pub prev_img: String,
	/// Content of the "next page" link (may be HTML)
	pub next_img: String,
	/// Content of the "first page" link; the page number when unset
	pub first_page_text: Option<String>,
	/// Content of the "last page" link; the page number when unset
	pub last_page_text: Option<String>,
	/// Emitted before the first page link content
	pub first_page_pre: String,
	/// Emitted after the first page link content
	pub first_page_post: String,
	/// Emitted before the last page link content
	pub last_page_pre: String,
	/// Emitted after the last page link content
	pub last_page_post: String,
	/// Emitted before the current page number
	pub cur_page_span_pre: String,
	/// Emitted after the current page number
	pub cur_page_span_post: String,
	/// Query variable carrying the page number; filled in by the renderer when unset
	pub url_var: Option<String>,
	/// Query variable carrying the page size
	pub per_page_var: String,
	/// Extra query variables appended to every link
	pub extra_vars: IndexMap<String, String>,
	/// Query variables never emitted
	pub exclude_vars: Vec<String>,
	/// Sizes offered by the per-page selector
	pub per_page_select: PerPageSelect,
}

impl Default for PagerOptions {
	fn default() -> Self {
		Self {
			mode: "Sliding".to_string(),
			delta: 5,
			separator: "|".to_string(),
			prev_img: "&lt;&lt;".to_string(),
			next_img: "&gt;&gt;".to_string(),
			first_page_text: None,
			last_page_text: None,
			first_page_pre: "[".to_string(),
			first_page_post: "]".to_string(),
			last_page_pre: "[".to_string(),
			last_page_post: "]".to_string(),
			cur_page_span_pre: "<b>".to_string(),
			cur_page_span_post: "</b>".to_string(),
			url_var: None,
			per_page_var: "setPerPage".to_string(),
			extra_vars: IndexMap::new(),
			exclude_vars: Vec::new(),
			per_page_select: PerPageSelect::default(),
		}
	}
}

/// Partial pager options
///
/// Every `Some` field replaces the matching option; `extra_vars` merges key
/// by key so callers can add one variable without dropping the others.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PagerOptionsPatch {
	pub mode: Option<String>,
	pub delta: Option<usize>,
	pub separator: Option<String>,
	pub prev_img: Option<String>,
	pub next_img: Option<String>,
	pub first_page_text: Option<String>,
	pub last_page_text: Option<String>,
	pub first_page_pre: Option<String>,
	pub first_page_post: Option<String>,
	pub last_page_pre: Option<String>,
	pub last_page_post: Option<String>,
	pub cur_page_span_pre: Option<String>,
	pub cur_page_span_post: Option<String>,
	pub url_var: Option<String>,
	pub per_page_var: Option<String>,
	pub extra_vars: Option<IndexMap<String, String>>,
	pub exclude_vars: Option<Vec<String>>,
	pub per_page_select: Option<PerPageSelect>,
}

impl PagerOptions {
	/// Applies a partial option set over these options
	pub fn merge(&mut self, patch: PagerOptionsPatch) {
		macro_rules! replace {
			($($field:ident),* $(,)?) => {
				$(if let Some(value) = patch.$field {
					self.$field = value;
				})*
			};
		}
		replace!(
			mode,
			delta,
			separator,
			prev_img,
			next_img,
			first_page_pre,
			first_page_post,
			last_page_pre,
			last_page_post,
			cur_page_span_pre,
			cur_page_span_post,
			per_page_var,
			exclude_vars,
			per_page_select,
		);

		if patch.first_page_text.is_some() {
			self.first_page_text = patch.first_page_text;
		}
		if patch.last_page_text.is_some() {
			self.last_page_text = patch.last_page_text;
		}
		if patch.url_var.is_some() {
			self.url_var = patch.url_var;
		}
		if let Some(extra_vars) = patch.extra_vars {
			self.extra_vars.extend(extra_vars);
		}
	}
}

/// Options plus the counters of the page being rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagerConfig {
	/// Static options
	pub options: PagerOptions,
	/// Current page (1-indexed)
	pub current_page: usize,
	/// Page size
	pub per_page: usize,
	/// Total number of items
	pub total_items: usize,
	/// Path the links point at
	pub path: String,
}

impl PagerConfig {
	/// Creates a pager config
	pub fn new(
		options: PagerOptions,
		current_page: usize,
		per_page: usize,
		total_items: usize,
		path: impl Into<String>,
	) -> Self {
		Self {
			options,
			current_page,
			per_page,
			total_items,
			path: path.into(),
		}
	}

	/// Returns the total number of pages
	pub fn total_pages(&self) -> usize {
		if self.per_page == 0 {
			usize::from(self.total_items > 0)
		} else {
			self.total_items.div_ceil(self.per_page)
		}
	}

	/// Returns the page query variable, `page` when none is configured
	pub fn url_var(&self) -> &str {
		self.options.url_var.as_deref().unwrap_or("page")
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_per_page_select_sizes() {
		assert_eq!(PerPageSelect::default().sizes(), vec![5, 10, 15, 20, 25, 30]);
		let zero_step = PerPageSelect {
			start: 5,
			end: 30,
			step: 0,
		};
		assert!(zero_step.sizes().is_empty());
	}

	#[rstest]
	fn test_per_page_select_sizes_capped() {
		let select: PerPageSelect =
			serde_json::from_str(r#"{"start": 1, "end": 9000000000000000000, "step": 1}"#).unwrap();
		let sizes = select.sizes();
		assert_eq!(sizes.len(), PerPageSelect::MAX_SIZES);
		assert_eq!(sizes.last(), Some(&PerPageSelect::MAX_SIZES));
	}

	#[rstest]
	fn test_merge_keeps_unset_fields() {
		let mut options = PagerOptions::default();
		options.merge(PagerOptionsPatch {
			delta: Some(2),
			prev_img: Some("<img src=\"back.gif\">".to_string()),
			..Default::default()
		});

		assert_eq!(options.delta, 2);
		assert_eq!(options.prev_img, "<img src=\"back.gif\">");
		assert_eq!(options.mode, "Sliding");
		assert_eq!(options.separator, "|");
		assert_eq!(options.next_img, "&gt;&gt;");
	}

	#[rstest]
	fn test_merge_extra_vars_key_by_key() {
		let mut options = PagerOptions::default();
		options.extra_vars.insert("tab".to_string(), "users".to_string());
		options.merge(PagerOptionsPatch {
			extra_vars: Some(IndexMap::from([("q".to_string(), "smith".to_string())])),
			..Default::default()
		});

		assert_eq!(options.extra_vars.get("tab").map(String::as_str), Some("users"));
		assert_eq!(options.extra_vars.get("q").map(String::as_str), Some("smith"));
	}

	#[rstest]
	fn test_patch_from_json_camel_case() {
		let patch: PagerOptionsPatch =
			serde_json::from_str(r#"{"nextImg": "next", "perPageSelect": {"start": 10, "end": 50, "step": 10}}"#)
				.unwrap();
		assert_eq!(patch.next_img.as_deref(), Some("next"));
		assert_eq!(patch.per_page_select.unwrap().end, 50);
		assert!(patch.mode.is_none());
	}

	#[rstest]
	#[case(42, 10, 5)]
	#[case(40, 10, 4)]
	#[case(0, 10, 0)]
	#[case(7, 0, 1)]
	fn test_total_pages(#[case] total: usize, #[case] per_page: usize, #[case] expected: usize) {
		let config = PagerConfig::new(PagerOptions::default(), 1, per_page, total, "/");
		assert_eq!(config.total_pages(), expected);
	}
}
