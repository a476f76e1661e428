//! Renderer options
//!
//! [`RenderOptions`] holds the full option set with its defaults.
//! [`RenderOptionsPatch`] is a partial set, usually deserialized from a
//! settings file, applied with [`RenderOptions::merge`]. Nested groups
//! (`headerAttributes`, `pagerOptions`) merge field by field, and the maps
//! inside them merge key by key, so overriding one nested value never
//! resets its siblings.
//!
//! ```toml
//! sortingResetsPaging = false
//! resultsFormat = "Showing %s records on %s pages"
//!
//! [headerAttributes.columnNames]
//! surname = "Family name"
//!
//! [pagerOptions]
//! delta = 3
//! ```

use crate::error::GridResult;
use indexmap::IndexMap;
use reinhardt_pager::{PagerOptions, PagerOptionsPatch};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

/// Header label formatter
///
/// Wraps a `label -> label` function; the default returns labels unchanged.
#[derive(Clone)]
pub struct HeaderFormatter(Arc<dyn Fn(&str) -> String + Send + Sync>);

impl HeaderFormatter {
	/// Wraps a formatting function
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&str) -> String + Send + Sync + 'static,
	{
		Self(Arc::new(f))
	}

	/// Returns a formatter leaving labels unchanged
	pub fn identity() -> Self {
		Self::new(str::to_string)
	}

	/// Formats one label
	pub fn format(&self, label: &str) -> String {
		(self.0)(label)
	}
}

impl Default for HeaderFormatter {
	fn default() -> Self {
		Self::identity()
	}
}

impl fmt::Debug for HeaderFormatter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("HeaderFormatter(..)")
	}
}

/// Column header settings
#[derive(Debug, Clone)]
pub struct HeaderAttributes {
	/// Key `columnHeader` by field name instead of position
	pub assoc_columns: bool,
	/// Formatter applied to labels without an override
	pub formatter: HeaderFormatter,
	/// Field name → label overrides
	pub column_names: IndexMap<String, String>,
}

impl Default for HeaderAttributes {
	fn default() -> Self {
		Self {
			assoc_columns: true,
			formatter: HeaderFormatter::identity(),
			column_names: IndexMap::new(),
		}
	}
}

/// Full renderer option set
#[derive(Debug, Clone)]
pub struct RenderOptions {
	/// Path sorting and paging links point at; empty means the current document
	pub self_path: String,
	/// Sorting links go back to page 1
	pub sorting_resets_paging: bool,
	/// Cells are HTML-escaped before they reach the template
	pub convert_entities: bool,
	/// Prefix of the query variables (`orderBy`, `direction`, `page`)
	pub request_prefix: String,
	/// Options handed to the pager driver
	pub pager_options: PagerOptions,
	/// Column header settings
	pub header_attributes: HeaderAttributes,
	/// CSS class of odd rows
	pub odd_row_attribute: String,
	/// CSS class of even rows
	pub even_row_attribute: String,
	/// printf-style results summary format
	pub results_format: String,
}

impl Default for RenderOptions {
	fn default() -> Self {
		Self {
			self_path: String::new(),
			sorting_resets_paging: true,
			convert_entities: true,
			request_prefix: String::new(),
			pager_options: PagerOptions::default(),
			header_attributes: HeaderAttributes::default(),
			odd_row_attribute: "odd".to_string(),
			even_row_attribute: "even".to_string(),
			results_format: "You have %s results in %s pages".to_string(),
		}
	}
}

impl RenderOptions {
	/// Applies a partial option set over these options
	///
	/// # Examples
	///
	/// ```
	/// use reinhardt_template::{HeaderAttributesPatch, RenderOptions, RenderOptionsPatch};
	///
	/// let mut options = RenderOptions::default();
	/// options.merge(RenderOptionsPatch {
	///     header_attributes: Some(HeaderAttributesPatch {
	///         assoc_columns: Some(false),
	///         ..Default::default()
	///     }),
	///     ..Default::default()
	/// });
	///
	/// assert!(!options.header_attributes.assoc_columns);
	/// assert_eq!(options.header_attributes.formatter.format("name"), "name");
	/// ```
	pub fn merge(&mut self, patch: RenderOptionsPatch) {
		macro_rules! replace {
			($($field:ident),* $(,)?) => {
				$(if let Some(value) = patch.$field {
					self.$field = value;
				})*
			};
		}
		replace!(
			self_path,
			sorting_resets_paging,
			convert_entities,
			request_prefix,
			odd_row_attribute,
			even_row_attribute,
			results_format,
		);

		if let Some(pager) = patch.pager_options {
			self.pager_options.merge(pager);
		}
		if let Some(header) = patch.header_attributes {
			self.header_attributes.merge(header);
		}
	}

	/// Returns the CSS class of row `index`; row 0 is even
	pub fn row_class(&self, index: usize) -> &str {
		if index % 2 == 0 {
			&self.even_row_attribute
		} else {
			&self.odd_row_attribute
		}
	}

	/// Returns `name` with the request prefix applied
	pub fn request_var(&self, name: &str) -> String {
		format!("{}{}", self.request_prefix, name)
	}
}

impl HeaderAttributes {
	/// Applies a partial header settings group
	pub fn merge(&mut self, patch: HeaderAttributesPatch) {
		if let Some(assoc_columns) = patch.assoc_columns {
			self.assoc_columns = assoc_columns;
		}
		if let Some(formatter) = patch.formatter {
			self.formatter = formatter;
		}
		if let Some(column_names) = patch.column_names {
			self.column_names.extend(column_names);
		}
	}
}

/// Partial column header settings
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeaderAttributesPatch {
	/// Replaces `assoc_columns`
	pub assoc_columns: Option<bool>,
	/// Replaces the formatter; code-only
	#[serde(skip)]
	pub formatter: Option<HeaderFormatter>,
	/// Merged into `column_names` key by key
	pub column_names: Option<IndexMap<String, String>>,
}

/// Partial renderer option set
///
/// Deserializes from camelCase keys (`selfPath`, `sortingResetsPaging`,
/// `headerAttributes`, `pagerOptions`, ...). Absent keys leave the current
/// values alone.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptionsPatch {
	/// Replaces `self_path`
	pub self_path: Option<String>,
	/// Replaces `sorting_resets_paging`
	pub sorting_resets_paging: Option<bool>,
	/// Replaces `convert_entities`
	pub convert_entities: Option<bool>,
	/// Replaces `request_prefix`
	pub request_prefix: Option<String>,
	/// Merged into `pager_options` field by field
	pub pager_options: Option<PagerOptionsPatch>,
	/// Merged into `header_attributes` field by field
	pub header_attributes: Option<HeaderAttributesPatch>,
	/// Replaces `odd_row_attribute`
	pub odd_row_attribute: Option<String>,
	/// Replaces `even_row_attribute`
	pub even_row_attribute: Option<String>,
	/// Replaces `results_format`
	pub results_format: Option<String>,
}

impl RenderOptionsPatch {
	/// Parses a patch from TOML
	pub fn from_toml_str(source: &str) -> GridResult<Self> {
		Ok(toml::from_str(source)?)
	}

	/// Reads and parses a TOML options file
	pub fn from_toml_file(path: impl AsRef<Path>) -> GridResult<Self> {
		let source = std::fs::read_to_string(path.as_ref())?;
		tracing::debug!(path = %path.as_ref().display(), "loaded render options");
		Self::from_toml_str(&source)
	}

	/// Parses a patch from JSON
	pub fn from_json_str(source: &str) -> GridResult<Self> {
		Ok(serde_json::from_str(source)?)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let options = RenderOptions::default();
		assert_eq!(options.self_path, "");
		assert!(options.sorting_resets_paging);
		assert!(options.convert_entities);
		assert!(options.header_attributes.assoc_columns);
		assert!(options.header_attributes.column_names.is_empty());
		assert_eq!(options.odd_row_attribute, "odd");
		assert_eq!(options.even_row_attribute, "even");
		assert_eq!(options.results_format, "You have %s results in %s pages");
		assert_eq!(options.pager_options.mode, "Sliding");
		assert_eq!(options.pager_options.delta, 5);
	}

	#[rstest]
	fn test_merge_scalar_fields() {
		let mut options = RenderOptions::default();
		options.merge(RenderOptionsPatch {
			self_path: Some("/people".to_string()),
			odd_row_attribute: Some("row-odd".to_string()),
			..Default::default()
		});
		assert_eq!(options.self_path, "/people");
		assert_eq!(options.odd_row_attribute, "row-odd");
		assert_eq!(options.even_row_attribute, "even");
	}

	#[rstest]
	fn test_merge_nested_header_keeps_siblings() {
		let mut options = RenderOptions::default();
		options.merge(RenderOptionsPatch {
			header_attributes: Some(HeaderAttributesPatch {
				formatter: Some(HeaderFormatter::new(|label| label.to_uppercase())),
				column_names: Some(IndexMap::from([(
					"name".to_string(),
					"Name Custom".to_string(),
				)])),
				..Default::default()
			}),
			..Default::default()
		});
		options.merge(RenderOptionsPatch {
			header_attributes: Some(HeaderAttributesPatch {
				column_names: Some(IndexMap::from([(
					"surname".to_string(),
					"Surname Custom".to_string(),
				)])),
				..Default::default()
			}),
			..Default::default()
		});

		let header = &options.header_attributes;
		assert!(header.assoc_columns);
		assert_eq!(header.formatter.format("name"), "NAME");
		assert_eq!(header.column_names.len(), 2);
		assert_eq!(header.column_names["name"], "Name Custom");
		assert_eq!(header.column_names["surname"], "Surname Custom");
	}

	#[rstest]
	fn test_merge_nested_pager_keeps_siblings() {
		let mut options = RenderOptions::default();
		options.merge(RenderOptionsPatch {
			pager_options: Some(PagerOptionsPatch {
				next_img: Some("next".to_string()),
				..Default::default()
			}),
			..Default::default()
		});
		assert_eq!(options.pager_options.next_img, "next");
		assert_eq!(options.pager_options.prev_img, "&lt;&lt;");
		assert_eq!(options.pager_options.delta, 5);
	}

	#[rstest]
	fn test_patch_from_toml() {
		let patch = RenderOptionsPatch::from_toml_str(
			r#"
			sortingResetsPaging = false
			requestPrefix = "dg_"

			[headerAttributes]
			assocColumns = false

			[headerAttributes.columnNames]
			surname = "Family name"

			[pagerOptions]
			mode = "Jumping"
			"#,
		)
		.unwrap();

		let mut options = RenderOptions::default();
		options.merge(patch);
		assert!(!options.sorting_resets_paging);
		assert_eq!(options.request_var("page"), "dg_page");
		assert!(!options.header_attributes.assoc_columns);
		assert_eq!(options.header_attributes.column_names["surname"], "Family name");
		assert_eq!(options.pager_options.mode, "Jumping");
		assert_eq!(options.pager_options.separator, "|");
	}

	#[rstest]
	fn test_patch_from_json() {
		let patch =
			RenderOptionsPatch::from_json_str(r#"{"convertEntities": false, "evenRowAttribute": "zebra"}"#)
				.unwrap();
		assert_eq!(patch.convert_entities, Some(false));
		assert_eq!(patch.even_row_attribute.as_deref(), Some("zebra"));
		assert!(patch.self_path.is_none());
	}

	#[rstest]
	fn test_patch_from_toml_rejects_bad_types() {
		let result = RenderOptionsPatch::from_toml_str("convertEntities = \"yes\"");
		assert!(matches!(result, Err(crate::GridError::Toml(_))));
	}
}
