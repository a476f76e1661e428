//! Tera template container
//!
//! A [`TemplateContainer`] owns the Tera instance a grid renders into and
//! remembers which template is selected for output.
//!
//! # Examples
//!
//! ```rust
//! use reinhardt_template::TemplateContainer;
//! use tera::Context;
//!
//! let mut container =
//!     TemplateContainer::from_raw_templates([("hello.html", "Hello {{ name }}")]).unwrap();
//! container.compile("hello.html").unwrap();
//!
//! let mut context = Context::new();
//! context.insert("name", "grid");
//! assert_eq!(container.output(&context).unwrap(), "Hello grid");
//! ```

use crate::error::{GridError, GridResult};
use crate::escaping::escape_cell;
use tera::{Context, Tera};

/// Tera instance plus the template selected for output
#[derive(Debug)]
pub struct TemplateContainer {
	tera: Tera,
	compiled: Option<String>,
}

impl TemplateContainer {
	/// Wraps an existing Tera instance
	pub fn new(mut tera: Tera) -> Self {
		tera.register_filter("escape_cell", escape_cell);
		Self {
			tera,
			compiled: None,
		}
	}

	/// Loads every template matching a glob such as `templates/**/*.html`
	pub fn from_glob(glob: &str) -> GridResult<Self> {
		let tera = Tera::new(glob)?;
		tracing::debug!(glob, templates = tera.get_template_names().count(), "loaded templates");
		Ok(Self::new(tera))
	}

	/// Builds a container from `(name, source)` pairs
	pub fn from_raw_templates<I, N, S>(templates: I) -> GridResult<Self>
	where
		I: IntoIterator<Item = (N, S)>,
		N: AsRef<str>,
		S: AsRef<str>,
	{
		let mut tera = Tera::default();
		tera.add_raw_templates(templates)?;
		Ok(Self::new(tera))
	}

	/// Selects the template `output` renders
	pub fn compile(&mut self, name: &str) -> GridResult<()> {
		if !self.tera.get_template_names().any(|n| n == name) {
			return Err(GridError::Configuration(format!(
				"template '{}' is not loaded",
				name
			)));
		}
		self.compiled = Some(name.to_string());
		Ok(())
	}

	/// Returns the selected template name
	pub fn compiled(&self) -> Option<&str> {
		self.compiled.as_deref()
	}

	/// Renders the selected template
	pub fn output(&self, context: &Context) -> GridResult<String> {
		let name = self
			.compiled
			.as_deref()
			.ok_or_else(|| GridError::Configuration("no template compiled".to_string()))?;
		Ok(self.tera.render(name, context)?)
	}

	pub fn tera(&self) -> &Tera {
		&self.tera
	}

	/// Mutable access, used to register template functions
	pub fn tera_mut(&mut self) -> &mut Tera {
		&mut self.tera
	}
}
