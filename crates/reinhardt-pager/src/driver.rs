//! Pager driver trait and registry

use crate::config::PagerConfig;
use crate::error::{PagerError, Result};
use crate::jumping::JumpingPager;
use crate::sliding::SlidingPager;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// A paging link renderer
///
/// Both methods return HTML fragments ready to be emitted unescaped.
pub trait Pager: Send + Sync {
	/// Renders the navigation links for the configured page
	fn render_paging_links(&self, config: &PagerConfig) -> String;

	/// Renders a `<select>` box switching the page size
	fn render_per_page_selector(&self, config: &PagerConfig) -> String;
}

/// Constructor stored in a [`PagerRegistry`]
pub type PagerFactory = Arc<dyn Fn() -> Box<dyn Pager> + Send + Sync>;

/// Pager drivers keyed by name
///
/// Names are matched case-insensitively.
///
/// # Examples
///
/// ```
/// use reinhardt_pager::PagerRegistry;
///
/// let registry = PagerRegistry::with_defaults();
/// assert!(registry.resolve("jumping").is_ok());
/// assert!(registry.resolve("Elastic").is_err());
/// ```
#[derive(Clone, Default)]
pub struct PagerRegistry {
	drivers: IndexMap<String, PagerFactory>,
}

impl PagerRegistry {
	/// Creates an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry holding the `Sliding` and `Jumping` drivers
	pub fn with_defaults() -> Self {
		let mut registry = Self::new();
		registry.register("Sliding", || Box::new(SlidingPager));
		registry.register("Jumping", || Box::new(JumpingPager));
		registry
	}

	/// Registers a driver, replacing any driver of the same name
	pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
	where
		F: Fn() -> Box<dyn Pager> + Send + Sync + 'static,
	{
		self.drivers
			.insert(name.into().to_ascii_lowercase(), Arc::new(factory));
	}

	/// Instantiates the driver registered under `name`
	pub fn resolve(&self, name: &str) -> Result<Box<dyn Pager>> {
		match self.drivers.get(&name.to_ascii_lowercase()) {
			Some(factory) => Ok(factory()),
			None => {
				tracing::warn!(driver = name, "pager driver not registered");
				Err(PagerError::UnknownDriver {
					name: name.to_string(),
					available: self.names().join(", "),
				})
			}
		}
	}

	/// Returns the registered (lowercased) driver names
	pub fn names(&self) -> Vec<&str> {
		self.drivers.keys().map(String::as_str).collect()
	}
}

impl fmt::Debug for PagerRegistry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PagerRegistry")
			.field("drivers", &self.names())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::config::PagerOptions;
	use rstest::rstest;

	struct FixedPager;

	impl Pager for FixedPager {
		fn render_paging_links(&self, config: &PagerConfig) -> String {
			format!("links:{}", config.current_page)
		}

		fn render_per_page_selector(&self, config: &PagerConfig) -> String {
			format!("select:{}", config.per_page)
		}
	}

	#[rstest]
	fn test_defaults_registered() {
		let registry = PagerRegistry::with_defaults();
		assert_eq!(registry.names(), vec!["sliding", "jumping"]);
	}

	#[rstest]
	#[case("Sliding")]
	#[case("SLIDING")]
	#[case("sliding")]
	fn test_resolve_is_case_insensitive(#[case] name: &str) {
		assert!(PagerRegistry::with_defaults().resolve(name).is_ok());
	}

	#[rstest]
	fn test_resolve_unknown() {
		let registry = PagerRegistry::with_defaults();
		let error = registry.resolve("Elastic").err().unwrap();
		assert_eq!(
			error,
			PagerError::UnknownDriver {
				name: "Elastic".to_string(),
				available: "sliding, jumping".to_string(),
			}
		);
	}

	#[rstest]
	fn test_register_custom_driver() {
		let mut registry = PagerRegistry::new();
		registry.register("Fixed", || Box::new(FixedPager));

		let pager = registry.resolve("fixed").unwrap();
		let config = PagerConfig::new(PagerOptions::default(), 3, 20, 100, "/");
		assert_eq!(pager.render_paging_links(&config), "links:3");
		assert_eq!(pager.render_per_page_selector(&config), "select:20");
	}
}
