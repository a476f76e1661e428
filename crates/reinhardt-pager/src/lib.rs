//! # Reinhardt Pager
//!
//! Paging link drivers for Reinhardt grid rendering.
//!
//! A driver turns paging counters (current page, page size, total items)
//! into navigation HTML and a page-size `<select>` box. Drivers are looked
//! up by name through a [`PagerRegistry`], so renderers only ever see the
//! [`Pager`] trait.
//!
//! ## Drivers
//!
//! - **Sliding**: a window of `delta` pages either side of the current page,
//!   with first/last page links outside the window
//! - **Jumping**: fixed blocks of `delta` pages containing the current page
//!
//! ## Example
//!
//! ```rust
//! use reinhardt_pager::{PagerConfig, PagerOptions, PagerRegistry};
//!
//! let registry = PagerRegistry::with_defaults();
//! let pager = registry.resolve("Sliding").unwrap();
//!
//! let config = PagerConfig::new(PagerOptions::default(), 2, 10, 42, "/users");
//! let html = pager.render_paging_links(&config);
//! assert!(html.contains("<b>2</b>"));
//! assert!(html.contains(r#"href="/users?page=3""#));
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod jumping;
mod links;
pub mod sliding;

pub use config::{PagerConfig, PagerOptions, PagerOptionsPatch, PerPageSelect};
pub use driver::{Pager, PagerFactory, PagerRegistry};
pub use error::{PagerError, Result};
pub use jumping::JumpingPager;
pub use sliding::SlidingPager;
