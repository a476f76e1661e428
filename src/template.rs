//! Tera rendering adapter for data grids.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "template")]
//! use reinhardt_grid::template::{GridRenderer, RenderOptionsPatch, TemplateContainer};
//! ```

#[cfg(feature = "template")]
pub use reinhardt_template::*;
