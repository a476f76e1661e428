//! Paging link drivers and the per-page selector.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "pager")]
//! use reinhardt_grid::pager::{PagerConfig, PagerRegistry};
//! ```

#[cfg(feature = "pager")]
pub use reinhardt_pager::*;
