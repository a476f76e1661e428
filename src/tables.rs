//! Grid state model and in-memory table engine.
//!
//! # Examples
//!
//! ```rust,no_run
//! # #[cfg(feature = "tables")]
//! use reinhardt_grid::tables::{BaseColumn, SimpleTable, SortDirection};
//! ```

#[cfg(feature = "tables")]
pub use reinhardt_tables::*;
