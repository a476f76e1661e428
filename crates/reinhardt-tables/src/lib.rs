//! Grid state model for Reinhardt grid rendering
//!
//! This crate holds the data a grid engine hands to a renderer once per
//! render pass, plus a small in-memory engine that produces it.
//!
//! # Features
//!
//! - **Column Definition**: [`Column`] trait and the closure-backed [`BaseColumn`]
//! - **Sorting**: [`SortDirection`] with toggling and parsing of the `direction` query value
//! - **Paging**: [`PagingSnapshot`] counters derived from page, page size and totals
//! - **Grid State**: [`GridState`], the render-time contract with renderers
//! - **Engine**: [`SimpleTable`], binding rows, sorting and paging in memory
//!
//! # Architecture
//!
//! ```mermaid
//! graph TD
//!     A[SimpleTable] --> B[Columns]
//!     A --> C[Rows]
//!     A --> D[Sort Config]
//!     A --> E[Pagination]
//!     A --> F[GridState]
//!     F --> G[ColumnSpec]
//!     F --> H[PagingSnapshot]
//! ```
//!
//! # Example
//!
//! ```rust
//! use reinhardt_tables::{BaseColumn, SimpleTable, SortDirection};
//!
//! #[derive(Debug)]
//! struct User {
//!     name: String,
//! }
//!
//! let mut table = SimpleTable::with_rows(vec![
//!     User { name: "Bob".to_string() },
//!     User { name: "Alice".to_string() },
//! ]);
//! table.add_column(Box::new(BaseColumn::new("name", "Name", |u: &User| u.name.clone())));
//! table.sort_by("name", SortDirection::Asc).unwrap();
//! table.paginate(1, 10).unwrap();
//!
//! let state = table.state();
//! assert_eq!(state.records, vec![vec!["Alice".to_string()], vec!["Bob".to_string()]]);
//! assert_eq!(state.paging.total_records_num, 2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

pub mod column;
pub mod error;
pub mod paging;
pub mod sorting;
pub mod state;
pub mod table;

// Re-exports for convenience
pub use column::{BaseColumn, Column, ColumnSpec};
pub use error::{Result, TableError};
pub use paging::PagingSnapshot;
pub use sorting::{SortConfig, SortDirection};
pub use state::GridState;
pub use table::{PaginationConfig, SimpleTable};
