#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-datagrid/")]

//! # bubbletea-datagrid
//!
//! A data grid component for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: per-column filters, a global fuzzy filter, multi-column
//! sorting, column visibility and pagination over an in-memory row set or a
//! server that serves one page at a time.
//!
//! ## Overview
//!
//! The grid follows the Elm Architecture like the rest of the bubbletea
//! ecosystem. User intents (typing in a filter box, clicking a header, paging)
//! are methods on [`grid::Model`] or key presses routed through
//! [`grid::Model::update`]; the rows to display are derived eagerly after each
//! change and rendered by [`grid::Model::view`].
//!
//! ## Modules
//!
//! - [`grid`]: the grid model, columns, sorting, rendering
//! - [`filter`]: filter values and the evaluators that apply them
//! - [`debounce`]: settles bursts of keystrokes into one filter update
//! - [`paginator`]: page index, page size and server page requests
//! - [`value`]: typed cell values
//! - [`config`]: grid configuration
//! - [`key`]: key bindings and help
//! - [`error`]: the crate error type
//!
//! ## Quick Start
//!
//! ```rust
//! use bubbletea_datagrid::prelude::*;
//!
//! #[derive(Clone)]
//! struct Product {
//!     id: u32,
//!     name: &'static str,
//!     price: f64,
//! }
//!
//! impl Row for Product {
//!     type Id = u32;
//!
//!     fn id(&self) -> u32 {
//!         self.id
//!     }
//!
//!     fn value(&self, key: &str) -> CellValue {
//!         match key {
//!             "name" => self.name.into(),
//!             "price" => self.price.into(),
//!             _ => CellValue::Empty,
//!         }
//!     }
//! }
//!
//! let columns = vec![Column::text("name", "NAME"), Column::numeric("price", "PRICE")];
//! let mut grid = DataGrid::new(columns, GridConfig::default())
//!     .unwrap()
//!     .with_rows(vec![
//!         Product { id: 1, name: "Mug", price: 8.0 },
//!         Product { id: 2, name: "Lamp", price: 35.0 },
//!     ]);
//!
//! grid.toggle_sort("price").unwrap();
//! grid.toggle_sort("price").unwrap();
//! assert_eq!(grid.visible_rows()[0].name, "Lamp");
//! println!("{}", grid.view());
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade and never
//! installs a logger. Pipeline recomputation and page changes log at `debug`,
//! dropped debounce ticks at `trace`, snapped page sizes at `warn`.

pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod grid;
pub mod key;
pub mod paginator;
pub mod value;

pub use config::GridConfig;
pub use error::{GridError, Result};
pub use grid::Model as DataGrid;
pub use grid::{Column, ColumnKind, Row};
pub use paginator::Model as Paginator;
pub use value::CellValue;

/// Commonly used types in one import.
///
/// ```rust
/// use bubbletea_datagrid::prelude::*;
///
/// let config = GridConfig::default().with_page_size(50);
/// assert_eq!(config.page_size, 50);
/// ```
pub mod prelude {
    pub use crate::config::GridConfig;
    pub use crate::debounce::DebounceMsg;
    pub use crate::error::{GridError, Result as GridResult};
    pub use crate::filter::{FilterEvaluator, FilterValue, FuzzyEvaluator, RangeTextEvaluator};
    pub use crate::grid::Model as DataGrid;
    pub use crate::grid::{
        CellRenderer, Column, ColumnKind, GridKeyMap, GridStyles, HeaderInfo, PageRequestMsg, Row,
        SortDirection, SortState,
    };
    pub use crate::key::{Binding, KeyMap};
    pub use crate::paginator::{PageRequest, PaginationMode};
    pub use crate::value::CellValue;
}
