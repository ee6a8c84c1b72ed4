//! Data grid with column filters, a global fuzzy filter, multi-column sorting
//! and pagination.
//!
//! This module exposes a generic `Model<R: Row>` plus supporting types:
//! - `Row`: implement for your record type; returns an id and a [`CellValue`](crate::value::CellValue) per column key
//! - `Column`: key, header, declared kind, and the sortable/filterable flags
//! - Submodules: `style` for the rendering styles
//!
//! ## Architecture Overview
//!
//! ### Derivation pipeline
//! The rows a user sees are derived from the row set in a fixed order:
//! 1. **Column filters**: every active column filter must pass (AND)
//! 2. **Global filter**: the best fuzzy score over the filterable columns must
//!    pass the threshold; that score is kept as the row's rank
//! 3. **Sort**: stable, multi-key, missing values lowest
//! 4. **Pagination**: client-local grids slice the page; server-delegated grids
//!    show whatever the source returned for the requested page
//!
//! The pipeline reruns after every change, and the page index is clamped so it
//! never points past the last page.
//!
//! ### Debounced input
//! `input_global_filter`, `input_column_text`, `input_column_min` and
//! `input_column_max` record keystrokes and return a tick command. The filter
//! is applied when the tick comes back through `update` and no newer input
//! arrived in the meantime.
//!
//! ### Server-delegated pagination
//! Page changes return a command yielding [`PageRequestMsg`]. The application
//! fetches that page and hands it back with `set_rows` and `set_page_count`.

mod column;
mod filtering;
mod keys;
mod model;
mod rendering;
mod sorting;
pub mod style;
mod types;


pub use column::{CellRenderer, Column, ColumnKind};
pub use keys::GridKeyMap;
pub use model::Model;
pub use sorting::{SortDirection, SortEntry, SortState};
pub use style::GridStyles;
pub use types::{FilteredRow, HeaderInfo, PageRequestMsg, Row};
