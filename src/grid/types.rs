//! Core types for grid components.
//!
//! - [`Row`]: implemented by the records a grid displays
//! - [`FilteredRow`]: a row that survived filtering, with its global match rank
//! - [`HeaderInfo`]: what a header cell needs to draw sort and filter affordances
//! - [`PageRequestMsg`]: emitted when a server-delegated grid needs another page

use super::sorting::SortDirection;
use crate::paginator::PageRequest;
use crate::value::CellValue;
use std::fmt::Debug;

/// A record shown by the grid.
///
/// Rows are owned by the data source and replaced wholesale on each fetch; the
/// grid never mutates them.
///
/// # Examples
///
/// ```
/// use bubbletea_datagrid::grid::Row;
/// use bubbletea_datagrid::value::CellValue;
///
/// #[derive(Clone)]
/// struct Product {
///     id: u32,
///     name: String,
///     price: f64,
/// }
///
/// impl Row for Product {
///     type Id = u32;
///
///     fn id(&self) -> u32 {
///         self.id
///     }
///
///     fn value(&self, key: &str) -> CellValue {
///         match key {
///             "id" => self.id.into(),
///             "name" => self.name.as_str().into(),
///             "price" => self.price.into(),
///             _ => CellValue::Empty,
///         }
///     }
/// }
/// ```
pub trait Row: Clone {
    /// Identity type; unique within one row set.
    type Id: Clone + PartialEq + Debug;

    /// The row's identity.
    fn id(&self) -> Self::Id;

    /// The value of the column `key`. Unknown keys return [`CellValue::Empty`].
    fn value(&self, key: &str) -> CellValue;
}

/// A row that passed every active filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilteredRow {
    /// Position of the row in the grid's row set.
    pub index: usize,
    /// Best global fuzzy score across filterable columns; `None` without a global filter.
    pub rank: Option<i64>,
}

/// Header metadata for one visible column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Column key.
    pub key: String,
    /// Header label.
    pub header: String,
    /// Current sort direction, for the arrow icon.
    pub sort: Option<SortDirection>,
    /// Whether sorting is offered.
    pub sortable: bool,
    /// Whether filtering is offered.
    pub filterable: bool,
    /// Whether a column filter is active.
    pub filtered: bool,
    /// Whether this is the selected column.
    pub selected: bool,
}

/// Sent by a server-delegated grid after its page index or size changed.
///
/// The application answers by fetching the page and calling
/// [`super::Model::set_rows`] and [`super::Model::set_page_count`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequestMsg {
    /// Id of the grid that wants the page.
    pub grid_id: i64,
    /// The page to fetch.
    pub request: PageRequest,
}
