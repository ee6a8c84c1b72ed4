//! Key bindings for grid interaction.
//!
//! Page navigation keys live on the paginator ([`crate::paginator::PaginatorKeyMap`]);
//! this map covers column-level intents.
//!
//! - **Column selection**: `tab` (next), `shift+tab` (previous)
//! - **Sorting**: `s` (cycle sort on the selected column), `S` (add to multi-sort)
//! - **Visibility**: `x` (hide selected column), `a` (show/hide all)
//! - **Filtering**: `esc` (clear all filters)

use crate::key;
use crossterm::event::KeyCode;

/// Key bindings for column selection, sorting, visibility and filter reset.
#[derive(Debug, Clone)]
pub struct GridKeyMap {
    /// Select the next column.
    pub next_column: key::Binding,
    /// Select the previous column.
    pub prev_column: key::Binding,
    /// Cycle the selected column's sort.
    pub sort: key::Binding,
    /// Cycle the selected column's sort, keeping other sort keys.
    pub multi_sort: key::Binding,
    /// Hide the selected column.
    pub hide_column: key::Binding,
    /// Show all columns, or hide all when all are shown.
    pub toggle_all_columns: key::Binding,
    /// Clear column and global filters.
    pub clear_filters: key::Binding,
}

impl Default for GridKeyMap {
    fn default() -> Self {
        Self {
            next_column: key::Binding::new(vec![KeyCode::Tab]).with_help("tab", "next column"),
            prev_column: key::Binding::new(vec![KeyCode::BackTab])
                .with_help("shift+tab", "prev column"),
            sort: key::Binding::new(vec![KeyCode::Char('s')]).with_help("s", "sort"),
            multi_sort: key::Binding::new(vec![KeyCode::Char('S')]).with_help("S", "add sort"),
            hide_column: key::Binding::new(vec![KeyCode::Char('x')]).with_help("x", "hide column"),
            toggle_all_columns: key::Binding::new(vec![KeyCode::Char('a')])
                .with_help("a", "show/hide all"),
            clear_filters: key::Binding::new(vec![KeyCode::Esc]).with_help("esc", "clear filters"),
        }
    }
}

impl key::KeyMap for GridKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.next_column, &self.sort, &self.clear_filters]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![
            vec![&self.next_column, &self.prev_column],
            vec![&self.sort, &self.multi_sort],
            vec![&self.hide_column, &self.toggle_all_columns, &self.clear_filters],
        ]
    }
}
