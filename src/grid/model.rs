//! The grid model: state, user intents and message handling.

use super::column::Column;
use super::keys::GridKeyMap;
use super::sorting::{SortDirection, SortState};
use super::style::GridStyles;
use super::types::{FilteredRow, HeaderInfo, PageRequestMsg, Row};
use crate::config::GridConfig;
use crate::debounce::{self, DebounceMsg};
use crate::error::{GridError, Result};
use crate::filter::{FilterEvaluator, FilterValue, FuzzyEvaluator, RangeTextEvaluator};
use crate::key;
use crate::paginator::{self, PaginationMode};
use bubbletea_rs::{Cmd, KeyMsg, Msg};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// A sortable, filterable, paginated grid over rows of type `R`.
///
/// The grid derives the rows to display from the row set in a fixed order:
/// column filters, then the global fuzzy filter, then sorting, then
/// pagination. Derived state is recomputed eagerly after every change, so
/// reads are cheap.
///
/// # Examples
///
/// ```
/// use bubbletea_datagrid::config::GridConfig;
/// use bubbletea_datagrid::filter::FilterValue;
/// use bubbletea_datagrid::grid::{Column, Model, Row};
/// use bubbletea_datagrid::value::CellValue;
///
/// #[derive(Clone)]
/// struct Order { id: u32, name: &'static str, cost: f64 }
///
/// impl Row for Order {
///     type Id = u32;
///     fn id(&self) -> u32 { self.id }
///     fn value(&self, key: &str) -> CellValue {
///         match key {
///             "name" => self.name.into(),
///             "cost" => self.cost.into(),
///             _ => CellValue::Empty,
///         }
///     }
/// }
///
/// let columns = vec![Column::text("name", "NAME"), Column::numeric("cost", "COST")];
/// let mut grid = Model::new(columns, GridConfig::default())
///     .unwrap()
///     .with_rows(vec![
///         Order { id: 1, name: "Alice", cost: 10.0 },
///         Order { id: 2, name: "Bob", cost: 20.0 },
///         Order { id: 3, name: "Carol", cost: 30.0 },
///     ]);
///
/// grid.set_column_filter("cost", FilterValue::range(Some(15.0), Some(25.0))).unwrap();
/// let ids: Vec<u32> = grid.visible_rows().iter().map(|r| r.id()).collect();
/// assert_eq!(ids, vec![2]);
/// ```
#[derive(Debug, Clone)]
pub struct Model<R: Row> {
    pub(super) id: i64,
    pub(super) columns: Vec<Column>,
    pub(super) rows: Vec<R>,
    pub(super) config: GridConfig,

    pub(super) sort: SortState,
    pub(super) column_filters: BTreeMap<String, FilterValue>,
    pub(super) global_filter: String,
    pub(super) visibility: HashMap<String, bool>,
    pub(super) selected_column: Option<String>,
    pub(super) paginator: paginator::Model,

    pub(super) column_evaluator: Arc<dyn FilterEvaluator>,
    pub(super) global_evaluator: Arc<dyn FilterEvaluator>,

    global_input: debounce::Model<String>,
    text_inputs: HashMap<String, debounce::Model<String>>,
    range_inputs: HashMap<String, debounce::Model<(String, String)>>,

    /// Rows passing all filters, in display order, before pagination.
    pub(super) filtered: Vec<FilteredRow>,

    /// Key bindings for column-level intents.
    pub keymap: GridKeyMap,
    /// Styles used by [`Model::view`].
    pub styles: GridStyles,
}

impl<R: Row> Model<R> {
    /// Creates an empty grid over `columns`.
    ///
    /// Fails if the column list is empty, a key repeats, or the configuration
    /// is invalid.
    pub fn new(columns: Vec<Column>, config: GridConfig) -> Result<Self> {
        config.validate()?;
        if columns.is_empty() {
            return Err(GridError::NoColumns);
        }
        let mut seen = HashSet::new();
        for column in &columns {
            if !seen.insert(column.key.as_str()) {
                return Err(GridError::DuplicateColumn(column.key.clone()));
            }
        }

        let paginator = paginator::Model::new(config.pagination).with_per_page(config.page_size);
        let column_evaluator: Arc<dyn FilterEvaluator> =
            Arc::new(RangeTextEvaluator::new().with_case_sensitive(config.case_sensitive_text));
        let global_evaluator: Arc<dyn FilterEvaluator> =
            Arc::new(FuzzyEvaluator::new(config.fuzzy_threshold));

        let mut grid = Self {
            id: next_id(),
            columns,
            rows: Vec::new(),
            global_input: debounce::Model::new(String::new(), config.debounce),
            config,
            sort: SortState::new(),
            column_filters: BTreeMap::new(),
            global_filter: String::new(),
            visibility: HashMap::new(),
            selected_column: None,
            paginator,
            column_evaluator,
            global_evaluator,
            text_inputs: HashMap::new(),
            range_inputs: HashMap::new(),
            filtered: Vec::new(),
            keymap: GridKeyMap::default(),
            styles: GridStyles::default(),
        };
        grid.refresh();
        Ok(grid)
    }

    /// Sets the initial rows (builder pattern).
    pub fn with_rows(mut self, rows: Vec<R>) -> Self {
        self.set_rows(rows);
        self
    }

    /// Replaces the default per-column evaluator (builder pattern).
    pub fn with_column_evaluator(mut self, evaluator: Arc<dyn FilterEvaluator>) -> Self {
        self.column_evaluator = evaluator;
        self.refresh();
        self
    }

    /// Replaces the global filter evaluator (builder pattern).
    pub fn with_global_evaluator(mut self, evaluator: Arc<dyn FilterEvaluator>) -> Self {
        self.global_evaluator = evaluator;
        self.refresh();
        self
    }

    /// Unique id of this grid, carried by its [`PageRequestMsg`]s.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// The configuration the grid was built with.
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// All columns in declaration order, visible or not.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by key.
    pub fn column(&self, key: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.key == key)
    }

    pub(super) fn require_column(&self, key: &str) -> Result<&Column> {
        self.column(key)
            .ok_or_else(|| GridError::UnknownColumn(key.to_string()))
    }

    // ---- rows ----

    /// Replaces the row set, as after a fetch completes.
    pub fn set_rows(&mut self, rows: Vec<R>) {
        self.rows = rows;
        self.refresh();
    }

    /// The full row set.
    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Finds a row by id.
    pub fn row_by_id(&self, id: &R::Id) -> Option<&R> {
        self.rows.iter().find(|r| &r.id() == id)
    }

    // ---- sorting ----

    /// The current sort state.
    pub fn sort_state(&self) -> &SortState {
        &self.sort
    }

    /// Cycles `key` through unsorted, ascending and descending, replacing other sort keys.
    ///
    /// Non-sortable columns are left alone.
    pub fn toggle_sort(&mut self, key: &str) -> Result<()> {
        self.toggle_sort_with(key, false)
    }

    /// Like [`toggle_sort`](Self::toggle_sort) but keeps other sort keys.
    pub fn toggle_sort_multi(&mut self, key: &str) -> Result<()> {
        self.toggle_sort_with(key, true)
    }

    fn toggle_sort_with(&mut self, key: &str, multi: bool) -> Result<()> {
        if !self.require_column(key)?.sortable {
            return Ok(());
        }
        self.sort.toggle(key, multi);
        self.refresh();
        Ok(())
    }

    /// Replaces the whole sort state.
    pub fn set_sort_state(&mut self, sort: SortState) {
        self.sort = sort;
        self.refresh();
    }

    /// Removes every sort key.
    pub fn clear_sort(&mut self) {
        self.sort.clear();
        self.refresh();
    }

    /// Sort direction of `key`, for the header arrow.
    pub fn sort_direction(&self, key: &str) -> Option<SortDirection> {
        self.sort.direction(key)
    }

    // ---- column filters ----

    /// Sets the filter of one column. Unconstrained filters remove it.
    ///
    /// Non-filterable columns are left alone.
    pub fn set_column_filter(&mut self, key: &str, filter: FilterValue) -> Result<()> {
        if !self.require_column(key)?.filterable {
            return Ok(());
        }
        self.store_filter(key.to_string(), filter);
        self.refresh();
        Ok(())
    }

    /// Removes the filter of one column.
    pub fn clear_column_filter(&mut self, key: &str) -> Result<()> {
        self.require_column(key)?;
        if let Some(input) = self.text_inputs.get_mut(key) {
            input.reset(String::new());
        }
        if let Some(input) = self.range_inputs.get_mut(key) {
            input.reset((String::new(), String::new()));
        }
        if self.column_filters.remove(key).is_some() {
            self.refresh();
        }
        Ok(())
    }

    /// The active filter of a column.
    pub fn column_filter(&self, key: &str) -> Option<&FilterValue> {
        self.column_filters.get(key)
    }

    /// All active column filters.
    pub fn column_filters(&self) -> &BTreeMap<String, FilterValue> {
        &self.column_filters
    }

    // ---- global filter ----

    /// Sets the global fuzzy filter text immediately.
    pub fn set_global_filter(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.global_input.reset(text.clone());
        if text != self.global_filter {
            self.global_filter = text;
            self.refresh();
        }
    }

    /// The applied global filter text.
    pub fn global_filter(&self) -> &str {
        &self.global_filter
    }

    /// Clears every column filter and the global filter.
    pub fn clear_filters(&mut self) {
        self.column_filters.clear();
        self.global_filter.clear();
        self.global_input.reset(String::new());
        for input in self.text_inputs.values_mut() {
            input.reset(String::new());
        }
        for input in self.range_inputs.values_mut() {
            input.reset((String::new(), String::new()));
        }
        self.refresh();
    }

    // ---- debounced input ----

    /// Records a keystroke in the global search box.
    ///
    /// The filter is applied once the returned command's tick reaches
    /// [`update`](Self::update) without newer input in between.
    pub fn input_global_filter(&mut self, text: impl Into<String>) -> Cmd {
        self.global_input.set(text.into())
    }

    /// What the global search box currently shows.
    pub fn global_filter_input(&self) -> &str {
        self.global_input
            .pending()
            .unwrap_or_else(|| self.global_input.value())
    }

    /// Records a keystroke in a column's text filter box.
    pub fn input_column_text(&mut self, key: &str, text: impl Into<String>) -> Result<Cmd> {
        self.require_column(key)?;
        let delay = self.config.debounce;
        let input = self
            .text_inputs
            .entry(key.to_string())
            .or_insert_with(|| debounce::Model::new(String::new(), delay));
        Ok(input.set(text.into()))
    }

    /// What a column's text filter box currently shows.
    pub fn column_text_input(&self, key: &str) -> &str {
        self.text_inputs
            .get(key)
            .map(|i| i.pending().unwrap_or_else(|| i.value()).as_str())
            .unwrap_or("")
    }

    /// Records a keystroke in a column's minimum box.
    pub fn input_column_min(&mut self, key: &str, raw: impl Into<String>) -> Result<Cmd> {
        let raw = raw.into();
        self.input_column_range(key, |range| range.0 = raw)
    }

    /// Records a keystroke in a column's maximum box.
    pub fn input_column_max(&mut self, key: &str, raw: impl Into<String>) -> Result<Cmd> {
        let raw = raw.into();
        self.input_column_range(key, |range| range.1 = raw)
    }

    fn input_column_range(
        &mut self,
        key: &str,
        edit: impl FnOnce(&mut (String, String)),
    ) -> Result<Cmd> {
        self.require_column(key)?;
        let delay = self.config.debounce;
        let input = self
            .range_inputs
            .entry(key.to_string())
            .or_insert_with(|| debounce::Model::new((String::new(), String::new()), delay));
        let mut next = input.pending().unwrap_or_else(|| input.value()).clone();
        edit(&mut next);
        Ok(input.set(next))
    }

    /// What a column's min and max boxes currently show.
    pub fn column_range_input(&self, key: &str) -> (&str, &str) {
        self.range_inputs
            .get(key)
            .map(|i| {
                let (min, max) = i.pending().unwrap_or_else(|| i.value());
                (min.as_str(), max.as_str())
            })
            .unwrap_or(("", ""))
    }

    /// Returns true while any filter input is waiting for its delay.
    pub fn has_pending_input(&self) -> bool {
        self.global_input.is_pending()
            || self.text_inputs.values().any(|i| i.is_pending())
            || self.range_inputs.values().any(|i| i.is_pending())
    }

    // Routes a debounce tick to the input it belongs to and applies the
    // settled value. Returns true if any filter changed.
    fn settle_input(&mut self, msg: &Msg) -> bool {
        if self.global_input.update(msg) {
            self.global_filter = self.global_input.value().clone();
            return true;
        }

        let settled_text = self
            .text_inputs
            .iter_mut()
            .find_map(|(key, input)| input.update(msg).then(|| (key.clone(), input.value().clone())));
        if let Some((key, text)) = settled_text {
            self.store_filter(key, FilterValue::Text(text));
            return true;
        }

        let settled_range = self.range_inputs.iter_mut().find_map(|(key, input)| {
            input.update(msg).then(|| {
                let (min, max) = input.value();
                (key.clone(), FilterValue::range_from_input(min, max))
            })
        });
        if let Some((key, range)) = settled_range {
            self.store_filter(key, range);
            return true;
        }

        false
    }

    /// Applies every pending filter input now, as when the user presses enter.
    pub fn flush_inputs(&mut self) {
        let mut changed = false;
        if self.global_input.flush() {
            self.global_filter = self.global_input.value().clone();
            changed = true;
        }

        let mut settled: Vec<(String, FilterValue)> = self
            .text_inputs
            .iter_mut()
            .filter_map(|(key, input)| {
                input
                    .flush()
                    .then(|| (key.clone(), FilterValue::Text(input.value().clone())))
            })
            .collect();
        settled.extend(self.range_inputs.iter_mut().filter_map(|(key, input)| {
            input.flush().then(|| {
                let (min, max) = input.value();
                (key.clone(), FilterValue::range_from_input(min, max))
            })
        }));

        changed |= !settled.is_empty();
        for (key, filter) in settled {
            self.store_filter(key, filter);
        }
        if changed {
            self.refresh();
        }
    }

    // Filters that cannot exclude a row of the column are removed rather than
    // stored, so the header never marks a column that is not narrowed.
    fn store_filter(&mut self, key: String, filter: FilterValue) {
        let Some(column) = self.column(&key).filter(|c| c.filterable) else {
            return;
        };
        let inert = match column.evaluator() {
            Some(_) => filter.is_unconstrained(),
            None => !filter.constrains(column.kind.is_numeric()),
        };
        if inert {
            self.column_filters.remove(&key);
        } else {
            self.column_filters.insert(key, filter);
        }
    }

    // ---- visibility ----

    /// Whether a column is rendered. Columns are visible unless hidden.
    pub fn is_column_visible(&self, key: &str) -> bool {
        self.visibility.get(key).copied().unwrap_or(true)
    }

    /// Shows or hides a column. Filtering and sorting are unaffected.
    pub fn set_column_visible(&mut self, key: &str, visible: bool) -> Result<()> {
        self.require_column(key)?;
        self.visibility.insert(key.to_string(), visible);
        Ok(())
    }

    /// Flips a column's visibility.
    pub fn toggle_column_visibility(&mut self, key: &str) -> Result<()> {
        let visible = self.is_column_visible(key);
        self.set_column_visible(key, !visible)
    }

    /// Hides every column when all are visible, otherwise shows every column.
    ///
    /// Hiding every column also clears the selection.
    pub fn toggle_all_columns_visibility(&mut self) {
        let all_visible = self.columns.iter().all(|c| self.is_column_visible(&c.key));
        for column in &self.columns {
            self.visibility.insert(column.key.clone(), !all_visible);
        }
        if all_visible {
            self.selected_column = None;
        }
    }

    /// Visible columns in declaration order.
    pub fn visible_columns(&self) -> Vec<&Column> {
        self.columns
            .iter()
            .filter(|c| self.is_column_visible(&c.key))
            .collect()
    }

    /// Columns whose header contains `query`, ignoring case.
    pub fn search_columns(&self, query: &str) -> Vec<&Column> {
        let query = query.to_lowercase();
        self.columns
            .iter()
            .filter(|c| c.header.to_lowercase().contains(&query))
            .collect()
    }

    // ---- selected column ----

    /// Selects the column that header actions (filter, sort, hide) apply to.
    pub fn select_column(&mut self, key: &str) -> Result<()> {
        self.require_column(key)?;
        self.selected_column = Some(key.to_string());
        Ok(())
    }

    /// The selected column.
    pub fn selected_column(&self) -> Option<&Column> {
        self.selected_column.as_deref().and_then(|k| self.column(k))
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selected_column = None;
    }

    /// Selects the next visible column, wrapping around.
    pub fn select_next_column(&mut self) {
        self.step_selection(1);
    }

    /// Selects the previous visible column, wrapping around.
    pub fn select_prev_column(&mut self) {
        self.step_selection(-1);
    }

    fn step_selection(&mut self, step: isize) {
        let keys: Vec<String> = self.visible_columns().iter().map(|c| c.key.clone()).collect();
        if keys.is_empty() {
            self.selected_column = None;
            return;
        }
        let len = keys.len() as isize;
        let next = match self
            .selected_column
            .as_ref()
            .and_then(|k| keys.iter().position(|v| v == k))
        {
            Some(pos) => (pos as isize + step).rem_euclid(len),
            None if step >= 0 => 0,
            None => len - 1,
        };
        self.selected_column = Some(keys[next as usize].clone());
    }

    // ---- pagination ----

    /// The paginator.
    pub fn paginator(&self) -> &paginator::Model {
        &self.paginator
    }

    /// Zero-based current page.
    pub fn page_index(&self) -> usize {
        self.paginator.page()
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.paginator.per_page()
    }

    /// Number of pages; `None` while a server-delegated source has not reported it.
    pub fn page_count(&self) -> Option<usize> {
        self.paginator.page_count()
    }

    /// Whether a previous page exists.
    pub fn can_prev_page(&self) -> bool {
        self.paginator.can_prev_page()
    }

    /// Whether a next page exists.
    pub fn can_next_page(&self) -> bool {
        self.paginator.can_next_page()
    }

    /// Moves to the next page. Server-delegated grids return the fetch request command.
    pub fn next_page(&mut self) -> Option<Cmd> {
        let changed = self.paginator.next_page();
        self.page_changed(changed)
    }

    /// Moves to the previous page.
    pub fn prev_page(&mut self) -> Option<Cmd> {
        let changed = self.paginator.prev_page();
        self.page_changed(changed)
    }

    /// Moves to the first page.
    pub fn first_page(&mut self) -> Option<Cmd> {
        let changed = self.paginator.first_page();
        self.page_changed(changed)
    }

    /// Moves to the last page.
    pub fn last_page(&mut self) -> Option<Cmd> {
        let changed = self.paginator.last_page();
        self.page_changed(changed)
    }

    /// Moves to page `index`, clamped to the last page.
    pub fn goto_page(&mut self, index: usize) -> Option<Cmd> {
        let changed = self.paginator.goto_page(index);
        self.page_changed(changed)
    }

    /// Moves to a 1-based page number typed by the user.
    pub fn goto_page_input(&mut self, input: &str) -> Option<Cmd> {
        let changed = self.paginator.goto_page_input(input);
        self.page_changed(changed)
    }

    /// Changes the page size, keeping the first row of the current page in view.
    pub fn set_page_size(&mut self, size: usize) -> Option<Cmd> {
        let changed = self.paginator.set_page_size(size);
        self.page_changed(changed)
    }

    /// Records the page count reported by a server-delegated source.
    ///
    /// If the current page no longer exists it is clamped to the last page,
    /// and the returned command requests that page.
    pub fn set_page_count(&mut self, count: Option<usize>) -> Option<Cmd> {
        let changed = self.paginator.set_page_count(count);
        self.page_changed(changed)
    }

    fn page_changed(&self, changed: bool) -> Option<Cmd> {
        if !changed {
            return None;
        }
        let request = self.paginator.page_request();
        log::debug!(
            "grid {}: page {} (size {})",
            self.id,
            request.page_index,
            request.page_size
        );
        if self.paginator.mode() != PaginationMode::ServerDelegated {
            return None;
        }
        let msg = PageRequestMsg {
            grid_id: self.id,
            request,
        };
        Some(Box::pin(async move { Some(Box::new(msg) as Msg) }))
    }

    // ---- derived rows ----

    /// Number of rows passing the filters, across all pages.
    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Rows passing the filters in display order, across all pages.
    pub fn filtered_rows(&self) -> Vec<&R> {
        self.filtered.iter().map(|f| &self.rows[f.index]).collect()
    }

    /// Filter results of the current page, with their global match ranks.
    pub fn visible_entries(&self) -> &[FilteredRow] {
        match self.paginator.mode() {
            PaginationMode::ClientLocal => {
                let (start, end) = self.paginator.get_slice_bounds(self.filtered.len());
                &self.filtered[start..end]
            }
            PaginationMode::ServerDelegated => &self.filtered,
        }
    }

    /// Rows of the current page in display order.
    pub fn visible_rows(&self) -> Vec<&R> {
        self.visible_entries()
            .iter()
            .map(|f| &self.rows[f.index])
            .collect()
    }

    /// Display text of one cell, with the column's renderer applied.
    pub fn cell_text(&self, row: &R, key: &str) -> String {
        match self.column(key) {
            Some(column) => column.render(&row.value(key)),
            None => String::new(),
        }
    }

    /// Header metadata for the visible columns.
    pub fn headers(&self) -> Vec<HeaderInfo> {
        self.visible_columns()
            .into_iter()
            .map(|c| HeaderInfo {
                key: c.key.clone(),
                header: c.header.clone(),
                sort: if c.sortable {
                    self.sort.direction(&c.key)
                } else {
                    None
                },
                sortable: c.sortable,
                filterable: c.filterable,
                filtered: self.column_filters.contains_key(&c.key),
                selected: self.selected_column.as_deref() == Some(c.key.as_str()),
            })
            .collect()
    }

    // ---- lifecycle ----

    /// Handles debounce ticks and key presses.
    ///
    /// Returns a command only when a server-delegated grid changed page.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if msg.downcast_ref::<DebounceMsg>().is_some() {
            if self.settle_input(&msg) {
                self.refresh();
            }
            return None;
        }

        let key_msg = msg.downcast_ref::<KeyMsg>()?;
        if self.handle_column_key(key_msg) {
            return None;
        }
        let changed = self.paginator.update(&msg);
        self.page_changed(changed)
    }

    fn handle_column_key(&mut self, key_msg: &KeyMsg) -> bool {
        let selected = self.selected_column.clone();
        if self.keymap.next_column.matches(key_msg) {
            self.select_next_column();
        } else if self.keymap.prev_column.matches(key_msg) {
            self.select_prev_column();
        } else if self.keymap.sort.matches(key_msg) {
            if let Some(key) = selected {
                if let Err(err) = self.toggle_sort(&key) {
                    log::debug!("grid {}: sort key ignored: {}", self.id, err);
                }
            }
        } else if self.keymap.multi_sort.matches(key_msg) {
            if let Some(key) = selected {
                if let Err(err) = self.toggle_sort_multi(&key) {
                    log::debug!("grid {}: sort key ignored: {}", self.id, err);
                }
            }
        } else if self.keymap.hide_column.matches(key_msg) {
            if let Some(key) = selected {
                if let Err(err) = self.set_column_visible(&key, false) {
                    log::debug!("grid {}: hide key ignored: {}", self.id, err);
                }
                self.select_next_column();
            }
        } else if self.keymap.toggle_all_columns.matches(key_msg) {
            self.toggle_all_columns_visibility();
        } else if self.keymap.clear_filters.matches(key_msg) {
            self.clear_filters();
        } else {
            return false;
        }
        true
    }

    /// Cancels pending input and clears the selection. Call when the grid is
    /// removed from the screen; ticks that arrive afterwards change nothing.
    pub fn teardown(&mut self) {
        self.global_input.cancel();
        for input in self.text_inputs.values_mut() {
            input.cancel();
        }
        for input in self.range_inputs.values_mut() {
            input.cancel();
        }
        self.selected_column = None;
    }
}

impl<R: Row> key::KeyMap for Model<R> {
    fn short_help(&self) -> Vec<&key::Binding> {
        let mut bindings = self.paginator.keymap.short_help();
        bindings.extend(self.keymap.short_help());
        bindings
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        let mut groups = self.paginator.keymap.full_help();
        groups.extend(self.keymap.full_help());
        groups
    }
}
