//! Pagination state for the data grid.
//!
//! The paginator tracks which page of rows is shown and renders the
//! "Page X of Y" footer. It runs in one of two modes, chosen once when it is
//! built:
//!
//! - [`PaginationMode::ClientLocal`]: every row is already loaded. The page
//!   count is derived from the number of filtered rows and the grid slices
//!   the current page out of them.
//! - [`PaginationMode::ServerDelegated`]: only the current page is loaded.
//!   The paginator holds the requested page index and size; the page count is
//!   supplied from outside and never recomputed here.
//!
//! Out-of-range requests are clamped, never rejected.

use crate::key::{self, KeyMap as KeyMapTrait};
use bubbletea_rs::{KeyMsg, Msg};
use crossterm::event::KeyCode;

/// Page sizes offered by the grid footer.
pub const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

/// Page size a grid starts with.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Where page slicing happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaginationMode {
    /// Rows are sliced locally from the full filtered set.
    #[default]
    ClientLocal,
    /// Pages are fetched externally; the page count is an input.
    ServerDelegated,
}

/// The type of pagination to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Type {
    /// Display pagination with numbers (e.g., "Page 1 of 5").
    #[default]
    Arabic,
    /// Display pagination as dots (e.g., "● ○ ○ ○ ○").
    Dots,
}

/// The page a server-delegated grid wants fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page_index: usize,
    /// Rows per page.
    pub page_size: usize,
}

/// Returns the supported page size closest to `requested`, preferring the smaller on ties.
///
/// ```rust
/// use bubbletea_datagrid::paginator::nearest_page_size;
///
/// assert_eq!(nearest_page_size(20), 20);
/// assert_eq!(nearest_page_size(0), 10);
/// assert_eq!(nearest_page_size(35), 20);
/// assert_eq!(nearest_page_size(1000), 100);
/// ```
pub fn nearest_page_size(requested: usize) -> usize {
    PAGE_SIZES
        .iter()
        .copied()
        .min_by_key(|size| size.abs_diff(requested))
        .unwrap_or(DEFAULT_PAGE_SIZE)
}

/// Key bindings for paginator navigation.
#[derive(Debug, Clone)]
pub struct PaginatorKeyMap {
    /// Previous page. Default keys: PageUp, Left Arrow, 'h'.
    pub prev_page: key::Binding,
    /// Next page. Default keys: PageDown, Right Arrow, 'l'.
    pub next_page: key::Binding,
    /// First page. Default keys: Home, 'g'.
    pub first_page: key::Binding,
    /// Last page. Default keys: End, 'G'.
    pub last_page: key::Binding,
}

impl Default for PaginatorKeyMap {
    fn default() -> Self {
        Self {
            prev_page: key::Binding::new(vec![KeyCode::PageUp, KeyCode::Left, KeyCode::Char('h')])
                .with_help("←/h", "prev page"),
            next_page: key::Binding::new(vec![
                KeyCode::PageDown,
                KeyCode::Right,
                KeyCode::Char('l'),
            ])
            .with_help("→/l", "next page"),
            first_page: key::Binding::new(vec![KeyCode::Home, KeyCode::Char('g')])
                .with_help("g/home", "first page"),
            last_page: key::Binding::new(vec![KeyCode::End, KeyCode::Char('G')])
                .with_help("G/end", "last page"),
        }
    }
}

impl KeyMapTrait for PaginatorKeyMap {
    fn short_help(&self) -> Vec<&key::Binding> {
        vec![&self.prev_page, &self.next_page]
    }

    fn full_help(&self) -> Vec<Vec<&key::Binding>> {
        vec![vec![
            &self.prev_page,
            &self.next_page,
            &self.first_page,
            &self.last_page,
        ]]
    }
}

/// Pagination state and its footer rendering.
///
/// # Examples
///
/// ```rust
/// use bubbletea_datagrid::paginator::{Model, PaginationMode};
///
/// let mut paginator = Model::new(PaginationMode::ClientLocal).with_per_page(10);
/// paginator.set_total_items(95);
/// assert_eq!(paginator.page_count(), Some(10));
///
/// paginator.goto_page(42);
/// assert_eq!(paginator.page(), 9);
/// assert_eq!(paginator.get_slice_bounds(95), (90, 95));
/// ```
#[derive(Debug, Clone)]
pub struct Model {
    /// The type of pagination to display (Dots or Arabic).
    pub paginator_type: Type,
    /// The character to use for the active page in Dots mode.
    pub active_dot: String,
    /// The character to use for inactive pages in Dots mode.
    pub inactive_dot: String,
    /// The format string for Arabic mode; the first `%d` is the page, the second the count.
    pub arabic_format: String,
    /// Key bindings.
    pub keymap: PaginatorKeyMap,

    mode: PaginationMode,
    page: usize,
    per_page: usize,
    // Client-local: rows after filtering. Unused when server-delegated.
    total_items: usize,
    // Server-delegated: externally supplied page count.
    external_page_count: Option<usize>,
}

impl Default for Model {
    fn default() -> Self {
        Self::new(PaginationMode::default())
    }
}

impl Model {
    /// Creates a paginator on page 0 with the default page size.
    pub fn new(mode: PaginationMode) -> Self {
        Self {
            paginator_type: Type::default(),
            active_dot: "•".to_string(),
            inactive_dot: "○".to_string(),
            arabic_format: "Page %d of %d".to_string(),
            keymap: PaginatorKeyMap::default(),
            mode,
            page: 0,
            per_page: DEFAULT_PAGE_SIZE,
            total_items: 0,
            external_page_count: None,
        }
    }

    /// Sets the page size (builder pattern). Unsupported sizes snap to the nearest supported one.
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.per_page = nearest_page_size(per_page);
        self
    }

    /// The pagination mode.
    pub fn mode(&self) -> PaginationMode {
        self.mode
    }

    /// Zero-based index of the current page.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Number of pages, or `None` when a server-delegated source has not reported it.
    ///
    /// Client-local mode always has at least one page, even with zero rows.
    pub fn page_count(&self) -> Option<usize> {
        match self.mode {
            PaginationMode::ClientLocal => Some(self.total_items.div_ceil(self.per_page).max(1)),
            PaginationMode::ServerDelegated => self.external_page_count,
        }
    }

    /// The current page index and size.
    pub fn page_request(&self) -> PageRequest {
        PageRequest {
            page_index: self.page,
            page_size: self.per_page,
        }
    }

    fn clamp(&mut self) {
        if let Some(count) = self.page_count() {
            let last = count.saturating_sub(1);
            if self.page > last {
                self.page = last;
            }
        }
    }

    /// Records how many rows the pages are cut from (client-local mode) and clamps the page.
    pub fn set_total_items(&mut self, items: usize) {
        if self.mode == PaginationMode::ServerDelegated {
            return;
        }
        self.total_items = items;
        self.clamp();
    }

    /// Records the page count reported by the external source (server-delegated mode).
    ///
    /// Returns true if the current page no longer existed and was clamped.
    pub fn set_page_count(&mut self, count: Option<usize>) -> bool {
        if self.mode == PaginationMode::ClientLocal {
            return false;
        }
        let before = self.page;
        self.external_page_count = count;
        self.clamp();
        self.page != before
    }

    /// Number of rows on the current page out of `total_items`.
    pub fn items_on_page(&self, total_items: usize) -> usize {
        let (start, end) = self.get_slice_bounds(total_items);
        end - start
    }

    /// Start (inclusive) and end (exclusive) indices of the current page in a
    /// sequence of `length` rows. Both bounds are clamped to `length`.
    pub fn get_slice_bounds(&self, length: usize) -> (usize, usize) {
        let start = self.page.saturating_mul(self.per_page).min(length);
        let end = start.saturating_add(self.per_page).min(length);
        (start, end)
    }

    /// Whether there is a page before the current one.
    pub fn can_prev_page(&self) -> bool {
        self.page > 0
    }

    /// Whether there is a page after the current one. Always true when the
    /// page count is unknown.
    pub fn can_next_page(&self) -> bool {
        match self.page_count() {
            Some(count) => self.page.saturating_add(1) < count,
            None => self.page < usize::MAX,
        }
    }

    /// Returns true on page 0.
    pub fn on_first_page(&self) -> bool {
        self.page == 0
    }

    /// Returns true on the last known page.
    pub fn on_last_page(&self) -> bool {
        !self.can_next_page()
    }

    /// Moves back one page. Returns true if the page changed.
    pub fn prev_page(&mut self) -> bool {
        if !self.can_prev_page() {
            return false;
        }
        self.page -= 1;
        true
    }

    /// Moves forward one page. Returns true if the page changed.
    pub fn next_page(&mut self) -> bool {
        if !self.can_next_page() {
            return false;
        }
        self.page += 1;
        true
    }

    /// Jumps to page 0. Returns true if the page changed.
    pub fn first_page(&mut self) -> bool {
        self.goto_page(0)
    }

    /// Jumps to the last page. No-op while the page count is unknown.
    pub fn last_page(&mut self) -> bool {
        match self.page_count() {
            Some(count) => self.goto_page(count.saturating_sub(1)),
            None => false,
        }
    }

    /// Jumps to `index`, clamped to the last page. Returns true if the page changed.
    pub fn goto_page(&mut self, index: usize) -> bool {
        let before = self.page;
        self.page = index;
        self.clamp();
        self.page != before
    }

    /// Jumps to a 1-based page number typed by the user.
    ///
    /// Empty input goes to the first page; input that is not a number is ignored.
    ///
    /// ```rust
    /// use bubbletea_datagrid::paginator::{Model, PaginationMode};
    ///
    /// let mut p = Model::new(PaginationMode::ClientLocal).with_per_page(10);
    /// p.set_total_items(50);
    /// p.goto_page_input("3");
    /// assert_eq!(p.page(), 2);
    /// p.goto_page_input("three");
    /// assert_eq!(p.page(), 2);
    /// p.goto_page_input("");
    /// assert_eq!(p.page(), 0);
    /// ```
    pub fn goto_page_input(&mut self, input: &str) -> bool {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return self.first_page();
        }
        match trimmed.parse::<usize>() {
            Ok(number) => self.goto_page(number.saturating_sub(1)),
            Err(_) => false,
        }
    }

    /// Changes the page size, keeping the first row of the current page in view.
    ///
    /// Unsupported sizes snap to the nearest entry of [`PAGE_SIZES`]. Returns
    /// true if the size or page changed.
    pub fn set_page_size(&mut self, requested: usize) -> bool {
        let size = nearest_page_size(requested);
        if size != requested {
            log::warn!("page size {} is not offered, using {}", requested, size);
        }
        if size == self.per_page {
            return false;
        }
        let top_row = self.page.saturating_mul(self.per_page);
        self.per_page = size;
        self.page = top_row / size;
        self.clamp();
        true
    }

    /// Handles navigation keys. Returns true if the page changed.
    pub fn update(&mut self, msg: &Msg) -> bool {
        let Some(key_msg) = msg.downcast_ref::<KeyMsg>() else {
            return false;
        };
        if self.keymap.next_page.matches(key_msg) {
            self.next_page()
        } else if self.keymap.prev_page.matches(key_msg) {
            self.prev_page()
        } else if self.keymap.first_page.matches(key_msg) {
            self.first_page()
        } else if self.keymap.last_page.matches(key_msg) {
            self.last_page()
        } else {
            false
        }
    }

    /// Renders the pagination footer.
    ///
    /// ```rust
    /// use bubbletea_datagrid::paginator::{Model, PaginationMode, Type};
    ///
    /// let mut p = Model::new(PaginationMode::ClientLocal).with_per_page(10);
    /// p.set_total_items(50);
    /// assert_eq!(p.view(), "Page 1 of 5");
    ///
    /// p.paginator_type = Type::Dots;
    /// p.goto_page(2);
    /// assert_eq!(p.view(), "○ ○ • ○ ○");
    /// ```
    pub fn view(&self) -> String {
        match (self.paginator_type, self.page_count()) {
            (Type::Dots, Some(count)) => self.dots_view(count),
            _ => self.arabic_view(),
        }
    }

    fn arabic_view(&self) -> String {
        let count = self
            .page_count()
            .map(|c| c.to_string())
            .unwrap_or_else(|| "?".to_string());
        self.arabic_format
            .replacen("%d", &self.page.saturating_add(1).to_string(), 1)
            .replacen("%d", &count, 1)
    }

    fn dots_view(&self, count: usize) -> String {
        (0..count)
            .map(|i| {
                if i == self.page {
                    self.active_dot.as_str()
                } else {
                    self.inactive_dot.as_str()
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn client(total: usize, per_page: usize) -> Model {
        let mut p = Model::new(PaginationMode::ClientLocal).with_per_page(per_page);
        p.set_total_items(total);
        p
    }

    fn key(code: KeyCode) -> Msg {
        Box::new(KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_page_count_is_ceiling_with_minimum_one() {
        assert_eq!(client(0, 10).page_count(), Some(1));
        assert_eq!(client(10, 10).page_count(), Some(1));
        assert_eq!(client(11, 10).page_count(), Some(2));
        assert_eq!(client(95, 10).page_count(), Some(10));
    }

    #[test]
    fn test_goto_clamps_to_last_page() {
        let mut p = client(30, 20);
        assert!(p.goto_page(5));
        assert_eq!(p.page(), 1);
        assert!(!p.goto_page(7));
    }

    #[test]
    fn test_shrinking_total_clamps_page() {
        let mut p = client(100, 10);
        p.goto_page(9);
        p.set_total_items(25);
        assert_eq!(p.page(), 2);
        p.set_total_items(0);
        assert_eq!(p.page(), 0);
    }

    #[test]
    fn test_boundaries_are_noops() {
        let mut p = client(20, 10);
        assert!(!p.prev_page());
        assert!(p.next_page());
        assert!(!p.next_page());
        assert_eq!(p.page(), 1);
        assert!(p.on_last_page());
        assert!(p.first_page());
        assert!(p.on_first_page());
        assert!(p.last_page());
        assert_eq!(p.page(), 1);
    }

    #[test]
    fn test_slice_bounds_last_partial_page() {
        let mut p = client(3, 10);
        assert_eq!(p.get_slice_bounds(3), (0, 3));
        p = client(25, 10);
        p.goto_page(2);
        assert_eq!(p.get_slice_bounds(25), (20, 25));
        assert_eq!(p.items_on_page(25), 5);
    }

    #[test]
    fn test_set_page_size_keeps_top_row_visible() {
        let mut p = client(500, 10);
        p.goto_page(7); // rows 70..80
        assert!(p.set_page_size(50));
        assert_eq!(p.page(), 1); // rows 50..100
        assert!(p.set_page_size(20));
        assert_eq!(p.page(), 2); // rows 40..60
        assert!(!p.set_page_size(20));
    }

    #[test]
    fn test_set_page_size_snaps_unsupported() {
        let mut p = client(500, 20);
        p.set_page_size(99);
        assert_eq!(p.per_page(), 100);
        assert_eq!(Model::new(PaginationMode::ClientLocal).with_per_page(3).per_page(), 10);
    }

    #[test]
    fn test_server_mode_uses_external_count() {
        let mut p = Model::new(PaginationMode::ServerDelegated).with_per_page(10);
        p.set_total_items(5); // ignored
        assert_eq!(p.page_count(), None);
        assert!(p.can_next_page());
        assert!(p.next_page());
        assert!(p.next_page());
        assert!(!p.last_page());
        assert_eq!(p.view(), "Page 3 of ?");

        assert!(p.set_page_count(Some(2)));
        assert_eq!(p.page(), 1);
        assert!(!p.set_page_count(Some(5)));
        assert!(!p.can_next_page());
        assert_eq!(
            p.page_request(),
            PageRequest {
                page_index: 1,
                page_size: 10
            }
        );
    }

    #[test]
    fn test_client_mode_ignores_external_count() {
        let mut p = client(30, 10);
        assert!(!p.set_page_count(Some(100)));
        assert_eq!(p.page_count(), Some(3));
    }

    #[test]
    fn test_huge_page_with_unknown_count_does_not_overflow() {
        let mut p = Model::new(PaginationMode::ServerDelegated).with_per_page(10);
        assert!(p.goto_page_input("18446744073709551615"));
        assert_eq!(p.page(), usize::MAX - 1);
        assert_eq!(p.get_slice_bounds(30), (30, 30));
        assert!(p.set_page_size(20));

        p.goto_page(usize::MAX);
        assert_eq!(p.view(), format!("Page {} of ?", usize::MAX));
        assert!(!p.can_next_page());
        assert!(!p.next_page());
        assert_eq!(p.page(), usize::MAX);

        // Once the source reports its size the page falls back in range.
        assert!(p.set_page_count(Some(4)));
        assert_eq!(p.page(), 3);
        assert_eq!(p.view(), "Page 4 of 4");
    }

    #[test]
    fn test_update_handles_navigation_keys() {
        let mut p = client(50, 10);
        assert!(p.update(&key(KeyCode::Right)));
        assert!(p.update(&key(KeyCode::Char('l'))));
        assert_eq!(p.page(), 2);
        assert!(p.update(&key(KeyCode::End)));
        assert_eq!(p.page(), 4);
        assert!(p.update(&key(KeyCode::Left)));
        assert_eq!(p.page(), 3);
        assert!(p.update(&key(KeyCode::Home)));
        assert_eq!(p.page(), 0);
        assert!(!p.update(&key(KeyCode::Char('z'))));
    }

    #[test]
    fn test_keymap_help() {
        let keymap = PaginatorKeyMap::default();
        assert_eq!(keymap.short_help().len(), 2);
        assert_eq!(keymap.full_help()[0].len(), 4);
    }
}
