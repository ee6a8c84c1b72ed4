//! Sort state and the stable multi-key sort applied after filtering.

use super::column::Column;
use super::types::{FilteredRow, Row};
use crate::value::CellValue;
use std::cmp::Ordering;

/// Sort direction of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortDirection {
    /// Arrow shown in the header.
    pub fn arrow(self) -> &'static str {
        match self {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        }
    }
}

/// One entry of the sort state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortEntry {
    /// Column key.
    pub column_key: String,
    /// Direction.
    pub direction: SortDirection,
}

/// Ordered sort keys; the first entry has the highest priority. Empty means
/// row-set order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortState {
    entries: Vec<SortEntry>,
}

impl SortState {
    /// An empty sort state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in priority order.
    pub fn entries(&self) -> &[SortEntry] {
        &self.entries
    }

    /// Returns true when nothing is sorted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Direction of `key`, if it is sorted.
    pub fn direction(&self, key: &str) -> Option<SortDirection> {
        self.entries
            .iter()
            .find(|e| e.column_key == key)
            .map(|e| e.direction)
    }

    /// Advances `key` through unsorted → ascending → descending → unsorted.
    ///
    /// With `multi == false` the column becomes the only sort key. With
    /// `multi == true` it keeps its priority if already sorted, otherwise it is
    /// appended with the lowest priority.
    ///
    /// ```rust
    /// use bubbletea_datagrid::grid::{SortDirection, SortState};
    ///
    /// let mut s = SortState::new();
    /// s.toggle("cost", false);
    /// assert_eq!(s.direction("cost"), Some(SortDirection::Ascending));
    /// s.toggle("cost", false);
    /// assert_eq!(s.direction("cost"), Some(SortDirection::Descending));
    /// s.toggle("cost", false);
    /// assert!(s.is_empty());
    /// ```
    pub fn toggle(&mut self, key: &str, multi: bool) {
        let next = match self.direction(key) {
            None => Some(SortDirection::Ascending),
            Some(SortDirection::Ascending) => Some(SortDirection::Descending),
            Some(SortDirection::Descending) => None,
        };

        if !multi {
            self.entries.clear();
            if let Some(direction) = next {
                self.entries.push(SortEntry {
                    column_key: key.to_string(),
                    direction,
                });
            }
            return;
        }

        match (self.entries.iter().position(|e| e.column_key == key), next) {
            (Some(pos), Some(direction)) => self.entries[pos].direction = direction,
            (Some(pos), None) => {
                self.entries.remove(pos);
            }
            (None, Some(direction)) => self.entries.push(SortEntry {
                column_key: key.to_string(),
                direction,
            }),
            (None, None) => {}
        }
    }

    /// Sets `key` to `direction`, or removes it with `None`, keeping other entries.
    pub fn set(&mut self, key: &str, direction: Option<SortDirection>) {
        let pos = self.entries.iter().position(|e| e.column_key == key);
        match (pos, direction) {
            (Some(pos), Some(direction)) => self.entries[pos].direction = direction,
            (Some(pos), None) => {
                self.entries.remove(pos);
            }
            (None, Some(direction)) => self.entries.push(SortEntry {
                column_key: key.to_string(),
                direction,
            }),
            (None, None) => {}
        }
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Removes entries for `key`.
    pub fn remove(&mut self, key: &str) {
        self.entries.retain(|e| e.column_key != key);
    }
}

/// Stable-sorts filtered rows by `sort`.
///
/// Entries naming unknown or non-sortable columns are skipped. Rows with equal
/// keys keep their relative order.
pub(super) fn sort_rows<R: Row>(
    filtered: &mut Vec<FilteredRow>,
    rows: &[R],
    columns: &[Column],
    sort: &SortState,
) {
    let active: Vec<(&str, SortDirection)> = sort
        .entries()
        .iter()
        .filter(|e| {
            columns
                .iter()
                .any(|c| c.key == e.column_key && c.sortable)
        })
        .map(|e| (e.column_key.as_str(), e.direction))
        .collect();

    if active.is_empty() {
        return;
    }

    let mut keyed: Vec<(Vec<CellValue>, FilteredRow)> = filtered
        .drain(..)
        .map(|entry| {
            let row = &rows[entry.index];
            let keys = active.iter().map(|(key, _)| row.value(key)).collect();
            (keys, entry)
        })
        .collect();

    // `sort_by` is stable.
    keyed.sort_by(|(a, _), (b, _)| compare_keys(a, b, &active));

    filtered.extend(keyed.into_iter().map(|(_, entry)| entry));
}

fn compare_keys(a: &[CellValue], b: &[CellValue], active: &[(&str, SortDirection)]) -> Ordering {
    for ((x, y), (_, direction)) in a.iter().zip(b).zip(active) {
        let ord = match direction {
            SortDirection::Ascending => x.natural_cmp(y),
            SortDirection::Descending => y.natural_cmp(x),
        };
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone)]
    struct Item {
        id: u32,
        group: &'static str,
        score: Option<f64>,
    }

    impl Row for Item {
        type Id = u32;

        fn id(&self) -> u32 {
            self.id
        }

        fn value(&self, key: &str) -> CellValue {
            match key {
                "group" => self.group.into(),
                "score" => self.score.into(),
                _ => CellValue::Empty,
            }
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { id: 1, group: "b", score: Some(2.0) },
            Item { id: 2, group: "a", score: Some(2.0) },
            Item { id: 3, group: "b", score: None },
            Item { id: 4, group: "a", score: Some(1.0) },
            Item { id: 5, group: "b", score: Some(1.0) },
        ]
    }

    fn columns() -> Vec<Column> {
        vec![Column::text("group", "GROUP"), Column::numeric("score", "SCORE")]
    }

    fn sorted_ids(rows: &[Item], columns: &[Column], sort: &SortState) -> Vec<u32> {
        let mut filtered: Vec<FilteredRow> = (0..rows.len())
            .map(|index| FilteredRow { index, rank: None })
            .collect();
        sort_rows(&mut filtered, rows, columns, sort);
        filtered.iter().map(|f| rows[f.index].id).collect()
    }

    #[test]
    fn test_empty_sort_keeps_order() {
        assert_eq!(sorted_ids(&items(), &columns(), &SortState::new()), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_missing_values_are_lowest() {
        let mut s = SortState::new();
        s.set("score", Some(SortDirection::Ascending));
        assert_eq!(sorted_ids(&items(), &columns(), &s), vec![3, 4, 5, 1, 2]);
        s.set("score", Some(SortDirection::Descending));
        assert_eq!(sorted_ids(&items(), &columns(), &s), vec![1, 2, 4, 5, 3]);
    }

    #[test]
    fn test_descending_is_stable() {
        let mut s = SortState::new();
        s.set("group", Some(SortDirection::Descending));
        // Equal groups keep insertion order, not reversed order.
        assert_eq!(sorted_ids(&items(), &columns(), &s), vec![1, 3, 5, 2, 4]);
    }

    #[test]
    fn test_multi_key_priority() {
        let mut s = SortState::new();
        s.toggle("group", true);
        s.toggle("score", true);
        s.toggle("score", true);
        assert_eq!(
            s.entries().iter().map(|e| e.direction).collect::<Vec<_>>(),
            vec![SortDirection::Ascending, SortDirection::Descending]
        );
        assert_eq!(sorted_ids(&items(), &columns(), &s), vec![2, 4, 1, 5, 3]);
    }

    #[test]
    fn test_single_toggle_replaces_other_keys() {
        let mut s = SortState::new();
        s.toggle("group", true);
        s.toggle("score", false);
        assert_eq!(s.entries().len(), 1);
        assert_eq!(s.direction("score"), Some(SortDirection::Ascending));
        assert_eq!(s.direction("group"), None);
    }

    #[test]
    fn test_multi_toggle_removes_after_descending() {
        let mut s = SortState::new();
        s.toggle("group", true);
        s.toggle("score", true);
        s.toggle("group", true);
        s.toggle("group", true);
        assert_eq!(s.entries().len(), 1);
        assert_eq!(s.entries()[0].column_key, "score");
    }

    #[test]
    fn test_non_sortable_and_unknown_columns_are_skipped() {
        let cols = vec![
            Column::text("group", "GROUP").with_sortable(false),
            Column::numeric("score", "SCORE"),
        ];
        let mut s = SortState::new();
        s.set("group", Some(SortDirection::Ascending));
        s.set("missing", Some(SortDirection::Ascending));
        assert_eq!(sorted_ids(&items(), &cols, &s), vec![1, 2, 3, 4, 5]);
    }
}
