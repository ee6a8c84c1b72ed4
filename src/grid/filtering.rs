//! The derivation pipeline (column filters, global filter, sort, pagination)
//! and column facets.

use super::model::Model;
use super::sorting::sort_rows;
use super::types::{FilteredRow, Row};
use crate::error::Result;
use crate::filter::FilterValue;
use std::collections::HashSet;

impl<R: Row> Model<R> {
    /// Recomputes the filtered, ranked and sorted row list, then clamps the page.
    pub(super) fn refresh(&mut self) {
        let query = self.global_filter.as_str();
        let filtered: Vec<FilteredRow> = self
            .rows
            .iter()
            .enumerate()
            .filter(|(_, row)| self.passes_column_filters(row, None))
            .filter_map(|(index, row)| {
                if query.is_empty() {
                    return Some(FilteredRow { index, rank: None });
                }
                self.global_rank(row, query)
                    .map(|rank| FilteredRow { index, rank: Some(rank) })
            })
            .collect();
        self.filtered = filtered;

        sort_rows(&mut self.filtered, &self.rows, &self.columns, &self.sort);
        self.paginator.set_total_items(self.filtered.len());

        log::debug!(
            "grid {}: {} of {} rows pass filters, page {}",
            self.id,
            self.filtered.len(),
            self.rows.len(),
            self.paginator.page()
        );
    }

    // Every active column filter, except the one on `skip`, accepts the row.
    fn passes_column_filters(&self, row: &R, skip: Option<&str>) -> bool {
        self.column_filters.iter().all(|(key, filter)| {
            if skip == Some(key.as_str()) {
                return true;
            }
            let Some(column) = self.column(key) else {
                return true;
            };
            if !column.filterable {
                return true;
            }
            let value = row.value(key);
            let rendered = column.render(&value);
            let evaluator = column.evaluator().unwrap_or(&self.column_evaluator);
            evaluator.evaluate(column.subject(&value, &rendered), filter)
        })
    }

    // Best global score over the row's filterable columns, None if no column matches.
    fn global_rank(&self, row: &R, query: &str) -> Option<i64> {
        let filter = FilterValue::Text(query.to_string());
        self.columns
            .iter()
            .filter(|c| c.filterable)
            .filter_map(|column| {
                let value = row.value(&column.key);
                let rendered = column.render(&value);
                self.global_evaluator
                    .score(column.subject(&value, &rendered), &filter)
            })
            .max()
    }

    // Rows narrowed by everything except the filter on `key`.
    fn faceted_rows<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a R> + 'a {
        let query = self.global_filter.as_str();
        self.rows.iter().filter(move |row| {
            self.passes_column_filters(row, Some(key))
                && (query.is_empty() || self.global_rank(row, query).is_some())
        })
    }

    /// Number of distinct display values of a column among rows that pass
    /// every other filter.
    pub fn unique_value_count(&self, key: &str) -> Result<usize> {
        let column = self.require_column(key)?;
        let distinct: HashSet<String> = self
            .faceted_rows(key)
            .map(|row| column.render(&row.value(key)))
            .collect();
        Ok(distinct.len())
    }

    /// Smallest and largest number of a column among rows that pass every
    /// other filter; `None` when there are no numbers.
    pub fn min_max(&self, key: &str) -> Result<Option<(f64, f64)>> {
        self.require_column(key)?;
        let bounds = self
            .faceted_rows(key)
            .filter_map(|row| row.value(key).as_number())
            .fold(None, |acc: Option<(f64, f64)>, v| match acc {
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
                None => Some((v, v)),
            });
        Ok(bounds)
    }
}
