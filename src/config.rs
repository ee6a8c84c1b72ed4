//! Grid configuration.
//!
//! [`GridConfig`] collects the knobs that are fixed when a grid is built:
//! initial page size, pagination mode, debounce delay for typed filter input,
//! text filter case policy and the fuzzy acceptance threshold.
//!
//! ```rust
//! use bubbletea_datagrid::config::GridConfig;
//! use bubbletea_datagrid::paginator::PaginationMode;
//! use std::time::Duration;
//!
//! let config = GridConfig::default()
//!     .with_page_size(50)
//!     .with_pagination(PaginationMode::ServerDelegated)
//!     .with_debounce(Duration::from_millis(250));
//! assert!(config.validate().is_ok());
//! ```

use crate::debounce::DEFAULT_DELAY;
use crate::error::{GridError, Result};
use crate::filter::DEFAULT_FUZZY_THRESHOLD;
use crate::paginator::{PaginationMode, DEFAULT_PAGE_SIZE, PAGE_SIZES};
use std::time::Duration;

/// Construction-time settings for a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridConfig {
    /// Initial rows per page. Must be one of [`PAGE_SIZES`].
    pub page_size: usize,
    /// Client-local slicing or server-delegated paging. Fixed for the grid's lifetime.
    pub pagination: PaginationMode,
    /// How long typed filter input must be stable before it is applied.
    pub debounce: Duration,
    /// Whether per-column text filters match case-sensitively.
    pub case_sensitive_text: bool,
    /// Global fuzzy matches pass only with a score above this value.
    pub fuzzy_threshold: i64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            pagination: PaginationMode::ClientLocal,
            debounce: DEFAULT_DELAY,
            case_sensitive_text: false,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

impl GridConfig {
    /// Sets the initial page size (builder pattern).
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the pagination mode (builder pattern).
    pub fn with_pagination(mut self, mode: PaginationMode) -> Self {
        self.pagination = mode;
        self
    }

    /// Sets the debounce delay for filter input (builder pattern).
    pub fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }

    /// Makes per-column text filters case-sensitive (builder pattern).
    pub fn with_case_sensitive_text(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive_text = case_sensitive;
        self
    }

    /// Sets the fuzzy acceptance threshold (builder pattern).
    pub fn with_fuzzy_threshold(mut self, threshold: i64) -> Self {
        self.fuzzy_threshold = threshold;
        self
    }

    /// Checks that the configuration can back a grid.
    pub fn validate(&self) -> Result<()> {
        if !PAGE_SIZES.contains(&self.page_size) {
            return Err(GridError::UnsupportedPageSize(self.page_size));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GridConfig::default();
        assert_eq!(config.page_size, 20);
        assert_eq!(config.pagination, PaginationMode::ClientLocal);
        assert_eq!(config.debounce, Duration::from_millis(500));
        assert!(!config.case_sensitive_text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_unsupported_page_size() {
        let config = GridConfig::default().with_page_size(15);
        assert_eq!(config.validate(), Err(GridError::UnsupportedPageSize(15)));
    }
}
