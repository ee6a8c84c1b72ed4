//! Column descriptors.
//!
//! A [`Column`] declares how one field of a row is rendered, sorted and
//! filtered. The value kind is part of the declaration ([`ColumnKind`]), so
//! the grid never infers "numeric" from sampled data.

use crate::filter::{FilterEvaluator, Subject};
use crate::value::CellValue;
use std::fmt;
use std::sync::Arc;

/// Turns a cell value into display text for a [`ColumnKind::Custom`] column.
#[derive(Clone)]
pub struct CellRenderer(Arc<dyn Fn(&CellValue) -> String + Send + Sync>);

impl CellRenderer {
    /// Wraps a rendering function.
    pub fn new(render: impl Fn(&CellValue) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    /// Renders a value.
    pub fn render(&self, value: &CellValue) -> String {
        (self.0)(value)
    }
}

impl fmt::Debug for CellRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CellRenderer(..)")
    }
}

/// What a column holds and how its cells are filtered.
#[derive(Debug, Clone)]
pub enum ColumnKind {
    /// Text; filtered by substring or fuzzy match.
    Text,
    /// Numbers; filtered by inclusive `[min, max]` range.
    Numeric,
    /// Timestamps; filtered as text against their display form.
    Date,
    /// Rendered by a custom function; filtered as text against the rendered form.
    Custom(CellRenderer),
}

impl ColumnKind {
    /// Returns true for [`ColumnKind::Numeric`].
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }
}

/// Static description of one grid column.
///
/// ```rust
/// use bubbletea_datagrid::grid::Column;
/// use bubbletea_datagrid::value::CellValue;
///
/// let phone = Column::custom("phone", "PHONE NUMBER", |v: &CellValue| {
///     let digits = v.to_string();
///     if digits.len() == 10 {
///         format!("({}){}-{}", &digits[..3], &digits[3..6], &digits[6..])
///     } else {
///         digits
///     }
/// });
/// assert_eq!(phone.render(&CellValue::from("5551234567")), "(555)123-4567");
///
/// let id = Column::numeric("id", "ID").with_filterable(false);
/// assert!(id.sortable && !id.filterable);
/// ```
#[derive(Debug, Clone)]
pub struct Column {
    /// Key passed to [`crate::grid::Row::value`]. Unique within a grid.
    pub key: String,
    /// Header label.
    pub header: String,
    /// Value kind and rendering.
    pub kind: ColumnKind,
    /// Whether the column can be sorted.
    pub sortable: bool,
    /// Whether the column takes part in column and global filtering.
    pub filterable: bool,
    /// Fixed display width; sized to content when `None`.
    pub width: Option<usize>,
    evaluator: Option<Arc<dyn FilterEvaluator>>,
}

impl Column {
    /// Creates a column of the given kind, sortable and filterable.
    pub fn new(key: impl Into<String>, header: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            key: key.into(),
            header: header.into(),
            kind,
            sortable: true,
            filterable: true,
            width: None,
            evaluator: None,
        }
    }

    /// A text column.
    pub fn text(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self::new(key, header, ColumnKind::Text)
    }

    /// A numeric column.
    pub fn numeric(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self::new(key, header, ColumnKind::Numeric)
    }

    /// A date column.
    pub fn date(key: impl Into<String>, header: impl Into<String>) -> Self {
        Self::new(key, header, ColumnKind::Date)
    }

    /// A column rendered by `render`.
    pub fn custom(
        key: impl Into<String>,
        header: impl Into<String>,
        render: impl Fn(&CellValue) -> String + Send + Sync + 'static,
    ) -> Self {
        Self::new(key, header, ColumnKind::Custom(CellRenderer::new(render)))
    }

    /// Sets whether the column can be sorted (builder pattern).
    pub fn with_sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets whether the column can be filtered (builder pattern).
    pub fn with_filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Fixes the display width (builder pattern).
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = Some(width);
        self
    }

    /// Uses `evaluator` for this column's filter instead of the grid default (builder pattern).
    pub fn with_evaluator(mut self, evaluator: Arc<dyn FilterEvaluator>) -> Self {
        self.evaluator = Some(evaluator);
        self
    }

    /// The column's own filter evaluator, if it overrides the grid default.
    pub fn evaluator(&self) -> Option<&Arc<dyn FilterEvaluator>> {
        self.evaluator.as_ref()
    }

    /// Display text for a cell of this column.
    pub fn render(&self, value: &CellValue) -> String {
        match &self.kind {
            ColumnKind::Custom(renderer) => renderer.render(value),
            _ => value.to_string(),
        }
    }

    /// How a cell of this column is presented to a filter evaluator.
    pub fn subject<'a>(&self, value: &CellValue, rendered: &'a str) -> Subject<'a> {
        match self.kind {
            ColumnKind::Numeric => Subject::Numeric(value.as_number()),
            _ => Subject::Text(rendered),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::RangeTextEvaluator;

    #[test]
    fn test_defaults() {
        let c = Column::text("name", "NAME");
        assert!(c.sortable);
        assert!(c.filterable);
        assert!(c.width.is_none());
        assert!(c.evaluator().is_none());
        assert!(!c.kind.is_numeric());
        assert!(Column::numeric("cost", "COST").kind.is_numeric());
    }

    #[test]
    fn test_subject_follows_declared_kind() {
        let cost = Column::numeric("cost", "COST");
        assert_eq!(cost.subject(&CellValue::Number(3.0), "3"), Subject::Numeric(Some(3.0)));
        // A missing value in a numeric column is still numeric.
        assert_eq!(cost.subject(&CellValue::Empty, ""), Subject::Numeric(None));

        let name = Column::text("name", "NAME");
        assert_eq!(name.subject(&CellValue::from("Bob"), "Bob"), Subject::Text("Bob"));
    }

    #[test]
    fn test_custom_render() {
        let c = Column::custom("role", "ROLE", |v| v.to_string().to_uppercase());
        assert_eq!(c.render(&CellValue::from("admin")), "ADMIN");
        assert_eq!(Column::text("x", "X").render(&CellValue::Number(1.5)), "1.5");
    }

    #[test]
    fn test_with_evaluator() {
        let c = Column::text("email", "EMAIL")
            .with_evaluator(Arc::new(RangeTextEvaluator::new().with_case_sensitive(true)));
        assert!(c.evaluator().is_some());
    }
}
