//! Cell values and their natural ordering.
//!
//! Every column of a row yields a [`CellValue`]. Sorting uses
//! [`CellValue::natural_cmp`]: numbers compare numerically, text
//! lexicographically, dates chronologically. Missing values sort as the lowest
//! value of all, so they lead an ascending sort and trail a descending one.

use chrono::{NaiveDateTime, NaiveTime};
use std::cmp::Ordering;
use std::fmt;

/// A single cell value produced by [`crate::grid::Row::value`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// The row has no value for this column.
    #[default]
    Empty,
    /// Free text.
    Text(String),
    /// A numeric value.
    Number(f64),
    /// A timestamp.
    Date(NaiveDateTime),
}

impl CellValue {
    /// Returns true for [`CellValue::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// The numeric value, if this cell holds one.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    // Empty < Number < Date < Text when kinds differ.
    fn kind_rank(&self) -> u8 {
        match self {
            CellValue::Empty => 0,
            CellValue::Number(_) => 1,
            CellValue::Date(_) => 2,
            CellValue::Text(_) => 3,
        }
    }

    /// Total order used for sorting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bubbletea_datagrid::value::CellValue;
    /// use std::cmp::Ordering;
    ///
    /// assert_eq!(CellValue::Number(2.0).natural_cmp(&CellValue::Number(10.0)), Ordering::Less);
    /// assert_eq!(CellValue::from("b").natural_cmp(&CellValue::from("a")), Ordering::Greater);
    /// assert_eq!(CellValue::Empty.natural_cmp(&CellValue::Number(-1e9)), Ordering::Less);
    /// ```
    pub fn natural_cmp(&self, other: &CellValue) -> Ordering {
        match (self, other) {
            (CellValue::Number(a), CellValue::Number(b)) => a.total_cmp(b),
            (CellValue::Text(a), CellValue::Text(b)) => a.cmp(b),
            (CellValue::Date(a), CellValue::Date(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Date(d) => {
                if d.time() == NaiveTime::MIN {
                    write!(f, "{}", d.format("%Y-%m-%d"))
                } else {
                    write!(f, "{}", d.format("%Y-%m-%d %H:%M:%S"))
                }
            }
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        CellValue::Number(n)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Number(n as f64)
    }
}

impl From<u32> for CellValue {
    fn from(n: u32) -> Self {
        CellValue::Number(f64::from(n))
    }
}

impl From<NaiveDateTime> for CellValue {
    fn from(d: NaiveDateTime) -> Self {
        CellValue::Date(d)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> CellValue {
        CellValue::Date(
            NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_numbers_compare_numerically_not_lexically() {
        assert_eq!(
            CellValue::Number(9.0).natural_cmp(&CellValue::Number(10.0)),
            Ordering::Less
        );
    }

    #[test]
    fn test_dates_compare_chronologically() {
        assert_eq!(date(2023, 1, 2).natural_cmp(&date(2022, 12, 31)), Ordering::Greater);
    }

    #[test]
    fn test_empty_is_lowest() {
        for v in [CellValue::Number(f64::MIN), "".into(), date(1970, 1, 1)] {
            assert_eq!(CellValue::Empty.natural_cmp(&v), Ordering::Less);
            assert_eq!(v.natural_cmp(&CellValue::Empty), Ordering::Greater);
        }
        assert_eq!(CellValue::Empty.natural_cmp(&CellValue::Empty), Ordering::Equal);
    }

    #[test]
    fn test_display() {
        assert_eq!(CellValue::Number(20.0).to_string(), "20");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
        assert_eq!(date(2023, 3, 4).to_string(), "2023-03-04");
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::from(None::<&str>), CellValue::Empty);
    }
}
