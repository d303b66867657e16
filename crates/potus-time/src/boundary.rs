//! `TermBoundary` — one endpoint of a term, at year or full-date precision.
//!
//! The source data mixes precisions: an endpoint may be a full calendar
//! date ("March 4, 1913") or a bare year ("1789").  The tag keeps the two
//! apart so that a year-only endpoint never silently acquires a fabricated
//! month and day: collapsing to a year is lossless, while expanding to a
//! date is a separate, documented approximation.

use crate::date::Date;
use potus_core::errors::Result;
use potus_core::Year;

/// One endpoint (start or end) of a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TermBoundary {
    /// A year-only endpoint, e.g. from `"1789-1797"`.
    Year(Year),
    /// A full calendar date, e.g. from `"March 4, 1913"`.
    Day(Date),
}

impl TermBoundary {
    /// Return the year component, whatever the precision.
    pub fn year(&self) -> Year {
        match self {
            TermBoundary::Year(y) => *y,
            TermBoundary::Day(d) => d.year(),
        }
    }

    /// Return `true` if this endpoint carries no month/day precision.
    pub fn is_year_only(&self) -> bool {
        matches!(self, TermBoundary::Year(_))
    }

    /// Expand to a full calendar date.
    ///
    /// A year-only endpoint expands to **January 1** of its year.  That day
    /// is an approximation; the source records no true day for such
    /// endpoints.  Callers needing real precision should branch on
    /// [`is_year_only`](Self::is_year_only) instead.
    ///
    /// # Errors
    /// Returns an error if the year falls outside the representable date
    /// range (1776–2399).
    pub fn resolve_date(&self) -> Result<Date> {
        match self {
            TermBoundary::Year(y) => Date::from_ymd(*y, 1, 1),
            TermBoundary::Day(d) => Ok(*d),
        }
    }
}

impl std::fmt::Display for TermBoundary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermBoundary::Year(y) => write!(f, "{y}"),
            TermBoundary::Day(d) => write!(f, "{d}"),
        }
    }
}
