//! Timeline spans.
//!
//! Expands each record's term to full-date precision for Gantt-style
//! timeline rendering.  Year-only endpoints expand to January 1 of their
//! year, so a span derived from `"1789-1797"` is an approximation at both
//! ends; precision-aware consumers should go through
//! [`potus_time::ParsedTerm`] directly and branch on the boundary tag.

use crate::tenure::{SkippedTerm, TermRecord};
use potus_time::{Date, ParsedTerm};

/// One term at full-date precision.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermSpan {
    /// Display name from the input record.
    pub name: String,
    /// Start of the term.
    pub start: Date,
    /// End of the term (January 1 of the cutoff year for open-ended terms).
    pub end: Date,
}

impl TermSpan {
    /// Span length in calendar days.
    pub fn days(&self) -> i32 {
        self.end - self.start
    }
}

/// Result of one timeline pass.  Order follows the input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimelineReport {
    /// Successfully expanded spans, in input order.
    pub spans: Vec<TermSpan>,
    /// Skipped records, in input order.
    pub skipped: Vec<SkippedTerm>,
}

/// Expand records to full-date spans, skipping unparseable rows.
///
/// Same tolerance as [`crate::tenure::compute_durations`]: a record whose
/// term cannot be parsed, or whose year cannot be expressed as a calendar
/// date, is reported and skipped, never fatal.
pub fn term_spans<'a, I>(records: I) -> TimelineReport
where
    I: IntoIterator<Item = &'a TermRecord>,
{
    let mut report = TimelineReport::default();
    for record in records {
        let expanded = ParsedTerm::parse(&record.term).and_then(|term| term.date_span());
        match expanded {
            Ok((start, end)) => {
                report.spans.push(TermSpan {
                    name: record.name.clone(),
                    start,
                    end,
                });
            }
            Err(reason) => {
                tracing::warn!(
                    target: "potus_stats",
                    name = %record.name,
                    term = %record.term,
                    error = %reason,
                    "skipping record without a datable term"
                );
                report.skipped.push(SkippedTerm {
                    name: record.name.clone(),
                    term: record.term.clone(),
                    reason,
                });
            }
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spans_mix_precisions() {
        let records = [
            TermRecord::new("Woodrow Wilson", "March 4, 1913 - March 4, 1921"),
            TermRecord::new("George Washington", "1789-1797"),
        ];
        let report = term_spans(&records);
        assert!(report.skipped.is_empty());

        let wilson = &report.spans[0];
        assert_eq!(wilson.start, Date::from_ymd(1913, 3, 4).unwrap());
        assert_eq!(wilson.end, Date::from_ymd(1921, 3, 4).unwrap());

        let washington = &report.spans[1];
        assert_eq!(washington.start, Date::from_ymd(1789, 1, 1).unwrap());
        assert_eq!(washington.end, Date::from_ymd(1797, 1, 1).unwrap());
    }

    #[test]
    fn span_length_in_days() {
        let records = [TermRecord::new("Woodrow Wilson", "March 4, 1913 - March 4, 1921")];
        let report = term_spans(&records);
        // Two leap days (1916, 1920) inside the span.
        assert_eq!(report.spans[0].days(), 8 * 365 + 2);
    }

    #[test]
    fn undatable_year_is_skipped() {
        // Parses as a year pair but 1492 is below the calendar range.
        let records = [
            TermRecord::new("Christopher Columbus", "1492-1500"),
            TermRecord::new("Abraham Lincoln", "1861-1865"),
        ];
        let report = term_spans(&records);
        assert_eq!(report.spans.len(), 1);
        assert_eq!(report.spans[0].name, "Abraham Lincoln");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "Christopher Columbus");
    }
}
