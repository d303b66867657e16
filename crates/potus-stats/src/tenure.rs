//! Tenure aggregation.
//!
//! Folds `(name, term)` records through the term parser and derives each
//! record's years in office.  A record whose term fails to parse is skipped,
//! not fatal: the batch tolerates bad rows, and every skip is kept in the
//! report (and mirrored as a `tracing` warning) so data quality stays
//! auditable.

use potus_core::errors::Error;
use potus_core::Year;
use potus_time::ParsedTerm;

/// One input record, as produced by the scraping collaborator.
///
/// Only `name` and `term` matter here; no other field is validated.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermRecord {
    /// Display name, carried through for downstream correlation.
    pub name: String,
    /// Raw term string, e.g. `"1789-1797"`.
    pub term: String,
}

impl TermRecord {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, term: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            term: term.into(),
        }
    }
}

/// One record annotated with its parsed span and tenure.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TenureRecord {
    /// Display name from the input record.
    pub name: String,
    /// Start year of the term.
    pub start: Year,
    /// End year of the term (the cutoff year for open-ended terms).
    pub end: Year,
    /// `end - start`.
    pub years_in_office: Year,
}

/// A record excluded from aggregation, with the reason.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedTerm {
    /// Display name from the input record.
    pub name: String,
    /// The raw term string that failed to parse.
    pub term: String,
    /// The parse error.
    pub reason: Error,
}

/// Result of one aggregation pass.
///
/// `records` preserves input order; downstream charting correlates by
/// position and name, not by sort order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TenureReport {
    /// Successfully parsed records, in input order.
    pub records: Vec<TenureRecord>,
    /// Skipped records, in input order.
    pub skipped: Vec<SkippedTerm>,
}

/// Compute per-record tenure durations.
///
/// Each input term is parsed fresh; nothing is cached between passes.
/// Parse failures skip the record and are reported in the result rather
/// than aborting the batch.
pub fn compute_durations<'a, I>(records: I) -> TenureReport
where
    I: IntoIterator<Item = &'a TermRecord>,
{
    let mut report = TenureReport::default();
    for record in records {
        match ParsedTerm::parse(&record.term) {
            Ok(term) => {
                let (start, end) = term.year_span();
                report.records.push(TenureRecord {
                    name: record.name.clone(),
                    start,
                    end,
                    years_in_office: end - start,
                });
            }
            Err(reason) => {
                tracing::warn!(
                    target: "potus_stats",
                    name = %record.name,
                    term = %record.term,
                    error = %reason,
                    "skipping record with unparseable term"
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
