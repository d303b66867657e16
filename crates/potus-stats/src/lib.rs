//! # potus-stats
//!
//! Tenure aggregation, histogram binning, and timeline spans.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Histogram binning over integer values.
pub mod histogram;

/// Tenure aggregation.
pub mod tenure;

/// Timeline spans.
pub mod timeline;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use histogram::{bin_by_years_in_office, Histogram, OverflowPolicy};
pub use tenure::{compute_durations, SkippedTerm, TenureRecord, TenureReport, TermRecord};
pub use timeline::{term_spans, TermSpan, TimelineReport};
