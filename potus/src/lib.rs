//! # potus
//!
//! Term-string parsing and tenure statistics for U.S. presidential data.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `potus-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! potus = "0.1"
//! ```
//!
//! ```rust
//! use potus::stats::{compute_durations, TermRecord};
//! use potus::time::ParsedTerm;
//!
//! let term = ParsedTerm::parse("March 4, 1913 - March 4, 1921")?;
//! assert_eq!(term.year_span(), (1913, 1921));
//!
//! let records = [TermRecord::new("Abraham Lincoln", "1861-1865")];
//! let report = compute_durations(&records);
//! assert_eq!(report.records[0].years_in_office, 4);
//! # Ok::<(), potus::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types, shared aliases, and settings.
pub use potus_core as core;

/// Calendar dates, term boundaries, and the term-string parser.
pub use potus_time as time;

/// Tenure aggregation, histogram binning, and timeline spans.
pub use potus_stats as stats;
