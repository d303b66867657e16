//! # potus-time
//!
//! Calendar dates, term boundaries, and the term-string parser.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `TermBoundary` — one endpoint of a term.
pub mod boundary;

/// `Date` type.
pub mod date;

/// `Month` — month-of-year enum.
pub mod month;

/// Term-string parsing.
pub mod term;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use boundary::TermBoundary;
pub use date::Date;
pub use month::Month;
pub use term::{ParsedTerm, OPEN_TERM_MARKER};
