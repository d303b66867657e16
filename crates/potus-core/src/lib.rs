//! # potus-core
//!
//! Error types, shared aliases, and settings for the potus workspace.
//!
//! This crate provides the foundational building blocks shared across the
//! other crates in the workspace – the error hierarchy, the `Year` alias,
//! and the process-wide `Settings` singleton.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Process-wide settings (open-tenure cutoff year).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Calendar year.  Signed so that year arithmetic (tenure = end − start)
/// never needs a cast.
pub type Year = i32;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{Settings, DEFAULT_OPEN_TERM_CUTOFF_YEAR};
