//! Process-wide settings.
//!
//! [`Settings`] holds the **open-tenure cutoff year** — the year an
//! open-ended ("Incumbent") term resolves to.  It is a process-wide
//! singleton accessed via a `std::sync::OnceLock`.
//!
//! Thread safety: the cutoff year is stored behind a `Mutex` so that it can
//! be changed from any thread.  Each test that changes the cutoff should
//! restore it when done.

use crate::Year;
use std::sync::{Mutex, OnceLock};

/// The default cutoff year for open-ended terms.
///
/// This is a frozen policy value, not "the current year": it was chosen
/// when the source data was captured and will expire as the calendar
/// advances past it.  Override it at runtime through
/// [`Settings::set_open_term_cutoff`] rather than editing this constant.
pub const DEFAULT_OPEN_TERM_CUTOFF_YEAR: Year = 2026;

/// Process-wide settings used by the potus workspace.
///
/// Currently the only setting is the open-tenure cutoff year.  The term
/// parser reads it once per parse; aggregate passes therefore see a single
/// consistent value unless a caller changes it mid-batch.
pub struct Settings {
    /// The configured cutoff year, or `None` for the default.
    open_term_cutoff: Mutex<Option<Year>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            open_term_cutoff: Mutex::new(None),
        })
    }

    /// Return the cutoff year an open-ended term resolves to.
    ///
    /// Defaults to [`DEFAULT_OPEN_TERM_CUTOFF_YEAR`] unless overridden.
    pub fn open_term_cutoff(&self) -> Year {
        self.open_term_cutoff
            .lock()
            .expect("Settings mutex poisoned")
            .unwrap_or(DEFAULT_OPEN_TERM_CUTOFF_YEAR)
    }

    /// Override the cutoff year for open-ended terms.
    pub fn set_open_term_cutoff(&self, year: Year) {
        *self
            .open_term_cutoff
            .lock()
            .expect("Settings mutex poisoned") = Some(year);
    }

    /// Clear any override, restoring [`DEFAULT_OPEN_TERM_CUTOFF_YEAR`].
    pub fn reset_open_term_cutoff(&self) {
        *self
            .open_term_cutoff
            .lock()
            .expect("Settings mutex poisoned") = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test: the singleton is shared state, and parallel test threads
    // would otherwise observe each other's overrides.
    #[test]
    fn default_override_reset() {
        let settings = Settings::instance();
        assert_eq!(settings.open_term_cutoff(), DEFAULT_OPEN_TERM_CUTOFF_YEAR);
        settings.set_open_term_cutoff(2030);
        assert_eq!(settings.open_term_cutoff(), 2030);
        settings.reset_open_term_cutoff();
        assert_eq!(settings.open_term_cutoff(), DEFAULT_OPEN_TERM_CUTOFF_YEAR);
    }
}
