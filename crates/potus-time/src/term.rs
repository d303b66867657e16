//! Term-string parsing.
//!
//! A term string holds a start descriptor, a separator, and an end
//! descriptor, in whichever of the loose formats the source corpus uses:
//!
//! * `"March 4, 1913 - March 4, 1921"` — full dates, spaced separator
//! * `"1789-1797"` — bare years, bare separator
//! * `"1913 - 1921"` — bare years, spaced separator
//! * `"January 20, 2021 - Incumbent"` — open-ended term
//!
//! Parsing is one pipeline: normalize the raw text, split it into two
//! segments, classify each segment independently, then validate the pair.
//! The separator is found by first looking for a hyphen surrounded by
//! whitespace; only when none exists does a bare hyphen count, so hyphens
//! embedded in full date expressions cannot be mistaken for the separator.

use crate::boundary::TermBoundary;
use crate::date::Date;
use crate::month::Month;
use potus_core::errors::{Error, Result};
use potus_core::{Settings, Year};

/// The literal marking an open-ended term in the source corpus.
/// Matched case-insensitively, and legal on the end side only.
pub const OPEN_TERM_MARKER: &str = "Incumbent";

/// A term parsed into its two endpoints.
///
/// The parse keeps each endpoint at the precision the input carried (the
/// [`TermBoundary`] tag); [`year_span`](Self::year_span) and
/// [`date_span`](Self::date_span) are the two output shapings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedTerm {
    start: TermBoundary,
    end: TermBoundary,
    open_ended: bool,
}

impl ParsedTerm {
    /// Parse a raw term string.
    ///
    /// An open-ended term resolves its end to the settings cutoff year
    /// (default [`potus_core::DEFAULT_OPEN_TERM_CUTOFF_YEAR`]), read once
    /// per call.
    ///
    /// # Errors
    /// * [`Error::MalformedTerm`] — no usable separator, not exactly two
    ///   non-empty segments, the open marker on the start side, or an
    ///   inverted range.
    /// * [`Error::DateParse`] — a segment matches no recognized date form
    ///   (`Month D, YYYY`, `YYYY-MM-DD`, or bare `YYYY`).
    pub fn parse(raw: &str) -> Result<Self> {
        let text = normalize(raw);
        let (start_text, end_text) = split_term(&text)?;

        if is_open_marker(start_text) {
            return Err(Error::MalformedTerm(format!(
                "open-tenure marker on the start side: {raw:?}"
            )));
        }
        let start = classify_segment(start_text)?;

        let (end, open_ended) = if is_open_marker(end_text) {
            let cutoff = Settings::instance().open_term_cutoff();
            (TermBoundary::Year(cutoff), true)
        } else {
            (classify_segment(end_text)?, false)
        };

        // end >= start, compared at full precision only when both sides
        // carry it.
        let inverted = match (&start, &end) {
            (TermBoundary::Day(a), TermBoundary::Day(b)) => b < a,
            _ => end.year() < start.year(),
        };
        if inverted {
            return Err(Error::MalformedTerm(format!("inverted range: {raw:?}")));
        }

        Ok(ParsedTerm {
            start,
            end,
            open_ended,
        })
    }

    /// The start endpoint.
    pub fn start(&self) -> TermBoundary {
        self.start
    }

    /// The end endpoint.  For an open-ended term this is the cutoff year.
    pub fn end(&self) -> TermBoundary {
        self.end
    }

    /// Whether the end segment was the open-tenure marker.
    pub fn is_open_ended(&self) -> bool {
        self.open_ended
    }

    /// Both endpoints collapsed to their integer year.
    pub fn year_span(&self) -> (Year, Year) {
        (self.start.year(), self.end.year())
    }

    /// Both endpoints at full precision.
    ///
    /// Year-only endpoints expand to January 1 of their year; see
    /// [`TermBoundary::resolve_date`] for the caveat.
    ///
    /// # Errors
    /// Returns an error if either year falls outside the representable date
    /// range.
    pub fn date_span(&self) -> Result<(Date, Date)> {
        Ok((self.start.resolve_date()?, self.end.resolve_date()?))
    }

    /// The half-open year range `[start_year, end_year)`.
    ///
    /// The events lookup iterates this range; the end year is excluded,
    /// also for open-ended terms resolved to the cutoff year.
    pub fn years(&self) -> std::ops::Range<Year> {
        self.start.year()..self.end.year()
    }
}

// ── Pipeline stages ───────────────────────────────────────────────────────────

/// Normalize raw term text: en dashes become hyphens, non-breaking spaces
/// become plain spaces, whitespace runs collapse to one space.
fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut prev_space = false;
    for ch in raw.chars() {
        let ch = match ch {
            '\u{2013}' => '-',
            '\u{a0}' => ' ',
            c => c,
        };
        if ch.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(ch);
            prev_space = false;
        }
    }
    out.trim().to_string()
}

/// Split normalized term text into its two segments.
///
/// A hyphen surrounded by whitespace wins; a bare hyphen is only a
/// separator when no spaced one exists.
fn split_term(text: &str) -> Result<(&str, &str)> {
    let spaced: Vec<&str> = text.split(" - ").collect();
    let parts: Vec<&str> = match spaced.len() {
        1 => text.split('-').collect(),
        n => {
            if n != 2 {
                return Err(Error::MalformedTerm(format!(
                    "expected one separator, found {}: {text:?}",
                    n - 1
                )));
            }
            spaced
        }
    };
    match parts.as_slice() {
        [start, end] if !start.trim().is_empty() && !end.trim().is_empty() => {
            Ok((start.trim(), end.trim()))
        }
        _ => Err(Error::MalformedTerm(format!(
            "expected two non-empty segments: {text:?}"
        ))),
    }
}

fn is_open_marker(segment: &str) -> bool {
    segment.eq_ignore_ascii_case(OPEN_TERM_MARKER)
}

/// Classify one trimmed segment as a year-only or full-date boundary.
fn classify_segment(segment: &str) -> Result<TermBoundary> {
    if let Some(year) = parse_bare_year(segment) {
        return Ok(TermBoundary::Year(year));
    }
    if let Some((y, m, d)) = parse_iso_date(segment) {
        let date = Date::from_ymd(y, m, d).map_err(|_| Error::DateParse {
            segment: segment.to_string(),
        })?;
        return Ok(TermBoundary::Day(date));
    }
    if let Some((y, m, d)) = parse_written_date(segment) {
        let date = Date::from_ymd(y, m.number(), d).map_err(|_| Error::DateParse {
            segment: segment.to_string(),
        })?;
        return Ok(TermBoundary::Day(date));
    }
    Err(Error::DateParse {
        segment: segment.to_string(),
    })
}

/// A bare 4-digit year, e.g. `"1789"`.
fn parse_bare_year(s: &str) -> Option<Year> {
    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        s.parse().ok()
    } else {
        None
    }
}

/// An ISO date, e.g. `"1913-03-04"`.
fn parse_iso_date(s: &str) -> Option<(Year, u8, u8)> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let year: Year = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let day: u8 = parts[2].parse().ok()?;
    Some((year, month, day))
}

/// A written date, e.g. `"March 4, 1913"` (comma optional).
fn parse_written_date(s: &str) -> Option<(Year, Month, u8)> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    let [month_token, day_token, year_token] = tokens.as_slice() else {
        return None;
    };
    let month = Month::from_name(month_token)?;
    let day: u8 = day_token.trim_end_matches(',').parse().ok()?;
    let year: Year = year_token.parse().ok()?;
    Some((year, month, day))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_dashes_and_spaces() {
        assert_eq!(normalize("1789\u{2013}1797"), "1789-1797");
        assert_eq!(normalize("1913\u{a0}-\u{a0}1921"), "1913 - 1921");
        assert_eq!(normalize("  March  4,   1913 "), "March 4, 1913");
    }

    #[test]
    fn split_prefers_spaced_separator() {
        // The hyphens inside the ISO dates must not be taken as separators.
        let (s, e) = split_term("1913-03-04 - 1921-03-04").unwrap();
        assert_eq!(s, "1913-03-04");
        assert_eq!(e, "1921-03-04");
    }

    #[test]
    fn split_falls_back_to_bare_hyphen() {
        let (s, e) = split_term("1789-1797").unwrap();
        assert_eq!(s, "1789");
        assert_eq!(e, "1797");
    }

    #[test]
    fn split_rejects_garbage() {
        assert!(split_term("not a term").is_err());
        assert!(split_term("1789").is_err());
        assert!(split_term("-1797").is_err());
        assert!(split_term("1789-").is_err());
        assert!(split_term("1789-1793-1797").is_err());
        assert!(split_term("a - b - c").is_err());
    }

    #[test]
    fn classify_forms() {
        assert_eq!(classify_segment("1789").unwrap(), TermBoundary::Year(1789));
        assert_eq!(
            classify_segment("1913-03-04").unwrap(),
            TermBoundary::Day(Date::from_ymd(1913, 3, 4).unwrap())
        );
        assert_eq!(
            classify_segment("March 4, 1913").unwrap(),
            TermBoundary::Day(Date::from_ymd(1913, 3, 4).unwrap())
        );
        // Comma is optional.
        assert_eq!(
            classify_segment("March 4 1913").unwrap(),
            TermBoundary::Day(Date::from_ymd(1913, 3, 4).unwrap())
        );
    }

    #[test]
    fn classify_rejects_unknown_grammar() {
        for bad in ["presidency", "17890", "089", "Smarch 4, 1913", "1913-03"] {
            let err = classify_segment(bad).unwrap_err();
            assert_eq!(
                err,
                Error::DateParse {
                    segment: bad.to_string()
                },
                "expected DateParse for {bad:?}"
            );
        }
    }

    #[test]
    fn marker_is_case_insensitive_and_end_only() {
        let term = ParsedTerm::parse("2020 - INCUMBENT").unwrap();
        assert!(term.is_open_ended());

        let err = ParsedTerm::parse("Incumbent - 2020").unwrap_err();
        assert!(matches!(err, Error::MalformedTerm(_)));
    }

    #[test]
    fn mixed_precision_is_legal() {
        let term = ParsedTerm::parse("March 4, 1913 - 1921").unwrap();
        assert!(!term.start().is_year_only());
        assert!(term.end().is_year_only());
        assert_eq!(term.year_span(), (1913, 1921));
    }

    #[test]
    fn inverted_range_is_malformed() {
        assert!(matches!(
            ParsedTerm::parse("1921 - 1913").unwrap_err(),
            Error::MalformedTerm(_)
        ));
        assert!(matches!(
            ParsedTerm::parse("March 4, 1921 - March 4, 1913").unwrap_err(),
            Error::MalformedTerm(_)
        ));
    }

    #[test]
    fn same_year_span_is_legal() {
        // Mixed precision compares at year level, so a full date against
        // its own bare year is not inverted.
        let term = ParsedTerm::parse("March 4, 1841 - 1841").unwrap();
        assert_eq!(term.year_span(), (1841, 1841));
        assert_eq!(term.years().count(), 0);
    }

    #[test]
    fn en_dash_input() {
        let term = ParsedTerm::parse("1789\u{2013}1797").unwrap();
        assert_eq!(term.year_span(), (1789, 1797));
    }
}
