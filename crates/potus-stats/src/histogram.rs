//! Histogram binning over integer values.
//!
//! Bin edges come from the presentation layer as ascending integers with
//! one label per bin, e.g. edges `[0, 4, 8, 12]` and labels
//! `["1-4", "5-8", "9-12"]`.  The lowest bin is closed on both ends and
//! every other bin is right-closed, so a value of exactly 4 falls in
//! `"1-4"` and a value of exactly 8 falls in `"5-8"`.

use crate::tenure::TenureRecord;
use potus_core::ensure;
use potus_core::errors::{Error, Result};
use potus_core::Year;

/// What to do with a value beyond the last bin edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverflowPolicy {
    /// Fail with [`Error::OutOfRange`].
    #[default]
    Reject,
    /// Count the value in the last bin.
    ClampToLast,
}

/// Ascending integer bin edges with one label per bin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    edges: Vec<Year>,
    labels: Vec<String>,
    overflow: OverflowPolicy,
}

impl Histogram {
    /// Build a histogram from ascending edges and matching labels.
    ///
    /// # Errors
    /// Returns a precondition error if fewer than two edges are given, the
    /// edges are not strictly ascending, or the label count is not
    /// `edges.len() - 1`.
    pub fn new<S: Into<String>>(
        edges: impl Into<Vec<Year>>,
        labels: impl IntoIterator<Item = S>,
    ) -> Result<Self> {
        let edges = edges.into();
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        ensure!(edges.len() >= 2, "at least two bin edges required");
        ensure!(
            edges.windows(2).all(|w| w[0] < w[1]),
            "bin edges must be strictly ascending: {edges:?}"
        );
        ensure!(
            labels.len() == edges.len() - 1,
            "expected {} labels for {} edges, got {}",
            edges.len() - 1,
            edges.len(),
            labels.len()
        );
        Ok(Self {
            edges,
            labels,
            overflow: OverflowPolicy::default(),
        })
    }

    /// Replace the overflow policy (the default rejects).
    pub fn with_overflow(mut self, policy: OverflowPolicy) -> Self {
        self.overflow = policy;
        self
    }

    /// The bin labels, in bin order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Return the bin index for a value.
    ///
    /// The lowest bin covers `[edges[0], edges[1]]`; bin `i > 0` covers
    /// `(edges[i], edges[i+1]]`.
    ///
    /// # Errors
    /// [`Error::OutOfRange`] for a value below the first edge, or beyond the
    /// last edge under [`OverflowPolicy::Reject`].
    pub fn bucket(&self, value: Year) -> Result<usize> {
        let first = self.edges[0];
        if value < first {
            return Err(Error::OutOfRange {
                value,
                limit: first,
            });
        }
        for (i, upper) in self.edges[1..].iter().enumerate() {
            if value <= *upper {
                return Ok(i);
            }
        }
        let last = *self.edges.last().expect("validated non-empty");
        match self.overflow {
            OverflowPolicy::ClampToLast => Ok(self.labels.len() - 1),
            OverflowPolicy::Reject => Err(Error::OutOfRange { value, limit: last }),
        }
    }

    /// Count values per bin, in bin order, zero-count bins included.
    pub fn counts(&self, values: impl IntoIterator<Item = Year>) -> Result<Vec<usize>> {
        let mut counts = vec![0usize; self.labels.len()];
        for value in values {
            counts[self.bucket(value)?] += 1;
        }
        Ok(counts)
    }

    /// Count values per bin, paired with the bin labels.
    pub fn tally(
        &self,
        values: impl IntoIterator<Item = Year>,
    ) -> Result<Vec<(String, usize)>> {
        let counts = self.counts(values)?;
        Ok(self.labels.iter().cloned().zip(counts).collect())
    }
}

/// Bin tenure records by their years in office.
pub fn bin_by_years_in_office(
    histogram: &Histogram,
    records: &[TenureRecord],
) -> Result<Vec<(String, usize)>> {
    histogram.tally(records.iter().map(|r| r.years_in_office))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn years_served() -> Histogram {
        Histogram::new([0, 4, 8, 12], ["1-4", "5-8", "9-12"]).unwrap()
    }

    #[test]
    fn boundary_values() {
        let h = years_served();
        assert_eq!(h.bucket(0).unwrap(), 0); // inclusive lower bound
        assert_eq!(h.bucket(4).unwrap(), 0);
        assert_eq!(h.bucket(5).unwrap(), 1);
        assert_eq!(h.bucket(8).unwrap(), 1);
        assert_eq!(h.bucket(12).unwrap(), 2);
    }

    #[test]
    fn binning_is_pure() {
        let h = years_served();
        for _ in 0..2 {
            assert_eq!(h.bucket(8).unwrap(), 1);
        }
    }

    #[test]
    fn zero_count_bins_are_kept() {
        let h = years_served();
        let tally = h.tally([4, 8, 8]).unwrap();
        assert_eq!(
            tally,
            vec![
                ("1-4".to_string(), 1),
                ("5-8".to_string(), 2),
                ("9-12".to_string(), 0),
            ]
        );
    }

    #[test]
    fn overflow_rejects_by_default() {
        let h = years_served();
        assert_eq!(
            h.bucket(13).unwrap_err(),
            Error::OutOfRange {
                value: 13,
                limit: 12
            }
        );
        assert!(h.counts([1, 13]).is_err());
    }

    #[test]
    fn overflow_clamps_when_asked() {
        let h = years_served().with_overflow(OverflowPolicy::ClampToLast);
        assert_eq!(h.bucket(13).unwrap(), 2);
        assert_eq!(h.counts([13, 40]).unwrap(), vec![0, 0, 2]);
    }

    #[test]
    fn underflow_always_rejects() {
        let h = years_served().with_overflow(OverflowPolicy::ClampToLast);
        assert_eq!(
            h.bucket(-1).unwrap_err(),
            Error::OutOfRange {
                value: -1,
                limit: 0
            }
        );
    }

    #[test]
    fn structural_validation() {
        assert!(Histogram::new([0], ["a"]).is_err());
        assert!(Histogram::new([0, 4, 4], ["a", "b"]).is_err());
        assert!(Histogram::new([4, 0], ["a"]).is_err());
        assert!(Histogram::new([0, 4, 8], ["a"]).is_err());
    }
}
