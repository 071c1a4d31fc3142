//! Pattern detection via threshold cross-correlation
//!
//! Finds where a known sample pattern (an advertisement jingle, a station
//! ident) occurs inside a longer recording. The scan is a raw, un-normalized
//! cross-correlation against the pattern's own energy: a window matches when
//! its correlation with the pattern reaches 95% of `Σ pattern[j]²`. Because
//! there is no normalization, detection is scale-sensitive by design — a
//! quieter copy of the pattern will not match.
//!
//! Matches are selected greedily left to right and never overlap: after a
//! match the scan resumes one past the matched window.

use log::debug;

use crate::error::{Result, TrackError};
use crate::segment::Sample;

/// Default match-acceptance bound: 95% of the pattern's self-energy
pub const DETECTION_THRESHOLD: f64 = 0.95;

/// A detected occurrence of the pattern
///
/// `start` and `end` are 0-based sample indices into the scanned timeline;
/// `end` is inclusive, so a match of an `m`-sample pattern at `i` is
/// `Occurrence { start: i, end: i + m - 1 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    pub start: usize,
    pub end: usize,
}

/// Cross-correlation pattern scanner
#[derive(Debug, Clone)]
pub struct PatternDetector {
    /// Fraction of the pattern self-energy required to accept a match
    threshold_ratio: f64,
}

impl Default for PatternDetector {
    fn default() -> Self {
        Self {
            threshold_ratio: DETECTION_THRESHOLD,
        }
    }
}

impl PatternDetector {
    /// Create a detector with the default 95% threshold
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a detector with a custom threshold ratio
    ///
    /// `ratio` is the fraction of the pattern's self-energy a window must
    /// reach; 1.0 accepts only energy-exact windows, lower values are more
    /// permissive.
    pub fn with_threshold(ratio: f64) -> Self {
        Self {
            threshold_ratio: ratio,
        }
    }

    /// Scan `target` for non-overlapping occurrences of `pattern`
    ///
    /// Correlation sums accumulate in `f64`, so realistic 16-bit magnitudes
    /// cannot overflow at any tested pattern length. A target shorter than
    /// the pattern yields an empty result, never an error.
    ///
    /// # Errors
    /// [`TrackError::EmptyPattern`] — an empty pattern has zero self-energy
    /// and would trivially match at every position, so it is rejected
    /// rather than reproducing that degenerate result.
    pub fn identify(&self, target: &[Sample], pattern: &[Sample]) -> Result<Vec<Occurrence>> {
        if pattern.is_empty() {
            return Err(TrackError::EmptyPattern);
        }
        let m = pattern.len();
        if target.len() < m {
            return Ok(Vec::new());
        }

        let auto_ref: f64 = pattern.iter().map(|&p| p as f64 * p as f64).sum();
        let threshold = self.threshold_ratio * auto_ref;
        debug!(
            "identify: pattern len {}, self-energy {:.1}, threshold {:.1}",
            m, auto_ref, threshold
        );

        let mut occurrences = Vec::new();
        let mut i = 0;
        while i <= target.len() - m {
            let corr: f64 = target[i..i + m]
                .iter()
                .zip(pattern)
                .map(|(&t, &p)| t as f64 * p as f64)
                .sum();

            if corr >= threshold {
                occurrences.push(Occurrence {
                    start: i,
                    end: i + m - 1,
                });
                // Matches never overlap: skip the whole matched window
                i += m;
            } else {
                i += 1;
            }
        }

        debug!("identify: {} occurrence(s)", occurrences.len());
        Ok(occurrences)
    }
}
